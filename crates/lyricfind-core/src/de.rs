//! Lenient field decoders for loosely shaped provider JSON.
//!
//! All helpers accept `null` and fall back to the field's default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Image host that album cover paths are relative to.
pub const COVER_ART_BASE: &str = "http://images.lyricfind.com/images/";

/// Artist display name. The provider sends `{"name": ...}`; serialized models
/// carry the plain string.
pub fn artist_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => name,
        Value::Object(map) => map
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    })
}

/// A string field the provider sometimes sends as a number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// An integer field. Numeric strings are parsed; anything else is 0.
pub fn int_or_default<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

/// A float field. Numeric strings are parsed; anything else is 0.0.
pub fn float_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

/// Any other field: `null` or a value of the wrong shape gives `T::default()`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Expands a raw cover asset path into an image URL.
pub fn cover_art_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let path = string_or_number(deserializer)?;
    Ok(expand_cover_art(&path))
}

pub fn expand_cover_art(path: &str) -> String {
    if path.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{COVER_ART_BASE}{}", path.trim_start_matches('/'))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "artist_name")]
        artist: String,
        #[serde(default, deserialize_with = "string_or_number")]
        millis: String,
        #[serde(default, deserialize_with = "cover_art_url")]
        cover: String,
        #[serde(default, deserialize_with = "int_or_default")]
        year: i64,
        #[serde(default, deserialize_with = "float_or_default")]
        score: f64,
        #[serde(default, deserialize_with = "or_default")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "or_default")]
        flag: bool,
    }

    #[test]
    fn test_artist_name_shapes() {
        let a: Probe = serde_json::from_value(json!({"artist": {"name": "milet"}})).unwrap();
        assert_eq!(a.artist, "milet");
        let b: Probe = serde_json::from_value(json!({"artist": "milet"})).unwrap();
        assert_eq!(b.artist, "milet");
        let c: Probe = serde_json::from_value(json!({"artist": null})).unwrap();
        assert_eq!(c.artist, "");
    }

    #[test]
    fn test_string_or_number() {
        let p: Probe = serde_json::from_value(json!({"millis": 12340})).unwrap();
        assert_eq!(p.millis, "12340");
        let p: Probe = serde_json::from_value(json!({"millis": "800"})).unwrap();
        assert_eq!(p.millis, "800");
    }

    #[test]
    fn test_nulls_fall_back_to_defaults() {
        let p: Probe = serde_json::from_value(json!({
            "millis": null,
            "cover": null,
            "year": null,
            "score": null,
            "tags": null,
            "flag": null
        }))
        .unwrap();
        assert_eq!(p.millis, "");
        assert_eq!(p.cover, "");
        assert_eq!(p.year, 0);
        assert!(p.score.abs() < f64::EPSILON);
        assert!(p.tags.is_empty());
        assert!(!p.flag);
    }

    #[test]
    fn test_mistyped_values() {
        let p: Probe = serde_json::from_value(json!({
            "year": "2023",
            "score": "12.5",
            "tags": "not-a-list",
            "flag": "yes"
        }))
        .unwrap();
        assert_eq!(p.year, 2023);
        assert!((p.score - 12.5).abs() < f64::EPSILON);
        assert!(p.tags.is_empty());
        assert!(!p.flag);

        let p: Probe = serde_json::from_value(json!({"year": "soon", "score": [1]})).unwrap();
        assert_eq!(p.year, 0);
        assert!(p.score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_cover_art_expansion_is_idempotent() {
        let p: Probe = serde_json::from_value(json!({"cover": "abc/123.jpg"})).unwrap();
        assert_eq!(p.cover, "http://images.lyricfind.com/images/abc/123.jpg");
        assert_eq!(expand_cover_art(&p.cover), p.cover);
        assert_eq!(expand_cover_art(""), "");
    }
}
