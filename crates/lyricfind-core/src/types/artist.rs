//! Artist reference within a track.

use serde::{Deserialize, Serialize};

use crate::de;

/// A credited artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Artist {
    #[serde(deserialize_with = "de::string_or_number")]
    pub name: String,
    /// Provider artist ID.
    #[serde(deserialize_with = "de::string_or_number")]
    pub lfid: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub slug: String,
    #[serde(deserialize_with = "de::or_default")]
    pub is_primary: bool,
}

impl Artist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_artist_defaults() {
        let artist: Artist = serde_json::from_value(json!({"name": "milet"})).unwrap();
        assert_eq!(artist, Artist::new("milet"));
        assert!(!artist.is_primary);
    }
}
