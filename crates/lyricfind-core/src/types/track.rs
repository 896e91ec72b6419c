//! Track type, the shape shared by every `LyricFind` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Album, Artist, RawSource};
use crate::{de, Result, ValidationError};

/// A single track as returned by search and metadata lookups.
///
/// `lfid` is stable across all endpoints and is the key for later lyric and
/// translation calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Track {
    /// `LyricFind` track ID.
    #[serde(deserialize_with = "de::string_or_number")]
    pub lfid: String,
    /// Original language of the lyrics.
    #[serde(deserialize_with = "de::string_or_number")]
    pub language: String,
    /// Languages a translation can be requested in.
    #[serde(deserialize_with = "de::or_default")]
    pub available_translations: Vec<String>,
    #[serde(deserialize_with = "de::string_or_number")]
    pub rovi: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub gracenote: String,
    #[serde(deserialize_with = "de::int_or_default")]
    pub apple: i64,
    #[serde(deserialize_with = "de::int_or_default")]
    pub deezer: i64,
    #[serde(deserialize_with = "de::or_default")]
    pub isrcs: Vec<String>,
    #[serde(deserialize_with = "de::or_default")]
    pub instrumental: bool,
    #[serde(deserialize_with = "de::or_default")]
    pub viewable: bool,
    #[serde(deserialize_with = "de::or_default")]
    pub has_lrc: bool,
    #[serde(deserialize_with = "de::or_default")]
    pub has_contentfilter: bool,
    #[serde(deserialize_with = "de::or_default")]
    pub has_emotion: bool,
    #[serde(deserialize_with = "de::or_default")]
    pub has_sentiment: bool,
    #[serde(deserialize_with = "de::or_default")]
    pub lrc_verified: bool,
    #[serde(deserialize_with = "de::string_or_number")]
    pub title: String,
    /// Credited artists.
    #[serde(deserialize_with = "de::or_default")]
    pub artists: Vec<Artist>,
    /// Display artist name.
    #[serde(deserialize_with = "de::artist_name")]
    pub artist: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub last_update: String,
    /// Matching lyric excerpt (search results only).
    #[serde(deserialize_with = "de::string_or_number")]
    pub snippet: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub context: String,
    /// Search relevance.
    #[serde(deserialize_with = "de::float_or_default")]
    pub score: f64,
    #[serde(deserialize_with = "de::string_or_number")]
    pub glp: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub slug: String,
    #[serde(deserialize_with = "de::or_default")]
    pub album: Album,
    #[serde(skip)]
    pub raw: RawSource,
}

impl Track {
    /// Decode a track from a provider payload, keeping the payload as [`RawSource`].
    pub fn from_value(value: Value) -> Result<Self> {
        let mut track = Self::deserialize(&value)?;
        track.raw = RawSource::new(value);
        Ok(track)
    }

    /// The payload this track was decoded from, if any.
    pub fn raw(&self) -> Option<&Value> {
        self.raw.get()
    }

    /// Get all artist names joined.
    pub fn artists_display(&self) -> String {
        if self.artists.is_empty() {
            return self.artist.clone();
        }
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(" and ")
    }

    /// Primary credited artist, falling back to the first one.
    pub fn primary_artist(&self) -> Option<&Artist> {
        self.artists
            .iter()
            .find(|a| a.is_primary)
            .or_else(|| self.artists.first())
    }

    /// Check a requested translation language against `available_translations`.
    ///
    /// The comparison ignores case. On success the provider's own spelling of
    /// the language code is returned.
    pub fn translation_language(
        &self,
        language: &str,
    ) -> std::result::Result<String, ValidationError> {
        if self.available_translations.is_empty() {
            return Err(ValidationError::NoTranslations);
        }

        let requested = language.trim().to_lowercase();
        self.available_translations
            .iter()
            .find(|l| l.eq_ignore_ascii_case(&requested))
            .cloned()
            .ok_or_else(|| ValidationError::UnsupportedLanguage {
                requested,
                allowed: self.available_translations.clone(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::de::expand_cover_art;
    use proptest::prelude::*;
    use serde_json::json;

    fn sample() -> Track {
        Track::from_value(json!({
            "lfid": "002-1537029",
            "language": "ja",
            "available_translations": ["de", "en"],
            "apple": 1_609_284_511_i64,
            "has_lrc": true,
            "title": "Anytime Anywhere",
            "artists": [{"name": "milet", "lfid": "a-1", "slug": "milet", "is_primary": true}],
            "artist": {"name": "milet"},
            "score": 12.5,
            "album": {"id": "77", "title": "Anytime Anywhere", "releaseYear": 2023, "coverArt": "x/y.jpg"},
            "unexpected": {"nested": true}
        }))
        .unwrap()
    }

    #[test]
    fn test_track_from_provider() {
        let track = sample();
        assert_eq!(track.lfid, "002-1537029");
        assert_eq!(track.artist, "milet");
        assert_eq!(track.album.release_year, 2023);
        assert!(track.has_lrc);
        assert!(!track.viewable);
        assert_eq!(track.rovi, "");
        assert_eq!(track.raw().unwrap()["unexpected"]["nested"], true);
    }

    #[test]
    fn test_empty_payload_uses_defaults() {
        let track = Track::from_value(json!({})).unwrap();
        assert_eq!(track, Track::default());
        assert!(track.album.is_empty());
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let track = Track::from_value(json!({
            "lfid": "1",
            "rovi": null,
            "apple": null,
            "deezer": null,
            "isrcs": null,
            "instrumental": null,
            "artists": null,
            "artist": null,
            "score": null,
            "album": null
        }))
        .unwrap();
        assert_eq!(
            track,
            Track {
                lfid: "1".into(),
                ..Track::default()
            }
        );
    }

    #[test]
    fn test_mistyped_fields() {
        let track = Track::from_value(json!({
            "lfid": 1537029,
            "apple": "1609284511",
            "deezer": "n/a",
            "score": "7.5",
            "isrcs": "JPU902300001",
            "has_lrc": "true",
            "album": {"id": 77, "releaseYear": "2023", "coverArt": null}
        }))
        .unwrap();
        assert_eq!(track.lfid, "1537029");
        assert_eq!(track.apple, 1_609_284_511);
        assert_eq!(track.deezer, 0);
        assert!((track.score - 7.5).abs() < f64::EPSILON);
        assert!(track.isrcs.is_empty());
        assert!(!track.has_lrc);
        assert_eq!(track.album.id, "77");
        assert_eq!(track.album.release_year, 2023);
        assert_eq!(track.album.cover_art, "");
    }

    #[test]
    fn test_serialization_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let lfid = json.find("\"lfid\"").unwrap();
        let language = json.find("\"language\"").unwrap();
        let album = json.find("\"album\"").unwrap();
        assert!(lfid < language && language < album);
        assert!(!json.contains("raw"));
    }

    #[test]
    fn test_translation_language() {
        let track = sample();
        assert_eq!(track.translation_language("EN").unwrap(), "en");
        let err = track.translation_language("fr").unwrap_err();
        assert_eq!(err.allowed(), ["de", "en"]);

        let bare = Track::default();
        assert_eq!(
            bare.translation_language("en").unwrap_err(),
            ValidationError::NoTranslations
        );
    }

    #[test]
    fn test_artists_display() {
        let mut track = sample();
        track.artists.push(Artist::new("Aimer"));
        assert_eq!(track.artists_display(), "milet and Aimer");
        assert_eq!(track.primary_artist().unwrap().name, "milet");
    }

    fn artist_strategy() -> impl Strategy<Value = Artist> {
        ("[a-zA-Z ]{0,12}", "[a-z0-9-]{0,8}", "[a-z-]{0,8}", any::<bool>()).prop_map(
            |(name, lfid, slug, is_primary)| Artist {
                name,
                lfid,
                slug,
                is_primary,
            },
        )
    }

    fn track_strategy() -> impl Strategy<Value = Track> {
        (
            "[0-9]{3}-[0-9]{1,7}",
            "[a-z]{0,2}",
            prop::collection::vec("[a-z]{2}", 0..4),
            any::<i64>(),
            prop::collection::vec("[A-Z0-9]{12}", 0..3),
            any::<(bool, bool, bool, bool)>(),
            ".{0,24}",
            prop::collection::vec(artist_strategy(), 0..3),
            "[a-zA-Z ]{0,16}",
            0u32..100_000,
            ("[0-9]{0,4}", ".{0,12}", 0i64..2100, "[a-z0-9/]{0,16}"),
        )
            .prop_map(
                |(
                    lfid,
                    language,
                    available_translations,
                    apple,
                    isrcs,
                    (instrumental, viewable, has_lrc, lrc_verified),
                    title,
                    artists,
                    artist,
                    score,
                    (album_id, album_title, release_year, cover),
                )| Track {
                    lfid,
                    language,
                    available_translations,
                    apple,
                    isrcs,
                    instrumental,
                    viewable,
                    has_lrc,
                    lrc_verified,
                    title,
                    artists,
                    artist,
                    score: f64::from(score) / 100.0,
                    album: Album {
                        id: album_id,
                        title: album_title,
                        release_year,
                        cover_art: expand_cover_art(&cover),
                    },
                    ..Track::default()
                },
            )
    }

    proptest! {
        #[test]
        fn prop_track_round_trips(track in track_strategy()) {
            let value = serde_json::to_value(&track).unwrap();
            let decoded = Track::from_value(value.clone()).unwrap();
            prop_assert!(!decoded.lfid.is_empty());
            prop_assert_eq!(&decoded, &track);
            prop_assert_eq!(serde_json::to_value(&decoded).unwrap(), value);
        }
    }
}
