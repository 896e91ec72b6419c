//! Album reference within a track.

use serde::{Deserialize, Serialize};

use crate::de;

/// Album a track was released on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Album {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub title: String,
    #[serde(rename = "releaseYear", deserialize_with = "de::int_or_default")]
    pub release_year: i64,
    /// Cover art URL, expanded from the provider's asset path.
    #[serde(rename = "coverArt", deserialize_with = "de::cover_art_url")]
    pub cover_art: String,
}

impl Album {
    /// Returns true if the provider sent no album at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
