//! Lyrics payload for a track.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{RawSource, Track};
use crate::{de, Result};

/// A track together with its full lyrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SongData {
    #[serde(flatten)]
    pub track: Track,
    #[serde(deserialize_with = "de::string_or_number")]
    pub lyrics: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub copyright: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub writer: String,
}

impl SongData {
    pub fn from_value(value: Value) -> Result<Self> {
        let mut song = Self::deserialize(&value)?;
        song.track.raw = RawSource::new(value);
        Ok(song)
    }

    /// Lyrics split into lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lyrics.lines()
    }
}
