//! Translated lyrics for a track.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Lrc, RawSource, Track};
use crate::{de, Result};

/// A track's lyrics rendered in another language, with its own LRC timing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Translation {
    #[serde(flatten)]
    pub track: Track,
    #[serde(deserialize_with = "de::string_or_number")]
    pub translation: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub lrc_version: String,
    #[serde(deserialize_with = "de::or_default")]
    pub lrc: Vec<Lrc>,
    #[serde(deserialize_with = "de::string_or_number")]
    pub copyright: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub writer: String,
}

impl Translation {
    pub fn from_value(value: Value) -> Result<Self> {
        let mut translation = Self::deserialize(&value)?;
        translation.track.raw = RawSource::new(value);
        Ok(translation)
    }

    /// Timed text joined line by line. Break markers become empty lines.
    pub fn lrc_text(&self) -> String {
        self.lrc
            .iter()
            .map(|l| l.line.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
