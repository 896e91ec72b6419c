//! Timed lyric lines.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::de;

/// One line of LRC-timed lyrics.
///
/// The provider uses entries with an empty `line` as line-break markers.
/// They are kept as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Lrc {
    /// Timestamp tag, e.g. `[00:12.34]`.
    #[serde(deserialize_with = "de::string_or_number")]
    pub lrc_timestamp: String,
    /// Offset from the start of the track, in milliseconds.
    #[serde(deserialize_with = "de::string_or_number")]
    pub milliseconds: String,
    /// How long the line is shown, in milliseconds.
    #[serde(deserialize_with = "de::string_or_number")]
    pub duration: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub line: String,
}

impl Lrc {
    /// Returns true for the blank entries used as line breaks.
    pub fn is_break(&self) -> bool {
        self.line.trim().is_empty()
    }

    pub fn offset(&self) -> Option<Duration> {
        self.milliseconds.trim().parse().ok().map(Duration::from_millis)
    }

    pub fn length(&self) -> Option<Duration> {
        self.duration.trim().parse().ok().map(Duration::from_millis)
    }
}
