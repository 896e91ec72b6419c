//! Query parameters for each `LyricFind` endpoint.
//!
//! Building parameters is pure: the same territory and operation always give
//! the same mapping.

use crate::types::Endpoint;

/// Browser user agent sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/99.0.4844.82 Safari/537.36";

/// A request against one of the four API endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    /// Keyword search over all tracks.
    Search { query: &'a str, limit: u32 },
    /// Metadata lookup. `track_id` keeps its namespace prefix (`lfid:`, `apple:`, ...).
    Metadata { track_id: &'a str },
    /// Lyrics for a track.
    Lyric { lfid: &'a str },
    /// Translated lyrics for a track.
    Translation { lfid: &'a str, language: &'a str },
}

impl Operation<'_> {
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Search { .. } => Endpoint::Search,
            Self::Metadata { .. } => Endpoint::Metadata,
            Self::Lyric { .. } => Endpoint::Lyric,
            Self::Translation { .. } => Endpoint::Translation,
        }
    }
}

/// Ordered query parameters plus the user agent they are sent with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
    user_agent: &'static str,
}

impl QueryParams {
    fn defaults(territory: &str) -> Self {
        Self {
            pairs: vec![
                ("reqtype", "default".to_string()),
                ("territory", territory.to_string()),
                ("output", "json".to_string()),
            ],
            user_agent: USER_AGENT,
        }
    }

    /// Replaces an existing key in place, or appends it.
    fn set(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub const fn user_agent(&self) -> &'static str {
        self.user_agent
    }
}

/// Build the query parameters for `operation` in `territory`.
pub fn build(territory: &str, operation: &Operation<'_>) -> QueryParams {
    let mut params = QueryParams::defaults(territory);

    match *operation {
        Operation::Search { query, limit } => {
            params.set("searchtype", "track");
            params.set("limit", limit.to_string());
            params.set("all", query);
            params.set("alltracks", "no");
        }
        Operation::Metadata { track_id } => {
            params.set("reqtype", "metadata");
            params.set("trackid", track_id);
        }
        Operation::Lyric { lfid } => {
            params.set("trackid", format!("lfid:{lfid}"));
        }
        Operation::Translation { lfid, language } => {
            params.set("trackid", format!("lfid:{lfid}"));
            params.set("translationlanguage", language);
        }
    }

    params
}
