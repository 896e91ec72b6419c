//! `LyricFind` API endpoints and raw response structures.

use lyricfind_core::de;
use serde::Deserialize;

/// The four read endpoints under `api/v1/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Search,
    Metadata,
    Lyric,
    Translation,
}

impl Endpoint {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Metadata => "metadata",
            Self::Lyric => "lyric",
            Self::Translation => "translation",
        }
    }

    /// Key in the response body that holds the payload.
    pub const fn payload_key(&self) -> &'static str {
        match self {
            Self::Search => "tracks",
            Self::Metadata | Self::Lyric | Self::Translation => "track",
        }
    }
}

/// Status block the provider embeds in response bodies.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResponseStatus {
    #[serde(deserialize_with = "de::string_or_number")]
    pub code: String,
    pub description: String,
}

impl ResponseStatus {
    /// Embedded codes below 200 report success.
    pub fn error_code(&self) -> Option<u16> {
        self.code.trim().parse().ok().filter(|code| *code >= 200)
    }
}

/// Geolocation answer for `cmd=get-ip`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct IpResponse {
    pub ip: String,
}

/// Geolocation answer for `ip=<addr>`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CountryResponse {
    pub country_code2: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Search.payload_key(), "tracks");
        assert_eq!(Endpoint::Lyric.payload_key(), "track");
        assert_eq!(Endpoint::Translation.path(), "translation");
    }

    #[test]
    fn test_response_status_codes() {
        let ok: ResponseStatus =
            serde_json::from_value(json!({"code": 101, "description": "SUCCESS"})).unwrap();
        assert_eq!(ok.error_code(), None);

        let missing: ResponseStatus =
            serde_json::from_value(json!({"code": "206", "description": "NOT FOUND"})).unwrap();
        assert_eq!(missing.error_code(), Some(206));
    }
}
