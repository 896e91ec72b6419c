//! Client configuration.

use std::time::Duration;

/// Provider landing page; API paths live under `api/v1/`.
pub const DEFAULT_BASE_URL: &str = "https://lyrics.lyricfind.com/";

/// Geolocation service used to resolve the caller's territory.
pub const DEFAULT_GEO_URL: &str = "https://api.iplocation.net/";

/// Default number of tracks a search returns.
pub const DEFAULT_LIMIT: u32 = 5;

/// How long a session token stays valid after it was acquired.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(2 * 24 * 60 * 60);

/// Settings for a [`crate::LyricFindClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Provider base URL.
    pub base_url: String,
    /// Geolocation service URL.
    pub geo_url: String,
    /// Fixed territory (ISO country code). Skips geolocation when set.
    pub territory: Option<String>,
    /// Number of results a search asks for.
    pub limit: u32,
    /// Session token lifetime.
    pub token_ttl: Duration,
}

impl ClientConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_geo_url(mut self, url: impl Into<String>) -> Self {
        self.geo_url = url.into();
        self
    }

    /// Use a fixed territory instead of resolving it from the caller's IP.
    pub fn with_territory(mut self, territory: impl Into<String>) -> Self {
        self.territory = Some(territory.into().trim().to_uppercase());
        self
    }

    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub const fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            geo_url: DEFAULT_GEO_URL.to_string(),
            territory: None,
            limit: DEFAULT_LIMIT,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://lyrics.lyricfind.com/");
        assert_eq!(config.limit, 5);
        assert_eq!(config.token_ttl.as_secs(), 172_800);
        assert!(config.territory.is_none());
    }

    #[test]
    fn test_territory_is_normalized() {
        let config = ClientConfig::default().with_territory(" jp ");
        assert_eq!(config.territory.as_deref(), Some("JP"));
    }
}
