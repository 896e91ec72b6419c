//! Server configuration from flags and environment.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::Parser;
use lyricfind_client::context::{DEFAULT_BASE_URL, DEFAULT_GEO_URL};
use lyricfind_client::ClientConfig;

/// HTTP facade over the `LyricFind` lyrics API.
#[derive(Debug, Clone, Parser)]
#[command(name = "lyricfind", version, about)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "LYRICFIND_BIND", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Serve every caller from this territory instead of geolocating them.
    #[arg(long, env = "LYRICFIND_TERRITORY")]
    pub territory: Option<String>,

    /// Seconds a successful response stays cached. Zero disables caching.
    #[arg(long, env = "LYRICFIND_CACHE_TTL_SECS", default_value_t = 86_400)]
    pub cache_ttl_secs: u64,

    /// Maximum number of cached responses.
    #[arg(long, env = "LYRICFIND_CACHE_CAPACITY", default_value_t = 10_000)]
    pub cache_capacity: usize,

    /// Provider base URL.
    #[arg(long, env = "LYRICFIND_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Geolocation service URL.
    #[arg(long, env = "LYRICFIND_GEO_URL", default_value = DEFAULT_GEO_URL)]
    pub geo_url: String,
}

impl ServerConfig {
    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Client settings derived from this configuration.
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::default()
            .with_base_url(&self.base_url)
            .with_geo_url(&self.geo_url);
        match self.fixed_territory() {
            Some(territory) => config.with_territory(territory),
            None => config,
        }
    }

    /// The configured territory, ignoring a blank value.
    pub fn fixed_territory(&self) -> Option<String> {
        self.territory
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_uppercase)
    }
}
