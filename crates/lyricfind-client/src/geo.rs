//! Caller geolocation, used to pick the provider territory.
//!
//! Lookups never fail: any non-200 answer, transport error or malformed body
//! degrades to a fixed fallback value.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::types::{CountryResponse, IpResponse};

/// Returned when the caller's IP cannot be determined.
pub const FALLBACK_IP: &str = "1.1.1.1";

/// Returned when the IP cannot be mapped to a country.
pub const FALLBACK_COUNTRY: &str = "US";

/// Client for the geolocation service.
#[derive(Debug, Clone)]
pub struct GeoLocator {
    http: reqwest::Client,
    url: Url,
}

impl GeoLocator {
    pub const fn new(http: reqwest::Client, url: Url) -> Self {
        Self { http, url }
    }

    /// Public IP of the machine making the request.
    pub async fn current_ip(&self) -> String {
        self.lookup::<IpResponse>(&[("cmd", "get-ip")])
            .await
            .map(|r| r.ip)
            .filter(|ip| !ip.is_empty())
            .unwrap_or_else(|| FALLBACK_IP.to_string())
    }

    /// ISO country code for `ip`.
    pub async fn country_code(&self, ip: &str) -> String {
        self.lookup::<CountryResponse>(&[("ip", ip)])
            .await
            .map(|r| r.country_code2.trim().to_uppercase())
            .filter(|code| !code.is_empty() && code != "-")
            .unwrap_or_else(|| FALLBACK_COUNTRY.to_string())
    }

    /// Resolve the territory of this machine: own IP first, then its country.
    pub async fn resolve(&self) -> String {
        let ip = self.current_ip().await;
        self.country_code(&ip).await
    }

    async fn lookup<T: DeserializeOwned>(&self, query: &[(&str, &str)]) -> Option<T> {
        let response = match self.http.get(self.url.clone()).query(query).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Geolocation request failed: {e}");
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            warn!("Geolocation service returned {}", response.status());
            return None;
        }

        match response.json::<T>().await {
            Ok(body) => Some(body),
            Err(e) => {
                debug!("Unexpected geolocation response: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::StubProvider;

    fn locator(stub: &StubProvider) -> GeoLocator {
        GeoLocator::new(reqwest::Client::new(), Url::parse(&stub.geo_url()).unwrap())
    }

    #[tokio::test]
    async fn test_resolve_chains_both_calls() {
        let stub = StubProvider::builder().spawn().await;
        let geo = locator(&stub);

        assert_eq!(geo.current_ip().await, "203.0.113.7");
        assert_eq!(geo.country_code("203.0.113.7").await, "JP");
        assert_eq!(geo.resolve().await, "JP");
        assert_eq!(stub.hits("geo"), 4);
    }

    #[tokio::test]
    async fn test_fallbacks_on_error_status() {
        let stub = StubProvider::builder().geo_down().spawn().await;
        let geo = locator(&stub);

        assert_eq!(geo.current_ip().await, FALLBACK_IP);
        assert_eq!(geo.country_code("203.0.113.7").await, FALLBACK_COUNTRY);
    }

    #[tokio::test]
    async fn test_fallback_on_unreachable_service() {
        let geo = GeoLocator::new(
            reqwest::Client::new(),
            Url::parse("http://127.0.0.1:9/").unwrap(),
        );
        assert_eq!(geo.resolve().await, FALLBACK_COUNTRY);
    }
}
