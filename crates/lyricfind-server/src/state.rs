//! Shared state for request handlers.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use lyricfind_client::LyricFindClient;
use lyricfind_core::Result;
use serde_json::Value;
use tracing::debug;

use crate::cache::{cache_key, TtlCache};
use crate::config::ServerConfig;
use crate::response::ModelResponse;

#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    client: LyricFindClient,
    fixed_territory: Option<String>,
    responses: TtlCache<ModelResponse>,
    territories: TtlCache<String>,
}

impl AppState {
    pub fn new(
        client: LyricFindClient,
        fixed_territory: Option<String>,
        cache_ttl: Duration,
        cache_capacity: usize,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                fixed_territory,
                responses: TtlCache::new(cache_ttl, cache_capacity),
                territories: TtlCache::new(cache_ttl, cache_capacity),
            }),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let client = LyricFindClient::with_config(config.client_config())?;
        Ok(Self::new(
            client,
            config.fixed_territory(),
            config.cache_ttl(),
            config.cache_capacity,
        ))
    }

    pub fn client(&self) -> &LyricFindClient {
        &self.inner.client
    }

    /// Territory to serve `caller` from.
    ///
    /// A fixed territory wins. Otherwise the caller's IP is geolocated once
    /// per cache lifetime. Without a caller IP the client resolves its own.
    pub async fn territory_for(&self, caller: Option<&str>) -> Option<String> {
        if let Some(territory) = &self.inner.fixed_territory {
            return Some(territory.clone());
        }

        let ip = caller?;
        let key = cache_key(&["territory", ip]);
        if let Some(territory) = self.inner.territories.get(&key) {
            return Some(territory);
        }

        let territory = self.inner.client.geolocator().country_code(ip).await;
        debug!("Caller {ip} is in {territory}");
        self.inner.territories.insert(key, territory.clone());
        Some(territory)
    }

    /// A client bound to `territory`, sharing the base client's token.
    pub fn client_for(&self, territory: Option<&str>) -> LyricFindClient {
        match territory {
            Some(territory) => self.inner.client.for_territory(territory),
            None => self.inner.client.clone(),
        }
    }

    /// Answer from the response cache, or run `fetch` and cache a success.
    pub async fn cached<F, Fut>(
        &self,
        route: &str,
        territory: Option<&str>,
        query: &[&str],
        fetch: F,
    ) -> ModelResponse
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        let mut parts = vec![route, territory.unwrap_or_default()];
        parts.extend_from_slice(query);
        let key = cache_key(&parts);

        if let Some(response) = self.inner.responses.get(&key) {
            debug!("Cache hit for {route}");
            return response;
        }

        let response = match fetch().await {
            Ok(data) => ModelResponse::ok(data),
            Err(e) => ModelResponse::from_error(&e),
        };
        if response.is_ok() {
            self.inner.responses.insert(key, response.clone());
        }
        response
    }
}
