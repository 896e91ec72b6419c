//! Territory and session-token state for a client.
//!
//! Both facts are resolved lazily by the first request that needs them.
//! Concurrent first requests may both resolve; the last write wins.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use lyricfind_core::{Error, Result};
use parking_lot::RwLock;
use tracing::{debug, info};
use url::Url;

use crate::geo::GeoLocator;

/// Name of the landing-page cookie that carries the session token.
pub const TOKEN_COOKIE: &str = "token";

/// A session token and the moment it was acquired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    value: String,
    acquired_at: DateTime<Utc>,
}

impl SessionToken {
    pub fn new(value: impl Into<String>, acquired_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            acquired_at,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub const fn acquired_at(&self) -> DateTime<Utc> {
        self.acquired_at
    }

    /// A token is stale once `ttl` has elapsed since acquisition.
    pub fn is_stale(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        self.acquired_at
            .checked_add_signed(ttl)
            .is_some_and(|expiry| now >= expiry)
    }
}

/// Per-client session state.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    territory: Arc<RwLock<Option<String>>>,
    token: Arc<RwLock<Option<SessionToken>>>,
    token_ttl: Duration,
}

impl Session {
    pub fn new(territory: Option<String>, token_ttl: std::time::Duration) -> Self {
        Self {
            territory: Arc::new(RwLock::new(territory)),
            token: Arc::new(RwLock::new(None)),
            token_ttl: Duration::from_std(token_ttl).unwrap_or(Duration::MAX),
        }
    }

    /// Same token state, fixed territory.
    pub fn with_territory(&self, territory: String) -> Self {
        Self {
            territory: Arc::new(RwLock::new(Some(territory))),
            token: Arc::clone(&self.token),
            token_ttl: self.token_ttl,
        }
    }

    pub fn territory(&self) -> Option<String> {
        self.territory.read().clone()
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.token.read().clone()
    }

    /// Resolve the territory through geolocation unless it is already known.
    pub async fn ensure_territory(&self, geo: &GeoLocator) -> String {
        if let Some(territory) = self.territory() {
            return territory;
        }

        let resolved = geo.resolve().await;
        info!("Resolved territory {resolved}");
        *self.territory.write() = Some(resolved.clone());
        resolved
    }

    /// Return a valid session token, acquiring a new one if absent or stale.
    pub async fn ensure_token(&self, http: &reqwest::Client, landing: &Url) -> Result<String> {
        let now = Utc::now();
        if let Some(token) = self.token() {
            if !token.is_stale(self.token_ttl, now) {
                return Ok(token.value);
            }
            debug!("Session token from {} is stale", token.acquired_at);
        }

        let token = acquire_token(http, landing).await?;
        let value = token.value.clone();
        *self.token.write() = Some(token);
        Ok(value)
    }
}

/// Load the landing page and take the session token from its cookies.
async fn acquire_token(http: &reqwest::Client, landing: &Url) -> Result<SessionToken> {
    let response = http
        .get(landing.clone())
        .send()
        .await
        .map_err(|e| Error::Network(format!("Failed to load landing page: {e}")))?;

    let status = response.status();
    let token = response
        .cookies()
        .find(|cookie| cookie.name() == TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            Error::Session(format!(
                "landing page answered {status} without a `{TOKEN_COOKIE}` cookie"
            ))
        })?;

    info!("Acquired session token");
    Ok(SessionToken::new(token, Utc::now()))
}
