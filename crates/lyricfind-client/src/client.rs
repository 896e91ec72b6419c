//! `LyricFind` API client implementation.

use std::sync::Arc;

use lyricfind_core::{Error, ProviderError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::context::ClientConfig;
use crate::geo::GeoLocator;
use crate::params::{self, Operation};
use crate::session::{Session, SessionToken};
use crate::types::Endpoint;

const API_PATH: &str = "api/v1/";

/// Resolved URLs for one provider deployment.
#[derive(Debug)]
struct Endpoints {
    landing: Url,
    api: Url,
}

impl Endpoints {
    fn new(base_url: &str) -> Result<Self> {
        let landing = parse_base(base_url)?;
        let api = landing
            .join(API_PATH)
            .map_err(|e| Error::InvalidArgument(format!("Invalid base URL {base_url}: {e}")))?;
        Ok(Self { landing, api })
    }

    fn url(&self, endpoint: Endpoint) -> Result<Url> {
        self.api
            .join(endpoint.path())
            .map_err(|e| Error::InvalidArgument(format!("Invalid endpoint URL: {e}")))
    }
}

/// Parse a base URL, treating it as a directory so relative joins append.
fn parse_base(url: &str) -> Result<Url> {
    let normalized = if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    };
    Url::parse(&normalized).map_err(|e| Error::InvalidArgument(format!("Invalid URL {url}: {e}")))
}

/// `LyricFind` API client.
///
/// Cloning is cheap: clones share the connection pool, the territory and the
/// session token. The pool is released when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct LyricFindClient {
    /// HTTP client for making requests.
    http: reqwest::Client,
    endpoints: Arc<Endpoints>,
    geo: GeoLocator,
    session: Session,
    /// Default search limit.
    limit: u32,
}

impl LyricFindClient {
    /// Create a new client with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with its own connection pool.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/html;q=0.9, */*;q=0.8"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(USER_AGENT, HeaderValue::from_static(params::USER_AGENT));

        // Redirects are reported, not followed: a 302 usually means a bot challenge.
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {e}")))?;

        Self::with_http(http, config)
    }

    /// Create a new client on a caller-owned connection pool.
    pub fn with_http(http: reqwest::Client, config: ClientConfig) -> Result<Self> {
        let endpoints = Endpoints::new(&config.base_url)?;
        let geo = GeoLocator::new(http.clone(), parse_base(&config.geo_url)?);

        Ok(Self {
            http,
            endpoints: Arc::new(endpoints),
            geo,
            session: Session::new(config.territory, config.token_ttl),
            limit: config.limit,
        })
    }

    /// A client for a fixed territory that shares this client's pool and token.
    pub fn for_territory(&self, territory: impl Into<String>) -> Self {
        Self {
            session: self
                .session
                .with_territory(territory.into().trim().to_uppercase()),
            ..self.clone()
        }
    }

    /// Territory in use, if it has been resolved or was set explicitly.
    pub fn territory(&self) -> Option<String> {
        self.session.territory()
    }

    /// Current session token, if one has been acquired.
    pub fn session_token(&self) -> Option<SessionToken> {
        self.session.token()
    }

    /// The geolocation service this client resolves territories with.
    pub const fn geolocator(&self) -> &GeoLocator {
        &self.geo
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Send a GET for `operation` and return the decoded body.
    ///
    /// Territory and token are ensured first, in that order. Non-success
    /// statuses become [`ProviderError`]s.
    pub(crate) async fn get(&self, operation: &Operation<'_>) -> Result<Value> {
        let territory = self.session.ensure_territory(&self.geo).await;
        let token = self
            .session
            .ensure_token(&self.http, &self.endpoints.landing)
            .await?;

        let endpoint = operation.endpoint();
        let params = params::build(&territory, operation);
        let url = self.endpoints.url(endpoint)?;
        debug!("GET {url} ({territory})");

        let response = self
            .http
            .get(url)
            .query(params.pairs())
            .header(USER_AGENT, params.user_agent())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Request to {} failed with {status}", endpoint.path());
            return Err(ProviderError::from_status(status.as_u16()).into());
        }

        response
            .json()
            .await
            .map_err(|e| Error::Parse(format!("Failed to parse {} response: {e}", endpoint.path())))
    }
}

impl Default for LyricFindClient {
    /// # Panics
    /// Panics if the HTTP client cannot be created.
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self::new().expect("Failed to create default LyricFind client")
    }
}
