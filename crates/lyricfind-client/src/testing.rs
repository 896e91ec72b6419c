//! In-process stand-in for the provider and the geolocation service.
//!
//! Enabled for this crate's tests and, through the `test-util` feature, for
//! crates that test against a [`LyricFindClient`].
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::header::{AUTHORIZATION, SET_COOKIE, USER_AGENT};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::{ClientConfig, LyricFindClient};

pub const STUB_IP: &str = "203.0.113.7";
pub const STUB_COUNTRY: &str = "JP";

/// A request as seen by the stub.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
}

impl Request {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
enum Canned {
    Json(StatusCode, Value),
    Text(String),
}

#[derive(Debug, Default)]
pub struct StubBuilder {
    responses: HashMap<String, Canned>,
    geo_down: bool,
    without_token: bool,
}

impl StubBuilder {
    /// Answer `endpoint` with `status` and a JSON body.
    pub fn respond(mut self, endpoint: &str, status: u16, body: Value) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.responses
            .insert(endpoint.to_string(), Canned::Json(status, body));
        self
    }

    /// Answer `endpoint` with 200 and a body that is not JSON.
    pub fn respond_text(mut self, endpoint: &str, body: &str) -> Self {
        self.responses
            .insert(endpoint.to_string(), Canned::Text(body.to_string()));
        self
    }

    /// Make every geolocation call answer 503.
    pub fn geo_down(mut self) -> Self {
        self.geo_down = true;
        self
    }

    /// Serve the landing page without a token cookie.
    pub fn without_token(mut self) -> Self {
        self.without_token = true;
        self
    }

    pub async fn spawn(self) -> StubProvider {
        let shared = Arc::new(Shared {
            config: self,
            hits: Mutex::default(),
            requests: Mutex::default(),
            tokens: AtomicUsize::new(0),
        });

        let router = Router::new()
            .route("/", get(landing))
            .route("/geo", get(geo))
            .route("/geo/", get(geo))
            .route("/api/v1/{endpoint}", get(api))
            .with_state(Arc::clone(&shared));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        StubProvider { addr, shared }
    }
}

struct Shared {
    config: StubBuilder,
    hits: Mutex<HashMap<String, usize>>,
    requests: Mutex<HashMap<String, Request>>,
    tokens: AtomicUsize,
}

impl Shared {
    fn hit(&self, name: &str) {
        *self.hits.lock().entry(name.to_string()).or_default() += 1;
    }
}

/// Handle to a running stub server.
pub struct StubProvider {
    addr: SocketAddr,
    shared: Arc<Shared>,
}

impl StubProvider {
    pub fn builder() -> StubBuilder {
        StubBuilder::default()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn geo_url(&self) -> String {
        format!("http://{}/geo/", self.addr)
    }

    /// A client pointed at this stub, optionally with a fixed territory.
    pub fn client(&self, territory: Option<&str>) -> LyricFindClient {
        let mut config = ClientConfig::default()
            .with_base_url(self.base_url())
            .with_geo_url(self.geo_url());
        if let Some(territory) = territory {
            config = config.with_territory(territory);
        }
        LyricFindClient::with_config(config).unwrap()
    }

    /// Number of requests received on `name`: `landing`, `geo` or an endpoint.
    pub fn hits(&self, name: &str) -> usize {
        self.shared.hits.lock().get(name).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.shared.hits.lock().values().sum()
    }

    /// Last request received on `name`: `geo` or an endpoint.
    pub fn last_request(&self, name: &str) -> Option<Request> {
        self.shared.requests.lock().get(name).cloned()
    }

    /// IP the geolocation service was last asked about.
    pub fn last_geo_ip(&self) -> Option<String> {
        self.last_request("geo")?.get("ip").map(str::to_string)
    }
}

async fn landing(State(shared): State<Arc<Shared>>) -> Response {
    shared.hit("landing");
    if shared.config.without_token {
        return "<html></html>".into_response();
    }

    let n = shared.tokens.fetch_add(1, Ordering::SeqCst) + 1;
    (
        [(SET_COOKIE, format!("token=stub-token-{n}; Path=/"))],
        "<html></html>",
    )
        .into_response()
}

async fn geo(
    State(shared): State<Arc<Shared>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    shared.hit("geo");
    let request = Request {
        query: query.clone(),
        ..Request::default()
    };
    shared.requests.lock().insert("geo".to_string(), request);
    if shared.config.geo_down {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }

    if query.get("cmd").map(String::as_str) == Some("get-ip") {
        Json(json!({"ip": STUB_IP})).into_response()
    } else {
        Json(json!({"ip": query.get("ip"), "country_code2": STUB_COUNTRY})).into_response()
    }
}

async fn api(
    State(shared): State<Arc<Shared>>,
    Path(endpoint): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    shared.hit(&endpoint);

    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let request = Request {
        query,
        authorization: header(AUTHORIZATION),
        user_agent: header(USER_AGENT),
    };
    shared.requests.lock().insert(endpoint.clone(), request);

    match shared.config.responses.get(&endpoint) {
        Some(Canned::Json(status, body)) => (*status, Json(body.clone())).into_response(),
        Some(Canned::Text(body)) => body.clone().into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}
