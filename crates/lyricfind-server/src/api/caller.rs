use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// IP of the caller: the first `X-Forwarded-For` hop, else the socket peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIp(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for CallerIp {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get(FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .map(str::to_string);

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(Self(forwarded.or(peer)))
    }
}
