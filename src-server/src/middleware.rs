//! Request gates applied to the `/api` router: per-IP rate limiting and
//! session verification.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::{self, HeaderMap};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use scene_core::session::SESSION_COOKIE;

use crate::error::ApiError;
use crate::main_lib::AppState;

/// Reject requests without a verifiable `auth_token` cookie and stash the
/// decoded claims in request extensions for handlers that want them.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = match cookie_value(req.headers(), SESSION_COOKIE) {
        Some(token) => token,
        None => {
            return ApiError::unauthenticated("Authentication required").into_response();
        }
    };

    match state.verifier.verify(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

pub async fn enforce_rate_limit(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let ip = client_ip(&req);
    if !state.rate_limiter.allow(ip) {
        return ApiError::rate_limited().into_response();
    }
    next.run(req).await
}

/// First hop of `x-forwarded-for` when present, otherwise the socket peer.
fn client_ip(req: &Request) -> IpAddr {
    if let Some(forwarded) = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            if let Ok(ip) = first.trim().parse() {
                return ip;
            }
        }
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}
