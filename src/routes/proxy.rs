//! Reverse proxy for `/api/*`.
//!
//! ERROR HANDLING
//! ==============
//! Any failure reaching the upstream or reading its reply becomes
//! `502 Bad Gateway`; the upstream's own status codes pass through
//! unchanged. Request bodies above `MAX_BODY_BYTES` are refused with `413`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

/// Image uploads are the largest bodies the UI sends.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

const HOP_BY_HOP: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
];

#[derive(Clone, Debug)]
pub struct Upstream {
    client: reqwest::Client,
    base: String,
}

impl Upstream {
    pub fn new(base: &str) -> Self {
        Self { client: reqwest::Client::new(), base: base.trim_end_matches('/').to_owned() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Upstream URL for an incoming path and optional query string.
    pub fn target(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base)
    }
}

fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h))
}

fn forwardable(headers: &HeaderMap) -> HeaderMap {
    headers.iter().filter(|(name, _)| !is_hop_by_hop(name.as_str())).map(|(k, v)| (k.clone(), v.clone())).collect()
}

pub async fn forward(State(upstream): State<Upstream>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or(parts.uri.path(), |pq| pq.as_str());
    let url = upstream.target(path_and_query);

    let Ok(bytes) = axum::body::to_bytes(body, MAX_BODY_BYTES).await else {
        return StatusCode::PAYLOAD_TOO_LARGE.into_response();
    };

    let sent = upstream
        .client
        .request(parts.method.clone(), &url)
        .headers(forwardable(&parts.headers))
        .body(bytes)
        .send()
        .await;
    let resp = match sent {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e, %url, method = %parts.method, "upstream request failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = resp.status();
    let headers = forwardable(resp.headers());
    match resp.bytes().await {
        Ok(body) => {
            tracing::debug!(%url, status = status.as_u16(), "proxied");
            (status, headers, Body::from(body)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, %url, "upstream body read failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
