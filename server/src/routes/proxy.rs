//! Backend forwarding for `/api/v1/*`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SPA calls host-relative `/api/v1/...` URLs. The host forwards those
//! calls unchanged (method, path, query, body, `Authorization`,
//! `Content-Type`, `Accept`) to the configured upstream and relays status,
//! content type, and body back. Upstream connection failures become a JSON
//! `{"detail": ...}` body, the same error shape the backend uses, so the
//! client's error mapping needs no special case.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::state::AppState;

/// Request headers copied onto the upstream request.
const FORWARDED_HEADERS: [axum::http::HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request timed out")]
    Timeout,
    #[error("upstream unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Unavailable(err.to_string()) }
    }
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody { detail: self.to_string() })).into_response()
    }
}

/// Upstream URL for an incoming request URI. The raw path is kept so
/// percent-encoded segments reach the backend untouched.
#[must_use]
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Forward one request to the upstream backend and relay the response.
///
/// # Errors
///
/// Returns `ProxyError` when the upstream cannot be reached or times out.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, &uri);

    let mut request = state.http.request(method.clone(), &url);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "upstream request failed");
        ProxyError::from(e)
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, %url, status = status.as_u16(), "forwarded");

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}
