//! Request/response plumbing shared by every service module.
//!
//! DESIGN
//! ======
//! Service modules build an [`ApiRequest`] and hand it to a [`Transport`].
//! The browser transport is `gloo-net`; tests substitute a recording fake so
//! request shape (method, URL, headers, body) can be asserted directly.
//!
//! ERROR HANDLING
//! ==============
//! Failures collapse into three classes: connectivity (queue and sync later),
//! auth (clear the session and ask for a fresh login), and everything else
//! (show the message with a retry action).

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::util::connectivity::is_connectivity_message;

/// HTTP verbs used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully described backend call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(url: String) -> Self {
        Self { method: Method::Get, url, bearer: None, body: None }
    }

    #[must_use]
    pub fn delete(url: String) -> Self {
        Self { method: Method::Delete, url, bearer: None, body: None }
    }

    #[must_use]
    pub fn post<B: Serialize>(url: String, body: &B) -> Self {
        Self { method: Method::Post, url, bearer: None, body: Some(to_body(body)) }
    }

    /// `POST` with no body (e.g. reset endpoints).
    #[must_use]
    pub fn post_empty(url: String) -> Self {
        Self { method: Method::Post, url, bearer: None, body: None }
    }

    #[must_use]
    pub fn put<B: Serialize>(url: String, body: &B) -> Self {
        Self { method: Method::Put, url, bearer: None, body: Some(to_body(body)) }
    }

    /// Attach `Authorization: Bearer <token>` when a token is available.
    #[must_use]
    pub fn bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.filter(|t| !t.is_empty()).map(str::to_owned);
        self
    }

    /// Headers the transport must send with this request.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::new();
        if self.body.is_some() {
            headers.push(("Content-Type", "application/json".to_owned()));
        }
        if let Some(token) = &self.bearer {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        headers
    }
}

fn to_body<B: Serialize>(body: &B) -> serde_json::Value {
    serde_json::to_value(body).unwrap_or(serde_json::Value::Null)
}

/// Raw status and body of a completed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// How the UI should react to a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// Queue the write and report it will sync later.
    Connectivity,
    /// Clear the stored token and ask the user to sign in again.
    Auth,
    /// Surface the message verbatim with a manual retry.
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The browser reports no network connection.
    #[error("You are offline")]
    Offline,
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    #[error("authentication required ({status})")]
    Unauthorized { status: u16 },
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Offline => ErrorClass::Connectivity,
            Self::Network(message) if is_connectivity_message(message) => ErrorClass::Connectivity,
            Self::Unauthorized { .. } => ErrorClass::Auth,
            Self::Network(_) | Self::Http { .. } | Self::Decode(_) => ErrorClass::Other,
        }
    }
}

/// Map a non-2xx response to an error, preferring the backend's `detail`.
#[must_use]
pub fn error_for_status(status: u16, body: &str) -> ApiError {
    if status == 401 || status == 403 {
        return ApiError::Unauthorized { status };
    }
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| match v.get("detail") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) if !other.is_null() => Some(other.to_string()),
            _ => None,
        });
    let message = detail.unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() { format!("request failed: {status}") } else { trimmed.to_owned() }
    });
    ApiError::Http { status, message }
}

/// Sends [`ApiRequest`]s. Implemented by the browser fetch transport and by
/// test fakes.
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Send and decode a JSON response body.
///
/// # Errors
///
/// Returns the transport error, a status-mapped error, or [`ApiError::Decode`].
pub async fn call_json<T: DeserializeOwned>(transport: &impl Transport, request: ApiRequest) -> Result<T, ApiError> {
    let response = transport.send(request).await?;
    if !response.is_success() {
        return Err(error_for_status(response.status, &response.body));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send and ignore the response body.
///
/// # Errors
///
/// Returns the transport error or a status-mapped error.
pub async fn call_unit(transport: &impl Transport, request: ApiRequest) -> Result<(), ApiError> {
    let response = transport.send(request).await?;
    if !response.is_success() {
        return Err(error_for_status(response.status, &response.body));
    }
    Ok(())
}

/// Browser transport backed by `fetch` through `gloo-net`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::Request;

        if !crate::util::connectivity::is_online() {
            return Err(ApiError::Offline);
        }

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let sent = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}
