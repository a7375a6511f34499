//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no domain data of its own; it only needs a pooled HTTP client
//! and the upstream base URL for forwarding `/api/v1` calls.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

/// Shared application state. Clone is required by Axum; fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend base URL without a trailing slash.
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build state from host config.
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest` error if the TLS backend cannot be
    /// initialised.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;
        Ok(Self::new(http, &config.upstream_url))
    }

    #[must_use]
    pub fn new(http: reqwest::Client, upstream: &str) -> Self {
        Self { http, upstream: Arc::from(upstream.trim_end_matches('/')) }
    }
}
