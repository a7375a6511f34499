//! Host configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! `Config::from_env` reads the process environment (after `.env` has been
//! loaded by `main`). Parsing itself goes through `from_lookup` so tests can
//! feed values without touching global env state.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
    #[error("API_UPSTREAM_URL must start with http:// or https://, got {0}")]
    UpstreamScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Backend base URL without a trailing slash.
    pub upstream_url: String,
    pub public_dir: PathBuf,
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_URL`: default `http://127.0.0.1:8000`
    /// - `PUBLIC_DIR`: default `public`
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a numeric variable does not parse or the
    /// upstream URL has no HTTP scheme.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let upstream_timeout_secs =
            parse_or("UPSTREAM_TIMEOUT_SECS", lookup("UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS)?;

        let upstream_url = lookup("API_UPSTREAM_URL")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !upstream_url.starts_with("http://") && !upstream_url.starts_with("https://") {
            return Err(ConfigError::UpstreamScheme(upstream_url));
        }

        let public_dir = lookup("PUBLIC_DIR")
            .filter(|raw| !raw.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from);

        Ok(Self { port, upstream_url, public_dir, upstream_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
