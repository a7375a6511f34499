//! Current-user lookup and profile edits.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use records::{ProfileUpdate, User};

use super::http::{ApiError, ApiRequest, Transport, call_json};
use crate::config;

/// `GET /api/v1/users/me`; also used for admin gating.
///
/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn me(transport: &impl Transport, token: &str) -> Result<User, ApiError> {
    call_json(transport, ApiRequest::get(config::users_me()).bearer(Some(token))).await
}

/// `PUT /api/v1/users/me`.
///
/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn update_profile(transport: &impl Transport, token: &str, update: &ProfileUpdate) -> Result<User, ApiError> {
    call_json(transport, ApiRequest::put(config::users_me(), update).bearer(Some(token))).await
}
