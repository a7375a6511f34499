//! Settings service: user display and offline preferences.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use records::{PreferencesUpdate, UserPreferences};

use super::http::{ApiError, ApiRequest, Transport, call_json};
use crate::config;

/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn get(transport: &impl Transport, token: &str) -> Result<UserPreferences, ApiError> {
    call_json(transport, ApiRequest::get(config::user_preferences()).bearer(Some(token))).await
}

/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn update(
    transport: &impl Transport,
    token: &str,
    update: &PreferencesUpdate,
) -> Result<UserPreferences, ApiError> {
    call_json(transport, ApiRequest::put(config::user_preferences(), update).bearer(Some(token))).await
}

/// Restore server-side defaults.
///
/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn reset(transport: &impl Transport, token: &str) -> Result<UserPreferences, ApiError> {
    call_json(transport, ApiRequest::post_empty(config::user_preferences_reset()).bearer(Some(token))).await
}
