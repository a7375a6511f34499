//! Session persistence in `localStorage` and failure messaging.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth service issues a bearer token at login; this client only stores
//! it, attaches it, and drops it when the backend rejects it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use records::User;

use super::storage;
use crate::net::http::{ApiError, ErrorClass};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const USER_DATA_KEY: &str = "userData";
pub const LANGUAGE_KEY: &str = "i18nextLng";

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";
/// Shown only when a write was actually parked in the offline queue.
pub const QUEUED_MESSAGE: &str = "You're offline. Your changes have been saved and will sync when you're back online.";
/// Shown when a call failed for lack of a connection and nothing was queued.
pub const OFFLINE_ACTION_MESSAGE: &str = "You're offline. This action needs a connection; try again when you're back online.";

/// Stored bearer token, if any.
pub fn access_token() -> Option<String> {
    storage::load_raw(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Cached user record from the last successful `/users/me`.
pub fn stored_user() -> Option<User> {
    storage::load_json(USER_DATA_KEY)
}

pub fn store_user(user: &User) {
    storage::save_json(USER_DATA_KEY, user);
}

/// Forget the token and cached user.
pub fn clear() {
    storage::remove(ACCESS_TOKEN_KEY);
    storage::remove(USER_DATA_KEY);
}

/// Persist the UI language for the i18n layer.
pub fn set_language(code: &str) {
    storage::save_raw(LANGUAGE_KEY, code);
}

/// User-facing text for a failure that was not queued, by error class.
#[must_use]
pub fn failure_message(err: &ApiError) -> String {
    match err.class() {
        ErrorClass::Connectivity => OFFLINE_ACTION_MESSAGE.to_owned(),
        ErrorClass::Auth => SESSION_EXPIRED_MESSAGE.to_owned(),
        ErrorClass::Other => err.to_string(),
    }
}
