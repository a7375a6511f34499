//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by admin gating and user-aware pages. The token itself lives in
//! `localStorage` (see `util::session`); this struct mirrors it for reactive
//! rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::User;

use crate::net::http::{ApiError, ErrorClass};
use crate::util::session::{self, SESSION_EXPIRED_MESSAGE};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True while `/users/me` is in flight.
    pub loading: bool,
    /// Sign-in prompt shown after the backend rejected the token.
    pub message: Option<String>,
}

impl AuthState {
    /// State restored from the previous session's `localStorage`.
    #[must_use]
    pub fn restore() -> Self {
        let token = session::access_token();
        let user = token.as_ref().and_then(|_| session::stored_user());
        Self { loading: token.is_some(), user, token, message: None }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Record the user returned by `/users/me`.
    pub fn signed_in(&mut self, user: User) {
        session::store_user(&user);
        self.user = Some(user);
        self.loading = false;
        self.message = None;
    }

    /// Drop the session after a 401/403.
    pub fn expire(&mut self) {
        session::clear();
        self.user = None;
        self.token = None;
        self.loading = false;
        self.message = Some(SESSION_EXPIRED_MESSAGE.to_owned());
    }

    /// Expire the session if `err` is an auth rejection. Returns whether it did.
    pub fn absorb(&mut self, err: &ApiError) -> bool {
        let rejected = err.class() == ErrorClass::Auth;
        if rejected {
            self.expire();
        }
        rejected
    }
}
