//! Write flows with offline fallback.
//!
//! Each flow decides between the network and the queue: offline writes go
//! straight to the queue, online writes go to the network and fall back to
//! the queue on a connectivity-class failure. Auth and other failures are
//! returned to the caller untouched.

#[cfg(test)]
#[path = "flows_test.rs"]
mod flows_test;

use std::future::Future;

use records::pending::project_preferences;
use records::{Feedback, FeedbackCreate, PendingMutation, PendingRecord, PreferencesUpdate, UserPreferences};

use super::{OfflineQueue, RecordStore, StoreError, SyncRegistrar};
use crate::net::http::{ApiError, ErrorClass, Transport};
use crate::net::{feedback, settings, terms};

pub const NO_CACHED_SETTINGS_MESSAGE: &str =
    "No cached settings available. Connect to the internet to load your settings.";

/// Where a write ended up.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission<T> {
    Sent(T),
    Queued(PendingRecord),
}

impl<T> Submission<T> {
    #[must_use]
    pub fn is_queued(&self) -> bool {
        matches!(self, Self::Queued(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmitError {
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Api(e) => e.class(),
            Self::Store(_) => ErrorClass::Other,
        }
    }
}

async fn send_or_queue<T, S, R, F>(
    queue: &OfflineQueue<S, R>,
    online: bool,
    token: Option<&str>,
    mutation: PendingMutation,
    send: F,
) -> Result<Submission<T>, SubmitError>
where
    S: RecordStore,
    R: SyncRegistrar,
    F: Future<Output = Result<T, ApiError>>,
{
    if online {
        match send.await {
            Ok(value) => return Ok(Submission::Sent(value)),
            Err(e) if e.class() == ErrorClass::Connectivity => {
                leptos::logging::warn!("network unavailable ({e}); queueing {}", mutation.describe());
            }
            Err(e) => return Err(e.into()),
        }
    }
    let record = queue.enqueue(mutation, token.map(ToOwned::to_owned)).await?;
    Ok(Submission::Queued(record))
}

/// Submit feedback; anonymous when `token` is `None`.
///
/// # Errors
///
/// Returns [`SubmitError::Api`] for auth and server rejections, or
/// [`SubmitError::Store`] when the write could not be queued.
pub async fn submit_feedback<S: RecordStore, R: SyncRegistrar>(
    transport: &impl Transport,
    queue: &OfflineQueue<S, R>,
    online: bool,
    token: Option<&str>,
    payload: FeedbackCreate,
) -> Result<Submission<Feedback>, SubmitError> {
    let send = feedback::submit(transport, token, &payload);
    send_or_queue(queue, online, token, PendingMutation::Feedback { payload: payload.clone() }, send).await
}

/// # Errors
///
/// See [`submit_feedback`].
pub async fn edit_comment<S: RecordStore, R: SyncRegistrar>(
    transport: &impl Transport,
    queue: &OfflineQueue<S, R>,
    online: bool,
    token: Option<&str>,
    comment_id: &str,
    content: &str,
) -> Result<Submission<()>, SubmitError> {
    let mutation = PendingMutation::CommentEdit { comment_id: comment_id.to_owned(), content: content.to_owned() };
    let send = terms::edit_comment(transport, token, comment_id, content);
    send_or_queue(queue, online, token, mutation, send).await
}

/// # Errors
///
/// See [`submit_feedback`].
pub async fn delete_comment<S: RecordStore, R: SyncRegistrar>(
    transport: &impl Transport,
    queue: &OfflineQueue<S, R>,
    online: bool,
    token: Option<&str>,
    comment_id: &str,
) -> Result<Submission<()>, SubmitError> {
    let mutation = PendingMutation::CommentDelete { comment_id: comment_id.to_owned() };
    let send = terms::delete_comment(transport, token, comment_id);
    send_or_queue(queue, online, token, mutation, send).await
}

/// Save preference changes. A server response replaces the local cache;
/// queued changes are folded in when the cache is read back.
///
/// # Errors
///
/// See [`submit_feedback`].
pub async fn update_preferences<S: RecordStore, R: SyncRegistrar>(
    transport: &impl Transport,
    queue: &OfflineQueue<S, R>,
    online: bool,
    token: &str,
    update: PreferencesUpdate,
) -> Result<Submission<UserPreferences>, SubmitError> {
    let send = settings::update(transport, token, &update);
    let outcome =
        send_or_queue(queue, online, Some(token), PendingMutation::SettingsUpdate { update: update.clone() }, send)
            .await?;
    if let Submission::Sent(prefs) = &outcome {
        remember(queue, prefs).await;
    }
    Ok(outcome)
}

/// Restore server defaults. Requires a connection.
///
/// # Errors
///
/// Returns [`SubmitError::Api`] on any failure, including offline.
pub async fn reset_preferences<S: RecordStore, R: SyncRegistrar>(
    transport: &impl Transport,
    queue: &OfflineQueue<S, R>,
    online: bool,
    token: &str,
) -> Result<UserPreferences, SubmitError> {
    if !online {
        return Err(ApiError::Offline.into());
    }
    let prefs = settings::reset(transport, token).await?;
    remember(queue, &prefs).await;
    Ok(prefs)
}

async fn remember<S: RecordStore, R: SyncRegistrar>(queue: &OfflineQueue<S, R>, prefs: &UserPreferences) {
    if let Err(e) = queue.cache_preferences(prefs).await {
        leptos::logging::warn!("failed to cache preferences: {e}");
    }
}

/// Result of loading the settings page.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadedPreferences {
    /// Straight from the server; the cache now matches.
    Fresh(UserPreferences),
    /// From the local cache with queued changes applied.
    Cached(UserPreferences),
    /// Offline with nothing cached.
    Unavailable,
}

impl LoadedPreferences {
    #[must_use]
    pub fn preferences(&self) -> Option<&UserPreferences> {
        match self {
            Self::Fresh(p) | Self::Cached(p) => Some(p),
            Self::Unavailable => None,
        }
    }
}

/// Load preferences, falling back to the cache when the server is out of
/// reach.
///
/// # Errors
///
/// Returns [`SubmitError::Api`] for auth and server rejections.
pub async fn load_preferences<S: RecordStore, R: SyncRegistrar>(
    transport: &impl Transport,
    queue: &OfflineQueue<S, R>,
    online: bool,
    token: &str,
) -> Result<LoadedPreferences, SubmitError> {
    if online {
        match settings::get(transport, token).await {
            Ok(prefs) => {
                remember(queue, &prefs).await;
                return Ok(LoadedPreferences::Fresh(prefs));
            }
            Err(e) if e.class() == ErrorClass::Connectivity => {
                leptos::logging::warn!("loading preferences from cache: {e}");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let cached = match queue.cached_preferences().await {
        Ok(cached) => cached,
        Err(e) => {
            leptos::logging::warn!("preference cache unreadable: {e}");
            None
        }
    };
    let Some(base) = cached else {
        return Ok(LoadedPreferences::Unavailable);
    };
    let pending = queue.pending().await.unwrap_or_default();
    Ok(LoadedPreferences::Cached(project_preferences(&base, &pending)))
}
