//! Pending-mutation records for the offline queue.
//!
//! A pending record describes a write the client still owes the server. It
//! carries the original payload, a snapshot of the bearer token at the time
//! of the write, and a millisecond timestamp that fixes replay order.

#[cfg(test)]
#[path = "pending_test.rs"]
mod pending_test;

use serde::{Deserialize, Serialize};

use crate::RecordError;
use crate::feedback::FeedbackCreate;
use crate::preferences::{PreferencesUpdate, UserPreferences};

/// Named record stores in the local offline database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreName {
    PendingFeedback,
    PendingCommentEdits,
    PendingCommentDeletes,
    PendingSettingsUpdates,
    /// Last preference set seen from the server, under [`PREFERENCES_CACHE_KEY`].
    UserPreferences,
}

/// Fixed key of the single cached preference record.
pub const PREFERENCES_CACHE_KEY: &str = "current";

impl StoreName {
    pub const ALL: [Self; 5] = [
        Self::PendingFeedback,
        Self::PendingCommentEdits,
        Self::PendingCommentDeletes,
        Self::PendingSettingsUpdates,
        Self::UserPreferences,
    ];

    /// Stores that hold replayable pending records.
    pub const PENDING: [Self; 4] = [
        Self::PendingFeedback,
        Self::PendingCommentEdits,
        Self::PendingCommentDeletes,
        Self::PendingSettingsUpdates,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PendingFeedback => "pendingFeedback",
            Self::PendingCommentEdits => "pendingCommentEdits",
            Self::PendingCommentDeletes => "pendingCommentDeletes",
            Self::PendingSettingsUpdates => "pendingSettingsUpdates",
            Self::UserPreferences => "userPreferences",
        }
    }
}

/// Background-sync tags registered with the service worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyncTag {
    Feedback,
    CommentEdits,
    CommentDeletes,
    Settings,
}

impl SyncTag {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feedback => "sync-feedback",
            Self::CommentEdits => "sync-comment-edits",
            Self::CommentDeletes => "sync-comment-deletes",
            Self::Settings => "sync-settings",
        }
    }
}

/// The write a pending record stands for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendingMutation {
    Feedback { payload: FeedbackCreate },
    CommentEdit { comment_id: String, content: String },
    CommentDelete { comment_id: String },
    SettingsUpdate { update: PreferencesUpdate },
}

impl PendingMutation {
    #[must_use]
    pub fn store(&self) -> StoreName {
        match self {
            Self::Feedback { .. } => StoreName::PendingFeedback,
            Self::CommentEdit { .. } => StoreName::PendingCommentEdits,
            Self::CommentDelete { .. } => StoreName::PendingCommentDeletes,
            Self::SettingsUpdate { .. } => StoreName::PendingSettingsUpdates,
        }
    }

    #[must_use]
    pub fn sync_tag(&self) -> SyncTag {
        match self {
            Self::Feedback { .. } => SyncTag::Feedback,
            Self::CommentEdit { .. } => SyncTag::CommentEdits,
            Self::CommentDelete { .. } => SyncTag::CommentDeletes,
            Self::SettingsUpdate { .. } => SyncTag::Settings,
        }
    }

    /// Short label for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Feedback { payload } => format!("feedback ({})", payload.kind),
            Self::CommentEdit { comment_id, .. } => format!("comment edit {comment_id}"),
            Self::CommentDelete { comment_id } => format!("comment delete {comment_id}"),
            Self::SettingsUpdate { .. } => "settings update".to_owned(),
        }
    }
}

/// A pending mutation as persisted in its record store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingRecord {
    pub id: String,
    #[serde(flatten)]
    pub mutation: PendingMutation,
    #[serde(default)]
    pub token: Option<String>,
    pub timestamp: i64,
}

impl PendingRecord {
    /// Decode a record read back from a store.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MalformedPending`] if the value does not match
    /// the record shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, RecordError> {
        serde_json::from_value(value).map_err(|e| RecordError::MalformedPending(e.to_string()))
    }

    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Outcome of folding an incoming record into what is already queued.
#[derive(Clone, Debug, PartialEq)]
pub struct Coalesced {
    /// Queued records made obsolete by the incoming one.
    pub remove: Vec<(StoreName, String)>,
    /// The record to persist.
    pub record: PendingRecord,
}

/// Decide how an incoming record interacts with the queue.
///
/// - A comment edit replaces earlier queued edits of the same comment.
/// - A comment delete drops queued edits and deletes of the same comment.
/// - A settings update absorbs earlier queued settings updates, later fields
///   winning, so a single record carries the combined change.
/// - Feedback submissions never coalesce.
#[must_use]
pub fn coalesce(queued: &[PendingRecord], incoming: PendingRecord) -> Coalesced {
    let mut remove = Vec::new();
    let mut record = incoming;

    let mut earlier: Vec<&PendingRecord> = queued.iter().filter(|r| r.id != record.id).collect();
    earlier.sort_by_key(|r| r.timestamp);

    match &record.mutation {
        PendingMutation::Feedback { .. } => {}
        PendingMutation::CommentEdit { comment_id, .. } => {
            for r in &earlier {
                if let PendingMutation::CommentEdit { comment_id: other, .. } = &r.mutation {
                    if other == comment_id {
                        remove.push((r.mutation.store(), r.id.clone()));
                    }
                }
            }
        }
        PendingMutation::CommentDelete { comment_id } => {
            for r in &earlier {
                let same = match &r.mutation {
                    PendingMutation::CommentEdit { comment_id: other, .. }
                    | PendingMutation::CommentDelete { comment_id: other } => other == comment_id,
                    _ => false,
                };
                if same {
                    remove.push((r.mutation.store(), r.id.clone()));
                }
            }
        }
        PendingMutation::SettingsUpdate { update } => {
            let mut combined = PreferencesUpdate::default();
            for r in &earlier {
                if let PendingMutation::SettingsUpdate { update: prior } = &r.mutation {
                    combined = combined.then(prior);
                    remove.push((r.mutation.store(), r.id.clone()));
                }
            }
            let combined = combined.then(update);
            record.mutation = PendingMutation::SettingsUpdate { update: combined };
        }
    }

    Coalesced { remove, record }
}

/// Preferences as they will look once every queued settings update lands.
#[must_use]
pub fn project_preferences(base: &UserPreferences, queued: &[PendingRecord]) -> UserPreferences {
    let mut ordered: Vec<&PendingRecord> = queued.iter().collect();
    ordered.sort_by_key(|r| r.timestamp);
    ordered.into_iter().fold(base.clone(), |prefs, r| match &r.mutation {
        PendingMutation::SettingsUpdate { update } => prefs.merged(update),
        _ => prefs,
    })
}
