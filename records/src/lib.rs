//! Plain data records shared by the Marito client.
//!
//! Every type here mirrors a backend schema field for field so serde
//! round-trips stay lossless. The only behavior owned by this crate is the
//! handful of pure edits the client applies locally before (or instead of)
//! refetching: comment-tree updates, vote toggling, and the pending-mutation
//! bookkeeping used by the offline queue.

pub mod comment;
pub mod feedback;
pub mod learning;
pub mod pending;
pub mod preferences;
pub mod user;

mod wire;

pub use comment::{Comment, CommentCreate, CommentUpdate, Vote, VoteRequest, VoteSummary};
pub use feedback::{Feedback, FeedbackCreate, FeedbackPriority, FeedbackStats, FeedbackStatus, FeedbackType, FeedbackUpdate};
pub use learning::{
    GlossaryProgress, LearningDashboard, LearningPath, LearningPathCreate, LearningPathUpdate, ProgressUpdate,
    RandomTerm, SessionPosition, StudySession, Word, WordCounts,
};
pub use pending::{Coalesced, PREFERENCES_CACHE_KEY, PendingMutation, PendingRecord, StoreName, SyncTag};
pub use preferences::{PreferencesUpdate, TextSize, UserPreferences};
pub use user::{ProfileUpdate, User, UserRole};

/// Error returned when a record or one of its enum values cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A string did not name any variant of the given enum.
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
    /// A comment id was not present anywhere in the thread.
    #[error("comment not found: {0}")]
    CommentNotFound(String),
    /// A stored pending record could not be decoded.
    #[error("malformed pending record: {0}")]
    MalformedPending(String),
}
