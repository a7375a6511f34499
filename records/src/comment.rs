//! Threaded term comments.
//!
//! Comments form a tree: each reply names its parent and the server returns
//! replies nested under it. Deleted comments stay in the tree as tombstones
//! so their replies remain addressable.

#[cfg(test)]
#[path = "comment_test.rs"]
mod comment_test;

use serde::{Deserialize, Serialize};

use crate::RecordError;
use crate::wire::{opt_string_or_number, string_or_number};

/// Placeholder body shown for a soft-deleted comment.
pub const DELETED_PLACEHOLDER: &str = "[deleted]";

/// Direction of a comment vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Upvote,
    Downvote,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub term_id: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    pub content: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub parent_id: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub downvotes: u32,
    #[serde(default, alias = "userVote")]
    pub user_vote: Option<Vote>,
    #[serde(default, alias = "isDeleted")]
    pub is_deleted: bool,
    #[serde(default, alias = "isEdited")]
    pub is_edited: bool,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Net score shown next to the vote buttons.
    #[must_use]
    pub fn score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }

    /// Apply the caller's vote locally with toggle semantics.
    ///
    /// Voting the same direction twice clears the vote; voting the other
    /// direction moves the count. Returns the vote now in effect.
    pub fn apply_vote(&mut self, vote: Vote) -> Option<Vote> {
        match self.user_vote {
            Some(current) if current == vote => {
                self.decrement(current);
                self.user_vote = None;
            }
            Some(current) => {
                self.decrement(current);
                self.increment(vote);
                self.user_vote = Some(vote);
            }
            None => {
                self.increment(vote);
                self.user_vote = Some(vote);
            }
        }
        self.user_vote
    }

    fn increment(&mut self, vote: Vote) {
        match vote {
            Vote::Upvote => self.upvotes += 1,
            Vote::Downvote => self.downvotes += 1,
        }
    }

    fn decrement(&mut self, vote: Vote) {
        match vote {
            Vote::Upvote => self.upvotes = self.upvotes.saturating_sub(1),
            Vote::Downvote => self.downvotes = self.downvotes.saturating_sub(1),
        }
    }

    /// Take the server's authoritative tallies after a vote round-trip.
    pub fn reconcile_votes(&mut self, summary: &VoteSummary) {
        self.upvotes = summary.upvotes;
        self.downvotes = summary.downvotes;
        self.user_vote = summary.user_vote;
    }
}

/// Body of `POST /api/v1/comments/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentCreate {
    pub term_id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Body of `PUT /api/v1/comments/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentUpdate {
    pub content: String,
}

/// Body of `POST /api/v1/comments/{id}/vote`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    pub vote_type: Vote,
}

/// Tallies returned after a vote.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteSummary {
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub downvotes: u32,
    #[serde(default)]
    pub user_vote: Option<Vote>,
}

/// Find a comment anywhere in the thread.
#[must_use]
pub fn find<'a>(thread: &'a [Comment], id: &str) -> Option<&'a Comment> {
    for comment in thread {
        if comment.id == id {
            return Some(comment);
        }
        if let Some(found) = find(&comment.replies, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find`].
pub fn find_mut<'a>(thread: &'a mut [Comment], id: &str) -> Option<&'a mut Comment> {
    for comment in thread.iter_mut() {
        if comment.id == id {
            return Some(comment);
        }
        if let Some(found) = find_mut(&mut comment.replies, id) {
            return Some(found);
        }
    }
    None
}

/// Insert a freshly created comment under its parent, or at the root.
///
/// # Errors
///
/// Returns [`RecordError::CommentNotFound`] if the parent is not in the thread.
pub fn insert(thread: &mut Vec<Comment>, comment: Comment) -> Result<(), RecordError> {
    match comment.parent_id.clone() {
        None => {
            thread.push(comment);
            Ok(())
        }
        Some(parent_id) => {
            let parent = find_mut(thread, &parent_id).ok_or(RecordError::CommentNotFound(parent_id))?;
            parent.replies.push(comment);
            Ok(())
        }
    }
}

/// Replace a comment's body and flag it as edited.
///
/// # Errors
///
/// Returns [`RecordError::CommentNotFound`] if the id is not in the thread.
pub fn edit(thread: &mut [Comment], id: &str, content: &str) -> Result<(), RecordError> {
    let comment = find_mut(thread, id).ok_or_else(|| RecordError::CommentNotFound(id.to_owned()))?;
    content.clone_into(&mut comment.content);
    comment.is_edited = true;
    Ok(())
}

/// Tombstone a comment, keeping its replies in place.
///
/// # Errors
///
/// Returns [`RecordError::CommentNotFound`] if the id is not in the thread.
pub fn soft_delete(thread: &mut [Comment], id: &str) -> Result<(), RecordError> {
    let comment = find_mut(thread, id).ok_or_else(|| RecordError::CommentNotFound(id.to_owned()))?;
    comment.is_deleted = true;
    DELETED_PLACEHOLDER.clone_into(&mut comment.content);
    Ok(())
}

/// Number of comments in the thread, replies and tombstones included.
#[must_use]
pub fn count(thread: &[Comment]) -> usize {
    thread.iter().map(|c| 1 + count(&c.replies)).sum()
}
