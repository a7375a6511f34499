//! Term discussion thread state.
//!
//! Local edits mirror what the backend will do so the thread updates
//! immediately, including while the write sits in the offline queue.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use records::comment::{self, find_mut};
use records::{Comment, RecordError, Vote, VoteSummary};

#[derive(Clone, Debug, Default)]
pub struct CommentsState {
    pub term_id: String,
    pub thread: Vec<Comment>,
    pub loading: bool,
    pub error: Option<String>,
    /// Comment whose reply box is open.
    pub reply_to: Option<String>,
    /// Comment being edited in place.
    pub editing: Option<String>,
}

impl CommentsState {
    #[must_use]
    pub fn for_term(term_id: &str) -> Self {
        Self { term_id: term_id.to_owned(), loading: true, ..Self::default() }
    }

    pub fn loaded(&mut self, thread: Vec<Comment>) {
        self.thread = thread;
        self.loading = false;
        self.error = None;
    }

    /// Add a newly posted comment under its parent.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::CommentNotFound`] if the parent is gone.
    pub fn posted(&mut self, created: Comment) -> Result<(), RecordError> {
        comment::insert(&mut self.thread, created)?;
        self.reply_to = None;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`RecordError::CommentNotFound`] for an unknown id.
    pub fn edited(&mut self, id: &str, content: &str) -> Result<(), RecordError> {
        comment::edit(&mut self.thread, id, content)?;
        self.editing = None;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`RecordError::CommentNotFound`] for an unknown id.
    pub fn deleted(&mut self, id: &str) -> Result<(), RecordError> {
        comment::soft_delete(&mut self.thread, id)
    }

    /// Apply a vote locally. Returns the vote now in effect.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::CommentNotFound`] for an unknown id.
    pub fn vote(&mut self, id: &str, vote: Vote) -> Result<Option<Vote>, RecordError> {
        let target = find_mut(&mut self.thread, id).ok_or_else(|| RecordError::CommentNotFound(id.to_owned()))?;
        Ok(target.apply_vote(vote))
    }

    /// Current tallies of one comment, kept before an optimistic vote so a
    /// rejected vote can be rolled back through [`CommentsState::reconcile`].
    #[must_use]
    pub fn tallies(&self, id: &str) -> Option<VoteSummary> {
        comment::find(&self.thread, id).map(|c| VoteSummary {
            upvotes: c.upvotes,
            downvotes: c.downvotes,
            user_vote: c.user_vote,
        })
    }

    /// Replace local tallies with the server's, or with a snapshot.
    pub fn reconcile(&mut self, id: &str, summary: &VoteSummary) {
        if let Some(target) = find_mut(&mut self.thread, id) {
            target.reconcile_votes(summary);
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        comment::count(&self.thread)
    }

    #[must_use]
    pub fn count_label(&self) -> String {
        match self.count() {
            1 => "1 comment".to_owned(),
            n => format!("{n} comments"),
        }
    }
}
