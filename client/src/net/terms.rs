//! Term discussion service: threaded comments and votes.

#[cfg(test)]
#[path = "terms_test.rs"]
mod terms_test;

use records::{Comment, CommentCreate, CommentUpdate, Vote, VoteRequest, VoteSummary};

use super::http::{ApiError, ApiRequest, Transport, call_json, call_unit};
use crate::config;

/// Comments for a term, replies nested. Readable anonymously.
///
/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn comments(transport: &impl Transport, token: Option<&str>, term_id: &str) -> Result<Vec<Comment>, ApiError> {
    call_json(transport, ApiRequest::get(config::term_comments(term_id)).bearer(token)).await
}

/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn post_comment(transport: &impl Transport, token: &str, payload: &CommentCreate) -> Result<Comment, ApiError> {
    call_json(transport, ApiRequest::post(config::comments(), payload).bearer(Some(token))).await
}

#[must_use]
pub fn edit_request(token: Option<&str>, id: &str, content: &str) -> ApiRequest {
    ApiRequest::put(config::comment(id), &CommentUpdate { content: content.to_owned() }).bearer(token)
}

#[must_use]
pub fn delete_request(token: Option<&str>, id: &str) -> ApiRequest {
    ApiRequest::delete(config::comment(id)).bearer(token)
}

/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn edit_comment(transport: &impl Transport, token: Option<&str>, id: &str, content: &str) -> Result<(), ApiError> {
    call_unit(transport, edit_request(token, id, content)).await
}

/// Soft-delete on the server; the comment stays as a tombstone.
///
/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn delete_comment(transport: &impl Transport, token: Option<&str>, id: &str) -> Result<(), ApiError> {
    call_unit(transport, delete_request(token, id)).await
}

/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn vote(transport: &impl Transport, token: &str, id: &str, vote: Vote) -> Result<VoteSummary, ApiError> {
    call_json(transport, ApiRequest::post(config::comment_vote(id), &VoteRequest { vote_type: vote }).bearer(Some(token)))
        .await
}
