//! Feedback service: public submission plus admin triage calls.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use records::{Feedback, FeedbackCreate, FeedbackStats, FeedbackUpdate};

use super::http::{ApiError, ApiRequest, Transport, call_json};
use crate::config;

/// `POST /api/v1/feedback/`. The token is optional; anonymous feedback is allowed.
#[must_use]
pub fn submit_request(token: Option<&str>, payload: &FeedbackCreate) -> ApiRequest {
    ApiRequest::post(config::feedback(), payload).bearer(token)
}

/// `PUT /api/v1/feedback/{id}` with only the changed fields.
#[must_use]
pub fn update_request(token: &str, id: &str, update: &FeedbackUpdate) -> ApiRequest {
    ApiRequest::put(config::feedback_item(id), update).bearer(Some(token))
}

/// Submit feedback.
///
/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn submit(transport: &impl Transport, token: Option<&str>, payload: &FeedbackCreate) -> Result<Feedback, ApiError> {
    call_json(transport, submit_request(token, payload)).await
}

/// List every feedback item (admin only).
///
/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn list(transport: &impl Transport, token: &str) -> Result<Vec<Feedback>, ApiError> {
    call_json(transport, ApiRequest::get(config::feedback()).bearer(Some(token))).await
}

/// Fetch admin aggregates.
///
/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn stats(transport: &impl Transport, token: &str) -> Result<FeedbackStats, ApiError> {
    call_json(transport, ApiRequest::get(config::feedback_admin_stats()).bearer(Some(token))).await
}

/// Update status, priority, or admin response of one item.
///
/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn update(
    transport: &impl Transport,
    token: &str,
    id: &str,
    update: &FeedbackUpdate,
) -> Result<Feedback, ApiError> {
    call_json(transport, update_request(token, id, update)).await
}

/// Fresh list and stats for the triage view, fetched after every change.
///
/// # Errors
///
/// Returns the first [`ApiError`] encountered.
pub async fn refresh(transport: &impl Transport, token: &str) -> Result<(Vec<Feedback>, FeedbackStats), ApiError> {
    let items = list(transport, token).await?;
    let stats = stats(transport, token).await?;
    Ok((items, stats))
}

/// Apply an update and then refetch list and stats. No local patching.
///
/// # Errors
///
/// Returns the first [`ApiError`] encountered.
pub async fn update_and_refresh(
    transport: &impl Transport,
    token: &str,
    id: &str,
    change: &FeedbackUpdate,
) -> Result<(Vec<Feedback>, FeedbackStats), ApiError> {
    update(transport, token, id, change).await?;
    refresh(transport, token).await
}
