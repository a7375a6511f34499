//! Learning service: paths, glossary progress, and study sessions.

#[cfg(test)]
#[path = "learning_test.rs"]
mod learning_test;

use records::{
    GlossaryProgress, LearningDashboard, LearningPath, LearningPathCreate, LearningPathUpdate, ProgressUpdate,
    RandomTerm, SessionPosition, StudySession, WordCounts,
};

use super::http::{ApiError, ApiRequest, Transport, call_json, call_unit};
use crate::config;

/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn list_paths(transport: &impl Transport, token: &str) -> Result<Vec<LearningPath>, ApiError> {
    call_json(transport, ApiRequest::get(config::learning_paths()).bearer(Some(token))).await
}

/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn create_path(
    transport: &impl Transport,
    token: &str,
    payload: &LearningPathCreate,
) -> Result<LearningPath, ApiError> {
    call_json(transport, ApiRequest::post(config::learning_paths(), payload).bearer(Some(token))).await
}

/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn update_path(
    transport: &impl Transport,
    token: &str,
    id: &str,
    payload: &LearningPathUpdate,
) -> Result<LearningPath, ApiError> {
    call_json(transport, ApiRequest::put(config::learning_path(id), payload).bearer(Some(token))).await
}

/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn delete_path(transport: &impl Transport, token: &str, id: &str) -> Result<(), ApiError> {
    call_unit(transport, ApiRequest::delete(config::learning_path(id)).bearer(Some(token))).await
}

/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn glossary_progress(
    transport: &impl Transport,
    token: &str,
    glossary: &str,
) -> Result<GlossaryProgress, ApiError> {
    call_json(transport, ApiRequest::get(config::glossary_progress(glossary)).bearer(Some(token))).await
}

/// Words for one glossary plus the saved position.
///
/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn study_session(transport: &impl Transport, token: &str, glossary: &str) -> Result<StudySession, ApiError> {
    call_json(transport, ApiRequest::get(config::study_session(glossary)).bearer(Some(token))).await
}

/// Record a word as known or unknown.
///
/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn update_progress(transport: &impl Transport, token: &str, update: &ProgressUpdate) -> Result<(), ApiError> {
    call_unit(transport, ApiRequest::post(config::learning_progress(), update).bearer(Some(token))).await
}

/// Persist where the user is in a glossary.
///
/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn update_position(
    transport: &impl Transport,
    token: &str,
    glossary: &str,
    position: u32,
) -> Result<(), ApiError> {
    let body = SessionPosition { last_position: position };
    call_unit(transport, ApiRequest::put(config::session_position(glossary), &body).bearer(Some(token))).await
}

/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn word_counts(transport: &impl Transport, token: &str) -> Result<WordCounts, ApiError> {
    call_json(transport, ApiRequest::get(config::word_counts()).bearer(Some(token))).await
}

/// Distractor pool for quiz mode.
///
/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn random_terms(transport: &impl Transport, token: &str, count: usize) -> Result<Vec<RandomTerm>, ApiError> {
    call_json(transport, ApiRequest::get(config::random_terms(count)).bearer(Some(token))).await
}

/// # Errors
///
/// Returns an [`ApiError`] from the transport or backend.
pub async fn dashboard(transport: &impl Transport, token: &str) -> Result<LearningDashboard, ApiError> {
    call_json(transport, ApiRequest::get(config::learning_dashboard()).bearer(Some(token))).await
}
