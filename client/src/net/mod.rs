//! Service wrappers for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request/response plumbing and the error taxonomy. Each domain
//! module (`feedback`, `learning`, `settings`, `terms`, `users`) builds
//! requests against the endpoints in `config` and decodes `records` types.

pub mod feedback;
pub mod http;
pub mod learning;
pub mod settings;
pub mod terms;
pub mod users;

#[cfg(test)]
pub(crate) mod fake;
