//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page domain (`feedback_hub`, `study`, `comments`, etc.)
//! so each page depends on a small focused model. Every model is a plain
//! struct held in an `RwSignal` and provided through Leptos context, which
//! keeps the transitions unit-testable without a reactive runtime.

pub mod auth;
pub mod comments;
pub mod feedback_hub;
pub mod settings;
pub mod study;
pub mod ui;
