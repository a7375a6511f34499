//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (service calls, offline
//! fallback, error reporting) and delegates rendering details to
//! `components`.

pub mod feedback;
pub mod feedback_hub;
pub mod learning_path;
pub mod profile;
pub mod settings;
pub mod term_detail;
