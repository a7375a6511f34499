//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, comment threads, and page chrome. They take
//! data and callbacks as props; pages own the service calls.

pub mod comment_item;
pub mod error_banner;
pub mod flashcard;
pub mod glossary_card;
pub mod language_card;
pub mod pagination;
pub mod profile_edit;
