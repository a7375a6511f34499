//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! connectivity, document styling) and pure page logic (triage, quiz) from
//! components so both can be unit tested off the browser.

pub mod appearance;
pub mod clock;
pub mod connectivity;
pub mod quiz;
pub mod session;
pub mod storage;
pub mod triage;
