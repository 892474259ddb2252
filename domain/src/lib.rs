//! Domain layer for oraculo
//!
//! This crate contains the core business logic: the question validation
//! pipeline and the session state machine. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Validation pipeline
//!
//! Free-text questions pass through a fixed chain of lexical heuristics
//! before they may be sent to the oracle:
//!
//! 1. Punctuation form: `¿...?` paired or plain `...?`
//! 2. Multiple-choice detector: the `" o "` connector
//! 3. Open-ended detector: interrogative content words (`qué`, `cómo`, ...)
//!
//! The first failing rule determines the rejection reason.
//!
//! ## Session state machine
//!
//! One [`SessionState`] per session, mutated exclusively through the pure
//! reducer [`SessionState::apply`]. The asynchronous oracle call is modelled
//! as a generation-tagged [`Action`] so that a stale resolution can never
//! overwrite state belonging to a later session generation.

pub mod core;
pub mod outcome;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use crate::core::question::Question;
pub use outcome::{Answer, Outcome, StyleTag, style_tag_for};
pub use session::{
    action::Action,
    entities::{HistoryEntry, SessionError},
    state::SessionState,
};
pub use validation::{RejectionReason, Verdict, validate};
