//! Session state machine
//!
//! The whole lifecycle of a query — editing, validation, the in-flight
//! oracle call, resolution — is expressed as [`Action`]s applied to a
//! [`SessionState`] by the pure reducer [`SessionState::apply`].

pub mod action;
pub mod entities;
pub mod state;

pub use action::Action;
pub use entities::{HistoryEntry, SessionError};
pub use state::SessionState;
