//! Application layer for oraculo
//!
//! This crate defines the ports the core needs from the outside world
//! (the oracle gateway) and the [`SessionController`] use case that owns
//! the session state and orchestrates the submit/reset lifecycle.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::oracle_gateway::{OracleError, OracleGateway};
pub use use_cases::session_controller::{SessionController, Submission};
