//! Oracle gateway port
//!
//! Defines the interface for the external oracle service that answers a
//! validated question with sí / no / tal vez plus an illustrative
//! resource.

use async_trait::async_trait;
use oraculo_domain::Outcome;
use thiserror::Error;

/// Errors that can occur while consulting the oracle.
///
/// The session layer collapses every variant into the single user-visible
/// transport message; the variants exist for logging and tests.
#[derive(Error, Debug)]
pub enum OracleError {
    /// Connection, timeout, or HTTP-level failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The oracle answered with a body the protocol cannot decode.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

/// Gateway to the oracle service.
///
/// The oracle is stateless and context-free: it takes no parameters, not
/// even the question text. One call per accepted submission.
#[async_trait]
pub trait OracleGateway: Send + Sync {
    /// Fetch one outcome from the oracle.
    async fn fetch_outcome(&self) -> Result<Outcome, OracleError>;
}
