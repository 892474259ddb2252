//! Session domain entities

use crate::core::question::Question;
use crate::outcome::Outcome;
use crate::validation::RejectionReason;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An accepted question together with the outcome the oracle returned
/// for it (Entity). Immutable once appended to the session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: Question,
    pub outcome: Outcome,
}

impl HistoryEntry {
    pub fn new(question: Question, outcome: Outcome) -> Self {
        Self { question, outcome }
    }
}

/// User-visible session error.
///
/// Display renders the fixed Spanish message for each case; the
/// presentation layer shows it verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionError {
    /// The question failed validation.
    #[error("{}", .0.message())]
    Rejected(RejectionReason),

    /// The oracle call failed (network, protocol, or malformed payload).
    #[error("Hubo un error al consultar la API.")]
    Transport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_error_renders_reason_message() {
        let err = SessionError::Rejected(RejectionReason::MalformedPunctuation);
        assert_eq!(
            err.to_string(),
            RejectionReason::MalformedPunctuation.message()
        );
    }

    #[test]
    fn transport_error_has_fixed_message() {
        assert_eq!(
            SessionError::Transport.to_string(),
            "Hubo un error al consultar la API."
        );
    }
}
