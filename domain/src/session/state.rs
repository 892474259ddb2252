//! Session state and the pure reducer

use crate::outcome::Outcome;
use crate::session::action::Action;
use crate::session::entities::{HistoryEntry, SessionError};
use serde::Serialize;

/// Aggregate state of one interactive session.
///
/// Owned exclusively by the session controller and mutated only through
/// [`SessionState::apply`]. Invariants maintained by the reducer:
///
/// - `error` and `outcome` are never both set,
/// - `busy` is true exactly while one oracle call is in flight,
/// - history grows by one entry per successful resolution and is cleared
///   only by `Reset`,
/// - `generation` increases monotonically; a resolution tagged with an
///   older generation is discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    input: String,
    error: Option<SessionError>,
    outcome: Option<Outcome>,
    busy: bool,
    history: Vec<HistoryEntry>,
    generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// True while an oracle call is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Accepted question/outcome pairs in insertion order.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Current session generation; resolutions tagged with an older value
    /// are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply one action, producing the next state.
    ///
    /// Pure: the only way any field of the session changes.
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::InputChanged(text) => Self {
                input: text,
                error: None,
                // Supersedes any in-flight call.
                generation: self.generation + 1,
                ..self
            },
            Action::SubmitRejected(reason) => Self {
                error: Some(SessionError::Rejected(reason)),
                outcome: None,
                ..self
            },
            Action::CallStarted => Self {
                busy: true,
                error: None,
                outcome: None,
                generation: self.generation + 1,
                ..self
            },
            Action::CallSucceeded {
                generation,
                question,
                outcome,
            } => {
                if generation != self.generation {
                    return self.discard_stale_resolution();
                }
                let mut next = self;
                next.busy = false;
                next.error = None;
                next.history.push(HistoryEntry::new(question, outcome.clone()));
                next.outcome = Some(outcome);
                next
            }
            Action::CallFailed { generation } => {
                if generation != self.generation {
                    return self.discard_stale_resolution();
                }
                Self {
                    busy: false,
                    error: Some(SessionError::Transport),
                    outcome: None,
                    ..self
                }
            }
            Action::Reset => Self {
                input: String::new(),
                error: None,
                outcome: None,
                busy: self.busy,
                history: Vec::new(),
                generation: self.generation + 1,
            },
        }
    }

    /// A stale resolution only ends the flight; it never touches state
    /// belonging to the current generation.
    fn discard_stale_resolution(self) -> Self {
        Self {
            busy: false,
            ..self
        }
    }

}
