//! Session actions

use crate::core::question::Question;
use crate::outcome::Outcome;
use crate::validation::RejectionReason;

/// A state transition request for [`SessionState::apply`].
///
/// Resolution actions carry the generation that was current when their
/// oracle call started; the reducer discards them when a later
/// `InputChanged`, `CallStarted`, or `Reset` has bumped the generation
/// since.
///
/// [`SessionState::apply`]: crate::session::state::SessionState::apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user edited the input text.
    InputChanged(String),

    /// A submission failed validation.
    SubmitRejected(RejectionReason),

    /// A validated submission started an oracle call.
    CallStarted,

    /// The in-flight oracle call resolved successfully.
    CallSucceeded {
        generation: u64,
        question: Question,
        outcome: Outcome,
    },

    /// The in-flight oracle call failed.
    CallFailed { generation: u64 },

    /// Explicit user reset of the whole session.
    Reset,
}
