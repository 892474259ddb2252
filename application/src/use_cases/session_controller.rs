//! Session controller use case
//!
//! Owns the [`SessionState`] for one interactive session and drives a
//! query through validation, the oracle call, and resolution. The only
//! component permitted to mutate session state, and it does so
//! exclusively through the domain reducer.

use crate::ports::oracle_gateway::OracleGateway;
use oraculo_domain::validation::{Verdict, validate};
use oraculo_domain::{Action, Outcome, Question, RejectionReason, SessionState};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What a call to [`SessionController::submit`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Nothing happened: a call was already in flight or the input was
    /// blank.
    Ignored,
    /// Validation rejected the question; no oracle call was made.
    Rejected(RejectionReason),
    /// The oracle answered and the result was recorded.
    Resolved(Outcome),
    /// The oracle call failed; the transport error is on the state.
    Failed,
}

/// Drives the submit/reset lifecycle over one [`SessionState`].
///
/// Single-flight: `submit` is a no-op while a call is in flight, so at
/// most one oracle call is ever outstanding.
pub struct SessionController {
    oracle: Arc<dyn OracleGateway>,
    state: SessionState,
}

impl SessionController {
    pub fn new(oracle: Arc<dyn OracleGateway>) -> Self {
        Self {
            oracle,
            state: SessionState::new(),
        }
    }

    /// Read access to the full session state for the presentation layer.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Record an input edit. Clears any prior error; validation is
    /// deferred to [`submit`](Self::submit).
    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.apply(Action::InputChanged(text.into()));
    }

    /// Validate the current input and, if it passes, consult the oracle.
    pub async fn submit(&mut self) -> Submission {
        if self.state.is_busy() {
            debug!("submit ignored: a consultation is already in flight");
            return Submission::Ignored;
        }
        let question = Question::new(self.state.input());
        if question.is_blank() {
            debug!("submit ignored: blank input");
            return Submission::Ignored;
        }

        match validate(question.text()) {
            Verdict::Rejected(reason) => {
                info!(?reason, "question rejected by validation");
                self.apply(Action::SubmitRejected(reason));
                Submission::Rejected(reason)
            }
            Verdict::Valid => {
                self.apply(Action::CallStarted);
                let generation = self.state.generation();
                info!(%question, "consulting the oracle");
                match self.oracle.fetch_outcome().await {
                    Ok(outcome) => {
                        self.apply(Action::CallSucceeded {
                            generation,
                            question,
                            outcome: outcome.clone(),
                        });
                        Submission::Resolved(outcome)
                    }
                    Err(err) => {
                        warn!(error = %err, "oracle call failed");
                        self.apply(Action::CallFailed { generation });
                        Submission::Failed
                    }
                }
            }
        }
    }

    /// Return the session to its initial empty form. An in-flight call,
    /// if any, will be discarded when it resolves.
    pub fn reset(&mut self) {
        self.apply(Action::Reset);
    }

    fn apply(&mut self, action: Action) {
        self.state = std::mem::take(&mut self.state).apply(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::oracle_gateway::OracleError;
    use async_trait::async_trait;
    use oraculo_domain::{Answer, SessionError};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Oracle stub with scripted results and a call counter.
    struct StubOracle {
        script: Mutex<VecDeque<Result<Outcome, OracleError>>>,
        calls: AtomicUsize,
    }

    impl StubOracle {
        fn answering(results: Vec<Result<Outcome, OracleError>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(results.into()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl OracleGateway for StubOracle {
        async fn fetch_outcome(&self) -> Result<Outcome, OracleError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .expect("oracle called more times than scripted")
        }
    }

    fn yes() -> Outcome {
        Outcome::new(Answer::Yes, "img1")
    }

    #[tokio::test]
    async fn valid_question_resolves_and_records_history() {
        let oracle = StubOracle::answering(vec![Ok(yes())]);
        let mut controller = SessionController::new(oracle.clone());

        controller.on_input_change("¿Va a llover?");
        let submission = controller.submit().await;

        assert_eq!(submission, Submission::Resolved(yes()));
        let state = controller.state();
        assert_eq!(state.outcome().unwrap().answer(), Answer::Yes);
        assert!(state.error().is_none());
        assert!(!state.is_busy());
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].question.text(), "¿Va a llover?");
        assert_eq!(oracle.calls(), 1);
    }

    #[tokio::test]
    async fn multiple_choice_question_is_rejected_without_a_call() {
        let oracle = StubOracle::answering(vec![Ok(yes())]);
        let mut controller = SessionController::new(oracle.clone());

        // A prior successful run...
        controller.on_input_change("¿Va a llover?");
        controller.submit().await;

        // ...then a rejected one.
        controller.on_input_change("Llueve o no llueve?");
        let submission = controller.submit().await;

        assert_eq!(
            submission,
            Submission::Rejected(RejectionReason::MultipleChoice)
        );
        let state = controller.state();
        assert_eq!(
            state.error(),
            Some(&SessionError::Rejected(RejectionReason::MultipleChoice))
        );
        // Error and outcome are never both set.
        assert!(state.outcome().is_none());
        assert_eq!(state.history().len(), 1);
        assert_eq!(oracle.calls(), 1);
    }

    #[tokio::test]
    async fn open_ended_question_is_rejected() {
        let oracle = StubOracle::answering(vec![]);
        let mut controller = SessionController::new(oracle.clone());

        controller.on_input_change("Qué hora es?");
        let submission = controller.submit().await;

        assert_eq!(submission, Submission::Rejected(RejectionReason::OpenEnded));
        assert_eq!(oracle.calls(), 0);
    }

    #[tokio::test]
    async fn missing_question_mark_is_rejected() {
        let oracle = StubOracle::answering(vec![]);
        let mut controller = SessionController::new(oracle.clone());

        controller.on_input_change("hola");
        let submission = controller.submit().await;

        assert_eq!(
            submission,
            Submission::Rejected(RejectionReason::MalformedPunctuation)
        );
        assert_eq!(oracle.calls(), 0);
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let oracle = StubOracle::answering(vec![]);
        let mut controller = SessionController::new(oracle.clone());

        assert_eq!(controller.submit().await, Submission::Ignored);
        controller.on_input_change("   ");
        assert_eq!(controller.submit().await, Submission::Ignored);
        assert_eq!(oracle.calls(), 0);
    }

    #[tokio::test]
    async fn submit_while_busy_is_ignored() {
        let oracle = StubOracle::answering(vec![]);
        let mut controller = SessionController::new(oracle.clone());

        controller.on_input_change("¿Va a llover?");
        // Put the session into the in-flight state directly.
        controller.apply(Action::CallStarted);
        let before = controller.state().clone();

        assert_eq!(controller.submit().await, Submission::Ignored);
        assert_eq!(controller.state(), &before);
        assert_eq!(oracle.calls(), 0);
    }

    #[tokio::test]
    async fn transport_failure_sets_fixed_error_and_skips_history() {
        let oracle = StubOracle::answering(vec![Err(OracleError::Transport(
            "connection refused".into(),
        ))]);
        let mut controller = SessionController::new(oracle.clone());

        controller.on_input_change("¿Va a llover?");
        let submission = controller.submit().await;

        assert_eq!(submission, Submission::Failed);
        let state = controller.state();
        assert_eq!(state.error(), Some(&SessionError::Transport));
        assert!(state.outcome().is_none());
        assert!(!state.is_busy());
        assert!(state.history().is_empty());
    }

    #[tokio::test]
    async fn repeated_input_changes_do_not_change_the_verdict() {
        let oracle = StubOracle::answering(vec![]);
        let mut controller = SessionController::new(oracle.clone());

        for _ in 0..5 {
            controller.on_input_change("Qué hora es?");
        }
        assert_eq!(
            controller.submit().await,
            Submission::Rejected(RejectionReason::OpenEnded)
        );
    }

    #[tokio::test]
    async fn history_length_counts_only_successes() {
        let oracle = StubOracle::answering(vec![
            Ok(yes()),
            Err(OracleError::Transport("timeout".into())),
            Ok(Outcome::new(Answer::Maybe, "img2")),
        ]);
        let mut controller = SessionController::new(oracle.clone());

        controller.on_input_change("¿Llueve?");
        controller.submit().await;
        controller.on_input_change("¿Nieva?");
        controller.submit().await;
        controller.on_input_change("Qué hora es?");
        controller.submit().await;
        controller.on_input_change("¿Truena?");
        controller.submit().await;

        let history = controller.state().history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].question.text(), "¿Llueve?");
        assert_eq!(history[1].question.text(), "¿Truena?");
        assert_eq!(oracle.calls(), 3);
    }

    #[tokio::test]
    async fn reset_returns_to_the_initial_form() {
        let oracle = StubOracle::answering(vec![Ok(yes())]);
        let mut controller = SessionController::new(oracle.clone());

        controller.on_input_change("¿Va a llover?");
        controller.submit().await;
        controller.reset();

        let state = controller.state();
        assert_eq!(state.input(), "");
        assert!(state.error().is_none());
        assert!(state.outcome().is_none());
        assert!(state.history().is_empty());
    }
}
