//! Question validation pipeline
//!
//! A fixed chain of lexical heuristics decides whether a question is
//! eligible for the oracle, i.e. answerable with sí / no / tal vez.
//! Rules run in a fixed order and the first failing rule determines the
//! [`RejectionReason`].
//!
//! The detectors are intentionally naive substring matches inherited from
//! the original heuristics: `" o "` also matches inside longer phrases,
//! and the open-ended word list matches anywhere in the text. Do not
//! tighten them to token boundaries.

use serde::{Deserialize, Serialize};

/// Interrogative content words that mark a question as open-ended.
///
/// Matched case-insensitively as plain substrings.
const OPEN_ENDED_WORDS: &[&str] = &[
    "qué",
    "cuál",
    "cuáles",
    "cómo",
    "cuándo",
    "dónde",
    "por qué",
    "porque",
];

/// The disjunction connector that marks a multiple-choice question.
const CHOICE_CONNECTOR: &str = " o ";

/// Why a question was rejected by the validation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionReason {
    /// Missing or mismatched question marks (`¿...?` or `...?`).
    MalformedPunctuation,
    /// Contains the `" o "` disjunction connector.
    MultipleChoice,
    /// Contains an interrogative content word (`qué`, `cómo`, ...).
    OpenEnded,
}

impl RejectionReason {
    /// The fixed user-visible message for this rejection.
    pub fn message(&self) -> &'static str {
        match self {
            RejectionReason::MalformedPunctuation => {
                "La pregunta debe terminar con un signo de interrogación (¿...? o ...?)."
            }
            RejectionReason::MultipleChoice | RejectionReason::OpenEnded => {
                "No puedo responder este tipo de preguntas. Hacé una pregunta que se pueda responder con sí, no o tal vez."
            }
        }
    }
}

/// The validator's classification of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Rejected(RejectionReason),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// Classify raw question text.
///
/// Pure and deterministic; rule order decides which single reason is
/// reported when several rules would fail.
pub fn validate(text: &str) -> Verdict {
    if !has_interrogative_form(text) {
        return Verdict::Rejected(RejectionReason::MalformedPunctuation);
    }
    if is_multiple_choice(text) {
        return Verdict::Rejected(RejectionReason::MultipleChoice);
    }
    if is_open_ended(text) {
        return Verdict::Rejected(RejectionReason::OpenEnded);
    }
    Verdict::Valid
}

/// Accepts the paired form `¿...?` and the plain form `...?`.
///
/// The only rejected shapes are an opening mark without a closing one and
/// text with no closing mark at all.
fn has_interrogative_form(text: &str) -> bool {
    let opens = text.starts_with('¿');
    let closes = text.trim_end().ends_with('?');
    (opens && closes) || (!opens && closes)
}

fn is_multiple_choice(text: &str) -> bool {
    text.to_lowercase().contains(CHOICE_CONNECTOR)
}

fn is_open_ended(text: &str) -> bool {
    let lowered = text.to_lowercase();
    OPEN_ENDED_WORDS.iter().any(|word| lowered.contains(word))
}
