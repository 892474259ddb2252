//! Console output formatter for session state

use colored::{ColoredString, Colorize};
use oraculo_domain::{HistoryEntry, Outcome, SessionError, StyleTag};

/// Formats outcomes, errors, and history for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a resolved outcome: colored label plus the illustrative
    /// resource reference.
    pub fn format_outcome(outcome: &Outcome) -> String {
        format!(
            "{} {}\n{}\n",
            "Respuesta:".bold(),
            Self::paint(outcome.answer().label(), outcome.answer().style_tag()),
            outcome.resource().dimmed()
        )
    }

    /// Format a session error (rejection or transport failure).
    pub fn format_error(error: &SessionError) -> String {
        format!("{}\n", error.to_string().red())
    }

    /// Format the session history as a "Historial" block, one
    /// `pregunta ➜ label` line per entry in insertion order.
    pub fn format_history(history: &[HistoryEntry]) -> String {
        if history.is_empty() {
            return String::new();
        }
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Historial".cyan().bold()));
        for entry in history {
            output.push_str(&format!(
                "  {} ➜ {}\n",
                entry.question.text().bold(),
                Self::paint(
                    entry.outcome.answer().label(),
                    entry.outcome.answer().style_tag()
                )
            ));
        }
        output
    }

    /// Format an outcome as JSON.
    pub fn format_outcome_json(outcome: &Outcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a session error as JSON.
    pub fn format_error_json(error: &SessionError) -> String {
        serde_json::json!({ "error": error.to_string() }).to_string()
    }

    fn paint(text: &str, tag: StyleTag) -> ColoredString {
        match tag {
            StyleTag::Positive => text.green().bold(),
            StyleTag::Negative => text.red().bold(),
            StyleTag::Neutral => text.yellow().bold(),
            StyleTag::None => text.normal(),
        }
    }
}
