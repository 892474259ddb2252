//! Question value object

use serde::{Deserialize, Serialize};

/// A free-text question entered by the user (Value Object)
///
/// A question has no identity beyond its text and is immutable once
/// submitted. Whether it is *answerable* is the concern of
/// [`validate`](crate::validation::validate), not of this type: any text,
/// including blank text, is representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    text: String,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw question text, exactly as entered.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume and return the inner text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// True if the text is empty or whitespace-only.
    ///
    /// Blank questions are never submitted to the oracle; the submit
    /// operation treats them as a no-op.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}
