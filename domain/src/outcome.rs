//! Oracle outcome and display mapping

use serde::{Deserialize, Serialize};

/// The oracle's ternary answer.
///
/// Serialized lowercase to match the wire format (`"yes"` / `"no"` /
/// `"maybe"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    Maybe,
}

impl Answer {
    /// Localized display word for the answer.
    pub fn label(&self) -> &'static str {
        match self {
            Answer::Yes => "Sí",
            Answer::No => "No",
            Answer::Maybe => "Tal vez",
        }
    }

    /// Style tag used by the presentation layer to pick a color.
    pub fn style_tag(&self) -> StyleTag {
        match self {
            Answer::Yes => StyleTag::Positive,
            Answer::No => StyleTag::Negative,
            Answer::Maybe => StyleTag::Neutral,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A resolved oracle response: the answer plus an illustrative resource
/// reference (an image URL on the current oracle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    answer: Answer,
    resource: String,
}

impl Outcome {
    pub fn new(answer: Answer, resource: impl Into<String>) -> Self {
        Self {
            answer,
            resource: resource.into(),
        }
    }

    pub fn answer(&self) -> Answer {
        self.answer
    }

    /// Opaque resource reference supplied by the oracle.
    pub fn resource(&self) -> &str {
        &self.resource
    }
}

/// Presentation hint derived from an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Positive,
    Negative,
    Neutral,
    /// No outcome to display.
    None,
}

/// Style tag for an optional outcome; `None` maps to [`StyleTag::None`].
pub fn style_tag_for(outcome: Option<&Outcome>) -> StyleTag {
    match outcome {
        Some(o) => o.answer().style_tag(),
        None => StyleTag::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_spanish() {
        assert_eq!(Answer::Yes.label(), "Sí");
        assert_eq!(Answer::No.label(), "No");
        assert_eq!(Answer::Maybe.label(), "Tal vez");
    }

    #[test]
    fn style_tags_cover_every_answer() {
        assert_eq!(Answer::Yes.style_tag(), StyleTag::Positive);
        assert_eq!(Answer::No.style_tag(), StyleTag::Negative);
        assert_eq!(Answer::Maybe.style_tag(), StyleTag::Neutral);
    }

    #[test]
    fn missing_outcome_maps_to_none() {
        assert_eq!(style_tag_for(None), StyleTag::None);
        let outcome = Outcome::new(Answer::Yes, "img1");
        assert_eq!(style_tag_for(Some(&outcome)), StyleTag::Positive);
    }

    #[test]
    fn answer_deserializes_from_wire_words() {
        let answer: Answer = serde_json::from_str("\"maybe\"").unwrap();
        assert_eq!(answer, Answer::Maybe);
    }
}
