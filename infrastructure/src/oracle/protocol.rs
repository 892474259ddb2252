//! Wire format of the yesno.wtf oracle
//!
//! `GET /api` returns a JSON document like:
//!
//! ```json
//! {"answer": "yes", "forced": false, "image": "https://yesno.wtf/assets/yes/2.gif"}
//! ```

use oraculo_domain::{Answer, Outcome};
use serde::Deserialize;

/// One oracle response as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleResponse {
    pub answer: Answer,
    /// Whether the answer was forced (`/api?force=...`). Decoded for wire
    /// compatibility, unused.
    #[serde(default)]
    pub forced: bool,
    pub image: String,
}

impl From<OracleResponse> for Outcome {
    fn from(response: OracleResponse) -> Self {
        Outcome::new(response.answer, response.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_real_payload() {
        let body = r#"{"answer":"yes","forced":false,"image":"https://yesno.wtf/assets/yes/2.gif"}"#;
        let response: OracleResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.answer, Answer::Yes);
        assert!(!response.forced);

        let outcome: Outcome = response.into();
        assert_eq!(outcome.answer(), Answer::Yes);
        assert_eq!(outcome.resource(), "https://yesno.wtf/assets/yes/2.gif");
    }

    #[test]
    fn decodes_maybe_without_forced_field() {
        let body = r#"{"answer":"maybe","image":"https://yesno.wtf/assets/maybe/1.gif"}"#;
        let response: OracleResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.answer, Answer::Maybe);
        assert!(!response.forced);
    }

    #[test]
    fn unknown_answer_word_fails_to_decode() {
        let body = r#"{"answer":"perhaps","forced":false,"image":"x"}"#;
        assert!(serde_json::from_str::<OracleResponse>(body).is_err());
    }
}
