use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::error::{AppError, Result};

#[derive(Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

impl AskRequest {
    /// The question from a raw request body, if present and non-empty.
    ///
    /// Bodies that are not JSON objects, or whose `question` is not a string,
    /// are treated the same as a missing question.
    pub fn question_from_body(body: &[u8]) -> Result<String> {
        serde_json::from_slice::<AskRequest>(body)
            .ok()
            .and_then(|req| req.question)
            .filter(|q| !q.is_empty())
            .ok_or(AppError::MissingQuestion)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReasoningStep {
    pub level: String,
    pub text: String,
    pub source: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub translation: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JargonTerm {
    pub term: String,
    pub translation: String,
    pub explanation: String,
}

/// The answer contract the model is instructed to produce.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPayload {
    pub can_answer: bool,
    pub answer: String,
    pub reasoning: Vec<ReasoningStep>,
    pub sources: Vec<String>,
    pub confidence: f64,
    pub domain: Domain,
    pub jargon: Vec<JargonTerm>,
    pub chabad_note: Option<String>,
}

impl AnswerPayload {
    pub fn validate(value: &Value) -> Result<Self> {
        let payload = AnswerPayload::deserialize(value)
            .map_err(|e| AppError::InvalidAnswerShape(e.to_string()))?;
        if !(0.0..=100.0).contains(&payload.confidence) {
            return Err(AppError::InvalidAnswerShape(format!(
                "confidence {} outside 0-100",
                payload.confidence
            )));
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "canAnswer": true,
            "answer": "Yes.",
            "reasoning": [{"level": "Shulchan Arukh", "text": "It is permitted.", "source": null}],
            "sources": ["Shulchan Arukh, Orach Chaim 426:1"],
            "confidence": 90,
            "domain": {"name": "Kashrut", "translation": "Dietary Law"},
            "jargon": [{"term": "pareve", "translation": "neutral", "explanation": "Neither meat nor dairy"}],
            "chabadNote": null
        })
    }

    #[test]
    fn question_present() {
        let q = AskRequest::question_from_body(br#"{"question": "Can I eat X?"}"#).unwrap();
        assert_eq!(q, "Can I eat X?");
    }

    #[test]
    fn question_missing_or_falsy() {
        let bodies: [&[u8]; 6] = [
            br#"{}"#,
            br#"{"question": ""}"#,
            br#"{"question": null}"#,
            br#"{"question": 42}"#,
            br#"not json"#,
            b"",
        ];
        for body in bodies {
            assert!(matches!(
                AskRequest::question_from_body(body),
                Err(AppError::MissingQuestion)
            ));
        }
    }

    #[test]
    fn valid_payload() {
        let payload = AnswerPayload::validate(&sample()).unwrap();
        assert!(payload.can_answer);
        assert_eq!(payload.domain.translation, "Dietary Law");
        assert!(payload.chabad_note.is_none());
    }

    #[test]
    fn confidence_out_of_range() {
        let mut value = sample();
        value["confidence"] = json!(140);
        assert!(matches!(
            AnswerPayload::validate(&value),
            Err(AppError::InvalidAnswerShape(_))
        ));
    }

    #[test]
    fn missing_field() {
        assert!(AnswerPayload::validate(&json!({})).is_err());
    }
}
