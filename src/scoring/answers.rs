use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One raw response payload, shaped by the question kind it answers.
///
/// Answers arrive as arbitrary JSON; interpretation is deferred to the
/// per-kind scoring rules so malformed values degrade instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
    Other(Value),
}

impl AnswerValue {
    /// Canonical string form used as the likert map key (the decimal string
    /// of a whole number, otherwise the value's plain text rendering).
    pub(crate) fn likert_key(&self) -> String {
        match self {
            AnswerValue::Number(value) => {
                if value.fract() == 0.0 && value.is_finite() {
                    format!("{}", *value as i64)
                } else {
                    format!("{value}")
                }
            }
            AnswerValue::Text(text) => text.clone(),
            AnswerValue::Other(value) => value.to_string(),
        }
    }

    pub(crate) fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(value) => Some(*value),
            AnswerValue::Text(text) => text.trim().parse().ok(),
            AnswerValue::Other(_) => None,
        }
    }

    pub(crate) fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// The answers payload is malformed at the top level. A programming error
/// upstream, not user input noise, so it is rejected outright.
#[derive(Debug, thiserror::Error)]
pub enum AnswerSetError {
    #[error("answers payload must be a JSON object keyed by question id")]
    NotAnObject,
}

/// Ephemeral mapping from question id to raw response value.
///
/// Consumed once by the scoring engine and discarded; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet(pub BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an untyped payload, rejecting anything that is not an object.
    /// Unknown keys are kept; the engine ignores ids the blueprint does not
    /// declare.
    pub fn from_value(payload: &Value) -> Result<Self, AnswerSetError> {
        if !payload.is_object() {
            return Err(AnswerSetError::NotAnObject);
        }

        serde_json::from_value(payload.clone()).map_err(|_| AnswerSetError::NotAnObject)
    }

    pub fn insert(&mut self, question_id: impl Into<String>, value: AnswerValue) {
        self.0.insert(question_id.into(), value);
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.0.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, const LEN: usize> From<[(K, AnswerValue); LEN]> for AnswerSet {
    fn from(entries: [(K, AnswerValue); LEN]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
}
