use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::blueprint::TestBlueprint;
use crate::scoring::ScoringResult;

/// Identifier wrapper for quiz attempts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptId(pub String);

impl std::fmt::Display for AttemptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of one user's pass through a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    InProgress,
    Finished,
}

impl AttemptStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AttemptStatus::InProgress => "in_progress",
            AttemptStatus::Finished => "finished",
        }
    }
}

/// Stored state of an attempt. Answers are never part of the record; only
/// the computed result survives finalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub attempt_id: AttemptId,
    pub blueprint: TestBlueprint,
    pub status: AttemptStatus,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub result: Option<ScoringResult>,
}

impl AttemptRecord {
    pub fn result_summary(&self) -> String {
        match &self.result {
            Some(result) => result.result_label.clone(),
            None => "pending".to_string(),
        }
    }
}
