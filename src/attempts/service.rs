use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::info;

use crate::blueprint::{validate_document, BlueprintError};
use crate::scoring::{AnswerSet, AnswerSetError, ScoringEngine, ScoringResult};

use super::domain::{AttemptId, AttemptRecord, AttemptStatus};
use super::repository::{AttemptRepository, RepositoryError};

static ATTEMPT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_attempt_id() -> AttemptId {
    let id = ATTEMPT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AttemptId(format!("attempt-{id:06}"))
}

/// Service composing blueprint validation, the scoring engine, and the
/// attempt store. Owns the one lifecycle invariant the engine itself does
/// not: an attempt is finalized at most once.
pub struct AttemptService<R> {
    repository: Arc<R>,
}

impl<R> AttemptService<R>
where
    R: AttemptRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate a blueprint document and open a new in-progress attempt
    /// against it.
    pub fn start(&self, blueprint_document: &Value) -> Result<AttemptRecord, AttemptServiceError> {
        let blueprint = validate_document(blueprint_document)?;

        let record = AttemptRecord {
            attempt_id: next_attempt_id(),
            blueprint,
            status: AttemptStatus::InProgress,
            started_at: Utc::now(),
            finished_at: None,
            result: None,
        };

        let stored = self.repository.insert(record)?;
        info!(attempt_id = %stored.attempt_id.0, "attempt started");
        Ok(stored)
    }

    /// Score a completed answer payload and finalize the attempt.
    ///
    /// Rejects before the engine runs when the attempt is already finished
    /// or the payload is not an object. Answers are consumed here and never
    /// stored.
    pub fn finish(
        &self,
        attempt_id: &AttemptId,
        answers: &Value,
    ) -> Result<ScoringResult, AttemptServiceError> {
        let mut record = self
            .repository
            .fetch(attempt_id)?
            .ok_or(RepositoryError::NotFound)?;

        if record.status == AttemptStatus::Finished {
            return Err(AttemptServiceError::AlreadyFinished(attempt_id.clone()));
        }

        let answers = AnswerSet::from_value(answers)?;

        let engine = ScoringEngine::new(record.blueprint.clone());
        let result = engine.score(&answers);

        record.status = AttemptStatus::Finished;
        record.finished_at = Some(Utc::now());
        record.result = Some(result.clone());
        self.repository.update(record)?;

        info!(
            attempt_id = %attempt_id.0,
            result_label = %result.result_label,
            "attempt finished"
        );
        Ok(result)
    }

    /// Fetch the current state of an attempt.
    pub fn get(&self, attempt_id: &AttemptId) -> Result<AttemptRecord, AttemptServiceError> {
        let record = self
            .repository
            .fetch(attempt_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the attempt service.
#[derive(Debug, thiserror::Error)]
pub enum AttemptServiceError {
    #[error(transparent)]
    Blueprint(#[from] BlueprintError),
    #[error(transparent)]
    Answers(#[from] AnswerSetError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("attempt {0} is already finished")]
    AlreadyFinished(AttemptId),
}
