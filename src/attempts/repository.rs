use std::collections::BTreeMap;
use std::sync::Mutex;

use super::domain::{AttemptId, AttemptRecord};

/// Storage abstraction so the attempt service can run against whatever the
/// surrounding application persists attempts in.
pub trait AttemptRepository: Send + Sync {
    fn insert(&self, record: AttemptRecord) -> Result<AttemptRecord, RepositoryError>;
    fn update(&self, record: AttemptRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AttemptId) -> Result<Option<AttemptRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("attempt already exists")]
    Conflict,
    #[error("attempt not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Mutex-guarded map store for tests and single-process embedding.
#[derive(Debug, Default)]
pub struct InMemoryAttemptRepository {
    records: Mutex<BTreeMap<String, AttemptRecord>>,
}

impl InMemoryAttemptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttemptRepository for InMemoryAttemptRepository {
    fn insert(&self, record: AttemptRecord) -> Result<AttemptRecord, RepositoryError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("store poisoned".to_string()))?;

        if records.contains_key(&record.attempt_id.0) {
            return Err(RepositoryError::Conflict);
        }

        records.insert(record.attempt_id.0.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AttemptRecord) -> Result<(), RepositoryError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("store poisoned".to_string()))?;

        if !records.contains_key(&record.attempt_id.0) {
            return Err(RepositoryError::NotFound);
        }

        records.insert(record.attempt_id.0.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AttemptId) -> Result<Option<AttemptRecord>, RepositoryError> {
        let records = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("store poisoned".to_string()))?;

        Ok(records.get(&id.0).cloned())
    }
}
