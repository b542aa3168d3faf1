//! Attempt lifecycle: one user's pass through a quiz, scored and finalized
//! at most once.

pub mod domain;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{AttemptId, AttemptRecord, AttemptStatus};
pub use repository::{AttemptRepository, InMemoryAttemptRepository, RepositoryError};
pub use service::{AttemptService, AttemptServiceError};
