//! Blueprint schema and trait-scoring engine for archetype-based
//! personality quizzes.
//!
//! A [`blueprint::TestBlueprint`] declares a quiz: five trait scales,
//! questions of four kinds, raw-answer conversion rules, and optionally a
//! set of archetype profiles positioned in trait space. The
//! [`scoring::ScoringEngine`] turns a completed answer set into normalized
//! 0-100 trait scores plus a result label, classifying into the nearest
//! archetype when profiles are declared. The [`attempts`] module wraps both
//! in a small lifecycle service that guarantees each attempt is scored at
//! most once.
//!
//! Persistence, HTTP, payments, and content generation are external
//! collaborators; this crate only consumes and produces plain serializable
//! documents.

pub mod attempts;
pub mod blueprint;
pub mod scoring;

pub use blueprint::{validate_document, BlueprintError, TestBlueprint};
pub use scoring::{AnswerSet, ScoringEngine, ScoringResult};
