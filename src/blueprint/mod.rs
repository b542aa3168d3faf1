//! Quiz blueprint schema, validation, and the built-in catalog.

pub mod catalog;
pub mod domain;
mod validation;

pub use domain::{
    IntroCopy, LabelingMethod, PaywallCopy, ProfileDefinition, PrototypeVector, Question,
    QuestionBase, ReportSection, ReportTemplate, ResultLabeling, Scale, ScaleId, ScenarioOption,
    ScoringConfig, SliderRange, TestBlueprint,
};
pub use validation::{
    validate_blueprint, validate_document, BlueprintError, SchemaViolation, SchemaViolations,
    SUPPORTED_VERSION,
};
