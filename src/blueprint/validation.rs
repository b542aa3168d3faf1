use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;

use super::domain::{Question, ScaleId, TestBlueprint};

/// The single blueprint schema tag this crate understands. A forward
/// compatibility guard, not a negotiation protocol.
pub const SUPPORTED_VERSION: &str = "1.0";

const SCENARIO_SCORE_MIN: i8 = -2;
const SCENARIO_SCORE_MAX: i8 = 2;

/// Structural violations raised while checking a deserialized blueprint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("unsupported blueprint version {found:?} (expected {SUPPORTED_VERSION:?})")]
    UnsupportedVersion { found: String },
    #[error(
        "question {question_id:?} option {option_id:?} has score {score} outside {SCENARIO_SCORE_MIN}..={SCENARIO_SCORE_MAX}"
    )]
    ScenarioScoreOutOfRange {
        question_id: String,
        option_id: String,
        score: i8,
    },
    #[error("question {question_id:?} references scale {scale:?} not declared by the blueprint")]
    UnknownScaleReference { question_id: String, scale: ScaleId },
}

/// Failure to turn a document into a usable blueprint. Fatal for the
/// document as a whole; a blueprint is never partially accepted.
#[derive(Debug, thiserror::Error)]
pub enum BlueprintError {
    #[error("blueprint document is not well-formed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Schema(SchemaViolations),
}

/// Aggregate of every structural violation found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolations(pub Vec<SchemaViolation>);

impl fmt::Display for SchemaViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blueprint failed schema validation: ")?;
        for (index, violation) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Parse an untyped JSON document into a validated [`TestBlueprint`].
///
/// Deserialization enforces the closed shape domains (scale codes, question
/// type tags, labeling method, discrete option scores); the structural pass
/// then collects every remaining violation into one aggregate error.
pub fn validate_document(document: &Value) -> Result<TestBlueprint, BlueprintError> {
    let blueprint: TestBlueprint = serde_json::from_value(document.clone())?;
    validate_blueprint(&blueprint)?;
    Ok(blueprint)
}

/// Check the structural invariants of an already-deserialized blueprint.
///
/// Side-effect free: validating the same blueprint twice yields the same
/// verdict and never mutates the input.
pub fn validate_blueprint(blueprint: &TestBlueprint) -> Result<(), BlueprintError> {
    let mut violations = Vec::new();

    if blueprint.version != SUPPORTED_VERSION {
        violations.push(SchemaViolation::UnsupportedVersion {
            found: blueprint.version.clone(),
        });
    }

    let declared: BTreeSet<ScaleId> = blueprint.scales.iter().map(|scale| scale.id).collect();

    for question in &blueprint.questions {
        if !declared.contains(&question.scale_id()) {
            violations.push(SchemaViolation::UnknownScaleReference {
                question_id: question.id().to_string(),
                scale: question.scale_id(),
            });
        }

        if let Question::Scenario { options, base } = question {
            for option in options {
                if !(SCENARIO_SCORE_MIN..=SCENARIO_SCORE_MAX).contains(&option.score) {
                    violations.push(SchemaViolation::ScenarioScoreOutOfRange {
                        question_id: base.id.clone(),
                        option_id: option.id.clone(),
                        score: option.score,
                    });
                }
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(BlueprintError::Schema(SchemaViolations(violations)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::catalog;
    use serde_json::json;

    fn minimal_document() -> Value {
        json!({
            "version": "1.0",
            "title": "Minimal",
            "intro": {
                "headline": "h",
                "subhead": "s",
                "disclaimer": "d"
            },
            "scales": [
                { "id": "C", "name": "Conscientiousness", "lowLabel": "Spontaneous", "highLabel": "Planner" }
            ],
            "questions": [
                { "id": "q1", "type": "likert", "scaleId": "C", "text": "I plan ahead." }
            ],
            "scoring": {
                "likertMap": { "1": -2, "2": -1, "3": 0, "4": 1, "5": 2 },
                "sliderRange": { "min": -2, "max": 2 }
            },
            "resultLabeling": {
                "method": "top2",
                "labelsByScaleHigh": { "C": "Planner" },
                "labelsByScaleLow": { "C": "Spontaneous" }
            },
            "paywall": { "priceLabel": "$3.00", "bullets": [] },
            "reportTemplate": { "sections": [] }
        })
    }

    #[test]
    fn accepts_minimal_document() {
        let blueprint = validate_document(&minimal_document()).expect("valid document");
        assert_eq!(blueprint.version, SUPPORTED_VERSION);
        assert_eq!(blueprint.questions.len(), 1);
        assert!(blueprint.profiles().is_empty());
    }

    #[test]
    fn rejects_unknown_version() {
        let mut document = minimal_document();
        document["version"] = json!("2.0");

        match validate_document(&document) {
            Err(BlueprintError::Schema(SchemaViolations(violations))) => {
                assert_eq!(
                    violations,
                    vec![SchemaViolation::UnsupportedVersion {
                        found: "2.0".to_string()
                    }]
                );
            }
            other => panic!("expected schema violation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_scale_code() {
        let mut document = minimal_document();
        document["scales"][0]["id"] = json!("X");

        assert!(matches!(
            validate_document(&document),
            Err(BlueprintError::Parse(_))
        ));
    }

    #[test]
    fn rejects_unknown_question_type_tag() {
        let mut document = minimal_document();
        document["questions"][0]["type"] = json!("ranking");

        assert!(matches!(
            validate_document(&document),
            Err(BlueprintError::Parse(_))
        ));
    }

    #[test]
    fn rejects_fractional_scenario_score() {
        let mut document = minimal_document();
        document["questions"][0] = json!({
            "id": "q1",
            "type": "scenario",
            "scaleId": "C",
            "text": "Pick one.",
            "options": [
                { "id": "a", "label": "A", "score": 1.5 }
            ]
        });

        assert!(matches!(
            validate_document(&document),
            Err(BlueprintError::Parse(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_scenario_score() {
        let mut document = minimal_document();
        document["questions"][0] = json!({
            "id": "q1",
            "type": "scenario",
            "scaleId": "C",
            "text": "Pick one.",
            "options": [
                { "id": "a", "label": "A", "score": 3 }
            ]
        });

        match validate_document(&document) {
            Err(BlueprintError::Schema(SchemaViolations(violations))) => {
                assert_eq!(
                    violations,
                    vec![SchemaViolation::ScenarioScoreOutOfRange {
                        question_id: "q1".to_string(),
                        option_id: "a".to_string(),
                        score: 3,
                    }]
                );
            }
            other => panic!("expected schema violation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_question_referencing_undeclared_scale() {
        let mut document = minimal_document();
        document["questions"][0]["scaleId"] = json!("E");

        match validate_document(&document) {
            Err(BlueprintError::Schema(SchemaViolations(violations))) => {
                assert_eq!(
                    violations,
                    vec![SchemaViolation::UnknownScaleReference {
                        question_id: "q1".to_string(),
                        scale: ScaleId::E,
                    }]
                );
            }
            other => panic!("expected schema violation, got {other:?}"),
        }
    }

    #[test]
    fn collects_every_violation_in_one_pass() {
        let mut document = minimal_document();
        document["version"] = json!("0.9");
        document["questions"][0]["scaleId"] = json!("O");

        match validate_document(&document) {
            Err(BlueprintError::Schema(SchemaViolations(violations))) => {
                assert_eq!(violations.len(), 2);
            }
            other => panic!("expected schema violations, got {other:?}"),
        }
    }

    #[test]
    fn revalidation_is_idempotent() {
        let document = minimal_document();
        let first = validate_document(&document).expect("valid");
        let second = validate_document(&document).expect("still valid");
        assert_eq!(first, second);
    }

    #[test]
    fn catalog_blueprint_round_trips_through_validation() {
        let blueprint = catalog::big_five();
        let document = serde_json::to_value(&blueprint).expect("serializes");
        let revalidated = validate_document(&document).expect("catalog blueprint is valid");
        assert_eq!(revalidated, blueprint);
    }
}
