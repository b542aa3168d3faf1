//! Trait scoring and archetype assignment.
//!
//! The engine is a pure function of a validated blueprint and a completed
//! answer set: no I/O, no randomness, no state shared across invocations.

mod answers;
mod labeling;
mod rules;

pub use answers::{AnswerSet, AnswerSetError, AnswerValue};
pub use labeling::assign_to_nearest_profile;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::blueprint::{ScaleId, TestBlueprint};

/// The single durable output of a scored attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub scores: BTreeMap<ScaleId, i64>,
    pub result_label: String,
    pub profile_id: Option<String>,
    pub profile_name: Option<String>,
}

/// Stateless scorer bound to one validated blueprint.
pub struct ScoringEngine {
    blueprint: TestBlueprint,
}

impl ScoringEngine {
    pub fn new(blueprint: TestBlueprint) -> Self {
        Self { blueprint }
    }

    pub fn blueprint(&self) -> &TestBlueprint {
        &self.blueprint
    }

    /// Compute normalized 0-100 trait scores, assign the nearest archetype
    /// when profiles are declared, and compose the result label.
    ///
    /// Deterministic for a fixed `(blueprint, answers)` pair. Questions with
    /// no answer contribute nothing to their scale; a scale with no answered
    /// questions reports the neutral midpoint.
    pub fn score(&self, answers: &AnswerSet) -> ScoringResult {
        let blueprint = &self.blueprint;

        let mut totals: BTreeMap<ScaleId, f64> = BTreeMap::new();
        let mut counts: BTreeMap<ScaleId, u32> = BTreeMap::new();
        for scale in &blueprint.scales {
            totals.insert(scale.id, 0.0);
            counts.insert(scale.id, 0);
        }

        for question in &blueprint.questions {
            let Some(answer) = answers.get(question.id()) else {
                continue;
            };

            let points = rules::question_points(question, answer, &blueprint.scoring);
            let scale = question.scale_id();
            if let (Some(total), Some(count)) = (totals.get_mut(&scale), counts.get_mut(&scale)) {
                *total += points;
                *count += 1;
            }
        }

        let scores: BTreeMap<ScaleId, i64> = blueprint
            .scales
            .iter()
            .map(|scale| {
                let raw = totals.get(&scale.id).copied().unwrap_or(0.0);
                let count = counts.get(&scale.id).copied().unwrap_or(0);
                (scale.id, rules::normalize(raw, count))
            })
            .collect();

        let assigned = assign_to_nearest_profile(&scores, blueprint.profiles());

        let result_label = match assigned {
            Some(profile) => profile.name.clone(),
            None => labeling::top_two_label(blueprint, &scores),
        };

        ScoringResult {
            scores,
            result_label,
            profile_id: assigned.map(|profile| profile.id.clone()),
            profile_name: assigned.map(|profile| profile.name.clone()),
        }
    }
}
