use std::collections::BTreeMap;

use crate::blueprint::{ProfileDefinition, ScaleId, TestBlueprint};

use super::rules::NEUTRAL_MIDPOINT;

/// Assign a normalized score vector to the nearest archetype by Euclidean
/// distance in five-dimensional trait space.
///
/// A missing score component is treated as the neutral midpoint. Ties keep
/// the first-encountered profile, so assignment is stable with respect to
/// the declared profile order. Full scan; profile lists are small and this
/// runs once per completed attempt.
pub fn assign_to_nearest_profile<'a>(
    scores: &BTreeMap<ScaleId, i64>,
    profiles: &'a [ProfileDefinition],
) -> Option<&'a ProfileDefinition> {
    let mut nearest = None;
    let mut min_distance = f64::INFINITY;

    for profile in profiles {
        let distance = ScaleId::all()
            .into_iter()
            .map(|scale| {
                let score = scores
                    .get(&scale)
                    .copied()
                    .unwrap_or(NEUTRAL_MIDPOINT) as f64;
                let delta = score - profile.prototype.component(scale);
                delta * delta
            })
            .sum::<f64>()
            .sqrt();

        if distance < min_distance {
            min_distance = distance;
            nearest = Some(profile);
        }
    }

    nearest
}

/// Compose the fallback result label from the two scales that deviate most
/// from the midpoint, highest deviation first.
///
/// The sort is stable over the blueprint's scale declaration order, which
/// fixes the tie-break; each chosen scale contributes its high- or low-pole
/// label depending on which side of the midpoint its score falls.
pub(crate) fn top_two_label(blueprint: &TestBlueprint, scores: &BTreeMap<ScaleId, i64>) -> String {
    let mut ranked: Vec<(ScaleId, i64)> = blueprint
        .scales
        .iter()
        .filter_map(|scale| scores.get(&scale.id).map(|&score| (scale.id, score)))
        .collect();
    ranked.sort_by_key(|&(_, score)| std::cmp::Reverse((score - NEUTRAL_MIDPOINT).abs()));

    let labeling = &blueprint.result_labeling;
    ranked
        .iter()
        .take(2)
        .map(|&(scale, score)| {
            let labels = if score >= NEUTRAL_MIDPOINT {
                &labeling.labels_by_scale_high
            } else {
                &labeling.labels_by_scale_low
            };
            labels.get(&scale).cloned().unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
