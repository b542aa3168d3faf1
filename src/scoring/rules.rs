use crate::blueprint::{Question, ScoringConfig};

use super::answers::AnswerValue;

/// Midpoint reported for scales with no answered questions.
pub(crate) const NEUTRAL_MIDPOINT: i64 = 50;

/// Theoretical per-question point bound; every question kind is calibrated
/// to the same `[-2, +2]` band (sliders and AB scores may exceed it, which
/// propagates into the normalized result rather than being rejected).
const POINTS_PER_QUESTION: f64 = 2.0;

/// Convert one raw answer into signed points for its question's scale.
///
/// Never fails: unmapped likert values, unmatched scenario options, and
/// non-numeric slider input all degrade to neutral zero so one bad answer
/// cannot abort the attempt.
pub(crate) fn question_points(
    question: &Question,
    answer: &AnswerValue,
    config: &ScoringConfig,
) -> f64 {
    match question {
        Question::Likert { reverse, .. } => {
            let mapped = config
                .likert_map
                .get(&answer.likert_key())
                .copied()
                .unwrap_or(0.0);
            if reverse.unwrap_or(false) {
                -mapped
            } else {
                mapped
            }
        }
        Question::Slider { .. } => {
            // 0..100 rescaled linearly into the configured range, unclamped.
            // Non-numeric input degrades to neutral zero points.
            let range = config.slider_range;
            answer
                .as_number()
                .map(|value| range.min + (value / 100.0) * (range.max - range.min))
                .unwrap_or(0.0)
        }
        Question::Scenario { options, .. } => answer
            .as_text()
            .and_then(|picked| options.iter().find(|option| option.id == picked))
            .map(|option| f64::from(option.score))
            .unwrap_or(0.0),
        // A strict two-way branch: anything other than the literal "A"
        // resolves to the B score, including garbage and empty strings.
        Question::Ab {
            score_a, score_b, ..
        } => {
            if answer.as_text() == Some("A") {
                *score_a
            } else {
                *score_b
            }
        }
    }
}

/// Rescale an accumulated raw total into the 0-100 display range.
///
/// The theoretical range for `count` answered questions is
/// `[-2 * count, +2 * count]`; zero answered questions yields the neutral
/// midpoint instead of dividing by zero.
pub(crate) fn normalize(raw: f64, count: u32) -> i64 {
    if count == 0 {
        return NEUTRAL_MIDPOINT;
    }

    let min = -POINTS_PER_QUESTION * f64::from(count);
    let max = POINTS_PER_QUESTION * f64::from(count);
    (((raw - min) / (max - min)) * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::{Question, QuestionBase, ScaleId, ScenarioOption, SliderRange};
    use std::collections::BTreeMap;

    fn config() -> ScoringConfig {
        ScoringConfig {
            likert_map: BTreeMap::from([
                ("1".to_string(), -2.0),
                ("2".to_string(), -1.0),
                ("3".to_string(), 0.0),
                ("4".to_string(), 1.0),
                ("5".to_string(), 2.0),
            ]),
            slider_range: SliderRange {
                min: -2.0,
                max: 2.0,
            },
        }
    }

    fn base(id: &str) -> QuestionBase {
        QuestionBase {
            id: id.to_string(),
            scale_id: ScaleId::C,
            text: "test".to_string(),
            image_prompt: None,
            image_url: None,
        }
    }

    #[test]
    fn likert_maps_and_reverses() {
        let plain = Question::Likert {
            base: base("q1"),
            reverse: None,
        };
        let reversed = Question::Likert {
            base: base("q2"),
            reverse: Some(true),
        };
        let five = AnswerValue::Number(5.0);

        assert_eq!(question_points(&plain, &five, &config()), 2.0);
        assert_eq!(question_points(&reversed, &five, &config()), -2.0);
    }

    #[test]
    fn likert_unmapped_value_scores_zero() {
        let question = Question::Likert {
            base: base("q1"),
            reverse: None,
        };
        let answer = AnswerValue::Number(9.0);

        assert_eq!(question_points(&question, &answer, &config()), 0.0);
    }

    #[test]
    fn slider_rescales_without_clamping() {
        let question = Question::Slider {
            base: base("q1"),
            left_label: "left".to_string(),
            right_label: "right".to_string(),
        };

        assert_eq!(
            question_points(&question, &AnswerValue::Number(0.0), &config()),
            -2.0
        );
        assert_eq!(
            question_points(&question, &AnswerValue::Number(50.0), &config()),
            0.0
        );
        assert_eq!(
            question_points(&question, &AnswerValue::Number(100.0), &config()),
            2.0
        );
        // Out-of-range input propagates, it is not rejected.
        assert_eq!(
            question_points(&question, &AnswerValue::Number(200.0), &config()),
            6.0
        );
        // Numeric strings coerce; garbage degrades to neutral zero points.
        assert_eq!(
            question_points(&question, &AnswerValue::Text("75".to_string()), &config()),
            1.0
        );
        assert_eq!(
            question_points(&question, &AnswerValue::Text("garbage".to_string()), &config()),
            0.0
        );
    }

    #[test]
    fn scenario_unmatched_option_scores_zero() {
        let question = Question::Scenario {
            base: base("q1"),
            options: vec![ScenarioOption {
                id: "a".to_string(),
                label: "A".to_string(),
                score: 2,
            }],
        };

        assert_eq!(
            question_points(&question, &AnswerValue::Text("a".to_string()), &config()),
            2.0
        );
        assert_eq!(
            question_points(&question, &AnswerValue::Text("nope".to_string()), &config()),
            0.0
        );
    }

    #[test]
    fn ab_branches_strictly_on_literal_a() {
        let question = Question::Ab {
            base: base("q1"),
            option_a: "A side".to_string(),
            option_b: "B side".to_string(),
            score_a: 2.0,
            score_b: -2.0,
        };

        assert_eq!(
            question_points(&question, &AnswerValue::Text("A".to_string()), &config()),
            2.0
        );
        assert_eq!(
            question_points(&question, &AnswerValue::Text("B".to_string()), &config()),
            -2.0
        );
        // Garbage resolves to the B score, not a neutral default.
        assert_eq!(
            question_points(&question, &AnswerValue::Text(String::new()), &config()),
            -2.0
        );
        assert_eq!(
            question_points(&question, &AnswerValue::Number(1.0), &config()),
            -2.0
        );
    }

    #[test]
    fn normalize_maps_theoretical_extremes_to_bounds() {
        assert_eq!(normalize(-6.0, 3), 0);
        assert_eq!(normalize(6.0, 3), 100);
        assert_eq!(normalize(0.0, 3), 50);
    }

    #[test]
    fn normalize_rounds_to_nearest_integer() {
        // raw 1 over one question: ((1 + 2) / 4) * 100 = 75
        assert_eq!(normalize(1.0, 1), 75);
        // raw 1 over three questions: ((1 + 6) / 12) * 100 = 58.33..
        assert_eq!(normalize(1.0, 3), 58);
    }

    #[test]
    fn normalize_defaults_unanswered_scales_to_midpoint() {
        assert_eq!(normalize(0.0, 0), NEUTRAL_MIDPOINT);
    }
}
