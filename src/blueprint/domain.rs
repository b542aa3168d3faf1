use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One of the five fixed personality-trait dimensions tracked by every quiz.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ScaleId {
    C,
    E,
    A,
    N,
    O,
}

impl ScaleId {
    /// Declaration order used for tie-breaking and iteration.
    pub const fn all() -> [Self; 5] {
        [Self::C, Self::E, Self::A, Self::N, Self::O]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::E => "E",
            Self::A => "A",
            Self::N => "N",
            Self::O => "O",
        }
    }
}

/// Display metadata for a trait scale; the codes are fixed, the labels are authored text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    pub id: ScaleId,
    pub name: String,
    pub low_label: String,
    pub high_label: String,
}

/// A single assessment item, discriminated by its `type` tag on the wire.
///
/// Each kind carries exactly one unambiguous scoring rule; the point
/// conversion matches exhaustively over these variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Question {
    Likert {
        #[serde(flatten)]
        base: QuestionBase,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reverse: Option<bool>,
    },
    Slider {
        #[serde(flatten)]
        base: QuestionBase,
        #[serde(rename = "leftLabel")]
        left_label: String,
        #[serde(rename = "rightLabel")]
        right_label: String,
    },
    Scenario {
        #[serde(flatten)]
        base: QuestionBase,
        options: Vec<ScenarioOption>,
    },
    Ab {
        #[serde(flatten)]
        base: QuestionBase,
        #[serde(rename = "optionA")]
        option_a: String,
        #[serde(rename = "optionB")]
        option_b: String,
        #[serde(rename = "scoreA")]
        score_a: f64,
        #[serde(rename = "scoreB")]
        score_b: f64,
    },
}

impl Question {
    pub fn base(&self) -> &QuestionBase {
        match self {
            Question::Likert { base, .. }
            | Question::Slider { base, .. }
            | Question::Scenario { base, .. }
            | Question::Ab { base, .. } => base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn scale_id(&self) -> ScaleId {
        self.base().scale_id
    }
}

/// Fields shared by every question kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBase {
    pub id: String,
    pub scale_id: ScaleId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One selectable branch of a scenario question.
///
/// Scores are restricted to the discrete `-2..=2` band so every question
/// kind shares the same theoretical per-question range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOption {
    pub id: String,
    pub label: String,
    pub score: i8,
}

/// Raw-answer-to-points conversion rules carried by the blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub likert_map: BTreeMap<String, f64>,
    pub slider_range: SliderRange,
}

/// Linear range a 0-100 slider input is rescaled into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

/// The five trait-score coordinates defining an archetype's position in trait space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrototypeVector {
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "E")]
    pub e: f64,
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "O")]
    pub o: f64,
}

impl PrototypeVector {
    pub const fn component(&self, scale: ScaleId) -> f64 {
        match scale {
            ScaleId::C => self.c,
            ScaleId::E => self.e,
            ScaleId::A => self.a,
            ScaleId::N => self.n,
            ScaleId::O => self.o,
        }
    }
}

/// A named, pre-authored archetype users are assigned to by nearest-prototype distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDefinition {
    pub id: String,
    pub name: String,
    pub one_line_hook: String,
    pub teaser_bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_title: Option<String>,
    pub prototype: PrototypeVector,
}

/// Labeling strategy recorded on the blueprint.
///
/// Informational only: the scoring engine branches on whether `profiles` is
/// non-empty, never on this field. Persisted blueprints may set it
/// inconsistently with the profiles array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelingMethod {
    #[serde(rename = "top2")]
    Top2,
    #[serde(rename = "nearest-prototype")]
    NearestPrototype,
}

/// Pole labels consulted by the top-2 fallback when no profile is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultLabeling {
    pub method: LabelingMethod,
    pub labels_by_scale_high: BTreeMap<ScaleId, String>,
    pub labels_by_scale_low: BTreeMap<ScaleId, String>,
}

/// Landing copy shown before the first question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroCopy {
    pub headline: String,
    pub subhead: String,
    pub disclaimer: String,
}

/// Paywall copy; irrelevant to scoring but part of the authored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaywallCopy {
    pub price_label: String,
    pub bullets: Vec<String>,
}

/// Section templates the report generator fills in per archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTemplate {
    pub sections: Vec<ReportSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub id: String,
    pub title: String,
    pub instruction: String,
}

/// The aggregate root: one quiz's complete declarative definition.
///
/// Authored once per quiz and treated as immutable once attempts have been
/// scored against it; revisions produce new versions, not mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestBlueprint {
    pub version: String,
    pub title: String,
    pub intro: IntroCopy,
    pub scales: Vec<Scale>,
    pub questions: Vec<Question>,
    pub scoring: ScoringConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<ProfileDefinition>>,
    pub result_labeling: ResultLabeling,
    pub paywall: PaywallCopy,
    pub report_template: ReportTemplate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_enabled: Option<bool>,
}

impl TestBlueprint {
    /// Profiles declared on this blueprint, empty when the optional array is absent.
    pub fn profiles(&self) -> &[ProfileDefinition] {
        self.profiles.as_deref().unwrap_or_default()
    }

    pub fn scale(&self, id: ScaleId) -> Option<&Scale> {
        self.scales.iter().find(|scale| scale.id == id)
    }
}
