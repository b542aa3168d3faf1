//! Ready-made blueprint definitions.
//!
//! The Big Five discovery quiz ships with the platform and doubles as the
//! reference fixture for the scoring engine: thirty questions across all
//! four kinds, five scales, and sixteen archetype profiles.

use std::collections::BTreeMap;

use super::domain::{
    IntroCopy, LabelingMethod, PaywallCopy, ProfileDefinition, PrototypeVector, Question,
    QuestionBase, ReportSection, ReportTemplate, ResultLabeling, Scale, ScaleId, ScenarioOption,
    ScoringConfig, SliderRange, TestBlueprint,
};
use super::validation::SUPPORTED_VERSION;

/// The standard Big Five personality discovery blueprint.
pub fn big_five() -> TestBlueprint {
    TestBlueprint {
        version: SUPPORTED_VERSION.to_string(),
        title: "Big Five Personality Discovery".to_string(),
        intro: IntroCopy {
            headline: "Uncover the Architecture of Your Personality".to_string(),
            subhead: "Based on the scientifically-validated Big Five model, this discovery tool \
                      reveals which of 16 personality archetypes best describes you."
                .to_string(),
            disclaimer: "This test is for educational and self-reflection purposes. It is not a \
                         diagnostic tool or medical assessment."
                .to_string(),
        },
        scales: big_five_scales(),
        questions: big_five_questions(),
        scoring: ScoringConfig {
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
        },
        profiles: Some(big_five_profiles()),
        result_labeling: ResultLabeling {
            method: LabelingMethod::NearestPrototype,
            labels_by_scale_high: pole_labels([
                (ScaleId::C, "Planner"),
                (ScaleId::E, "Social"),
                (ScaleId::A, "Connector"),
                (ScaleId::N, "Vigilant"),
                (ScaleId::O, "Explorer"),
            ]),
            labels_by_scale_low: pole_labels([
                (ScaleId::C, "Spontaneous"),
                (ScaleId::E, "Reserved"),
                (ScaleId::A, "Straight-shooter"),
                (ScaleId::N, "Steady"),
                (ScaleId::O, "Traditional"),
            ]),
        },
        paywall: PaywallCopy {
            price_label: "$3.00".to_string(),
            bullets: vec![
                "Deep dive into your unique archetype".to_string(),
                "Personalized strengths and growth areas".to_string(),
                "Actionable advice for work, relationships, and stress".to_string(),
                "Professional PDF report for your records".to_string(),
            ],
        },
        report_template: ReportTemplate {
            sections: vec![
                report_section(
                    "overview",
                    "Your Personality Landscape",
                    "Summarize the overall personality profile based on archetype and trait scores.",
                ),
                report_section(
                    "work",
                    "Professional Performance",
                    "Discuss how their archetype influences work-life and leadership.",
                ),
                report_section(
                    "relationships",
                    "Interpersonal Dynamics",
                    "Explain their communication and relationship style based on archetype.",
                ),
                report_section(
                    "growth",
                    "Actionable Growth",
                    "Provide 3 specific tips for personal development tailored to archetype.",
                ),
            ],
        },
        images_enabled: None,
    }
}

fn big_five_scales() -> Vec<Scale> {
    vec![
        scale(ScaleId::C, "Conscientiousness", "Spontaneous", "Planner"),
        scale(ScaleId::E, "Extraversion", "Reserved", "Social"),
        scale(ScaleId::A, "Agreeableness", "Straight-shooter", "Connector"),
        scale(ScaleId::N, "Negative Emotionality", "Steady", "Vigilant"),
        scale(ScaleId::O, "Openness", "Traditional", "Explorer"),
    ]
}

fn big_five_questions() -> Vec<Question> {
    vec![
        // Conscientiousness
        likert("q1", ScaleId::C, "I like to have a plan before I start."),
        likert_reversed(
            "q2",
            ScaleId::C,
            "I often put things off even when they matter.",
        ),
        likert("q3", ScaleId::C, "I usually follow through on what I promise."),
        likert_reversed(
            "q4",
            ScaleId::C,
            "I often lose track when I have many things to do.",
        ),
        scenario(
            "q23",
            ScaleId::C,
            "You have a deadline tomorrow, and a friend invites you out tonight. What do you do most often?",
            vec![
                option("A", "Go out — I'll deal with it tomorrow.", -2),
                option("B", "Decline — I want to finish first.", 2),
                option("C", "Join briefly, then work later.", 1),
                option("D", "I feel stressed and end up doing both halfway.", -1),
            ],
        ),
        slider(
            "q25",
            ScaleId::C,
            "How much do you plan ahead for a trip?",
            "Wing it entirely",
            "Detailed itinerary",
        ),
        // Extraversion
        likert("q5", ScaleId::E, "I get energized by being around people."),
        likert(
            "q6",
            ScaleId::E,
            "I often speak up in a group when decisions are being made.",
        ),
        likert_reversed(
            "q7",
            ScaleId::E,
            "I'm happy spending several days mostly on my own.",
        ),
        likert(
            "q8",
            ScaleId::E,
            "Small talk with new people feels fairly easy to me.",
        ),
        scenario(
            "q24",
            ScaleId::E,
            "At a get-together where you know few people, what usually happens?",
            vec![
                option("A", "I quickly find someone new to talk to.", 2),
                option("B", "I mostly stick with the people I know.", 1),
                option("C", "I end up observing more than participating.", -1),
                option("D", "I leave early to recharge.", -2),
            ],
        ),
        ab(
            "q29",
            ScaleId::E,
            "How do you process your thoughts?",
            "I think out loud with others",
            "I think best alone",
            2.0,
            -2.0,
        ),
        // Agreeableness
        likert(
            "q9",
            ScaleId::A,
            "I try to understand how the other person feels, even when I disagree.",
        ),
        likert_reversed(
            "q10",
            ScaleId::A,
            "I can be direct in a way others experience as harsh.",
        ),
        likert(
            "q11",
            ScaleId::A,
            "I forgive quickly when someone makes an honest mistake.",
        ),
        likert_reversed(
            "q12",
            ScaleId::A,
            "I care more about winning arguments than finding a solution.",
        ),
        scenario(
            "q27",
            ScaleId::A,
            "A friend says something that hurts you. What do you do most often?",
            vec![
                option("A", "I calmly say it affected me and ask what they meant.", 2),
                option("B", "I let it go and hope it improves.", 1),
                option("C", "I confront it directly, without sugarcoating.", -1),
                option("D", "I get sarcastic back.", -2),
            ],
        ),
        ab(
            "q28",
            ScaleId::A,
            "What do you value more in communication?",
            "Harmony matters; I look for common ground",
            "Honesty matters most; I say it plainly",
            2.0,
            -2.0,
        ),
        // Negative Emotionality
        likert(
            "q13",
            ScaleId::N,
            "I often worry about things that could go wrong.",
        ),
        likert(
            "q14",
            ScaleId::N,
            "Small problems can show up in my body as stress or tension.",
        ),
        likert_reversed(
            "q15",
            ScaleId::N,
            "I usually stay calm when something unexpected happens.",
        ),
        likert(
            "q16",
            ScaleId::N,
            "I get irritated easily when things don't go as planned.",
        ),
        likert(
            "q17",
            ScaleId::N,
            "I can replay a conversation in my head for a long time afterward.",
        ),
        slider(
            "q26",
            ScaleId::N,
            "When you receive criticism, how long does it linger?",
            "Bounces right off",
            "Replays for days",
        ),
        // Openness
        likert(
            "q18",
            ScaleId::O,
            "I enjoy learning new things just because it's interesting.",
        ),
        likert_reversed(
            "q19",
            ScaleId::O,
            "I prefer safe, familiar solutions over new ways of doing things.",
        ),
        likert(
            "q20",
            ScaleId::O,
            "Art, culture, or ideas can make me think in new ways.",
        ),
        likert(
            "q21",
            ScaleId::O,
            "I get curious when I meet someone who sees the world very differently.",
        ),
        likert_reversed(
            "q22",
            ScaleId::O,
            "I'm most comfortable when weeks are predictable and similar.",
        ),
        ab(
            "q30",
            ScaleId::O,
            "What is your preference for trying new things?",
            "I try new things even if the outcome is uncertain",
            "I prefer what I know works",
            2.0,
            -2.0,
        ),
    ]
}

fn big_five_profiles() -> Vec<ProfileDefinition> {
    vec![
        profile(
            "the-architect",
            "The Architect",
            "Strategic visionary who builds systems and sees the big picture",
            [
                "Discover why your mind naturally creates frameworks",
                "Learn how to leverage your long-term thinking",
                "Unlock your strategic planning superpowers",
            ],
            prototype(85.0, 40.0, 50.0, 35.0, 80.0),
        ),
        profile(
            "the-explorer",
            "The Explorer",
            "Adventurous spirit who thrives on novelty and discovery",
            [
                "Understand your drive for new experiences",
                "Learn to channel your curiosity productively",
                "Find careers that match your adventurous nature",
            ],
            prototype(30.0, 65.0, 55.0, 40.0, 90.0),
        ),
        profile(
            "the-commander",
            "The Commander",
            "Natural leader who organizes people and drives results",
            [
                "Discover your leadership strengths",
                "Learn how to inspire without overwhelming",
                "Master the balance of authority and approachability",
            ],
            prototype(80.0, 85.0, 45.0, 30.0, 55.0),
        ),
        profile(
            "the-diplomat",
            "The Diplomat",
            "Harmonizing connector who builds bridges between people",
            [
                "Understand your gift for reading social dynamics",
                "Learn to set boundaries while staying warm",
                "Leverage your natural mediation abilities",
            ],
            prototype(55.0, 75.0, 85.0, 45.0, 60.0),
        ),
        profile(
            "the-analyst",
            "The Analyst",
            "Deep thinker who finds patterns others miss",
            [
                "Discover why your mind craves understanding",
                "Learn to share insights without overwhelming",
                "Find the thinking environments that suit you",
            ],
            prototype(75.0, 25.0, 50.0, 40.0, 80.0),
        ),
        profile(
            "the-mediator",
            "The Mediator",
            "Empathetic supporter who creates safe spaces for others",
            [
                "Understand your deep capacity for empathy",
                "Learn to protect your energy while helping",
                "Find your unique way of making a difference",
            ],
            prototype(50.0, 30.0, 85.0, 55.0, 70.0),
        ),
        profile(
            "the-performer",
            "The Performer",
            "Creative extrovert who lights up every room",
            [
                "Discover how to channel your expressive energy",
                "Learn when to shine and when to share the stage",
                "Find creative outlets that fulfill you",
            ],
            prototype(40.0, 90.0, 60.0, 45.0, 85.0),
        ),
        profile(
            "the-sentinel",
            "The Sentinel",
            "Reliable guardian who protects traditions and people",
            [
                "Understand your drive for stability and order",
                "Learn to embrace change when it matters",
                "Discover your role as a trusted anchor",
            ],
            prototype(85.0, 50.0, 65.0, 50.0, 25.0),
        ),
        profile(
            "the-advocate",
            "The Advocate",
            "Idealistic helper driven by values and vision",
            [
                "Discover the causes that ignite your passion",
                "Learn to sustain your energy for the long haul",
                "Find ways to make impact without burnout",
            ],
            prototype(60.0, 55.0, 85.0, 55.0, 80.0),
        ),
        profile(
            "the-entrepreneur",
            "The Entrepreneur",
            "Bold opportunist who turns ideas into action",
            [
                "Discover your appetite for calculated risk",
                "Learn to pair momentum with follow-through",
                "Find ventures that reward your energy",
            ],
            prototype(65.0, 85.0, 35.0, 30.0, 70.0),
        ),
        profile(
            "the-maverick",
            "The Maverick",
            "Independent original who questions every convention",
            [
                "Understand your resistance to the beaten path",
                "Learn when breaking rules serves you",
                "Channel your originality into lasting work",
            ],
            prototype(55.0, 25.0, 30.0, 35.0, 85.0),
        ),
        profile(
            "the-guardian",
            "The Guardian",
            "Devoted caretaker who keeps the people around them safe",
            [
                "Discover the roots of your loyalty",
                "Learn to care for yourself as fiercely as others",
                "Find the communities that value your steadiness",
            ],
            prototype(75.0, 55.0, 90.0, 50.0, 45.0),
        ),
        profile(
            "the-free-spirit",
            "The Free Spirit",
            "Easygoing wanderer who follows inspiration wherever it leads",
            [
                "Understand your need for open horizons",
                "Learn to commit without feeling caged",
                "Find rhythms that keep your spark alive",
            ],
            prototype(20.0, 60.0, 55.0, 25.0, 85.0),
        ),
        profile(
            "the-perfectionist",
            "The Perfectionist",
            "Meticulous craftsperson who holds everything to a high bar",
            [
                "Discover where your standards come from",
                "Learn to finish without endless polishing",
                "Turn self-critique into steady growth",
            ],
            prototype(70.0, 40.0, 75.0, 80.0, 45.0),
        ),
        profile(
            "the-traditionalist",
            "The Traditionalist",
            "Grounded realist who trusts what has stood the test of time",
            [
                "Understand your respect for proven ways",
                "Learn to adopt change on your own terms",
                "Find strength in your sense of continuity",
            ],
            prototype(70.0, 50.0, 50.0, 30.0, 25.0),
        ),
        profile(
            "the-visionary",
            "The Visionary",
            "Big-picture dreamer who pulls others toward tomorrow",
            [
                "Understand your gift for inspiration",
                "Learn to execute on your grand ideas",
                "Find partners who complement your vision",
            ],
            prototype(35.0, 80.0, 60.0, 40.0, 90.0),
        ),
    ]
}

fn scale(id: ScaleId, name: &str, low_label: &str, high_label: &str) -> Scale {
    Scale {
        id,
        name: name.to_string(),
        low_label: low_label.to_string(),
        high_label: high_label.to_string(),
    }
}

fn base(id: &str, scale_id: ScaleId, text: &str) -> QuestionBase {
    QuestionBase {
        id: id.to_string(),
        scale_id,
        text: text.to_string(),
        image_prompt: None,
        image_url: None,
    }
}

fn likert(id: &str, scale_id: ScaleId, text: &str) -> Question {
    Question::Likert {
        base: base(id, scale_id, text),
        reverse: None,
    }
}

fn likert_reversed(id: &str, scale_id: ScaleId, text: &str) -> Question {
    Question::Likert {
        base: base(id, scale_id, text),
        reverse: Some(true),
    }
}

fn slider(id: &str, scale_id: ScaleId, text: &str, left: &str, right: &str) -> Question {
    Question::Slider {
        base: base(id, scale_id, text),
        left_label: left.to_string(),
        right_label: right.to_string(),
    }
}

fn scenario(id: &str, scale_id: ScaleId, text: &str, options: Vec<ScenarioOption>) -> Question {
    Question::Scenario {
        base: base(id, scale_id, text),
        options,
    }
}

fn option(id: &str, label: &str, score: i8) -> ScenarioOption {
    ScenarioOption {
        id: id.to_string(),
        label: label.to_string(),
        score,
    }
}

fn ab(
    id: &str,
    scale_id: ScaleId,
    text: &str,
    option_a: &str,
    option_b: &str,
    score_a: f64,
    score_b: f64,
) -> Question {
    Question::Ab {
        base: base(id, scale_id, text),
        option_a: option_a.to_string(),
        option_b: option_b.to_string(),
        score_a,
        score_b,
    }
}

fn profile(
    id: &str,
    name: &str,
    hook: &str,
    bullets: [&str; 3],
    prototype: PrototypeVector,
) -> ProfileDefinition {
    ProfileDefinition {
        id: id.to_string(),
        name: name.to_string(),
        one_line_hook: hook.to_string(),
        teaser_bullets: bullets.iter().map(|bullet| bullet.to_string()).collect(),
        share_title: Some(format!("I'm {name}")),
        prototype,
    }
}

const fn prototype(c: f64, e: f64, a: f64, n: f64, o: f64) -> PrototypeVector {
    PrototypeVector { c, e, a, n, o }
}

fn pole_labels<const LEN: usize>(pairs: [(ScaleId, &str); LEN]) -> BTreeMap<ScaleId, String> {
    pairs
        .into_iter()
        .map(|(id, label)| (id, label.to_string()))
        .collect()
}

fn report_section(id: &str, title: &str, instruction: &str) -> ReportSection {
    ReportSection {
        id: id.to_string(),
        title: title.to_string(),
        instruction: instruction.to_string(),
    }
}
