use std::sync::Arc;

use serde_json::{json, Value};

use crate::attempts::repository::InMemoryAttemptRepository;
use crate::attempts::service::AttemptService;

pub(super) fn service() -> AttemptService<InMemoryAttemptRepository> {
    AttemptService::new(Arc::new(InMemoryAttemptRepository::new()))
}

pub(super) fn blueprint_document() -> Value {
    json!({
        "version": "1.0",
        "title": "Focus Check",
        "intro": {
            "headline": "How focused are you?",
            "subhead": "A two-minute check-in.",
            "disclaimer": "Self-reflection only."
        },
        "scales": [
            { "id": "C", "name": "Conscientiousness", "lowLabel": "Spontaneous", "highLabel": "Planner" },
            { "id": "E", "name": "Extraversion", "lowLabel": "Reserved", "highLabel": "Social" },
            { "id": "A", "name": "Agreeableness", "lowLabel": "Straight-shooter", "highLabel": "Connector" },
            { "id": "N", "name": "Negative Emotionality", "lowLabel": "Steady", "highLabel": "Vigilant" },
            { "id": "O", "name": "Openness", "lowLabel": "Traditional", "highLabel": "Explorer" }
        ],
        "questions": [
            { "id": "q1", "type": "likert", "scaleId": "C", "text": "I like to have a plan before I start." },
            { "id": "q2", "type": "likert", "scaleId": "C", "text": "I often put things off.", "reverse": true },
            { "id": "q3", "type": "slider", "scaleId": "E", "text": "How social is your ideal weekend?",
              "leftLabel": "Alone time", "rightLabel": "Full calendar" }
        ],
        "scoring": {
            "likertMap": { "1": -2, "2": -1, "3": 0, "4": 1, "5": 2 },
            "sliderRange": { "min": -2, "max": 2 }
        },
        "resultLabeling": {
            "method": "top2",
            "labelsByScaleHigh": { "C": "Planner", "E": "Social", "A": "Connector", "N": "Vigilant", "O": "Explorer" },
            "labelsByScaleLow": { "C": "Spontaneous", "E": "Reserved", "A": "Straight-shooter", "N": "Steady", "O": "Traditional" }
        },
        "paywall": { "priceLabel": "$3.00", "bullets": [] },
        "reportTemplate": { "sections": [] }
    })
}

pub(super) fn answers_payload() -> Value {
    json!({ "q1": 5, "q2": 1, "q3": 100 })
}
