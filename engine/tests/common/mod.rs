#![allow(dead_code)]

use funday_engine::models::catalog::Catalog;
use funday_engine::models::user::UserState;
use serde_json::{json, Value};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Catalog JSON with the full badge set and five small modules (two
/// 10-point questions each, total 20). Module 1 carries a multi-valued
/// correct answer on its second question.
pub fn test_catalog_value() -> Value {
    let mut modules = Vec::new();
    for id in 1..=5u32 {
        let questions = if id == 1 {
            json!([
                {
                    "id": "q1-1",
                    "kind": "multiple-choice",
                    "prompt": "Pick the letter B",
                    "options": ["A", "B", "C"],
                    "correctAnswer": "B",
                    "points": 10,
                    "explanation": "B it is."
                },
                {
                    "id": "q1-2",
                    "kind": "drag-drop",
                    "prompt": "Pick X or Y",
                    "options": ["X", "Y", "Z"],
                    "correctAnswer": ["X", "Y"],
                    "points": 10
                }
            ])
        } else {
            json!([
                {
                    "id": format!("q{}-1", id),
                    "kind": "multiple-choice",
                    "prompt": "First question",
                    "options": ["right", "wrong"],
                    "correctAnswer": "right",
                    "points": 10
                },
                {
                    "id": format!("q{}-2", id),
                    "kind": "multiple-choice",
                    "prompt": "Second question",
                    "options": ["right", "wrong"],
                    "correctAnswer": "right",
                    "points": 10
                }
            ])
        };
        modules.push(json!({
            "id": id,
            "title": format!("Module {}", id),
            "theme": "Test Theme",
            "description": "A test module",
            "storyline": "Once upon a time",
            "videoUrl": "https://example.com/video",
            "concepts": ["saving"],
            "quiz": {
                "id": format!("quiz-{}", id),
                "questions": questions,
                "totalScore": 20
            }
        }));
    }

    let badges: Vec<Value> = [
        ("quiz-champ", "Quiz Champ"),
        ("insurance-expert", "Insurance Expert"),
        ("investment-genius", "Investment Genius"),
        ("stock-safari-explorer", "Stock Safari Explorer"),
        ("bond-builder", "Bond Builder"),
        ("equity-knight", "Equity Knight"),
        ("story-master", "Story Master"),
    ]
    .iter()
    .map(|(id, name)| {
        json!({
            "id": id,
            "name": name,
            "icon": "🏅",
            "description": "A test badge"
        })
    })
    .collect();

    json!({ "modules": modules, "badges": badges })
}

pub fn test_catalog() -> Catalog {
    Catalog::from_json(&test_catalog_value().to_string()).expect("test catalog should validate")
}

pub fn fresh_user(catalog: &Catalog) -> UserState {
    UserState::new("Maya", "🐻", catalog)
}
