mod common;

use funday_engine::error::CatalogError;
use funday_engine::models::catalog::Catalog;
use serde_json::json;

fn parse(value: serde_json::Value) -> Result<Catalog, CatalogError> {
    Catalog::from_json(&value.to_string())
}

#[test]
fn shipped_catalog_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json");
    let catalog = Catalog::load(path).expect("shipped catalog must validate");

    assert_eq!(catalog.module_count(), 5);
    assert_eq!(catalog.badges().len(), 7);
    for module in catalog.modules() {
        assert_eq!(module.quiz.total_score, 50);
        assert_eq!(module.quiz.points_sum(), 50);
    }
    for badge_id in [
        "quiz-champ",
        "insurance-expert",
        "investment-genius",
        "stock-safari-explorer",
        "bond-builder",
        "equity-knight",
        "story-master",
    ] {
        assert!(catalog.badge(badge_id).is_some(), "missing badge {badge_id}");
    }
}

#[test]
fn declared_total_score_must_match_question_points() {
    let mut value = common::test_catalog_value();
    value["modules"][0]["quiz"]["totalScore"] = json!(99);

    match parse(value) {
        Err(CatalogError::TotalScoreMismatch {
            module_id,
            declared,
            actual,
            ..
        }) => {
            assert_eq!(module_id, 1);
            assert_eq!(declared, 99);
            assert_eq!(actual, 20);
        }
        other => panic!("expected TotalScoreMismatch, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn oversized_question_points_surface_as_a_mismatch() {
    let mut value = common::test_catalog_value();
    value["modules"][0]["quiz"]["questions"][0]["points"] = json!(3_000_000_000u32);
    value["modules"][0]["quiz"]["questions"][1]["points"] = json!(3_000_000_000u32);

    match parse(value) {
        Err(CatalogError::TotalScoreMismatch { actual, .. }) => {
            assert_eq!(actual, 6_000_000_000);
        }
        other => panic!("expected TotalScoreMismatch, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn duplicate_module_ids_are_rejected() {
    let mut value = common::test_catalog_value();
    value["modules"][1]["id"] = json!(1);

    assert!(matches!(parse(value), Err(CatalogError::DuplicateModule(1))));
}

#[test]
fn duplicate_badge_ids_are_rejected() {
    let mut value = common::test_catalog_value();
    value["badges"][1]["id"] = json!("quiz-champ");

    assert!(matches!(parse(value), Err(CatalogError::DuplicateBadge(_))));
}

#[test]
fn automatically_granted_badges_must_be_defined() {
    for missing in ["quiz-champ", "story-master", "insurance-expert"] {
        let mut value = common::test_catalog_value();
        let badges: Vec<_> = value["badges"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|b| b["id"] != missing)
            .cloned()
            .collect();
        value["badges"] = serde_json::Value::Array(badges);

        match parse(value) {
            Err(CatalogError::MissingRewardBadge(id)) => assert_eq!(id, missing),
            other => panic!(
                "expected MissingRewardBadge for {missing}, got {:?}",
                other.map(|_| ())
            ),
        }
    }
}

#[test]
fn duplicate_question_ids_are_rejected() {
    let mut value = common::test_catalog_value();
    value["modules"][0]["quiz"]["questions"][1]["id"] = json!("q1-1");

    assert!(matches!(
        parse(value),
        Err(CatalogError::DuplicateQuestion(_))
    ));
}

#[test]
fn quizzes_must_have_questions() {
    let mut value = common::test_catalog_value();
    value["modules"][0]["quiz"]["questions"] = json!([]);
    value["modules"][0]["quiz"]["totalScore"] = json!(0);

    assert!(matches!(parse(value), Err(CatalogError::EmptyQuiz(1))));
}

#[test]
fn empty_correct_answer_sets_are_rejected() {
    let mut value = common::test_catalog_value();
    value["modules"][0]["quiz"]["questions"][1]["correctAnswer"] = json!([]);

    assert!(matches!(
        parse(value),
        Err(CatalogError::EmptyCorrectAnswer(_))
    ));
}

#[test]
fn zero_point_questions_fail_field_validation() {
    let mut value = common::test_catalog_value();
    value["modules"][0]["quiz"]["questions"][0]["points"] = json!(0);
    value["modules"][0]["quiz"]["totalScore"] = json!(10);

    assert!(matches!(parse(value), Err(CatalogError::Fields(_))));
}

#[test]
fn module_ids_must_be_positive() {
    let mut value = common::test_catalog_value();
    value["modules"][0]["id"] = json!(0);

    assert!(matches!(parse(value), Err(CatalogError::Fields(_))));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        Catalog::from_json("{ not json"),
        Err(CatalogError::Parse(_))
    ));
}
