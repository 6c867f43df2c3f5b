use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use validator::Validate;

use crate::error::CatalogError;
use crate::services::reward_policy::{module_badge, ALL_MODULES_BADGE, PERFECT_SCORE_BADGE};

/// Question presentation styles supported by the front-end. The engine only
/// cares about the answer check, which is identical for all of them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    DragDrop,
    MatchPairs,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple-choice",
            QuestionKind::DragDrop => "drag-drop",
            QuestionKind::MatchPairs => "match-pairs",
        }
    }
}

/// Either a single accepted answer string or a set of accepted answers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CorrectAnswer {
    One(String),
    AnyOf(Vec<String>),
}

impl CorrectAnswer {
    pub fn matches(&self, answer: &str) -> bool {
        match self {
            CorrectAnswer::One(expected) => expected == answer,
            CorrectAnswer::AnyOf(accepted) => accepted.iter().any(|a| a == answer),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CorrectAnswer::One(expected) => expected.is_empty(),
            CorrectAnswer::AnyOf(accepted) => accepted.iter().all(|a| a.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDefinition {
    #[validate(length(min = 1, message = "Question id must not be empty"))]
    pub id: String,
    pub kind: QuestionKind,
    #[validate(length(min = 1, message = "Question prompt must not be empty"))]
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: CorrectAnswer,
    #[validate(range(min = 1, message = "Question points must be positive"))]
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizDefinition {
    #[validate(length(min = 1, message = "Quiz id must not be empty"))]
    pub id: String,
    #[validate(nested)]
    pub questions: Vec<QuestionDefinition>,
    pub total_score: u32,
}

impl QuizDefinition {
    /// Sum of all question point values. The declared `total_score` must
    /// match this at load time. Summed in u64 so oversized point values
    /// surface as a mismatch rather than an overflow.
    pub fn points_sum(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.points)).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDefinition {
    #[validate(range(min = 1, message = "Module id must be positive"))]
    pub id: u32,
    #[validate(length(min = 1, message = "Module title must not be empty"))]
    pub title: String,
    pub theme: String,
    pub description: String,
    pub storyline: String,
    pub video_url: String,
    #[serde(default)]
    pub concepts: Vec<String>,
    #[validate(nested)]
    pub quiz: QuizDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BadgeDefinition {
    #[validate(length(min = 1, message = "Badge id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "Badge name must not be empty"))]
    pub name: String,
    pub icon: String,
    pub description: String,
}

/// The static content catalog: learning modules (each with an embedded quiz)
/// and the badge list. Loaded once at startup, validated, then read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Catalog {
    #[validate(nested)]
    modules: Vec<ModuleDefinition>,
    #[validate(nested)]
    badges: Vec<BadgeDefinition>,
}

impl Catalog {
    /// Load and validate a catalog from a JSON file. Any validation failure
    /// is fatal: a malformed catalog must not be served.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let bytes = fs::read(path.as_ref())?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_slice(bytes)?;
        catalog.check()?;
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::from_slice(json.as_bytes())
    }

    pub fn modules(&self) -> &[ModuleDefinition] {
        &self.modules
    }

    pub fn badges(&self) -> &[BadgeDefinition] {
        &self.badges
    }

    pub fn module(&self, id: u32) -> Option<&ModuleDefinition> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn badge(&self, id: &str) -> Option<&BadgeDefinition> {
        self.badges.iter().find(|b| b.id == id)
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    fn check(&self) -> Result<(), CatalogError> {
        self.validate()?;

        let mut module_ids = HashSet::new();
        let mut question_ids = HashSet::new();
        for module in &self.modules {
            if !module_ids.insert(module.id) {
                return Err(CatalogError::DuplicateModule(module.id));
            }
            if module.quiz.questions.is_empty() {
                return Err(CatalogError::EmptyQuiz(module.id));
            }
            let actual = module.quiz.points_sum();
            if u64::from(module.quiz.total_score) != actual {
                return Err(CatalogError::TotalScoreMismatch {
                    module_id: module.id,
                    quiz_id: module.quiz.id.clone(),
                    declared: module.quiz.total_score,
                    actual,
                });
            }
            for question in &module.quiz.questions {
                if !question_ids.insert(question.id.clone()) {
                    return Err(CatalogError::DuplicateQuestion(question.id.clone()));
                }
                if question.correct_answer.is_empty() {
                    return Err(CatalogError::EmptyCorrectAnswer(question.id.clone()));
                }
            }
        }

        let mut badge_ids = HashSet::new();
        for badge in &self.badges {
            if !badge_ids.insert(badge.id.clone()) {
                return Err(CatalogError::DuplicateBadge(badge.id.clone()));
            }
        }

        // The reducer grants these badges on its own, so a servable catalog
        // has to define every one of them up front.
        let required = [PERFECT_SCORE_BADGE, ALL_MODULES_BADGE]
            .into_iter()
            .chain(self.modules.iter().filter_map(|m| module_badge(m.id)));
        for badge_id in required {
            if !badge_ids.contains(badge_id) {
                return Err(CatalogError::MissingRewardBadge(badge_id.to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CorrectAnswer;

    #[test]
    fn single_answer_requires_exact_match() {
        let answer = CorrectAnswer::One("B".to_string());
        assert!(answer.matches("B"));
        assert!(!answer.matches("b"));
        assert!(!answer.matches("B "));
    }

    #[test]
    fn multi_answer_is_a_membership_test() {
        let answer = CorrectAnswer::AnyOf(vec!["X".to_string(), "Y".to_string()]);
        assert!(answer.matches("X"));
        assert!(answer.matches("Y"));
        assert!(!answer.matches("Z"));
    }

    #[test]
    fn empty_answer_sets_are_detected() {
        assert!(CorrectAnswer::One(String::new()).is_empty());
        assert!(CorrectAnswer::AnyOf(vec![]).is_empty());
        assert!(!CorrectAnswer::AnyOf(vec!["X".to_string()]).is_empty());
    }
}
