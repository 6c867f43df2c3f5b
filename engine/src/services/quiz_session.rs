use std::collections::HashMap;

use crate::error::EngineError;
use crate::models::catalog::{QuestionDefinition, QuizDefinition};

/// Result of checking the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub is_correct: bool,
    pub explanation: Option<String>,
}

/// Final score of a finished session, handed to the progress reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: u32,
    pub total_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// `checked` flips once the current question's answer has been graded.
    InProgress { index: usize, checked: bool },
    Finished { score: u32 },
}

/// One linear pass through a quiz: record an answer for the current
/// question, check it, advance. No backward transitions; once advanced a
/// question cannot be re-answered within the same attempt. Abandoning the
/// session (dropping it) before `Finished` commits nothing.
pub struct QuizSession<'a> {
    quiz: &'a QuizDefinition,
    phase: Phase,
    answers: HashMap<String, String>,
    results: HashMap<String, bool>,
}

impl<'a> QuizSession<'a> {
    pub fn new(quiz: &'a QuizDefinition) -> Self {
        QuizSession {
            quiz,
            phase: Phase::InProgress {
                index: 0,
                checked: false,
            },
            answers: HashMap::new(),
            results: HashMap::new(),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    /// The question currently presented, or `None` once finished.
    pub fn current_question(&self) -> Option<&QuestionDefinition> {
        match self.phase {
            Phase::InProgress { index, .. } => self.quiz.questions.get(index),
            Phase::Finished { .. } => None,
        }
    }

    /// Zero-based index of the current question and the question count.
    pub fn position(&self) -> (usize, usize) {
        let index = match self.phase {
            Phase::InProgress { index, .. } => index,
            Phase::Finished { .. } => self.quiz.questions.len(),
        };
        (index, self.quiz.questions.len())
    }

    /// Store (or overwrite) the answer for the current, not-yet-checked
    /// question. No effect on the score.
    pub fn record_answer(
        &mut self,
        question_id: &str,
        answer: impl Into<String>,
    ) -> Result<(), EngineError> {
        let current = self.require_unchecked_current()?;
        if current.id != question_id {
            return Err(EngineError::invalid_state(format!(
                "question '{}' is not the current question ('{}')",
                question_id, current.id
            )));
        }
        self.answers.insert(question_id.to_string(), answer.into());
        Ok(())
    }

    /// Grade the recorded answer for the current question. Checking twice,
    /// or checking before any answer was recorded, is an error and leaves
    /// the session unchanged.
    pub fn check_current_answer(&mut self) -> Result<CheckOutcome, EngineError> {
        let question = self.require_unchecked_current()?;
        let question_id = question.id.clone();
        let explanation = question.explanation.clone();

        let answer = self.answers.get(&question_id).ok_or_else(|| {
            EngineError::invalid_state(format!(
                "no answer recorded for question '{}'",
                question_id
            ))
        })?;
        let is_correct = question.correct_answer.matches(answer);

        self.results.insert(question_id.clone(), is_correct);
        if let Phase::InProgress { checked, .. } = &mut self.phase {
            *checked = true;
        }

        tracing::debug!(question = %question_id, is_correct, "answer checked");
        Ok(CheckOutcome {
            is_correct,
            explanation,
        })
    }

    /// Move past the checked current question. After the last question the
    /// session transitions to `Finished` and the final score is computed.
    pub fn advance(&mut self) -> Result<(), EngineError> {
        match self.phase {
            Phase::InProgress { index, checked } => {
                if !checked {
                    return Err(EngineError::invalid_state(
                        "current question has not been checked",
                    ));
                }
                if index + 1 < self.quiz.questions.len() {
                    self.phase = Phase::InProgress {
                        index: index + 1,
                        checked: false,
                    };
                } else {
                    let score = self.correct_points();
                    tracing::info!(
                        quiz = %self.quiz.id,
                        score,
                        total_score = self.quiz.total_score,
                        "quiz finished"
                    );
                    self.phase = Phase::Finished { score };
                }
                Ok(())
            }
            Phase::Finished { .. } => {
                Err(EngineError::invalid_state("quiz is already finished"))
            }
        }
    }

    /// Valid only once the session is `Finished`.
    pub fn final_score(&self) -> Result<QuizResult, EngineError> {
        match self.phase {
            Phase::Finished { score } => Ok(QuizResult {
                score,
                total_score: self.quiz.total_score,
            }),
            Phase::InProgress { .. } => {
                Err(EngineError::invalid_state("quiz is not finished yet"))
            }
        }
    }

    /// Summed in u64; a validated quiz's points fit u32 because its declared
    /// `total_score` does, so the clamp only triggers on unvalidated input.
    fn correct_points(&self) -> u32 {
        let sum: u64 = self
            .quiz
            .questions
            .iter()
            .filter(|q| self.results.get(&q.id).copied().unwrap_or(false))
            .map(|q| u64::from(q.points))
            .sum();
        u32::try_from(sum).unwrap_or(u32::MAX)
    }

    fn require_unchecked_current(&self) -> Result<&QuestionDefinition, EngineError> {
        match self.phase {
            Phase::InProgress { index, checked } => {
                if checked {
                    return Err(EngineError::invalid_state(
                        "current question has already been checked",
                    ));
                }
                self.quiz.questions.get(index).ok_or_else(|| {
                    EngineError::invalid_state("quiz has no questions")
                })
            }
            Phase::Finished { .. } => {
                Err(EngineError::invalid_state("quiz is already finished"))
            }
        }
    }
}
