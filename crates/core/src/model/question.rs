use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question bank cannot be empty")]
    Empty,

    #[error("question {id} has no options")]
    NoOptions { id: QuestionId },

    #[error("question {id} marks option {correct} as correct but has only {len} options")]
    CorrectOutOfRange {
        id: QuestionId,
        correct: usize,
        len: usize,
    },

    #[error("question id {id} is used more than once")]
    DuplicateId { id: QuestionId },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question with its explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: &'static str,
    options: &'static [&'static str],
    correct: usize,
    explanation: &'static str,
}

impl Question {
    #[must_use]
    pub const fn new(
        id: QuestionId,
        prompt: &'static str,
        options: &'static [&'static str],
        correct: usize,
        explanation: &'static str,
    ) -> Self {
        Self {
            id,
            prompt,
            options,
            correct,
            explanation,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> &'static str {
        self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }

    fn validate(&self) -> Result<(), QuestionError> {
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions { id: self.id });
        }
        if self.correct >= self.options.len() {
            return Err(QuestionError::CorrectOutOfRange {
                id: self.id,
                correct: self.correct,
                len: self.options.len(),
            });
        }
        Ok(())
    }
}

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// Validated, immutable ordered list of questions.
///
/// The bank only borrows a `'static` table, so it is `Copy` and can be handed to
/// every quiz session without cloning the questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    /// Wrap a static question table after checking it.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::Empty` for an empty table, `NoOptions` or
    /// `CorrectOutOfRange` for a malformed question, and `DuplicateId` when two
    /// questions share an id.
    pub fn new(questions: &'static [Question]) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::Empty);
        }

        let mut seen = BTreeSet::new();
        for question in questions {
            question.validate()?;
            if !seen.insert(question.id) {
                return Err(QuestionError::DuplicateId { id: question.id });
            }
        }

        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'static Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &'static [Question] {
        self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'static, Question> {
        self.questions.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
