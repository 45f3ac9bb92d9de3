use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::{Question, QuestionBank, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Rejected quiz transitions. A rejected call never changes the session.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("answers can only be chosen while the question is open (phase: {phase:?})")]
    NotAnswering { phase: QuizPhase },

    #[error("option {index} is out of range for a question with {len} options")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("no answer selected")]
    NoSelection,

    #[error("the answer has not been checked yet")]
    NotRevealed,
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// The current question accepts a tentative choice.
    Answering,
    /// The choice was checked; correctness and explanation are visible.
    Revealed,
    /// The last question was revealed and the user moved on.
    Finished,
}

//
// ─── SCORE BAND ────────────────────────────────────────────────────────────────
//

/// Fixed display policy for the finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// Every answer was correct.
    Perfect,
    /// At least 70% correct.
    Good,
    /// Below 70%.
    KeepLearning,
}

impl ScoreBand {
    #[must_use]
    pub fn classify(score: usize, total: usize) -> Self {
        if score >= total {
            ScoreBand::Perfect
        } else if score * 10 >= total * 7 {
            ScoreBand::Good
        } else {
            ScoreBand::KeepLearning
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Perfect => "Отлично! Вы ответили правильно на все вопросы! 🎉",
            ScoreBand::Good => "Хорошая работа! Продолжайте практиковаться! 👍",
            ScoreBand::KeepLearning => "Продолжайте учиться! У вас всё получится! 💪",
        }
    }
}

//
// ─── SUBMISSION ────────────────────────────────────────────────────────────────
//

/// Outcome of checking the current answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub question_id: QuestionId,
    pub choice: usize,
    pub correct: bool,
    pub score: usize,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One pass through a question bank.
///
/// `Answering -> Revealed` happens once per question; only `advance` or
/// `restart` can reopen a question, so a question is never scored twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    bank: QuestionBank,
    current: usize,
    selected: Option<usize>,
    phase: QuizPhase,
    score: usize,
    answered: BTreeSet<usize>,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            current: 0,
            selected: None,
            phase: QuizPhase::Answering,
            score: 0,
            answered: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn bank(&self) -> QuestionBank {
        self.bank
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question being shown. After finishing, this stays on the last one.
    #[must_use]
    pub fn current_question(&self) -> &'static Question {
        // `current` never leaves `0..bank.len()` and the bank is never empty.
        &self.bank.as_slice()[self.current]
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn is_answered(&self, index: usize) -> bool {
        self.answered.contains(&index)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.total()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    /// Whether the revealed choice was right. `None` until the answer is checked.
    #[must_use]
    pub fn last_answer_correct(&self) -> Option<bool> {
        match self.phase {
            QuizPhase::Answering => None,
            QuizPhase::Revealed | QuizPhase::Finished => self
                .selected
                .map(|choice| self.current_question().is_correct(choice)),
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Option<ScoreBand> {
        self.is_finished()
            .then(|| ScoreBand::classify(self.score, self.total()))
    }

    /// Record a tentative choice for the open question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAnswering` once the answer is revealed or the quiz
    /// is finished, and `QuizError::OptionOutOfRange` for an invalid index.
    pub fn select_answer(&mut self, index: usize) -> Result<(), QuizError> {
        if self.phase != QuizPhase::Answering {
            return Err(QuizError::NotAnswering { phase: self.phase });
        }
        let len = self.current_question().option_count();
        if index >= len {
            return Err(QuizError::OptionOutOfRange { index, len });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Check the selected answer and reveal the result.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAnswering` if the question was already checked and
    /// `QuizError::NoSelection` if nothing is selected.
    pub fn submit(&mut self) -> Result<Submission, QuizError> {
        if self.phase != QuizPhase::Answering {
            return Err(QuizError::NotAnswering { phase: self.phase });
        }
        let choice = self.selected.ok_or(QuizError::NoSelection)?;
        let question = self.current_question();
        let correct = question.is_correct(choice);

        self.phase = QuizPhase::Revealed;
        if self.answered.insert(self.current) && correct {
            self.score += 1;
        }

        Ok(Submission {
            question_id: question.id(),
            choice,
            correct,
            score: self.score,
        })
    }

    /// Move past a revealed question. Returns the new phase.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotRevealed` unless the current answer was checked.
    pub fn advance(&mut self) -> Result<QuizPhase, QuizError> {
        if self.phase != QuizPhase::Revealed {
            return Err(QuizError::NotRevealed);
        }
        if self.is_last_question() {
            self.phase = QuizPhase::Finished;
        } else {
            self.current += 1;
            self.selected = None;
            self.phase = QuizPhase::Answering;
        }
        Ok(self.phase)
    }

    /// Start over from the first question with a zero score.
    pub fn restart(&mut self) {
        *self = Self::new(self.bank);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
