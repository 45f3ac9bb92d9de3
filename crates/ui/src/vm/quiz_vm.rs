use lingua_core::{QuizError, QuizPhase, QuizSession};

/// User actions on the grammar quiz card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Submit,
    Advance,
    Restart,
}

/// Apply an intent to the session.
///
/// # Errors
///
/// Passes through the session's rejection; the session is left unchanged.
pub fn apply_quiz_intent(session: &mut QuizSession, intent: QuizIntent) -> Result<(), QuizError> {
    match intent {
        QuizIntent::Select(index) => session.select_answer(index),
        QuizIntent::Submit => {
            let submission = session.submit()?;
            tracing::debug!(
                question = %submission.question_id,
                correct = submission.correct,
                score = submission.score,
                "quiz answer checked"
            );
            Ok(())
        }
        QuizIntent::Advance => {
            if session.advance()? == QuizPhase::Finished {
                tracing::info!(score = session.score(), total = session.total(), "quiz finished");
            }
            Ok(())
        }
        QuizIntent::Restart => {
            session.restart();
            Ok(())
        }
    }
}

/// Visual state of one answer option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    /// The right answer, once revealed.
    Correct,
    /// The learner's wrong pick, once revealed.
    Wrong,
    /// Any other option after the reveal.
    Muted,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionState::Idle => "quiz-option",
            OptionState::Selected => "quiz-option quiz-option--selected",
            OptionState::Correct => "quiz-option quiz-option--correct",
            OptionState::Wrong => "quiz-option quiz-option--wrong",
            OptionState::Muted => "quiz-option quiz-option--muted",
        }
    }

    #[must_use]
    pub fn marker(self) -> Option<&'static str> {
        match self {
            OptionState::Correct => Some("✓"),
            OptionState::Wrong => Some("✗"),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub label: &'static str,
    pub state: OptionState,
    pub disabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressDot {
    Answered,
    Current,
    Pending,
}

impl ProgressDot {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ProgressDot::Answered => "quiz-dot quiz-dot--answered",
            ProgressDot::Current => "quiz-dot quiz-dot--current",
            ProgressDot::Pending => "quiz-dot",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub title: &'static str,
    pub explanation: &'static str,
}

/// The single action button under the options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizActionVm {
    Submit { enabled: bool },
    Next,
    Finish,
}

impl QuizActionVm {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuizActionVm::Submit { .. } => "Проверить ответ",
            QuizActionVm::Next => "Следующий вопрос",
            QuizActionVm::Finish => "Завершить тест",
        }
    }

    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            QuizActionVm::Submit { enabled } => enabled,
            QuizActionVm::Next | QuizActionVm::Finish => true,
        }
    }

    #[must_use]
    pub fn intent(self) -> QuizIntent {
        match self {
            QuizActionVm::Submit { .. } => QuizIntent::Submit,
            QuizActionVm::Next | QuizActionVm::Finish => QuizIntent::Advance,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub counter_label: String,
    pub prompt: &'static str,
    pub options: Vec<QuizOptionVm>,
    pub dots: Vec<ProgressDot>,
    pub feedback: Option<FeedbackVm>,
    pub action: QuizActionVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub score_label: String,
    pub message: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizVm {
    Question(QuizQuestionVm),
    Finished(QuizResultVm),
}

#[must_use]
pub fn map_quiz(session: &QuizSession) -> QuizVm {
    if let Some(band) = session.outcome() {
        return QuizVm::Finished(QuizResultVm {
            score_label: format!("{}/{}", session.score(), session.total()),
            message: band.message(),
        });
    }

    let question = session.current_question();
    let revealed = session.phase() == QuizPhase::Revealed;
    let selected = session.selected();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, &label)| {
            let state = if revealed {
                if question.is_correct(index) {
                    OptionState::Correct
                } else if selected == Some(index) {
                    OptionState::Wrong
                } else {
                    OptionState::Muted
                }
            } else if selected == Some(index) {
                OptionState::Selected
            } else {
                OptionState::Idle
            };
            QuizOptionVm {
                index,
                label,
                state,
                disabled: revealed,
            }
        })
        .collect();

    let current = session.current_index();
    let dots = (0..session.total())
        .map(|index| {
            if session.is_answered(index) {
                ProgressDot::Answered
            } else if index == current {
                ProgressDot::Current
            } else {
                ProgressDot::Pending
            }
        })
        .collect();

    let feedback = session.last_answer_correct().map(|correct| FeedbackVm {
        correct,
        title: if correct { "Правильно! 🎉" } else { "Неправильно" },
        explanation: question.explanation(),
    });

    let action = if !revealed {
        QuizActionVm::Submit {
            enabled: selected.is_some(),
        }
    } else if session.is_last_question() {
        QuizActionVm::Finish
    } else {
        QuizActionVm::Next
    };

    QuizVm::Question(QuizQuestionVm {
        counter_label: format!("Вопрос {} из {}", current + 1, session.total()),
        prompt: question.prompt(),
        options,
        dots,
        feedback,
        action,
    })
}

#[cfg(test)]
mod tests {
    use lingua_core::content::grammar_quiz;

    use super::*;

    fn question_vm(session: &QuizSession) -> QuizQuestionVm {
        match map_quiz(session) {
            QuizVm::Question(vm) => vm,
            QuizVm::Finished(vm) => panic!("expected a question, got {vm:?}"),
        }
    }

    fn correct_index(session: &QuizSession) -> usize {
        session.current_question().correct_index()
    }

    #[test]
    fn fresh_quiz_disables_submit() {
        let session = QuizSession::new(grammar_quiz().unwrap());
        let vm = question_vm(&session);
        assert_eq!(vm.counter_label, "Вопрос 1 из 5");
        assert_eq!(vm.action, QuizActionVm::Submit { enabled: false });
        assert!(!vm.action.enabled());
        assert_eq!(vm.dots[0], ProgressDot::Current);
        assert!(vm.dots[1..].iter().all(|dot| *dot == ProgressDot::Pending));
        assert!(vm.options.iter().all(|option| option.state == OptionState::Idle));
        assert!(vm.feedback.is_none());
    }

    #[test]
    fn wrong_answer_highlights_both_options() {
        let mut session = QuizSession::new(grammar_quiz().unwrap());
        let right = correct_index(&session);
        let wrong = (right + 1) % session.current_question().option_count();
        apply_quiz_intent(&mut session, QuizIntent::Select(wrong)).unwrap();
        assert_eq!(question_vm(&session).options[wrong].state, OptionState::Selected);

        apply_quiz_intent(&mut session, QuizIntent::Submit).unwrap();
        let vm = question_vm(&session);
        assert_eq!(vm.options[right].state, OptionState::Correct);
        assert_eq!(vm.options[wrong].state, OptionState::Wrong);
        assert!(vm.options.iter().all(|option| option.disabled));
        assert_eq!(vm.options[wrong].state.marker(), Some("✗"));
        let feedback = vm.feedback.unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.title, "Неправильно");
        assert!(!feedback.explanation.is_empty());
        assert_eq!(vm.action, QuizActionVm::Next);
        assert_eq!(vm.dots[0], ProgressDot::Answered);
    }

    #[test]
    fn last_question_offers_finish_then_result() {
        let mut session = QuizSession::new(grammar_quiz().unwrap());
        for _ in 0..session.total() {
            let right = correct_index(&session);
            apply_quiz_intent(&mut session, QuizIntent::Select(right)).unwrap();
            apply_quiz_intent(&mut session, QuizIntent::Submit).unwrap();
            let action = question_vm(&session).action;
            apply_quiz_intent(&mut session, action.intent()).unwrap();
        }
        match map_quiz(&session) {
            QuizVm::Finished(result) => {
                assert_eq!(result.score_label, "5/5");
                assert_eq!(result.message, lingua_core::ScoreBand::Perfect.message());
            }
            QuizVm::Question(vm) => panic!("expected result, got {vm:?}"),
        }

        apply_quiz_intent(&mut session, QuizIntent::Restart).unwrap();
        assert_eq!(question_vm(&session).counter_label, "Вопрос 1 из 5");
    }

    #[test]
    fn finish_label_appears_on_last_reveal() {
        let mut session = QuizSession::new(grammar_quiz().unwrap());
        for _ in 0..session.total() - 1 {
            apply_quiz_intent(&mut session, QuizIntent::Select(0)).unwrap();
            apply_quiz_intent(&mut session, QuizIntent::Submit).unwrap();
            apply_quiz_intent(&mut session, QuizIntent::Advance).unwrap();
        }
        apply_quiz_intent(&mut session, QuizIntent::Select(0)).unwrap();
        apply_quiz_intent(&mut session, QuizIntent::Submit).unwrap();
        let vm = question_vm(&session);
        assert_eq!(vm.action, QuizActionVm::Finish);
        assert_eq!(vm.action.label(), "Завершить тест");
    }

    #[test]
    fn rejected_intent_is_reported() {
        let mut session = QuizSession::new(grammar_quiz().unwrap());
        assert_eq!(
            apply_quiz_intent(&mut session, QuizIntent::Submit),
            Err(QuizError::NoSelection)
        );
        assert_eq!(
            apply_quiz_intent(&mut session, QuizIntent::Advance),
            Err(QuizError::NotRevealed)
        );
    }
}
