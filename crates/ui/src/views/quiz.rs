use dioxus::prelude::*;
use lingua_core::QuizSession;

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizQuestionVm, QuizResultVm, QuizVm, apply_quiz_intent, map_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Five-question grammar test with instant feedback.
#[component]
pub fn QuizPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let bank = ctx.grammar_quiz();
    let session = use_signal(|| QuizSession::new(bank));

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut session = session;
        if let Err(err) = apply_quiz_intent(&mut session.write(), intent) {
            tracing::debug!(%err, ?intent, "quiz intent rejected");
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let vm = map_quiz(&session.read());

    rsx! {
        div { class: "quiz-card",
            match vm {
                QuizVm::Question(question) => rsx! {
                    QuizQuestion { vm: question, on_intent: dispatch }
                },
                QuizVm::Finished(result) => rsx! {
                    QuizResult { vm: result, on_intent: dispatch }
                },
            }
        }
    }
}

#[component]
fn QuizQuestion(vm: QuizQuestionVm, on_intent: Callback<QuizIntent>) -> Element {
    let action = vm.action;

    rsx! {
        div { class: "quiz-card__header",
            span { class: "quiz-card__counter", "{vm.counter_label}" }
            div { class: "quiz-dots",
                for (index, dot) in vm.dots.iter().enumerate() {
                    span { key: "{index}", class: dot.class() }
                }
            }
        }
        h4 { class: "quiz-card__prompt", "{vm.prompt}" }
        div { class: "quiz-options",
            for option in vm.options.iter().copied() {
                button {
                    key: "{option.index}",
                    class: option.state.class(),
                    disabled: option.disabled,
                    onclick: move |_| on_intent.call(QuizIntent::Select(option.index)),
                    span { class: "quiz-option__label", "{option.label}" }
                    if let Some(marker) = option.state.marker() {
                        span { class: "quiz-option__marker", "{marker}" }
                    }
                }
            }
        }
        if let Some(feedback) = vm.feedback {
            div {
                class: if feedback.correct {
                    "quiz-feedback quiz-feedback--correct"
                } else {
                    "quiz-feedback quiz-feedback--wrong"
                },
                p { class: "quiz-feedback__title", "{feedback.title}" }
                p { class: "quiz-feedback__explanation", "{feedback.explanation}" }
            }
        }
        button {
            class: "btn btn--primary quiz-card__action",
            disabled: !action.enabled(),
            onclick: move |_| on_intent.call(action.intent()),
            "{action.label()}"
        }
    }
}

#[component]
fn QuizResult(vm: QuizResultVm, on_intent: Callback<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-result",
            div { class: "quiz-result__trophy", "🏆" }
            h4 { "Тест завершён!" }
            p { class: "quiz-result__score", "{vm.score_label}" }
            p { class: "quiz-result__message", "{vm.message}" }
            button {
                class: "btn btn--primary",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Пройти ещё раз"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
