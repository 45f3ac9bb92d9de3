use std::rc::Rc;

use dioxus::prelude::*;
use lingua_core::content::site::STUDY_TIPS;
use services::{PronunciationService, SpeechEngine, SpeechEvent, UnavailableSpeech};

use crate::context::{AppContext, SpeechMode};
use crate::speech::{BrowserSpeech, detect_speech};
use crate::views::notices::NoticeStack;
use crate::vm::{FlashcardIntent, apply_flashcard_intent, map_flashcards};

#[cfg(test)]
use std::cell::RefCell;

/// Flashcard trainer that pronounces Russian words with the browser voice.
#[component]
pub fn PronunciationView() -> Element {
    let ctx = use_context::<AppContext>();
    let words = ctx.pronunciation_words();
    let speech_mode = ctx.speech_mode();

    let service = use_signal(move || {
        let mut service = PronunciationService::new(words);
        if speech_mode == SpeechMode::Off {
            tracing::info!("speech disabled by configuration");
            service.attach_engine(Rc::new(UnavailableSpeech));
        }
        #[cfg(test)]
        {
            if let Some(engine) =
                try_consume_context::<FlashcardTestHandles>().and_then(|handles| handles.engine())
            {
                service.attach_engine(engine);
            }
        }
        service
    });

    let on_speech_event = use_callback(move |event: SpeechEvent| {
        let mut service = service;
        service.write().handle_event(event);
    });

    use_future(move || async move {
        if speech_mode == SpeechMode::Off {
            return;
        }
        let engine: Rc<dyn SpeechEngine> = if detect_speech().await {
            Rc::new(BrowserSpeech::new(on_speech_event))
        } else {
            Rc::new(UnavailableSpeech)
        };
        let mut service = service;
        service.write().attach_engine(engine);
    });

    let dispatch = use_callback(move |intent: FlashcardIntent| {
        let mut service = service;
        // Failures are already surfaced as notices by the service.
        if let Err(err) = apply_flashcard_intent(&mut service.write(), intent) {
            tracing::debug!(%err, ?intent, "flashcard intent not applied");
        }
    });

    let dismiss = use_callback(move |id: u64| {
        let mut service = service;
        service.write().dismiss_notice(id);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<FlashcardTestHandles>() {
                handles.register(dispatch, on_speech_event);
            }
        }
    }

    let vm = map_flashcards(&service.read());
    let notices = service.read().notices().to_vec();
    let speak_disabled = !vm.speech_enabled;

    rsx! {
        div { class: "page page--pronunciation",
            NoticeStack { notices, on_dismiss: dismiss }

            div { class: "section-heading",
                span { class: "section-badge", "🔊 Произношение" }
                h2 { "Тренажёр произношения" }
                p { class: "section-lead", "Слушайте и повторяйте русские слова за носителем" }
            }

            div { class: "chip-row",
                for chip in vm.chips.iter().copied() {
                    button {
                        key: "{chip.label}",
                        class: if chip.active { "chip chip--active" } else { "chip" },
                        onclick: move |_| dispatch.call(FlashcardIntent::Category(chip.filter)),
                        "{chip.label}"
                    }
                }
            }

            if let Some(card) = vm.card.clone() {
                div { class: "flashcard",
                    div { class: "flashcard__header",
                        span { class: "flashcard__category", "{card.category}" }
                        span { class: "flashcard__position", "{card.position_label}" }
                    }
                    div { class: "flashcard-dots",
                        for (index, current) in vm.dots.iter().copied().enumerate() {
                            span {
                                key: "{index}",
                                class: if current { "flashcard-dot flashcard-dot--current" } else { "flashcard-dot" },
                            }
                        }
                    }
                    button {
                        class: "flashcard__word",
                        disabled: speak_disabled,
                        onclick: move |_| dispatch.call(FlashcardIntent::Speak),
                        "{card.native}"
                    }
                    p { class: "flashcard__transcription", "{card.transcription}" }
                    p { class: "flashcard__translation", "{card.translation}" }
                    button {
                        class: if vm.playing { "speak-button speak-button--playing" } else { "speak-button" },
                        disabled: speak_disabled,
                        aria_label: "Произнести слово",
                        onclick: move |_| dispatch.call(FlashcardIntent::Speak),
                        if vm.playing { "🔊" } else { "🔈" }
                    }
                    p { class: "flashcard__hint", "{vm.hint}" }
                }
            } else {
                div { class: "flashcard flashcard--empty",
                    p { "В этой категории пока нет слов" }
                }
            }

            div { class: "flashcard-controls",
                button {
                    class: "btn btn--outline",
                    onclick: move |_| dispatch.call(FlashcardIntent::Previous),
                    "← Назад"
                }
                button {
                    class: "btn btn--outline",
                    disabled: speak_disabled,
                    onclick: move |_| dispatch.call(FlashcardIntent::Speak),
                    "Повторить"
                }
                button {
                    class: "btn btn--primary",
                    onclick: move |_| dispatch.call(FlashcardIntent::Next),
                    "Далее →"
                }
            }

            div { class: "card-grid card-grid--three study-tips",
                for tip in STUDY_TIPS.iter() {
                    div { key: "{tip.title}", class: "study-tip",
                        span { class: "study-tip__icon", "{tip.icon}" }
                        h4 { "{tip.title}" }
                        p { "{tip.description}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct FlashcardTestHandles {
    dispatch: Rc<RefCell<Option<Callback<FlashcardIntent>>>>,
    on_speech_event: Rc<RefCell<Option<Callback<SpeechEvent>>>>,
    engine: Rc<RefCell<Option<Rc<dyn SpeechEngine>>>>,
}

#[cfg(test)]
impl FlashcardTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<FlashcardIntent>,
        on_speech_event: Callback<SpeechEvent>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.on_speech_event.borrow_mut() = Some(on_speech_event);
    }

    /// Engine attached when the view mounts, ahead of capability detection.
    pub(crate) fn preset_engine(&self, engine: Rc<dyn SpeechEngine>) {
        *self.engine.borrow_mut() = Some(engine);
    }

    fn engine(&self) -> Option<Rc<dyn SpeechEngine>> {
        self.engine.borrow().clone()
    }

    pub(crate) fn dispatch(&self) -> Callback<FlashcardIntent> {
        (*self.dispatch.borrow()).expect("flashcard dispatch registered")
    }

    pub(crate) fn on_speech_event(&self) -> Callback<SpeechEvent> {
        (*self.on_speech_event.borrow()).expect("speech event callback registered")
    }
}
