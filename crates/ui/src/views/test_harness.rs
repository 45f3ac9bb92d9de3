use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::Router;
use lingua_core::content::{grammar_quiz, pronunciation_words};
use lingua_core::model::{QuestionBank, Vocabulary};
use services::{SpeechEngine, SpeechEvent};

use crate::context::{SpeechMode, UiApp, build_app_context};
use crate::routes::Route;
use crate::views::pronunciation::FlashcardTestHandles;
use crate::views::quiz::QuizTestHandles;
use crate::views::{PronunciationView, QuizPanel};
use crate::vm::{FlashcardIntent, QuizIntent};

#[derive(Clone, Copy)]
struct TestApp {
    speech_mode: SpeechMode,
}

impl UiApp for TestApp {
    fn grammar_quiz(&self) -> QuestionBank {
        grammar_quiz().expect("built-in quiz")
    }

    fn pronunciation_words(&self) -> Vocabulary {
        pronunciation_words().expect("built-in words")
    }

    fn speech_mode(&self) -> SpeechMode {
        self.speech_mode
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// The full router starting at `/`.
    Site,
    Quiz,
    Pronunciation,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz: QuizTestHandles,
    flashcards: FlashcardTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.quiz.clone());
    use_context_provider(|| props.flashcards.clone());

    match props.view {
        ViewKind::Site => rsx! { Router::<Route> {} },
        ViewKind::Quiz => rsx! { QuizPanel {} },
        ViewKind::Pronunciation => rsx! { PronunciationView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    quiz: QuizTestHandles,
    flashcards: FlashcardTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let spawned tasks (capability detection, notice timers) make progress.
    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Attach `engine` when the pronunciation view mounts. Call before `rebuild`.
    pub fn preset_engine(&self, engine: Rc<dyn SpeechEngine>) {
        self.flashcards.preset_engine(engine);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn quiz(&mut self, intent: QuizIntent) {
        let dispatch = self.quiz.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn flashcards(&mut self, intent: FlashcardIntent) {
        let dispatch = self.flashcards.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn speech_event(&mut self, event: SpeechEvent) {
        let on_event = self.flashcards.on_speech_event();
        self.dom.in_runtime(|| on_event.call(event));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, speech_mode: SpeechMode) -> ViewHarness {
    let quiz = QuizTestHandles::default();
    let flashcards = FlashcardTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app: Arc::new(TestApp { speech_mode }),
            view,
            quiz: quiz.clone(),
            flashcards: flashcards.clone(),
        },
    );

    ViewHarness {
        dom,
        quiz,
        flashcards,
    }
}
