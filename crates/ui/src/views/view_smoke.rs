use std::rc::Rc;
use std::time::Duration;

use lingua_core::model::CategoryFilter;
use services::{NOTICE_TTL, SpeechEngine, SpeechError, SpeechEvent, SpeechRequest};

use super::test_harness::{ViewKind, setup_view_harness};
use crate::context::SpeechMode;
use crate::vm::{FlashcardIntent, QuizIntent};

const CORRECT_ANSWERS: [usize; 5] = [0, 1, 2, 1, 0];
const NO_SPEECH: &str = "Ваш браузер не поддерживает синтез речи";
const PLAYBACK_FAILED: &str = "Не удалось воспроизвести слово";

struct QuietSpeech;

impl SpeechEngine for QuietSpeech {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&self, _request: &SpeechRequest) -> Result<(), SpeechError> {
        Ok(())
    }
}

#[tokio::test(flavor = "current_thread")]
async fn landing_renders_every_section() {
    let mut harness = setup_view_harness(ViewKind::Site, SpeechMode::Off);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Откройте мир",
        "Начать обучение",
        "Основы русской грамматики",
        "Падежи",
        "Вопрос 1 из 5",
        "Проверить ответ",
        "Дом и семья",
        "120 слов",
        "Погрузитесь в русскую культуру",
        "История матрёшки",
        "12 мин",
        "mailto:info@russianlang.ru",
        "© 2024 Русский Язык",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    for anchor in ["home", "grammar", "exercises", "vocabulary", "culture", "videos", "contact"] {
        let id = format!("id=\"{anchor}\"");
        assert!(html.contains(&id), "missing section {anchor} in {html}");
    }
    assert!(html.contains("site-nav__link--active"), "missing active nav in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_walks_through_to_the_result_card() {
    let mut harness = setup_view_harness(ViewKind::Quiz, SpeechMode::Off);
    harness.rebuild();

    for (number, answer) in CORRECT_ANSWERS.iter().enumerate() {
        harness.quiz(QuizIntent::Select(*answer));
        harness.quiz(QuizIntent::Submit);
        let html = harness.render();
        assert!(html.contains("Правильно! 🎉"), "missing feedback in {html}");
        let action = if number + 1 == CORRECT_ANSWERS.len() {
            "Завершить тест"
        } else {
            "Следующий вопрос"
        };
        assert!(html.contains(action), "missing {action} in {html}");
        harness.quiz(QuizIntent::Advance);
    }

    let html = harness.render();
    assert!(html.contains("Тест завершён!"), "missing result in {html}");
    assert!(html.contains("5/5"), "missing score in {html}");
    assert!(html.contains("Пройти ещё раз"), "missing restart in {html}");

    harness.quiz(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Вопрос 1 из 5"), "missing first question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_answer_reveals_explanation_and_locks_options() {
    let mut harness = setup_view_harness(ViewKind::Quiz, SpeechMode::Off);
    harness.rebuild();

    harness.quiz(QuizIntent::Select(3));
    harness.quiz(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Неправильно"), "missing feedback in {html}");
    assert!(html.contains("Винительный падеж"), "missing explanation in {html}");
    assert!(html.contains("quiz-option--correct"), "missing correct mark in {html}");
    assert!(html.contains("quiz-option--wrong"), "missing wrong mark in {html}");

    harness.quiz(QuizIntent::Select(0));
    let html = harness.render();
    assert!(!html.contains("quiz-option--selected"), "selection changed after reveal: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn pronunciation_without_speech_shows_notice_and_disabled_hint() {
    let mut harness = setup_view_harness(ViewKind::Pronunciation, SpeechMode::Off);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Здравствуйте"), "missing first word in {html}");
    assert!(html.contains("1 из 15"), "missing position in {html}");
    assert!(html.contains("Ваш браузер не поддерживает синтез речи"), "missing notice in {html}");
    assert!(html.contains("Озвучка недоступна"), "missing hint in {html}");
    assert!(html.contains("Повторить"), "missing repeat button in {html}");

    harness.speech_event(SpeechEvent::Started { request: 0 });
    let html = harness.render();
    assert!(!html.contains("speak-button--playing"), "stray event started playback: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn pronunciation_navigation_follows_category() {
    let mut harness = setup_view_harness(ViewKind::Pronunciation, SpeechMode::Off);
    harness.rebuild();

    harness.flashcards(FlashcardIntent::Category(CategoryFilter::Only("Вежливость")));
    let html = harness.render();
    assert!(html.contains("Спасибо"), "missing first polite word in {html}");
    assert!(html.contains("1 из 3"), "missing position in {html}");

    harness.flashcards(FlashcardIntent::Next);
    assert!(harness.render().contains("Пожалуйста"));

    harness.flashcards(FlashcardIntent::Previous);
    harness.flashcards(FlashcardIntent::Previous);
    let html = harness.render();
    assert!(html.contains("Извините"), "missing wrapped word in {html}");
    assert!(html.contains("3 из 3"), "missing wrapped position in {html}");

    harness.flashcards(FlashcardIntent::Category(CategoryFilter::All));
    assert!(harness.render().contains("1 из 15"));
}

#[tokio::test(flavor = "current_thread")]
async fn auto_mode_without_browser_speech_degrades_once() {
    let mut harness = setup_view_harness(ViewKind::Pronunciation, SpeechMode::Auto);
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();

    assert_eq!(html.matches(NO_SPEECH).count(), 1, "expected one notice in {html}");
    assert_eq!(
        html.matches("disabled=true").count(),
        3,
        "speak controls should be disabled in {html}"
    );

    harness.flashcards(FlashcardIntent::Speak);
    harness.flashcards(FlashcardIntent::Next);
    harness.drive_async().await;
    let html = harness.render();
    assert_eq!(html.matches(NO_SPEECH).count(), 1, "notice repeated in {html}");
    assert!(html.contains("2 из 15"), "navigation broken in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn playing_indicator_follows_latest_utterance() {
    let mut harness = setup_view_harness(ViewKind::Pronunciation, SpeechMode::Auto);
    harness.preset_engine(Rc::new(QuietSpeech));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains(NO_SPEECH), "detection replaced the engine: {html}");
    assert!(!html.contains("disabled=true"), "speak controls disabled in {html}");
    assert!(!html.contains("speak-button--playing"));

    harness.flashcards(FlashcardIntent::Speak);
    harness.speech_event(SpeechEvent::Started { request: 1 });
    assert!(harness.render().contains("speak-button--playing"));

    harness.flashcards(FlashcardIntent::Next);
    harness.flashcards(FlashcardIntent::Speak);
    harness.speech_event(SpeechEvent::Started { request: 2 });
    harness.speech_event(SpeechEvent::Ended { request: 1 });
    let html = harness.render();
    assert!(html.contains("speak-button--playing"), "late end stopped playback: {html}");

    harness.speech_event(SpeechEvent::Ended { request: 2 });
    let html = harness.render();
    assert!(!html.contains("speak-button--playing"), "still playing in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn repeated_failures_show_one_notice_that_expires() {
    let mut harness = setup_view_harness(ViewKind::Pronunciation, SpeechMode::Auto);
    harness.preset_engine(Rc::new(QuietSpeech));
    harness.rebuild();
    harness.drive_async().await;

    for request in 1..=50 {
        harness.flashcards(FlashcardIntent::Speak);
        harness.speech_event(SpeechEvent::Failed {
            request,
            message: "synthesis-failed".to_string(),
        });
    }
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert_eq!(html.matches(PLAYBACK_FAILED).count(), 1, "expected one notice in {html}");

    tokio::time::sleep(NOTICE_TTL + Duration::from_millis(100)).await;
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains(PLAYBACK_FAILED), "notice did not expire: {html}");
}
