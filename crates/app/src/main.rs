mod config;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use lingua_core::content::{grammar_quiz, pronunciation_words};
use lingua_core::model::{QuestionBank, Vocabulary};
use thiserror::Error;
use ui::context::build_app_context;
use ui::{App, AppContext, SpeechMode, UiApp};

use crate::config::{Config, ConfigError, Invocation, print_usage};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("built-in content is invalid: {0}")]
    Content(#[from] lingua_core::Error),
}

struct SiteApp {
    grammar_quiz: QuestionBank,
    pronunciation_words: Vocabulary,
    speech_mode: SpeechMode,
}

impl SiteApp {
    fn load(config: &Config) -> Result<Self, lingua_core::Error> {
        Ok(Self {
            grammar_quiz: grammar_quiz()?,
            pronunciation_words: pronunciation_words()?,
            speech_mode: config.speech,
        })
    }
}

impl UiApp for SiteApp {
    fn grammar_quiz(&self) -> QuestionBank {
        self.grammar_quiz
    }

    fn pronunciation_words(&self) -> Vocabulary {
        self.pronunciation_words
    }

    fn speech_mode(&self) -> SpeechMode {
        self.speech_mode
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        if matches!(err, AppError::Config(_)) {
            print_usage();
        }
        std::process::exit(2);
    }
}

fn run() -> Result<(), AppError> {
    let config = match Config::parse(std::env::args().skip(1), |key| std::env::var(key).ok())? {
        Invocation::Run(config) => config,
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
    };

    if let Err(err) = dioxus::logger::init(config.log_level) {
        eprintln!("logging already initialised: {err}");
    }

    let app: Arc<dyn UiApp> = Arc::new(SiteApp::load(&config)?);
    let context = build_app_context(&app);
    tracing::info!(
        speech = %config.speech,
        questions = context.grammar_quiz().len(),
        words = context.pronunciation_words().len(),
        "launching site"
    );

    launch(context);
    Ok(())
}

#[cfg(feature = "desktop")]
fn launch(context: AppContext) {
    use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
    use lingua_core::content::site::BRAND;

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(BRAND)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch(context: AppContext) {
    LaunchBuilder::web().with_context(context).launch(App);
}
