use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use lingua_core::model::{QuestionBank, Vocabulary};

/// How the pronunciation trainer should treat browser speech synthesis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpeechMode {
    /// Detect the capability at runtime.
    #[default]
    Auto,
    /// Never speak; the trainer behaves as if the capability were missing.
    Off,
}

impl SpeechMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SpeechMode::Auto => "auto",
            SpeechMode::Off => "off",
        }
    }
}

impl fmt::Display for SpeechMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSpeechMode(pub String);

impl fmt::Display for UnknownSpeechMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown speech mode `{}` (expected auto or off)", self.0)
    }
}

impl std::error::Error for UnknownSpeechMode {}

impl FromStr for SpeechMode {
    type Err = UnknownSpeechMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(SpeechMode::Auto),
            "off" => Ok(SpeechMode::Off),
            _ => Err(UnknownSpeechMode(value.to_string())),
        }
    }
}

pub trait UiApp: Send + Sync {
    fn grammar_quiz(&self) -> QuestionBank;
    fn pronunciation_words(&self) -> Vocabulary;
    fn speech_mode(&self) -> SpeechMode;
}

#[derive(Clone, Copy)]
pub struct AppContext {
    grammar_quiz: QuestionBank,
    pronunciation_words: Vocabulary,
    speech_mode: SpeechMode,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            grammar_quiz: app.grammar_quiz(),
            pronunciation_words: app.pronunciation_words(),
            speech_mode: app.speech_mode(),
        }
    }

    #[must_use]
    pub fn grammar_quiz(&self) -> QuestionBank {
        self.grammar_quiz
    }

    #[must_use]
    pub fn pronunciation_words(&self) -> Vocabulary {
        self.pronunciation_words
    }

    #[must_use]
    pub fn speech_mode(&self) -> SpeechMode {
        self.speech_mode
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
