use std::rc::Rc;

use lingua_core::FlashcardSession;
use lingua_core::model::{CategoryFilter, Vocabulary, VocabularyWord};

use crate::error::SpeechError;
use crate::notice::{Notice, NoticeBoard};
use crate::speech::{SpeechEngine, SpeechEvent, SpeechRequest};

/// Whether the speech capability can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechSupport {
    /// Detection has not finished yet.
    Pending,
    Available,
    Unavailable,
}

/// Flashcard navigation plus best-effort pronunciation of the current word.
///
/// The speech engine is attached once, after the platform capability was
/// detected. Until then, and forever if it is missing, navigation works and
/// speaking is a no-op.
pub struct PronunciationService {
    cards: FlashcardSession,
    engine: Option<Rc<dyn SpeechEngine>>,
    support: SpeechSupport,
    playing: bool,
    latest_request: u64,
    notices: NoticeBoard,
}

impl PronunciationService {
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            cards: FlashcardSession::new(vocabulary),
            engine: None,
            support: SpeechSupport::Pending,
            playing: false,
            latest_request: 0,
            notices: NoticeBoard::new(),
        }
    }

    #[must_use]
    pub fn with_engine(vocabulary: Vocabulary, engine: Rc<dyn SpeechEngine>) -> Self {
        let mut service = Self::new(vocabulary);
        service.attach_engine(engine);
        service
    }

    /// Install the detected speech engine.
    ///
    /// Only the first call has an effect; returns whether this call attached.
    /// A missing capability raises a single notice here and never again.
    pub fn attach_engine(&mut self, engine: Rc<dyn SpeechEngine>) -> bool {
        if self.support != SpeechSupport::Pending {
            tracing::debug!("speech engine already attached; ignoring");
            return false;
        }

        if engine.is_available() {
            self.support = SpeechSupport::Available;
        } else {
            tracing::warn!("speech synthesis unavailable; pronunciation disabled");
            self.support = SpeechSupport::Unavailable;
            self.notices.raise(
                "Озвучка недоступна",
                "Ваш браузер не поддерживает синтез речи",
            );
        }
        self.engine = Some(engine);
        true
    }

    #[must_use]
    pub fn support(&self) -> SpeechSupport {
        self.support
    }

    #[must_use]
    pub fn speech_available(&self) -> bool {
        self.support == SpeechSupport::Available
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn cards(&self) -> &FlashcardSession {
        &self.cards
    }

    #[must_use]
    pub fn current_word(&self) -> Option<&'static VocabularyWord> {
        self.cards.current()
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        tracing::debug!(category = filter.label(), "flashcard category changed");
        self.cards.set_category(filter);
    }

    pub fn next(&mut self) {
        self.cards.next();
    }

    pub fn previous(&mut self) {
        self.cards.previous();
    }

    /// Pronounce the word currently on the card.
    ///
    /// # Errors
    ///
    /// Same as [`PronunciationService::speak`]; an empty category is a no-op.
    pub fn speak_current(&mut self) -> Result<(), SpeechError> {
        match self.cards.current() {
            Some(word) => self.speak(word.native),
            None => Ok(()),
        }
    }

    /// Ask the engine to pronounce `text`.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Pending` before detection, `SpeechError::Unavailable`
    /// without a capability (already reported at attach time), or the engine's
    /// error when the request could not be issued. Only the last case raises a
    /// notice. Each issued request gets a new id; events for older ids are
    /// dropped by [`PronunciationService::handle_event`].
    pub fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
        match self.support {
            SpeechSupport::Pending => return Err(SpeechError::Pending),
            SpeechSupport::Unavailable => return Err(SpeechError::Unavailable),
            SpeechSupport::Available => {}
        }
        let Some(engine) = self.engine.as_ref() else {
            return Err(SpeechError::Pending);
        };

        self.latest_request += 1;
        let request = SpeechRequest::pronounce(self.latest_request, text);
        if let Err(err) = engine.speak(&request) {
            tracing::warn!(error = %err, "speech request rejected");
            self.report_failure();
            return Err(err);
        }
        Ok(())
    }

    /// Apply a playback notification from the engine.
    pub fn handle_event(&mut self, event: SpeechEvent) {
        if !self.speech_available() {
            tracing::debug!(?event, "speech event without an available engine; ignoring");
            return;
        }
        if event.request() != self.latest_request {
            tracing::debug!(?event, latest = self.latest_request, "stale speech event; ignoring");
            return;
        }
        match event {
            SpeechEvent::Started { .. } => self.playing = true,
            SpeechEvent::Ended { .. } => self.playing = false,
            SpeechEvent::Failed { message, .. } => {
                tracing::warn!(%message, "speech playback failed");
                self.report_failure();
            }
        }
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        self.notices.notices()
    }

    pub fn dismiss_notice(&mut self, id: u64) -> bool {
        self.notices.dismiss(id)
    }

    #[must_use]
    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    fn report_failure(&mut self) {
        self.playing = false;
        self.notices.raise(
            "Ошибка озвучки",
            "Не удалось воспроизвести слово",
        );
    }
}
