use serde::{Deserialize, Serialize};

use crate::error::SpeechError;

/// Language tag used for every pronunciation request.
pub const SPEECH_LANG: &str = "ru-RU";
/// Slightly slower than normal speech so learners can follow.
pub const SPEECH_RATE: f32 = 0.8;
pub const SPEECH_PITCH: f32 = 1.0;

/// A single utterance handed to the speech capability.
///
/// `id` is echoed back in every `SpeechEvent` for this utterance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRequest {
    pub id: u64,
    pub text: String,
    pub lang: &'static str,
    pub rate: f32,
    pub pitch: f32,
}

impl SpeechRequest {
    /// Request with the fixed pronunciation settings.
    #[must_use]
    pub fn pronounce(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            lang: SPEECH_LANG,
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
        }
    }

    /// JSON object literal for handing the request to a script.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Encode` if serialization fails.
    pub fn to_json(&self) -> Result<String, SpeechError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Lifecycle notifications emitted by an in-flight utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpeechEvent {
    Started { request: u64 },
    Ended { request: u64 },
    Failed { request: u64, message: String },
}

impl SpeechEvent {
    /// Id of the `SpeechRequest` this event belongs to.
    #[must_use]
    pub fn request(&self) -> u64 {
        match self {
            SpeechEvent::Started { request }
            | SpeechEvent::Ended { request }
            | SpeechEvent::Failed { request, .. } => *request,
        }
    }

    /// No more events follow a terminal one for the same utterance.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SpeechEvent::Started { .. })
    }
}

/// Optional platform text-to-speech.
///
/// `speak` is fire-and-forget: it only reports failures to *start* the request.
/// Playback progress arrives later as `SpeechEvent`s through whatever channel
/// the implementation was built with. A new request supersedes the previous one.
pub trait SpeechEngine {
    fn is_available(&self) -> bool;

    /// # Errors
    ///
    /// Returns `SpeechError` if the request cannot be issued.
    fn speak(&self, request: &SpeechRequest) -> Result<(), SpeechError>;
}

/// Engine for platforms without speech synthesis.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSpeech;

impl SpeechEngine for UnavailableSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&self, _request: &SpeechRequest) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable)
    }
}
