//! Browser speech synthesis behind the `SpeechEngine` seam.

use dioxus::document::eval;
use dioxus::prelude::*;
use services::{SpeechEngine, SpeechError, SpeechEvent, SpeechRequest};

use crate::scripts::{SPEECH_DETECT_SCRIPT, speak_script};

/// Whether the webview exposes the Web Speech synthesis API.
///
/// Any evaluation failure counts as "not available".
pub async fn detect_speech() -> bool {
    match eval(SPEECH_DETECT_SCRIPT).join::<bool>().await {
        Ok(available) => available,
        Err(err) => {
            tracing::warn!(?err, "speech capability detection failed");
            false
        }
    }
}

/// Speaks through `window.speechSynthesis` and reports playback events to
/// `on_event` from a spawned task.
#[derive(Clone, Copy)]
pub struct BrowserSpeech {
    on_event: Callback<SpeechEvent>,
}

impl BrowserSpeech {
    #[must_use]
    pub fn new(on_event: Callback<SpeechEvent>) -> Self {
        Self { on_event }
    }
}

impl SpeechEngine for BrowserSpeech {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&self, request: &SpeechRequest) -> Result<(), SpeechError> {
        let script = speak_script(&request.to_json()?);
        let mut channel = eval(&script);
        let on_event = self.on_event;
        spawn(async move {
            loop {
                match channel.recv::<SpeechEvent>().await {
                    Ok(event) => {
                        let terminal = event.is_terminal();
                        on_event.call(event);
                        if terminal {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::debug!(?err, "speech event channel closed");
                        break;
                    }
                }
            }
        });
        Ok(())
    }
}
