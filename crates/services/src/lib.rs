#![forbid(unsafe_code)]

pub mod error;
pub mod notice;
pub mod pronunciation;
pub mod speech;

pub use error::SpeechError;
pub use notice::{NOTICE_TTL, Notice, NoticeBoard};
pub use pronunciation::{PronunciationService, SpeechSupport};
pub use speech::{SpeechEngine, SpeechEvent, SpeechRequest, UnavailableSpeech};
