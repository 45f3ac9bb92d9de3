#![forbid(unsafe_code)]

pub mod content;
pub mod error;
pub mod flashcards;
pub mod model;
pub mod quiz;

pub use error::Error;
pub use flashcards::FlashcardSession;
pub use quiz::{QuizError, QuizPhase, QuizSession, ScoreBand, Submission};
