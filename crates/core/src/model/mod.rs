mod ids;
mod question;
mod section;
mod vocabulary;

pub use ids::QuestionId;

pub use question::{Question, QuestionBank, QuestionError};
pub use section::Section;
pub use vocabulary::{CategoryFilter, Vocabulary, VocabularyError, VocabularyWord};
