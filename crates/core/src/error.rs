use thiserror::Error;

use crate::model::{QuestionError, VocabularyError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}
