mod flashcard_vm;
mod quiz_vm;

pub use flashcard_vm::{
    CategoryChipVm, FlashcardIntent, FlashcardVm, WordCardVm, apply_flashcard_intent,
    map_flashcards,
};
pub use quiz_vm::{
    FeedbackVm, OptionState, ProgressDot, QuizActionVm, QuizIntent, QuizOptionVm,
    QuizQuestionVm, QuizResultVm, QuizVm, apply_quiz_intent, map_quiz,
};
