use crate::model::{Vocabulary, VocabularyError, VocabularyWord};

static PRONUNCIATION_WORDS: [VocabularyWord; 15] = [
    VocabularyWord::new("Здравствуйте", "[zdrast-vuy-tye]", "Hello (formal)", "Приветствия"),
    VocabularyWord::new("Спасибо", "[spa-see-ba]", "Thank you", "Вежливость"),
    VocabularyWord::new("Пожалуйста", "[pa-zhal-sta]", "Please / You're welcome", "Вежливость"),
    VocabularyWord::new("До свидания", "[da svi-da-ni-ya]", "Goodbye", "Приветствия"),
    VocabularyWord::new("Извините", "[iz-vi-nee-tye]", "Excuse me / Sorry", "Вежливость"),
    VocabularyWord::new("Хорошо", "[ha-ra-sho]", "Good / Okay", "Базовые"),
    VocabularyWord::new("Да", "[da]", "Yes", "Базовые"),
    VocabularyWord::new("Нет", "[nyet]", "No", "Базовые"),
    VocabularyWord::new("Как дела?", "[kak de-la]", "How are you?", "Фразы"),
    VocabularyWord::new("Понятно", "[pa-nyat-na]", "Understood", "Базовые"),
    VocabularyWord::new("Красиво", "[kra-see-va]", "Beautiful", "Прилагательные"),
    VocabularyWord::new("Большой", "[bal-shoy]", "Big", "Прилагательные"),
    VocabularyWord::new("Маленький", "[ma-lyn-kiy]", "Small", "Прилагательные"),
    VocabularyWord::new("Вкусно", "[fkus-na]", "Tasty", "Еда"),
    VocabularyWord::new("Любовь", "[lyu-bof]", "Love", "Эмоции"),
];

/// Words practised on the pronunciation flashcards.
///
/// # Errors
///
/// Returns `VocabularyError` if the built-in table is malformed.
pub fn pronunciation_words() -> Result<Vocabulary, VocabularyError> {
    Vocabulary::new(&PRONUNCIATION_WORDS)
}
