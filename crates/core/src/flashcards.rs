use crate::model::{CategoryFilter, Vocabulary, VocabularyWord};

/// Circular walk over the words of the active category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardSession {
    vocabulary: Vocabulary,
    filter: CategoryFilter,
    words: Vec<&'static VocabularyWord>,
    index: usize,
}

impl FlashcardSession {
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            filter: CategoryFilter::All,
            words: vocabulary.filtered(CategoryFilter::All),
            index: 0,
        }
    }

    #[must_use]
    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    #[must_use]
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Words of the active category in table order.
    #[must_use]
    pub fn words(&self) -> &[&'static VocabularyWord] {
        &self.words
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True only when the filter names a category with no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> Option<&'static VocabularyWord> {
        self.words.get(self.index).copied()
    }

    /// Switch category and go back to its first word.
    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.words = self.vocabulary.filtered(filter);
        self.index = 0;
    }

    /// Step forward, wrapping from the last word to the first.
    pub fn next(&mut self) {
        let len = self.words.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    /// Step back, wrapping from the first word to the last.
    pub fn previous(&mut self) {
        let len = self.words.len();
        if len == 0 {
            return;
        }
        self.index = if self.index == 0 { len - 1 } else { self.index - 1 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static WORDS: [VocabularyWord; 5] = [
        VocabularyWord::new("Здравствуйте", "[zdrast-vuy-tye]", "Hello (formal)", "Приветствия"),
        VocabularyWord::new("Спасибо", "[spa-see-ba]", "Thank you", "Вежливость"),
        VocabularyWord::new("До свидания", "[da svi-da-ni-ya]", "Goodbye", "Приветствия"),
        VocabularyWord::new("Да", "[da]", "Yes", "Базовые"),
        VocabularyWord::new("Любовь", "[lyu-bof]", "Love", "Эмоции"),
    ];

    fn session() -> FlashcardSession {
        FlashcardSession::new(Vocabulary::new(&WORDS).unwrap())
    }

    #[test]
    fn starts_on_first_word_of_all() {
        let cards = session();
        assert_eq!(cards.filter(), CategoryFilter::All);
        assert_eq!(cards.len(), 5);
        assert_eq!(cards.index(), 0);
        assert_eq!(cards.current().map(|word| word.native), Some("Здравствуйте"));
    }

    #[test]
    fn next_wraps_to_first() {
        let mut cards = session();
        for _ in 0..4 {
            cards.next();
        }
        assert_eq!(cards.index(), 4);
        cards.next();
        assert_eq!(cards.index(), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut cards = session();
        cards.previous();
        assert_eq!(cards.index(), 4);
        assert_eq!(cards.current().map(|word| word.native), Some("Любовь"));
        cards.previous();
        assert_eq!(cards.index(), 3);
    }

    #[test]
    fn category_change_resets_index() {
        let mut cards = session();
        cards.next();
        cards.next();
        cards.set_category(CategoryFilter::Only("Приветствия"));
        assert_eq!(cards.index(), 0);
        assert_eq!(cards.len(), 2);
        cards.next();
        assert_eq!(cards.current().map(|word| word.native), Some("До свидания"));
        cards.next();
        assert_eq!(cards.index(), 0);
    }

    #[test]
    fn single_word_category_stays_put() {
        let mut cards = session();
        cards.next();
        cards.next();
        cards.next();
        cards.set_category(CategoryFilter::Only("Эмоции"));
        assert_eq!(cards.index(), 0);
        cards.next();
        assert_eq!(cards.index(), 0);
        cards.previous();
        assert_eq!(cards.index(), 0);
        assert_eq!(cards.current().map(|word| word.translation), Some("Love"));
    }

    #[test]
    fn unknown_category_has_no_current_word() {
        let mut cards = session();
        cards.set_category(CategoryFilter::Only("Еда"));
        assert!(cards.is_empty());
        assert_eq!(cards.current(), None);
        cards.next();
        cards.previous();
        assert_eq!(cards.index(), 0);

        cards.set_category(CategoryFilter::All);
        assert_eq!(cards.len(), 5);
    }
}
