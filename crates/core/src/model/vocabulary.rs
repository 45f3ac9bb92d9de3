use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VocabularyError {
    #[error("vocabulary cannot be empty")]
    Empty,

    #[error("word {native:?} has an empty category")]
    MissingCategory { native: &'static str },
}

//
// ─── WORD ──────────────────────────────────────────────────────────────────────
//

/// A vocabulary entry shown on a pronunciation flashcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyWord {
    pub native: &'static str,
    pub transcription: &'static str,
    pub translation: &'static str,
    pub category: &'static str,
}

impl VocabularyWord {
    #[must_use]
    pub const fn new(
        native: &'static str,
        transcription: &'static str,
        translation: &'static str,
        category: &'static str,
    ) -> Self {
        Self {
            native,
            transcription,
            translation,
            category,
        }
    }
}

//
// ─── CATEGORY FILTER ───────────────────────────────────────────────────────────
//

/// Active category selection for the flashcard list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(&'static str),
}

impl CategoryFilter {
    /// Label shown on the chip that clears the filter.
    pub const ALL_LABEL: &'static str = "Все";

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category,
        }
    }

    #[must_use]
    pub fn matches(&self, word: &VocabularyWord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => word.category == *category,
        }
    }
}

//
// ─── VOCABULARY ────────────────────────────────────────────────────────────────
//

/// Validated, immutable ordered list of vocabulary words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    words: &'static [VocabularyWord],
}

impl Vocabulary {
    /// Wrap a static word table after checking it.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::Empty` for an empty table and
    /// `VocabularyError::MissingCategory` for a word with a blank category.
    pub fn new(words: &'static [VocabularyWord]) -> Result<Self, VocabularyError> {
        if words.is_empty() {
            return Err(VocabularyError::Empty);
        }
        if let Some(word) = words.iter().find(|word| word.category.trim().is_empty()) {
            return Err(VocabularyError::MissingCategory {
                native: word.native,
            });
        }
        Ok(Self { words })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed vocabulary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &'static [VocabularyWord] {
        self.words
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories: Vec<&'static str> = Vec::new();
        for word in self.words {
            if !categories.contains(&word.category) {
                categories.push(word.category);
            }
        }
        categories
    }

    /// Every filter a user can pick: `All` first, then each category.
    #[must_use]
    pub fn filters(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(self.categories().into_iter().map(CategoryFilter::Only))
            .collect()
    }

    #[must_use]
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&'static VocabularyWord> {
        self.words.iter().filter(|word| filter.matches(word)).collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
