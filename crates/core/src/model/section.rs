use serde::{Deserialize, Serialize};

/// Scroll anchors of the landing page, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Grammar,
    Exercises,
    Vocabulary,
    Culture,
    Videos,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Grammar,
        Section::Exercises,
        Section::Vocabulary,
        Section::Culture,
        Section::Videos,
        Section::Contact,
    ];

    /// Element id used as the scroll target.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Grammar => "grammar",
            Section::Exercises => "exercises",
            Section::Vocabulary => "vocabulary",
            Section::Culture => "culture",
            Section::Videos => "videos",
            Section::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Grammar => "Грамматика",
            Section::Exercises => "Упражнения",
            Section::Vocabulary => "Словарь",
            Section::Culture => "О культуре",
            Section::Videos => "Видео-уроки",
            Section::Contact => "Контакты",
        }
    }

    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.anchor() == anchor)
    }
}
