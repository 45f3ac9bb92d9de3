//! Static copy for the landing page sections.

/// Learning topic card in the grammar section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Themed word list advertised in the vocabulary section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordTheme {
    pub emoji: &'static str,
    pub title: &'static str,
    pub word_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoLesson {
    pub title: &'static str,
    pub description: &'static str,
    pub minutes: u32,
}

impl VideoLesson {
    #[must_use]
    pub fn duration_label(&self) -> String {
        format!("{} мин", self.minutes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub title: &'static str,
    pub info: &'static str,
}

impl ContactChannel {
    /// Link target for channels that have one.
    #[must_use]
    pub fn href(&self) -> Option<String> {
        match self.kind {
            ContactKind::Email => Some(format!("mailto:{}", self.info)),
            ContactKind::Phone => {
                let digits: String = self
                    .info
                    .chars()
                    .filter(|ch| ch.is_ascii_digit() || *ch == '+')
                    .collect();
                Some(format!("tel:{digits}"))
            }
            ContactKind::Address => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const BRAND: &str = "Русский Язык";
pub const BRAND_EMOJI: &str = "🪆";
pub const COPYRIGHT: &str = "© 2024 Русский Язык. Все права защищены.";

pub static GRAMMAR_TOPICS: [Topic; 4] = [
    Topic {
        icon: "📖",
        title: "Алфавит",
        description: "Кириллица и произношение",
    },
    Topic {
        icon: "🔤",
        title: "Падежи",
        description: "6 падежей русского языка",
    },
    Topic {
        icon: "💬",
        title: "Глаголы",
        description: "Спряжение и виды глаголов",
    },
    Topic {
        icon: "✨",
        title: "Прилагательные",
        description: "Согласование и степени сравнения",
    },
];

pub static WORD_THEMES: [WordTheme; 6] = [
    WordTheme {
        emoji: "🏠",
        title: "Дом и семья",
        word_count: 120,
    },
    WordTheme {
        emoji: "🍽️",
        title: "Еда и напитки",
        word_count: 150,
    },
    WordTheme {
        emoji: "🚗",
        title: "Транспорт",
        word_count: 80,
    },
    WordTheme {
        emoji: "👔",
        title: "Одежда",
        word_count: 95,
    },
    WordTheme {
        emoji: "🎨",
        title: "Искусство",
        word_count: 110,
    },
    WordTheme {
        emoji: "⚽",
        title: "Спорт",
        word_count: 75,
    },
];

pub static CULTURE_HIGHLIGHTS: [Topic; 3] = [
    Topic {
        icon: "⭐",
        title: "Народные традиции",
        description: "От Масленицы до Рождества",
    },
    Topic {
        icon: "☕",
        title: "Русская кухня",
        description: "Борщ, пельмени, блины",
    },
    Topic {
        icon: "🎵",
        title: "Искусство и музыка",
        description: "Балет, классика, народные песни",
    },
];

pub static VIDEO_LESSONS: [VideoLesson; 4] = [
    VideoLesson {
        title: "Русские народные праздники",
        description: "Узнайте о традиционных праздниках: Масленица, Пасха, Новый год",
        minutes: 12,
    },
    VideoLesson {
        title: "История матрёшки",
        description: "Откуда появилась матрёшка и что она символизирует в русской культуре",
        minutes: 8,
    },
    VideoLesson {
        title: "Русская кухня",
        description: "Традиционные блюда: борщ, пельмени, блины и другие",
        minutes: 15,
    },
    VideoLesson {
        title: "Архитектура Москвы",
        description: "Путешествие по историческим местам столицы России",
        minutes: 20,
    },
];

pub static CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        kind: ContactKind::Email,
        title: "Email",
        info: "info@russianlang.ru",
    },
    ContactChannel {
        kind: ContactKind::Phone,
        title: "Телефон",
        info: "+7 (495) 123-45-67",
    },
    ContactChannel {
        kind: ContactKind::Address,
        title: "Адрес",
        info: "Москва, Россия",
    },
];

pub static STUDY_TIPS: [Topic; 3] = [
    Topic {
        icon: "👂",
        title: "Слушайте",
        description: "Естественное произношение",
    },
    Topic {
        icon: "🔁",
        title: "Повторяйте",
        description: "Тренируйте произношение",
    },
    Topic {
        icon: "✅",
        title: "Учитесь",
        description: "Запоминайте правильно",
    },
];

pub static FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Обучение",
        links: &["Грамматика", "Словарь", "Видео-уроки"],
    },
    FooterColumn {
        title: "О проекте",
        links: &["О нас", "Культура", "Блог"],
    },
    FooterColumn {
        title: "Контакты",
        links: &["Email", "Телефон", "Адрес"],
    },
];

/// Sum of the advertised theme word counts.
#[must_use]
pub fn advertised_word_count() -> u32 {
    WORD_THEMES.iter().map(|theme| theme.word_count).sum()
}
