use dioxus::prelude::*;
use dioxus_router::Link;
use lingua_core::content::site::{
    CONTACT_CHANNELS, CULTURE_HIGHLIGHTS, GRAMMAR_TOPICS, VIDEO_LESSONS, WORD_THEMES,
    advertised_word_count,
};
use lingua_core::model::Section;

use crate::routes::Route;
use crate::views::nav::use_section_scroll;
use crate::views::quiz::QuizPanel;

#[component]
pub fn LandingView() -> Element {
    rsx! {
        div { class: "page page--landing",
            Hero {}
            GrammarSection {}
            ExercisesSection {}
            VocabularySection {}
            CultureSection {}
            VideosSection {}
            ContactSection {}
        }
    }
}

#[component]
fn SectionHeading(badge: &'static str, title: &'static str, lead: &'static str) -> Element {
    rsx! {
        div { class: "section-heading",
            span { class: "section-badge", "{badge}" }
            h3 { "{title}" }
            p { class: "section-lead", "{lead}" }
        }
    }
}

#[component]
fn Hero() -> Element {
    let scroll_to = use_section_scroll();

    rsx! {
        section { id: Section::Home.anchor(), class: "hero",
            div { class: "hero__copy",
                span { class: "section-badge", "🎓 Изучайте русский язык легко!" }
                h2 { class: "hero__title",
                    "Откройте мир "
                    span { class: "hero__accent", "русской культуры" }
                }
                p { class: "hero__lead",
                    "Интерактивная платформа для изучения русского языка: грамматика, лексика, культура и традиции в одном месте"
                }
                div { class: "hero__actions",
                    button {
                        class: "btn btn--primary",
                        onclick: move |_| scroll_to.call(Section::Grammar),
                        "Начать обучение →"
                    }
                    button {
                        class: "btn btn--outline",
                        onclick: move |_| scroll_to.call(Section::Videos),
                        "Смотреть видео ▶"
                    }
                }
            }
            div { class: "hero__art", aria_hidden: "true", "🪆" }
        }
    }
}

#[component]
fn GrammarSection() -> Element {
    rsx! {
        section { id: Section::Grammar.anchor(), class: "section",
            SectionHeading {
                badge: Section::Grammar.label(),
                title: "Основы русской грамматики",
                lead: "Изучайте правила русского языка структурированно и понятно",
            }
            div { class: "card-grid card-grid--four",
                for topic in GRAMMAR_TOPICS.iter() {
                    article { key: "{topic.title}", class: "topic-card",
                        div { class: "topic-card__icon", "{topic.icon}" }
                        h4 { "{topic.title}" }
                        p { "{topic.description}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ExercisesSection() -> Element {
    rsx! {
        section { id: Section::Exercises.anchor(), class: "section section--tinted",
            SectionHeading {
                badge: Section::Exercises.label(),
                title: "Проверьте свои знания",
                lead: "Интерактивный тест по русской грамматике с мгновенной проверкой ответов",
            }
            QuizPanel {}
        }
    }
}

#[component]
fn VocabularySection() -> Element {
    let total = advertised_word_count();

    rsx! {
        section { id: Section::Vocabulary.anchor(), class: "section section--tinted",
            SectionHeading {
                badge: Section::Vocabulary.label(),
                title: "Тематический словарь",
                lead: "Более 600 слов по популярным темам с транскрипцией и примерами",
            }
            p { class: "section-note", "{total} слов в {WORD_THEMES.len()} темах" }
            div { class: "card-grid card-grid--three",
                for theme in WORD_THEMES.iter() {
                    article { key: "{theme.title}", class: "theme-card",
                        span { class: "theme-card__emoji", "{theme.emoji}" }
                        div {
                            h4 { "{theme.title}" }
                            p { "{theme.word_count} слов" }
                        }
                    }
                }
            }
            div { class: "section-cta",
                Link { class: "btn btn--primary", to: Route::Pronunciation {},
                    "Тренировать произношение"
                }
            }
        }
    }
}

#[component]
fn CultureSection() -> Element {
    rsx! {
        section { id: Section::Culture.anchor(), class: "section",
            SectionHeading {
                badge: Section::Culture.label(),
                title: "Погрузитесь в русскую культуру",
                lead: "Изучение языка невозможно без понимания культуры. Узнайте о традициях, праздниках, кухне, искусстве и истории России.",
            }
            div { class: "highlight-list",
                for item in CULTURE_HIGHLIGHTS.iter() {
                    div { key: "{item.title}", class: "highlight",
                        span { class: "highlight__icon", "{item.icon}" }
                        div {
                            h4 { "{item.title}" }
                            p { "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VideosSection() -> Element {
    rsx! {
        section { id: Section::Videos.anchor(), class: "section section--tinted",
            SectionHeading {
                badge: Section::Videos.label(),
                title: "Видео о русской культуре",
                lead: "Смотрите увлекательные видео о традициях, истории и повседневной жизни России",
            }
            div { class: "card-grid card-grid--two",
                for video in VIDEO_LESSONS.iter() {
                    article { key: "{video.title}", class: "video-card",
                        div { class: "video-card__poster", span { class: "video-card__play", "▶" } }
                        div { class: "video-card__body",
                            div { class: "video-card__header",
                                h4 { "{video.title}" }
                                span { class: "video-card__duration", "{video.duration_label()}" }
                            }
                            p { "{video.description}" }
                            span { class: "video-card__link", "Смотреть урок" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactSection() -> Element {
    rsx! {
        section { id: Section::Contact.anchor(), class: "section",
            SectionHeading {
                badge: Section::Contact.label(),
                title: "Свяжитесь с нами",
                lead: "Есть вопросы? Мы всегда рады помочь!",
            }
            div { class: "card-grid card-grid--three",
                for channel in CONTACT_CHANNELS.iter() {
                    article { key: "{channel.title}", class: "contact-card",
                        h4 { "{channel.title}" }
                        if let Some(href) = channel.href() {
                            a { href: "{href}", "{channel.info}" }
                        } else {
                            p { "{channel.info}" }
                        }
                    }
                }
            }
        }
    }
}
