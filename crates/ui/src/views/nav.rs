use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator, use_route};
use lingua_core::content::site::{BRAND, BRAND_EMOJI, COPYRIGHT, FOOTER_COLUMNS};
use lingua_core::model::Section;

use crate::routes::Route;
use crate::scripts::scroll_to_section_script;

/// Callback that marks a section active and scrolls to it, returning to the
/// landing page first when another route is shown.
pub fn use_section_scroll() -> Callback<Section> {
    let mut active = use_context::<Signal<Section>>();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    use_callback(move |section: Section| {
        if route != (Route::Landing {}) {
            navigator.push(Route::Landing {});
        }
        active.set(section);
        tracing::debug!(section = section.anchor(), "scrolling to section");
        let _ = eval(&scroll_to_section_script(section.anchor()));
    })
}

#[component]
pub fn SiteNav() -> Element {
    let active = use_context::<Signal<Section>>();
    let scroll_to = use_section_scroll();
    let route = use_route::<Route>();
    let on_landing = route == Route::Landing {};

    rsx! {
        header { class: "site-nav",
            button {
                class: "site-brand",
                onclick: move |_| scroll_to.call(Section::Home),
                span { class: "site-brand__emoji", "{BRAND_EMOJI}" }
                span { class: "site-brand__name", "{BRAND}" }
            }
            nav { class: "site-nav__links",
                for section in Section::ALL {
                    button {
                        key: "{section.anchor()}",
                        class: if on_landing && active() == section {
                            "site-nav__link site-nav__link--active"
                        } else {
                            "site-nav__link"
                        },
                        onclick: move |_| scroll_to.call(section),
                        "{section.label()}"
                    }
                }
                Link {
                    class: "site-nav__link",
                    active_class: "site-nav__link--active",
                    to: Route::Pronunciation {},
                    "Произношение"
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__grid",
                div { class: "site-footer__brand",
                    span { class: "site-brand__emoji", "{BRAND_EMOJI}" }
                    span { class: "site-brand__name", "{BRAND}" }
                    p { "Изучайте русский язык онлайн: грамматика, словарь и культура." }
                }
                for column in FOOTER_COLUMNS.iter() {
                    div { key: "{column.title}", class: "site-footer__column",
                        h4 { "{column.title}" }
                        ul {
                            for link in column.links.iter() {
                                li { key: "{link}", "{link}" }
                            }
                        }
                    }
                }
            }
            p { class: "site-footer__copyright", "{COPYRIGHT}" }
        }
    }
}
