use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        div { class: "page page--not-found",
            h2 { "Страница не найдена" }
            p { "Адрес {path} не существует." }
            Link { class: "btn btn--primary", to: Route::Landing {}, "На главную" }
        }
    }
}
