use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use lingua_core::model::Section;

use crate::views::{LandingView, NotFoundView, PronunciationView, SiteFooter, SiteNav};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LandingView)] Landing {},
        #[route("/pronunciation", PronunciationView)] Pronunciation {},
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    use_context_provider(|| Signal::new(Section::Home));

    rsx! {
        div { class: "site",
            SiteNav {}
            main { class: "site-main",
                Outlet::<Route> {}
            }
            SiteFooter {}
        }
    }
}
