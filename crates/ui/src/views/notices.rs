use std::time::Duration;

use dioxus::prelude::*;
use services::{NOTICE_TTL, Notice};

#[component]
pub fn NoticeStack(notices: Vec<Notice>, on_dismiss: EventHandler<u64>) -> Element {
    if notices.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "notice-stack", role: "status",
            for notice in notices {
                NoticeItem { key: "{notice.id}", notice: notice.clone(), on_dismiss }
            }
        }
    }
}

/// One toast; dismisses itself after `NOTICE_TTL`.
#[component]
fn NoticeItem(notice: Notice, on_dismiss: EventHandler<u64>) -> Element {
    let id = notice.id;
    use_future(move || async move {
        sleep(NOTICE_TTL).await;
        on_dismiss.call(id);
    });

    rsx! {
        div { class: "notice notice--destructive",
            div { class: "notice__text",
                strong { "{notice.title}" }
                p { "{notice.description}" }
            }
            button {
                class: "notice__dismiss",
                aria_label: "Закрыть",
                onclick: move |_| on_dismiss.call(id),
                "×"
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}
