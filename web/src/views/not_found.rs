use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "page page-not-found not-found-page",
            div { class: "login-card",
                h1 { class: "login-title", "Page not found" }
                p { class: "text-muted", "Nothing lives at " code { "{path}" } "." }
                Link { to: Route::Login {}, class: "btn btn-primary", "Back to sign in" }
            }
        }
    }
}
