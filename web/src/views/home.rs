use crate::links;
use dioxus::prelude::*;
use types::Role;
use ui::Glyph;

#[component]
fn RoleHome(role: Role) -> Element {
    let title = role.title();

    rsx! {
        div { class: "page page-{role}-home",
            div { class: "page-header",
                h1 { class: "page-title", "Welcome back" }
                p { class: "page-subtitle", "You are signed in to the {title} area." }
            }
            div { class: "dashboard-grid",
                // The first link is this page.
                for link in links::links_for(role).iter().skip(1) {
                    Link {
                        key: "{link.label}",
                        to: link.to.clone(),
                        class: "dashboard-card dashboard-link",
                        Glyph { icon: link.icon }
                        h3 { class: "dashboard-card-title", "{link.label}" }
                        p { class: "dashboard-card-desc", "{link.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AdminHome() -> Element {
    rsx! { RoleHome { role: Role::Admin } }
}

#[component]
pub fn TrainerHome() -> Element {
    rsx! { RoleHome { role: Role::Trainer } }
}
