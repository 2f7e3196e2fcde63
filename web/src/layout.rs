use dioxus::prelude::*;
use types::Role;
use ui::{Glyph, Icon};

use crate::{
    Route,
    links::{self, NavigationLink},
};

/// Per-area error state, provided by the role layouts - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<String>>);

impl ErrorState {
    pub fn new() -> Self {
        Self(Signal::new(None))
    }

    pub fn message(&self) -> Option<String> {
        self.0.cloned()
    }

    pub fn set(&mut self, error: impl Into<String>) {
        self.0.set(Some(error.into()));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the shell's error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

fn use_error_provider() -> ErrorState {
    use_context_provider(ErrorState::new)
}

#[component]
fn ErrorBanner() -> Element {
    // A bare shell has no layout above it and so no error state.
    let Some(mut error_state) = try_use_context::<ErrorState>() else {
        return rsx! {};
    };
    let error = error_state.0.read();

    if let Some(message) = error.as_ref() {
        rsx! {
            div { class: "error-banner",
                div { class: "error-banner-content",
                    span { class: "error-banner-message", "{message}" }
                    button {
                        class: "error-banner-close",
                        onclick: move |_| error_state.clear(),
                        "×"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}

#[component]
fn NavLink(link: NavigationLink, active: bool) -> Element {
    rsx! {
        Link {
            to: link.to.clone(),
            class: if active { "nav-link active" } else { "nav-link" },
            Glyph { icon: link.icon }
            span { "{link.label}" }
        }
    }
}

/// Persistent chrome of a role area.
///
/// `children` is the single insertion point for the routed page. With no
/// children the main area is simply left empty.
#[component]
pub fn Shell(role: Role, current: Route, children: Element) -> Element {
    use_hook(|| tracing::debug!(%role, "mounting shell"));

    let title = role.title();
    let page = links::active_link(role, &current)
        .map(|link| link.label)
        .unwrap_or(title);

    rsx! {
        div { class: "app-layout app-shell shell-{role}",
            // Sidebar
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "TrainDesk" }
                    span { class: "sidebar-role", "{title}" }
                }
                nav { class: "sidebar-nav",
                    for link in links::links_for(role) {
                        NavLink {
                            key: "{link.label}",
                            link: link.clone(),
                            active: link.is_active(&current),
                        }
                    }
                }
                div { class: "sidebar-footer",
                    Link { to: Route::Login {}, class: "sidebar-logout",
                        Glyph { icon: Icon::SignOut }
                        span { "Sign out" }
                    }
                }
            }
            div { class: "main-column",
                header { class: "topbar",
                    h1 { class: "topbar-title", "{page}" }
                    span { class: "topbar-role", "{title}" }
                }
                // Main content
                main { class: "main-content",
                    ErrorBanner {}
                    {children}
                }
            }
        }
    }
}

#[component]
pub fn AdminLayout() -> Element {
    use_error_provider();
    let current: Route = use_route();

    rsx! {
        Shell { role: Role::Admin, current, Outlet::<Route> {} }
    }
}

#[component]
pub fn StaffLayout() -> Element {
    use_error_provider();
    let current: Route = use_route();

    rsx! {
        Shell { role: Role::Trainer, current, Outlet::<Route> {} }
    }
}
