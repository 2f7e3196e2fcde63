use dioxus::prelude::*;

/// Opaque icon identifier. The stylesheet maps `icon-<name>` to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    Chart,
    Book,
    Calendar,
    Users,
    Trophy,
    Clock,
    SignOut,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::Chart => "chart",
            Icon::Book => "book",
            Icon::Calendar => "calendar",
            Icon::Users => "users",
            Icon::Trophy => "trophy",
            Icon::Clock => "clock",
            Icon::SignOut => "sign-out",
        }
    }
}

#[component]
pub fn Glyph(icon: Icon) -> Element {
    let name = icon.name();

    rsx! {
        i { class: "icon icon-{name}", aria_hidden: "true" }
    }
}
