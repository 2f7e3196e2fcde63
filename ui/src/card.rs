use dioxus::prelude::*;
use types::Tone;

use crate::{Glyph, Icon};

/// A summary tile: a big number with a caption.
///
/// `tone` picks the background class of the icon badge. Without an `icon`
/// there is no badge at all.
#[component]
pub fn DashboardCard(
    title: String,
    number: String,
    icon: Option<Icon>,
    #[props(default)] tone: Tone,
) -> Element {
    let badge_class = format!("dashboard-card-icon {}", tone.bg_class());

    rsx! {
        div { class: "dashboard-card",
            if let Some(icon) = icon {
                div { class: badge_class,
                    Glyph { icon }
                }
            }
            div { class: "dashboard-card-body",
                p { class: "dashboard-card-number", "{number}" }
                h3 { class: "dashboard-card-title", "{title}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn renders_title_and_number_verbatim() {
        fn app() -> Element {
            rsx! {
                DashboardCard {
                    title: "Total Trainings",
                    number: "67",
                    icon: Icon::Book,
                    tone: Tone::Success,
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Total Trainings"));
        assert!(html.contains("67"));
        assert!(html.contains("bg-success"));
        assert!(html.contains("icon-book"));
    }

    #[test]
    fn omits_badge_without_icon() {
        fn app() -> Element {
            rsx! {
                DashboardCard { title: "Trainers", number: "12" }
            }
        }

        let html = render(app);
        assert!(html.contains("Trainers"));
        assert!(!html.contains("dashboard-card-icon"));
        assert!(!html.contains("undefined"));
    }
}
