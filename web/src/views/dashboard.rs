use crate::fixtures;
use dioxus::prelude::*;
use ui::{DashboardCard, MetricsList};

#[component]
pub fn AdDashboard() -> Element {
    let programs = fixtures::programs();
    let cards = fixtures::summary_cards(&programs);

    rsx! {
        div { class: "page page-ad-dashboard",
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard" }
                p { class: "page-subtitle", "How training is going across all programs." }
            }
            div { class: "dashboard-grid",
                for card in cards {
                    DashboardCard {
                        key: "{card.title}",
                        title: card.title,
                        number: card.number,
                        icon: card.icon,
                        tone: card.tone,
                    }
                }
            }
            div { class: "grid grid-cols-2",
                MetricsList { title: "Training Metrics", metrics: fixtures::metrics() }
                MetricsList {
                    title: "Program Enrolment",
                    metrics: fixtures::fill_metrics(&programs),
                }
            }
        }
    }
}
