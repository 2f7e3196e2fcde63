use dioxus::prelude::*;
use types::DashboardMetric;

#[component]
pub fn MetricsItem(metric: DashboardMetric) -> Element {
    let value = metric.value.to_string();
    let bar_class = format!("metric-bar-fill {}", metric.tone.bg_class());
    let width = format!("width: {}%", metric.value.get());

    rsx! {
        li { class: "metric-item",
            div { class: "metric-item-header",
                span { class: "metric-label", "{metric.label}" }
                span { class: "metric-value", "{value}" }
            }
            div { class: "metric-bar",
                div { class: bar_class, style: width }
            }
        }
    }
}

/// A titled panel of metrics. An empty list shows a placeholder line.
#[component]
pub fn MetricsList(title: String, metrics: Vec<DashboardMetric>) -> Element {
    rsx! {
        div { class: "card metrics-card",
            div { class: "card-header",
                h2 { class: "card-title", "{title}" }
            }
            if metrics.is_empty() {
                p { class: "text-muted metrics-empty", "No metrics available" }
            } else {
                ul { class: "metric-list",
                    for (i, metric) in metrics.into_iter().enumerate() {
                        MetricsItem { key: "{i}", metric }
                    }
                }
            }
        }
    }
}
