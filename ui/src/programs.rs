use dioxus::prelude::*;
use types::{Program, ProgramFilter};

/// Programs table with status tabs. The selected tab is local state.
#[component]
pub fn ProgramsTab(programs: Vec<Program>) -> Element {
    let mut filter = use_signal(ProgramFilter::default);
    let selected = filter();
    let visible = selected.apply(&programs);

    rsx! {
        div { class: "card programs-tab",
            div { class: "tab-bar", role: "tablist",
                for tab in ProgramFilter::TABS {
                    {
                        let label = tab.label();
                        let count = tab.count(&programs);

                        rsx! {
                            button {
                                key: "{label}",
                                r#type: "button",
                                role: "tab",
                                class: if tab == selected { "tab active" } else { "tab" },
                                onclick: move |_| {
                                    tracing::debug!(tab = label, "switching programs tab");
                                    filter.set(tab);
                                },
                                "{label}"
                                span { class: "tab-count", "{count}" }
                            }
                        }
                    }
                }
            }
            if visible.is_empty() {
                p { class: "text-muted programs-empty", "No programs in this category" }
            } else {
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Program" }
                                th { "Trainer" }
                                th { "Status" }
                                th { "Enrolled" }
                            }
                        }
                        tbody {
                            for program in visible {
                                {
                                    let status = program.status;
                                    let badge = format!("badge {}", status.tone().bg_class());
                                    let fill = program.fill();

                                    rsx! {
                                        tr { key: "{program.id}",
                                            td { "{program.title}" }
                                            td { "{program.trainer}" }
                                            td {
                                                span { class: badge, {status.label()} }
                                            }
                                            td { "{program.enrolled}/{program.capacity} ({fill})" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
