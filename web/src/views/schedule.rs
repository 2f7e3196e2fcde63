use crate::{
    fixtures,
    layout::{ErrorState, use_error},
};
use dioxus::prelude::*;
use types::{TrainingDay, reactivate_day};
use ui::ReactivateDayModal;
use uuid::Uuid;

/// Commits the pending reactivation and closes the modal. Failures end up
/// in the shell's error banner.
fn confirm_reactivation(
    days: &mut [TrainingDay],
    pending: &mut Option<Uuid>,
    error_state: &mut ErrorState,
) {
    let Some(id) = pending.take() else {
        return;
    };

    match reactivate_day(days, id) {
        Ok(()) => {
            tracing::info!(%id, "reactivated training day");
            error_state.clear();
        }
        Err(e) => {
            tracing::warn!(%id, error = %e, "could not reactivate training day");
            error_state.set(e.to_string());
        }
    }
}

#[component]
pub fn Schedule() -> Element {
    let mut days = use_signal(fixtures::training_days);
    let mut pending = use_signal(|| None::<Uuid>);
    let mut error_state = use_error();

    // The modal is open exactly while a day is pending.
    let pending_day = pending().and_then(|id| days.read().iter().find(|d| d.id == id).cloned());

    rsx! {
        div { class: "page page-schedule",
            div { class: "page-header",
                h1 { class: "page-title", "Schedule" }
                p { class: "page-subtitle", "Upcoming training days for your programs." }
            }
            div { class: "card",
                ul { class: "day-list",
                    for day in days.read().iter() {
                        {
                            let id = day.id;
                            let suspended = day.is_suspended();

                            rsx! {
                                li {
                                    key: "{id}",
                                    class: if suspended { "day-item suspended" } else { "day-item" },
                                    span { class: "day-date", "{day.date}" }
                                    span { class: "day-program", "{day.program}" }
                                    if suspended {
                                        button {
                                            r#type: "button",
                                            class: "btn btn-secondary btn-sm",
                                            onclick: move |_| pending.set(Some(id)),
                                            "Reactivate"
                                        }
                                    } else {
                                        span { class: "badge bg-success", "Scheduled" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            ReactivateDayModal {
                is_open: pending_day.is_some(),
                day: pending_day,
                on_close: move |_| pending.set(None),
                on_confirm: move |_| {
                    confirm_reactivation(&mut days.write(), &mut pending.write(), &mut error_state)
                },
            }
        }
    }
}
