use dioxus::prelude::*;
use types::TrainingDay;

/// The two ways out of an open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Close,
    Confirm,
}

impl ModalAction {
    /// Footer order.
    pub const ALL: [ModalAction; 2] = [ModalAction::Close, ModalAction::Confirm];

    fn label(self) -> &'static str {
        match self {
            ModalAction::Close => "Cancel",
            ModalAction::Confirm => "Reactivate",
        }
    }

    /// Call the handler belonging to this action, once.
    pub fn fire(self, on_close: EventHandler<()>, on_confirm: EventHandler<()>) {
        match self {
            ModalAction::Close => on_close.call(()),
            ModalAction::Confirm => on_confirm.call(()),
        }
    }

    fn class(self) -> &'static str {
        match self {
            ModalAction::Close => "btn btn-secondary modal-action-close",
            ModalAction::Confirm => "btn btn-primary modal-action-confirm",
        }
    }
}

/// Confirmation dialog for putting a suspended training day back on the
/// schedule.
///
/// The parent owns `is_open`. Closed renders nothing. `on_confirm` is the
/// commit signal; the parent is expected to close the modal afterwards.
/// Without a `day` the body falls back to generic wording.
#[component]
pub fn ReactivateDayModal(
    is_open: bool,
    day: Option<TrainingDay>,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal modal-sm",
                role: "dialog",
                div { class: "modal-header",
                    h2 { class: "modal-title", "Reactivate Day" }
                }
                div { class: "modal-body",
                    if let Some(day) = &day {
                        p {
                            "Put " strong { "{day.program}" } " on "
                            strong { "{day.date}" } " back on the schedule?"
                        }
                    } else {
                        p { "Put this training day back on the schedule?" }
                    }
                    p { class: "text-muted", "Trainees will see the session again." }
                }
                div { class: "modal-footer",
                    for action in ModalAction::ALL {
                        {
                            let label = action.label();

                            rsx! {
                                button {
                                    key: "{label}",
                                    r#type: "button",
                                    class: action.class(),
                                    onclick: move |_| action.fire(on_close, on_confirm),
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
