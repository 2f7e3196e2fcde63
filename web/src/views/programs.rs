use crate::fixtures;
use dioxus::prelude::*;
use ui::ProgramsTab;

#[component]
pub fn AdminPrograms() -> Element {
    rsx! {
        div { class: "page page-admin-programs",
            div { class: "page-header",
                h1 { class: "page-title", "Programs" }
                p { class: "page-subtitle", "All training programs, grouped by status." }
            }
            ProgramsTab { programs: fixtures::programs() }
        }
    }
}

#[component]
pub fn TrainerPrograms() -> Element {
    let trainer = fixtures::CURRENT_TRAINER;

    rsx! {
        div { class: "page page-trainer-programs",
            div { class: "page-header",
                h1 { class: "page-title", "My Programs" }
                p { class: "page-subtitle", "Programs run by {trainer}." }
            }
            ProgramsTab { programs: fixtures::trainer_programs() }
        }
    }
}
