//! Demo data standing in for the backend the console would normally talk to.

use jiff::civil::date;
use types::{
    DashboardMetric, DayStatus, Percent, Program, ProgramStatus, TrainingDay, Tone,
};
use ui::Icon;
use uuid::Uuid;

/// The trainer whose area is shown under `/trainer`.
pub const CURRENT_TRAINER: &str = "Grace Hopper";

pub fn programs() -> Vec<Program> {
    [
        (1, "Workplace Safety", CURRENT_TRAINER, ProgramStatus::Active, 18, 24),
        (2, "First Aid Basics", "Alan Turing", ProgramStatus::Active, 22, 22),
        (3, "Leadership Essentials", CURRENT_TRAINER, ProgramStatus::Upcoming, 6, 20),
        (4, "Customer Service", "Ada Lovelace", ProgramStatus::Completed, 30, 30),
        (5, "Data Privacy", CURRENT_TRAINER, ProgramStatus::Completed, 14, 16),
        (6, "Conflict Resolution", "Alan Turing", ProgramStatus::Upcoming, 0, 12),
    ]
    .into_iter()
    .map(|(n, title, trainer, status, enrolled, capacity)| Program {
        id: Uuid::from_u128(0x1000 + n),
        title: title.into(),
        trainer: trainer.into(),
        status,
        enrolled,
        capacity,
    })
    .collect()
}

pub fn trainer_programs() -> Vec<Program> {
    programs()
        .into_iter()
        .filter(|p| p.trainer == CURRENT_TRAINER)
        .collect()
}

pub fn metrics() -> Vec<DashboardMetric> {
    vec![
        DashboardMetric::new("Attendance", Percent::clamped(82.0), Tone::Success),
        DashboardMetric::new("Course Completion", Percent::clamped(64.0), Tone::Info),
        DashboardMetric::new("Assessment Pass Rate", Percent::clamped(71.0), Tone::Primary),
        DashboardMetric::new("Dropout", Percent::clamped(9.0), Tone::Danger),
    ]
}

/// Enrolment per program, as metrics.
pub fn fill_metrics(programs: &[Program]) -> Vec<DashboardMetric> {
    programs
        .iter()
        .filter(|p| p.status != ProgramStatus::Completed)
        .map(|p| DashboardMetric::new(p.title.clone(), p.fill(), p.status.tone()))
        .collect()
}

pub struct SummaryCard {
    pub title: &'static str,
    pub number: String,
    pub icon: Icon,
    pub tone: Tone,
}

pub fn summary_cards(programs: &[Program]) -> Vec<SummaryCard> {
    let mut trainers: Vec<&str> = programs.iter().map(|p| p.trainer.as_str()).collect();
    trainers.sort_unstable();
    trainers.dedup();

    let active = programs
        .iter()
        .filter(|p| p.status == ProgramStatus::Active)
        .count();
    let enrolled: u32 = programs.iter().map(|p| p.enrolled).sum();

    vec![
        SummaryCard {
            title: "Total Trainings",
            number: programs.len().to_string(),
            icon: Icon::Book,
            tone: Tone::Primary,
        },
        SummaryCard {
            title: "Active Programs",
            number: active.to_string(),
            icon: Icon::Trophy,
            tone: Tone::Success,
        },
        SummaryCard {
            title: "Trainers",
            number: trainers.len().to_string(),
            icon: Icon::Users,
            tone: Tone::Info,
        },
        SummaryCard {
            title: "Enrolled Trainees",
            number: enrolled.to_string(),
            icon: Icon::Clock,
            tone: Tone::Warning,
        },
    ]
}

pub fn training_days() -> Vec<TrainingDay> {
    [
        (1, date(2026, 11, 2), "Workplace Safety", DayStatus::Scheduled),
        (2, date(2026, 11, 4), "Workplace Safety", DayStatus::Suspended),
        (3, date(2026, 11, 9), "Leadership Essentials", DayStatus::Scheduled),
        (4, date(2026, 11, 11), "Leadership Essentials", DayStatus::Suspended),
        (5, date(2026, 11, 16), "Data Privacy", DayStatus::Scheduled),
    ]
    .into_iter()
    .map(|(n, date, program, status)| TrainingDay {
        id: Uuid::from_u128(0x2000 + n),
        date,
        program: program.into(),
        status,
    })
    .collect()
}
