use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metric::{Percent, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramStatus {
    Active,
    Upcoming,
    Completed,
}

impl ProgramStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProgramStatus::Active => "Active",
            ProgramStatus::Upcoming => "Upcoming",
            ProgramStatus::Completed => "Completed",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            ProgramStatus::Active => Tone::Success,
            ProgramStatus::Upcoming => Tone::Info,
            ProgramStatus::Completed => Tone::Primary,
        }
    }
}

/// A training program as listed on the programs tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: Uuid,
    pub title: String,
    pub trainer: String,
    pub status: ProgramStatus,
    pub enrolled: u32,
    pub capacity: u32,
}

impl Program {
    pub fn fill(&self) -> Percent {
        Percent::ratio(self.enrolled, self.capacity)
    }
}

/// One tab of the programs view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProgramFilter {
    #[default]
    All,
    Only(ProgramStatus),
}

impl ProgramFilter {
    /// Tabs in display order.
    pub const TABS: [ProgramFilter; 4] = [
        ProgramFilter::All,
        ProgramFilter::Only(ProgramStatus::Active),
        ProgramFilter::Only(ProgramStatus::Upcoming),
        ProgramFilter::Only(ProgramStatus::Completed),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProgramFilter::All => "All",
            ProgramFilter::Only(status) => status.label(),
        }
    }

    pub fn matches(self, program: &Program) -> bool {
        match self {
            ProgramFilter::All => true,
            ProgramFilter::Only(status) => program.status == status,
        }
    }

    pub fn apply(self, programs: &[Program]) -> Vec<&Program> {
        programs.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn count(self, programs: &[Program]) -> usize {
        programs.iter().filter(|p| self.matches(p)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(n: u128, status: ProgramStatus) -> Program {
        Program {
            id: Uuid::from_u128(n),
            title: format!("Program {n}"),
            trainer: "Ada".into(),
            status,
            enrolled: 10,
            capacity: 20,
        }
    }

    #[test]
    fn status_tabs_partition_the_list() {
        let programs = vec![
            program(1, ProgramStatus::Active),
            program(2, ProgramStatus::Active),
            program(3, ProgramStatus::Upcoming),
            program(4, ProgramStatus::Completed),
        ];

        let by_status: usize = ProgramFilter::TABS[1..]
            .iter()
            .map(|f| f.count(&programs))
            .sum();
        assert_eq!(by_status, programs.len());
        assert_eq!(ProgramFilter::All.count(&programs), programs.len());
    }

    #[test]
    fn apply_keeps_declaration_order() {
        let programs = vec![
            program(1, ProgramStatus::Active),
            program(2, ProgramStatus::Upcoming),
            program(3, ProgramStatus::Active),
        ];
        let ids: Vec<_> = ProgramFilter::Only(ProgramStatus::Active)
            .apply(&programs)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![Uuid::from_u128(1), Uuid::from_u128(3)]);
    }

    #[test]
    fn fill_is_a_percentage_of_capacity() {
        let mut p = program(1, ProgramStatus::Active);
        assert_eq!(p.fill().get(), 50);
        p.capacity = 0;
        assert_eq!(p.fill(), Percent::ZERO);
    }
}
