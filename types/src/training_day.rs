use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, err};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Scheduled,
    Suspended,
}

/// A single day of a program on a trainer's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingDay {
    pub id: Uuid,
    pub date: Date,
    pub program: String,
    pub status: DayStatus,
}

impl TrainingDay {
    pub fn is_suspended(&self) -> bool {
        self.status == DayStatus::Suspended
    }

    pub fn suspend(&mut self) -> Result<()> {
        if self.is_suspended() {
            return Err(err!("training day {} is already suspended", self.date));
        }
        self.status = DayStatus::Suspended;
        Ok(())
    }

    pub fn reactivate(&mut self) -> Result<()> {
        if !self.is_suspended() {
            return Err(err!("training day {} is not suspended", self.date));
        }
        self.status = DayStatus::Scheduled;
        Ok(())
    }
}

/// Reactivate the day with `id`.
pub fn reactivate_day(days: &mut [TrainingDay], id: Uuid) -> Result<()> {
    days.iter_mut()
        .find(|d| d.id == id)
        .ok_or_else(|| err!("no training day with id {id}"))?
        .reactivate()
}
