mod error;
pub mod metric;
pub mod program;
mod role;
pub mod training_day;

pub use error::{Error, Result};
pub use metric::{DashboardMetric, Percent, Tone};
pub use program::{Program, ProgramFilter, ProgramStatus};
pub use role::Role;
pub use training_day::{DayStatus, TrainingDay, reactivate_day};

// Only for `err!`.
#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
