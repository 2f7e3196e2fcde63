//! Leaf view components. Everything here renders from its props alone.

mod card;
pub use card::DashboardCard;

mod icon;
pub use icon::{Glyph, Icon};

mod metrics;
pub use metrics::{MetricsItem, MetricsList};

mod modal;
pub use modal::{ModalAction, ReactivateDayModal};

mod programs;
pub use programs::ProgramsTab;
