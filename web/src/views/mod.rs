mod login;
pub use login::Login;

mod home;
pub use home::{AdminHome, TrainerHome};

mod dashboard;
pub use dashboard::AdDashboard;

mod programs;
pub use programs::{AdminPrograms, TrainerPrograms};

mod schedule;
pub use schedule::Schedule;

mod not_found;
pub use not_found::NotFound;
