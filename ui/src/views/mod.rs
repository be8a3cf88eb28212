mod dashboard;
pub use dashboard::{DashboardEvent, DashboardView};
