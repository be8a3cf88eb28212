//! Page widgets. Each reads the shared [`Dashboard`](crate::dashboard::Dashboard)
//! signal from context and talks back through the dashboard coroutine.

mod chart_section;
mod chart_views;
mod language_toggle;
mod year_controls;

pub use chart_section::ChartSection;
pub use language_toggle::LanguageToggle;
pub use year_controls::YearControls;
