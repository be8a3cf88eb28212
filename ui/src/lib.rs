//! Shared UI crate for the ICT sector dashboard. Data loading, series
//! transforms, chart presenters and views live here; the platform crates only
//! launch the app and say where the datasets are.

pub mod charts;
pub mod components;
pub mod core;
pub mod dashboard;
pub mod data;
pub mod i18n;
pub mod transform;
pub mod views;

pub use views::DashboardView;
