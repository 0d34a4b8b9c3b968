//! GUI module for the dashboard
//!
//! A single-window eframe application: the settings form is the only view.

pub mod app;
pub mod app_eframe;
pub mod runner;
pub mod settings;

pub use app::DashboardApp;
pub use runner::run_gui;
