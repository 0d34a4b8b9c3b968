//! eframe::App implementation for DashboardApp
//!
//! Contains the update loop that runs every frame. All state mutation
//! happens here, on the UI thread, one event at a time.

use super::app::DashboardApp;
use super::settings::{render_settings, SettingsState};
use eframe::egui;

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        render_settings(
            ctx,
            &mut SettingsState {
                form: &mut self.form,
                submit_status: &mut self.submit_status,
            },
        );
    }
}
