//! Settings form rendering
//!
//! Renders the dashboard's only view: three labeled text inputs bound
//! directly to the form state, and a submit button. Immediate mode keeps the
//! displayed value of each input identical to the bound field on every frame.

use eframe::egui::{self, RichText};

use super::app::{
    ACCENT_GREEN, ACCENT_RED, BG_PRIMARY, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::form::SettingsForm;

/// State for the settings view
pub struct SettingsState<'a> {
    pub form: &'a mut SettingsForm,
    pub submit_status: &'a mut Option<(String, bool)>,
}

/// Render a labeled text input field
fn render_text_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    width: f32,
    hint: Option<&str>,
) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(TEXT_MUTED));
        let mut edit = egui::TextEdit::singleline(value)
            .font(egui::TextStyle::Monospace)
            .text_color(TEXT_PRIMARY)
            .desired_width(width);
        if let Some(h) = hint {
            edit = edit.hint_text(h);
        }
        ui.add(edit);
    });
}

/// Render a status message (success or error)
fn render_status_message(ui: &mut egui::Ui, status: &Option<(String, bool)>) {
    if let Some((msg, is_error)) = status {
        let color = if *is_error { ACCENT_RED } else { ACCENT_GREEN };
        ui.label(RichText::new(msg).color(color));
    }
}

/// Render the settings form view
pub fn render_settings(ctx: &egui::Context, state: &mut SettingsState<'_>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(BG_PRIMARY).inner_margin(16.0))
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new("📡 ARXIV LISTENER DASHBOARD")
                        .monospace()
                        .size(18.0)
                        .color(TEXT_PRIMARY),
                );
                ui.label(
                    RichText::new("Pick a channel to follow and where alerts should go")
                        .color(TEXT_DIM),
                );
                ui.add_space(16.0);

                egui::Frame::none()
                    .fill(BG_SECONDARY)
                    .inner_margin(12.0)
                    .corner_radius(4.0)
                    .show(ui, |ui| {
                        render_text_field(
                            ui,
                            "arXiv Channel:",
                            &mut state.form.channel,
                            220.0,
                            Some("cs.AI"),
                        );
                        ui.add_space(8.0);
                        render_text_field(
                            ui,
                            "Area of Interest:",
                            &mut state.form.interest,
                            220.0,
                            Some("transformers"),
                        );
                        ui.add_space(8.0);
                        render_text_field(
                            ui,
                            "Email:",
                            &mut state.form.email,
                            220.0,
                            Some("you@example.com"),
                        );
                        ui.add_space(12.0);

                        ui.horizontal(|ui| {
                            if ui
                                .button(RichText::new("Save Settings").color(TEXT_PRIMARY))
                                .clicked()
                            {
                                let _ = state.form.submit();
                                *state.submit_status = Some((
                                    "Settings captured (not yet sent)".to_string(),
                                    false,
                                ));
                            }
                            render_status_message(ui, state.submit_status);
                        });
                    });
            });
        });
}
