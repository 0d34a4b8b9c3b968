//! Dashboard application state and theme.

use eframe::egui::{self, Color32, Stroke};

use crate::form::SettingsForm;

// ═══════════════════════════════════════════════════════════════════════════
// THEME: "Terminal Phosphor" - Retro CRT monitor aesthetic
// ═══════════════════════════════════════════════════════════════════════════

/// Background: Deep charcoal with subtle blue tint
pub(super) const BG_PRIMARY: Color32 = Color32::from_rgb(18, 20, 24);
/// Secondary background for panels and input fields
pub(super) const BG_SECONDARY: Color32 = Color32::from_rgb(24, 28, 34);
/// Accent highlight background
pub(super) const BG_HIGHLIGHT: Color32 = Color32::from_rgb(32, 40, 52);

/// Primary text: Warm amber phosphor glow
pub(super) const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 176, 0);
/// Secondary text: Dimmed amber
pub(super) const TEXT_DIM: Color32 = Color32::from_rgb(180, 130, 50);
/// Muted text
pub(super) const TEXT_MUTED: Color32 = Color32::from_rgb(100, 85, 60);

/// Accent colors
pub(super) const ACCENT_GREEN: Color32 = Color32::from_rgb(80, 255, 120);
pub(super) const ACCENT_RED: Color32 = Color32::from_rgb(255, 80, 80);

/// Main application state.
///
/// There is exactly one view (the settings form) and no view transitions.
pub struct DashboardApp {
    /// Editable settings form state, alive for the window's lifetime
    pub form: SettingsForm,
    /// Transient status line shown after submit: (message, is_error)
    pub submit_status: Option<(String, bool)>,
}

impl DashboardApp {
    pub fn new() -> Self {
        Self {
            form: SettingsForm::new(),
            submit_status: None,
        }
    }

    pub(super) fn apply_theme(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals.dark_mode = true;
        style.visuals.panel_fill = BG_PRIMARY;
        style.visuals.window_fill = BG_PRIMARY;
        style.visuals.extreme_bg_color = BG_SECONDARY;
        style.visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
        style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
        style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
        style.visuals.widgets.active.bg_fill = BG_HIGHLIGHT;
        style.visuals.selection.bg_fill = BG_HIGHLIGHT;
        style.visuals.selection.stroke = Stroke::new(1.0, TEXT_PRIMARY);
        ctx.set_style(style);
    }
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self::new()
    }
}
