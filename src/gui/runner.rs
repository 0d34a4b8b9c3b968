//! GUI runner - launches the dashboard window

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::DashboardApp;

/// Run the dashboard application
pub fn run_gui() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 340.0])
            .with_min_inner_size([420.0, 280.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    info!("[arxiv-listener] starting dashboard");

    eframe::run_native(
        "Arxiv Listener Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
