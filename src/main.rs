// AI Auditor Application
// Main entry point

use ai_auditor::services::sample_data::SampleData;
use ai_auditor::ui_egui::AuditorApp;
use anyhow::{anyhow, Context, Result};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting AI-Auditor");

    let data = SampleData::load().context("Failed to load sample data")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AI-Auditor")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AI-Auditor",
        options,
        Box::new(|cc| Ok(Box::new(AuditorApp::new(cc, data)))),
    )
    .map_err(|e| anyhow!("Failed to start the window: {}", e))
}
