mod lifecycle;
mod menu;
mod navigation;
mod shortcuts;
mod sidebar;
mod state;

use self::state::AppState;
use crate::models::settings::Settings;
use crate::services::sample_data::SampleData;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::AuditorTheme;
use chrono::NaiveDate;

pub struct AuditorApp {
    /// Persists `settings` as TOML
    settings_service: SettingsService,
    settings: Settings,
    /// Read-only datasets behind every view
    data: SampleData,
    /// Currently applied theme colors
    active_theme: AuditorTheme,
    /// Local date, refreshed every frame
    today: NaiveDate,
    /// Route and per-view state
    state: AppState,
}

impl eframe::App for AuditorApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
