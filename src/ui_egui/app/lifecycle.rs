use super::state::AppState;
use super::AuditorApp;
use crate::models::route::Route;
use crate::models::settings::Settings;
use crate::services::sample_data::SampleData;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::AuditorTheme;
use crate::ui_egui::views::auth::{AuthMode, AuthView};
use crate::ui_egui::views::compliance_center::ComplianceCenterView;
use crate::ui_egui::views::cost_optimization::CostOptimizationView;
use crate::ui_egui::views::dashboard::DashboardView;
use crate::ui_egui::views::financial_reports::FinancialReportsView;
use crate::ui_egui::views::fraud_detection::FraudDetectionView;
use crate::ui_egui::views::grant_opportunities::GrantOpportunitiesView;
use crate::ui_egui::views::landing::LandingView;
use crate::utils::date::local_today;

impl AuditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, data: SampleData) -> Self {
        let settings_service = SettingsService::new(SettingsService::default_path());
        let settings = load_settings_or_default(&settings_service);
        log::info!(
            "Loaded settings from {}: theme={}, grid_rows={}",
            settings_service.path().display(),
            settings.theme,
            settings.grid_rows
        );

        let today = local_today();
        let route = start_route_or_default(&settings);

        let mut app = Self {
            state: AppState::new(route, settings.show_sidebar, today),
            settings_service,
            settings,
            data,
            active_theme: AuditorTheme::light(),
            today,
        };

        app.apply_theme(&cc.egui_ctx);
        app
    }

    pub(super) fn apply_theme(&mut self, ctx: &egui::Context) {
        // If use_system_theme is enabled, detect and use system preference
        let dark = if self.settings.use_system_theme {
            match dark_light::detect() {
                dark_light::Mode::Dark => true,
                dark_light::Mode::Light => false,
                dark_light::Mode::Default => self.settings.is_dark(),
            }
        } else {
            self.settings.is_dark()
        };

        let theme = AuditorTheme::for_mode(dark);
        theme.apply_to_context(ctx);
        self.active_theme = theme;
    }

    /// Flip between the light and dark presets and persist the choice
    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.theme = if self.active_theme.is_dark {
            "Light".to_string()
        } else {
            "Dark".to_string()
        };
        self.settings.use_system_theme = false;
        self.apply_theme(ctx);
        self.save_settings();
    }

    pub(super) fn save_settings(&self) {
        if let Err(err) = self.settings_service.update(&self.settings) {
            log::error!("Failed to save settings: {:#}", err);
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.today = local_today();

        // Handle keyboard shortcuts
        self.handle_keyboard_shortcuts(ctx);

        if self.state.route.uses_dashboard_shell() {
            self.render_top_bar(ctx);
            self.render_sidebar(ctx);
        }

        self.render_main_panel(ctx);
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        let mut next_route: Option<Route> = None;
        let mut compliance_action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            let theme = &self.active_theme;
            let today = self.today;
            match self.state.route {
                Route::Landing => next_route = LandingView::show(ui, theme),
                Route::Login => {
                    next_route = AuthView::show(ui, &mut self.state.auth_form, AuthMode::Login, theme)
                }
                Route::Signup => {
                    next_route = AuthView::show(ui, &mut self.state.auth_form, AuthMode::Signup, theme)
                }
                Route::Dashboard => next_route = DashboardView::show(ui, &self.data.dashboard, theme),
                Route::FinancialReports => {
                    FinancialReportsView::show(ui, &self.data.reports, &mut self.state.reports, theme)
                }
                Route::ComplianceCenter => {
                    compliance_action = ComplianceCenterView::show(
                        ui,
                        &self.data.compliance_events,
                        &self.state.compliance,
                        &self.settings,
                        theme,
                        today,
                    );
                }
                Route::FraudDetection => FraudDetectionView::show(
                    ui,
                    &self.data.transactions,
                    &mut self.state.fraud_filter,
                    theme,
                    today,
                ),
                Route::CostOptimization => CostOptimizationView::show(
                    ui,
                    &self.data.suggestions,
                    &mut self.state.cost_filter,
                    theme,
                    today,
                ),
                Route::GrantOpportunities => GrantOpportunitiesView::show(
                    ui,
                    &self.data.grants,
                    &mut self.state.grant_filter,
                    theme,
                    today,
                ),
            }
        });

        if let Some(action) = compliance_action {
            self.apply_compliance_action(action);
        }
        if let Some(route) = next_route {
            self.navigate_to(route);
        }
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.show_sidebar = self.state.sidebar_open;
        self.save_settings();
        log::info!("AI-Auditor closed");
    }
}

fn load_settings_or_default(settings_service: &SettingsService) -> Settings {
    match settings_service.get() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}

fn start_route_or_default(settings: &Settings) -> Route {
    settings.start_route().unwrap_or_else(|e| {
        log::warn!("{}, starting on the dashboard", e);
        Route::Dashboard
    })
}
