//! Sidebar listing the dashboard routes.

use super::AuditorApp;
use crate::models::route::Route;
use egui::RichText;

const SIDEBAR_MIN_WIDTH: f32 = 180.0;
const SIDEBAR_DEFAULT_WIDTH: f32 = 220.0;
const SIDEBAR_MAX_WIDTH: f32 = 300.0;

fn route_icon(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "🏠",
        Route::FinancialReports => "📊",
        Route::ComplianceCenter => "🛡",
        Route::FraudDetection => "⚠",
        Route::CostOptimization => "💲",
        Route::GrantOpportunities => "🎁",
        Route::Landing | Route::Login | Route::Signup => "",
    }
}

impl AuditorApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        if !self.state.sidebar_visible() {
            return;
        }

        let mut target = None;
        egui::SidePanel::left("sidebar")
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .min_width(SIDEBAR_MIN_WIDTH)
            .max_width(SIDEBAR_MAX_WIDTH)
            .resizable(true)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).fill(self.active_theme.panel_background),
            )
            .show(ctx, |ui| {
                ui.add_space(8.0);
                for route in Route::NAVIGATION {
                    let selected = self.state.route == route;
                    let text = RichText::new(format!("{}  {}", route_icon(route), route.title()))
                        .size(15.0);
                    let text = if selected {
                        text.strong().color(self.active_theme.accent)
                    } else {
                        text
                    };

                    let response = ui.add_sized(
                        [ui.available_width(), 32.0],
                        egui::SelectableLabel::new(selected, text),
                    );
                    if response.clicked() {
                        target = Some(route);
                    }
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.add_space(8.0);
                    if ui.link("Sign out").clicked() {
                        target = Some(Route::Landing);
                    }
                });
            });

        if let Some(route) = target {
            self.navigate_to(route);
        }
    }
}
