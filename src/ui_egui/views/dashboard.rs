use egui::{RichText, Sense};

use super::{card_frame, meter, page_header, status_badge, Toned};
use crate::models::report::{DashboardData, DashboardMetric, Trend};
use crate::models::route::Route;
use crate::ui_egui::theme::AuditorTheme;

pub struct DashboardView;

impl DashboardView {
    /// Render the overview; returns the route of a clicked metric card.
    pub fn show(ui: &mut egui::Ui, data: &DashboardData, theme: &AuditorTheme) -> Option<Route> {
        page_header(
            ui,
            theme,
            "Dashboard",
            "Overview of your business's financial health and compliance status",
        );

        Self::render_health_card(ui, data, theme);
        ui.add_space(12.0);

        let clicked = Self::render_metric_cards(ui, &data.metrics, theme);
        ui.add_space(12.0);

        Self::render_activity(ui, data, theme);
        clicked
    }

    fn render_health_card(ui: &mut egui::Ui, data: &DashboardData, theme: &AuditorTheme) {
        let health = &data.health;
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Financial Health Status").strong().size(16.0));
                    ui.label(
                        RichText::new("Overall assessment of your business financials")
                            .color(theme.text_secondary),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.label(
                        RichText::new(format!("Last updated: {}", health.last_updated))
                            .small()
                            .color(theme.text_secondary),
                    );
                });
            });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                status_badge(ui, theme, health.status);
                ui.label(RichText::new(format!("{}/100", health.score)).strong());
                ui.label(
                    RichText::new("Based on real-time analysis")
                        .small()
                        .color(theme.text_secondary),
                );
            });
            ui.add_space(6.0);
            meter(ui, theme, f32::from(health.score) / 100.0, health.status.tone());
        });
    }

    fn render_metric_cards(
        ui: &mut egui::Ui,
        metrics: &[DashboardMetric],
        theme: &AuditorTheme,
    ) -> Option<Route> {
        if metrics.is_empty() {
            return None;
        }
        let mut clicked = None;
        let spacing = 12.0;
        let width =
            (ui.available_width() - spacing * (metrics.len() as f32 - 1.0)) / metrics.len() as f32;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            for metric in metrics {
                let response = ui
                    .allocate_ui(egui::vec2(width, 110.0), |ui| {
                        card_frame(theme)
                            .show(ui, |ui| {
                                ui.set_width(width - 26.0);
                                ui.label(RichText::new(&metric.title).color(theme.text_secondary));
                                ui.label(RichText::new(&metric.value).size(24.0).strong());
                                let arrow = match metric.trend {
                                    Trend::Up => "▲ ",
                                    Trend::Down => "▼ ",
                                    Trend::Neutral => "",
                                };
                                ui.label(
                                    RichText::new(format!("{}{}", arrow, metric.change))
                                        .small()
                                        .color(metric.trend.tone().text(theme)),
                                );
                            })
                            .response
                    })
                    .inner
                    .interact(Sense::click())
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .on_hover_text(format!("Open {}", metric.link.title()));

                if response.clicked() {
                    log::debug!("Metric card '{}' opened {}", metric.title, metric.link);
                    clicked = Some(metric.link);
                }
            }
        });
        clicked
    }

    fn render_activity(ui: &mut egui::Ui, data: &DashboardData, theme: &AuditorTheme) {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Recent Activity").strong().size(16.0));
            ui.add_space(6.0);
            for activity in &data.activities {
                ui.horizontal(|ui| {
                    status_badge(ui, theme, activity.severity);
                    ui.label(&activity.message);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(&activity.time)
                                .small()
                                .color(theme.text_secondary),
                        );
                    });
                });
                ui.separator();
            }
        });
    }
}
