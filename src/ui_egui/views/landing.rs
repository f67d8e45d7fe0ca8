use egui::RichText;

use super::card_frame;
use crate::models::route::Route;
use crate::ui_egui::theme::AuditorTheme;

const FEATURES: [(&str, &str); 4] = [
    (
        "Real-Time Auditing",
        "Continuous monitoring of your financial transactions with AI-powered insights",
    ),
    (
        "Compliance Alerts",
        "Stay ahead of regulatory requirements with automated compliance notifications",
    ),
    (
        "Fraud Detection",
        "Advanced algorithms detect suspicious activities before they become problems",
    ),
    (
        "Cost Optimization",
        "Identify savings opportunities and optimize your business expenses",
    ),
];

const HOW_IT_WORKS: [(&str, &str); 3] = [
    (
        "Connect Your Data",
        "Securely link your financial accounts and business systems",
    ),
    (
        "AI Analysis",
        "Our AI processes your data 24/7 for insights and anomalies",
    ),
    (
        "Get Insights",
        "Receive actionable recommendations and alerts in real-time",
    ),
];

const CONTACT: [(&str, &str); 3] = [
    ("Email", "support@ai-auditor.ca"),
    ("Phone", "1-800-AI-AUDIT"),
    ("Office", "Toronto, Canada"),
];

pub struct LandingView;

impl LandingView {
    pub fn show(ui: &mut egui::Ui, theme: &AuditorTheme) -> Option<Route> {
        let mut target = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(32.0);
                ui.label(RichText::new("AI-Auditor").size(40.0).strong());
                ui.label(
                    RichText::new(
                        "AI-powered financial and compliance monitoring for Canadian small businesses",
                    )
                    .size(16.0)
                    .color(theme.text_secondary),
                );
                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    // Centre the three buttons as a group
                    let group_width = 330.0;
                    ui.add_space(((ui.available_width() - group_width) / 2.0).max(0.0));
                    for route in [Route::Signup, Route::Login, Route::Dashboard] {
                        let label = match route {
                            Route::Signup => "Get Started",
                            Route::Login => "Login",
                            _ => "View Demo Dashboard",
                        };
                        if ui.button(RichText::new(label).size(15.0)).clicked() {
                            target = Some(route);
                        }
                    }
                });
                ui.add_space(32.0);
            });

            Self::render_section(ui, theme, "Features", &FEATURES, false);
            Self::render_section(ui, theme, "How It Works", &HOW_IT_WORKS, true);

            ui.add_space(16.0);
            card_frame(theme).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Ready to Transform Your Financial Management?").strong().size(18.0));
                ui.label(
                    RichText::new("Join thousands of Canadian small businesses using AI-Auditor")
                        .color(theme.text_secondary),
                );
                if ui.button("Start Your Free Trial").clicked() {
                    target = Some(Route::Signup);
                }
            });

            ui.add_space(16.0);
            ui.label(RichText::new("Contact").strong());
            for (label, value) in CONTACT {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).color(theme.text_secondary));
                    ui.label(value);
                });
            }
            ui.add_space(8.0);
            ui.label(
                RichText::new("© 2024 AI-Auditor. All rights reserved.")
                    .small()
                    .color(theme.text_secondary),
            );
        });

        target
    }

    fn render_section(
        ui: &mut egui::Ui,
        theme: &AuditorTheme,
        title: &str,
        items: &[(&str, &str)],
        numbered: bool,
    ) {
        ui.label(RichText::new(title).size(22.0).strong());
        ui.add_space(8.0);
        egui::Grid::new(title)
            .num_columns(items.len())
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                let width = (ui.available_width() - 12.0 * (items.len() as f32 - 1.0)) / items.len() as f32;
                for (index, (heading, description)) in items.iter().enumerate() {
                    card_frame(theme).show(ui, |ui| {
                        ui.set_width(width - 26.0);
                        let heading = if numbered {
                            format!("{}. {}", index + 1, heading)
                        } else {
                            heading.to_string()
                        };
                        ui.label(RichText::new(heading).strong());
                        ui.label(RichText::new(*description).color(theme.text_secondary));
                    });
                }
                ui.end_row();
            });
        ui.add_space(16.0);
    }
}
