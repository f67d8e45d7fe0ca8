use chrono::NaiveDate;
use egui::RichText;

use super::{
    card_frame, display_label, empty_state, format_currency, page_header, status_badge,
    summary_cards, Tone, Toned,
};
use crate::models::grant::{Grant, GrantCategory, GrantStatus};
use crate::services::filter::RecordFilter;
use crate::services::grants::{deadline_label, GrantFilter, GrantSummary, SuccessBand};
use crate::ui_egui::theme::AuditorTheme;

pub struct GrantOpportunitiesView;

impl GrantOpportunitiesView {
    pub fn show(
        ui: &mut egui::Ui,
        grants: &[Grant],
        filter: &mut GrantFilter,
        theme: &AuditorTheme,
        today: NaiveDate,
    ) {
        page_header(
            ui,
            theme,
            "Grant Opportunities",
            "Discover funding opportunities for your Canadian small business",
        );

        let summary = GrantSummary::from_grants(grants);
        summary_cards(
            ui,
            theme,
            &[
                ("Total Opportunities", summary.total.to_string(), Tone::Info),
                ("Currently Open", summary.open.to_string(), Tone::Success),
                ("Upcoming", summary.upcoming.to_string(), Tone::Warning),
                (
                    "Total Available",
                    format!("{}+", format_currency(summary.total_available as f64)),
                    Tone::Neutral,
                ),
            ],
        );

        Self::render_filters(ui, filter, theme);
        ui.add_space(12.0);

        let visible = filter.apply(grants, today);
        egui::ScrollArea::vertical().show(ui, |ui| {
            if visible.is_empty() {
                empty_state(
                    ui,
                    theme,
                    "No grants found. Try adjusting your filters or check back later.",
                );
                return;
            }
            for grant in visible {
                Self::render_grant(ui, grant, theme, today);
                ui.add_space(10.0);
            }
        });
    }

    fn render_filters(ui: &mut egui::Ui, filter: &mut GrantFilter, theme: &AuditorTheme) {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let category_text = filter
                    .category
                    .map(|c| format!("{} Programs", display_label(c.as_str())))
                    .unwrap_or_else(|| "All Categories".to_string());
                egui::ComboBox::from_id_source("grant_category_filter")
                    .selected_text(category_text)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut filter.category, None, "All Categories");
                        for category in GrantCategory::ALL {
                            ui.selectable_value(
                                &mut filter.category,
                                Some(*category),
                                format!("{} Programs", display_label(category.as_str())),
                            );
                        }
                    });

                let status_text = filter
                    .status
                    .map(|s| display_label(s.as_str()))
                    .unwrap_or_else(|| "All Status".to_string());
                egui::ComboBox::from_id_source("grant_status_filter")
                    .selected_text(status_text)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut filter.status, None, "All Status");
                        for status in GrantStatus::ALL {
                            ui.selectable_value(
                                &mut filter.status,
                                Some(*status),
                                display_label(status.as_str()),
                            );
                        }
                    });
            });
        });
    }

    fn render_grant(ui: &mut egui::Ui, grant: &Grant, theme: &AuditorTheme, today: NaiveDate) {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&grant.title).strong().size(16.0));
                status_badge(ui, theme, grant.status);
                ui.label(
                    RichText::new(display_label(grant.category.as_str()))
                        .small()
                        .color(theme.text_secondary),
                );
            });
            ui.label(RichText::new(&grant.description).color(theme.text_secondary));
            ui.add_space(6.0);

            let success_tone = SuccessBand::from_rate(grant.success_rate).tone();
            egui::Grid::new(("grant_figures", grant.id))
                .num_columns(4)
                .spacing([32.0, 2.0])
                .show(ui, |ui| {
                    for caption in ["Grant Amount", "Deadline", "Success Rate", "Processing Time"] {
                        ui.label(RichText::new(caption).small().color(theme.text_secondary));
                    }
                    ui.end_row();
                    ui.label(RichText::new(&grant.amount).strong());
                    ui.label(RichText::new(deadline_label(grant.deadline, today)).strong())
                        .on_hover_text(grant.deadline.format("%B %-d, %Y").to_string());
                    ui.label(
                        RichText::new(format!("{}%", grant.success_rate))
                            .strong()
                            .color(success_tone.text(theme)),
                    );
                    ui.label(RichText::new(&grant.estimated_time).strong());
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.columns(2, |columns| {
                bullet_list(&mut columns[0], "Eligibility:", &grant.eligibility);
                bullet_list(&mut columns[1], "Requirements:", &grant.requirements);
            });

            ui.add_space(6.0);
            if ui.button("Apply Now ↗").on_hover_text(grant.website.as_str()).clicked() {
                open_website(&grant.website);
            }
        });
    }
}

fn bullet_list(ui: &mut egui::Ui, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    ui.label(RichText::new(heading).strong());
    for item in items {
        ui.label(format!("• {}", item));
    }
}

fn open_website(url: &str) {
    log::info!("Opening grant website {}", url);
    if let Err(e) = webbrowser::open(url) {
        log::error!("Failed to open {}: {}", url, e);
    }
}
