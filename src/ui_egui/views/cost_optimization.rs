use chrono::NaiveDate;
use egui::RichText;

use super::{
    badge, card_frame, display_label, empty_state, format_currency, page_header, status_badge,
    summary_cards, Tone, Toned,
};
use crate::models::suggestion::{CostSuggestion, SuggestionCategory};
use crate::services::cost::{total_potential_savings, ConfidenceBand, CostSummary, SuggestionFilter};
use crate::services::filter::RecordFilter;
use crate::ui_egui::theme::AuditorTheme;

pub struct CostOptimizationView;

impl CostOptimizationView {
    pub fn show(
        ui: &mut egui::Ui,
        suggestions: &[CostSuggestion],
        filter: &mut SuggestionFilter,
        theme: &AuditorTheme,
        today: NaiveDate,
    ) {
        page_header(
            ui,
            theme,
            "Cost Optimization",
            "AI-powered suggestions to reduce your business expenses",
        );

        let visible = filter.apply(suggestions, today);
        let summary = CostSummary::from_suggestions(suggestions);
        let active = visible.iter().filter(|s| !s.is_implemented()).count();
        summary_cards(
            ui,
            theme,
            &[
                (
                    "Potential Annual Savings",
                    format_currency(total_potential_savings(visible.iter().copied())),
                    Tone::Success,
                ),
                ("Active Suggestions", active.to_string(), Tone::Info),
                ("Implemented", summary.implemented.to_string(), Tone::Neutral),
            ],
        );

        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let category_text = filter
                    .category
                    .map(|c| display_label(c.as_str()))
                    .unwrap_or_else(|| "All Categories".to_string());
                egui::ComboBox::from_id_source("cost_category_filter")
                    .selected_text(category_text)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut filter.category, None, "All Categories");
                        for category in SuggestionCategory::ALL {
                            ui.selectable_value(
                                &mut filter.category,
                                Some(*category),
                                display_label(category.as_str()),
                            );
                        }
                    });
                ui.checkbox(&mut filter.show_implemented, "Show implemented");
            });
        });
        ui.add_space(12.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            if visible.is_empty() {
                empty_state(
                    ui,
                    theme,
                    "No suggestions found. Try adjusting your filters or check back later.",
                );
                return;
            }
            for suggestion in visible {
                Self::render_suggestion(ui, suggestion, theme);
                ui.add_space(10.0);
            }
        });
    }

    fn render_suggestion(ui: &mut egui::Ui, suggestion: &CostSuggestion, theme: &AuditorTheme) {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&suggestion.title).strong().size(16.0));
                status_badge(ui, theme, suggestion.status);
            });
            ui.label(RichText::new(&suggestion.description).color(theme.text_secondary));
            ui.add_space(6.0);

            let confidence_tone = ConfidenceBand::from_confidence(suggestion.confidence).tone();
            egui::Grid::new(("suggestion_figures", suggestion.id))
                .num_columns(3)
                .spacing([32.0, 2.0])
                .show(ui, |ui| {
                    for caption in ["Current Cost", "Potential Savings", "Confidence"] {
                        ui.label(RichText::new(caption).small().color(theme.text_secondary));
                    }
                    ui.end_row();
                    ui.label(RichText::new(format!("{}/year", format_currency(suggestion.current_cost))).strong());
                    ui.label(
                        RichText::new(format!(
                            "{}/year ({}%)",
                            format_currency(suggestion.potential_savings),
                            suggestion.savings_percent()
                        ))
                        .strong()
                        .color(Tone::Success.text(theme)),
                    );
                    ui.label(
                        RichText::new(format!("{}%", suggestion.confidence))
                            .strong()
                            .color(confidence_tone.text(theme)),
                    );
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                badge(
                    ui,
                    theme,
                    &format!("{} implementation", display_label(suggestion.implementation.as_str())),
                    suggestion.implementation.tone(),
                );
                ui.label(
                    RichText::new(format!("Timeline: {}", suggestion.timeline))
                        .small()
                        .color(theme.text_secondary),
                );
            });

            if !suggestion.details.is_empty() {
                ui.add_space(6.0);
                ui.label(RichText::new("Implementation Details:").strong());
                for detail in &suggestion.details {
                    ui.label(format!("• {}", detail));
                }
            }
        });
    }
}
