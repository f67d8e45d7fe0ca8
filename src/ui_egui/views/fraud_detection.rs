use chrono::NaiveDate;
use egui::RichText;
use egui_extras::{Column, TableBuilder};

use super::{
    badge, card_frame, display_label, empty_state, format_currency, page_header, status_badge,
    summary_cards, Tone, Toned,
};
use crate::models::transaction::{FlaggedTransaction, TransactionStatus};
use crate::services::filter::RecordFilter;
use crate::services::fraud::{AmountFilter, DateFilter, FraudSummary, RiskLevel, TransactionFilter};
use crate::ui_egui::theme::AuditorTheme;

pub struct FraudDetectionView;

impl FraudDetectionView {
    pub fn show(
        ui: &mut egui::Ui,
        transactions: &[FlaggedTransaction],
        filter: &mut TransactionFilter,
        theme: &AuditorTheme,
        today: NaiveDate,
    ) {
        page_header(
            ui,
            theme,
            "Fraud Detection",
            "Monitor and review flagged transactions for potential fraud",
        );

        let summary = FraudSummary::from_transactions(transactions);
        summary_cards(
            ui,
            theme,
            &[
                ("Total Flagged", summary.total_flagged.to_string(), Tone::Danger),
                ("Pending Review", summary.pending.to_string(), Tone::Warning),
                ("Approved", summary.approved.to_string(), Tone::Success),
                ("Total Amount", format_currency(summary.total_amount), Tone::Info),
            ],
        );

        Self::render_filters(ui, filter, theme);
        ui.add_space(12.0);

        let visible = filter.apply(transactions, today);
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(format!("Flagged Transactions ({})", visible.len()))
                    .strong()
                    .size(16.0),
            );
            ui.add_space(8.0);

            if visible.is_empty() {
                empty_state(
                    ui,
                    theme,
                    "No transactions found. Try adjusting your filters or search terms.",
                );
            } else {
                Self::render_table(ui, &visible, theme);
            }
        });
    }

    fn render_filters(ui: &mut egui::Ui, filter: &mut TransactionFilter, theme: &AuditorTheme) {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut filter.search)
                        .hint_text("Search transactions...")
                        .desired_width(240.0),
                );

                egui::ComboBox::from_id_source("fraud_date_filter")
                    .selected_text(filter.date.label())
                    .show_ui(ui, |ui| {
                        for option in DateFilter::ALL {
                            ui.selectable_value(&mut filter.date, option, option.label());
                        }
                    });

                egui::ComboBox::from_id_source("fraud_amount_filter")
                    .selected_text(filter.amount.label())
                    .show_ui(ui, |ui| {
                        for option in AmountFilter::ALL {
                            ui.selectable_value(&mut filter.amount, option, option.label());
                        }
                    });

                let status_text = filter
                    .status
                    .map(|s| display_label(s.as_str()))
                    .unwrap_or_else(|| "All Status".to_string());
                egui::ComboBox::from_id_source("fraud_status_filter")
                    .selected_text(status_text)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut filter.status, None, "All Status");
                        for status in TransactionStatus::ALL {
                            ui.selectable_value(
                                &mut filter.status,
                                Some(*status),
                                display_label(status.as_str()),
                            );
                        }
                    });

                if filter.is_active() && ui.button("Clear filters").clicked() {
                    filter.reset();
                }
            });
        });
    }

    fn render_table(ui: &mut egui::Ui, rows: &[&FlaggedTransaction], theme: &AuditorTheme) {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(90.0))
            .column(Column::remainder().at_least(200.0))
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(80.0))
            .header(24.0, |mut header| {
                for title in ["Date & Time", "Description", "Supplier", "Amount", "Risk Score", "Status"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for tx in rows {
                    body.row(44.0, |mut row| {
                        row.col(|ui| {
                            ui.vertical(|ui| {
                                ui.label(tx.date.format("%Y-%m-%d").to_string());
                                ui.label(
                                    RichText::new(tx.time.format("%H:%M").to_string())
                                        .small()
                                        .color(theme.text_secondary),
                                );
                            });
                        });
                        row.col(|ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&tx.description).strong());
                                ui.label(RichText::new(&tx.reason).small().color(theme.text_secondary));
                            });
                        });
                        row.col(|ui| {
                            ui.label(&tx.supplier);
                        });
                        row.col(|ui| {
                            ui.label(RichText::new(format_currency(tx.amount)).strong());
                        });
                        row.col(|ui| {
                            let tone = RiskLevel::from_score(tx.risk_score).tone();
                            badge(ui, theme, &format!("{}/100", tx.risk_score), tone);
                        });
                        row.col(|ui| {
                            status_badge(ui, theme, tx.status);
                        });
                    });
                }
            });
    }
}
