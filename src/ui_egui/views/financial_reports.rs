use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Vec2};

use super::{card_frame, format_currency, page_header, summary_cards, Tone};
use crate::models::report::FinancialReports;
use crate::services::reports::{expense_shares, ChartKind, IncomeTotals, ReportRange, ReportsViewState};
use crate::ui_egui::theme::AuditorTheme;

const CHART_HEIGHT: f32 = 260.0;
const AXIS_MARGIN: f32 = 24.0;

struct Series<'a> {
    name: &'a str,
    color: Color32,
    values: Vec<f64>,
}

pub struct FinancialReportsView;

impl FinancialReportsView {
    pub fn show(
        ui: &mut egui::Ui,
        reports: &FinancialReports,
        state: &mut ReportsViewState,
        theme: &AuditorTheme,
    ) {
        page_header(
            ui,
            theme,
            "Financial Reports",
            "Interactive charts and analysis of your financial data",
        );

        Self::render_controls(ui, state, theme);
        ui.add_space(12.0);

        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            match state.chart {
                ChartKind::Income => Self::render_income(ui, reports, theme),
                ChartKind::Expenses => Self::render_expenses(ui, reports, theme),
                ChartKind::CashFlow => Self::render_cash_flow(ui, reports, theme),
            }
        });
        ui.add_space(12.0);

        let totals = IncomeTotals::from_points(&reports.income);
        let margin = totals.margin_percent();
        summary_cards(
            ui,
            theme,
            &[
                ("Total Revenue", format_currency(totals.revenue), Tone::Success),
                ("Total Expenses", format_currency(totals.expenses), Tone::Danger),
                ("Net Profit", format_currency(totals.profit), Tone::Info),
                ("Profit Margin", format!("{}%", margin), margin_tone(margin)),
            ],
        );
    }

    fn render_controls(ui: &mut egui::Ui, state: &mut ReportsViewState, theme: &AuditorTheme) {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label("Date Range:");
                egui::ComboBox::from_id_source("report_range")
                    .selected_text(state.range.label())
                    .show_ui(ui, |ui| {
                        for range in ReportRange::ALL {
                            ui.selectable_value(&mut state.range, range, range.label());
                        }
                    });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for chart in ChartKind::ALL.iter().rev() {
                        if ui
                            .selectable_label(state.chart == *chart, chart.label())
                            .clicked()
                        {
                            state.chart = *chart;
                        }
                    }
                });
            });
        });
    }

    fn render_income(ui: &mut egui::Ui, reports: &FinancialReports, theme: &AuditorTheme) {
        ui.label(RichText::new("Income & Expense Trends").strong().size(16.0));
        let labels: Vec<&str> = reports.income.iter().map(|p| p.month.as_str()).collect();
        let series = [
            Series {
                name: "Revenue",
                color: Color32::from_rgb(16, 185, 129),
                values: reports.income.iter().map(|p| p.revenue).collect(),
            },
            Series {
                name: "Expenses",
                color: Color32::from_rgb(239, 68, 68),
                values: reports.income.iter().map(|p| p.expenses).collect(),
            },
            Series {
                name: "Profit",
                color: Color32::from_rgb(59, 130, 246),
                values: reports.income.iter().map(|p| p.profit).collect(),
            },
        ];
        bar_chart(ui, theme, &labels, &series);
    }

    fn render_cash_flow(ui: &mut egui::Ui, reports: &FinancialReports, theme: &AuditorTheme) {
        ui.label(RichText::new("6-Week Cash Flow Forecast").strong().size(16.0));
        let labels: Vec<&str> = reports.cash_flow.iter().map(|p| p.week.as_str()).collect();
        let series = [
            Series {
                name: "Inflow",
                color: Color32::from_rgb(16, 185, 129),
                values: reports.cash_flow.iter().map(|p| p.inflow).collect(),
            },
            Series {
                name: "Outflow",
                color: Color32::from_rgb(239, 68, 68),
                values: reports.cash_flow.iter().map(|p| p.outflow).collect(),
            },
            Series {
                name: "Net",
                color: Color32::from_rgb(59, 130, 246),
                values: reports.cash_flow.iter().map(|p| p.net).collect(),
            },
        ];
        bar_chart(ui, theme, &labels, &series);
    }

    fn render_expenses(ui: &mut egui::Ui, reports: &FinancialReports, theme: &AuditorTheme) {
        ui.label(RichText::new("Expense Breakdown").strong().size(16.0));
        ui.add_space(8.0);

        let shares = expense_shares(&reports.expenses);
        egui::Grid::new("expense_breakdown")
            .num_columns(4)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for (slice, (name, share)) in reports.expenses.iter().zip(shares) {
                    let color = AuditorTheme::hex_to_color(&slice.color).unwrap_or_else(|e| {
                        log::warn!("Expense '{}' has unusable colour: {}", name, e);
                        theme.text_secondary
                    });

                    ui.horizontal(|ui| {
                        let (swatch, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                        ui.painter().rect_filled(swatch, 2.0, color);
                        ui.label(name);
                    });

                    let bar_width = 320.0;
                    let (rect, _) = ui.allocate_exact_size(Vec2::new(bar_width, 14.0), Sense::hover());
                    ui.painter().rect_filled(rect, 4.0, theme.muted_background);
                    let mut filled = rect;
                    filled.set_width(bar_width * share as f32 / 100.0);
                    ui.painter().rect_filled(filled, 4.0, color);

                    ui.label(format!("{}%", share));
                    ui.label(RichText::new(format_currency(slice.value)).strong());
                    ui.end_row();
                }
            });
    }
}

/// Grouped vertical bars, one group per label. Negative values hang below the baseline.
fn bar_chart(ui: &mut egui::Ui, theme: &AuditorTheme, labels: &[&str], series: &[Series<'_>]) {
    ui.horizontal(|ui| {
        for s in series {
            let (swatch, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, s.color);
            ui.label(RichText::new(s.name).small());
            ui.add_space(8.0);
        }
    });

    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), CHART_HEIGHT),
        Sense::hover(),
    );
    if labels.is_empty() || series.is_empty() {
        return;
    }

    let values = series.iter().flat_map(|s| s.values.iter().copied());
    let max = values.clone().fold(0.0_f64, f64::max);
    let min = values.fold(0.0_f64, f64::min);
    let span = (max - min).max(1.0);

    let plot = Rect::from_min_max(
        Pos2::new(rect.left(), rect.top() + 4.0),
        Pos2::new(rect.right(), rect.bottom() - AXIS_MARGIN),
    );
    let y_of = |value: f64| plot.bottom() - ((value - min) / span) as f32 * plot.height();
    let baseline = y_of(0.0);

    let painter = ui.painter_at(rect);
    painter.line_segment(
        [Pos2::new(plot.left(), baseline), Pos2::new(plot.right(), baseline)],
        Stroke::new(1.0, theme.card_border),
    );

    let group_width = plot.width() / labels.len() as f32;
    let bar_width = (group_width * 0.8) / series.len() as f32;

    for (group, label) in labels.iter().enumerate() {
        let group_left = plot.left() + group as f32 * group_width + group_width * 0.1;
        for (index, s) in series.iter().enumerate() {
            let Some(value) = s.values.get(group).copied() else {
                continue;
            };
            let left = group_left + index as f32 * bar_width;
            let top = y_of(value.max(0.0));
            let bottom = y_of(value.min(0.0));
            painter.rect_filled(
                Rect::from_min_max(Pos2::new(left, top), Pos2::new(left + bar_width - 2.0, bottom)),
                2.0,
                s.color,
            );
        }
        painter.text(
            Pos2::new(group_left + group_width * 0.4, rect.bottom() - AXIS_MARGIN / 2.0),
            Align2::CENTER_CENTER,
            *label,
            FontId::proportional(12.0),
            theme.text_secondary,
        );
    }
}

fn margin_tone(margin: i32) -> Tone {
    if margin < 0 {
        Tone::Danger
    } else {
        Tone::Neutral
    }
}
