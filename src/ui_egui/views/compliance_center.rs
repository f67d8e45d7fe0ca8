use chrono::{Datelike, NaiveDate};
use egui::{Margin, RichText, Rounding, Sense, Stroke, Vec2};

use super::palette::CalendarCellPalette;
use super::{card_frame, display_label, page_header, status_badge, summary_cards, Tone, Toned};
use crate::models::compliance::{ComplianceEvent, ComplianceType};
use crate::models::settings::Settings;
use crate::services::calendar::{build_grid_with, weekday_labels, CalendarCell, GridOptions, MonthNavigation};
use crate::services::compliance::{
    upcoming_deadlines, ComplianceAction, ComplianceSummary, ComplianceViewMode, ComplianceViewState,
};
use crate::ui_egui::theme::AuditorTheme;

const CELL_HEIGHT: f32 = 88.0;
const CELL_SPACING: f32 = 2.0;

pub struct ComplianceCenterView;

impl ComplianceCenterView {
    /// Render the compliance center. Interactions come back as an action for
    /// the caller to apply to `state`.
    pub fn show(
        ui: &mut egui::Ui,
        events: &[ComplianceEvent],
        state: &ComplianceViewState,
        settings: &Settings,
        theme: &AuditorTheme,
        today: NaiveDate,
    ) -> Option<ComplianceAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                page_header(
                    ui,
                    theme,
                    "Compliance Center",
                    "Track and manage your business compliance requirements",
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                for (mode, label) in [
                    (ComplianceViewMode::List, "List View"),
                    (ComplianceViewMode::Calendar, "Calendar View"),
                ] {
                    if ui.selectable_label(state.mode == mode, label).clicked() && state.mode != mode {
                        action = Some(ComplianceAction::SetMode(mode));
                    }
                }
            });
        });

        let summary = ComplianceSummary::from_events(events);
        summary_cards(
            ui,
            theme,
            &[
                ("Total Requirements", summary.total.to_string(), Tone::Info),
                ("Pending", summary.pending.to_string(), Tone::Warning),
                ("Completed", summary.completed.to_string(), Tone::Success),
                ("High Priority", summary.high_priority.to_string(), Tone::Danger),
            ],
        );

        egui::ScrollArea::vertical().show(ui, |ui| {
            let view_action = match state.mode {
                ComplianceViewMode::Calendar => {
                    Self::render_calendar(ui, events, state, settings, theme, today)
                }
                ComplianceViewMode::List => {
                    Self::render_list(ui, events, theme);
                    None
                }
            };
            if view_action.is_some() {
                action = view_action;
            }
        });

        action
    }

    fn render_calendar(
        ui: &mut egui::Ui,
        events: &[ComplianceEvent],
        state: &ComplianceViewState,
        settings: &Settings,
        theme: &AuditorTheme,
        today: NaiveDate,
    ) -> Option<ComplianceAction> {
        let mut action = None;

        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(state.reference_month.format("%B %Y").to_string())
                        .size(18.0)
                        .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("→").on_hover_text("Next month (→)").clicked() {
                        action = Some(MonthNavigation::Next);
                    }
                    if ui.button("Today").on_hover_text("Current month (T)").clicked() {
                        action = Some(MonthNavigation::Today);
                    }
                    if ui.button("←").on_hover_text("Previous month (←)").clicked() {
                        action = Some(MonthNavigation::Previous);
                    }
                });
            });
            ui.add_space(8.0);

            let options = GridOptions {
                rows: settings.grid_rows,
                first_day_of_week: settings.first_day_of_week,
            };
            let cells = build_grid_with(state.reference_month, events, today, options);
            Self::render_grid(ui, &cells, settings, theme);
        });

        action.map(ComplianceAction::Navigate)
    }

    fn render_grid(
        ui: &mut egui::Ui,
        cells: &[CalendarCell<'_>],
        settings: &Settings,
        theme: &AuditorTheme,
    ) {
        let palette = CalendarCellPalette::from_theme(theme);
        let col_width = (ui.available_width() - CELL_SPACING * 6.0) / 7.0;

        egui::Grid::new("compliance_month_grid")
            .spacing([CELL_SPACING, CELL_SPACING])
            .show(ui, |ui| {
                for day in weekday_labels(settings.first_day_of_week) {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, 26.0),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(palette.header_bg)
                                .rounding(Rounding::same(4.0))
                                .inner_margin(Margin::symmetric(4.0, 4.0))
                                .show(ui, |ui| {
                                    ui.label(RichText::new(day).strong().color(palette.text));
                                });
                        },
                    );
                }
                ui.end_row();

                for week in cells.chunks(7) {
                    for cell in week {
                        Self::render_cell(ui, cell, settings.max_events_per_cell, palette, theme, col_width);
                    }
                    ui.end_row();
                }
            });
    }

    fn render_cell(
        ui: &mut egui::Ui,
        cell: &CalendarCell<'_>,
        max_events: usize,
        palette: CalendarCellPalette,
        theme: &AuditorTheme,
        col_width: f32,
    ) {
        let (rect, response) = ui.allocate_exact_size(Vec2::new(col_width, CELL_HEIGHT), Sense::hover());
        let painter = ui.painter_at(rect);

        if !cell.in_current_month {
            painter.rect_filled(rect, 4.0, palette.muted_bg);
            painter.text(
                rect.left_top() + Vec2::new(6.0, 4.0),
                egui::Align2::LEFT_TOP,
                cell.date.day().to_string(),
                egui::FontId::proportional(12.0),
                palette.muted_text,
            );
            return;
        }

        painter.rect_filled(rect, 4.0, palette.regular_bg);
        let border = if cell.is_today {
            Stroke::new(2.0, palette.today_border)
        } else {
            Stroke::new(1.0, palette.border)
        };
        painter.rect_stroke(rect.shrink(0.5), 4.0, border);

        painter.text(
            rect.left_top() + Vec2::new(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            cell.date.day().to_string(),
            egui::FontId::proportional(13.0),
            palette.text,
        );

        let mut y = rect.top() + 24.0;
        for event in cell.visible_events(max_events) {
            let tone = event.status.tone();
            let chip = egui::Rect::from_min_size(
                egui::pos2(rect.left() + 4.0, y),
                Vec2::new(rect.width() - 8.0, 18.0),
            );
            painter.rect_filled(chip, 3.0, tone.fill(theme));
            let galley = painter.layout(
                event.title.clone(),
                egui::FontId::proportional(11.0),
                tone.text(theme),
                chip.width() - 6.0,
            );
            let clipped = painter.with_clip_rect(chip);
            clipped.galley(chip.left_top() + Vec2::new(3.0, 2.0), galley, tone.text(theme));
            y += 20.0;
        }

        if let Some(label) = cell.overflow_label(max_events) {
            painter.text(
                egui::pos2(rect.left() + 6.0, y),
                egui::Align2::LEFT_TOP,
                label,
                egui::FontId::proportional(11.0),
                theme.text_secondary,
            );
        }

        if !cell.events.is_empty() {
            let titles: Vec<&str> = cell.events.iter().map(|e| e.title.as_str()).collect();
            response.on_hover_text(titles.join("\n"));
        }
    }

    fn render_list(ui: &mut egui::Ui, events: &[ComplianceEvent], theme: &AuditorTheme) {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Upcoming Deadlines").strong().size(16.0));
            ui.add_space(8.0);

            let upcoming = upcoming_deadlines(events);
            if upcoming.is_empty() {
                ui.label(RichText::new("No outstanding deadlines").color(theme.text_secondary));
                return;
            }

            for event in upcoming {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(type_icon(event.kind)).size(18.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&event.title).strong());
                        ui.label(RichText::new(&event.description).color(theme.text_secondary));
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(event.date.format("%b %d, %Y").to_string())
                                    .small()
                                    .color(theme.text_secondary),
                            );
                            ui.label(
                                RichText::new(format!("{} priority", display_label(event.priority.as_str())))
                                    .small()
                                    .color(event.priority.tone().text(theme)),
                            );
                        });
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        status_badge(ui, theme, event.status);
                    });
                });
                ui.separator();
            }
        });
    }
}

fn type_icon(kind: ComplianceType) -> &'static str {
    match kind {
        ComplianceType::Tax => "🧾",
        ComplianceType::Corporate => "🏢",
        ComplianceType::Payroll => "💼",
        ComplianceType::License => "🛡",
    }
}
