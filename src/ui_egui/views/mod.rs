use egui::{Margin, RichText, Rounding, Stroke};

use crate::ui_egui::theme::AuditorTheme;

pub mod auth;
pub mod compliance_center;
pub mod cost_optimization;
pub mod dashboard;
pub mod financial_reports;
pub mod fraud_detection;
pub mod grant_opportunities;
pub mod landing;
mod palette;

pub(crate) use palette::{Tone, Toned};

/// Format a dollar amount with thousands separators; cents only when present.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents_total = (amount.abs() * 100.0).round() as u64;
    let dollars = cents_total / 100;
    let cents = cents_total % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if cents == 0 {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:02}", sign, grouped, cents)
    }
}

/// Title-case a lower-case dataset value for display ("in-progress" -> "In Progress")
pub fn display_label(raw: &str) -> String {
    raw.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn card_frame(theme: &AuditorTheme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.card_background)
        .rounding(Rounding::same(8.0))
        .stroke(Stroke::new(1.0, theme.card_border))
        .inner_margin(Margin::same(12.0))
}

pub(crate) fn page_header(ui: &mut egui::Ui, theme: &AuditorTheme, title: &str, subtitle: &str) {
    ui.heading(RichText::new(title).strong());
    ui.label(RichText::new(subtitle).color(theme.text_secondary));
    ui.add_space(12.0);
}

/// Small rounded label coloured by tone
pub(crate) fn badge(ui: &mut egui::Ui, theme: &AuditorTheme, text: &str, tone: Tone) -> egui::Response {
    egui::Frame::none()
        .fill(tone.fill(theme))
        .rounding(Rounding::same(10.0))
        .inner_margin(Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().strong().color(tone.text(theme)));
        })
        .response
}

pub(crate) fn status_badge<T>(ui: &mut egui::Ui, theme: &AuditorTheme, value: T) -> egui::Response
where
    T: Toned + std::fmt::Display,
{
    badge(ui, theme, &display_label(&value.to_string()), value.tone())
}

/// A row of equally sized summary cards: (title, value, tone of the value)
pub(crate) fn summary_cards(ui: &mut egui::Ui, theme: &AuditorTheme, cards: &[(&str, String, Tone)]) {
    if cards.is_empty() {
        return;
    }
    let spacing = 12.0;
    let width = (ui.available_width() - spacing * (cards.len() as f32 - 1.0)) / cards.len() as f32;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = spacing;
        for (title, value, tone) in cards {
            ui.allocate_ui(egui::vec2(width, 80.0), |ui| {
                card_frame(theme).show(ui, |ui| {
                    ui.set_width(width - 26.0);
                    ui.label(RichText::new(*title).color(theme.text_secondary));
                    ui.label(RichText::new(value).size(22.0).strong().color(tone.text(theme)));
                });
            });
        }
    });
    ui.add_space(12.0);
}

pub(crate) fn empty_state(ui: &mut egui::Ui, theme: &AuditorTheme, message: &str) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(RichText::new(message).color(theme.text_secondary));
            ui.add_space(16.0);
        });
    });
}

/// Horizontal progress bar for scores and rates, `fraction` in 0..=1
pub(crate) fn meter(ui: &mut egui::Ui, theme: &AuditorTheme, fraction: f32, tone: Tone) {
    let height = 8.0;
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, height / 2.0, theme.muted_background);
    let mut filled = rect;
    filled.set_width(rect.width() * fraction.clamp(0.0, 1.0));
    painter.rect_filled(filled, height / 2.0, tone.text(theme));
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0 => "$0")]
    #[test_case(45.99 => "$45.99")]
    #[test_case(2450.0 => "$2,450")]
    #[test_case(15750.5 => "$15,750.50")]
    #[test_case(1234567.0 => "$1,234,567")]
    #[test_case(-320.0 => "-$320")]
    fn test_format_currency(amount: f64) -> String {
        format_currency(amount)
    }

    #[test_case("in-progress" => "In Progress")]
    #[test_case("federal" => "Federal")]
    #[test_case("" => "")]
    fn test_display_label(raw: &str) -> String {
        display_label(raw)
    }
}
