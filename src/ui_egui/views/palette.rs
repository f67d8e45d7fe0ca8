use crate::models::compliance::{ComplianceStatus, Priority};
use crate::models::grant::GrantStatus;
use crate::models::report::{HealthStatus, Severity, Trend};
use crate::models::suggestion::{Implementation, SuggestionStatus};
use crate::models::transaction::TransactionStatus;
use crate::services::cost::ConfidenceBand;
use crate::services::fraud::RiskLevel;
use crate::services::grants::SuccessBand;
use crate::ui_egui::theme::AuditorTheme;
use egui::Color32;

pub(crate) fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Semantic colour family of a badge or figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl Tone {
    fn base(self) -> Color32 {
        match self {
            Tone::Success => Color32::from_rgb(16, 185, 129),
            Tone::Warning => Color32::from_rgb(245, 158, 11),
            Tone::Danger => Color32::from_rgb(239, 68, 68),
            Tone::Info => Color32::from_rgb(59, 130, 246),
            Tone::Neutral => Color32::from_rgb(100, 116, 139),
        }
    }

    /// Foreground colour readable on the theme's cards
    pub fn text(self, theme: &AuditorTheme) -> Color32 {
        if theme.is_dark {
            blend(self.base(), Color32::WHITE, 0.25)
        } else {
            blend(self.base(), Color32::BLACK, 0.2)
        }
    }

    /// Translucent badge fill
    pub fn fill(self, theme: &AuditorTheme) -> Color32 {
        with_alpha(self.base(), if theme.is_dark { 70 } else { 40 })
    }
}

/// Maps a status-like value to the tone of its badge.
pub(crate) trait Toned {
    fn tone(&self) -> Tone;
}

impl Toned for ComplianceStatus {
    fn tone(&self) -> Tone {
        match self {
            ComplianceStatus::Completed => Tone::Success,
            ComplianceStatus::Pending => Tone::Warning,
            ComplianceStatus::Upcoming => Tone::Info,
            ComplianceStatus::Overdue => Tone::Danger,
        }
    }
}

impl Toned for Priority {
    fn tone(&self) -> Tone {
        match self {
            Priority::High => Tone::Danger,
            Priority::Medium => Tone::Warning,
            Priority::Low => Tone::Success,
        }
    }
}

impl Toned for TransactionStatus {
    fn tone(&self) -> Tone {
        match self {
            TransactionStatus::Pending => Tone::Warning,
            TransactionStatus::Reviewed => Tone::Info,
            TransactionStatus::Approved => Tone::Success,
        }
    }
}

impl Toned for RiskLevel {
    fn tone(&self) -> Tone {
        match self {
            RiskLevel::High => Tone::Danger,
            RiskLevel::Elevated => Tone::Warning,
            RiskLevel::Low => Tone::Success,
        }
    }
}

impl Toned for SuggestionStatus {
    fn tone(&self) -> Tone {
        match self {
            SuggestionStatus::Pending => Tone::Neutral,
            SuggestionStatus::InProgress => Tone::Info,
            SuggestionStatus::Implemented => Tone::Success,
        }
    }
}

impl Toned for Implementation {
    fn tone(&self) -> Tone {
        match self {
            Implementation::Easy => Tone::Success,
            Implementation::Medium => Tone::Warning,
            Implementation::Hard => Tone::Danger,
        }
    }
}

impl Toned for ConfidenceBand {
    fn tone(&self) -> Tone {
        match self {
            ConfidenceBand::High => Tone::Success,
            ConfidenceBand::Medium => Tone::Info,
            ConfidenceBand::Low => Tone::Warning,
        }
    }
}

impl Toned for GrantStatus {
    fn tone(&self) -> Tone {
        match self {
            GrantStatus::Open => Tone::Success,
            GrantStatus::Upcoming => Tone::Info,
            GrantStatus::Closed => Tone::Neutral,
        }
    }
}

impl Toned for SuccessBand {
    fn tone(&self) -> Tone {
        match self {
            SuccessBand::High => Tone::Success,
            SuccessBand::Medium => Tone::Warning,
            SuccessBand::Low => Tone::Danger,
        }
    }
}

impl Toned for HealthStatus {
    fn tone(&self) -> Tone {
        match self {
            HealthStatus::Healthy => Tone::Success,
            HealthStatus::Attention => Tone::Warning,
            HealthStatus::Urgent => Tone::Danger,
        }
    }
}

impl Toned for Severity {
    fn tone(&self) -> Tone {
        match self {
            Severity::Info => Tone::Info,
            Severity::Warning => Tone::Warning,
            Severity::High => Tone::Danger,
        }
    }
}

impl Toned for Trend {
    fn tone(&self) -> Tone {
        match self {
            Trend::Up => Tone::Success,
            Trend::Down => Tone::Danger,
            Trend::Neutral => Tone::Neutral,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub muted_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    pub header_bg: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &AuditorTheme) -> Self {
        Self {
            regular_bg: theme.card_background,
            muted_bg: theme.muted_background,
            border: theme.card_border,
            today_border: theme.accent,
            text: theme.text_primary,
            muted_text: with_alpha(theme.text_secondary, 150),
            header_bg: blend(theme.app_background, theme.card_border, 0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 2.0), b);
        assert_eq!(blend(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(ComplianceStatus::Overdue.tone(), Tone::Danger);
        assert_eq!(TransactionStatus::Approved.tone(), Tone::Success);
        assert_eq!(RiskLevel::from_score(85).tone(), Tone::Danger);
        assert_eq!(SuccessBand::from_rate(65).tone(), Tone::Warning);
    }

    #[test]
    fn test_fill_is_translucent() {
        let fill = Tone::Info.fill(&AuditorTheme::light());
        assert!(fill.a() < 255);
    }
}
