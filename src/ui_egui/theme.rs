//! Theme module for the egui dashboard
//!
//! Defines the AuditorTheme structure and conversion helpers between
//! egui::Color32 and the hex strings used by the report datasets.

use egui::Color32;

/// Colors used across the dashboard shell and views
#[derive(Debug, Clone, PartialEq)]
pub struct AuditorTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Top bar and sidebar fill
    pub panel_background: Color32,

    /// Card fill for summaries, lists and calendar cells
    pub card_background: Color32,

    pub card_border: Color32,

    /// Fill for calendar days outside the reference month
    pub muted_background: Color32,

    /// Highlight for the active route and today's cell
    pub accent: Color32,

    /// Primary text color (headings, figures)
    pub text_primary: Color32,

    /// Secondary text color (captions, descriptions)
    pub text_secondary: Color32,
}

impl AuditorTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(248, 250, 252),
            panel_background: Color32::from_rgb(255, 255, 255),
            card_background: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(226, 232, 240),
            muted_background: Color32::from_rgb(241, 245, 249),
            accent: Color32::from_rgb(59, 130, 246),
            text_primary: Color32::from_rgb(15, 23, 42),
            text_secondary: Color32::from_rgb(100, 116, 139),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(15, 23, 42),
            panel_background: Color32::from_rgb(30, 41, 59),
            card_background: Color32::from_rgb(30, 41, 59),
            card_border: Color32::from_rgb(51, 65, 85),
            muted_background: Color32::from_rgb(22, 30, 48),
            accent: Color32::from_rgb(96, 165, 250),
            text_primary: Color32::from_rgb(241, 245, 249),
            text_secondary: Color32::from_rgb(148, 163, 184),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.panel_background;
        visuals.panel_fill = self.app_background;
        visuals.extreme_bg_color = self.card_background;

        visuals.widgets.noninteractive.bg_fill = self.card_background;
        visuals.widgets.noninteractive.bg_stroke.color = self.card_border;
        visuals.selection.bg_fill = self.accent;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Convert Color32 to hex string for display
    pub fn color_to_hex(color: Color32) -> String {
        format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
    }

    /// Parse hex string to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return Err("Hex color must be 6 characters".to_string());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

        Ok(Color32::from_rgb(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_hex() {
        let color = Color32::from_rgb(59, 130, 246);
        assert_eq!(AuditorTheme::color_to_hex(color), "#3B82F6");
    }

    #[test]
    fn test_hex_to_color() {
        let result = AuditorTheme::hex_to_color("#3b82f6").unwrap();
        assert_eq!(result, Color32::from_rgb(59, 130, 246));

        let result2 = AuditorTheme::hex_to_color("10B981").unwrap();
        assert_eq!(result2, Color32::from_rgb(16, 185, 129));
    }

    #[test]
    fn test_hex_to_color_rejects_malformed() {
        assert!(AuditorTheme::hex_to_color("#12345").is_err());
        assert!(AuditorTheme::hex_to_color("#GG0000").is_err());
        assert!(AuditorTheme::hex_to_color("#ééé").is_err());
    }

    #[test]
    fn test_light_theme() {
        let theme = AuditorTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme, AuditorTheme::for_mode(false));
    }

    #[test]
    fn test_dark_theme() {
        let theme = AuditorTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(15, 23, 42));
    }
}
