// Settings module
// User preferences persisted as TOML

use serde::{Deserialize, Serialize};

use super::route::Route;

string_enum! {
    /// How many week rows the compliance calendar shows
    pub enum GridRows as "grid rows" {
        /// Always five weeks (35 cells); trailing days of long months are clipped
        Fixed => "fixed",
        /// As many weeks as the month needs (4 to 6)
        Fit => "fit",
    }
}

impl Default for GridRows {
    fn default() -> Self {
        GridRows::Fixed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub use_system_theme: bool,
    /// 0 = Sunday ... 6 = Saturday
    pub first_day_of_week: u8,
    pub grid_rows: GridRows,
    /// Events listed in a calendar cell before "+N more"
    pub max_events_per_cell: usize,
    pub start_route: String,
    pub show_sidebar: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "Light".to_string(),
            use_system_theme: false,
            first_day_of_week: 0, // Sunday
            grid_rows: GridRows::Fixed,
            max_events_per_cell: 2,
            start_route: Route::Dashboard.path().to_string(),
            show_sidebar: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.theme.as_str(), "Light" | "Dark") {
            return Err(format!("Theme must be 'Light' or 'Dark', got '{}'", self.theme));
        }

        if self.first_day_of_week > 6 {
            return Err("First day of week must be 0-6 (Sunday-Saturday)".to_string());
        }

        if self.max_events_per_cell == 0 {
            return Err("Events per calendar cell must be at least 1".to_string());
        }

        self.start_route().map_err(|e| e.to_string())?;

        Ok(())
    }

    pub fn start_route(&self) -> Result<Route, super::error::ModelError> {
        Route::from_path(&self.start_route)
    }

    pub fn is_dark(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.start_route().unwrap(), Route::Dashboard);
        assert_eq!(settings.grid_rows, GridRows::Fixed);
    }

    #[test]
    fn test_validate_first_day_of_week() {
        let settings = Settings {
            first_day_of_week: 7,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_unknown_theme() {
        let settings = Settings {
            theme: "Solarized".into(),
            ..Settings::default()
        };
        assert!(settings.validate().unwrap_err().contains("Solarized"));
    }

    #[test]
    fn test_validate_unknown_start_route() {
        let settings = Settings {
            start_route: "/admin".into(),
            ..Settings::default()
        };
        assert_eq!(settings.validate().unwrap_err(), "unknown route '/admin'");
    }

    #[test]
    fn test_validate_zero_events_per_cell() {
        let settings = Settings {
            max_events_per_cell: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
