use chrono::NaiveDate;

use crate::utils::date::shift_month;

/// Month-level moves of the calendar's reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthNavigation {
    Previous,
    Next,
    Today,
}

/// Apply a navigation step. Previous/Next land on the first of the adjacent month.
pub fn navigate(current: NaiveDate, action: MonthNavigation, today: NaiveDate) -> NaiveDate {
    match action {
        MonthNavigation::Previous => shift_month(current, -1),
        MonthNavigation::Next => shift_month(current, 1),
        MonthNavigation::Today => today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_previous_wraps_to_december() {
        let today = ymd(2026, 10, 17);
        assert_eq!(navigate(ymd(2024, 1, 31), MonthNavigation::Previous, today), ymd(2023, 12, 1));
    }

    #[test]
    fn test_next_wraps_to_january() {
        let today = ymd(2026, 10, 17);
        assert_eq!(navigate(ymd(2024, 12, 31), MonthNavigation::Next, today), ymd(2025, 1, 1));
    }

    #[test]
    fn test_today_resets() {
        let today = ymd(2026, 10, 17);
        assert_eq!(navigate(ymd(2024, 1, 15), MonthNavigation::Today, today), today);
    }

    #[test]
    fn test_round_trip_returns_to_same_month() {
        let today = ymd(2026, 10, 17);
        let start = ymd(2024, 5, 20);
        let back = navigate(
            navigate(start, MonthNavigation::Next, today),
            MonthNavigation::Previous,
            today,
        );
        assert_eq!(back, ymd(2024, 5, 1));
    }
}
