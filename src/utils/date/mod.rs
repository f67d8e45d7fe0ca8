// Date utility functions
// Day-granularity helpers used by the calendar and filters

use chrono::{Datelike, Local, NaiveDate};

/// Today's date in the local time zone
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// First day of the month `delta_months` away from `current`
pub fn shift_month(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(new_year, new_month, 1).unwrap_or(current)
}

/// Column index of `date` in a week that starts on `first_day_of_week` (0 = Sunday)
pub fn weekday_offset(date: NaiveDate, first_day_of_week: u8) -> u32 {
    (date.weekday().num_days_from_sunday() + 7 - u32::from(first_day_of_week % 7)) % 7
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(2024, 2 => 29 ; "leap february")]
    #[test_case(2023, 2 => 28 ; "common february")]
    #[test_case(2024, 12 => 31 ; "december")]
    #[test_case(2024, 4 => 30 ; "april")]
    fn test_days_in_month(year: i32, month: u32) -> u32 {
        days_in_month(year, month)
    }

    #[test]
    fn test_shift_month_wraps_years() {
        assert_eq!(shift_month(ymd(2024, 1, 31), -1), ymd(2023, 12, 1));
        assert_eq!(shift_month(ymd(2024, 12, 15), 1), ymd(2025, 1, 1));
        assert_eq!(shift_month(ymd(2024, 3, 10), 0), ymd(2024, 3, 1));
    }

    #[test]
    fn test_weekday_offset() {
        // 2024-01-01 is a Monday
        assert_eq!(weekday_offset(ymd(2024, 1, 1), 0), 1);
        assert_eq!(weekday_offset(ymd(2024, 1, 1), 1), 0);
        // 2024-06-01 is a Saturday
        assert_eq!(weekday_offset(ymd(2024, 6, 1), 0), 6);
        assert_eq!(weekday_offset(ymd(2024, 6, 1), 1), 5);
    }

    #[test]
    fn test_is_same_month_checks_year() {
        assert!(is_same_month(ymd(2024, 1, 1), ymd(2024, 1, 31)));
        assert!(!is_same_month(ymd(2024, 1, 1), ymd(2025, 1, 1)));
    }

    #[test]
    fn test_first_of_month() {
        assert_eq!(first_of_month(ymd(2024, 2, 29)), ymd(2024, 2, 1));
    }
}
