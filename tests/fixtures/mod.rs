// Test fixtures - reusable test data
// Provides consistent records across the integration and property tests

#![allow(dead_code)]

use ai_auditor::models::compliance::{ComplianceEvent, ComplianceStatus, ComplianceType, Priority};
use ai_auditor::models::transaction::{FlaggedTransaction, TransactionStatus};
use chrono::{NaiveDate, NaiveTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Jan 1, 2024 (a Monday)
    pub fn jan_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Jan 15, 2024, the "today" of the sample datasets
    pub fn jan_15_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

/// Compliance events for grid tests
pub mod events {
    use super::*;

    pub fn compliance_event(id: u32, title: &str, date: NaiveDate) -> ComplianceEvent {
        ComplianceEvent::builder()
            .id(id)
            .title(title)
            .date(date)
            .kind(ComplianceType::Tax)
            .status(ComplianceStatus::Pending)
            .priority(Priority::High)
            .build()
            .unwrap()
    }

    /// GST Filing on Jan 15 and Annual Report on Jan 31, 2024
    pub fn january_deadlines() -> Vec<ComplianceEvent> {
        vec![
            compliance_event(1, "GST Filing", dates::ymd(2024, 1, 15)),
            compliance_event(2, "Annual Report", dates::ymd(2024, 1, 31)),
        ]
    }
}

/// Flagged transactions for filter tests
pub mod transactions {
    use super::*;

    pub fn transaction(
        id: u32,
        date: NaiveDate,
        amount: f64,
        status: TransactionStatus,
    ) -> FlaggedTransaction {
        FlaggedTransaction {
            id,
            date,
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            description: format!("Transaction {}", id),
            supplier: format!("Supplier {}", id),
            amount,
            risk_score: 70,
            status,
            reason: "Unusual amount".to_string(),
            category: "Office".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::jan_1_2024().weekday(), Weekday::Mon);
        assert_eq!(dates::leap_day_2024().day(), 29);
    }

    #[test]
    fn test_fixture_events_are_valid() {
        let events = events::january_deadlines();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.validate().is_ok()));
    }
}
