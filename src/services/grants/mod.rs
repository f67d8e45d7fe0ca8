//! Grant opportunities: filters, deadline countdown labels and success bands.

use chrono::NaiveDate;

use crate::models::grant::{Grant, GrantCategory, GrantStatus};
use crate::services::filter::{matches_option, RecordFilter};

/// Filter state of the grant opportunities view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GrantFilter {
    pub category: Option<GrantCategory>,
    pub status: Option<GrantStatus>,
}

impl RecordFilter<Grant> for GrantFilter {
    fn matches(&self, grant: &Grant, _today: NaiveDate) -> bool {
        matches_option(self.category, grant.category) && matches_option(self.status, grant.status)
    }
}

/// Countdown text for a deadline, counted in whole days from `today`
pub fn deadline_label(deadline: NaiveDate, today: NaiveDate) -> String {
    let days_left = deadline.signed_duration_since(today).num_days();
    match days_left {
        d if d < 0 => "Expired".to_string(),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d => format!("{} days left", d),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessBand {
    Low,
    Medium,
    High,
}

impl SuccessBand {
    pub fn from_rate(rate: u8) -> Self {
        match rate {
            80.. => SuccessBand::High,
            60..=79 => SuccessBand::Medium,
            _ => SuccessBand::Low,
        }
    }
}

/// First dollar figure in a free-text amount ("$10,000 - $20,000" gives 10000)
pub fn leading_amount(amount: &str) -> Option<u64> {
    let start = amount.find(|c: char| c.is_ascii_digit())?;
    let digits: String = amount[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantSummary {
    pub total: usize,
    pub open: usize,
    pub upcoming: usize,
    /// Sum of each grant's leading amount; unparseable amounts count as zero
    pub total_available: u64,
}

impl GrantSummary {
    pub fn from_grants(grants: &[Grant]) -> Self {
        let count = |status: GrantStatus| grants.iter().filter(|g| g.status == status).count();
        Self {
            total: grants.len(),
            open: count(GrantStatus::Open),
            upcoming: count(GrantStatus::Upcoming),
            total_available: grants
                .iter()
                .filter_map(|g| leading_amount(&g.amount))
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn grant(id: u32, category: GrantCategory, status: GrantStatus) -> Grant {
        Grant {
            id,
            title: format!("Grant {}", id),
            description: String::new(),
            amount: "Up to $10,000".into(),
            deadline: ymd(2024, 3, 15),
            category,
            status,
            eligibility: vec![],
            requirements: vec![],
            success_rate: 75,
            estimated_time: "2-4 weeks".into(),
            website: "https://www.canada.ca".into(),
        }
    }

    fn sample() -> Vec<Grant> {
        vec![
            grant(1, GrantCategory::Federal, GrantStatus::Open),
            grant(2, GrantCategory::Provincial, GrantStatus::Open),
            grant(3, GrantCategory::Municipal, GrantStatus::Open),
            grant(4, GrantCategory::Federal, GrantStatus::Open),
            grant(5, GrantCategory::Federal, GrantStatus::Upcoming),
        ]
    }

    #[test]
    fn test_category_and_status_conjunction() {
        let data = sample();
        let today = ymd(2024, 1, 1);
        let federal = GrantFilter {
            category: Some(GrantCategory::Federal),
            status: None,
        };
        let federal_upcoming = GrantFilter {
            status: Some(GrantStatus::Upcoming),
            ..federal.clone()
        };

        let ids = |filter: &GrantFilter| -> Vec<u32> {
            filter.apply(&data, today).iter().map(|g| g.id).collect()
        };
        assert_eq!(ids(&federal), vec![1, 4, 5]);
        assert_eq!(ids(&federal_upcoming), vec![5]);
        assert_eq!(ids(&GrantFilter::default()).len(), 5);
    }

    #[test]
    fn test_closed_filter_matches_nothing_in_sample() {
        let filter = GrantFilter {
            category: None,
            status: Some(GrantStatus::Closed),
        };
        assert_eq!(filter.count(&sample(), ymd(2024, 1, 1)), 0);
    }

    #[test_case(ymd(2024, 3, 14) => "Expired" ; "past")]
    #[test_case(ymd(2024, 3, 15) => "Today" ; "same day")]
    #[test_case(ymd(2024, 3, 16) => "Tomorrow" ; "next day")]
    #[test_case(ymd(2024, 3, 25) => "10 days left" ; "ten days")]
    fn test_deadline_label(deadline: NaiveDate) -> String {
        deadline_label(deadline, ymd(2024, 3, 15))
    }

    #[test_case(90 => SuccessBand::High)]
    #[test_case(75 => SuccessBand::Medium)]
    #[test_case(45 => SuccessBand::Low)]
    fn test_success_band(rate: u8) -> SuccessBand {
        SuccessBand::from_rate(rate)
    }

    #[test_case("Up to $1,000,000" => Some(1_000_000))]
    #[test_case("$10,000 - $20,000" => Some(10_000))]
    #[test_case("Up to $2,500" => Some(2_500))]
    #[test_case("Varies" => None)]
    fn test_leading_amount(amount: &str) -> Option<u64> {
        leading_amount(amount)
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            GrantSummary::from_grants(&sample()),
            GrantSummary {
                total: 5,
                open: 4,
                upcoming: 1,
                total_available: 50_000,
            }
        );
    }
}
