//! Cost optimization: suggestion filters, savings totals and confidence bands.

use chrono::NaiveDate;

use crate::models::suggestion::{CostSuggestion, SuggestionCategory, SuggestionStatus};
use crate::services::filter::{matches_option, RecordFilter};

/// Filter state of the cost optimization view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuggestionFilter {
    pub category: Option<SuggestionCategory>,
    pub show_implemented: bool,
}

impl RecordFilter<CostSuggestion> for SuggestionFilter {
    fn matches(&self, suggestion: &CostSuggestion, _today: NaiveDate) -> bool {
        matches_option(self.category, suggestion.category)
            && (self.show_implemented || !suggestion.is_implemented())
    }
}

/// Savings still on the table among `suggestions`
pub fn total_potential_savings<'a>(suggestions: impl IntoIterator<Item = &'a CostSuggestion>) -> f64 {
    suggestions
        .into_iter()
        .filter(|s| !s.is_implemented())
        .map(|s| s.potential_savings)
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    Low,
    Medium,
    High,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: u8) -> Self {
        match confidence {
            90.. => ConfidenceBand::High,
            80..=89 => ConfidenceBand::Medium,
            _ => ConfidenceBand::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostSummary {
    pub total: usize,
    pub implemented: usize,
    pub in_progress: usize,
    pub current_spend: f64,
}

impl CostSummary {
    pub fn from_suggestions(suggestions: &[CostSuggestion]) -> Self {
        Self {
            total: suggestions.len(),
            implemented: suggestions.iter().filter(|s| s.is_implemented()).count(),
            in_progress: suggestions
                .iter()
                .filter(|s| s.status == SuggestionStatus::InProgress)
                .count(),
            current_spend: suggestions.iter().map(|s| s.current_cost).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::suggestion::Implementation;
    use test_case::test_case;

    fn suggestion(
        id: u32,
        category: SuggestionCategory,
        savings: f64,
        status: SuggestionStatus,
    ) -> CostSuggestion {
        CostSuggestion {
            id,
            title: format!("Suggestion {}", id),
            description: String::new(),
            category,
            current_cost: 5000.0,
            potential_savings: savings,
            confidence: 90,
            implementation: Implementation::Medium,
            status,
            details: vec![],
            timeline: "1 week".into(),
        }
    }

    fn sample() -> Vec<CostSuggestion> {
        vec![
            suggestion(1, SuggestionCategory::Software, 480.0, SuggestionStatus::Pending),
            suggestion(2, SuggestionCategory::Utilities, 120.0, SuggestionStatus::Pending),
            suggestion(3, SuggestionCategory::Supplies, 375.0, SuggestionStatus::InProgress),
            suggestion(5, SuggestionCategory::Office, 720.0, SuggestionStatus::Implemented),
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_default_hides_implemented() {
        let data = sample();
        let visible = SuggestionFilter::default().apply(&data, today());
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|s| !s.is_implemented()));
        assert_eq!(total_potential_savings(visible), 975.0);
    }

    #[test]
    fn test_show_implemented_does_not_count_its_savings() {
        let data = sample();
        let filter = SuggestionFilter {
            show_implemented: true,
            ..Default::default()
        };
        let visible = filter.apply(&data, today());
        assert_eq!(visible.len(), 4);
        assert_eq!(total_potential_savings(visible), 975.0);
    }

    #[test]
    fn test_category_filter() {
        let data = sample();
        let filter = SuggestionFilter {
            category: Some(SuggestionCategory::Office),
            show_implemented: false,
        };
        assert!(filter.apply(&data, today()).is_empty());

        let filter = SuggestionFilter {
            category: Some(SuggestionCategory::Office),
            show_implemented: true,
        };
        assert_eq!(filter.count(&data, today()), 1);
    }

    #[test_case(95 => ConfidenceBand::High)]
    #[test_case(90 => ConfidenceBand::High)]
    #[test_case(88 => ConfidenceBand::Medium)]
    #[test_case(78 => ConfidenceBand::Low)]
    fn test_confidence_band(confidence: u8) -> ConfidenceBand {
        ConfidenceBand::from_confidence(confidence)
    }

    #[test]
    fn test_summary() {
        let summary = CostSummary::from_suggestions(&sample());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.implemented, 1);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.current_spend, 20000.0);
    }
}
