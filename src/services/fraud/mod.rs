//! Fraud review: transaction filters, risk bands and summary counts.

use chrono::{Duration, NaiveDate};

use crate::models::transaction::{FlaggedTransaction, TransactionStatus};
use crate::services::filter::{contains_ignore_case, matches_option, RecordFilter};

/// Recency window relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    LastWeek,
    LastMonth,
}

impl DateFilter {
    pub const ALL: [DateFilter; 4] = [
        DateFilter::All,
        DateFilter::Today,
        DateFilter::LastWeek,
        DateFilter::LastMonth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DateFilter::All => "All Dates",
            DateFilter::Today => "Today",
            DateFilter::LastWeek => "Last 7 Days",
            DateFilter::LastMonth => "Last 30 Days",
        }
    }

    /// Windows only bound the past; later dates always pass.
    pub fn matches(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateFilter::All => true,
            DateFilter::Today => date == today,
            DateFilter::LastWeek => date >= today - Duration::days(7),
            DateFilter::LastMonth => date >= today - Duration::days(30),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountFilter {
    #[default]
    All,
    /// Under $100
    Low,
    /// $100 up to $1,000
    Medium,
    /// $1,000 and over
    High,
}

impl AmountFilter {
    pub const ALL: [AmountFilter; 4] = [
        AmountFilter::All,
        AmountFilter::Low,
        AmountFilter::Medium,
        AmountFilter::High,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AmountFilter::All => "All Amounts",
            AmountFilter::Low => "Under $100",
            AmountFilter::Medium => "$100 - $1,000",
            AmountFilter::High => "Over $1,000",
        }
    }

    pub fn matches(self, amount: f64) -> bool {
        match self {
            AmountFilter::All => true,
            AmountFilter::Low => amount < 100.0,
            AmountFilter::Medium => (100.0..1000.0).contains(&amount),
            AmountFilter::High => amount >= 1000.0,
        }
    }
}

/// Filter state of the fraud detection view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionFilter {
    pub search: String,
    pub date: DateFilter,
    pub amount: AmountFilter,
    pub status: Option<TransactionStatus>,
}

impl TransactionFilter {
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl RecordFilter<FlaggedTransaction> for TransactionFilter {
    fn matches(&self, tx: &FlaggedTransaction, today: NaiveDate) -> bool {
        let matches_search = contains_ignore_case(&tx.description, &self.search)
            || contains_ignore_case(&tx.supplier, &self.search);

        matches_search
            && self.date.matches(tx.date, today)
            && self.amount.matches(tx.amount)
            && matches_option(self.status, tx.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Elevated,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => RiskLevel::High,
            60..=79 => RiskLevel::Elevated,
            _ => RiskLevel::Low,
        }
    }
}

/// Counts shown above the transaction table, over the unfiltered list
#[derive(Debug, Clone, PartialEq)]
pub struct FraudSummary {
    pub total_flagged: usize,
    pub pending: usize,
    pub approved: usize,
    pub total_amount: f64,
}

impl FraudSummary {
    pub fn from_transactions(transactions: &[FlaggedTransaction]) -> Self {
        let count = |status: TransactionStatus| {
            transactions.iter().filter(|t| t.status == status).count()
        };
        Self {
            total_flagged: transactions.len(),
            pending: count(TransactionStatus::Pending),
            approved: count(TransactionStatus::Approved),
            total_amount: transactions.iter().map(|t| t.amount).sum(),
        }
    }
}
