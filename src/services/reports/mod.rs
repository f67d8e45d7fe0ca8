//! Financial reports: chart selection and derived figures.

use crate::models::report::{ExpenseSlice, IncomePoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Income,
    Expenses,
    CashFlow,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Income, ChartKind::Expenses, ChartKind::CashFlow];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Income => "Income Trends",
            ChartKind::Expenses => "Expense Breakdown",
            ChartKind::CashFlow => "Cash Flow Forecast",
        }
    }
}

/// Reporting window picked in the toolbar. The sample series are not re-sliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportRange {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    LastYear,
}

impl ReportRange {
    pub const ALL: [ReportRange; 4] = [
        ReportRange::Last7Days,
        ReportRange::Last30Days,
        ReportRange::Last90Days,
        ReportRange::LastYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportRange::Last7Days => "Last 7 days",
            ReportRange::Last30Days => "Last 30 days",
            ReportRange::Last90Days => "Last 90 days",
            ReportRange::LastYear => "Last year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportsViewState {
    pub chart: ChartKind,
    pub range: ReportRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IncomeTotals {
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

impl IncomeTotals {
    pub fn from_points(points: &[IncomePoint]) -> Self {
        points.iter().fold(Self::default(), |acc, p| Self {
            revenue: acc.revenue + p.revenue,
            expenses: acc.expenses + p.expenses,
            profit: acc.profit + p.profit,
        })
    }

    /// Profit as a whole percentage of revenue; negative for a loss
    pub fn margin_percent(&self) -> i32 {
        if self.revenue <= 0.0 {
            return 0;
        }
        (self.profit / self.revenue * 100.0).round() as i32
    }
}

/// Whole-percent share of each slice, in slice order
pub fn expense_shares(expenses: &[ExpenseSlice]) -> Vec<(&str, u32)> {
    let total: f64 = expenses.iter().map(|s| s.value).sum();
    expenses
        .iter()
        .map(|slice| {
            let share = if total > 0.0 {
                (slice.value / total * 100.0).round() as u32
            } else {
                0
            };
            (slice.name.as_str(), share)
        })
        .collect()
}
