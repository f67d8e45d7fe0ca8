// Report module
// Financial series and dashboard summary records

use serde::{Deserialize, Serialize};

use super::error::{require_range, require_text, ModelError};
use super::route::Route;

/// One month of the income trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomePoint {
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

/// One slice of the expense breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSlice {
    pub name: String,
    pub value: f64,
    /// Hex colour, "#RRGGBB"
    pub color: String,
}

/// One week of the cash flow forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    pub week: String,
    pub inflow: f64,
    pub outflow: f64,
    pub net: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReports {
    pub income: Vec<IncomePoint>,
    pub expenses: Vec<ExpenseSlice>,
    pub cash_flow: Vec<CashFlowPoint>,
}

impl FinancialReports {
    /// Every derived column must equal the difference of its inputs.
    pub fn validate(&self) -> Result<(), ModelError> {
        for point in &self.income {
            if (point.revenue - point.expenses - point.profit).abs() > f64::EPSILON {
                return Err(ModelError::InconsistentRow {
                    series: "income",
                    label: point.month.clone(),
                    detail: format!(
                        "profit {} != revenue {} - expenses {}",
                        point.profit, point.revenue, point.expenses
                    ),
                });
            }
        }

        for point in &self.cash_flow {
            if (point.inflow - point.outflow - point.net).abs() > f64::EPSILON {
                return Err(ModelError::InconsistentRow {
                    series: "cash flow",
                    label: point.week.clone(),
                    detail: format!(
                        "net {} != inflow {} - outflow {}",
                        point.net, point.inflow, point.outflow
                    ),
                });
            }
        }

        for slice in &self.expenses {
            require_text("expense name", &slice.name)?;
            require_range("expense value", slice.value, 0.0, f64::MAX)?;
            let hex = slice.color.trim_start_matches('#');
            if !slice.color.starts_with('#')
                || hex.len() != 6
                || !hex.chars().all(|c| c.is_ascii_hexdigit())
            {
                return Err(ModelError::InconsistentRow {
                    series: "expenses",
                    label: slice.name.clone(),
                    detail: format!("colour '{}' is not #RRGGBB", slice.color),
                });
            }
        }

        Ok(())
    }
}

string_enum! {
    pub enum HealthStatus as "health status" {
        Healthy => "healthy",
        Attention => "attention",
        Urgent => "urgent",
    }
}

string_enum! {
    pub enum Trend as "trend" {
        Up => "up",
        Down => "down",
        Neutral => "neutral",
    }
}

string_enum! {
    pub enum ActivityKind as "activity kind" {
        Compliance => "compliance",
        Fraud => "fraud",
        Optimization => "optimization",
    }
}

string_enum! {
    pub enum Severity as "severity" {
        Info => "info",
        Warning => "warning",
        High => "high",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialHealth {
    pub status: HealthStatus,
    pub score: u8,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetric {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub link: Route,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    pub time: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub health: FinancialHealth,
    pub metrics: Vec<DashboardMetric>,
    pub activities: Vec<Activity>,
}

impl DashboardData {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_range("health score", f64::from(self.health.score), 0.0, 100.0)?;
        for metric in &self.metrics {
            require_text("metric title", &metric.title)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reports() -> FinancialReports {
        FinancialReports {
            income: vec![IncomePoint {
                month: "Jan".into(),
                revenue: 45000.0,
                expenses: 32000.0,
                profit: 13000.0,
            }],
            expenses: vec![ExpenseSlice {
                name: "Salaries".into(),
                value: 45000.0,
                color: "#3b82f6".into(),
            }],
            cash_flow: vec![CashFlowPoint {
                week: "Week 1".into(),
                inflow: 15000.0,
                outflow: 12000.0,
                net: 3000.0,
            }],
        }
    }

    #[test]
    fn test_consistent_reports_validate() {
        assert!(reports().validate().is_ok());
    }

    #[test]
    fn test_profit_mismatch_is_reported() {
        let mut data = reports();
        data.income[0].profit = 1.0;
        let err = data.validate().unwrap_err();
        assert!(matches!(err, ModelError::InconsistentRow { series: "income", .. }));
    }

    #[test]
    fn test_bad_colour_is_reported() {
        let mut data = reports();
        data.expenses[0].color = "blue".into();
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_metric_link_parses_route() {
        let json = r#"{"title":"Flagged Transactions","value":"7","change":"2 new today",
            "trend":"down","link":"/fraud-detection"}"#;
        let metric: DashboardMetric = serde_json::from_str(json).unwrap();
        assert_eq!(metric.link, Route::FraudDetection);
        assert_eq!(metric.trend, Trend::Down);
    }
}
