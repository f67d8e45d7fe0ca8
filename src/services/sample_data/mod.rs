//! Embedded sample datasets backing every view.
//!
//! The JSON files under `data/` are compiled into the binary, parsed with
//! serde and validated record by record before the window opens.

use std::collections::HashSet;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::models::compliance::ComplianceEvent;
use crate::models::error::ModelError;
use crate::models::grant::Grant;
use crate::models::report::{DashboardData, FinancialReports};
use crate::models::suggestion::CostSuggestion;
use crate::models::transaction::FlaggedTransaction;

const COMPLIANCE_EVENTS: &str = include_str!("../../../data/compliance_events.json");
const FLAGGED_TRANSACTIONS: &str = include_str!("../../../data/flagged_transactions.json");
const COST_SUGGESTIONS: &str = include_str!("../../../data/cost_suggestions.json");
const GRANTS: &str = include_str!("../../../data/grants.json");
const FINANCIAL_REPORTS: &str = include_str!("../../../data/financial_reports.json");
const DASHBOARD: &str = include_str!("../../../data/dashboard.json");

#[derive(Debug, Clone)]
pub struct SampleData {
    pub compliance_events: Vec<ComplianceEvent>,
    pub transactions: Vec<FlaggedTransaction>,
    pub suggestions: Vec<CostSuggestion>,
    pub grants: Vec<Grant>,
    pub reports: FinancialReports,
    pub dashboard: DashboardData,
}

impl SampleData {
    /// Parse and validate every embedded dataset
    pub fn load() -> Result<Self> {
        let compliance_events: Vec<ComplianceEvent> =
            parse_dataset("compliance events", COMPLIANCE_EVENTS)?;
        validate_records("compliance events", &compliance_events, |e| e.id, |e| e.validate())?;

        let transactions: Vec<FlaggedTransaction> =
            parse_dataset("flagged transactions", FLAGGED_TRANSACTIONS)?;
        validate_records("flagged transactions", &transactions, |t| t.id, |t| t.validate())?;

        let suggestions: Vec<CostSuggestion> = parse_dataset("cost suggestions", COST_SUGGESTIONS)?;
        validate_records("cost suggestions", &suggestions, |s| s.id, |s| s.validate())?;

        let grants: Vec<Grant> = parse_dataset("grants", GRANTS)?;
        validate_records("grants", &grants, |g| g.id, |g| g.validate())?;

        let reports: FinancialReports = parse_dataset("financial reports", FINANCIAL_REPORTS)?;
        reports.validate().context("Invalid financial reports")?;

        let dashboard: DashboardData = parse_dataset("dashboard", DASHBOARD)?;
        dashboard.validate().context("Invalid dashboard data")?;
        validate_records("dashboard activities", &dashboard.activities, |a| a.id, |_| Ok(()))?;

        log::info!(
            "Loaded sample data: {} compliance events, {} transactions, {} suggestions, {} grants",
            compliance_events.len(),
            transactions.len(),
            suggestions.len(),
            grants.len()
        );

        Ok(Self {
            compliance_events,
            transactions,
            suggestions,
            grants,
            reports,
            dashboard,
        })
    }
}

pub fn parse_dataset<T: DeserializeOwned>(name: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).with_context(|| format!("Failed to parse {} dataset", name))
}

/// Validate each record and reject repeated ids
pub fn validate_records<T>(
    name: &str,
    records: &[T],
    id_of: impl Fn(&T) -> u32,
    validate: impl Fn(&T) -> Result<(), ModelError>,
) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let id = id_of(record);
        if !seen.insert(id) {
            return Err(ModelError::DuplicateId(id)).with_context(|| format!("Invalid {} dataset", name));
        }
        validate(record).with_context(|| format!("Invalid record {} in {} dataset", id, name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_loads() {
        let data = SampleData::load().unwrap();
        assert_eq!(data.compliance_events.len(), 5);
        assert_eq!(data.transactions.len(), 5);
        assert_eq!(data.suggestions.len(), 5);
        assert_eq!(data.grants.len(), 5);
        assert_eq!(data.reports.income.len(), 6);
        assert_eq!(data.dashboard.metrics.len(), 3);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let ids = [1u32, 2, 1];
        let err = validate_records("numbers", &ids, |n| *n, |_| Ok(())).unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate id 1"));
    }

    #[test]
    fn test_parse_error_names_dataset() {
        let err = parse_dataset::<Vec<Grant>>("grants", "[{\"id\": 1}]").unwrap_err();
        assert!(err.to_string().contains("Failed to parse grants dataset"));
    }

    #[test]
    fn test_invalid_record_names_id() {
        let json = r#"[{"id":9,"title":" ","description":"","date":"2024-01-01",
            "type":"tax","status":"pending","priority":"low"}]"#;
        let events: Vec<ComplianceEvent> = parse_dataset("compliance events", json).unwrap();
        let err = validate_records("compliance events", &events, |e| e.id, |e| e.validate())
            .unwrap_err();
        assert!(err.to_string().contains("Invalid record 9"));
    }
}
