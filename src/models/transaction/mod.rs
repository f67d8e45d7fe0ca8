// Transaction module
// Transactions flagged by the fraud screening

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::error::{require_range, require_text, ModelError};

string_enum! {
    pub enum TransactionStatus as "transaction status" {
        Pending => "pending",
        Reviewed => "reviewed",
        Approved => "approved",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedTransaction {
    pub id: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
    pub supplier: String,
    /// Amount in dollars
    pub amount: f64,
    /// Model risk score, 0..=100
    pub risk_score: u8,
    pub status: TransactionStatus,
    /// Why the transaction was flagged
    pub reason: String,
    pub category: String,
}

impl FlaggedTransaction {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_text("transaction description", &self.description)?;
        require_text("transaction supplier", &self.supplier)?;
        require_range("risk score", f64::from(self.risk_score), 0.0, 100.0)?;
        require_range("transaction amount", self.amount, 0.0, f64::MAX)?;
        Ok(())
    }
}
