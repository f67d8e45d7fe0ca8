// Grant module
// Public funding programs a business may apply to

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{require_range, require_text, ModelError};

string_enum! {
    /// Level of government running the program
    pub enum GrantCategory as "grant category" {
        Federal => "federal",
        Provincial => "provincial",
        Municipal => "municipal",
    }
}

string_enum! {
    pub enum GrantStatus as "grant status" {
        Open => "open",
        Upcoming => "upcoming",
        Closed => "closed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Human readable funding amount, e.g. "Up to $2,500"
    pub amount: String,
    pub deadline: NaiveDate,
    pub category: GrantCategory,
    pub status: GrantStatus,
    #[serde(default)]
    pub eligibility: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub success_rate: u8,
    pub estimated_time: String,
    pub website: String,
}

impl Grant {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_text("grant title", &self.title)?;
        require_range("success rate", f64::from(self.success_rate), 0.0, 100.0)?;
        if !(self.website.starts_with("https://") || self.website.starts_with("http://")) {
            return Err(ModelError::InvalidUrl(self.website.clone()));
        }
        Ok(())
    }
}
