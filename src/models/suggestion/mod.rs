// Suggestion module
// Cost-saving recommendations

use serde::{Deserialize, Serialize};

use super::error::{require_range, require_text, ModelError};

string_enum! {
    pub enum SuggestionCategory as "suggestion category" {
        Software => "software",
        Utilities => "utilities",
        Supplies => "supplies",
        Banking => "banking",
        Office => "office",
    }
}

string_enum! {
    /// Effort needed to put a suggestion in place
    pub enum Implementation as "implementation" {
        Easy => "easy",
        Medium => "medium",
        Hard => "hard",
    }
}

string_enum! {
    pub enum SuggestionStatus as "suggestion status" {
        Pending => "pending",
        InProgress => "in-progress",
        Implemented => "implemented",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSuggestion {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: SuggestionCategory,
    pub current_cost: f64,
    pub potential_savings: f64,
    pub confidence: u8,
    pub implementation: Implementation,
    pub status: SuggestionStatus,
    #[serde(default)]
    pub details: Vec<String>,
    pub timeline: String,
}

impl CostSuggestion {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_text("suggestion title", &self.title)?;
        require_range("current cost", self.current_cost, 0.0, f64::MAX)?;
        require_range("potential savings", self.potential_savings, 0.0, self.current_cost)?;
        require_range("confidence", f64::from(self.confidence), 0.0, 100.0)?;
        Ok(())
    }

    pub fn is_implemented(&self) -> bool {
        self.status == SuggestionStatus::Implemented
    }

    /// Savings as a whole percentage of the current cost
    pub fn savings_percent(&self) -> u32 {
        if self.current_cost <= 0.0 {
            return 0;
        }
        (self.potential_savings / self.current_cost * 100.0).round() as u32
    }
}
