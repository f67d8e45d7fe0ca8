//! Validation errors shared by all record types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("unknown {kind} value '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid website URL '{0}'")]
    InvalidUrl(String),

    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    #[error("duplicate id {0}")]
    DuplicateId(u32),

    #[error("inconsistent {series} row '{label}': {detail}")]
    InconsistentRow {
        series: &'static str,
        label: String,
        detail: String,
    },
}

impl ModelError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}

/// Reject blank strings for a required text field.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::EmptyField(field));
    }
    Ok(())
}

/// Reject values outside `min..=max`.
pub fn require_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ModelError> {
    if value.is_nan() || value < min || value > max {
        return Err(ModelError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
