//! Custom error types for rentledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for rentledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Date strings that do not parse as YYYY-MM-DD
    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// An income span that covers no billing weeks
    #[error("Week span from {from} to {to} covers no weeks")]
    EmptyWeekSpan { from: NaiveDate, to: NaiveDate },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "not found" error for tenants
    pub fn tenant_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Tenant",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for rooms
    pub fn room_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Room",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for rent records
    pub fn rent_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Rent",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for income records
    pub fn income_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income",
            identifier: identifier.into(),
        }
    }

    /// Create a duplicate error for tenant references
    pub fn duplicate_tenant(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Tenant",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for rentledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::tenant_not_found("T1");
        assert_eq!(err.to_string(), "Tenant not found: T1");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_date_format_display() {
        let err = LedgerError::InvalidDateFormat("02/01/2025".into());
        assert_eq!(
            err.to_string(),
            "Invalid date format: '02/01/2025' (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn test_empty_week_span_display() {
        let err = LedgerError::EmptyWeekSpan {
            from: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            to: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Week span from 2025-02-10 to 2025-02-03 covers no weeks"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
