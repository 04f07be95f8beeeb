//! # Error Types
//!
//! Domain-specific error types for supershop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  supershop-core errors (this file)                                     │
//! │  └── ValidationError  - Catalog / agreement data checks                │
//! │                                                                         │
//! │  supershop-catalog errors (separate crate)                             │
//! │  ├── CatalogError     - Source and snapshot failures                   │
//! │  └── ConfigError      - Settings loading failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError → storefront binary              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT Here
//! The pricing engine has no error type. Bad agreement data degrades to
//! "no discount" instead of failing; see [`crate::pricing`].

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Data validation errors.
///
/// Raised when catalog records or agreements are checked at load time. The
/// pricing engine never raises these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Validity window ends before it starts.
    #[error("validity window ends ({valid_to}) before it starts ({valid_from})")]
    InvalidWindow { valid_from: String, valid_to: String },

    /// Agreement row has no non-blank match field.
    #[error("agreement row {index} has no match criteria")]
    NoMatchCriteria { index: usize },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "percentage_discount".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "percentage_discount must be between 0 and 100");

        let err = ValidationError::NoMatchCriteria { index: 2 };
        assert_eq!(err.to_string(), "agreement row 2 has no match criteria");
    }
}
