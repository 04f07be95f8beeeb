//! # Catalog Error Types
//!
//! Error types for catalog sources and storefront services.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error / ValidationError / ConfigError         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds context and categorization          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  storefront binary ← prints and exits non-zero                         │
//! │                                                                         │
//! │  The pricing step in between never produces an error.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use supershop_core::ValidationError;
use thiserror::Error;

use crate::settings::ConfigError;

/// Catalog and storefront errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Entity not found in the catalog.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Snapshot file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot is not valid JSON for the expected shape.
    #[error("Invalid catalog snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// A catalog record failed validation.
    ///
    /// ## When This Occurs
    /// - Product id is not a UUID
    /// - Blank product or category name
    /// - Negative base price
    /// - `add_agreement` with an implausible discount
    #[error("Invalid catalog data: {0}")]
    Invalid(#[from] ValidationError),

    /// Settings could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CatalogError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        CatalogError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::not_found("Customer", "c-42");
        assert_eq!(err.to_string(), "Customer not found: c-42");

        let err: CatalogError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid catalog data: name is required");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = CatalogError::io(
            "missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("missing.json"));
    }
}
