//! # Storefront Settings
//!
//! Configuration for the storefront: where the catalog lives and how much of
//! it the home page shows.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SUPERSHOP_CATALOG_PATH=/srv/catalog.json                           │
//! │     SUPERSHOP_TRENDING_CATEGORIES_AMOUNT=5                             │
//! │     SUPERSHOP_PRODUCT_AMOUNT=8                                         │
//! │                                                                         │
//! │  2. TOML Settings File (--settings <path>)                             │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     catalog.json, 10 categories, 10 products                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Settings File Format
//! ```toml
//! # storefront.toml
//! catalog_path = "catalog.json"
//!
//! [home]
//! trending_categories_amount = 10
//! product_amount = 10
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

// =============================================================================
// Config Error
// =============================================================================

/// Settings loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

// =============================================================================
// Home Settings
// =============================================================================

/// How much the home page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeSettings {
    /// Number of trending categories on the home page.
    #[serde(default = "default_amount")]
    pub trending_categories_amount: usize,

    /// Number of new products on the home page.
    #[serde(default = "default_amount")]
    pub product_amount: usize,
}

fn default_amount() -> usize {
    10
}

impl Default for HomeSettings {
    fn default() -> Self {
        HomeSettings {
            trending_categories_amount: default_amount(),
            product_amount: default_amount(),
        }
    }
}

// =============================================================================
// Storefront Settings
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontSettings {
    /// Catalog snapshot (JSON) to serve.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    #[serde(default)]
    pub home: HomeSettings,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.json")
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        StorefrontSettings {
            catalog_path: default_catalog_path(),
            home: HomeSettings::default(),
        }
    }
}

/// Environment variable overriding `catalog_path`.
pub const ENV_CATALOG_PATH: &str = "SUPERSHOP_CATALOG_PATH";
/// Environment variable overriding `home.trending_categories_amount`.
pub const ENV_TRENDING_CATEGORIES_AMOUNT: &str = "SUPERSHOP_TRENDING_CATEGORIES_AMOUNT";
/// Environment variable overriding `home.product_amount`.
pub const ENV_PRODUCT_AMOUNT: &str = "SUPERSHOP_PRODUCT_AMOUNT";

impl StorefrontSettings {
    /// Parses settings from TOML text. Missing keys fall back to defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads settings from file (if given) and the environment.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Settings file
    /// 3. Environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match path {
            Some(path) => {
                info!(?path, "Loading storefront settings from file");
                let contents = std::fs::read_to_string(path)?;
                Self::from_toml_str(&contents)?
            }
            None => {
                debug!("No settings file given, using defaults");
                Self::default()
            }
        };

        settings.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Applies overrides from a key lookup (the process environment in
    /// [`StorefrontSettings::load`]).
    ///
    /// A present but unparseable amount is an error rather than silently
    /// ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CATALOG_PATH) {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(ENV_TRENDING_CATEGORIES_AMOUNT) {
            self.home.trending_categories_amount =
                parse_amount(ENV_TRENDING_CATEGORIES_AMOUNT, &value)?;
        }

        if let Some(value) = lookup(ENV_PRODUCT_AMOUNT) {
            self.home.product_amount = parse_amount(ENV_PRODUCT_AMOUNT, &value)?;
        }

        Ok(())
    }
}

fn parse_amount(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("'{}' is not a non-negative integer ({})", value, e),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
