//! # In-Memory Catalog
//!
//! A catalog held entirely in memory, loaded from a JSON snapshot.
//!
//! ## Load Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  catalog.json ──read──► from_json_str ──serde──► CatalogSnapshot        │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │                                               from_snapshot             │
//! │                                               ├── product ids (UUID)    │
//! │                                               ├── product names         │
//! │                                               ├── base prices >= 0      │
//! │                                               └── category ids / names  │
//! │                                                      │                  │
//! │                                   first failure ◄────┤                  │
//! │                                 CatalogError::Invalid│                  │
//! │                                                      ▼                  │
//! │                                               InMemoryCatalog           │
//! │                                                                         │
//! │  Agreements in the snapshot are NOT rejected here; the storefront      │
//! │  audits them per request and the engine skips bad rows.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::path::Path;

use supershop_core::validation::{
    validate_agreement, validate_base_price, validate_category_name, validate_product_name,
    validate_uuid,
};
use supershop_core::{Agreement, CustomerContext};
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};
use crate::model::{CatalogProduct, CatalogSnapshot, Category};
use crate::source::{AgreementSource, CategorySource, ProductSource};

/// All three catalog sources over one loaded snapshot.
///
/// ## Usage
/// ```rust,ignore
/// let catalog = InMemoryCatalog::load("catalog.json")?;
/// let newest = catalog.newest_products(10)?;
/// let context = catalog.agreements_for("acme")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<CatalogProduct>,
    categories: Vec<Category>,
    agreements: HashMap<String, Vec<Agreement>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a parsed snapshot.
    ///
    /// Customers listed more than once have their agreements merged in file
    /// order.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> CatalogResult<Self> {
        for product in &snapshot.products {
            validate_uuid(&product.id)?;
            validate_product_name(&product.name)?;
            validate_base_price(product.base_price)?;
        }

        for category in &snapshot.categories {
            validate_uuid(&category.id)?;
            validate_category_name(&category.name)?;
        }

        let mut agreements: HashMap<String, Vec<Agreement>> = HashMap::new();
        for customer in snapshot.customers {
            agreements
                .entry(customer.customer_id)
                .or_default()
                .extend(customer.agreements);
        }

        debug!(
            products = snapshot.products.len(),
            categories = snapshot.categories.len(),
            customers = agreements.len(),
            "Catalog snapshot accepted"
        );

        Ok(InMemoryCatalog {
            products: snapshot.products,
            categories: snapshot.categories,
            agreements,
        })
    }

    /// Parses and validates a JSON snapshot.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Reads, parses and validates a JSON snapshot file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        info!(?path, "Loading catalog snapshot");

        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        Self::from_json_str(&contents)
    }

    /// Records a new agreement for a customer.
    ///
    /// Unlike snapshot loading, this is the authoring path: the agreement
    /// must pass [`validate_agreement`] in full.
    pub fn add_agreement(
        &mut self,
        customer_id: impl Into<String>,
        agreement: Agreement,
    ) -> CatalogResult<()> {
        validate_agreement(&agreement)?;

        let customer_id = customer_id.into();
        debug!(customer_id = %customer_id, rows = agreement.rows.len(), "Agreement added");
        self.agreements
            .entry(customer_id)
            .or_default()
            .push(agreement);
        Ok(())
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> CatalogResult<&CatalogProduct> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::not_found("Product", id))
    }

    /// Number of products in the catalog.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Number of customers with at least one agreement entry.
    pub fn customer_count(&self) -> usize {
        self.agreements.len()
    }
}

// =============================================================================
// Source Implementations
// =============================================================================

impl ProductSource for InMemoryCatalog {
    /// Newest first by `added_at`; equal timestamps are ordered by name so
    /// the listing is stable across loads.
    fn newest_products(&self, count: usize) -> CatalogResult<Vec<CatalogProduct>> {
        let mut newest: Vec<&CatalogProduct> = self.products.iter().collect();
        newest.sort_by(|a, b| b.added_at.cmp(&a.added_at).then_with(|| a.name.cmp(&b.name)));

        Ok(newest.into_iter().take(count).cloned().collect())
    }
}

impl CategorySource for InMemoryCatalog {
    /// Snapshot order is popularity order.
    fn trending_categories(&self, count: usize) -> CatalogResult<Vec<Category>> {
        Ok(self.categories.iter().take(count).cloned().collect())
    }
}

impl AgreementSource for InMemoryCatalog {
    fn agreements_for(&self, customer_id: &str) -> CatalogResult<CustomerContext> {
        let agreements = self.agreements.get(customer_id).cloned().unwrap_or_default();
        Ok(CustomerContext::new(agreements).for_customer(customer_id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
