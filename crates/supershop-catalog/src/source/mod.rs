//! # Catalog Sources
//!
//! The read side of the catalog, as seen by the storefront services.
//!
//! ## Source Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Storefront                                                            │
//! │       │                                                                 │
//! │       ├── CategoryService ──► CategorySource::trending_categories(n)   │
//! │       ├── ProductService  ──► ProductSource::newest_products(n)        │
//! │       └── (itself)        ──► AgreementSource::agreements_for(id)      │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                              InMemoryCatalog (JSON snapshot)           │
//! │                                                                         │
//! │  Services depend on the traits, so tests hand them canned sources.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Sources
//!
//! - [`InMemoryCatalog`] - All three sources over a loaded snapshot

pub mod memory;

pub use memory::InMemoryCatalog;

use supershop_core::CustomerContext;

use crate::error::CatalogResult;
use crate::model::{CatalogProduct, Category};

/// Supplies products for listing.
pub trait ProductSource: Send + Sync {
    /// Returns at most `count` products, newest first.
    fn newest_products(&self, count: usize) -> CatalogResult<Vec<CatalogProduct>>;
}

/// Supplies categories for the home page.
pub trait CategorySource: Send + Sync {
    /// Returns at most `count` categories, most popular first.
    fn trending_categories(&self, count: usize) -> CatalogResult<Vec<Category>>;
}

/// Supplies a customer's discount agreements.
pub trait AgreementSource: Send + Sync {
    /// Builds the pricing context for a customer.
    ///
    /// A customer with no agreements on file gets an empty context, not an
    /// error.
    fn agreements_for(&self, customer_id: &str) -> CatalogResult<CustomerContext>;
}

impl<T: ProductSource + ?Sized> ProductSource for &T {
    fn newest_products(&self, count: usize) -> CatalogResult<Vec<CatalogProduct>> {
        (**self).newest_products(count)
    }
}

impl<T: CategorySource + ?Sized> CategorySource for &T {
    fn trending_categories(&self, count: usize) -> CatalogResult<Vec<Category>> {
        (**self).trending_categories(count)
    }
}

impl<T: AgreementSource + ?Sized> AgreementSource for &T {
    fn agreements_for(&self, customer_id: &str) -> CatalogResult<CustomerContext> {
        (**self).agreements_for(customer_id)
    }
}
