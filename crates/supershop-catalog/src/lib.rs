//! # supershop-catalog: Catalog Sources and Storefront Services
//!
//! Everything around the pricing engine: where products, categories and
//! agreements come from, and how the home page is put together.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        supershop-catalog                                │
//! │                                                                         │
//! │   bin/storefront ──► settings ──► telemetry                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │   ┌──────────────────────────────────────────────────────────────┐     │
//! │   │ storefront::Storefront::home_index(customer_id)              │     │
//! │   │     ├── service::CategoryService ──► CategorySource          │     │
//! │   │     ├── service::ProductService  ──► ProductSource           │     │
//! │   │     │          └──────────────────► PricingService (core)    │     │
//! │   │     └── AgreementSource                                       │     │
//! │   └──────────────────────────────────────────────────────────────┘     │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                source::InMemoryCatalog (JSON snapshot)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Catalog records and the snapshot shape
//! - [`source`] - Source traits and the in-memory catalog
//! - [`service`] - Product and category services
//! - [`storefront`] - Home page assembly and view models
//! - [`settings`] - TOML + environment configuration
//! - [`telemetry`] - Tracing subscriber setup
//! - [`error`] - Catalog error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod model;
pub mod service;
pub mod settings;
pub mod source;
pub mod storefront;
pub mod telemetry;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use model::{CatalogProduct, CatalogSnapshot, Category, CustomerAgreements};
pub use service::{CategoryService, ProductService};
pub use settings::{ConfigError, HomeSettings, StorefrontSettings};
pub use source::{AgreementSource, CategorySource, InMemoryCatalog, ProductSource};
pub use storefront::{CategoryView, HomeIndex, ProductBox, Storefront};
