//! # supershop-core: Pure Pricing Logic for SuperShop
//!
//! This crate is the **heart** of the SuperShop storefront. It turns catalog
//! products plus a customer's discount agreements into effective prices, as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SuperShop Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                supershop-catalog (Storefront)                   │   │
//! │  │    home_index ──► CategoryService ──► ProductService            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PricingService                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ supershop-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │ Agreement │  │   Money   │  │  engine   │  │   rules   │  │   │
//! │  │   │  Product  │  │ rounding  │  │  Clock    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Agreement, CustomerContext, etc.)
//! - [`money`] - Whole-unit Money with exact discount rounding
//! - [`pricing`] - The discount evaluation engine
//! - [`clock`] - Evaluation instant source
//! - [`error`] - Domain error types
//! - [`validation`] - Data checks for catalog records and agreements
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same products, agreements and instant = same prices
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: prices are whole numbers; only discounts are decimal
//! 4. **Total Pricing**: the engine never fails, bad data means no discount
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use supershop_core::pricing::calculate_prices_at;
//! use supershop_core::{Agreement, AgreementRow, CustomerContext, Money, PercentageDiscount, Product};
//!
//! let products = vec![
//!     Product::new("Laptop", Money::new(200)),
//!     Product::new("Milk", Money::new(10)),
//! ];
//!
//! let context = CustomerContext::new(vec![
//!     Agreement::unbounded(vec![AgreementRow::for_product("Laptop", PercentageDiscount::from_percent(10))]),
//!     Agreement::unbounded(vec![AgreementRow::for_product("Laptop", PercentageDiscount::from_percent(20))]),
//! ]);
//!
//! let priced = calculate_prices_at(products, Some(&context), Utc::now());
//!
//! // Lowest price wins; discounts never compound
//! assert_eq!(priced[0].price, Money::new(160));
//! assert_eq!(priced[1].price, Money::new(10));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ValidationError;
pub use money::Money;
pub use pricing::{AgreementPricing, PricingService};
pub use types::*;
