//! # Pricing Engine
//!
//! Computes each product's effective price from the customer's discount
//! agreements.
//!
//! ## Evaluation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    calculate_prices(products, context)                  │
//! │                                                                         │
//! │  context = None ──────────────────────────► every price = base price    │
//! │                                                                         │
//! │  for each product (independently):                                      │
//! │    best = base_price                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │    for each agreement active at `now`   (valid_from <= now <= valid_to) │
//! │       for each row                                                      │
//! │          ├── discount outside (0, 100]? ──► skip row                    │
//! │          ├── no match field matches?    ──► skip row                    │
//! │          └── candidate = round(base × (100 - pct) / 100)                │
//! │                 candidate < best? ──► best = candidate                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │    price = best                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conflict Resolution
//! When several rows (in one agreement or across agreements) match the same
//! product, the LOWEST resulting price wins. Discounts are never compounded.
//! On equal prices the first row encountered is kept.
//!
//! ## Matching
//! A row matches when any of its non-blank match fields CONTAINS the product
//! name, ignoring case. The direction matters: the row text is the haystack.
//!
//! ```text
//!   product_match      "Gaming Laptop"  vs name "laptop"       → match
//!   product_match      "Lap"            vs name "Laptop"       → no match
//!   manufacturer_match "Lenovo Laptop"  vs name "Laptop"       → match
//!   manufacturer_match "Lenovo"         vs name "ThinkPad X1"  → no match
//! ```
//!
//! All three criteria are checked against the product name only. The
//! product's manufacturer and category names are display data and never
//! widen a match.
//!
//! ## Failure Semantics
//! None. Missing context, expired agreements, nonsense discounts and empty
//! names all end in "no discount" for the affected product.
//!
//! ## Usage
//! ```rust
//! use chrono::Utc;
//! use supershop_core::pricing::calculate_prices_at;
//! use supershop_core::{Agreement, AgreementRow, CustomerContext, Money, PercentageDiscount, Product};
//!
//! let products = vec![Product::new("Laptop", Money::new(200))];
//! let context = CustomerContext::new(vec![Agreement::unbounded(vec![
//!     AgreementRow::for_product("Laptop", PercentageDiscount::from_percent(20)),
//! ])]);
//!
//! let priced = calculate_prices_at(products, Some(&context), Utc::now());
//! assert_eq!(priced[0].price, Money::new(160));
//! ```

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::types::{Agreement, AgreementRow, CustomerContext, PricedProduct, Product};

// =============================================================================
// Pricing Service Seam
// =============================================================================

/// Prices a batch of products for a customer.
///
/// Services that list products depend on this trait rather than on the
/// engine directly, so tests can substitute a canned implementation.
pub trait PricingService: Send + Sync {
    fn calculate_prices(
        &self,
        products: Vec<Product>,
        context: Option<&CustomerContext>,
    ) -> Vec<PricedProduct>;
}

/// The agreement-driven pricing engine.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use supershop_core::clock::FixedClock;
/// use supershop_core::pricing::{AgreementPricing, PricingService};
/// use supershop_core::{Money, Product};
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
/// let engine = AgreementPricing::with_clock(FixedClock::new(now));
///
/// let priced = engine.calculate_prices(vec![Product::new("Milk", Money::new(10))], None);
/// assert_eq!(priced[0].price, Money::new(10));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AgreementPricing<C = SystemClock> {
    clock: C,
}

impl AgreementPricing<SystemClock> {
    /// Engine evaluating agreements against wall-clock time.
    pub fn new() -> Self {
        AgreementPricing { clock: SystemClock }
    }
}

impl<C: Clock> AgreementPricing<C> {
    /// Engine evaluating agreements against the given clock.
    pub fn with_clock(clock: C) -> Self {
        AgreementPricing { clock }
    }
}

impl<C: Clock> PricingService for AgreementPricing<C> {
    fn calculate_prices(
        &self,
        products: Vec<Product>,
        context: Option<&CustomerContext>,
    ) -> Vec<PricedProduct> {
        calculate_prices_at(products, context, self.clock.now())
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Prices products against wall-clock time.
pub fn calculate_prices<I>(products: I, context: Option<&CustomerContext>) -> Vec<PricedProduct>
where
    I: IntoIterator<Item = Product>,
{
    calculate_prices_at(products, context, SystemClock.now())
}

/// Prices products as of `now`.
///
/// Output has the same length and order as the input. Duplicates are
/// priced independently.
pub fn calculate_prices_at<I>(
    products: I,
    context: Option<&CustomerContext>,
    now: DateTime<Utc>,
) -> Vec<PricedProduct>
where
    I: IntoIterator<Item = Product>,
{
    let active: Vec<&Agreement> = context
        .map(|ctx| ctx.active_agreements(now).collect())
        .unwrap_or_default();

    products
        .into_iter()
        .map(|product| best_price(product, &active))
        .collect()
}

/// Finds the lowest price any active row offers for one product.
fn best_price(product: Product, active: &[&Agreement]) -> PricedProduct {
    let mut best = PricedProduct::undiscounted(product);

    let rows = active.iter().flat_map(|agreement| agreement.rows.iter());
    for row in rows {
        if !row.percentage_discount.is_plausible() || !row_matches(row, &best.product) {
            continue;
        }

        let candidate = best
            .product
            .base_price
            .apply_percentage_discount(row.percentage_discount);

        if candidate < best.price {
            best.price = candidate;
            best.applied_discount = Some(row.percentage_discount);
        }
    }

    best
}

/// Checks whether any populated match field of `row` contains the product
/// name.
fn row_matches(row: &AgreementRow, product: &Product) -> bool {
    let name = product.name.as_str();

    [
        row.product_match.as_deref(),
        row.manufacturer_match.as_deref(),
        row.category_match.as_deref(),
    ]
    .into_iter()
    .any(|pattern| criterion_matches(pattern, name))
}

/// Case-insensitive "pattern contains subject". Blank text on either side
/// never matches.
fn criterion_matches(pattern: Option<&str>, subject: &str) -> bool {
    let Some(pattern) = pattern.filter(|p| !p.trim().is_empty()) else {
        return false;
    };
    if subject.trim().is_empty() {
        return false;
    }

    pattern.to_lowercase().contains(&subject.to_lowercase())
}

// =============================================================================
// Unit Tests
// =============================================================================
