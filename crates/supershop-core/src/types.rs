//! # Domain Types
//!
//! Core domain types used by the pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                         │
//! │  │ CustomerContext │ 1───*  │    Agreement    │ 1───*  ┌──────────────┐ │
//! │  │  ─────────────  │        │  ─────────────  │        │ AgreementRow │ │
//! │  │  customer_id    │        │  valid_from     │        │ ──────────── │ │
//! │  │  agreements     │        │  valid_to       │        │ *_match      │ │
//! │  └─────────────────┘        │  rows           │        │ percentage   │ │
//! │                             └─────────────────┘        └──────┬───────┘ │
//! │                                                               │ matches │
//! │  ┌─────────────────┐        ┌─────────────────┐               │ (query  │
//! │  │    Product      │ ─────► │  PricedProduct  │ ◄─────────────┘  time)  │
//! │  │  name           │ engine │  product        │                         │
//! │  │  base_price     │        │  price          │                         │
//! │  │  manufacturer   │        │  applied_disc.  │                         │
//! │  │  category       │        └─────────────────┘                         │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Agreements are read-only from the engine's point of view. Products go in
//! by reference and come back as new [`PricedProduct`] values.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Percentage Discount
// =============================================================================

/// A discount expressed in percent (`20` = 20% off).
///
/// ## Why Decimal?
/// Agreement authors may write fractional discounts (`12.5`). They may also
/// write nonsense (`150`, `-5`); the value is stored as given and judged by
/// [`PercentageDiscount::is_plausible`] at pricing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PercentageDiscount(Decimal);

impl PercentageDiscount {
    /// Creates a discount from an exact decimal percentage.
    #[inline]
    pub const fn new(pct: Decimal) -> Self {
        PercentageDiscount(pct)
    }

    /// Creates a discount from a whole percentage (for convenience).
    #[inline]
    pub fn from_percent(pct: i64) -> Self {
        PercentageDiscount(Decimal::from(pct))
    }

    /// Returns the percentage.
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Whether the discount can legitimately reduce a price.
    ///
    /// ## Rules
    /// - `0 < pct <= 100`
    /// - `0` is not plausible: it would never lower a price anyway
    /// - `100` is plausible: the item becomes free
    ///
    /// ## Example
    /// ```rust
    /// use supershop_core::types::PercentageDiscount;
    ///
    /// assert!(PercentageDiscount::from_percent(20).is_plausible());
    /// assert!(PercentageDiscount::from_percent(100).is_plausible());
    /// assert!(!PercentageDiscount::from_percent(101).is_plausible());
    /// assert!(!PercentageDiscount::from_percent(-1).is_plausible());
    /// ```
    pub fn is_plausible(&self) -> bool {
        self.0 > Decimal::ZERO && self.0 <= Decimal::ONE_HUNDRED
    }
}

impl Default for PercentageDiscount {
    fn default() -> Self {
        PercentageDiscount(Decimal::ZERO)
    }
}

impl From<Decimal> for PercentageDiscount {
    fn from(pct: Decimal) -> Self {
        PercentageDiscount(pct)
    }
}

impl std::fmt::Display for PercentageDiscount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

// =============================================================================
// Product
// =============================================================================

/// The pricing view of a catalog product.
///
/// Everything the engine needs to match agreement rows against, nothing more.
/// Catalog records (ids, timestamps) are mapped into this shape by the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Display name, also the only text agreement rows match against.
    pub name: String,

    /// Undiscounted price. Never modified by the engine.
    pub base_price: Money,

    /// Manufacturer display name (may be empty).
    #[serde(default)]
    pub manufacturer_name: String,

    /// Category display name (may be empty).
    #[serde(default)]
    pub category_name: String,
}

impl Product {
    /// Creates a product with only a name and base price.
    ///
    /// ## Example
    /// ```rust
    /// use supershop_core::{Money, Product};
    ///
    /// let milk = Product::new("Milk", Money::new(10))
    ///     .with_manufacturer("Arla")
    ///     .with_category("Dairy");
    /// assert_eq!(milk.category_name, "Dairy");
    /// ```
    pub fn new(name: impl Into<String>, base_price: Money) -> Self {
        Product {
            name: name.into(),
            base_price,
            manufacturer_name: String::new(),
            category_name: String::new(),
        }
    }

    /// Sets the manufacturer name.
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer_name = manufacturer.into();
        self
    }

    /// Sets the category name.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category_name = category.into();
        self
    }
}

// =============================================================================
// Priced Product
// =============================================================================

/// A product together with the price the engine computed for it.
///
/// ## Invariants
/// - `price <= product.base_price`
/// - `applied_discount.is_none()` ⇔ `price == product.base_price`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricedProduct {
    #[serde(flatten)]
    pub product: Product,

    /// Effective price after the best applicable discount.
    pub price: Money,

    /// Percentage of the agreement row that produced `price`.
    #[ts(as = "Option<String>")]
    pub applied_discount: Option<PercentageDiscount>,
}

impl PricedProduct {
    /// A priced product that kept its base price.
    pub fn undiscounted(product: Product) -> Self {
        let price = product.base_price;
        PricedProduct {
            product,
            price,
            applied_discount: None,
        }
    }

    /// Returns the base price.
    #[inline]
    pub fn base_price(&self) -> Money {
        self.product.base_price
    }

    /// How much the customer saves compared to the base price.
    #[inline]
    pub fn savings(&self) -> Money {
        self.product.base_price - self.price
    }

    /// Checks if a discount lowered the price.
    #[inline]
    pub fn is_discounted(&self) -> bool {
        self.price < self.product.base_price
    }
}

// =============================================================================
// Agreement Row
// =============================================================================

/// One match-and-discount clause of an [`Agreement`].
///
/// Each `*_match` field is independent. An absent or blank field never
/// matches; a row with several fields set matches when any one of them does.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgreementRow {
    #[serde(default)]
    pub manufacturer_match: Option<String>,

    #[serde(default)]
    pub product_match: Option<String>,

    #[serde(default)]
    pub category_match: Option<String>,

    pub percentage_discount: PercentageDiscount,
}

impl AgreementRow {
    /// A row matching on product name.
    pub fn for_product(pattern: impl Into<String>, discount: PercentageDiscount) -> Self {
        AgreementRow {
            product_match: Some(pattern.into()),
            percentage_discount: discount,
            ..Default::default()
        }
    }

    /// A row matching on manufacturer.
    pub fn for_manufacturer(pattern: impl Into<String>, discount: PercentageDiscount) -> Self {
        AgreementRow {
            manufacturer_match: Some(pattern.into()),
            percentage_discount: discount,
            ..Default::default()
        }
    }

    /// A row matching on category.
    pub fn for_category(pattern: impl Into<String>, discount: PercentageDiscount) -> Self {
        AgreementRow {
            category_match: Some(pattern.into()),
            percentage_discount: discount,
            ..Default::default()
        }
    }

    /// Checks if at least one match field holds non-blank text.
    pub fn has_match_criteria(&self) -> bool {
        [
            &self.manufacturer_match,
            &self.product_match,
            &self.category_match,
        ]
        .into_iter()
        .any(|field| field.as_deref().is_some_and(|text| !text.trim().is_empty()))
    }
}

// =============================================================================
// Agreement
// =============================================================================

/// A negotiated discount contract.
///
/// ## Validity Window
/// ```text
///        valid_from                         valid_to
///  ──────────[════════════ active ════════════]──────────► time
///            ▲                                ▲
///       inclusive                        inclusive
///
///  None on either side = unbounded on that side
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Agreement {
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,

    #[serde(default)]
    pub valid_to: Option<DateTime<Utc>>,

    #[serde(default)]
    pub rows: Vec<AgreementRow>,
}

impl Agreement {
    /// An agreement that is always valid.
    pub fn unbounded(rows: Vec<AgreementRow>) -> Self {
        Agreement {
            valid_from: None,
            valid_to: None,
            rows,
        }
    }

    /// An agreement valid between two instants (both inclusive).
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>, rows: Vec<AgreementRow>) -> Self {
        Agreement {
            valid_from: Some(from),
            valid_to: Some(to),
            rows,
        }
    }

    /// Checks if the validity window contains `now`.
    ///
    /// Both bounds are inclusive; a missing bound does not restrict.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{Duration, Utc};
    /// use supershop_core::Agreement;
    ///
    /// let now = Utc::now();
    /// let agreement = Agreement::between(now, now + Duration::hours(1), vec![]);
    /// assert!(agreement.is_active_at(now));
    /// assert!(!agreement.is_active_at(now - Duration::seconds(1)));
    /// assert!(Agreement::unbounded(vec![]).is_active_at(now));
    /// ```
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        let started = self.valid_from.map_or(true, |from| from <= now);
        let not_ended = self.valid_to.map_or(true, |to| now <= to);
        started && not_ended
    }
}

// =============================================================================
// Customer Context
// =============================================================================

/// The agreements visible for the current customer.
///
/// An anonymous visitor has no context at all (`Option<&CustomerContext>` is
/// `None` at the engine boundary).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerContext {
    /// Used for log correlation only; pricing never looks at it.
    #[serde(default)]
    pub customer_id: Option<String>,

    #[serde(default)]
    pub agreements: Vec<Agreement>,
}

impl CustomerContext {
    /// Creates a context from a set of agreements.
    pub fn new(agreements: Vec<Agreement>) -> Self {
        CustomerContext {
            customer_id: None,
            agreements,
        }
    }

    /// Sets the customer id.
    pub fn for_customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Iterates over agreements active at `now`.
    pub fn active_agreements(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Agreement> {
        self.agreements
            .iter()
            .filter(move |agreement| agreement.is_active_at(now))
    }

    /// Total number of rows across all agreements.
    pub fn row_count(&self) -> usize {
        self.agreements.iter().map(|a| a.rows.len()).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_discount_plausibility() {
        assert!(PercentageDiscount::new(dec!(0.01)).is_plausible());
        assert!(PercentageDiscount::new(dec!(99.99)).is_plausible());
        assert!(PercentageDiscount::from_percent(100).is_plausible());

        assert!(!PercentageDiscount::from_percent(0).is_plausible());
        assert!(!PercentageDiscount::new(dec!(100.01)).is_plausible());
        assert!(!PercentageDiscount::from_percent(-1).is_plausible());
    }

    #[test]
    fn test_discount_display() {
        assert_eq!(PercentageDiscount::from_percent(20).to_string(), "20%");
        assert_eq!(PercentageDiscount::new(dec!(12.50)).to_string(), "12.5%");
    }

    #[test]
    fn test_discount_deserializes_from_number_or_string() {
        let row: AgreementRow =
            serde_json::from_str(r#"{"product_match":"Milk","percentage_discount":10}"#).unwrap();
        assert_eq!(row.percentage_discount, PercentageDiscount::from_percent(10));

        let row: AgreementRow =
            serde_json::from_str(r#"{"category_match":"Dairy","percentage_discount":"12.5"}"#)
                .unwrap();
        assert_eq!(row.percentage_discount, PercentageDiscount::new(dec!(12.5)));
        assert!(row.manufacturer_match.is_none());
    }

    #[test]
    fn test_row_match_criteria() {
        let discount = PercentageDiscount::from_percent(5);
        assert!(AgreementRow::for_product("Milk", discount).has_match_criteria());
        assert!(AgreementRow::for_category("Dairy", discount).has_match_criteria());
        assert!(!AgreementRow::for_manufacturer("   ", discount).has_match_criteria());
        assert!(!AgreementRow::default().has_match_criteria());
    }

    #[test]
    fn test_window_inclusive_bounds() {
        let now = noon();
        let starts_now = Agreement::between(now, now + Duration::hours(1), vec![]);
        let ends_now = Agreement::between(now - Duration::hours(1), now, vec![]);
        let instant = Agreement::between(now, now, vec![]);

        assert!(starts_now.is_active_at(now));
        assert!(ends_now.is_active_at(now));
        assert!(instant.is_active_at(now));

        assert!(!starts_now.is_active_at(now - Duration::nanoseconds(1)));
        assert!(!ends_now.is_active_at(now + Duration::nanoseconds(1)));
    }

    #[test]
    fn test_window_future_and_past() {
        let now = noon();
        let future = Agreement::between(now + Duration::hours(1), now + Duration::hours(2), vec![]);
        let past = Agreement::between(now - Duration::hours(2), now - Duration::hours(1), vec![]);

        assert!(!future.is_active_at(now));
        assert!(!past.is_active_at(now));
    }

    #[test]
    fn test_window_open_ends() {
        let now = noon();
        let open_start = Agreement {
            valid_from: None,
            valid_to: Some(now + Duration::hours(1)),
            rows: vec![],
        };
        let open_end = Agreement {
            valid_from: Some(now - Duration::hours(1)),
            valid_to: None,
            rows: vec![],
        };

        assert!(open_start.is_active_at(now));
        assert!(open_end.is_active_at(now));
        assert!(Agreement::unbounded(vec![]).is_active_at(now));
        assert!(!open_end.is_active_at(now - Duration::hours(2)));
    }

    #[test]
    fn test_inverted_window_is_never_active() {
        let now = noon();
        let inverted = Agreement::between(now + Duration::hours(1), now - Duration::hours(1), vec![]);
        assert!(!inverted.is_active_at(now));
    }

    #[test]
    fn test_context_active_agreements() {
        let now = noon();
        let discount = PercentageDiscount::from_percent(10);
        let context = CustomerContext::new(vec![
            Agreement::unbounded(vec![AgreementRow::for_product("Milk", discount)]),
            Agreement::between(
                now + Duration::hours(1),
                now + Duration::hours(2),
                vec![AgreementRow::for_product("Laptop", discount)],
            ),
        ])
        .for_customer("c-1");

        assert_eq!(context.active_agreements(now).count(), 1);
        assert_eq!(context.row_count(), 2);
        assert_eq!(context.customer_id.as_deref(), Some("c-1"));
    }

    #[test]
    fn test_priced_product_helpers() {
        let product = Product::new("Laptop", Money::new(200));
        let undiscounted = PricedProduct::undiscounted(product.clone());
        assert_eq!(undiscounted.price, Money::new(200));
        assert!(!undiscounted.is_discounted());
        assert!(undiscounted.savings().is_zero());

        let discounted = PricedProduct {
            product,
            price: Money::new(160),
            applied_discount: Some(PercentageDiscount::from_percent(20)),
        };
        assert!(discounted.is_discounted());
        assert_eq!(discounted.savings(), Money::new(40));
        assert_eq!(discounted.base_price(), Money::new(200));
    }

    #[test]
    fn test_priced_product_serializes_flat() {
        let priced = PricedProduct::undiscounted(Product::new("Milk", Money::new(10)));
        let json = serde_json::to_value(&priced).unwrap();
        assert_eq!(json["name"], "Milk");
        assert_eq!(json["base_price"], 10);
        assert_eq!(json["price"], 10);
        assert!(json["applied_discount"].is_null());
    }
}
