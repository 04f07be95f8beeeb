//! # Money Module
//!
//! Provides the `Money` type for catalog prices.
//!
//! ## Why Whole-Unit Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CATALOG PRICES ARE WHOLE NUMBERS                                       │
//! │                                                                         │
//! │  The storefront lists prices without a minor unit:                      │
//! │    Laptop       200                                                     │
//! │    Video Game    50                                                     │
//! │    Milk          10                                                     │
//! │                                                                         │
//! │  A discounted price is computed exactly (decimal arithmetic) and then   │
//! │  rounded ONCE back to a whole number:                                   │
//! │    200 × (1 - 20/100) = 160.0 → 160                                     │
//! │     25 × (1 - 10/100) =  22.5 →  22  (half to even)                     │
//! │                                                                         │
//! │  No floating point is involved anywhere on that path.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use supershop_core::money::Money;
//! use supershop_core::types::PercentageDiscount;
//!
//! let price = Money::new(200);
//! let discounted = price.apply_percentage_discount(PercentageDiscount::from_percent(20));
//! assert_eq!(discounted.amount(), 160);
//!
//! let total: Money = [Money::new(160), Money::new(45), Money::new(9)].into_iter().sum();
//! assert_eq!(total.amount(), 214);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

use crate::types::PercentageDiscount;

// =============================================================================
// Money Type
// =============================================================================

/// A price in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: differences between prices (savings) stay representable
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Ord**: the pricing engine picks the lowest candidate with plain `<`
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.base_price ──► pricing engine ──► PricedProduct.price          │
/// │                              ▲                                          │
/// │                              │                                          │
/// │              AgreementRow.percentage_discount                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use supershop_core::money::Money;
    ///
    /// let price = Money::new(137);
    /// assert_eq!(price.amount(), 137);
    /// ```
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(amount) => Some(Money(amount)),
            None => None,
        }
    }

    /// Subtracts two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, other: Money) -> Option<Money> {
        match self.0.checked_sub(other.0) {
            Some(amount) => Some(Money(amount)),
            None => None,
        }
    }

    /// Applies a percentage discount and returns the rounded discounted price.
    ///
    /// ## Formula
    /// `amount × (100 - pct) / 100`, evaluated in exact decimal arithmetic,
    /// then rounded to a whole unit with Bankers Rounding.
    ///
    /// ## Bankers Rounding Explained
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  BANKERS ROUNDING (Round Half to Even)                              │
    /// │                                                                     │
    /// │  Only exact .5 results are affected:                                │
    /// │    22.5 → 22,  31.5 → 32,  0.5 → 0,  1.5 → 2                        │
    /// │                                                                     │
    /// │  Everything else rounds to the nearest whole unit:                  │
    /// │    22.4 → 22,  22.6 → 23                                            │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// This method does NOT judge whether the discount is plausible; a 150%
    /// discount yields a negative amount. The pricing engine filters such rows
    /// out before calling this.
    ///
    /// Returns `self` unchanged if the intermediate value does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use supershop_core::money::Money;
    /// use supershop_core::types::PercentageDiscount;
    ///
    /// let ten_off = PercentageDiscount::from_percent(10);
    /// assert_eq!(Money::new(25).apply_percentage_discount(ten_off).amount(), 22);
    /// assert_eq!(Money::new(35).apply_percentage_discount(ten_off).amount(), 32);
    /// ```
    pub fn apply_percentage_discount(&self, discount: PercentageDiscount) -> Money {
        let remaining = Decimal::ONE_HUNDRED - discount.value();

        Decimal::from(self.0)
            .checked_mul(remaining)
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .map(|exact| exact.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven))
            .and_then(|rounded| rounded.to_i64())
            .map(Money)
            .unwrap_or(*self)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// `+`, `+=`, `-` and `sum()` saturate at the i64 bounds instead of
// panicking. Use `checked_add` / `checked_sub` to detect overflow.

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Summing prices (e.g. a listing total).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_and_amount() {
        let money = Money::new(137);
        assert_eq!(money.amount(), 137);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(214)), "214");
        assert_eq!(format!("{}", Money::new(-5)), "-5");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(200);
        let b = Money::new(40);

        assert_eq!((a + b).amount(), 240);
        assert_eq!((a - b).amount(), 160);

        let mut c = a;
        c += b;
        assert_eq!(c.amount(), 240);
    }

    #[test]
    fn test_overflow_saturates_or_reports() {
        let max = Money::new(i64::MAX);
        let one = Money::new(1);

        assert_eq!(max + one, max);
        assert_eq!(Money::new(i64::MIN) - one, Money::new(i64::MIN));

        let mut running = max;
        running += one;
        assert_eq!(running, max);

        let total: Money = [max, max, Money::new(10)].iter().sum();
        assert_eq!(total, max);

        assert_eq!(max.checked_add(one), None);
        assert_eq!(Money::new(i64::MIN).checked_sub(one), None);
        assert_eq!(Money::new(200).checked_add(Money::new(14)), Some(Money::new(214)));
        assert_eq!(Money::new(200).checked_sub(Money::new(40)), Some(Money::new(160)));
    }

    #[test]
    fn test_sum() {
        let prices = vec![Money::new(160), Money::new(45), Money::new(9)];
        let by_ref: Money = prices.iter().sum();
        let by_value: Money = prices.into_iter().sum();
        assert_eq!(by_ref.amount(), 214);
        assert_eq!(by_value, by_ref);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_percentage_discount_exact() {
        let laptop = Money::new(200);
        assert_eq!(
            laptop
                .apply_percentage_discount(PercentageDiscount::from_percent(20))
                .amount(),
            160
        );
        assert_eq!(
            laptop
                .apply_percentage_discount(PercentageDiscount::from_percent(10))
                .amount(),
            180
        );
    }

    /// Pins the midpoint rule: exact halves go to the even neighbour.
    #[test]
    fn test_percentage_discount_rounds_half_to_even() {
        let ten = PercentageDiscount::from_percent(10);
        assert_eq!(Money::new(25).apply_percentage_discount(ten).amount(), 22); // 22.5
        assert_eq!(Money::new(35).apply_percentage_discount(ten).amount(), 32); // 31.5
        assert_eq!(Money::new(5).apply_percentage_discount(ten).amount(), 4); // 4.5
        assert_eq!(Money::new(15).apply_percentage_discount(ten).amount(), 14); // 13.5 -> 14
    }

    #[test]
    fn test_percentage_discount_rounds_to_nearest() {
        // 137 × 0.67 = 91.79 → 92
        let off = PercentageDiscount::new(dec!(33));
        assert_eq!(Money::new(137).apply_percentage_discount(off).amount(), 92);

        // 137 × 0.875 = 119.875 → 120
        let off = PercentageDiscount::new(dec!(12.5));
        assert_eq!(Money::new(137).apply_percentage_discount(off).amount(), 120);

        // 10 × 0.9 = 9 exactly (the Milk case)
        let off = PercentageDiscount::from_percent(10);
        assert_eq!(Money::new(10).apply_percentage_discount(off).amount(), 9);
    }

    #[test]
    fn test_full_discount_is_free() {
        let all = PercentageDiscount::from_percent(100);
        assert!(Money::new(999).apply_percentage_discount(all).is_zero());
    }

    #[test]
    fn test_out_of_range_discount_is_not_judged_here() {
        let over = PercentageDiscount::from_percent(101);
        assert_eq!(Money::new(100).apply_percentage_discount(over).amount(), -1);

        let negative = PercentageDiscount::from_percent(-1);
        assert_eq!(Money::new(100).apply_percentage_discount(negative).amount(), 101);
    }

    #[test]
    fn test_huge_amounts_do_not_panic() {
        let off = PercentageDiscount::from_percent(50);
        let price = Money::new(i64::MAX);
        // Still representable as a Decimal; result fits in i64.
        let discounted = price.apply_percentage_discount(off);
        assert!(discounted <= price);
    }
}
