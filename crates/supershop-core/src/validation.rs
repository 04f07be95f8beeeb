//! # Validation Module
//!
//! Data checks for catalog records and discount agreements.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog loading (supershop-catalog)                          │
//! │  ├── Product ids, names, base prices  → reject the snapshot            │
//! │  └── New agreements via add_agreement → reject the agreement           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront                                                   │
//! │  └── agreement_issues() on the customer's agreements → warn! only      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing engine                                               │
//! │  └── NO validation errors. Implausible rows are simply skipped.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use supershop_core::validation::{validate_percentage_discount, validate_product_name};
//! use supershop_core::PercentageDiscount;
//!
//! validate_product_name("Laptop").unwrap();
//! assert!(validate_percentage_discount(PercentageDiscount::from_percent(101)).is_err());
//! ```

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Agreement, AgreementRow, PercentageDiscount};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product, category or manufacturer name accepted.
pub const MAX_NAME_LENGTH: usize = 200;

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_NAME_LENGTH`] characters
///
/// ## Example
/// ```rust
/// use supershop_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Video Game").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_name("name", name)
}

/// Validates a category name. Same rules as product names.
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    validate_name("category name", name)
}

fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a base price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_base_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "base_price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use supershop_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Agreement Validators
// =============================================================================

/// Validates a percentage discount.
///
/// ## Rules
/// - Must be greater than 0 and at most 100
///
/// The engine applies the same rule silently; this is the loud version for
/// authoring and auditing.
pub fn validate_percentage_discount(discount: PercentageDiscount) -> ValidationResult<()> {
    if !discount.is_plausible() {
        return Err(ValidationError::OutOfRange {
            field: "percentage_discount".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates that a validity window does not end before it starts.
///
/// Open-ended windows are always valid.
pub fn validate_validity_window(
    valid_from: Option<DateTime<Utc>>,
    valid_to: Option<DateTime<Utc>>,
) -> ValidationResult<()> {
    match (valid_from, valid_to) {
        (Some(from), Some(to)) if to < from => Err(ValidationError::InvalidWindow {
            valid_from: from.to_rfc3339(),
            valid_to: to.to_rfc3339(),
        }),
        _ => Ok(()),
    }
}

/// Validates one agreement row.
///
/// ## Rules
/// - At least one non-blank match field
/// - Plausible percentage discount
pub fn validate_agreement_row(index: usize, row: &AgreementRow) -> ValidationResult<()> {
    if !row.has_match_criteria() {
        return Err(ValidationError::NoMatchCriteria { index });
    }

    validate_percentage_discount(row.percentage_discount)
}

/// Collects every problem with an agreement.
///
/// Used to warn about bad upstream data without rejecting it.
pub fn agreement_issues(agreement: &Agreement) -> Vec<ValidationError> {
    let window = validate_validity_window(agreement.valid_from, agreement.valid_to).err();

    let rows = agreement
        .rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| validate_agreement_row(index, row).err());

    window.into_iter().chain(rows).collect()
}

/// Validates an agreement, failing on the first problem.
pub fn validate_agreement(agreement: &Agreement) -> ValidationResult<()> {
    match agreement_issues(agreement).into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(()),
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
    fn test_validate_product_name() {
        assert!(validate_product_name("Laptop").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
        assert!(validate_product_name(&"Ö".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_category_name() {
        assert!(validate_category_name("Dairy").is_ok());
        assert_eq!(
            validate_category_name(""),
            Err(ValidationError::Required {
                field: "category name".to_string()
            })
        );
    }

    #[test]
    fn test_validate_base_price() {
        assert!(validate_base_price(Money::new(0)).is_ok());
        assert!(validate_base_price(Money::new(200)).is_ok());
        assert!(validate_base_price(Money::new(-1)).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("123").is_err());
    }

    #[test]
    fn test_validate_percentage_discount() {
        assert!(validate_percentage_discount(PercentageDiscount::from_percent(20)).is_ok());
        assert!(validate_percentage_discount(PercentageDiscount::from_percent(100)).is_ok());
        assert!(validate_percentage_discount(PercentageDiscount::new(dec!(0.5))).is_ok());

        assert!(validate_percentage_discount(PercentageDiscount::from_percent(0)).is_err());
        assert!(validate_percentage_discount(PercentageDiscount::from_percent(101)).is_err());
        assert!(validate_percentage_discount(PercentageDiscount::from_percent(-1)).is_err());
    }

    #[test]
    fn test_validate_validity_window() {
        let now = noon();
        assert!(validate_validity_window(None, None).is_ok());
        assert!(validate_validity_window(Some(now), None).is_ok());
        assert!(validate_validity_window(Some(now), Some(now)).is_ok());
        assert!(validate_validity_window(Some(now), Some(now - Duration::seconds(1))).is_err());
    }

    #[test]
    fn test_agreement_issues_collects_everything() {
        let now = noon();
        let agreement = Agreement::between(
            now,
            now - Duration::hours(1),
            vec![
                AgreementRow::for_product("Laptop", PercentageDiscount::from_percent(20)),
                AgreementRow::for_product("Laptop", PercentageDiscount::from_percent(150)),
                AgreementRow {
                    percentage_discount: PercentageDiscount::from_percent(10),
                    ..Default::default()
                },
            ],
        );

        let issues = agreement_issues(&agreement);
        assert_eq!(issues.len(), 3);
        assert!(matches!(issues[0], ValidationError::InvalidWindow { .. }));
        assert!(matches!(issues[1], ValidationError::OutOfRange { .. }));
        assert_eq!(issues[2], ValidationError::NoMatchCriteria { index: 2 });

        assert!(matches!(
            validate_agreement(&agreement),
            Err(ValidationError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_clean_agreement_has_no_issues() {
        let agreement = Agreement::unbounded(vec![AgreementRow::for_category(
            "Dairy",
            PercentageDiscount::from_percent(10),
        )]);
        assert!(agreement_issues(&agreement).is_empty());
        assert!(validate_agreement(&agreement).is_ok());
    }
}
