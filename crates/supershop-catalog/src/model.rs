//! # Catalog Records
//!
//! The shapes a catalog snapshot is made of.
//!
//! ## Snapshot Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CatalogSnapshot (JSON)                                                 │
//! │  ├── products:   [CatalogProduct]    id, name, base_price, added_at    │
//! │  ├── categories: [Category]          trending order = file order       │
//! │  └── customers:  [CustomerAgreements] customer_id → agreements         │
//! │                                                                         │
//! │  CatalogProduct ──to_product()──► supershop_core::Product              │
//! │  (ids and timestamps stay here; the engine never sees them)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use supershop_core::{Agreement, Money, Product};

/// A product as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// UUID
    pub id: String,

    pub name: String,

    pub base_price: Money,

    #[serde(default)]
    pub manufacturer: String,

    #[serde(default)]
    pub category: String,

    /// When the product entered the catalog. Drives "new products".
    pub added_at: DateTime<Utc>,
}

impl CatalogProduct {
    /// Maps the record into the pricing engine's product shape.
    pub fn to_product(&self) -> Product {
        Product::new(self.name.clone(), self.base_price)
            .with_manufacturer(self.manufacturer.clone())
            .with_category(self.category.clone())
    }
}

impl From<&CatalogProduct> for Product {
    fn from(record: &CatalogProduct) -> Self {
        record.to_product()
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// All agreements negotiated with one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAgreements {
    pub customer_id: String,

    #[serde(default)]
    pub agreements: Vec<Agreement>,
}

/// A full catalog as loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub products: Vec<CatalogProduct>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub customers: Vec<CustomerAgreements>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_product_keeps_names() {
        let record: CatalogProduct = serde_json::from_str(
            r#"{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "name": "Skim Milk",
                "base_price": 10,
                "manufacturer": "Arla",
                "category": "Dairy",
                "added_at": "2024-05-01T08:00:00Z"
            }"#,
        )
        .unwrap();

        let product = Product::from(&record);
        assert_eq!(product.name, "Skim Milk");
        assert_eq!(product.base_price, Money::new(10));
        assert_eq!(product.manufacturer_name, "Arla");
        assert_eq!(product.category_name, "Dairy");
    }

    #[test]
    fn test_optional_fields_default() {
        let record: CatalogProduct = serde_json::from_str(
            r#"{"id":"x","name":"Laptop","base_price":200,"added_at":"2024-05-01T08:00:00Z"}"#,
        )
        .unwrap();
        assert!(record.manufacturer.is_empty());
        assert!(record.category.is_empty());

        let snapshot: CatalogSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, CatalogSnapshot::default());
    }
}
