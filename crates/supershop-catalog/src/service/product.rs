//! # Product Service
//!
//! Lists the newest products with customer-specific prices.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get_new_products(count, context)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductSource::newest_products(count)   ← may fail (CatalogError)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogProduct → Product                ← ids/timestamps dropped       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PricingService::calculate_prices        ← never fails                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<PricedProduct> (source order)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use supershop_core::{CustomerContext, PricedProduct, PricingService, Product};
use tracing::debug;

use crate::error::CatalogResult;
use crate::source::ProductSource;

/// Product listing over a [`ProductSource`] and a [`PricingService`].
#[derive(Debug, Clone)]
pub struct ProductService<S, P> {
    source: S,
    pricing: P,
}

impl<S: ProductSource, P: PricingService> ProductService<S, P> {
    /// Creates a new ProductService.
    pub fn new(source: S, pricing: P) -> Self {
        ProductService { source, pricing }
    }

    /// Returns the `count` newest products, priced for `context`.
    ///
    /// `None` means an anonymous visitor: every product keeps its base
    /// price.
    pub fn get_new_products(
        &self,
        count: usize,
        context: Option<&CustomerContext>,
    ) -> CatalogResult<Vec<PricedProduct>> {
        let products: Vec<Product> = self
            .source
            .newest_products(count)?
            .iter()
            .take(count)
            .map(Product::from)
            .collect();

        debug!(
            count = products.len(),
            customer_id = context.and_then(|c| c.customer_id.as_deref()),
            has_context = context.is_some(),
            "Pricing new products"
        );

        Ok(self.pricing.calculate_prices(products, context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use supershop_core::clock::FixedClock;
    use supershop_core::{Agreement, AgreementPricing, AgreementRow, Money, PercentageDiscount};

    use crate::error::CatalogError;
    use crate::model::CatalogProduct;

    struct Fixed(Vec<CatalogProduct>);

    impl ProductSource for Fixed {
        fn newest_products(&self, count: usize) -> CatalogResult<Vec<CatalogProduct>> {
            Ok(self.0.iter().take(count).cloned().collect())
        }
    }

    struct Broken;

    impl ProductSource for Broken {
        fn newest_products(&self, _count: usize) -> CatalogResult<Vec<CatalogProduct>> {
            Err(CatalogError::not_found("Product", "all"))
        }
    }

    /// Everything costs 1 for known customers.
    struct OneForCustomers;

    impl PricingService for OneForCustomers {
        fn calculate_prices(
            &self,
            products: Vec<Product>,
            context: Option<&CustomerContext>,
        ) -> Vec<PricedProduct> {
            products
                .into_iter()
                .map(|product| {
                    let mut priced = PricedProduct::undiscounted(product);
                    if context.is_some() {
                        priced.price = Money::new(1);
                    }
                    priced
                })
                .collect()
        }
    }

    fn record(name: &str, price: i64, category: &str) -> CatalogProduct {
        CatalogProduct {
            id: name.to_lowercase(),
            name: name.to_string(),
            base_price: Money::new(price),
            manufacturer: String::new(),
            category: category.to_string(),
            added_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
        }
    }

    fn catalog() -> Fixed {
        Fixed(vec![
            record("Laptop", 200, "Computers"),
            record("Video Game", 50, "Games"),
            record("Milk", 10, "Dairy"),
        ])
    }

    #[test]
    fn test_delegates_to_pricing_service() {
        let service = ProductService::new(catalog(), OneForCustomers);

        let anonymous = service.get_new_products(3, None).unwrap();
        assert!(anonymous.iter().all(|p| p.price == p.base_price()));

        let context = CustomerContext::default();
        let known = service.get_new_products(3, Some(&context)).unwrap();
        assert!(known.iter().all(|p| p.price == Money::new(1)));
    }

    #[test]
    fn test_keeps_source_order_and_count() {
        let service = ProductService::new(catalog(), OneForCustomers);
        let names: Vec<String> = service
            .get_new_products(2, None)
            .unwrap()
            .into_iter()
            .map(|p| p.product.name)
            .collect();
        assert_eq!(names, ["Laptop", "Video Game"]);
    }

    #[test]
    fn test_with_agreement_engine() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let pricing = AgreementPricing::with_clock(FixedClock::new(now));
        let service = ProductService::new(catalog(), pricing);

        let context = CustomerContext::new(vec![
            Agreement::unbounded(vec![AgreementRow::for_category(
                "Milk & Dairy",
                PercentageDiscount::from_percent(10),
            )]),
            Agreement::between(
                now + Duration::days(1),
                now + Duration::days(2),
                vec![AgreementRow::for_product("Laptop", PercentageDiscount::from_percent(50))],
            ),
        ]);

        let priced = service.get_new_products(3, Some(&context)).unwrap();
        let prices: Vec<i64> = priced.iter().map(|p| p.price.amount()).collect();
        assert_eq!(prices, [200, 50, 9]);
        assert_eq!(
            priced[2].applied_discount,
            Some(PercentageDiscount::from_percent(10))
        );
    }

    #[test]
    fn test_source_error_propagates() {
        let service = ProductService::new(Broken, OneForCustomers);
        assert!(matches!(
            service.get_new_products(3, None),
            Err(CatalogError::NotFound { .. })
        ));
    }
}
