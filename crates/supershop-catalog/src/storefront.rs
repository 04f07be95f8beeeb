//! # Storefront
//!
//! Assembles the home page: trending categories and the newest products,
//! priced for whoever is looking.
//!
//! ## Home Page Assembly
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  home_index(customer_id)                                                │
//! │       │                                                                 │
//! │       ├── None ─────────────────────────► context = None (base prices) │
//! │       └── Some(id) ─► AgreementSource ──► context (empty if unknown)    │
//! │                              │                                          │
//! │                              └── agreement_issues() ──► warn! per issue │
//! │       │                                                                 │
//! │       ├── CategoryService::get_trending_categories(trending_amount)    │
//! │       └── ProductService::get_new_products(product_amount, context)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  HomeIndex { trending_categories: [CategoryView],                      │
//! │              new_products:        [ProductBox] }                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bad agreement data is logged here and nowhere else. The engine stays
//! silent and simply ignores what it cannot apply.

use serde::{Deserialize, Serialize};
use supershop_core::validation::agreement_issues;
use supershop_core::{CustomerContext, Money, PricedProduct, PricingService};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::CatalogResult;
use crate::model::Category;
use crate::service::{CategoryService, ProductService};
use crate::settings::HomeSettings;
use crate::source::{AgreementSource, CategorySource, ProductSource};

// =============================================================================
// View Models
// =============================================================================

/// A category tile on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryView {
    pub name: String,
    pub description: Option<String>,
}

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        CategoryView {
            name: category.name,
            description: category.description,
        }
    }
}

/// A product tile on the home page.
///
/// `base_price` is shown struck through when `is_discounted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductBox {
    pub name: String,
    pub base_price: Money,
    pub price: Money,
    pub manufacturer: String,
    pub category: String,
    pub is_discounted: bool,
}

impl From<PricedProduct> for ProductBox {
    fn from(priced: PricedProduct) -> Self {
        let is_discounted = priced.is_discounted();
        let PricedProduct { product, price, .. } = priced;

        ProductBox {
            name: product.name,
            base_price: product.base_price,
            price,
            manufacturer: product.manufacturer_name,
            category: product.category_name,
            is_discounted,
        }
    }
}

/// Everything the home page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HomeIndex {
    pub trending_categories: Vec<CategoryView>,
    pub new_products: Vec<ProductBox>,
}

// =============================================================================
// Storefront
// =============================================================================

/// The home page service.
///
/// ## Usage
/// ```rust,ignore
/// let catalog = InMemoryCatalog::load("catalog.json")?;
/// let storefront = Storefront::new(
///     CategoryService::new(&catalog),
///     ProductService::new(&catalog, AgreementPricing::new()),
///     &catalog,
///     HomeSettings::default(),
/// );
/// let home = storefront.home_index(Some("acme"))?;
/// ```
#[derive(Debug, Clone)]
pub struct Storefront<CS, PS, PR, AS> {
    categories: CategoryService<CS>,
    products: ProductService<PS, PR>,
    agreements: AS,
    settings: HomeSettings,
}

impl<CS, PS, PR, AS> Storefront<CS, PS, PR, AS>
where
    CS: CategorySource,
    PS: ProductSource,
    PR: PricingService,
    AS: AgreementSource,
{
    /// Creates a new Storefront.
    pub fn new(
        categories: CategoryService<CS>,
        products: ProductService<PS, PR>,
        agreements: AS,
        settings: HomeSettings,
    ) -> Self {
        Storefront {
            categories,
            products,
            agreements,
            settings,
        }
    }

    /// Returns the home page settings in use.
    pub fn settings(&self) -> &HomeSettings {
        &self.settings
    }

    /// Builds the home page for a customer, or for an anonymous visitor when
    /// `customer_id` is `None`.
    pub fn home_index(&self, customer_id: Option<&str>) -> CatalogResult<HomeIndex> {
        let context = customer_id
            .map(|id| self.customer_context(id))
            .transpose()?;

        let trending_categories = self
            .categories
            .get_trending_categories(self.settings.trending_categories_amount)?
            .into_iter()
            .map(CategoryView::from)
            .collect();

        let new_products: Vec<ProductBox> = self
            .products
            .get_new_products(self.settings.product_amount, context.as_ref())?
            .into_iter()
            .map(ProductBox::from)
            .collect();

        debug!(
            customer_id,
            products = new_products.len(),
            discounted = new_products.iter().filter(|p| p.is_discounted).count(),
            "Home index built"
        );

        Ok(HomeIndex {
            trending_categories,
            new_products,
        })
    }

    fn customer_context(&self, customer_id: &str) -> CatalogResult<CustomerContext> {
        let context = self.agreements.agreements_for(customer_id)?;

        for (index, agreement) in context.agreements.iter().enumerate() {
            for issue in agreement_issues(agreement) {
                warn!(
                    customer_id,
                    agreement = index,
                    %issue,
                    "Agreement has invalid data, affected rows will not apply"
                );
            }
        }

        debug!(
            customer_id,
            agreements = context.agreements.len(),
            rows = context.row_count(),
            "Customer context resolved"
        );
        Ok(context)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
