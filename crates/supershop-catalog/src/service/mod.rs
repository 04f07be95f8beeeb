//! # Storefront Services
//!
//! Thin services that combine a catalog source with the pricing engine.
//!
//! ## Available Services
//!
//! - [`ProductService`] - Newest products, priced for the customer
//! - [`CategoryService`] - Trending categories

pub mod category;
pub mod product;

pub use category::CategoryService;
pub use product::ProductService;
