//! # Category Service
//!
//! Lists categories for the home page.

use tracing::debug;

use crate::error::CatalogResult;
use crate::model::Category;
use crate::source::CategorySource;

/// Category listing over a [`CategorySource`].
#[derive(Debug, Clone)]
pub struct CategoryService<S> {
    source: S,
}

impl<S: CategorySource> CategoryService<S> {
    /// Creates a new CategoryService.
    pub fn new(source: S) -> Self {
        CategoryService { source }
    }

    /// Returns at most `count` trending categories in source order.
    pub fn get_trending_categories(&self, count: usize) -> CatalogResult<Vec<Category>> {
        let mut categories = self.source.trending_categories(count)?;
        // A source may ignore the limit; never hand back more than asked.
        categories.truncate(count);

        debug!(requested = count, returned = categories.len(), "Trending categories");
        Ok(categories)
    }
}
