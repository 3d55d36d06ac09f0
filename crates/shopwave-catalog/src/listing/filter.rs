//! Listing query: the category filter and sort mode a screen selected.

use crate::catalog::{CategoryDirectory, Product};
use crate::ids::CategoryId;
use crate::listing::SortMode;
use serde::{Deserialize, Serialize};

/// What a listing pass should keep and how it should order it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Category to restrict to, if any.
    pub category: Option<CategoryId>,
    /// Ordering of the surviving products.
    pub sort: SortMode,
}

impl ListingQuery {
    /// A query with no filter and `Newest` ordering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one category.
    pub fn with_category(mut self, id: impl Into<CategoryId>) -> Self {
        self.category = Some(id.into());
        self
    }

    /// Restrict to a category if one is given.
    pub fn with_optional_category(mut self, id: Option<CategoryId>) -> Self {
        self.category = id;
        self
    }

    /// Set sort mode.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Resolve the filter against a directory.
    pub fn category_filter<'d>(&self, directory: &'d CategoryDirectory) -> Option<CategoryFilter<'d>> {
        self.category
            .as_ref()
            .map(|id| CategoryFilter::new(directory.filter_name(id)))
    }
}

/// A category filter resolved to the display name products carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter<'a> {
    name: &'a str,
}

impl<'a> CategoryFilter<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }

    /// The display name being matched.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Exact, case-sensitive match on the category name.
    pub fn matches(&self, product: &Product) -> bool {
        product.category == self.name
    }
}
