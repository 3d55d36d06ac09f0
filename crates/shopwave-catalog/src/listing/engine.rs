//! The listing pass: filter, annotate favorites, sort.

use crate::catalog::{CategoryDirectory, Product};
use crate::listing::ListingQuery;
use crate::wishlist::FavoriteLookup;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A product as a listing renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedProduct {
    #[serde(flatten)]
    pub product: Product,
    /// Whether the product was in the favorite set at listing time.
    pub is_favorite: bool,
}

impl ListedProduct {
    /// Copy a product and attach its current favorite state.
    pub fn annotate<F: FavoriteLookup + ?Sized>(product: &Product, favorites: &F) -> Self {
        Self {
            is_favorite: favorites.is_favorite(&product.id),
            product: product.clone(),
        }
    }
}

/// Derives the list a screen renders from a provider snapshot.
///
/// Every call is a fresh, pure computation over its arguments. The input
/// slice is never modified.
#[derive(Debug, Clone, Copy)]
pub struct ListingEngine<'a> {
    categories: &'a CategoryDirectory,
}

impl<'a> ListingEngine<'a> {
    pub fn new(categories: &'a CategoryDirectory) -> Self {
        Self { categories }
    }

    /// Build the ordered, favorite-annotated listing.
    ///
    /// `None` stands for a provider that has not produced data yet and lists
    /// as empty, same as an empty slice.
    pub fn list<F>(
        &self,
        products: Option<&[Product]>,
        query: &ListingQuery,
        favorites: &F,
    ) -> Vec<ListedProduct>
    where
        F: FavoriteLookup + ?Sized,
    {
        let products = products.unwrap_or_default();
        let filter = query.category_filter(self.categories);

        let mut listed: Vec<ListedProduct> = products
            .iter()
            .filter(|p| filter.map_or(true, |f| f.matches(p)))
            .map(|p| ListedProduct::annotate(p, favorites))
            .collect();

        if query.sort.reorders() {
            // sort_by is stable: ties keep input order
            listed.sort_by(|a, b| query.sort.compare(&a.product, &b.product));
        }

        debug!(
            input = products.len(),
            output = listed.len(),
            category = filter.map(|f| f.name()),
            sort = query.sort.as_str(),
            "built product listing"
        );

        listed
    }
}
