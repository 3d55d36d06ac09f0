//! Catalog types and product listing logic for ShopWave.
//!
//! This crate holds everything the ShopWave screens need to show products:
//!
//! - **Catalog**: products, categories, banners and flash deals
//! - **Listing**: the filter / favorite / sort pass behind every product grid
//! - **Providers**: async contracts for product data and the wishlist
//! - **Mock**: the demo storefront data and an in-memory provider
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use shopwave_catalog::prelude::*;
//!
//! let directory = CategoryDirectory::new(shopwave_catalog::mock::categories());
//! let products = shopwave_catalog::mock::products();
//! let favorites: HashSet<ProductId> = [ProductId::new("201")].into_iter().collect();
//!
//! let query = ListingQuery::new()
//!     .with_category("2")
//!     .with_sort(SortMode::PriceAsc);
//! let listing = ListingEngine::new(&directory).list(Some(&products[..]), &query, &favorites);
//!
//! assert_eq!(listing[0].product.id.as_str(), "201");
//! assert!(listing[0].is_favorite);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod listing;
pub mod mock;
pub mod provider;
pub mod wishlist;

pub use error::{CatalogError, CatalogResult};
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, CatalogResult};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Banner, Category, CategoryDirectory, FlashDeal, Product};

    // Listing
    pub use crate::listing::{ListedProduct, ListingEngine, ListingQuery, SortMode};

    // Collaborators
    pub use crate::provider::{BannerProvider, ProductProvider, ProductQuery};
    pub use crate::wishlist::{FavoriteLookup, InMemoryWishlist, Wishlist, WishlistCommand};
}
