//! Home screen: banners, categories, flash deal and product sections.

use crate::alert::Alert;
use crate::favorites::toggle_favorite;
use crate::navigation::{HomeSection, Navigator, Route};
use shopwave_catalog::catalog::{Banner, CategoryDirectory, FlashDeal, Product};
use shopwave_catalog::listing::ListedProduct;
use shopwave_catalog::mock;
use shopwave_catalog::provider::{BannerProvider, ProductQuery};
use shopwave_catalog::wishlist::{FavoriteLookup, Wishlist};
use shopwave_catalog::{CategoryId, ProductId};

/// How long the demo flash deal runs from when the screen opens.
pub const FLASH_DEAL_SECS: i64 = 6 * 60 * 60;

#[derive(Debug, Clone)]
pub struct HomeScreen {
    banners: ProductQuery<Vec<Banner>>,
    categories: CategoryDirectory,
    featured: Vec<Product>,
    new_arrivals: Vec<Product>,
    flash_deal: FlashDeal,
}

impl HomeScreen {
    pub fn new(
        categories: CategoryDirectory,
        featured: Vec<Product>,
        new_arrivals: Vec<Product>,
        flash_deal: FlashDeal,
    ) -> Self {
        Self {
            banners: ProductQuery::idle(),
            categories,
            featured,
            new_arrivals,
            flash_deal,
        }
    }

    /// Home screen over the bundled demo sections, opened at `now`.
    pub fn demo(now: i64) -> Self {
        Self::new(
            CategoryDirectory::new(mock::categories()),
            mock::featured_products(),
            mock::new_arrivals(),
            mock::flash_deal(now, FLASH_DEAL_SECS),
        )
    }

    /// Fetch banners. Called on open and on pull-to-refresh.
    pub async fn load(&mut self, provider: &dyn BannerProvider) {
        self.banners.run(provider.banners()).await;
    }

    /// Full-screen spinner: banners have never arrived.
    pub fn is_loading(&self) -> bool {
        self.banners.is_loading()
    }

    /// Refresh indicator over already loaded banners.
    pub fn is_refreshing(&self) -> bool {
        self.banners.is_refetching()
    }

    /// Message of the last failed banner fetch.
    pub fn error(&self) -> Option<&str> {
        self.banners.error()
    }

    pub fn banners(&self) -> &[Banner] {
        self.banners.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn categories(&self) -> &CategoryDirectory {
        &self.categories
    }

    pub fn flash_deal(&self) -> &FlashDeal {
        &self.flash_deal
    }

    pub fn featured<F: FavoriteLookup + ?Sized>(&self, favorites: &F) -> Vec<ListedProduct> {
        annotate_all(&self.featured, favorites)
    }

    pub fn new_arrivals<F: FavoriteLookup + ?Sized>(&self, favorites: &F) -> Vec<ListedProduct> {
        annotate_all(&self.new_arrivals, favorites)
    }

    pub fn flash_deal_products<F: FavoriteLookup + ?Sized>(
        &self,
        favorites: &F,
    ) -> Vec<ListedProduct> {
        annotate_all(&self.flash_deal.products, favorites)
    }

    pub async fn toggle_favorite(
        &self,
        product: &Product,
        wishlist: &dyn Wishlist,
    ) -> Result<bool, Alert> {
        toggle_favorite(product, wishlist).await
    }

    pub fn see_all<N: Navigator + ?Sized>(&self, section: HomeSection, navigator: &mut N) {
        navigator.push(Route::SearchFiltered(section));
    }

    pub fn open_search<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.push(Route::Search);
    }

    pub fn open_category<N: Navigator + ?Sized>(&self, id: &CategoryId, navigator: &mut N) {
        navigator.push(Route::Category(id.clone()));
    }

    pub fn open_product<N: Navigator + ?Sized>(&self, id: &ProductId, navigator: &mut N) {
        navigator.push(Route::Product(id.clone()));
    }
}

fn annotate_all<F: FavoriteLookup + ?Sized>(products: &[Product], favorites: &F) -> Vec<ListedProduct> {
    products
        .iter()
        .map(|p| ListedProduct::annotate(p, favorites))
        .collect()
}
