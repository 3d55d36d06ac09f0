//! Category listing with a sort menu.

use crate::alert::Alert;
use crate::favorites::toggle_favorite;
use crate::navigation::{Navigator, Route};
use crate::view::ListingView;
use shopwave_catalog::catalog::{CategoryDirectory, Product};
use shopwave_catalog::listing::{ListedProduct, ListingEngine, ListingQuery, SortMode};
use shopwave_catalog::provider::{ProductProvider, ProductQuery};
use shopwave_catalog::wishlist::{FavoriteLookup, Wishlist};
use shopwave_catalog::{CategoryId, ProductId};

/// Header title when the category id is not in the directory.
pub const FALLBACK_TITLE: &str = "Category";

#[derive(Debug, Clone)]
pub struct CategoryScreen {
    category: CategoryId,
    products: ProductQuery<Vec<Product>>,
    sort: SortMode,
    show_sort_menu: bool,
}

impl CategoryScreen {
    pub fn new(category: impl Into<CategoryId>) -> Self {
        Self {
            category: category.into(),
            products: ProductQuery::idle(),
            sort: SortMode::default(),
            show_sort_menu: false,
        }
    }

    /// Open with a sort other than newest.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    pub async fn load(&mut self, provider: &dyn ProductProvider) {
        self.products
            .run(provider.products_by_category(&self.category))
            .await;
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn is_sort_menu_open(&self) -> bool {
        self.show_sort_menu
    }

    pub fn toggle_sort_menu(&mut self) {
        self.show_sort_menu = !self.show_sort_menu;
    }

    /// Pick a sort option; closes the menu.
    pub fn choose_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.show_sort_menu = false;
    }

    pub fn title<'d>(&self, directory: &'d CategoryDirectory) -> &'d str {
        directory.name_of(&self.category).unwrap_or(FALLBACK_TITLE)
    }

    /// The loaded products in the chosen order.
    ///
    /// The provider already scoped them to this category, so no filter is
    /// applied here.
    pub fn products<F: FavoriteLookup + ?Sized>(
        &self,
        directory: &CategoryDirectory,
        favorites: &F,
    ) -> Vec<ListedProduct> {
        let query = ListingQuery::new().with_sort(self.sort);
        ListingEngine::new(directory).list(self.products.products(), &query, favorites)
    }

    pub fn is_loading(&self) -> bool {
        self.products.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.products.error()
    }

    pub fn view_state<F: FavoriteLookup + ?Sized>(
        &self,
        directory: &CategoryDirectory,
        favorites: &F,
    ) -> ListingView {
        if self.products.is_loading() {
            ListingView::Loading
        } else {
            ListingView::from_listing(self.products(directory, favorites))
        }
    }

    pub fn open_product<N: Navigator + ?Sized>(&self, id: &ProductId, navigator: &mut N) {
        navigator.push(Route::Product(id.clone()));
    }

    pub async fn toggle_favorite(
        &self,
        product: &Product,
        wishlist: &dyn Wishlist,
    ) -> Result<bool, Alert> {
        toggle_favorite(product, wishlist).await
    }
}
