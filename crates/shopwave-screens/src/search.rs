//! Search tab.
//!
//! Text search over the product provider, optionally narrowed to one category
//! chip. Results keep the provider's order.

use crate::alert::Alert;
use crate::favorites::toggle_favorite;
use crate::navigation::{Navigator, Route};
use crate::view::ListingView;
use shopwave_catalog::catalog::{CategoryDirectory, Product};
use shopwave_catalog::listing::{ListedProduct, ListingEngine, ListingQuery, SortMode};
use shopwave_catalog::provider::{ProductProvider, ProductQuery};
use shopwave_catalog::wishlist::{FavoriteLookup, Wishlist};
use shopwave_catalog::{CategoryId, ProductId};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SearchScreen {
    query: String,
    selected_category: Option<CategoryId>,
    results: ProductQuery<Vec<Product>>,
}

impl SearchScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_category(&self) -> Option<&CategoryId> {
        self.selected_category.as_ref()
    }

    /// Replace the search text. Call [`SearchScreen::refresh`] to fetch.
    ///
    /// Results fetched for a different text are dropped.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.query {
            self.query = text;
            self.results.reset();
        }
    }

    /// Clear the text and drop previous results.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.results.reset();
    }

    /// Search for the current text.
    pub async fn refresh(&mut self, provider: &dyn ProductProvider) {
        if self.query.is_empty() {
            self.results.reset();
            return;
        }
        self.results.run(provider.search_products(&self.query)).await;
    }

    /// Set the category chip without navigating.
    pub fn select_category(&mut self, id: Option<CategoryId>) {
        self.selected_category = id;
    }

    /// A category chip was pressed.
    ///
    /// Pressing the selected chip clears the selection. Any other chip becomes
    /// the selection and opens that category's screen.
    pub fn press_category<N: Navigator + ?Sized>(&mut self, id: &CategoryId, navigator: &mut N) {
        if self.selected_category.as_ref() == Some(id) {
            debug!(category = %id, "category deselected");
            self.selected_category = None;
        } else {
            self.selected_category = Some(id.clone());
            navigator.push(Route::Category(id.clone()));
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

    /// Results narrowed to the selected category, in provider order.
    pub fn results<F: FavoriteLookup + ?Sized>(
        &self,
        directory: &CategoryDirectory,
        favorites: &F,
    ) -> Vec<ListedProduct> {
        let query = ListingQuery::new()
            .with_optional_category(self.selected_category.clone())
            .with_sort(SortMode::Newest);
        ListingEngine::new(directory).list(self.results.products(), &query, favorites)
    }

    pub fn is_loading(&self) -> bool {
        self.results.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.results.error()
    }

    pub fn view_state<F: FavoriteLookup + ?Sized>(
        &self,
        directory: &CategoryDirectory,
        favorites: &F,
    ) -> ListingView {
        if self.results.is_loading() {
            ListingView::Loading
        } else if self.query.is_empty() {
            ListingView::Prompt
        } else {
            ListingView::from_listing(self.results(directory, favorites))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NavEvent, RecordingNavigator};
    use shopwave_catalog::mock::{self, MockCatalog};
    use std::collections::HashSet;

    fn directory() -> CategoryDirectory {
        CategoryDirectory::new(mock::categories())
    }

    fn no_favorites() -> HashSet<ProductId> {
        HashSet::new()
    }

    #[test]
    fn test_prompt_before_typing() {
        let screen = SearchScreen::new();
        let view = screen.view_state(&directory(), &no_favorites());
        assert_eq!(view, ListingView::Prompt);
        assert_eq!(view.placeholder().map(|p| p.0), Some("Search for products"));
    }

    #[tokio::test]
    async fn test_search_results() {
        let catalog = MockCatalog::demo();
        let mut screen = SearchScreen::new();
        screen.set_query("set");
        screen.refresh(&catalog).await;

        let ids: Vec<_> = screen
            .results(&directory(), &no_favorites())
            .into_iter()
            .map(|p| p.product.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["301", "302"]);
    }

    #[tokio::test]
    async fn test_no_match_is_empty() {
        let catalog = MockCatalog::demo();
        let mut screen = SearchScreen::new();
        screen.set_query("submarine");
        screen.refresh(&catalog).await;
        assert_eq!(
            screen.view_state(&directory(), &no_favorites()),
            ListingView::Empty
        );
    }

    #[tokio::test]
    async fn test_selected_category_narrows_results() {
        let catalog = MockCatalog::demo();
        let mut nav = RecordingNavigator::new();
        let mut screen = SearchScreen::new();
        screen.set_query("soundcore");
        screen.refresh(&catalog).await;

        screen.press_category(&CategoryId::new("2"), &mut nav);
        assert!(screen.results(&directory(), &no_favorites()).is_empty());

        screen.press_category(&CategoryId::new("1"), &mut nav);
        assert_eq!(screen.results(&directory(), &no_favorites()).len(), 2);
    }

    #[test]
    fn test_press_category_toggles() {
        let mut nav = RecordingNavigator::new();
        let mut screen = SearchScreen::new();
        let books = CategoryId::new("6");

        screen.press_category(&books, &mut nav);
        assert_eq!(screen.selected_category(), Some(&books));
        assert_eq!(nav.last_event(), Some(&NavEvent::Push(Route::Category(books.clone()))));

        screen.press_category(&books, &mut nav);
        assert_eq!(screen.selected_category(), None);
        assert_eq!(nav.events().len(), 1);
    }

    #[tokio::test]
    async fn test_new_text_drops_previous_results() {
        let catalog = MockCatalog::demo();
        let mut screen = SearchScreen::new();
        screen.set_query("watch");
        screen.refresh(&catalog).await;
        assert_eq!(screen.results(&directory(), &no_favorites()).len(), 1);

        screen.set_query("watch");
        assert_eq!(screen.results(&directory(), &no_favorites()).len(), 1);

        screen.set_query("submarine");
        assert!(screen.results(&directory(), &no_favorites()).is_empty());
        assert_eq!(
            screen.view_state(&directory(), &no_favorites()),
            ListingView::Empty
        );

        screen.refresh(&catalog).await;
        assert_eq!(
            screen.view_state(&directory(), &no_favorites()),
            ListingView::Empty
        );
    }

    #[tokio::test]
    async fn test_clear_query() {
        let catalog = MockCatalog::demo();
        let mut screen = SearchScreen::new();
        screen.set_query("watch");
        screen.refresh(&catalog).await;
        assert_eq!(screen.results(&directory(), &no_favorites()).len(), 1);

        screen.clear_query();
        assert_eq!(screen.query(), "");
        assert!(screen.results(&directory(), &no_favorites()).is_empty());
        assert_eq!(
            screen.view_state(&directory(), &no_favorites()),
            ListingView::Prompt
        );
    }
}
