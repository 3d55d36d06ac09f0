//! What a product grid screen currently shows.

use shopwave_catalog::listing::ListedProduct;

/// Body of a product grid screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingView {
    /// Spinner: the first load is in flight.
    Loading,
    /// Nothing asked for yet (search screen with no text).
    Prompt,
    /// A finished load that produced no products.
    Empty,
    Results(Vec<ListedProduct>),
}

impl ListingView {
    /// Wrap listed products, mapping no products to [`ListingView::Empty`].
    pub fn from_listing(products: Vec<ListedProduct>) -> Self {
        if products.is_empty() {
            ListingView::Empty
        } else {
            ListingView::Results(products)
        }
    }

    pub fn products(&self) -> &[ListedProduct] {
        match self {
            ListingView::Results(products) => products,
            _ => &[],
        }
    }

    /// Headline and hint shown for the non-result states.
    pub fn placeholder(&self) -> Option<(&'static str, &'static str)> {
        match self {
            ListingView::Prompt => Some((
                "Search for products",
                "Enter a product name, brand, or category",
            )),
            ListingView::Empty => Some((
                "No products found",
                "Try a different search term or browse categories",
            )),
            ListingView::Loading | ListingView::Results(_) => None,
        }
    }
}
