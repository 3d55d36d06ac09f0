//! Listing behavior over the demo catalog.

use std::collections::HashSet;

use shopwave_catalog::mock::{self, MockCatalog};
use shopwave_catalog::prelude::*;

fn ids(listing: &[ListedProduct]) -> Vec<String> {
    listing.iter().map(|l| l.product.id.to_string()).collect()
}

#[test]
fn test_price_orders_are_reverses_when_prices_distinct() {
    let catalog = MockCatalog::demo();
    let engine = ListingEngine::new(catalog.directory());
    let favorites: HashSet<ProductId> = HashSet::new();

    let prices: HashSet<u64> = catalog
        .products()
        .iter()
        .map(|p| p.effective_price().to_bits())
        .collect();
    assert_eq!(prices.len(), catalog.products().len(), "demo prices must be distinct");

    let asc = engine.list(
        Some(catalog.products()),
        &ListingQuery::new().with_sort(SortMode::PriceAsc),
        &favorites,
    );
    let mut desc = engine.list(
        Some(catalog.products()),
        &ListingQuery::new().with_sort(SortMode::PriceDesc),
        &favorites,
    );
    desc.reverse();
    assert_eq!(ids(&asc), ids(&desc));
}

#[test]
fn test_listing_is_idempotent() {
    let catalog = MockCatalog::demo();
    let engine = ListingEngine::new(catalog.directory());
    let favorites: HashSet<ProductId> = ["101", "302"].into_iter().map(ProductId::new).collect();
    let query = ListingQuery::new().with_sort(SortMode::TopRated);

    let first = engine.list(Some(catalog.products()), &query, &favorites);
    let second = engine.list(Some(catalog.products()), &query, &favorites);
    assert_eq!(first, second);
}

#[test]
fn test_favorites_recomputed_each_pass() {
    let catalog = MockCatalog::demo();
    let engine = ListingEngine::new(catalog.directory());
    let query = ListingQuery::new().with_category("1");

    let mut favorites: HashSet<ProductId> = HashSet::new();
    let before = engine.list(Some(catalog.products()), &query, &favorites);
    assert!(before.iter().all(|l| !l.is_favorite));

    favorites.insert(ProductId::new("102"));
    let after = engine.list(Some(catalog.products()), &query, &favorites);
    let flagged: Vec<_> = after
        .iter()
        .filter(|l| l.is_favorite)
        .map(|l| l.product.id.as_str())
        .collect();
    assert_eq!(flagged, vec!["102"]);
}

#[test]
fn test_category_and_sort_combine() {
    let catalog = MockCatalog::demo();
    let engine = ListingEngine::new(catalog.directory());
    let query = ListingQuery::new()
        .with_category("5")
        .with_sort(SortMode::PriceDesc);

    let listing = engine.list(Some(catalog.products()), &query, &Vec::<ProductId>::new());
    assert_eq!(ids(&listing), vec!["502", "501"]);
}

#[test]
fn test_every_category_filter_only_keeps_its_products() {
    let directory = CategoryDirectory::new(mock::categories());
    let products = mock::products();
    let engine = ListingEngine::new(&directory);

    for category in directory.iter() {
        let query = ListingQuery::new().with_category(category.id.clone());
        let listing = engine.list(Some(&products[..]), &query, &HashSet::<ProductId>::new());
        assert!(!listing.is_empty());
        assert!(listing.iter().all(|l| l.product.category == category.name));
    }
}
