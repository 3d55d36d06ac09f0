//! Mock data source.
//!
//! Ships the demo storefront data and a [`MockCatalog`] provider over it, or
//! over a JSON catalog file with the same shape.

use crate::catalog::{Banner, Category, CategoryDirectory, FlashDeal, Product};
use crate::error::{CatalogError, CatalogResult};
use crate::ids::{BannerId, CategoryId, ProductId};
use crate::money::{Currency, Money};
use crate::provider::{BannerProvider, ProductProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    #[serde(default)]
    pub banners: Vec<Banner>,
}

/// In-memory product and banner provider.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    directory: CategoryDirectory,
    products: Vec<Product>,
    banners: Vec<Banner>,
}

impl MockCatalog {
    /// Build a catalog, rejecting invalid product records.
    pub fn new(
        categories: Vec<Category>,
        products: Vec<Product>,
        banners: Vec<Banner>,
    ) -> CatalogResult<Self> {
        for product in &products {
            product.validate()?;
        }
        Ok(Self {
            directory: CategoryDirectory::new(categories),
            products,
            banners,
        })
    }

    /// The bundled demo storefront.
    pub fn demo() -> Self {
        Self {
            directory: CategoryDirectory::new(categories()),
            products: products(),
            banners: banners(),
        }
    }

    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.categories, file.products, file.banners)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            products = catalog.products.len(),
            categories = catalog.directory.len(),
            "loaded catalog file"
        );
        Ok(catalog)
    }

    pub fn directory(&self) -> &CategoryDirectory {
        &self.directory
    }

    /// All products in stored order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::demo()
    }
}

#[async_trait]
impl ProductProvider for MockCatalog {
    async fn products_by_category(&self, category: &CategoryId) -> CatalogResult<Vec<Product>> {
        let name = self
            .directory
            .name_of(category)
            .ok_or_else(|| CatalogError::CategoryNotFound(category.to_string()))?;
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == name)
            .cloned()
            .collect())
    }

    async fn search_products(&self, query: &str) -> CatalogResult<Vec<Product>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let hits: Vec<Product> = self
            .products
            .iter()
            .filter(|p| matches_text(p, &needle))
            .cloned()
            .collect();
        debug!(query, hits = hits.len(), "searched mock catalog");
        Ok(hits)
    }

    async fn product(&self, id: &ProductId) -> CatalogResult<Product> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }
}

#[async_trait]
impl BannerProvider for MockCatalog {
    async fn banners(&self) -> CatalogResult<Vec<Banner>> {
        Ok(self.banners.clone())
    }
}

fn matches_text(product: &Product, needle: &str) -> bool {
    let fields = [
        Some(product.name.as_str()),
        product.description.as_deref(),
        product.brand.as_deref(),
        Some(product.category.as_str()),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

fn usd(amount: f64) -> Money {
    Money::from_decimal(amount, Currency::USD)
}

/// Demo categories in display order.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("1", "Electronics"),
        Category::new("2", "Fashion"),
        Category::new("3", "Home & Kitchen"),
        Category::new("4", "Beauty"),
        Category::new("5", "Sports"),
        Category::new("6", "Books"),
    ]
}

/// Demo products, newest first.
pub fn products() -> Vec<Product> {
    vec![
        Product::new("101", "Wireless Noise-Cancelling Headphones", "Electronics", usd(249.99))
            .with_discount(20.0)
            .with_rating(4.7, 1284)
            .with_brand("Soundcore")
            .with_description("Over-ear headphones with 30 hours of battery life."),
        Product::new("102", "Smart Fitness Watch", "Electronics", usd(199.99))
            .with_discount(10.0)
            .with_rating(4.4, 932)
            .with_brand("Pulse")
            .with_description("Heart-rate, sleep and GPS tracking."),
        Product::new("103", "Portable Bluetooth Speaker", "Electronics", usd(79.99))
            .with_rating(4.5, 611)
            .with_brand("Soundcore"),
        Product::new("201", "Classic Denim Jacket", "Fashion", usd(89.99))
            .with_discount(25.0)
            .with_rating(4.3, 245)
            .with_brand("Northline")
            .with_description("Stonewashed denim, relaxed fit."),
        Product::new("202", "Leather Crossbody Bag", "Fashion", usd(129.0))
            .with_rating(4.6, 187)
            .with_brand("Atelier Rue"),
        Product::new("301", "Ceramic Pour-Over Coffee Set", "Home & Kitchen", usd(45.5))
            .with_discount(15.0)
            .with_rating(4.8, 402)
            .with_description("Dripper, carafe and two cups."),
        Product::new("302", "Non-Stick Cookware Set", "Home & Kitchen", usd(159.99))
            .with_discount(30.0)
            .with_rating(4.2, 356)
            .with_brand("Hearth"),
        Product::new("401", "Vitamin C Serum", "Beauty", usd(24.99))
            .with_rating(4.5, 1530)
            .with_brand("Glow Lab"),
        Product::new("501", "Yoga Mat with Carry Strap", "Sports", usd(34.99))
            .with_discount(5.0)
            .with_rating(4.6, 720)
            .with_brand("Stride"),
        Product::new("502", "Adjustable Dumbbells", "Sports", usd(299.0))
            .with_discount(12.0)
            .with_rating(4.7, 298)
            .with_brand("IronCore"),
        Product::new("601", "The Pragmatic Kitchen", "Books", usd(32.0))
            .with_rating(4.1, 88)
            .with_description("Weeknight recipes from pantry staples."),
        Product::new("602", "Trail Running Handbook", "Books", usd(19.99))
            .with_discount(10.0)
            .with_rating(4.4, 64),
    ]
}

/// Demo home-screen banners.
pub fn banners() -> Vec<Banner> {
    vec![
        Banner {
            id: BannerId::new("b1"),
            title: "Summer Sale".to_string(),
            subtitle: Some("Up to 30% off kitchen essentials".to_string()),
            image_url: "https://images.unsplash.com/photo-1607082348824-0a96f2a4b9da".to_string(),
            link: Some("/category/3".to_string()),
        },
        Banner {
            id: BannerId::new("b2"),
            title: "New Audio Gear".to_string(),
            subtitle: None,
            image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e".to_string(),
            link: Some("/category/1".to_string()),
        },
    ]
}

/// Products shown in the home screen's featured section.
pub fn featured_products() -> Vec<Product> {
    pick(&["101", "301", "502", "202"])
}

/// Products shown in the home screen's new arrivals section.
pub fn new_arrivals() -> Vec<Product> {
    pick(&["103", "401", "602"])
}

/// The current flash deal, ending `duration_secs` after `now`.
pub fn flash_deal(now: i64, duration_secs: i64) -> FlashDeal {
    FlashDeal {
        title: "Flash Deals".to_string(),
        ends_at: now + duration_secs,
        products: pick(&["201", "302"]),
    }
}

fn pick(ids: &[&str]) -> Vec<Product> {
    let all = products();
    ids.iter()
        .filter_map(|id| all.iter().find(|p| p.id.as_str() == *id).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_data_is_valid() {
        for p in products() {
            p.validate().unwrap();
        }
        let dir = CategoryDirectory::new(categories());
        for p in products() {
            assert!(dir.iter().any(|c| c.name == p.category), "{} has unknown category", p.id);
        }
    }

    #[test]
    fn test_sections_resolve() {
        assert_eq!(featured_products().len(), 4);
        assert_eq!(new_arrivals().len(), 3);
        assert_eq!(flash_deal(100, 3600).ends_at, 3700);
    }

    #[tokio::test]
    async fn test_products_by_category() {
        let catalog = MockCatalog::demo();
        let fashion = catalog
            .products_by_category(&CategoryId::new("2"))
            .await
            .unwrap();
        assert_eq!(fashion.len(), 2);
        assert!(fashion.iter().all(|p| p.category == "Fashion"));
    }

    #[tokio::test]
    async fn test_unknown_category_is_an_error() {
        let catalog = MockCatalog::demo();
        let err = catalog
            .products_by_category(&CategoryId::new("99"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::CategoryNotFound(_)));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let catalog = MockCatalog::demo();
        let hits = catalog.search_products("SOUNDCORE").await.unwrap();
        let ids: Vec<_> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["101", "103"]);
    }

    #[tokio::test]
    async fn test_blank_search_returns_nothing() {
        let catalog = MockCatalog::demo();
        assert!(catalog.search_products("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_product_lookup() {
        let catalog = MockCatalog::demo();
        assert_eq!(
            catalog.product(&ProductId::new("401")).await.unwrap().name,
            "Vitamin C Serum"
        );
        assert!(catalog.product(&ProductId::new("nope")).await.is_err());
    }

    #[test]
    fn test_from_json_validates_products() {
        let json = r#"{
            "categories": [{ "id": "1", "name": "Books" }],
            "products": [{
                "id": "x",
                "name": "Bad",
                "category": "Books",
                "price": { "amount_cents": 100, "currency": "USD" },
                "discountPercentage": 140
            }]
        }"#;
        assert!(matches!(
            MockCatalog::from_json(json),
            Err(CatalogError::InvalidDiscount { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "categories": [{ "id": "1", "name": "Books" }],
            "products": [{
                "id": "x",
                "name": "Good",
                "category": "Books",
                "price": { "amount_cents": 100, "currency": "USD" }
            }]
        }"#;
        let catalog = MockCatalog::from_json(json).unwrap();
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.directory().name_of(&CategoryId::new("1")), Some("Books"));
    }
}
