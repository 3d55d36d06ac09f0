//! Product records as supplied by the product provider.

use crate::error::{CatalogError, CatalogResult};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are owned by the provider; the listing engine only reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Display name of the category this product belongs to.
    pub category: String,
    /// List price.
    pub price: Money,
    /// Percentage taken off the list price (0-100).
    #[serde(default)]
    pub discount_percentage: f64,
    /// Average customer rating.
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub review_count: u32,
    /// Brand name.
    #[serde(default)]
    pub brand: Option<String>,
    /// Full description.
    #[serde(default)]
    pub description: Option<String>,
    /// Primary image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Whether the product can currently be ordered.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Create a product with no discount and no rating.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            discount_percentage: 0.0,
            rating: 0.0,
            review_count: 0,
            brand: None,
            description: None,
            image_url: None,
            in_stock: true,
        }
    }

    /// Set the discount percentage.
    pub fn with_discount(mut self, percent: f64) -> Self {
        self.discount_percentage = percent;
        self
    }

    /// Set the rating and review count.
    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Price after discount in minor units, unrounded.
    ///
    /// This is the sort key for the price orderings.
    pub fn effective_price(&self) -> f64 {
        self.price.discounted_minor_units(self.discount_percentage)
    }

    /// Price after discount, rounded for display.
    pub fn sale_price(&self) -> Money {
        self.price.apply_discount(self.discount_percentage)
    }

    /// Whether a discount applies.
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0
    }

    /// Check the record against the catalog constraints.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.price.is_negative() {
            return Err(CatalogError::InvalidPrice {
                product_id: self.id.to_string(),
                amount_cents: self.price.amount_cents,
            });
        }
        if !(0.0..=100.0).contains(&self.discount_percentage) {
            return Err(CatalogError::InvalidDiscount {
                product_id: self.id.to_string(),
                percent: self.discount_percentage,
            });
        }
        Ok(())
    }
}
