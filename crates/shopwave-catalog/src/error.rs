//! Catalog error types.

use thiserror::Error;

/// Errors raised by catalog collaborators and catalog loading.
///
/// The listing engine itself never returns one of these.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Negative price on a product record.
    #[error("Invalid price for {product_id}: {amount_cents} cents")]
    InvalidPrice {
        product_id: String,
        amount_cents: i64,
    },

    /// Discount outside 0-100.
    #[error("Invalid discount for {product_id}: {percent}%")]
    InvalidDiscount { product_id: String, percent: f64 },

    /// A data provider failed to answer.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Wishlist store failed.
    #[error("Wishlist error: {0}")]
    Wishlist(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// I/O error while loading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
