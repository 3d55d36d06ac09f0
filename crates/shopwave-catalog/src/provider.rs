//! Data provider contracts and the query state screens keep for them.

use crate::catalog::{Banner, Product};
use crate::error::CatalogResult;
use crate::ids::{CategoryId, ProductId};
use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use tracing::warn;

/// Source of product records.
#[async_trait]
pub trait ProductProvider: Send + Sync {
    /// Products in a category, newest first.
    async fn products_by_category(&self, category: &CategoryId) -> CatalogResult<Vec<Product>>;

    /// Free-text product search.
    async fn search_products(&self, query: &str) -> CatalogResult<Vec<Product>>;

    /// A single product.
    async fn product(&self, id: &ProductId) -> CatalogResult<Product>;
}

/// Source of home-screen banners.
#[async_trait]
pub trait BannerProvider: Send + Sync {
    async fn banners(&self) -> CatalogResult<Vec<Banner>>;
}

/// A screen's view of one provider call.
///
/// `is_loading` is only set while nothing has arrived yet; a reload over
/// existing data sets `is_refetching` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery<T> {
    data: Option<T>,
    is_loading: bool,
    is_refetching: bool,
    error: Option<String>,
}

impl<T> Default for ProductQuery<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            is_refetching: false,
            error: None,
        }
    }
}

impl<T> ProductQuery<T> {
    /// A query that has not started.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Mark a request as in flight.
    pub fn begin(&mut self) {
        if self.data.is_some() {
            self.is_refetching = true;
        } else {
            self.is_loading = true;
        }
        self.error = None;
    }

    /// Store a successful result.
    pub fn resolve(&mut self, data: T) {
        self.data = Some(data);
        self.is_loading = false;
        self.is_refetching = false;
    }

    /// Record a failure. Previously loaded data is kept.
    pub fn reject(&mut self, error: impl fmt::Display) {
        self.error = Some(error.to_string());
        self.is_loading = false;
        self.is_refetching = false;
    }

    /// Drop data and error, back to idle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Run a provider call through begin/resolve/reject.
    pub async fn run<F>(&mut self, call: F)
    where
        F: Future<Output = CatalogResult<T>>,
    {
        self.begin();
        match call.await {
            Ok(data) => self.resolve(data),
            Err(e) => {
                warn!(error = %e, "provider call failed");
                self.reject(e);
            }
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_refetching(&self) -> bool {
        self.is_refetching
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl ProductQuery<Vec<Product>> {
    /// Loaded products as a slice, if any have arrived.
    pub fn products(&self) -> Option<&[Product]> {
        self.data.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn test_first_load_sets_loading() {
        let mut q: ProductQuery<Vec<u32>> = ProductQuery::idle();
        q.begin();
        assert!(q.is_loading());
        assert!(!q.is_refetching());

        q.resolve(vec![1, 2]);
        assert!(!q.is_loading());
        assert_eq!(q.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_reload_sets_refetching() {
        let mut q = ProductQuery::idle();
        q.resolve(vec![1]);
        q.begin();
        assert!(!q.is_loading());
        assert!(q.is_refetching());
    }

    #[test]
    fn test_reject_keeps_data_and_clears_flags() {
        let mut q = ProductQuery::idle();
        q.resolve(vec![1]);
        q.begin();
        q.reject("offline");
        assert_eq!(q.error(), Some("offline"));
        assert_eq!(q.data(), Some(&vec![1]));
        assert!(!q.is_refetching());
    }

    #[tokio::test]
    async fn test_run_records_failure() {
        let mut q: ProductQuery<Vec<u32>> = ProductQuery::idle();
        q.run(async { Err(CatalogError::Provider("timeout".into())) })
            .await;
        assert!(!q.is_loading());
        assert_eq!(q.error(), Some("Provider error: timeout"));
        assert!(q.data().is_none());
    }

    #[tokio::test]
    async fn test_run_records_success() {
        let mut q = ProductQuery::idle();
        q.run(async { Ok(vec![7u32]) }).await;
        assert_eq!(q.data(), Some(&vec![7]));
        assert!(q.error().is_none());
    }
}
