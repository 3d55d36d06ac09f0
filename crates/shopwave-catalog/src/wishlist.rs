//! Wishlist collaborator contract and favorite lookups.
//!
//! The listing engine only ever reads favorite state through
//! [`FavoriteLookup`]. Changing it goes through a [`WishlistCommand`] sent to
//! a [`Wishlist`] implementation.

use crate::catalog::Product;
use crate::error::{CatalogError, CatalogResult};
use crate::ids::ProductId;
use async_trait::async_trait;
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Read-only favorite membership test.
pub trait FavoriteLookup {
    fn is_favorite(&self, id: &ProductId) -> bool;
}

impl<S: BuildHasher> FavoriteLookup for HashSet<ProductId, S> {
    fn is_favorite(&self, id: &ProductId) -> bool {
        self.contains(id)
    }
}

impl FavoriteLookup for BTreeSet<ProductId> {
    fn is_favorite(&self, id: &ProductId) -> bool {
        self.contains(id)
    }
}

impl FavoriteLookup for [ProductId] {
    fn is_favorite(&self, id: &ProductId) -> bool {
        self.contains(id)
    }
}

impl FavoriteLookup for Vec<ProductId> {
    fn is_favorite(&self, id: &ProductId) -> bool {
        self.as_slice().is_favorite(id)
    }
}

/// The wishlist provider a screen talks to.
#[async_trait]
pub trait Wishlist: Send + Sync {
    /// Whether a product is currently favorited.
    fn is_favorited(&self, id: &ProductId) -> bool;

    /// Snapshot of every favorited product id.
    fn favorite_ids(&self) -> HashSet<ProductId>;

    /// Mark a product as favorite.
    async fn add_favorite(&self, product: &Product) -> CatalogResult<()>;

    /// Unmark a product.
    async fn remove_favorite(&self, id: &ProductId) -> CatalogResult<()>;
}

/// A change to the wishlist requested by a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistCommand {
    Add(Product),
    Remove(ProductId),
}

impl WishlistCommand {
    /// The command that flips a product's current favorite state.
    pub fn toggle(product: &Product, currently_favorited: bool) -> Self {
        if currently_favorited {
            WishlistCommand::Remove(product.id.clone())
        } else {
            WishlistCommand::Add(product.clone())
        }
    }

    /// Product the command targets.
    pub fn product_id(&self) -> &ProductId {
        match self {
            WishlistCommand::Add(product) => &product.id,
            WishlistCommand::Remove(id) => id,
        }
    }

    /// Issue the command against a wishlist.
    pub async fn apply(&self, wishlist: &dyn Wishlist) -> CatalogResult<()> {
        debug!(product = %self.product_id(), command = self.kind(), "applying wishlist command");
        match self {
            WishlistCommand::Add(product) => wishlist.add_favorite(product).await,
            WishlistCommand::Remove(id) => wishlist.remove_favorite(id).await,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            WishlistCommand::Add(_) => "add",
            WishlistCommand::Remove(_) => "remove",
        }
    }
}

/// Process-local wishlist kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryWishlist {
    items: RwLock<Vec<Product>>,
}

impl InMemoryWishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Favorited products, oldest first.
    pub fn products(&self) -> Vec<Product> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Wishlist for InMemoryWishlist {
    fn is_favorited(&self, id: &ProductId) -> bool {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|p| &p.id == id)
    }

    fn favorite_ids(&self) -> HashSet<ProductId> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|p| p.id.clone())
            .collect()
    }

    async fn add_favorite(&self, product: &Product) -> CatalogResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| CatalogError::Wishlist(e.to_string()))?;
        if !items.iter().any(|p| p.id == product.id) {
            items.push(product.clone());
        }
        Ok(())
    }

    async fn remove_favorite(&self, id: &ProductId) -> CatalogResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| CatalogError::Wishlist(e.to_string()))?;
        items.retain(|p| &p.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str) -> Product {
        Product::new(id, "Thing", "Books", Money::new(100, Currency::USD))
    }

    #[test]
    fn test_toggle_decides_command() {
        let p = product("a");
        assert_eq!(WishlistCommand::toggle(&p, false), WishlistCommand::Add(p.clone()));
        assert_eq!(
            WishlistCommand::toggle(&p, true),
            WishlistCommand::Remove(ProductId::new("a"))
        );
    }

    #[test]
    fn test_lookup_impls() {
        let id = ProductId::new("a");
        let set: HashSet<ProductId> = [id.clone()].into_iter().collect();
        let tree: BTreeSet<ProductId> = [id.clone()].into_iter().collect();
        let list = vec![id.clone()];
        assert!(set.is_favorite(&id));
        assert!(tree.is_favorite(&id));
        assert!(list.is_favorite(&id));
        assert!(!list.is_favorite(&ProductId::new("b")));
    }

    #[tokio::test]
    async fn test_in_memory_add_remove() {
        let wishlist = InMemoryWishlist::new();
        let p = product("a");

        wishlist.add_favorite(&p).await.unwrap();
        wishlist.add_favorite(&p).await.unwrap();
        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.is_favorited(&p.id));

        wishlist.remove_favorite(&p.id).await.unwrap();
        assert!(wishlist.is_empty());
        assert!(!wishlist.is_favorited(&p.id));
    }

    #[tokio::test]
    async fn test_command_round_trip_through_wishlist() {
        let wishlist = InMemoryWishlist::new();
        let p = product("a");

        let cmd = WishlistCommand::toggle(&p, wishlist.is_favorited(&p.id));
        cmd.apply(&wishlist).await.unwrap();
        assert!(wishlist.favorite_ids().contains(&p.id));

        let cmd = WishlistCommand::toggle(&p, wishlist.is_favorited(&p.id));
        cmd.apply(&wishlist).await.unwrap();
        assert!(wishlist.favorite_ids().is_empty());
    }
}
