//! Heart button on product cards.

use crate::alert::Alert;
use shopwave_catalog::catalog::Product;
use shopwave_catalog::wishlist::{Wishlist, WishlistCommand};
use tracing::warn;

/// Flip a product's favorite state. Returns the new state.
pub async fn toggle_favorite(product: &Product, wishlist: &dyn Wishlist) -> Result<bool, Alert> {
    let was_favorite = wishlist.is_favorited(&product.id);
    let command = WishlistCommand::toggle(product, was_favorite);
    match command.apply(wishlist).await {
        Ok(()) => Ok(!was_favorite),
        Err(e) => {
            warn!(product = %product.id, error = %e, "wishlist update failed");
            Err(Alert::error(e.to_string()))
        }
    }
}
