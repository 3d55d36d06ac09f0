//! Product catalog module.
//!
//! Contains product records, categories, the category directory and the
//! home-screen promotions.

mod category;
mod product;
mod promo;

pub use category::{Category, CategoryDirectory};
pub use product::Product;
pub use promo::{Banner, FlashDeal};
