//! Listing module.
//!
//! Turns a provider snapshot into what a product grid renders: category
//! filter, favorite annotation and a stable sort.

mod engine;
mod filter;
mod sort;

pub use engine::{ListedProduct, ListingEngine};
pub use filter::{CategoryFilter, ListingQuery};
pub use sort::{SortMode, UnknownSortMode};
