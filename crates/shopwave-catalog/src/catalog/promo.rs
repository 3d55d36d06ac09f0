//! Home-screen promotions: banners and the flash deal.

use crate::catalog::Product;
use crate::ids::BannerId;
use serde::{Deserialize, Serialize};

/// A promotional banner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: BannerId,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub image_url: String,
    /// Screen path the banner opens.
    #[serde(default)]
    pub link: Option<String>,
}

/// A time-boxed set of discounted products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlashDeal {
    pub title: String,
    /// Unix timestamp (seconds) when the deal ends.
    pub ends_at: i64,
    pub products: Vec<Product>,
}

impl FlashDeal {
    /// Seconds left at `now`, zero once over.
    pub fn remaining_secs(&self, now: i64) -> i64 {
        (self.ends_at - now).max(0)
    }

    pub fn is_over(&self, now: i64) -> bool {
        now >= self.ends_at
    }
}
