//! Sort modes for product listings.

use crate::catalog::Product;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How a listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum SortMode {
    /// Keep provider order, which is assumed to be newest first.
    #[default]
    #[serde(rename = "newest")]
    Newest,
    /// Effective price, low to high.
    #[serde(rename = "price-asc")]
    PriceAsc,
    /// Effective price, high to low.
    #[serde(rename = "price-desc")]
    PriceDesc,
    /// Rating, high to low.
    #[serde(rename = "rating")]
    TopRated,
}

impl SortMode {
    /// All modes in menu order.
    pub const ALL: [SortMode; 4] = [
        SortMode::Newest,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::TopRated,
    ];

    /// Wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::TopRated => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Newest => "Newest",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::TopRated => "Top Rated",
        }
    }

    /// Parse a wire name, falling back to `Newest` for anything unknown.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(mode = s, "unknown sort mode, keeping input order");
            SortMode::Newest
        })
    }

    /// Compare two products under this mode.
    ///
    /// `Newest` treats every pair as equal, so a stable sort keeps input order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortMode::Newest => Ordering::Equal,
            SortMode::PriceAsc => a.effective_price().total_cmp(&b.effective_price()),
            SortMode::PriceDesc => b.effective_price().total_cmp(&a.effective_price()),
            SortMode::TopRated => b.rating.total_cmp(&a.rating),
        }
    }

    /// Whether this mode reorders its input at all.
    pub fn reorders(&self) -> bool {
        !matches!(self, SortMode::Newest)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// Unknown names fall back to `Newest` instead of failing the whole document.
impl<'de> Deserialize<'de> for SortMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(SortMode::parse_lenient(&name))
    }
}

/// Error for a sort mode name that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode: {0}")]
pub struct UnknownSortMode(pub String);

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortMode::Newest),
            "price-asc" => Ok(SortMode::PriceAsc),
            "price-desc" => Ok(SortMode::PriceDesc),
            "rating" => Ok(SortMode::TopRated),
            _ => Err(UnknownSortMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    #[test]
    fn test_wire_names_round_trip() {
        for mode in SortMode::ALL {
            assert_eq!(mode.as_str().parse::<SortMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_parse_lenient_falls_back_to_newest() {
        assert_eq!(SortMode::parse_lenient("price-desc"), SortMode::PriceDesc);
        assert_eq!(SortMode::parse_lenient("alphabetical"), SortMode::Newest);
        assert_eq!(SortMode::parse_lenient(""), SortMode::Newest);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&SortMode::TopRated).unwrap();
        assert_eq!(json, "\"rating\"");
        let mode: SortMode = serde_json::from_str("\"price-asc\"").unwrap();
        assert_eq!(mode, SortMode::PriceAsc);
    }

    #[test]
    fn test_deserialize_unknown_name_is_newest() {
        let mode: SortMode = serde_json::from_str("\"cheapest\"").unwrap();
        assert_eq!(mode, SortMode::Newest);
        assert!(serde_json::from_str::<SortMode>("3").is_err());
    }

    #[test]
    fn test_nan_compares_deterministically() {
        let nan = Product::new("n", "N", "X", Money::new(100, Currency::USD)).with_rating(f64::NAN, 1);
        let rated = Product::new("r", "R", "X", Money::new(100, Currency::USD)).with_rating(4.0, 1);
        let first = SortMode::TopRated.compare(&nan, &rated);
        assert_eq!(SortMode::TopRated.compare(&nan, &rated), first);
        assert_eq!(SortMode::TopRated.compare(&rated, &nan), first.reverse());
        assert_eq!(SortMode::TopRated.compare(&nan, &nan), Ordering::Equal);
    }

    #[test]
    fn test_compare_by_effective_price() {
        let a = Product::new("a", "A", "X", Money::new(10000, Currency::USD));
        let b = Product::new("b", "B", "X", Money::new(5000, Currency::USD)).with_discount(50.0);
        assert_eq!(SortMode::PriceAsc.compare(&a, &b), Ordering::Greater);
        assert_eq!(SortMode::PriceDesc.compare(&a, &b), Ordering::Less);
        assert_eq!(SortMode::Newest.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SortMode::PriceAsc.to_string(), "Price: Low to High");
        assert_eq!(SortMode::TopRated.to_string(), "Top Rated");
    }
}
