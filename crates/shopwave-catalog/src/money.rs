//! Prices.
//!
//! Amounts are integer minor units. Discounted prices used for ordering stay
//! unrounded so that two products whose sale prices round to the same cent
//! still compare by their exact value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency a catalog is priced in. The storefront sells in dollars only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }

    /// Minor units per major unit.
    fn scale(&self) -> i64 {
        match self {
            Currency::USD => 100,
        }
    }
}

/// A price in minor units of one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Price from a dollar amount as the mock data writes it.
    ///
    /// ```
    /// use shopwave_catalog::money::{Money, Currency};
    /// assert_eq!(Money::from_decimal(49.99, Currency::USD).amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let cents = (amount * currency.scale() as f64).round() as i64;
        Self::new(cents, currency)
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Label such as `$49.99`.
    pub fn display(&self) -> String {
        let scale = self.currency.scale();
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.amount_cents.abs();
        format!("{sign}{}{}.{:02}", self.currency.symbol(), abs / scale, abs % scale)
    }

    /// Amount in minor units after taking `percent` off, without rounding.
    pub fn discounted_minor_units(&self, percent: f64) -> f64 {
        self.amount_cents as f64 * (1.0 - percent / 100.0)
    }

    /// Price after taking `percent` off, rounded to the nearest minor unit.
    pub fn apply_discount(&self, percent: f64) -> Money {
        Money::new(self.discounted_minor_units(percent).round() as i64, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_rounds_to_cents() {
        assert_eq!(Money::from_decimal(49.99, Currency::USD).amount_cents, 4999);
        assert_eq!(Money::from_decimal(0.005, Currency::USD).amount_cents, 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(5, Currency::USD).to_string(), "$0.05");
        assert_eq!(Money::new(-250, Currency::USD).display(), "-$2.50");
    }

    #[test]
    fn test_apply_discount() {
        let m = Money::new(5000, Currency::USD);
        assert_eq!(m.apply_discount(50.0).amount_cents, 2500);
        assert_eq!(m.apply_discount(0.0), m);
        assert_eq!(m.apply_discount(100.0).amount_cents, 0);
    }

    #[test]
    fn test_discounted_minor_units_keeps_fraction() {
        let m = Money::new(999, Currency::USD);
        let exact = m.discounted_minor_units(15.0);
        assert!((exact - 849.15).abs() < 1e-9);
        assert_eq!(m.apply_discount(15.0).amount_cents, 849);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Money::new(100, Currency::USD)).unwrap();
        assert_eq!(json["amount_cents"], 100);
        assert_eq!(json["currency"], "USD");
    }
}
