//! Order confirmation screen.

use crate::navigation::{Navigator, Route};
use chrono::{Local, NaiveDate};
use rand::Rng;

/// Confirmation shown after checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSuccessScreen {
    order_number: u32,
    date: NaiveDate,
}

impl OrderSuccessScreen {
    /// Confirmation with a random order number, dated today.
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng(), Local::now().date_naive())
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate) -> Self {
        Self {
            order_number: rng.gen_range(0..1_000_000),
            date,
        }
    }

    /// Six digits, zero padded.
    pub fn order_number(&self) -> String {
        format!("{:06}", self.order_number)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn title(&self) -> &'static str {
        "Order Placed Successfully!"
    }

    pub fn message(&self) -> &'static str {
        "Your order has been placed successfully. You will receive a confirmation email shortly."
    }

    pub fn continue_shopping<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.push(Route::Home);
    }

    pub fn view_orders<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.push(Route::Orders);
    }
}

impl Default for OrderSuccessScreen {
    fn default() -> Self {
        Self::new()
    }
}
