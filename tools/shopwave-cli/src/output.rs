//! Output formatting for the CLI.

use console::style;
use shopwave_catalog::catalog::Product;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Sale price, optionally followed by the original price and discount.
pub fn price_label(product: &Product, show_original: bool) -> String {
    let sale = product.sale_price().display();
    if show_original && product.has_discount() {
        format!(
            "{} (was {}, -{}%)",
            sale,
            product.price.display(),
            product.discount_percentage
        )
    } else {
        sale
    }
}

/// Star rating with review count.
pub fn rating_label(product: &Product) -> String {
    format!("★ {:.1} ({})", product.rating, product.review_count)
}

/// Heart marker for favorited products.
pub fn favorite_badge(is_favorite: bool) -> String {
    if is_favorite {
        style("♥").red().to_string()
    } else {
        " ".to_string()
    }
}

/// Format duration as human-readable string.
pub fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopwave_catalog::money::{Currency, Money};

    fn jacket() -> Product {
        Product::new("201", "Denim Jacket", "Fashion", Money::new(8999, Currency::USD))
            .with_discount(25.0)
            .with_rating(4.3, 245)
    }

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(&jacket(), true), "$67.49 (was $89.99, -25%)");
        assert_eq!(price_label(&jacket(), false), "$67.49");

        let plain = Product::new("x", "Mug", "Home", Money::new(1200, Currency::USD));
        assert_eq!(price_label(&plain, true), "$12.00");
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(rating_label(&jacket()), "★ 4.3 (245)");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(6 * 3600 + 60), "6h 1m");
    }
}
