//! CLI command implementations.

pub mod categories;
pub mod config;
pub mod home;
pub mod list;
pub mod search;

use clap::{Args, Subcommand};
use shopwave_catalog::listing::ListedProduct;

use crate::context::Context;
use crate::output::{favorite_badge, price_label, rating_label};

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {}

/// Arguments for the home command.
#[derive(Args)]
pub struct HomeArgs {
    /// Product ids to mark as favorites.
    #[arg(short, long = "favorite")]
    pub favorites: Vec<String>,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Category id.
    pub category: String,

    /// Sort order: newest, price-asc, price-desc or rating.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Product ids to mark as favorites.
    #[arg(short, long = "favorite")]
    pub favorites: Vec<String>,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text.
    pub query: String,

    /// Only keep results from this category id.
    #[arg(long)]
    pub category: Option<String>,

    /// Product ids to mark as favorites.
    #[arg(short, long = "favorite")]
    pub favorites: Vec<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config against the catalog.
    Validate,
}

/// Print a product grid as a table, or as JSON in `--json` mode.
pub fn print_listing(ctx: &Context, listing: &[ListedProduct]) {
    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return;
    }

    let widths = [1, 6, 40, 28, 16];
    for item in listing {
        let product = &item.product;
        ctx.output.table_row(
            &[
                &favorite_badge(item.is_favorite),
                product.id.as_str(),
                &product.name,
                &price_label(product, ctx.config.display.show_original_price),
                &rating_label(product),
            ],
            &widths,
        );
    }
}
