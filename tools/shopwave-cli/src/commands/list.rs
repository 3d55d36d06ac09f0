//! Category listing command.

use anyhow::{bail, Result};
use shopwave_catalog::listing::SortMode;
use shopwave_screens::CategoryScreen;

use super::{print_listing, ListArgs};
use crate::context::Context;

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let sort = resolve_sort(args.sort.as_deref(), ctx);

    let mut screen = CategoryScreen::new(args.category.as_str()).with_sort(sort);
    screen.load(&catalog).await;
    if let Some(error) = screen.error() {
        bail!("Failed to load category '{}': {}", args.category, error);
    }

    let favorites = ctx.favorites(&args.favorites);
    let listing = screen.products(catalog.directory(), &favorites);

    ctx.output.header(&format!(
        "{} · {}",
        screen.title(catalog.directory()),
        sort.display_name()
    ));
    if listing.is_empty() && !ctx.output.is_json() {
        ctx.output.info("No products found");
        return Ok(());
    }
    print_listing(ctx, &listing);

    Ok(())
}

/// `--sort`, falling back to newest on an unknown name, else the configured default.
fn resolve_sort(flag: Option<&str>, ctx: &Context) -> SortMode {
    match flag {
        Some(name) => name.parse().unwrap_or_else(|e| {
            ctx.output.warn(&format!("{e}; showing newest first"));
            SortMode::Newest
        }),
        None => ctx.config.listing.default_sort,
    }
}
