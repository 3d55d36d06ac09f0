//! Product search command.

use anyhow::{bail, Result};
use shopwave_catalog::CategoryId;
use shopwave_screens::{ListingView, SearchScreen};

use super::{print_listing, SearchArgs};
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    let mut screen = SearchScreen::new();
    screen.set_query(args.query.as_str());
    screen.select_category(args.category.as_deref().map(CategoryId::new));
    screen.refresh(&catalog).await;
    if let Some(error) = screen.error() {
        bail!("Search failed: {}", error);
    }

    let favorites = ctx.favorites(&args.favorites);
    let view = screen.view_state(catalog.directory(), &favorites);

    if ctx.output.is_json() {
        print_listing(ctx, view.products());
        return Ok(());
    }

    ctx.output.header(&format!("Results for \"{}\"", args.query));
    match &view {
        ListingView::Results(listing) => print_listing(ctx, listing),
        other => {
            if let Some((headline, hint)) = other.placeholder() {
                ctx.output.info(headline);
                ctx.output.info(hint);
            }
        }
    }

    Ok(())
}
