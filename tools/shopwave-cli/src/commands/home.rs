//! Home screen command.
//!
//! Sections are the demo storefront's; banners come from the active catalog.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use shopwave_catalog::catalog::{Banner, Category};
use shopwave_catalog::listing::ListedProduct;
use shopwave_screens::HomeScreen;

use super::{print_listing, HomeArgs};
use crate::context::Context;
use crate::output::format_duration;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HomeSummary<'a> {
    banners: &'a [Banner],
    categories: Vec<&'a Category>,
    flash_deal_ends_at: i64,
    flash_deals: Vec<ListedProduct>,
    featured: Vec<ListedProduct>,
    new_arrivals: Vec<ListedProduct>,
}

/// Run the home command.
pub async fn run(args: HomeArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let now = Utc::now().timestamp();

    let mut home = HomeScreen::demo(now);
    home.load(&catalog).await;
    if let Some(error) = home.error() {
        ctx.output.warn(&format!("Banners unavailable: {error}"));
    }

    let favorites = ctx.favorites(&args.favorites);
    let summary = HomeSummary {
        banners: home.banners(),
        categories: home.categories().iter().collect(),
        flash_deal_ends_at: home.flash_deal().ends_at,
        flash_deals: home.flash_deal_products(&favorites),
        featured: home.featured(&favorites),
        new_arrivals: home.new_arrivals(&favorites),
    };

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("Welcome to ShopWave");
    for banner in summary.banners {
        match &banner.subtitle {
            Some(subtitle) => ctx.output.list_item(&format!("{} - {}", banner.title, subtitle)),
            None => ctx.output.list_item(&banner.title),
        }
    }

    ctx.output.header("Categories");
    let names: Vec<&str> = summary.categories.iter().map(|c| c.name.as_str()).collect();
    ctx.output.info(&names.join(" · "));

    let remaining = home.flash_deal().remaining_secs(now) as u64;
    ctx.output.header(&format!(
        "{} (ends in {})",
        home.flash_deal().title,
        format_duration(remaining)
    ));
    print_listing(ctx, &summary.flash_deals);

    ctx.output.header("Featured Products");
    print_listing(ctx, &summary.featured);

    ctx.output.header("New Arrivals");
    print_listing(ctx, &summary.new_arrivals);

    Ok(())
}
