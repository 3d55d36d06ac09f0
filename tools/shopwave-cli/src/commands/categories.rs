//! Category directory listing.

use anyhow::Result;
use serde::Serialize;
use shopwave_catalog::mock::MockCatalog;
use shopwave_catalog::CategoryId;

use super::CategoriesArgs;
use crate::context::Context;

/// One directory row with the number of products filed under it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryCount<'a> {
    id: &'a CategoryId,
    name: &'a str,
    product_count: usize,
}

/// Run the categories command.
pub async fn run(_args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let rows = category_counts(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Categories");
    for row in &rows {
        ctx.output.table_row(
            &[
                row.id.as_str(),
                row.name,
                &format!("{} products", row.product_count),
            ],
            &[4, 20, 12],
        );
    }

    Ok(())
}

fn category_counts(catalog: &MockCatalog) -> Vec<CategoryCount<'_>> {
    catalog
        .directory()
        .iter()
        .map(|category| CategoryCount {
            id: &category.id,
            name: &category.name,
            product_count: catalog
                .products()
                .iter()
                .filter(|p| p.category == category.name)
                .count(),
        })
        .collect()
}
