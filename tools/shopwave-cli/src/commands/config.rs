//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use shopwave_catalog::mock::MockCatalog;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(demo data)"),
    );

    ctx.output.info("");
    ctx.output.info("[listing]");
    ctx.output.kv("default_sort", ctx.config.listing.default_sort.as_str());
    if !ctx.config.listing.favorites.is_empty() {
        let ids: Vec<&str> = ctx.config.listing.favorites.iter().map(|id| id.as_str()).collect();
        ctx.output.kv("favorites", &ids.join(", "));
    }

    ctx.output.info("");
    ctx.output.info("[display]");
    ctx.output.kv(
        "show_original_price",
        &ctx.config.display.show_original_price.to_string(),
    );
    ctx.output.kv("color", &ctx.config.display.color.to_string());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("shopwave.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let path_errors = check_catalog_path(&ctx.config);
    let (errors, warnings) = if path_errors.is_empty() {
        check_config(&ctx.config, &ctx.catalog()?)
    } else {
        (path_errors, Vec::new())
    };

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Errors in the catalog path that make loading it pointless.
fn check_catalog_path(config: &CliConfig) -> Vec<String> {
    match &config.catalog.path {
        Some(path) if !path.ends_with(".json") => {
            vec![format!("catalog.path '{}' must be a .json file", path)]
        }
        _ => Vec::new(),
    }
}

/// Errors and warnings for a config checked against the catalog it opens.
fn check_config(config: &CliConfig, catalog: &MockCatalog) -> (Vec<String>, Vec<String>) {
    let errors = check_catalog_path(config);
    let mut warnings = Vec::new();

    for id in &config.listing.favorites {
        if !catalog.products().iter().any(|p| &p.id == id) {
            warnings.push(format!("listing.favorites: no product with id '{}'", id));
        }
    }

    if catalog.products().is_empty() {
        warnings.push("catalog has no products".to_string());
    }

    (errors, warnings)
}
