//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopwave_catalog::listing::SortMode;
use shopwave_catalog::ProductId;

/// Config file names searched from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["shopwave.toml", ".shopwave.toml", "shopwave.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Listing defaults.
    #[serde(default)]
    pub listing: ListingConfig,

    /// Terminal rendering.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(path, &content)
    }

    /// Parse config text, JSON when `path` has a `.json` extension, TOML otherwise.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Where products come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The demo data is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Listing defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Sort used by `list` when `--sort` is not given.
    #[serde(default)]
    pub default_sort: SortMode,

    /// Product ids always shown as favorites.
    #[serde(default)]
    pub favorites: Vec<ProductId>,
}

/// Terminal rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show the pre-discount price next to the sale price.
    #[serde(default = "default_true")]
    pub show_original_price: bool,

    /// Colored output.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_original_price: true,
            color: true,
        }
    }
}

/// Generate a default shopwave.toml config file.
pub fn generate_default_config() -> String {
    r#"# ShopWave CLI configuration

[catalog]
# JSON catalog file; the demo storefront is used when unset
# path = "catalog.json"

[listing]
# newest | price-asc | price-desc | rating
default_sort = "newest"
favorites = []

[display]
show_original_price = true
color = true
"#
    .to_string()
}
