//! CLI execution context.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopwave_catalog::mock::MockCatalog;
use shopwave_catalog::ProductId;
use tracing::debug;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// `--catalog` override.
    catalog_override: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        catalog_override: Option<String>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if !config.display.color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
        debug!(config = ?config_path, "loaded cli config");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            catalog_override,
        })
    }

    /// Open the catalog: `--catalog`, then `[catalog] path`, then the demo data.
    pub fn catalog(&self) -> Result<MockCatalog> {
        let path = self
            .catalog_override
            .as_deref()
            .or(self.config.catalog.path.as_deref());

        match path {
            Some(path) => {
                let resolved = self.resolve_path(path);
                self.output
                    .debug(&format!("Loading catalog from {}", resolved.display()));
                MockCatalog::from_path(&resolved)
                    .with_context(|| format!("Failed to load catalog: {}", resolved.display()))
            }
            None => Ok(MockCatalog::demo()),
        }
    }

    /// Configured favorites plus the ones given on the command line.
    pub fn favorites(&self, extra: &[String]) -> HashSet<ProductId> {
        self.config
            .listing
            .favorites
            .iter()
            .cloned()
            .chain(extra.iter().map(|id| ProductId::new(id.as_str())))
            .collect()
    }

    /// Quiet context rooted at `dir`, for tests.
    #[cfg(test)]
    pub fn for_dir(dir: &Path, config: CliConfig) -> Self {
        Self {
            config,
            config_path: None,
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
            catalog_override: None,
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find config file in directory tree.
///
/// The nearest file wins. A file that exists but does not parse is an error
/// rather than a reason to keep looking.
pub fn find_config(start: &Path) -> Result<Option<(CliConfig, PathBuf)>> {
    for dir in start.ancestors() {
        for name in &CONFIG_NAMES {
            let config_path = dir.join(name);
            if config_path.is_file() {
                let config = CliConfig::load(&config_path)?;
                return Ok(Some((config, config_path)));
            }
        }
    }

    Ok(None)
}
