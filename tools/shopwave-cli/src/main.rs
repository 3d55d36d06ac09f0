//! ShopWave CLI - browse the storefront catalog from the terminal.
//!
//! Commands:
//! - `shopwave categories` - List categories
//! - `shopwave home` - Show the home screen sections
//! - `shopwave list <category-id>` - List a category, sorted
//! - `shopwave search <query>` - Search products
//! - `shopwave config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CategoriesArgs, ConfigArgs, HomeArgs, ListArgs, SearchArgs};

/// ShopWave CLI - browse categories, listings and search results
#[derive(Parser)]
#[command(name = "shopwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// JSON catalog file to use instead of the demo data
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List product categories
    Categories(CategoriesArgs),

    /// Show banners, flash deal and product sections
    Home(HomeArgs),

    /// List the products of one category
    List(ListArgs),

    /// Search products by name, brand, description or category
    Search(SearchArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = context::Context::load(cli.config.as_deref(), cli.catalog, output)?;

    let result = match cli.command {
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Home(args) => commands::home::run(args, &ctx).await,
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
