//! mdocs CLI - markdown documentation sets.
//!
//! Provides commands for:
//! - `sets`: List registered sets in priority order
//! - `index`: Show the page index
//! - `nav`: Show the navigation of a set
//! - `render`: Print the rendered HTML of a page

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mdocs_config::{CacheStoreKind, CliSettings, Config};
use tracing_subscriber::EnvFilter;

use commands::{IndexArgs, NavArgs, RenderArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml, used as the file cache version.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// mdocs - markdown documentation sets.
#[derive(Parser)]
#[command(name = "mdocs", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover mdocs.toml).
    #[arg(short, long, global = true, env = "MDOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Render cache backend: file, memory or none (overrides config).
    #[arg(long, global = true)]
    cache_store: Option<CacheStoreKind>,

    /// Don't store live renders in the cache (overrides config).
    #[arg(long, global = true)]
    no_write_back: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered sets in priority order.
    Sets,
    /// Show the page index.
    Index(IndexArgs),
    /// Show grouped navigation of a set.
    Nav(NavArgs),
    /// Print the rendered HTML of a page.
    Render(RenderArgs),
}

impl Cli {
    /// Load configuration with the global flags applied.
    fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            cache_store: self.cache_store,
            cache_dir: None,
            write_back: self.no_write_back.then_some(false),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.load_config()?;
    if let Some(path) = &config.config_path {
        tracing::info!(config = %path.display(), "loaded configuration");
    }
    let site = commands::build_site(&config, VERSION);
    let output = Output::new();

    match cli.command {
        Commands::Sets => commands::sets::execute(&site, &output),
        Commands::Index(args) => args.execute(&site, &output),
        Commands::Nav(args) => args.execute(&site, &output),
        Commands::Render(args) => args.execute(&site, &output),
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
