//! Quill CLI
//!
//! Command-line interface for Quill - a filesystem-backed JSON document store.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use quill_core::{Driver, Options};

mod commands;
mod config;
mod models;
mod output;

use config::Config;
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Quill - a tiny JSON document store on your filesystem")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Store root directory (overrides config and QUILL_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a JSON document
    Put {
        collection: String,
        resource: String,
        /// Document body as JSON
        json: String,
    },
    /// Print a document
    Get { collection: String, resource: String },
    /// Print every document in a collection
    #[command(alias = "ls")]
    List { collection: String },
    /// Delete a document, or the whole collection when no resource is given
    #[command(alias = "rm")]
    Delete {
        collection: String,
        resource: Option<String>,
    },
    /// Fill the store with demo data
    Seed {
        #[command(subcommand)]
        command: SeedCommands,
    },
    /// Show configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum SeedCommands {
    /// Write onefish, twofish, redfish and bluefish
    Fish,
    /// Write randomly generated people
    People {
        /// Number of people to generate
        #[arg(short, long, default_value_t = 100)]
        count: usize,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    let config = Config::load()
        .context("Failed to load configuration")?
        .with_data_dir(cli.data_dir.clone());

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    init_logging(level);

    if let Commands::Config { .. } = cli.command {
        return commands::config::show(&config, &output);
    }

    let db = Driver::open(&config.data_dir, Options::default())
        .with_context(|| format!("Failed to open store at {:?}", config.data_dir))?;
    debug!("Opened store at {:?}", db.root());

    match cli.command {
        Commands::Put {
            collection,
            resource,
            json,
        } => commands::document::put(&db, &collection, &resource, &json, &output),
        Commands::Get {
            collection,
            resource,
        } => commands::document::get(&db, &collection, &resource, &output),
        Commands::List { collection } => commands::document::list(&db, &collection, &output),
        Commands::Delete {
            collection,
            resource,
        } => commands::document::remove(&db, &collection, resource.as_deref(), &output),
        Commands::Seed { command } => match command {
            SeedCommands::Fish => commands::seed::fish(&db, &output),
            SeedCommands::People { count } => commands::seed::people(&db, count, &output),
        },
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

/// Install the console logger on stderr
fn init_logging(level: &str) {
    let env_filter = EnvFilter::new(format!("quill_core={},quill={}", level, level));

    // Ignore the error if a subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
