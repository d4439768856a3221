//! laptop-specs - Laptop specification extraction and scoring CLI
//!
//! Normalizes scraped marketplace product payloads into structured,
//! comparable laptop specification records.

use anyhow::Result;
use clap::{Parser, Subcommand};
use laptop_specs::commands::{compare, NormalizeCommand, ScoreCommand};
use laptop_specs::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "laptop-specs",
    version,
    about = "Laptop specification extraction and scoring CLI",
    long_about = "Extracts structured laptop specifications (processor, RAM, storage, graphics, display, weight) from noisy scraped product listings, scores them per dimension, and compares products head to head."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract and normalize products from a raw payload file
    #[command(alias = "n")]
    Normalize {
        /// JSON file with one payload object or an array of them
        file: PathBuf,

        /// Print batch extraction statistics after the results
        #[arg(long)]
        stats: bool,
    },

    /// Score products per specification dimension
    #[command(alias = "s")]
    Score {
        /// JSON file with one payload object or an array of them
        file: PathBuf,
    },

    /// Compare two products field by field
    #[command(alias = "c")]
    Compare {
        /// JSON file with exactly two payload objects
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;

    match cli.command {
        Commands::Normalize { file, stats } => {
            let cmd = NormalizeCommand::new(config);
            let output = cmd.execute(&file, stats)?;
            println!("{}", output);
        }

        Commands::Score { file } => {
            let cmd = ScoreCommand::new(config);
            let output = cmd.execute(&file)?;
            println!("{}", output);
        }

        Commands::Compare { file } => {
            let output = compare::execute(&config, &file)?;
            println!("{}", output);
        }
    }

    Ok(())
}
