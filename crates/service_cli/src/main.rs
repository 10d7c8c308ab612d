//! Renewals CLI - batch due-date schedules for insurance policies
//!
//! Reads a policy sheet, computes each policy's renewal date, due-date
//! grid and grace dates within a configured window, and writes the
//! enriched sheet.
//!
//! # Commands
//!
//! - `renewals schedule --input <csv> --output <file>` - Compute schedules
//! - `renewals check` - Validate the configuration and print the window
//!
//! # Configuration
//!
//! Settings come from `renewals.toml` (or `--config`), then `RENEWALS_*`
//! environment variables, then command line flags.

use clap::{Parser, Subcommand};
use renewal_models::schedules::ProductLine;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod export;

pub use error::{CliError, Result};

use commands::schedule::ScheduleOptions;
use config::RenewalConfig;
use export::OutputFormat;

/// Policy renewal schedule generator
#[derive(Parser)]
#[command(name = "renewals")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "renewals.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute renewal schedules for a policy sheet
    Schedule {
        /// Input CSV sheet
        #[arg(short, long)]
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Product line (traditional, flexible)
        #[arg(short, long)]
        product: Option<ProductLine>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// First year of the computation window
        #[arg(long)]
        start_year: Option<i32>,

        /// Last year of the computation window
        #[arg(long)]
        end_year: Option<i32>,

        /// Stop at the first record that cannot be scheduled
        #[arg(long)]
        fail_fast: bool,
    },

    /// Validate the configuration and print the computation window
    Check,
}

fn init_tracing(config: &RenewalConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = RenewalConfig::load_or_default(&cli.config)?.with_env_override();

    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!(config = %cli.config.display(), "Verbose mode enabled");
    }

    match cli.command {
        Commands::Schedule {
            input,
            output,
            product,
            format,
            start_year,
            end_year,
            fail_fast,
        } => {
            if let Some(product) = product {
                config.product = product;
            }
            if let Some(year) = start_year {
                config.start_year = year;
            }
            if let Some(year) = end_year {
                config.end_year = year;
            }

            let options = ScheduleOptions {
                input,
                output,
                format,
                fail_fast,
            };
            commands::schedule::run(&config, &options)?;
        }
        Commands::Check => commands::check::run(&config)?,
    }

    Ok(())
}
