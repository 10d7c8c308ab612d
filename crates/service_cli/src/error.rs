//! Error types for the renewals CLI.

use adapter_loader::LoaderError;
use renewal_models::schedules::ScheduleError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input sheet could not be loaded
    #[error("Input error: {0}")]
    Load(#[from] LoaderError),

    /// Schedule error outside a batch record
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// A record failed with `--fail-fast` set
    #[error("Row {row} failed: {source}")]
    RecordFailed {
        /// 1-based data row number
        row: usize,
        /// Record failure
        #[source]
        source: ScheduleError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
