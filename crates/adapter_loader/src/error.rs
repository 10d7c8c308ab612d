//! Error types for policy sheet loading.

use std::path::PathBuf;
use thiserror::Error;

/// Whole-file loading failure.
///
/// Per-row problems (bad dates, unknown frequencies) are not loader errors;
/// they surface later as `ScheduleError`s on the affected record.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The input file could not be opened or read.
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV content is malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is not present in the header row.
    #[error("Missing required column '{column}' (found: {})", available.join(", "))]
    MissingColumn {
        /// Configured column name.
        column: String,
        /// Header names present in the file.
        available: Vec<String>,
    },
}

impl LoaderError {
    /// Create a missing-column error.
    pub fn missing_column(column: impl Into<String>, available: &[String]) -> Self {
        Self::MissingColumn {
            column: column.into(),
            available: available.to_vec(),
        }
    }
}
