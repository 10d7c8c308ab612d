//! Renewal run configuration.
//!
//! Handles loading of `renewals.toml` with environment variable override
//! support. Command line flags are applied on top by the caller.

use adapter_loader::ColumnMapping;
use renewal_core::types::DateStyle;
use renewal_models::schedules::{ComputationWindow, ProductLine};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Earliest window year accepted by validation.
const MIN_YEAR: i32 = 1900;
/// Latest window year accepted by validation.
const MAX_YEAR: i32 = 9999;

/// Renewal run configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenewalConfig {
    /// First calendar year of the computation window
    pub start_year: i32,

    /// Last calendar year of the computation window
    pub end_year: i32,

    /// Product line of the input sheet
    pub product: ProductLine,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Label the 45-day grace column `Amparo_15_días` as the old sheets did
    pub legacy_grace_label: bool,

    /// Output date style; defaults to the product line's style
    pub date_style: Option<DateStyle>,

    /// CSV field delimiter for input and output
    pub delimiter: char,

    /// Input column names
    pub columns: ColumnMapping,
}

impl Default for RenewalConfig {
    fn default() -> Self {
        Self {
            start_year: 2025,
            end_year: 2026,
            product: ProductLine::Traditional,
            log_level: "info".to_string(),
            legacy_grace_label: false,
            date_style: None,
            delimiter: ',',
            columns: ColumnMapping::default(),
        }
    }
}

impl RenewalConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(year) = std::env::var("RENEWALS_START_YEAR") {
            if let Ok(year) = year.trim().parse() {
                self.start_year = year;
            }
        }

        if let Ok(year) = std::env::var("RENEWALS_END_YEAR") {
            if let Ok(year) = year.trim().parse() {
                self.end_year = year;
            }
        }

        if let Ok(log_level) = std::env::var("RENEWALS_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(product) = std::env::var("RENEWALS_PRODUCT") {
            if let Ok(product) = product.parse() {
                self.product = product;
            }
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        for (name, year) in [("start_year", self.start_year), ("end_year", self.end_year)] {
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                errors.push(format!(
                    "{} {} is outside {}..={}",
                    name, year, MIN_YEAR, MAX_YEAR
                ));
            }
        }

        if self.start_year > self.end_year {
            errors.push(format!(
                "start_year {} is after end_year {}",
                self.start_year, self.end_year
            ));
        }

        if !self.delimiter.is_ascii() || self.delimiter.is_ascii_alphanumeric() {
            errors.push(format!(
                "Invalid delimiter '{}'. Must be a single ASCII punctuation or whitespace character",
                self.delimiter
            ));
        }

        let columns = [
            ("columns.issue_date", &self.columns.issue_date),
            ("columns.payment_day", &self.columns.payment_day),
            ("columns.frequency", &self.columns.frequency),
        ];
        for (name, value) in columns {
            if value.trim().is_empty() {
                errors.push(format!("{} cannot be empty", name));
            }
        }
        if self.columns.issue_date.trim().eq_ignore_ascii_case(self.columns.frequency.trim()) {
            errors.push("columns.issue_date and columns.frequency must differ".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Builds the computation window from the configured years
    pub fn window(&self) -> Result<ComputationWindow, ConfigError> {
        ComputationWindow::from_years(self.start_year, self.end_year)
            .map_err(|e| ConfigError::Validation(vec![e.to_string()]))
    }

    /// Returns the output date style
    pub fn output_date_style(&self) -> DateStyle {
        self.date_style.unwrap_or_else(|| self.product.date_style())
    }

    /// Returns the delimiter as a CSV byte
    pub fn delimiter_byte(&self) -> u8 {
        // validated as ASCII
        self.delimiter as u8
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
