//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing

use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `InvalidFormat`: String matched none of the accepted date formats
///
/// # Examples
/// ```
/// use renewal_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2025, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2025-2-30");
///
/// let err = DateError::InvalidFormat { value: "31/31/2025".to_string() };
/// assert_eq!(format!("{}", err), "Unrecognised date format: '31/31/2025'");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// String matched none of the accepted date formats.
    #[error("Unrecognised date format: '{value}'")]
    InvalidFormat {
        /// The offending input, trimmed.
        value: String,
    },
}
