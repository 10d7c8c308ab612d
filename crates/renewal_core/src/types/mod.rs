//! Core time types.
//!
//! This module provides:
//! - `time`: `Date` wrapper with issue-date parsing and export formatting
//! - `error`: Structured error types for date construction and parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DateStyle`] from `time`
//! - [`DateError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::DateError;
pub use time::{Date, DateStyle};
