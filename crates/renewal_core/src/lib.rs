//! # renewal_core: Calendar Foundation for Renewal Schedules
//!
//! ## Layer 1 (Foundation) Role
//!
//! renewal_core is the bottom layer of the workspace, providing:
//! - Time types: `Date`, `DateStyle` (`types::time`)
//! - Calendar arithmetic: `clamp`, `days_in_month`, `MonthCursor` (`calendar`)
//! - Error types: `DateError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other renewal_* crates, with minimal external dependencies:
//! - chrono: Date arithmetic and parsing
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use renewal_core::calendar::clamp;
//! use renewal_core::types::{Date, DateStyle};
//!
//! // Day 31 does not exist in April
//! let due = clamp(2025, 4, 31);
//! assert_eq!(due, Date::from_ymd(2025, 4, 30).unwrap());
//!
//! // Issue dates arrive in several spreadsheet formats
//! let issued = Date::parse_issue_date("15/03/2025").unwrap();
//! assert_eq!(issued.format_style(DateStyle::Dash), "15-03-2025");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Date` and `DateStyle`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calendar;
pub mod types;
