//! Time types for renewal schedule calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DateStyle`: The export formats used by the policy sheets
//! - Issue-date parsing across the formats found in spreadsheet exports
//!
//! # Examples
//!
//! ```
//! use renewal_core::types::time::{Date, DateStyle};
//!
//! let issued = Date::parse_issue_date("2024-01-31 00:00:00").unwrap();
//! assert_eq!(issued, Date::from_ymd(2024, 1, 31).unwrap());
//!
//! // Grace offsets are plain calendar-day additions
//! let grace = issued.add_days(30);
//! assert_eq!(grace.format_style(DateStyle::Slash), "01/03/2024");
//! ```

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Date-only formats accepted for issue dates, tried in order.
///
/// Day-first layouts come before year-first ones, matching the
/// day/month/year convention of the source sheets.
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d"];

/// Date-time formats accepted for issue dates; the time part is discarded.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
];

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and the calendar arithmetic
/// needed for due-date schedules.
///
/// # Examples
///
/// ```
/// use renewal_core::types::time::Date;
///
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// assert_eq!(date.year(), 2025);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2025-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Days between dates
/// let later = Date::from_ymd(2025, 7, 15).unwrap();
/// assert_eq!(later - date, 30);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use renewal_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2025, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses an issue date as it appears in a policy sheet.
    ///
    /// Accepts day-first dates (`15/03/2025`, `15-03-2025`, `15.03.2025`),
    /// ISO dates (`2025-03-15`, `2025/03/15`) and ISO date-times
    /// (`2025-03-15 00:00:00`, `2025-03-15T08:30:00`). Surrounding
    /// whitespace is ignored.
    ///
    /// # Errors
    ///
    /// `DateError::InvalidFormat` when the value is empty or matches
    /// none of the formats.
    ///
    /// # Examples
    ///
    /// ```
    /// use renewal_core::types::time::Date;
    ///
    /// let expected = Date::from_ymd(2025, 3, 15).unwrap();
    /// assert_eq!(Date::parse_issue_date(" 15/03/2025 ").unwrap(), expected);
    /// assert_eq!(Date::parse_issue_date("2025-03-15 00:00:00").unwrap(), expected);
    /// assert!(Date::parse_issue_date("marzo 2025").is_err());
    /// ```
    pub fn parse_issue_date(s: &str) -> Result<Self, DateError> {
        let value = s.trim();
        if value.is_empty() {
            return Err(DateError::InvalidFormat {
                value: String::new(),
            });
        }

        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                    .map(|dt| dt.date())
            })
            .map(Date)
            .ok_or_else(|| DateError::InvalidFormat {
                value: value.to_string(),
            })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| DateError::InvalidFormat {
                value: s.to_string(),
            })
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of calendar days.
    ///
    /// No clamping or business-day adjustment: month and year
    /// boundaries are crossed as the calendar dictates.
    ///
    /// # Examples
    ///
    /// ```
    /// use renewal_core::types::time::Date;
    ///
    /// let renewal = Date::from_ymd(2025, 12, 20).unwrap();
    /// assert_eq!(renewal.add_days(45), Date::from_ymd(2026, 2, 3).unwrap());
    /// ```
    pub fn add_days(self, days: u64) -> Self {
        Date(self.0 + Days::new(days))
    }

    /// Formats the date with a chrono format pattern.
    pub fn format_with(&self, pattern: &str) -> String {
        self.0.format(pattern).to_string()
    }

    /// Formats the date in one of the export styles.
    pub fn format_style(&self, style: DateStyle) -> String {
        self.format_with(style.pattern())
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day-first export styles used by the policy sheets.
///
/// # Examples
///
/// ```
/// use renewal_core::types::time::{Date, DateStyle};
///
/// let date = Date::from_ymd(2025, 1, 5).unwrap();
/// assert_eq!(date.format_style(DateStyle::Slash), "05/01/2025");
/// assert_eq!(date.format_style(DateStyle::Dash), "05-01-2025");
/// assert_eq!(date.format_style(DateStyle::Iso), "2025-01-05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DateStyle {
    /// `dd/mm/yyyy`
    #[default]
    Slash,
    /// `dd-mm-yyyy`
    Dash,
    /// `yyyy-mm-dd`
    Iso,
}

impl DateStyle {
    /// Returns the chrono format pattern for this style.
    #[inline]
    pub fn pattern(&self) -> &'static str {
        match self {
            DateStyle::Slash => "%d/%m/%Y",
            DateStyle::Dash => "%d-%m-%Y",
            DateStyle::Iso => "%Y-%m-%d",
        }
    }
}

impl FromStr for DateStyle {
    type Err = String;

    /// Parses a style by name or by its sample layout (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slash" | "dd/mm/yyyy" => Ok(DateStyle::Slash),
            "dash" | "dd-mm-yyyy" => Ok(DateStyle::Dash),
            "iso" | "yyyy-mm-dd" => Ok(DateStyle::Iso),
            _ => Err(format!("Unknown date style: {}", s)),
        }
    }
}
