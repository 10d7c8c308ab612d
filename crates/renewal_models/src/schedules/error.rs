//! Schedule generation error types.

use super::frequency::Frequency;
use super::product::ProductLine;
use renewal_core::types::{Date, DateError};
use thiserror::Error;

/// Errors that can occur while building a renewal schedule.
///
/// Every variant except `InvalidWindow` is a per-record validation
/// failure: it describes one bad input row and never affects others.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Issue date matched none of the accepted formats.
    #[error("Invalid issue date format: '{value}'")]
    InvalidDateFormat {
        /// The raw issue date value.
        value: String,
    },

    /// Frequency label matched no frequency offered by the product line.
    #[error("Unknown payment frequency '{label}' for {product} products")]
    UnknownFrequency {
        /// The raw frequency label.
        label: String,
        /// The product line the label was resolved against.
        product: ProductLine,
    },

    /// The generator produced no due dates inside the window.
    #[error("No {frequency} due dates for issue date {issue_date} between {start} and {end}")]
    EmptySchedule {
        /// The policy issue date.
        issue_date: Date,
        /// The resolved frequency.
        frequency: Frequency,
        /// Window start.
        start: Date,
        /// Window end.
        end: Date,
    },

    /// Window start must not be after window end.
    #[error("Window start {start} must not be after window end {end}")]
    InvalidWindow {
        /// The start date.
        start: Date,
        /// The end date.
        end: Date,
    },

    /// Window year outside the representable calendar.
    #[error("Window year {year} is out of range")]
    WindowYearOutOfRange {
        /// The offending year.
        year: i32,
    },
}

impl ScheduleError {
    /// Returns a short machine-friendly name for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ScheduleError::InvalidDateFormat { .. } => "invalid_date_format",
            ScheduleError::UnknownFrequency { .. } => "unknown_frequency",
            ScheduleError::EmptySchedule { .. } => "empty_schedule",
            ScheduleError::InvalidWindow { .. } => "invalid_window",
            ScheduleError::WindowYearOutOfRange { .. } => "window_year_out_of_range",
        }
    }
}

impl From<DateError> for ScheduleError {
    fn from(err: DateError) -> Self {
        match err {
            DateError::InvalidFormat { value } => ScheduleError::InvalidDateFormat { value },
            DateError::InvalidDate { year, month, day } => ScheduleError::InvalidDateFormat {
                value: format!("{}-{}-{}", year, month, day),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_frequency_display() {
        let err = ScheduleError::UnknownFrequency {
            label: "Semanal".to_string(),
            product: ProductLine::Traditional,
        };
        assert_eq!(
            err.to_string(),
            "Unknown payment frequency 'Semanal' for Traditional products"
        );
        assert_eq!(err.kind(), "unknown_frequency");
    }

    #[test]
    fn test_empty_schedule_display() {
        let err = ScheduleError::EmptySchedule {
            issue_date: Date::from_ymd(2027, 1, 1).unwrap(),
            frequency: Frequency::Monthly,
            start: Date::from_ymd(2025, 1, 1).unwrap(),
            end: Date::from_ymd(2026, 12, 31).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "No Monthly due dates for issue date 2027-01-01 between 2025-01-01 and 2026-12-31"
        );
    }

    #[test]
    fn test_from_date_error() {
        let err: ScheduleError = DateError::InvalidFormat {
            value: "32/01/2025".to_string(),
        }
        .into();
        assert_eq!(
            err,
            ScheduleError::InvalidDateFormat {
                value: "32/01/2025".to_string()
            }
        );
        assert_eq!(err.kind(), "invalid_date_format");
    }
}
