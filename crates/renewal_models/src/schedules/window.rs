//! Computation window bounding every generated schedule.

use super::error::ScheduleError;
use renewal_core::types::Date;
use std::fmt;
use std::ops::RangeInclusive;

/// Inclusive date range within which due dates are generated.
///
/// Fixed for a whole run and shared read-only by every record.
///
/// # Examples
///
/// ```
/// use renewal_models::schedules::ComputationWindow;
/// use renewal_core::types::Date;
///
/// let window = ComputationWindow::from_years(2025, 2026).unwrap();
/// assert_eq!(window.start(), Date::from_ymd(2025, 1, 1).unwrap());
/// assert_eq!(window.end(), Date::from_ymd(2026, 12, 31).unwrap());
/// assert_eq!(window.years().count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComputationWindow {
    start: Date,
    end: Date,
}

impl ComputationWindow {
    /// Creates a window from explicit bounds.
    ///
    /// # Errors
    ///
    /// `ScheduleError::InvalidWindow` if `start > end`.
    pub fn new(start: Date, end: Date) -> Result<Self, ScheduleError> {
        if start > end {
            return Err(ScheduleError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the window `[Jan 1 start_year, Dec 31 end_year]`.
    ///
    /// # Errors
    ///
    /// `ScheduleError::InvalidWindow` if `start_year > end_year`, or
    /// `ScheduleError::WindowYearOutOfRange` for years chrono cannot represent.
    pub fn from_years(start_year: i32, end_year: i32) -> Result<Self, ScheduleError> {
        let start = Date::from_ymd(start_year, 1, 1)
            .map_err(|_| ScheduleError::WindowYearOutOfRange { year: start_year })?;
        let end = Date::from_ymd(end_year, 12, 31)
            .map_err(|_| ScheduleError::WindowYearOutOfRange { year: end_year })?;
        Self::new(start, end)
    }

    /// Returns the first date of the window.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the last date of the window.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns whether `date` lies within the window (inclusive).
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the calendar years the window touches.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start.year()..=self.end.year()
    }

    /// Returns the year a policy's cycle starts in.
    ///
    /// A policy issued before the window starts its cycle in the window's
    /// first year; a policy issued later starts in its own issue year.
    #[inline]
    pub fn anchor_year(&self, issue_date: Date) -> i32 {
        issue_date.year().max(self.start.year())
    }
}

impl fmt::Display for ComputationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_from_years() {
        let window = ComputationWindow::from_years(2025, 2026).unwrap();
        assert_eq!(window.start(), ymd(2025, 1, 1));
        assert_eq!(window.end(), ymd(2026, 12, 31));
        assert_eq!(window.years().collect::<Vec<_>>(), vec![2025, 2026]);
    }

    #[test]
    fn test_single_year_window() {
        let window = ComputationWindow::from_years(2025, 2025).unwrap();
        assert_eq!(window.years().collect::<Vec<_>>(), vec![2025]);
    }

    #[test]
    fn test_reversed_years_rejected() {
        let err = ComputationWindow::from_years(2027, 2025).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidWindow {
                start: ymd(2027, 1, 1),
                end: ymd(2025, 12, 31)
            }
        );
    }

    #[test]
    fn test_out_of_range_year_rejected() {
        let err = ComputationWindow::from_years(2025, 1_000_000).unwrap_err();
        assert_eq!(err, ScheduleError::WindowYearOutOfRange { year: 1_000_000 });
    }

    #[test]
    fn test_contains_is_inclusive() {
        let window = ComputationWindow::from_years(2025, 2026).unwrap();
        assert!(window.contains(ymd(2025, 1, 1)));
        assert!(window.contains(ymd(2026, 12, 31)));
        assert!(!window.contains(ymd(2024, 12, 31)));
        assert!(!window.contains(ymd(2027, 1, 1)));
    }

    #[test]
    fn test_anchor_year() {
        let window = ComputationWindow::from_years(2025, 2026).unwrap();
        assert_eq!(window.anchor_year(ymd(2019, 8, 14)), 2025);
        assert_eq!(window.anchor_year(ymd(2026, 3, 1)), 2026);
        assert_eq!(window.anchor_year(ymd(2027, 1, 1)), 2027);
    }

    #[test]
    fn test_display() {
        let window = ComputationWindow::from_years(2025, 2026).unwrap();
        assert_eq!(window.to_string(), "[2025-01-01, 2026-12-31]");
    }
}
