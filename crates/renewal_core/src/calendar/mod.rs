//! Calendar arithmetic for due-date generation.
//!
//! This module centralises the two pieces of month arithmetic every
//! schedule variant relies on:
//! - [`clamp`]: reduce a day-of-month to the last valid day of its month
//! - [`MonthCursor`]: step through `(year, month)` pairs with December → January wraparound
//!
//! # Examples
//!
//! ```
//! use renewal_core::calendar::{clamp, MonthCursor};
//! use renewal_core::types::Date;
//!
//! let mut cursor = MonthCursor::new(2025, 11);
//! cursor.advance(3);
//! assert_eq!((cursor.year(), cursor.month()), (2026, 2));
//! assert_eq!(cursor.clamp_day(31), Date::from_ymd(2026, 2, 28).unwrap());
//! assert_eq!(clamp(2028, 2, 30), Date::from_ymd(2028, 2, 29).unwrap());
//! ```

use crate::types::Date;
use chrono::NaiveDate;

/// Returns whether `year` is a Gregorian leap year.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `(year, month)`.
///
/// # Panics
///
/// Panics if `month` is outside 1..=12.
#[inline]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("month must be in 1..=12, got {}", month),
    }
}

/// Builds a valid date, reducing `day` to the last day of the month when it overflows.
///
/// Callers normalise month wraparound first (see [`MonthCursor`]); a day of
/// zero is treated as the first of the month.
///
/// # Panics
///
/// Panics if `month` is outside 1..=12.
///
/// # Examples
///
/// ```
/// use renewal_core::calendar::clamp;
/// use renewal_core::types::Date;
///
/// assert_eq!(clamp(2025, 2, 31), Date::from_ymd(2025, 2, 28).unwrap());
/// assert_eq!(clamp(2024, 2, 31), Date::from_ymd(2024, 2, 29).unwrap());
/// assert_eq!(clamp(2025, 3, 10), Date::from_ymd(2025, 3, 10).unwrap());
/// ```
pub fn clamp(year: i32, month: u32, day: u32) -> Date {
    let last_day = days_in_month(year, month);
    let day = day.clamp(1, last_day);
    NaiveDate::from_ymd_opt(year, month, day)
        .map(Date::from)
        .unwrap_or_else(|| panic!("clamped date {}-{}-{} out of chrono range", year, month, day))
}

/// A `(year, month)` position that steps forward with wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Creates a cursor at `(year, month)`.
    ///
    /// # Panics
    ///
    /// Panics if `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Self {
        assert!(
            (1..=12).contains(&month),
            "month must be in 1..=12, got {}",
            month
        );
        Self { year, month }
    }

    /// Creates a cursor at the month containing `date`.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the cursor year.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the cursor month (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Moves the cursor forward by `step` months.
    pub fn advance(&mut self, step: u32) {
        self.month += step;
        while self.month > 12 {
            self.month -= 12;
            self.year += 1;
        }
    }

    /// Returns a copy moved forward by `step` months.
    pub fn advanced(mut self, step: u32) -> Self {
        self.advance(step);
        self
    }

    /// Returns the cursor month with `day` clamped into it.
    pub fn clamp_day(&self, day: u32) -> Date {
        clamp(self.year, self.month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2028));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(2026));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_days_in_every_month() {
        let common = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        let leap = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u32 {
            assert_eq!(days_in_month(2025, month), common[month as usize - 1]);
            assert_eq!(days_in_month(2024, month), leap[month as usize - 1]);
        }
    }

    #[test]
    #[should_panic(expected = "month must be in 1..=12")]
    fn test_days_in_month_rejects_month_13() {
        days_in_month(2025, 13);
    }

    #[test]
    fn test_clamp_day_31_every_month() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u32 {
            assert_eq!(
                clamp(2025, month, 31),
                ymd(2025, month, expected[month as usize - 1])
            );
        }
    }

    #[test]
    fn test_clamp_leap_february() {
        assert_eq!(clamp(2024, 2, 29), ymd(2024, 2, 29));
        assert_eq!(clamp(2024, 2, 30), ymd(2024, 2, 29));
        assert_eq!(clamp(2025, 2, 29), ymd(2025, 2, 28));
    }

    #[test]
    fn test_clamp_keeps_valid_day() {
        assert_eq!(clamp(2025, 6, 15), ymd(2025, 6, 15));
        assert_eq!(clamp(2025, 6, 1), ymd(2025, 6, 1));
    }

    #[test]
    fn test_clamp_day_zero_is_first() {
        assert_eq!(clamp(2025, 6, 0), ymd(2025, 6, 1));
    }

    #[test]
    fn test_cursor_wraps_december_to_january() {
        let mut cursor = MonthCursor::new(2025, 12);
        cursor.advance(1);
        assert_eq!(cursor, MonthCursor::new(2026, 1));
    }

    #[test]
    fn test_cursor_steps() {
        let start = MonthCursor::new(2025, 8);
        assert_eq!(start.advanced(2), MonthCursor::new(2025, 10));
        assert_eq!(start.advanced(6), MonthCursor::new(2026, 2));
        assert_eq!(start.advanced(12), MonthCursor::new(2026, 8));
        assert_eq!(start.advanced(24), MonthCursor::new(2027, 8));
    }

    #[test]
    fn test_cursor_from_date() {
        let cursor = MonthCursor::from_date(ymd(2024, 1, 31));
        assert_eq!((cursor.year(), cursor.month()), (2024, 1));
        assert_eq!(cursor.advanced(1).clamp_day(31), ymd(2024, 2, 29));
    }

    #[test]
    #[should_panic(expected = "month must be in 1..=12")]
    fn test_cursor_rejects_month_zero() {
        MonthCursor::new(2025, 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_clamp_idempotent(year in 1900i32..2200, month in 1u32..13, day in 1u32..40) {
                let once = clamp(year, month, day);
                prop_assert_eq!(clamp(year, month, once.day()), once);
            }

            #[test]
            fn test_clamp_never_exceeds_requested_day(year in 1900i32..2200, month in 1u32..13, day in 1u32..40) {
                let date = clamp(year, month, day);
                prop_assert!(date.day() <= day);
                prop_assert_eq!(date.month(), month);
                prop_assert_eq!(date.year(), year);
            }

            #[test]
            fn test_cursor_advance_preserves_month_phase(year in 1990i32..2100, month in 1u32..13, steps in 0u32..40) {
                let moved = MonthCursor::new(year, month).advanced(steps * 12);
                prop_assert_eq!(moved.month(), month);
                prop_assert_eq!(moved.year(), year + steps as i32);
            }
        }
    }
}
