//! Grace period dates derived from the renewal date.

use renewal_core::types::Date;

/// Days from renewal to the first grace date.
pub const GRACE_SHORT_DAYS: u64 = 30;

/// Days from renewal to the second grace date.
pub const GRACE_LONG_DAYS: u64 = 45;

/// Coverage extension dates following a renewal.
///
/// Plain calendar-day offsets: no clamping and no window bound.
///
/// # Examples
///
/// ```
/// use renewal_models::schedules::GracePeriod;
/// use renewal_core::types::Date;
///
/// let grace = GracePeriod::from_renewal(Date::from_ymd(2025, 6, 1).unwrap());
/// assert_eq!(grace.grace_30(), Date::from_ymd(2025, 7, 1).unwrap());
/// assert_eq!(grace.grace_45(), Date::from_ymd(2025, 7, 16).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GracePeriod {
    grace_30: Date,
    grace_45: Date,
}

impl GracePeriod {
    /// Computes both grace dates from a renewal date.
    pub fn from_renewal(renewal_date: Date) -> Self {
        Self {
            grace_30: renewal_date.add_days(GRACE_SHORT_DAYS),
            grace_45: renewal_date.add_days(GRACE_LONG_DAYS),
        }
    }

    /// Returns the renewal date plus 30 days.
    #[inline]
    pub fn grace_30(&self) -> Date {
        self.grace_30
    }

    /// Returns the renewal date plus 45 days.
    #[inline]
    pub fn grace_45(&self) -> Date {
        self.grace_45
    }
}
