//! Schedule generators, one per variant family.
//!
//! Every generator returns a strictly increasing sequence of valid dates
//! inside the window. An empty result means the policy's cycle has no
//! occurrence in the window; the builder turns that into an error.

use super::window::ComputationWindow;
use renewal_core::calendar::{clamp, MonthCursor};
use renewal_core::types::Date;

/// Produces the due dates of one schedule variant.
pub trait ScheduleGenerator: Send + Sync {
    /// Generates the in-window due dates for a policy.
    ///
    /// # Arguments
    ///
    /// * `issue_date` - Policy issue date
    /// * `payment_day` - Effective payment day-of-month (already resolved, ≥ 1)
    /// * `window` - Computation window bounding the result
    fn generate(&self, issue_date: Date, payment_day: u32, window: &ComputationWindow)
        -> Vec<Date>;
}

/// Steps from the issue month in fixed month increments.
///
/// Used by traditional monthly, bimonthly, quarterly and semi-annual
/// schedules.
///
/// # Examples
///
/// ```
/// use renewal_models::schedules::{ComputationWindow, Periodic, ScheduleGenerator};
/// use renewal_core::types::Date;
///
/// let window = ComputationWindow::from_years(2025, 2026).unwrap();
/// let issue = Date::from_ymd(2025, 3, 15).unwrap();
///
/// let dates = Periodic::new(3).generate(issue, 10, &window);
/// assert_eq!(dates[0], Date::from_ymd(2025, 3, 10).unwrap());
/// assert_eq!(dates[1], Date::from_ymd(2025, 6, 10).unwrap());
/// assert_eq!(dates.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Periodic {
    step: u32,
}

impl Periodic {
    /// Creates a generator stepping `step` months at a time.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub const fn new(step: u32) -> Self {
        assert!(step > 0, "step must be positive");
        Self { step }
    }

    /// Returns the step in months.
    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }
}

impl ScheduleGenerator for Periodic {
    fn generate(
        &self,
        issue_date: Date,
        payment_day: u32,
        window: &ComputationWindow,
    ) -> Vec<Date> {
        let mut cursor = MonthCursor::new(window.anchor_year(issue_date), issue_date.month());
        let mut current = cursor.clamp_day(payment_day);

        while current < window.start() {
            cursor.advance(self.step);
            current = cursor.clamp_day(payment_day);
        }

        let mut dates = Vec::new();
        while current <= window.end() {
            dates.push(current);
            cursor.advance(self.step);
            current = cursor.clamp_day(payment_day);
        }

        dates
    }
}

/// One candidate per window year at the issue month.
///
/// Used by traditional annual schedules. Years before the issue year
/// produce no candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnnualAnchored;

impl ScheduleGenerator for AnnualAnchored {
    fn generate(
        &self,
        issue_date: Date,
        payment_day: u32,
        window: &ComputationWindow,
    ) -> Vec<Date> {
        window
            .years()
            .filter(|year| *year >= issue_date.year())
            .map(|year| clamp(year, issue_date.month(), payment_day))
            .filter(|date| window.contains(*date))
            .collect()
    }
}

/// Returns the exact issue month/day in the anchor year, if it exists.
///
/// No clamping: an issue date of February 29th has no exact
/// counterpart in a common year.
fn exact_anniversary(issue_date: Date, window: &ComputationWindow) -> Option<Date> {
    Date::from_ymd(
        window.anchor_year(issue_date),
        issue_date.month(),
        issue_date.day(),
    )
    .ok()
    .filter(|date| window.contains(*date))
}

/// Flexible monthly: exact anniversary, then monthly on the payment day.
///
/// # Examples
///
/// ```
/// use renewal_models::schedules::{ComputationWindow, FlexibleMonthly, ScheduleGenerator};
/// use renewal_core::types::Date;
///
/// let window = ComputationWindow::from_years(2025, 2026).unwrap();
/// let issue = Date::from_ymd(2022, 5, 20).unwrap();
///
/// let dates = FlexibleMonthly.generate(issue, 5, &window);
/// assert_eq!(dates[0], Date::from_ymd(2025, 5, 20).unwrap());
/// assert_eq!(dates[1], Date::from_ymd(2025, 6, 5).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlexibleMonthly;

impl ScheduleGenerator for FlexibleMonthly {
    fn generate(
        &self,
        issue_date: Date,
        payment_day: u32,
        window: &ComputationWindow,
    ) -> Vec<Date> {
        let mut dates: Vec<Date> = exact_anniversary(issue_date, window).into_iter().collect();

        let mut cursor =
            MonthCursor::new(window.anchor_year(issue_date), issue_date.month()).advanced(1);
        loop {
            let current = cursor.clamp_day(payment_day);
            if current > window.end() {
                break;
            }
            if current >= window.start() {
                dates.push(current);
            }
            cursor.advance(1);
        }

        dates
    }
}

/// Flexible quarterly and semi-annual: fixed calendar anchor months.
///
/// Every window year from the issue year onwards contributes one date per
/// anchor month; the result is capped at the variant's capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexibleAnchored {
    months: &'static [u32],
    capacity: usize,
}

impl FlexibleAnchored {
    /// Creates a generator over `months` (ascending, 1-12) capped at `capacity`.
    pub const fn new(months: &'static [u32], capacity: usize) -> Self {
        Self { months, capacity }
    }

    /// Returns the anchor months.
    #[inline]
    pub fn months(&self) -> &'static [u32] {
        self.months
    }
}

impl ScheduleGenerator for FlexibleAnchored {
    fn generate(
        &self,
        issue_date: Date,
        payment_day: u32,
        window: &ComputationWindow,
    ) -> Vec<Date> {
        window
            .years()
            .filter(|year| *year >= issue_date.year())
            .flat_map(|year| self.months.iter().map(move |month| clamp(year, *month, payment_day)))
            .filter(|date| window.contains(*date))
            .take(self.capacity)
            .collect()
    }
}

/// Flexible annual: the exact anniversary in the anchor year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlexibleAnnual;

impl ScheduleGenerator for FlexibleAnnual {
    fn generate(
        &self,
        issue_date: Date,
        _payment_day: u32,
        window: &ComputationWindow,
    ) -> Vec<Date> {
        exact_anniversary(issue_date, window).into_iter().collect()
    }
}
