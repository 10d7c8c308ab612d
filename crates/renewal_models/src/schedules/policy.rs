//! Policy input records.

use super::error::ScheduleError;
use renewal_core::types::Date;

/// The fields of one policy record the schedule depends on.
///
/// # Examples
///
/// ```
/// use renewal_models::schedules::PolicyInput;
/// use renewal_core::types::Date;
///
/// let policy = PolicyInput::parse("31/01/2024", Some("0"), "Mensual").unwrap();
/// assert_eq!(policy.issue_date(), Date::from_ymd(2024, 1, 31).unwrap());
/// assert_eq!(policy.payment_day(), None);
/// assert_eq!(policy.effective_payment_day(), 31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PolicyInput {
    issue_date: Date,
    payment_day: Option<u32>,
    frequency: String,
}

impl PolicyInput {
    /// Creates an input from an already parsed issue date.
    ///
    /// A `payment_day` of zero is treated as absent.
    pub fn new(issue_date: Date, payment_day: Option<u32>, frequency: impl Into<String>) -> Self {
        Self {
            issue_date,
            payment_day: payment_day.filter(|day| *day > 0),
            frequency: frequency.into(),
        }
    }

    /// Creates an input from raw sheet cells.
    ///
    /// The payment day cell may be missing, blank, zero, negative or
    /// non-numeric; all of these mean "use the issue day".
    ///
    /// # Errors
    ///
    /// `ScheduleError::InvalidDateFormat` if the issue date cannot be parsed.
    pub fn parse(
        issue_date: &str,
        payment_day: Option<&str>,
        frequency: &str,
    ) -> Result<Self, ScheduleError> {
        let issue_date = Date::parse_issue_date(issue_date)?;
        Ok(Self::new(
            issue_date,
            payment_day.and_then(normalize_payment_day),
            frequency,
        ))
    }

    /// Returns the issue date.
    #[inline]
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// Returns the explicit payment day, if one was given.
    #[inline]
    pub fn payment_day(&self) -> Option<u32> {
        self.payment_day
    }

    /// Returns the raw frequency label.
    #[inline]
    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    /// Returns the payment day if set, otherwise the issue day.
    #[inline]
    pub fn effective_payment_day(&self) -> u32 {
        self.payment_day.unwrap_or_else(|| self.issue_date.day())
    }
}

/// Interprets a raw payment-day cell.
///
/// Accepts integers and integral decimals (`"10"`, `"10.0"`, as numeric
/// spreadsheet cells are often exported). Returns `None` for blank,
/// non-numeric, fractional, zero or negative values.
///
/// # Examples
///
/// ```
/// use renewal_models::schedules::normalize_payment_day;
///
/// assert_eq!(normalize_payment_day(" 10 "), Some(10));
/// assert_eq!(normalize_payment_day("10.0"), Some(10));
/// assert_eq!(normalize_payment_day("-3"), None);
/// assert_eq!(normalize_payment_day(""), None);
/// ```
pub fn normalize_payment_day(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let value = raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .map(|v| v as i64)
    })?;
    u32::try_from(value).ok().filter(|day| *day > 0)
}
