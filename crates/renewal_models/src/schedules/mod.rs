//! Due-date schedule generation for policy renewals.
//!
//! This module provides:
//! - [`Frequency`]: Payment frequency enumeration (Monthly, Quarterly, etc.)
//! - [`ProductLine`] and [`ScheduleVariant`]: which rules and capacities apply
//! - [`ComputationWindow`]: the inclusive range every due date must fall in
//! - [`ScheduleGenerator`]: one implementation per variant family
//! - [`GracePeriod`]: the 30 and 45 day offsets from the renewal date
//! - [`ScheduleBuilder`]: turns a [`PolicyInput`] into a [`RenewalRecord`]
//!
//! # Examples
//!
//! ```
//! use renewal_models::schedules::{ComputationWindow, PolicyInput, ScheduleBuilder};
//! use renewal_core::types::Date;
//!
//! let window = ComputationWindow::from_years(2025, 2026).unwrap();
//! let policy = PolicyInput::new(Date::from_ymd(2023, 6, 1).unwrap(), None, "Anual");
//!
//! let record = ScheduleBuilder::new(window).build(&policy).unwrap();
//!
//! assert_eq!(record.renewal_date(), Date::from_ymd(2025, 6, 1).unwrap());
//! assert_eq!(record.due_dates().len(), 2);
//! assert_eq!(record.grace().grace_45(), Date::from_ymd(2025, 7, 16).unwrap());
//! ```

mod builder;
mod error;
mod frequency;
mod generator;
mod grace;
mod policy;
mod product;
mod window;

pub use builder::{RenewalRecord, ScheduleBuilder};
pub use error::ScheduleError;
pub use frequency::Frequency;
pub use generator::{
    AnnualAnchored, FlexibleAnchored, FlexibleAnnual, FlexibleMonthly, Periodic,
    ScheduleGenerator,
};
pub use grace::{GracePeriod, GRACE_LONG_DAYS, GRACE_SHORT_DAYS};
pub use policy::{normalize_payment_day, PolicyInput};
pub use product::{ProductLine, ScheduleVariant};
pub use window::ComputationWindow;
