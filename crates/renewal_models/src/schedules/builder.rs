//! ScheduleBuilder and RenewalRecord implementation.

use super::error::ScheduleError;
use super::frequency::Frequency;
use super::grace::GracePeriod;
use super::policy::PolicyInput;
use super::product::{ProductLine, ScheduleVariant};
use super::window::ComputationWindow;
use renewal_core::types::Date;

/// The computed schedule of one policy record.
///
/// Immutable once built; the due dates never exceed the variant's capacity.
///
/// # Examples
///
/// ```
/// use renewal_models::schedules::{ComputationWindow, PolicyInput, ScheduleBuilder};
/// use renewal_core::types::Date;
///
/// let window = ComputationWindow::from_years(2025, 2026).unwrap();
/// let policy = PolicyInput::new(Date::from_ymd(2024, 1, 31).unwrap(), None, "mensual");
/// let record = ScheduleBuilder::new(window).build(&policy).unwrap();
///
/// assert_eq!(record.renewal_date(), Date::from_ymd(2025, 1, 31).unwrap());
/// assert_eq!(record.due_dates()[1], Date::from_ymd(2025, 2, 28).unwrap());
/// assert_eq!(record.due_date_columns().len(), 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenewalRecord {
    variant: ScheduleVariant,
    renewal_date: Date,
    grace: GracePeriod,
    due_dates: Vec<Date>,
}

impl RenewalRecord {
    /// Returns the resolved schedule variant.
    #[inline]
    pub fn variant(&self) -> ScheduleVariant {
        self.variant
    }

    /// Returns the resolved payment frequency.
    #[inline]
    pub fn frequency(&self) -> Frequency {
        self.variant.frequency()
    }

    /// Returns the first due date inside the window.
    #[inline]
    pub fn renewal_date(&self) -> Date {
        self.renewal_date
    }

    /// Returns the grace dates computed from the renewal date.
    #[inline]
    pub fn grace(&self) -> GracePeriod {
        self.grace
    }

    /// Returns the due dates, strictly increasing.
    #[inline]
    pub fn due_dates(&self) -> &[Date] {
        &self.due_dates
    }

    /// Returns the due dates padded with `None` to the variant's capacity.
    pub fn due_date_columns(&self) -> Vec<Option<Date>> {
        let mut columns: Vec<Option<Date>> = self.due_dates.iter().copied().map(Some).collect();
        columns.resize(self.variant.capacity(), None);
        columns
    }
}

/// Builds renewal records for one product line within a fixed window.
///
/// # Examples
///
/// ```
/// use renewal_models::schedules::{
///     ComputationWindow, PolicyInput, ProductLine, ScheduleBuilder, ScheduleError,
/// };
/// use renewal_core::types::Date;
///
/// let builder = ScheduleBuilder::new(ComputationWindow::from_years(2025, 2026).unwrap())
///     .product(ProductLine::Flexible);
///
/// let policy = PolicyInput::new(Date::from_ymd(2023, 4, 9).unwrap(), None, "Bimestral");
/// assert!(matches!(
///     builder.build(&policy),
///     Err(ScheduleError::UnknownFrequency { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleBuilder {
    window: ComputationWindow,
    product: ProductLine,
}

impl ScheduleBuilder {
    /// Creates a builder for traditional products over `window`.
    pub fn new(window: ComputationWindow) -> Self {
        Self {
            window,
            product: ProductLine::default(),
        }
    }

    /// Sets the product line.
    pub fn product(mut self, product: ProductLine) -> Self {
        self.product = product;
        self
    }

    /// Returns the computation window.
    #[inline]
    pub fn window(&self) -> &ComputationWindow {
        &self.window
    }

    /// Returns the product line.
    #[inline]
    pub fn product_line(&self) -> ProductLine {
        self.product
    }

    /// Resolves a free-text frequency label to a variant of this product line.
    ///
    /// # Errors
    ///
    /// `ScheduleError::UnknownFrequency` if the label is not recognised or
    /// the product line does not offer that frequency.
    pub fn resolve_variant(&self, label: &str) -> Result<ScheduleVariant, ScheduleError> {
        label
            .parse::<Frequency>()
            .ok()
            .and_then(|frequency| ScheduleVariant::new(self.product, frequency))
            .ok_or_else(|| ScheduleError::UnknownFrequency {
                label: label.trim().to_string(),
                product: self.product,
            })
    }

    /// Builds the renewal record for one policy.
    ///
    /// # Errors
    ///
    /// - `ScheduleError::UnknownFrequency` if the label cannot be resolved
    /// - `ScheduleError::EmptySchedule` if no due date falls inside the window
    pub fn build(&self, input: &PolicyInput) -> Result<RenewalRecord, ScheduleError> {
        let payment_day = input.effective_payment_day();
        let variant = self.resolve_variant(input.frequency())?;

        let mut due_dates =
            variant
                .generator()
                .generate(input.issue_date(), payment_day, &self.window);

        let renewal_date = match due_dates.first() {
            Some(first) => *first,
            None => {
                return Err(ScheduleError::EmptySchedule {
                    issue_date: input.issue_date(),
                    frequency: variant.frequency(),
                    start: self.window.start(),
                    end: self.window.end(),
                })
            }
        };

        due_dates.truncate(variant.capacity());

        Ok(RenewalRecord {
            variant,
            renewal_date,
            grace: GracePeriod::from_renewal(renewal_date),
            due_dates,
        })
    }
}
