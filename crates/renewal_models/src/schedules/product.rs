//! Product lines and the schedule variants they offer.

use super::frequency::Frequency;
use super::generator::{
    AnnualAnchored, FlexibleAnchored, FlexibleAnnual, FlexibleMonthly, Periodic,
    ScheduleGenerator,
};
use renewal_core::types::DateStyle;
use std::fmt;
use std::str::FromStr;

/// Product family a policy belongs to.
///
/// The product line decides which generator rules apply, how many
/// due-date columns each frequency gets, and how dates are exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProductLine {
    /// GMM and traditional policies: periodic stepping from the issue month.
    #[default]
    Traditional,
    /// Flexible products: exact first renewal, calendar anchor months.
    Flexible,
}

/// Export grid for traditional products, in column order.
const TRADITIONAL_GRID: &[(Frequency, usize)] = &[
    (Frequency::Monthly, 24),
    (Frequency::Bimonthly, 12),
    (Frequency::Quarterly, 8),
    (Frequency::Semiannual, 4),
    (Frequency::Annual, 2),
];

/// Export grid for flexible products, in column order.
const FLEXIBLE_GRID: &[(Frequency, usize)] = &[
    (Frequency::Monthly, 25),
    (Frequency::Semiannual, 2),
    (Frequency::Quarterly, 4),
    (Frequency::Annual, 1),
];

static TRADITIONAL_MONTHLY: Periodic = Periodic::new(1);
static TRADITIONAL_BIMONTHLY: Periodic = Periodic::new(2);
static TRADITIONAL_QUARTERLY: Periodic = Periodic::new(3);
static TRADITIONAL_SEMIANNUAL: Periodic = Periodic::new(6);
static TRADITIONAL_ANNUAL: AnnualAnchored = AnnualAnchored;
static FLEXIBLE_MONTHLY: FlexibleMonthly = FlexibleMonthly;
static FLEXIBLE_QUARTERLY: FlexibleAnchored = FlexibleAnchored::new(&[1, 4, 7, 10], 4);
static FLEXIBLE_SEMIANNUAL: FlexibleAnchored = FlexibleAnchored::new(&[1, 7], 2);
static FLEXIBLE_ANNUAL: FlexibleAnnual = FlexibleAnnual;

impl ProductLine {
    /// Returns the standard name for this product line.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ProductLine::Traditional => "Traditional",
            ProductLine::Flexible => "Flexible",
        }
    }

    /// Returns every offered frequency with its column capacity, in export order.
    ///
    /// # Examples
    ///
    /// ```
    /// use renewal_models::schedules::{Frequency, ProductLine};
    ///
    /// let grid = ProductLine::Flexible.grid();
    /// assert_eq!(grid[0], (Frequency::Monthly, 25));
    /// assert!(grid.iter().all(|(f, _)| *f != Frequency::Bimonthly));
    /// ```
    #[inline]
    pub fn grid(&self) -> &'static [(Frequency, usize)] {
        match self {
            ProductLine::Traditional => TRADITIONAL_GRID,
            ProductLine::Flexible => FLEXIBLE_GRID,
        }
    }

    /// Returns the column capacity for `frequency`, or `None` if not offered.
    pub fn capacity(&self, frequency: Frequency) -> Option<usize> {
        self.grid()
            .iter()
            .find(|(f, _)| *f == frequency)
            .map(|(_, cap)| *cap)
    }

    /// Returns the date style this product line exports with.
    #[inline]
    pub fn date_style(&self) -> DateStyle {
        match self {
            ProductLine::Traditional => DateStyle::Slash,
            ProductLine::Flexible => DateStyle::Dash,
        }
    }
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ProductLine {
    type Err = String;

    /// Parses a product line name (case-insensitive).
    ///
    /// - Traditional: "traditional", "tradicional", "gmm"
    /// - Flexible: "flexible", "flex", "flexibles"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "traditional" | "tradicional" | "gmm" => Ok(ProductLine::Traditional),
            "flexible" | "flex" | "flexibles" => Ok(ProductLine::Flexible),
            _ => Err(format!("Unknown product line: {}", s)),
        }
    }
}

/// A frequency that a product line actually offers.
///
/// Only constructible for supported pairs, so every variant has a
/// generator and a capacity.
///
/// # Examples
///
/// ```
/// use renewal_models::schedules::{Frequency, ProductLine, ScheduleVariant};
///
/// let variant = ScheduleVariant::new(ProductLine::Traditional, Frequency::Quarterly).unwrap();
/// assert_eq!(variant.capacity(), 8);
///
/// assert!(ScheduleVariant::new(ProductLine::Flexible, Frequency::Bimonthly).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleVariant {
    product: ProductLine,
    frequency: Frequency,
    capacity: usize,
}

impl ScheduleVariant {
    /// Returns the variant for `(product, frequency)` if the product offers it.
    pub fn new(product: ProductLine, frequency: Frequency) -> Option<Self> {
        product.capacity(frequency).map(|capacity| Self {
            product,
            frequency,
            capacity,
        })
    }

    /// Returns the product line.
    #[inline]
    pub fn product(&self) -> ProductLine {
        self.product
    }

    /// Returns the payment frequency.
    #[inline]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the fixed number of due-date columns for this variant.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the generator implementing this variant's rules.
    pub fn generator(&self) -> &'static dyn ScheduleGenerator {
        match (self.product, self.frequency) {
            (ProductLine::Traditional, Frequency::Monthly) => &TRADITIONAL_MONTHLY,
            (ProductLine::Traditional, Frequency::Bimonthly) => &TRADITIONAL_BIMONTHLY,
            (ProductLine::Traditional, Frequency::Quarterly) => &TRADITIONAL_QUARTERLY,
            (ProductLine::Traditional, Frequency::Semiannual) => &TRADITIONAL_SEMIANNUAL,
            (ProductLine::Traditional, Frequency::Annual) => &TRADITIONAL_ANNUAL,
            (ProductLine::Flexible, Frequency::Monthly) => &FLEXIBLE_MONTHLY,
            (ProductLine::Flexible, Frequency::Quarterly) => &FLEXIBLE_QUARTERLY,
            (ProductLine::Flexible, Frequency::Semiannual) => &FLEXIBLE_SEMIANNUAL,
            (ProductLine::Flexible, Frequency::Annual) => &FLEXIBLE_ANNUAL,
            (ProductLine::Flexible, Frequency::Bimonthly) => {
                unreachable!("flexible products do not offer bimonthly payments")
            }
        }
    }
}

impl fmt::Display for ScheduleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.product, self.frequency)
    }
}
