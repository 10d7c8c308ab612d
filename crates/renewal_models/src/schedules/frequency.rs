//! Payment frequency enumeration.

use std::fmt;
use std::str::FromStr;

/// Payment frequency of an insurance policy.
///
/// Defines the step, in months, between consecutive due dates.
///
/// # Examples
///
/// ```
/// use renewal_models::schedules::Frequency;
///
/// let freq: Frequency = "Trimestral".parse().unwrap();
/// assert_eq!(freq, Frequency::Quarterly);
/// assert_eq!(freq.months_between_payments(), 3);
/// assert_eq!(freq.column_label(), "Trimestral");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Frequency {
    /// Monthly payments (twelve times per year).
    Monthly,
    /// Bimonthly payments (six times per year).
    Bimonthly,
    /// Quarterly payments (four times per year).
    Quarterly,
    /// Semi-annual payments (twice per year).
    Semiannual,
    /// Annual payments (once per year).
    Annual,
}

impl Frequency {
    /// All frequencies, densest first.
    pub const ALL: [Frequency; 5] = [
        Frequency::Monthly,
        Frequency::Bimonthly,
        Frequency::Quarterly,
        Frequency::Semiannual,
        Frequency::Annual,
    ];

    /// Returns the number of months between due dates.
    ///
    /// # Examples
    ///
    /// ```
    /// use renewal_models::schedules::Frequency;
    ///
    /// assert_eq!(Frequency::Monthly.months_between_payments(), 1);
    /// assert_eq!(Frequency::Bimonthly.months_between_payments(), 2);
    /// assert_eq!(Frequency::Quarterly.months_between_payments(), 3);
    /// assert_eq!(Frequency::Semiannual.months_between_payments(), 6);
    /// assert_eq!(Frequency::Annual.months_between_payments(), 12);
    /// ```
    #[inline]
    pub fn months_between_payments(&self) -> u32 {
        match self {
            Frequency::Monthly => 1,
            Frequency::Bimonthly => 2,
            Frequency::Quarterly => 3,
            Frequency::Semiannual => 6,
            Frequency::Annual => 12,
        }
    }

    /// Returns the number of due dates per year.
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        12 / self.months_between_payments()
    }

    /// Returns the standard English name for this frequency.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Monthly => "Monthly",
            Frequency::Bimonthly => "Bimonthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Semiannual => "Semiannual",
            Frequency::Annual => "Annual",
        }
    }

    /// Returns the prefix used for this frequency's export columns.
    #[inline]
    pub fn column_label(&self) -> &'static str {
        match self {
            Frequency::Monthly => "Mensual",
            Frequency::Bimonthly => "Bimestral",
            Frequency::Quarterly => "Trimestral",
            Frequency::Semiannual => "Semestral",
            Frequency::Annual => "Anual",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lowercases, folds Spanish diacritics and drops separators.
fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | '.'))
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

impl FromStr for Frequency {
    type Err = String;

    /// Parses a frequency label (case, accent and separator insensitive).
    ///
    /// Supported labels:
    /// - Monthly: "mensual", "monthly", "1m"
    /// - Bimonthly: "bimestral", "bimonthly", "2m"
    /// - Quarterly: "trimestral", "quarterly", "3m"
    /// - Semiannual: "semestral", "semiannual", "semi-annual", "6m"
    /// - Annual: "anual", "annual", "yearly", "12m", "1y"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "mensual" | "monthly" | "1m" => Ok(Frequency::Monthly),
            "bimestral" | "bimonthly" | "2m" => Ok(Frequency::Bimonthly),
            "trimestral" | "quarterly" | "3m" => Ok(Frequency::Quarterly),
            "semestral" | "semiannual" | "6m" => Ok(Frequency::Semiannual),
            "anual" | "annual" | "yearly" | "12m" | "1y" => Ok(Frequency::Annual),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}
