//! Column name mapping and header resolution.

use crate::error::LoaderError;

/// Default issue-date column header.
pub const DEFAULT_ISSUE_DATE_COLUMN: &str = "Fecha Emisión";
/// Default payment-day column header.
pub const DEFAULT_PAYMENT_DAY_COLUMN: &str = "Día de Cobro";
/// Default frequency column header.
pub const DEFAULT_FREQUENCY_COLUMN: &str = "Forma de Pago";

/// Header names of the columns a schedule depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColumnMapping {
    /// Issue date column (required).
    pub issue_date: String,
    /// Payment day column (optional in the file).
    pub payment_day: String,
    /// Payment frequency column (required).
    pub frequency: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            issue_date: DEFAULT_ISSUE_DATE_COLUMN.to_string(),
            payment_day: DEFAULT_PAYMENT_DAY_COLUMN.to_string(),
            frequency: DEFAULT_FREQUENCY_COLUMN.to_string(),
        }
    }
}

impl ColumnMapping {
    /// Resolves the mapping against a header row.
    ///
    /// Matching ignores surrounding whitespace, a leading byte-order mark
    /// and letter case.
    ///
    /// # Errors
    ///
    /// `LoaderError::MissingColumn` if the issue date or frequency column
    /// is absent. A missing payment day column is not an error.
    pub fn resolve(&self, headers: &[String]) -> Result<ColumnIndex, LoaderError> {
        let find = |name: &str| {
            let wanted = normalize_header(name);
            headers.iter().position(|h| normalize_header(h) == wanted)
        };

        let issue_date = find(&self.issue_date)
            .ok_or_else(|| LoaderError::missing_column(&self.issue_date, headers))?;
        let frequency = find(&self.frequency)
            .ok_or_else(|| LoaderError::missing_column(&self.frequency, headers))?;

        Ok(ColumnIndex {
            issue_date,
            payment_day: find(&self.payment_day),
            frequency,
        })
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Positions of the mapped columns within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    /// Issue date cell position.
    pub issue_date: usize,
    /// Payment day cell position, if the column exists.
    pub payment_day: Option<usize>,
    /// Frequency cell position.
    pub frequency: usize,
}
