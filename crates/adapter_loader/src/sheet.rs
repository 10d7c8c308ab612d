//! Policy sheet reading.

use crate::columns::{ColumnIndex, ColumnMapping};
use crate::error::LoaderError;
use renewal_models::schedules::{PolicyInput, ScheduleError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Reader configuration for policy sheets.
#[derive(Debug, Clone)]
pub struct SheetReader {
    mapping: ColumnMapping,
    delimiter: u8,
}

impl SheetReader {
    /// Creates a comma-delimited reader with the given column mapping.
    pub fn new(mapping: ColumnMapping) -> Self {
        Self {
            mapping,
            delimiter: b',',
        }
    }

    /// Sets the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Returns the column mapping.
    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Reads a sheet from a file.
    ///
    /// # Errors
    ///
    /// - `LoaderError::Io` if the file cannot be opened
    /// - `LoaderError::Csv` if the content is malformed
    /// - `LoaderError::MissingColumn` if a required column is absent
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<PolicySheet, LoaderError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sheet = self.from_reader(file)?;

        info!(
            path = %path.display(),
            rows = sheet.len(),
            columns = sheet.headers().len(),
            "Loaded policy sheet"
        );

        Ok(sheet)
    }

    /// Reads a sheet from any byte source.
    ///
    /// Rows shorter than the header are padded with empty cells.
    ///
    /// # Errors
    ///
    /// - `LoaderError::Csv` if the content is malformed
    /// - `LoaderError::MissingColumn` if a required column is absent
    pub fn from_reader<R: Read>(&self, reader: R) -> Result<PolicySheet, LoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();
        let columns = self.mapping.resolve(&headers)?;

        debug!(
            issue_date = columns.issue_date,
            payment_day = ?columns.payment_day,
            frequency = columns.frequency,
            "Resolved policy columns"
        );

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
            if cells.len() < headers.len() {
                cells.resize(headers.len(), String::new());
            }
            rows.push(PolicyRow { cells, columns });
        }

        Ok(PolicySheet { headers, rows })
    }
}

impl Default for SheetReader {
    fn default() -> Self {
        Self::new(ColumnMapping::default())
    }
}

/// A loaded policy sheet: header row plus data rows in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySheet {
    headers: Vec<String>,
    rows: Vec<PolicyRow>,
}

impl PolicySheet {
    /// Returns the original header names.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the data rows.
    pub fn rows(&self) -> &[PolicyRow] {
        &self.rows
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the sheet has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Parses every row, keeping per-row failures in place.
    pub fn inputs(&self) -> Vec<Result<PolicyInput, ScheduleError>> {
        self.rows.iter().map(PolicyRow::to_input).collect()
    }
}

/// One data row with its original cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyRow {
    cells: Vec<String>,
    columns: ColumnIndex,
}

impl PolicyRow {
    /// Returns all original cells.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Returns the cell at `index`, or `""` past the end of the row.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    /// Returns the raw issue date cell.
    pub fn issue_date(&self) -> &str {
        self.cell(self.columns.issue_date)
    }

    /// Returns the raw payment day cell, if the column exists.
    pub fn payment_day(&self) -> Option<&str> {
        self.columns.payment_day.map(|index| self.cell(index))
    }

    /// Returns the raw frequency cell.
    pub fn frequency(&self) -> &str {
        self.cell(self.columns.frequency)
    }

    /// Parses the row into a schedule input.
    ///
    /// # Errors
    ///
    /// `ScheduleError::InvalidDateFormat` if the issue date cell cannot be
    /// parsed.
    pub fn to_input(&self) -> Result<PolicyInput, ScheduleError> {
        PolicyInput::parse(self.issue_date(), self.payment_day(), self.frequency())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
Póliza,Fecha Emisión,Día de Cobro,Forma de Pago
P-001,31/01/2024,,Mensual
P-002,2025-03-15,10,Trimestral
P-003,2025/31/31,,Mensual
";

    fn load(data: &str) -> PolicySheet {
        SheetReader::default().from_reader(data.as_bytes()).unwrap()
    }

    fn issue_parts(input: &PolicyInput) -> (i32, u32, u32) {
        let date = input.issue_date();
        (date.year(), date.month(), date.day())
    }

    #[test]
    fn test_reads_headers_and_rows() {
        let sheet = load(SHEET);
        assert_eq!(sheet.headers().len(), 4);
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.rows()[1].cells()[0], "P-002");
    }

    #[test]
    fn test_row_accessors() {
        let sheet = load(SHEET);
        let row = &sheet.rows()[1];
        assert_eq!(row.issue_date(), "2025-03-15");
        assert_eq!(row.payment_day(), Some("10"));
        assert_eq!(row.frequency(), "Trimestral");
    }

    #[test]
    fn test_inputs_keep_row_failures() {
        let inputs = load(SHEET).inputs();
        assert_eq!(issue_parts(inputs[0].as_ref().unwrap()), (2024, 1, 31));
        assert_eq!(inputs[0].as_ref().unwrap().payment_day(), None);
        assert_eq!(inputs[1].as_ref().unwrap().payment_day(), Some(10));
        assert!(matches!(
            inputs[2],
            Err(ScheduleError::InvalidDateFormat { .. })
        ));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let sheet = load("Fecha Emisión,Forma de Pago,Notas\n01/06/2023,Anual\n");
        assert_eq!(sheet.rows()[0].cells().len(), 3);
        assert_eq!(sheet.rows()[0].cell(2), "");
        assert_eq!(sheet.rows()[0].cell(10), "");
    }

    #[test]
    fn test_without_payment_day_column() {
        let sheet = load("Fecha Emisión,Forma de Pago\n01/06/2023,Anual\n");
        let row = &sheet.rows()[0];
        assert_eq!(row.payment_day(), None);
        assert_eq!(row.to_input().unwrap().effective_payment_day(), 1);
    }

    #[test]
    fn test_semicolon_delimiter() {
        let sheet = SheetReader::default()
            .delimiter(b';')
            .from_reader("Fecha Emisión;Forma de Pago\n01/06/2023;Anual\n".as_bytes())
            .unwrap();
        assert_eq!(sheet.rows()[0].frequency(), "Anual");
    }

    #[test]
    fn test_missing_column_is_error() {
        let err = SheetReader::default()
            .from_reader("Póliza,Fecha Emisión\nP-1,01/06/2023\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn { .. }));
    }

    #[test]
    fn test_bom_header_is_stripped() {
        let sheet = load("\u{feff}Fecha Emisión,Forma de Pago\n01/06/2023,Anual\n");
        assert_eq!(sheet.headers()[0], "Fecha Emisión");
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = load("Fecha Emisión,Forma de Pago\n");
        assert!(sheet.is_empty());
        assert!(sheet.inputs().is_empty());
    }
}
