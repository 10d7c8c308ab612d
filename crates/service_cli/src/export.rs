//! Rendering of renewal records to CSV and JSON.
//!
//! The CSV layout repeats the input sheet's cells and appends the renewal
//! date, the product line's full due-date grid and the two grace columns.
//! Only the columns of a record's own frequency are filled.

use adapter_loader::PolicySheet;
use renewal_core::types::{Date, DateStyle};
use renewal_models::batch::{BatchReport, RecordFailure, RecordOutcome};
use renewal_models::schedules::{Frequency, ProductLine};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::RenewalConfig;
use crate::Result;

/// Renewal date column header.
pub const RENEWAL_COLUMN: &str = "Fecha Renovación";
/// 30-day grace column header.
pub const GRACE_30_COLUMN: &str = "Amparo_30_días";
/// 45-day grace column header.
pub const GRACE_45_COLUMN: &str = "Amparo_45_días";
/// Header the old sheets used for the 45-day grace column.
pub const LEGACY_GRACE_45_COLUMN: &str = "Amparo_15_días";

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Input sheet plus schedule columns
    #[default]
    Csv,
    /// Array of schedule records
    Json,
}

/// Column layout of the CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportLayout {
    product: ProductLine,
    style: DateStyle,
    legacy_grace_label: bool,
}

impl ExportLayout {
    /// Creates a layout.
    pub fn new(product: ProductLine, style: DateStyle, legacy_grace_label: bool) -> Self {
        Self {
            product,
            style,
            legacy_grace_label,
        }
    }

    /// Creates the layout described by a configuration.
    pub fn from_config(config: &RenewalConfig) -> Self {
        Self::new(
            config.product,
            config.output_date_style(),
            config.legacy_grace_label,
        )
    }

    /// Headers appended after the input sheet's own headers.
    pub fn schedule_headers(&self) -> Vec<String> {
        let mut headers = vec![RENEWAL_COLUMN.to_string()];
        for &(frequency, capacity) in self.product.grid() {
            headers.extend(grid_column_names(frequency, capacity));
        }
        headers.push(GRACE_30_COLUMN.to_string());
        headers.push(self.grace_45_label().to_string());
        headers
    }

    /// Cells appended after a record's own cells.
    ///
    /// A failed record yields blanks in every position.
    pub fn schedule_cells(&self, outcome: &RecordOutcome) -> Vec<String> {
        let record = match outcome {
            Ok(record) => record,
            Err(_) => return vec![String::new(); self.width()],
        };

        let mut cells = Vec::with_capacity(self.width());
        cells.push(self.format(record.renewal_date()));
        for &(frequency, capacity) in self.product.grid() {
            if frequency == record.frequency() {
                cells.extend(
                    record
                        .due_date_columns()
                        .into_iter()
                        .map(|date| date.map(|d| self.format(d)).unwrap_or_default()),
                );
            } else {
                cells.extend(std::iter::repeat(String::new()).take(capacity));
            }
        }
        cells.push(self.format(record.grace().grace_30()));
        cells.push(self.format(record.grace().grace_45()));
        cells
    }

    fn width(&self) -> usize {
        let grid: usize = self.product.grid().iter().map(|(_, capacity)| capacity).sum();
        grid + 3
    }

    fn grace_45_label(&self) -> &'static str {
        if self.legacy_grace_label {
            LEGACY_GRACE_45_COLUMN
        } else {
            GRACE_45_COLUMN
        }
    }

    fn format(&self, date: Date) -> String {
        date.format_style(self.style)
    }
}

/// Column names for one frequency block: `Mensual_1`, `Mensual_2`, ...
///
/// A block of one column carries the bare label.
fn grid_column_names(frequency: Frequency, capacity: usize) -> Vec<String> {
    let label = frequency.column_label();
    if capacity == 1 {
        vec![label.to_string()]
    } else {
        (1..=capacity).map(|i| format!("{}_{}", label, i)).collect()
    }
}

/// Writes the sheet with schedule columns appended.
///
/// `report` must hold one outcome per sheet row, in sheet order.
pub fn write_csv<W: Write>(
    writer: W,
    delimiter: u8,
    sheet: &PolicySheet,
    report: &BatchReport,
    layout: &ExportLayout,
) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    let mut headers: Vec<String> = sheet.headers().to_vec();
    headers.extend(layout.schedule_headers());
    csv_writer.write_record(&headers)?;

    for (row, outcome) in sheet.rows().iter().zip(report.outcomes()) {
        let mut cells: Vec<String> = row.cells()[..sheet.headers().len().min(row.cells().len())].to_vec();
        cells.extend(layout.schedule_cells(outcome));
        csv_writer.write_record(&cells)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    row: usize,
    frequency: Option<Frequency>,
    renewal_date: Option<Date>,
    grace_30: Option<Date>,
    grace_45: Option<Date>,
    due_dates: &'a [Date],
    error: Option<String>,
    error_kind: Option<&'static str>,
}

impl<'a> JsonRecord<'a> {
    fn new(row: usize, outcome: &'a RecordOutcome) -> Self {
        match outcome {
            Ok(record) => Self {
                row,
                frequency: Some(record.frequency()),
                renewal_date: Some(record.renewal_date()),
                grace_30: Some(record.grace().grace_30()),
                grace_45: Some(record.grace().grace_45()),
                due_dates: record.due_dates(),
                error: None,
                error_kind: None,
            },
            Err(err) => Self {
                row,
                frequency: None,
                renewal_date: None,
                grace_30: None,
                grace_45: None,
                due_dates: &[],
                error: Some(err.to_string()),
                error_kind: Some(err.kind()),
            },
        }
    }
}

/// Writes every outcome as a pretty-printed JSON array with ISO dates.
pub fn write_json<W: Write>(writer: W, report: &BatchReport) -> Result<()> {
    let records: Vec<JsonRecord<'_>> = report
        .outcomes()
        .iter()
        .enumerate()
        .map(|(idx, outcome)| JsonRecord::new(idx + 1, outcome))
        .collect();
    serde_json::to_writer_pretty(writer, &records)?;
    Ok(())
}

/// Writes the failure report (`row,error`).
pub fn write_failures<W: Write>(writer: W, delimiter: u8, failures: &[RecordFailure]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    csv_writer.write_record(["row", "error"])?;
    for failure in failures {
        csv_writer.write_record([failure.row.to_string(), failure.error.to_string()])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Returns the failure report path for an output file: `out.csv` → `out.errors.csv`.
pub fn failure_report_path(output: &Path) -> PathBuf {
    output.with_extension("errors.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter_loader::SheetReader;
    use renewal_models::batch::evaluate_parsed;
    use renewal_models::schedules::{ComputationWindow, ScheduleBuilder};

    const SHEET: &str = "\
Póliza,Fecha Emisión,Día de Cobro,Forma de Pago
P-1,01/06/2023,,Anual
P-2,01/01/2027,,Mensual
";

    fn run(product: ProductLine, data: &str) -> (PolicySheet, BatchReport) {
        let sheet = SheetReader::default().from_reader(data.as_bytes()).unwrap();
        let builder = ScheduleBuilder::new(ComputationWindow::from_years(2025, 2026).unwrap())
            .product(product);
        let report = BatchReport::new(evaluate_parsed(&builder, &sheet.inputs()));
        (sheet, report)
    }

    fn traditional_layout() -> ExportLayout {
        ExportLayout::new(ProductLine::Traditional, DateStyle::Slash, false)
    }

    #[test]
    fn test_traditional_headers() {
        let headers = traditional_layout().schedule_headers();
        assert_eq!(headers.len(), 1 + 24 + 12 + 8 + 4 + 2 + 2);
        assert_eq!(headers[0], "Fecha Renovación");
        assert_eq!(headers[1], "Mensual_1");
        assert_eq!(headers[24], "Mensual_24");
        assert_eq!(headers[25], "Bimestral_1");
        assert_eq!(headers[49], "Anual_1");
        assert_eq!(headers[51], "Amparo_30_días");
        assert_eq!(headers[52], "Amparo_45_días");
    }

    #[test]
    fn test_flexible_headers() {
        let layout = ExportLayout::new(ProductLine::Flexible, DateStyle::Dash, true);
        let headers = layout.schedule_headers();
        assert_eq!(headers.len(), 1 + 25 + 2 + 4 + 1 + 2);
        assert_eq!(headers[26], "Semestral_1");
        assert_eq!(headers[28], "Trimestral_1");
        assert_eq!(headers[32], "Anual");
        assert_eq!(headers[34], "Amparo_15_días");
    }

    #[test]
    fn test_schedule_cells_fill_own_block() {
        let (_, report) = run(ProductLine::Traditional, SHEET);
        let layout = traditional_layout();
        let cells = layout.schedule_cells(&report.outcomes()[0]);

        assert_eq!(cells.len(), layout.schedule_headers().len());
        assert_eq!(cells[0], "01/06/2025");
        assert!(cells[1..49].iter().all(String::is_empty));
        assert_eq!(cells[49], "01/06/2025");
        assert_eq!(cells[50], "01/06/2026");
        assert_eq!(cells[51], "01/07/2025");
        assert_eq!(cells[52], "16/07/2025");
    }

    #[test]
    fn test_failed_record_is_blank() {
        let (_, report) = run(ProductLine::Traditional, SHEET);
        let cells = traditional_layout().schedule_cells(&report.outcomes()[1]);
        assert_eq!(cells.len(), 53);
        assert!(cells.iter().all(String::is_empty));
    }

    #[test]
    fn test_write_csv_keeps_original_cells() {
        let (sheet, report) = run(ProductLine::Traditional, SHEET);
        let mut buffer = Vec::new();
        write_csv(&mut buffer, b',', &sheet, &report, &traditional_layout()).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let mut reader = csv::Reader::from_reader(output.as_bytes());
        assert_eq!(reader.headers().unwrap().len(), 4 + 53);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "P-1");
        assert_eq!(&rows[0][4], "01/06/2025");
        assert_eq!(&rows[1][0], "P-2");
        assert_eq!(&rows[1][4], "");
    }

    #[test]
    fn test_flexible_dash_dates() {
        let (sheet, report) = run(
            ProductLine::Flexible,
            "Fecha Emisión,Forma de Pago\n15/03/2022,Anual\n",
        );
        let layout = ExportLayout::new(ProductLine::Flexible, DateStyle::Dash, false);
        let cells = layout.schedule_cells(&report.outcomes()[0]);
        assert_eq!(sheet.len(), 1);
        assert_eq!(cells[0], "15-03-2025");
        assert_eq!(cells[32], "15-03-2025");
    }

    #[test]
    fn test_write_json() {
        let (_, report) = run(ProductLine::Traditional, SHEET);
        let mut buffer = Vec::new();
        write_json(&mut buffer, &report).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(json[0]["row"], 1);
        assert_eq!(json[0]["frequency"], "annual");
        assert_eq!(json[0]["renewal_date"], "2025-06-01");
        assert_eq!(json[0]["due_dates"][1], "2026-06-01");
        assert!(json[0]["error"].is_null());
        assert_eq!(json[1]["error_kind"], "empty_schedule");
        assert!(json[1]["renewal_date"].is_null());
    }

    #[test]
    fn test_write_failures() {
        let (_, report) = run(ProductLine::Traditional, SHEET);
        let mut buffer = Vec::new();
        write_failures(&mut buffer, b',', &report.failures()).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("row,error"));
        assert!(lines.next().unwrap().starts_with("2,No Monthly due dates"));
    }

    #[test]
    fn test_failure_report_path() {
        assert_eq!(
            failure_report_path(Path::new("out/renovaciones.csv")),
            PathBuf::from("out/renovaciones.errors.csv")
        );
    }
}
