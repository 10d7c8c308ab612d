//! Schedule command implementation
//!
//! Loads a policy sheet, builds one renewal record per row and writes the
//! export plus a failure report.

use adapter_loader::SheetReader;
use renewal_models::batch::{evaluate_parsed, BatchReport};
use renewal_models::schedules::ScheduleBuilder;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::config::RenewalConfig;
use crate::export::{self, ExportLayout, OutputFormat};
use crate::{CliError, Result};

/// Options of one schedule run
#[derive(Debug, Clone)]
pub struct ScheduleOptions {
    /// Input CSV sheet
    pub input: PathBuf,
    /// Output file
    pub output: PathBuf,
    /// Output format
    pub format: OutputFormat,
    /// Abort on the first failed record
    pub fail_fast: bool,
}

/// Run the schedule command
pub fn run(config: &RenewalConfig, options: &ScheduleOptions) -> Result<BatchReport> {
    config.validate()?;
    let window = config.window()?;

    info!(
        input = %options.input.display(),
        product = %config.product,
        window = %window,
        "Starting schedule run"
    );

    let sheet = SheetReader::new(config.columns.clone())
        .delimiter(config.delimiter_byte())
        .from_path(&options.input)?;

    let builder = ScheduleBuilder::new(window).product(config.product);
    let report = BatchReport::new(evaluate_parsed(&builder, &sheet.inputs()));

    for (row, record) in report.records() {
        debug!(
            row,
            variant = %record.variant(),
            renewal_date = %record.renewal_date(),
            due_dates = record.due_dates().len(),
            "Record scheduled"
        );
    }

    let failures = report.failures();
    for failure in &failures {
        warn!(
            row = failure.row,
            kind = failure.error.kind(),
            "{}",
            failure.error
        );
    }

    if options.fail_fast {
        if let Some(failure) = report.first_failure() {
            error!(row = failure.row, "Aborting on first failed record");
            return Err(CliError::RecordFailed {
                row: failure.row,
                source: failure.error,
            });
        }
    }

    let writer = BufWriter::new(File::create(&options.output)?);
    match options.format {
        OutputFormat::Csv => export::write_csv(
            writer,
            config.delimiter_byte(),
            &sheet,
            &report,
            &ExportLayout::from_config(config),
        )?,
        OutputFormat::Json => export::write_json(writer, &report)?,
    }

    if !failures.is_empty() {
        let path = export::failure_report_path(&options.output);
        let writer = BufWriter::new(File::create(&path)?);
        export::write_failures(writer, config.delimiter_byte(), &failures)?;
        info!(path = %path.display(), failures = failures.len(), "Failure report written");
    } else {
        remove_stale_report(&options.output)?;
    }

    info!(
        output = %options.output.display(),
        rows = report.len(),
        scheduled = report.success_count(),
        failed = report.failure_count(),
        "Schedule run complete"
    );

    Ok(report)
}

/// Removes a failure report left by an earlier run of the same output.
fn remove_stale_report(output: &Path) -> Result<()> {
    let path = export::failure_report_path(output);
    if path.exists() {
        std::fs::remove_file(&path)?;
        debug!(path = %path.display(), "Removed stale failure report");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use renewal_models::schedules::ProductLine;
    use std::io::Write;
    use tempfile::TempDir;

    const SHEET: &str = "\
Póliza,Fecha Emisión,Día de Cobro,Forma de Pago
P-1,31/01/2024,,Mensual
P-2,2025-03-15,10,Trimestral
P-3,2023-06-01 00:00:00,,Anual
P-4,01/01/2027,,Mensual
P-5,2025/31/31,,Mensual
P-6,01/02/2024,,Semanal
";

    fn setup(content: &str) -> (TempDir, ScheduleOptions) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("polizas.csv");
        let mut file = File::create(&input).unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let options = ScheduleOptions {
            input,
            output: dir.path().join("renovaciones.csv"),
            format: OutputFormat::Csv,
            fail_fast: false,
        };
        (dir, options)
    }

    #[test]
    fn test_run_writes_output_and_failures() {
        let (_dir, options) = setup(SHEET);
        let report = run(&RenewalConfig::default(), &options).unwrap();

        assert_eq!(report.len(), 6);
        assert_eq!(report.success_count(), 3);
        let rows: Vec<usize> = report.failures().iter().map(|f| f.row).collect();
        assert_eq!(rows, vec![4, 5, 6]);

        let output = std::fs::read_to_string(&options.output).unwrap();
        assert_eq!(output.lines().count(), 7);

        let errors =
            std::fs::read_to_string(export::failure_report_path(&options.output)).unwrap();
        assert_eq!(errors.lines().count(), 4);
        assert!(errors.contains("Semanal"));
    }

    #[test]
    fn test_fail_fast_stops_before_writing() {
        let (_dir, mut options) = setup(SHEET);
        options.fail_fast = true;

        let err = run(&RenewalConfig::default(), &options).unwrap_err();
        assert!(matches!(err, CliError::RecordFailed { row: 4, .. }));
        assert!(!options.output.exists());
    }

    #[test]
    fn test_clean_run_has_no_failure_report() {
        let (_dir, options) = setup("Fecha Emisión,Forma de Pago\n01/06/2023,Anual\n");
        std::fs::write(export::failure_report_path(&options.output), "row,error\n").unwrap();

        let report = run(&RenewalConfig::default(), &options).unwrap();
        assert!(report.is_clean());
        assert!(!export::failure_report_path(&options.output).exists());
    }

    #[test]
    fn test_json_output() {
        let (_dir, mut options) = setup(SHEET);
        options.format = OutputFormat::Json;
        options.output = options.output.with_extension("json");

        run(&RenewalConfig::default(), &options).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&options.output).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 6);
        assert_eq!(json[1]["due_dates"][0], "2025-03-10");
    }

    #[test]
    fn test_flexible_product() {
        let (_dir, options) = setup("Fecha Emisión,Forma de Pago\n15/03/2022,Anual\n");
        let config = RenewalConfig {
            product: ProductLine::Flexible,
            ..RenewalConfig::default()
        };

        run(&config, &options).unwrap();
        let output = std::fs::read_to_string(&options.output).unwrap();
        assert!(output.lines().next().unwrap().contains("Mensual_25"));
        assert!(output.contains("15-03-2025"));
    }

    #[test]
    fn test_missing_column_fails_whole_run() {
        let (_dir, options) = setup("Fecha Emisión\n01/06/2023\n");
        let err = run(&RenewalConfig::default(), &options).unwrap_err();
        assert!(matches!(err, CliError::Load(_)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let (_dir, options) = setup(SHEET);
        let config = RenewalConfig {
            start_year: 2027,
            ..RenewalConfig::default()
        };
        assert!(matches!(run(&config, &options), Err(CliError::Config(_))));
    }
}
