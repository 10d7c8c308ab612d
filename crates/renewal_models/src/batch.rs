//! Rayon-based batch evaluation of policy records.
//!
//! Each record is computed independently against the same read-only
//! builder, so evaluation parallelises without locks. Outcomes keep the
//! input order; failures are collected instead of aborting the batch.

use crate::schedules::{PolicyInput, RenewalRecord, ScheduleBuilder, ScheduleError};
use rayon::prelude::*;

/// Result of building one record.
pub type RecordOutcome = Result<RenewalRecord, ScheduleError>;

/// Evaluates every policy in parallel, preserving input order.
///
/// # Examples
///
/// ```
/// use renewal_models::batch::evaluate_batch;
/// use renewal_models::schedules::{ComputationWindow, PolicyInput, ScheduleBuilder};
/// use renewal_core::types::Date;
///
/// let builder = ScheduleBuilder::new(ComputationWindow::from_years(2025, 2026).unwrap());
/// let policies = vec![
///     PolicyInput::new(Date::from_ymd(2023, 6, 1).unwrap(), None, "anual"),
///     PolicyInput::new(Date::from_ymd(2023, 6, 1).unwrap(), None, "semanal"),
/// ];
///
/// let outcomes = evaluate_batch(&builder, &policies);
/// assert!(outcomes[0].is_ok());
/// assert!(outcomes[1].is_err());
/// ```
pub fn evaluate_batch(builder: &ScheduleBuilder, inputs: &[PolicyInput]) -> Vec<RecordOutcome> {
    inputs.par_iter().map(|input| builder.build(input)).collect()
}

/// Evaluates already-parsed rows, passing parse failures through unchanged.
pub fn evaluate_parsed(
    builder: &ScheduleBuilder,
    inputs: &[Result<PolicyInput, ScheduleError>],
) -> Vec<RecordOutcome> {
    inputs
        .par_iter()
        .map(|parsed| match parsed {
            Ok(input) => builder.build(input),
            Err(err) => Err(err.clone()),
        })
        .collect()
}

/// One failed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// 1-based data row number.
    pub row: usize,
    /// Why the record failed.
    pub error: ScheduleError,
}

/// Outcomes of a whole batch, in input order.
///
/// # Examples
///
/// ```
/// use renewal_models::batch::{evaluate_batch, BatchReport};
/// use renewal_models::schedules::{ComputationWindow, PolicyInput, ScheduleBuilder};
/// use renewal_core::types::Date;
///
/// let builder = ScheduleBuilder::new(ComputationWindow::from_years(2025, 2026).unwrap());
/// let policies = vec![
///     PolicyInput::new(Date::from_ymd(2024, 1, 31).unwrap(), None, "mensual"),
///     PolicyInput::new(Date::from_ymd(2027, 1, 1).unwrap(), None, "mensual"),
/// ];
///
/// let report = BatchReport::new(evaluate_batch(&builder, &policies));
/// assert_eq!(report.success_count(), 1);
/// assert_eq!(report.failures()[0].row, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    outcomes: Vec<RecordOutcome>,
}

impl BatchReport {
    /// Wraps outcomes in input order.
    pub fn new(outcomes: Vec<RecordOutcome>) -> Self {
        Self { outcomes }
    }

    /// Returns every outcome in input order.
    #[inline]
    pub fn outcomes(&self) -> &[RecordOutcome] {
        &self.outcomes
    }

    /// Returns the number of records in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns whether the batch has no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Iterates successful records with their 1-based row numbers.
    pub fn records(&self) -> impl Iterator<Item = (usize, &RenewalRecord)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(idx, outcome)| outcome.as_ref().ok().map(|record| (idx + 1, record)))
    }

    /// Returns the failed records with their 1-based row numbers.
    pub fn failures(&self) -> Vec<RecordFailure> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(idx, outcome)| {
                outcome.as_ref().err().map(|error| RecordFailure {
                    row: idx + 1,
                    error: error.clone(),
                })
            })
            .collect()
    }

    /// Returns the first failure, if any.
    pub fn first_failure(&self) -> Option<RecordFailure> {
        self.outcomes
            .iter()
            .enumerate()
            .find_map(|(idx, outcome)| {
                outcome.as_ref().err().map(|error| RecordFailure {
                    row: idx + 1,
                    error: error.clone(),
                })
            })
    }

    /// Returns the number of successful records.
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_ok()).count()
    }

    /// Returns the number of failed records.
    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }

    /// Returns whether every record succeeded.
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedules::{ComputationWindow, ProductLine};
    use renewal_core::types::Date;

    fn builder() -> ScheduleBuilder {
        ScheduleBuilder::new(ComputationWindow::from_years(2025, 2026).unwrap())
    }

    fn sample_inputs() -> Vec<PolicyInput> {
        let labels = ["mensual", "bimestral", "trimestral", "semestral", "anual", "semanal"];
        (0..120)
            .map(|i| {
                let issue =
                    Date::from_ymd(2018 + (i % 8) as i32, (i % 12) as u32 + 1, (i % 28) as u32 + 1)
                        .unwrap();
                let payment_day = if i % 3 == 0 { Some((i % 31) as u32 + 1) } else { None };
                PolicyInput::new(issue, payment_day, labels[i % labels.len()])
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let builder = builder();
        let inputs = sample_inputs();

        let parallel = evaluate_batch(&builder, &inputs);
        let sequential: Vec<_> = inputs.iter().map(|input| builder.build(input)).collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_report_counts() {
        let report = BatchReport::new(evaluate_batch(&builder(), &sample_inputs()));

        assert_eq!(report.len(), 120);
        // every sixth label is unsupported
        assert_eq!(report.failure_count(), 20);
        assert_eq!(report.success_count(), 100);
        assert!(!report.is_clean());
        assert_eq!(report.records().count(), 100);
    }

    #[test]
    fn test_failure_rows_are_one_based() {
        let report = BatchReport::new(evaluate_batch(&builder(), &sample_inputs()));
        let failures = report.failures();
        assert_eq!(failures[0].row, 6);
        assert_eq!(failures[1].row, 12);
        assert_eq!(report.first_failure(), Some(failures[0].clone()));
    }

    #[test]
    fn test_evaluate_parsed_passes_errors_through() {
        let parsed = vec![
            PolicyInput::parse("01/06/2023", None, "anual"),
            PolicyInput::parse("not a date", None, "anual"),
        ];
        let outcomes = evaluate_parsed(&builder(), &parsed);
        assert!(outcomes[0].is_ok());
        assert_eq!(
            outcomes[1],
            Err(ScheduleError::InvalidDateFormat {
                value: "not a date".to_string()
            })
        );
    }

    #[test]
    fn test_clean_batch() {
        let builder = builder().product(ProductLine::Flexible);
        let inputs = vec![PolicyInput::new(Date::from_ymd(2020, 7, 7).unwrap(), None, "semestral")];
        let report = BatchReport::new(evaluate_batch(&builder, &inputs));
        assert!(report.is_clean());
        assert!(report.first_failure().is_none());
    }

    #[test]
    fn test_empty_batch() {
        let report = BatchReport::new(evaluate_batch(&builder(), &[]));
        assert!(report.is_empty());
        assert!(report.is_clean());
    }
}
