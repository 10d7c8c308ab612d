//! # Renewal Models (L2: Business Logic)
//!
//! Due-date schedules and grace periods for insurance policy renewals.
//!
//! This crate provides:
//! - Payment frequencies and product lines with their output capacities
//! - The computation window that bounds every schedule
//! - Schedule generators for periodic, annual and flexible-product variants
//! - Grace period calculation from the renewal date
//! - A schedule builder that turns one policy record into one renewal record
//! - Parallel batch evaluation with per-record failure reporting
//!
//! ## Design Principles
//!
//! - **Closed enums** for frequencies and product lines; unknown labels are named errors
//! - **Pure computation**: records are independent, immutable once built
//! - **Builder pattern** for ergonomic API with sensible defaults

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod batch;
pub mod schedules;
