//! # Adapter Loader
//!
//! Reads policy sheets exported as CSV and turns each row into a
//! [`PolicyInput`](renewal_models::schedules::PolicyInput).
//!
//! Column names are configurable through [`ColumnMapping`]; the defaults
//! match the Spanish sheet headers (`Fecha Emisión`, `Día de Cobro`,
//! `Forma de Pago`). Every original cell is kept so the exporter can pass
//! it through unchanged.
//!
//! ## Example
//!
//! ```
//! use adapter_loader::{ColumnMapping, SheetReader};
//!
//! let data = "Póliza,Fecha Emisión,Forma de Pago\nP-1,31/01/2024,Mensual\n";
//! let sheet = SheetReader::new(ColumnMapping::default())
//!     .from_reader(data.as_bytes())
//!     .unwrap();
//!
//! assert_eq!(sheet.len(), 1);
//! assert_eq!(sheet.rows()[0].cell(0), "P-1");
//! assert!(sheet.rows()[0].to_input().is_ok());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod columns;
mod error;
mod sheet;

pub use columns::{ColumnIndex, ColumnMapping};
pub use error::LoaderError;
pub use sheet::{PolicyRow, PolicySheet, SheetReader};
