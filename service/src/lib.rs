//! # Singlish Catalogue
//!
//! Builds the fixed catalogue of Singlish to Sinhala transliteration test
//! cases and exports it as an Excel workbook for manual or automated runs.
//!
//! ## Quick Start
//!
//! ```no_run
//! use catalogue_service::{WorkbookExporter, build_catalogue};
//! use std::path::Path;
//!
//! # fn main() -> catalogue_core::Result<()> {
//! let catalogue = build_catalogue()?;
//! let report = WorkbookExporter::new().export(&catalogue, Path::new("test-data/test-cases.xlsx"))?;
//! assert_eq!(report.coverage.total, 36);
//! # Ok(())
//! # }
//! ```
//!
//! The workbook can be read back with [`workbook::reader`], which is how an
//! execution harness picks up the inputs and expected outputs.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Catalogue assembly from the built-in fixtures
pub mod builder;

/// Command-line interface
pub mod cli;

/// Built-in test case data
pub mod fixtures;

/// YAML/JSON fixture documents
pub mod fixture_file;

/// Workbook export and read-back
pub mod workbook;

pub use builder::build_catalogue;
pub use fixture_file::{dump_catalogue, load_catalogue};
pub use workbook::{ExportFeatures, ExportReport, TestCaseRow, WorkbookExporter};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::build_catalogue;
    pub use crate::fixture_file::{dump_catalogue, load_catalogue};
    pub use crate::workbook::{ExportFeatures, ExportReport, WorkbookExporter};
    pub use catalogue_core::prelude::*;
}
