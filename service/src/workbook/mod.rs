//! Excel workbook export and read-back for the test case catalogue.
//!
//! The exported workbook always has four sheets, in order:
//!
//! 1. "Test cases": one row per case; "Actual output" and "Status" are
//!    left blank for an execution harness to fill in
//! 2. "Conventions": id prefixes and length codes
//! 3. "Coverage": total and per-group counts, computed at write time
//! 4. "How to Run": execution guide
//!
//! Rendering happens in memory; the bytes are then written to a temporary file
//! next to the destination and renamed over it.

mod cast;
mod exporter;
mod features;
pub mod layout;
mod persist;
pub mod reader;
mod render;
mod sheets;

pub use exporter::WorkbookExporter;
pub use features::ExportFeatures;
pub use reader::{TestCaseRow, read_coverage, read_test_cases, sheet_names};
pub use render::ExportReport;
