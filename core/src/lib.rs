//! # Singlish Catalogue Core
//!
//! Core types for the Romanized-Sinhala ("Singlish") transliteration
//! test-case catalogue.
//!
//! This crate holds the data model shared by the exporter and any execution
//! harness that reads the exported workbook back:
//!
//! - [`TestCase`] records and their [`LengthClass`] / [`TestGroup`] enums
//! - the ordered, validated [`Catalogue`] and its [`CoverageSummary`]
//! - the [`CatalogueError`] taxonomy
//! - [`ExporterConfig`] for presentation and output settings

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types for catalogue operations
pub mod error;

/// Test case record and classification enums
pub mod types;

/// Ordered, validated catalogue and coverage counting
pub mod catalogue;

/// Exporter configuration
pub mod config;

pub use catalogue::{Catalogue, CoverageSummary};
pub use config::{ColumnWidths, ExporterConfig};
pub use error::{CatalogueError, Result};
pub use types::{CategoryFacets, LengthClass, TestCase, TestGroup};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catalogue::{Catalogue, CoverageSummary};
    pub use crate::config::{ColumnWidths, ExporterConfig};
    pub use crate::error::{CatalogueError, Result};
    pub use crate::types::*;
}
