//! Configuration for the catalogue exporter
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! yields the canonical export: `test-data/test-cases.xlsx` with the fixed
//! "Test cases" column widths.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CatalogueError, Result};

/// Default destination of the exported workbook.
pub const DEFAULT_OUTPUT_PATH: &str = "test-data/test-cases.xlsx";

/// Complete exporter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExporterConfig {
    /// Destination workbook path
    pub output_path: PathBuf,

    /// Column widths of the "Test cases" sheet
    pub column_widths: ColumnWidths,

    /// Freeze the header row of the "Test cases" sheet
    pub freeze_headers: bool,

    /// Add an autofilter over the "Test cases" table
    pub add_filters: bool,

    /// Wrap long text in body cells
    pub wrap_text: bool,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            column_widths: ColumnWidths::default(),
            freeze_headers: true,
            add_filters: true,
            wrap_text: true,
        }
    }
}

impl ExporterConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Config`] if the file cannot be read, is not
    /// valid YAML for this structure, or fails [`ExporterConfig::validate`].
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CatalogueError::config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!("Loaded exporter configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Config`] on parse or validation failure.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        // serde_yaml maps an empty document to unit, not to an empty mapping
        let config: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(text)
                .map_err(|e| CatalogueError::config(format!("invalid configuration: {e}")))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Config`] for an empty output path or a
    /// non-positive column width.
    pub fn validate(&self) -> Result<()> {
        if self.output_path.as_os_str().is_empty() {
            return Err(CatalogueError::config("output_path must not be empty"));
        }
        for (index, width) in self.column_widths.as_array().iter().enumerate() {
            if !width.is_finite() || *width <= 0.0 {
                return Err(CatalogueError::config(format!(
                    "column width {index} must be positive, got {width}"
                )));
            }
        }
        Ok(())
    }
}

/// Column widths of the "Test cases" sheet, in character units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnWidths {
    /// TC ID
    pub id: f64,
    /// Test case name
    pub name: f64,
    /// Input length type
    pub length: f64,
    /// Input
    pub input: f64,
    /// Expected output
    pub expected: f64,
    /// Actual output
    pub actual: f64,
    /// Status
    pub status: f64,
    /// Accuracy justification / description of issue type
    pub justification: f64,
    /// What is covered by the test
    pub category: f64,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            id: 12.0,
            name: 40.0,
            length: 15.0,
            input: 50.0,
            expected: 50.0,
            actual: 50.0,
            status: 8.0,
            justification: 60.0,
            category: 40.0,
        }
    }
}

impl ColumnWidths {
    /// Widths in column order.
    #[must_use]
    pub fn as_array(&self) -> [f64; 9] {
        [
            self.id,
            self.name,
            self.length,
            self.input,
            self.expected,
            self.actual,
            self.status,
            self.justification,
            self.category,
        ]
    }
}
