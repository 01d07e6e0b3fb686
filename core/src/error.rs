//! Error types for catalogue operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for catalogue building, export and read-back
#[derive(Error, Debug)]
pub enum CatalogueError {
    /// The destination directory could not be created
    #[error("Failed to create output directory {}: {source}", path.display())]
    DirectoryCreation {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The workbook could not be rendered
    #[error("Failed to render workbook: {0}")]
    Workbook(String),

    /// The rendered workbook could not be written to its destination
    #[error("Failed to write workbook {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Catalogue invariants do not hold
    #[error("Invalid catalogue: {0}")]
    InvalidCatalogue(String),

    /// A fixture document could not be read or written
    #[error("Fixture error in {}: {message}", path.display())]
    Fixture {
        /// Fixture path
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// A workbook read back from disk does not have the expected layout
    #[error("Invalid workbook: {0}")]
    InvalidWorkbook(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for catalogue operations
pub type Result<T> = std::result::Result<T, CatalogueError>;

impl CatalogueError {
    /// Create a directory creation error
    #[must_use]
    pub fn directory(path: &Path, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a write error
    #[must_use]
    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a workbook rendering error
    #[must_use]
    pub fn workbook(message: impl Into<String>) -> Self {
        Self::Workbook(message.into())
    }

    /// Create a catalogue invariant error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidCatalogue(message.into())
    }

    /// Create a fixture error
    #[must_use]
    pub fn fixture(path: &Path, message: impl Into<String>) -> Self {
        Self::Fixture {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error belongs to the export failure class
    /// (directory creation, rendering or writing the workbook).
    #[must_use]
    pub fn is_export_failure(&self) -> bool {
        matches!(
            self,
            Self::DirectoryCreation { .. } | Self::Workbook(_) | Self::Write { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_failure_class() {
        let io = || std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(CatalogueError::directory(Path::new("out"), io()).is_export_failure());
        assert!(CatalogueError::write(Path::new("out/a.xlsx"), io()).is_export_failure());
        assert!(CatalogueError::workbook("bad sheet").is_export_failure());
        assert!(!CatalogueError::invalid("duplicate id").is_export_failure());
        assert!(!CatalogueError::config("bad width").is_export_failure());
    }

    #[test]
    fn messages_name_the_path() {
        let err = CatalogueError::write(
            Path::new("out/test-cases.xlsx"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("out/test-cases.xlsx"));
        assert!(message.contains("denied"));
    }
}
