//! Declarative fixture documents.
//!
//! A fixture holds the catalogue as data rather than code:
//!
//! ```yaml
//! cases:
//!   - id: P_TC_01
//!     name: Simple sentence test
//!     length: S
//!     input: mama gedhara yanavaa.
//!     expected: මම ගෙදර යනවා.
//!     justification: Basic sentence with present tense converts correctly.
//!     category: "Daily language usage\nSimple sentence\nS\nAccuracy validation"
//! ```
//!
//! The format follows the file extension: `.yaml`/`.yml` or `.json`.

use catalogue_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
struct FixtureDocument {
    cases: Vec<TestCase>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FixtureFormat {
    Yaml,
    Json,
}

impl FixtureFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(CatalogueError::fixture(
                path,
                "unsupported fixture format (expected .yaml, .yml or .json)",
            )),
        }
    }
}

/// Load and validate a catalogue from a fixture document.
///
/// # Errors
///
/// Returns [`CatalogueError::Fixture`] if the file cannot be read or parsed,
/// and [`CatalogueError::InvalidCatalogue`] if its cases break an invariant.
pub fn load_catalogue(path: &Path) -> Result<Catalogue> {
    let format = FixtureFormat::from_path(path)?;
    let text = fs::read_to_string(path)
        .map_err(|e| CatalogueError::fixture(path, format!("failed to read: {e}")))?;

    let document: FixtureDocument = match format {
        FixtureFormat::Yaml => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        FixtureFormat::Json => serde_json::from_str(&text).map_err(|e| e.to_string()),
    }
    .map_err(|message| CatalogueError::fixture(path, message))?;

    let catalogue = Catalogue::new(document.cases)?;
    info!(
        "Loaded {} cases from fixture {}",
        catalogue.len(),
        path.display()
    );
    Ok(catalogue)
}

/// Write a catalogue as a fixture document, creating parent directories.
///
/// # Errors
///
/// Returns [`CatalogueError::Fixture`] for an unsupported extension or a
/// serialization failure, and [`CatalogueError::Io`] if the file cannot be written.
pub fn dump_catalogue(catalogue: &Catalogue, path: &Path) -> Result<()> {
    let format = FixtureFormat::from_path(path)?;
    let document = FixtureDocument {
        cases: catalogue.cases().to_vec(),
    };

    let text = match format {
        FixtureFormat::Yaml => serde_yaml::to_string(&document).map_err(|e| e.to_string()),
        FixtureFormat::Json => serde_json::to_string_pretty(&document).map_err(|e| e.to_string()),
    }
    .map_err(|message| CatalogueError::fixture(path, message))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    info!("Wrote {} cases to fixture {}", catalogue.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            FixtureFormat::from_path(Path::new("cases.YAML")).unwrap(),
            FixtureFormat::Yaml
        );
        assert_eq!(
            FixtureFormat::from_path(Path::new("data/cases.json")).unwrap(),
            FixtureFormat::Json
        );
        assert!(FixtureFormat::from_path(Path::new("cases.toml")).is_err());
        assert!(FixtureFormat::from_path(Path::new("cases")).is_err());
    }

    #[test]
    fn absent_justification_and_expected_default() {
        let yaml = "cases:\n  - id: UI_TC_02\n    name: Clear button test\n    length: S\n    input: mama gedhara yanavaa\n";
        let document: FixtureDocument = serde_yaml::from_str(yaml).unwrap();
        let case = &document.cases[0];
        assert_eq!(case.expected, "");
        assert_eq!(case.justification, None);
        assert_eq!(case.category, "");
    }
}
