use catalogue_core::prelude::*;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::cast::xlsx_error;
use super::exporter::WorkbookExporter;
use super::persist;

/// Cell formats shared across sheets.
pub(crate) struct SheetFormats {
    pub(crate) header: Format,
    pub(crate) body: Format,
    pub(crate) title: Format,
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Where the workbook was written
    pub path: PathBuf,
    /// Size of the written workbook in bytes
    pub bytes: usize,
    /// Counts as written to the "Coverage" sheet
    pub coverage: CoverageSummary,
}

impl WorkbookExporter {
    /// Render the catalogue and write it to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an export failure ([`CatalogueError::is_export_failure`]) if
    /// the workbook cannot be rendered, the parent directory cannot be
    /// created, or the file cannot be written.
    pub fn export(&self, catalogue: &Catalogue, path: &Path) -> Result<ExportReport> {
        info!("Saving data to {}...", path.display());

        let content = self.render(catalogue)?;
        persist::write_atomic(path, &content)?;
        info!("Data saved to: {}", path.display());

        let coverage = catalogue.coverage();
        log_completion(&coverage);

        Ok(ExportReport {
            path: path.to_path_buf(),
            bytes: content.len(),
            coverage,
        })
    }

    /// Render the workbook as a byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Workbook`] if a sheet cannot be written.
    pub fn render(&self, catalogue: &Catalogue) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let formats = self.formats();

        self.write_test_cases_sheet(&mut workbook, catalogue, &formats)?;
        Self::write_conventions_sheet(&mut workbook, &formats)?;
        Self::write_coverage_sheet(&mut workbook, catalogue, &formats)?;
        Self::write_how_to_run_sheet(&mut workbook, &formats)?;

        workbook.save_to_buffer().map_err(xlsx_error)
    }

    fn formats(&self) -> SheetFormats {
        let header = if self.bold_headers() {
            Format::new()
                .set_bold()
                .set_background_color(Color::RGB(0x00D9_E1F2))
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Center)
        } else {
            Format::new()
        };

        let body = if self.wrap_text() {
            Format::new().set_text_wrap().set_align(FormatAlign::Top)
        } else {
            Format::new().set_align(FormatAlign::Top)
        };

        SheetFormats {
            header,
            body,
            title: Format::new().set_bold(),
        }
    }
}

fn log_completion(coverage: &CoverageSummary) {
    info!("DATA SETUP COMPLETE:");
    for line in coverage.to_string().lines() {
        info!("{line}");
    }
    if !coverage.is_complete() {
        warn!(
            "Catalogue differs from the canonical {} cases",
            TestGroup::expected_total()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_catalogue;

    #[test]
    fn renders_a_zip_container() {
        let catalogue = build_catalogue().unwrap();
        let bytes = WorkbookExporter::new().render(&catalogue).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn renders_an_empty_catalogue() {
        let catalogue = Catalogue::new(Vec::new()).unwrap();
        let bytes = WorkbookExporter::new().render(&catalogue).unwrap();
        assert!(!bytes.is_empty());
    }
}
