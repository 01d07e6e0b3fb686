use catalogue_core::prelude::*;
use rust_xlsxwriter::Workbook;

use super::super::cast::{self, xlsx_error};
use super::super::exporter::WorkbookExporter;
use super::super::layout::{COVERAGE_SHEET, COVERAGE_TITLE, COVERAGE_TOTAL_LABEL, coverage_label};
use super::super::render::SheetFormats;

impl WorkbookExporter {
    /// Counts are taken from the catalogue here, at write time.
    pub(crate) fn write_coverage_sheet(
        workbook: &mut Workbook,
        catalogue: &Catalogue,
        formats: &SheetFormats,
    ) -> Result<()> {
        let worksheet = workbook
            .add_worksheet()
            .set_name(COVERAGE_SHEET)
            .map_err(xlsx_error)?;

        worksheet
            .write_string_with_format(0, 0, COVERAGE_TITLE, &formats.title)
            .map_err(xlsx_error)?;

        let mut row = 2;
        worksheet
            .write_string(row, 0, COVERAGE_TOTAL_LABEL)
            .map_err(xlsx_error)?;
        worksheet
            .write_number(row, 1, cast::count_to_f64(catalogue.len()))
            .map_err(xlsx_error)?;
        row += 1;

        for group in TestGroup::ALL {
            worksheet
                .write_string(row, 0, coverage_label(group))
                .map_err(xlsx_error)?;
            worksheet
                .write_number(row, 1, cast::count_to_f64(catalogue.count(group)))
                .map_err(xlsx_error)?;
            row += 1;
        }

        worksheet.set_column_width(0, 20).map_err(xlsx_error)?;
        worksheet.set_column_width(1, 10).map_err(xlsx_error)?;

        Ok(())
    }
}
