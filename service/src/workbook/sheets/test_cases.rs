use catalogue_core::prelude::*;
use rust_xlsxwriter::{Workbook, Worksheet};

use super::super::cast::{self, xlsx_error};
use super::super::exporter::WorkbookExporter;
use super::super::layout::{TEST_CASE_HEADERS, TEST_CASES_SHEET};
use super::super::render::SheetFormats;

impl WorkbookExporter {
    pub(crate) fn write_test_cases_sheet(
        &self,
        workbook: &mut Workbook,
        catalogue: &Catalogue,
        formats: &SheetFormats,
    ) -> Result<()> {
        let worksheet = workbook
            .add_worksheet()
            .set_name(TEST_CASES_SHEET)
            .map_err(xlsx_error)?;

        Self::write_headers(worksheet, formats)?;

        for (index, case) in catalogue.iter().enumerate() {
            let row = cast::usize_to_u32_row(index + 1)?;
            Self::write_case_row(worksheet, row, case, formats)?;
        }

        if self.freeze_headers() {
            worksheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;
        }

        if self.add_filters() {
            let last_row = cast::usize_to_u32_row(catalogue.len())?;
            let last_col = cast::usize_to_u16_column(TEST_CASE_HEADERS.len() - 1)?;
            worksheet
                .autofilter(0, 0, last_row, last_col)
                .map_err(xlsx_error)?;
        }

        for (col, width) in self.column_widths.as_array().into_iter().enumerate() {
            let col = cast::usize_to_u16_column(col)?;
            worksheet.set_column_width(col, width).map_err(xlsx_error)?;
        }

        Ok(())
    }

    fn write_headers(worksheet: &mut Worksheet, formats: &SheetFormats) -> Result<()> {
        for (col, header) in TEST_CASE_HEADERS.iter().enumerate() {
            let col = cast::usize_to_u16_column(col)?;
            worksheet
                .write_string_with_format(0, col, *header, &formats.header)
                .map_err(xlsx_error)?;
        }
        Ok(())
    }

    /// "Actual output" and "Status" stay blank. Empty strings are stored as
    /// formatted blank cells (`<c r="E37" s=".."/>`), since `rust_xlsxwriter`
    /// cannot store an empty shared string. calamine reads such a cell as an
    /// empty string; readers that skip stub cells (SheetJS by default) see no
    /// cell at all and must treat a missing cell as `""`.
    fn write_case_row(
        worksheet: &mut Worksheet,
        row: u32,
        case: &TestCase,
        formats: &SheetFormats,
    ) -> Result<()> {
        let cells = [
            case.id.as_str(),
            case.name.as_str(),
            case.length.code(),
            case.input.as_str(),
            case.expected.as_str(),
            "",
            "",
            case.justification_text(),
            case.category.as_str(),
        ];

        for (col, value) in cells.into_iter().enumerate() {
            let col = cast::usize_to_u16_column(col)?;
            if value.is_empty() {
                worksheet
                    .write_blank(row, col, &formats.body)
                    .map_err(xlsx_error)?;
            } else {
                worksheet
                    .write_string_with_format(row, col, value, &formats.body)
                    .map_err(xlsx_error)?;
            }
        }
        Ok(())
    }
}
