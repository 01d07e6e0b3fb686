use catalogue_core::error::Result;
use rust_xlsxwriter::Workbook;

use super::super::cast::{self, xlsx_error};
use super::super::exporter::WorkbookExporter;
use super::super::layout::{CONVENTIONS_SHEET, convention_rows};
use super::super::render::SheetFormats;

impl WorkbookExporter {
    pub(crate) fn write_conventions_sheet(
        workbook: &mut Workbook,
        formats: &SheetFormats,
    ) -> Result<()> {
        let worksheet = workbook
            .add_worksheet()
            .set_name(CONVENTIONS_SHEET)
            .map_err(xlsx_error)?;

        for (index, text) in convention_rows().iter().enumerate() {
            let row = cast::usize_to_u32_row(index)?;
            if text.is_empty() {
                continue;
            }
            if text.ends_with(':') {
                worksheet
                    .write_string_with_format(row, 0, text, &formats.title)
                    .map_err(xlsx_error)?;
            } else {
                worksheet.write_string(row, 0, text).map_err(xlsx_error)?;
            }
        }

        worksheet.set_column_width(0, 40).map_err(xlsx_error)?;

        Ok(())
    }
}
