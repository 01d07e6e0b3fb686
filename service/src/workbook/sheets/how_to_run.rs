use catalogue_core::error::Result;
use rust_xlsxwriter::Workbook;

use super::super::cast::{self, xlsx_error};
use super::super::exporter::WorkbookExporter;
use super::super::layout::{HOW_TO_RUN_ROWS, HOW_TO_RUN_SHEET};
use super::super::render::SheetFormats;

impl WorkbookExporter {
    pub(crate) fn write_how_to_run_sheet(
        workbook: &mut Workbook,
        formats: &SheetFormats,
    ) -> Result<()> {
        let worksheet = workbook
            .add_worksheet()
            .set_name(HOW_TO_RUN_SHEET)
            .map_err(xlsx_error)?;

        for (index, text) in HOW_TO_RUN_ROWS.iter().enumerate() {
            let row = cast::usize_to_u32_row(index)?;
            match index {
                0 => worksheet
                    .write_string_with_format(row, 0, *text, &formats.title)
                    .map_err(xlsx_error)?,
                _ if text.is_empty() => continue,
                _ => worksheet.write_string(row, 0, *text).map_err(xlsx_error)?,
            };
        }

        worksheet.set_column_width(0, 50).map_err(xlsx_error)?;

        Ok(())
    }
}
