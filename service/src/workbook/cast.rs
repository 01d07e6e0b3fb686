use catalogue_core::error::CatalogueError;
use rust_xlsxwriter::XlsxError;

/// Wrap a `rust_xlsxwriter` error as a rendering failure.
pub(super) fn xlsx_error(err: XlsxError) -> CatalogueError {
    CatalogueError::workbook(err.to_string())
}

/// Safely cast usize to u16 for Excel column indices.
/// Excel has a maximum of 16,384 columns (2^14).
pub(super) fn usize_to_u16_column(value: usize) -> Result<u16, CatalogueError> {
    const MAX_EXCEL_COLUMNS: usize = 16_384;

    if value >= MAX_EXCEL_COLUMNS {
        return Err(CatalogueError::workbook(format!(
            "Too many columns for Excel: {value} (max: {MAX_EXCEL_COLUMNS})"
        )));
    }

    u16::try_from(value)
        .map_err(|_| CatalogueError::workbook(format!("Column index {value} cannot fit in u16")))
}

/// Safely cast usize to u32 for Excel row indices.
/// Excel has a maximum of 1,048,576 rows (2^20).
pub(super) fn usize_to_u32_row(value: usize) -> Result<u32, CatalogueError> {
    const MAX_EXCEL_ROWS: usize = 1_048_576;

    if value >= MAX_EXCEL_ROWS {
        return Err(CatalogueError::workbook(format!(
            "Too many rows for Excel: {value} (max: {MAX_EXCEL_ROWS})"
        )));
    }

    u32::try_from(value)
        .map_err(|_| CatalogueError::workbook(format!("Row index {value} cannot fit in u32")))
}

/// Convert a case count to an Excel number.
pub(super) fn count_to_f64(value: usize) -> f64 {
    f64::from(u32::try_from(value).unwrap_or(u32::MAX))
}
