//! Read an exported workbook back.
//!
//! This is the schema an execution harness honours: it reads the "Test cases"
//! sheet, runs each input through the transliterator and fills in "Actual
//! output" and "Status".

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use catalogue_core::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::layout::{
    ACTUAL_OUTPUT_COLUMN, COVERAGE_SHEET, COVERAGE_TOTAL_LABEL, STATUS_COLUMN, TEST_CASE_HEADERS,
    TEST_CASES_SHEET, coverage_label,
};

/// One data row of the "Test cases" sheet, every column as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCaseRow {
    /// TC ID
    pub id: String,
    /// Test case name
    pub name: String,
    /// Input length type
    pub length: String,
    /// Input
    pub input: String,
    /// Expected output
    pub expected: String,
    /// Actual output, blank until a harness runs the case
    pub actual: String,
    /// Status, blank until a harness runs the case
    pub status: String,
    /// Accuracy justification / description of issue type
    pub justification: String,
    /// What is covered by the test
    pub category: String,
}

impl TestCaseRow {
    fn from_cells(cells: &[Data]) -> Self {
        let text = |col: usize| cell_text(cells.get(col));
        Self {
            id: text(0),
            name: text(1),
            length: text(2),
            input: text(3),
            expected: text(4),
            actual: text(ACTUAL_OUTPUT_COLUMN),
            status: text(STATUS_COLUMN),
            justification: text(7),
            category: text(8),
        }
    }

    /// Whether the row carries exactly the data of `case`.
    #[must_use]
    pub fn matches(&self, case: &TestCase) -> bool {
        self.id == case.id
            && self.name == case.name
            && self.length == case.length.code()
            && self.input == case.input
            && self.expected == case.expected
            && self.justification == case.justification_text()
            && self.category == case.category
    }

    /// Whether "Actual output" and "Status" are still blank.
    #[must_use]
    pub fn is_unexecuted(&self) -> bool {
        self.actual.is_empty() && self.status.is_empty()
    }

    /// Rebuild the test case; an empty justification becomes `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::InvalidCatalogue`] for an unknown length code.
    pub fn to_test_case(&self) -> Result<TestCase> {
        let length: LengthClass = self.length.parse()?;
        let mut case = TestCase::new(
            self.id.clone(),
            self.name.clone(),
            length,
            self.input.clone(),
            self.expected.clone(),
        );
        if !self.justification.is_empty() {
            case = case.with_justification(self.justification.clone());
        }
        case.category = self.category.clone();
        Ok(case)
    }
}

/// Names of the sheets in workbook order.
///
/// # Errors
///
/// Returns [`CatalogueError::InvalidWorkbook`] if the file cannot be opened as xlsx.
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    Ok(open(path)?.sheet_names())
}

/// Read every data row of the "Test cases" sheet.
///
/// # Errors
///
/// Returns [`CatalogueError::InvalidWorkbook`] if the file or sheet is missing
/// or the header row differs from the exported layout.
pub fn read_test_cases(path: &Path) -> Result<Vec<TestCaseRow>> {
    let range = worksheet(&mut open(path)?, TEST_CASES_SHEET)?;
    let mut rows = range.rows();

    let header: Vec<String> = rows
        .next()
        .ok_or_else(|| {
            CatalogueError::InvalidWorkbook(format!("sheet '{TEST_CASES_SHEET}' is empty"))
        })?
        .iter()
        .map(|cell| cell_text(Some(cell)))
        .collect();
    if header != TEST_CASE_HEADERS {
        return Err(CatalogueError::InvalidWorkbook(format!(
            "unexpected header row in '{TEST_CASES_SHEET}': {header:?}"
        )));
    }

    Ok(rows
        .map(TestCaseRow::from_cells)
        .filter(|row| !row.id.is_empty())
        .collect())
}

/// Read the counts from the "Coverage" sheet.
///
/// # Errors
///
/// Returns [`CatalogueError::InvalidWorkbook`] if the sheet is missing or a
/// count row is absent or not a whole number.
pub fn read_coverage(path: &Path) -> Result<CoverageSummary> {
    let range = worksheet(&mut open(path)?, COVERAGE_SHEET)?;

    let lookup = |label: &str| -> Result<usize> {
        let row = range
            .rows()
            .find(|row| row.first().is_some_and(|cell| cell_text(Some(cell)) == label))
            .ok_or_else(|| {
                CatalogueError::InvalidWorkbook(format!("coverage row '{label}' not found"))
            })?;
        cell_count(row.get(1)).ok_or_else(|| {
            CatalogueError::InvalidWorkbook(format!("coverage row '{label}' has no count"))
        })
    };

    let total = lookup(COVERAGE_TOTAL_LABEL)?;
    let mut counts = Vec::with_capacity(TestGroup::ALL.len());
    for group in TestGroup::ALL {
        counts.push((group, lookup(&coverage_label(group))?));
    }
    Ok(CoverageSummary::from_counts(total, counts))
}

fn open(path: &Path) -> Result<Xlsx<BufReader<File>>> {
    open_workbook(path).map_err(|e| {
        CatalogueError::InvalidWorkbook(format!("cannot open {}: {e}", path.display()))
    })
}

fn worksheet(workbook: &mut Xlsx<BufReader<File>>, name: &str) -> Result<Range<Data>> {
    workbook
        .worksheet_range(name)
        .map_err(|e| CatalogueError::InvalidWorkbook(format!("cannot read sheet '{name}': {e}")))
}

fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cell_count(cell: Option<&Data>) -> Option<usize> {
    match cell? {
        Data::Int(value) => usize::try_from(*value).ok(),
        Data::Float(value) if *value >= 0.0 && value.fract() == 0.0 => Some(*value as usize),
        Data::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
