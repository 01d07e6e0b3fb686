//! Sheet names, headers and static sheet content.
//!
//! An execution harness reading the workbook back relies on these names and
//! on the header order of the "Test cases" sheet.

use catalogue_core::types::{LengthClass, TestGroup};

/// Test case table sheet.
pub const TEST_CASES_SHEET: &str = "Test cases";
/// Id prefix and length code legend.
pub const CONVENTIONS_SHEET: &str = "Conventions";
/// Coverage summary sheet.
pub const COVERAGE_SHEET: &str = "Coverage";
/// Execution guide sheet.
pub const HOW_TO_RUN_SHEET: &str = "How to Run";

/// Sheets in workbook order.
pub const SHEET_ORDER: [&str; 4] = [
    TEST_CASES_SHEET,
    CONVENTIONS_SHEET,
    COVERAGE_SHEET,
    HOW_TO_RUN_SHEET,
];

/// Header row of the "Test cases" sheet.
pub const TEST_CASE_HEADERS: [&str; 9] = [
    "TC ID",
    "Test case name",
    "Input length type",
    "Input",
    "Expected output",
    "Actual output",
    "Status",
    "Accuracy justification/Description of issue type",
    "What is covered by the test",
];

/// Column of "Actual output".
pub const ACTUAL_OUTPUT_COLUMN: usize = 5;
/// Column of "Status".
pub const STATUS_COLUMN: usize = 6;

/// Title cell of the "Coverage" sheet.
pub const COVERAGE_TITLE: &str = "Test Coverage Summary";
/// Label of the total row on the "Coverage" sheet.
pub const COVERAGE_TOTAL_LABEL: &str = "Total Test Cases:";

/// Label of a group's row on the "Coverage" sheet, e.g. `Positive:`.
#[must_use]
pub fn coverage_label(group: TestGroup) -> String {
    format!("{}:", group.label())
}

/// Rows of the "Conventions" sheet.
#[must_use]
pub fn convention_rows() -> Vec<String> {
    let mut rows = vec!["Test Case ID Formats:".to_string()];
    rows.extend(
        TestGroup::ALL
            .iter()
            .map(|group| format!("{}_xx for {}", group.prefix(), group.description())),
    );
    rows.push(String::new());
    rows.push("Length codes:".to_string());
    rows.push(
        LengthClass::ALL
            .iter()
            .map(|length| format!("{}: {}", length.code(), length.legend()))
            .collect::<Vec<_>>()
            .join(", "),
    );
    rows
}

/// Rows of the "How to Run" sheet.
pub const HOW_TO_RUN_ROWS: [&str; 7] = [
    "Testing Guide",
    "1. Install: npm install",
    "2. Run Tests: node src/tests/test-runner.js",
    "",
    "Output paths:",
    "- results/test-results.xlsx",
    "- results/execution-report.html",
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn conventions_text() {
        assert_eq!(
            convention_rows(),
            vec![
                "Test Case ID Formats:",
                "P_TC_xx for Positive Functional",
                "N_TC_xx for Negative Functional",
                "UI_TC_xx for UI/Usability",
                "",
                "Length codes:",
                "S: Short, M: Medium, L: Long",
            ]
        );
    }

    #[test]
    fn coverage_labels() {
        assert_eq!(coverage_label(TestGroup::Positive), "Positive:");
        assert_eq!(coverage_label(TestGroup::Ui), "UI Tests:");
    }
}
