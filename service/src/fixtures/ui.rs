//! UI / usability cases for an interactive front-end.

use catalogue_core::types::{LengthClass::Short, TestCase};

use super::case;

/// UI cases `UI_TC_01`..`UI_TC_02`.
///
/// `UI_TC_02` expects the clear button to empty both fields, so its
/// `expected` is the empty string.
#[must_use]
pub fn ui_cases() -> Vec<TestCase> {
    vec![
        case(
            "UI_TC_01",
            "Real-time update test",
            Short,
            "mama gedhara yanavaa",
            "මම ගෙදර යනවා",
            "Sinhala output should update automatically while typing.",
            [
                "Usability flow (real-time conversion)",
                "Simple sentence",
                "S",
                "Real-time output update behavior",
            ],
        ),
        case(
            "UI_TC_02",
            "Clear button test",
            Short,
            "mama gedhara yanavaa",
            "",
            "Clear button should reset both fields.",
            [
                "Empty/cleared input handling",
                "Simple sentence",
                "S",
                "Error handling / input validation",
            ],
        ),
    ]
}
