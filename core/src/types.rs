//! Test case record and classification types

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogueError;

/// Test case ids look like `P_TC_01`, `N_TC_10` or `UI_TC_02`.
static CASE_ID_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^(P|N|UI)_TC_\d{2}$").expect("case id pattern is a valid regex")
});

/// Input length class of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthClass {
    /// Short input
    #[serde(rename = "S")]
    Short,
    /// Medium input
    #[serde(rename = "M")]
    Medium,
    /// Long input
    #[serde(rename = "L")]
    Long,
}

impl LengthClass {
    /// All length classes in legend order.
    pub const ALL: [LengthClass; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Single letter code written to the workbook.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Short => "S",
            Self::Medium => "M",
            Self::Long => "L",
        }
    }

    /// Human readable legend entry.
    #[must_use]
    pub fn legend(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }
}

impl fmt::Display for LengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LengthClass {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "S" => Ok(Self::Short),
            "M" => Ok(Self::Medium),
            "L" => Ok(Self::Long),
            other => Err(CatalogueError::invalid(format!(
                "unknown length class '{other}' (expected S, M or L)"
            ))),
        }
    }
}

/// Group a test case belongs to, fully determined by its id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestGroup {
    /// Positive functional cases
    Positive,
    /// Negative functional (robustness) cases
    Negative,
    /// UI / usability cases
    Ui,
}

impl TestGroup {
    /// Groups in catalogue order.
    pub const ALL: [TestGroup; 3] = [Self::Positive, Self::Negative, Self::Ui];

    /// Id prefix shared by every case of the group.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Positive => "P_TC",
            Self::Negative => "N_TC",
            Self::Ui => "UI_TC",
        }
    }

    /// Number of cases the canonical catalogue holds for this group.
    #[must_use]
    pub fn expected_count(self) -> usize {
        match self {
            Self::Positive => 24,
            Self::Negative => 10,
            Self::Ui => 2,
        }
    }

    /// Label used on the coverage sheet and in summaries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Ui => "UI Tests",
        }
    }

    /// Description used on the conventions sheet.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Positive => "Positive Functional",
            Self::Negative => "Negative Functional",
            Self::Ui => "UI/Usability",
        }
    }

    /// Resolve the group of an id from its prefix.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| id.starts_with(group.prefix()))
    }

    /// Total number of cases in the canonical catalogue.
    #[must_use]
    pub fn expected_total() -> usize {
        Self::ALL.iter().map(|group| group.expected_count()).sum()
    }
}

impl fmt::Display for TestGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification facets packed into a test case's `category` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFacets {
    /// Language domain, e.g. "Daily language usage"
    pub domain: String,
    /// Sentence type, e.g. "Simple sentence"
    pub sentence_type: String,
    /// Length code repeated as a facet
    pub length: String,
    /// Validation purpose, e.g. "Accuracy validation"
    pub purpose: String,
}

impl CategoryFacets {
    /// Build facets from the four facet strings.
    #[must_use]
    pub fn new(domain: &str, sentence_type: &str, length: &str, purpose: &str) -> Self {
        Self {
            domain: domain.to_string(),
            sentence_type: sentence_type.to_string(),
            length: length.to_string(),
            purpose: purpose.to_string(),
        }
    }

    /// Split newline-joined category text; missing facets stay empty.
    #[must_use]
    pub fn parse(category: &str) -> Self {
        let mut lines = category.lines().map(str::trim);
        let mut next = || lines.next().unwrap_or_default().to_string();
        Self {
            domain: next(),
            sentence_type: next(),
            length: next(),
            purpose: next(),
        }
    }

    /// Join the non-empty facets with newlines.
    #[must_use]
    pub fn join(&self) -> String {
        [
            self.domain.as_str(),
            self.sentence_type.as_str(),
            self.length.as_str(),
            self.purpose.as_str(),
        ]
        .into_iter()
        .filter(|facet| !facet.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// A single transliteration test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Unique id, `{P|N|UI}_TC_{nn}`
    pub id: String,

    /// Short human readable title
    pub name: String,

    /// Input length class
    pub length: LengthClass,

    /// Romanized Sinhala input, possibly mixed with English
    pub input: String,

    /// Judged-correct Sinhala output; empty means the output is expected to be cleared
    #[serde(default)]
    pub expected: String,

    /// Accuracy justification or description of the issue type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,

    /// Newline-joined classification facets
    #[serde(default)]
    pub category: String,
}

impl TestCase {
    /// Create a test case without justification or category.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        length: LengthClass,
        input: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            length,
            input: input.into(),
            expected: expected.into(),
            justification: None,
            category: String::new(),
        }
    }

    /// Attach a justification.
    #[must_use]
    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.justification = Some(justification.into());
        self
    }

    /// Attach classification facets.
    #[must_use]
    pub fn with_facets(mut self, facets: &CategoryFacets) -> Self {
        self.category = facets.join();
        self
    }

    /// Group derived from the id prefix.
    #[must_use]
    pub fn group(&self) -> Option<TestGroup> {
        TestGroup::from_id(&self.id)
    }

    /// Whether the id matches `{P|N|UI}_TC_{nn}`.
    #[must_use]
    pub fn has_valid_id(&self) -> bool {
        CASE_ID_PATTERN.is_match(&self.id)
    }

    /// Justification as written to the workbook.
    #[must_use]
    pub fn justification_text(&self) -> &str {
        self.justification.as_deref().unwrap_or_default()
    }

    /// Classification facets parsed from `category`.
    #[must_use]
    pub fn facets(&self) -> CategoryFacets {
        CategoryFacets::parse(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn group_follows_prefix() {
        assert_eq!(TestGroup::from_id("P_TC_01"), Some(TestGroup::Positive));
        assert_eq!(TestGroup::from_id("N_TC_10"), Some(TestGroup::Negative));
        assert_eq!(TestGroup::from_id("UI_TC_02"), Some(TestGroup::Ui));
        assert_eq!(TestGroup::from_id("X_TC_01"), None);
        assert_eq!(TestGroup::expected_total(), 36);
    }

    #[test]
    fn id_pattern() {
        let case = |id: &str| TestCase::new(id, "n", LengthClass::Short, "a", "b");
        assert!(case("P_TC_01").has_valid_id());
        assert!(case("UI_TC_02").has_valid_id());
        assert!(!case("P_TC_1").has_valid_id());
        assert!(!case("P_TC_001").has_valid_id());
        assert!(!case("UI-TC-01").has_valid_id());
        assert!(!case("p_tc_01").has_valid_id());
    }

    #[test]
    fn length_codes_round_trip_through_serde() {
        let json = serde_json::to_string(&LengthClass::Medium).unwrap();
        assert_eq!(json, "\"M\"");
        let parsed: LengthClass = serde_json::from_str("\"L\"").unwrap();
        assert_eq!(parsed, LengthClass::Long);
        assert_eq!("S".parse::<LengthClass>().unwrap(), LengthClass::Short);
        assert!("XL".parse::<LengthClass>().is_err());
    }

    #[test]
    fn facets_join_and_parse() {
        let facets = CategoryFacets::new(
            "Daily language usage",
            "Simple sentence",
            "S",
            "Accuracy validation",
        );
        let case = TestCase::new("P_TC_01", "t", LengthClass::Short, "a", "b").with_facets(&facets);
        assert_eq!(
            case.category,
            "Daily language usage\nSimple sentence\nS\nAccuracy validation"
        );
        assert_eq!(case.facets(), facets);

        let partial = CategoryFacets::parse("Punctuation / numbers");
        assert_eq!(partial.domain, "Punctuation / numbers");
        assert_eq!(partial.purpose, "");
    }

    #[test]
    fn absent_justification_renders_empty() {
        let case = TestCase::new("UI_TC_02", "Clear", LengthClass::Short, "mama", "");
        assert_eq!(case.justification_text(), "");
        assert_eq!(case.expected, "");
    }

    proptest! {
        #[test]
        fn any_two_digit_sequence_is_a_valid_id(group in 0usize..3, seq in 0u32..100) {
            let prefix = TestGroup::ALL[group].prefix();
            let id = format!("{prefix}_{seq:02}");
            let case = TestCase::new(id.clone(), "n", LengthClass::Short, "a", "b");
            prop_assert!(case.has_valid_id());
            prop_assert_eq!(case.group(), Some(TestGroup::ALL[group]));
        }

        #[test]
        fn three_digit_sequences_are_rejected(seq in 100u32..1000) {
            let case = TestCase::new(format!("N_TC_{seq}"), "n", LengthClass::Short, "a", "b");
            prop_assert!(!case.has_valid_id());
        }
    }
}
