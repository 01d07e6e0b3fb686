//! Ordered, validated test case catalogue

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::error::{CatalogueError, Result};
use crate::types::{TestCase, TestGroup};

/// The full ordered set of test cases.
///
/// Order is insertion order and is preserved by every consumer. Invariants
/// (id pattern, unique ids) are checked once, on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalogue {
    cases: Vec<TestCase>,
}

impl Catalogue {
    /// Build a catalogue from cases in their final order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::InvalidCatalogue`] if an id does not match
    /// `{P|N|UI}_TC_{nn}` or appears more than once.
    pub fn new(cases: Vec<TestCase>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(cases.len());
        for case in &cases {
            if !case.has_valid_id() {
                return Err(CatalogueError::invalid(format!(
                    "test case id '{}' does not match {{P|N|UI}}_TC_{{nn}}",
                    case.id
                )));
            }
            if !seen.insert(case.id.as_str()) {
                return Err(CatalogueError::invalid(format!(
                    "duplicate test case id '{}'",
                    case.id
                )));
            }
        }
        Ok(Self { cases })
    }

    /// Concatenate group blocks in the order given.
    ///
    /// # Errors
    ///
    /// Same as [`Catalogue::new`].
    pub fn from_blocks<I>(blocks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<TestCase>>,
    {
        Self::new(blocks.into_iter().flatten().collect())
    }

    /// Number of test cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the catalogue has no cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterate cases in catalogue order.
    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.cases.iter()
    }

    /// Cases as a slice.
    #[must_use]
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Look up a case by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TestCase> {
        self.cases.iter().find(|case| case.id == id)
    }

    /// Cases whose id carries the group's prefix, in catalogue order.
    pub fn group(&self, group: TestGroup) -> impl Iterator<Item = &TestCase> + '_ {
        self.cases
            .iter()
            .filter(move |case| case.id.starts_with(group.prefix()))
    }

    /// Count cases of a group by filtering on id prefix.
    #[must_use]
    pub fn count(&self, group: TestGroup) -> usize {
        self.group(group).count()
    }

    /// Total and per-group counts computed from the current cases.
    #[must_use]
    pub fn coverage(&self) -> CoverageSummary {
        CoverageSummary::from_counts(
            self.len(),
            TestGroup::ALL.into_iter().map(|group| (group, self.count(group))),
        )
    }

    /// Consume the catalogue, returning its cases.
    #[must_use]
    pub fn into_cases(self) -> Vec<TestCase> {
        self.cases
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

/// Total and per-group case counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageSummary {
    /// Total number of cases
    pub total: usize,
    /// Per-group counts in catalogue group order
    pub groups: IndexMap<TestGroup, usize>,
}

impl CoverageSummary {
    /// Build a summary from a total and per-group counts.
    ///
    /// Groups missing from `counts` are recorded as zero.
    pub fn from_counts<I>(total: usize, counts: I) -> Self
    where
        I: IntoIterator<Item = (TestGroup, usize)>,
    {
        let mut groups: IndexMap<TestGroup, usize> =
            TestGroup::ALL.into_iter().map(|group| (group, 0)).collect();
        for (group, count) in counts {
            groups.insert(group, count);
        }
        Self { total, groups }
    }

    /// Count recorded for a group.
    #[must_use]
    pub fn count(&self, group: TestGroup) -> usize {
        self.groups.get(&group).copied().unwrap_or_default()
    }

    /// Whether every group matches its canonical size and the total is 36.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total == TestGroup::expected_total()
            && TestGroup::ALL
                .into_iter()
                .all(|group| self.count(group) == group.expected_count())
    }
}

impl fmt::Display for CoverageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Cases: {}", self.total)?;
        for (group, count) in &self.groups {
            writeln!(f, "{}: {}/{}", group.label(), count, group.expected_count())?;
        }
        Ok(())
    }
}
