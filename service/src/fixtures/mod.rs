//! Built-in test case data.
//!
//! Each producer returns its block as a fresh, ordered vector. The builder
//! concatenates the blocks; nothing here holds shared state.

mod negative;
mod positive;
mod ui;

pub use negative::negative_cases;
pub use positive::positive_cases;
pub use ui::ui_cases;

use catalogue_core::types::{CategoryFacets, LengthClass, TestCase};

/// Facets are domain, sentence type, length code and validation purpose.
fn case(
    id: &str,
    name: &str,
    length: LengthClass,
    input: &str,
    expected: &str,
    justification: &str,
    facets: [&str; 4],
) -> TestCase {
    let [domain, sentence_type, length_code, purpose] = facets;
    TestCase::new(id, name, length, input, expected)
        .with_justification(justification)
        .with_facets(&CategoryFacets::new(domain, sentence_type, length_code, purpose))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue_core::types::TestGroup;

    #[test]
    fn blocks_have_canonical_sizes() {
        assert_eq!(positive_cases().len(), TestGroup::Positive.expected_count());
        assert_eq!(negative_cases().len(), TestGroup::Negative.expected_count());
        assert_eq!(ui_cases().len(), TestGroup::Ui.expected_count());
    }

    #[test]
    fn ids_are_sequential_within_each_block() {
        for (group, cases) in [
            (TestGroup::Positive, positive_cases()),
            (TestGroup::Negative, negative_cases()),
            (TestGroup::Ui, ui_cases()),
        ] {
            for (index, case) in cases.iter().enumerate() {
                assert_eq!(case.id, format!("{}_{:02}", group.prefix(), index + 1));
                assert_eq!(case.group(), Some(group));
            }
        }
    }

    #[test]
    fn length_facet_matches_length_class() {
        for case in positive_cases()
            .iter()
            .chain(&negative_cases())
            .chain(&ui_cases())
        {
            assert_eq!(case.facets().length, case.length.code(), "{}", case.id);
        }
    }

    #[test]
    fn only_the_clear_button_case_expects_empty_output() {
        let empty: Vec<String> = positive_cases()
            .into_iter()
            .chain(negative_cases())
            .chain(ui_cases())
            .filter(|case| case.expected.is_empty())
            .map(|case| case.id)
            .collect();
        assert_eq!(empty, vec!["UI_TC_02".to_string()]);
    }
}
