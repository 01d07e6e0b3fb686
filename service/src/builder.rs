//! Catalogue builder.

use catalogue_core::prelude::*;
use tracing::info;

use crate::fixtures::{negative_cases, positive_cases, ui_cases};

/// Build the canonical catalogue: positive, then negative, then UI cases.
///
/// # Errors
///
/// Returns [`CatalogueError::InvalidCatalogue`] if the built-in data breaks an
/// invariant (malformed or duplicate id).
pub fn build_catalogue() -> Result<Catalogue> {
    let blocks = [
        (TestGroup::Positive, positive_cases()),
        (TestGroup::Negative, negative_cases()),
        (TestGroup::Ui, ui_cases()),
    ];

    for (group, cases) in &blocks {
        info!("Added {} {} cases", cases.len(), group.description());
    }

    let catalogue = Catalogue::from_blocks(blocks.into_iter().map(|(_, cases)| cases))?;
    info!("Gathered {} total cases", catalogue.len());
    Ok(catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_catalogue_is_complete() {
        let catalogue = build_catalogue().unwrap();
        assert_eq!(catalogue.len(), 36);
        assert!(catalogue.coverage().is_complete());
    }

    #[test]
    fn groups_appear_as_contiguous_blocks() {
        let catalogue = build_catalogue().unwrap();
        let groups: Vec<TestGroup> = catalogue.iter().filter_map(TestCase::group).collect();
        let boundaries = groups.windows(2).filter(|pair| pair[0] != pair[1]).count();
        assert_eq!(groups.len(), catalogue.len());
        assert_eq!(groups.first(), Some(&TestGroup::Positive));
        assert_eq!(groups.last(), Some(&TestGroup::Ui));
        assert_eq!(boundaries, 2);
    }
}
