//! Catalogue contents and ordering.

use catalogue_core::prelude::*;
use catalogue_service::build_catalogue;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn built_catalogue_has_canonical_counts() -> anyhow::Result<()> {
    let catalogue = build_catalogue()?;

    assert_eq!(catalogue.len(), 36);
    assert_eq!(catalogue.count(TestGroup::Positive), 24);
    assert_eq!(catalogue.count(TestGroup::Negative), 10);
    assert_eq!(catalogue.count(TestGroup::Ui), 2);
    assert!(catalogue.coverage().is_complete());
    Ok(())
}

#[test]
fn ids_are_unique_and_well_formed() -> anyhow::Result<()> {
    let catalogue = build_catalogue()?;
    let ids: HashSet<&str> = catalogue.iter().map(|case| case.id.as_str()).collect();

    assert_eq!(ids.len(), catalogue.len());
    assert!(catalogue.iter().all(TestCase::has_valid_id));
    Ok(())
}

#[test]
fn order_is_stable_across_builds() -> anyhow::Result<()> {
    let first: Vec<String> = build_catalogue()?.iter().map(|c| c.id.clone()).collect();
    let second: Vec<String> = build_catalogue()?.iter().map(|c| c.id.clone()).collect();

    assert_eq!(first, second);
    assert_eq!(first.first().map(String::as_str), Some("P_TC_01"));
    assert_eq!(first.get(24).map(String::as_str), Some("N_TC_01"));
    assert_eq!(first.last().map(String::as_str), Some("UI_TC_02"));
    Ok(())
}

#[test]
fn groups_are_contiguous_and_sequential() -> anyhow::Result<()> {
    let catalogue = build_catalogue()?;
    let mut offset = 0;
    for group in TestGroup::ALL {
        for n in 1..=group.expected_count() {
            let expected_id = format!("{}_{n:02}", group.prefix());
            assert_eq!(catalogue.cases()[offset].id, expected_id);
            offset += 1;
        }
    }
    Ok(())
}

#[test]
fn first_positive_case_matches_reference_data() -> anyhow::Result<()> {
    let catalogue = build_catalogue()?;
    let case = catalogue.get("P_TC_01").expect("P_TC_01 present");

    assert_eq!(case.name, "Simple sentence test");
    assert_eq!(case.length, LengthClass::Short);
    assert_eq!(case.input, "mama gedhara yanavaa.");
    assert_eq!(case.expected, "මම ගෙදර යනවා.");
    assert_eq!(
        case.category,
        "Daily language usage\nSimple sentence\nS\nAccuracy validation"
    );
    Ok(())
}

#[test]
fn category_length_facet_agrees_with_length_class() -> anyhow::Result<()> {
    for case in &build_catalogue()? {
        assert_eq!(case.facets().length, case.length.code(), "{}", case.id);
    }
    Ok(())
}

#[test]
fn duplicate_ids_are_rejected() {
    let case = TestCase::new("N_TC_01", "dup", LengthClass::Short, "a", "b");
    let err = Catalogue::new(vec![case.clone(), case]).unwrap_err();
    assert!(matches!(err, CatalogueError::InvalidCatalogue(_)));
}
