//! Export failures leave nothing behind.

use catalogue_core::prelude::*;
use catalogue_service::{WorkbookExporter, build_catalogue};
use std::fs;
use tempfile::TempDir;

#[test]
fn parent_that_is_a_file_is_an_export_failure() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("test-data");
    fs::write(&blocker, b"not a directory")?;
    let path = blocker.join("test-cases.xlsx");

    let err = WorkbookExporter::new()
        .export(&build_catalogue()?, &path)
        .unwrap_err();

    assert!(err.is_export_failure(), "unexpected error: {err}");
    assert!(matches!(err, CatalogueError::DirectoryCreation { .. }));
    assert!(!path.exists());
    assert_eq!(fs::read(&blocker)?, b"not a directory");
    Ok(())
}

#[test]
fn directory_at_target_path_is_left_untouched() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("test-cases.xlsx");
    fs::create_dir(&path)?;
    fs::write(path.join("keep.txt"), b"keep")?;

    let err = WorkbookExporter::new()
        .export(&build_catalogue()?, &path)
        .unwrap_err();

    assert!(err.is_export_failure(), "unexpected error: {err}");
    assert!(path.is_dir());
    assert_eq!(fs::read(path.join("keep.txt"))?, b"keep");
    let entries = fs::read_dir(temp_dir.path())?.count();
    assert_eq!(entries, 1, "temporary file left behind");
    Ok(())
}

#[test]
fn reading_a_non_workbook_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bogus.xlsx");
    fs::write(&path, b"plain text")?;

    let err = catalogue_service::workbook::reader::read_test_cases(&path).unwrap_err();
    assert!(matches!(err, CatalogueError::InvalidWorkbook(_)));
    assert!(!err.is_export_failure());
    Ok(())
}
