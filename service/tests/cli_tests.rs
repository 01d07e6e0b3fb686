//! End-to-end tests of the `singlish-catalogue` binary.

use catalogue_service::workbook::layout::SHEET_ORDER;
use catalogue_service::workbook::reader::{read_coverage, sheet_names};
use pretty_assertions::assert_eq;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn catalogue_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_singlish-catalogue"))
}

#[test]
fn default_run_exports_the_canonical_workbook() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let output = catalogue_binary().current_dir(temp_dir.path()).output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let path = temp_dir.path().join("test-data").join("test-cases.xlsx");
    assert!(path.is_file());
    assert_eq!(sheet_names(&path)?, SHEET_ORDER.map(String::from).to_vec());
    assert!(read_coverage(&path)?.is_complete());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DATA SETUP COMPLETE:"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn failed_export_exits_non_zero_with_message() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("blk");
    fs::write(&blocker, b"not a directory")?;
    let target = blocker.join("a.xlsx");

    let output = catalogue_binary()
        .current_dir(temp_dir.path())
        .arg("export")
        .arg("-o")
        .arg(&target)
        .output()?;

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(!target.exists());
    assert!(!temp_dir.path().join("test-data").exists());
    Ok(())
}

#[test]
fn dump_fixture_then_export_from_it() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let fixture = temp_dir.path().join("cases.yaml");
    let workbook = temp_dir.path().join("from-fixture.xlsx");

    let dumped = catalogue_binary()
        .args(["-q", "dump-fixture"])
        .arg(&fixture)
        .output()?;
    assert!(dumped.status.success());
    assert!(fixture.is_file());

    let exported = catalogue_binary()
        .args(["-q", "export", "--fixture"])
        .arg(&fixture)
        .arg("--output")
        .arg(&workbook)
        .output()?;
    assert!(exported.status.success());
    assert_eq!(read_coverage(&workbook)?.total, 36);

    let inspected = catalogue_binary().arg("inspect").arg(&workbook).output()?;
    assert!(inspected.status.success());
    assert!(String::from_utf8_lossy(&inspected.stdout).contains("Test case rows: 36"));
    Ok(())
}
