//! Catalogue CLI application.

use super::types::{CatalogueCli, CatalogueCommand};
use crate::builder::build_catalogue;
use crate::fixture_file::{dump_catalogue, load_catalogue};
use crate::workbook::{ExportReport, WorkbookExporter, reader};
use catalogue_core::prelude::*;
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Main catalogue CLI application
pub struct CatalogueApp {
    cli: CatalogueCli,
}

impl CatalogueApp {
    /// Create the application from process arguments
    #[must_use]
    pub fn from_args() -> Self {
        Self::new(CatalogueCli::parse())
    }

    /// Create the application from an already parsed command line
    #[must_use]
    pub fn new(cli: CatalogueCli) -> Self {
        Self { cli }
    }

    /// Run the selected command, `export` when none was given.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the command; it is also printed to stderr.
    pub fn run(self) -> Result<()> {
        self.init_logging();

        match self.execute_command() {
            Ok(()) => Ok(()),
            Err(err) => {
                error!("Command failed: {}", err);
                eprintln!("{} {err}", "Error:".red().bold());
                Err(err)
            }
        }
    }

    /// Configure tracing subscriber based on CLI flags
    fn init_logging(&self) {
        let level = if self.cli.quiet {
            tracing::Level::ERROR
        } else if self.cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        // A subscriber may already be installed when embedded in another binary.
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init();
    }

    fn execute_command(&self) -> Result<()> {
        match self.cli.command.clone().unwrap_or_default() {
            CatalogueCommand::Export {
                output,
                fixture,
                no_freeze,
                no_filters,
            } => self.export_command(output, fixture.as_deref(), no_freeze, no_filters),
            CatalogueCommand::Inspect { path } => self.inspect_command(&path),
            CatalogueCommand::DumpFixture { path } => self.dump_fixture_command(&path),
        }
    }

    fn load_config(&self) -> Result<ExporterConfig> {
        match &self.cli.config {
            Some(path) => ExporterConfig::from_yaml_file(path),
            None => Ok(ExporterConfig::default()),
        }
    }

    fn export_command(
        &self,
        output: Option<PathBuf>,
        fixture: Option<&Path>,
        no_freeze: bool,
        no_filters: bool,
    ) -> Result<()> {
        let mut config = self.load_config()?;
        if let Some(output) = output {
            config.output_path = output;
        }
        if no_freeze {
            config.freeze_headers = false;
        }
        if no_filters {
            config.add_filters = false;
        }
        config.validate()?;
        debug!("Effective exporter configuration: {:?}", config);

        let catalogue = match fixture {
            Some(path) => load_catalogue(path)?,
            None => build_catalogue()?,
        };

        let report = WorkbookExporter::from_config(&config).export(&catalogue, &config.output_path)?;
        if !self.cli.quiet {
            print_export_summary(&report);
        }
        Ok(())
    }

    fn inspect_command(&self, path: &Path) -> Result<()> {
        info!("Inspecting {}", path.display());
        let sheets = reader::sheet_names(path)?;
        let rows = reader::read_test_cases(path)?;
        let coverage = reader::read_coverage(path)?;
        let unexecuted = rows.iter().filter(|row| row.is_unexecuted()).count();

        if self.cli.quiet {
            return Ok(());
        }
        println!("{}", path.display().to_string().bold());
        println!("  Sheets: {}", sheets.join(", "));
        println!("  Test case rows: {} ({unexecuted} not yet executed)", rows.len());
        print_coverage(&coverage);
        Ok(())
    }

    fn dump_fixture_command(&self, path: &Path) -> Result<()> {
        let catalogue = build_catalogue()?;
        dump_catalogue(&catalogue, path)?;
        if !self.cli.quiet {
            println!(
                "{} Wrote {} cases to {}",
                "✓".green(),
                catalogue.len(),
                path.display()
            );
        }
        Ok(())
    }
}

fn print_export_summary(report: &ExportReport) {
    println!(
        "{} Data saved to: {} ({} bytes)",
        "✓".green(),
        report.path.display(),
        report.bytes
    );
    println!("{}", "DATA SETUP COMPLETE:".bold());
    print_coverage(&report.coverage);
}

fn print_coverage(coverage: &CoverageSummary) {
    println!("  Total Cases: {}", coverage.total);
    for (group, count) in &coverage.groups {
        let expected = group.expected_count();
        let tally = format!("{count}/{expected}");
        let tally = if *count == expected {
            tally.green()
        } else {
            tally.yellow()
        };
        println!("  {}: {tally}", group.label());
    }
}
