//! CLI type definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Singlish transliteration test catalogue
#[derive(Parser, Debug)]
#[command(
    name = "singlish-catalogue",
    version,
    about = "Export the Singlish to Sinhala transliteration test catalogue"
)]
pub struct CatalogueCli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - only errors are logged
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Exporter configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to execute; defaults to `export`
    #[command(subcommand)]
    pub command: Option<CatalogueCommand>,
}

/// Catalogue subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueCommand {
    /// Build the catalogue and write the workbook
    Export {
        /// Output workbook path
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Load cases from a YAML/JSON fixture instead of the built-in data
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Do not freeze the header row
        #[arg(long)]
        no_freeze: bool,
        /// Do not add autofilters to the header row
        #[arg(long)]
        no_filters: bool,
    },
    /// Read an exported workbook back and print its coverage
    Inspect {
        /// Workbook path
        path: PathBuf,
    },
    /// Write the built-in catalogue as a YAML or JSON fixture
    DumpFixture {
        /// Fixture path (.yaml, .yml or .json)
        path: PathBuf,
    },
}

impl Default for CatalogueCommand {
    fn default() -> Self {
        Self::Export {
            output: None,
            fixture: None,
            no_freeze: false,
            no_filters: false,
        }
    }
}
