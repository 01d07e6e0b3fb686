//! Command-line interface for the catalogue exporter.

mod app;
mod types;

pub use app::CatalogueApp;
pub use types::{CatalogueCli, CatalogueCommand};

/// Main entry point for the CLI
///
/// # Errors
/// Returns error if the selected command fails.
pub fn run() -> catalogue_core::Result<()> {
    CatalogueApp::from_args().run()
}
