use catalogue_core::config::{ColumnWidths, ExporterConfig};

use super::features::ExportFeatures;

/// Workbook exporter entry point.
#[derive(Debug, Clone)]
pub struct WorkbookExporter {
    /// Enabled presentation features.
    features: ExportFeatures,
    /// Column widths of the "Test cases" sheet.
    pub(super) column_widths: ColumnWidths,
}

impl WorkbookExporter {
    /// Create an exporter with all features enabled and the default widths.
    #[must_use]
    pub fn new() -> Self {
        Self {
            features: ExportFeatures::ALL,
            column_widths: ColumnWidths::default(),
        }
    }

    /// Create an exporter from configuration.
    #[must_use]
    pub fn from_config(config: &ExporterConfig) -> Self {
        Self::new()
            .with_column_widths(config.column_widths.clone())
            .with_frozen_headers(config.freeze_headers)
            .with_filters(config.add_filters)
            .with_text_wrap(config.wrap_text)
    }

    /// Replace the enabled features.
    #[must_use]
    pub fn with_features(mut self, features: ExportFeatures) -> Self {
        self.features = features;
        self
    }

    /// Set the "Test cases" column widths.
    #[must_use]
    pub fn with_column_widths(mut self, widths: ColumnWidths) -> Self {
        self.column_widths = widths;
        self
    }

    /// Configure header styling.
    #[must_use]
    pub fn with_bold_headers(mut self, enabled: bool) -> Self {
        self.features.set(ExportFeatures::BOLD_HEADERS, enabled);
        self
    }

    /// Configure header freezing.
    #[must_use]
    pub fn with_frozen_headers(mut self, enabled: bool) -> Self {
        self.features.set(ExportFeatures::FREEZE_HEADERS, enabled);
        self
    }

    /// Configure filter addition.
    #[must_use]
    pub fn with_filters(mut self, enabled: bool) -> Self {
        self.features.set(ExportFeatures::ADD_FILTERS, enabled);
        self
    }

    /// Configure text wrapping in body cells.
    #[must_use]
    pub fn with_text_wrap(mut self, enabled: bool) -> Self {
        self.features.set(ExportFeatures::WRAP_TEXT, enabled);
        self
    }

    /// Enabled features.
    #[must_use]
    pub fn features(&self) -> ExportFeatures {
        self.features
    }

    /// Check if header styling is enabled.
    #[must_use]
    pub fn bold_headers(&self) -> bool {
        self.features.contains(ExportFeatures::BOLD_HEADERS)
    }

    /// Check if header freezing is enabled.
    #[must_use]
    pub fn freeze_headers(&self) -> bool {
        self.features.contains(ExportFeatures::FREEZE_HEADERS)
    }

    /// Check if filters are enabled.
    #[must_use]
    pub fn add_filters(&self) -> bool {
        self.features.contains(ExportFeatures::ADD_FILTERS)
    }

    /// Check if body text wrapping is enabled.
    #[must_use]
    pub fn wrap_text(&self) -> bool {
        self.features.contains(ExportFeatures::WRAP_TEXT)
    }
}

impl Default for WorkbookExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_features() {
        let exporter = WorkbookExporter::new()
            .with_filters(false)
            .with_text_wrap(false);
        assert!(exporter.freeze_headers());
        assert!(exporter.bold_headers());
        assert!(!exporter.add_filters());
        assert!(!exporter.wrap_text());

        let plain = WorkbookExporter::new().with_features(ExportFeatures::NONE);
        assert!(!plain.freeze_headers());
    }

    #[test]
    fn follows_configuration() {
        let config = ExporterConfig {
            freeze_headers: false,
            ..ExporterConfig::default()
        };
        let exporter = WorkbookExporter::from_config(&config);
        assert!(!exporter.freeze_headers());
        assert!(exporter.add_filters());
        assert_eq!(exporter.column_widths, ColumnWidths::default());
    }
}
