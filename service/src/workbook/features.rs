use bitflags::bitflags;

bitflags! {
    /// Presentation features of the exported workbook.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ExportFeatures: u8 {
        /// Bold, shaded header row.
        const BOLD_HEADERS = 0b0001;
        /// Freeze the header row of the "Test cases" sheet.
        const FREEZE_HEADERS = 0b0010;
        /// Autofilter over the "Test cases" table.
        const ADD_FILTERS = 0b0100;
        /// Wrap text in body cells (categories span several lines).
        const WRAP_TEXT = 0b1000;

        /// All features enabled (default).
        const ALL = Self::BOLD_HEADERS.bits()
                  | Self::FREEZE_HEADERS.bits()
                  | Self::ADD_FILTERS.bits()
                  | Self::WRAP_TEXT.bits();

        /// Plain cells only.
        const NONE = 0b0000;
    }
}
