use derive_new::new;

pub const DEFAULT_SHEET_NAME: &str = "File Comparison";
pub const ADDED_FILL: u32 = 0x00FF00;
pub const REMOVED_FILL: u32 = 0xFF0000;
pub const WIDTH_PADDING: f64 = 1.2;

/// Presentation settings for a report; fills are `0xRRGGBB`.
#[derive(Debug, Clone, PartialEq, new)]
pub struct ReportStyle {
    pub sheet_name: String,
    pub added_fill: u32,
    pub removed_fill: u32,
    pub width_padding: f64,
}

impl Default for ReportStyle {
    fn default() -> Self {
        ReportStyle::new(
            DEFAULT_SHEET_NAME.to_string(),
            ADDED_FILL,
            REMOVED_FILL,
            WIDTH_PADDING,
        )
    }
}
