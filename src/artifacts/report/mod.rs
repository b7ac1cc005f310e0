//! Spreadsheet report
//!
//! - `cell`: cell values, highlights and the four fixed report columns
//! - `report_style`: sheet name, fill colors and column padding
//! - `report_document`: row construction, column sizing and the xlsx output

pub mod cell;
pub mod report_document;
pub mod report_style;
