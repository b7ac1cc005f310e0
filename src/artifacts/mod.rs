//! Comparison data structures and algorithms
//!
//! - `diff`: Myers' line diff and its expansion into aligned rows
//! - `report`: the spreadsheet report built from aligned rows

pub mod diff;
pub mod report;
