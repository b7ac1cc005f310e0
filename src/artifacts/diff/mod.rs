//! Line diffing
//!
//! - `diff_algorithm`: Myers' diff producing an edit script of equal/delete/insert steps
//! - `alignment`: expansion of an edit script into two row-aligned, line-numbered sides
//!
//! Alignment is what the report is built from: every edit operation becomes
//! exactly one row, with a gap on the side that has no line for it.

pub mod alignment;
pub mod diff_algorithm;
