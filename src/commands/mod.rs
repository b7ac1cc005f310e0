//! User-facing operations
//!
//! - `compare`: the full read → align → render → write pipeline
//! - `prompt`: interactive collection of the paths a comparison needs

pub mod compare;
pub mod prompt;
