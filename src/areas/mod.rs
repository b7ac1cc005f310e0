//! Session state
//!
//! - `review`: the comparison session, owning the workspace, output writer and report style
//! - `workspace`: path resolution and reading of the compared files

pub mod review;
pub(crate) mod workspace;
