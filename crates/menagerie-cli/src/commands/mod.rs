//! CLI command implementations.

pub mod census;
pub mod matrix;
pub mod run;
