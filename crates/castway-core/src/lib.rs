//! castway-core — Pure types and naming conventions.
//!
//! No async runtime, no I/O, no platform dependencies.

pub mod script_files;
pub mod types;
