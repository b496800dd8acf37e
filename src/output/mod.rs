//! Output formatting for benchmark reports.
//!
//! This module provides formatters for displaying a [`RunReport`] in
//! different formats:
//! - Terminal: human-readable output with colors
//! - JSON: machine-readable serialization
//!
//! [`RunReport`]: crate::RunReport

pub mod json;
pub mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_report, format_suggestion};
