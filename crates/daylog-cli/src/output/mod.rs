//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying days
//! and pages in JSON, table, and plain text.

mod json;
mod text;

// Re-export public API
pub use json::{day_json, page_json, stats_json};
pub use text::{print_day, render_page};
