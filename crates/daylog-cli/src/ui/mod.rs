//! UI primitives for the Daylog CLI.
//!
//! This module provides:
//! - **Context**: Terminal detection and output mode (json, plain, pretty)
//! - **Theme**: Badge tokens and styles
//! - **Render**: Tables, headers, hints, errors
//! - **Format**: Small string helpers (ids, timestamps, ratings)
//!
//! # Usage
//!
//! ```ignore
//! let ui = ctx.ui_context(args.json, args.format);
//!
//! if ui.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ui, "list", Some("page 1 of 2")));
//! println!("{}", simple_table(&ui, &columns, &rows));
//! ```

mod context;
pub mod format;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::{OutputMode, Terminal, UiContext};
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{
    badge, blank_line, header, hint, kv, notice, print, print_error, simple_table, Column,
};
