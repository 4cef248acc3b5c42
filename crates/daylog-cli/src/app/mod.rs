//! Application-level utilities for the Daylog CLI.
//!
//! This module provides:
//! - Path resolution for config and store files
//! - A per-invocation context with lazily loaded config

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::resolve_config_path;
