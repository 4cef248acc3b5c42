//! Path resolution for config and store files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, DaylogConfig};

/// Resolve the config file path, checking DAYLOG_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("DAYLOG_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store path: `--store` / `DAYLOG_PATH` first, then config.
pub fn resolve_store_path(cli: &Cli, config: &DaylogConfig) -> PathBuf {
    match cli.store.as_deref() {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(&config.store.path),
    }
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!(
        "No day log found at {}\n\nRun:\n  daylog init --user <name>\n\nOr point at a config file:\n  DAYLOG_CONFIG=/path/to/config.toml daylog list",
        config_path.display()
    )
}

/// Error message when the store file is missing.
pub fn missing_store_message(path: &Path) -> String {
    format!(
        "No day log found at {}\n\nRun:\n  daylog init {}",
        path.display(),
        path.display()
    )
}
