//! Application context for the Daylog CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config so handlers don't
//! re-read it or thread multiple parameters around.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use daylog_core::storage::{DayStore, SqliteDayStore, UserIdentity};

use crate::cli::{Cli, Format};
use crate::config::{read_config, DaylogConfig};
use crate::errors::CliError;
use crate::ui::{Terminal, UiContext};

use super::resolver::{
    missing_config_message, missing_store_message, resolve_config_path, resolve_store_path,
};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<DaylogConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&DaylogConfig> {
        self.config.get_or_try_init(|| {
            let config_path = resolve_config_path()?;
            if !config_path.exists() {
                return Err(CliError::not_found(
                    missing_config_message(&config_path),
                    "Hint: `daylog init` writes the config and creates the store.",
                )
                .into());
            }
            read_config(&config_path)
        })
    }

    /// The configured user days are logged for.
    pub fn user(&self) -> anyhow::Result<UserIdentity> {
        Ok(self.config()?.user_identity())
    }

    /// Page size from the flag, else config.
    pub fn page_size(&self, flag: Option<usize>) -> anyhow::Result<usize> {
        match flag {
            Some(size) => Ok(size),
            None => Ok(self.config()?.view.page_size),
        }
    }

    /// Resolved store path.
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_store_path(self.cli, self.config()?))
    }

    /// Open the store and make sure the configured user is registered in it.
    pub fn open_store(&self) -> anyhow::Result<SqliteDayStore> {
        let path = self.store_path()?;
        if !path.exists() {
            return Err(CliError::not_found(
                missing_store_message(&path),
                "Hint: Check --store / DAYLOG_PATH or the [store] path in your config.",
            )
            .into());
        }
        let mut store = SqliteDayStore::open(&path)?;
        store.upsert_owner(&self.user()?)?;
        Ok(store)
    }

    /// Build a UI context honoring the global color/ascii flags.
    pub fn ui_context(&self, json: bool, format: Option<Format>) -> UiContext {
        UiContext::new(&Terminal::stdout(), self.cli, json, format)
    }
}
