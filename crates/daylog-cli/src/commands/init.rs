use std::path::PathBuf;

use uuid::Uuid;

use daylog_core::storage::{DayStore, SqliteDayStore, UserIdentity};
use daylog_core::view::DEFAULT_PAGE_SIZE;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_store_path, write_config, DaylogConfig};
use crate::errors::CliError;
use crate::ui::{badge, hint, kv, print, Badge};

fn default_user_name() -> String {
    std::env::var("USER")
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "me".to_string())
}

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let page_size = args.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    if page_size == 0 {
        return Err(CliError::invalid_input("page size must be at least 1").into());
    }

    let config_path = resolve_config_path()?;
    if config_path.exists() {
        return Err(anyhow::anyhow!(
            "Config already exists at {}",
            config_path.display()
        ));
    }

    let store_path = match args.path.as_deref().or(ctx.cli().store.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_store_path()?,
    };
    if let Some(parent) = store_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
            })?;
        }
    }

    let name = args.user.clone().unwrap_or_else(default_user_name);
    if name.trim().is_empty() {
        return Err(CliError::invalid_input("User name must not be empty").into());
    }
    let user = UserIdentity::new(Uuid::new_v4(), name.trim());

    let mut store = SqliteDayStore::create(&store_path)?;
    store.upsert_owner(&user)?;
    write_config(
        &config_path,
        &DaylogConfig::new(store_path.clone(), &user, page_size),
    )?;
    tracing::info!(store = %store_path.display(), config = %config_path.display(), "initialized");

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui_context(false, None);
    print(
        &ui,
        &badge(
            &ui,
            Badge::Ok,
            &format!("Initialized day log at {}", store_path.display()),
        ),
    );
    print(&ui, &kv(&ui, "Config", &config_path.display().to_string()));
    print(&ui, &kv(&ui, "User", &user.name));
    print(&ui, &hint(&ui, "daylog add --rating 4"));
    Ok(())
}
