use std::path::{Path, PathBuf};

use daylog_core::storage::UserIdentity;
use daylog_core::view::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct DaylogConfig {
    pub store: StoreSection,
    pub user: UserSection,
    #[serde(default)]
    pub view: ViewSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserSection {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ViewSection {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ViewSection {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl DaylogConfig {
    pub fn new(store_path: PathBuf, user: &UserIdentity, page_size: usize) -> Self {
        Self {
            store: StoreSection {
                path: store_path.to_string_lossy().to_string(),
            },
            user: UserSection {
                id: user.id,
                name: user.name.clone(),
            },
            view: ViewSection { page_size },
        }
    }

    pub fn user_identity(&self) -> UserIdentity {
        UserIdentity::new(self.user.id, self.user.name.clone())
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("days.sqlite"))
}

pub fn read_config(path: &Path) -> anyhow::Result<DaylogConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &DaylogConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("daylog"));
        }
    }
    Ok(home_dir()?.join(".config").join("daylog"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("daylog"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("daylog"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
