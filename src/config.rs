use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::api::{DEFAULT_PAGE_SIZE, DEFAULT_SYNC_NODE};
use crate::wallets::WalletSet;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Krist node to query
    #[serde(default = "default_sync_node")]
    pub sync_node: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub recent_searches: Vec<String>,
    #[serde(default)]
    pub wallets: WalletSet,
    /// Where this config was loaded from; not persisted
    #[serde(skip)]
    path: Option<PathBuf>,
}

fn default_sync_node() -> String {
    DEFAULT_SYNC_NODE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sync_node: default_sync_node(),
            page_size: default_page_size(),
            recent_searches: Vec::new(),
            wallets: WalletSet::default(),
            path: None,
        }
    }
}

impl Config {
    /// Returns the config directory path (~/.config/kex on Linux)
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("kex"))
            .context("Could not determine config directory")
    }

    /// Returns the default config file path
    fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load config from disk, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {path:?}"))?;
            Self::from_toml(&contents)?
        } else {
            Self::default()
        };

        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config file")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Save config to the file it was loaded from. In-memory configs are not
    /// written anywhere.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {dir:?}"))?;
        }

        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config to {path:?}"))?;

        info!(?path, "saved config");
        Ok(())
    }

    /// Add a search to recent history (keeps last 10)
    pub fn add_recent_search(&mut self, query: String) -> Result<()> {
        // Remove if already exists to avoid duplicates
        self.recent_searches.retain(|s| s != &query);
        self.recent_searches.insert(0, query);
        self.recent_searches.truncate(10);
        self.save()
    }

    /// Rename one of the user's wallets and persist. Empty labels clear it.
    pub fn set_wallet_label(&mut self, wallet_id: &str, label: &str) -> Result<()> {
        let wallet = self
            .wallets
            .get_mut(wallet_id)
            .with_context(|| format!("No wallet with id {wallet_id}"))?;

        let label = label.trim();
        wallet.label = (!label.is_empty()).then(|| label.to_string());
        self.save()
    }
}
