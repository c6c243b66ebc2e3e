//! Persisted user preferences.
//!
//! Stored as pretty JSON in `<config dir>/catalog-navigator/config.json`. Only
//! preferences live here; navigation state never outlives a session.

use crate::core::dirs::get_config_directory;
use crate::core::error::{CatalogNavigatorError, Result};
use crate::core::session::Layout;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default target of the "Request Quote" link-out
pub const DEFAULT_QUOTE_LINK: &str = "/contact";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NavigatorConfig {
    /// Catalog used when `--catalog` is not given
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub default_layout: Layout,
    #[serde(default = "default_quote_link")]
    pub quote_link: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

fn default_quote_link() -> String {
    DEFAULT_QUOTE_LINK.to_string()
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_layout: Layout::default(),
            quote_link: default_quote_link(),
            created: Utc::now(),
            updated: None,
        }
    }
}

impl NavigatorConfig {
    pub fn config_file() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE_NAME))
    }

    /// Load the user's config, or defaults when none has been saved yet
    pub fn load_or_default() -> Result<Self> {
        Self::load_from(&Self::config_file()?)
    }

    pub fn load_from(config_file: &Path) -> Result<Self> {
        if !config_file.exists() {
            log::debug!(
                "No config at {}, using defaults",
                config_file.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_file)
            .map_err(|e| CatalogNavigatorError::config_read_failed(config_file, e))?;
        serde_json::from_str(&content)
            .map_err(|e| CatalogNavigatorError::config_parse_failed(config_file, e))
    }

    pub fn save(&mut self) -> Result<PathBuf> {
        let config_file = Self::config_file()?;
        self.save_to(&config_file)?;
        Ok(config_file)
    }

    pub fn save_to(&mut self, config_file: &Path) -> Result<()> {
        if let Some(dir) = config_file.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| CatalogNavigatorError::config_write_failed(dir, e))?;
        }

        self.updated = Some(Utc::now());
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_file, content)
            .map_err(|e| CatalogNavigatorError::config_write_failed(config_file, e))?;

        log::debug!("Saved config to {}", config_file.display());
        Ok(())
    }

    /// Catalog to open: the explicit argument wins over the saved path
    pub fn resolve_catalog(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        explicit
            .or_else(|| self.catalog_path.clone())
            .ok_or(CatalogNavigatorError::NoCatalogProvided)
    }
}
