//! Platform configuration directory lookup.

use crate::core::error::{CatalogNavigatorError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "catalog-navigator";

/// Directory holding `config.json`. Honors `XDG_CONFIG_HOME` on unix-likes.
pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|base| base.join(APP_DIR))
        .ok_or(CatalogNavigatorError::ConfigDirectoryNotFound)
}
