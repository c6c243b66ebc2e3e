//! Isolated workspace for running the binary
//!
//! Each workspace owns a temp directory with the catalog file and a private
//! config home, so tests never read or write the user's real config.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub catalog: PathBuf,
    pub config_home: PathBuf,
}

impl TestWorkspace {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Binary invocation with colors off and the config home redirected
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("catalog-navigator")?;
        cmd.arg("--no-color")
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env_remove("RUST_LOG")
            .current_dir(self.path());
        Ok(cmd)
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_home
            .join("catalog-navigator")
            .join("config.json")
    }
}

/// Workspace with `catalog.json` holding `content`
pub fn setup_workspace_with_catalog(content: &str) -> anyhow::Result<TestWorkspace> {
    let temp_dir = TempDir::new()?;
    let catalog = temp_dir.path().join("catalog.json");
    fs::write(&catalog, content)?;
    let config_home = temp_dir.path().join("config");
    fs::create_dir_all(&config_home)?;

    Ok(TestWorkspace {
        temp_dir,
        catalog,
        config_home,
    })
}
