use predicates::prelude::*;
use std::fs;

mod common;
use common::fixtures::*;

#[cfg(test)]
mod config_command_tests {
    use super::*;

    #[test]
    fn test_config_show_defaults() -> anyhow::Result<()> {
        let workspace = create_sample_workspace()?;

        workspace
            .command()?
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration:"))
            .stdout(predicate::str::contains("(not set)"))
            .stdout(predicate::str::contains("wide"))
            .stdout(predicate::str::contains("/contact"))
            .stdout(predicate::str::contains("never"));

        Ok(())
    }

    #[test]
    fn test_config_set_layout_persists() -> anyhow::Result<()> {
        let workspace = create_sample_workspace()?;

        workspace
            .command()?
            .args(["config", "set-layout", "compact"])
            .assert()
            .success()
            .stdout(predicate::str::contains("✓ Saved"));

        let saved = fs::read_to_string(workspace.config_file())?;
        let json: serde_json::Value = serde_json::from_str(&saved)?;
        assert_eq!(json["default_layout"], "compact");
        assert!(json["updated"].is_string());

        Ok(())
    }

    #[test]
    fn test_configured_layout_is_browse_default() -> anyhow::Result<()> {
        let workspace = create_sample_workspace()?;

        workspace
            .command()?
            .args(["config", "set-layout", "compact"])
            .assert()
            .success();

        workspace
            .command()?
            .args(["browse", "--catalog"])
            .arg(&workspace.catalog)
            .write_stdin("toggle 1\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("- (category)    [1] Automation"));

        Ok(())
    }

    #[test]
    fn test_config_rejects_unknown_layout() -> anyhow::Result<()> {
        let workspace = create_sample_workspace()?;

        workspace
            .command()?
            .args(["config", "set-layout", "sideways"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("sideways"));

        assert!(!workspace.config_file().exists());
        Ok(())
    }

    #[test]
    fn test_config_corrupt_file_is_reported() -> anyhow::Result<()> {
        let workspace = create_sample_workspace()?;
        let file = workspace.config_file();
        fs::create_dir_all(file.parent().expect("config dir"))?;
        fs::write(&file, "{ broken")?;

        workspace
            .command()?
            .args(["config", "show"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("Failed to parse config file"));

        Ok(())
    }
}
