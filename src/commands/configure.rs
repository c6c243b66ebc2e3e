use crate::core::{
    config::NavigatorConfig,
    error::Result,
    print_section_header, print_success,
    session::Layout,
};
use colored::*;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    Show,
    SetCatalog { path: PathBuf },
    SetLayout { layout: Layout },
    SetQuoteLink { link: String },
}

pub fn execute_config(action: ConfigAction) -> Result<()> {
    let mut config = NavigatorConfig::load_or_default()?;

    match action {
        ConfigAction::Show => {
            show_config(&config)?;
            return Ok(());
        }
        ConfigAction::SetCatalog { path } => {
            if !path.exists() {
                log::warn!("Catalog file {} does not exist yet", path.display());
            }
            config.catalog_path = Some(path);
        }
        ConfigAction::SetLayout { layout } => config.default_layout = layout,
        ConfigAction::SetQuoteLink { link } => config.quote_link = link,
    }

    let file = config.save()?;
    print_success(&format!("Saved {}", file.display()));
    Ok(())
}

fn show_config(config: &NavigatorConfig) -> Result<()> {
    let file = NavigatorConfig::config_file()?;
    print_section_header("Configuration");

    let catalog = config
        .catalog_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string());
    let updated = config
        .updated
        .map(|time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    let rows = [
        ("file", file.display().to_string()),
        ("catalog", catalog),
        ("layout", config.default_layout.to_string()),
        ("quote link", config.quote_link.clone()),
        ("updated", updated),
    ];
    for (label, value) in rows {
        println!("   {:<12}{}", label.blue(), value.white());
    }
    println!();
    Ok(())
}
