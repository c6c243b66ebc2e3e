use crate::core::{
    catalog::{FileSource, ReaderSource},
    config::NavigatorConfig,
    error::Result,
    print_info, print_lines,
    render::render_tree,
    session::LoadState,
};
use std::io;
use std::path::{Path, PathBuf};

pub fn execute_tree(catalog: Option<PathBuf>) -> Result<()> {
    let config = NavigatorConfig::load_or_default()?;
    let catalog_path = config.resolve_catalog(catalog)?;
    let state = load_catalog(&catalog_path);
    let tree = state.tree()?;

    if tree.is_empty() {
        print_info("No products found.");
        return Ok(());
    }

    println!();
    print_lines(&render_tree(tree));
    println!();
    log::debug!("Listed {} catalog nodes", tree.node_count());
    Ok(())
}

/// Fetch the catalog at `path`, `-` meaning stdin. Failures settle on an empty
/// catalog and are only logged.
pub fn load_catalog(path: &Path) -> LoadState {
    if path == Path::new("-") {
        LoadState::fetch(ReaderSource::new("stdin", io::stdin().lock()))
    } else {
        LoadState::fetch(FileSource::new(path))
    }
}

