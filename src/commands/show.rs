use crate::core::{
    config::NavigatorConfig,
    error::{CatalogNavigatorError, Result},
    navigation::NavigationPath,
    print_lines,
    related::related_products,
    render::{render_breadcrumb, render_children, render_detail},
    session::DetailView,
};
use crate::commands::tree::load_catalog;
use std::path::PathBuf;

/// Print one catalog entry by id: the detail page for a product, otherwise
/// its direct children.
pub fn execute_show(catalog: Option<PathBuf>, id: String) -> Result<()> {
    let config = NavigatorConfig::load_or_default()?;
    let catalog_path = config.resolve_catalog(catalog)?;
    let state = load_catalog(&catalog_path);
    let tree = state.tree()?;

    let ancestry = tree
        .ancestry(&id)
        .ok_or_else(|| CatalogNavigatorError::node_not_found(&id))?;
    let path = NavigationPath::from_nodes(ancestry);
    let Some(node) = path.last() else {
        return Err(CatalogNavigatorError::node_not_found(&id));
    };

    println!();
    println!("{}", render_breadcrumb(&path));
    println!();

    if node.is_leaf() {
        let detail = DetailView {
            product: node,
            related: related_products(&path),
        };
        log::debug!("Showing product '{}' with {} related", node.id, detail.related.len());
        print_lines(&render_detail(&detail, &config.quote_link));
    } else {
        log::debug!("Showing {} children of '{}'", node.children.len(), node.id);
        print_lines(&render_children(node));
    }
    Ok(())
}
