//! Sibling lookup for the detail view.

use crate::core::navigation::NavigationPath;
use crate::core::node::ProductNode;

/// Siblings of the product at the end of `path`, in catalog order.
///
/// Empty when the path has no parent (top-level product) or the product is an
/// only child.
pub fn related_products<'a>(path: &NavigationPath<'a>) -> Vec<&'a ProductNode> {
    let (Some(current), Some(parent)) = (path.last(), path.parent()) else {
        return Vec::new();
    };
    parent
        .children
        .iter()
        .filter(|sibling| sibling.id != current.id)
        .collect()
}
