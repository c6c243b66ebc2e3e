//! Wide-layout projection: one column per depth of the breadcrumb path.
//!
//! Column `0` always lists the top-level categories. Column `i > 0` lists the
//! children of `path[i - 1]`. Only the first [`MAX_VISIBLE_COLUMNS`] columns are
//! ever laid out, however deep the path grows, and a column other than the
//! first with nothing in it is left out entirely.

use crate::core::catalog::CatalogTree;
use crate::core::navigation::NavigationPath;
use crate::core::node::ProductNode;
use crate::core::search;

/// Title of the first column and of the root breadcrumb
pub const ROOT_LABEL: &str = "Products";

/// Horizon of simultaneously rendered columns
pub const MAX_VISIBLE_COLUMNS: usize = 4;

/// One rendered column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    pub index: usize,
    pub title: &'a str,
    pub items: Vec<&'a ProductNode>,
    pub selected_id: Option<&'a str>,
}

impl Column<'_> {
    pub fn is_selected(&self, node: &ProductNode) -> bool {
        self.selected_id == Some(node.id.as_str())
    }
}

pub struct ColumnProjector<'p, 'a> {
    tree: &'a CatalogTree,
    path: &'p NavigationPath<'a>,
}

impl<'p, 'a> ColumnProjector<'p, 'a> {
    pub fn new(tree: &'a CatalogTree, path: &'p NavigationPath<'a>) -> Self {
        Self { tree, path }
    }

    pub fn children(&self, index: usize) -> &'a [ProductNode] {
        if index == 0 {
            return self.tree.products();
        }
        match self.path.get(index - 1) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    pub fn title(&self, index: usize) -> &'a str {
        if index == 0 {
            return ROOT_LABEL;
        }
        self.path
            .get(index - 1)
            .map(|node| node.name.as_str())
            .unwrap_or("")
    }

    pub fn is_selected(&self, node: &ProductNode, index: usize) -> bool {
        self.path
            .get(index)
            .is_some_and(|selected| selected.id == node.id)
    }

    pub fn visible_column_count(&self) -> usize {
        (self.path.len() + 1).min(MAX_VISIBLE_COLUMNS)
    }

    /// Indices of the columns that actually render
    pub fn rendered_indices(&self) -> Vec<usize> {
        (0..self.visible_column_count())
            .filter(|&index| index == 0 || !self.children(index).is_empty())
            .collect()
    }

    /// Index of the rightmost rendered column
    pub fn active_index(&self) -> usize {
        self.rendered_indices().last().copied().unwrap_or(0)
    }

    /// Build the rendered columns, narrowing the active column by `query`
    pub fn columns(&self, query: &str) -> Vec<Column<'a>> {
        let active = self.active_index();
        self.rendered_indices()
            .into_iter()
            .map(|index| {
                let children = self.children(index);
                let items = if index == active {
                    search::filter(children, query)
                } else {
                    children.iter().collect()
                };
                Column {
                    index,
                    title: self.title(index),
                    items,
                    selected_id: self.path.get(index).map(|node| node.id.as_str()),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::fixtures::{deep_tree, sample_tree};

    fn path_to<'a>(tree: &'a CatalogTree, id: &str) -> NavigationPath<'a> {
        NavigationPath::from_nodes(tree.ancestry(id).expect("fixture node"))
    }

    #[test]
    fn test_root_view_has_single_column() {
        let tree = sample_tree();
        let path = NavigationPath::new();
        let projector = ColumnProjector::new(&tree, &path);
        let columns = projector.columns("");
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].title, ROOT_LABEL);
        assert_eq!(columns[0].items.len(), 2);
        assert_eq!(projector.active_index(), 0);
    }

    #[test]
    fn test_children_and_titles() {
        let tree = sample_tree();
        let path = path_to(&tree, "plc");
        let projector = ColumnProjector::new(&tree, &path);
        assert_eq!(projector.children(1).len(), 2);
        assert_eq!(projector.title(1), "Automation");
        assert_eq!(projector.title(2), "PLC Systems");
        assert_eq!(projector.title(3), "");
        assert!(projector.children(3).is_empty());
    }

    #[test]
    fn test_selection_flags() {
        let tree = sample_tree();
        let path = path_to(&tree, "plc");
        let projector = ColumnProjector::new(&tree, &path);
        let automation = &tree.products()[0];
        let drives = &tree.products()[1];
        assert!(projector.is_selected(automation, 0));
        assert!(!projector.is_selected(drives, 0));
        assert!(!projector.is_selected(automation, 2));

        let columns = projector.columns("");
        assert!(columns[1].is_selected(&automation.children[0]));
    }

    #[test]
    fn test_visible_column_count_is_capped() {
        let tree = deep_tree(8);
        let mut path = NavigationPath::new();
        let mut level = tree.products();
        for column in 0..8 {
            let projector = ColumnProjector::new(&tree, &path);
            assert_eq!(
                projector.visible_column_count(),
                (path.len() + 1).min(MAX_VISIBLE_COLUMNS)
            );
            assert!(projector.columns("").len() <= MAX_VISIBLE_COLUMNS);
            path = path.select(&level[0], column);
            level = &level[0].children;
        }
        assert_eq!(path.len(), 8);
        assert_eq!(ColumnProjector::new(&tree, &path).visible_column_count(), 4);
    }

    #[test]
    fn test_empty_column_is_suppressed() {
        let tree = sample_tree();
        let path = path_to(&tree, "s7-1200");
        let projector = ColumnProjector::new(&tree, &path);
        assert_eq!(projector.visible_column_count(), 4);
        assert_eq!(projector.rendered_indices(), vec![0, 1, 2]);
        assert_eq!(projector.active_index(), 2);
    }

    #[test]
    fn test_search_narrows_only_active_column() {
        let tree = sample_tree();
        let path = path_to(&tree, "plc");
        let projector = ColumnProjector::new(&tree, &path);
        let columns = projector.columns("1500");
        assert_eq!(columns[0].items.len(), 2);
        assert_eq!(columns[1].items.len(), 2);
        assert_eq!(columns[2].items.len(), 1);
        assert_eq!(columns[2].items[0].id, "s7-1500");
    }
}
