//! Compact-layout projection: a flat list of accordion rows.
//!
//! Each node renders its own row, then, when it is expanded and has children,
//! the rows of its children one level deeper.

use crate::core::catalog::CatalogTree;
use crate::core::expansion::ExpansionSet;
use crate::core::navigation::NavigationPath;
use crate::core::node::ProductNode;
use crate::core::search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionRow<'a> {
    pub node: &'a ProductNode,
    /// Nodes above this row, top-level first
    pub ancestors: Vec<&'a ProductNode>,
    pub expanded: bool,
}

impl<'a> AccordionRow<'a> {
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    pub fn parent(&self) -> Option<&'a ProductNode> {
        self.ancestors.last().copied()
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Path that opens this row's product on the detail view
    pub fn selection_path(&self) -> NavigationPath<'a> {
        NavigationPath::from_nodes(self.ancestors.clone()).select(self.node, self.depth())
    }
}

pub struct AccordionProjector<'p, 'a> {
    tree: &'a CatalogTree,
    expansion: &'p ExpansionSet,
}

impl<'p, 'a> AccordionProjector<'p, 'a> {
    pub fn new(tree: &'a CatalogTree, expansion: &'p ExpansionSet) -> Self {
        Self { tree, expansion }
    }

    /// Rows in display order. `query` narrows the top-level list only.
    pub fn rows(&self, query: &str) -> Vec<AccordionRow<'a>> {
        let mut rows = Vec::new();
        let mut ancestors = Vec::new();
        for node in search::filter(self.tree.products(), query) {
            self.push_rows(node, &mut ancestors, &mut rows);
        }
        rows
    }

    fn push_rows(
        &self,
        node: &'a ProductNode,
        ancestors: &mut Vec<&'a ProductNode>,
        rows: &mut Vec<AccordionRow<'a>>,
    ) {
        // Leaves never expand, whatever the set says
        let expanded = !node.is_leaf() && self.expansion.is_expanded(&node.id);
        rows.push(AccordionRow {
            node,
            ancestors: ancestors.clone(),
            expanded,
        });

        if expanded && node.has_children() {
            ancestors.push(node);
            for child in &node.children {
                self.push_rows(child, ancestors, rows);
            }
            ancestors.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::fixtures::sample_tree;

    fn expand(tree: &CatalogTree, ids: &[&str]) -> ExpansionSet {
        let mut set = ExpansionSet::new();
        for id in ids {
            let chain = tree.ancestry(id).expect("fixture node");
            let parent = chain.len().checked_sub(2).map(|i| chain[i]);
            set = set.toggle(tree, chain[chain.len() - 1], parent);
        }
        set
    }

    fn summary(rows: &[AccordionRow<'_>]) -> Vec<(String, usize)> {
        rows.iter()
            .map(|row| (row.node.id.clone(), row.depth()))
            .collect()
    }

    #[test]
    fn test_collapsed_tree_shows_top_level() {
        let tree = sample_tree();
        let set = ExpansionSet::new();
        let rows = AccordionProjector::new(&tree, &set).rows("");
        assert_eq!(
            summary(&rows),
            vec![("automation".to_string(), 0), ("drives".to_string(), 0)]
        );
    }

    #[test]
    fn test_expanded_rows_are_indented_under_parent() {
        let tree = sample_tree();
        let set = expand(&tree, &["automation", "plc"]);
        let rows = AccordionProjector::new(&tree, &set).rows("");
        assert_eq!(
            summary(&rows),
            vec![
                ("automation".to_string(), 0),
                ("plc".to_string(), 1),
                ("s7-1200".to_string(), 2),
                ("s7-1500".to_string(), 2),
                ("hmi".to_string(), 1),
                ("drives".to_string(), 0),
            ]
        );
        assert!(rows[0].expanded);
        assert_eq!(rows[2].parent().map(|n| n.id.as_str()), Some("plc"));
    }

    #[test]
    fn test_query_filters_top_level_only() {
        let tree = sample_tree();
        let set = expand(&tree, &["automation"]);
        let rows = AccordionProjector::new(&tree, &set).rows("auto");
        assert_eq!(
            summary(&rows),
            vec![
                ("automation".to_string(), 0),
                ("plc".to_string(), 1),
                ("hmi".to_string(), 1),
            ]
        );
        assert!(AccordionProjector::new(&tree, &set).rows("plc").is_empty());
    }

    #[test]
    fn test_leaf_row_selection_path() {
        let tree = sample_tree();
        let set = expand(&tree, &["automation", "plc"]);
        let rows = AccordionProjector::new(&tree, &set).rows("");
        let leaf = &rows[3];
        assert!(leaf.is_leaf());
        let path = leaf.selection_path();
        assert_eq!(path.ids(), vec!["automation", "plc", "s7-1500"]);
        assert!(path.current_product().is_some());
        assert!(path.is_consistent());
    }
}
