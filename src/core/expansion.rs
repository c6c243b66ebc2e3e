//! Expansion state for the compact (accordion) layout.
//!
//! Like [`NavigationPath`](crate::core::navigation::NavigationPath), an
//! [`ExpansionSet`] is a value snapshot; [`ExpansionSet::toggle`] returns the
//! next set instead of editing in place.
//!
//! Invariants:
//! - at most one top-level node is expanded at a time
//! - collapsing a node also collapses every node below it

use crate::core::catalog::CatalogTree;
use crate::core::node::ProductNode;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    ids: BTreeSet<String>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Expand or collapse `node`. `parent` is `None` for top-level nodes.
    ///
    /// Expanding a top-level node first collapses whichever other top-level
    /// node was open, along with its whole subtree.
    pub fn toggle(
        &self,
        tree: &CatalogTree,
        node: &ProductNode,
        parent: Option<&ProductNode>,
    ) -> Self {
        let mut next = self.clone();

        if parent.is_none() {
            for other in tree.products() {
                if other.id != node.id && next.ids.contains(&other.id) {
                    log::debug!("Collapsing top-level '{}' before toggling '{}'", other.id, node.id);
                    next.collapse(other);
                }
            }
        }

        if next.ids.contains(&node.id) {
            next.collapse(node);
        } else {
            next.ids.insert(node.id.clone());
        }
        debug_assert!(next.expanded_top_level(tree) <= 1);
        next
    }

    fn collapse(&mut self, node: &ProductNode) {
        self.ids.remove(&node.id);
        for id in node.descendant_ids() {
            self.ids.remove(id);
        }
    }

    /// Number of expanded top-level nodes; never more than one
    pub fn expanded_top_level(&self, tree: &CatalogTree) -> usize {
        tree.products()
            .iter()
            .filter(|node| self.is_expanded(&node.id))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::fixtures::sample_tree;

    fn toggle_by_id(set: &ExpansionSet, tree: &CatalogTree, id: &str) -> ExpansionSet {
        let chain = tree.ancestry(id).expect("fixture node");
        let node = chain[chain.len() - 1];
        let parent = chain.len().checked_sub(2).map(|i| chain[i]);
        set.toggle(tree, node, parent)
    }

    #[test]
    fn test_toggle_expands_then_collapses() {
        let tree = sample_tree();
        let set = toggle_by_id(&ExpansionSet::new(), &tree, "automation");
        assert!(set.is_expanded("automation"));
        let set = toggle_by_id(&set, &tree, "automation");
        assert!(set.is_empty());
    }

    #[test]
    fn test_expanding_second_top_level_collapses_first_subtree() {
        let tree = sample_tree();
        let mut set = ExpansionSet::new();
        for id in ["automation", "plc"] {
            set = toggle_by_id(&set, &tree, id);
        }
        assert!(set.is_expanded("plc"));

        let set = toggle_by_id(&set, &tree, "drives");
        assert!(set.is_expanded("drives"));
        assert!(!set.is_expanded("automation"));
        assert!(!set.is_expanded("plc"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_collapse_cascades_to_descendants() {
        let tree = sample_tree();
        let mut set = ExpansionSet::new();
        for id in ["drives", "servo", "servo-kit"] {
            set = toggle_by_id(&set, &tree, id);
        }
        assert_eq!(set.len(), 3);

        let set = toggle_by_id(&set, &tree, "servo");
        assert_eq!(set.ids().collect::<Vec<_>>(), vec!["drives"]);
    }

    #[test]
    fn test_nested_toggle_keeps_siblings_under_same_top_level() {
        let tree = sample_tree();
        let mut set = ExpansionSet::new();
        for id in ["automation", "plc", "hmi"] {
            set = toggle_by_id(&set, &tree, id);
        }
        assert!(set.is_expanded("plc"));
        assert!(set.is_expanded("hmi"));
    }

    #[test]
    fn test_at_most_one_top_level_expanded() {
        let tree = sample_tree();
        let mut set = ExpansionSet::new();
        for id in ["automation", "drives", "automation", "drives", "servo"] {
            set = toggle_by_id(&set, &tree, id);
            assert!(set.expanded_top_level(&tree) <= 1);
        }
    }

    #[test]
    fn test_toggle_leaves_previous_snapshot_untouched() {
        let tree = sample_tree();
        let before = toggle_by_id(&ExpansionSet::new(), &tree, "automation");
        let _ = toggle_by_id(&before, &tree, "drives");
        assert!(before.is_expanded("automation"));
    }
}
