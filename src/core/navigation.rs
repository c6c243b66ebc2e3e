//! Breadcrumb path and its transitions.
//!
//! [`NavigationPath`] is a value snapshot: every transition borrows the current
//! path and returns the next one, which the session swaps in wholesale. Nodes
//! are shared borrows into the frozen [`CatalogTree`], so the tree outlives
//! every path built over it.
//!
//! Invariant: for every `i > 0`, `path[i]` is one of `path[i - 1].children`.

use crate::core::catalog::CatalogTree;
use crate::core::node::ProductNode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationPath<'a> {
    nodes: Vec<&'a ProductNode>,
}

impl<'a> NavigationPath<'a> {
    /// Empty path (root view)
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Build a path from an existing root-to-node chain
    pub fn from_nodes(nodes: Vec<&'a ProductNode>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[&'a ProductNode] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&'a ProductNode> {
        self.nodes.get(index).copied()
    }

    pub fn last(&self) -> Option<&'a ProductNode> {
        self.nodes.last().copied()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.nodes.iter().map(|node| node.id.as_str()).collect()
    }

    /// Select `node` from the column at `column`.
    ///
    /// Column 0 always restarts the path at `node`. Any other column keeps the
    /// first `column` selections and drops everything to the right. A leaf is
    /// appended the same way and turns the path into a detail view.
    pub fn select(&self, node: &'a ProductNode, column: usize) -> Self {
        if !node.is_leaf() && column == 0 {
            return Self { nodes: vec![node] };
        }

        let keep = column.min(self.nodes.len());
        let mut nodes = Vec::with_capacity(keep + 1);
        nodes.extend_from_slice(&self.nodes[..keep]);
        nodes.push(node);
        Self { nodes }
    }

    /// Jump to a breadcrumb. `None` is the root crumb and clears the path;
    /// `Some(i)` keeps the first `i + 1` elements.
    pub fn navigate_breadcrumb(&self, index: Option<usize>) -> Self {
        match index {
            None => Self::new(),
            Some(i) => {
                let keep = (i + 1).min(self.nodes.len());
                let next = Self {
                    nodes: self.nodes[..keep].to_vec(),
                };
                debug_assert!(next.is_prefix_of(self));
                next
            }
        }
    }

    /// Drop the last element. No-op on an empty path.
    pub fn back(&self) -> Self {
        let keep = self.nodes.len().saturating_sub(1);
        Self {
            nodes: self.nodes[..keep].to_vec(),
        }
    }

    /// Swap the last element for a sibling, keeping the parent prefix
    pub fn select_related(&self, node: &'a ProductNode) -> Self {
        let mut next = self.back();
        next.nodes.push(node);
        next
    }

    /// The product shown on the detail view, if the path ends on a leaf
    pub fn current_product(&self) -> Option<&'a ProductNode> {
        self.last().filter(|node| node.is_leaf())
    }

    /// Parent of the last element
    pub fn parent(&self) -> Option<&'a ProductNode> {
        self.nodes.len().checked_sub(2).and_then(|i| self.get(i))
    }

    /// Children of the deepest selection, or the top-level list at the root
    pub fn active_level(&self, tree: &'a CatalogTree) -> &'a [ProductNode] {
        match self.last() {
            Some(node) => &node.children,
            None => tree.products(),
        }
    }

    pub fn is_prefix_of(&self, other: &NavigationPath<'_>) -> bool {
        self.nodes.len() <= other.nodes.len()
            && self
                .nodes
                .iter()
                .zip(other.nodes.iter())
                .all(|(a, b)| a.id == b.id)
    }

    /// Check the parent/child chain invariant
    pub fn is_consistent(&self) -> bool {
        self.nodes.windows(2).all(|pair| {
            pair[0]
                .children
                .iter()
                .any(|child| std::ptr::eq(child, pair[1]))
        })
    }
}
