//! Shallow name filter over a single visible level.
//!
//! Only the list handed in is searched; nested levels are never visited.

use crate::core::node::ProductNode;

/// Keep the nodes whose name contains `query`, ignoring case, in their original
/// order. An empty query keeps everything.
pub fn filter<'a, I>(level: I, query: &str) -> Vec<&'a ProductNode>
where
    I: IntoIterator<Item = &'a ProductNode>,
{
    if query.is_empty() {
        return level.into_iter().collect();
    }
    let needle = query.to_lowercase();
    level
        .into_iter()
        .filter(|node| node.name.to_lowercase().contains(&needle))
        .collect()
}
