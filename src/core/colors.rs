//! Unified color system for catalog node kinds.
//!
//! Every place that prints a node goes through these helpers so a kind has
//! the same color everywhere.
//!
//! # Public API
//! - [`get_kind_color_style`]: Get color function for a node kind
//! - [`get_aligned_kind`]: Kind badge padded to a fixed width
//! - [`get_colored_name`]: Node name in its kind color, bold when selected
//!
//! # Color Scheme
//! - **Category**: Blue
//! - **Subcategory**: Cyan
//! - **Product**: Green

use crate::core::node::NodeKind;
use colored::*;

/// Width of the widest badge, "(subcategory)"
const BADGE_WIDTH: usize = 13;

/// Single function to apply color styling based on node kind
pub fn get_kind_color_style(kind: NodeKind) -> Box<dyn Fn(&str) -> ColoredString> {
    match kind {
        NodeKind::Category => Box::new(|text: &str| text.blue()),
        NodeKind::Subcategory => Box::new(|text: &str| text.cyan()),
        NodeKind::Product => Box::new(|text: &str| text.green()),
    }
}

/// Kind badge like `(product)`, padded so names line up
pub fn get_aligned_kind(kind: NodeKind) -> String {
    let badge = format!("({})", kind.as_str());
    let padding = " ".repeat(BADGE_WIDTH.saturating_sub(badge.len()));
    format!("{}{padding}", badge.bright_black())
}

pub fn get_colored_name(kind: NodeKind, name: &str, selected: bool) -> ColoredString {
    let color_fn = get_kind_color_style(kind);
    if selected {
        color_fn(name).bold().underline()
    } else {
        color_fn(name)
    }
}
