//! Turns projector output into printable lines.
//!
//! Rendering never touches navigation state; it only reads the [`View`] a
//! [`Navigator`] projects plus the breadcrumb path.

use crate::core::catalog::CatalogTree;
use crate::core::columns::{Column, ROOT_LABEL};
use crate::core::accordion::AccordionRow;
use crate::core::event_parser::COMMAND_USAGE;
use crate::core::navigation::NavigationPath;
use crate::core::node::ProductNode;
use crate::core::session::{DetailView, Navigator, View};
use crate::core::templates::{render_template, TemplateContext, TEMPLATES};
use colored::*;

/// Fallback shown when a node has no image reference
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Breadcrumb trail with the numbers `crumb` accepts
pub fn render_breadcrumb(path: &NavigationPath<'_>) -> String {
    let mut line = format!("{} {}", "[0]".bright_black(), ROOT_LABEL.white());
    for (i, node) in path.nodes().iter().enumerate() {
        let crumb = format!("[{}]", i + 1);
        let name = if i + 1 == path.len() {
            node.name.cyan().bold()
        } else {
            node.name.white()
        };
        line.push_str(&format!(" {} {} {}", "›".bright_black(), crumb.bright_black(), name));
    }
    line
}

/// Full screen for the current navigator state
pub fn render_navigator(navigator: &Navigator<'_>, quote_link: &str) -> Vec<String> {
    let mut lines = vec![String::new(), render_breadcrumb(navigator.path())];
    if !navigator.query().is_empty() {
        lines.push(format!("{} {}", "Search:".bright_black(), navigator.query().white()));
    }
    lines.push(String::new());

    match navigator.view() {
        View::Detail(detail) => lines.extend(render_detail(&detail, quote_link)),
        View::Columns(columns) => lines.extend(render_columns(&columns)),
        View::Accordion(rows) => lines.extend(render_accordion(&rows)),
    }
    lines
}

pub fn render_columns(columns: &[Column<'_>]) -> Vec<String> {
    let mut lines = Vec::new();
    for column in columns {
        lines.push(render_template(
            TEMPLATES.column_header,
            &TemplateContext {
                title: Some(column.title),
                n: Some(column.index + 1),
                ..Default::default()
            },
        ));

        if column.items.is_empty() {
            lines.push(format!("   {}", TEMPLATES.empty_level.bright_black()));
        }

        for (i, node) in column.items.iter().enumerate() {
            let selected = column.is_selected(node);
            let marker = match (node.has_children() && !node.is_leaf(), selected) {
                (true, true) => " › *",
                (true, false) => " ›",
                (false, true) => " *",
                (false, false) => "",
            };
            lines.push(render_template(
                TEMPLATES.item_line,
                &TemplateContext {
                    kind: Some(node.kind),
                    n: Some(i + 1),
                    name: Some(&node.name),
                    selected,
                    marker: Some(marker),
                    ..Default::default()
                },
            ));
        }
        lines.push(String::new());
    }
    lines
}

pub fn render_accordion(rows: &[AccordionRow<'_>]) -> Vec<String> {
    if rows.is_empty() {
        return vec![TEMPLATES.empty_level.bright_black().to_string(), String::new()];
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    for (i, row) in rows.iter().enumerate() {
        let marker = if row.is_leaf() {
            "•"
        } else if row.expanded {
            "-"
        } else if row.node.has_children() {
            "+"
        } else {
            "·"
        };
        lines.push(render_template(
            TEMPLATES.row_line,
            &TemplateContext {
                kind: Some(row.node.kind),
                n: Some(i + 1),
                name: Some(&row.node.name),
                selected: row.expanded,
                marker: Some(marker),
                indent: row.depth(),
                ..Default::default()
            },
        ));
    }
    lines.push(String::new());
    lines
}

pub fn render_detail(detail: &DetailView<'_>, quote_link: &str) -> Vec<String> {
    let product = detail.product;
    let mut lines = vec![render_template(
        TEMPLATES.detail_title,
        &TemplateContext {
            title: Some(&product.name),
            ..Default::default()
        },
    )];
    if !product.description.is_empty() {
        lines.push(product.description.white().to_string());
    }
    lines.push(String::new());

    let image = if product.image.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        product.image.as_str()
    };
    lines.push(field("Type", product.kind.as_str()));
    lines.push(field("Image", image));
    lines.push(String::new());

    if let Some(details) = &product.details {
        if !details.features.is_empty() {
            lines.push(section("Key Features"));
            for feature in &details.features {
                lines.push(render_template(
                    TEMPLATES.feature_line,
                    &TemplateContext {
                        value: Some(feature),
                        ..Default::default()
                    },
                ));
            }
            lines.push(String::new());
        }

        if !details.specs.is_empty() {
            lines.push(section("Technical Specifications"));
            for spec in &details.specs {
                lines.push(render_template(
                    TEMPLATES.spec_line,
                    &TemplateContext {
                        label: Some(&spec.label),
                        value: Some(&spec.value),
                        ..Default::default()
                    },
                ));
            }
            lines.push(String::new());
        }

        if !details.downloads.is_empty() {
            lines.push(section("Downloads & Documentation"));
            for (i, download) in details.downloads.iter().enumerate() {
                lines.push(render_template(
                    TEMPLATES.download_line,
                    &TemplateContext {
                        n: Some(i + 1),
                        label: Some(&download.label),
                        value: Some(&download.file_ref),
                        ..Default::default()
                    },
                ));
            }
            lines.push(String::new());
        }
    }

    lines.push(field("Request Quote", quote_link));
    lines.push(String::new());

    if !detail.related.is_empty() {
        lines.push(section("Related Products"));
        for (i, node) in detail.related.iter().enumerate() {
            lines.push(render_template(
                TEMPLATES.related_line,
                &TemplateContext {
                    kind: Some(node.kind),
                    n: Some(i + 1),
                    name: Some(&node.name),
                    ..Default::default()
                },
            ));
        }
        lines.push(String::new());
    }
    lines
}

/// Navigable node listing used by `show` for non-leaf ids
pub fn render_children(node: &ProductNode) -> Vec<String> {
    let mut lines = vec![section(&node.name)];
    if node.children.is_empty() {
        lines.push(format!("   {}", "No products in this category.".bright_black()));
    }
    for child in &node.children {
        lines.push(render_template(
            TEMPLATES.tree_line,
            &TemplateContext {
                kind: Some(child.kind),
                name: Some(&child.name),
                marker: Some(&format!("  {}", child.id)),
                indent: 1,
                ..Default::default()
            },
        ));
    }
    lines.push(String::new());
    lines
}

/// Whole catalog, one node per line, products marked with `•`
pub fn render_tree(tree: &CatalogTree) -> Vec<String> {
    let mut lines = Vec::with_capacity(tree.node_count());
    for node in tree.products() {
        push_tree_lines(node, 0, &mut lines);
    }
    lines
}

fn push_tree_lines(node: &ProductNode, depth: usize, lines: &mut Vec<String>) {
    let marker = if node.is_leaf() {
        format!(" •  {}", node.id)
    } else {
        format!("  {}", node.id)
    };
    lines.push(render_template(
        TEMPLATES.tree_line,
        &TemplateContext {
            kind: Some(node.kind),
            name: Some(&node.name),
            marker: Some(&marker),
            indent: depth,
            ..Default::default()
        },
    ));
    for child in &node.children {
        push_tree_lines(child, depth + 1, lines);
    }
}

pub fn render_help() -> Vec<String> {
    let mut lines = vec![String::new(), "Commands:".blue().to_string()];
    for (usage, description) in COMMAND_USAGE {
        lines.push(format!("  {:<24}{}", usage.white(), description.bright_black()));
    }
    lines.push(String::new());
    lines
}

pub fn render_loading() -> String {
    TEMPLATES.loading.bright_black().to_string()
}

fn section(title: &str) -> String {
    render_template(
        TEMPLATES.section_header,
        &TemplateContext {
            title: Some(title),
            ..Default::default()
        },
    )
}

fn field(label: &str, value: &str) -> String {
    render_template(
        TEMPLATES.detail_field,
        &TemplateContext {
            label: Some(label),
            value: Some(value),
            ..Default::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::fixtures::sample_tree;
    use crate::core::session::{Event, Layout};
    use crate::core::templates::strip_ansi_codes;

    fn plain(lines: Vec<String>) -> String {
        strip_ansi_codes(&lines.join("\n"))
    }

    #[test]
    fn test_breadcrumb() {
        let tree = sample_tree();
        let path = NavigationPath::from_nodes(tree.ancestry("plc").expect("fixture node"));
        assert_eq!(
            strip_ansi_codes(&render_breadcrumb(&path)),
            "[0] Products › [1] Automation › [2] PLC Systems"
        );
    }

    #[test]
    fn test_root_columns() {
        let tree = sample_tree();
        let navigator = Navigator::new(&tree, Layout::Wide);
        let output = plain(render_navigator(&navigator, "/contact"));
        assert!(output.contains("➤ [1] Products:"));
        assert!(output.contains("[1] Automation ›"));
        assert!(output.contains("[2] Drives ›"));
    }

    #[test]
    fn test_selected_item_is_marked() {
        let tree = sample_tree();
        let mut navigator = Navigator::new(&tree, Layout::Wide);
        navigator
            .apply(Event::Select { column: 1, item: 2 })
            .expect("valid selection");
        let output = plain(render_navigator(&navigator, "/contact"));
        assert!(output.contains("[2] Drives › *"));
        assert!(output.contains("➤ [2] Drives:"));
        assert!(output.contains("[1] Servo Drives ›"));
    }

    #[test]
    fn test_empty_search_result() {
        let tree = sample_tree();
        let mut navigator = Navigator::new(&tree, Layout::Wide);
        navigator
            .apply(Event::Search("zzz".to_string()))
            .expect("search accepted");
        let output = plain(render_navigator(&navigator, "/contact"));
        assert!(output.contains("Search: zzz"));
        assert!(output.contains("No products found matching your search."));
    }

    #[test]
    fn test_accordion_markers() {
        let tree = sample_tree();
        let mut navigator = Navigator::new(&tree, Layout::Compact);
        navigator.apply(Event::Toggle { row: 1 }).expect("valid row");
        let output = plain(render_navigator(&navigator, "/contact"));
        assert!(output.contains("- (category)    [1] Automation"));
        assert!(output.contains("  + (subcategory) [2] PLC Systems"));
        assert!(output.contains("  • (subcategory) [3] HMI Panels"));
        assert!(output.contains("+ (category)    [4] Drives"));
    }

    #[test]
    fn test_detail_sections() {
        let tree = sample_tree();
        let path = NavigationPath::from_nodes(tree.ancestry("s7-1200").expect("fixture node"));
        let detail = DetailView {
            product: path.last().expect("non-empty"),
            related: crate::core::related::related_products(&path),
        };
        let output = plain(render_detail(&detail, "/contact"));
        assert!(output.contains("S7-1200 Controller"));
        assert!(output.contains("Compact controller"));
        assert!(output.contains("Image: /placeholder.svg"));
        assert!(output.contains("➤ Key Features:"));
        assert!(output.contains("• Integrated PROFINET"));
        assert!(output.contains("Supply: 24 V DC"));
        assert!(output.contains("[1] Datasheet (/docs/s7-1200.pdf) PDF Document"));
        assert!(output.contains("Request Quote: /contact"));
        assert!(output.contains("➤ Related Products:"));
        assert!(output.contains("[1] S7-1500 Controller"));
    }

    #[test]
    fn test_detail_without_payload_skips_sections() {
        let tree = sample_tree();
        let path = NavigationPath::from_nodes(tree.ancestry("hmi").expect("fixture node"));
        let detail = DetailView {
            product: path.last().expect("non-empty"),
            related: Vec::new(),
        };
        let output = plain(render_detail(&detail, "/contact"));
        assert!(!output.contains("Key Features"));
        assert!(!output.contains("Technical Specifications"));
        assert!(!output.contains("Downloads"));
        assert!(!output.contains("Related Products"));
    }

    #[test]
    fn test_tree_listing() {
        let output = plain(render_tree(&sample_tree()));
        assert!(output.contains("(category)    Automation  automation"));
        assert!(output.contains("    (product)     S7-1200 Controller •  s7-1200"));
        assert!(output.contains("    (subcategory) Servo Kit  servo-kit"));
    }
}
