//! Template system for consistent output formatting.
//!
//! This module renders every line catalog-navigator prints from a small set of
//! templates. Placeholders are substituted in a single pass and each value is
//! colored as it is written, so literal template text is never re-scanned.
//!
//! # Public API
//! - [`Templates`]: Template definitions for all output lines
//! - [`TemplateContext`]: Values for one rendering
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Render with colors
//! - [`render_template_plain`]: Render without colors (tests, plain output)
//! - [`strip_ansi_codes`]: Remove color codes from rendered text
//!
//! # Placeholders
//! `{title}`, `{kind}`, `{n}`, `{name}`, `{marker}`, `{indent}`, `{label}`, `{value}`.
//! Unknown placeholders are kept verbatim; known ones without a value render empty.

use crate::core::colors::{get_aligned_kind, get_colored_name};
use crate::core::node::NodeKind;
use colored::*;
use std::fmt::Write;

/// Template definitions for all output formatting
pub struct Templates {
    pub loading: &'static str,
    pub column_header: &'static str,
    pub item_line: &'static str,
    pub row_line: &'static str,
    pub empty_level: &'static str,
    pub detail_title: &'static str,
    pub detail_field: &'static str,
    pub section_header: &'static str,
    pub feature_line: &'static str,
    pub spec_line: &'static str,
    pub download_line: &'static str,
    pub related_line: &'static str,
    pub tree_line: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    loading: "Loading products...",
    column_header: "➤ [{n}] {title}:",
    item_line: "   {kind} [{n}] {name}{marker}",
    row_line: "{indent}{marker} {kind} [{n}] {name}",
    empty_level: "No products found matching your search.",
    detail_title: "{title}",
    detail_field: "{label}: {value}",
    section_header: "➤ {title}:",
    feature_line: "   • {value}",
    spec_line: "   {label}: {value}",
    download_line: "   [{n}] {label} ({value}) PDF Document",
    related_line: "   {kind} [{n}] {name}",
    tree_line: "{indent}{kind} {name}{marker}",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub title: Option<&'a str>,
    pub kind: Option<NodeKind>,
    pub n: Option<usize>,
    pub name: Option<&'a str>,
    pub selected: bool,
    pub marker: Option<&'a str>,
    /// Nesting depth; two spaces per level
    pub indent: usize,
    pub label: Option<&'a str>,
    pub value: Option<&'a str>,
}

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let estimated_capacity = template.len()
        + context.title.map_or(0, str::len)
        + context.name.map_or(0, str::len)
        + context.label.map_or(0, str::len)
        + context.value.map_or(0, str::len)
        + context.indent * 2
        + 64; // color codes

    let mut output = String::with_capacity(estimated_capacity);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let placeholder = &after[..close];
                if !write_placeholder(placeholder, context, &mut output) {
                    output.push('{');
                    output.push_str(placeholder);
                    output.push('}');
                }
                rest = &after[close + 1..];
            }
            None => {
                // No closing brace, treat the remainder as literal
                output.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    output.push_str(rest);
    output
}

/// Write one placeholder value. Returns false for unknown placeholders.
fn write_placeholder(placeholder: &str, context: &TemplateContext, output: &mut String) -> bool {
    match placeholder {
        "title" => {
            if let Some(title) = context.title {
                let _ = write!(output, "{}", title.bold());
            }
        }
        "kind" => {
            if let Some(kind) = context.kind {
                output.push_str(&get_aligned_kind(kind));
            }
        }
        "n" => {
            if let Some(n) = context.n {
                let _ = write!(output, "{}", n.to_string().white());
            }
        }
        "name" => {
            if let Some(name) = context.name {
                let colored = match context.kind {
                    Some(kind) => get_colored_name(kind, name, context.selected),
                    None => name.white(),
                };
                let _ = write!(output, "{colored}");
            }
        }
        "marker" => {
            if let Some(marker) = context.marker {
                let _ = write!(output, "{}", marker.bright_black());
            }
        }
        "indent" => {
            for _ in 0..context.indent {
                output.push_str("  ");
            }
        }
        "label" => {
            if let Some(label) = context.label {
                let _ = write!(output, "{}", label.blue());
            }
        }
        "value" => {
            if let Some(value) = context.value {
                let _ = write!(output, "{}", value.white());
            }
        }
        _ => return false,
    }
    true
}

/// Strip ANSI color codes
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next(); // consume '['
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Render template without colors
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    strip_ansi_codes(&render_template(template, context))
}
