//! Core functionality for the catalog-navigator tool.
//!
//! This module provides the catalog model, the navigation state machines and
//! their projections, error handling, configuration and the UI components.

pub mod accordion;
pub mod catalog;
pub mod colors;
pub mod columns;
pub mod config;
pub mod dirs;
pub mod error;
pub mod event_parser;
pub mod expansion;
pub mod navigation;
pub mod node;
pub mod output;
pub mod related;
pub mod render;
pub mod search;
pub mod session;
pub mod templates;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{CatalogNavigatorError, Result};

// === Catalog model ===
// Product hierarchy as loaded from JSON, and where it is loaded from
pub use catalog::{CatalogSource, CatalogTree, FileSource, ReaderSource};
pub use node::{is_leaf, Download, NodeKind, ProductDetails, ProductNode, SpecEntry};

// === Navigation state ===
// Selection path for the wide layout, expansion set for the compact one
pub use expansion::ExpansionSet;
pub use navigation::NavigationPath;

// === Projections ===
// Derived views over the tree: columns, accordion rows, search, siblings
pub use accordion::{AccordionProjector, AccordionRow};
pub use columns::{Column, ColumnProjector, MAX_VISIBLE_COLUMNS, ROOT_LABEL};
pub use related::related_products;
pub use search::filter;

// === Session ===
// Load lifecycle, event dispatch and the interactive command grammar
pub use event_parser::{Command, CommandParser};
pub use session::{DetailView, Event, Layout, LoadState, Navigator, View};

// === Configuration ===
pub use config::NavigatorConfig;

// === UI templates ===
// Template system for consistent output formatting with colors
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES,
};

// === Color system ===
pub use colors::{get_aligned_kind, get_colored_name, get_kind_color_style};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    format_session_error, print_error, print_info, print_lines, print_section_header,
    print_success,
};
