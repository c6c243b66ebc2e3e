//! Catalog Navigator - browse a hierarchical product catalog from the terminal.
//!
//! This library provides the core functionality for catalog-navigator: the
//! catalog model, the two navigation layouts (multi-column drill-down and
//! accordion), shallow search, related products and the text rendering of
//! each screen.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Catalog loading and lookup
//! - Navigation path and expansion set transitions
//! - Column and accordion projections
//! - Error handling and result types
//! - UI templates and color system

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Error handling
    CatalogNavigatorError,
    Result,

    // Catalog model
    CatalogSource,
    CatalogTree,
    FileSource,
    NodeKind,
    ProductDetails,
    ProductNode,
    ReaderSource,

    // Navigation
    AccordionProjector,
    AccordionRow,
    Column,
    ColumnProjector,
    Event,
    ExpansionSet,
    Layout,
    LoadState,
    NavigationPath,
    Navigator,
    View,

    // UI and formatting
    render_template,
    render_template_plain,
    strip_ansi_codes,
    TemplateContext,
    Templates,
    TEMPLATES,
};
