//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`CatalogNavigatorError`] which covers every failure mode of
//! catalog-navigator. It uses `thiserror` for ergonomic error definitions and includes
//! constructor helpers for the variants that carry context.
//!
//! # Public API
//! - [`CatalogNavigatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, CatalogNavigatorError>`
//!
//! # Error Categories
//! - **Catalog loading**: Unreadable or unparsable catalog documents
//! - **Session**: Interaction before load, invalid commands and item numbers
//! - **Lookup**: Unknown node ids
//! - **Configuration**: Config directory and config file failures

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for catalog-navigator
#[derive(Error, Debug)]
pub enum CatalogNavigatorError {
    // Catalog loading errors
    #[error("No catalog provided. Pass --catalog <PATH> or run 'config set-catalog <PATH>'")]
    NoCatalogProvided,

    #[error("Failed to read catalog '{path}': {source}")]
    CatalogReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {source}")]
    CatalogParseFailed { source: serde_json::Error },

    // Session errors
    #[error("Catalog is still loading")]
    CatalogNotLoaded,

    #[error("Unknown command: '{command}'. Type 'help' to list commands")]
    UnknownCommand { command: String },

    #[error("Missing argument for '{command}'. Usage: {usage}")]
    MissingArgument { command: String, usage: String },

    #[error("Invalid number: '{number}'")]
    InvalidNumber { number: String },

    #[error("Invalid layout: '{layout}'. Use 'wide' or 'compact'")]
    InvalidLayout { layout: String },

    #[error("Item number must be positive (got 0)")]
    ZeroIndex,

    #[error("Item {index} is out of range (1-{max} available)")]
    ItemOutOfRange { index: usize, max: usize },

    #[error("No items available to select")]
    NoItemsAvailable,

    #[error("Column {column} is not shown")]
    ColumnNotVisible { column: usize },

    #[error("Breadcrumb {index} is out of range (0-{max} available)")]
    BreadcrumbOutOfRange { index: usize, max: usize },

    #[error("'{command}' is only available in the {layout} layout")]
    WrongLayout {
        command: String,
        layout: &'static str,
    },

    #[error("No product is open")]
    NotInDetailView,

    #[error("'{command}' is not available while a product is open. Use 'back' or 'crumb'")]
    InDetailView { command: String },

    // Lookup errors
    #[error("No catalog entry with id '{id}'")]
    NodeNotFound { id: String },

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using CatalogNavigatorError
pub type Result<T> = std::result::Result<T, CatalogNavigatorError>;

impl CatalogNavigatorError {
    /// Create a catalog read failed error
    pub fn catalog_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CatalogReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a catalog parse failed error
    pub fn catalog_parse_failed(source: serde_json::Error) -> Self {
        Self::CatalogParseFailed { source }
    }

    /// Create an unknown command error
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    /// Create a missing argument error with the usage hint for the command
    pub fn missing_argument(command: impl Into<String>, usage: impl Into<String>) -> Self {
        Self::MissingArgument {
            command: command.into(),
            usage: usage.into(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(number: impl Into<String>) -> Self {
        Self::InvalidNumber {
            number: number.into(),
        }
    }

    /// Create an invalid layout error
    pub fn invalid_layout(layout: impl Into<String>) -> Self {
        Self::InvalidLayout {
            layout: layout.into(),
        }
    }

    /// Create an item out of range error
    pub fn item_out_of_range(index: usize, max: usize) -> Self {
        Self::ItemOutOfRange { index, max }
    }

    /// Create a breadcrumb out of range error
    pub fn breadcrumb_out_of_range(index: usize, max: usize) -> Self {
        Self::BreadcrumbOutOfRange { index, max }
    }

    /// Create a wrong layout error
    pub fn wrong_layout(command: impl Into<String>, layout: &'static str) -> Self {
        Self::WrongLayout {
            command: command.into(),
            layout,
        }
    }

    /// Create an in-detail-view error
    pub fn in_detail_view(command: impl Into<String>) -> Self {
        Self::InDetailView {
            command: command.into(),
        }
    }

    /// Create a node not found error
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }
}
