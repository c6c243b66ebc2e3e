//! The frozen catalog tree and the sources it is fetched from.
//!
//! # Public API
//! - [`CatalogTree`]: Ordered forest of top-level [`ProductNode`]s
//! - [`CatalogSource`]: One-shot fetch of a catalog document
//! - [`FileSource`], [`ReaderSource`]: Sources backed by a file or any reader
//!
//! The document shape is `{ "products": [ ... ] }`. A tree is built once per
//! session and only ever handed out behind shared references.

use crate::core::error::{CatalogNavigatorError, Result};
use crate::core::node::{null_as_default, ProductNode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTree {
    #[serde(default, deserialize_with = "null_as_default")]
    products: Vec<ProductNode>,
}

impl CatalogTree {
    pub fn new(products: Vec<ProductNode>) -> Self {
        Self { products }
    }

    /// Tree used when the catalog could not be fetched
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(CatalogNavigatorError::catalog_parse_failed)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(CatalogNavigatorError::catalog_parse_failed)
    }

    /// Top-level nodes in document order
    pub fn products(&self) -> &[ProductNode] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Total number of nodes at every depth
    pub fn node_count(&self) -> usize {
        self.products
            .iter()
            .map(|node| 1 + node.descendant_ids().len())
            .sum()
    }

    /// Find a node anywhere in the tree by id
    pub fn find(&self, id: &str) -> Option<&ProductNode> {
        self.ancestry(id).and_then(|chain| chain.last().copied())
    }

    /// Chain of nodes from a top-level node down to the node with `id`, inclusive
    pub fn ancestry(&self, id: &str) -> Option<Vec<&ProductNode>> {
        let mut chain = Vec::new();
        if find_chain(&self.products, id, &mut chain) {
            Some(chain)
        } else {
            None
        }
    }
}

fn find_chain<'a>(level: &'a [ProductNode], id: &str, chain: &mut Vec<&'a ProductNode>) -> bool {
    for node in level {
        chain.push(node);
        if node.id == id || find_chain(&node.children, id, chain) {
            return true;
        }
        chain.pop();
    }
    false
}

/// A place a catalog document can be fetched from, exactly once
pub trait CatalogSource {
    /// Short human-readable description used in log output
    fn describe(&self) -> String;

    fn fetch(self) -> Result<CatalogTree>;
}

/// Catalog document stored on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(self) -> Result<CatalogTree> {
        log::debug!("Reading catalog from {}", self.path.display());
        let content = fs::read_to_string(&self.path)
            .map_err(|e| CatalogNavigatorError::catalog_read_failed(&self.path, e))?;
        CatalogTree::from_json_str(&content)
    }
}

/// Catalog document streamed from any reader (stdin for `-`)
pub struct ReaderSource<R: Read> {
    label: String,
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(label: impl Into<String>, reader: R) -> Self {
        Self {
            label: label.into(),
            reader,
        }
    }
}

impl<R: Read> CatalogSource for ReaderSource<R> {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn fetch(self) -> Result<CatalogTree> {
        CatalogTree::from_reader(self.reader)
    }
}
