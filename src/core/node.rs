//! Catalog node types and the leaf rule.
//!
//! A catalog is a forest of [`ProductNode`] values. Each node owns its children
//! outright, so the tree has no shared ownership and no back-references.
//!
//! # Public API
//! - [`ProductNode`]: One category, subcategory or product
//! - [`NodeKind`]: Closed three-way kind of a node
//! - [`ProductDetails`], [`SpecEntry`], [`Download`]: Leaf payload
//! - [`is_leaf`]: The single leaf predicate every reader goes through
//!
//! # Document shape
//! Nodes are read from the catalog JSON as written by the content team:
//! `type` carries the kind, `image` the display asset, and `details.specs` is an
//! object whose keys are kept in document order (duplicates included).
//! Missing or `null` `children`, `details`, `description` or `image` read as
//! empty. Non-string spec values keep their JSON text.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Kind of a catalog node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Category,
    Subcategory,
    Product,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Category => "category",
            NodeKind::Subcategory => "subcategory",
            NodeKind::Product => "product",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single specification row. Labels are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecEntry {
    pub label: String,
    pub value: String,
}

/// A downloadable document attached to a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub label: String,
    #[serde(rename = "file", alias = "fileRef")]
    pub file_ref: String,
}

/// Leaf payload shown on the detail view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(
        default,
        serialize_with = "serialize_specs",
        deserialize_with = "deserialize_specs"
    )]
    pub specs: Vec<SpecEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub downloads: Vec<Download>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: NodeKind,
    #[serde(default, alias = "imageRef", deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<ProductNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ProductDetails>,
}

impl ProductNode {
    /// Build a bare node with no children and no details
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            image: String::new(),
            description: String::new(),
            children: Vec::new(),
            details: None,
        }
    }

    pub fn with_children(mut self, children: Vec<ProductNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_details(mut self, details: ProductDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// See [`is_leaf`]
    pub fn is_leaf(&self) -> bool {
        is_leaf(self)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Collect the ids of every node below this one, depth first
    pub fn descendant_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        collect_descendant_ids(self, &mut ids);
        ids
    }
}

fn collect_descendant_ids<'a>(node: &'a ProductNode, ids: &mut Vec<&'a str>) {
    for child in &node.children {
        ids.push(child.id.as_str());
        collect_descendant_ids(child, ids);
    }
}

/// A node is a leaf product when its kind is `product`, or when it carries a
/// details payload and has nothing to drill into.
pub fn is_leaf(node: &ProductNode) -> bool {
    node.kind == NodeKind::Product || (node.details.is_some() && node.children.is_empty())
}

struct SpecsVisitor;

impl<'de> Visitor<'de> for SpecsVisitor {
    type Value = Vec<SpecEntry>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping spec labels to values")
    }

    fn visit_map<M>(self, mut access: M) -> std::result::Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut specs = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((label, value)) = access.next_entry::<String, Value>()? {
            specs.push(SpecEntry {
                label,
                value: spec_text(value),
            });
        }
        Ok(specs)
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
        Ok(Vec::new())
    }
}

/// Numbers and booleans keep their JSON text; `null` is blank
fn spec_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Treat an explicit `null` like a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_specs<'de, D>(deserializer: D) -> std::result::Result<Vec<SpecEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(SpecsVisitor)
}

fn serialize_specs<S>(specs: &[SpecEntry], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(specs.len()))?;
    for spec in specs {
        map.serialize_entry(&spec.label, &spec.value)?;
    }
    map.end()
}
