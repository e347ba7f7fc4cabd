//! JSON catalog loader.
//!
//! A catalog is a JSON object whose values are either URL strings (links) or
//! nested objects (groups). Member order is kept as the display order.
//! Duplicate labels within one object and any other value type are rejected
//! while parsing, so a loaded `Catalog` never needs re-checking.

use std::collections::HashSet;
use std::fmt;

use anyhow::{Context, Result};
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::catalog::model::{Catalog, CatalogNode};

const BUILTIN: &str = include_str!("../../catalog/osint.json");

/// Parse catalog JSON text.
pub fn parse(input: &str) -> Result<Catalog> {
    let root: CatalogRoot = serde_json::from_str(input).context("malformed catalog JSON")?;
    Ok(root.0)
}

/// The OSINT catalog compiled into the binary.
pub fn builtin() -> Result<Catalog> {
    parse(BUILTIN).context("built-in catalog failed to load")
}

/// Serialise a catalog back to pretty-printed JSON, keeping member order.
pub fn to_json(catalog: &Catalog) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&Members(&catalog.categories))
        .context("failed to serialise catalog")?;
    out.push('\n');
    Ok(out)
}

struct Members<'a>(&'a [CatalogNode]);

impl Serialize for Members<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for node in self.0 {
            match node {
                CatalogNode::Leaf(link) => map.serialize_entry(&link.label, &link.url)?,
                CatalogNode::Branch(branch) => {
                    map.serialize_entry(&branch.label, &Members(&branch.children))?
                }
            }
        }
        map.end()
    }
}

struct CatalogRoot(Catalog);

impl<'de> Deserialize<'de> for CatalogRoot {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let categories = deserializer.deserialize_map(ChildrenVisitor)?;
        Ok(CatalogRoot(Catalog::new(categories)))
    }
}

/// Visits one JSON object and yields its entries as ordered children.
struct ChildrenVisitor;

impl<'de> Visitor<'de> for ChildrenVisitor {
    type Value = Vec<CatalogNode>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping labels to URLs or nested objects")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut children = Vec::new();
        let mut seen = HashSet::new();
        while let Some(label) = map.next_key::<String>()? {
            if !seen.insert(label.clone()) {
                return Err(de::Error::custom(format!("duplicate label {label:?}")));
            }
            let node = map.next_value_seed(NodeSeed { label })?;
            children.push(node);
        }
        Ok(children)
    }
}

/// Deserializes the value stored under `label`.
struct NodeSeed {
    label: String,
}

impl<'de> DeserializeSeed<'de> for NodeSeed {
    type Value = CatalogNode;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for NodeSeed {
    type Value = CatalogNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a URL string or a nested object for entry {:?}",
            self.label
        )
    }

    fn visit_str<E>(self, url: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(CatalogNode::leaf(self.label, url))
    }

    fn visit_string<E>(self, url: String) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(CatalogNode::leaf(self.label, url))
    }

    fn visit_map<A>(self, map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let children = ChildrenVisitor.visit_map(map)?;
        Ok(CatalogNode::branch(self.label, children))
    }
}
