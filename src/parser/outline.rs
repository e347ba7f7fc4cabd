//! Indented outline catalog format.
//!
//! ```text
//! # comment
//! Email
//!   Hunter.io -> https://hunter.io/
//! Social Networks
//!   Facebook
//!     Facebook Search -> https://www.facebook.com/
//! ```
//!
//! A line containing ` -> ` is a link; any other line opens a group. The
//! first indented line fixes the indent unit for the whole file.

use std::collections::HashSet;

use anyhow::{Result, bail};

use crate::catalog::model::{Catalog, CatalogNode, NodePath};

const LINK_SEPARATOR: &str = " -> ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum EntryKind {
    Group,
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    /// 1-based source line.
    line: usize,
    depth: usize,
    label: String,
    kind: EntryKind,
}

/// Parse outline text into a `Catalog`.
///
/// Errors carry the offending line number.
pub fn parse(input: &str) -> Result<Catalog> {
    let entries = scan_entries(input)?;
    if let Some(first) = entries.first() {
        if first.depth > 0 {
            bail!("line {}: the first entry must not be indented", first.line);
        }
    }
    let mut pos = 0;
    let categories = build_children(&entries, &mut pos, 0)?;
    Ok(Catalog::new(categories))
}

/// Serialise a catalog into outline text using two-space indentation.
///
/// Fails, naming the node path, on a label or URL that would not read back
/// unchanged.
pub fn serialize(catalog: &Catalog) -> Result<String> {
    let mut out = String::new();
    for node in &catalog.categories {
        write_node(node, &NodePath::root(node.label()), &mut out)?;
    }
    Ok(out)
}

fn write_node(node: &CatalogNode, path: &NodePath, out: &mut String) -> Result<()> {
    if let Some(problem) = label_problem(node.label()) {
        bail!("cannot write {path} as an outline: label {problem}");
    }
    out.push_str(&"  ".repeat(path.level()));
    match node {
        CatalogNode::Leaf(link) => {
            if let Some(problem) = text_problem(&link.url) {
                bail!("cannot write {path} as an outline: URL {problem}");
            }
            out.push_str(&link.label);
            out.push_str(LINK_SEPARATOR);
            out.push_str(&link.url);
            out.push('\n');
        }
        CatalogNode::Branch(branch) => {
            out.push_str(&branch.label);
            out.push('\n');
            for child in &branch.children {
                write_node(child, &path.child(child.label()), out)?;
            }
        }
    }
    Ok(())
}

fn label_problem(label: &str) -> Option<&'static str> {
    if label.contains(LINK_SEPARATOR) {
        Some("contains \" -> \"")
    } else if label.trim_start().starts_with('#') {
        Some("starts with '#'")
    } else {
        text_problem(label)
    }
}

fn text_problem(text: &str) -> Option<&'static str> {
    if text.is_empty() {
        Some("is empty")
    } else if text.contains(['\n', '\r']) {
        Some("contains a line break")
    } else if text.trim() != text {
        Some("has leading or trailing whitespace")
    } else {
        None
    }
}

fn scan_entries(input: &str) -> Result<Vec<Entry>> {
    let mut unit: Option<&str> = None;
    let mut entries = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let indent = leading_whitespace(raw);
        let depth = if indent.is_empty() {
            0
        } else {
            let unit = *unit.get_or_insert(indent);
            indent_depth(indent, unit).ok_or_else(|| {
                anyhow::anyhow!(
                    "line {}: indentation is not a multiple of the indent unit ({:?})",
                    line,
                    unit
                )
            })?
        };

        let (label, kind) = match raw.trim_start().split_once(LINK_SEPARATOR) {
            Some((label, url)) => {
                let (label, url) = (label.trim(), url.trim());
                if label.is_empty() {
                    bail!("line {}: link has an empty label", line);
                }
                if url.is_empty() {
                    bail!("line {}: link '{}' has an empty URL", line, label);
                }
                (label.to_string(), EntryKind::Link(url.to_string()))
            }
            None => (trimmed.to_string(), EntryKind::Group),
        };

        entries.push(Entry {
            line,
            depth,
            label,
            kind,
        });
    }

    Ok(entries)
}

fn build_children(entries: &[Entry], pos: &mut usize, depth: usize) -> Result<Vec<CatalogNode>> {
    let mut children = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    while let Some(entry) = entries.get(*pos) {
        if entry.depth < depth {
            break;
        }
        if entry.depth > depth {
            bail!(
                "line {}: indented more than one level below its parent",
                entry.line
            );
        }
        *pos += 1;

        if !seen.insert(entry.label.as_str()) {
            bail!("line {}: duplicate label '{}'", entry.line, entry.label);
        }

        let node = match &entry.kind {
            EntryKind::Link(url) => {
                if let Some(next) = entries.get(*pos).filter(|next| next.depth > depth) {
                    bail!(
                        "line {}: cannot nest entries under link '{}'",
                        next.line,
                        entry.label
                    );
                }
                CatalogNode::leaf(entry.label.clone(), url.clone())
            }
            EntryKind::Group => {
                let nested = build_children(entries, pos, depth + 1)?;
                CatalogNode::branch(entry.label.clone(), nested)
            }
        };
        children.push(node);
    }

    Ok(children)
}

fn leading_whitespace(raw: &str) -> &str {
    let end = raw.len() - raw.trim_start().len();
    &raw[..end]
}

fn indent_depth(indent: &str, unit: &str) -> Option<usize> {
    if unit.is_empty() || indent.len() % unit.len() != 0 {
        return None;
    }
    let depth = indent.len() / unit.len();
    (unit.repeat(depth) == indent).then_some(depth)
}
