//! Recursive outline renderer.
//!
//! Walks the catalog and emits one `Row` per node that is currently present:
//! every top-level category, and the children of each expanded branch.
//! Descendants of a collapsed branch are not emitted at all.

use crate::catalog::model::{Catalog, CatalogNode, NodePath};
use crate::outline::state::{DisplayMode, ExpansionStore};

pub const EXPANDED_GLYPH: &str = "▼";
pub const COLLAPSED_GLYPH: &str = "▶";

/// Emphasis class of a row, independent of the display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Level-0 branch header (bold).
    Category,
    /// Deeper branch header (medium weight).
    Group,
    Link,
}

/// Styling classification; surfaces map this to concrete tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleClass {
    pub mode: DisplayMode,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Header { expanded: bool },
    Link { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub path: NodePath,
    pub label: String,
    pub level: usize,
    /// Horizontal offset in surface units: `level * indent_unit`.
    pub indent: usize,
    pub kind: RowKind,
    pub style: StyleClass,
}

impl Row {
    /// Expand/collapse glyph; `None` for links.
    pub fn indicator(&self) -> Option<&'static str> {
        match self.kind {
            RowKind::Header { expanded: true } => Some(EXPANDED_GLYPH),
            RowKind::Header { expanded: false } => Some(COLLAPSED_GLYPH),
            RowKind::Link { .. } => None,
        }
    }
}

/// Render every top-level category at level 0.
pub fn render(
    catalog: &Catalog,
    store: &ExpansionStore,
    mode: DisplayMode,
    indent_unit: usize,
) -> Vec<Row> {
    let mut renderer = Renderer {
        store,
        mode,
        indent_unit,
        rows: Vec::new(),
    };
    for category in &catalog.categories {
        renderer.render_node(category, NodePath::root(category.label()), 0);
    }
    renderer.rows
}

/// Render with every branch open, ignoring stored state.
pub fn render_all(catalog: &Catalog, mode: DisplayMode, indent_unit: usize) -> Vec<Row> {
    let mut store = ExpansionStore::default();
    open_all(&catalog.categories, None, &mut store);
    render(catalog, &store, mode, indent_unit)
}

fn open_all(nodes: &[CatalogNode], parent: Option<&NodePath>, store: &mut ExpansionStore) {
    for node in nodes.iter().filter(|n| n.is_branch()) {
        let path = match parent {
            Some(parent) => parent.child(node.label()),
            None => NodePath::root(node.label()),
        };
        store.set(&path, true);
        open_all(node.children(), Some(&path), store);
    }
}

struct Renderer<'a> {
    store: &'a ExpansionStore,
    mode: DisplayMode,
    indent_unit: usize,
    rows: Vec<Row>,
}

impl Renderer<'_> {
    fn render_node(&mut self, node: &CatalogNode, path: NodePath, level: usize) {
        let indent = level * self.indent_unit;
        match node {
            CatalogNode::Leaf(link) => self.rows.push(Row {
                path,
                label: link.label.clone(),
                level,
                indent,
                kind: RowKind::Link {
                    url: link.url.clone(),
                },
                style: StyleClass {
                    mode: self.mode,
                    role: Role::Link,
                },
            }),
            CatalogNode::Branch(branch) => {
                let expanded = self.store.is_expanded(&path);
                let role = if level == 0 {
                    Role::Category
                } else {
                    Role::Group
                };
                self.rows.push(Row {
                    path: path.clone(),
                    label: branch.label.clone(),
                    level,
                    indent,
                    kind: RowKind::Header { expanded },
                    style: StyleClass {
                        mode: self.mode,
                        role,
                    },
                });
                if !expanded {
                    return;
                }
                for child in &branch.children {
                    self.render_node(child, path.child(child.label()), level + 1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::state::CollapsePolicy;

    fn email() -> Catalog {
        Catalog::new(vec![CatalogNode::branch(
            "Email",
            vec![CatalogNode::leaf("Hunter.io", "https://hunter.io/")],
        )])
    }

    fn social() -> Catalog {
        Catalog::new(vec![CatalogNode::branch(
            "Social Networks",
            vec![
                CatalogNode::branch(
                    "Facebook",
                    vec![CatalogNode::leaf(
                        "Facebook Search",
                        "https://www.facebook.com/",
                    )],
                ),
                CatalogNode::branch(
                    "Twitter",
                    vec![CatalogNode::leaf("TweetDeck", "https://tweetdeck.twitter.com/")],
                ),
            ],
        )])
    }

    fn labels(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn single_category_starts_open() {
        let rows = render(&email(), &ExpansionStore::default(), DisplayMode::Light, 24);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Email");
        assert_eq!(rows[0].indicator(), Some(EXPANDED_GLYPH));
        assert_eq!(rows[0].style.role, Role::Category);
        assert_eq!(rows[1].label, "Hunter.io");
        assert_eq!(
            rows[1].kind,
            RowKind::Link {
                url: "https://hunter.io/".to_string()
            }
        );
        assert_eq!(rows[1].indicator(), None);
        assert_eq!(rows[1].indent, rows[0].indent + 24);
    }

    #[test]
    fn nested_branches_start_closed() {
        let rows = render(&social(), &ExpansionStore::default(), DisplayMode::Light, 24);
        assert_eq!(labels(&rows), vec!["Social Networks", "Facebook", "Twitter"]);
        assert_eq!(rows[1].indicator(), Some(COLLAPSED_GLYPH));
        assert_eq!(rows[1].style.role, Role::Group);
    }

    #[test]
    fn expanding_one_branch_reveals_only_its_children() {
        let mut store = ExpansionStore::default();
        store.toggle(&NodePath::from_labels(["Social Networks", "Facebook"]));
        let rows = render(&social(), &store, DisplayMode::Light, 24);
        assert_eq!(
            labels(&rows),
            vec!["Social Networks", "Facebook", "Facebook Search", "Twitter"]
        );
    }

    #[test]
    fn collapsed_category_hides_all_descendants() {
        let mut store = ExpansionStore::new(CollapsePolicy::Keep);
        store.toggle(&NodePath::from_labels(["Social Networks", "Facebook"]));
        store.toggle(&NodePath::root("Social Networks"));
        let rows = render(&social(), &store, DisplayMode::Light, 24);
        assert_eq!(labels(&rows), vec!["Social Networks"]);
        assert_eq!(rows[0].indicator(), Some(COLLAPSED_GLYPH));
    }

    #[test]
    fn leaf_at_top_level_renders_as_link() {
        let catalog = Catalog::new(vec![CatalogNode::leaf("Pipl", "https://pipl.com/")]);
        let rows = render(&catalog, &ExpansionStore::default(), DisplayMode::Light, 2);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].indicator(), None);
        assert_eq!(rows[0].indent, 0);
    }

    #[test]
    fn empty_branch_renders_header_only() {
        let catalog = Catalog::new(vec![CatalogNode::branch("Documents", vec![])]);
        let rows = render(&catalog, &ExpansionStore::default(), DisplayMode::Light, 2);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].indicator(), Some(EXPANDED_GLYPH));
    }

    #[test]
    fn indent_is_monotonic_in_level() {
        let rows = render_all(&social(), DisplayMode::Light, 3);
        for a in &rows {
            for b in &rows {
                if a.level < b.level {
                    assert!(a.indent < b.indent, "{} vs {}", a.label, b.label);
                }
            }
        }
    }

    #[test]
    fn display_mode_reaches_every_row_without_changing_shape() {
        let mut store = ExpansionStore::default();
        store.toggle(&NodePath::from_labels(["Social Networks", "Facebook"]));
        let light = render(&social(), &store, DisplayMode::Light, 24);
        let dark = render(&social(), &store, DisplayMode::Dark, 24);
        assert_eq!(light.len(), dark.len());
        for (l, d) in light.iter().zip(&dark) {
            assert_eq!(l.path, d.path);
            assert_eq!(l.kind, d.kind);
            assert_eq!(l.style.role, d.style.role);
            assert_eq!(l.style.mode, DisplayMode::Light);
            assert_eq!(d.style.mode, DisplayMode::Dark);
        }
    }

    #[test]
    fn render_all_opens_everything() {
        let rows = render_all(&social(), DisplayMode::Light, 2);
        assert_eq!(
            labels(&rows),
            vec![
                "Social Networks",
                "Facebook",
                "Facebook Search",
                "Twitter",
                "TweetDeck"
            ]
        );
    }
}
