use tracing::debug;

use crate::catalog::model::{Catalog, CatalogNode, NodePath};
use crate::outline::engine::{self, Row};
use crate::outline::state::{CollapsePolicy, DisplayMode, ExpansionStore};

/// Result of activating a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Toggled { path: NodePath, expanded: bool },
    Open(String),
    Nothing,
}

/// Root driver: owns the catalog, the per-branch state, the display mode and
/// the focus cursor.
///
/// Focus is tracked by path so it survives re-renders. When a collapse hides
/// the focused row, focus moves to the nearest visible ancestor.
#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Catalog,
    store: ExpansionStore,
    mode: DisplayMode,
    indent_unit: usize,
    focus: Option<NodePath>,
}

impl Browser {
    pub fn new(catalog: Catalog, policy: CollapsePolicy, indent_unit: usize) -> Self {
        let focus = catalog
            .categories
            .first()
            .map(|c| NodePath::root(c.label()));
        Self {
            catalog,
            store: ExpansionStore::new(policy),
            mode: DisplayMode::default(),
            indent_unit,
            focus,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn policy(&self) -> CollapsePolicy {
        self.store.policy()
    }

    pub fn rows(&self) -> Vec<Row> {
        engine::render(&self.catalog, &self.store, self.mode, self.indent_unit)
    }

    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.store.is_expanded(path)
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.mode = self.mode.toggled();
        debug!(mode = self.mode.label(), "display mode toggled");
        self.mode
    }

    /// Flip a branch. Returns `false` (and changes nothing) for links and
    /// unknown paths.
    pub fn toggle(&mut self, path: &NodePath) -> bool {
        let is_branch = self.catalog.get(path).is_some_and(CatalogNode::is_branch);
        if !is_branch {
            return false;
        }
        let expanded = self.store.toggle(path);
        debug!(path = %path, expanded, stored = self.store.stored(), "branch toggled");
        self.repair_focus();
        true
    }

    pub fn focused(&self) -> Option<&NodePath> {
        self.focus.as_ref()
    }

    /// Index of the focused row within `rows`.
    pub fn focused_index(&self, rows: &[Row]) -> Option<usize> {
        let focus = self.focus.as_ref()?;
        rows.iter().position(|r| &r.path == focus)
    }

    /// Focus a path if it is currently visible.
    pub fn focus(&mut self, path: &NodePath) -> bool {
        if self.catalog.get(path).is_none() || !self.is_visible(path) {
            return false;
        }
        self.focus = Some(path.clone());
        true
    }

    pub fn move_focus(&mut self, delta: isize) {
        let rows = self.rows();
        if rows.is_empty() {
            return;
        }
        let current = self.focused_index(&rows).unwrap_or(0) as isize;
        let last = rows.len() as isize - 1;
        let next = (current + delta).clamp(0, last) as usize;
        self.focus = Some(rows[next].path.clone());
    }

    pub fn focus_first(&mut self) {
        self.focus = self.rows().into_iter().next().map(|r| r.path);
    }

    pub fn focus_last(&mut self) {
        self.focus = self.rows().pop().map(|r| r.path);
    }

    /// Open the focused branch, or step into its first child when already open.
    pub fn expand_focused(&mut self) {
        let Some(path) = self.focus.clone() else {
            return;
        };
        let Some(node) = self.catalog.get(&path) else {
            return;
        };
        if node.is_leaf() {
            return;
        }
        if !self.store.is_expanded(&path) {
            self.toggle(&path);
        } else if let Some(first) = node.children().first() {
            self.focus = Some(path.child(first.label()));
        }
    }

    /// Close the focused branch, or step out to its parent.
    pub fn collapse_focused(&mut self) {
        let Some(path) = self.focus.clone() else {
            return;
        };
        let is_open_branch = self.catalog.get(&path).is_some_and(CatalogNode::is_branch)
            && self.store.is_expanded(&path);
        if is_open_branch {
            self.toggle(&path);
        } else if let Some(parent) = path.parent() {
            self.focus = Some(parent);
        }
    }

    pub fn activate_focused(&mut self) -> Activation {
        match self.focus.clone() {
            Some(path) => self.activate(&path),
            None => Activation::Nothing,
        }
    }

    /// Toggle a header or hand back a link's URL. Hidden and unknown paths
    /// are ignored.
    pub fn activate(&mut self, path: &NodePath) -> Activation {
        if !self.focus(path) {
            return Activation::Nothing;
        }
        let url = self
            .catalog
            .get(path)
            .and_then(CatalogNode::url)
            .map(str::to_string);
        if let Some(url) = url {
            return Activation::Open(url);
        }
        self.toggle(path);
        Activation::Toggled {
            path: path.clone(),
            expanded: self.store.is_expanded(path),
        }
    }

    /// True when every ancestor of `path` is expanded.
    fn is_visible(&self, path: &NodePath) -> bool {
        let mut ancestor = path.parent();
        while let Some(p) = ancestor {
            if !self.store.is_expanded(&p) {
                return false;
            }
            ancestor = p.parent();
        }
        true
    }

    fn repair_focus(&mut self) {
        let Some(focus) = self.focus.clone() else {
            return;
        };
        let mut candidate = Some(focus);
        while let Some(path) = candidate {
            if self.is_visible(&path) {
                self.focus = Some(path);
                return;
            }
            candidate = path.parent();
        }
        self.focus_first();
    }
}
