//! Render state owned outside the catalog: per-branch Expanded flags and the
//! process-wide display mode.

use std::collections::HashMap;

use crate::catalog::model::NodePath;

/// Light or dark styling. Starts light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// What happens to descendant state when a branch collapses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollapsePolicy {
    /// Descendants keep their flags; re-expanding shows them as they were.
    #[default]
    Keep,
    /// Descendant flags are dropped and fall back to their level defaults.
    Reset,
}

impl CollapsePolicy {
    pub fn label(self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::Reset => "reset",
        }
    }
}

/// Expanded flag a branch starts with: top-level categories open, the rest closed.
pub fn default_expanded(level: usize) -> bool {
    level == 0
}

/// Expanded flags keyed by node path.
///
/// A path with no entry reads as its level default. An entry is written the
/// first time the branch is toggled and is authoritative from then on.
#[derive(Debug, Clone, Default)]
pub struct ExpansionStore {
    states: HashMap<NodePath, bool>,
    policy: CollapsePolicy,
}

impl ExpansionStore {
    pub fn new(policy: CollapsePolicy) -> Self {
        Self {
            states: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> CollapsePolicy {
        self.policy
    }

    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.states
            .get(path)
            .copied()
            .unwrap_or_else(|| default_expanded(path.level()))
    }

    pub fn set(&mut self, path: &NodePath, expanded: bool) {
        if !expanded && self.policy == CollapsePolicy::Reset {
            self.states.retain(|p, _| !p.is_descendant_of(path));
        }
        self.states.insert(path.clone(), expanded);
    }

    /// Flip one branch and return its new value.
    pub fn toggle(&mut self, path: &NodePath) -> bool {
        let next = !self.is_expanded(path);
        self.set(path, next);
        next
    }

    /// Number of explicitly stored flags.
    pub fn stored(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_level() {
        let store = ExpansionStore::default();
        assert!(store.is_expanded(&NodePath::root("Email")));
        assert!(!store.is_expanded(&NodePath::from_labels(["Social Networks", "Facebook"])));
        assert_eq!(store.stored(), 0);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut store = ExpansionStore::default();
        let path = NodePath::from_labels(["Social Networks", "Facebook"]);
        assert!(store.toggle(&path));
        assert!(!store.toggle(&path));
        assert!(!store.is_expanded(&path));
    }

    #[test]
    fn keep_policy_preserves_descendants() {
        let mut store = ExpansionStore::new(CollapsePolicy::Keep);
        let root = NodePath::root("Social Networks");
        let child = root.child("Facebook");
        store.toggle(&child);
        store.toggle(&root);
        store.toggle(&root);
        assert!(store.is_expanded(&child));
    }

    #[test]
    fn reset_policy_drops_descendants_only() {
        let mut store = ExpansionStore::new(CollapsePolicy::Reset);
        let root = NodePath::root("Social Networks");
        let child = root.child("Facebook");
        let sibling = NodePath::root("Email");
        store.toggle(&child);
        store.toggle(&sibling);
        store.toggle(&root);
        assert!(!store.is_expanded(&root));
        assert!(!store.is_expanded(&sibling));
        store.toggle(&root);
        assert!(!store.is_expanded(&child), "child falls back to its default");
    }

    #[test]
    fn display_mode_round_trip() {
        let mode = DisplayMode::default();
        assert_eq!(mode, DisplayMode::Light);
        assert!(mode.toggled().is_dark());
        assert_eq!(mode.toggled().toggled(), mode);
    }
}
