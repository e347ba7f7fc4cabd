use std::fmt;

/// A link to an external resource. The URL is opaque and never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// A labelled group of child nodes, kept in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub label: String,
    pub children: Vec<CatalogNode>,
}

/// One element of the catalog tree.
///
/// The variant is fixed when the catalog is loaded: a string value becomes a
/// `Leaf`, a mapping becomes a `Branch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNode {
    Leaf(Link),
    Branch(Branch),
}

impl CatalogNode {
    pub fn leaf(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Leaf(Link {
            label: label.into(),
            url: url.into(),
        })
    }

    pub fn branch(label: impl Into<String>, children: Vec<CatalogNode>) -> Self {
        Self::Branch(Branch {
            label: label.into(),
            children,
        })
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Leaf(link) => &link.label,
            Self::Branch(branch) => &branch.label,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }

    /// Children in display order. Empty for leaves.
    pub fn children(&self) -> &[CatalogNode] {
        match self {
            Self::Leaf(_) => &[],
            Self::Branch(branch) => &branch.children,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Leaf(link) => Some(&link.url),
            Self::Branch(_) => None,
        }
    }

    /// Find a direct child by label.
    pub fn child(&self, label: &str) -> Option<&CatalogNode> {
        self.children().iter().find(|c| c.label() == label)
    }
}

/// Identity of a node: the labels from its top-level category down to itself.
///
/// Labels are unique among siblings, so a path names at most one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<String>);

impl NodePath {
    pub fn root(label: impl Into<String>) -> Self {
        Self(vec![label.into()])
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    pub fn child(&self, label: impl Into<String>) -> Self {
        let mut labels = self.0.clone();
        labels.push(label.into());
        Self(labels)
    }

    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Depth of the node; top-level categories are level 0.
    pub fn level(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    /// True when `self` lies strictly below `ancestor`.
    pub fn is_descendant_of(&self, ancestor: &NodePath) -> bool {
        self.0.len() > ancestor.0.len() && self.0.starts_with(&ancestor.0)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" / "))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub categories: usize,
    pub branches: usize,
    pub links: usize,
    /// Deepest level present; a lone top-level category has depth 0.
    pub max_depth: usize,
}

/// The whole resource tree, in category order. Immutable once loaded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub categories: Vec<CatalogNode>,
}

impl Catalog {
    pub fn new(categories: Vec<CatalogNode>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Resolve a path to its node.
    pub fn get(&self, path: &NodePath) -> Option<&CatalogNode> {
        let (first, rest) = path.labels().split_first()?;
        let mut node = self.categories.iter().find(|c| c.label() == first)?;
        for label in rest {
            node = node.child(label)?;
        }
        Some(node)
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            categories: self.categories.len(),
            ..CatalogStats::default()
        };
        for node in &self.categories {
            tally(node, 0, &mut stats);
        }
        stats
    }
}

fn tally(node: &CatalogNode, level: usize, stats: &mut CatalogStats) {
    stats.max_depth = stats.max_depth.max(level);
    match node {
        CatalogNode::Leaf(_) => stats.links += 1,
        CatalogNode::Branch(branch) => {
            stats.branches += 1;
            for child in &branch.children {
                tally(child, level + 1, stats);
            }
        }
    }
}
