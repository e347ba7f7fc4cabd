//! Resolves the configuration and catalog a command runs against.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::catalog::model::Catalog;
use crate::outline::browser::Browser;
use crate::parser::{self, config};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("built-in catalog"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub config: config::Config,
    pub catalog: Catalog,
    pub source: CatalogSource,
}

impl Session {
    /// `--catalog` wins over the config's `catalog` key; with neither, the
    /// built-in catalog is used.
    pub fn load(catalog_flag: Option<&Path>, config_flag: Option<&Path>) -> Result<Self> {
        let config = match config_flag {
            Some(path) => config::load(path)?,
            None => config::Config::default(),
        };

        let source = match catalog_flag.map(Path::to_path_buf).or(config.catalog.clone()) {
            Some(path) => CatalogSource::File(path),
            None => CatalogSource::Builtin,
        };
        let catalog = match &source {
            CatalogSource::Builtin => parser::catalog::builtin()?,
            CatalogSource::File(path) => parser::load_catalog(path)?,
        };

        let stats = catalog.stats();
        info!(
            source = %source,
            categories = stats.categories,
            links = stats.links,
            "catalog loaded"
        );

        Ok(Self {
            config,
            catalog,
            source,
        })
    }

    /// Heading shown by the interactive view and the HTML export.
    pub fn title(&self) -> String {
        match &self.source {
            CatalogSource::Builtin => "OSINT Framework".to_string(),
            CatalogSource::File(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "osintree".to_string()),
        }
    }

    pub fn into_browser(self) -> Browser {
        Browser::new(self.catalog, self.config.on_collapse, self.config.indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::state::CollapsePolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_to_builtin() {
        let session = Session::load(None, None).unwrap();
        assert_eq!(session.source, CatalogSource::Builtin);
        assert_eq!(session.catalog.categories.len(), 12);
        assert_eq!(session.title(), "OSINT Framework");
    }

    #[test]
    fn flag_overrides_config_catalog() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.tree"), "A\n  x -> https://a/\n").unwrap();
        fs::write(dir.path().join("b.tree"), "B\n  y -> https://b/\n").unwrap();
        let cfg = dir.path().join("osintree.conf");
        fs::write(&cfg, "catalog: a.tree\non_collapse: reset\n").unwrap();

        let from_config = Session::load(None, Some(&cfg)).unwrap();
        assert_eq!(from_config.catalog.categories[0].label(), "A");
        assert_eq!(from_config.config.on_collapse, CollapsePolicy::Reset);

        let flag = dir.path().join("b.tree");
        let from_flag = Session::load(Some(&flag), Some(&cfg)).unwrap();
        assert_eq!(from_flag.catalog.categories[0].label(), "B");
        assert_eq!(from_flag.title(), "b");
        assert_eq!(from_flag.source, CatalogSource::File(flag));
    }

    #[test]
    fn malformed_catalog_fails_before_rendering() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"Email": 1}"#).unwrap();
        assert!(Session::load(Some(&path), None).is_err());
    }
}
