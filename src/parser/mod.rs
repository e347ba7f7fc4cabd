pub mod catalog;
pub mod config;
pub mod outline;

use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::model::Catalog;

/// Load a catalog file, choosing the format by extension: `.json` is JSON,
/// anything else is the indented outline format.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        catalog::parse(&content)
    } else {
        outline::parse(&content)
    };
    parsed.with_context(|| format!("invalid catalog {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn picks_format_by_extension() {
        let dir = TempDir::new().unwrap();
        let json = dir.path().join("links.JSON");
        let tree = dir.path().join("links.tree");
        fs::write(&json, r#"{"Email": {"Hunter.io": "https://hunter.io/"}}"#).unwrap();
        fs::write(&tree, "Email\n  Hunter.io -> https://hunter.io/\n").unwrap();
        assert_eq!(load_catalog(&json).unwrap(), load_catalog(&tree).unwrap());
    }

    #[test]
    fn errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.tree");
        fs::write(&path, "Email\n  A -> x\n  A -> y\n").unwrap();
        let err = load_catalog(&path).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("broken.tree"), "{msg}");
        assert!(msg.contains("line 3: duplicate label 'A'"), "{msg}");
    }
}
