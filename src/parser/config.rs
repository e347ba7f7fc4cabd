//! Parser for the optional `key: value` configuration file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::outline::state::CollapsePolicy;

pub const DEFAULT_INDENT: usize = 2;
const MAX_INDENT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog file; `None` uses the built-in catalog.
    pub catalog: Option<PathBuf>,
    /// Columns per outline level in the terminal view.
    pub indent: usize,
    /// Command used to open links; `None` falls back to `$BROWSER` or the platform opener.
    pub opener: Option<String>,
    pub on_collapse: CollapsePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            indent: DEFAULT_INDENT,
            opener: None,
            on_collapse: CollapsePolicy::Keep,
        }
    }
}

pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let mut config =
        parse(&content).with_context(|| format!("invalid config {}", path.display()))?;

    // Relative catalog paths are taken from the config file's directory.
    if let (Some(catalog), Some(dir)) = (config.catalog.as_mut(), path.parent()) {
        if catalog.is_relative() {
            *catalog = dir.join(&*catalog);
        }
    }
    Ok(config)
}

pub fn parse(input: &str) -> Result<Config> {
    let mut config = Config::default();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once(':') else {
            bail!("line {}: expected `key: value`", line);
        };
        let value = value.trim();

        match key.trim() {
            "catalog" => config.catalog = (!value.is_empty()).then(|| PathBuf::from(value)),
            "indent" => {
                let indent: usize = value
                    .parse()
                    .with_context(|| format!("line {}: indent must be a number", line))?;
                if !(1..=MAX_INDENT).contains(&indent) {
                    bail!("line {}: indent must be between 1 and {}", line, MAX_INDENT);
                }
                config.indent = indent;
            }
            "opener" => config.opener = (!value.is_empty()).then(|| value.to_string()),
            "on_collapse" => {
                config.on_collapse = match value {
                    "keep" => CollapsePolicy::Keep,
                    "reset" => CollapsePolicy::Reset,
                    other => bail!(
                        "line {}: on_collapse must be `keep` or `reset`, got {:?}",
                        line,
                        other
                    ),
                }
            }
            other => bail!("line {}: unknown key {:?}", line, other),
        }
    }

    Ok(config)
}
