//! `osintree export`: write the catalog as HTML, JSON or outline text.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::export::{self, ExportFormat};
use crate::session::Session;

pub fn run(session: &Session, output: &Path, format: ExportFormat) -> Result<()> {
    let content = export::render(&session.catalog, format, &session.title())?;
    std::fs::write(output, content)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(output = %output.display(), ?format, "exported catalog");
    println!("  Wrote {}", output.display());
    Ok(())
}
