pub mod html;

use anyhow::Result;
use clap::ValueEnum;

use crate::catalog::model::Catalog;
use crate::parser;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Self-contained web page
    #[default]
    Html,
    /// Catalog JSON
    Json,
    /// Indented outline text
    Tree,
}

pub fn render(catalog: &Catalog, format: ExportFormat, title: &str) -> Result<String> {
    match format {
        ExportFormat::Html => Ok(html::render_page(catalog, title)),
        ExportFormat::Json => parser::catalog::to_json(catalog),
        ExportFormat::Tree => parser::outline::serialize(catalog),
    }
}
