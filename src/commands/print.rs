//! `osintree print`: print the outline as text.

use anyhow::Result;

use crate::outline::engine::{self, Row, RowKind};
use crate::outline::state::{DisplayMode, ExpansionStore};
use crate::session::Session;

pub fn run(session: &Session, all: bool) -> Result<()> {
    if session.catalog.is_empty() {
        println!("  Catalog is empty.");
        return Ok(());
    }

    let indent = session.config.indent;
    let rows = if all {
        engine::render_all(&session.catalog, DisplayMode::default(), indent)
    } else {
        engine::render(
            &session.catalog,
            &ExpansionStore::default(),
            DisplayMode::default(),
            indent,
        )
    };

    for line in outline_lines(&rows) {
        println!("{}", line);
    }
    Ok(())
}

fn outline_lines(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let pad = " ".repeat(row.indent);
            match &row.kind {
                RowKind::Header { .. } => {
                    let glyph = row.indicator().unwrap_or_default();
                    format!("{pad}{glyph} {}", row.label)
                }
                RowKind::Link { url } => format!("{pad}{}  <{}>", row.label, url),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::{Catalog, CatalogNode};

    fn social() -> Catalog {
        Catalog::new(vec![
            CatalogNode::branch(
                "Email",
                vec![CatalogNode::leaf("Hunter.io", "https://hunter.io/")],
            ),
            CatalogNode::branch(
                "Social Networks",
                vec![CatalogNode::branch(
                    "Facebook",
                    vec![CatalogNode::leaf(
                        "Facebook Search",
                        "https://www.facebook.com/",
                    )],
                )],
            ),
        ])
    }

    #[test]
    fn initial_outline_matches_default_state() {
        let rows = engine::render(
            &social(),
            &ExpansionStore::default(),
            DisplayMode::Light,
            2,
        );
        assert_eq!(
            outline_lines(&rows),
            vec![
                "▼ Email".to_string(),
                "  Hunter.io  <https://hunter.io/>".to_string(),
                "▼ Social Networks".to_string(),
                "  ▶ Facebook".to_string(),
            ]
        );
    }

    #[test]
    fn full_outline_opens_everything() {
        let rows = engine::render_all(&social(), DisplayMode::Light, 2);
        let lines = outline_lines(&rows);
        assert_eq!(lines[3], "  ▼ Facebook");
        assert_eq!(lines[4], "    Facebook Search  <https://www.facebook.com/>");
    }
}
