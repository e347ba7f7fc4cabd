//! `osintree check`: load the catalog and report what it contains.

use anyhow::Result;

use crate::catalog::model::CatalogStats;
use crate::session::Session;

pub fn run(session: &Session) -> Result<()> {
    for line in summary_lines(&session.source.to_string(), session.catalog.stats()) {
        println!("  {}", line);
    }
    Ok(())
}

fn summary_lines(source: &str, stats: CatalogStats) -> Vec<String> {
    vec![
        format!("{source}: ok"),
        format!("categories: {}", stats.categories),
        format!("groups:     {}", stats.branches),
        format!("links:      {}", stats.links),
        format!("max depth:  {}", stats.max_depth),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_counts() {
        let stats = CatalogStats {
            categories: 2,
            branches: 3,
            links: 4,
            max_depth: 2,
        };
        let lines = summary_lines("built-in catalog", stats);
        assert_eq!(lines[0], "built-in catalog: ok");
        assert_eq!(lines[3], "links:      4");
    }
}
