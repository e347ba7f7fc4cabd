//! Static HTML rendition of the catalog.
//!
//! Branches become `<details>` elements (open at level 0), so every branch
//! keeps its own expand state in the browser without script. Links open in a
//! new browsing context with `rel="noopener noreferrer"`. One button flips a
//! `dark` class on `<body>`.

use std::fmt::Write;

use crate::catalog::model::{Catalog, CatalogNode};
use crate::outline::state::default_expanded;

/// Pixels of left padding per outline level.
pub const INDENT_PX: usize = 24;

const STYLE: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; background: #ffffff; color: #111827; }
body.dark { background: #111827; color: #f3f4f6; }
main { max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; }
h1, h2 { text-align: center; }
.panel { padding: 1rem 1.5rem; border-radius: 0.5rem; margin-bottom: 2rem; background: #f9fafb; }
body.dark .panel { background: #1f2937; }
.tree { font-family: ui-monospace, monospace; }
summary { list-style: none; cursor: pointer; user-select: none; padding: 0.5rem 0; }
summary::-webkit-details-marker { display: none; }
summary::before { content: \"\\25B6\"; margin-right: 0.5rem; }
details[open] > summary::before { content: \"\\25BC\"; }
summary.category { font-weight: 700; font-size: 1.125rem; }
summary.group { font-weight: 500; }
summary:hover { background: #f3f4f6; }
body.dark summary:hover { background: #374151; }
.notes { margin-bottom: 2rem; }
.notes a { color: #2563eb; text-decoration: underline; }
body.dark .notes a { color: #60a5fa; }
.link { padding: 0.25rem 0; }
.link a { color: #2563eb; text-decoration: none; }
.link a:hover { color: #1e40af; text-decoration: underline; }
body.dark .link a { color: #60a5fa; }
body.dark .link a:hover { color: #93c5fd; }
button { padding: 0.5rem 1rem; border: 0; border-radius: 0.25rem; background: #e5e7eb; color: #111827; cursor: pointer; }
body.dark button { background: #374151; color: #f3f4f6; }
";

/// Render a complete, self-contained HTML page.
pub fn render_page(catalog: &Catalog, title: &str) -> String {
    let title = escape(title);
    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n<main>\n\
         <h1>{title}</h1>\n"
    );
    out.push_str(
        "<div class=\"panel\">\n<p>\
         <strong>(T)</strong> - Indicates a link to a tool that must be installed and run locally \
         <strong>(D)</strong> - Google Dork, for more information: \
         <a href=\"https://en.wikipedia.org/wiki/Google_hacking\" target=\"_blank\" rel=\"noopener noreferrer\">Google Hacking</a> \
         <strong>(R)</strong> - Requires registration<br>\
         <strong>(M)</strong> - Indicates a URL that contains the search term and the URL itself must be edited manually\
         </p>\n\
         <button type=\"button\" onclick=\"document.body.classList.toggle('dark')\">Toggle dark mode</button>\n\
         </div>\n",
    );
    let _ = writeln!(out, "<div class=\"panel\">\n<h2>{title}</h2>\n<div class=\"tree\">");
    out.push_str(&render_tree(catalog));
    out.push_str("</div>\n</div>\n");
    out.push_str(FOOTER);
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

const FOOTER: &str = "\
<section class=\"notes\">
<h3>Notes</h3>
<p>OSINT framework focused on gathering information from free tools or resources. \
The intention is to help people find free OSINT resources. Some of the sites included \
might require registration or offer more data for $$$, but you should be able to get \
at least a portion of the available information for no cost.</p>
<p>I originally created this framework with an information security point of view. \
Since then, the response from other fields and disciplines has been incredible. \
I would love to be able to include any other OSINT resources, especially from fields \
outside of infosec. Please let me know about anything that might be missing!</p>
</section>
<section class=\"notes\">
<h3>For Update Notifications</h3>
<p>Follow me on Github: \
<a href=\"https://github.com/YasinIsBad\" target=\"_blank\" rel=\"noopener noreferrer\">@YasinIsBad</a><br>
Watch or star the project on Github: \
<a href=\"https://github.com/lockfale/osint-framework\" target=\"_blank\" rel=\"noopener noreferrer\">\
https://github.com/YasinIsBad/osint-framework</a></p>
</section>
<section class=\"notes\">
<h3>Suggestions, Comments, Feedback</h3>
<p>Feedback or new tool suggestions are extremely welcome! Please feel free to reach out \
on Twitter or submit an issue on Github.</p>
</section>
";

/// Render only the outline markup.
pub fn render_tree(catalog: &Catalog) -> String {
    let mut out = String::new();
    for category in &catalog.categories {
        write_node(&mut out, category, 0);
    }
    out
}

fn write_node(out: &mut String, node: &CatalogNode, level: usize) {
    let pad = level * INDENT_PX;
    match node {
        CatalogNode::Leaf(link) => {
            let _ = writeln!(
                out,
                "<div class=\"link\" style=\"padding-left: {pad}px\">\
                 <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></div>",
                escape(&link.url),
                escape(&link.label)
            );
        }
        CatalogNode::Branch(branch) => {
            let open = if default_expanded(level) { " open" } else { "" };
            let class = if level == 0 { "category" } else { "group" };
            let _ = writeln!(
                out,
                "<details{open}><summary class=\"{class}\" style=\"padding-left: {pad}px\">{}</summary>",
                escape(&branch.label)
            );
            for child in &branch.children {
                write_node(out, child, level + 1);
            }
            out.push_str("</details>\n");
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn social() -> Catalog {
        Catalog::new(vec![CatalogNode::branch(
            "Social Networks",
            vec![CatalogNode::branch(
                "Facebook",
                vec![CatalogNode::leaf(
                    "Facebook Search",
                    "https://www.facebook.com/",
                )],
            )],
        )])
    }

    #[test]
    fn categories_open_and_groups_closed() {
        let html = render_tree(&social());
        assert!(html.starts_with(
            "<details open><summary class=\"category\" style=\"padding-left: 0px\">Social Networks</summary>"
        ));
        assert!(html.contains(
            "<details><summary class=\"group\" style=\"padding-left: 24px\">Facebook</summary>"
        ));
    }

    #[test]
    fn links_are_isolated() {
        let html = render_tree(&social());
        assert!(html.contains(
            "<div class=\"link\" style=\"padding-left: 48px\"><a href=\"https://www.facebook.com/\" \
             target=\"_blank\" rel=\"noopener noreferrer\">Facebook Search</a></div>"
        ));
    }

    #[test]
    fn every_anchor_in_page_is_isolated() {
        let page = render_page(&social(), "OSINT Framework");
        let anchors = page.matches("<a ").count();
        // legend, one catalog link, two footer links
        assert_eq!(anchors, 4);
        assert!(page.contains("href=\"https://github.com/YasinIsBad\""));
        assert!(page.contains("href=\"https://github.com/lockfale/osint-framework\""));
        assert_eq!(page.matches("rel=\"noopener noreferrer\"").count(), anchors);
        assert_eq!(page.matches("target=\"_blank\"").count(), anchors);
    }

    #[test]
    fn labels_and_urls_are_escaped() {
        let catalog = Catalog::new(vec![CatalogNode::branch(
            "<script>",
            vec![CatalogNode::leaf("A & B", "https://x/?a=1&b=\"2\"")],
        )]);
        let html = render_tree(&catalog);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(html.contains("href=\"https://x/?a=1&amp;b=&quot;2&quot;\""));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn page_has_dark_mode_toggle() {
        let page = render_page(&social(), "OSINT Framework");
        assert!(page.contains("classList.toggle('dark')"));
        assert!(page.contains("<title>OSINT Framework</title>"));
        for heading in [
            "<h3>Notes</h3>",
            "<h3>For Update Notifications</h3>",
            "<h3>Suggestions, Comments, Feedback</h3>",
        ] {
            assert!(page.contains(heading), "{heading}");
        }
        assert!(page.find("<div class=\"tree\">").unwrap() < page.find("<h3>Notes</h3>").unwrap());
        assert!(page.trim_end().ends_with("</html>"));
    }
}
