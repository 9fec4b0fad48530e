// src/core/html.rs
//! Element-tree helpers over `scraper`.
//!
//! Export documents come from several app versions, so nothing here relies on
//! classes or ids: tables are walked structurally (`table > [thead|tbody|tfoot] > tr > td|th`)
//! and every text read goes through `normalize_ws`.

use scraper::{ElementRef, Html};

use super::sanitize::normalize_ws;

/// Parse an HTML document. The HTML5 tree builder recovers from any input,
/// so this never fails.
pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

/// All descendants of `root` (including `root`) with the given tag name, in document order.
pub fn elements<'a>(root: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == tag)
}

/// Every `<table>` in the document, nested ones included.
pub fn tables(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> + '_ {
    elements(doc.root_element(), "table")
}

/// Rows belonging to this table only (rows of nested tables are not included).
pub fn rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut out = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => out.push(child),
            "thead" | "tbody" | "tfoot" => {
                out.extend(
                    child.children()
                        .filter_map(ElementRef::wrap)
                        .filter(|el| el.value().name() == "tr"),
                );
            }
            _ => {}
        }
    }
    out
}

/// `<td>`/`<th>` cells of a row.
pub fn cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .collect()
}

/// Visible text of an element, whitespace-normalized.
pub fn text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Normalized text of each cell of a row.
pub fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
    cells(row).into_iter().map(text).collect()
}

/// Text of a row's cells joined by single spaces.
pub fn row_text(row: ElementRef<'_>) -> String {
    cell_texts(row).join(" ")
}

/// Text of the first element with this tag name, if any.
pub fn first_text(doc: &Html, tag: &str) -> Option<String> {
    elements(doc.root_element(), tag).next().map(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_skip_nested_tables() {
        let doc = parse(r#"
            <table>
              <tr><th>Outer</th></tr>
              <tr><td><table><tr><td>inner</td></tr></table></td></tr>
            </table>
        "#);
        let outer = tables(&doc).next().unwrap();
        assert_eq!(rows(outer).len(), 2);
        assert_eq!(tables(&doc).count(), 2);
    }

    #[test]
    fn cell_texts_normalize_whitespace_and_entities() {
        let doc = parse("<table><tr><td> First&nbsp;Touch </td><th>\n14\n</th></tr></table>");
        let t = tables(&doc).next().unwrap();
        let r = rows(t);
        assert_eq!(cell_texts(r[0]), vec!["First Touch", "14"]);
        assert_eq!(row_text(r[0]), "First Touch 14");
    }

    #[test]
    fn first_text_finds_heading() {
        let doc = parse("<html><body><p>x</p><h1> Jan  Kowalski </h1><h1>Other</h1></body></html>");
        assert_eq!(first_text(&doc, "h1").as_deref(), Some("Jan Kowalski"));
        assert_eq!(first_text(&doc, "h2"), None);
    }
}
