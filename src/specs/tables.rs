// src/specs/tables.rs
//! Table classification for profile and standings exports.
//!
//! Three kinds matter:
//! - **attribute sections**: first header cell is exactly `technical`, `mental`,
//!   `physical` or `goalkeeping` (case-insensitive). All of them are kept.
//! - **history**: first row mentions `season`, `club` and `apps`.
//! - **league**: first row mentions `team`, `pld` and `pts`.
//!
//! For history and league the scan runs over every table in document order and
//! each match replaces the previous one, so the *last* qualifying table is used.

use scraper::{ElementRef, Html};

use crate::config::consts::{ATTRIBUTE_SECTIONS, GOALKEEPING_SECTION, HISTORY_KEYWORDS, LEAGUE_KEYWORDS};
use crate::core::html;
use crate::core::sanitize::lower_trim;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    /// Attribute section, carrying its lower-cased section name.
    Attributes(&'static str),
    History,
    League,
}

/// Classification of a whole document.
#[derive(Debug, Default)]
pub struct Located<'a> {
    pub attribute_sections: Vec<(&'static str, ElementRef<'a>)>,
    pub history: Option<ElementRef<'a>>,
    pub league: Option<ElementRef<'a>>,
}

impl Located<'_> {
    pub fn has_goalkeeping(&self) -> bool {
        self.attribute_sections.iter().any(|(name, _)| *name == GOALKEEPING_SECTION)
    }
}

/// Classify one table, or `None` if it is none of the known kinds.
pub fn classify(table: ElementRef<'_>) -> Option<TableKind> {
    if let Some(section) = attribute_section(table) {
        return Some(TableKind::Attributes(section));
    }

    let rows = html::rows(table);
    let first = lower_trim(&html::row_text(*rows.first()?));

    if HISTORY_KEYWORDS.iter().all(|k| first.contains(k)) {
        Some(TableKind::History)
    } else if LEAGUE_KEYWORDS.iter().all(|k| first.contains(k)) {
        Some(TableKind::League)
    } else {
        None
    }
}

/// Walk every table of the document once.
pub fn locate(doc: &Html) -> Located<'_> {
    let mut out = Located::default();
    for table in html::tables(doc) {
        match classify(table) {
            Some(TableKind::Attributes(name)) => out.attribute_sections.push((name, table)),
            Some(TableKind::History) => out.history = Some(table),
            Some(TableKind::League) => out.league = Some(table),
            None => {}
        }
    }
    logd!(
        "Tables: {} attribute section(s), history={}, league={}",
        out.attribute_sections.len(),
        out.history.is_some(),
        out.league.is_some()
    );
    out
}

/// Lower-cased, trimmed header texts of the table's first row.
pub fn header_texts(table: ElementRef<'_>) -> Vec<String> {
    html::rows(table)
        .first()
        .map(|r| html::cell_texts(*r).iter().map(|t| lower_trim(t)).collect())
        .unwrap_or_default()
}

/// Section name if the first header cell names an attribute group.
/// Falls back to the first row's first cell when the table has no `<th>`.
fn attribute_section(table: ElementRef<'_>) -> Option<&'static str> {
    let first_header = html::rows(table)
        .into_iter()
        .flat_map(html::cells)
        .find(|c| c.value().name() == "th")
        .or_else(|| html::rows(table).first().and_then(|r| html::cells(*r).into_iter().next()))?;

    let label = lower_trim(&html::text(first_header));
    ATTRIBUTE_SECTIONS.iter().copied().find(|s| *s == label)
}
