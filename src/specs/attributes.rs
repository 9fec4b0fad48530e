// src/specs/attributes.rs
//! Attribute ratings from a player profile export.
//!
//! Labels are looked up verbatim (lower-cased) in a table built once from the
//! display taxonomy; the camel-case fold only runs while building that table.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use scraper::ElementRef;

use crate::config::taxonomy;
use crate::core::html;
use crate::core::sanitize::{lower_trim, strip_parenthetical};
use crate::data::{AttributeProfile, AttributeSet};
use crate::specs::coerce::attribute_value;
use crate::specs::tables;

/// Lower-cased display label → canonical key.
#[derive(Debug)]
pub struct AttributeNames {
    by_label: HashMap<String, String>,
}

static NAMES: LazyLock<AttributeNames> =
    LazyLock::new(|| AttributeNames::from_groups(&taxonomy::all_groups()));

impl AttributeNames {
    /// The shared table built from the built-in taxonomy.
    pub fn global() -> &'static AttributeNames {
        &NAMES
    }

    /// Build from label groups. The first label folding to a key claims it;
    /// later labels with the same key are dropped.
    pub fn from_groups(groups: &[&[&str]]) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut by_label = HashMap::new();

        for label in groups.iter().flat_map(|g| g.iter()) {
            let key = canonical_key(label);
            if !seen.insert(key.clone()) {
                continue;
            }
            let original = lower_trim(label);
            let bare = lower_trim(&strip_parenthetical(label));
            if bare != original {
                by_label.insert(bare, key.clone());
            }
            by_label.insert(original, key);
        }
        Self { by_label }
    }

    /// Canonical key for a label as it appears in a document.
    pub fn lookup(&self, label: &str) -> Option<&str> {
        self.by_label.get(&lower_trim(label)).map(String::as_str)
    }

    /// Every canonical key, deduplicated.
    pub fn keys(&self) -> HashSet<&str> {
        self.by_label.values().map(String::as_str).collect()
    }
}

/// `"First Touch"` → `"firstTouch"`, `"Punching (Tendency)"` → `"punching"`.
pub fn canonical_key(label: &str) -> String {
    let bare = strip_parenthetical(label);
    let mut out = s!();
    for (i, word) in bare
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Extract attribute ratings and the goalkeeper flag from profile HTML.
pub fn extract_attributes(doc: &str) -> AttributeProfile {
    extract_attributes_with(doc, AttributeNames::global())
}

pub fn extract_attributes_with(doc: &str, names: &AttributeNames) -> AttributeProfile {
    let doc = html::parse(doc);
    let located = tables::locate(&doc);

    let mut attributes = AttributeSet::new();
    for (section, table) in &located.attribute_sections {
        let before = attributes.len();
        read_section(*table, names, &mut attributes);
        logd!("Attributes: section '{}' gave {} value(s)", section, attributes.len() - before);
    }

    AttributeProfile {
        attributes,
        is_goalkeeper: located.has_goalkeeping(),
    }
}

/// Rows hold `label, value` pairs; a row may carry several pairs side by side.
fn read_section(table: ElementRef<'_>, names: &AttributeNames, out: &mut AttributeSet) {
    for row in html::rows(table) {
        let cells = html::cell_texts(row);
        for pair in cells.chunks(2) {
            let [label, value] = pair else { continue };
            let Some(key) = names.lookup(label) else { continue };
            if let Some(v) = attribute_value(value) {
                out.insert(key, v);
            }
        }
    }
}
