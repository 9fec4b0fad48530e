// src/specs/name.rs
//! Player name from a profile export.
//!
//! Source precedence: first heading (`h1`, then `h2`, `h3`), unless it is empty
//! or a generic placeholder; otherwise `<title>` with a known suffix removed.

use scraper::Html;

use crate::config::consts::{HEADING_PLACEHOLDERS, HEADING_TAGS, TITLE_SUFFIXES};
use crate::core::html;
use crate::data::PlayerName;

pub fn extract_name(doc: &str) -> PlayerName {
    let doc = html::parse(doc);
    let full = from_heading(&doc)
        .or_else(|| from_title(&doc))
        .unwrap_or_default();
    split_name(&full)
}

/// One token: last name and display name. Several: first token is the first
/// name, the rest is the last name; the display name is the full string.
pub fn split_name(full: &str) -> PlayerName {
    let mut tokens = full.split_whitespace();
    let Some(first) = tokens.next() else {
        return PlayerName::default();
    };
    let rest: Vec<&str> = tokens.collect();
    if rest.is_empty() {
        return PlayerName {
            first_name: s!(),
            last_name: s!(first),
            known_as: s!(first),
        };
    }
    PlayerName {
        first_name: s!(first),
        last_name: rest.join(" "),
        known_as: format!("{} {}", first, rest.join(" ")),
    }
}

fn from_heading(doc: &Html) -> Option<String> {
    let heading = HEADING_TAGS.iter().find_map(|tag| html::first_text(doc, tag))?;
    let lc = heading.to_lowercase();
    if heading.is_empty() || HEADING_PLACEHOLDERS.iter().any(|p| lc.contains(p)) {
        logd!("Name: heading {:?} rejected, trying <title>", heading);
        return None;
    }
    Some(heading)
}

fn from_title(doc: &Html) -> Option<String> {
    let title = html::first_text(doc, "title")?;
    let lc = title.to_lowercase();
    let cut = TITLE_SUFFIXES
        .iter()
        .find(|sfx| lc.ends_with(*sfx))
        .map(|sfx| title.len().saturating_sub(sfx.len()))
        .unwrap_or(title.len());
    // lower-casing can change byte lengths for some scripts; fall back to the full title
    let name = title.get(..cut).unwrap_or(&title).trim();
    (!name.is_empty()).then(|| s!(name))
}
