// src/specs/coerce.rs
//! Cell coercion with per-field fallbacks.
//!
//! | field      | on failure          |
//! |------------|---------------------|
//! | integer    | `0`                 |
//! | rating     | `0.0`               |
//! | season     | row dropped (`None`)|
//! | attribute  | key left unset      |

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::{
    AGGREGATE_MARKERS, ATTRIBUTE_MAX, ATTRIBUTE_MIN, RATING_PLACEHOLDERS, SEASON_PATTERN,
};

static SEASON_RE: LazyLock<Regex> = LazyLock::new(|| compile(SEASON_PATTERN));
static LEADING_INT_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[+-]?[0-9]+"));
static LEADING_FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)"));

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("built-in pattern {pattern:?} failed to compile: {e}"),
    }
}

/// Leading signed integer of the trimmed text (`"12 (3)"` → 12), if any.
pub fn leading_int(s: &str) -> Option<i32> {
    LEADING_INT_RE.find(s.trim()).and_then(|m| m.as_str().parse().ok())
}

/// Integer field: leading integer or `0`.
pub fn int_or_zero(s: &str) -> i32 {
    leading_int(s).unwrap_or(0)
}

/// Rating field. Placeholders (`-`, `-.--`) and junk become `0.0`; a decimal comma is accepted.
pub fn rating_or_zero(s: &str) -> f32 {
    let t = s.trim();
    if RATING_PLACEHOLDERS.contains(&t) {
        return 0.0;
    }
    let t = t.replace(',', ".");
    LEADING_FLOAT_RE
        .find(&t)
        .and_then(|m| m.as_str().parse::<f32>().ok())
        .unwrap_or(0.0)
}

/// `"2023-24"` → `Some("2023/24")`; anything not shaped like a season → `None`.
pub fn season(s: &str) -> Option<String> {
    let t = s.trim();
    if !SEASON_RE.is_match(t) {
        return None;
    }
    Some(t.replace('-', "/"))
}

/// Whether the row text signals a summary line such as "Career Total".
pub fn is_aggregate_row(row_text: &str) -> bool {
    let lc = row_text.to_lowercase();
    AGGREGATE_MARKERS.iter().any(|m| lc.contains(m))
}

/// Attribute rating, only if it parses and lies within 1..=20.
pub fn attribute_value(s: &str) -> Option<u8> {
    let v = leading_int(s)?;
    let v = u8::try_from(v).ok()?;
    (ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&v).then_some(v)
}
