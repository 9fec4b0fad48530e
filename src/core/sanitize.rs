// src/core/sanitize.rs

/// Collapse runs of whitespace (including NBSP) to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Whitespace-normalized, lower-cased text. Used for every header/label comparison.
pub fn lower_trim(s: &str) -> String {
    normalize_ws(s).to_lowercase()
}

/// Remove a trailing `( ... )` qualifier, e.g. `"Punching (Tendency)"` → `"Punching"`.
/// Only the last group is removed, and only when it closes the string.
pub fn strip_parenthetical(s: &str) -> String {
    let t = s.trim();
    if t.ends_with(')') {
        if let Some(open) = t.rfind('(') {
            if open > 0 {
                return t[..open].trim_end().to_string();
            }
        }
    }
    t.to_string()
}
