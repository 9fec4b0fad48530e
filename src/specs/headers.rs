// src/specs/headers.rs
//! Header alias resolution: literal header text → column index per field.

use crate::config::aliases::FieldAliases;

/// Resolved column positions for one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMap<F> {
    cols: Vec<(F, usize)>,
}

impl<F: Copy + PartialEq> ColumnMap<F> {
    pub fn get(&self, field: F) -> Option<usize> {
        self.cols.iter().find(|(f, _)| *f == field).map(|&(_, i)| i)
    }

    /// Cell text for `field`, or `""` when the column is unresolved or the row is short.
    pub fn cell<'r>(&self, row: &'r [String], field: F) -> &'r str {
        self.get(field)
            .and_then(|i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// First header containing any alias, aliases tried in priority order.
/// `headers` must already be lower-cased and trimmed.
pub fn resolve_field(headers: &[String], aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|h| h.contains(alias)))
}

/// Resolve every field of a table kind. `None` if any required field is missing.
pub fn resolve<F: Copy + PartialEq + std::fmt::Debug>(
    headers: &[String],
    table: &[FieldAliases<F>],
) -> Option<ColumnMap<F>> {
    let mut cols = Vec::with_capacity(table.len());
    for spec in table {
        match resolve_field(headers, spec.aliases) {
            Some(i) => cols.push((spec.field, i)),
            None if spec.required => {
                logd!("Headers: required field {:?} unresolved in {:?}", spec.field, headers);
                return None;
            }
            None => {}
        }
    }
    Some(ColumnMap { cols })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::aliases::{HISTORY_ALIASES, HistoryField, LEAGUE_ALIASES, LeagueField};

    fn hdrs(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn alias_priority_beats_column_order() {
        // "goals" is tried before "gls", so the later "goals" column wins over the earlier "gls".
        let h = hdrs(&["gls", "goals"]);
        assert_eq!(resolve_field(&h, &["goals", "gls"]), Some(1));
        assert_eq!(resolve_field(&h, &["assists"]), None);
    }

    #[test]
    fn substring_match_takes_first_column() {
        let h = hdrs(&["season", "club", "apps", "goals", "goals conceded"]);
        let map = resolve(&h, HISTORY_ALIASES).unwrap();
        assert_eq!(map.get(HistoryField::Goals), Some(3));
        assert_eq!(map.get(HistoryField::GoalsConceded), Some(4));
        assert_eq!(map.get(HistoryField::Rating), None);
    }

    #[test]
    fn missing_required_yields_none() {
        let h = hdrs(&["pos", "inf", "team", "pld", "won"]);
        assert!(resolve(&h, LEAGUE_ALIASES).is_none());

        let h = hdrs(&["pos", "team", "pts"]);
        let map = resolve(&h, LEAGUE_ALIASES).unwrap();
        assert_eq!(map.get(LeagueField::Pts), Some(2));
    }

    #[test]
    fn cell_tolerates_short_rows() {
        let h = hdrs(&["pos", "team", "pts"]);
        let map = resolve(&h, LEAGUE_ALIASES).unwrap();
        let row = hdrs(&["1", "Hull"]);
        assert_eq!(map.cell(&row, LeagueField::Team), "Hull");
        assert_eq!(map.cell(&row, LeagueField::Pts), "");
        assert_eq!(map.cell(&row, LeagueField::Won), "");
    }
}
