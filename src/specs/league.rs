// src/specs/league.rs
//! League standings from a competition export.
//!
//! Values stay as extracted text; callers decide how to read "+12" or "1st".
//! A row needs a position starting with a digit and a non-empty points cell.

use crate::config::aliases::{LEAGUE_ALIASES, LeagueField as F};
use crate::core::html;
use crate::data::LeagueTableRow;
use crate::specs::headers::{ColumnMap, resolve};
use crate::specs::tables;

/// Extract the standings rows of the (last) league table, in document order.
pub fn extract_league_table(doc: &str) -> Vec<LeagueTableRow> {
    let doc = html::parse(doc);
    let Some(table) = tables::locate(&doc).league else {
        logd!("League: no table with team/pld/pts header");
        return Vec::new();
    };

    let headers = tables::header_texts(table);
    let Some(cols) = resolve(&headers, LEAGUE_ALIASES) else {
        return Vec::new();
    };

    let rows: Vec<LeagueTableRow> = html::rows(table)
        .into_iter()
        .skip(1)
        .filter_map(|r| parse_row(&html::cell_texts(r), &cols))
        .collect();

    logd!("League: {} row(s)", rows.len());
    rows
}

pub fn parse_row(cells: &[String], cols: &ColumnMap<F>) -> Option<LeagueTableRow> {
    let pos = cols.cell(cells, F::Pos);
    let pts = cols.cell(cells, F::Pts);
    if !pos.starts_with(|c: char| c.is_ascii_digit()) || pts.is_empty() {
        return None;
    }

    let text = |f: F| s!(cols.cell(cells, f));
    Some(LeagueTableRow {
        pos: s!(pos),
        inf: text(F::Inf),
        team: text(F::Team),
        played: text(F::Played),
        won: text(F::Won),
        drawn: text(F::Drawn),
        lost: text(F::Lost),
        goals_for: text(F::For),
        goals_against: text(F::Against),
        goal_diff: text(F::GoalDiff),
        pts: s!(pts),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standings() {
        let doc = r#"
            <table>
              <thead><tr><th>Pos</th><th>Inf</th><th>Team</th><th>Pld</th><th>Won</th><th>Drn</th>
                         <th>Lst</th><th>For</th><th>Ag</th><th>GD</th><th>Pts</th></tr></thead>
              <tbody>
                <tr><td>1st</td><td>C</td><td>Hull City</td><td>46</td><td>30</td><td>10</td>
                    <td>6</td><td>88</td><td>40</td><td>+48</td><td>100</td></tr>
                <tr><td>2nd</td><td></td><td>Leeds</td><td>46</td><td>28</td><td>9</td>
                    <td>9</td><td>80</td><td>45</td><td>+35</td><td>93</td></tr>
                <tr><td colspan="11">Promotion play-offs</td></tr>
              </tbody>
            </table>
        "#;
        let rows = extract_league_table(doc);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].pos, "1st");
        assert_eq!(rows[0].inf, "C");
        assert_eq!(rows[0].team, "Hull City");
        assert_eq!(rows[0].goals_against, "40");
        assert_eq!(rows[0].goal_diff, "+48");
        assert_eq!(rows[1].inf, "");
        assert_eq!(rows[0].pts, "100");
        assert_eq!(rows[1].team, "Leeds");
    }

    #[test]
    fn missing_pts_header_yields_nothing() {
        let cols = resolve(&[s!("pos"), s!("team"), s!("pld")], LEAGUE_ALIASES);
        assert!(cols.is_none());
    }

    #[test]
    fn rows_need_numeric_position_and_points() {
        let cols = resolve(&[s!("pos"), s!("team"), s!("pts")], LEAGUE_ALIASES).unwrap();
        let row = |a: &str, b: &str, c: &str| vec![s!(a), s!(b), s!(c)];
        assert!(parse_row(&row("3", "Hull", "50"), &cols).is_some());
        assert!(parse_row(&row("-", "Hull", "50"), &cols).is_none());
        assert!(parse_row(&row("3", "Hull", ""), &cols).is_none());
    }
}
