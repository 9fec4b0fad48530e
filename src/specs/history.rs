// src/specs/history.rs
//! Career history rows from a player profile export.
//!
//! Columns: Season, Club, League?, Apps, Goals, Assists, Clean sheets,
//! Goals conceded, Player of the match, Av rating. Only Season, Club and Apps
//! need to resolve; other counters default to 0.

use uuid::Uuid;

use crate::config::aliases::{HISTORY_ALIASES, HistoryField as F};
use crate::core::html;
use crate::data::SeasonStat;
use crate::specs::coerce::{int_or_zero, is_aggregate_row, rating_or_zero, season};
use crate::specs::headers::{ColumnMap, resolve};
use crate::specs::tables;

/// Extract every season row of the (last) history table, in document order.
pub fn extract_history(doc: &str) -> Vec<SeasonStat> {
    let doc = html::parse(doc);
    let Some(table) = tables::locate(&doc).history else {
        logd!("History: no table with season/club/apps header");
        return Vec::new();
    };

    let headers = tables::header_texts(table);
    let Some(cols) = resolve(&headers, HISTORY_ALIASES) else {
        return Vec::new();
    };

    let rows: Vec<SeasonStat> = html::rows(table)
        .into_iter()
        .skip(1)
        .filter_map(|r| parse_row(&html::cell_texts(r), &cols))
        .collect();

    logd!("History: {} season row(s)", rows.len());
    rows
}

/// One body row → `SeasonStat`, or `None` for totals and rows without a valid season.
pub fn parse_row(cells: &[String], cols: &ColumnMap<F>) -> Option<SeasonStat> {
    if is_aggregate_row(&cells.join(" ")) {
        return None;
    }
    let season = season(cols.cell(cells, F::Season))?;

    let league = Some(cols.cell(cells, F::League))
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Some(SeasonStat {
        id: Uuid::new_v4(),
        season,
        club: s!(cols.cell(cells, F::Club)),
        league,
        apps: int_or_zero(cols.cell(cells, F::Apps)),
        goals: int_or_zero(cols.cell(cells, F::Goals)),
        assists: int_or_zero(cols.cell(cells, F::Assists)),
        clean_sheets: int_or_zero(cols.cell(cells, F::CleanSheets)),
        goals_conceded: int_or_zero(cols.cell(cells, F::GoalsConceded)),
        player_of_match: int_or_zero(cols.cell(cells, F::PlayerOfMatch)),
        av_rating: rating_or_zero(cols.cell(cells, F::Rating)),
        honours: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <html><body>
          <table>
            <tr><th>Season</th><th>Club</th><th>Division</th><th>Apps</th><th>Gls</th><th>Ast</th><th>Av Rat</th></tr>
            <tr><td>2023-24</td><td>Hull City</td><td>Sky Bet Championship</td><td>38 (4)</td><td>11</td><td>5</td><td>7.02</td></tr>
            <tr><td>2022/23</td><td>Grimsby</td><td></td><td>20</td><td>-</td><td>2</td><td>-.--</td></tr>
            <tr><td>abc</td><td>Nowhere</td><td></td><td>1</td><td>1</td><td>1</td><td>6.0</td></tr>
            <tr><td>Career Total</td><td></td><td></td><td>58</td><td>11</td><td>7</td><td>6.9</td></tr>
          </table>
        </body></html>
    "#;

    #[test]
    fn parses_rows_and_applies_fallbacks() {
        let rows = extract_history(DOC);
        assert_eq!(rows.len(), 2);

        let r = &rows[0];
        assert_eq!(r.season, "2023/24");
        assert_eq!(r.club, "Hull City");
        assert_eq!(r.league.as_deref(), Some("Sky Bet Championship"));
        assert_eq!(r.apps, 38);
        assert_eq!(r.goals, 11);
        assert_eq!(r.assists, 5);
        assert_eq!(r.av_rating, 7.02);
        assert_eq!(r.clean_sheets, 0); // column absent
        assert!(r.honours.is_empty());

        let r = &rows[1];
        assert_eq!(r.season, "2022/23");
        assert_eq!(r.league, None);
        assert_eq!(r.goals, 0);
        assert_eq!(r.av_rating, 0.0);
    }

    #[test]
    fn seasons_with_non_ascii_digits_are_dropped() {
        let doc = r#"<table>
            <tr><th>Season</th><th>Club</th><th>Apps</th></tr>
            <tr><td>٢٠٢٣/٢٤</td><td>Hull City</td><td>30</td></tr>
            <tr><td>2024/25</td><td>Hull City</td><td>12</td></tr>
        </table>"#;
        let seasons: Vec<String> = extract_history(doc).into_iter().map(|r| r.season).collect();
        assert_eq!(seasons, ["2024/25"]);
    }

    #[test]
    fn ids_are_unique_per_row() {
        let rows = extract_history(DOC);
        assert_ne!(rows[0].id, rows[1].id);
    }

    #[test]
    fn no_history_table_gives_no_rows() {
        let doc = "<table><tr><th>Season</th><th>Club</th></tr><tr><td>2023/24</td><td>X</td></tr></table>";
        assert!(extract_history(doc).is_empty());
        assert!(extract_history("").is_empty());
    }

    #[test]
    fn unresolved_required_field_gives_no_rows() {
        let cols = resolve(&[s!("season"), s!("club")], HISTORY_ALIASES);
        assert!(cols.is_none());
    }
}
