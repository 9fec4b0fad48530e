// src/config/aliases.rs
//! Ordered header aliases per table kind.
//!
//! Aliases are matched as substrings of the lower-cased header text, tried
//! in the order listed. Keep the more specific spelling first.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HistoryField {
    Season,
    Club,
    League,
    Apps,
    Goals,
    Assists,
    CleanSheets,
    GoalsConceded,
    PlayerOfMatch,
    Rating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeagueField {
    Pos,
    Inf,
    Team,
    Played,
    Won,
    Drawn,
    Lost,
    For,
    Against,
    GoalDiff,
    Pts,
}

/// One field's aliases and whether the table is usable without it.
#[derive(Clone, Copy, Debug)]
pub struct FieldAliases<F> {
    pub field: F,
    pub aliases: &'static [&'static str],
    pub required: bool,
}

const fn opt<F>(field: F, aliases: &'static [&'static str]) -> FieldAliases<F> {
    FieldAliases { field, aliases, required: false }
}

const fn req<F>(field: F, aliases: &'static [&'static str]) -> FieldAliases<F> {
    FieldAliases { field, aliases, required: true }
}

pub static HISTORY_ALIASES: &[FieldAliases<HistoryField>] = &[
    req(HistoryField::Season, &["season", "year"]),
    req(HistoryField::Club, &["club", "team"]),
    opt(HistoryField::League, &["league", "division", "competition", "comp"]),
    req(HistoryField::Apps, &["apps", "appearances", "app"]),
    opt(HistoryField::Goals, &["goals", "gls"]),
    opt(HistoryField::Assists, &["assists", "ast"]),
    opt(HistoryField::CleanSheets, &["clean sheets", "clean", "cln"]),
    opt(HistoryField::GoalsConceded, &["conceded", "conc"]),
    opt(HistoryField::PlayerOfMatch, &["player of the match", "potm", "pom"]),
    opt(HistoryField::Rating, &["av rat", "rating", "avr"]),
];

pub static LEAGUE_ALIASES: &[FieldAliases<LeagueField>] = &[
    req(LeagueField::Pos, &["pos", "#"]),
    opt(LeagueField::Inf, &["inf"]),
    req(LeagueField::Team, &["team", "club"]),
    opt(LeagueField::Played, &["pld", "played"]),
    opt(LeagueField::Won, &["won"]),
    opt(LeagueField::Drawn, &["drn", "drawn"]),
    opt(LeagueField::Lost, &["lst", "lost"]),
    opt(LeagueField::For, &["for", "gf"]),
    opt(LeagueField::Against, &["ag", "against", "ga"]),
    opt(LeagueField::GoalDiff, &["gd", "goal diff", "+/-"]),
    req(LeagueField::Pts, &["pts", "points"]),
];
