// src/data.rs
//
// Typed records handed back to the caller.
//
// Every record is built fresh per call and owned by the caller afterwards;
// nothing here is cached or shared.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partial attribute ratings keyed by canonical key (`"firstTouch"`, `"pace"`, …).
/// Unresolved attributes are absent; present values are always in 1..=20.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet(BTreeMap<String, u8>);

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<u8> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Crate-internal: callers only get values that already passed the range check.
    pub(crate) fn insert(&mut self, key: &str, value: u8) {
        self.0.insert(s!(key), value);
    }

    /// Merge a newer parse into this one. Keys present in `newer` overwrite,
    /// keys it lacks keep their previous value.
    pub fn merge(&mut self, newer: &AttributeSet) {
        for (k, v) in &newer.0 {
            self.0.insert(k.clone(), *v);
        }
    }
}

/// Result of attribute extraction from a profile page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeProfile {
    pub attributes: AttributeSet,
    pub is_goalkeeper: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerName {
    pub first_name: String,
    pub last_name: String,
    pub known_as: String,
}

/// One career season. `honours` is always empty here; another subsystem fills it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStat {
    pub id: Uuid,
    /// `"YYYY/YY"` or `"YYYY/YYYY"`, always `/`-separated.
    pub season: String,
    pub club: String,
    pub league: Option<String>,
    pub apps: i32,
    pub goals: i32,
    pub assists: i32,
    pub clean_sheets: i32,
    pub goals_conceded: i32,
    pub player_of_match: i32,
    pub av_rating: f32,
    pub honours: Vec<String>,
}

impl SeasonStat {
    /// Equality ignoring the generated id.
    pub fn same_record(&self, other: &SeasonStat) -> bool {
        SeasonStat { id: other.id, ..self.clone() } == *other
    }
}

/// One standings row, kept as extracted text. Columns the table lacks are empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueTableRow {
    pub pos: String,
    pub inf: String,
    pub team: String,
    pub played: String,
    pub won: String,
    pub drawn: String,
    pub lost: String,
    pub goals_for: String,
    pub goals_against: String,
    pub goal_diff: String,
    pub pts: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerSeasonTally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl ManagerSeasonTally {
    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// Person id → portrait file stem, from a graphics `config.xml`.
pub type FacepackMapping = BTreeMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_present_and_keeps_absent() {
        let mut base = AttributeSet::new();
        base.insert("pace", 12);
        base.insert("stamina", 14);

        let mut newer = AttributeSet::new();
        newer.insert("pace", 15);

        base.merge(&newer);
        assert_eq!(base.get("pace"), Some(15));
        assert_eq!(base.get("stamina"), Some(14));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn tally_played_sums_all_outcomes() {
        let t = ManagerSeasonTally { wins: 3, losses: 2, draws: 1 };
        assert_eq!(t.played(), 6);
    }

    #[test]
    fn same_record_ignores_id() {
        let a = SeasonStat {
            id: Uuid::new_v4(),
            season: s!("2023/24"),
            club: s!("Hull"),
            league: None,
            apps: 10,
            goals: 2,
            assists: 1,
            clean_sheets: 0,
            goals_conceded: 0,
            player_of_match: 1,
            av_rating: 6.9,
            honours: Vec::new(),
        };
        let b = SeasonStat { id: Uuid::new_v4(), ..a.clone() };
        assert_ne!(a, b);
        assert!(a.same_record(&b));
    }
}
