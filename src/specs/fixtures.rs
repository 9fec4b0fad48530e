// src/specs/fixtures.rs
//! Win/loss/draw tally from a plain-text fixture list.
//!
//! The report is a fixed-width printout. Its header line names the columns
//! (`Result`, `Competition`, `Opposition`, optionally `Goalscorers`); the
//! character offsets of `Result` and `Competition` in that line are used to
//! slice every following line.
//!
//! - competition: from its offset to the `Goalscorers` offset when that
//!   column comes after `Result`, else to end of line.
//! - result: from its offset to the competition offset when that comes
//!   later, else to the `Goalscorers` offset, else to end of line.
//!
//! ```text
//! Date        Opposition         Competition          Result   Goalscorers
//! 12/8/2023   Leeds (H)          Sky Bet Championship 2 - 1    Smith, Jones
//! 19/8/2023   Boston (A)         Pre-Season Friendly  5 - 0
//! ```

use crate::config::consts::{
    COMPETITION_COLUMN, FIXTURE_HEADER, FRIENDLY_MARKER, GOALSCORERS_COLUMN,
    MIN_FIXTURE_LINE_CHARS, RESULT_COLUMN,
};
use crate::data::ManagerSeasonTally;
use crate::specs::coerce::leading_int;

/// Column layout read from the header line, in character offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Columns {
    pub result: usize,
    pub competition: usize,
    pub goalscorers: Option<usize>,
}

impl Columns {
    /// `None` unless the line names all of result, competition and opposition.
    pub fn from_header(line: &str) -> Option<Self> {
        let lc = line.to_ascii_lowercase();
        if !FIXTURE_HEADER.iter().all(|k| lc.contains(k)) {
            return None;
        }
        let offset = |word: &str| lc.find(word).map(|b| line[..b].chars().count());

        Some(Self {
            result: offset(RESULT_COLUMN)?,
            competition: offset(COMPETITION_COLUMN)?,
            goalscorers: offset(GOALSCORERS_COLUMN),
        })
    }

    /// Goalscorers offset, only when that column follows the result.
    fn scorers_after_result(&self) -> Option<usize> {
        self.goalscorers.filter(|&g| g > self.result)
    }

    pub fn competition_text(&self, line: &str) -> String {
        slice_chars(line, self.competition, self.scorers_after_result())
    }

    pub fn result_text(&self, line: &str) -> String {
        let end = Some(self.competition)
            .filter(|&c| c > self.result)
            .or_else(|| self.scorers_after_result());
        slice_chars(line, self.result, end)
    }
}

/// Characters `start..end` of the line; a missing or non-increasing `end` runs to end of line.
fn slice_chars(line: &str, start: usize, end: Option<usize>) -> String {
    let chars = line.chars().skip(start);
    match end.filter(|&e| e > start) {
        Some(e) => chars.take(e - start).collect(),
        None => chars.collect(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

/// Scan the report once and count results. No header → zero tally.
pub fn extract_season_tally(report: &str) -> ManagerSeasonTally {
    let mut tally = ManagerSeasonTally::default();
    let mut lines = report.lines();

    let Some(cols) = lines.by_ref().find_map(Columns::from_header) else {
        logd!("Fixtures: no result/competition/opposition header line");
        return tally;
    };

    for line in lines {
        match classify_line(line, &cols) {
            Some(Outcome::Win) => tally.wins += 1,
            Some(Outcome::Loss) => tally.losses += 1,
            Some(Outcome::Draw) => tally.draws += 1,
            None => {}
        }
    }

    logd!("Fixtures: {}W {}D {}L", tally.wins, tally.draws, tally.losses);
    tally
}

/// Outcome of one data line, or `None` for separators, friendlies and unplayed games.
pub fn classify_line(line: &str, cols: &Columns) -> Option<Outcome> {
    if line.chars().count() < MIN_FIXTURE_LINE_CHARS || !line.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    if cols.competition_text(line).to_lowercase().contains(FRIENDLY_MARKER) {
        return None;
    }

    let (ours, theirs) = parse_score(&cols.result_text(line))?;
    Some(match ours.cmp(&theirs) {
        std::cmp::Ordering::Greater => Outcome::Win,
        std::cmp::Ordering::Less => Outcome::Loss,
        std::cmp::Ordering::Equal => Outcome::Draw,
    })
}

/// `"2 - 1"` → `(2, 1)`. Each side must start with an integer; `"W 2-1"` gives `None`.
pub fn parse_score(text: &str) -> Option<(i32, i32)> {
    let (left, right) = text.split_once('-')?;
    Some((leading_int(left)?, leading_int(right)?))
}
