// src/config/consts.rs

// Table classification
pub const ATTRIBUTE_SECTIONS: &[&str] = &["technical", "mental", "physical", "goalkeeping"];
pub const GOALKEEPING_SECTION: &str = "goalkeeping";
pub const HISTORY_KEYWORDS: &[&str] = &["season", "club", "apps"];
pub const LEAGUE_KEYWORDS: &[&str] = &["team", "pld", "pts"];

// Attributes
pub const ATTRIBUTE_MIN: u8 = 1;
pub const ATTRIBUTE_MAX: u8 = 20;

// History rows
pub const SEASON_PATTERN: &str = r"^[0-9]{4}[-/][0-9]{2,4}$";
pub const AGGREGATE_MARKERS: &[&str] = &["career total", "totals"];
pub const RATING_PLACEHOLDERS: &[&str] = &["-", "-.--"];

// Name extraction
pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3"];
pub const HEADING_PLACEHOLDERS: &[&str] = &["profile", "untitled", "player report"];
pub const TITLE_SUFFIXES: &[&str] = &[
    " - football manager",
    " | football manager",
    " - player profile",
    " - profile",
];

// Fixture report
pub const FIXTURE_HEADER: &[&str] = &["result", "competition", "opposition"];
pub const RESULT_COLUMN: &str = "result";
pub const COMPETITION_COLUMN: &str = "competition";
pub const GOALSCORERS_COLUMN: &str = "goalscorers";
pub const MIN_FIXTURE_LINE_CHARS: usize = 20;
pub const FRIENDLY_MARKER: &str = "friendly";

// Facepack manifest
pub const PORTRAIT_PATTERN: &str = r"/person/([0-9]+)/portrait";
pub const MAPPING_FROM_ATTR: &[u8] = b"from";
pub const MAPPING_TO_ATTR: &[u8] = b"to";
