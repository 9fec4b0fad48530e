// src/lib.rs
//! Typed records from Football Manager export documents.
//!
//! | entry point                 | input      | output                 |
//! |-----------------------------|------------|------------------------|
//! | [`extract_attributes`]      | HTML       | [`AttributeProfile`]   |
//! | [`extract_name`]            | HTML       | [`PlayerName`]         |
//! | [`extract_history`]         | HTML       | `Vec<`[`SeasonStat`]`>`|
//! | [`extract_league_table`]    | HTML       | `Vec<`[`LeagueTableRow`]`>` |
//! | [`extract_season_tally`]    | plain text | [`ManagerSeasonTally`] |
//! | [`extract_facepack_mapping`]| XML        | [`FacepackMapping`]    |
//!
//! The extractors are synchronous, do no I/O and share only read-only tables.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod file;

pub use data::{
    AttributeProfile, AttributeSet, FacepackMapping, LeagueTableRow, ManagerSeasonTally,
    PlayerName, SeasonStat,
};
pub use error::{ExtractError, Result, decode_document};
pub use specs::attributes::extract_attributes;
pub use specs::facepack::extract_facepack_mapping;
pub use specs::fixtures::extract_season_tally;
pub use specs::history::extract_history;
pub use specs::league::extract_league_table;
pub use specs::name::extract_name;
