// src/specs/mod.rs
//! # Extraction "specs" module
//!
//! One spec per export document. Each spec knows *where the ground truth lives*
//! in that document and *how to read it tolerantly*, and returns plain records
//! from `crate::data`.
//!
//! ## What lives here
//! - **Table classification** (`tables`) and **header alias resolution** (`headers`),
//!   shared by the profile and standings specs.
//! - **Cell coercion** with per-field fallbacks (`coerce`).
//! - Page specs: `attributes`, `name`, `history`, `league` (HTML), `fixtures`
//!   (plain-text report), `facepack` (XML manifest).
//!
//! ## What does **not** live here
//! - Reading files, caching or persisting records: callers hand in text and own
//!   what comes back.
//! - Merging parses over time (see `AttributeSet::merge` for the one helper).
//!
//! ## Conventions & invariants
//! - **Case-insensitive** header and label matching; whitespace is normalized first.
//! - Missing structure is not an error: no table, an unresolved required header
//!   or no matching pattern all give an empty result.
//! - A bad cell never aborts a table: integers fall back to 0, ratings to 0.0,
//!   out-of-range attributes stay unset, rows without a valid season are dropped.
//! - Lookup tables are built once and only read afterwards, so every entry point
//!   can run concurrently.
//!
//! ## Testing notes
//! - Every spec is tested offline against small inline fixtures.
pub mod attributes;
pub mod coerce;
pub mod facepack;
pub mod fixtures;
pub mod headers;
pub mod history;
pub mod league;
pub mod name;
pub mod tables;
