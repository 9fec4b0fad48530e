// src/config/mod.rs

pub mod aliases;
pub mod consts;
pub mod options;
pub mod taxonomy;
