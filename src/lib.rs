// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod options;
pub mod output;

pub use letter_stats_domain::{CharClass, LetterStatEntry, LetterStatsTable};
pub use letter_stats_usecase::{double_letter_stats, filter_by_character_class, single_letter_stats};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
