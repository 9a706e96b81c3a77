#![allow(clippy::multiple_crate_versions)]

pub mod char_class;
pub mod model;

pub use char_class::CharClass;
pub use model::{LetterStatEntry, LetterStatsTable};
