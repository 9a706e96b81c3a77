//! # Use Cases
//!
//! Application-level statistics logic.
//!
//! - [`chars`]: lazy iteration over a character stream
//! - [`engine`]: single-letter and doubled-letter passes, class filtering
//! - [`orchestrator`]: the analyze-a-stream use case
//! - [`report`]: line-oriented rendering of a table
//! - [`dto`]: serializable report shape
//!
//! Use cases depend on domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod chars;
pub mod dto;
pub mod engine;
pub mod orchestrator;
pub mod report;

pub use dto::{StatsKind, StatsReport};
pub use engine::{double_letter_stats, filter_by_character_class, single_letter_stats};
pub use orchestrator::{AnalysisPlan, AnalyzeStream};
pub use report::{DEFAULT_TOTAL_LABEL, Reporter};
