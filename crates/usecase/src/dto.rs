use std::fmt;

use letter_stats_domain::{LetterStatEntry, LetterStatsTable};
use letter_stats_shared_kernel::LetterCount;
use serde::{Deserialize, Serialize};

/// Which pass produced a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsKind {
    #[default]
    Single,
    Double,
}

impl fmt::Display for StatsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Double => f.write_str("double"),
        }
    }
}

/// Serializable snapshot of a table, entries sorted by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    pub kind: StatsKind,
    pub entries: Vec<LetterStatEntry>,
    pub total: LetterCount,
}

impl StatsReport {
    pub fn from_table(kind: StatsKind, table: &LetterStatsTable) -> Self {
        let entries = table.sorted_entries();
        let total = entries.iter().map(|e| e.count).sum();
        Self { kind, entries, total }
    }
}
