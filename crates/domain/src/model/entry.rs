use std::fmt;

use letter_stats_shared_kernel::{LetterCount, LetterKey};
use serde::{Deserialize, Serialize};

/// One row of a statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterStatEntry {
    pub key: LetterKey,
    pub count: LetterCount,
}

impl LetterStatEntry {
    pub fn new(key: LetterKey, count: impl Into<LetterCount>) -> Self {
        Self { key, count: count.into() }
    }
}

impl fmt::Display for LetterStatEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.key, self.count)
    }
}
