use hashbrown::HashMap;
use letter_stats_shared_kernel::{LetterCount, LetterKey};

use super::LetterStatEntry;
use crate::char_class::CharClass;

/// Occurrence counts keyed by letter or doubled letter.
///
/// Storage order is unspecified; [`LetterStatsTable::sorted_entries`] gives
/// the ordinal key order used for reporting. Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatsTable {
    counts: HashMap<LetterKey, LetterCount>,
}

impl LetterStatsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `key`, creating the entry at 1 when absent.
    pub fn record(&mut self, key: LetterKey) -> LetterCount {
        let count = self.counts.entry(key).or_default();
        count.increment();
        *count
    }

    pub fn get(&self, key: &str) -> Option<LetterCount> {
        self.counts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LetterKey, LetterCount)> {
        self.counts.iter().map(|(k, c)| (k, *c))
    }

    /// Entries in ascending ordinal key order.
    pub fn sorted_entries(&self) -> Vec<LetterStatEntry> {
        let mut entries: Vec<_> =
            self.counts.iter().map(|(key, count)| LetterStatEntry::new(key.clone(), *count)).collect();
        entries.sort_unstable_by(|a, b| a.key.cmp(&b.key));
        entries
    }

    pub fn total(&self) -> LetterCount {
        self.counts.values().sum()
    }

    /// Drop every entry whose key contains a letter of `class`.
    ///
    /// Returns the number of removed entries.
    pub fn remove_class(&mut self, class: CharClass) -> usize {
        let before = self.counts.len();
        self.counts.retain(|key, _| !key.chars().any(|c| class.contains(c)));
        before - self.counts.len()
    }
}

impl FromIterator<LetterStatEntry> for LetterStatsTable {
    fn from_iter<I: IntoIterator<Item = LetterStatEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            *table.counts.entry(entry.key).or_default() += entry.count;
        }
        table
    }
}

impl Extend<LetterKey> for LetterStatsTable {
    fn extend<I: IntoIterator<Item = LetterKey>>(&mut self, iter: I) {
        for key in iter {
            self.record(key);
        }
    }
}
