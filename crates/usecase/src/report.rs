use letter_stats_domain::LetterStatsTable;
use letter_stats_ports::LineSink;
use letter_stats_shared_kernel::{LetterCount, Result};

pub const DEFAULT_TOTAL_LABEL: &str = "TOTAL";

/// Writes a table as `key : count` lines followed by a total line.
pub struct Reporter<'a> {
    sink: &'a mut dyn LineSink,
    total_label: String,
}

impl<'a> Reporter<'a> {
    pub fn new(sink: &'a mut dyn LineSink) -> Self {
        Self { sink, total_label: DEFAULT_TOTAL_LABEL.to_string() }
    }

    #[must_use]
    pub fn with_total_label(mut self, label: impl Into<String>) -> Self {
        self.total_label = label.into();
        self
    }

    /// Emit the table in ascending key order and return the printed total.
    ///
    /// # Errors
    ///
    /// Returns the first sink failure.
    pub fn report(&mut self, table: &LetterStatsTable) -> Result<LetterCount> {
        let mut total = LetterCount::zero();
        for entry in table.sorted_entries() {
            total += entry.count;
            self.sink.write_line(&entry.to_string())?;
        }
        self.sink.write_line(&format!("{} : {total}", self.total_label))?;
        self.sink.flush()?;
        Ok(total)
    }
}
