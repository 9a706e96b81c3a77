// Shared helpers for use case integration tests.
use letter_stats_domain::{LetterStatEntry, LetterStatsTable};
use letter_stats_ports::CharacterStream;
use letter_stats_shared_kernel::{Result, StreamError};

/// In-memory stream used by the tests in this directory.
pub struct StubStream {
    chars: Vec<char>,
    pos: usize,
}

impl StubStream {
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), pos: 0 }
    }
}

impl CharacterStream for StubStream {
    fn reset_position_to_start(&mut self) -> Result<()> {
        self.pos = 0;
        Ok(())
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn read_next_char(&mut self) -> Result<char> {
        let c = *self.chars.get(self.pos).ok_or(StreamError::Exhausted)?;
        self.pos += 1;
        Ok(c)
    }
}

#[allow(dead_code)]
pub fn table(entries: &[(&str, usize)]) -> LetterStatsTable {
    entries
        .iter()
        .map(|(k, c)| LetterStatEntry::new(k.parse().expect("valid key"), *c))
        .collect()
}
