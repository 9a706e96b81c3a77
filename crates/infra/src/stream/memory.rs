use letter_stats_ports::CharacterStream;
use letter_stats_shared_kernel::{Result, StreamError};

/// Character stream over an owned string.
#[derive(Debug, Clone, Default)]
pub struct MemoryStream {
    chars: Vec<char>,
    pos: usize,
}

impl MemoryStream {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self { chars: text.as_ref().chars().collect(), pos: 0 }
    }
}

impl From<&str> for MemoryStream {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl CharacterStream for MemoryStream {
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
