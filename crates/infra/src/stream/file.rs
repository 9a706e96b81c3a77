use std::{
    char::REPLACEMENT_CHARACTER,
    fs::File,
    io::{BufRead, BufReader, Seek},
    path::{Path, PathBuf},
};

use letter_stats_ports::CharacterStream;
use letter_stats_shared_kernel::{InfrastructureError, LetterStatsError, Result, StreamError};
use log::warn;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Character stream decoding a UTF-8 file incrementally.
///
/// One character is decoded ahead so `is_eof` needs no I/O. Invalid byte
/// sequences decode to U+FFFD and a leading BOM is skipped.
pub struct FileCharStream {
    path: PathBuf,
    reader: BufReader<File>,
    lookahead: Option<char>,
    invalid_sequences: usize,
}

impl FileCharStream {
    /// # Errors
    ///
    /// `InfrastructureError::FileRead` when the file cannot be opened or read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| InfrastructureError::FileRead { path: path.clone(), source })?;
        let mut stream = Self { path, reader: BufReader::new(file), lookahead: None, invalid_sequences: 0 };
        stream.restart()?;
        Ok(stream)
    }

    fn restart(&mut self) -> Result<()> {
        self.reader
            .rewind()
            .map_err(|source| InfrastructureError::FileSeek { path: self.path.clone(), source })?;
        if self.fill()?.starts_with(&UTF8_BOM) {
            self.reader.consume(UTF8_BOM.len());
        }
        self.invalid_sequences = 0;
        self.lookahead = self.decode_next()?;
        Ok(())
    }

    fn fill(&mut self) -> Result<&[u8]> {
        let path = &self.path;
        self.reader
            .fill_buf()
            .map_err(|source| LetterStatsError::from(InfrastructureError::FileRead { path: path.clone(), source }))
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.fill()?.first().copied())
    }

    fn decode_next(&mut self) -> Result<Option<char>> {
        let Some(lead) = self.peek_byte()? else {
            return Ok(None);
        };
        self.reader.consume(1);

        let width = utf8_width(lead);
        if width == 1 {
            return Ok(Some(char::from(lead)));
        }
        if width == 0 {
            return Ok(Some(self.invalid()));
        }

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.peek_byte()? {
                Some(b) if b & 0xC0 == 0x80 => {
                    self.reader.consume(1);
                    *slot = b;
                }
                _ => return Ok(Some(self.invalid())),
            }
        }

        let decoded = std::str::from_utf8(&bytes[..width]).ok().and_then(|s| s.chars().next());
        Ok(Some(decoded.unwrap_or_else(|| self.invalid())))
    }

    fn invalid(&mut self) -> char {
        self.invalid_sequences += 1;
        if self.invalid_sequences == 1 {
            warn!("{}: invalid UTF-8, substituting U+FFFD", self.path.display());
        }
        REPLACEMENT_CHARACTER
    }
}

fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

impl CharacterStream for FileCharStream {
    fn reset_position_to_start(&mut self) -> Result<()> {
        self.restart()
    }

    fn is_eof(&self) -> bool {
        self.lookahead.is_none()
    }

    fn read_next_char(&mut self) -> Result<char> {
        let current = self.lookahead.ok_or(StreamError::Exhausted)?;
        self.lookahead = self.decode_next()?;
        Ok(current)
    }
}
