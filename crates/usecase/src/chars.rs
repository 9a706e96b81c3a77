use std::iter::FusedIterator;

use letter_stats_ports::CharacterStream;
use letter_stats_shared_kernel::Result;

/// Iterator over the remaining characters of a stream.
///
/// Checks `is_eof` before each read and stops after the first error.
pub struct StreamChars<'a, S: ?Sized> {
    stream: &'a mut S,
    failed: bool,
}

pub fn stream_chars<S: CharacterStream + ?Sized>(stream: &mut S) -> StreamChars<'_, S> {
    StreamChars { stream, failed: false }
}

impl<S: CharacterStream + ?Sized> Iterator for StreamChars<'_, S> {
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.stream.is_eof() {
            return None;
        }
        let next = self.stream.read_next_char();
        self.failed = next.is_err();
        Some(next)
    }
}

impl<S: CharacterStream + ?Sized> FusedIterator for StreamChars<'_, S> {}
