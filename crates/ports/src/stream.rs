use letter_stats_shared_kernel::Result;

/// Sequential, resettable source of characters.
///
/// Callers must check [`CharacterStream::is_eof`] before every
/// [`CharacterStream::read_next_char`]; reading at end of stream fails with
/// `StreamError::Exhausted`.
pub trait CharacterStream {
    /// Move the read cursor back to the first character. Idempotent.
    fn reset_position_to_start(&mut self) -> Result<()>;

    fn is_eof(&self) -> bool;

    fn read_next_char(&mut self) -> Result<char>;
}
