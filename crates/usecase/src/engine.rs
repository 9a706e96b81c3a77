//! Letter frequency passes over a [`CharacterStream`].
//!
//! Both passes rewind the stream first and leave it at end of stream. Letters
//! are recognised by Unicode general category (see [`is_letter`]).

use letter_stats_domain::{CharClass, LetterStatsTable};
use letter_stats_ports::CharacterStream;
use letter_stats_shared_kernel::{LetterKey, Result, value_objects::{fold_upper, is_letter}};
use log::debug;

use crate::chars::stream_chars;

/// Count every letter of the stream, case-sensitively.
///
/// # Errors
///
/// Propagates stream failures (rewind or read); no partial table is returned.
pub fn single_letter_stats<S: CharacterStream + ?Sized>(stream: &mut S) -> Result<LetterStatsTable> {
    stream.reset_position_to_start()?;

    let mut table = LetterStatsTable::new();
    for c in stream_chars(stream) {
        let c = c?;
        if is_letter(c) {
            table.record(LetterKey::single(c));
        }
    }

    debug!("single-letter pass: {} distinct letters, {} total", table.len(), table.total());
    Ok(table)
}

/// Count adjacent identical letters, case-insensitively.
///
/// The window advances one character at a time, so a run of `n` identical
/// letters yields `n - 1` pairs. A non-letter breaks pairing for one step.
///
/// # Errors
///
/// Propagates stream failures (rewind or read); no partial table is returned.
pub fn double_letter_stats<S: CharacterStream + ?Sized>(stream: &mut S) -> Result<LetterStatsTable> {
    stream.reset_position_to_start()?;

    let mut table = LetterStatsTable::new();
    let mut chars = stream_chars(stream);

    let first = chars.by_ref().find(|c| c.as_ref().map_or(true, |c| is_letter(*c))).transpose()?;
    let Some(mut first) = first else {
        debug!("double-letter pass: stream holds no letters");
        return Ok(table);
    };

    for second in chars {
        let second = second?;
        if let Some(key) = pair_key(first, second) {
            table.record(key);
        }
        first = second;
    }

    debug!("double-letter pass: {} distinct pairs, {} total", table.len(), table.total());
    Ok(table)
}

fn pair_key(first: char, second: char) -> Option<LetterKey> {
    let same = is_letter(first) && is_letter(second) && fold_upper(first) == fold_upper(second);
    same.then(|| LetterKey::pair(first))
}

/// Remove from `table` every entry whose key holds a letter of `class`.
pub fn filter_by_character_class(table: &mut LetterStatsTable, class: CharClass) -> usize {
    if table.is_empty() {
        return 0;
    }
    let removed = table.remove_class(class);
    debug!("removed {removed} entries containing a {class}, {} left", table.len());
    removed
}
