//! Separator scanning for line protocol text
//!
//! A separator only counts when it sits outside a double-quoted span and is
//! not preceded by a backslash. The scan keeps two flags, `in_quote` and
//! `escape_pending`, and never rewrites the text: escape and quote
//! characters stay in the slices handed back to the caller.
//!
//! A quote that is still open at end of line stays open, so everything after
//! it is treated as quoted content and no further separator is found.

use crate::constants::{ESCAPE_CHAR, QUOTE_CHAR};

/// Quote/escape state at a position in the line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Inside a `"..."` span
    pub in_quote: bool,
    /// Previous character was an unconsumed backslash
    pub escape_pending: bool,
}

impl ScanState {
    /// Advance past `ch`, returning true if `ch` is a live `separator`
    pub fn step(&mut self, ch: char, separator: char) -> bool {
        if self.escape_pending {
            self.escape_pending = false;
            return false;
        }

        match ch {
            ESCAPE_CHAR => {
                self.escape_pending = true;
                false
            }
            QUOTE_CHAR => {
                self.in_quote = !self.in_quote;
                false
            }
            other => other == separator && !self.in_quote,
        }
    }
}

/// Byte offset of the first live `separator` in `text`
pub fn find_separator(text: &str, separator: char) -> Option<usize> {
    let mut state = ScanState::default();
    text.char_indices()
        .find_map(|(index, ch)| state.step(ch, separator).then_some(index))
}

/// Split `text` around its first live `separator`, dropping the separator
///
/// Returns `None` when no live separator exists.
pub fn split_once_unescaped(text: &str, separator: char) -> Option<(&str, &str)> {
    find_separator(text, separator)
        .map(|index| (&text[..index], &text[index + separator.len_utf8()..]))
}

/// Final scan state after consuming all of `text`
///
/// Used to report lines that end inside a quote or on a dangling backslash.
pub fn end_state(text: &str) -> ScanState {
    let mut state = ScanState::default();
    for ch in text.chars() {
        // The separator is irrelevant here; NUL never appears in line protocol.
        state.step(ch, '\0');
    }
    state
}
