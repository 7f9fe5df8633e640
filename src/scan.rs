//! Ground-state text scanners backing the parser's fast path.
//!
//! Streaming printable text is the dominant workload of a terminal, so
//! the parser avoids per-byte table lookups while in ground state: it
//! asks a scanner for the longest prefix of the input that is plain
//! text, emits it as one batch, and only falls back to the state machine
//! for whatever byte stopped the scan. Both scanners are pure functions
//! over their input prefix and never consume a byte that would trigger a
//! state transition.

use std::str;

use unicode_width::UnicodeWidthChar;

/// Result of [`scan_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan<'a> {
    /// The validated text-class prefix of the input.
    pub text: &'a str,
    /// Number of display cells `text` occupies.
    pub cells: usize,
    /// Length in bytes of a valid but unfinished code point at the very
    /// end of the input. Non-zero only when the scan consumed everything
    /// up to it.
    pub incomplete: usize,
}

/// Returns the length of the leading run of printable ASCII
/// (`0x20..=0x7E`), capped at `max_cells`. One byte is one cell.
#[must_use]
pub fn scan_text_ascii(input: &[u8], max_cells: usize) -> usize {
    let limit = input.len().min(max_cells);
    let mut len = 0;
    while len < limit && matches!(input[len], 0x20..=0x7E) {
        len += 1;
    }
    len
}

/// Scans the longest prefix of `input` that decodes as text-class UTF-8:
/// no C0/C1 controls, no DEL, no malformed or truncated encodings.
///
/// The returned cell count is capped at `max_cells`; a wide character
/// that would cross the cap is left unconsumed. The byte length of the
/// consumed prefix is `text.len()`.
#[must_use]
pub fn scan_text(input: &[u8], max_cells: usize) -> Scan<'_> {
    let (valid, tail) = match str::from_utf8(input) {
        Ok(text) => (text, 0),
        Err(err) => {
            let valid = str::from_utf8(&input[..err.valid_up_to()])
                .unwrap_or_default();
            // error_len() is None exactly when the input ends inside a
            // well-formed code point.
            let tail = match err.error_len() {
                None => input.len() - err.valid_up_to(),
                Some(_) => 0,
            };
            (valid, tail)
        },
    };

    let mut cells = 0;
    let mut len = 0;

    for ch in valid.chars() {
        if !is_text(ch) {
            return Scan {
                text: &valid[..len],
                cells,
                incomplete: 0,
            };
        }

        let width = cell_width(ch, cells);
        if cells + width > max_cells {
            return Scan {
                text: &valid[..len],
                cells,
                incomplete: 0,
            };
        }

        cells += width;
        len += ch.len_utf8();
    }

    Scan {
        text: valid,
        cells,
        incomplete: tail,
    }
}

/// A character the fast path may print: anything that is not a C0/C1
/// control or DEL.
pub(crate) fn is_text(ch: char) -> bool {
    !ch.is_control()
}

/// Display width of `ch` given how many cells the current run already
/// holds.
pub(crate) fn cell_width(ch: char, cells_so_far: usize) -> usize {
    match ch.width() {
        // A combining mark with nothing to attach to still occupies a
        // cell of its own.
        Some(0) if cells_so_far == 0 => 1,
        Some(width) => width,
        None => 1,
    }
}
