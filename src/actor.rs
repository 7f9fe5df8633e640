//! Callbacks invoked by the parser.
//!
//! The [`Parser`](crate::Parser) walks a byte stream and translates it
//! into the events below. An [`Actor`] implementation turns those events
//! into screen mutations, replies, logging, or whatever the embedding
//! terminal needs; the parser itself never interprets a sequence beyond
//! its framing. All methods default to no-ops so an implementation only
//! overrides the events it consumes.
//!
//! Payload bytes of OSC/APC/PM strings and DCS passthrough data arrive
//! one `u8` at a time and may be raw UTF-8; assembling and decoding them
//! is the actor's responsibility. Calls are synchronous and arrive in
//! exactly the order the driving bytes were observed; an actor must not
//! feed bytes back into the parser from inside a callback.

use crate::error::ParserError;

/// Consumer-facing interface for events emitted by the parser.
pub trait Actor {
    /// Emits a single printable character from the per-byte path.
    ///
    /// Bytes `0x80..=0xFF` that were not consumed as UTF-8 text by the
    /// fast path are forwarded as their one-byte `char` equivalent.
    fn print(&mut self, _ch: char) {}

    /// Emits a batched run of printable text from the ground-state fast
    /// path, together with the number of display cells it occupies.
    fn print_text(&mut self, _text: &str, _cell_count: usize) {}

    /// Executes an immediate single-byte control function (`BEL`, `BS`,
    /// `CR`, `LF`, ...).
    fn execute(&mut self, _byte: u8) {}

    /// Resets accumulated parameters and intermediates; fired when a new
    /// escape or control sequence begins.
    fn clear(&mut self) {}

    /// Collects an intermediate byte (`0x20..=0x2F`).
    fn collect(&mut self, _byte: u8) {}

    /// Collects the private-parameter leader of a CSI or DCS sequence
    /// (`<`, `=`, `>`, `?`).
    fn collect_leader(&mut self, _byte: u8) {}

    /// Accumulates a DCS parameter byte: a decimal digit or `;`.
    fn param(&mut self, _byte: u8) {}

    /// Accumulates one decimal digit of the current CSI parameter.
    fn param_digit(&mut self, _byte: u8) {}

    /// Terminates the current CSI parameter (`;`).
    fn param_separator(&mut self) {}

    /// Opens a sub-parameter of the current CSI parameter (`:`).
    fn param_sub_separator(&mut self) {}

    /// Dispatches a plain escape sequence on its final byte.
    fn esc_dispatch(&mut self, _byte: u8) {}

    /// Dispatches a CSI sequence on its final byte.
    fn csi_dispatch(&mut self, _byte: u8) {}

    /// Signals the start of a DCS payload; the byte is the final byte
    /// that selected the device control function.
    fn hook(&mut self, _byte: u8) {}

    /// Passes one DCS payload byte to the handler chosen in
    /// [`hook`](Actor::hook). C0 controls are passed through as well.
    fn put(&mut self, _byte: u8) {}

    /// Ends the current DCS payload.
    fn unhook(&mut self) {}

    /// Begins an OSC payload.
    fn osc_start(&mut self) {}

    /// Appends one byte to the OSC payload.
    fn osc_put(&mut self, _byte: u8) {}

    /// Finalizes the OSC payload.
    fn osc_end(&mut self) {}

    /// Begins an APC payload.
    fn apc_start(&mut self) {}

    /// Appends one byte to the APC payload.
    fn apc_put(&mut self, _byte: u8) {}

    /// Finalizes the APC payload.
    fn apc_end(&mut self) {}

    /// Begins a PM payload.
    fn pm_start(&mut self) {}

    /// Appends one byte to the PM payload.
    fn pm_put(&mut self, _byte: u8) {}

    /// Finalizes the PM payload.
    fn pm_end(&mut self) {}

    /// Reports a parser diagnostic. Parsing continues with the next
    /// byte.
    fn error(&mut self, _error: ParserError) {}
}
