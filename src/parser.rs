use std::str;

use log::trace;

use crate::actor::Actor;
use crate::enums::{Action, ActionClass, State};
use crate::error::ParserError;
use crate::scan;
use crate::table::TABLE;

/// Default bound on how many display cells a single fast-path batch may
/// emit, sized for a generous screen full of text.
pub const DEFAULT_MAX_CHAR_COUNT: usize = 80 * 100;

/// Streaming VT/ANSI escape sequence parser.
///
/// The parser consumes raw bytes and forwards semantic events to an
/// [`Actor`]. It keeps its state across [`parse_fragment`] calls, so a
/// stream may be handed over in chunks of arbitrary size, including
/// chunks that split an escape sequence or a multibyte character; the
/// resulting event sequence is the same as for one contiguous call,
/// modulo the batching of printable text.
///
/// A parser is `O(1)` in size beyond the shared transition table and
/// performs no allocation; accumulating parameters, intermediates and
/// string payloads is the actor's business.
///
/// [`parse_fragment`]: Parser::parse_fragment
#[derive(Debug)]
pub struct Parser {
    state: State,
    max_char_count: usize,
    /// Trailing bytes of a code point cut off by the fragment boundary.
    pending: [u8; 4],
    pending_len: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_char_count(DEFAULT_MAX_CHAR_COUNT)
    }

    /// Creates a parser whose fast path emits at most `max_char_count`
    /// display cells per batch.
    #[must_use]
    pub fn with_max_char_count(max_char_count: usize) -> Self {
        Self {
            state: State::Ground,
            max_char_count,
            pending: [0; 4],
            pending_len: 0,
        }
    }

    /// Current state of the state machine.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Adjusts the fast-path batch bound, e.g. after the screen learns
    /// its scrollable region.
    pub fn set_max_char_count(&mut self, max_char_count: usize) {
        self.max_char_count = max_char_count;
    }

    /// Forces the parser back to [`State::Ground`], dropping any held
    /// partial code point. A reset parser behaves like a fresh one.
    pub fn reset(&mut self) {
        self.state = State::Ground;
        self.pending_len = 0;
    }

    /// Consumes `bytes` left to right, invoking `actor` for every event.
    pub fn parse_fragment<A: Actor>(&mut self, bytes: &[u8], actor: &mut A) {
        let mut input = bytes;

        if self.pending_len > 0 && !input.is_empty() {
            input = self.resume_code_point(input, actor);
        }

        while let Some((&byte, rest)) = input.split_first() {
            if self.state == State::Ground {
                let scan = scan::scan_text(input, self.max_char_count);
                if scan.cells > 0 {
                    trace!(
                        "scanned text: {} cells, {} bytes",
                        scan.cells,
                        scan.text.len()
                    );
                    actor.print_text(scan.text, scan.cells);
                    input = &input[scan.text.len()..];

                    // Line-oriented output alternates between a text run
                    // and a single LF; skip the table round trip for
                    // that trailing LF.
                    if input.first() == Some(&b'\n') {
                        actor.execute(b'\n');
                        input = &input[1..];
                    }
                    continue;
                }

                if scan.incomplete == input.len() {
                    // The fragment ends inside a code point; hold the
                    // bytes until the continuation arrives.
                    self.pending[..scan.incomplete].copy_from_slice(input);
                    self.pending_len = scan.incomplete;
                    return;
                }
            }

            input = rest;
            self.process_byte(byte, actor);
        }
    }

    /// Completes, or gives up on, a code point whose encoding straddled
    /// the previous fragment boundary.
    fn resume_code_point<'a, A: Actor>(
        &mut self,
        input: &'a [u8],
        actor: &mut A,
    ) -> &'a [u8] {
        let held = self.pending_len;
        let need = expected_len(self.pending[0]).saturating_sub(held);
        let take = need.min(input.len());
        self.pending[held..held + take].copy_from_slice(&input[..take]);
        let total = held + take;

        match str::from_utf8(&self.pending[..total]) {
            Ok(text) => {
                match text.chars().next() {
                    Some(ch) if scan::is_text(ch) => {
                        actor.print_text(text, scan::cell_width(ch, 0));
                        self.pending_len = 0;
                    },
                    _ => {
                        // Decoded into a control character; hand the raw
                        // bytes to the table like contiguous input would
                        // have.
                        let raw = self.pending;
                        self.pending_len = 0;
                        for &byte in &raw[..total] {
                            self.process_byte(byte, actor);
                        }
                    },
                }
                &input[take..]
            },
            Err(err) if err.error_len().is_none() => {
                // Still unfinished; only possible when `take` drained
                // the whole input.
                self.pending_len = total;
                &input[take..]
            },
            Err(_) => {
                // The continuation is not UTF-8. Replay the held bytes
                // through the per-byte rules and rescan the new input
                // from its start.
                let raw = self.pending;
                self.pending_len = 0;
                for &byte in &raw[..held] {
                    self.process_byte(byte, actor);
                }
                input
            },
        }
    }

    fn process_byte<A: Actor>(&mut self, byte: u8, actor: &mut A) {
        let state = self.state as usize;
        let next = TABLE.transitions[state][byte as usize];

        if next != State::Undefined {
            self.handle(
                ActionClass::Leave,
                TABLE.exit_events[state],
                byte,
                actor,
            );
            self.handle(
                ActionClass::Transition,
                TABLE.events[state][byte as usize],
                byte,
                actor,
            );
            self.state = next;
            self.handle(
                ActionClass::Enter,
                TABLE.entry_events[next as usize],
                byte,
                actor,
            );
            return;
        }

        let action = TABLE.events[state][byte as usize];
        if action != Action::Undefined {
            self.handle(ActionClass::Event, action, byte, actor);
        } else {
            actor.error(ParserError::UnknownAction {
                state: self.state,
                byte,
            });
        }
    }

    fn handle<A: Actor>(
        &self,
        class: ActionClass,
        action: Action,
        byte: u8,
        actor: &mut A,
    ) {
        use Action::*;

        if !matches!(action, Ignore | Undefined) {
            trace!(
                "handle: {:?} {:?} {:?} 0x{:02X}",
                self.state,
                class,
                action,
                byte
            );
        }

        match action {
            Print => actor.print(char::from(byte)),
            Execute => actor.execute(byte),
            Clear => actor.clear(),
            Collect => actor.collect(byte),
            CollectLeader => actor.collect_leader(byte),
            Param => actor.param(byte),
            ParamDigit => actor.param_digit(byte),
            ParamSeparator => actor.param_separator(),
            ParamSubSeparator => actor.param_sub_separator(),
            EscDispatch => actor.esc_dispatch(byte),
            CsiDispatch => actor.csi_dispatch(byte),
            Hook => actor.hook(byte),
            Put => actor.put(byte),
            Unhook => actor.unhook(),
            OscStart => actor.osc_start(),
            OscPut => actor.osc_put(byte),
            OscEnd => actor.osc_end(),
            ApcStart => actor.apc_start(),
            ApcPut => actor.apc_put(byte),
            ApcEnd => actor.apc_end(),
            PmStart => actor.pm_start(),
            PmPut => actor.pm_put(byte),
            PmEnd => actor.pm_end(),
            Ignore | Undefined => {},
        }
    }
}

/// Encoded length of a UTF-8 sequence, judged by its lead byte.
const fn expected_len(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
