//! Streaming VT/ANSI escape sequence parser.
//!
//! Bytes go in through [`Parser::parse_fragment`]; semantic events
//! (print, execute, CSI/ESC dispatch, DCS hook/put/unhook, OSC/APC/PM
//! payloads) come out through the [`Actor`] trait. The grammar is the
//! DEC VT state machine widened for UTF-8 input, with a batched fast
//! path for runs of printable text.

mod actor;
mod enums;
mod error;
mod parser;
pub mod scan;
mod table;

pub use actor::Actor;
pub use enums::{Action, ActionClass, State};
pub use error::ParserError;
pub use parser::{Parser, DEFAULT_MAX_CHAR_COUNT};
