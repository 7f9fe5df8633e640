use thiserror::Error;

use crate::enums::State;

/// Diagnostic reported through [`Actor::error`](crate::Actor::error).
///
/// Diagnostics are never fatal: the parser keeps its state and continues
/// with the next byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParserError {
    /// Neither a transition nor an event is defined for the given state
    /// and input byte.
    #[error("unknown action for state/input pair ({state:?}, 0x{byte:02X})")]
    UnknownAction {
        /// State the parser was in when the byte arrived.
        state: State,
        /// The offending input byte.
        byte: u8,
    },
}
