//! The statically-computed transition table of the state machine.
//!
//! The table is four dense arrays: per-(state, byte) transitions and
//! events, plus per-state entry and exit actions. It is populated by a
//! handful of `const` builder primitives so the rule set below reads
//! like the grammar it encodes, and is evaluated once at compile time
//! into [`TABLE`]. Being read-only, the table is shared by every parser
//! instance without synchronisation.
//!
//! A byte not mentioned in any rule for a state stays
//! [`State::Undefined`] / [`Action::Undefined`]; the dispatcher reports
//! such pairs through the actor's `error` callback.

use crate::enums::{Action, State};

pub(crate) struct TransitionTable {
    /// `transitions[state][byte]`; [`State::Undefined`] means "stay".
    pub(crate) transitions: [[State; 256]; State::COUNT],
    /// `events[state][byte]`; fired as the same-state or transition
    /// action depending on whether a transition is defined.
    pub(crate) events: [[Action; 256]; State::COUNT],
    /// Action fired when a state is entered.
    pub(crate) entry_events: [Action; State::COUNT],
    /// Action fired when a state is left.
    pub(crate) exit_events: [Action; State::COUNT],
}

impl TransitionTable {
    const fn new() -> Self {
        Self {
            transitions: [[State::Undefined; 256]; State::COUNT],
            events: [[Action::Undefined; 256]; State::COUNT],
            entry_events: [Action::Undefined; State::COUNT],
            exit_events: [Action::Undefined; State::COUNT],
        }
    }

    /// Associates `action` with every byte in `lo..=hi`, without a state
    /// change.
    const fn event(&mut self, state: State, action: Action, lo: u8, hi: u8) {
        let mut byte = lo as usize;
        while byte <= hi as usize {
            self.events[state as usize][byte] = action;
            byte += 1;
        }
    }

    /// Moves to `next` on every byte in `lo..=hi`, with no action.
    const fn transition(&mut self, state: State, next: State, lo: u8, hi: u8) {
        let mut byte = lo as usize;
        while byte <= hi as usize {
            self.transitions[state as usize][byte] = next;
            byte += 1;
        }
    }

    /// Moves to `next` on every byte in `lo..=hi` and fires `action` as
    /// the transition action.
    const fn transition_with(
        &mut self,
        state: State,
        next: State,
        action: Action,
        lo: u8,
        hi: u8,
    ) {
        let mut byte = lo as usize;
        while byte <= hi as usize {
            self.transitions[state as usize][byte] = next;
            self.events[state as usize][byte] = action;
            byte += 1;
        }
    }

    const fn entry(&mut self, state: State, action: Action) {
        self.entry_events[state as usize] = action;
    }

    const fn exit(&mut self, state: State, action: Action) {
        self.exit_events[state as usize] = action;
    }

    pub(crate) const fn build() -> Self {
        use Action::*;
        use State::*;

        let mut t = Self::new();

        // Ground. The 0xA0..=0xFF and 0x80..=0xFF print ranges overlap
        // on purpose: the whole high half stays printable so UTF-8 lead
        // and continuation bytes reach the text fast path.
        t.event(Ground, Execute, 0x00, 0x17);
        t.event(Ground, Execute, 0x19, 0x19);
        t.event(Ground, Execute, 0x1C, 0x1F);
        t.event(Ground, Print, 0x20, 0x7F);
        t.event(Ground, Print, 0xA0, 0xFF);
        t.event(Ground, Print, 0x80, 0xFF);

        // Escape
        t.entry(Escape, Clear);
        t.event(Escape, Execute, 0x00, 0x17);
        t.event(Escape, Execute, 0x19, 0x19);
        t.event(Escape, Execute, 0x1C, 0x1F);
        t.event(Escape, Ignore, 0x7F, 0x7F);
        t.transition(Escape, IgnoreUntilSt, 0x58, 0x58); // ESC X (SOS)
        t.transition(Escape, PmString, 0x5E, 0x5E); // ESC ^
        t.transition(Escape, ApcString, 0x5F, 0x5F); // ESC _
        t.transition(Escape, DcsEntry, 0x50, 0x50); // ESC P
        t.transition(Escape, OscString, 0x5D, 0x5D); // ESC ]
        t.transition(Escape, CsiEntry, 0x5B, 0x5B); // ESC [
        t.transition_with(Escape, Ground, EscDispatch, 0x30, 0x4F);
        t.transition_with(Escape, Ground, EscDispatch, 0x51, 0x57);
        t.transition_with(Escape, Ground, EscDispatch, 0x59, 0x5A);
        t.transition_with(Escape, Ground, Ignore, 0x5C, 0x5C); // ESC \ (ST)
        t.transition_with(Escape, Ground, EscDispatch, 0x60, 0x7E);
        t.transition_with(Escape, EscapeIntermediate, Collect, 0x20, 0x2F);

        // EscapeIntermediate
        t.event(EscapeIntermediate, Execute, 0x00, 0x17);
        t.event(EscapeIntermediate, Execute, 0x19, 0x19);
        t.event(EscapeIntermediate, Execute, 0x1C, 0x1F);
        t.event(EscapeIntermediate, Collect, 0x20, 0x2F);
        t.event(EscapeIntermediate, Ignore, 0x7F, 0x7F);
        t.transition_with(EscapeIntermediate, Ground, EscDispatch, 0x30, 0x7E);

        // CsiEntry
        t.entry(CsiEntry, Clear);
        t.event(CsiEntry, Execute, 0x00, 0x17);
        t.event(CsiEntry, Execute, 0x19, 0x19);
        t.event(CsiEntry, Execute, 0x1C, 0x1F);
        t.event(CsiEntry, Ignore, 0x7F, 0x7F);
        t.transition_with(CsiEntry, Ground, CsiDispatch, 0x40, 0x7E);
        t.transition_with(CsiEntry, CsiIntermediate, Collect, 0x20, 0x2F);
        t.transition(CsiEntry, CsiIgnore, 0x3A, 0x3A);
        t.transition_with(CsiEntry, CsiParam, ParamDigit, 0x30, 0x39);
        t.transition_with(CsiEntry, CsiParam, ParamSeparator, 0x3B, 0x3B);
        t.transition_with(CsiEntry, CsiParam, CollectLeader, 0x3C, 0x3F);

        // CsiParam
        t.event(CsiParam, Execute, 0x00, 0x17);
        t.event(CsiParam, Execute, 0x19, 0x19);
        t.event(CsiParam, Execute, 0x1C, 0x1F);
        t.event(CsiParam, ParamDigit, 0x30, 0x39);
        t.event(CsiParam, ParamSubSeparator, 0x3A, 0x3A);
        t.event(CsiParam, ParamSeparator, 0x3B, 0x3B);
        t.event(CsiParam, Ignore, 0x7F, 0x7F);
        t.transition(CsiParam, CsiIgnore, 0x3C, 0x3F);
        t.transition_with(CsiParam, CsiIntermediate, Collect, 0x20, 0x2F);
        t.transition_with(CsiParam, Ground, CsiDispatch, 0x40, 0x7E);

        // CsiIntermediate
        t.event(CsiIntermediate, Execute, 0x00, 0x17);
        t.event(CsiIntermediate, Execute, 0x19, 0x19);
        t.event(CsiIntermediate, Execute, 0x1C, 0x1F);
        t.event(CsiIntermediate, Collect, 0x20, 0x2F);
        t.event(CsiIntermediate, Ignore, 0x7F, 0x7F);
        t.transition(CsiIntermediate, CsiIgnore, 0x30, 0x3F);
        t.transition_with(CsiIntermediate, Ground, CsiDispatch, 0x40, 0x7E);

        // CsiIgnore
        t.event(CsiIgnore, Execute, 0x00, 0x17);
        t.event(CsiIgnore, Execute, 0x19, 0x19);
        t.event(CsiIgnore, Execute, 0x1C, 0x1F);
        t.event(CsiIgnore, Ignore, 0x20, 0x3F);
        t.event(CsiIgnore, Ignore, 0x7F, 0x7F);
        t.transition(CsiIgnore, Ground, 0x40, 0x7E);

        // DcsEntry
        t.entry(DcsEntry, Clear);
        t.event(DcsEntry, Ignore, 0x00, 0x17);
        t.event(DcsEntry, Ignore, 0x19, 0x19);
        t.event(DcsEntry, Ignore, 0x1C, 0x1F);
        t.event(DcsEntry, Ignore, 0x7F, 0x7F);
        t.transition_with(DcsEntry, DcsIntermediate, Collect, 0x20, 0x2F);
        t.transition(DcsEntry, DcsIgnore, 0x3A, 0x3A);
        t.transition_with(DcsEntry, DcsParam, Param, 0x30, 0x39);
        t.transition_with(DcsEntry, DcsParam, Param, 0x3B, 0x3B);
        t.transition_with(DcsEntry, DcsParam, CollectLeader, 0x3C, 0x3F);
        t.transition(DcsEntry, DcsPassThrough, 0x40, 0x7E);

        // DcsParam
        t.event(DcsParam, Execute, 0x00, 0x17);
        t.event(DcsParam, Execute, 0x19, 0x19);
        t.event(DcsParam, Execute, 0x1C, 0x1F);
        t.event(DcsParam, Param, 0x30, 0x39);
        t.event(DcsParam, Param, 0x3B, 0x3B);
        t.event(DcsParam, Ignore, 0x7F, 0x7F);
        t.transition(DcsParam, DcsIgnore, 0x3A, 0x3A);
        t.transition(DcsParam, DcsIgnore, 0x3C, 0x3F);
        t.transition(DcsParam, DcsIntermediate, 0x20, 0x2F);
        t.transition(DcsParam, DcsPassThrough, 0x40, 0x7E);

        // DcsIntermediate
        t.event(DcsIntermediate, Ignore, 0x00, 0x17);
        t.event(DcsIntermediate, Ignore, 0x19, 0x19);
        t.event(DcsIntermediate, Ignore, 0x1C, 0x1F);
        t.event(DcsIntermediate, Collect, 0x20, 0x2F);
        t.event(DcsIntermediate, Ignore, 0x7F, 0x7F);
        t.transition(DcsIntermediate, DcsPassThrough, 0x40, 0x7E);

        // DcsPassThrough
        t.entry(DcsPassThrough, Hook);
        t.exit(DcsPassThrough, Unhook);
        t.event(DcsPassThrough, Put, 0x00, 0x17);
        t.event(DcsPassThrough, Put, 0x19, 0x19);
        t.event(DcsPassThrough, Put, 0x1C, 0x1F);
        t.event(DcsPassThrough, Put, 0x20, 0x7E);
        t.event(DcsPassThrough, Ignore, 0x7F, 0x7F);

        // DcsIgnore. Stray high bytes inside an ignored DCS are
        // rendered, mirroring xterm.
        t.event(DcsIgnore, Ignore, 0x00, 0x17);
        t.event(DcsIgnore, Ignore, 0x19, 0x19);
        t.event(DcsIgnore, Ignore, 0x1C, 0x1F);
        t.event(DcsIgnore, Ignore, 0x20, 0x7F);
        t.event(DcsIgnore, Print, 0xA0, 0xFF);
        t.event(DcsIgnore, Print, 0x80, 0xFF);

        // OscString. BEL as terminator is an xterm extension; the 8-bit
        // ST (0x9C) stays a payload byte because it can be a UTF-8
        // continuation byte.
        t.entry(OscString, OscStart);
        t.exit(OscString, OscEnd);
        t.event(OscString, Ignore, 0x00, 0x06);
        t.event(OscString, Ignore, 0x08, 0x17);
        t.event(OscString, Ignore, 0x19, 0x19);
        t.event(OscString, Ignore, 0x1C, 0x1F);
        t.event(OscString, OscPut, 0x20, 0x7F);
        t.event(OscString, OscPut, 0xA0, 0xFF);
        t.event(OscString, OscPut, 0x80, 0xFF);
        t.transition(OscString, Ground, 0x07, 0x07);

        // ApcString := ESC _ ... ST
        t.entry(ApcString, ApcStart);
        t.exit(ApcString, ApcEnd);
        t.event(ApcString, ApcPut, 0x20, 0x7F);
        t.event(ApcString, ApcPut, 0xA0, 0xFF);
        t.event(ApcString, ApcPut, 0x80, 0xFF);
        t.transition(ApcString, Ground, 0x07, 0x07);

        // PmString := ESC ^ ... ST
        t.entry(PmString, PmStart);
        t.exit(PmString, PmEnd);
        t.event(PmString, PmPut, 0x00, 0x17);
        t.event(PmString, PmPut, 0x19, 0x19);
        t.event(PmString, PmPut, 0x1C, 0x1F);
        t.event(PmString, PmPut, 0x20, 0x7F);
        t.event(PmString, PmPut, 0xA0, 0xFF);
        t.event(PmString, PmPut, 0x80, 0xFF);
        t.transition(PmString, Ground, 0x07, 0x07);

        // IgnoreUntilSt
        t.event(IgnoreUntilSt, Ignore, 0x00, 0x17);
        t.event(IgnoreUntilSt, Ignore, 0x19, 0x19);
        t.event(IgnoreUntilSt, Ignore, 0x1C, 0x1F);

        // Anywhere rules come last: CAN, SUB and ESC override whatever a
        // state defined for those bytes.
        let mut state = 0;
        while state < State::COUNT {
            t.transitions[state][0x18] = Ground;
            t.transitions[state][0x1A] = Ground;
            t.transitions[state][0x1B] = Escape;
            state += 1;
        }

        t
    }
}

pub(crate) static TABLE: TransitionTable = TransitionTable::build();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anywhere_bytes_override_every_state() {
        for state in State::ALL {
            let s = state as usize;
            assert_eq!(TABLE.transitions[s][0x18], State::Ground, "{state:?}");
            assert_eq!(TABLE.transitions[s][0x1A], State::Ground, "{state:?}");
            assert_eq!(TABLE.transitions[s][0x1B], State::Escape, "{state:?}");
        }
    }

    #[test]
    fn ground_covers_every_byte() {
        let s = State::Ground as usize;
        for byte in 0..=255usize {
            let covered = TABLE.transitions[s][byte] != State::Undefined
                || TABLE.events[s][byte] != Action::Undefined;
            assert!(covered, "no rule for 0x{byte:02X} in Ground");
        }
    }

    #[test]
    fn csi_states_cover_the_seven_bit_range() {
        let states = [
            State::CsiEntry,
            State::CsiParam,
            State::CsiIntermediate,
            State::CsiIgnore,
        ];
        for state in states {
            let s = state as usize;
            for byte in 0..=0x7Fusize {
                let covered = TABLE.transitions[s][byte] != State::Undefined
                    || TABLE.events[s][byte] != Action::Undefined;
                assert!(covered, "no rule for 0x{byte:02X} in {state:?}");
            }
        }
    }

    #[test]
    fn entry_and_exit_actions_match_the_lifecycles() {
        let entry = |state: State| TABLE.entry_events[state as usize];
        let exit = |state: State| TABLE.exit_events[state as usize];

        assert_eq!(entry(State::Escape), Action::Clear);
        assert_eq!(entry(State::CsiEntry), Action::Clear);
        assert_eq!(entry(State::DcsEntry), Action::Clear);
        assert_eq!(entry(State::DcsPassThrough), Action::Hook);
        assert_eq!(exit(State::DcsPassThrough), Action::Unhook);
        assert_eq!(entry(State::OscString), Action::OscStart);
        assert_eq!(exit(State::OscString), Action::OscEnd);
        assert_eq!(entry(State::ApcString), Action::ApcStart);
        assert_eq!(exit(State::ApcString), Action::ApcEnd);
        assert_eq!(entry(State::PmString), Action::PmStart);
        assert_eq!(exit(State::PmString), Action::PmEnd);

        assert_eq!(entry(State::Ground), Action::Undefined);
        assert_eq!(exit(State::Ground), Action::Undefined);
        assert_eq!(exit(State::Escape), Action::Undefined);
    }

    #[test]
    fn eight_bit_st_stays_a_payload_byte() {
        for state in [State::OscString, State::ApcString, State::PmString] {
            let s = state as usize;
            assert_eq!(TABLE.transitions[s][0x9C], State::Undefined);
        }
        assert_eq!(
            TABLE.events[State::OscString as usize][0x9C],
            Action::OscPut
        );
        assert_eq!(
            TABLE.events[State::PmString as usize][0x9C],
            Action::PmPut
        );
    }

    #[test]
    fn ignored_dcs_renders_stray_high_bytes() {
        let s = State::DcsIgnore as usize;
        assert_eq!(TABLE.events[s][0xA5], Action::Print);
        assert_eq!(TABLE.events[s][0x41], Action::Ignore);
    }

    #[test]
    fn escape_st_form_dispatches_nothing() {
        let s = State::Escape as usize;
        assert_eq!(TABLE.transitions[s][0x5C], State::Ground);
        assert_eq!(TABLE.events[s][0x5C], Action::Ignore);
    }
}
