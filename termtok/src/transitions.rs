//! Transition helpers for the escape sequence finite state machine.
//!
//! Each function in this module is responsible for a specific lexer state:
//! given an input byte it returns the next [`State`] and the [`Action`] the
//! machine driver should perform. Keeping the transitions table-driven makes
//! it straightforward to audit coverage for the different sequence families
//! (bracket sequences, charset designation, `#` display controls, and the
//! bracketless device reports).

/// Position of the lexer in the recognition graph.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// Ordinary input; no sequence in progress.
    #[default]
    Ground,
    /// Saw the 0x1B introducer, waiting for the family byte.
    Escape,
    /// Inside `ESC [`, accumulating the body until a terminator letter.
    CsiBody,
    /// Saw `ESC #`, one more byte selects a display control.
    Pound,
    /// Saw `ESC (`, one more byte designates the G0 charset.
    CharsetG0,
    /// Saw `ESC )`, one more byte designates the G1 charset.
    CharsetG1,
    /// Saw `ESC <digit>`, one more byte completes a device report.
    EscapeDigit,
}

/// What the machine driver must do for the byte just consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Nothing beyond recording the byte in the capture buffer.
    None,
    /// Emit the byte itself as a literal token.
    EmitLiteral,
    /// Start a fresh capture buffer with this introducer byte.
    Begin,
    /// Emit the single-byte escape mapped from this byte, if any.
    EscDispatch,
    /// Interpret the accumulated bracket body against the grammar table.
    CsiDispatch,
    /// Map this byte through the `ESC #` table.
    PoundDispatch,
    /// Map this byte through the G0 charset designation table.
    CharsetG0Dispatch,
    /// Map this byte through the G1 charset designation table.
    CharsetG1Dispatch,
    /// Interpret the two-byte bracketless device report body.
    DigitDispatch,
    /// Discard the capture buffer and return to ground.
    Abort,
}

#[inline(always)]
const fn ground(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x1b => (Escape, Begin),
        _ => (Ground, EmitLiteral),
    }
}

#[inline(always)]
const fn escape(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        b'[' => (CsiBody, None),
        b'(' => (CharsetG0, None),
        b')' => (CharsetG1, None),
        b'#' => (Pound, None),
        // Single-byte sequences; `7` and `8` take precedence over the
        // digit rule below.
        b'D' | b'M' | b'N' | b'O' | b'E' | b'7' | b'8' | b'=' | b'>' | b'H'
        | b'c' => (Ground, EscDispatch),
        // Device reports carry no `[`.
        b'0'..=b'9' => (EscapeDigit, None),
        _ => (Ground, Abort),
    }
}

#[inline(always)]
const fn csi_body(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        // The first letter terminates the body and selects the
        // interpretation table.
        b'A'..=b'Z' | b'a'..=b'z' => (Ground, CsiDispatch),
        // Printable non-whitespace bytes accumulate in the capture buffer.
        0x21..=0x7e => (CsiBody, None),
        // Control bytes and whitespace invalidate the whole sequence.
        _ => (Ground, Abort),
    }
}

/// Core transition table that delegates to state-specific helpers.
#[inline(always)]
pub(crate) const fn transit(state: State, byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match state {
        Ground => ground(byte),
        Escape => escape(byte),
        CsiBody => csi_body(byte),
        Pound => (Ground, PoundDispatch),
        CharsetG0 => (Ground, CharsetG0Dispatch),
        CharsetG1 => (Ground, CharsetG1Dispatch),
        EscapeDigit => (Ground, DigitDispatch),
    }
}
