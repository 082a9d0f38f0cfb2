//! Synchronous state machine driver.
//!
//! [`Machine`] consumes one byte at a time and yields at most one [`Token`]
//! per byte. It owns the current state and the capture buffer; the
//! transition table in [`crate::transitions`] decides where to go, the
//! dispatch tables in [`crate::esc`] and [`crate::csi`] decide what to emit.
//! Embedders that drive their own event loop can use this type directly
//! instead of the threaded [`Lexer`](crate::Lexer).

use crate::catalog::EscapeCode;
use crate::token::Token;
use crate::transitions::{self, Action, State};
use crate::{csi, esc};

#[derive(Default)]
pub struct Machine {
    state: State,
    /// Raw bytes captured since the last time we left ground, introducer
    /// first. Empty while consuming ordinary characters.
    seq: Vec<u8>,
}

impl Machine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one byte, producing a token when a unit is fully recognized.
    ///
    /// The byte is masked to the 7-bit working range before interpretation.
    /// Unrecognized or malformed sequences are consumed without producing
    /// anything; the machine is back at ground afterwards.
    pub fn step(&mut self, byte: u8) -> Option<Token> {
        let byte = byte & 0x7f;

        if !self.seq.is_empty() {
            self.seq.push(byte);
        }

        let (next_state, action) = transitions::transit(self.state, byte);
        let token = self.perform(action, byte);

        self.state = next_state;
        if next_state == State::Ground {
            self.seq.clear();
        }

        token
    }

    fn perform(&mut self, action: Action, byte: u8) -> Option<Token> {
        match action {
            Action::None => None,
            Action::EmitLiteral => Some(Token::literal(byte)),
            Action::Begin => {
                self.seq.push(byte);
                None
            },
            Action::EscDispatch => {
                let code = esc::dispatch(byte)?;
                self.emit(code, Vec::new())
            },
            Action::CsiDispatch => {
                // seq is ESC [ <body> <terminator> at this point.
                let body = &self.seq[2..self.seq.len() - 1];
                let (code, params) = csi::dispatch(body, byte)?;
                self.emit(code, params)
            },
            Action::PoundDispatch => {
                let code = esc::pound(byte)?;
                self.emit(code, Vec::new())
            },
            Action::CharsetG0Dispatch => {
                let code = esc::charset_g0(byte)?;
                self.emit(code, Vec::new())
            },
            Action::CharsetG1Dispatch => {
                let code = esc::charset_g1(byte)?;
                self.emit(code, Vec::new())
            },
            Action::DigitDispatch => {
                let code = esc::device_report(&self.seq[1..])?;
                self.emit(code, Vec::new())
            },
            Action::Abort => None,
        }
    }

    fn emit(&mut self, code: EscapeCode, params: Vec<u16>) -> Option<Token> {
        Some(Token::escape(code, params, std::mem::take(&mut self.seq)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenValue;
    use EscapeCode::*;

    fn parse(bytes: &[u8]) -> Vec<Token> {
        let mut machine = Machine::new();
        bytes.iter().filter_map(|&byte| machine.step(byte)).collect()
    }

    fn values(bytes: &[u8]) -> Vec<TokenValue> {
        parse(bytes).into_iter().map(|token| token.value).collect()
    }

    #[test]
    fn bare_characters_pass_through() {
        assert_eq!(
            values(b"A"),
            vec![TokenValue::Literal(b'A')]
        );
        assert_eq!(
            values(b"hi\n"),
            vec![
                TokenValue::Literal(b'h'),
                TokenValue::Literal(b'i'),
                TokenValue::Literal(b'\n'),
            ]
        );
    }

    #[test]
    fn high_bit_is_stripped_before_interpretation() {
        assert_eq!(values(&[b'A' | 0x80]), vec![TokenValue::Literal(b'A')]);
        // 0x9b masks to ESC and starts a sequence.
        assert_eq!(values(&[0x9b, b'[', b'H']), vec![CursorHome.into()]);
    }

    #[test]
    fn cursor_home() {
        let tokens = parse(b"\x1b[H");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, CursorHome.into());
        assert_eq!(tokens[0].params, Vec::<u16>::new());
        assert_eq!(tokens[0].raw, b"\x1b[H");
    }

    #[test]
    fn cursor_position_with_params() {
        let tokens = parse(b"\x1b[13;17H");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, CursorPos.into());
        assert_eq!(tokens[0].params, vec![13, 17]);
        assert_eq!(tokens[0].raw, b"\x1b[13;17H");
    }

    #[test]
    fn application_keypad_mode() {
        assert_eq!(values(b"\x1b[?1h"), vec![SetAppl.into()]);
    }

    #[test]
    fn charset_designation() {
        assert_eq!(values(b"\x1b(A"), vec![SetUKG0.into()]);
        assert_eq!(values(b"\x1b)0"), vec![SetSpecG1.into()]);
    }

    #[test]
    fn direct_escapes() {
        assert_eq!(values(b"\x1bD"), vec![Index.into()]);
        assert_eq!(values(b"\x1b7"), vec![SaveCursor.into()]);
        assert_eq!(values(b"\x1b8"), vec![RestoreCursor.into()]);
        assert_eq!(values(b"\x1b#8"), vec![Align.into()]);
    }

    #[test]
    fn device_reports_without_bracket() {
        assert_eq!(values(b"\x1b5n"), vec![DevStat.into()]);
        assert_eq!(values(b"\x1b6n"), vec![GetCursor.into()]);
        assert_eq!(values(b"\x1b5x"), vec![]);
    }

    #[test]
    fn unknown_terminator_yields_nothing_and_recovers() {
        assert_eq!(values(b"\x1b[99z"), vec![]);
        // Ground again: a known-good sequence right after still matches.
        assert_eq!(values(b"\x1b[99z\x1b[H"), vec![CursorHome.into()]);
    }

    #[test]
    fn malformed_bodies_yield_nothing() {
        assert_eq!(values(b"\x1b[?2h"), vec![]);
        assert_eq!(values(b"\x1b[1;m"), vec![]);
        assert_eq!(values(b"\x1b[;5H"), vec![]);
    }

    #[test]
    fn control_byte_mid_body_aborts_the_sequence() {
        // The space aborts; the following bytes come through as literals.
        assert_eq!(
            values(b"\x1b[1 m"),
            vec![TokenValue::Literal(b'm')]
        );
        // The aborted capture does not leak into the next sequence.
        assert_eq!(
            values(b"\x1b[12\x07\x1b[2J"),
            vec![ClearScreen.into()]
        );
    }

    #[test]
    fn unmapped_family_byte_discards_the_sequence() {
        assert_eq!(values(b"\x1bQ"), vec![]);
        assert_eq!(values(b"\x1b#7"), vec![]);
        assert_eq!(values(b"\x1b(9"), vec![]);
    }

    #[test]
    fn back_to_back_sequences_stay_ordered() {
        assert_eq!(
            values(b"\x1b[2J\x1b[13;17H"),
            vec![ClearScreen.into(), CursorPos.into()]
        );
        let tokens = parse(b"\x1b[1;24r\x1b[5A");
        assert_eq!(tokens[0].params, vec![1, 24]);
        assert_eq!(tokens[1].params, vec![5]);
    }

    #[test]
    fn literals_between_sequences() {
        assert_eq!(
            values(b"a\x1b[Hb"),
            vec![
                TokenValue::Literal(b'a'),
                CursorHome.into(),
                TokenValue::Literal(b'b'),
            ]
        );
    }

    #[test]
    fn raw_capture_spans_the_whole_sequence() {
        let tokens = parse(b"\x1b[?7l");
        assert_eq!(tokens[0].raw, b"\x1b[?7l");
        let tokens = parse(b"\x1b(B");
        assert_eq!(tokens[0].raw, b"\x1b(B");
    }

    // Coordinates beyond single-byte range decode intact end to end.
    #[test]
    fn wide_coordinates_survive() {
        let tokens = parse(b"\x1b[300;400H");
        assert_eq!(tokens[0].value, CursorPos.into());
        assert_eq!(tokens[0].params, vec![300, 400]);
    }
}
