//! Interpreter for `ESC [` bracket sequences.
//!
//! The terminator letter selects an interpretation table and the body
//! (everything between `[` and the terminator) picks the variant within
//! it. Bodies that match no variant for their terminator produce no token
//! at all; partial or malformed device output is dropped, never surfaced
//! as an error.

use log::debug;

use crate::catalog::EscapeCode;

/// Decoded outcome of a terminated bracket sequence.
pub(crate) type Decoded = (EscapeCode, Vec<u16>);

fn plain(code: EscapeCode) -> Option<Decoded> {
    Some((code, Vec::new()))
}

/// Strict parse of the whole body as one coordinate field.
///
/// Parameters are u16 rather than a single byte so multi-digit terminal
/// coordinates survive undamaged; a field that does not parse fails the
/// match, not the stream.
fn parse_single(body: &str) -> Option<u16> {
    body.parse().ok()
}

/// Strict parse of the whole body as `<first>;<second>`.
fn parse_pair(body: &str) -> Option<(u16, u16)> {
    let (first, second) = body.split_once(';')?;
    Some((first.parse().ok()?, second.parse().ok()?))
}

/// Interpret `body` (terminator excluded) against the grammar table for
/// `terminator`.
pub(crate) fn dispatch(body: &[u8], terminator: u8) -> Option<Decoded> {
    use EscapeCode::*;

    // Bodies only ever contain printable ASCII; the accumulating state
    // rejects everything else before we get here.
    let body = std::str::from_utf8(body).ok()?;

    let decoded = match terminator {
        b'h' => match body {
            "20" => plain(SetNL),
            "?1" => plain(SetAppl),
            "?3" => plain(SetCol),
            "?4" => plain(SetSmooth),
            "?5" => plain(SetRevScrn),
            "?6" => plain(SetOrgRel),
            "?7" => plain(SetWrap),
            "?8" => plain(SetRep),
            "?9" => plain(SetInter),
            _ => None,
        },

        b'l' => match body {
            "20" => plain(SetLF),
            "?1" => plain(SetCursor),
            "?2" => plain(SetVT52),
            "?3" => plain(ResetCol),
            "?4" => plain(SetJump),
            "?5" => plain(SetNormScrn),
            "?6" => plain(SetOrgAbs),
            "?7" => plain(ResetWrap),
            "?8" => plain(ResetRep),
            "?9" => plain(ResetInter),
            _ => None,
        },

        b'm' => match body {
            "" | "0" => plain(ModesOff),
            "1" => plain(Bold),
            "2" => plain(LowInt),
            "4" => plain(Underline),
            "5" => plain(Blink),
            "7" => plain(Reverse),
            "8" => plain(Invisible),
            _ => None,
        },

        // DECSTBM - set scrolling region
        b'r' => parse_pair(body).map(|(top, bottom)| (SetWin, vec![top, bottom])),

        b'A' => parse_single(body).map(|n| (CursorUp, vec![n])),
        b'B' => parse_single(body).map(|n| (CursorDn, vec![n])),
        b'C' => parse_single(body).map(|n| (CursorRt, vec![n])),
        b'D' => parse_single(body).map(|n| (CursorLf, vec![n])),

        b'H' => match body {
            "" | ";" => plain(CursorHome),
            _ => parse_pair(body).map(|(v, h)| (CursorPos, vec![v, h])),
        },

        b'f' => match body {
            "" | ";" => plain(HvHome),
            _ => parse_pair(body).map(|(v, h)| (HvPos, vec![v, h])),
        },

        b'g' => match body {
            "" | "0" => plain(TabClr),
            "3" => plain(TabClrAll),
            _ => None,
        },

        b'K' => match body {
            "" | "0" => plain(ClearEOL),
            "1" => plain(ClearBOL),
            "2" => plain(ClearLine),
            _ => None,
        },

        b'J' => match body {
            "" | "0" => plain(ClearEOS),
            "1" => plain(ClearBOS),
            "2" => plain(ClearScreen),
            _ => None,
        },

        b'c' => match body {
            "" | "0" => plain(Ident),
            _ => None,
        },

        // Confidence tests: power-up, loopback and their repeating forms.
        b'y' => match body {
            "2;1" => plain(TestPU),
            "2;2" => plain(TestLB),
            "2;9" => plain(TestPURep),
            "2;10" => plain(TestLBRep),
            _ => None,
        },

        // Keyboard LED controls.
        b'q' => match body {
            "0" => plain(LedsOff),
            "1" => plain(Led1),
            "2" => plain(Led2),
            "3" => plain(Led3),
            "4" => plain(Led4),
            _ => None,
        },

        _ => None,
    };

    if decoded.is_none() {
        debug!(
            "[unexpected: csi] terminator: {:?} body: {body:?}",
            terminator as char
        );
    }

    decoded
}
