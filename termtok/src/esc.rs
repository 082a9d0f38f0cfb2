//! Dispatch tables for the plain-escape families.
//!
//! Everything here maps a single byte (or, for device reports, a two-byte
//! body) to its catalog entry. Unmapped bytes yield `None`: the sequence is
//! consumed and silently discarded.

use log::debug;

use crate::catalog::EscapeCode;

/// Single-byte sequences directly after the introducer.
pub(crate) fn dispatch(byte: u8) -> Option<EscapeCode> {
    use EscapeCode::*;

    match byte {
        // IND - move down one line, scrolling if necessary
        b'D' => Some(Index),
        // RI - move up one line, scrolling if necessary
        b'M' => Some(RevIndex),
        // SS2 - single shift to G2
        b'N' => Some(SetSS2),
        // SS3 - single shift to G3
        b'O' => Some(SetSS3),
        // NEL - next line
        b'E' => Some(NextLine),
        // DECSC - save cursor position and attributes
        b'7' => Some(SaveCursor),
        // DECRC - restore saved cursor position and attributes
        b'8' => Some(RestoreCursor),
        // DECPAM - application keypad
        b'=' => Some(AltKeypad),
        // DECPNM - numeric keypad
        b'>' => Some(NumKeypad),
        // HTS - set tab at current column
        b'H' => Some(TabSet),
        // RIS - full reset
        b'c' => Some(Reset),
        _ => {
            debug!("[unexpected: esc] byte: {byte:#04x}");
            None
        },
    }
}

/// `ESC #` double-height/width and alignment display controls.
pub(crate) fn pound(byte: u8) -> Option<EscapeCode> {
    use EscapeCode::*;

    match byte {
        // DECDHL - double-height line, top half
        b'3' => Some(DhTop),
        // DECDHL - double-height line, bottom half
        b'4' => Some(DhBot),
        // DECSWL - single-width line
        b'5' => Some(Swsh),
        // DECDWL - double-width line
        b'6' => Some(Dwsh),
        // DECALN - screen alignment display
        b'8' => Some(Align),
        _ => {
            debug!("[unexpected: esc #] byte: {byte:#04x}");
            None
        },
    }
}

/// `ESC (` G0 character set designation.
pub(crate) fn charset_g0(byte: u8) -> Option<EscapeCode> {
    use EscapeCode::*;

    match byte {
        b'A' => Some(SetUKG0),
        b'B' => Some(SetUSG0),
        b'0' => Some(SetSpecG0),
        b'1' => Some(SetAltG0),
        b'2' => Some(SetAltSpecG0),
        _ => {
            debug!("[unexpected: esc (] byte: {byte:#04x}");
            None
        },
    }
}

/// `ESC )` G1 character set designation.
pub(crate) fn charset_g1(byte: u8) -> Option<EscapeCode> {
    use EscapeCode::*;

    match byte {
        b'A' => Some(SetUKG1),
        b'B' => Some(SetUSG1),
        b'0' => Some(SetSpecG1),
        b'1' => Some(SetAltG1),
        b'2' => Some(SetAltSpecG1),
        _ => {
            debug!("[unexpected: esc )] byte: {byte:#04x}");
            None
        },
    }
}

/// Bracketless device reports: `body` is the digit plus the byte that
/// followed it.
pub(crate) fn device_report(body: &[u8]) -> Option<EscapeCode> {
    use EscapeCode::*;

    match body {
        // DSR - device status report
        b"5n" => Some(DevStat),
        // CPR request - report cursor position
        b"6n" => Some(GetCursor),
        _ => {
            debug!("[unexpected: esc digit] body: {body:?}");
            None
        },
    }
}
