//! Token values produced by the lexer.

use std::fmt;

use crate::catalog::EscapeCode;

/// Discriminator carried by every [`Token`].
///
/// Either a recognized escape sequence from the catalog or a bare 7-bit
/// character that arrived outside any sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenValue {
    /// A literal character arrived, unescaped.
    Literal(u8),
    /// A fully recognized escape sequence.
    Escape(EscapeCode),
}

impl TokenValue {
    /// Canonical catalog name, or `"?"` for anything without one
    /// (all literal characters fall back to `"?"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Literal(_) => "?",
            Self::Escape(code) => code.name(),
        }
    }
}

impl From<EscapeCode> for TokenValue {
    fn from(code: EscapeCode) -> Self {
        Self::Escape(code)
    }
}

/// One recognized unit of terminal input.
///
/// Immutable after creation; ownership passes to whoever reads it off the
/// outbound queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Which catalog outcome this token represents.
    pub value: TokenValue,
    /// Decoded numeric parameters, empty for sequences without any.
    pub params: Vec<u16>,
    /// Captured escape sequence bytes, starting with the 0x1B introducer.
    /// Empty for literal characters.
    pub raw: Vec<u8>,
}

impl Token {
    pub(crate) fn literal(byte: u8) -> Self {
        Self {
            value: TokenValue::Literal(byte),
            params: Vec::new(),
            raw: Vec::new(),
        }
    }

    pub(crate) fn escape(code: EscapeCode, params: Vec<u16>, raw: Vec<u8>) -> Self {
        Self {
            value: TokenValue::Escape(code),
            params,
            raw,
        }
    }
}

/// Diagnostic rendering only; the recognition contract is the typed fields.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} params: {:?} raw: {:?}",
            self.value.name(),
            self.params,
            self.raw
        )
    }
}
