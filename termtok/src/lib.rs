//! Lexer for VT100 escape sequences.
//!
//! Recognizes the fixed VT100 catalog of control sequences inside an
//! arbitrary byte stream and turns each one into a typed [`Token`]. Drive
//! the [`Machine`] directly from your own loop, or use the threaded
//! [`Lexer`] to feed bytes from one side and drain tokens from the other.

mod catalog;
mod csi;
mod error;
mod esc;
mod machine;
mod stream;
mod token;
mod transitions;

pub use catalog::EscapeCode;
pub use error::{Error, Result};
pub use machine::Machine;
pub use stream::Lexer;
pub use token::{Token, TokenValue};
