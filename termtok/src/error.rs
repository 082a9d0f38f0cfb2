use thiserror::Error;

/// Errors surfaced by the streaming [`Lexer`](crate::Lexer).
///
/// Malformed terminal input is never an error; unrecognized sequences are
/// consumed and dropped. These variants only describe the state of the
/// queues themselves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("lexer worker is not running")]
    Disconnected,

    #[error("no token is currently available")]
    Empty,
}

pub type Result<T> = std::result::Result<T, Error>;
