//! Print every [`Token`] the lexer produces for a byte stream.
use std::time::Duration;

use termtok::{Error, Lexer};

fn main() -> Result<(), Error> {
    let lexer = Lexer::new();

    let bytes = b"\x1b[2J\x1b[13;17HHello\x1b[1;24r\x1b(B\x1b[?7h";
    lexer.feed_bytes(bytes)?;

    // The outbound queue is a plain receiver, so a caller-side deadline is
    // just a timed receive against it.
    let mut n = 0;
    while let Ok(token) = lexer.tokens().recv_timeout(Duration::from_millis(200)) {
        n += 1;
        println!("{n:02}: {token}");
    }

    lexer.shutdown();
    Ok(())
}
