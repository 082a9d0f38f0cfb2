//! Streaming front-end over the state machine.
//!
//! [`Lexer`] owns a bounded inbound byte queue and a bounded outbound token
//! queue, and runs a [`Machine`] against the inbound queue on a dedicated
//! worker thread. The worker is the sole mutator of all machine state, so
//! no locking is involved anywhere; everything flows through the two
//! channels plus a separate stop signal.

use std::thread::JoinHandle;

use flume::{Receiver, Selector, Sender, TryRecvError};
use log::trace;

use crate::error::{Error, Result};
use crate::machine::Machine;
use crate::token::Token;

/// Capacity of the inbound and outbound queues. Small on purpose: enough
/// to decouple feeder and reader without unbounded growth.
const QUEUE_CAPACITY: usize = 10;

/// Asynchronous escape sequence lexer.
///
/// Bytes go in through [`feed`](Self::feed), tokens come out through
/// [`next_token`](Self::next_token) or the raw receiver from
/// [`tokens`](Self::tokens). Feeding never waits on anything but ordinary
/// queue backpressure. Teardown is explicit: [`shutdown`](Self::shutdown)
/// consumes the handle, signals the worker and blocks until it has exited,
/// so feeding or reading after shutdown is unrepresentable.
pub struct Lexer {
    bytes: Sender<u8>,
    tokens: Receiver<Token>,
    stop: Sender<()>,
    worker: Option<JoinHandle<()>>,
}

impl Lexer {
    /// Allocate the queues and start the worker thread.
    #[must_use]
    pub fn new() -> Self {
        let (byte_tx, byte_rx) = flume::bounded(QUEUE_CAPACITY);
        let (token_tx, token_rx) = flume::bounded(QUEUE_CAPACITY);
        let (stop_tx, stop_rx) = flume::bounded(1);

        let worker = std::thread::spawn(move || run(byte_rx, token_tx, stop_rx));

        Self {
            bytes: byte_tx,
            tokens: token_rx,
            stop: stop_tx,
            worker: Some(worker),
        }
    }

    /// Enqueue one byte for recognition.
    ///
    /// Blocks only when the inbound queue is full, until the worker drains
    /// it. Callers that cannot tolerate that must not outpace the machine.
    pub fn feed(&self, byte: u8) -> Result<()> {
        self.bytes.send(byte).map_err(|_| Error::Disconnected)
    }

    /// Enqueue a whole slice, byte by byte.
    pub fn feed_bytes(&self, bytes: &[u8]) -> Result<()> {
        for &byte in bytes {
            self.feed(byte)?;
        }
        Ok(())
    }

    /// Block until the next token is available.
    pub fn next_token(&self) -> Result<Token> {
        self.tokens.recv().map_err(|_| Error::Disconnected)
    }

    /// Non-blocking poll of the outbound queue.
    pub fn try_next_token(&self) -> Result<Token> {
        self.tokens.try_recv().map_err(|err| match err {
            TryRecvError::Empty => Error::Empty,
            TryRecvError::Disconnected => Error::Disconnected,
        })
    }

    /// The outbound queue itself, for callers that want to race token
    /// arrival against deadlines or other wait conditions
    /// (`recv_timeout`, `Selector`, …).
    pub fn tokens(&self) -> &Receiver<Token> {
        &self.tokens
    }

    /// Signal the worker to stop and block until it has exited.
    ///
    /// Inbound bytes that have not been processed yet are discarded; the
    /// stop takes effect between byte-processing steps, never inside one.
    pub fn shutdown(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = self.stop.try_send(());
            let _ = worker.join();
        }
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Dropping the handle tears the worker down the same way an explicit
/// [`Lexer::shutdown`] would.
impl Drop for Lexer {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

enum Step {
    Byte(u8),
    Stop,
}

fn run(bytes: Receiver<u8>, tokens: Sender<Token>, stop: Receiver<()>) {
    let mut machine = Machine::new();
    trace!("lexer worker started");

    loop {
        let step = Selector::new()
            .recv(&bytes, |res| match res {
                Ok(byte) => Step::Byte(byte),
                Err(_) => Step::Stop,
            })
            .recv(&stop, |_| Step::Stop)
            .wait();

        match step {
            Step::Byte(byte) => {
                if let Some(token) = machine.step(byte) {
                    if !forward(&tokens, &stop, token) {
                        break;
                    }
                }
            },
            Step::Stop => break,
        }
    }

    trace!("lexer worker stopped");
}

/// Push a token onto the outbound queue while staying responsive to the
/// stop signal; a full, undrained queue must never wedge teardown.
/// Returns `false` when the worker should exit.
fn forward(tokens: &Sender<Token>, stop: &Receiver<()>, token: Token) -> bool {
    Selector::new()
        .send(tokens, token, |res| res.is_ok())
        .recv(stop, |_| false)
        .wait()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EscapeCode;
    use crate::token::TokenValue;
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(5);

    fn recv(lexer: &Lexer) -> Token {
        lexer
            .tokens()
            .recv_timeout(WAIT)
            .expect("token within the bounded wait")
    }

    #[test]
    fn literal_byte_round_trip() {
        let lexer = Lexer::new();
        lexer.feed(b'A').unwrap();
        assert_eq!(recv(&lexer).value, TokenValue::Literal(b'A'));
        lexer.shutdown();
    }

    #[test]
    fn escape_sequence_round_trip() {
        let lexer = Lexer::new();
        lexer.feed_bytes(b"\x1b[13;17H").unwrap();
        let token = recv(&lexer);
        assert_eq!(token.value, TokenValue::Escape(EscapeCode::CursorPos));
        assert_eq!(token.params, vec![13, 17]);
        lexer.shutdown();
    }

    #[test]
    fn tokens_arrive_in_feed_order() {
        let lexer = Lexer::new();
        lexer.feed_bytes(b"\x1b[2J\x1b[?1h").unwrap();
        assert_eq!(
            recv(&lexer).value,
            TokenValue::Escape(EscapeCode::ClearScreen)
        );
        assert_eq!(recv(&lexer).value, TokenValue::Escape(EscapeCode::SetAppl));
        lexer.shutdown();
    }

    #[test]
    fn poll_reports_empty_queue() {
        let lexer = Lexer::new();
        assert_eq!(lexer.try_next_token(), Err(Error::Empty));
        lexer.feed(b'x').unwrap();
        assert_eq!(
            lexer.next_token().unwrap().value,
            TokenValue::Literal(b'x')
        );
        lexer.shutdown();
    }

    #[test]
    fn shutdown_with_full_undrained_queue_completes() {
        let lexer = Lexer::new();

        // Feeder outpaces the queues and blocks on backpressure until the
        // worker goes away; nobody ever drains the outbound queue.
        let feeder = std::thread::spawn({
            let bytes = lexer.bytes.clone();
            move || {
                for _ in 0..200 {
                    if bytes.send(b'a').is_err() {
                        break;
                    }
                }
            }
        });

        // Wait until the outbound queue is actually wedged full.
        while lexer.tokens.len() < QUEUE_CAPACITY {
            std::thread::yield_now();
        }

        lexer.shutdown();
        feeder.join().unwrap();
    }

    #[test]
    fn concurrent_feeders_each_get_their_bytes_tokenized() {
        let lexer = Lexer::new();

        let feeders: Vec<_> = [b'x', b'y']
            .into_iter()
            .map(|byte| {
                let bytes = lexer.bytes.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        bytes.send(byte).unwrap();
                    }
                })
            })
            .collect();

        let mut seen = 0;
        while seen < 200 {
            let token = recv(&lexer);
            assert!(matches!(
                token.value,
                TokenValue::Literal(b'x') | TokenValue::Literal(b'y')
            ));
            seen += 1;
        }

        for feeder in feeders {
            feeder.join().unwrap();
        }
        lexer.shutdown();
    }

    // Deterministic xorshift so the flood is reproducible.
    struct XorShift(u32);

    impl XorShift {
        fn next_byte(&mut self) -> u8 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            self.0 = x;
            x as u8
        }
    }

    #[test]
    fn random_flood_never_wedges() {
        let lexer = Lexer::new();

        let drainer = std::thread::spawn({
            let tokens = lexer.tokens.clone();
            move || {
                let mut count = 0usize;
                while tokens.recv().is_ok() {
                    count += 1;
                }
                count
            }
        });

        let mut rng = XorShift(0x2545_f491);
        for n in 0..10_000 {
            // Periodically drop a bracket introducer into the noise.
            if n % 97 == 0 {
                lexer.feed_bytes(b"\x1b[").unwrap();
            }
            lexer.feed(rng.next_byte()).unwrap();
        }

        lexer.shutdown();
        let drained = drainer.join().unwrap();
        assert!(drained > 0);
    }
}
