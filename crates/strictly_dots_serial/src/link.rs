//! Byte transport between the player's terminal and the game.

use std::io::{self, Read, Write};
use tracing::{debug, instrument, trace};

/// A serial-style link: single characters in, strings out.
///
/// Polling never blocks on a half-typed move; `Ok(None)` means nothing
/// arrived this tick.
pub trait SerialLink {
    /// Takes the next received character, if any.
    fn poll_char(&mut self) -> io::Result<Option<char>>;

    /// True once the far end has gone away.
    fn is_closed(&self) -> bool;

    /// Transmits text and flushes it.
    fn send_str(&mut self, text: &str) -> io::Result<()>;
}

/// Link over any reader/writer pair, one byte per poll.
///
/// Bytes map straight to chars, as on an 8-bit UART.
#[derive(Debug)]
pub struct StreamLink<R, W> {
    reader: R,
    writer: W,
    closed: bool,
}

impl<R: Read, W: Write> StreamLink<R, W> {
    /// Wraps a reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            closed: false,
        }
    }

    /// Gives back the writer, e.g. to inspect a captured transcript.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: Read, W: Write> SerialLink for StreamLink<R, W> {
    #[instrument(skip(self))]
    fn poll_char(&mut self) -> io::Result<Option<char>> {
        if self.closed {
            return Ok(None);
        }

        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    debug!("Input closed");
                    self.closed = true;
                    return Ok(None);
                }
                Ok(_) => {
                    trace!(byte = byte[0], "Received");
                    return Ok(Some(char::from(byte[0])));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    #[instrument(skip(self, text), fields(len = text.len()))]
    fn send_str(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}
