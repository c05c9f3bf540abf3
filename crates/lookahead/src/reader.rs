//! The lookahead buffer itself.

use crate::Peek;
use std::io::{Error, ErrorKind, Read, Result};

/// Initial buffer capacity, enough for the longest common compression magic
/// number (XZ, six bytes).
pub const DEFAULT_CAPACITY: usize = 6;

/// A [`Read`]er that buffers only what has been peeked.
///
/// Bytes pulled from the source by [`peek`](Self::peek) are kept until
/// [`read`](Read::read) hands them out. Once every buffered byte has been
/// read the buffer is emptied and reads pass straight through to the source,
/// so the buffer never holds more than the largest single peek.
///
/// Reaching the end of the source is not remembered: every later call asks
/// the source again.
pub struct LookaheadReader<R> {
    pub(crate) source: R,
    // Unconsumed data lives in buffer[offset..].
    pub(crate) buffer: Vec<u8>,
    pub(crate) offset: usize,
}

impl<R: Read> LookaheadReader<R> {
    /// Wrap any reader for peeking.
    pub fn new(source: R) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, source)
    }

    /// Wrap any reader, pre-sizing the buffer for peeks of up to `capacity`
    /// bytes.
    pub fn with_capacity(capacity: usize, source: R) -> Self {
        Self {
            source,
            buffer: Vec::with_capacity(capacity),
            offset: 0,
        }
    }

    /// Return exactly the next `n` bytes without advancing the read position.
    ///
    /// Pulls from the source only the bytes missing from the buffer. If the
    /// source ends first, whatever it did produce stays buffered for later
    /// reads and the call fails with [`ErrorKind::UnexpectedEof`]; a short
    /// slice is never returned. Other source errors are returned unchanged.
    ///
    /// ```
    /// use sniff_lookahead::LookaheadReader;
    /// use std::io::Read;
    ///
    /// let mut reader = LookaheadReader::new(&b"GZIPDATA"[..]);
    /// assert_eq!(reader.peek(2).unwrap(), b"GZ");
    /// assert_eq!(reader.peek(4).unwrap(), b"GZIP");
    ///
    /// let mut buf = [0u8; 4];
    /// assert_eq!(reader.read(&mut buf).unwrap(), 4);
    /// assert_eq!(&buf, b"GZIP");
    /// ```
    pub fn peek(&mut self, n: usize) -> Result<&[u8]> {
        self.fill(n)?;
        if self.buffered() < n {
            tracing::trace!(requested = n, buffered = self.buffered(), "source ended before peek was satisfied");
            return Err(Error::new(ErrorKind::UnexpectedEof, "stream ended before peek was satisfied"));
        }
        Ok(&self.buffer[self.offset..self.offset + n])
    }

    /// Pull from the source until at least `n` bytes are buffered or the
    /// source reports end-of-stream.
    fn fill(&mut self, n: usize) -> Result<()> {
        let buffered = self.buffered();
        if buffered >= n {
            return Ok(());
        }
        if self.offset > 0 {
            self.buffer.drain(..self.offset);
            self.offset = 0;
        }
        let needed = n - buffered;
        // Bytes read before an error are still appended, so nothing pulled is lost.
        let pulled = (&mut self.source).take(needed as u64).read_to_end(&mut self.buffer);
        tracing::trace!(
            requested = n,
            buffered,
            pulled = self.buffer.len() - buffered,
            "pulled peek shortfall from source"
        );
        pulled.map(|_| ())
    }
}

impl<R> LookaheadReader<R> {
    /// Number of bytes buffered but not yet read.
    #[inline]
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// The bytes buffered but not yet read. Never pulls from the source.
    #[inline]
    #[must_use]
    pub fn head(&self) -> &[u8] {
        &self.buffer[self.offset..]
    }

    /// Gets a reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Gets a mutable reference to the underlying source.
    ///
    /// Reading from it directly skips over whatever is buffered here, so the
    /// two will disagree about where the stream is.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Mark `count` buffered bytes as read, releasing the buffer once all of
    /// it has been read.
    fn consume(&mut self, count: usize) {
        self.offset += count;
        if self.offset == self.buffer.len() {
            self.buffer.clear();
            self.offset = 0;
        }
    }
}

impl<R: Read> Read for LookaheadReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.offset < self.buffer.len() {
            // Short reads from the buffer are fine; the source waits for the next call.
            let count = buf.len().min(self.buffered());
            buf[..count].copy_from_slice(&self.buffer[self.offset..self.offset + count]);
            self.consume(count);
            return Ok(count);
        }
        tracing::trace!(len = buf.len(), "reading straight from source");
        self.source.read(buf)
    }
}

impl<R: Read> Peek for LookaheadReader<R> {
    fn peek(&mut self, n: usize) -> Result<&[u8]> {
        LookaheadReader::peek(self, n)
    }
}
