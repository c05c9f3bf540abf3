//! Handing the rest of a peeked stream onward.
//!
//! Once a caller has peeked enough to decide what the stream is, these turn
//! the reader into something else without dropping the buffered bytes.

use crate::LookaheadReader;
use crate::error::{ErrorKind, IoResultExt, Result};
use std::io::{Chain, Cursor, Read, Write};
use tracing::instrument;

impl<R> LookaheadReader<R> {
    /// Split into the source and the bytes buffered but not yet read.
    pub fn into_inner(mut self) -> (R, Vec<u8>) {
        self.buffer.drain(..self.offset);
        (self.source, self.buffer)
    }
}

impl<R: Read> LookaheadReader<R> {
    /// Convert into a [`Read`]er that replays the buffered bytes, then
    /// streams the rest of the source.
    ///
    /// ```
    /// use sniff_lookahead::LookaheadReader;
    /// use std::io::Read;
    ///
    /// let mut reader = LookaheadReader::new(&b"BZh91AY&SY"[..]);
    /// assert_eq!(reader.peek(3).unwrap(), b"BZh");
    ///
    /// let mut rest = String::new();
    /// reader.into_reader().read_to_string(&mut rest).unwrap();
    /// assert_eq!(rest, "BZh91AY&SY");
    /// ```
    pub fn into_reader(self) -> Chain<Cursor<Vec<u8>>, R> {
        let (source, head) = self.into_inner();
        Cursor::new(head).chain(source)
    }

    /// Read everything that is left, buffered bytes included.
    #[instrument(skip(self), fields(buffered = self.buffered(), output_size))]
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let (mut source, mut output) = self.into_inner();
        source.read_to_end(&mut output).or_raise_io(ErrorKind::Read)?;
        tracing::Span::current().record("output_size", output.len());
        Ok(output)
    }

    /// Stream everything that is left, buffered bytes included, into
    /// `writer`. Returns the number of bytes written.
    #[instrument(skip(self, writer), fields(buffered = self.buffered(), output_size))]
    pub fn copy_into<W: Write + ?Sized>(self, writer: &mut W) -> Result<u64> {
        let (source, head) = self.into_inner();
        writer.write_all(&head).or_raise_io(ErrorKind::Write)?;
        let mut source = SourceSide { inner: source, failed: false };
        let copied = match std::io::copy(&mut source, writer) {
            Ok(copied) => copied,
            Err(err) if source.failed => return Err(err).or_raise_io(ErrorKind::Read),
            Err(err) => return Err(err).or_raise_io(ErrorKind::Write),
        };
        let written = head.len() as u64 + copied;
        tracing::Span::current().record("output_size", written);
        Ok(written)
    }
}

/// Remembers whether a failed copy was the source's fault, since
/// [`std::io::copy`] reports read and write failures alike.
struct SourceSide<R> {
    inner: R,
    failed: bool,
}

impl<R: Read> Read for SourceSide<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let result = self.inner.read(buf);
        if let Err(err) = &result {
            self.failed = err.kind() != std::io::ErrorKind::Interrupted;
        }
        result
    }
}
