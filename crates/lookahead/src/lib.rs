//! Lookahead over any [`Read`]er.
//!
//! [`LookaheadReader`] lets a caller inspect the next `n` bytes of a stream
//! without consuming them, which is what compression format sniffing needs:
//!
//! - **Peeking** via [`Peek::peek`] is all-or-nothing. A stream shorter than
//!   the probe fails with [`std::io::ErrorKind::UnexpectedEof`] instead of
//!   returning a short slice.
//! - **Reading** via [`Read::read`] drains peeked bytes first and only then
//!   passes through to the wrapped source.
//! - **Draining** via [`into_reader`](LookaheadReader::into_reader),
//!   [`into_bytes`](LookaheadReader::into_bytes) or
//!   [`copy_into`](LookaheadReader::copy_into) hands the rest of the stream on
//!   without losing anything that was peeked.
//!
//! ```
//! use sniff_lookahead::{LookaheadReader, Peek};
//! use std::io::Read;
//!
//! let mut reader = LookaheadReader::new(&b"\x1f\x8b\x08\x00rest"[..]);
//! let is_gzip = reader.peek(2).unwrap() == b"\x1f\x8b";
//! assert!(is_gzip);
//!
//! // Nothing was consumed by peeking.
//! let mut all = Vec::new();
//! reader.read_to_end(&mut all).unwrap();
//! assert_eq!(all, b"\x1f\x8b\x08\x00rest");
//! ```

pub mod error;
mod reader;
mod stream;
#[cfg(test)]
mod testing;
mod util;

pub use crate::reader::{DEFAULT_CAPACITY, LookaheadReader};
use std::io::{Read, Result};

/// A [`Read`]er that can show upcoming bytes without consuming them.
///
/// Format detection code should accept `impl Peek` so it works with both an
/// owned [`LookaheadReader`] and a borrowed one.
pub trait Peek: Read {
    /// Return exactly the next `n` bytes without advancing the read position.
    ///
    /// Fails with [`ErrorKind::UnexpectedEof`] when the stream ends before `n`
    /// bytes are available. Any other error comes from the wrapped source.
    fn peek(&mut self, n: usize) -> Result<&[u8]>;

    /// Copy the next `N` bytes out without advancing the read position.
    fn peek_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        // A successful peek is exactly N bytes long.
        out.copy_from_slice(self.peek(N)?);
        Ok(out)
    }
}

impl<P: Peek + ?Sized> Peek for &mut P {
    fn peek(&mut self, n: usize) -> Result<&[u8]> {
        (**self).peek(n)
    }
}
