//! Lookahead Error Types
//!
//! [`peek`](crate::LookaheadReader::peek) and [`read`](std::io::Read::read)
//! hand source errors back as the exact [`std::io::Error`] the source produced.
//! The draining operations ([`into_bytes`](crate::LookaheadReader::into_bytes),
//! [`copy_into`](crate::LookaheadReader::copy_into)) use structured errors
//! built on `exn` for location tracking, with the I/O error kept as the cause.

use derive_more::{Display, Error};
use exn::ResultExt;
use std::io::ErrorKind as IoErrorKind;

/// A lookahead error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for draining operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe which side of the stream failed and how, not what went
/// wrong internally.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading the remainder of the source failed.
    #[display("failed to read from source: {_0}")]
    Read(#[error(not(source))] IoErrorKind),
    /// Writing into the destination failed.
    #[display("failed to write to destination: {_0}")]
    Write(#[error(not(source))] IoErrorKind),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        let (ErrorKind::Read(kind) | ErrorKind::Write(kind)) = self;
        matches!(kind, IoErrorKind::Interrupted | IoErrorKind::WouldBlock | IoErrorKind::TimedOut)
    }
}

pub(crate) trait IoResultExt<T> {
    /// Raise an I/O failure as `wrap(kind)`, keeping the original error as
    /// the cause.
    fn or_raise_io(self, wrap: fn(IoErrorKind) -> ErrorKind) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    #[track_caller]
    fn or_raise_io(self, wrap: fn(IoErrorKind) -> ErrorKind) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let kind = wrap(err.kind());
                Err(err).or_raise(|| kind)
            },
        }
    }
}
