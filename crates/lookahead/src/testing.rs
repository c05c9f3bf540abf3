//! Scripted sources for observing exactly when and how the wrapped reader is
//! pulled.

use std::collections::VecDeque;
use std::io::{Error, ErrorKind, Read, Result};

#[derive(Clone, Debug)]
pub(crate) enum Step {
    /// Hand out these bytes, possibly across several pulls. An empty slice is
    /// a one-off end-of-stream.
    Data(&'static [u8]),
    /// Fail the pull with this kind.
    Fail(ErrorKind),
}

/// A source that replays [`Step`]s and records every pull. Once the script
/// runs out it reports end-of-stream forever.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    steps: VecDeque<Step>,
    /// Destination sizes of every `read` call, in order.
    pub requested: Vec<usize>,
}

impl ScriptedSource {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            requested: Vec::new(),
        }
    }

    /// One chunk per pull at most.
    pub fn chunks(chunks: impl IntoIterator<Item = &'static [u8]>) -> Self {
        Self::new(chunks.into_iter().map(Step::Data))
    }

    pub fn pulls(&self) -> usize {
        self.requested.len()
    }
}

impl Read for ScriptedSource {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.requested.push(buf.len());
        match self.steps.pop_front() {
            None => Ok(0),
            Some(Step::Fail(kind)) => Err(Error::new(kind, "scripted failure")),
            Some(Step::Data(bytes)) => {
                let count = bytes.len().min(buf.len());
                buf[..count].copy_from_slice(&bytes[..count]);
                if count < bytes.len() {
                    self.steps.push_front(Step::Data(&bytes[count..]));
                }
                Ok(count)
            },
        }
    }
}
