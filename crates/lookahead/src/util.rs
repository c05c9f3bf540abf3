use crate::LookaheadReader;
use std::fmt::{Debug, Formatter, Result as FmtResult};

impl<R: Debug> Debug for LookaheadReader<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LookaheadReader")
            .field("source", &self.source)
            .field("buffered", &self.buffered())
            .field("offset", &self.offset)
            .finish()
    }
}
