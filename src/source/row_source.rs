use thiserror::Error;

use crate::row::Row;
use crate::types::Schema;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Row source already released")]
    Released,

    #[error("Row source failure: {0}")]
    Other(String),
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Streaming producer of the rows of an already executed query.
///
/// Calls may block on upstream I/O; the cursor passes that latency through
/// without prefetching.
pub trait RowSource {
    type Row: Row;

    fn has_next(&mut self) -> SourceResult<bool>;

    /// Takes the next row. `None` is a null-row marker, not exhaustion.
    fn next(&mut self) -> SourceResult<Option<Self::Row>>;

    fn schema(&self) -> &Schema;

    /// Frees whatever backs the result. Must tolerate repeated calls.
    fn release(&mut self) -> SourceResult<()>;
}

impl<S: RowSource + ?Sized> RowSource for Box<S> {
    type Row = S::Row;

    fn has_next(&mut self) -> SourceResult<bool> {
        (**self).has_next()
    }

    fn next(&mut self) -> SourceResult<Option<Self::Row>> {
        (**self).next()
    }

    fn schema(&self) -> &Schema {
        (**self).schema()
    }

    fn release(&mut self) -> SourceResult<()> {
        (**self).release()
    }
}
