use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::row::{GenericRow, Row};
use crate::types::Schema;

use super::{RowSource, SourceError, SourceResult};

/// In-memory row source. Rows are handed out in insertion order; a `None`
/// entry is delivered as a null row.
pub struct VecRowSource<R = GenericRow> {
    schema: Schema,
    rows: VecDeque<Option<R>>,
    released: bool,
    release_count: Arc<AtomicUsize>,
}

impl<R: Row> VecRowSource<R> {
    pub fn new(schema: Schema, rows: impl IntoIterator<Item = R>) -> Self {
        Self::with_null_rows(schema, rows.into_iter().map(Some))
    }

    pub fn with_null_rows(schema: Schema, rows: impl IntoIterator<Item = Option<R>>) -> Self {
        VecRowSource {
            schema,
            rows: rows.into_iter().collect(),
            released: false,
            release_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn empty(schema: Schema) -> Self {
        Self::with_null_rows(schema, std::iter::empty())
    }

    /// Shared counter of effective releases, readable after the source has
    /// been moved into a cursor.
    pub fn release_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.release_count)
    }

    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl<R: Row> RowSource for VecRowSource<R> {
    type Row = R;

    fn has_next(&mut self) -> SourceResult<bool> {
        if self.released {
            return Err(SourceError::Released);
        }
        Ok(!self.rows.is_empty())
    }

    fn next(&mut self) -> SourceResult<Option<R>> {
        if self.released {
            return Err(SourceError::Released);
        }
        self.rows
            .pop_front()
            .ok_or_else(|| SourceError::Other("no more rows".to_string()))
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn release(&mut self) -> SourceResult<()> {
        if !self.released {
            self.released = true;
            self.rows.clear();
            self.release_count.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}
