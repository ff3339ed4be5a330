use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;
use tracing::{debug, trace, warn};

use crate::convert::DataConverter;
use crate::error::{CursorError, CursorResult};
use crate::row::Row;
use crate::source::RowSource;
use crate::types::Schema;

use super::{CursorConfig, ResultCursor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    BeforeFirst,
    OnRow,
    AfterLast,
}

struct CursorState<R> {
    position: Position,
    current: Option<R>,
    was_null: bool,
}

/// Cursor over a [`RowSource`], decoding columns with a [`DataConverter`].
///
/// Advancing and reading must be serialized by the caller; only `close()` may
/// race with them, e.g. to cancel from another thread. The source is released
/// at most once and is never read after that. `close()` cannot interrupt a
/// fetch that is blocked inside the source; it completes once that fetch returns.
pub struct RowCursor<S: RowSource, C> {
    source: Mutex<S>,
    converter: C,
    schema: Schema,
    state: Mutex<CursorState<S::Row>>,
    closed: AtomicBool,
    config: CursorConfig,
}

impl<S: RowSource, C> RowCursor<S, C> {
    pub fn new(source: S, converter: C) -> Self {
        Self::with_config(source, converter, CursorConfig::default())
    }

    pub fn with_config(source: S, converter: C, config: CursorConfig) -> Self {
        let schema = source.schema().clone();
        debug!(cursor = %config.label, columns = schema.column_count(), "cursor opened");

        RowCursor {
            source: Mutex::new(source),
            converter,
            schema,
            state: Mutex::new(CursorState {
                position: Position::BeforeFirst,
                current: None,
                was_null: false,
            }),
            closed: AtomicBool::new(false),
            config,
        }
    }

    /// Schema captured from the source when the cursor was created.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn position(&self) -> Position {
        self.lock_state().position
    }

    pub fn is_before_first(&self) -> bool {
        self.position() == Position::BeforeFirst
    }

    pub fn is_on_row(&self) -> bool {
        self.position() == Position::OnRow
    }

    pub fn is_after_last(&self) -> bool {
        self.position() == Position::AfterLast
    }

    // A poisoned lock only means a caller panicked mid-call; the state itself
    // is updated after every fallible step and stays consistent.
    fn lock_state(&self) -> MutexGuard<'_, CursorState<S::Row>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_source(&self) -> MutexGuard<'_, S> {
        self.source.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_closed(&self) -> CursorResult<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(CursorError::Closed);
        }
        Ok(())
    }

    fn check_valid_row(state: &CursorState<S::Row>) -> CursorResult<&S::Row> {
        let row = match (state.position, state.current.as_ref()) {
            (Position::OnRow, Some(row)) => row,
            _ => return Err(CursorError::NoCurrentRow("cursor is not positioned on a row")),
        };
        if row.arity() == 0 {
            return Err(CursorError::NoCurrentRow("empty row with no data"));
        }
        Ok(row)
    }

    fn check_valid_column(row: &S::Row, index: i32) -> CursorResult<usize> {
        if index <= 0 {
            return Err(CursorError::NonPositiveColumnIndex(index));
        }
        let count = row.arity();
        if index as usize > count {
            return Err(CursorError::ColumnIndexOutOfBounds { index, count });
        }
        Ok(index as usize - 1)
    }

    /// Runs the closed, row and bounds checks, then hands the current row and
    /// the zero-based column position to `read`.
    fn with_row<T>(
        &self,
        index: i32,
        read: impl FnOnce(&S::Row, usize) -> CursorResult<T>,
    ) -> CursorResult<T> {
        self.check_closed()?;
        let state = self.lock_state();
        // close() may have cleared the row while we waited for the lock.
        self.check_closed()?;
        let row = Self::check_valid_row(&state)?;
        let pos = Self::check_valid_column(row, index)?;
        read(row, pos)
    }

    fn release_source(&self) -> CursorResult<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        let released = self.lock_source().release();
        {
            let mut state = self.lock_state();
            state.current = None;
        }
        debug!(cursor = %self.config.label, "cursor closed");
        Ok(released?)
    }
}

impl<S, C> ResultCursor for RowCursor<S, C>
where
    S: RowSource,
    C: DataConverter<S::Row>,
{
    fn advance(&self) -> CursorResult<bool> {
        self.check_closed()?;
        let mut state = self.lock_state();
        if state.position == Position::AfterLast {
            return Ok(false);
        }

        let mut source = self.lock_source();
        // close() may have released the source while we waited for it.
        self.check_closed()?;

        if source.has_next()? {
            let row = source.next()?;
            state.was_null = row.is_none();
            state.current = row;
            state.position = Position::OnRow;
            trace!(cursor = %self.config.label, null_row = state.was_null, "advanced");
            Ok(true)
        } else {
            state.current = None;
            state.position = Position::AfterLast;
            debug!(cursor = %self.config.label, "result exhausted");
            Ok(false)
        }
    }

    fn close(&self) -> CursorResult<()> {
        self.release_source()
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn was_null(&self) -> CursorResult<bool> {
        self.check_closed()?;
        Ok(self.lock_state().was_null)
    }

    fn column_index(&self, name: &str) -> CursorResult<i32> {
        self.schema
            .index_of(name)
            .map(|pos| pos as i32 + 1)
            .ok_or_else(|| CursorError::ColumnNotFound(name.to_string()))
    }

    fn get_string(&self, index: i32) -> CursorResult<Option<String>> {
        self.with_row(index, |row, pos| Ok(self.converter.get_string(row, pos)?))
    }

    fn get_boolean(&self, index: i32) -> CursorResult<bool> {
        self.with_row(index, |row, pos| Ok(self.converter.get_boolean(row, pos)?))
    }

    fn get_byte(&self, index: i32) -> CursorResult<i8> {
        self.with_row(index, |row, pos| Ok(self.converter.get_byte(row, pos)?))
    }

    fn get_short(&self, index: i32) -> CursorResult<i16> {
        self.with_row(index, |row, pos| Ok(self.converter.get_short(row, pos)?))
    }

    fn get_int(&self, index: i32) -> CursorResult<i32> {
        self.with_row(index, |row, pos| Ok(self.converter.get_int(row, pos)?))
    }

    fn get_long(&self, index: i32) -> CursorResult<i64> {
        self.with_row(index, |row, pos| Ok(self.converter.get_long(row, pos)?))
    }

    fn get_float(&self, index: i32) -> CursorResult<f32> {
        self.with_row(index, |row, pos| Ok(self.converter.get_float(row, pos)?))
    }

    fn get_double(&self, index: i32) -> CursorResult<f64> {
        self.with_row(index, |row, pos| Ok(self.converter.get_double(row, pos)?))
    }

    fn get_bytes(&self, index: i32) -> CursorResult<Option<Vec<u8>>> {
        self.with_row(index, |row, pos| Ok(self.converter.get_binary(row, pos)?))
    }

    fn get_decimal(&self, index: i32) -> CursorResult<Option<Decimal>> {
        self.with_row(index, |row, pos| {
            let declared = self.schema.data_type(pos);
            let Some((precision, scale)) = declared.and_then(|t| t.as_decimal()) else {
                return Err(CursorError::TypeMismatch {
                    expected: "DECIMAL",
                    actual: declared.map_or_else(|| "undeclared".to_string(), |t| t.to_string()),
                });
            };
            Ok(self.converter.get_decimal(row, pos, precision, scale)?)
        })
    }
}

impl<S: RowSource, C> Drop for RowCursor<S, C> {
    fn drop(&mut self) {
        if !self.config.close_on_drop {
            return;
        }
        if let Err(e) = self.release_source() {
            warn!(cursor = %self.config.label, error = %e, "failed to release row source on drop");
        }
    }
}
