use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::error::{CursorError, CursorResult};
use crate::row::Value;
use crate::types::Schema;

use super::rescale_half_even;

fn ensure_open<C: ResultCursor + ?Sized>(cursor: &C) -> CursorResult<()> {
    if cursor.is_closed() {
        return Err(CursorError::Closed);
    }
    Ok(())
}

/// Forward-only, read-only view over the rows of an executed query.
///
/// Column indices are 1-based. Name-based getters resolve the name with
/// [`ResultCursor::column_index`] and then defer to the index-based getter.
pub trait ResultCursor {
    /// Moves to the next row. Returns `false` once the result is exhausted,
    /// and keeps returning `false` on later calls.
    fn advance(&self) -> CursorResult<bool>;

    /// Releases the underlying row source. Closing twice is a no-op.
    fn close(&self) -> CursorResult<()>;

    fn is_closed(&self) -> bool;

    /// Whether the row fetched by the last [`ResultCursor::advance`] was a null row.
    fn was_null(&self) -> CursorResult<bool>;

    /// 1-based position of the first column called `name`.
    fn column_index(&self, name: &str) -> CursorResult<i32>;

    fn get_string(&self, index: i32) -> CursorResult<Option<String>>;
    fn get_boolean(&self, index: i32) -> CursorResult<bool>;
    fn get_byte(&self, index: i32) -> CursorResult<i8>;
    fn get_short(&self, index: i32) -> CursorResult<i16>;
    fn get_int(&self, index: i32) -> CursorResult<i32>;
    fn get_long(&self, index: i32) -> CursorResult<i64>;
    fn get_float(&self, index: i32) -> CursorResult<f32>;
    fn get_double(&self, index: i32) -> CursorResult<f64>;
    fn get_bytes(&self, index: i32) -> CursorResult<Option<Vec<u8>>>;

    /// Reads a column declared as `DECIMAL(p, s)` with its declared precision and scale.
    fn get_decimal(&self, index: i32) -> CursorResult<Option<Decimal>>;

    fn find_column(&self, name: &str) -> CursorResult<i32> {
        self.column_index(name)
    }

    /// Reads a decimal column and rescales it to `scale` using half-even rounding.
    fn get_decimal_with_scale(&self, index: i32, scale: u32) -> CursorResult<Option<Decimal>> {
        match self.get_decimal(index)? {
            Some(d) => Ok(Some(rescale_half_even(d, scale)?)),
            None => Ok(None),
        }
    }

    fn get_string_by_name(&self, name: &str) -> CursorResult<Option<String>> {
        self.get_string(self.column_index(name)?)
    }

    fn get_boolean_by_name(&self, name: &str) -> CursorResult<bool> {
        self.get_boolean(self.column_index(name)?)
    }

    fn get_byte_by_name(&self, name: &str) -> CursorResult<i8> {
        self.get_byte(self.column_index(name)?)
    }

    fn get_short_by_name(&self, name: &str) -> CursorResult<i16> {
        self.get_short(self.column_index(name)?)
    }

    fn get_int_by_name(&self, name: &str) -> CursorResult<i32> {
        self.get_int(self.column_index(name)?)
    }

    fn get_long_by_name(&self, name: &str) -> CursorResult<i64> {
        self.get_long(self.column_index(name)?)
    }

    fn get_float_by_name(&self, name: &str) -> CursorResult<f32> {
        self.get_float(self.column_index(name)?)
    }

    fn get_double_by_name(&self, name: &str) -> CursorResult<f64> {
        self.get_double(self.column_index(name)?)
    }

    fn get_bytes_by_name(&self, name: &str) -> CursorResult<Option<Vec<u8>>> {
        self.get_bytes(self.column_index(name)?)
    }

    fn get_decimal_by_name(&self, name: &str) -> CursorResult<Option<Decimal>> {
        self.get_decimal(self.column_index(name)?)
    }

    fn get_decimal_with_scale_by_name(&self, name: &str, scale: u32) -> CursorResult<Option<Decimal>> {
        self.get_decimal_with_scale(self.column_index(name)?, scale)
    }

    // Surfaces below are deliberately unimplemented and always fail.

    fn get_date(&self, _index: i32) -> CursorResult<NaiveDate> {
        ensure_open(self)?;
        Err(CursorError::NotYetSupported("get_date"))
    }

    fn get_time(&self, _index: i32) -> CursorResult<NaiveTime> {
        ensure_open(self)?;
        Err(CursorError::NotYetSupported("get_time"))
    }

    fn get_timestamp(&self, _index: i32) -> CursorResult<NaiveDateTime> {
        ensure_open(self)?;
        Err(CursorError::NotYetSupported("get_timestamp"))
    }

    fn get_date_in_zone(&self, _index: i32, _zone: FixedOffset) -> CursorResult<NaiveDate> {
        ensure_open(self)?;
        Err(CursorError::FeatureNotSupported("get_date_in_zone"))
    }

    fn get_time_in_zone(&self, _index: i32, _zone: FixedOffset) -> CursorResult<NaiveTime> {
        ensure_open(self)?;
        Err(CursorError::FeatureNotSupported("get_time_in_zone"))
    }

    fn get_timestamp_in_zone(&self, _index: i32, _zone: FixedOffset) -> CursorResult<NaiveDateTime> {
        ensure_open(self)?;
        Err(CursorError::FeatureNotSupported("get_timestamp_in_zone"))
    }

    fn get_object(&self, _index: i32) -> CursorResult<Value> {
        ensure_open(self)?;
        Err(CursorError::FeatureNotSupported("get_object"))
    }

    fn get_array(&self, _index: i32) -> CursorResult<Vec<Value>> {
        ensure_open(self)?;
        Err(CursorError::FeatureNotSupported("get_array"))
    }

    fn metadata(&self) -> CursorResult<Schema> {
        ensure_open(self)?;
        Err(CursorError::FeatureNotSupported("metadata"))
    }

    fn get_date_by_name(&self, name: &str) -> CursorResult<NaiveDate> {
        self.get_date(self.column_index(name)?)
    }

    fn get_time_by_name(&self, name: &str) -> CursorResult<NaiveTime> {
        self.get_time(self.column_index(name)?)
    }

    fn get_timestamp_by_name(&self, name: &str) -> CursorResult<NaiveDateTime> {
        self.get_timestamp(self.column_index(name)?)
    }

    fn get_date_in_zone_by_name(&self, name: &str, zone: FixedOffset) -> CursorResult<NaiveDate> {
        self.get_date_in_zone(self.column_index(name)?, zone)
    }

    fn get_time_in_zone_by_name(&self, name: &str, zone: FixedOffset) -> CursorResult<NaiveTime> {
        self.get_time_in_zone(self.column_index(name)?, zone)
    }

    fn get_timestamp_in_zone_by_name(&self, name: &str, zone: FixedOffset) -> CursorResult<NaiveDateTime> {
        self.get_timestamp_in_zone(self.column_index(name)?, zone)
    }

    fn get_object_by_name(&self, name: &str) -> CursorResult<Value> {
        self.get_object(self.column_index(name)?)
    }

    fn get_array_by_name(&self, name: &str) -> CursorResult<Vec<Value>> {
        self.get_array(self.column_index(name)?)
    }
}
