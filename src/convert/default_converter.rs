use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::row::{GenericRow, Value};

use super::{ConvertError, ConvertResult, DataConverter, fit_decimal};

/// Converter reading the typed values of a [`GenericRow`] directly.
///
/// Integral values convert between widths when they fit; floats accept any
/// numeric value. Everything else must match the target type.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDataConverter;

impl DefaultDataConverter {
    pub fn new() -> Self {
        DefaultDataConverter
    }
}

fn value_at(row: &GenericRow, pos: usize) -> ConvertResult<&Value> {
    row.get(pos).ok_or(ConvertError::UnknownPosition(pos))
}

fn integral<T: TryFrom<i64>>(value: &Value, target: &'static str) -> ConvertResult<Option<T>> {
    if value.is_null() {
        return Ok(None);
    }
    let wide = value
        .as_i64()
        .ok_or(ConvertError::Incompatible { value: value.type_name(), target })?;
    T::try_from(wide)
        .map(Some)
        .map_err(|_| ConvertError::Overflow { value: wide.to_string(), target })
}

fn floating(value: &Value, target: &'static str) -> ConvertResult<f64> {
    match value {
        Value::Null => Ok(0.0),
        Value::Float(v) => Ok(*v as f64),
        Value::Double(v) => Ok(*v),
        Value::Decimal(d) => d
            .to_f64()
            .ok_or_else(|| ConvertError::Overflow { value: d.to_string(), target }),
        other => other
            .as_i64()
            .map(|v| v as f64)
            .ok_or(ConvertError::Incompatible { value: other.type_name(), target }),
    }
}

impl DataConverter<GenericRow> for DefaultDataConverter {
    fn get_string(&self, row: &GenericRow, pos: usize) -> ConvertResult<Option<String>> {
        match value_at(row, pos)? {
            Value::Null => Ok(None),
            Value::Binary(_) => Err(ConvertError::Incompatible { value: "BINARY", target: "STRING" }),
            other => Ok(Some(other.to_string())),
        }
    }

    fn get_boolean(&self, row: &GenericRow, pos: usize) -> ConvertResult<bool> {
        match value_at(row, pos)? {
            Value::Null => Ok(false),
            Value::Boolean(b) => Ok(*b),
            other => Err(ConvertError::Incompatible { value: other.type_name(), target: "BOOLEAN" }),
        }
    }

    fn get_byte(&self, row: &GenericRow, pos: usize) -> ConvertResult<i8> {
        Ok(integral(value_at(row, pos)?, "TINYINT")?.unwrap_or_default())
    }

    fn get_short(&self, row: &GenericRow, pos: usize) -> ConvertResult<i16> {
        Ok(integral(value_at(row, pos)?, "SMALLINT")?.unwrap_or_default())
    }

    fn get_int(&self, row: &GenericRow, pos: usize) -> ConvertResult<i32> {
        Ok(integral(value_at(row, pos)?, "INT")?.unwrap_or_default())
    }

    fn get_long(&self, row: &GenericRow, pos: usize) -> ConvertResult<i64> {
        Ok(integral(value_at(row, pos)?, "BIGINT")?.unwrap_or_default())
    }

    fn get_float(&self, row: &GenericRow, pos: usize) -> ConvertResult<f32> {
        floating(value_at(row, pos)?, "FLOAT").map(|v| v as f32)
    }

    fn get_double(&self, row: &GenericRow, pos: usize) -> ConvertResult<f64> {
        floating(value_at(row, pos)?, "DOUBLE")
    }

    fn get_binary(&self, row: &GenericRow, pos: usize) -> ConvertResult<Option<Vec<u8>>> {
        match value_at(row, pos)? {
            Value::Null => Ok(None),
            Value::Binary(bytes) => Ok(Some(bytes.clone())),
            other => Err(ConvertError::Incompatible { value: other.type_name(), target: "BINARY" }),
        }
    }

    fn get_decimal(
        &self,
        row: &GenericRow,
        pos: usize,
        precision: u32,
        scale: u32,
    ) -> ConvertResult<Option<Decimal>> {
        let value = match value_at(row, pos)? {
            Value::Null => return Ok(None),
            Value::Decimal(d) => *d,
            other => match other.as_i64() {
                Some(v) => Decimal::from(v),
                None => {
                    return Err(ConvertError::Incompatible {
                        value: other.type_name(),
                        target: "DECIMAL",
                    });
                }
            },
        };
        fit_decimal(value, precision, scale).map(Some)
    }
}
