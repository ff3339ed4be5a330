use std::str::FromStr;

use rust_decimal::Decimal;

use crate::row::{GenericRow, Value};

use super::{ConvertError, ConvertResult, DataConverter, fit_decimal};

/// Converter that reads every column through its textual form and parses the
/// requested type out of it. Useful when the engine hands back loosely typed
/// results, e.g. every column as a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringDataConverter;

impl StringDataConverter {
    pub fn new() -> Self {
        StringDataConverter
    }

    fn text(&self, row: &GenericRow, pos: usize) -> ConvertResult<Option<String>> {
        match row.get(pos) {
            None => Err(ConvertError::UnknownPosition(pos)),
            Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(value.to_string())),
        }
    }

    fn parse<T>(&self, row: &GenericRow, pos: usize, target: &'static str) -> ConvertResult<T>
    where
        T: FromStr + Default,
        T::Err: std::fmt::Display,
    {
        match self.text(row, pos)? {
            None => Ok(T::default()),
            Some(text) => text.trim().parse::<T>().map_err(|e| ConvertError::Parse {
                reason: e.to_string(),
                input: text,
                target,
            }),
        }
    }
}

impl DataConverter<GenericRow> for StringDataConverter {
    fn get_string(&self, row: &GenericRow, pos: usize) -> ConvertResult<Option<String>> {
        self.text(row, pos)
    }

    fn get_boolean(&self, row: &GenericRow, pos: usize) -> ConvertResult<bool> {
        match self.text(row, pos)? {
            None => Ok(false),
            Some(text) if text.trim().eq_ignore_ascii_case("true") => Ok(true),
            Some(text) if text.trim().eq_ignore_ascii_case("false") => Ok(false),
            Some(text) => Err(ConvertError::Parse {
                input: text,
                target: "BOOLEAN",
                reason: "expected 'true' or 'false'".to_string(),
            }),
        }
    }

    fn get_byte(&self, row: &GenericRow, pos: usize) -> ConvertResult<i8> {
        self.parse(row, pos, "TINYINT")
    }

    fn get_short(&self, row: &GenericRow, pos: usize) -> ConvertResult<i16> {
        self.parse(row, pos, "SMALLINT")
    }

    fn get_int(&self, row: &GenericRow, pos: usize) -> ConvertResult<i32> {
        self.parse(row, pos, "INT")
    }

    fn get_long(&self, row: &GenericRow, pos: usize) -> ConvertResult<i64> {
        self.parse(row, pos, "BIGINT")
    }

    fn get_float(&self, row: &GenericRow, pos: usize) -> ConvertResult<f32> {
        self.parse(row, pos, "FLOAT")
    }

    fn get_double(&self, row: &GenericRow, pos: usize) -> ConvertResult<f64> {
        self.parse(row, pos, "DOUBLE")
    }

    fn get_binary(&self, row: &GenericRow, pos: usize) -> ConvertResult<Option<Vec<u8>>> {
        match row.get(pos) {
            Some(Value::Binary(bytes)) => Ok(Some(bytes.clone())),
            _ => Ok(self.text(row, pos)?.map(String::into_bytes)),
        }
    }

    fn get_decimal(
        &self,
        row: &GenericRow,
        pos: usize,
        precision: u32,
        scale: u32,
    ) -> ConvertResult<Option<Decimal>> {
        let Some(text) = self.text(row, pos)? else {
            return Ok(None);
        };
        let value = Decimal::from_str(text.trim())
            .or_else(|_| Decimal::from_scientific(text.trim()))
            .map_err(|e| ConvertError::Parse {
                reason: e.to_string(),
                input: text.clone(),
                target: "DECIMAL",
            })?;
        fit_decimal(value, precision, scale).map(Some)
    }
}
