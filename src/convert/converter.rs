use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("No value at position {0}")]
    UnknownPosition(usize),

    #[error("Cannot convert {value} to {target}")]
    Incompatible { value: &'static str, target: &'static str },

    #[error("Value {value} is out of range for {target}")]
    Overflow { value: String, target: &'static str },

    #[error("Cannot parse '{input}' as {target}: {reason}")]
    Parse { input: String, target: &'static str, reason: String },

    #[error("Value {value} cannot be represented with scale {scale}")]
    ScaleOutOfRange { value: Decimal, scale: u32 },

    #[error("Value {value} does not fit DECIMAL({precision}, {scale})")]
    PrecisionExceeded { value: Decimal, precision: u32, scale: u32 },
}

pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Extracts typed values out of an opaque row at a zero-based position.
///
/// Primitive targets yield their zero value for a NULL column, reference
/// targets yield `None`.
pub trait DataConverter<R: ?Sized> {
    fn get_string(&self, row: &R, pos: usize) -> ConvertResult<Option<String>>;
    fn get_boolean(&self, row: &R, pos: usize) -> ConvertResult<bool>;
    fn get_byte(&self, row: &R, pos: usize) -> ConvertResult<i8>;
    fn get_short(&self, row: &R, pos: usize) -> ConvertResult<i16>;
    fn get_int(&self, row: &R, pos: usize) -> ConvertResult<i32>;
    fn get_long(&self, row: &R, pos: usize) -> ConvertResult<i64>;
    fn get_float(&self, row: &R, pos: usize) -> ConvertResult<f32>;
    fn get_double(&self, row: &R, pos: usize) -> ConvertResult<f64>;
    fn get_binary(&self, row: &R, pos: usize) -> ConvertResult<Option<Vec<u8>>>;

    /// Reads a fixed-point value shaped to the column's declared precision and scale.
    fn get_decimal(
        &self,
        row: &R,
        pos: usize,
        precision: u32,
        scale: u32,
    ) -> ConvertResult<Option<Decimal>>;
}

/// Brings `value` to exactly `scale` fractional digits (half-up) and rejects it
/// when the result needs more than `precision` digits.
pub fn fit_decimal(value: Decimal, precision: u32, scale: u32) -> ConvertResult<Decimal> {
    let mut fitted = if value.scale() > scale {
        value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
    } else {
        value
    };
    fitted.rescale(scale);

    if fitted.scale() != scale || digit_count(fitted.mantissa().unsigned_abs()) > precision {
        return Err(ConvertError::PrecisionExceeded { value, precision, scale });
    }
    Ok(fitted)
}

fn digit_count(mut n: u128) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_decimal_pads_and_rounds() -> ConvertResult<()> {
        let padded = fit_decimal(Decimal::new(199, 1), 10, 2)?;
        assert_eq!(padded.to_string(), "19.90");

        let rounded = fit_decimal(Decimal::new(12345, 3), 10, 2)?;
        assert_eq!(rounded.to_string(), "12.35");
        Ok(())
    }

    #[test]
    fn test_fit_decimal_precision_overflow() {
        let err = fit_decimal(Decimal::new(123456, 2), 5, 2).unwrap_err();
        assert!(matches!(err, ConvertError::PrecisionExceeded { precision: 5, scale: 2, .. }));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(1999), 4);
    }
}
