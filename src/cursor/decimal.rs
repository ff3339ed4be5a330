use rust_decimal::{Decimal, RoundingStrategy};

use crate::convert::{ConvertError, ConvertResult};

/// Sets `value` to exactly `scale` fractional digits, breaking ties towards the
/// even neighbour. Growing the scale pads with zeros. Fails when the value
/// cannot be represented at `scale`.
pub fn rescale_half_even(value: Decimal, scale: u32) -> ConvertResult<Decimal> {
    let mut rescaled = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven);
    rescaled.rescale(scale);

    if rescaled.scale() != scale {
        return Err(ConvertError::ScaleOutOfRange { value, scale });
    }
    Ok(rescaled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn rescaled(s: &str, scale: u32) -> String {
        rescale_half_even(dec(s), scale).unwrap().to_string()
    }

    #[test]
    fn test_ties_go_to_even() {
        assert_eq!(rescaled("2.345", 2), "2.34");
        assert_eq!(rescaled("2.355", 2), "2.36");
        assert_eq!(rescaled("-2.345", 2), "-2.34");
        assert_eq!(rescaled("2.5", 0), "2");
        assert_eq!(rescaled("3.5", 0), "4");
    }

    #[test]
    fn test_non_ties_round_to_nearest() {
        assert_eq!(rescaled("2.346", 2), "2.35");
        assert_eq!(rescaled("2.3449", 2), "2.34");
    }

    #[test]
    fn test_growing_scale_pads() -> ConvertResult<()> {
        assert_eq!(rescaled("19.99", 4), "19.9900");
        assert_eq!(rescaled("7", 2), "7.00");
        assert_eq!(rescale_half_even(dec("19.99"), 2)?, dec("19.99"));
        assert_eq!(rescale_half_even(dec("2.345"), 28)?.scale(), 28);
        Ok(())
    }

    #[test]
    fn test_scale_beyond_limit_fails() {
        assert_eq!(
            rescale_half_even(dec("2.345"), 29),
            Err(ConvertError::ScaleOutOfRange { value: dec("2.345"), scale: 29 })
        );
        assert!(rescale_half_even(dec("2.345"), 30).is_err());
    }

    #[test]
    fn test_padding_a_near_max_mantissa_fails() {
        let big = dec("7922816251426433759354395033");
        assert!(matches!(
            rescale_half_even(big, 2),
            Err(ConvertError::ScaleOutOfRange { scale: 2, .. })
        ));
        assert_eq!(rescale_half_even(big, 0), Ok(big));
    }
}
