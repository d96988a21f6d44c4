//! Conversion of client supplied decimal quantities into token base units

use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use num_bigint::Sign;
use thiserror::Error;

/// The largest number of decimal digits a `U256` can hold
const MAX_U256_DIGITS: i64 = 78;

/// The error type for decimal conversion
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AmountParseError {
    /// The input is not a decimal number
    #[error("invalid decimal amount: {0}")]
    Invalid(String),
    /// The input is negative
    #[error("amount must not be negative: {0}")]
    Negative(String),
    /// The scaled amount does not fit in 256 bits
    #[error("amount too large: {0}")]
    Overflow(String),
}

/// Convert a decimal quantity into base units of a token with `decimals`
/// decimals
///
/// Computes `floor(amount * 10^decimals)` exactly, digits past the token's
/// precision are dropped rather than rounded
pub fn to_base_units(amount: &str, decimals: u8) -> Result<U256, AmountParseError> {
    let trimmed = amount.trim();
    let value =
        BigDecimal::from_str(trimmed).map_err(|_| AmountParseError::Invalid(trimmed.to_string()))?;
    if value.sign() == Sign::Minus {
        return Err(AmountParseError::Negative(trimmed.to_string()));
    }

    // Shift the decimal point, `BigDecimal` scale is the negated exponent
    let (digits, scale) = value.into_bigint_and_exponent();
    let scale = scale
        .checked_sub(i64::from(decimals))
        .ok_or_else(|| AmountParseError::Overflow(trimmed.to_string()))?;
    let scaled = BigDecimal::new(digits, scale);

    // Bound the integer width before materializing it, rescaling costs time
    // linear in the exponent
    let integer_digits = (scaled.digits() as i64).saturating_sub(scaled.fractional_digit_count());
    if integer_digits > MAX_U256_DIGITS {
        return Err(AmountParseError::Overflow(trimmed.to_string()));
    }
    if integer_digits <= 0 {
        return Ok(U256::ZERO);
    }

    let (integer, _) = scaled.with_scale(0).into_bigint_and_exponent();
    U256::from_str_radix(&integer.to_string(), 10)
        .map_err(|_| AmountParseError::Overflow(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_and_fractional_amounts() {
        assert_eq!(to_base_units("1.5", 6).unwrap(), U256::from(1_500_000u64));
        assert_eq!(to_base_units("100", 6).unwrap(), U256::from(100_000_000u64));
        assert_eq!(to_base_units("0.000001", 6).unwrap(), U256::from(1u64));
        assert_eq!(to_base_units("2", 18).unwrap(), U256::from(2_000_000_000_000_000_000u128));
    }

    #[test]
    fn test_sub_unit_amounts_truncate() {
        assert_eq!(to_base_units("0.0000001", 6).unwrap(), U256::ZERO);
        assert_eq!(to_base_units("1.9999999", 6).unwrap(), U256::from(1_999_999u64));
        assert_eq!(to_base_units("1e-7", 6).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_exact_where_floats_are_not() {
        // 0.29 * 1e6 is 289999.99999999994 in binary floating point
        assert_eq!(to_base_units("0.29", 6).unwrap(), U256::from(290_000u64));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(to_base_units("abc", 6), Err(AmountParseError::Invalid(_))));
        assert!(matches!(to_base_units("", 6), Err(AmountParseError::Invalid(_))));
        assert!(matches!(to_base_units("-1", 6), Err(AmountParseError::Negative(_))));
        assert!(matches!(to_base_units("1e100", 6), Err(AmountParseError::Overflow(_))));
        assert!(matches!(to_base_units("1e1000000000", 6), Err(AmountParseError::Overflow(_))));
    }

    #[test]
    fn test_extreme_exponents() {
        assert_eq!(to_base_units("1e-1000000000000", 6).unwrap(), U256::ZERO);
        assert_eq!(to_base_units("5e-100000000", 18).unwrap(), U256::ZERO);
        assert_eq!(to_base_units("0e-1000000000000", 6).unwrap(), U256::ZERO);
        assert!(matches!(
            to_base_units("1e9223372036854775807", 6),
            Err(AmountParseError::Overflow(_))
        ));
        assert!(matches!(
            to_base_units("1e9223372036854775807", 0),
            Err(AmountParseError::Overflow(_))
        ));
    }
}
