//! Conversion between human-readable token amounts and base units

use crate::errors::FormulaError;
use ethers_core::types::U256;
use rust_decimal::Decimal;

/// Decimals used by both the continuous and the reserve token
pub const DEFAULT_DECIMALS: u8 = 18;

/// Parse a decimal token amount such as `"2.5"` into base units
///
/// Parsing is exact: negative values and values with more fractional digits
/// than `decimals` are rejected instead of rounded.
pub fn parse_units(text: &str, decimals: u8) -> Result<U256, FormulaError> {
    let invalid = |reason: &str| FormulaError::InvalidAmount {
        input: text.to_string(),
        reason: reason.to_string(),
    };

    let value = Decimal::from_str_exact(text.trim())
        .map_err(|e| invalid(&e.to_string()))?
        .normalize();

    if value.is_sign_negative() && !value.is_zero() {
        return Err(invalid("amount must not be negative"));
    }

    let scale = value.scale();
    if scale > u32::from(decimals) {
        return Err(invalid("too many fractional digits"));
    }

    let mantissa = value.mantissa().unsigned_abs();
    let multiplier = U256::from(10u64)
        .checked_pow(U256::from(u32::from(decimals) - scale))
        .ok_or_else(|| invalid("decimals out of range"))?;

    U256::from(mantissa)
        .checked_mul(multiplier)
        .ok_or_else(|| invalid("amount exceeds 256 bits"))
}

/// `parse_units(text, 18)`
pub fn parse_ether(text: &str) -> Result<U256, FormulaError> {
    parse_units(text, DEFAULT_DECIMALS)
}

/// Render base units as a decimal string, e.g. `2000000000000000000` -> `"2.0"`
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    let decimals = usize::from(decimals);

    let (whole, fraction) = if digits.len() > decimals {
        let split = digits.len() - decimals;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", digits, width = decimals))
    };

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}.0", whole)
    } else {
        format!("{}.{}", whole, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ether() {
        assert_eq!(parse_ether("1").unwrap(), U256::exp10(18));
        assert_eq!(parse_ether("0.5").unwrap(), U256::exp10(17) * U256::from(5u64));
        assert_eq!(parse_ether("2.000").unwrap(), U256::exp10(18) * U256::from(2u64));
        assert_eq!(parse_ether("0").unwrap(), U256::zero());
        assert_eq!(
            parse_ether("0.000000000000000001").unwrap(),
            U256::one()
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            parse_ether("-1"),
            Err(FormulaError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_ether("abc"),
            Err(FormulaError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_units("1.001", 2),
            Err(FormulaError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(U256::exp10(18) * U256::from(2u64), 18), "2.0");
        assert_eq!(format_units(U256::zero(), 18), "0.0");
        assert_eq!(format_units(U256::one(), 18), "0.000000000000000001");
        assert_eq!(
            format_units(U256::from_dec_str("1464101615137754587").unwrap(), 18),
            "1.464101615137754587"
        );
        assert_eq!(format_units(U256::from(1_500u64), 3), "1.5");
        assert_eq!(format_units(U256::from(42u64), 0), "42.0");
    }
}
