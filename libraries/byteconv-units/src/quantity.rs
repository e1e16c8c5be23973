use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Why a piece of user text could not be read as a byte quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("empty quantity")]
    Empty,
    #[error("malformed quantity")]
    Malformed,
    #[error("negative quantity")]
    Negative,
    #[error("quantity out of range")]
    OutOfRange,
}

impl From<rust_decimal::Error> for QuantityError {
    fn from(err: rust_decimal::Error) -> Self {
        match err {
            rust_decimal::Error::ExceedsMaximumPossibleValue
            | rust_decimal::Error::LessThanMinimumPossibleValue
            | rust_decimal::Error::Underflow
            | rust_decimal::Error::ScaleExceedsMaximumPrecision(_) => Self::OutOfRange,
            _ => Self::Malformed,
        }
    }
}

/// Parses a non-negative quantity as typed into a field.
///
/// Surrounding whitespace and every `,` are ignored, so text that
/// [`format_grouped`] produced parses back to the same number. Both plain
/// (`1.5`) and scientific (`1.5e3`) notation are accepted.
pub fn parse_quantity(text: &str) -> Result<Decimal, QuantityError> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(QuantityError::Empty);
    }

    let value = if cleaned.contains(['e', 'E']) {
        Decimal::from_scientific(&cleaned.to_ascii_lowercase())?
    } else {
        Decimal::from_str(&cleaned)?
    };

    if value.is_zero() {
        // "-0" is still zero
        return Ok(Decimal::ZERO);
    }
    if value.is_sign_negative() {
        return Err(QuantityError::Negative);
    }
    Ok(value)
}

/// Formats a quantity rounded to the nearest integer (ties to even), with a
/// `,` between every group of three digits.
///
/// ```
/// use byteconv_units::{Decimal, format_grouped};
///
/// assert_eq!(format_grouped(Decimal::new(1_234_567, 0)), "1,234,567");
/// assert_eq!(format_grouped(Decimal::new(15, 1)), "2");
/// ```
pub fn format_grouped(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .normalize();
    let digits = rounded.abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_digits(&digits));
    out
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).expect("valid decimal literal")
    }

    #[test]
    fn parses_plain_and_grouped() {
        assert_eq!(parse_quantity("12"), Ok(dec("12")));
        assert_eq!(parse_quantity("1.5"), Ok(dec("1.5")));
        assert_eq!(parse_quantity("1,000"), Ok(dec("1000")));
        assert_eq!(parse_quantity("  1,234,567  "), Ok(dec("1234567")));
    }

    #[test]
    fn parses_scientific() {
        assert_eq!(parse_quantity("1e3"), Ok(dec("1000")));
        assert_eq!(parse_quantity("2.5E-2"), Ok(dec("0.025")));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_quantity(""), Err(QuantityError::Empty));
        assert_eq!(parse_quantity("   "), Err(QuantityError::Empty));
        assert_eq!(parse_quantity(","), Err(QuantityError::Empty));
        assert!(parse_quantity("abc").is_err());
        assert!(parse_quantity("1.2.3").is_err());
        assert!(parse_quantity("12kb").is_err());
        assert_eq!(parse_quantity("-5"), Err(QuantityError::Negative));
        assert_eq!(parse_quantity("-0.1"), Err(QuantityError::Negative));
    }

    #[test]
    fn negative_zero_is_zero() {
        let zero = parse_quantity("-0").expect("zero parses");
        assert!(zero.is_zero());
        assert_eq!(format_grouped(zero), "0");
    }

    #[test]
    fn formats_with_grouping() {
        assert_eq!(format_grouped(Decimal::ZERO), "0");
        assert_eq!(format_grouped(dec("999")), "999");
        assert_eq!(format_grouped(dec("1000")), "1,000");
        assert_eq!(format_grouped(dec("1000000000000")), "1,000,000,000,000");
        assert_eq!(format_grouped(dec("-1024")), "-1,024");
    }

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(format_grouped(dec("0.001")), "0");
        assert_eq!(format_grouped(dec("0.5")), "0");
        assert_eq!(format_grouped(dec("1.5")), "2");
        assert_eq!(format_grouped(dec("2.5")), "2");
        assert_eq!(format_grouped(dec("2.51")), "3");
        assert_eq!(format_grouped(dec("1000.000")), "1,000");
    }

    #[test]
    fn formatted_text_parses_back() {
        let value = dec("1099511627776");
        let text = format_grouped(value);
        assert_eq!(text, "1,099,511,627,776");
        assert_eq!(parse_quantity(&text), Ok(value));
    }
}
