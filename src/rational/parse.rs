use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;
use num_traits::{pow, Zero};

use crate::segment::{ParseReason, SegmentError};
use crate::SegmentResult;

/// Largest decimal exponent accepted in `1e-3` style tokens.
const MAX_DECIMAL_EXPONENT: u64 = 10_000;

/// Parses a single segment value token into an exact rational.
///
/// | Form | Example | Value |
/// |------|---------|-------|
/// | Percentage | `50%` | `1/2` |
/// | Fraction | `3/4` | `3/4` |
/// | Decimal | `0.75`, `7.5e-1` | `3/4` |
/// | Integer | `1` | `1` |
///
/// The percentage prefix must be an integer; `1.5%` is rejected.
/// Range checks are left to [`crate::ExecutionSegment::new`].
pub fn parse_value(token: &str) -> SegmentResult<BigRational> {
    if let Some(percent) = token.strip_suffix('%') {
        let numer = parse_signed(percent)
            .ok_or_else(|| SegmentError::parse(token, ParseReason::InvalidPercentage))?;
        return Ok(BigRational::new(numer, BigInt::from(100u32)));
    }
    if let Some((numer, denom)) = token.split_once('/') {
        let numer =
            parse_signed(numer).ok_or_else(|| SegmentError::parse(token, ParseReason::InvalidNumber))?;
        let denom =
            parse_digits(denom).ok_or_else(|| SegmentError::parse(token, ParseReason::InvalidNumber))?;
        if denom.is_zero() {
            return Err(SegmentError::parse(token, ParseReason::ZeroDenominator));
        }
        return Ok(BigRational::new(numer, BigInt::from(denom)));
    }
    parse_decimal(token)
}

fn parse_decimal(token: &str) -> SegmentResult<BigRational> {
    let invalid = || SegmentError::parse(token, ParseReason::InvalidNumber);

    let (mantissa, exponent) = match token.find(&['e', 'E'][..]) {
        Some(at) => (&token[..at], parse_exponent(token, &token[at + 1..])?),
        None => (token, 0),
    };
    let (sign, unsigned) = split_sign(mantissa);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let digits = format!("{whole}{fraction}");
    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
    let numer = BigInt::from_biguint(sign, magnitude);

    // value = digits * 10^(exponent - fraction digits)
    let scale = exponent - fraction.len() as i64;
    let ten = BigInt::from(10u32);
    let factor = pow(ten, scale.unsigned_abs() as usize);
    if scale >= 0 {
        Ok(BigRational::from_integer(numer * factor))
    } else {
        Ok(BigRational::new(numer, factor))
    }
}

fn parse_exponent(token: &str, text: &str) -> SegmentResult<i64> {
    let (sign, digits) = split_sign(text);
    let magnitude = parse_digits(digits)
        .ok_or_else(|| SegmentError::parse(token, ParseReason::InvalidNumber))?;
    match u64::try_from(magnitude) {
        Ok(value) if value <= MAX_DECIMAL_EXPONENT => {
            let value = value as i64;
            Ok(if sign == Sign::Minus { -value } else { value })
        }
        _ => Err(SegmentError::parse(token, ParseReason::ExponentOutOfRange)),
    }
}

fn split_sign(text: &str) -> (Sign, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (Sign::Minus, rest)
    } else {
        (Sign::Plus, text.strip_prefix('+').unwrap_or(text))
    }
}

fn parse_signed(text: &str) -> Option<BigInt> {
    let (sign, digits) = split_sign(text);
    parse_digits(digits).map(|magnitude| BigInt::from_biguint(sign, magnitude))
}

/// Accepts only a non-empty run of ASCII decimal digits.
fn parse_digits(text: &str) -> Option<BigUint> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::parse_bytes(text.as_bytes(), 10)
}
