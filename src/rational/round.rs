use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::Signed;

/// Rounds `value` to the nearest integer, resolving ties away from zero.
///
/// Both boundaries of a scaled segment go through this helper, so any two
/// adjacent segments round their shared boundary identically. The
/// denominator of a normalised [`BigRational`] is always positive, which
/// keeps the remainder comparison sign-independent.
pub fn round_half_away(value: &BigRational) -> BigInt {
    let (quotient, remainder) = value.numer().div_rem(value.denom());
    let doubled = remainder.abs() * 2u32;
    if doubled >= *value.denom() {
        if value.is_negative() {
            quotient - 1u32
        } else {
            quotient + 1u32
        }
    } else {
        quotient
    }
}
