//! Exact rational helpers shared by every execution segment operation.
//!
//! Segments never touch floating point when computing shares. This module
//! holds the process-wide rational constants, the single rounding rule used
//! by [`crate::ExecutionSegment::scale`] and the parser for the value tokens
//! that appear in segment text (`50%`, `0.5`, `1/2`).

mod parse;
mod round;

pub use parse::parse_value;
pub use round::round_half_away;

pub use num_bigint::BigInt;
pub use num_rational::BigRational;

use num_traits::{One, Zero};
use once_cell::sync::Lazy;

static ZERO: Lazy<BigRational> = Lazy::new(BigRational::zero);
static ONE: Lazy<BigRational> = Lazy::new(BigRational::one);

/// Shared `0/1`, used as the start of the full segment.
pub fn zero() -> &'static BigRational {
    &ZERO
}

/// Shared `1/1`, used as the end and length of the full segment.
pub fn one() -> &'static BigRational {
    &ONE
}

/// Lifts an integer into an exact rational `value/1`.
pub fn integer<T: Into<BigInt>>(value: T) -> BigRational {
    BigRational::from_integer(value.into())
}
