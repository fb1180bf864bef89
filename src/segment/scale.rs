use std::borrow::Cow;

use num_rational::BigRational;
use num_traits::ToPrimitive;

use super::{ExecutionSegment, SegmentBounds};
use crate::rational::{integer, round_half_away};

impl SegmentBounds {
    /// `round(value * to - round(value * from))` for a non-negative `value`.
    fn scale_magnitude(&self, value: u64) -> u64 {
        let value = integer(value);
        let from_share = integer(round_half_away(&(&value * &self.from)));
        let remaining = &value * &self.to - from_share;
        // `to > from` keeps `remaining` above -1/2 and at most `value`.
        round_half_away(&remaining).to_u64().unwrap_or(0)
    }
}

impl ExecutionSegment {
    /// Returns this segment's integer share of a whole-test quantity.
    ///
    /// Each boundary's cumulative share is rounded on its own, so the shares
    /// of any consecutive partition of `(0, 1]` add up to exactly `value`
    /// without the segments knowing about each other. Negative quantities
    /// are scaled by magnitude and keep their sign.
    pub fn scale(&self, value: i64) -> i64 {
        let ExecutionSegment::Partial(bounds) = self else {
            return value;
        };
        let scaled = bounds.scale_magnitude(value.unsigned_abs());
        if value < 0 {
            0i64.wrapping_sub_unsigned(scaled)
        } else {
            scaled as i64
        }
    }

    /// Multiplies `value` by the segment length in place and returns it for
    /// chaining. The full segment leaves `value` untouched.
    pub fn scale_rat_in_place<'a>(&self, value: &'a mut BigRational) -> &'a mut BigRational {
        if let ExecutionSegment::Partial(bounds) = self {
            *value *= &bounds.length;
        }
        value
    }

    /// Like [`ExecutionSegment::scale_rat_in_place`] but leaves `value`
    /// untouched. The full segment borrows `value` instead of copying it.
    pub fn scale_rat<'a>(&self, value: &'a BigRational) -> Cow<'a, BigRational> {
        match self {
            ExecutionSegment::Full => Cow::Borrowed(value),
            ExecutionSegment::Partial(bounds) => Cow::Owned(value * &bounds.length),
        }
    }

    /// Segment length as a float, for display and logging only.
    pub fn float_length(&self) -> f64 {
        match self {
            ExecutionSegment::Full => 1.0,
            ExecutionSegment::Partial(bounds) => bounds.length.to_f64().unwrap_or(f64::NAN),
        }
    }
}
