use num_rational::BigRational;
use num_traits::Signed;

use super::errors::{RangeViolation, SegmentError};
use crate::rational::one;

/// Checks `0 <= from < to <= 1`, reporting the first violated bound.
pub(super) fn validate_bounds(from: &BigRational, to: &BigRational) -> Result<(), SegmentError> {
    let violation = if from.is_negative() {
        RangeViolation::NegativeStart
    } else if from >= to {
        RangeViolation::StartNotBeforeEnd
    } else if to > one() {
        RangeViolation::EndAboveOne
    } else {
        return Ok(());
    };
    Err(SegmentError::invalid_range(
        from.clone(),
        to.clone(),
        violation,
    ))
}
