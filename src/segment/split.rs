use num_bigint::BigInt;
use num_rational::BigRational;
use tracing::trace;

use super::{ExecutionSegment, SegmentBounds, SegmentError};
use crate::SegmentResult;

impl ExecutionSegment {
    /// Divides the segment into `num_parts` consecutive segments of equal
    /// length.
    ///
    /// Adjacent parts share their boundary exactly and the last part ends on
    /// this segment's `to`. The full segment is split as `(0, 1]`.
    pub fn split(&self, num_parts: usize) -> SegmentResult<Vec<ExecutionSegment>> {
        if num_parts < 1 {
            return Err(SegmentError::InvalidArgument { num_parts });
        }

        let end = self.to();
        let increment = self.length() / BigRational::from_integer(BigInt::from(num_parts));

        let mut parts = Vec::with_capacity(num_parts);
        let mut boundary = self.from().clone();
        for _ in 0..num_parts {
            let next = &boundary + &increment;
            parts.push(ExecutionSegment::new(boundary, next.clone())?);
            boundary = next;
        }

        if boundary != *end {
            return Err(SegmentError::InternalInvariant {
                reached: boundary,
                expected: end.clone(),
            });
        }

        trace!(segment = %self, num_parts, "split execution segment");
        Ok(parts)
    }

    /// Reads `child` as a portion of this segment and returns the absolute
    /// segment on the `[0, 1]` timeline.
    ///
    /// With `self = (1/2, 1]` and `child = (0, 1/2]` the result is
    /// `(1/2, 3/4]`:
    ///
    /// ```text
    /// result.from   = self.from + self.length * child.from
    /// result.length = self.length * child.length
    /// ```
    ///
    /// A full `child` returns `self` unchanged; a full `self` returns `child`.
    pub fn sub_segment(&self, child: &ExecutionSegment) -> ExecutionSegment {
        let ExecutionSegment::Partial(child) = child else {
            return self.clone();
        };
        let parent_length = self.length();
        let from = self.from() + parent_length * &child.from;
        let length = parent_length * &child.length;
        ExecutionSegment::Partial(SegmentBounds::from_start_and_length(from, length))
    }
}
