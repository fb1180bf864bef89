use std::hash::{Hash, Hasher};

use num_rational::BigRational;

use super::validate::validate_bounds;
use crate::rational::{one, zero};
use crate::SegmentResult;

/// Validated bounds of an explicit segment.
///
/// | Field | Constraint |
/// |-------|------------|
/// | `from` | `0 <= from < to` |
/// | `to` | `from < to <= 1` |
/// | `length` | exactly `to - from`, computed once at construction |
///
/// The fields are private; bounds only come out of
/// [`ExecutionSegment::new`], the text parser, or the composing operations.
#[derive(Debug, Clone)]
pub struct SegmentBounds {
    pub(super) from: BigRational,
    pub(super) to: BigRational,
    pub(super) length: BigRational,
}

impl SegmentBounds {
    /// Builds bounds whose invariants already hold by construction.
    pub(super) fn from_start_and_length(from: BigRational, length: BigRational) -> Self {
        let to = &from + &length;
        SegmentBounds { from, to, length }
    }

    /// Start of the interval (exclusive).
    pub fn from(&self) -> &BigRational {
        &self.from
    }

    /// End of the interval (inclusive).
    pub fn to(&self) -> &BigRational {
        &self.to
    }

    /// `to - from`.
    pub fn length(&self) -> &BigRational {
        &self.length
    }
}

/// A `(from, to]` slice of the whole test's work.
///
/// An instance that only knows its own segment can compute its exact share
/// of any VU count, iteration count or rate without knowing how many other
/// instances exist or which segments they run.
///
/// [`ExecutionSegment::Full`] is the unsharded default. It behaves exactly
/// like the explicit segment `(0, 1]` in every operation, including
/// equality, but carries no rationals.
///
/// Values are immutable: every composing operation returns a new segment.
#[derive(Debug, Clone, Default)]
pub enum ExecutionSegment {
    /// No segment was configured; the whole execution.
    #[default]
    Full,
    /// An explicit validated interval.
    Partial(SegmentBounds),
}

impl ExecutionSegment {
    /// Validates `0 <= from < to <= 1` and builds the segment.
    ///
    /// Checks run in the order start, ordering, end and the first failure is
    /// reported together with both values.
    pub fn new(from: BigRational, to: BigRational) -> SegmentResult<Self> {
        validate_bounds(&from, &to)?;
        let length = &to - &from;
        Ok(ExecutionSegment::Partial(SegmentBounds { from, to, length }))
    }

    /// The unsharded segment.
    pub const fn full() -> Self {
        ExecutionSegment::Full
    }

    /// Returns `true` only for the [`ExecutionSegment::Full`] tag. An explicit
    /// `(0, 1]` segment compares equal to it but is not "full" in this sense.
    pub fn is_full(&self) -> bool {
        matches!(self, ExecutionSegment::Full)
    }

    /// Explicit bounds, if any.
    pub fn bounds(&self) -> Option<&SegmentBounds> {
        match self {
            ExecutionSegment::Full => None,
            ExecutionSegment::Partial(bounds) => Some(bounds),
        }
    }

    pub fn from(&self) -> &BigRational {
        match self {
            ExecutionSegment::Full => zero(),
            ExecutionSegment::Partial(bounds) => &bounds.from,
        }
    }

    pub fn to(&self) -> &BigRational {
        match self {
            ExecutionSegment::Full => one(),
            ExecutionSegment::Partial(bounds) => &bounds.to,
        }
    }

    pub fn length(&self) -> &BigRational {
        match self {
            ExecutionSegment::Full => one(),
            ExecutionSegment::Partial(bounds) => &bounds.length,
        }
    }
}

impl PartialEq for ExecutionSegment {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self, other) {
            (ExecutionSegment::Full, ExecutionSegment::Full) => true,
            _ => self.from() == other.from() && self.to() == other.to(),
        }
    }
}

impl Eq for ExecutionSegment {}

impl Hash for ExecutionSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from().hash(state);
        self.to().hash(state);
    }
}
