use core::fmt;

use num_rational::BigRational;

/// Which bound check rejected a `(from, to)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeViolation {
    /// `from` was below zero.
    NegativeStart,
    /// `from` was not strictly below `to`.
    StartNotBeforeEnd,
    /// `to` was above one.
    EndAboveOne,
}

/// Why a value token could not be read as a rational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseReason {
    /// The text before `%` was not an integer.
    InvalidPercentage,
    /// The text was not a decimal, integer or `numerator/denominator` fraction.
    InvalidNumber,
    /// A fraction had a zero denominator.
    ZeroDenominator,
    /// A decimal exponent exceeded the supported magnitude.
    ExponentOutOfRange,
}

/// Errors surfaced by execution segment construction, parsing and splitting.
///
/// Every operation is pure, so an error is final for the given input; there is
/// no retry or partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// The bounds violate `0 <= from < to <= 1`.
    InvalidRange {
        /// Requested start of the segment.
        from: BigRational,
        /// Requested end of the segment.
        to: BigRational,
        /// First check that failed.
        violation: RangeViolation,
    },
    /// Segment text did not match the value or segment grammar.
    Parse {
        /// Offending token.
        input: String,
        /// Grammar rule that rejected it.
        reason: ParseReason,
    },
    /// `split` was asked for zero parts.
    InvalidArgument {
        /// Requested number of parts.
        num_parts: usize,
    },
    /// The final split boundary did not land on the segment end.
    InternalInvariant {
        /// Boundary reached after the last part.
        reached: BigRational,
        /// End of the segment being split.
        expected: BigRational,
    },
}

impl SegmentError {
    /// Creates an invalid-range error helper.
    pub fn invalid_range(from: BigRational, to: BigRational, violation: RangeViolation) -> Self {
        SegmentError::InvalidRange {
            from,
            to,
            violation,
        }
    }

    /// Creates a parse error helper.
    pub fn parse(input: &str, reason: ParseReason) -> Self {
        SegmentError::Parse {
            input: input.to_owned(),
            reason,
        }
    }
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentError::InvalidRange {
                from,
                to,
                violation,
            } => match violation {
                RangeViolation::NegativeStart => {
                    write!(f, "segment start value should be at least 0 but was {from}")
                }
                RangeViolation::StartNotBeforeEnd => {
                    write!(f, "segment start ({from}) should be less than its end ({to})")
                }
                RangeViolation::EndAboveOne => {
                    write!(f, "segment end value shouldn't be more than 1 but was {to}")
                }
            },
            SegmentError::Parse { input, reason } => match reason {
                ParseReason::InvalidPercentage => {
                    write!(f, "'{input}' is not a valid percentage")
                }
                ParseReason::InvalidNumber => write!(
                    f,
                    "'{input}' is not a valid percentage, decimal, fraction or interval value"
                ),
                ParseReason::ZeroDenominator => {
                    write!(f, "'{input}' has a zero denominator")
                }
                ParseReason::ExponentOutOfRange => {
                    write!(f, "'{input}' has an exponent outside the supported range")
                }
            },
            SegmentError::InvalidArgument { num_parts } => write!(
                f,
                "the number of parts should be at least 1, {num_parts} received"
            ),
            SegmentError::InternalInvariant { reached, expected } => write!(
                f,
                "split boundary {reached} does not match segment end {expected}"
            ),
        }
    }
}

impl std::error::Error for SegmentError {}
