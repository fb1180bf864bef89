//! Exact execution segments for splitting load-test work.
//!
//! A test's total work (virtual users, iterations, request rate) can be split
//! between independently running instances without any coordination between
//! them. Each instance is given only its own `(from, to]` slice of `[0, 1]`
//! as an [`ExecutionSegment`] and derives its share of every quantity from
//! that slice alone. Shares are computed with exact rationals, so the shares
//! of a complete set of segments always add up to the original total.
//!
//! * [`segment`] holds the value type and its algebra.
//! * [`rational`] holds the shared rounding rule and the value-token parser.
//! * [`config`] loads segments from JSON options and the environment.

pub mod config;
pub mod rational;
pub mod segment;

pub use config::{ConfigError, SegmentOptions, EXECUTION_SEGMENT_ENV};
pub use num_rational::BigRational;
pub use segment::{ExecutionSegment, ParseReason, RangeViolation, SegmentBounds, SegmentError};

/// Result type used throughout the crate.
pub type SegmentResult<T> = core::result::Result<T, SegmentError>;
