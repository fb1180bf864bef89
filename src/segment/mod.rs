//! Execution segments: `(from, to]` slices of the whole test over `[0, 1]`.
//!
//! # Overview
//!
//! | Operation | Entry point |
//! |-----------|-------------|
//! | Construction & validation | [`ExecutionSegment::new`] |
//! | Text parse / format | [`str::parse`], [`std::fmt::Display`], serde |
//! | Equal partitioning | [`ExecutionSegment::split`] |
//! | Hierarchical composition | [`ExecutionSegment::sub_segment`] |
//! | Integer share | [`ExecutionSegment::scale`] |
//! | Rational share | [`ExecutionSegment::scale_rat`], [`ExecutionSegment::scale_rat_in_place`] |
//! | Display length | [`ExecutionSegment::float_length`] |
//!
//! # Invariants
//!
//! * Every explicit segment satisfies `0 <= from < to <= 1` and stores
//!   `length == to - from` exactly.
//! * [`ExecutionSegment::Full`] is indistinguishable from `(0, 1]` through
//!   every operation above.
//! * All arithmetic is exact; only [`ExecutionSegment::float_length`]
//!   produces a float.

mod errors;
mod scale;
mod ser;
mod split;
mod types;
mod validate;

pub use errors::{ParseReason, RangeViolation, SegmentError};
pub use types::{ExecutionSegment, SegmentBounds};

#[cfg(test)]
mod tests;
