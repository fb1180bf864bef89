use std::borrow::Cow;
use std::collections::HashSet;

use super::{ExecutionSegment, RangeViolation, SegmentError};
use crate::rational::{integer, BigInt, BigRational};

fn rat(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

fn segment(from: BigRational, to: BigRational) -> ExecutionSegment {
    ExecutionSegment::new(from, to).expect("valid segment")
}

fn violation(from: BigRational, to: BigRational) -> RangeViolation {
    match ExecutionSegment::new(from, to).expect_err("invalid segment") {
        SegmentError::InvalidRange { violation, .. } => violation,
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn new_precomputes_length_ok() {
    let seg = segment(rat(1, 3), rat(3, 4));
    assert_eq!(*seg.length(), rat(5, 12));
    let bounds = seg.bounds().expect("explicit bounds");
    assert_eq!(*bounds.from(), rat(1, 3));
    assert_eq!(*bounds.to(), rat(3, 4));
    assert_eq!(*bounds.length(), rat(5, 12));
}

#[test]
fn new_rejects_bounds_in_order_err() {
    assert_eq!(violation(rat(-1, 2), rat(1, 2)), RangeViolation::NegativeStart);
    assert_eq!(violation(rat(-1, 2), rat(3, 2)), RangeViolation::NegativeStart);
    assert_eq!(violation(rat(1, 2), rat(1, 4)), RangeViolation::StartNotBeforeEnd);
    assert_eq!(violation(rat(1, 2), rat(1, 2)), RangeViolation::StartNotBeforeEnd);
    assert_eq!(violation(rat(2, 1), rat(3, 2)), RangeViolation::StartNotBeforeEnd);
    assert_eq!(violation(integer(0), rat(3, 2)), RangeViolation::EndAboveOne);
}

#[test]
fn new_error_carries_offending_values() {
    let err = ExecutionSegment::new(rat(1, 2), rat(1, 4)).unwrap_err();
    assert_eq!(
        err,
        SegmentError::InvalidRange {
            from: rat(1, 2),
            to: rat(1, 4),
            violation: RangeViolation::StartNotBeforeEnd,
        }
    );
}

#[test]
fn full_behaves_like_unit_interval() {
    let full = ExecutionSegment::full();
    assert!(full.is_full());
    assert!(full.bounds().is_none());
    assert_eq!(*full.from(), integer(0));
    assert_eq!(*full.to(), integer(1));
    assert_eq!(*full.length(), integer(1));
    assert_eq!(ExecutionSegment::default(), full);

    let explicit = segment(integer(0), integer(1));
    assert!(!explicit.is_full());
    assert_eq!(full, explicit);
    assert_eq!(explicit, full);
}

#[test]
fn equality_is_numeric() {
    let a = segment(rat(1, 2), rat(3, 4));
    let b = segment(rat(2, 4), rat(6, 8));
    let c = segment(rat(1, 2), rat(2, 3));
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, ExecutionSegment::Full);
}

#[test]
fn hash_agrees_with_equality() {
    let mut seen = HashSet::new();
    seen.insert(ExecutionSegment::Full);
    assert!(!seen.insert(segment(integer(0), integer(1))));
    assert!(seen.insert(segment(integer(0), rat(1, 2))));
    assert!(!seen.insert(segment(rat(0, 3), rat(2, 4))));
}

#[test]
fn split_rejects_zero_parts_err() {
    let err = ExecutionSegment::Full.split(0).unwrap_err();
    assert_eq!(err, SegmentError::InvalidArgument { num_parts: 0 });
}

#[test]
fn split_single_part_is_identity() {
    let seg = segment(rat(1, 5), rat(4, 5));
    assert_eq!(seg.split(1).unwrap(), vec![seg.clone()]);
    assert_eq!(
        ExecutionSegment::Full.split(1).unwrap(),
        vec![ExecutionSegment::Full]
    );
}

#[test]
fn split_full_in_thirds() {
    let parts = ExecutionSegment::Full.split(3).unwrap();
    assert_eq!(
        parts,
        vec![
            segment(integer(0), rat(1, 3)),
            segment(rat(1, 3), rat(2, 3)),
            segment(rat(2, 3), integer(1)),
        ]
    );
}

#[test]
fn sub_segment_composes() {
    let parent = segment(rat(1, 2), integer(1));
    let child = segment(integer(0), rat(1, 2));
    assert_eq!(parent.sub_segment(&child), segment(rat(1, 2), rat(3, 4)));
    assert_eq!(*parent.sub_segment(&child).length(), rat(1, 4));
}

#[test]
fn sub_segment_with_full_sides() {
    let seg = segment(rat(1, 3), rat(2, 3));
    assert_eq!(seg.sub_segment(&ExecutionSegment::Full), seg);
    assert_eq!(ExecutionSegment::Full.sub_segment(&seg), seg);
    assert!(ExecutionSegment::Full
        .sub_segment(&ExecutionSegment::Full)
        .is_full());
}

#[test]
fn scale_known_values() {
    let thirds = ExecutionSegment::Full.split(3).unwrap();
    let shares: Vec<i64> = thirds.iter().map(|s| s.scale(10)).collect();
    assert_eq!(shares, vec![3, 4, 3]);
    assert_eq!(shares.iter().sum::<i64>(), 10);

    let half = segment(integer(0), rat(1, 2));
    assert_eq!(half.scale(1), 1);
    assert_eq!(segment(rat(1, 2), integer(1)).scale(1), 0);
    assert_eq!(half.scale(0), 0);
}

#[test]
fn scale_full_is_identity() {
    for value in [0, 1, 7, 1_000_000, i64::MAX, -3, i64::MIN] {
        assert_eq!(ExecutionSegment::Full.scale(value), value);
        assert_eq!(segment(integer(0), integer(1)).scale(value), value);
    }
}

#[test]
fn scale_negative_mirrors_positive() {
    let seg = segment(rat(1, 3), rat(2, 3));
    assert_eq!(seg.scale(-10), -seg.scale(10));
    let half = segment(integer(0), rat(1, 2));
    assert_eq!(half.scale(i64::MIN), i64::MIN / 2);
}

#[test]
fn scale_rat_variants() {
    let seg = segment(rat(1, 4), rat(3, 4));
    let rate = rat(30, 1);

    let copied = seg.scale_rat(&rate);
    assert!(matches!(copied, Cow::Owned(_)));
    assert_eq!(*copied, integer(15));
    assert_eq!(rate, integer(30));

    let mut owned = rate.clone();
    let scaled = seg.scale_rat_in_place(&mut owned);
    *scaled *= integer(2);
    assert_eq!(owned, integer(30));
}

#[test]
fn scale_rat_full_is_identity() {
    let rate = rat(7, 3);
    let borrowed = ExecutionSegment::Full.scale_rat(&rate);
    assert!(matches!(borrowed, Cow::Borrowed(_)));
    assert_eq!(*borrowed, rate);

    let mut owned = rate.clone();
    ExecutionSegment::Full.scale_rat_in_place(&mut owned);
    assert_eq!(owned, rate);
}

#[test]
fn float_length_for_display() {
    assert_eq!(ExecutionSegment::Full.float_length(), 1.0);
    assert_eq!(segment(rat(1, 4), rat(3, 4)).float_length(), 0.5);
    let third = segment(integer(0), rat(1, 3)).float_length();
    assert!((third - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn segment_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ExecutionSegment>();
}
