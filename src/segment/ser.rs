//! Text form of execution segments.
//!
//! The same grammar is used for command-line flags, environment variables and
//! JSON string fields:
//!
//! | Text | Segment |
//! |------|---------|
//! | `1/2:3/4`, `0.5:0.75`, `50%:75%`, `2/4:75%` | `(1/2, 3/4]` |
//! | `20%`, `0.2`, `1/5` | `(0, 1/5]` |
//! | empty | the full segment |
//!
//! Segments render as `from:to` in exact rational notation and the full
//! segment renders as `0:1`.

use core::fmt;
use std::str::FromStr;

use num_traits::Zero;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use super::{ExecutionSegment, SegmentError};
use crate::rational::{parse_value, BigRational};
use crate::SegmentResult;

fn parse_segment(text: &str) -> SegmentResult<ExecutionSegment> {
    if text.is_empty() {
        return Ok(ExecutionSegment::Full);
    }
    let (from, to) = match text.split_once(':') {
        Some((from, to)) => (parse_value(from)?, to),
        None => (BigRational::zero(), text),
    };
    let to = parse_value(to)?;
    ExecutionSegment::new(from, to)
}

impl FromStr for ExecutionSegment {
    type Err = SegmentError;

    fn from_str(text: &str) -> SegmentResult<Self> {
        match parse_segment(text) {
            Ok(segment) => {
                trace!(input = text, %segment, "parsed execution segment");
                Ok(segment)
            }
            Err(err) => {
                debug!(input = text, error = %err, "rejected execution segment");
                Err(err)
            }
        }
    }
}

impl fmt::Display for ExecutionSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.from(), self.to())
    }
}

impl Serialize for ExecutionSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct SegmentVisitor;

impl<'de> Visitor<'de> for SegmentVisitor {
    type Value = ExecutionSegment;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an execution segment such as `1/2:3/4`, `0.5` or `20%`")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for ExecutionSegment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(SegmentVisitor)
    }
}
