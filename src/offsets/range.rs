use std::cmp::{max, min};
use std::convert::TryFrom;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ByteOffset, CharOffset, Offset};
use crate::{CommonError, CommonResult};

/// A half-open range `[start, end)` of offsets.
///
/// `start <= end` always holds; an empty range has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RangeParts<O>",
    bound(deserialize = "O: Offset + Deserialize<'de>")
)]
pub struct OffsetRange<O> {
    start: O,
    end: O,
}

#[derive(Deserialize)]
struct RangeParts<O> {
    start: O,
    end: O,
}

impl<O: Offset> TryFrom<RangeParts<O>> for OffsetRange<O> {
    type Error = CommonError;

    fn try_from(parts: RangeParts<O>) -> CommonResult<Self> {
        OffsetRange::new(parts.start, parts.end)
    }
}

impl<O: Offset> OffsetRange<O> {
    pub fn new(start: O, end: O) -> CommonResult<Self> {
        if start > end {
            return Err(CommonError::invalid_argument(format!(
                "range start {} is after end {}",
                start, end
            )));
        }
        Ok(OffsetRange { start, end })
    }

    pub fn start(&self) -> O {
        self.start
    }

    pub fn end(&self) -> O {
        self.end
    }

    /// Number of offset units covered.
    pub fn length(&self) -> usize {
        self.end.as_usize() - self.start.as_usize()
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: O) -> bool {
        self.start <= offset && offset < self.end
    }

    /// True if `other` lies entirely within this range.
    pub fn contains_range(&self, other: &OffsetRange<O>) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True if the ranges share at least one offset.
    pub fn overlaps(&self, other: &OffsetRange<O>) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The shared part of two overlapping ranges.
    pub fn intersection(&self, other: &OffsetRange<O>) -> Option<OffsetRange<O>> {
        if !self.overlaps(other) {
            return None;
        }
        Some(OffsetRange {
            start: max(self.start, other.start),
            end: min(self.end, other.end),
        })
    }

    /// Moves both ends by `delta`, or `None` if either end would leave the
    /// coordinate space.
    pub fn shifted(&self, delta: isize) -> Option<OffsetRange<O>> {
        Some(OffsetRange {
            start: self.start.shifted(delta)?,
            end: self.end.shifted(delta)?,
        })
    }
}

impl OffsetRange<CharOffset> {
    pub fn char_range(start: usize, end: usize) -> CommonResult<Self> {
        OffsetRange::new(CharOffset::new(start), CharOffset::new(end))
    }
}

impl OffsetRange<ByteOffset> {
    pub fn byte_range(start: usize, end: usize) -> CommonResult<Self> {
        OffsetRange::new(ByteOffset::new(start), ByteOffset::new(end))
    }
}

impl<O: fmt::Display> fmt::Display for OffsetRange<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: usize, end: usize) -> OffsetRange<CharOffset> {
        OffsetRange::char_range(start, end).unwrap()
    }

    #[test]
    fn rejects_inverted_range() {
        let err = OffsetRange::char_range(5, 2).unwrap_err();
        assert_eq!(err.message(), "range start 5 is after end 2");
    }

    #[test]
    fn empty_range_is_valid() {
        let empty = range(3, 3);
        assert!(empty.is_empty());
        assert_eq!(empty.length(), 0);
        assert!(!empty.contains(CharOffset::new(3)));
    }

    #[test]
    fn containment_is_half_open() {
        let r = range(0, 4);
        assert!(r.contains(CharOffset::new(0)));
        assert!(r.contains(CharOffset::new(3)));
        assert!(!r.contains(CharOffset::new(4)));
        assert!(r.contains_range(&range(1, 4)));
        assert!(!r.contains_range(&range(1, 5)));
    }

    #[test]
    fn overlap_and_intersection() {
        let a = range(0, 5);
        let b = range(3, 8);
        let c = range(5, 9);

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(a.intersection(&b), Some(range(3, 5)));
        assert_eq!(a.intersection(&c), None);
    }

    #[test]
    fn shifting() {
        assert_eq!(range(2, 4).shifted(3), Some(range(5, 7)));
        assert_eq!(range(2, 4).shifted(-3), None);
    }

    #[test]
    fn display() {
        assert_eq!(range(0, 4).to_string(), "[0,4)");
        assert_eq!(OffsetRange::byte_range(10, 12).unwrap().to_string(), "[10,12)");
    }

    #[test]
    fn deserialize_validates() {
        let ok: OffsetRange<CharOffset> = ron::from_str("(start: 1, end: 3)").unwrap();
        assert_eq!(ok, range(1, 3));

        let inverted: Result<OffsetRange<CharOffset>, _> = ron::from_str("(start: 3, end: 1)");
        assert!(inverted.is_err());
    }
}
