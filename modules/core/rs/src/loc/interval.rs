use std::fmt::{Display, Formatter};

use crate::num::PrimInt;
#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use eyre::{ensure, Result};

/// Half-open genomic coordinates [start, end). Zero-length intervals are valid, BED uses them to
/// mark insertion points, but start may never exceed end.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Interval<Idx: PrimInt> {
    start: Idx,
    end: Idx,
}

/// Anything that spans a half-open range of positions on a sequence.
pub trait IntervalOp {
    type Idx: PrimInt;

    fn start(&self) -> Self::Idx;

    fn end(&self) -> Self::Idx;

    fn len(&self) -> Self::Idx {
        self.end() - self.start()
    }

    fn is_empty(&self) -> bool {
        self.start() == self.end()
    }

    /// True if `other` lies within [start, end]. Zero-length intervals at either boundary count.
    fn envelops(&self, other: &Self) -> bool {
        self.start() <= other.start() && other.end() <= self.end()
    }
}

impl<Idx: PrimInt> IntervalOp for Interval<Idx> {
    type Idx = Idx;

    #[inline(always)]
    fn start(&self) -> Idx {
        self.start
    }

    #[inline(always)]
    fn end(&self) -> Idx {
        self.end
    }
}

impl<Idx: PrimInt> Interval<Idx> {
    pub fn new(start: Idx, end: Idx) -> Result<Self> {
        ensure!(
            start <= end,
            "Interval start must not exceed its end, got [{:?}, {:?})",
            start,
            end
        );
        Ok(Self { start, end })
    }

    /// Both ends moved by `offset`; None on overflow.
    pub fn shifted(&self, offset: Idx) -> Option<Self> {
        let start = self.start.checked_add(&offset)?;
        let end = self.end.checked_add(&offset)?;
        Some(Self { start, end })
    }
}

impl<Idx: PrimInt + Display> Display for Interval<Idx> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() -> Result<()> {
        let interval = Interval::new(3u64, 10)?;
        assert_eq!((interval.start(), interval.end()), (3, 10));
        assert_eq!(interval.len(), 7);
        assert!(!interval.is_empty());

        let point = Interval::new(5u64, 5)?;
        assert_eq!(point.len(), 0);
        assert!(point.is_empty());

        assert!(Interval::new(10u64, 9).is_err());
        Ok(())
    }

    #[test]
    fn test_envelops() -> Result<()> {
        let outer = Interval::new(10u64, 100)?;
        for inner in [(10, 100), (20, 50), (10, 10), (100, 100)] {
            assert!(outer.envelops(&Interval::new(inner.0, inner.1)?), "{inner:?}");
        }
        for outside in [(9, 50), (50, 101), (0, 5)] {
            assert!(!outer.envelops(&Interval::new(outside.0, outside.1)?), "{outside:?}");
        }
        Ok(())
    }

    #[test]
    fn test_shifted() -> Result<()> {
        let interval = Interval::new(0u64, 10)?;
        assert_eq!(interval.shifted(100), Some(Interval::new(100, 110)?));
        assert_eq!(interval.shifted(u64::MAX), None);
        assert_eq!(Interval::new(0u8, 0)?.shifted(u8::MAX), Some(Interval::new(255, 255)?));
        Ok(())
    }

    #[test]
    fn test_display() -> Result<()> {
        assert_eq!(Interval::new(1u64, 300)?.to_string(), "[1, 300)");
        Ok(())
    }
}
