use bedtrack_core_rs::loc::{Interval, IntervalOp};
use eyre::{ensure, Result};

/// Number of columns allowed in a BED file. Columns 7-8 (thickStart, thickEnd) and 10-12
/// (blockCount, blockSizes, blockStarts) are only meaningful together.
pub const WIDTHS: [usize; 7] = [3, 4, 5, 6, 8, 9, 12];

pub fn num_fields(num_fields: usize) -> Result<()> {
    ensure!(
        WIDTHS.contains(&num_fields),
        "BED files must have one of {:?} fields, got {}",
        WIDTHS,
        num_fields
    );
    Ok(())
}

pub fn seqid(s: &str) -> Result<()> {
    ensure!(!s.is_empty(), "BED seqid can't be empty");
    ensure!(
        s.len() <= 255,
        "BED seqid can't be longer than 255 characters"
    );
    ensure!(
        !s.chars().any(|c| c.is_whitespace()),
        "BED seqid can't contain whitespace characters, got: {:?}",
        s
    );
    Ok(())
}

pub fn name(s: &str) -> Result<()> {
    ensure!(!s.is_empty(), "BED name can't be empty");
    ensure!(
        s.len() <= 255,
        "BED name can't be longer than 255 characters"
    );
    ensure!(
        s.chars().all(|c| matches!(c, '\x20'..='\x7e')),
        "BED name can only contain printable ASCII characters, got: {:?}",
        s
    );
    Ok(())
}

pub fn score(score: f64) -> Result<()> {
    ensure!(score.is_finite(), "BED score must be a finite number");
    Ok(())
}

pub fn thick(interval: &Interval<u64>, thick: &Interval<u64>) -> Result<()> {
    ensure!(
        interval.envelops(thick),
        "BED thick interval must be within the main interval, but got {} and {}",
        interval,
        thick
    );
    Ok(())
}

/// Blocks are relative to the interval start and must tile it from its first to its last
/// position without overlaps.
pub fn blocks(interval: &Interval<u64>, blocks: &[Interval<u64>]) -> Result<()> {
    ensure!(!blocks.is_empty(), "BED blockCount must be greater than 0");
    ensure!(
        blocks[0].start() == 0,
        "BED blocks must start at the beginning of the interval"
    );

    let mut position = 0;
    for block in blocks {
        ensure!(!block.is_empty(), "BED blockSizes must be greater than 0");
        ensure!(
            position <= block.start(),
            "BED blocks must be in ascending order and must not overlap"
        );
        position = block.end();
    }
    ensure!(
        position == interval.len(),
        "BED blocks must end at the end of the interval: {} != {}",
        position,
        interval.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_fields() {
        for width in WIDTHS {
            assert!(num_fields(width).is_ok());
        }
        for width in [0, 1, 2, 7, 10, 11, 13] {
            assert!(num_fields(width).is_err());
        }
    }

    #[test]
    fn test_seqid_and_name() {
        assert!(seqid("chr1").is_ok());
        assert!(seqid(&"A".repeat(255)).is_ok());
        for bad in ["", " chr1", "chr 1", &"A".repeat(256)] {
            assert!(seqid(bad).is_err());
        }

        assert!(name("gene A").is_ok());
        for bad in ["", "\0", "gène", &"B".repeat(256)] {
            assert!(name(bad).is_err());
        }
    }

    #[test]
    fn test_score() {
        assert!(score(0.0).is_ok());
        assert!(score(960.5).is_ok());
        assert!(score(f64::NAN).is_err());
        assert!(score(f64::INFINITY).is_err());
    }

    #[test]
    fn test_blocks() -> Result<()> {
        let interval = Interval::new(10, 100)?;
        assert!(blocks(&interval, &[Interval::new(0, 90)?]).is_ok());
        assert!(blocks(&interval, &[Interval::new(0, 10)?, Interval::new(20, 90)?]).is_ok());

        for bad in [
            vec![],
            vec![Interval::new(1, 90)?],
            vec![Interval::new(0, 89)?],
            vec![Interval::new(0, 50)?, Interval::new(40, 90)?],
            vec![Interval::new(0, 10)?, Interval::new(10, 10)?, Interval::new(20, 90)?],
        ] {
            assert!(blocks(&interval, &bad).is_err());
        }
        Ok(())
    }
}
