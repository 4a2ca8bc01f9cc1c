use super::validate;
use bedtrack_core_rs::loc::{Interval, IntervalOp, Orientation};
#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use eyre::Result;

/// A single BED record with a fixed shape. The first three columns are mandatory, the optional
/// ones are populated in BED column order:
///
/// | Columns | Field         | Notes                                           |
/// |---------|---------------|-------------------------------------------------|
/// | 1       | `seqid`       |                                                 |
/// | 2-3     | `interval`    | chromStart, chromEnd                            |
/// | 4       | `name`        |                                                 |
/// | 5       | `score`       |                                                 |
/// | 6       | `orientation` | strand                                          |
/// | 7-8     | `thick`       | thickStart, thickEnd                            |
/// | 9       | `rgb`         | itemRgb                                         |
/// | 10-12   | `blocks`      | blockCount, blockSizes, blockStarts (relative)  |
///
/// All setters validate the new value against the rest of the record.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    seqid: String,
    interval: Interval<u64>,
    name: Option<String>,
    score: Option<f64>,
    orientation: Option<Orientation>,
    thick: Option<Interval<u64>>,
    rgb: Option<(u8, u8, u8)>,
    blocks: Option<Vec<Interval<u64>>>,
}

impl Record {
    pub fn new(seqid: String, interval: Interval<u64>) -> Result<Self> {
        validate::seqid(&seqid)?;
        Ok(Self {
            seqid,
            interval,
            ..Default::default()
        })
    }

    /// Reset the record to the mandatory fields, dropping all optional ones. The seqid buffer is
    /// reused.
    pub fn assign(&mut self, seqid: &str, interval: Interval<u64>) -> Result<&mut Self> {
        validate::seqid(seqid)?;
        self.seqid.clear();
        self.seqid.push_str(seqid);
        self.interval = interval;
        self.name = None;
        self.score = None;
        self.orientation = None;
        self.thick = None;
        self.rgb = None;
        self.blocks = None;
        Ok(self)
    }

    /// Number of BED columns covered by the populated fields.
    pub fn num_fields(&self) -> usize {
        3 + usize::from(self.name.is_some())
            + usize::from(self.score.is_some())
            + usize::from(self.orientation.is_some())
            + 2 * usize::from(self.thick.is_some())
            + usize::from(self.rgb.is_some())
            + 3 * usize::from(self.blocks.is_some())
    }

    pub fn seqid(&self) -> &str {
        &self.seqid
    }

    pub fn interval(&self) -> &Interval<u64> {
        &self.interval
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn score(&self) -> Option<f64> {
        self.score
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn thick(&self) -> Option<&Interval<u64>> {
        self.thick.as_ref()
    }

    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        self.rgb
    }

    pub fn blocks(&self) -> Option<&[Interval<u64>]> {
        self.blocks.as_deref()
    }

    pub fn set_seqid(&mut self, seqid: String) -> Result<&mut Self> {
        validate::seqid(&seqid)?;
        self.seqid = seqid;
        Ok(self)
    }

    pub fn set_interval(&mut self, interval: Interval<u64>) -> Result<&mut Self> {
        if let Some(thick) = &self.thick {
            validate::thick(&interval, thick)?;
        }
        if let Some(blocks) = &self.blocks {
            validate::blocks(&interval, blocks)?;
        }
        self.interval = interval;
        Ok(self)
    }

    pub fn set_name(&mut self, name: String) -> Result<&mut Self> {
        validate::name(&name)?;
        self.name = Some(name);
        Ok(self)
    }

    pub fn set_score(&mut self, score: f64) -> Result<&mut Self> {
        validate::score(score)?;
        self.score = Some(score);
        Ok(self)
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<&mut Self> {
        self.orientation = Some(orientation);
        Ok(self)
    }

    pub fn set_thick(&mut self, thick: Interval<u64>) -> Result<&mut Self> {
        validate::thick(&self.interval, &thick)?;
        self.thick = Some(thick);
        Ok(self)
    }

    pub fn set_rgb(&mut self, rgb: (u8, u8, u8)) -> Result<&mut Self> {
        self.rgb = Some(rgb);
        Ok(self)
    }

    pub fn set_blocks(&mut self, blocks: Vec<Interval<u64>>) -> Result<&mut Self> {
        validate::blocks(&self.interval, &blocks)?;
        self.blocks = Some(blocks);
        Ok(self)
    }

    /// Blocks in absolute genomic coordinates.
    pub fn absolute_blocks(&self) -> Option<Vec<Interval<u64>>> {
        let start = self.interval.start();
        self.blocks
            .as_ref()?
            .iter()
            .map(|block| block.shifted(start))
            .collect()
    }
}
