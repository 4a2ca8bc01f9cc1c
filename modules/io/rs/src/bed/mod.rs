// Format specification: https://samtools.github.io/hts-specs/BEDv1.pdf

// Fields:
// 1. seqid: [^\s]{1,255}
// 2. start: u64
// 3. end: u64
// 4. name: [\x20-\x7e]{1,255}
// 5. score: finite f64
// 6. orientation: [+|-|.]
// 7. thickStart: u64
// 8. thickEnd: u64
// 9. itemRgb: ([0, 255], [0, 255], [0, 255]) | 0
// 10. blockCount: u64 >= 1
// 11. blockSizes: vec[u64]
// 12. blockStarts: vec[u64]

// Valid widths are 3, 4, 5, 6, 8, 9 and 12
// start <= end, thickStart..thickEnd is within start..end
// All blockSizes must be > 0
// All blockStarts must be in ascending order, in coordinates relative to chromStart
// For all i, blockStarts[i] + blockSizes[i] must be less than or equal to blockStarts[i + 1]
// blockStarts[0] must be equal to 0
// start + blockStarts[blockCount - 1] + blockSizes[blockCount - 1] must be equal to end

mod error;
mod header;
mod options;
pub mod parse;
mod reader;
mod record;
mod records;
pub mod validate;

pub use error::Error;
pub use header::Header;
pub use options::{ReaderOptions, DEFAULT_COMMENT_PREFIXES};
pub use reader::Reader;
pub use record::Record;
pub use records::Records;
