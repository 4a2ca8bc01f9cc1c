use derive_more::{Display, Error};
use std::io;
use std::path::PathBuf;

/// Errors reported by the BED [Reader](super::Reader) and its [Records](super::Records).
#[derive(Debug, Display, Error)]
pub enum Error {
    /// The file can't be opened or read.
    #[display("Failed to read BED file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The file is declared or detected as compressed, but the content can't be decoded.
    #[display("Failed to decompress BED file {}: {source}", path.display())]
    Decompression { path: PathBuf, source: io::Error },

    /// The content is not a valid BED file. `line` is 1-based; when no data line is found, it's
    /// the number of lines scanned.
    #[display("Invalid BED content at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// The number of tab-separated fields in a line differs from the header.
    #[display("BED record has {observed} fields, but the file header declares {expected}")]
    SchemaMismatch { expected: usize, observed: usize },

    /// The reader was closed or the traversal was superseded by a newer one.
    #[display("{reason}")]
    InvalidState { reason: &'static str },

    /// The reader options are incompatible with the file content.
    #[display("Invalid BED reader options: {message}")]
    InvalidOptions { message: String },
}

impl Error {
    pub(crate) fn parse(line: u64, report: eyre::Report) -> Self {
        Error::Parse {
            line,
            message: format!("{report:#}"),
        }
    }
}
