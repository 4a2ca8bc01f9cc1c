use super::validate;
#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::Getters;
use eyre::Result;

/// Schema of a BED file, inferred once when the file is opened.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Header {
    /// Number of tab-separated fields in every data line.
    num_fields: usize,
    /// Comment, track and browser lines preceding the first data line.
    preamble: Vec<String>,
}

impl Header {
    pub fn new(num_fields: usize, preamble: Vec<String>) -> Result<Self> {
        validate::num_fields(num_fields)?;
        Ok(Self {
            num_fields,
            preamble,
        })
    }
}
