use std::fmt::{Display, Formatter};

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use eyre::{bail, Report};

/// Strand of an annotated feature, as written in the BED strand column.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Orientation {
    /// `+`
    Forward,
    /// `-`
    Reverse,
    /// `.`, unknown or not applicable
    #[default]
    Dual,
}

impl Orientation {
    pub fn symbol(&self) -> char {
        match self {
            Orientation::Forward => '+',
            Orientation::Reverse => '-',
            Orientation::Dual => '.',
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<&str> for Orientation {
    type Error = Report;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(Orientation::Forward),
            "-" => Ok(Orientation::Reverse),
            "." => Ok(Orientation::Dual),
            _ => bail!("Strand must be one of '+', '-' or '.', got {:?}", value),
        }
    }
}
