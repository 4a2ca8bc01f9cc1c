use super::validate;
use crate::compression::decode;
#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::Getters;
use eyre::Result;

/// Line prefixes that mark non-data lines in BED files.
pub const DEFAULT_COMMENT_PREFIXES: [&str; 3] = ["#", "track", "browser"];

/// Options controlling how a BED [Reader](super::Reader) decodes the file. Immutable once the
/// reader is open.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct ReaderOptions {
    /// Only the first `num_fields` columns are mapped onto records. All columns if None.
    num_fields: Option<usize>,
    /// Decoder for the file content. Detected from the file signature and extension if None.
    compression: Option<decode::Config>,
    /// Lines starting with any of these prefixes are skipped.
    comment_prefixes: Vec<String>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            num_fields: None,
            compression: None,
            comment_prefixes: DEFAULT_COMMENT_PREFIXES.map(String::from).to_vec(),
        }
    }
}

impl ReaderOptions {
    pub fn with_num_fields(mut self, num_fields: usize) -> Result<Self> {
        validate::num_fields(num_fields)?;
        self.num_fields = Some(num_fields);
        Ok(self)
    }

    pub fn with_compression(mut self, compression: decode::Config) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn with_comment_prefixes<S: Into<String>>(
        mut self,
        prefixes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.comment_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Check if the line is a comment, track or browser line. Word-like prefixes (e.g. "track")
    /// must be followed by whitespace or the end of the line, so `trackA\t1\t2` is still data.
    pub fn is_comment(&self, line: &str) -> bool {
        self.comment_prefixes.iter().any(|prefix| {
            let Some(rest) = line.strip_prefix(prefix.as_str()) else {
                return false;
            };
            !prefix.ends_with(|c: char| c.is_ascii_alphanumeric())
                || rest.is_empty()
                || rest.starts_with(|c: char| c.is_ascii_whitespace())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_comments() {
        let options = ReaderOptions::default();
        for line in [
            "#",
            "# comment",
            "#chrom\tstart\tend",
            "track name=foo",
            "browser position chr1:1-100",
            "track",
        ] {
            assert!(options.is_comment(line), "{line:?}");
        }
        for line in ["chr1\t1\t2", "trackA\t1\t2", "browsers\t1\t2", ""] {
            assert!(!options.is_comment(line), "{line:?}");
        }
    }

    #[test]
    fn test_custom_comments() {
        let options = ReaderOptions::default().with_comment_prefixes(["//"]);
        assert!(options.is_comment("// note"));
        assert!(!options.is_comment("# note"));

        let options = ReaderOptions::default().with_comment_prefixes(Vec::<String>::new());
        assert!(!options.is_comment("track name=foo"));
    }

    #[test]
    fn test_builders() -> Result<()> {
        let options = ReaderOptions::default()
            .with_num_fields(6)?
            .with_compression(decode::Config::Gzip);
        assert_eq!(options.num_fields(), &Some(6));
        assert_eq!(options.compression(), &Some(decode::Config::Gzip));

        assert!(ReaderOptions::default().with_num_fields(7).is_err());
        assert!(ReaderOptions::default().with_num_fields(13).is_err());
        Ok(())
    }
}
