use super::algorithm::Algorithm;
#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Config {
    RawBytes(Algorithm), // Uncompressed or raw DEFLATE bytes as-is
    Gzip,                // GZIP container, including concatenated members and BGZF
    Zlib,                // ZLIB container
}

impl Default for Config {
    fn default() -> Self {
        Self::UNCOMPRESSED
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Config::RawBytes(Algorithm::None) => write!(f, "none"),
            Config::RawBytes(Algorithm::Deflate) => write!(f, "deflate"),
            Config::Gzip => write!(f, "gzip"),
            Config::Zlib => write!(f, "zlib"),
        }
    }
}

impl Config {
    pub const UNCOMPRESSED: Config = Config::RawBytes(Algorithm::None);

    pub fn is_compressed(&self) -> bool {
        *self != Config::UNCOMPRESSED
    }

    pub fn infer_from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| match ext {
                "gz" | "gzip" | "bgz" | "bgzf" => Config::Gzip,
                "zz" | "zlib" => Config::Zlib,
                _ => Config::UNCOMPRESSED,
            })
            .unwrap_or(Config::UNCOMPRESSED)
    }

    /// Detect the compression from the leading bytes of the file. Falls back to the file
    /// extension when the signature is not recognized.
    pub fn infer_from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();

        if let Some(kind) = infer::get_from_path(path)? {
            if kind.mime_type() == "application/gzip" {
                return Ok(Config::Gzip);
            }
        }

        // Only the common zlib levels are recognized, other 0x78 headers are valid ASCII text
        let mut magic = Vec::with_capacity(2);
        File::open(path)?.take(2).read_to_end(&mut magic)?;
        if matches!(magic.as_slice(), [0x78, 0x01 | 0x9c | 0xda]) {
            return Ok(Config::Zlib);
        }

        Ok(Config::infer_from_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::Result;
    use flate2::write::{GzEncoder, ZlibEncoder};
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_infer_from_path() {
        assert_eq!(Config::infer_from_path("a.bed.gz"), Config::Gzip);
        assert_eq!(Config::infer_from_path("a.bed.bgz"), Config::Gzip);
        assert_eq!(Config::infer_from_path("a.bed.zz"), Config::Zlib);
        assert_eq!(Config::infer_from_path("a.bed"), Config::UNCOMPRESSED);
        assert_eq!(Config::infer_from_path("bed"), Config::UNCOMPRESSED);
    }

    #[test]
    fn test_infer_from_file() -> Result<()> {
        let dir = tempfile::tempdir()?;

        // Signature wins over the extension
        let gzip = dir.path().join("regions.bed");
        let mut encoder = GzEncoder::new(File::create(&gzip)?, Compression::default());
        encoder.write_all(b"chr1\t1\t2\n")?;
        encoder.finish()?;
        assert_eq!(Config::infer_from_file(&gzip)?, Config::Gzip);

        let zlib = dir.path().join("regions.txt");
        let mut encoder = ZlibEncoder::new(File::create(&zlib)?, Compression::default());
        encoder.write_all(b"chr1\t1\t2\n")?;
        encoder.finish()?;
        assert_eq!(Config::infer_from_file(&zlib)?, Config::Zlib);

        let plain = dir.path().join("plain.bed");
        std::fs::write(&plain, "x^\t1\t2\n")?;
        assert_eq!(Config::infer_from_file(&plain)?, Config::UNCOMPRESSED);

        // Unknown signature -> extension
        let misnamed = dir.path().join("regions.bed.gz");
        std::fs::write(&misnamed, "chr1\t1\t2\n")?;
        assert_eq!(Config::infer_from_file(&misnamed)?, Config::Gzip);

        let empty = dir.path().join("empty.bed");
        std::fs::write(&empty, "")?;
        assert_eq!(Config::infer_from_file(&empty)?, Config::UNCOMPRESSED);

        assert!(Config::infer_from_file(dir.path().join("missing.bed")).is_err());
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(Config::UNCOMPRESSED.to_string(), "none");
        assert_eq!(Config::RawBytes(Algorithm::Deflate).to_string(), "deflate");
        assert_eq!(Config::Gzip.to_string(), "gzip");
        assert!(Config::Zlib.is_compressed());
        assert!(!Config::default().is_compressed());
    }
}
