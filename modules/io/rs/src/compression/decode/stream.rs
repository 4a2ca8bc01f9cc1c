use super::algorithm::Algorithm;
use super::config::Config;
use flate2::read::{DeflateDecoder, MultiGzDecoder, ZlibDecoder};
use std::io::Read;

// Decoders are plain `Read` adapters, callers wrap them in a BufReader for line access.
pub enum Stream<R: Read + Send + Sync + 'static> {
    Raw(R),
    Deflate(DeflateDecoder<R>),
    Gzip(MultiGzDecoder<R>),
    Zlib(ZlibDecoder<R>),
}

impl<R: Read + Send + Sync + 'static> Stream<R> {
    pub fn new(inner: R, config: &Config) -> Self {
        match config {
            Config::RawBytes(algo) => match algo {
                Algorithm::None => Stream::Raw(inner),
                Algorithm::Deflate => Stream::Deflate(DeflateDecoder::new(inner)),
            },
            Config::Gzip => Stream::Gzip(MultiGzDecoder::new(inner)),
            Config::Zlib => Stream::Zlib(ZlibDecoder::new(inner)),
        }
    }

    pub fn is_compressed(&self) -> bool {
        !matches!(self, Stream::Raw(_))
    }
}

impl<R: Read + Send + Sync + 'static> Read for Stream<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Stream::Raw(r) => r.read(buf),
            Stream::Deflate(r) => r.read(buf),
            Stream::Gzip(r) => r.read(buf),
            Stream::Zlib(r) => r.read(buf),
        }
    }
}
