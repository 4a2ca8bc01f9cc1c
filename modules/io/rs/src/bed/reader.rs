use super::error::Error;
use super::header::Header;
use super::options::ReaderOptions;
use super::record::Record;
use super::records::Records;
use super::parse;
use crate::compression::decode;
use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Decoding pipeline: file -> optional decompression -> line buffer.
struct Pipeline {
    lines: BufReader<decode::Stream<File>>,
    buffer: Vec<u8>,
    // Number of lines consumed so far
    line: u64,
    // Serve the buffered line again on the next read
    replay: bool,
}

impl Pipeline {
    fn open(path: &Path, config: &decode::Config) -> Result<Self, Error> {
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            lines: BufReader::new(decode::Stream::new(file, config)),
            buffer: Vec::new(),
            line: 0,
            replay: false,
        })
    }

    /// Next line without the trailing newline, together with its 1-based number.
    fn next_line(&mut self, path: &Path) -> Result<Option<(u64, &str)>, Error> {
        if self.replay {
            self.replay = false;
        } else {
            self.buffer.clear();
            let read = self
                .lines
                .read_until(b'\n', &mut self.buffer)
                .map_err(|err| self.read_error(path, err))?;
            if read == 0 {
                return Ok(None);
            }
            self.line += 1;
        }

        let mut bytes = self.buffer.as_slice();
        if let Some(stripped) = bytes.strip_suffix(b"\n") {
            bytes = stripped.strip_suffix(b"\r").unwrap_or(stripped);
        }
        let line = std::str::from_utf8(bytes).map_err(|err| Error::Parse {
            line: self.line,
            message: format!("Line is not valid UTF-8: {err}"),
        })?;
        Ok(Some((self.line, line)))
    }

    fn read_error(&self, path: &Path, source: io::Error) -> Error {
        let corrupted = matches!(
            source.kind(),
            io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput | io::ErrorKind::UnexpectedEof
        );
        if corrupted && self.lines.get_ref().is_compressed() {
            Error::Decompression {
                path: path.to_path_buf(),
                source,
            }
        } else {
            Error::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

struct State {
    // None once the reader is closed
    pipeline: Option<Pipeline>,
    // Bumped by every `iterate` call, older traversals are rejected
    epoch: u64,
    // True until a traversal consumes a line
    pristine: bool,
}

/// A BED reader.
///
/// The number of fields is inferred from the first data line and every subsequent line must have
/// exactly the same number of fields. Blank lines and lines starting with one of the
/// [comment prefixes](ReaderOptions::comment_prefixes) are skipped.
///
/// The reader owns the file handle, which is released by [Reader::close] or on drop. Records are
/// pulled through [Reader::iterate]; all traversals share a single read cursor, so the reader is
/// not `Sync` and only the most recent traversal can be advanced.
pub struct Reader {
    path: PathBuf,
    options: ReaderOptions,
    header: Header,
    decoder: decode::Config,
    // Lines before the first data line
    skip: u64,
    state: RefCell<State>,
}

fn count_fields(line: &str) -> usize {
    memchr::memchr_iter(b'\t', line.as_bytes()).count() + 1
}

// Tabs delimit (possibly empty) fields, so tab-only lines are data
fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b == b' ' || b == b'\r')
}

fn is_skipped(options: &ReaderOptions, line: &str) -> bool {
    is_blank(line) || options.is_comment(line)
}

impl Reader {
    /// Open a BED file and infer its header.
    /// The compression is detected from the file signature and extension unless set in the options.
    pub fn from_path(path: impl AsRef<Path>, options: &ReaderOptions) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let decoder = match options.compression() {
            Some(config) => *config,
            None => decode::Config::infer_from_file(&path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?,
        };

        let mut pipeline = Pipeline::open(&path, &decoder)?;
        let mut preamble = Vec::new();
        let (line, num_fields) = loop {
            match pipeline.next_line(&path)? {
                None => {
                    return Err(Error::Parse {
                        line: pipeline.line,
                        message: "No data line to infer the number of BED fields from".to_owned(),
                    });
                }
                Some((_, line)) if is_blank(line) => continue,
                Some((_, line)) if options.is_comment(line) => preamble.push(line.to_owned()),
                Some((number, line)) => break (number, count_fields(line)),
            }
        };

        let header = Header::new(num_fields, preamble).map_err(|err| Error::parse(line, err))?;
        if let Some(requested) = options.num_fields() {
            if *requested > num_fields {
                return Err(Error::InvalidOptions {
                    message: format!(
                        "Requested {requested} BED fields, but the file has only {num_fields}"
                    ),
                });
            }
        }
        pipeline.replay = true;

        log::debug!(
            "Opened BED file {} (compression: {decoder}, fields: {num_fields}, preamble lines: {})",
            path.display(),
            header.preamble().len()
        );

        Ok(Self {
            path,
            options: options.clone(),
            header,
            decoder,
            skip: line - 1,
            state: RefCell::new(State {
                pipeline: Some(pipeline),
                epoch: 0,
                pristine: true,
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn is_closed(&self) -> bool {
        self.state.borrow().pipeline.is_none()
    }

    /// Check that a line with `num_tokens` tab-separated fields matches the header.
    pub fn validate(&self, num_tokens: usize) -> Result<(), Error> {
        if num_tokens == *self.header.num_fields() {
            Ok(())
        } else {
            Err(Error::SchemaMismatch {
                expected: *self.header.num_fields(),
                observed: num_tokens,
            })
        }
    }

    /// Start a new traversal positioned at the first data line.
    ///
    /// If the stream was already advanced by an earlier traversal, the file is reopened. Earlier
    /// traversals are invalidated and fail on their next pull.
    pub fn iterate(&self) -> Result<Records<'_>, Error> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        let pipeline = state.pipeline.as_mut().ok_or(Error::InvalidState {
            reason: "BED reader is closed",
        })?;

        if !state.pristine {
            *pipeline = self.rewind()?;
            state.pristine = true;
        }
        state.epoch += 1;

        Ok(Records::new(self, state.epoch))
    }

    /// Release the file handle. Closing an already closed reader is a no-op.
    pub fn close(&self) -> Result<(), Error> {
        match self.state.borrow_mut().pipeline.take() {
            Some(pipeline) => {
                drop(pipeline);
                log::debug!("Closed BED file {}", self.path.display());
            }
            None => log::debug!("BED file {} is already closed", self.path.display()),
        }
        Ok(())
    }

    /// Fresh pipeline positioned right after the preamble.
    fn rewind(&self) -> Result<Pipeline, Error> {
        log::debug!("Reopening BED file {} for a new traversal", self.path.display());

        let mut pipeline = Pipeline::open(&self.path, &self.decoder)?;
        for _ in 0..self.skip {
            if pipeline.next_line(&self.path)?.is_none() {
                return Err(Error::Parse {
                    line: pipeline.line,
                    message: "BED file was truncated since it was opened".to_owned(),
                });
            }
        }
        Ok(pipeline)
    }

    /// Decode the next data line of the traversal `epoch` into the buffer.
    pub(super) fn read_into(&self, epoch: u64, into: &mut Record) -> Result<bool, Error> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        if state.epoch != epoch {
            return Err(Error::InvalidState {
                reason: "BED traversal was superseded by a newer one",
            });
        }
        let pipeline = state.pipeline.as_mut().ok_or(Error::InvalidState {
            reason: "BED reader is closed",
        })?;
        state.pristine = false;

        let width = self.options.num_fields().unwrap_or(*self.header.num_fields());
        loop {
            let Some((number, line)) = pipeline.next_line(&self.path)? else {
                return Ok(false);
            };
            if is_skipped(&self.options, line) {
                log::trace!("Skipping non-data BED line {number}");
                continue;
            }

            self.validate(count_fields(line))?;
            parse::record(&mut line.split('\t'), width, into)
                .map_err(|err| Error::parse(number, err))?;
            return Ok(true);
        }
    }
}
