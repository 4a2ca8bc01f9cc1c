use super::error::Error;
use super::reader::Reader;
use super::record::Record;
use crate::traits::ReadRecord;

/// A single forward traversal over the records of a [Reader].
///
/// The traversal ends at the end of the file or after the first error. It fails with
/// [Error::InvalidState] once the reader is closed or a newer traversal is started.
pub struct Records<'a> {
    reader: &'a Reader,
    epoch: u64,
    finished: bool,
}

impl<'a> Records<'a> {
    pub(super) fn new(reader: &'a Reader, epoch: u64) -> Self {
        Self {
            reader,
            epoch,
            finished: false,
        }
    }

    pub fn reader(&self) -> &'a Reader {
        self.reader
    }
}

impl ReadRecord for Records<'_> {
    type Record = Record;
    type Error = Error;

    fn read_record(&mut self, into: &mut Record) -> Result<bool, Error> {
        if self.finished {
            return Ok(false);
        }

        let result = self.reader.read_into(self.epoch, into);
        if !matches!(result, Ok(true)) {
            self.finished = true;
        }
        result
    }
}

impl Iterator for Records<'_> {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = Record::default();
        match self.read_record(&mut record) {
            Ok(true) => Some(Ok(record)),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

impl std::iter::FusedIterator for Records<'_> {}
