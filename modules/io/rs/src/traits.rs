/// A trait for reading structured records into caller-owned buffers. Modeled after the `Read`
/// trait in the std: buffers are reused between calls to avoid per-record allocations.
pub trait ReadRecord {
    /// The type of the records that will be read.
    type Record;

    /// The error reported when the input can't be read or decoded.
    type Error;

    /// Read a single record from the input into the provided buffer.
    /// Returns `true` if a record was read and `false` if the end of the input was reached.
    ///
    /// On error, the buffer is left in an unspecified state but can be reused for the next read.
    fn read_record(&mut self, into: &mut Self::Record) -> Result<bool, Self::Error>;

    /// Fill a buffer with records from the input. Returns the number of records read, which could
    /// be less than the length of the buffer or equals 0 if the end of the input is reached.
    fn read_records(&mut self, into: &mut [Self::Record]) -> Result<usize, Self::Error> {
        let mut total = 0;
        for record in into.iter_mut() {
            if !self.read_record(record)? {
                break;
            }
            total += 1;
        }
        Ok(total)
    }

    /// Read all remaining records, reusing the existing items of the vector before appending new
    /// ones. The vector is truncated to the number of records read.
    fn read_to_end(&mut self, into: &mut Vec<Self::Record>) -> Result<usize, Self::Error>
    where
        Self::Record: Default,
    {
        let mut total = self.read_records(into)?;
        if total < into.len() {
            into.truncate(total);
            return Ok(total);
        }

        loop {
            let mut record = Self::Record::default();
            if !self.read_record(&mut record)? {
                return Ok(total);
            }
            into.push(record);
            total += 1;
        }
    }
}
