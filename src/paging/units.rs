use std::io::{self, BufRead};

pub const NEWLINE: u8 = b'\n';
pub const FORM_FEED: u8 = b'\x0C';

/// Lazily reads text units from a stream: everything up to and including the
/// next `delimiter` byte, or whatever remains at end of stream.
pub struct TextUnits<R> {
    reader: R,
    delimiter: u8,
    buf: Vec<u8>,
}

impl<R: BufRead> TextUnits<R> {
    pub fn new(reader: R, delimiter: u8) -> Self {
        TextUnits {
            reader,
            delimiter,
            buf: Vec::new(),
        }
    }

    /// Read the next unit. Returns `Ok(None)` at end of stream. The returned
    /// slice is only valid until the next call.
    pub fn next_unit(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();
        if self.reader.read_until(self.delimiter, &mut self.buf)? == 0 {
            Ok(None)
        } else {
            Ok(Some(&self.buf))
        }
    }
}
