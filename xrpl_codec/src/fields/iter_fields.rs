use super::read_field;
use crate::binary::BinaryReader;
use crate::value::SerializedValue;
use xrpl_types::{Field, Result};

/// An iterator that reads framed fields back to back until the buffer is exhausted.
///
/// The first error is yielded once and ends the iteration.
pub struct FieldIter<'a> {
    r: BinaryReader<'a>,
    failed: bool,
}

impl<'a> From<&'a [u8]> for FieldIter<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self {
            r: BinaryReader::new(buf),
            failed: false,
        }
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = Result<(Field, SerializedValue)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.r.at_end() {
            return None;
        }
        let res = read_field(&mut self.r);
        self.failed = res.is_err();
        Some(res)
    }
}
