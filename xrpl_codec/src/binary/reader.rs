use xrpl_types::{CodecError, Result};

/// A forward-only cursor over an immutable byte buffer.
///
/// Every read is bounds-checked. Running out of bytes is always
/// [`CodecError::EndOfInput`]; codecs that need a terminator carry it in-band.
#[derive(Clone, Debug)]
pub struct BinaryReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> From<&'a [u8]> for BinaryReader<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }
}

impl<'a> BinaryReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::from(buf)
    }

    pub fn read_one(&mut self) -> Result<u8> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    pub fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CodecError::EndOfInput {
                wanted: n,
                remaining,
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut arr = [0u8; N];
        arr.copy_from_slice(self.read(N)?);
        Ok(arr)
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Count of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}
