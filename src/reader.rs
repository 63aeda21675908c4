use std::io::{ErrorKind, Read};

use crate::error::{NoDimensionsReason, ProbeError, Result};

/// Forward-only reader over a byte stream.
///
/// Every call consumes exactly the requested number of bytes; there is no
/// seek-back and no peek, so each decoder's byte consumption is the format's
/// on-disk layout and nothing else. Endian helpers are named by the byte
/// order they actually produce.
///
/// A stream that ends in the middle of a read surfaces as
/// [`ProbeError::CouldNotDetermineDimensions`] reason 4, uniformly across
/// every format; other I/O failures propagate as [`ProbeError::Io`].
pub struct StreamReader<R> {
    inner: R,
}

impl<R: Read> StreamReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Consumes and discards `count` bytes.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        let mut scratch = [0u8; 64];
        let mut remaining = count;
        while remaining > 0 {
            let take = remaining.min(scratch.len());
            self.fill(&mut scratch[..take])?;
            remaining -= take;
        }
        Ok(())
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u16_be(&mut self) -> Result<u16> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    pub fn read_u32_be(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buf).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                ProbeError::CouldNotDetermineDimensions(NoDimensionsReason::TruncatedInput)
            } else {
                ProbeError::Io(e)
            }
        })
    }
}
