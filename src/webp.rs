use std::io::Read;

use crate::error::{ProbeError, Result};
use crate::reader::StreamReader;
use crate::types::Size;

const VP8_START_CODE: [u8; 3] = [0x9D, 0x01, 0x2A];
const VP8L_SIGNATURE: u8 = 0x2F;

/// Reads the first sub-chunk of a WEBP RIFF container, with the cursor just
/// past the validated 12-byte wrapper.
///
/// Ten payload bytes cover any of the three variants. A recognized wrapper
/// with an unknown sub-chunk tag, or a variant whose validity constraint
/// fails, is invalid WebP rather than an unsupported format.
pub(crate) fn read_dimensions<R: Read>(reader: &mut StreamReader<R>) -> Result<Size> {
    let tag = reader.read_array::<4>()?;
    reader.skip(4)?; // sub-chunk size
    let payload = reader.read_array::<10>()?;

    match &tag {
        b"VP8X" => extended_dimensions(&payload),
        b"VP8 " => lossy_dimensions(&payload),
        b"VP8L" => lossless_dimensions(&payload),
        _ => Err(ProbeError::InvalidWebpFormat),
    }
}

/// VP8X: a flags byte, 3 reserved bytes, then 24-bit little-endian
/// canvas-minus-one fields.
fn extended_dimensions(payload: &[u8; 10]) -> Result<Size> {
    let flags = payload[0];
    // the top two bits and the bottom bit are reserved and must read zero
    if flags & 0xC0 != 0 || flags & 0x01 != 0 {
        return Err(ProbeError::InvalidWebpFormat);
    }
    let width = 1 + u32::from_le_bytes([payload[4], payload[5], payload[6], 0]);
    let height = 1 + u32::from_le_bytes([payload[7], payload[8], payload[9], 0]);
    Ok(Size::new(width as i32, height as i32))
}

/// VP8 key frame: a 3-byte frame tag, the start code, then two u16s whose
/// low 14 bits are the dimensions (the top bits are scale factors).
fn lossy_dimensions(payload: &[u8; 10]) -> Result<Size> {
    if payload[3..6] != VP8_START_CODE {
        return Err(ProbeError::InvalidWebpFormat);
    }
    let width = u16::from_le_bytes([payload[6], payload[7]]) & 0x3FFF;
    let height = u16::from_le_bytes([payload[8], payload[9]]) & 0x3FFF;
    Ok(Size::new(width as i32, height as i32))
}

/// VP8L: a signature byte, then 14-bit width-minus-one and height-minus-one
/// packed little-endian across the next four bytes.
fn lossless_dimensions(payload: &[u8; 10]) -> Result<Size> {
    if payload[0] != VP8L_SIGNATURE {
        return Err(ProbeError::InvalidWebpFormat);
    }
    let bits = u32::from_le_bytes([payload[1], payload[2], payload[3], payload[4]]);
    let width = 1 + (bits & 0x3FFF);
    let height = 1 + ((bits >> 14) & 0x3FFF);
    Ok(Size::new(width as i32, height as i32))
}
