use std::io::Read;

use crate::error::Result;
use crate::reader::StreamReader;
use crate::types::Size;

/// Reads width and height from a BITMAPINFOHEADER, with the cursor just past
/// the "BM" signature.
///
/// The height keeps its stored sign (bottom-up rows positive, top-down
/// negative). OS/2 core headers and compressed variants are not recognized.
pub(crate) fn read_dimensions<R: Read>(reader: &mut StreamReader<R>) -> Result<Size> {
    reader.skip(4)?; // file size
    reader.skip(4)?; // reserved
    reader.skip(4)?; // offset to pixel data
    reader.skip(4)?; // info header size
    let width = reader.read_i32_le()?;
    let height = reader.read_i32_le()?;
    Ok(Size::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn header_after_signature(width: i32, height: i32) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&90u32.to_le_bytes()); // file size
        bytes.extend_from_slice(&0u32.to_le_bytes()); // reserved
        bytes.extend_from_slice(&54u32.to_le_bytes()); // pixel data offset
        bytes.extend_from_slice(&40u32.to_le_bytes()); // BITMAPINFOHEADER size
        bytes.extend_from_slice(&width.to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        bytes
    }

    #[test]
    fn reads_header_fields() {
        let bytes = header_after_signature(499, 501);
        let mut reader = StreamReader::new(Cursor::new(bytes));
        assert_eq!(read_dimensions(&mut reader).unwrap(), Size::new(499, 501));
    }

    #[test]
    fn top_down_height_passes_through() {
        let bytes = header_after_signature(640, -480);
        let mut reader = StreamReader::new(Cursor::new(bytes));
        assert_eq!(read_dimensions(&mut reader).unwrap(), Size::new(640, -480));
    }
}
