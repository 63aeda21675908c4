use std::io::Read;

use crate::error::Result;
use crate::reader::StreamReader;
use crate::types::Size;

/// Reads the IHDR dimensions, with the cursor just past the 8-byte file
/// signature. All PNG integers are big-endian on disk.
pub(crate) fn read_dimensions<R: Read>(reader: &mut StreamReader<R>) -> Result<Size> {
    reader.skip(8)?; // IHDR chunk length + "IHDR" tag
    let width = reader.read_u32_be()?;
    let height = reader.read_u32_be()?;
    Ok(Size::new(width as i32, height as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_ihdr_dimensions() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&1920u32.to_be_bytes());
        bytes.extend_from_slice(&1080u32.to_be_bytes());
        let mut reader = StreamReader::new(Cursor::new(bytes));
        assert_eq!(read_dimensions(&mut reader).unwrap(), Size::new(1920, 1080));
    }
}
