use std::io::Read;

use crate::error::Result;
use crate::reader::StreamReader;
use crate::types::Size;

/// Reads the Logical Screen Descriptor dimensions, with the cursor just past
/// the validated signature and version. The descriptor's flag, background
/// and aspect bytes are not consumed.
pub(crate) fn read_dimensions<R: Read>(reader: &mut StreamReader<R>) -> Result<Size> {
    let width = reader.read_u16_le()?;
    let height = reader.read_u16_le()?;
    Ok(Size::new(width as i32, height as i32))
}
