use std::io::Read;

use crate::error::{ProbeError, Result};
use crate::reader::StreamReader;
use crate::types::{ImageFormat, Size};
use crate::{bmp, gif, jpeg, png, webp};

/// Classifies the container format from the smallest signature prefix that
/// disambiguates it, consuming exactly those bytes.
///
/// The cursor is left where the matching decoder expects to start. A prefix
/// whose first two bytes promise a format but whose continuation bytes do
/// not deliver it is unsupported; there is no fallback scan.
pub(crate) fn sniff_format<R: Read>(reader: &mut StreamReader<R>) -> Result<ImageFormat> {
    let byte1 = reader.read_u8()?;
    let byte2 = reader.read_u8()?;

    match [byte1, byte2] {
        [0xFF, 0xD8] => Ok(ImageFormat::Jpeg),
        [0x89, 0x50] => {
            let rest = reader.read_array::<6>()?;
            if rest == [0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
                Ok(ImageFormat::Png)
            } else {
                Err(ProbeError::UnsupportedFormat)
            }
        }
        [0x47, 0x49] => {
            let rest = reader.read_array::<4>()?;
            if rest[0] == 0x46 && rest[1] == 0x38 && (rest[2] == 0x37 || rest[2] == 0x39) && rest[3] == 0x61 {
                Ok(ImageFormat::Gif)
            } else {
                Err(ProbeError::UnsupportedFormat)
            }
        }
        [0x52, 0x49] => {
            // "RI" + "FF", a chunk size (discarded), then "WEBP"
            let rest = reader.read_array::<10>()?;
            if rest[0] == 0x46 && rest[1] == 0x46 && rest[6..10] == *b"WEBP" {
                Ok(ImageFormat::WebP)
            } else {
                Err(ProbeError::UnsupportedFormat)
            }
        }
        [0x42, 0x4D] => Ok(ImageFormat::Bmp),
        _ => Err(ProbeError::UnsupportedFormat),
    }
}

pub(crate) fn probe_stream<R: Read>(reader: &mut StreamReader<R>) -> Result<Size> {
    let format = sniff_format(reader)?;
    tracing::trace!(format = format.name(), "image signature recognized");

    match format {
        ImageFormat::Bmp => bmp::read_dimensions(reader),
        ImageFormat::Gif => gif::read_dimensions(reader),
        ImageFormat::Png => png::read_dimensions(reader),
        ImageFormat::Jpeg => jpeg::read_dimensions(reader),
        ImageFormat::WebP => webp::read_dimensions(reader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sniff(bytes: &[u8]) -> Result<ImageFormat> {
        sniff_format(&mut StreamReader::new(Cursor::new(bytes)))
    }

    #[test]
    fn recognizes_each_signature() {
        assert_eq!(sniff(&[0xFF, 0xD8]).unwrap(), ImageFormat::Jpeg);
        assert_eq!(sniff(&[0x42, 0x4D]).unwrap(), ImageFormat::Bmp);
        assert_eq!(sniff(b"GIF89a").unwrap(), ImageFormat::Gif);
        assert_eq!(sniff(b"GIF87a").unwrap(), ImageFormat::Gif);
        assert_eq!(
            sniff(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(sniff(b"RIFF\x12\x34\x56\x78WEBP").unwrap(), ImageFormat::WebP);
    }

    #[test]
    fn rejects_unknown_leading_bytes() {
        assert!(matches!(
            sniff(&[0x00, 0x11, 0x22, 0x33]),
            Err(ProbeError::UnsupportedFormat)
        ));
    }

    #[test]
    fn rejects_broken_png_continuation() {
        // right first two bytes, wrong remainder, no fallback
        assert!(matches!(
            sniff(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x00]),
            Err(ProbeError::UnsupportedFormat)
        ));
    }

    #[test]
    fn rejects_gif_with_unknown_version() {
        assert!(matches!(
            sniff(b"GIF88a"),
            Err(ProbeError::UnsupportedFormat)
        ));
    }

    #[test]
    fn rejects_riff_without_webp_tag() {
        assert!(matches!(
            sniff(b"RIFF\x00\x00\x00\x00WAVE"),
            Err(ProbeError::UnsupportedFormat)
        ));
    }
}
