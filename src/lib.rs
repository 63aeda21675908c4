//! Header-only probing of image pixel dimensions.
//!
//! `metron` reads the width and height of an encoded image from the leading
//! bytes of a forward-only stream, without decoding any pixel data. Five
//! container formats are recognized by signature: BMP, GIF, PNG, JPEG/JFIF
//! and WebP (lossy VP8, lossless VP8L and extended VP8X).
//!
//! Probing consumes at most a few dozen bytes for any supported format, so
//! it is safe to run against large files or network streams before deciding
//! whether to decode them. Failures are a closed set of [`ProbeError`]
//! variants; nothing is retried or recovered internally.
//!
//! ```
//! use std::io::Cursor;
//!
//! // GIF89a logical screen of 64x48
//! let gif = [0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x40, 0x00, 0x30, 0x00];
//! let size = metron::get_dimensions(Cursor::new(&gif[..])).unwrap();
//! assert_eq!((size.width, size.height), (64, 48));
//! ```

mod bmp;
mod error;
mod gif;
mod jpeg;
mod png;
mod probe;
mod reader;
mod types;
mod webp;

pub use error::{NoDimensionsReason, ProbeError, Result};
pub use types::{ImageFormat, Size};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use reader::StreamReader;

/// Probes `stream` for image dimensions, consuming it.
///
/// The stream is dropped when this returns, success or failure; use
/// [`get_dimensions_keep_open`] to keep it alive for reuse. A structurally
/// successful decode that reports a zero width or height is rejected as
/// [`ProbeError::InvalidWidthOrHeight`].
pub fn get_dimensions<R: Read>(mut stream: R) -> Result<Size> {
    get_dimensions_keep_open(&mut stream)
}

/// Probes `stream` for image dimensions, leaving it open.
///
/// On return the stream is positioned wherever the last header read stopped,
/// so callers that want to rewind or hand the stream to a full decoder can.
pub fn get_dimensions_keep_open<R: Read>(stream: &mut R) -> Result<Size> {
    let mut reader = StreamReader::new(stream);
    let size = probe::probe_stream(&mut reader)?;
    if size.width == 0 || size.height == 0 {
        return Err(ProbeError::InvalidWidthOrHeight);
    }
    tracing::trace!(%size, "dimensions probed");
    Ok(size)
}

/// Opens `path` and probes it.
pub fn get_dimensions_from_file(path: impl AsRef<Path>) -> Result<Size> {
    get_dimensions(File::open(path.as_ref())?)
}

/// Identifies the container format from the stream's signature bytes.
///
/// Consumes exactly the bytes needed to classify; the cursor is left where
/// the matching format's header fields begin.
pub fn detect_format<R: Read>(stream: &mut R) -> Result<ImageFormat> {
    probe::sniff_format(&mut StreamReader::new(stream))
}
