use std::io::Read;

use crate::error::{NoDimensionsReason, ProbeError, Result};
use crate::reader::StreamReader;
use crate::types::Size;

pub const SOS: u8 = 0xDA;
pub const EOI: u8 = 0xD9;
pub const DHT: u8 = 0xC4;
pub const DAC: u8 = 0xCC;

/// Start-of-frame marker family. DHT (0xC4) and DAC (0xCC) share the numeric
/// range but define entropy tables, not frame headers.
#[inline]
pub const fn is_sof_marker(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xCF) && marker != DHT && marker != DAC
}

/// Walks marker segments until a frame header yields dimensions, with the
/// cursor just past the SOI marker.
///
/// Each segment is a `0xFF` prefix, a marker code, a big-endian length that
/// counts its own two bytes, and a payload. The walk stops at the first SOF
/// marker; SOS and EOI end it before any length read, since entropy-coded
/// data follows SOS and EOI carries no length field at all.
pub(crate) fn read_dimensions<R: Read>(reader: &mut StreamReader<R>) -> Result<Size> {
    loop {
        let prefix = reader.read_u8()?;
        if prefix != 0xFF {
            return Err(ProbeError::CouldNotDetermineDimensions(
                NoDimensionsReason::MarkersExhausted,
            ));
        }
        let marker = reader.read_u8()?;

        if marker == SOS {
            return Err(ProbeError::CouldNotDetermineDimensions(
                NoDimensionsReason::ScanDataReached,
            ));
        }
        if marker == EOI {
            return Err(ProbeError::CouldNotDetermineDimensions(
                NoDimensionsReason::EndOfImageReached,
            ));
        }

        let length = reader.read_u16_be()?;
        if length <= 2 {
            return Err(ProbeError::MalformedImage);
        }

        if is_sof_marker(marker) {
            let precision = reader.read_u8()?;
            if !matches!(precision, 8 | 12 | 16) {
                return Err(ProbeError::UnexpectedDataPrecision(precision));
            }
            // frame header stores height first
            let height = reader.read_u16_be()?;
            let width = reader.read_u16_be()?;
            return Ok(Size::new(width as i32, height as i32));
        }

        reader.skip(length as usize - 2)?;
    }
}
