use thiserror::Error;

/// Why dimension data was never located before the probe gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDimensionsReason {
    /// Compressed scan data began before any frame header was seen.
    ScanDataReached,
    /// The end-of-image marker arrived before any frame header.
    EndOfImageReached,
    /// The stream stopped yielding marker bytes.
    MarkersExhausted,
    /// The input ended in the middle of a read.
    TruncatedInput,
}

impl NoDimensionsReason {
    /// Stable numeric code for this reason.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::ScanDataReached => 1,
            Self::EndOfImageReached => 2,
            Self::MarkersExhausted => 3,
            Self::TruncatedInput => 4,
        }
    }
}

impl std::fmt::Display for NoDimensionsReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let detail = match self {
            Self::ScanDataReached => "scan data reached before a frame header",
            Self::EndOfImageReached => "end of image reached before a frame header",
            Self::MarkersExhausted => "ran out of markers",
            Self::TruncatedInput => "input ended unexpectedly",
        };
        write!(f, "reason {}: {}", self.code(), detail)
    }
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("leading bytes match no supported image signature")]
    UnsupportedFormat,

    #[error("WEBP container holds an unrecognized or invalid bitstream")]
    InvalidWebpFormat,

    #[error("JPEG segment declares a non-positive payload length")]
    MalformedImage,

    #[error("unsupported JPEG data precision: {0}")]
    UnexpectedDataPrecision(u8),

    #[error("could not determine dimensions ({0})")]
    CouldNotDetermineDimensions(NoDimensionsReason),

    #[error("decoded width or height is zero")]
    InvalidWidthOrHeight,
}

pub type Result<T> = std::result::Result<T, ProbeError>;
