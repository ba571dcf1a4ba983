//! Errors returned by [`crate::encode_texture`] and [`crate::decode_texture`].

use crate::surface::{PAddr, SurfaceError};
use core::fmt;
use thiserror::Error;

/// Which of the two buffers passed to a transcode call an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferRole {
    /// The buffer read from.
    Source,
    /// The buffer written to.
    Destination,
}

impl fmt::Display for BufferRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Destination => "destination",
        })
    }
}

/// A precondition of a transcode call does not hold. Nothing has been written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscodeError {
    /// The surface descriptor itself is unusable.
    #[error(transparent)]
    InvalidSurface(#[from] SurfaceError),

    /// The address range ends before it starts.
    #[error("Invalid address range: start {start} is past end {end}")]
    InvalidRange {
        /// First address of the range.
        start: PAddr,
        /// First address past the range.
        end: PAddr,
    },

    /// The address range is not inside the surface.
    #[error("Address range {start}..{end} is outside the surface {surface_start}..{surface_end}")]
    RangeOutOfBounds {
        /// First address of the range.
        start: PAddr,
        /// First address past the range.
        end: PAddr,
        /// First address of the surface.
        surface_start: PAddr,
        /// First address past the surface.
        surface_end: PAddr,
    },

    /// The range does not start or end on a unit the transform can work with: a whole tile for
    /// tiled decoding, a whole pixel otherwise.
    #[error(
        "Range offsets {start_offset}..{end_offset} are not aligned to {granularity} bytes"
    )]
    UnalignedRange {
        /// Start of the range, relative to the surface.
        start_offset: u32,
        /// End of the range, relative to the surface.
        end_offset: u32,
        /// Required alignment, in bytes.
        granularity: u32,
    },

    /// A buffer cannot hold the requested range in its layout.
    #[error("{buffer} buffer too small: needed {needed}, got {actual}")]
    BufferTooSmall {
        /// The buffer that is too small.
        buffer: BufferRole,
        /// The required buffer size.
        needed: usize,
        /// The actual buffer size provided.
        actual: usize,
    },
}
