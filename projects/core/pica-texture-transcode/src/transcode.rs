//! The texture encode/decode engine.
//!
//! Both entry points follow the same steps:
//!
//! 1. Pick the transform from the codec table by pixel format, `convert`, tiling and direction.
//!    A missing transform is a programming error: it is logged and the call panics.
//! 2. Validate the surface, the address range and the buffer sizes. Violations are returned as
//!    [`TranscodeError`] before any byte is written.
//! 3. Run the transform. Tiled transforms get the range as offsets from the surface base;
//!    untiled pure copies go through the vectorised copy.
//!
//! # Buffer layouts
//!
//! The guest buffer holds exactly the bytes of `[start_addr, end_addr)`.
//!
//! For tiled surfaces the host buffer holds the whole surface, bottom-up, in host layout; only
//! the pixels covered by the range are read or written. For untiled surfaces the host buffer
//! holds just the pixels of the range.

use crate::error::{BufferRole, TranscodeError};
use crate::fast_copy::copy_with_fast_path;
use crate::surface::{PAddr, SurfaceParams};
use core::fmt;
use likely_stable::unlikely;
use pica_texture_codec::{codec_table, FormatCodecs, LinearTransform, MortonFn, PixelFormat};

/// Which way a transcode call moves pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Host to guest.
    Encode,
    /// Guest to host.
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Encode => "encode",
            Self::Decode => "decode",
        })
    }
}

/// Encodes host pixels into the guest surface range `[start_addr, end_addr)`.
///
/// # Parameters
///
/// - `surface`: The surface being written
/// - `start_addr`, `end_addr`: The guest address range to write
/// - `source`: Host pixels (see the [module docs](self) for the expected layout)
/// - `dest`: Guest bytes of the range
/// - `convert`: Convert from host RGBA8 rather than copying the guest layout
///
/// # Errors
///
/// Returns a [`TranscodeError`] if the surface is invalid, the range is not inside it or not
/// aligned as the transform requires, or either buffer is too small. `dest` is untouched.
///
/// # Panics
///
/// If no encoder exists for the surface's format with this tiling and `convert` setting.
pub fn encode_texture(
    surface: &SurfaceParams,
    start_addr: PAddr,
    end_addr: PAddr,
    source: &[u8],
    dest: &mut [u8],
    convert: bool,
) -> Result<(), TranscodeError> {
    let codecs = codec_table(convert).get(surface.pixel_format);
    transcode(
        codecs,
        Direction::Encode,
        surface,
        start_addr,
        end_addr,
        source,
        dest,
        convert,
    )
}

/// Decodes the guest surface range `[start_addr, end_addr)` into host pixels.
///
/// # Parameters
///
/// - `surface`: The surface being read
/// - `start_addr`, `end_addr`: The guest address range to read
/// - `source`: Guest bytes of the range
/// - `dest`: Host pixels (see the [module docs](self) for the expected layout)
/// - `convert`: Convert to host RGBA8 rather than copying the guest layout
///
/// # Errors
///
/// Returns a [`TranscodeError`] if the surface is invalid, the range is not inside it or not
/// aligned as the transform requires, or either buffer is too small. `dest` is untouched.
///
/// # Panics
///
/// If no decoder exists for the surface's format with this tiling and `convert` setting.
pub fn decode_texture(
    surface: &SurfaceParams,
    start_addr: PAddr,
    end_addr: PAddr,
    source: &[u8],
    dest: &mut [u8],
    convert: bool,
) -> Result<(), TranscodeError> {
    let codecs = codec_table(convert).get(surface.pixel_format);
    transcode(
        codecs,
        Direction::Decode,
        surface,
        start_addr,
        end_addr,
        source,
        dest,
        convert,
    )
}

/// A transform picked from a [`FormatCodecs`] entry.
#[derive(Clone, Copy)]
enum Transform {
    Linear(LinearTransform),
    Morton(MortonFn),
}

/// Byte sizes one call reads and writes.
struct Extent {
    start_offset: u32,
    end_offset: u32,
    guest_len: usize,
    host_len: usize,
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn transcode(
    codecs: &FormatCodecs,
    direction: Direction,
    surface: &SurfaceParams,
    start_addr: PAddr,
    end_addr: PAddr,
    source: &[u8],
    dest: &mut [u8],
    convert: bool,
) -> Result<(), TranscodeError> {
    let tiled = surface.is_tiled;
    let transform = match (tiled, direction) {
        (true, Direction::Encode) => codecs.swizzle.map(Transform::Morton),
        (true, Direction::Decode) => codecs.unswizzle.map(Transform::Morton),
        (false, Direction::Encode) => codecs.linear_encode.map(Transform::Linear),
        (false, Direction::Decode) => codecs.linear_decode.map(Transform::Linear),
    };
    let Some(transform) = transform else {
        unimplemented_transform(surface.pixel_format, direction, tiled, convert);
    };

    let extent = validate(surface, direction, start_addr, end_addr, convert)?;
    let (source_len, dest_len) = match direction {
        Direction::Encode => (extent.host_len, extent.guest_len),
        Direction::Decode => (extent.guest_len, extent.host_len),
    };
    check_len(BufferRole::Source, source_len, source.len())?;
    check_len(BufferRole::Destination, dest_len, dest.len())?;
    let source = &source[..source_len];
    let dest = &mut dest[..dest_len];

    match transform {
        Transform::Morton(function) => function(
            surface.width,
            surface.height,
            extent.start_offset,
            extent.end_offset,
            source,
            dest,
        ),
        Transform::Linear(LinearTransform::Copy(function)) => {
            copy_with_fast_path(source, dest, function)
        }
        Transform::Linear(LinearTransform::Map(function)) => function(source, dest),
    }

    Ok(())
}

fn validate(
    surface: &SurfaceParams,
    direction: Direction,
    start_addr: PAddr,
    end_addr: PAddr,
    convert: bool,
) -> Result<Extent, TranscodeError> {
    surface.validate()?;

    if unlikely(start_addr > end_addr) {
        return Err(TranscodeError::InvalidRange {
            start: start_addr,
            end: end_addr,
        });
    }

    let surface_end = surface.end();
    if unlikely(start_addr < surface.addr || end_addr > surface_end) {
        return Err(TranscodeError::RangeOutOfBounds {
            start: start_addr,
            end: end_addr,
            surface_start: surface.addr,
            surface_end,
        });
    }

    let format = surface.pixel_format;
    let start_offset = start_addr.0 - surface.addr.0;
    let end_offset = end_addr.0 - surface.addr.0;
    let pixel_bytes = format.guest_bytes_per_pixel().unwrap_or(format.tile_size());
    let granularity = match (surface.is_tiled, direction) {
        (true, Direction::Decode) => format.tile_size(),
        _ => pixel_bytes,
    } as u32;
    if unlikely(start_offset % granularity != 0 || end_offset % granularity != 0) {
        return Err(TranscodeError::UnalignedRange {
            start_offset,
            end_offset,
            granularity,
        });
    }

    let guest_len = (end_offset - start_offset) as usize;
    let host_len = if surface.is_tiled {
        surface.linear_size(convert)
    } else {
        guest_len / pixel_bytes * format.host_bytes_per_pixel(convert)
    };

    Ok(Extent {
        start_offset,
        end_offset,
        guest_len,
        host_len,
    })
}

#[inline(always)]
fn check_len(buffer: BufferRole, needed: usize, actual: usize) -> Result<(), TranscodeError> {
    if unlikely(actual < needed) {
        return Err(TranscodeError::BufferTooSmall {
            buffer,
            needed,
            actual,
        });
    }
    Ok(())
}

#[cold]
#[inline(never)]
fn unimplemented_transform(
    format: PixelFormat,
    direction: Direction,
    tiled: bool,
    convert: bool,
) -> ! {
    tracing::error!(
        pixel_format = format.id(),
        %direction,
        tiled,
        convert,
        "Unimplemented texture {direction} function for pixel format = {}, tiled = {tiled}",
        format.id()
    );
    panic!(
        "unimplemented texture {direction} function for pixel format {} (tiled = {tiled}, convert = {convert})",
        format.id()
    );
}
