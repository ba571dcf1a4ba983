//! Surface descriptors.

use core::fmt;
use pica_texture_codec::PixelFormat;
use pica_texture_common::morton::TILE_EDGE;
use thiserror::Error;

/// A physical address in guest memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PAddr(pub u32);

impl fmt::Display for PAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// A texture or framebuffer surface in guest memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceParams {
    /// Address of the first byte of the surface.
    pub addr: PAddr,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Guest pixel format.
    pub pixel_format: PixelFormat,
    /// `true` if the surface is stored as 8x8 Morton tiles, `false` if it is stored row by row.
    pub is_tiled: bool,
}

/// Reasons a [`SurfaceParams`] cannot be transcoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// Width or height is zero.
    #[error("Surface has no pixels: {width}x{height}")]
    Empty {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },

    /// A tiled surface whose size is not a whole number of tiles.
    #[error("Tiled surface size {width}x{height} is not a multiple of 8")]
    PartialTiles {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },

    /// The surface's byte sizes do not fit the host's `usize`.
    #[error("Surface size {width}x{height} is too large to address")]
    TooLarge {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },

    /// The surface's end address does not fit in 32 bits.
    #[error("Surface at {addr} of {size} bytes overflows the address space")]
    AddressOverflow {
        /// Base address.
        addr: PAddr,
        /// Size in bytes.
        size: usize,
    },
}

impl SurfaceParams {
    /// Creates a surface descriptor.
    pub const fn new(
        addr: PAddr,
        width: u32,
        height: u32,
        pixel_format: PixelFormat,
        is_tiled: bool,
    ) -> Self {
        Self {
            addr,
            width,
            height,
            pixel_format,
            is_tiled,
        }
    }

    /// Number of pixels in the surface.
    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size of the surface in guest memory, in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        (self.pixel_count() as u64 * self.pixel_format.bits_per_pixel() as u64 / 8) as usize
    }

    /// The first address past the end of the surface.
    ///
    /// Wraps if the surface does not fit the address space; [`SurfaceParams::validate`] rejects
    /// such surfaces.
    #[inline]
    pub const fn end(&self) -> PAddr {
        PAddr(self.addr.0.wrapping_add(self.size() as u32))
    }

    /// Size of the whole surface in a host (linear) buffer, in bytes.
    #[inline]
    pub const fn linear_size(&self, convert: bool) -> usize {
        self.pixel_count() * self.pixel_format.host_bytes_per_pixel(convert)
    }

    /// Checks that the surface describes something that can be transcoded.
    ///
    /// A surface that passes can use [`size`](Self::size), [`end`](Self::end) and
    /// [`linear_size`](Self::linear_size) without overflow.
    pub fn validate(&self) -> Result<(), SurfaceError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(SurfaceError::Empty { width, height });
        }

        let tile = TILE_EDGE as u32;
        if self.is_tiled && (width % tile != 0 || height % tile != 0) {
            return Err(SurfaceError::PartialTiles { width, height });
        }

        let pixels = width as u64 * height as u64;
        let guest_bits = pixels.checked_mul(self.pixel_format.bits_per_pixel() as u64);
        let host_bytes = pixels.checked_mul(4);
        let (Some(guest_bits), Some(host_bytes)) = (guest_bits, host_bytes) else {
            return Err(SurfaceError::TooLarge { width, height });
        };
        let (Ok(size), Ok(_)) = (usize::try_from(guest_bits / 8), usize::try_from(host_bytes))
        else {
            return Err(SurfaceError::TooLarge { width, height });
        };

        if self.addr.0 as u64 + size as u64 > u32::MAX as u64 {
            return Err(SurfaceError::AddressOverflow {
                addr: self.addr,
                size,
            });
        }

        Ok(())
    }
}
