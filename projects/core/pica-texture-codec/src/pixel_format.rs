//! Texture pixel formats understood by the PICA GPU.

use derive_enum_all_values::AllValues;
use thiserror::Error;

/// Number of slots in a per-format table; one past the highest hardware format id.
pub const PIXEL_FORMAT_COUNT: usize = 18;

/// A texture or framebuffer pixel format, identified by its hardware id.
///
/// Id 15 is not used by the hardware; tables indexed by [`PixelFormat::id`] keep an empty slot
/// there.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum PixelFormat {
    /// 32-bit colour, stored as `[a, b, g, r]`.
    Rgba8 = 0,
    /// 24-bit colour, stored as `[b, g, r]`.
    Rgb8 = 1,
    /// 16-bit colour, 5 bits per colour channel and a 1-bit alpha in the least significant bit.
    Rgb5a1 = 2,
    /// 16-bit colour, 5/6/5 bits for red/green/blue.
    Rgb565 = 3,
    /// 16-bit colour, 4 bits per channel.
    Rgba4 = 4,
    /// 8-bit intensity plus 8-bit alpha, stored as `[a, i]`.
    Ia8 = 5,
    /// 8-bit red and green, stored as `[g, r]`.
    Rg8 = 6,
    /// 8-bit intensity.
    I8 = 7,
    /// 8-bit alpha.
    A8 = 8,
    /// 4-bit intensity (high nibble) plus 4-bit alpha (low nibble).
    Ia4 = 9,
    /// 4-bit intensity, two pixels per byte.
    I4 = 10,
    /// 4-bit alpha, two pixels per byte.
    A4 = 11,
    /// ETC1 compressed colour, 4 bits per pixel.
    Etc1 = 12,
    /// ETC1 compressed colour with explicit 4-bit alpha, 8 bits per pixel.
    Etc1a4 = 13,
    /// 16-bit depth.
    D16 = 14,
    /// 24-bit depth.
    D24 = 16,
    /// 24-bit depth with 8-bit stencil, stored as `[d0, d1, d2, stencil]`.
    D24s8 = 17,
}

/// Returned when a hardware id does not name a [`PixelFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown pixel format id: {0}")]
pub struct UnknownPixelFormat(pub u8);

impl PixelFormat {
    /// The hardware id of this format; also its index into per-format tables.
    #[inline(always)]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a format by hardware id.
    pub const fn from_id(id: u8) -> Option<Self> {
        Some(match id {
            0 => Self::Rgba8,
            1 => Self::Rgb8,
            2 => Self::Rgb5a1,
            3 => Self::Rgb565,
            4 => Self::Rgba4,
            5 => Self::Ia8,
            6 => Self::Rg8,
            7 => Self::I8,
            8 => Self::A8,
            9 => Self::Ia4,
            10 => Self::I4,
            11 => Self::A4,
            12 => Self::Etc1,
            13 => Self::Etc1a4,
            14 => Self::D16,
            16 => Self::D24,
            17 => Self::D24s8,
            _ => return None,
        })
    }

    /// Bits per pixel in guest memory.
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            Self::Rgba8 | Self::D24s8 => 32,
            Self::Rgb8 | Self::D24 => 24,
            Self::Rgb5a1 | Self::Rgb565 | Self::Rgba4 | Self::Ia8 | Self::Rg8 | Self::D16 => 16,
            Self::I8 | Self::A8 | Self::Ia4 | Self::Etc1a4 => 8,
            Self::I4 | Self::A4 | Self::Etc1 => 4,
        }
    }

    /// Size of one 8x8 tile of this format in guest memory, in bytes.
    #[inline]
    pub const fn tile_size(self) -> usize {
        self.bits_per_pixel() as usize * 64 / 8
    }

    /// Returns `true` for block-compressed formats.
    #[inline]
    pub const fn is_compressed(self) -> bool {
        matches!(self, Self::Etc1 | Self::Etc1a4)
    }

    /// Returns `true` for formats whose pixels are not whole bytes in guest memory.
    ///
    /// These formats have no meaningful plain host layout; they are only ever decoded to RGBA8.
    #[inline]
    pub const fn is_sub_byte(self) -> bool {
        matches!(self, Self::I4 | Self::A4 | Self::Etc1 | Self::Etc1a4)
    }

    /// Returns `true` for depth (and depth-stencil) formats.
    #[inline]
    pub const fn is_depth(self) -> bool {
        matches!(self, Self::D16 | Self::D24 | Self::D24s8)
    }

    /// Bytes per pixel in guest memory, for formats where pixels are whole bytes.
    #[inline]
    pub const fn guest_bytes_per_pixel(self) -> Option<usize> {
        if self.is_sub_byte() {
            None
        } else {
            Some(self.bits_per_pixel() as usize / 8)
        }
    }

    /// Bytes per pixel in host (linear) buffers.
    ///
    /// Converting transforms always produce RGBA8; so do the sub-byte formats, which have no
    /// plain host layout.
    #[inline]
    pub const fn host_bytes_per_pixel(self, convert: bool) -> usize {
        if convert || self.is_sub_byte() {
            4
        } else {
            self.bits_per_pixel() as usize / 8
        }
    }
}

impl TryFrom<u8> for PixelFormat {
    type Error = UnknownPixelFormat;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(UnknownPixelFormat(id))
    }
}

impl From<PixelFormat> for u8 {
    fn from(format: PixelFormat) -> Self {
        format.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn ids_roundtrip() {
        for &format in PixelFormat::all_values() {
            assert_eq!(PixelFormat::from_id(format.id()), Some(format));
            assert!((format.id() as usize) < PIXEL_FORMAT_COUNT);
        }
    }

    #[test]
    fn id_15_is_not_a_format() {
        assert_eq!(PixelFormat::from_id(15), None);
        assert_eq!(PixelFormat::try_from(15), Err(UnknownPixelFormat(15)));
        assert_eq!(PixelFormat::from_id(18), None);
    }

    #[rstest]
    #[case(PixelFormat::Rgba8, 256)]
    #[case(PixelFormat::Rgb8, 192)]
    #[case(PixelFormat::Rgb565, 128)]
    #[case(PixelFormat::I8, 64)]
    #[case(PixelFormat::I4, 32)]
    #[case(PixelFormat::Etc1, 32)]
    #[case(PixelFormat::Etc1a4, 64)]
    #[case(PixelFormat::D24s8, 256)]
    fn tile_sizes(#[case] format: PixelFormat, #[case] expected: usize) {
        assert_eq!(format.tile_size(), expected);
    }

    #[rstest]
    #[case(PixelFormat::Rgb8, false, 3)]
    #[case(PixelFormat::Rgb8, true, 4)]
    #[case(PixelFormat::D16, false, 2)]
    #[case(PixelFormat::I4, false, 4)]
    #[case(PixelFormat::Etc1, true, 4)]
    fn host_bytes(#[case] format: PixelFormat, #[case] convert: bool, #[case] expected: usize) {
        assert_eq!(format.host_bytes_per_pixel(convert), expected);
    }
}
