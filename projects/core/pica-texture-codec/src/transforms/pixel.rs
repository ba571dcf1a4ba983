//! Per-pixel conversions between guest and host layouts.
//!
//! A [`PixelTranscode`] implementation describes how one pixel moves between a guest buffer and
//! a host buffer. The layout-level transforms in [`super::linear`] and [`super::morton`] are
//! generic over it, and monomorphise into the function pointers held by the codec tables.

use core::marker::PhantomData;
use pica_texture_common::channel::{expand_1_to_8, expand_4_to_8, expand_5_to_8, truncate_8_to};
use pica_texture_common::color_565::Color565;
use pica_texture_common::color_8888::Color8888;

/// Moves a single pixel between guest and host layouts.
pub trait PixelTranscode {
    /// Bytes per pixel in guest memory.
    const GUEST_BYTES: usize;
    /// Bytes per pixel in the host buffer.
    const HOST_BYTES: usize;

    /// Converts one guest pixel (`GUEST_BYTES` long) into one host pixel (`HOST_BYTES` long).
    fn decode_pixel(guest: &[u8], host: &mut [u8]);

    /// Converts one host pixel (`HOST_BYTES` long) into one guest pixel (`GUEST_BYTES` long).
    fn encode_pixel(host: &[u8], guest: &mut [u8]);
}

/// Guest and host layouts are identical; pixels are copied as is.
pub struct Verbatim<const BYTES: usize>;

impl<const BYTES: usize> PixelTranscode for Verbatim<BYTES> {
    const GUEST_BYTES: usize = BYTES;
    const HOST_BYTES: usize = BYTES;

    #[inline(always)]
    fn decode_pixel(guest: &[u8], host: &mut [u8]) {
        host[..BYTES].copy_from_slice(&guest[..BYTES]);
    }

    #[inline(always)]
    fn encode_pixel(host: &[u8], guest: &mut [u8]) {
        guest[..BYTES].copy_from_slice(&host[..BYTES]);
    }
}

/// D24S8 keeps stencil last in guest memory (`[d0, d1, d2, s]`) but first on the host
/// (`[s, d0, d1, d2]`).
pub struct StencilFirst;

impl PixelTranscode for StencilFirst {
    const GUEST_BYTES: usize = 4;
    const HOST_BYTES: usize = 4;

    #[inline(always)]
    fn decode_pixel(guest: &[u8], host: &mut [u8]) {
        host[0] = guest[3];
        host[1..4].copy_from_slice(&guest[..3]);
    }

    #[inline(always)]
    fn encode_pixel(host: &[u8], guest: &mut [u8]) {
        guest[..3].copy_from_slice(&host[1..4]);
        guest[3] = host[0];
    }
}

/// A colour format with a byte-aligned guest layout that can be converted to and from RGBA8.
pub trait ColorFormat {
    /// Bytes per pixel in guest memory.
    const BYTES: usize;

    /// Decodes one guest pixel.
    fn decode(guest: &[u8]) -> Color8888;

    /// Encodes one pixel into guest memory. Channels the format lacks are dropped, the others
    /// are truncated to the format's bit depth.
    fn encode(color: Color8888, guest: &mut [u8]);
}

/// Converts between a guest [`ColorFormat`] and host RGBA8.
pub struct Converted<C>(PhantomData<C>);

impl<C: ColorFormat> PixelTranscode for Converted<C> {
    const GUEST_BYTES: usize = C::BYTES;
    const HOST_BYTES: usize = 4;

    #[inline(always)]
    fn decode_pixel(guest: &[u8], host: &mut [u8]) {
        C::decode(guest).write_to(host);
    }

    #[inline(always)]
    fn encode_pixel(host: &[u8], guest: &mut [u8]) {
        C::encode(Color8888::from_bytes(host), guest);
    }
}

/// `[a, b, g, r]`
pub struct Rgba8;
/// `[b, g, r]`
pub struct Rgb8;
/// `rrrrrggg ggbbbbba`, little endian.
pub struct Rgb5a1;
/// `rrrrrggg gggbbbbb`, little endian.
pub struct Rgb565;
/// `rrrrgggg bbbbaaaa`, little endian.
pub struct Rgba4;
/// `[a, i]`
pub struct Ia8;
/// `[g, r]`
pub struct Rg8;
/// `[i]`
pub struct I8;
/// `[a]`
pub struct A8;
/// `iiiiaaaa`
pub struct Ia4;

impl ColorFormat for Rgba8 {
    const BYTES: usize = 4;

    #[inline(always)]
    fn decode(guest: &[u8]) -> Color8888 {
        Color8888::new(guest[3], guest[2], guest[1], guest[0])
    }

    #[inline(always)]
    fn encode(color: Color8888, guest: &mut [u8]) {
        guest[..4].copy_from_slice(&[color.a, color.b, color.g, color.r]);
    }
}

impl ColorFormat for Rgb8 {
    const BYTES: usize = 3;

    #[inline(always)]
    fn decode(guest: &[u8]) -> Color8888 {
        Color8888::new(guest[2], guest[1], guest[0], 255)
    }

    #[inline(always)]
    fn encode(color: Color8888, guest: &mut [u8]) {
        guest[..3].copy_from_slice(&[color.b, color.g, color.r]);
    }
}

impl ColorFormat for Rgb5a1 {
    const BYTES: usize = 2;

    #[inline(always)]
    fn decode(guest: &[u8]) -> Color8888 {
        let raw = u16::from_le_bytes([guest[0], guest[1]]);
        Color8888::new(
            expand_5_to_8((raw >> 11) as u8),
            expand_5_to_8((raw >> 6) as u8),
            expand_5_to_8((raw >> 1) as u8),
            expand_1_to_8(raw as u8),
        )
    }

    #[inline(always)]
    fn encode(color: Color8888, guest: &mut [u8]) {
        let raw = (truncate_8_to::<5>(color.r) as u16) << 11
            | (truncate_8_to::<5>(color.g) as u16) << 6
            | (truncate_8_to::<5>(color.b) as u16) << 1
            | truncate_8_to::<1>(color.a) as u16;
        guest[..2].copy_from_slice(&raw.to_le_bytes());
    }
}

impl ColorFormat for Rgb565 {
    const BYTES: usize = 2;

    #[inline(always)]
    fn decode(guest: &[u8]) -> Color8888 {
        Color565::from_le_bytes([guest[0], guest[1]]).to_color_8888()
    }

    #[inline(always)]
    fn encode(color: Color8888, guest: &mut [u8]) {
        guest[..2].copy_from_slice(&Color565::from_rgb(color.r, color.g, color.b).to_le_bytes());
    }
}

impl ColorFormat for Rgba4 {
    const BYTES: usize = 2;

    #[inline(always)]
    fn decode(guest: &[u8]) -> Color8888 {
        let raw = u16::from_le_bytes([guest[0], guest[1]]);
        Color8888::new(
            expand_4_to_8((raw >> 12) as u8),
            expand_4_to_8((raw >> 8) as u8),
            expand_4_to_8((raw >> 4) as u8),
            expand_4_to_8(raw as u8),
        )
    }

    #[inline(always)]
    fn encode(color: Color8888, guest: &mut [u8]) {
        let raw = (truncate_8_to::<4>(color.r) as u16) << 12
            | (truncate_8_to::<4>(color.g) as u16) << 8
            | (truncate_8_to::<4>(color.b) as u16) << 4
            | truncate_8_to::<4>(color.a) as u16;
        guest[..2].copy_from_slice(&raw.to_le_bytes());
    }
}

impl ColorFormat for Ia8 {
    const BYTES: usize = 2;

    #[inline(always)]
    fn decode(guest: &[u8]) -> Color8888 {
        let i = guest[1];
        Color8888::new(i, i, i, guest[0])
    }

    #[inline(always)]
    fn encode(color: Color8888, guest: &mut [u8]) {
        guest[0] = color.a;
        guest[1] = color.r;
    }
}

impl ColorFormat for Rg8 {
    const BYTES: usize = 2;

    #[inline(always)]
    fn decode(guest: &[u8]) -> Color8888 {
        Color8888::new(guest[1], guest[0], 0, 255)
    }

    #[inline(always)]
    fn encode(color: Color8888, guest: &mut [u8]) {
        guest[0] = color.g;
        guest[1] = color.r;
    }
}

impl ColorFormat for I8 {
    const BYTES: usize = 1;

    #[inline(always)]
    fn decode(guest: &[u8]) -> Color8888 {
        let i = guest[0];
        Color8888::new(i, i, i, 255)
    }

    #[inline(always)]
    fn encode(color: Color8888, guest: &mut [u8]) {
        guest[0] = color.r;
    }
}

impl ColorFormat for A8 {
    const BYTES: usize = 1;

    #[inline(always)]
    fn decode(guest: &[u8]) -> Color8888 {
        Color8888::new(0, 0, 0, guest[0])
    }

    #[inline(always)]
    fn encode(color: Color8888, guest: &mut [u8]) {
        guest[0] = color.a;
    }
}

impl ColorFormat for Ia4 {
    const BYTES: usize = 1;

    #[inline(always)]
    fn decode(guest: &[u8]) -> Color8888 {
        let i = expand_4_to_8(guest[0] >> 4);
        Color8888::new(i, i, i, expand_4_to_8(guest[0]))
    }

    #[inline(always)]
    fn encode(color: Color8888, guest: &mut [u8]) {
        guest[0] = (truncate_8_to::<4>(color.r) << 4) | truncate_8_to::<4>(color.a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn decode<C: ColorFormat>(guest: &[u8]) -> Color8888 {
        C::decode(guest)
    }

    fn reencode<C: ColorFormat>(guest: &[u8]) -> [u8; 4] {
        let mut out = [0u8; 4];
        C::encode(C::decode(guest), &mut out);
        out
    }

    #[test]
    fn decodes_known_pixels() {
        assert_eq!(decode::<Rgba8>(&[4, 3, 2, 1]), Color8888::new(1, 2, 3, 4));
        assert_eq!(decode::<Rgb8>(&[3, 2, 1]), Color8888::new(1, 2, 3, 255));
        // r = 31, g = 0, b = 31, a = 1
        assert_eq!(
            decode::<Rgb5a1>(&0b11111_00000_11111_1u16.to_le_bytes()),
            Color8888::new(255, 0, 255, 255)
        );
        assert_eq!(
            decode::<Rgb565>(&0x07E0u16.to_le_bytes()),
            Color8888::new(0, 255, 0, 255)
        );
        assert_eq!(
            decode::<Rgba4>(&0x1234u16.to_le_bytes()),
            Color8888::new(0x11, 0x22, 0x33, 0x44)
        );
        assert_eq!(decode::<Ia8>(&[0x80, 0x40]), Color8888::new(0x40, 0x40, 0x40, 0x80));
        assert_eq!(decode::<Rg8>(&[0x20, 0x10]), Color8888::new(0x10, 0x20, 0, 255));
        assert_eq!(decode::<I8>(&[0x7F]), Color8888::new(0x7F, 0x7F, 0x7F, 255));
        assert_eq!(decode::<A8>(&[0x7F]), Color8888::new(0, 0, 0, 0x7F));
        assert_eq!(decode::<Ia4>(&[0xA5]), Color8888::new(0xAA, 0xAA, 0xAA, 0x55));
    }

    #[rstest]
    #[case(&[0x12, 0x34, 0x56, 0x78])]
    #[case(&[0xFF, 0x00, 0x80, 0x01])]
    fn encode_inverts_decode_for_four_byte_pixels(#[case] guest: &[u8]) {
        assert_eq!(&reencode::<Rgba8>(guest)[..4], guest);
    }

    #[test]
    fn encode_inverts_decode_for_every_16_bit_value() {
        for raw in 0..=u16::MAX {
            let guest = raw.to_le_bytes();
            assert_eq!(reencode::<Rgb5a1>(&guest)[..2], guest);
            assert_eq!(reencode::<Rgb565>(&guest)[..2], guest);
            assert_eq!(reencode::<Rgba4>(&guest)[..2], guest);
            assert_eq!(reencode::<Ia8>(&guest)[..2], guest);
            assert_eq!(reencode::<Rg8>(&guest)[..2], guest);
        }
    }

    #[test]
    fn encode_inverts_decode_for_every_8_bit_value() {
        for raw in 0..=u8::MAX {
            assert_eq!(reencode::<I8>(&[raw])[0], raw);
            assert_eq!(reencode::<A8>(&[raw])[0], raw);
            assert_eq!(reencode::<Ia4>(&[raw])[0], raw);
        }
    }

    #[test]
    fn stencil_moves_to_the_front_on_the_host() {
        let guest = [1, 2, 3, 4];
        let mut host = [0u8; 4];
        StencilFirst::decode_pixel(&guest, &mut host);
        assert_eq!(host, [4, 1, 2, 3]);

        let mut again = [0u8; 4];
        StencilFirst::encode_pixel(&host, &mut again);
        assert_eq!(again, guest);
    }
}
