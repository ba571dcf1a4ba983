//! Transforms for untiled surfaces.
//!
//! Linear surfaces need no address translation: guest and host pixels appear in the same order,
//! so every transform here is a flat walk over both buffers. The number of pixels processed is
//! bounded by whichever buffer runs out first.

use super::pixel::PixelTranscode;
use multiversion::multiversion;

/// Copies as many bytes as both buffers hold.
///
/// This is the scalar body behind every pure-copy table slot.
#[inline]
pub fn copy_bytes(source: &[u8], dest: &mut [u8]) {
    let len = source.len().min(dest.len());
    dest[..len].copy_from_slice(&source[..len]);
}

/// Converts guest pixels to host pixels, one at a time.
pub fn linear_decode<P: PixelTranscode>(guest: &[u8], host: &mut [u8]) {
    for (guest, host) in guest
        .chunks_exact(P::GUEST_BYTES)
        .zip(host.chunks_exact_mut(P::HOST_BYTES))
    {
        P::decode_pixel(guest, host);
    }
}

/// Converts host pixels to guest pixels, one at a time.
pub fn linear_encode<P: PixelTranscode>(host: &[u8], guest: &mut [u8]) {
    for (host, guest) in host
        .chunks_exact(P::HOST_BYTES)
        .zip(guest.chunks_exact_mut(P::GUEST_BYTES))
    {
        P::encode_pixel(host, guest);
    }
}

/// Reverses the byte order of every 4-byte pixel.
///
/// RGBA8 is stored as `[a, b, g, r]` by the guest, so this both decodes it to `[r, g, b, a]`
/// and encodes it back.
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub fn reverse_pixel_bytes(source: &[u8], dest: &mut [u8]) {
    for (source, dest) in source.chunks_exact(4).zip(dest.chunks_exact_mut(4)) {
        let pixel = u32::from_le_bytes([source[0], source[1], source[2], source[3]]);
        dest.copy_from_slice(&pixel.swap_bytes().to_le_bytes());
    }
}

/// Moves the stencil byte of every D24S8 pixel from last (guest) to first (host).
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub fn stencil_to_front(guest: &[u8], host: &mut [u8]) {
    for (guest, host) in guest.chunks_exact(4).zip(host.chunks_exact_mut(4)) {
        let pixel = u32::from_le_bytes([guest[0], guest[1], guest[2], guest[3]]);
        host.copy_from_slice(&pixel.rotate_left(8).to_le_bytes());
    }
}

/// Moves the stencil byte of every D24S8 pixel from first (host) to last (guest).
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub fn stencil_to_back(host: &[u8], guest: &mut [u8]) {
    for (host, guest) in host.chunks_exact(4).zip(guest.chunks_exact_mut(4)) {
        let pixel = u32::from_le_bytes([host[0], host[1], host[2], host[3]]);
        guest.copy_from_slice(&pixel.rotate_right(8).to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use crate::transforms::pixel::{Converted, Rgb565, Rgba8, StencilFirst};

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(5)]
    #[case(64)]
    fn copy_bytes_stops_at_the_shorter_buffer(#[case] len: usize) {
        let source: Vec<u8> = (0..len as u8).collect();
        let mut dest = vec![0xAAu8; len + 3];
        copy_bytes(&source, &mut dest);
        assert_eq!(&dest[..len], &source[..]);
        assert!(dest[len..].iter().all(|&b| b == 0xAA));
    }

    #[rstest]
    #[case(4)]
    #[case(31)]
    #[case(257)]
    fn rgba8_fast_loop_matches_per_pixel_transcode(#[case] pixels: usize) {
        let guest = patterned_bytes(pixels * 4);

        let mut expected = vec![0u8; pixels * 4];
        linear_decode::<Converted<Rgba8>>(&guest, &mut expected);
        let mut actual = vec![0u8; pixels * 4];
        reverse_pixel_bytes(&guest, &mut actual);
        assert_eq!(actual, expected);

        let mut back = vec![0u8; pixels * 4];
        reverse_pixel_bytes(&actual, &mut back);
        assert_eq!(back, guest);
    }

    #[rstest]
    #[case(1)]
    #[case(64)]
    #[case(100)]
    fn stencil_loops_match_per_pixel_transcode(#[case] pixels: usize) {
        let guest = patterned_bytes(pixels * 4);

        let mut expected = vec![0u8; pixels * 4];
        linear_decode::<StencilFirst>(&guest, &mut expected);
        let mut host = vec![0u8; pixels * 4];
        stencil_to_front(&guest, &mut host);
        assert_eq!(host, expected);

        let mut expected_guest = vec![0u8; pixels * 4];
        linear_encode::<StencilFirst>(&host, &mut expected_guest);
        let mut actual_guest = vec![0u8; pixels * 4];
        stencil_to_back(&host, &mut actual_guest);
        assert_eq!(actual_guest, expected_guest);
        assert_eq!(actual_guest, guest);
    }

    #[test]
    fn converting_linear_decode_widens_to_rgba8() {
        // Pure red, then pure blue.
        let guest = [0x00, 0xF8, 0x1F, 0x00];
        let mut host = [0u8; 8];
        linear_decode::<Converted<Rgb565>>(&guest, &mut host);
        assert_eq!(host, [255, 0, 0, 255, 0, 0, 255, 255]);

        let mut again = [0u8; 4];
        linear_encode::<Converted<Rgb565>>(&host, &mut again);
        assert_eq!(again, guest);
    }
}
