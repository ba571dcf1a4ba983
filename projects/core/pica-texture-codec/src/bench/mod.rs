//! Benchmark functions re-exported for external benchmarks.
//!
//! The transform bodies are `pub(crate)`; this module exposes a representative set of them
//! when the `bench` feature is enabled.
#![cfg(not(tarpaulin_include))]
#![allow(missing_docs)]

pub mod linear {
    //! Untiled transforms.

    use crate::transforms::linear;
    use crate::transforms::pixel::{Converted, Rgba8, StencilFirst};

    pub fn copy_bytes(source: &[u8], dest: &mut [u8]) {
        linear::copy_bytes(source, dest)
    }

    pub fn rgba8_decode_per_pixel(guest: &[u8], host: &mut [u8]) {
        linear::linear_decode::<Converted<Rgba8>>(guest, host)
    }

    pub fn rgba8_decode_multiversion(guest: &[u8], host: &mut [u8]) {
        linear::reverse_pixel_bytes(guest, host)
    }

    pub fn d24s8_decode_per_pixel(guest: &[u8], host: &mut [u8]) {
        linear::linear_decode::<StencilFirst>(guest, host)
    }

    pub fn d24s8_decode_multiversion(guest: &[u8], host: &mut [u8]) {
        linear::stencil_to_front(guest, host)
    }
}

pub mod morton {
    //! Tiled transforms.

    use crate::transforms::pixel::{Converted, Rgb565, Verbatim};
    use crate::transforms::{etc1, morton};

    pub fn swizzle_rgba8(
        width: u32,
        height: u32,
        start: u32,
        end: u32,
        linear: &[u8],
        tiled: &mut [u8],
    ) {
        morton::swizzle::<Verbatim<4>>(width, height, start, end, linear, tiled)
    }

    pub fn unswizzle_rgba8(
        width: u32,
        height: u32,
        start: u32,
        end: u32,
        tiled: &[u8],
        linear: &mut [u8],
    ) {
        morton::unswizzle::<Verbatim<4>>(width, height, start, end, tiled, linear)
    }

    pub fn unswizzle_rgb565_converted(
        width: u32,
        height: u32,
        start: u32,
        end: u32,
        tiled: &[u8],
        linear: &mut [u8],
    ) {
        morton::unswizzle::<Converted<Rgb565>>(width, height, start, end, tiled, linear)
    }

    pub fn unswizzle_etc1(
        width: u32,
        height: u32,
        start: u32,
        end: u32,
        tiled: &[u8],
        linear: &mut [u8],
    ) {
        etc1::unswizzle_etc1::<false>(width, height, start, end, tiled, linear)
    }
}
