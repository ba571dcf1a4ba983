//! Morton (Z-order) swizzling for tiled surfaces.
//!
//! Both directions take the surface size and a byte window `[start_offset, end_offset)` into
//! the tiled surface, relative to the surface's base address. The tiled buffer holds exactly
//! that window; the linear buffer always holds the whole surface (bottom-up, see
//! [`pica_texture_common::morton`]).
//!
//! Swizzling accepts windows that start or end inside a tile: partial tiles are built in a
//! scratch tile and only the covered bytes are written out. Unswizzling processes whole tiles
//! only.

use super::pixel::PixelTranscode;
use pica_texture_common::morton::{
    morton_offset, LinearTile, MAX_TILE_BYTES, TILE_EDGE, TILE_PIXELS,
};

/// Converts a linear host buffer into the tiled guest window `[start_offset, end_offset)`.
pub fn swizzle<P: PixelTranscode>(
    width: u32,
    height: u32,
    start_offset: u32,
    end_offset: u32,
    linear: &[u8],
    tiled: &mut [u8],
) {
    let (width, height) = (width as usize, height as usize);
    let (start, end) = (start_offset as usize, end_offset as usize);
    let tile_bytes = TILE_PIXELS * P::GUEST_BYTES;
    if start >= end {
        return;
    }

    let mut scratch = [0u8; MAX_TILE_BYTES];
    for tile_index in start / tile_bytes..end.div_ceil(tile_bytes) {
        let tile_start = tile_index * tile_bytes;
        let tile_end = tile_start + tile_bytes;
        let tile = LinearTile::new(width, height, tile_index, P::HOST_BYTES);

        if start <= tile_start && tile_end <= end {
            let out = &mut tiled[tile_start - start..tile_end - start];
            encode_tile::<P>(&tile, linear, out);
        } else {
            // Partial tile at either edge of the window.
            let scratch = &mut scratch[..tile_bytes];
            encode_tile::<P>(&tile, linear, scratch);
            let lo = start.max(tile_start);
            let hi = end.min(tile_end);
            tiled[lo - start..hi - start]
                .copy_from_slice(&scratch[lo - tile_start..hi - tile_start]);
        }
    }
}

/// Converts the tiled guest window `[start_offset, end_offset)` into a linear host buffer.
///
/// Only tiles fully inside the window are decoded.
pub fn unswizzle<P: PixelTranscode>(
    width: u32,
    height: u32,
    start_offset: u32,
    end_offset: u32,
    tiled: &[u8],
    linear: &mut [u8],
) {
    for_each_tile(
        width,
        height,
        start_offset,
        end_offset,
        TILE_PIXELS * P::GUEST_BYTES,
        P::HOST_BYTES,
        tiled,
        linear,
        |source, x, y, dest| {
            let offset = morton_offset(x, y, P::GUEST_BYTES);
            P::decode_pixel(&source[offset..offset + P::GUEST_BYTES], dest);
        },
    );
}

/// Walks every whole tile of a tiled window and calls `pixel` once per texel with the tile's
/// guest bytes, the tile-local `(x, y)` and the matching host pixel.
///
/// Shared by every decoder that reads whole tiles, including those of sub-byte and
/// compressed formats.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub(crate) fn for_each_tile<F>(
    width: u32,
    height: u32,
    start_offset: u32,
    end_offset: u32,
    tile_bytes: usize,
    host_bytes: usize,
    tiled: &[u8],
    linear: &mut [u8],
    mut pixel: F,
) where
    F: FnMut(&[u8], usize, usize, &mut [u8]),
{
    let (width, height) = (width as usize, height as usize);
    let first_tile = start_offset as usize / tile_bytes;
    let last_tile = end_offset as usize / tile_bytes;

    for (tile_index, source) in (first_tile..last_tile).zip(tiled.chunks_exact(tile_bytes)) {
        let tile = LinearTile::new(width, height, tile_index, host_bytes);
        for y in 0..TILE_EDGE {
            for x in 0..TILE_EDGE {
                let offset = tile.pixel_offset(x, y);
                pixel(source, x, y, &mut linear[offset..offset + host_bytes]);
            }
        }
    }
}

#[inline(always)]
fn encode_tile<P: PixelTranscode>(tile: &LinearTile, linear: &[u8], out: &mut [u8]) {
    for y in 0..TILE_EDGE {
        for x in 0..TILE_EDGE {
            let source = tile.pixel_offset(x, y);
            let dest = morton_offset(x, y, P::GUEST_BYTES);
            P::encode_pixel(
                &linear[source..source + P::HOST_BYTES],
                &mut out[dest..dest + P::GUEST_BYTES],
            );
        }
    }
}
