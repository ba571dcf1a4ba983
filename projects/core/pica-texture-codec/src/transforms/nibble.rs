//! Decoders for the 4-bit-per-pixel formats (I4, A4).
//!
//! Two pixels share a byte; the pixel with the even Morton index takes the low nibble.

use super::morton::for_each_tile;
use pica_texture_common::channel::expand_4_to_8;
use pica_texture_common::color_8888::Color8888;
use pica_texture_common::morton::{MORTON_INDEX, TILE_PIXELS};

/// Decodes a tiled I4 (`ALPHA == false`) or A4 (`ALPHA == true`) window to RGBA8.
pub fn unswizzle_nibbles<const ALPHA: bool>(
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
        TILE_PIXELS / 2,
        4,
        tiled,
        linear,
        |tile, x, y, dest| {
            let index = MORTON_INDEX[y][x] as usize;
            let byte = tile[index / 2];
            let nibble = if index % 2 == 0 { byte } else { byte >> 4 };
            let value = expand_4_to_8(nibble);
            let color = if ALPHA {
                Color8888::new(0, 0, 0, value)
            } else {
                Color8888::new(value, value, value, 255)
            };
            color.write_to(dest);
        },
    );
}
