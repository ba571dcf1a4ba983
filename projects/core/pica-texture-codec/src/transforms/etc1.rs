//! ETC1 and ETC1A4 decoding.
//!
//! An 8x8 tile holds four 4x4 sub-blocks in Z order (top-left, top-right, bottom-left,
//! bottom-right). Each sub-block is a little endian `u64` of ETC1 colour data; ETC1A4 prefixes
//! it with another `u64` of 4-bit alpha values.
//!
//! Inside a sub-block, texels are numbered column-major: texel `x * 4 + y`.
//!
//! ```text
//! 63..40: base colours (individual: 4+4 bits per channel, differential: 5 bits + 3-bit delta)
//! 39..37: table index, first half
//! 36..34: table index, second half
//!     33: differential mode
//!     32: flip (halves are split horizontally instead of vertically)
//! 31..16: modifier sign, one bit per texel
//!  15..0: modifier selector, one bit per texel
//! ```

use super::morton::for_each_tile;
use pica_texture_common::channel::{expand_4_to_8, expand_5_to_8};
use pica_texture_common::color_8888::Color8888;
use pica_texture_common::morton::TILE_PIXELS;

/// Intensity modifiers, indexed by table index then selector bit.
const MODIFIERS: [[i16; 2]; 8] = [
    [2, 8],
    [5, 17],
    [9, 29],
    [13, 42],
    [18, 60],
    [24, 80],
    [33, 106],
    [47, 183],
];

/// Decodes a tiled ETC1 (`HAS_ALPHA == false`) or ETC1A4 (`HAS_ALPHA == true`) window to
/// RGBA8.
pub fn unswizzle_etc1<const HAS_ALPHA: bool>(
    width: u32,
    height: u32,
    start_offset: u32,
    end_offset: u32,
    tiled: &[u8],
    linear: &mut [u8],
) {
    let sub_block_bytes = if HAS_ALPHA { 16 } else { 8 };
    for_each_tile(
        width,
        height,
        start_offset,
        end_offset,
        TILE_PIXELS / 16 * sub_block_bytes,
        4,
        tiled,
        linear,
        |tile, x, y, dest| {
            let sub_block = x / 4 + 2 * (y / 4);
            let block = &tile[sub_block * sub_block_bytes..][..sub_block_bytes];
            let (x, y) = (x % 4, y % 4);

            let mut color = decode_texel(read_u64(&block[sub_block_bytes - 8..]), x, y);
            if HAS_ALPHA {
                color.a = decode_alpha(read_u64(block), x, y);
            }
            color.write_to(dest);
        },
    );
}

#[inline(always)]
fn read_u64(bytes: &[u8]) -> u64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(raw)
}

/// Alpha of texel `(x, y)` in an ETC1A4 alpha word.
#[inline(always)]
pub(crate) fn decode_alpha(alpha: u64, x: usize, y: usize) -> u8 {
    expand_4_to_8((alpha >> ((x * 4 + y) * 4)) as u8)
}

/// Colour of texel `(x, y)` in an ETC1 colour word. Alpha is always opaque.
pub(crate) fn decode_texel(block: u64, x: usize, y: usize) -> Color8888 {
    let bits = |shift: u32, count: u32| ((block >> shift) & ((1 << count) - 1)) as u8;

    let flip = bits(32, 1) != 0;
    let differential = bits(33, 1) != 0;
    let second_half = if flip { y >= 2 } else { x >= 2 };

    let (r, g, b) = if differential {
        let delta = |shift: u32| ((bits(shift, 3) << 5) as i8 >> 5) as u8;
        let (mut r, mut g, mut b) = (bits(59, 5), bits(51, 5), bits(43, 5));
        if second_half {
            r = r.wrapping_add(delta(56));
            g = g.wrapping_add(delta(48));
            b = b.wrapping_add(delta(40));
        }
        (expand_5_to_8(r), expand_5_to_8(g), expand_5_to_8(b))
    } else if second_half {
        (
            expand_4_to_8(bits(56, 4)),
            expand_4_to_8(bits(48, 4)),
            expand_4_to_8(bits(40, 4)),
        )
    } else {
        (
            expand_4_to_8(bits(60, 4)),
            expand_4_to_8(bits(52, 4)),
            expand_4_to_8(bits(44, 4)),
        )
    };

    let table = (if second_half { bits(34, 3) } else { bits(37, 3) }) as usize;
    let texel = (x * 4 + y) as u32;
    let mut modifier = MODIFIERS[table][bits(texel, 1) as usize];
    if bits(16 + texel, 1) != 0 {
        modifier = -modifier;
    }

    let apply = |channel: u8| (channel as i16 + modifier).clamp(0, 255) as u8;
    Color8888::new(apply(r), apply(g), apply(b), 255)
}
