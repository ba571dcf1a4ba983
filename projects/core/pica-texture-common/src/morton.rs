//! # Morton tile geometry
//!
//! The PICA GPU stores textures as a row-major grid of 8x8 pixel tiles. Inside a tile, pixels
//! are ordered along a Z-order (Morton) curve: the bits of the `x` and `y` coordinate are
//! interleaved, `x` taking the even bit positions and `y` the odd ones.
//!
//! ```text
//!  y\x   0  1  2  3  4  5  6  7
//!   0    0  1  4  5 16 17 20 21
//!   1    2  3  6  7 18 19 22 23
//!   2    8  9 12 13 24 25 28 29
//!   3   10 11 14 15 26 27 30 31
//!   4   32 33 36 37 48 49 52 53
//!   5   34 35 38 39 50 51 54 55
//!   6   40 41 44 45 56 57 60 61
//!   7   42 43 46 47 58 59 62 63
//! ```
//!
//! Host-side (linear) buffers are stored bottom-up: the first linear row is the last row of the
//! guest surface. A bottom-left-origin graphics API can then sample them without flipping
//! texture coordinates.

/// Width and height of a tile, in pixels.
pub const TILE_EDGE: usize = 8;

/// Number of pixels in a tile.
pub const TILE_PIXELS: usize = TILE_EDGE * TILE_EDGE;

/// Largest tile size of any format, in bytes (64 pixels at 32 bits per pixel).
pub const MAX_TILE_BYTES: usize = TILE_PIXELS * 4;

/// Interleaves the low 3 bits of `x` and `y` into a 6-bit Morton index.
#[inline(always)]
pub const fn morton_interleave(x: usize, y: usize) -> usize {
    let x = x & 7;
    let y = y & 7;
    (x & 1) | ((y & 1) << 1) | ((x & 2) << 1) | ((y & 2) << 2) | ((x & 4) << 2) | ((y & 4) << 3)
}

/// Morton index of every pixel in a tile, indexed as `MORTON_INDEX[y][x]`.
pub const MORTON_INDEX: [[u8; TILE_EDGE]; TILE_EDGE] = build_morton_index();

const fn build_morton_index() -> [[u8; TILE_EDGE]; TILE_EDGE] {
    let mut table = [[0u8; TILE_EDGE]; TILE_EDGE];
    let mut y = 0;
    while y < TILE_EDGE {
        let mut x = 0;
        while x < TILE_EDGE {
            table[y][x] = morton_interleave(x, y) as u8;
            x += 1;
        }
        y += 1;
    }
    table
}

/// Byte offset of pixel `(x, y)` inside a tile whose pixels are `bytes_per_pixel` wide.
#[inline(always)]
pub const fn morton_offset(x: usize, y: usize, bytes_per_pixel: usize) -> usize {
    MORTON_INDEX[y & 7][x & 7] as usize * bytes_per_pixel
}

/// Locates a tile inside a bottom-up linear buffer.
///
/// Built from the surface size and the index of the tile in guest memory (tiles are numbered
/// row-major from the start of the surface).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearTile {
    /// Linear row holding the tile's top row (tile-local `y == 0`).
    top_row: usize,
    /// First column of the tile.
    column: usize,
    /// Surface width in pixels.
    width: usize,
    /// Bytes per pixel in the linear buffer.
    bytes_per_pixel: usize,
}

impl LinearTile {
    /// Locates tile `tile_index` of a `width` x `height` surface.
    ///
    /// `width` and `height` must be multiples of [`TILE_EDGE`], and `tile_index` must be lower
    /// than the number of tiles in the surface.
    #[inline]
    pub fn new(width: usize, height: usize, tile_index: usize, bytes_per_pixel: usize) -> Self {
        let tiles_per_row = width / TILE_EDGE;
        let tile_x = tile_index % tiles_per_row;
        let tile_y = tile_index / tiles_per_row;
        debug_assert!((tile_y + 1) * TILE_EDGE <= height);

        Self {
            top_row: height - 1 - tile_y * TILE_EDGE,
            column: tile_x * TILE_EDGE,
            width,
            bytes_per_pixel,
        }
    }

    /// Byte offset in the linear buffer of tile-local pixel `(x, y)`.
    #[inline(always)]
    pub fn pixel_offset(&self, x: usize, y: usize) -> usize {
        ((self.top_row - y) * self.width + self.column + x) * self.bytes_per_pixel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0)]
    #[case(1, 0, 1)]
    #[case(0, 1, 2)]
    #[case(2, 0, 4)]
    #[case(4, 0, 16)]
    #[case(0, 4, 32)]
    #[case(7, 7, 63)]
    #[case(3, 5, 39)]
    fn interleaves_coordinates(#[case] x: usize, #[case] y: usize, #[case] expected: usize) {
        assert_eq!(morton_interleave(x, y), expected);
        assert_eq!(morton_offset(x, y, 3), expected * 3);
    }

    #[test]
    fn morton_index_is_a_permutation() {
        let mut seen = [false; TILE_PIXELS];
        for row in MORTON_INDEX.iter() {
            for &index in row.iter() {
                assert!(!seen[index as usize]);
                seen[index as usize] = true;
            }
        }
        assert!(seen.iter().all(|&x| x));
    }

    #[test]
    fn first_tile_sits_at_the_bottom_of_the_linear_buffer() {
        // 16x16 surface, 2x2 tiles, 1 byte per pixel.
        let tile = LinearTile::new(16, 16, 0, 1);
        assert_eq!(tile.pixel_offset(0, 0), 15 * 16);
        assert_eq!(tile.pixel_offset(0, 7), 8 * 16);

        let tile = LinearTile::new(16, 16, 1, 1);
        assert_eq!(tile.pixel_offset(0, 0), 15 * 16 + 8);

        let tile = LinearTile::new(16, 16, 3, 4);
        assert_eq!(tile.pixel_offset(7, 7), 15 * 4);
    }
}
