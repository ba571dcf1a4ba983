#![no_main]

// Encoding a window of a tiled surface must write exactly the bytes a full encode writes there.

use libfuzzer_sys::{arbitrary, fuzz_target};
use pica_texture_codec::PixelFormat;
use pica_texture_transcode::{encode_texture, PAddr, SurfaceParams};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub format: u8,
    pub width_tiles: u8,
    pub height_tiles: u8,
    pub start: u16,
    pub len: u16,
    pub seed: u8,
}

const FORMATS: [PixelFormat; 5] = [
    PixelFormat::Rgba8,
    PixelFormat::Rgb8,
    PixelFormat::Rgb565,
    PixelFormat::I8,
    PixelFormat::D24s8,
];

fuzz_target!(|input: Input| {
    let format = FORMATS[input.format as usize % FORMATS.len()];
    let width = (input.width_tiles % 4 + 1) as u32 * 8;
    let height = (input.height_tiles % 4 + 1) as u32 * 8;
    let surface = SurfaceParams::new(PAddr(0x1000), width, height, format, true);

    let pixel_bytes = format.bits_per_pixel() as usize / 8;
    let pixels = surface.size() / pixel_bytes;
    let first = input.start as usize % pixels;
    let count = input.len as usize % (pixels - first + 1);
    let start = first * pixel_bytes;
    let end = (first + count) * pixel_bytes;

    let host: Vec<u8> = (0..surface.linear_size(false))
        .map(|i| (i as u8).wrapping_mul(input.seed | 1))
        .collect();
    let mut full = vec![0u8; surface.size()];
    encode_texture(&surface, surface.addr, surface.end(), &host, &mut full, false).unwrap();

    let mut window = vec![0u8; end - start];
    let addr = |offset: usize| PAddr(surface.addr.0 + offset as u32);
    encode_texture(&surface, addr(start), addr(end), &host, &mut window, false).unwrap();
    assert_eq!(window, &full[start..end], "{format:?} {start}..{end}");
});
