#![no_main]

// Encoding then decoding with the plain codecs, and decoding then encoding with the converting
// codecs, must give back the input for every format that has both directions.

use libfuzzer_sys::{arbitrary, fuzz_target};
use pica_texture_codec::{codec_table, PixelFormat};
use pica_texture_transcode::{decode_texture, encode_texture, PAddr, SurfaceParams};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub format_id: u8,
    pub width_tiles: u8,
    pub height_tiles: u8,
    pub tiled: bool,
    pub convert: bool,
    pub data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let Some(format) = PixelFormat::from_id(input.format_id) else {
        return;
    };
    let codecs = codec_table(input.convert).get(format);
    let supported = if input.tiled {
        codecs.swizzle.is_some() && codecs.unswizzle.is_some()
    } else {
        codecs.linear_encode.is_some() && codecs.linear_decode.is_some()
    };
    if !supported {
        return;
    }

    let width = (input.width_tiles % 8 + 1) as u32 * 8;
    let height = (input.height_tiles % 8 + 1) as u32 * 8;
    let surface = SurfaceParams::new(PAddr(0x1800_0000), width, height, format, input.tiled);
    let (start, end) = (surface.addr, surface.end());

    if input.convert {
        let mut guest = vec![0u8; surface.size()];
        fill(&mut guest, &input.data);
        let mut host = vec![0u8; surface.linear_size(true)];
        decode_texture(&surface, start, end, &guest, &mut host, true).unwrap();

        let mut back = vec![0u8; guest.len()];
        encode_texture(&surface, start, end, &host, &mut back, true).unwrap();
        assert_eq!(back, guest, "{format:?} tiled={}", input.tiled);
    } else {
        let mut host = vec![0u8; surface.linear_size(false)];
        fill(&mut host, &input.data);
        let mut guest = vec![0u8; surface.size()];
        encode_texture(&surface, start, end, &host, &mut guest, false).unwrap();

        let mut back = vec![0u8; host.len()];
        decode_texture(&surface, start, end, &guest, &mut back, false).unwrap();
        assert_eq!(back, host, "{format:?} tiled={}", input.tiled);
    }
});

/// Repeats `data` over `buffer`.
fn fill(buffer: &mut [u8], data: &[u8]) {
    if data.is_empty() {
        return;
    }
    for (byte, value) in buffer.iter_mut().zip(data.iter().cycle()) {
        *byte = *value;
    }
}
