#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod pixel_format;
pub mod table;

pub(crate) mod transforms;

#[cfg(feature = "bench")]
pub mod bench;

#[cfg(test)]
pub mod test_prelude;

pub use pixel_format::{PixelFormat, UnknownPixelFormat, PIXEL_FORMAT_COUNT};
pub use table::{
    codec_table, CodecTable, FormatCodecs, LinearFn, LinearTransform, MortonFn, CONVERTED_CODECS,
    PLAIN_CODECS,
};
