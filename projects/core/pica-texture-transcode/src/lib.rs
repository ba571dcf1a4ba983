#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod error;
pub mod fast_copy;
pub mod mip;
pub mod surface;
pub mod transcode;

#[cfg(feature = "bench")]
pub mod bench;

#[cfg(test)]
pub mod test_prelude;

pub use error::{BufferRole, TranscodeError};
pub use mip::mip_levels;
pub use surface::{PAddr, SurfaceError, SurfaceParams};
pub use transcode::{decode_texture, encode_texture, Direction};
