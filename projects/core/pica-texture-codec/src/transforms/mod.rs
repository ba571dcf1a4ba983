//! Transform bodies, one family per surface layout.
//!
//! - [`pixel`]: how a single pixel moves between guest and host layouts.
//! - [`linear`]: untiled surfaces.
//! - [`morton`]: tiled surfaces with whole-byte pixels.
//! - [`nibble`]: tiled 4-bit formats.
//! - [`etc1`]: tiled ETC1 compressed formats.
//!
//! Every generic transform here is instantiated into a plain `fn` pointer by [`crate::table`].

pub mod etc1;
pub mod linear;
pub mod morton;
pub mod nibble;
pub mod pixel;
