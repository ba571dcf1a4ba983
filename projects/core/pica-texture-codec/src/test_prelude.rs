//! Common test imports and utilities for codec tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{codec_table, FormatCodecs, LinearTransform, PixelFormat};

pub use pica_texture_common::color_8888::Color8888;

pub use std::{vec, vec::Vec};

/// Deterministic, non-repeating-looking test bytes.
pub(crate) fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8 ^ 0x5A))
        .collect()
}
