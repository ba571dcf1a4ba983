//! Common test imports and utilities for transcode tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{
    decode_texture, encode_texture, BufferRole, PAddr, SurfaceError, SurfaceParams,
    TranscodeError,
};
pub use pica_texture_codec::PixelFormat;

#[allow(unused_imports)] // Might be unused in some CPU architectures, and that's ok.
pub use pica_texture_common::cpu_detect::*;
pub use safe_allocator_api::RawAlloc;

pub use std::{vec, vec::Vec};

/// Type of the raw bulk copy kernels.
pub(crate) type CopyFn = unsafe fn(*const u8, *mut u8, usize);

/// Allocates data with an alignment of 64 bytes.
pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    pica_texture_common::allocate::allocate_align_64(num_bytes).unwrap()
}

/// Allocates `len + 1` bytes aligned to 64 and fills bytes `1..` with `fill(index)`, so that
/// `&alloc.as_slice()[1..]` is a deliberately misaligned buffer.
pub(crate) fn allocate_unaligned_with(len: usize, fill: impl Fn(usize) -> u8) -> RawAlloc {
    let mut data = allocate_align_64(len + 1);
    data.as_mut_slice()[0] = 0;
    for (index, byte) in data.as_mut_slice()[1..].iter_mut().enumerate() {
        *byte = fill(index);
    }
    data
}

/// Deterministic test bytes.
pub(crate) fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8 ^ 0x5A))
        .collect()
}

/// Runs a bulk copy kernel on misaligned source and destination buffers for every multiple of
/// 16 up to `max_len`, and checks the copied bytes (and nothing past them).
pub(crate) fn run_copy_unaligned_test(copy_fn: CopyFn, max_len: usize, impl_name: &str) {
    for len in (0..=max_len).step_by(16) {
        let source = allocate_unaligned_with(len + 16, |i| (i as u8).wrapping_add(1));
        let mut dest = allocate_align_64(len + 17);
        dest.as_mut_slice().fill(0);

        unsafe {
            copy_fn(source.as_ptr().add(1), dest.as_mut_ptr().add(1), len);
        }

        assert_eq!(
            &source.as_slice()[1..len + 1],
            &dest.as_slice()[1..len + 1],
            "{impl_name} copied the wrong bytes for len {len}"
        );
        assert!(
            dest.as_slice()[len + 1..].iter().all(|&b| b == 0),
            "{impl_name} wrote past the end for len {len}"
        );
    }
}
