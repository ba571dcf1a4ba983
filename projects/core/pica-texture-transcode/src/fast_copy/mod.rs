//! Vectorised bulk copy for transforms that are plain byte copies.
//!
//! The bulk of the run (`len & !15` bytes) is copied with 16-byte vector loads and stores; the
//! remaining tail goes through the table's scalar copy. Runs shorter than one vector go to the
//! scalar copy as a whole.

pub(crate) mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod sse2;

#[cfg(target_arch = "aarch64")]
mod neon;

use likely_stable::unlikely;
use pica_texture_codec::LinearFn;

/// Width of one vector, in bytes.
pub const VECTOR_BYTES: usize = 16;

/// Copies `source` into `dest` (both must be the same length), using the vector unit for every
/// whole 16-byte chunk and `scalar` for the rest.
///
/// `scalar` must be a plain byte copy.
pub fn copy_with_fast_path(source: &[u8], dest: &mut [u8], scalar: LinearFn) {
    debug_assert_eq!(source.len(), dest.len());
    let len = source.len().min(dest.len());
    let vector_len = len & !(VECTOR_BYTES - 1);

    if unlikely(vector_len == 0) {
        scalar(source, dest);
        return;
    }

    // Safety: both slices hold at least `vector_len` bytes, and a shared and a mutable borrow
    // cannot overlap.
    unsafe { copy_vectors(source.as_ptr(), dest.as_mut_ptr(), vector_len) };
    scalar(&source[vector_len..len], &mut dest[vector_len..len]);
}

/// Copies `len` bytes using the best known implementation for the current CPU.
///
/// # Safety
///
/// - source_ptr must be valid for reads of len bytes
/// - dest_ptr must be valid for writes of len bytes
/// - the two ranges must not overlap
/// - len must be divisible by 16
#[inline]
pub(crate) unsafe fn copy_vectors(source_ptr: *const u8, dest_ptr: *mut u8, len: usize) {
    debug_assert!(len % VECTOR_BYTES == 0);

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        copy_vectors_x86(source_ptr, dest_ptr, len)
    }

    #[cfg(target_arch = "aarch64")]
    {
        copy_vectors_aarch64(source_ptr, dest_ptr, len)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        tracing::trace!(kernel = "portable", len, "bulk copy");
        portable::copy_16(source_ptr, dest_ptr, len)
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn copy_vectors_x86(source_ptr: *const u8, dest_ptr: *mut u8, len: usize) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        if pica_texture_common::cpu_detect::has_sse2() {
            tracing::trace!(kernel = "sse2", len, "bulk copy");
            sse2::copy_16(source_ptr, dest_ptr, len);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "sse2") {
            tracing::trace!(kernel = "sse2", len, "bulk copy");
            sse2::copy_16(source_ptr, dest_ptr, len);
            return;
        }
    }

    // Fallback to portable implementation
    tracing::trace!(kernel = "portable", len, "bulk copy");
    portable::copy_16(source_ptr, dest_ptr, len)
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
unsafe fn copy_vectors_aarch64(source_ptr: *const u8, dest_ptr: *mut u8, len: usize) {
    if cfg!(target_feature = "neon") {
        tracing::trace!(kernel = "neon", len, "bulk copy");
        neon::copy_16(source_ptr, dest_ptr, len);
        return;
    }

    // Fallback to portable implementation
    tracing::trace!(kernel = "portable", len, "bulk copy");
    portable::copy_16(source_ptr, dest_ptr, len)
}
