//! Internal copy kernels, exposed for benchmarks.
#![cfg(not(tarpaulin_include))]

use crate::fast_copy::portable;

/// Copies `len` bytes with the portable 16-byte kernel.
///
/// # Safety
///
/// - source_ptr must be valid for reads of len bytes
/// - dest_ptr must be valid for writes of len bytes
/// - the two ranges must not overlap
/// - len must be divisible by 16
pub unsafe fn copy_portable(source_ptr: *const u8, dest_ptr: *mut u8, len: usize) {
    portable::copy_16(source_ptr, dest_ptr, len)
}

/// Copies `len` bytes with the kernel picked for the current CPU.
///
/// # Safety
///
/// Same as [`copy_portable`].
pub unsafe fn copy_dispatched(source_ptr: *const u8, dest_ptr: *mut u8, len: usize) {
    crate::fast_copy::copy_vectors(source_ptr, dest_ptr, len)
}
