use core::arch::aarch64::*;

/// Copies `len` bytes with 128-bit NEON loads and stores.
///
/// # Safety
///
/// - source_ptr must be valid for reads of len bytes
/// - dest_ptr must be valid for writes of len bytes
/// - the two ranges must not overlap
/// - len must be divisible by 16
#[target_feature(enable = "neon")]
pub(crate) unsafe fn copy_16(mut source_ptr: *const u8, mut dest_ptr: *mut u8, len: usize) {
    debug_assert!(len % 16 == 0);

    let end_ptr = source_ptr.add(len);
    while source_ptr < end_ptr {
        vst1q_u8(dest_ptr, vld1q_u8(source_ptr));

        source_ptr = source_ptr.add(16);
        dest_ptr = dest_ptr.add(16);
    }
}
