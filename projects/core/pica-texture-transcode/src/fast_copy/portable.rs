/// Copies `len` bytes eight at a time.
///
/// # Safety
///
/// - source_ptr must be valid for reads of len bytes
/// - dest_ptr must be valid for writes of len bytes
/// - the two ranges must not overlap
/// - len must be divisible by 16
pub(crate) unsafe fn copy_16(mut source_ptr: *const u8, mut dest_ptr: *mut u8, len: usize) {
    debug_assert!(len % 16 == 0);

    let end_ptr = source_ptr.add(len);
    while source_ptr < end_ptr {
        let lo = (source_ptr as *const u64).read_unaligned();
        let hi = (source_ptr.add(8) as *const u64).read_unaligned();
        (dest_ptr as *mut u64).write_unaligned(lo);
        (dest_ptr.add(8) as *mut u64).write_unaligned(hi);

        source_ptr = source_ptr.add(16);
        dest_ptr = dest_ptr.add(16);
    }
}
