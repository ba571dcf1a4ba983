#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Copies `len` bytes with unaligned 128-bit loads and stores, 64 bytes per iteration where
/// possible.
///
/// # Safety
///
/// - source_ptr must be valid for reads of len bytes
/// - dest_ptr must be valid for writes of len bytes
/// - the two ranges must not overlap
/// - len must be divisible by 16
/// - the CPU must support SSE2
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn copy_16(mut source_ptr: *const u8, mut dest_ptr: *mut u8, len: usize) {
    debug_assert!(len % 16 == 0);

    let unrolled_end = source_ptr.add(len - (len % 64));
    while source_ptr < unrolled_end {
        let xmm0 = _mm_loadu_si128(source_ptr as *const __m128i);
        let xmm1 = _mm_loadu_si128(source_ptr.add(16) as *const __m128i);
        let xmm2 = _mm_loadu_si128(source_ptr.add(32) as *const __m128i);
        let xmm3 = _mm_loadu_si128(source_ptr.add(48) as *const __m128i);
        _mm_storeu_si128(dest_ptr as *mut __m128i, xmm0);
        _mm_storeu_si128(dest_ptr.add(16) as *mut __m128i, xmm1);
        _mm_storeu_si128(dest_ptr.add(32) as *mut __m128i, xmm2);
        _mm_storeu_si128(dest_ptr.add(48) as *mut __m128i, xmm3);

        source_ptr = source_ptr.add(64);
        dest_ptr = dest_ptr.add(64);
    }

    let end_ptr = unrolled_end.add(len % 64);
    while source_ptr < end_ptr {
        let xmm0 = _mm_loadu_si128(source_ptr as *const __m128i);
        _mm_storeu_si128(dest_ptr as *mut __m128i, xmm0);

        source_ptr = source_ptr.add(16);
        dest_ptr = dest_ptr.add(16);
    }
}
