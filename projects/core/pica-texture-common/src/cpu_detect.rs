//! Helpers for CPU feature detection without using std.
//!
//! The x86 checks use the `cpufeatures` crate; they have an init that's called once, and every
//! subsequent call simply loads and compares a bool.
//!
//! On AArch64, NEON is part of the baseline instruction set, so no runtime check exists; callers
//! gate NEON code on `target_feature = "neon"` at compile time.

/// Checks if the CPU supports SSE2 (Streaming SIMD Extensions 2) instructions.
///
/// SSE2 is part of the x86-64 baseline and provides the unaligned 128-bit loads and stores
/// (`movdqu`) used by the vectorised copy kernel.
///
/// # Returns
/// `true` if the CPU supports SSE2 instructions, `false` otherwise.
#[inline]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn has_sse2() -> bool {
    cpufeatures::new!(cpuid_sse2, "sse2");
    cpuid_sse2::get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_arch = "x86_64")]
    fn sse2_is_always_present_on_x86_64() {
        assert!(has_sse2());
    }
}
