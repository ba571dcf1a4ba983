//! Colour channel bit depth conversion.
//!
//! Expanding an `n`-bit channel to 8 bits replicates the top bits of the value into the freshly
//! opened low bits, so that the minimum maps to `0x00` and the maximum maps to `0xFF`.
//! Shrinking an 8-bit channel truncates, keeping the `n` most significant bits.
//!
//! Expanding then truncating is always lossless; the reverse is only lossless for values that
//! were themselves produced by an expansion.

/// Expands a 1-bit channel to 8 bits.
#[inline(always)]
pub const fn expand_1_to_8(value: u8) -> u8 {
    (value & 1) * 0xFF
}

/// Expands a 4-bit channel to 8 bits.
#[inline(always)]
pub const fn expand_4_to_8(value: u8) -> u8 {
    (value & 0xF) * 17
}

/// Expands a 5-bit channel to 8 bits.
#[inline(always)]
pub const fn expand_5_to_8(value: u8) -> u8 {
    let value = value & 0x1F;
    (value << 3) | (value >> 2)
}

/// Expands a 6-bit channel to 8 bits.
#[inline(always)]
pub const fn expand_6_to_8(value: u8) -> u8 {
    let value = value & 0x3F;
    (value << 2) | (value >> 4)
}

/// Truncates an 8-bit channel to its top `BITS` bits.
#[inline(always)]
pub const fn truncate_8_to<const BITS: u32>(value: u8) -> u8 {
    value >> (8 - BITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0x00)]
    #[case(1, 0xFF)]
    fn expands_1_bit(#[case] input: u8, #[case] expected: u8) {
        assert_eq!(expand_1_to_8(input), expected);
    }

    #[rstest]
    #[case(0x0, 0x00)]
    #[case(0x8, 0x88)]
    #[case(0xF, 0xFF)]
    fn expands_4_bit(#[case] input: u8, #[case] expected: u8) {
        assert_eq!(expand_4_to_8(input), expected);
    }

    #[rstest]
    #[case(0x00, 0x00)]
    #[case(0x10, 0x84)]
    #[case(0x1F, 0xFF)]
    fn expands_5_bit(#[case] input: u8, #[case] expected: u8) {
        assert_eq!(expand_5_to_8(input), expected);
    }

    #[rstest]
    #[case(0x00, 0x00)]
    #[case(0x20, 0x82)]
    #[case(0x3F, 0xFF)]
    fn expands_6_bit(#[case] input: u8, #[case] expected: u8) {
        assert_eq!(expand_6_to_8(input), expected);
    }

    #[test]
    fn truncating_an_expansion_is_lossless() {
        for value in 0..16u8 {
            assert_eq!(truncate_8_to::<4>(expand_4_to_8(value)), value);
        }
        for value in 0..32u8 {
            assert_eq!(truncate_8_to::<5>(expand_5_to_8(value)), value);
        }
        for value in 0..64u8 {
            assert_eq!(truncate_8_to::<6>(expand_6_to_8(value)), value);
        }
        for value in 0..2u8 {
            assert_eq!(truncate_8_to::<1>(expand_1_to_8(value)), value);
        }
    }
}
