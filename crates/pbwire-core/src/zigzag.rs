//! ZigZag mapping between signed and unsigned integers.
//!
//! Protobuf's `sint32`/`sint64` wire types zigzag-map a signed value onto
//! the non-negative integers before varint encoding, so that small
//! magnitudes of either sign stay small on the wire:
//!
//! | n | zigzag(n) |
//! |---|---|
//! | 0 | 0 |
//! | -1 | 1 |
//! | 1 | 2 |
//! | -2 | 3 |
//! | 2 | 4 |
//!
//! The mapping is `zigzag(n) = (n << 1) ^ (n >> (bits - 1))` with an
//! arithmetic right shift, and is a bijection at each bit width. All
//! functions here are pure and total.

/// Map a signed 32-bit value onto the non-negative integers.
///
/// ```
/// use pbwire_core::zigzag::zigzag_encode32;
///
/// assert_eq!(zigzag_encode32(-1), 1);
/// assert_eq!(zigzag_encode32(1), 2);
/// ```
pub fn zigzag_encode32(n: i32) -> u32 {
    ((n << 1) ^ (n >> 31)) as u32
}

/// Invert [`zigzag_encode32`].
pub fn zigzag_decode32(z: u32) -> i32 {
    ((z >> 1) as i32) ^ -((z & 1) as i32)
}

/// Map a signed 64-bit value onto the non-negative integers.
pub fn zigzag_encode64(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

/// Invert [`zigzag_encode64`].
pub fn zigzag_decode64(z: u64) -> i64 {
    ((z >> 1) as i64) ^ -((z & 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_small_magnitudes_32() {
        assert_eq!(zigzag_encode32(0), 0);
        assert_eq!(zigzag_encode32(-1), 1);
        assert_eq!(zigzag_encode32(1), 2);
        assert_eq!(zigzag_encode32(-2), 3);
        assert_eq!(zigzag_encode32(2), 4);
    }

    #[test]
    fn test_extremes_32() {
        assert_eq!(zigzag_encode32(i32::MAX), u32::MAX - 1);
        assert_eq!(zigzag_encode32(i32::MIN), u32::MAX);
        assert_eq!(zigzag_decode32(u32::MAX), i32::MIN);
    }

    #[test]
    fn test_small_magnitudes_64() {
        assert_eq!(zigzag_encode64(0), 0);
        assert_eq!(zigzag_encode64(-1), 1);
        assert_eq!(zigzag_encode64(1), 2);
        assert_eq!(zigzag_encode64(-2), 3);
    }

    #[test]
    fn test_extremes_64() {
        assert_eq!(zigzag_encode64(i64::MAX), u64::MAX - 1);
        assert_eq!(zigzag_encode64(i64::MIN), u64::MAX);
        assert_eq!(zigzag_decode64(u64::MAX), i64::MIN);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_32(n in any::<i32>()) {
            prop_assert_eq!(zigzag_decode32(zigzag_encode32(n)), n);
        }

        #[test]
        fn prop_roundtrip_64(n in any::<i64>()) {
            prop_assert_eq!(zigzag_decode64(zigzag_encode64(n)), n);
        }

        #[test]
        fn prop_inverse_direction_32(z in any::<u32>()) {
            prop_assert_eq!(zigzag_encode32(zigzag_decode32(z)), z);
        }

        #[test]
        fn prop_inverse_direction_64(z in any::<u64>()) {
            prop_assert_eq!(zigzag_encode64(zigzag_decode64(z)), z);
        }
    }
}
