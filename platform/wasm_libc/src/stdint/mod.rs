//! Integer types and limits of `<stdint.h>`.
//!
//! The exact, least and fixed-size fast types are the same on every wasm
//! target. Everything that depends on the target lives in
//! [`bits_stdint`](crate::bits_stdint) and is re-exported from here.

use wasm_libc_spec_comment::posix_spec;

pub use crate::bits_stdint::*;

pub type int8_t = i8;
pub type uint8_t = u8;
pub type int_least8_t = int8_t;
pub type uint_least8_t = uint8_t;
pub type int_fast8_t = int8_t;
pub type uint_fast8_t = uint8_t;

pub type int16_t = i16;
pub type uint16_t = u16;
pub type int_least16_t = int16_t;
pub type uint_least16_t = uint16_t;

pub type int32_t = i32;
pub type uint32_t = u32;
pub type int_least32_t = int32_t;
pub type uint_least32_t = uint32_t;

pub type int64_t = i64;
pub type uint64_t = u64;
pub type int_least64_t = int64_t;
pub type uint_least64_t = uint64_t;
pub type int_fast64_t = int64_t;
pub type uint_fast64_t = uint64_t;

#[posix_spec("basedefs/stdint.h.html")]
pub type intmax_t = int64_t;
#[posix_spec("basedefs/stdint.h.html")]
pub type uintmax_t = uint64_t;

pub const INT8_MIN: int8_t = -0x7f - 1;
pub const INT16_MIN: int16_t = -0x7fff - 1;
pub const INT32_MIN: int32_t = -0x7fff_ffff - 1;
pub const INT64_MIN: int64_t = -0x7fff_ffff_ffff_ffff - 1;

pub const INT8_MAX: int8_t = 0x7f;
pub const INT16_MAX: int16_t = 0x7fff;
pub const INT32_MAX: int32_t = 0x7fff_ffff;
pub const INT64_MAX: int64_t = 0x7fff_ffff_ffff_ffff;

pub const UINT8_MAX: uint8_t = 0xff;
pub const UINT16_MAX: uint16_t = 0xffff;
pub const UINT32_MAX: uint32_t = 0xffff_ffff;
pub const UINT64_MAX: uint64_t = 0xffff_ffff_ffff_ffff;

pub const INT_LEAST8_MIN: int_least8_t = INT8_MIN;
pub const INT_LEAST16_MIN: int_least16_t = INT16_MIN;
pub const INT_LEAST32_MIN: int_least32_t = INT32_MIN;
pub const INT_LEAST64_MIN: int_least64_t = INT64_MIN;

pub const INT_LEAST8_MAX: int_least8_t = INT8_MAX;
pub const INT_LEAST16_MAX: int_least16_t = INT16_MAX;
pub const INT_LEAST32_MAX: int_least32_t = INT32_MAX;
pub const INT_LEAST64_MAX: int_least64_t = INT64_MAX;

pub const UINT_LEAST8_MAX: uint_least8_t = UINT8_MAX;
pub const UINT_LEAST16_MAX: uint_least16_t = UINT16_MAX;
pub const UINT_LEAST32_MAX: uint_least32_t = UINT32_MAX;
pub const UINT_LEAST64_MAX: uint_least64_t = UINT64_MAX;

pub const INT_FAST8_MIN: int_fast8_t = INT8_MIN;
pub const INT_FAST64_MIN: int_fast64_t = INT64_MIN;

pub const INT_FAST8_MAX: int_fast8_t = INT8_MAX;
pub const INT_FAST64_MAX: int_fast64_t = INT64_MAX;

pub const UINT_FAST8_MAX: uint_fast8_t = UINT8_MAX;
pub const UINT_FAST64_MAX: uint_fast64_t = UINT64_MAX;

pub const INTMAX_MIN: intmax_t = INT64_MIN;
pub const INTMAX_MAX: intmax_t = INT64_MAX;
pub const UINTMAX_MAX: uintmax_t = UINT64_MAX;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_width_limits_match_rust_primitives() {
        assert_eq!(INT8_MIN, i8::MIN);
        assert_eq!(INT16_MIN, i16::MIN);
        assert_eq!(INT32_MIN, i32::MIN);
        assert_eq!(INT64_MIN, i64::MIN);

        assert_eq!(INT8_MAX, i8::MAX);
        assert_eq!(INT16_MAX, i16::MAX);
        assert_eq!(INT32_MAX, i32::MAX);
        assert_eq!(INT64_MAX, i64::MAX);

        assert_eq!(UINT8_MAX, u8::MAX);
        assert_eq!(UINT16_MAX, u16::MAX);
        assert_eq!(UINT32_MAX, u32::MAX);
        assert_eq!(UINT64_MAX, u64::MAX);
    }

    #[test]
    fn test_signed_min_is_negated_max_minus_one() {
        for (min, max) in [
            (INT8_MIN as i128, INT8_MAX as i128),
            (INT16_MIN as i128, INT16_MAX as i128),
            (INT32_MIN as i128, INT32_MAX as i128),
            (INT64_MIN as i128, INT64_MAX as i128),
            (INT_LEAST8_MIN as i128, INT_LEAST8_MAX as i128),
            (INT_LEAST64_MIN as i128, INT_LEAST64_MAX as i128),
            (INT_FAST8_MIN as i128, INT_FAST8_MAX as i128),
            (INT_FAST16_MIN as i128, INT_FAST16_MAX as i128),
            (INT_FAST32_MIN as i128, INT_FAST32_MAX as i128),
            (INT_FAST64_MIN as i128, INT_FAST64_MAX as i128),
            (INTMAX_MIN as i128, INTMAX_MAX as i128),
            (INTPTR_MIN as i128, INTPTR_MAX as i128),
            (PTRDIFF_MIN as i128, PTRDIFF_MAX as i128),
        ] {
            assert_eq!(min, -max - 1);
        }
    }

    #[test]
    fn test_unsigned_max_is_all_ones() {
        for (max, bits) in [
            (UINT8_MAX as u128, 8),
            (UINT16_MAX as u128, 16),
            (UINT32_MAX as u128, 32),
            (UINT64_MAX as u128, 64),
            (UINT_LEAST16_MAX as u128, 16),
            (UINT_FAST8_MAX as u128, 8),
            (UINT_FAST16_MAX as u128, 16),
            (UINT_FAST32_MAX as u128, 32),
            (UINT_FAST64_MAX as u128, 64),
            (UINTMAX_MAX as u128, 64),
        ] {
            assert_eq!(max, (1_u128 << bits) - 1);
        }
    }

    #[test]
    fn test_intmax_is_widest() {
        assert!(INTMAX_MAX as i128 >= INTPTR_MAX as i128);
        assert!(UINTMAX_MAX as u128 >= SIZE_MAX as u128);
        assert_eq!(size_of::<intmax_t>(), size_of::<int64_t>());
    }
}
