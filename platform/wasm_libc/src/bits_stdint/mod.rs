//! The WebAssembly part of `<stdint.h>`, emitted as `<bits/stdint.h>`.
//!
//! The fast 16 and 32 bit types have the same width on `wasm32` and `wasm64`.
//! The pointer-sized types, `ptrdiff_t` and `size_t` follow the addressing
//! mode. Their definitions live in `wasm32` and `wasm64`, of which only
//! the one matching `target_pointer_width` is compiled.
//!
//! Naming both sets in the same build does not compile:
//!
//! ```compile_fail
//! let _ = wasm_libc::bits_stdint::wasm32::SIZE_MAX;
//! let _ = wasm_libc::bits_stdint::wasm64::SIZE_MAX;
//! ```

use crate::stdint::{
    INT16_MAX, INT16_MIN, INT32_MAX, INT32_MIN, UINT16_MAX, UINT32_MAX, int16_t, int32_t,
    uint16_t, uint32_t,
};
use crate::table::{AddressingMode, Category, Limits, resolve};
use wasm_libc_spec_comment::posix_spec;

#[posix_spec("basedefs/stdint.h.html")]
pub type int_fast16_t = int16_t;
#[posix_spec("basedefs/stdint.h.html")]
pub type int_fast32_t = int32_t;
#[posix_spec("basedefs/stdint.h.html")]
pub type uint_fast16_t = uint16_t;
#[posix_spec("basedefs/stdint.h.html")]
pub type uint_fast32_t = uint32_t;

pub const INT_FAST16_MIN: int_fast16_t = INT16_MIN;
pub const INT_FAST32_MIN: int_fast32_t = INT32_MIN;

pub const INT_FAST16_MAX: int_fast16_t = INT16_MAX;
pub const INT_FAST32_MAX: int_fast32_t = INT32_MAX;

pub const UINT_FAST16_MAX: uint_fast16_t = UINT16_MAX;
pub const UINT_FAST32_MAX: uint_fast32_t = UINT32_MAX;

/// Definitions for 64-bit addressing (`wasm64`).
#[cfg(target_pointer_width = "64")]
pub mod wasm64 {
    use crate::stdint::{INT64_MAX, INT64_MIN, UINT64_MAX, int64_t, uint64_t};

    pub type intptr_t = int64_t;
    pub type uintptr_t = uint64_t;
    pub type ptrdiff_t = int64_t;
    pub type size_t = uint64_t;

    pub const INTPTR_MIN: intptr_t = INT64_MIN;
    pub const INTPTR_MAX: intptr_t = INT64_MAX;
    pub const UINTPTR_MAX: uintptr_t = UINT64_MAX;
    pub const PTRDIFF_MIN: ptrdiff_t = INT64_MIN;
    pub const PTRDIFF_MAX: ptrdiff_t = INT64_MAX;
    pub const SIZE_MAX: size_t = UINT64_MAX;
}

/// Definitions for 32-bit addressing (`wasm32`).
#[cfg(target_pointer_width = "32")]
pub mod wasm32 {
    use crate::stdint::{INT32_MAX, INT32_MIN, UINT32_MAX, int32_t, uint32_t};

    pub type intptr_t = int32_t;
    pub type uintptr_t = uint32_t;
    pub type ptrdiff_t = int32_t;
    pub type size_t = uint32_t;

    pub const INTPTR_MIN: intptr_t = INT32_MIN;
    pub const INTPTR_MAX: intptr_t = INT32_MAX;
    pub const UINTPTR_MAX: uintptr_t = UINT32_MAX;
    pub const PTRDIFF_MIN: ptrdiff_t = INT32_MIN;
    pub const PTRDIFF_MAX: ptrdiff_t = INT32_MAX;
    pub const SIZE_MAX: size_t = UINT32_MAX;
}

#[cfg(target_pointer_width = "64")]
pub use wasm64::*;

#[cfg(target_pointer_width = "32")]
pub use wasm32::*;

const fn signed_matches(category: Category, bits: u32, min: i128, max: i128) -> bool {
    let expected = resolve(category, AddressingMode::TARGET);
    expected.bits == bits && expected.min == min && expected.max == max as u128
}

const fn unsigned_matches(category: Category, bits: u32, max: u128) -> bool {
    let expected = resolve(category, AddressingMode::TARGET);
    expected.bits == bits && expected.min == 0 && expected.max == max
}

const fn bits_of<T>() -> u32 {
    (size_of::<T>() * 8) as u32
}

// Every constant must agree with the table resolved for this build.
const _: () = {
    assert!(signed_matches(
        Category::IntFast16,
        bits_of::<int_fast16_t>(),
        INT_FAST16_MIN as i128,
        INT_FAST16_MAX as i128,
    ));
    assert!(signed_matches(
        Category::IntFast32,
        bits_of::<int_fast32_t>(),
        INT_FAST32_MIN as i128,
        INT_FAST32_MAX as i128,
    ));
    assert!(unsigned_matches(
        Category::UintFast16,
        bits_of::<uint_fast16_t>(),
        UINT_FAST16_MAX as u128,
    ));
    assert!(unsigned_matches(
        Category::UintFast32,
        bits_of::<uint_fast32_t>(),
        UINT_FAST32_MAX as u128,
    ));
    assert!(signed_matches(
        Category::Intptr,
        bits_of::<intptr_t>(),
        INTPTR_MIN as i128,
        INTPTR_MAX as i128,
    ));
    assert!(unsigned_matches(
        Category::Uintptr,
        bits_of::<uintptr_t>(),
        UINTPTR_MAX as u128,
    ));
    assert!(signed_matches(
        Category::Ptrdiff,
        bits_of::<ptrdiff_t>(),
        PTRDIFF_MIN as i128,
        PTRDIFF_MAX as i128,
    ));
    assert!(unsigned_matches(
        Category::Size,
        bits_of::<size_t>(),
        SIZE_MAX as u128,
    ));
};

// The pointer-sized types must be layout compatible with Rust's own.
const _: () = {
    assert!(size_of::<intptr_t>() == size_of::<isize>());
    assert!(size_of::<uintptr_t>() == size_of::<usize>());
    assert!(SIZE_MAX as u128 == usize::MAX as u128);
    assert!(Limits::unsigned(usize::BITS).max == SIZE_MAX as u128);
};
