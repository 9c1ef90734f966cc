// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `fixed` module provides the fixed-point arithmetic primitives shared by the decode stages.
//!
//! All arithmetic wraps on overflow in the same way a two's complement machine would.

/// Multiplies two Q31 (or mixed-format) values and returns the high 32 bits of the 64-bit product.
#[inline(always)]
pub fn mul_shift_32(x: i32, y: i32) -> i32 {
    ((i64::from(x) * i64::from(y)) >> 32) as i32
}

/// Accumulates the 64-bit product of `x` and `y` into `sum`.
#[inline(always)]
pub fn madd_64(sum: i64, x: i32, y: i32) -> i64 {
    sum.wrapping_add(i64::from(x) * i64::from(y))
}

/// Subtracts the 64-bit product of `x` and `y` from `sum`.
#[inline(always)]
pub fn msub_64(sum: i64, x: i32, y: i32) -> i64 {
    sum.wrapping_sub(i64::from(x) * i64::from(y))
}

/// Arithmetic right shift of a 64-bit accumulator, returning the low 32 bits.
#[inline(always)]
pub fn sar_64(x: i64, n: u32) -> i32 {
    (x >> n) as i32
}

/// Absolute value without branching. `i32::MIN` maps to itself.
#[inline(always)]
pub fn fast_abs(x: i32) -> i32 {
    let sign = x >> 31;
    (x ^ sign).wrapping_sub(sign)
}

/// Clips `x` to the signed range of an `n + 1` bit integer, `[-2^n, 2^n - 1]`.
#[inline(always)]
pub fn clip_2n(x: i32, n: u32) -> i32 {
    let sign = x >> 31;
    if sign != (x >> n) {
        sign ^ ((1 << n) - 1)
    }
    else {
        x
    }
}

/// Shifts `x` right by `frac_bits` and saturates the result to 16 bits.
#[inline(always)]
pub fn clip_to_i16(x: i32, frac_bits: u32) -> i16 {
    clip_2n(x >> frac_bits, 15) as i16
}

/// Counts the leading zeros of `x` as a signed value.
#[inline(always)]
pub fn clz(x: i32) -> i32 {
    x.leading_zeros() as i32
}

/// Reinterprets an array of raw 32-bit patterns as signed fixed-point values.
///
/// Coefficient tables are written as the hexadecimal bit pattern of each value. Many have the
/// sign bit set, so they are declared as `u32` and converted at compile time.
pub const fn from_bits<const N: usize>(bits: [u32; N]) -> [i32; N] {
    let mut out = [0; N];
    let mut i = 0;
    while i < N {
        out[i] = bits[i] as i32;
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_mul_shift_32() {
        // 0.5 * 0.5 in Q31 is 0.25 in Q30.
        assert_eq!(mul_shift_32(0x4000_0000, 0x4000_0000), 0x1000_0000);
        assert_eq!(mul_shift_32(-0x4000_0000, 0x4000_0000), -0x1000_0000);
        assert_eq!(mul_shift_32(i32::MAX, 0), 0);
        // Rounds toward negative infinity.
        assert_eq!(mul_shift_32(-1, 1), -1);
    }

    #[test]
    fn verify_clip_2n() {
        assert_eq!(clip_2n(40000, 15), 32767);
        assert_eq!(clip_2n(-40000, 15), -32768);
        assert_eq!(clip_2n(1234, 15), 1234);
        assert_eq!(clip_2n(-1234, 15), -1234);
        assert_eq!(clip_2n(i32::MAX, 30), 0x3fff_ffff);
        assert_eq!(clip_2n(i32::MIN, 30), -0x4000_0000);
    }

    #[test]
    fn verify_clip_to_i16() {
        assert_eq!(clip_to_i16(0x7fff_ffff, 6), i16::MAX);
        assert_eq!(clip_to_i16(-0x7fff_ffff, 6), i16::MIN);
        assert_eq!(clip_to_i16(64 * 100, 6), 100);
        assert_eq!(clip_to_i16(-64 * 100, 6), -100);
    }

    #[test]
    fn verify_fast_abs_and_clz() {
        assert_eq!(fast_abs(-5), 5);
        assert_eq!(fast_abs(5), 5);
        assert_eq!(fast_abs(0), 0);
        assert_eq!(clz(1), 31);
        assert_eq!(clz(0), 32);
        assert_eq!(clz(-1), 0);
    }

    #[test]
    fn verify_from_bits() {
        const T: [i32; 3] = from_bits([0x0000_0001, 0xffff_ffff, 0x8000_0000]);
        assert_eq!(T, [1, -1, i32::MIN]);
    }
}
