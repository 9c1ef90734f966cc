// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polyphase synthesis filterbank.
//!
//! Each of the 18 time slots of a granule is transformed by a 32-point DCT into a double-sized
//! FIFO of filter inputs, which is then convolved with the 512-tap prototype window to produce 32
//! PCM samples per channel.

use fixedmp3_core::fixed::{clip_2n, clip_to_i16, from_bits, madd_64, mul_shift_32, sar_64};

use crate::common::*;

/// The length of one channel's filter input FIFO. The FIFO is written twice so the convolution
/// never has to wrap.
const VBUF_LEN: usize = 17 * 2 * NUM_SUBBANDS;

/// Guard bits required by the DCT. Inputs with fewer are scaled down first and rescaled on
/// output.
const DCT_GUARD_BITS: i32 = 6;

/// The filterbank coefficients have 12 leading sign bits.
const COEF_SHIFT: u32 = 12;

/// Fractional bits left in the convolution output after the 64-bit accumulator is shifted down.
const PCM_FRAC_BITS: u32 = 25 - 2 - 2 - 15;

/// Rounding constant added to the accumulator.
const PCM_ROUND: i64 = 1 << (PCM_FRAC_BITS - 1 + (32 - COEF_SHIFT));

/// Per-output left shifts for the first DCT pass, indexed by `[0..8]` for the odd butterflies
/// and `[8..16]` for the difference outputs.
const DCT_PASS1_SHIFTS: [u32; 16] = [5, 3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 4];

const COS0: [i32; 16] = [
    0x4013c251, 0x40b345bd, 0x41fa2d6d, 0x43f93421, 0x46cc1bc4, 0x4a9d9cf0, 0x4fae3711, 0x56601ea7,
    0x5f4cf6eb, 0x6b6fcf26, 0x7c7d1db3, 0x4ad81a97, 0x5efc8d96, 0x41d95790, 0x6d0b20cf, 0x518522fb,
];

const COS1: [i32; 8] = [
    0x404f4672, 0x42e13c10, 0x48919f44, 0x52cb0e63, 0x64e2402e, 0x43e224a9, 0x6e3c92c1, 0x519e4e04,
];

const COS2: [i32; 4] = [0x4140fb46, 0x4cf8de88, 0x73326bbf, 0x52036742];

const COS3: [i32; 2] = [0x4545e9ef, 0x539eba45];

const COS4_0: i32 = 0x5a82799a;

/// Coefficients for the second DCT pass, per group of 8. Alternate groups are negated.
const DCT_PASS2_COEFS: [[i32; 6]; 4] = [
    [COS2[0], COS2[3], COS3[0], COS2[1], COS2[2], COS3[1]],
    [-COS2[0], -COS2[3], COS3[0], -COS2[1], -COS2[2], COS3[1]],
    [COS2[0], COS2[3], COS3[0], COS2[1], COS2[2], COS3[1]],
    [-COS2[0], -COS2[3], COS3[0], -COS2[1], -COS2[2], COS3[1]],
];

/// The synthesis window, shuffled into the order the convolution reads it. Entries 256..264 are
/// for output sample 16.
#[rustfmt::skip]
const POLY_COEFS: [i32; 264] = from_bits([
    0x00000000, 0x00000074, 0x00000354, 0x0000072c, 0x00001fd4, 0x00005084, 0x000066b8, 0x000249c4,
    0x00049478, 0xfffdb63c, 0x000066b8, 0xffffaf7c, 0x00001fd4, 0xfffff8d4, 0x00000354, 0xffffff8c,
    0xfffffffc, 0x00000068, 0x00000368, 0x00000644, 0x00001f40, 0x00004ad0, 0x00005d1c, 0x00022ce0,
    0x000493c0, 0xfffd9960, 0x00006f78, 0xffffa9cc, 0x0000203c, 0xfffff7e4, 0x00000340, 0xffffff84,
    0xfffffffc, 0x00000060, 0x00000378, 0x0000056c, 0x00001e80, 0x00004524, 0x000052a0, 0x00020ffc,
    0x000491a0, 0xfffd7ca0, 0x00007760, 0xffffa424, 0x00002080, 0xfffff6ec, 0x00000328, 0xffffff74,
    0xfffffffc, 0x00000054, 0x00000384, 0x00000498, 0x00001d94, 0x00003f7c, 0x00004744, 0x0001f32c,
    0x00048e18, 0xfffd6008, 0x00007e70, 0xffff9e8c, 0x0000209c, 0xfffff5ec, 0x00000310, 0xffffff68,
    0xfffffffc, 0x0000004c, 0x0000038c, 0x000003d0, 0x00001c78, 0x000039e4, 0x00003b00, 0x0001d680,
    0x00048924, 0xfffd43ac, 0x000084b0, 0xffff990c, 0x00002094, 0xfffff4e4, 0x000002f8, 0xffffff5c,
    0xfffffffc, 0x00000044, 0x00000390, 0x00000314, 0x00001b2c, 0x0000345c, 0x00002ddc, 0x0001ba04,
    0x000482d0, 0xfffd279c, 0x00008a20, 0xffff93a4, 0x0000206c, 0xfffff3d4, 0x000002dc, 0xffffff4c,
    0xfffffffc, 0x00000040, 0x00000390, 0x00000264, 0x000019b0, 0x00002ef0, 0x00001fd4, 0x00019dc8,
    0x00047b1c, 0xfffd0be8, 0x00008ecc, 0xffff8e64, 0x00002024, 0xfffff2c0, 0x000002c0, 0xffffff3c,
    0xfffffff8, 0x00000038, 0x0000038c, 0x000001bc, 0x000017fc, 0x0000299c, 0x000010e8, 0x000181d8,
    0x0004720c, 0xfffcf09c, 0x000092b4, 0xffff894c, 0x00001fc0, 0xfffff1a4, 0x000002a4, 0xffffff2c,
    0xfffffff8, 0x00000034, 0x00000380, 0x00000120, 0x00001618, 0x00002468, 0x00000118, 0x00016644,
    0x000467a4, 0xfffcd5cc, 0x000095e0, 0xffff8468, 0x00001f44, 0xfffff084, 0x00000284, 0xffffff18,
    0xfffffff8, 0x0000002c, 0x00000374, 0x00000090, 0x00001400, 0x00001f58, 0xfffff068, 0x00014b14,
    0x00045bf0, 0xfffcbb88, 0x00009858, 0xffff7fbc, 0x00001ea8, 0xffffef60, 0x00000268, 0xffffff04,
    0xfffffff8, 0x00000028, 0x0000035c, 0x00000008, 0x000011ac, 0x00001a70, 0xffffded8, 0x00013058,
    0x00044ef8, 0xfffca1d8, 0x00009a1c, 0xffff7b54, 0x00001dfc, 0xffffee3c, 0x0000024c, 0xfffffef0,
    0xfffffff4, 0x00000024, 0x00000340, 0xffffff8c, 0x00000f28, 0x000015b0, 0xffffcc70, 0x0001161c,
    0x000440bc, 0xfffc88d8, 0x00009b3c, 0xffff7734, 0x00001d38, 0xffffed18, 0x0000022c, 0xfffffedc,
    0xfffffff4, 0x00000020, 0x00000320, 0xffffff1c, 0x00000c68, 0x0000111c, 0xffffb92c, 0x0000fc6c,
    0x00043150, 0xfffc708c, 0x00009bb8, 0xffff7368, 0x00001c64, 0xffffebf4, 0x00000210, 0xfffffec4,
    0xfffffff0, 0x0000001c, 0x000002f4, 0xfffffeb4, 0x00000974, 0x00000cb8, 0xffffa518, 0x0000e350,
    0x000420b4, 0xfffc5908, 0x00009b9c, 0xffff6ff4, 0x00001b7c, 0xffffead0, 0x000001f4, 0xfffffeac,
    0xfffffff0, 0x0000001c, 0x000002c4, 0xfffffe58, 0x00000648, 0x00000884, 0xffff9038, 0x0000cad0,
    0x00040ef8, 0xfffc425c, 0x00009af0, 0xffff6ce0, 0x00001a88, 0xffffe9b0, 0x000001d4, 0xfffffe94,
    0xffffffec, 0x00000018, 0x0000028c, 0xfffffe04, 0x000002e4, 0x00000480, 0xffff7a90, 0x0000b2fc,
    0x0003fc28, 0xfffc2c90, 0x000099b8, 0xffff6a3c, 0x00001988, 0xffffe898, 0x000001bc, 0xfffffe7c,
    0x000001a0, 0x0000187c, 0x000097fc, 0x0003e84c, 0xffff6424, 0xffffff4c, 0x00000248, 0xffffffec,
]);

/// The filterbank state shared by both channels.
pub(crate) struct SynthesisState {
    /// Filter input FIFOs. Within each 64 sample row, the left channel uses the first 32 samples
    /// and the right channel the last 32.
    vbuf: [i32; MAX_CHANNELS * VBUF_LEN],
    /// The current write position in the FIFO, modulo 8.
    vindex: usize,
}

impl SynthesisState {
    pub fn new() -> Self {
        SynthesisState { vbuf: [0; MAX_CHANNELS * VBUF_LEN], vindex: 0 }
    }

    pub fn reset(&mut self) {
        self.vbuf.fill(0);
        self.vindex = 0;
    }
}

/// Writes `values` into the FIFO starting at `base` with a stride of one row, duplicating each
/// value 8 samples on. Values are rescaled by `es` bits, saturating.
#[inline(always)]
fn write_column(vbuf: &mut [i32], base: usize, values: &[i32], es: i32) {
    for (k, &value) in values.iter().enumerate() {
        let s = if es > 0 { clip_2n(value, (31 - es) as u32) << es } else { value };
        let d = base + 64 * k;
        vbuf[d] = s;
        vbuf[d + 8] = s;
    }
}

/// 32-point DCT of one time slot, writing the result interleaved into the filter input FIFO of
/// one channel.
fn fdct32(
    input: &[i32; NUM_SUBBANDS],
    vbuf: &mut [i32],
    offset: usize,
    odd: bool,
    guard_bits: i32,
) {
    let mut buf = *input;

    let es = if guard_bits < DCT_GUARD_BITS { DCT_GUARD_BITS - guard_bits } else { 0 };

    if es > 0 {
        for x in buf.iter_mut() {
            *x >>= es;
        }
    }

    // First pass.
    for i in 0..8 {
        let (s1, s2) = (DCT_PASS1_SHIFTS[i], DCT_PASS1_SHIFTS[8 + i]);

        let a0 = buf[i];
        let a3 = buf[31 - i];
        let a1 = buf[15 - i];
        let a2 = buf[16 + i];

        let b0 = a0 + a3;
        let b3 = mul_shift_32(COS0[i], a0 - a3) << 1;
        let b1 = a1 + a2;
        let b2 = mul_shift_32(COS0[15 - i], a1 - a2) << s1;

        buf[i] = b0 + b1;
        buf[15 - i] = mul_shift_32(COS1[i], b0 - b1) << s2;
        buf[16 + i] = b2 + b3;
        buf[31 - i] = mul_shift_32(COS1[i], b3 - b2) << s2;
    }

    // Second pass.
    for (block, c) in buf.chunks_exact_mut(8).zip(&DCT_PASS2_COEFS) {
        let (a0, a7, a3, a4) = (block[0], block[7], block[3], block[4]);

        let b0 = a0 + a7;
        let b7 = mul_shift_32(c[0], a0 - a7) << 1;
        let b3 = a3 + a4;
        let b4 = mul_shift_32(c[1], a3 - a4) << 3;
        let a0 = b0 + b3;
        let a3 = mul_shift_32(c[2], b0 - b3) << 1;
        let a4 = b4 + b7;
        let a7 = mul_shift_32(c[2], b7 - b4) << 1;

        let (a1, a6, a2, a5) = (block[1], block[6], block[2], block[5]);

        let b1 = a1 + a6;
        let b6 = mul_shift_32(c[3], a1 - a6) << 1;
        let b2 = a2 + a5;
        let b5 = mul_shift_32(c[4], a2 - a5) << 1;
        let a1 = b1 + b2;
        let a2 = mul_shift_32(c[5], b1 - b2) << 2;
        let a5 = b5 + b6;
        let a6 = mul_shift_32(c[5], b6 - b5) << 2;

        let b0 = a0 + a1;
        let b1 = mul_shift_32(COS4_0, a0 - a1) << 1;
        let b2 = a2 + a3;
        let b3 = mul_shift_32(COS4_0, a3 - a2) << 1;
        block[0] = b0;
        block[1] = b1;
        block[2] = b2 + b3;
        block[3] = b3;

        let b4 = a4 + a5;
        let b5 = mul_shift_32(COS4_0, a4 - a5) << 1;
        let b6 = a6 + a7;
        let b7 = mul_shift_32(COS4_0, a7 - a6) << 1;
        let b6 = b6 + b7;
        block[4] = b4 + b6;
        block[5] = b5 + b7;
        block[6] = b5 + b6;
        block[7] = b7;
    }

    // The output shuffle has no guard bits to spare.
    let b = |i: usize| buf[i];
    let sum = |i: usize, j: usize| buf[i].wrapping_add(buf[j]);

    // Position of the delayed half of the FIFO.
    let delayed = ((offset + 8 - usize::from(odd)) & 7) + if odd { 0 } else { VBUF_LEN };
    let current = offset + if odd { VBUF_LEN } else { 0 };

    // Sample 0 is always delayed one block.
    write_column(vbuf, 64 * 16 + delayed, &[b(0)], es);

    // Samples 16 to 31.
    let t1 = sum(25, 29);
    let t2 = sum(29, 27);
    let t3 = sum(27, 31);
    let t4 = b(31);

    write_column(
        vbuf,
        current,
        &[
            b(1),
            b(17).wrapping_add(t1),
            sum(9, 13),
            b(21).wrapping_add(t1),
            b(5),
            b(21).wrapping_add(t2),
            sum(13, 11),
            b(19).wrapping_add(t2),
            b(3),
            b(19).wrapping_add(t3),
            sum(11, 15),
            b(23).wrapping_add(t3),
            b(7),
            b(23).wrapping_add(t4),
            b(15),
            t4,
        ],
        es,
    );

    // Samples 16 down to 1.
    let t5 = sum(30, 25);
    let t6 = sum(26, 30);
    let t7 = sum(28, 26);
    let t8 = sum(24, 28);

    write_column(
        vbuf,
        16 + delayed,
        &[
            b(1),
            b(17).wrapping_add(t5),
            sum(14, 9),
            b(22).wrapping_add(t5),
            b(6),
            b(22).wrapping_add(t6),
            sum(10, 14),
            b(18).wrapping_add(t6),
            b(2),
            b(18).wrapping_add(t7),
            sum(12, 10),
            b(20).wrapping_add(t7),
            b(4),
            b(20).wrapping_add(t8),
            sum(8, 12),
            b(16).wrapping_add(t8),
        ],
        es,
    );
}

#[inline(always)]
fn to_pcm(sum: i64) -> i16 {
    clip_to_i16(sar_64(sum, 32 - COEF_SHIFT), PCM_FRAC_BITS)
}

/// Convolves the filter input FIFO with the synthesis window to produce 32 interleaved PCM
/// samples for each of `n_channels` channels. `vbuf` starts at the current FIFO position.
fn polyphase(pcm: &mut [i16], n_channels: usize, vbuf: &[i32]) {
    for ch in 0..n_channels {
        let vb = &vbuf[32 * ch..];
        let out = |k: usize| n_channels * k + ch;

        // Sample 0.
        let mut sum = PCM_ROUND;
        for j in 0..8 {
            sum = madd_64(sum, vb[j], POLY_COEFS[2 * j]);
            sum = madd_64(sum, vb[23 - j], -POLY_COEFS[2 * j + 1]);
        }
        pcm[out(0)] = to_pcm(sum);

        // Sample 16.
        let mut sum = PCM_ROUND;
        for j in 0..8 {
            sum = madd_64(sum, vb[64 * 16 + j], POLY_COEFS[256 + j]);
        }
        pcm[out(16)] = to_pcm(sum);

        // Samples 1 to 15, and 31 down to 17, share the same inputs.
        for k in 1..16 {
            let coefs = &POLY_COEFS[16 * k..16 * (k + 1)];
            let row = &vb[64 * k..];

            let mut sum1 = PCM_ROUND;
            let mut sum2 = PCM_ROUND;

            for j in 0..8 {
                let (c1, c2) = (coefs[2 * j], coefs[2 * j + 1]);
                let (lo, hi) = (row[j], row[23 - j]);

                sum1 = madd_64(sum1, lo, c1);
                sum2 = madd_64(sum2, lo, c2);
                sum1 = madd_64(sum1, hi, -c2);
                sum2 = madd_64(sum2, hi, c1);
            }

            pcm[out(k)] = to_pcm(sum1);
            pcm[out(32 - k)] = to_pcm(sum2);
        }
    }
}

/// Synthesizes one granule of interleaved PCM from the hybrid filterbank output of each channel.
///
/// `pcm` must hold `18 * 32 * n_channels` samples.
pub(crate) fn synthesis(
    state: &mut SynthesisState,
    n_channels: usize,
    input: &[[[i32; NUM_SUBBANDS]; BLOCK_SIZE]],
    guard_bits: &[i32],
    pcm: &mut [i16],
) {
    let frame_len = NUM_SUBBANDS * n_channels;

    for (b, out) in pcm.chunks_exact_mut(frame_len).take(BLOCK_SIZE).enumerate() {
        let odd = b & 1 == 1;

        for ch in 0..n_channels {
            fdct32(
                &input[ch][b],
                &mut state.vbuf[32 * ch..],
                state.vindex,
                odd,
                guard_bits[ch],
            );
        }

        let start = state.vindex + if odd { VBUF_LEN } else { 0 };
        polyphase(out, n_channels, &state.vbuf[start..]);

        state.vindex = (state.vindex + 8 - usize::from(odd)) & 7;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_synthesis_silence() {
        let mut state = SynthesisState::new();

        let input = [[[0i32; NUM_SUBBANDS]; BLOCK_SIZE]; 2];
        let mut pcm = [1i16; 2 * SAMPLES_PER_GRANULE];

        synthesis(&mut state, 2, &input, &[31, 31], &mut pcm);

        assert!(pcm.iter().all(|&s| s == 0));
        // 9 odd time slots each step the FIFO back by one.
        assert_eq!(state.vindex, 7);
    }

    #[test]
    fn verify_synthesis_produces_output() {
        let mut state = SynthesisState::new();

        // A constant in the lowest subband of the left channel only.
        let mut input = [[[0i32; NUM_SUBBANDS]; BLOCK_SIZE]; 2];
        for row in input[0].iter_mut() {
            row[0] = 1 << 22;
        }

        let mut pcm = [0i16; 2 * SAMPLES_PER_GRANULE];

        for _ in 0..2 {
            synthesis(&mut state, 2, &input, &[8, 31], &mut pcm);
        }

        assert!(pcm.iter().step_by(2).any(|&s| s != 0));
        assert!(pcm.iter().skip(1).step_by(2).all(|&s| s == 0));
    }

    #[test]
    fn verify_synthesis_mono_layout() {
        let mut state = SynthesisState::new();

        let mut input = [[[0i32; NUM_SUBBANDS]; BLOCK_SIZE]; 1];
        for row in input[0].iter_mut() {
            row[0] = 1 << 22;
        }

        let mut mono = [0i16; SAMPLES_PER_GRANULE];
        synthesis(&mut state, 1, &input, &[8], &mut mono);

        // The same input on the left of a stereo pair gives the same samples.
        let mut state = SynthesisState::new();

        let mut stereo_input = [[[0i32; NUM_SUBBANDS]; BLOCK_SIZE]; 2];
        stereo_input[0] = input[0];

        let mut stereo = [0i16; 2 * SAMPLES_PER_GRANULE];
        synthesis(&mut state, 2, &stereo_input, &[8, 31], &mut stereo);

        let left: Vec<i16> = stereo.iter().step_by(2).copied().collect();
        assert_eq!(&mono[..], &left[..]);
    }
}
