// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fixedmp3_core::fixed::{clip_2n, clz, fast_abs, from_bits, mul_shift_32};

use crate::common::*;

use super::{BlockType, GranuleChannel};

/// Cosine constants for the 9-point IDCT, in Q31.
const C9_0: i32 = 0x6ed9eba1;
const C9_1: i32 = 0x620dbe8b;
const C9_2: i32 = 0x163a1a7e;
const C9_3: i32 = 0x5246dd49;
const C9_4: i32 = 0x7e0e2e32;

/// cos(pi/6) in Q31.
const C3_0: i32 = 0x6ed9eba1;

/// cos((i + 0.5) * pi/6) for i in 0..3, in Q31.
const C6: [i32; 3] = [0x7ba3751d, 0x5a82799a, 0x2120fb83];

/// cos((i + 0.5) * pi/18) for i in 0..9, in Q31.
const C18: [i32; 9] = [
    0x7f834ed0, 0x7ba3751d, 0x7401e4c1, 0x68d9f964, 0x5a82799a, 0x496af3e2, 0x36185aee, 0x2120fb83,
    0x0b27eb5c,
];

/// Anti-alias butterfly coefficients `(cs[i], ca[i])` in Q31.
const ANTIALIAS_CS_CA: [(i32, i32); 8] = [
    (0x6dc253f0, 0xbe2500aau32 as i32),
    (0x70dcebe4, 0xc39e4949u32 as i32),
    (0x798d6e73, 0xd7e33f4au32 as i32),
    (0x7ddd40a7, 0xe8b71176u32 as i32),
    (0x7f6d20b7, 0xf3e4fe2fu32 as i32),
    (0x7fe47e40, 0xfac1a3c7u32 as i32),
    (0x7ffcb263, 0xfe2ebdc6u32 as i32),
    (0x7fffc694, 0xff86c25du32 as i32),
];

/// The sine window for long blocks, pre-combined for the symmetric fast path. With
/// `c(j) = cos((j + 0.5) * pi/36)` and `s(j) = sin((j + 0.5) * pi/36)`, entry `2j` is
/// `c(j) * (s(j) + c(j))` and entry `2j + 1` is `c(j) * (s(j) - c(j))`, in Q30.
const FAST_WINDOW_36: [i32; 18] = from_bits([
    0x42aace8b, 0xc2e92724, 0x47311c28, 0xc95f619a, 0x4a868feb, 0xd0859d8c, 0x4c913b51, 0xd8243ea0,
    0x4d413ccc, 0xe0000000, 0x4c913b51, 0xe7dbc161, 0x4a868feb, 0xef7a6275, 0x47311c28, 0xf6a09e67,
    0x42aace8b, 0xfd16d8dd,
]);

/// IMDCT windows, indexed by block type (long, start, short, end), in Q31 with the IMDCT
/// post-twiddle folded in.
#[rustfmt::skip]
const IMDCT_WINDOWS: [[i32; 36]; 4] = [
    from_bits([
        0x02aace8b, 0x07311c28, 0x0a868fec, 0x0c913b52, 0x0d413ccd, 0x0c913b52, 0x0a868fec, 0x07311c28,
        0x02aace8b, 0xfd16d8dd, 0xf6a09e66, 0xef7a6275, 0xe7dbc161, 0xe0000000, 0xd8243e9f, 0xd0859d8b,
        0xc95f619a, 0xc2e92723, 0xbd553175, 0xb8cee3d8, 0xb5797014, 0xb36ec4ae, 0xb2bec333, 0xb36ec4ae,
        0xb5797014, 0xb8cee3d8, 0xbd553175, 0xc2e92723, 0xc95f619a, 0xd0859d8b, 0xd8243e9f, 0xe0000000,
        0xe7dbc161, 0xef7a6275, 0xf6a09e66, 0xfd16d8dd,
    ]),
    from_bits([
        0x02aace8b, 0x07311c28, 0x0a868fec, 0x0c913b52, 0x0d413ccd, 0x0c913b52, 0x0a868fec, 0x07311c28,
        0x02aace8b, 0xfd16d8dd, 0xf6a09e66, 0xef7a6275, 0xe7dbc161, 0xe0000000, 0xd8243e9f, 0xd0859d8b,
        0xc95f619a, 0xc2e92723, 0xbd44ef14, 0xb831a052, 0xb3aa3837, 0xafb789a4, 0xac6145bb, 0xa9adecdc,
        0xa864491f, 0xad1868f0, 0xb8431f49, 0xc8f42236, 0xdda8e6b1, 0xf47755dc, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000,
    ]),
    from_bits([
        0x07311c28, 0x0d413ccd, 0x07311c28, 0xf6a09e66, 0xe0000000, 0xc95f619a, 0xb8cee3d8, 0xb2bec333,
        0xb8cee3d8, 0xc95f619a, 0xe0000000, 0xf6a09e66, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000,
    ]),
    from_bits([
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x028e9709, 0x04855ec0,
        0x026743a1, 0xfcde2c10, 0xf515dc82, 0xec93e53b, 0xe4c880f8, 0xdd5d0b08, 0xd63510b7, 0xcf5e834a,
        0xc8e6b562, 0xc2da4105, 0xbd553175, 0xb8cee3d8, 0xb5797014, 0xb36ec4ae, 0xb2bec333, 0xb36ec4ae,
        0xb5797014, 0xb8cee3d8, 0xbd553175, 0xc2e92723, 0xc95f619a, 0xd0859d8b, 0xd8243e9f, 0xe0000000,
        0xe7dbc161, 0xef7a6275, 0xf6a09e66, 0xfd16d8dd,
    ]),
];

/// The number of overlap samples saved per subband. The second half of a 36-point IMDCT is
/// symmetric, so only half of it is kept.
const OVERLAP_LEN: usize = BLOCK_SIZE / 2;

/// Guard bits required by the IMDCT stages. Inputs with fewer are scaled down first and
/// rescaled on output.
const IMDCT_GUARD_BITS: i32 = 7;

/// The hybrid filterbank output for one granule and channel, indexed by `[sample][subband]`.
pub(super) type HybridOutput = [[i32; NUM_SUBBANDS]; BLOCK_SIZE];

/// The IMDCT state of a channel that carries over between granules.
pub(super) struct HybridState {
    /// Unwindowed overlap samples, `OVERLAP_LEN` per subband.
    overlap: [i32; NUM_SUBBANDS * OVERLAP_LEN],
    /// The number of subbands with overlap from the previous granule.
    n_prev_blocks: usize,
    /// The block type of the previous granule.
    prev_block_type: BlockType,
    /// The subband where the previous granule switched to its block type's window (mixed
    /// blocks), or 0.
    prev_window_switch: usize,
}

impl HybridState {
    pub fn new() -> Self {
        HybridState {
            overlap: [0; NUM_SUBBANDS * OVERLAP_LEN],
            n_prev_blocks: 0,
            prev_block_type: BlockType::Long,
            prev_window_switch: 0,
        }
    }
}

/// The subband layout of one granule's transform.
struct BlockCount {
    n_long: usize,
    n_total: usize,
    n_prev: usize,
    prev_type: usize,
    prev_window_switch: usize,
    curr_window_switch: usize,
    guard_bits: i32,
}

#[inline(always)]
fn window_index(block_type: BlockType) -> usize {
    match block_type {
        BlockType::Long => 0,
        BlockType::Start => 1,
        BlockType::Short => 2,
        BlockType::End => 3,
    }
}

/// Reduces aliasing across the boundaries of the first `n_butterflies + 1` subbands.
fn antialias(samples: &mut [i32; SAMPLES_PER_GRANULE], n_butterflies: usize) {
    for sb in 1..=n_butterflies {
        let boundary = sb * BLOCK_SIZE;

        for (j, &(cs, ca)) in ANTIALIAS_CS_CA.iter().enumerate() {
            let a = samples[boundary - 1 - j];
            let b = samples[boundary + j];

            samples[boundary - 1 - j] = mul_shift_32(cs, a).wrapping_sub(mul_shift_32(ca, b)) << 1;
            samples[boundary + j] = mul_shift_32(cs, b).wrapping_add(mul_shift_32(ca, a)) << 1;
        }
    }
}

/// Windows the saved overlap of the previous granule for one subband, expanding the 9 saved
/// samples to 18.
fn window_previous(prev: &[i32], prev_win: &mut [i32; 18], prev_type: usize) {
    let win = &IMDCT_WINDOWS[prev_type];

    if prev_type == 2 {
        // Short blocks save samples 6..9 and 12..18 of the concatenated window outputs.
        prev_win[0] = mul_shift_32(win[6], prev[2]) + mul_shift_32(win[0], prev[6]);
        prev_win[1] = mul_shift_32(win[7], prev[1]) + mul_shift_32(win[1], prev[7]);
        prev_win[2] = mul_shift_32(win[8], prev[0]) + mul_shift_32(win[2], prev[8]);
        prev_win[3] = mul_shift_32(win[9], prev[0]) + mul_shift_32(win[3], prev[8]);
        prev_win[4] = mul_shift_32(win[10], prev[1]) + mul_shift_32(win[4], prev[7]);
        prev_win[5] = mul_shift_32(win[11], prev[2]) + mul_shift_32(win[5], prev[6]);
        prev_win[6] = mul_shift_32(win[6], prev[5]);
        prev_win[7] = mul_shift_32(win[7], prev[4]);
        prev_win[8] = mul_shift_32(win[8], prev[3]);
        prev_win[9] = mul_shift_32(win[9], prev[3]);
        prev_win[10] = mul_shift_32(win[10], prev[4]);
        prev_win[11] = mul_shift_32(win[11], prev[5]);
        prev_win[12..].fill(0);
    }
    else {
        let win = &win[18..];

        for (i, &x) in prev[..OVERLAP_LEN].iter().enumerate() {
            prev_win[i] = mul_shift_32(win[i], x);
            prev_win[17 - i] = mul_shift_32(win[17 - i], x);
        }
    }
}

/// Inverts the odd samples of odd subbands and undoes any pre-IMDCT scaling by `es` bits.
///
/// Returns the OR of the rescaled output magnitudes, or 0 if no rescaling was done.
fn frequency_invert_rescale(
    out: &mut HybridOutput,
    sb: usize,
    prev: &mut [i32],
    es: i32,
) -> i32 {
    let invert = sb & 1 == 1;

    if es == 0 {
        if invert {
            for row in out.iter_mut().skip(1).step_by(2) {
                row[sb] = row[sb].wrapping_neg();
            }
        }
        return 0;
    }

    let bits = (31 - es) as u32;
    let mut mags = 0;

    for k in 0..OVERLAP_LEN {
        let even = clip_2n(out[2 * k][sb], bits) << es;
        out[2 * k][sb] = even;
        mags |= fast_abs(even);

        let odd = out[2 * k + 1][sb];
        let odd = clip_2n(if invert { odd.wrapping_neg() } else { odd }, bits) << es;
        out[2 * k + 1][sb] = odd;
        mags |= fast_abs(odd);

        prev[k] = clip_2n(prev[k], bits) << es;
    }

    mags
}

/// 9-point IDCT in place. Requires at least 3 guard bits.
fn idct9(x: &mut [i32]) {
    let (x0, x1, x2, x3, x4, x5, x6, x7, x8) = (x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7], x[8]);

    let a1 = x0 - x6;
    let a2 = x1 - x5;
    let a3 = x1 + x5;
    let a4 = x2 - x4;
    let a5 = x2 + x4;
    let a6 = x2 + x8;
    let a7 = x1 + x7;

    let a8 = a6 - a5;
    let a9 = a3 - a7;
    let a10 = a2 - x7;
    let a11 = a4 - x8;

    let m1 = mul_shift_32(C9_0, x3);
    let m3 = mul_shift_32(C9_0, a10);
    let m5 = mul_shift_32(C9_1, a5);
    let m6 = mul_shift_32(C9_2, a6);
    let m7 = mul_shift_32(C9_1, a8);
    let m8 = mul_shift_32(C9_2, a5);
    let m9 = mul_shift_32(C9_3, a9);
    let m10 = mul_shift_32(C9_4, a7);
    let m11 = mul_shift_32(C9_3, a3);
    let m12 = mul_shift_32(C9_4, a9);

    let a12 = x0 + (x6 >> 1);
    let a13 = a12 + (m1 << 1);
    let a14 = a12 - (m1 << 1);
    let a15 = a1 + (a11 >> 1);
    let a16 = (m5 << 1) + (m6 << 1);
    let a17 = (m7 << 1) - (m8 << 1);
    let a18 = a16 + a17;
    let a19 = (m9 << 1) + (m10 << 1);
    let a20 = (m11 << 1) - (m12 << 1);

    let a21 = a20 - a19;
    let a22 = a13 + a16;
    let a23 = a14 + a16;
    let a24 = a14 + a17;
    let a25 = a13 + a17;
    let a26 = a14 - a18;
    let a27 = a13 - a18;

    x[0] = a22 + a19;
    x[1] = a15 + (m3 << 1);
    x[2] = a24 + a20;
    x[3] = a26 - a21;
    x[4] = a1 - a11;
    x[5] = a27 + a21;
    x[6] = a25 - a20;
    x[7] = a15 - (m3 << 1);
    x[8] = a23 - a19;
}

/// 36-point IMDCT with windowing and overlap-add for the long block in subband `sb`.
///
/// Returns the OR of the output magnitudes.
fn imdct36(
    curr: &[i32],
    prev: &mut [i32],
    out: &mut HybridOutput,
    sb: usize,
    curr_type: usize,
    prev_type: usize,
    guard_bits: i32,
) -> i32 {
    let es = if guard_bits < IMDCT_GUARD_BITS { IMDCT_GUARD_BITS - guard_bits } else { 0 };

    // Split into even and odd halves with the running sums the IDCT factorization needs.
    let mut buf = [0i32; 18];
    let mut acc1 = 0i32;
    let mut acc2 = 0i32;

    for i in (0..9).rev() {
        acc1 = (curr[2 * i + 1] >> es) - acc1;
        acc2 = acc1 - acc2;
        acc1 = (curr[2 * i] >> es) - acc1;
        buf[i + 9] = acc2;
        buf[i] = acc1;

        if es > 0 {
            prev[i] >>= es;
        }
    }

    buf[9] >>= 1;
    buf[0] >>= 1;

    idct9(&mut buf[..9]);
    idct9(&mut buf[9..]);

    let mut mags = 0;

    if prev_type == 0 && curr_type == 0 {
        // Both sine windows, use the symmetry of the window to halve the multiplies.
        for i in 0..9 {
            let xo = mul_shift_32(C18[8 - i], buf[17 - i]);
            let xe = buf[8 - i] >> 2;

            let s = prev[i].wrapping_neg();
            let d = xo.wrapping_sub(xe);
            prev[i] = xe.wrapping_add(xo);
            let t = s.wrapping_sub(d);

            let y_lo = d.wrapping_add(mul_shift_32(t, FAST_WINDOW_36[2 * i]) << 2);
            let y_hi = s.wrapping_add(mul_shift_32(t, FAST_WINDOW_36[2 * i + 1]) << 2);

            out[i][sb] = y_lo;
            out[17 - i][sb] = y_hi;
            mags |= fast_abs(y_lo) | fast_abs(y_hi);
        }
    }
    else {
        let mut prev_win = [0i32; 18];
        window_previous(prev, &mut prev_win, prev_type);

        let win = &IMDCT_WINDOWS[curr_type];

        for i in 0..9 {
            let xo = mul_shift_32(C18[8 - i], buf[17 - i]);
            let xe = buf[8 - i] >> 2;

            let d = xe.wrapping_sub(xo);
            prev[i] = xe.wrapping_add(xo);

            let y_lo = prev_win[i].wrapping_add(mul_shift_32(d, win[i])) << 2;
            let y_hi = prev_win[17 - i].wrapping_add(mul_shift_32(d, win[17 - i])) << 2;

            out[i][sb] = y_lo;
            out[17 - i][sb] = y_hi;
            mags |= fast_abs(y_lo) | fast_abs(y_hi);
        }
    }

    mags | frequency_invert_rescale(out, sb, prev, es)
}

/// 12-point IDCT of one short window. `x` holds the window's 6 samples at a stride of 3.
fn imdct12(x: &[i32], out: &mut [i32]) {
    let (mut x0, mut x1, mut x2, mut x3, mut x4, x5) = (x[0], x[3], x[6], x[9], x[12], x[15]);

    x4 -= x5;
    x3 -= x4;
    x2 -= x3;
    x3 -= x5;
    x1 -= x2;
    x0 -= x1;
    x1 -= x3;

    x0 >>= 1;
    x1 >>= 1;

    let a0 = mul_shift_32(C3_0, x2) << 1;
    let a1 = x0 + (x4 >> 1);
    let a2 = x0 - x4;
    let e0 = a1 + a0;
    let e2 = a2;
    let e4 = a1 - a0;

    let a0 = mul_shift_32(C3_0, x3) << 1;
    let a1 = x1 + (x5 >> 1);
    let a2 = x1 - x5;

    let o1 = mul_shift_32(C6[0], a1 + a0) << 2;
    let o3 = mul_shift_32(C6[1], a2) << 2;
    let o5 = mul_shift_32(C6[2], a1 - a0) << 2;

    out[0] = e0 + o1;
    out[1] = e2 + o3;
    out[2] = e4 + o5;
    out[3] = e4 - o5;
    out[4] = e2 - o3;
    out[5] = e0 - o1;
}

/// Three 12-point IMDCTs with windowing, window concatenation, and overlap-add for the short
/// block in subband `sb`.
///
/// Returns the OR of the output magnitudes.
fn imdct12x3(
    curr: &mut [i32],
    prev: &mut [i32],
    out: &mut HybridOutput,
    sb: usize,
    prev_type: usize,
    guard_bits: i32,
) -> i32 {
    let mut es = 0;

    if guard_bits < IMDCT_GUARD_BITS {
        es = IMDCT_GUARD_BITS - guard_bits;

        for x in curr[..BLOCK_SIZE].iter_mut() {
            *x >>= es;
        }
        for x in prev[..OVERLAP_LEN].iter_mut() {
            *x >>= es;
        }
    }

    let mut buf = [0i32; 18];
    imdct12(&curr[0..], &mut buf[0..6]);
    imdct12(&curr[1..], &mut buf[6..12]);
    imdct12(&curr[2..], &mut buf[12..18]);

    let mut prev_win = [0i32; 18];
    window_previous(prev, &mut prev_win, prev_type);

    let win = &IMDCT_WINDOWS[2];
    let mut mags = 0;

    for i in 0..3 {
        let ys = [
            prev_win[i] << 2,
            prev_win[3 + i] << 2,
            (prev_win[6 + i] << 2).wrapping_add(mul_shift_32(win[i], buf[3 + i])),
            (prev_win[9 + i] << 2).wrapping_add(mul_shift_32(win[3 + i], buf[5 - i])),
            (prev_win[12 + i] << 2).wrapping_add(
                mul_shift_32(win[6 + i], buf[2 - i]).wrapping_add(mul_shift_32(win[i], buf[9 + i])),
            ),
            (prev_win[15 + i] << 2).wrapping_add(
                mul_shift_32(win[9 + i], buf[i]).wrapping_add(mul_shift_32(win[3 + i], buf[11 - i])),
            ),
        ];

        for (k, &y) in ys.iter().enumerate() {
            out[3 * k + i][sb] = y;
            mags |= fast_abs(y);
        }
    }

    // Save the unwindowed second half for the next granule.
    for (p, &x) in prev.iter_mut().zip(buf[6..9].iter().chain(&buf[12..18])) {
        *p = x >> 2;
    }

    mags | frequency_invert_rescale(out, sb, prev, es)
}

/// Runs the IMDCT over every subband of a granule, then windows out any remaining overlap from
/// the previous granule.
///
/// Returns the number of subbands that produced output, and the guard bits of the output.
fn hybrid_transform(
    samples: &mut [i32; SAMPLES_PER_GRANULE],
    overlap: &mut [i32; NUM_SUBBANDS * OVERLAP_LEN],
    out: &mut HybridOutput,
    block_type: BlockType,
    mixed_block: bool,
    bc: &BlockCount,
) -> (usize, i32) {
    let prev_window = |sb: usize| if sb < bc.prev_window_switch { 0 } else { bc.prev_type };

    let mut mags = 0;
    let mut sb = 0;

    // Long blocks. For mixed blocks the long subbands always use the long window.
    while sb < bc.n_long {
        let curr_type = if mixed_block && sb < bc.curr_window_switch {
            0
        }
        else {
            window_index(block_type)
        };

        mags |= imdct36(
            &samples[sb * BLOCK_SIZE..(sb + 1) * BLOCK_SIZE],
            &mut overlap[sb * OVERLAP_LEN..(sb + 1) * OVERLAP_LEN],
            out,
            sb,
            curr_type,
            prev_window(sb),
            bc.guard_bits,
        );
        sb += 1;
    }

    // Short blocks.
    while sb < bc.n_total {
        mags |= imdct12x3(
            &mut samples[sb * BLOCK_SIZE..(sb + 1) * BLOCK_SIZE],
            &mut overlap[sb * OVERLAP_LEN..(sb + 1) * OVERLAP_LEN],
            out,
            sb,
            prev_window(sb),
            bc.guard_bits,
        );
        sb += 1;
    }

    let mut n_blocks_out = sb;

    // The previous granule had more non-zero subbands. Window out and clear its overlap.
    while sb < bc.n_prev {
        let prev = &mut overlap[sb * OVERLAP_LEN..(sb + 1) * OVERLAP_LEN];

        let mut prev_win = [0i32; 18];
        window_previous(prev, &mut prev_win, prev_window(sb));

        let mut non_zero = 0;

        for j in 0..OVERLAP_LEN {
            let y = prev_win[2 * j] << 2;
            non_zero |= y;
            out[2 * j][sb] = y;
            mags |= fast_abs(y);

            let y = prev_win[2 * j + 1] << 2;
            let y = if sb & 1 == 1 { y.wrapping_neg() } else { y };
            non_zero |= y;
            out[2 * j + 1][sb] = y;
            mags |= fast_abs(y);

            prev[j] = 0;
        }

        if non_zero != 0 {
            n_blocks_out = sb;
        }
        sb += 1;
    }

    for row in out.iter_mut() {
        row[sb..].fill(0);
    }

    (n_blocks_out, clz(mags) - 1)
}

/// Performs anti-aliasing and the IMDCT for one channel of a granule. The output is the 18
/// samples of each of the 32 subbands, ready for polyphase synthesis.
///
/// `non_zero_bound` is raised to cover the samples touched by anti-aliasing. Returns the number
/// of guard bits in the output.
pub(super) fn hybrid_synthesis(
    header: &FrameHeader,
    channel: &GranuleChannel,
    samples: &mut [i32; SAMPLES_PER_GRANULE],
    non_zero_bound: &mut usize,
    guard_bits: i32,
    state: &mut HybridState,
    out: &mut HybridOutput,
) -> i32 {
    // The subband where mixed blocks switch from long to short transforms.
    let block_cutoff = header.sfb_bands().l[if header.is_mpeg1() { 8 } else { 6 }] / BLOCK_SIZE;

    let (n_long, n_butterflies) = if channel.block_type != BlockType::Short {
        let n_long = ((*non_zero_bound + 7) / BLOCK_SIZE + 1).min(NUM_SUBBANDS);
        (n_long, n_long - 1)
    }
    else if channel.mixed_block {
        (block_cutoff, block_cutoff - 1)
    }
    else {
        (0, 0)
    };

    // Anti-aliasing is only applied between long blocks.
    antialias(samples, n_butterflies);

    *non_zero_bound = (*non_zero_bound).max(n_butterflies * BLOCK_SIZE + 8);

    let bc = BlockCount {
        n_long,
        n_total: (*non_zero_bound + BLOCK_SIZE - 1) / BLOCK_SIZE,
        n_prev: state.n_prev_blocks,
        prev_type: window_index(state.prev_block_type),
        prev_window_switch: state.prev_window_switch,
        curr_window_switch: if channel.mixed_block { block_cutoff } else { 0 },
        guard_bits,
    };

    let (n_blocks_out, guard_bits_out) = hybrid_transform(
        samples,
        &mut state.overlap,
        out,
        channel.block_type,
        channel.mixed_block,
        &bc,
    );

    state.n_prev_blocks = n_blocks_out;
    state.prev_block_type = channel.block_type;
    state.prev_window_switch = bc.curr_window_switch;

    guard_bits_out
}
