// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fixedmp3_core::fixed::{clz, from_bits, mul_shift_32};

use crate::common::*;

use super::{BlockType, GranuleChannel, ScaleFactors};

/// Additional scaling by sqrt(2) applied to every sample for the 36-point IMDCT.
const IMDCT_SCALE: i32 = 2;

/// sqrt(0.5) in Q31.
const SQRT_HALF: i32 = 0x5a82799a;

/// Pre-emphasis amounts added to the long block scale factors when preflag is set.
const PRE_EMPHASIS: [u8; 22] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 3, 3, 3, 2, 0];

/// 2^(-i/4) for i in 0..4, in Q31.
const POW14: [i32; 4] = [0x7fffffff, 0x6ba27e65, 0x5a82799a, 0x4c1bf829];

/// x^(4/3) * 2^(-i/4) for x in 0..16, one row per i in 0..4.
///
/// Entries 0..4 are Q28 and entries 4..16 are Q25.
#[rustfmt::skip]
const POW43_14: [[i32; 16]; 4] = [
    [
        0x00000000, 0x10000000, 0x285145f3, 0x453a5cdb, 0x0cb2ff53, 0x111989d6, 0x15ce31c8, 0x1ac7f203,
        0x20000000, 0x257106b9, 0x2b16b4a3, 0x30ed74b4, 0x36f23fa5, 0x3d227bd3, 0x437be656, 0x49fc823c,
    ],
    [
        0x00000000, 0x0d744fcd, 0x21e71f26, 0x3a36abd9, 0x0aadc084, 0x0e610e6e, 0x12560c1d, 0x168523cf,
        0x1ae89f99, 0x1f7c03a4, 0x243bae49, 0x29249c67, 0x2e34420f, 0x33686f85, 0x38bf3dff, 0x3e370182,
    ],
    [
        0x00000000, 0x0b504f33, 0x1c823e07, 0x30f39a55, 0x08facd62, 0x0c176319, 0x0f6b3522, 0x12efe2ad,
        0x16a09e66, 0x1a79a317, 0x1e77e301, 0x2298d5b4, 0x26da56fc, 0x2b3a902a, 0x2fb7e7e7, 0x3450f650,
    ],
    [
        0x00000000, 0x09837f05, 0x17f910d7, 0x2929c7a9, 0x078d0dfa, 0x0a2ae661, 0x0cf73154, 0x0fec91cb,
        0x1306fe0a, 0x16434a6c, 0x199ee595, 0x1d17ae3d, 0x20abd76a, 0x2459d551, 0x28204fbb, 0x2bfe1808,
    ],
];

/// x^(4/3) for x in 16..64, in Q23.
#[rustfmt::skip]
const POW43: [i32; 48] = [
    0x1428a2fa, 0x15db1bd6, 0x1796302c, 0x19598d85, 0x1b24e8bb, 0x1cf7fcfa,
    0x1ed28af2, 0x20b4582a, 0x229d2e6e, 0x248cdb55, 0x26832fda, 0x28800000,
    0x2a832287, 0x2c8c70a8, 0x2e9bc5d8, 0x30b0ff99, 0x32cbfd4a, 0x34eca001,
    0x3712ca62, 0x393e6088, 0x3b6f47e0, 0x3da56717, 0x3fe0a5fc, 0x4220ed72,
    0x44662758, 0x46b03e7c, 0x48ff1e87, 0x4b52b3f3, 0x4daaebfd, 0x5007b497,
    0x5268fc62, 0x54ceb29c, 0x5738c721, 0x59a72a59, 0x5c19cd35, 0x5e90a129,
    0x610b9821, 0x638aa47f, 0x660db90f, 0x6894c90b, 0x6b1fc80c, 0x6daeaa0d,
    0x70416360, 0x72d7e8b0, 0x75722ef9, 0x78102b85, 0x7ab1d3ec, 0x7d571e09,
];

// Minimax polynomial approximations of x^(4/3) over [0.5, sqrt(0.5)) and [sqrt(0.5), 1.0).
// Coefficients are scaled by 4, 2, 1, 0.5 and 0.25.
const POLY43_LO: [i32; 5] = from_bits([0x29a0bda9, 0xb02e4828, 0x5957aa1b, 0x236c498d, 0xff581859]);
const POLY43_HI: [i32; 5] = from_bits([0x10852163, 0xd333f6a4, 0x46e9408b, 0x27c2cef0, 0xfef577b4]);

/// 2^(i*4/3) split into an exponent and a Q31 fraction.
const POW2_EXP: [i32; 8] = [14, 13, 11, 10, 9, 7, 6, 5];

const POW2_FRAC: [i32; 8] = [
    0x6597fa94, 0x50a28be6, 0x7fffffff, 0x6597fa94, 0x50a28be6, 0x7fffffff, 0x6597fa94, 0x50a28be6,
];

/// The largest magnitude the Huffman decoder can produce: 15 plus 13 escape bits.
const MAX_HUFFMAN_MAGNITUDE: i32 = 8206;

/// The layout of the critical bands of a dequantized channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(super) enum CriticalBandKind {
    #[default]
    Long,
    Short,
    Mixed,
}

/// The highest non-zero critical bands of a dequantized channel. Used by the stereo stage to
/// determine where intensity stereo coding begins.
#[derive(Copy, Clone, Debug, Default)]
pub(super) struct CriticalBandInfo {
    pub kind: CriticalBandKind,
    /// The highest non-zero short band per window.
    pub end_s: [usize; 3],
    /// The maximum of `end_s`.
    pub end_s_max: usize,
    /// The highest non-zero long band.
    pub end_l: usize,
}

/// Dequantizes a block of sign-magnitude Huffman samples in place.
///
/// Computes `y = x^(4/3) * 2^(25 - scale/4)` for each sample, and returns the OR of all output
/// magnitudes.
fn dequantize_block(buf: &mut [i32], scale: i32) -> i32 {
    let tab16 = &POW43_14[(scale & 0x3) as usize];
    let scalef = POW14[(scale & 0x3) as usize];
    let scalei = (scale >> 2).min(31);

    // Values of 0..4 are the most common, so cache them.
    let shift = (scalei + 3).clamp(0, 31);
    let tab4 = [0, tab16[1] >> shift, tab16[2] >> shift, tab16[3] >> shift];

    let mut mask = 0;

    for sample in buf.iter_mut() {
        let sx = *sample;
        let x = (sx & 0x7fff_ffff).min(MAX_HUFFMAN_MAGNITUDE);

        let y = if x < 4 {
            tab4[x as usize]
        }
        else if x < 16 {
            let y = tab16[x as usize];
            if scalei < 0 {
                y << -scalei
            }
            else {
                y >> scalei
            }
        }
        else {
            let (y, shift) = if x < 64 {
                (mul_shift_32(POW43[(x - 16) as usize], scalef), scalei - 3)
            }
            else {
                // Normalize to [0x40000000, 0x7fffffff].
                let mut x = x << 17;
                let mut shift = 0;

                if x < 0x08000000 {
                    x <<= 4;
                    shift += 4;
                }
                if x < 0x20000000 {
                    x <<= 2;
                    shift += 2;
                }
                if x < 0x40000000 {
                    x <<= 1;
                    shift += 1;
                }

                let coef = if x < SQRT_HALF { &POLY43_LO } else { &POLY43_HI };

                let mut y = coef[0];
                y = mul_shift_32(y, x).wrapping_add(coef[1]);
                y = mul_shift_32(y, x).wrapping_add(coef[2]);
                y = mul_shift_32(y, x).wrapping_add(coef[3]);
                y = mul_shift_32(y, x).wrapping_add(coef[4]);
                y = mul_shift_32(y, POW2_FRAC[shift]) << 3;

                (mul_shift_32(y, scalef), scalei - POW2_EXP[shift])
            };

            // Integer scale, saturating on overflow.
            if shift < 0 {
                let shift = -shift;
                if y > (0x7fff_ffff >> shift) {
                    0x7fff_ffff
                }
                else {
                    y << shift
                }
            }
            else {
                y >> shift
            }
        };

        mask |= y;
        *sample = if sx < 0 { y.wrapping_neg() } else { y };
    }

    mask
}

/// Dequantizes the Huffman decoded samples of a granule channel in place. The output is in Q25.
///
/// Short blocks are reordered from window-major to interleaved order within each band. On return,
/// `non_zero_bound` is raised to the end of the last short band processed, and `cbi` describes the
/// highest non-zero critical bands.
///
/// Returns the number of guard bits in the output.
pub(super) fn requantize(
    header: &FrameHeader,
    channel: &GranuleChannel,
    sf: &ScaleFactors,
    samples: &mut [i32; SAMPLES_PER_GRANULE],
    work: &mut [i32],
    non_zero_bound: &mut usize,
    cbi: &mut CriticalBandInfo,
) -> i32 {
    let bands = header.sfb_bands();

    let (end_l, start_s, end_s) = if channel.block_type == BlockType::Short {
        if channel.mixed_block {
            (if header.is_mpeg1() { 8 } else { 6 }, 3, 13)
        }
        else {
            (0, 0, 13)
        }
    }
    else {
        (22, 13, 13)
    };

    // A scalefac_scale of 0 is a quantizer step of sqrt(2), and 1 is a step of 2.
    let sf_mult = 2 * (i32::from(channel.scalefac_scale) + 1);

    // The mid-side 1/sqrt(2) factor is folded into the global gain.
    let mut global_gain = i32::from(channel.global_gain);
    if header.is_mid_side_stereo() {
        global_gain -= 2;
    }
    global_gain += IMDCT_SCALE;

    let mut cb_max = [0usize; 3];
    let mut gb_mask = 0;
    let mut i = 0;

    // Long bands.
    for cb in 0..end_l {
        let n_samples = bands.l[cb + 1] - bands.l[cb];

        let pre = if channel.preflag { i32::from(PRE_EMPHASIS[cb]) } else { 0 };
        let gain = 210 - global_gain + sf_mult * (i32::from(sf.l[cb]) + pre);

        let non_zero = dequantize_block(&mut samples[i..i + n_samples], gain);
        i += n_samples;

        if non_zero != 0 {
            cb_max[0] = cb;
        }
        gb_mask |= non_zero;

        if i >= *non_zero_bound {
            break;
        }
    }

    *cbi = CriticalBandInfo { kind: CriticalBandKind::Long, end_l: cb_max[0], ..Default::default() };

    if start_s >= 12 {
        return clz(gb_mask) - 1;
    }

    // Short bands.
    cb_max = [start_s; 3];

    for cb in start_s..end_s {
        let n_samples = bands.s[cb + 1] - bands.s[cb];
        let band = &mut samples[i..i + 3 * n_samples];

        work[..3 * n_samples].copy_from_slice(band);

        for (w, window) in work[..3 * n_samples].chunks_exact_mut(n_samples).enumerate() {
            let gain = 210 - global_gain
                + 8 * i32::from(channel.subblock_gain[w])
                + sf_mult * i32::from(sf.s[cb][w]);

            let non_zero = dequantize_block(window, gain);

            if non_zero != 0 {
                cb_max[w] = cb;
            }
            gb_mask |= non_zero;
        }

        // Interleave the windows.
        for j in 0..n_samples {
            band[3 * j] = work[j];
            band[3 * j + 1] = work[n_samples + j];
            band[3 * j + 2] = work[2 * n_samples + j];
        }

        i += 3 * n_samples;

        if i >= *non_zero_bound {
            break;
        }
    }

    *non_zero_bound = i;

    *cbi = CriticalBandInfo {
        kind: if channel.mixed_block { CriticalBandKind::Mixed } else { CriticalBandKind::Short },
        end_s: cb_max,
        end_s_max: cb_max[0].max(cb_max[1]).max(cb_max[2]),
        end_l: cb_max[0],
    };

    clz(gb_mask) - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::parse_frame_header;

    const NEG: i32 = i32::MIN;

    #[test]
    fn verify_dequantize_block_small_values() {
        // With a scale of 0 (2^25), |x|^(4/3) is exact for small integers.
        let mut buf = [0, 1, NEG | 1, 8, NEG | 8];
        let mask = dequantize_block(&mut buf, 0);

        assert_eq!(buf, [0, 1 << 25, -(1 << 25), 16 << 25, -(16 << 25)]);
        assert_eq!(mask, (1 << 25) | (16 << 25));
    }

    #[test]
    fn verify_dequantize_block_monotonic() {
        // The three segments of the power curve must join up without going backwards.
        let mut buf: Vec<i32> = (0..1024).collect();
        dequantize_block(&mut buf, 100);

        for pair in buf.windows(2) {
            assert!(pair[1] >= pair[0], "{} < {}", pair[1], pair[0]);
        }

        // 64^(4/3) = 256 and 27^(4/3) = 81, scaled by 2^(25 - 25).
        assert!((buf[64] - 256).abs() <= 1);
        assert!((buf[27] - 81).abs() <= 1);
    }

    #[test]
    fn verify_dequantize_block_saturates() {
        let mut buf = [MAX_HUFFMAN_MAGNITUDE, NEG | MAX_HUFFMAN_MAGNITUDE];
        dequantize_block(&mut buf, -47);

        assert_eq!(buf, [0x7fff_ffff, -0x7fff_ffff]);
    }

    #[test]
    fn verify_requantize_reorders_short_blocks() {
        // MPEG1, 44.1 kHz: the first short band is 4 samples wide.
        let header = parse_frame_header(&[0xff, 0xfb, 0x90, 0xc0]).unwrap();

        let channel = GranuleChannel {
            block_type: BlockType::Short,
            window_switching: true,
            global_gain: 210 - IMDCT_SCALE as u8,
            ..Default::default()
        };

        let sf = ScaleFactors::default();

        let mut samples = [0i32; SAMPLES_PER_GRANULE];
        samples[0] = 1; // Window 0.
        samples[4] = 2; // Window 1.
        samples[9] = NEG | 1; // Window 2.

        let mut work = [0i32; 3 * 64];
        let mut non_zero_bound = 12;
        let mut cbi = CriticalBandInfo::default();

        let gb = requantize(
            &header,
            &channel,
            &sf,
            &mut samples,
            &mut work,
            &mut non_zero_bound,
            &mut cbi,
        );

        let one = 1 << 25;
        let two = 0x285145f3 >> 3;

        assert_eq!(samples[..12], [one, two, 0, 0, 0, -one, 0, 0, 0, 0, 0, 0]);
        assert_eq!(non_zero_bound, 12);
        assert_eq!(cbi.kind, CriticalBandKind::Short);
        assert_eq!(cbi.end_s, [0, 0, 0]);
        assert_eq!(gb, clz(one | two) - 1);
    }

    #[test]
    fn verify_requantize_long_blocks_stop_at_bound() {
        let header = parse_frame_header(&[0xff, 0xfb, 0x90, 0xc0]).unwrap();

        let channel = GranuleChannel { global_gain: 210 - IMDCT_SCALE as u8, ..Default::default() };
        let sf = ScaleFactors::default();

        let mut samples = [0i32; SAMPLES_PER_GRANULE];
        samples[5] = 1;
        // Beyond the non-zero bound, left untouched.
        samples[40] = 3;

        let mut work = [0i32; 3 * 64];
        let mut non_zero_bound = 8;
        let mut cbi = CriticalBandInfo::default();

        requantize(&header, &channel, &sf, &mut samples, &mut work, &mut non_zero_bound, &mut cbi);

        assert_eq!(samples[5], 1 << 25);
        assert_eq!(samples[40], 3);
        assert_eq!(non_zero_bound, 8);
        assert_eq!(cbi.kind, CriticalBandKind::Long);
        assert_eq!(cbi.end_l, 1);
    }
}
