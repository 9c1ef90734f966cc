// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fixedmp3_core::fixed::{clz, fast_abs, mul_shift_32};

use crate::common::*;

use super::requantize::{CriticalBandInfo, CriticalBandKind};
use super::{IntensityScaleFactorInfo, ScaleFactors};

/// Left and right gains for an illegal intensity position, indexed by the mid-side flag. The
/// samples pass through as plain stereo (or mid-side) in that case.
const INTENSITY_ILLEGAL_GAINS: [(i32, i32); 2] = [(0x40000000, 0), (0x40000000, 0x40000000)];

/// MPEG1 intensity stereo ratios, `k / (1 + k)` where `k = tan(is_pos * pi / 12)`, in Q30 (Q31 for
/// the mid-side variant which folds in the `sqrt(2)` removed during requantization).
const INTENSITY_RATIOS_MPEG1: [[i32; 7]; 2] = [
    [0x00000000, 0x0d8658ba, 0x176cf5d0, 0x20000000, 0x28930a2f, 0x3279a745, 0x40000000],
    [0x00000000, 0x13207f5c, 0x2120fb83, 0x2d413ccc, 0x39617e16, 0x4761fa3d, 0x5a827999],
];

/// MPEG2 intensity stereo gains, indexed by `[intensity_scale][mid-side flag][is_pos]`.
#[rustfmt::skip]
const INTENSITY_GAINS_MPEG2: [[[i32; 16]; 2]; 2] = [
    [
        [
            0x40000000, 0x35d13f32, 0x2d413ccc, 0x260dfc14, 0x1fffffff, 0x1ae89f99, 0x16a09e66, 0x1306fe0a,
            0x0fffffff, 0x0d744fcc, 0x0b504f33, 0x09837f05, 0x07ffffff, 0x06ba27e6, 0x05a82799, 0x04c1bf82,
        ],
        [
            0x5a827999, 0x4c1bf827, 0x3fffffff, 0x35d13f32, 0x2d413ccc, 0x260dfc13, 0x1fffffff, 0x1ae89f99,
            0x16a09e66, 0x1306fe09, 0x0fffffff, 0x0d744fcc, 0x0b504f33, 0x09837f04, 0x07ffffff, 0x06ba27e6,
        ],
    ],
    [
        [
            0x40000000, 0x2d413ccc, 0x20000000, 0x16a09e66, 0x10000000, 0x0b504f33, 0x08000000, 0x05a82799,
            0x04000000, 0x02d413cc, 0x02000000, 0x016a09e6, 0x01000000, 0x00b504f3, 0x00800000, 0x005a8279,
        ],
        [
            0x5a827999, 0x3fffffff, 0x2d413ccc, 0x1fffffff, 0x16a09e66, 0x0fffffff, 0x0b504f33, 0x07ffffff,
            0x05a82799, 0x03ffffff, 0x02d413cc, 0x01ffffff, 0x016a09e6, 0x00ffffff, 0x00b504f3, 0x007fffff,
        ],
    ],
];

/// Samples are clipped to this magnitude when a channel has no guard bits left before joint
/// stereo processing.
const STEREO_CLIP: i32 = 0x3fffffff;

/// The state of a stereo pair after requantization.
pub(super) struct StereoInput<'a> {
    pub left: &'a mut [i32; SAMPLES_PER_GRANULE],
    pub right: &'a mut [i32; SAMPLES_PER_GRANULE],
    pub non_zero_bound: &'a mut [usize; 2],
    pub guard_bits: &'a mut [i32; 2],
    pub cbi: &'a [CriticalBandInfo; 2],
}

/// Running OR of the output magnitudes of each channel.
#[derive(Default)]
struct Magnitudes {
    left: i32,
    right: i32,
}

/// Applies one intensity gain pair to the sample at `i`. The right channel is reconstructed from
/// the left.
#[inline(always)]
fn intensity_sample(
    left: &mut [i32],
    right: &mut [i32],
    i: usize,
    gains: (i32, i32),
    mags: &mut Magnitudes,
) {
    let (fl, fr) = gains;

    let xr = mul_shift_32(fr, left[i]) << 2;
    right[i] = xr;
    mags.right |= fast_abs(xr);

    let xl = mul_shift_32(fl, left[i]) << 2;
    left[i] = xl;
    mags.left |= fast_abs(xl);
}

/// Mid-side decoding of the first `n_samples` of each channel. The `1/sqrt(2)` factor was already
/// applied during requantization.
fn process_mid_side(left: &mut [i32], right: &mut [i32], n_samples: usize, mags: &mut Magnitudes) {
    for (l, r) in left[..n_samples].iter_mut().zip(&mut right[..n_samples]) {
        let mid = *l;
        let side = *r;

        *l = mid.wrapping_add(side);
        *r = mid.wrapping_sub(side);

        mags.left |= fast_abs(*l);
        mags.right |= fast_abs(*r);
    }
}

/// Gets the intensity gains for a MPEG1 intensity position.
fn intensity_gains_mpeg1(is_pos: u8, mid_side: usize) -> (i32, i32) {
    // Positions 7 and up are illegal. With 4 bit scale factors an encoder can still produce them.
    if is_pos >= 7 {
        INTENSITY_ILLEGAL_GAINS[mid_side]
    }
    else {
        let ratios = &INTENSITY_RATIOS_MPEG1[mid_side];
        (ratios[usize::from(is_pos)], ratios[6] - ratios[usize::from(is_pos)])
    }
}

/// Intensity stereo processing for MPEG1 from the end of the right channel's non-zero bands up to
/// `n_samples`.
fn process_intensity_mpeg1(
    input: &mut StereoInput<'_>,
    bands: &ScaleFactorBands,
    sf: &ScaleFactors,
    n_samples: usize,
    mid_side: usize,
    mags: &mut Magnitudes,
) {
    let [cbi_left, cbi_right] = input.cbi;

    let (start_l, end_l, start_s, end_s, mut i) = if cbi_right.kind == CriticalBandKind::Long {
        let start = cbi_right.end_l + 1;
        (start, cbi_left.end_l + 1, 0, 0, bands.l[start])
    }
    else {
        let start = cbi_right.end_s_max + 1;
        (0, 0, start, cbi_left.end_s_max + 1, 3 * bands.s[start])
    };

    let mut samples_left = n_samples.saturating_sub(i);

    // Long blocks.
    for cb in start_l..end_l {
        if samples_left == 0 {
            break;
        }

        let gains = intensity_gains_mpeg1(sf.l[cb], mid_side);

        let n = (bands.l[cb + 1] - bands.l[cb]).min(samples_left);

        for _ in 0..n {
            intensity_sample(input.left, input.right, i, gains, mags);
            i += 1;
        }

        samples_left -= n;
    }

    // Short blocks, with the 3 windows interleaved.
    for cb in start_s..end_s {
        if samples_left < 3 {
            break;
        }

        let gains: [(i32, i32); 3] =
            [0, 1, 2].map(|w| intensity_gains_mpeg1(sf.s[cb][w], mid_side));

        let n = (bands.s[cb + 1] - bands.s[cb]).min(samples_left / 3);

        for _ in 0..n {
            for (w, &gain) in gains.iter().enumerate() {
                intensity_sample(input.left, input.right, i + w, gain, mags);
            }
            i += 3;
        }

        samples_left -= 3 * n;
    }
}

/// Gets the intensity gains for a MPEG2 intensity position, or the illegal position gains if
/// `is_pos` is the maximum value of its scale factor band's bit length.
fn intensity_gains_mpeg2(
    is_pos: u8,
    illegal_pos: u32,
    table: &[[i32; 16]; 2],
    mid_side: usize,
) -> (i32, i32) {
    if u32::from(is_pos) == illegal_pos {
        INTENSITY_ILLEGAL_GAINS[mid_side]
    }
    else {
        let gains = &table[mid_side];
        let k = ((usize::from(is_pos) + 1) >> 1).min(15);

        if is_pos & 1 == 1 {
            (gains[k], gains[0])
        }
        else {
            (gains[0], gains[k])
        }
    }
}

/// Fills `illegal` with the illegal intensity position of each scale factor band given the band
/// counts and bit lengths of the four scale factor groups.
fn fill_illegal_positions(illegal: &mut [u32], counts: [usize; 4], slen: [u32; 4]) {
    let mut positions = illegal.iter_mut();

    for (&count, &len) in counts.iter().zip(&slen) {
        for pos in positions.by_ref().take(count) {
            *pos = (1 << len) - 1;
        }
    }
}

/// Intensity stereo processing for MPEG2 and 2.5.
fn process_intensity_mpeg2(
    input: &mut StereoInput<'_>,
    bands: &ScaleFactorBands,
    sf: &ScaleFactors,
    is_info: &IntensityScaleFactorInfo,
    n_samples: usize,
    mid_side: usize,
    mags: &mut Magnitudes,
) {
    let table = &INTENSITY_GAINS_MPEG2[(is_info.intensity_scale & 1) as usize];

    let [cbi_left, cbi_right] = input.cbi;

    if cbi_right.kind == CriticalBandKind::Long {
        let mut illegal = [0u32; 23];
        fill_illegal_positions(&mut illegal, is_info.nr, is_info.slen);
        // The last bands have no transmitted scale factor and always use the illegal gains.
        illegal[21] = 1;
        illegal[22] = 1;

        let start = cbi_right.end_l + 1;
        let end = cbi_left.end_l + 1;

        let mut i = bands.l[start];
        let mut samples_left = n_samples.saturating_sub(i);

        for cb in start..end {
            if samples_left == 0 {
                break;
            }

            let gains = intensity_gains_mpeg2(sf.l[cb], illegal[cb], table, mid_side);

            let n = (bands.l[cb + 1] - bands.l[cb]).min(samples_left);

            for _ in 0..n {
                intensity_sample(input.left, input.right, i, gains, mags);
                i += 1;
            }

            samples_left -= n;
        }
    }
    else {
        // For mixed blocks, the long bands of the first group cover the first 3 short bands.
        let mut counts = is_info.nr;
        if cbi_right.kind == CriticalBandKind::Mixed {
            counts[0] = 3;
        }

        let mut illegal = [0u32; 13];
        fill_illegal_positions(&mut illegal, counts, is_info.slen);
        illegal[12] = 1;

        for w in 0..3 {
            let start = cbi_right.end_s[w] + 1;
            let end = cbi_left.end_s[w] + 1;

            let mut i = 3 * bands.s[start] + w;

            for cb in start..end {
                let gains = intensity_gains_mpeg2(sf.s[cb][w], illegal[cb], table, mid_side);

                for _ in bands.s[cb]..bands.s[cb + 1] {
                    intensity_sample(input.left, input.right, i, gains, mags);
                    i += 3;
                }
            }
        }
    }
}

/// Joint stereo processing of a granule.
///
/// The left and right channels are requantized but otherwise untouched. On return, both channels
/// share the same non-zero bound and their guard bits reflect the processed samples.
pub(super) fn process_stereo(
    header: &FrameHeader,
    mut input: StereoInput<'_>,
    sf_right: &ScaleFactors,
    is_info: &IntensityScaleFactorInfo,
) {
    let mid_side = header.is_mid_side_stereo();
    let intensity = header.is_intensity_stereo();

    if !mid_side && !intensity {
        return;
    }

    let bands = header.sfb_bands();

    // Joint stereo needs one guard bit.
    if input.guard_bits[0] < 1 || input.guard_bits[1] < 1 {
        let nzb = *input.non_zero_bound;

        for s in input.left[..nzb[0]].iter_mut() {
            *s = (*s).clamp(-STEREO_CLIP, STEREO_CLIP);
        }
        for s in input.right[..nzb[1]].iter_mut() {
            *s = (*s).clamp(-STEREO_CLIP, STEREO_CLIP);
        }
    }

    let mut mags = Magnitudes::default();

    if mid_side {
        // With intensity stereo, mid-side stops where the right channel's zero region begins.
        let n_samples = if intensity {
            let cbi_right = &input.cbi[1];

            if cbi_right.kind == CriticalBandKind::Long {
                bands.l[cbi_right.end_l + 1]
            }
            else {
                3 * bands.s[cbi_right.end_s_max + 1]
            }
        }
        else {
            input.non_zero_bound[0].max(input.non_zero_bound[1])
        };

        process_mid_side(input.left, input.right, n_samples, &mut mags);
    }

    if intensity {
        let n_samples = input.non_zero_bound[0];
        let ms = usize::from(mid_side);

        if header.is_mpeg1() {
            process_intensity_mpeg1(&mut input, bands, sf_right, n_samples, ms, &mut mags);
        }
        else {
            process_intensity_mpeg2(&mut input, bands, sf_right, is_info, n_samples, ms, &mut mags);
        }
    }

    input.guard_bits[0] = clz(mags.left) - 1;
    input.guard_bits[1] = clz(mags.right) - 1;

    let nzb = input.non_zero_bound[0].max(input.non_zero_bound[1]);
    *input.non_zero_bound = [nzb, nzb];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::parse_frame_header;

    /// MPEG1, 44.1 kHz, joint stereo, with the given mode extension.
    fn joint_stereo_header(mode_ext: u8) -> FrameHeader {
        parse_frame_header(&[0xff, 0xfb, 0x90, 0x40 | (mode_ext << 4)]).unwrap()
    }

    #[test]
    fn verify_mid_side() {
        let header = joint_stereo_header(0b10);

        let mut left = [0i32; SAMPLES_PER_GRANULE];
        let mut right = [0i32; SAMPLES_PER_GRANULE];
        left[..3].copy_from_slice(&[100, -50, 7]);
        right[..3].copy_from_slice(&[20, 10, 0]);
        left[10] = 1000;

        let mut nzb = [12, 4];
        let mut gb = [5, 5];
        let cbi = [CriticalBandInfo::default(); 2];

        let input = StereoInput {
            left: &mut left,
            right: &mut right,
            non_zero_bound: &mut nzb,
            guard_bits: &mut gb,
            cbi: &cbi,
        };

        process_stereo(&header, input, &ScaleFactors::default(), &IntensityScaleFactorInfo::default());

        assert_eq!(left[..3], [120, -40, 7]);
        assert_eq!(right[..3], [80, -60, 7]);
        assert_eq!(left[10], 1000);
        assert_eq!(right[10], 1000);
        assert_eq!(nzb, [12, 12]);
        assert_eq!(gb, [clz(120 | 40 | 7 | 1000) - 1, clz(80 | 60 | 7 | 1000) - 1]);
    }

    #[test]
    fn verify_stereo_noop_for_plain_stereo() {
        let header = parse_frame_header(&[0xff, 0xfb, 0x90, 0x00]).unwrap();

        let mut left = [0i32; SAMPLES_PER_GRANULE];
        let mut right = [0i32; SAMPLES_PER_GRANULE];
        left[0] = 3;
        right[0] = 1;

        let mut nzb = [2, 1];
        let mut gb = [0, 0];
        let cbi = [CriticalBandInfo::default(); 2];

        let input = StereoInput {
            left: &mut left,
            right: &mut right,
            non_zero_bound: &mut nzb,
            guard_bits: &mut gb,
            cbi: &cbi,
        };

        process_stereo(&header, input, &ScaleFactors::default(), &IntensityScaleFactorInfo::default());

        assert_eq!((left[0], right[0]), (3, 1));
        assert_eq!(nzb, [2, 1]);
    }

    #[test]
    fn verify_intensity_mpeg1_long_blocks() {
        let header = joint_stereo_header(0b01);

        // The right channel is zero above band 0, the left is non-zero up to band 2.
        let cbi = [
            CriticalBandInfo { end_l: 2, ..Default::default() },
            CriticalBandInfo { end_l: 0, ..Default::default() },
        ];

        let mut left = [0i32; SAMPLES_PER_GRANULE];
        let mut right = [0i32; SAMPLES_PER_GRANULE];
        left[..12].fill(1 << 20);

        // Band 1 uses position 0 (all left), band 2 uses the illegal position 7.
        let mut sf = ScaleFactors::default();
        sf.l[1] = 0;
        sf.l[2] = 7;

        let mut nzb = [12, 4];
        let mut gb = [6, 6];

        let input = StereoInput {
            left: &mut left,
            right: &mut right,
            non_zero_bound: &mut nzb,
            guard_bits: &mut gb,
            cbi: &cbi,
        };

        process_stereo(&header, input, &sf, &IntensityScaleFactorInfo::default());

        // Band 0 is untouched.
        assert_eq!(left[0], 1 << 20);
        assert_eq!(right[0], 0);

        // Position 0: left gain 0, right gain 1.
        for i in 4..8 {
            assert_eq!((left[i], right[i]), (0, 1 << 20));
        }

        // Illegal position: left passes through, right is zeroed.
        for i in 8..12 {
            assert_eq!((left[i], right[i]), (1 << 20, 0));
        }

        assert_eq!(nzb, [12, 12]);
    }

    #[test]
    fn verify_intensity_mpeg2_gains() {
        let table = &INTENSITY_GAINS_MPEG2[0];

        // Even positions scale the right channel, odd positions scale the left.
        assert_eq!(intensity_gains_mpeg2(0, 7, table, 0), (0x40000000, 0x40000000));
        assert_eq!(intensity_gains_mpeg2(1, 7, table, 0), (0x35d13f32, 0x40000000));
        assert_eq!(intensity_gains_mpeg2(2, 7, table, 0), (0x40000000, 0x35d13f32));
        assert_eq!(intensity_gains_mpeg2(7, 7, table, 1), INTENSITY_ILLEGAL_GAINS[1]);
        assert_eq!(intensity_gains_mpeg2(31, 63, table, 0), (0x04c1bf82, 0x40000000));
    }

    #[test]
    fn verify_fill_illegal_positions() {
        let mut illegal = [0u32; 13];
        fill_illegal_positions(&mut illegal, [3, 4, 4, 2], [1, 0, 3, 2]);

        assert_eq!(illegal, [1, 1, 1, 0, 0, 0, 0, 7, 7, 7, 7, 3, 3]);
    }
}
