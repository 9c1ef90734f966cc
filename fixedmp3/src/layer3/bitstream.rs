// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fixedmp3_core::errors::{side_info_error, Result};
use fixedmp3_core::io::BitReaderLtr;

use crate::common::*;

use super::{BlockType, GranuleChannel, IntensityScaleFactorInfo, ScaleFactors, SideInfo};

/// Pairs of bit lengths for MPEG version 1 scale factors. For MPEG version 1, there are two
/// possible bit lengths for scale factors: slen1 and slen2. The first N of bands have scale factors
/// of bit length slen1, while the remaining bands have length slen2. The value of the switch point,
/// N, is determined by block type.
///
/// This table is indexed by scalefac_compress.
const SCALE_FACTOR_SLEN: [(u32, u32); 16] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (3, 0),
    (1, 1),
    (1, 2),
    (1, 3),
    (2, 1),
    (2, 2),
    (2, 3),
    (3, 1),
    (3, 2),
    (3, 3),
    (4, 2),
    (4, 3),
];

/// For MPEG version 2, the scale factor bands are split into 4 groups, each with its own scale
/// factor bit length, `slen[0..4]`. The values in this table are the number of bands in each group.
///
/// This table is indexed by the `scalefac_compress` range (0..3 for normal channels, 3..6 for the
/// intensity stereo channel), then the block kind (long, short, mixed). For short blocks the counts
/// are in units of 3 windows, and for mixed blocks the first group counts long bands.
const SCALE_FACTOR_MPEG2_NSFB: [[[usize; 4]; 3]; 6] = [
    // Other channel modes.
    [[6, 5, 5, 5], [3, 3, 3, 3], [6, 3, 3, 3]],
    [[6, 5, 7, 3], [3, 3, 4, 2], [6, 3, 4, 2]],
    [[11, 10, 0, 0], [6, 6, 0, 0], [6, 3, 6, 0]],
    // Intensity stereo channel modes.
    [[7, 7, 7, 0], [4, 4, 4, 0], [6, 5, 4, 0]],
    [[6, 6, 6, 3], [4, 3, 3, 2], [6, 4, 3, 2]],
    [[8, 8, 5, 0], [5, 4, 3, 0], [6, 6, 3, 0]],
];

/// Reads the side_info for a single channel in a granule from a `BitReaderLtr`.
fn read_granule_channel_side_info(
    bs: &mut BitReaderLtr<'_>,
    channel: &mut GranuleChannel,
    header: &FrameHeader,
) {
    channel.part2_3_length = bs.read_bits_leq32(12) as u16;

    // The maximum number of samples in a granule is 576. One big_value decodes to 2 samples,
    // therefore no more than 288 (576/2) big_values are meaningful.
    channel.big_values = (bs.read_bits_leq32(9) as u16).min(288);

    channel.global_gain = bs.read_bits_leq32(8) as u8;

    channel.scalefac_compress =
        if header.is_mpeg1() { bs.read_bits_leq32(4) } else { bs.read_bits_leq32(9) } as u16;

    channel.window_switching = bs.read_bit();

    if channel.window_switching {
        let block_type_enc = bs.read_bits_leq32(2);

        channel.mixed_block = bs.read_bit();

        channel.block_type = match block_type_enc {
            0b01 => BlockType::Start,
            0b10 => BlockType::Short,
            0b11 => BlockType::End,
            _ => BlockType::Long,
        };

        // When window switching is used, there are only two regions, therefore there are only
        // two table selectors.
        channel.table_select[0] = bs.read_bits_leq32(5) as u8;
        channel.table_select[1] = bs.read_bits_leq32(5) as u8;
        channel.table_select[2] = 0;

        for gain in channel.subblock_gain.iter_mut() {
            *gain = bs.read_bits_leq32(3) as u8;
        }

        // Only transitional Long blocks (Start, End) and Short blocks are allowed with window
        // switching. The reserved combination silences the channel instead of failing the frame.
        if block_type_enc == 0b00 {
            channel.big_values = 0;
            channel.part2_3_length = 0;
            channel.scalefac_compress = 0;
        }

        // The region boundaries are implicit when window switching is used.
        channel.region0_count =
            if channel.block_type == BlockType::Short && !channel.mixed_block { 8 } else { 7 };

        channel.region1_count = 20 - channel.region0_count;
    }
    else {
        channel.block_type = BlockType::Long;
        channel.mixed_block = false;

        for select in channel.table_select.iter_mut() {
            *select = bs.read_bits_leq32(5) as u8;
        }

        channel.subblock_gain = [0; 3];
        channel.region0_count = bs.read_bits_leq32(4) as u8;
        channel.region1_count = bs.read_bits_leq32(3) as u8;
    }

    // For MPEG2, preflag is determined implicitly when reading the scale factors.
    channel.preflag = if header.is_mpeg1() { bs.read_bit() } else { false };

    channel.scalefac_scale = bs.read_bit();
    channel.count1table_select = bs.read_bits_leq32(1) as u8;
}

/// Reads the side_info of a MPEG audio frame. The buffer must begin immediately after the frame
/// header (and CRC, if present).
pub(super) fn read_side_info(buf: &[u8], header: &FrameHeader) -> Result<SideInfo> {
    let side_info_len = header.side_info_len();

    if buf.len() < side_info_len {
        return side_info_error("mp3: side_info is truncated");
    }

    let mut bs = BitReaderLtr::new(&buf[..side_info_len]);
    let mut side_info = SideInfo::default();

    // For MPEG version 1...
    if header.is_mpeg1() {
        // First 9 bits is main_data_begin.
        side_info.main_data_begin = bs.read_bits_leq32(9) as u16;

        // Next 3 (>1 channel) or 5 (1 channel) bits are private and should be ignored.
        side_info.private_bits = match header.channel_mode {
            ChannelMode::Mono => bs.read_bits_leq32(5),
            _ => bs.read_bits_leq32(3),
        } as u8;

        // Next four (or 8, if more than one channel) are the SCFSI bits.
        for ch in Channel::iter(header.n_channels()) {
            for scfsi in side_info.scfsi[ch].iter_mut() {
                *scfsi = bs.read_bit();
            }
        }
    }
    // For MPEG version 2...
    else {
        // First 8 bits is main_data_begin.
        side_info.main_data_begin = bs.read_bits_leq32(8) as u16;

        // Next 1 (1 channel) or 2 (>1 channel) bits are private and should be ignored.
        side_info.private_bits = match header.channel_mode {
            ChannelMode::Mono => bs.read_bits_leq32(1),
            _ => bs.read_bits_leq32(2),
        } as u8;
    }

    // Read the side_info for each granule.
    for gr in Granule::iter(header.n_granules()) {
        for ch in Channel::iter(header.n_channels()) {
            read_granule_channel_side_info(&mut bs, &mut side_info.granules[gr][ch], header);
        }
    }

    // The side info must exactly fill its fixed length.
    if bs.bits_read(0) != 8 * side_info_len as i32 {
        return side_info_error("mp3: side_info length mismatch");
    }

    Ok(side_info)
}

/// Reads the scale factors for a single channel in a granule in a MPEG version 1 audio frame.
fn read_scale_factors_mpeg1(
    bs: &mut BitReaderLtr<'_>,
    gr: Granule,
    scfsi: &[bool; 4],
    channel: &GranuleChannel,
    granule0: &ScaleFactors,
    sf: &mut ScaleFactors,
) {
    let (slen1, slen2) = SCALE_FACTOR_SLEN[usize::from(channel.scalefac_compress & 0xf)];

    // Short or Mixed windows...
    if channel.block_type == BlockType::Short {
        // If the block is mixed, there are three total scale factor partitions. The first is a
        // long scale factor partition for bands 0..8 (scalefacs[0..8] with each scale factor
        // being slen1 bits long. Following this is a short scale factor partition covering bands
        // 8..11 with a window of 3 (scalefacs[8..17]) and each scale factoring being slen1 bits
        // long.
        //
        // If a block is not mixed, then there are a total of two scale factor partitions. The
        // first is a short scale factor partition for bands 0..6 with a window length of 3
        // (scalefacs[0..18]) and each scale factor being slen1 bits long.
        let start = if channel.mixed_block {
            for sfb in 0..8 {
                sf.l[sfb] = bs.read_bits_leq32(slen1) as u8;
            }
            3
        }
        else {
            0
        };

        for sfb in start..6 {
            for win in sf.s[sfb].iter_mut() {
                *win = bs.read_bits_leq32(slen1) as u8;
            }
        }

        // The final scale factor partition is always a a short scale factor window. It covers
        // bands 6..12 (scalefacs[18..36]), and each scale factor is slen2 bits long.
        for sfb in 6..12 {
            for win in sf.s[sfb].iter_mut() {
                *win = bs.read_bits_leq32(slen2) as u8;
            }
        }

        // The last band is never transmitted.
        sf.s[12] = [0; 3];
    }
    // Normal (long, start, end) windows...
    else {
        // For normal windows there are 21 scale factor bands. These bands are divivided into four
        // band ranges. Scale factors in the first two band ranges: [0..6], [6..11], have scale
        // factors that are slen1 bits long, while the last two band ranges: [11..16], [16..21]
        // have scale factors that are slen2 bits long.
        const SCALE_FACTOR_BANDS: [(usize, usize); 4] = [(0, 6), (6, 11), (11, 16), (16, 21)];

        for (i, (start, end)) in SCALE_FACTOR_BANDS.iter().enumerate() {
            let slen = if i < 2 { slen1 } else { slen2 };

            // For the second granule, if the scale factor selection information for this channel
            // indicates that the scale factors should be copied from the first granule, do so.
            if gr == Granule::Second && scfsi[i] {
                sf.l[*start..*end].copy_from_slice(&granule0.l[*start..*end]);
            }
            // Otherwise, read the scale factors from the bitstream.
            else {
                for sfb in *start..*end {
                    sf.l[sfb] = bs.read_bits_leq32(slen) as u8;
                }
            }
        }

        // The last two bands are never transmitted.
        sf.l[21] = 0;
        sf.l[22] = 0;
    }
}

/// Reads the scale factors for a single channel in a granule in a MPEG version 2 audio frame.
///
/// Returns the derived value of preflag. If the channel is the intensity stereo coded channel,
/// the group bit lengths are saved in `is_info` for the stereo stage.
fn read_scale_factors_mpeg2(
    bs: &mut BitReaderLtr<'_>,
    is_intensity_stereo_channel: bool,
    channel: &GranuleChannel,
    is_info: &mut IntensityScaleFactorInfo,
    sf: &mut ScaleFactors,
) -> bool {
    let mut sfc = u32::from(channel.scalefac_compress);
    let mut preflag = false;
    let mut intensity_scale = 0;

    let (slen, nsfb_idx) = if !is_intensity_stereo_channel {
        if sfc < 400 {
            ([(sfc >> 4) / 5, (sfc >> 4) % 5, (sfc & 0xf) >> 2, sfc & 0x3], 0)
        }
        else if sfc < 500 {
            sfc -= 400;
            ([(sfc >> 2) / 5, (sfc >> 2) % 5, sfc & 0x3, 0], 1)
        }
        else {
            sfc -= 500;
            preflag = true;

            // The mixed block layout places the long bands in the first group.
            if channel.mixed_block {
                ([sfc / 3, sfc / 3, sfc % 3, 0], 2)
            }
            else {
                ([sfc / 3, sfc % 3, 0, 0], 2)
            }
        }
    }
    else {
        intensity_scale = sfc & 0x1;
        sfc >>= 1;

        if sfc < 180 {
            ([sfc / 36, (sfc % 36) / 6, (sfc % 36) % 6, 0], 3)
        }
        else if sfc < 244 {
            sfc -= 180;
            ([(sfc & 0x3f) >> 4, (sfc & 0xf) >> 2, sfc & 0x3, 0], 4)
        }
        else {
            sfc -= 244;
            ([sfc / 3, sfc % 3, 0, 0], 5)
        }
    };

    let block_idx = match channel.block_type {
        BlockType::Short if channel.mixed_block => 2,
        BlockType::Short => 1,
        _ => 0,
    };

    let nsfb = &SCALE_FACTOR_MPEG2_NSFB[nsfb_idx][block_idx];

    if is_intensity_stereo_channel {
        is_info.intensity_scale = intensity_scale;
        is_info.slen = slen;
        is_info.nr = *nsfb;
    }

    if channel.block_type == BlockType::Short {
        // The long portion of a mixed block is the first group. The short bands then continue from
        // band 3.
        let (mut sfb, first_group) = if channel.mixed_block {
            for l in sf.l[..6].iter_mut() {
                *l = bs.read_bits_leq32(slen[0]) as u8;
            }
            (3, 1)
        }
        else {
            (0, 0)
        };

        for group in first_group..4 {
            for _ in 0..nsfb[group] {
                for win in sf.s[sfb].iter_mut() {
                    *win = bs.read_bits_leq32(slen[group]) as u8;
                }
                sfb += 1;
            }
        }

        sf.s[12] = [0; 3];
    }
    else {
        let mut sfb = 0;

        for group in 0..4 {
            for _ in 0..nsfb[group] {
                sf.l[sfb] = bs.read_bits_leq32(slen[group]) as u8;
                sfb += 1;
            }
        }

        sf.l[21] = 0;
        sf.l[22] = 0;
    }

    preflag
}

/// Reads the scale factors (part2) of a granule channel from the main data, starting at byte `pos`
/// and bit `bit_offset` (0..8) within that byte. At most `bits_avail` bits are available.
///
/// On return `pos` and `bit_offset` point to the first bit following the scale factors, and the
/// number of bits read is returned.
pub(super) fn read_scale_factors(
    main_data: &[u8],
    pos: &mut usize,
    bit_offset: &mut u32,
    bits_avail: usize,
    header: &FrameHeader,
    gr: Granule,
    ch: Channel,
    side_info: &mut SideInfo,
    scale_factors: &mut PerGranule<PerChannel<ScaleFactors>>,
    is_info: &mut IntensityScaleFactorInfo,
) -> usize {
    let start = (*pos).min(main_data.len());
    let n_bytes = (bits_avail + *bit_offset as usize + 7) / 8;
    let end = start.saturating_add(n_bytes).min(main_data.len());

    let mut bs = BitReaderLtr::new(&main_data[start..end]);
    bs.ignore_bits(*bit_offset);

    if header.is_mpeg1() {
        let granule0 = scale_factors[Granule::First][ch];

        read_scale_factors_mpeg1(
            &mut bs,
            gr,
            &side_info.scfsi[ch],
            &side_info.granules[gr][ch],
            &granule0,
            &mut scale_factors[gr][ch],
        );
    }
    else {
        let channel = &mut side_info.granules[gr][ch];

        channel.preflag = read_scale_factors_mpeg2(
            &mut bs,
            ch == Channel::Right && header.is_intensity_stereo(),
            channel,
            is_info,
            &mut scale_factors[gr][ch],
        );
    }

    let bits_used = bs.bits_read(*bit_offset).max(0) as usize;

    *pos += (bits_used + *bit_offset as usize) >> 3;
    *bit_offset = ((bits_used + *bit_offset as usize) & 0x7) as u32;

    bits_used
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::parse_frame_header;

    /// Packs (value, width) pairs MSB first into bytes.
    fn pack(fields: &[(u32, u32)]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut acc = 0u64;
        let mut n = 0u32;

        for &(value, width) in fields {
            acc = (acc << width) | u64::from(value & ((1u64 << width) - 1) as u32);
            n += width;

            while n >= 8 {
                out.push((acc >> (n - 8)) as u8);
                n -= 8;
            }
        }

        if n > 0 {
            out.push((acc << (8 - n)) as u8);
        }

        out
    }

    #[test]
    fn verify_read_side_info_mpeg1_mono() {
        // MPEG1 Layer III, 128 kbps, 44.1 kHz, mono.
        let header = parse_frame_header(&[0xff, 0xfb, 0x90, 0xc0]).unwrap();

        let mut fields = vec![(17, 9), (0, 5), (0b1010, 4)];

        // Granule 0: normal window.
        fields.extend_from_slice(&[
            (100, 12),
            (300, 9),
            (210, 8),
            (5, 4),
            (0, 1),
            (1, 5),
            (7, 5),
            (15, 5),
            (3, 4),
            (2, 3),
            (1, 1),
            (0, 1),
            (1, 1),
        ]);

        // Granule 1: short, non-mixed window.
        fields.extend_from_slice(&[
            (200, 12),
            (10, 9),
            (150, 8),
            (2, 4),
            (1, 1),
            (2, 2),
            (0, 1),
            (16, 5),
            (24, 5),
            (1, 3),
            (2, 3),
            (3, 3),
            (0, 1),
            (1, 1),
            (0, 1),
        ]);

        let buf = pack(&fields);
        assert_eq!(buf.len(), 17);

        let si = read_side_info(&buf, &header).unwrap();

        assert_eq!(si.main_data_begin, 17);
        assert_eq!(si.scfsi[Channel::Left], [true, false, true, false]);

        let g0 = &si.granules[Granule::First][Channel::Left];
        assert_eq!(g0.part2_3_length, 100);
        // Clamped to 288.
        assert_eq!(g0.big_values, 288);
        assert_eq!(g0.global_gain, 210);
        assert_eq!(g0.scalefac_compress, 5);
        assert_eq!(g0.block_type, BlockType::Long);
        assert_eq!(g0.table_select, [1, 7, 15]);
        assert_eq!(g0.region0_count, 3);
        assert_eq!(g0.region1_count, 2);
        assert!(g0.preflag);
        assert!(!g0.scalefac_scale);
        assert_eq!(g0.count1table_select, 1);

        let g1 = &si.granules[Granule::Second][Channel::Left];
        assert_eq!(g1.part2_3_length, 200);
        assert!(g1.window_switching);
        assert_eq!(g1.block_type, BlockType::Short);
        assert!(!g1.mixed_block);
        assert_eq!(g1.table_select, [16, 24, 0]);
        assert_eq!(g1.subblock_gain, [1, 2, 3]);
        assert_eq!(g1.region0_count, 8);
        assert_eq!(g1.region1_count, 12);
        assert!(g1.scalefac_scale);
    }

    #[test]
    fn verify_read_side_info_reserved_block_type() {
        // MPEG2 Layer III, 64 kbps, 22.05 kHz, mono.
        let header = parse_frame_header(&[0xff, 0xf3, 0x80, 0xc0]).unwrap();

        let buf = pack(&[
            (3, 8),
            (0, 1),
            (500, 12),
            (100, 9),
            (180, 8),
            (300, 9),
            (1, 1),
            (0, 2),
            (1, 1),
            (3, 5),
            (5, 5),
            (0, 3),
            (0, 3),
            (0, 3),
            (0, 1),
            (0, 1),
        ]);
        assert_eq!(buf.len(), 9);

        let si = read_side_info(&buf, &header).unwrap();
        let g0 = &si.granules[Granule::First][Channel::Left];

        assert_eq!(si.main_data_begin, 3);
        assert_eq!(g0.block_type, BlockType::Long);
        assert!(g0.mixed_block);
        assert_eq!(g0.part2_3_length, 0);
        assert_eq!(g0.big_values, 0);
        assert_eq!(g0.scalefac_compress, 0);
        assert_eq!(g0.region0_count, 7);
        assert_eq!(g0.region1_count, 13);
    }

    #[test]
    fn verify_read_side_info_truncated() {
        let header = parse_frame_header(&[0xff, 0xfb, 0x90, 0x00]).unwrap();
        assert!(read_side_info(&[0u8; 31], &header).is_err());
        assert!(read_side_info(&[0u8; 32], &header).is_ok());
    }

    #[test]
    fn verify_read_scale_factors_mpeg1_scfsi() {
        let header = parse_frame_header(&[0xff, 0xfb, 0x90, 0xc0]).unwrap();

        let mut side_info = SideInfo::default();
        let mut scale_factors: PerGranule<PerChannel<ScaleFactors>> = Default::default();
        let mut is_info = IntensityScaleFactorInfo::default();

        // slen1 = 1, slen2 = 1.
        side_info.granules[Granule::First][Channel::Left].scalefac_compress = 5;
        side_info.granules[Granule::Second][Channel::Left].scalefac_compress = 5;
        side_info.scfsi[Channel::Left] = [true, false, false, true];

        // Granule 0: 21 one-bit scale factors, all set.
        let data = [0xff, 0xff, 0xf8];
        let mut pos = 0;
        let mut bit_offset = 0;

        let bits = read_scale_factors(
            &data,
            &mut pos,
            &mut bit_offset,
            24,
            &header,
            Granule::First,
            Channel::Left,
            &mut side_info,
            &mut scale_factors,
            &mut is_info,
        );

        assert_eq!(bits, 21);
        assert_eq!((pos, bit_offset), (2, 5));
        assert!(scale_factors[Granule::First][Channel::Left].l[..21].iter().all(|&s| s == 1));
        assert_eq!(scale_factors[Granule::First][Channel::Left].l[21], 0);

        // Granule 1: bands 0..6 and 16..21 are shared, 10 zero bits are read for the rest.
        let data = [0x00, 0x00];
        let mut pos = 0;
        let mut bit_offset = 3;

        let bits = read_scale_factors(
            &data,
            &mut pos,
            &mut bit_offset,
            13,
            &header,
            Granule::Second,
            Channel::Left,
            &mut side_info,
            &mut scale_factors,
            &mut is_info,
        );

        assert_eq!(bits, 10);
        assert_eq!((pos, bit_offset), (1, 5));

        let sf = &scale_factors[Granule::Second][Channel::Left];
        assert!(sf.l[..6].iter().all(|&s| s == 1));
        assert!(sf.l[6..16].iter().all(|&s| s == 0));
        assert!(sf.l[16..21].iter().all(|&s| s == 1));
    }

    #[test]
    fn verify_read_scale_factors_mpeg2_intensity() {
        // MPEG2 Layer III, 64 kbps, 22.05 kHz, joint stereo with intensity stereo.
        let header = parse_frame_header(&[0xff, 0xf3, 0x80, 0x50]).unwrap();
        assert!(header.is_intensity_stereo());

        let mut side_info = SideInfo::default();
        let mut scale_factors: PerGranule<PerChannel<ScaleFactors>> = Default::default();
        let mut is_info = IntensityScaleFactorInfo::default();

        // Right channel, scalefac_compress = 2 * 37 + 1: intensity_scale = 1, slen = [1, 0, 1, 0].
        side_info.granules[Granule::First][Channel::Right].scalefac_compress = 75;

        let data = [0xff; 4];
        let mut pos = 0;
        let mut bit_offset = 0;

        let bits = read_scale_factors(
            &data,
            &mut pos,
            &mut bit_offset,
            32,
            &header,
            Granule::First,
            Channel::Right,
            &mut side_info,
            &mut scale_factors,
            &mut is_info,
        );

        // 7 bands of 1 bit, 7 bands of 0 bits, 7 bands of 1 bit.
        assert_eq!(bits, 14);
        assert_eq!(is_info.intensity_scale, 1);
        assert_eq!(is_info.slen, [1, 0, 1, 0]);
        assert_eq!(is_info.nr, [7, 7, 7, 0]);
        assert!(!side_info.granules[Granule::First][Channel::Right].preflag);

        let sf = &scale_factors[Granule::First][Channel::Right];
        assert!(sf.l[..7].iter().all(|&s| s == 1));
        assert!(sf.l[7..14].iter().all(|&s| s == 0));
        assert!(sf.l[14..21].iter().all(|&s| s == 1));
    }

    #[test]
    fn verify_read_scale_factors_mpeg2_preflag() {
        let header = parse_frame_header(&[0xff, 0xf3, 0x80, 0xc0]).unwrap();

        let mut side_info = SideInfo::default();
        let mut scale_factors: PerGranule<PerChannel<ScaleFactors>> = Default::default();
        let mut is_info = IntensityScaleFactorInfo::default();

        // scalefac_compress = 500 selects the third range with all zero bit lengths.
        side_info.granules[Granule::First][Channel::Left].scalefac_compress = 500;

        let mut pos = 0;
        let mut bit_offset = 0;

        let bits = read_scale_factors(
            &[],
            &mut pos,
            &mut bit_offset,
            0,
            &header,
            Granule::First,
            Channel::Left,
            &mut side_info,
            &mut scale_factors,
            &mut is_info,
        );

        assert_eq!(bits, 0);
        assert!(side_info.granules[Granule::First][Channel::Left].preflag);
    }
}
