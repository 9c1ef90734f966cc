// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fixedmp3_core::errors::{frame_header_error, input_underflow_error, Result};

use crate::common::*;

/// The length in bytes of a MPEG frame header word.
pub const MPEG_HEADER_LEN: usize = 4;

/// Quickly check if a header sync word may be valid.
#[inline]
pub fn check_header(header: u32) -> bool {
    // Version (0x1 is not allowed).
    if (header >> 19) & 0x3 == 0x1 {
        return false;
    }
    // Layer (0x0 is not allowed).
    if (header >> 17) & 0x3 == 0x0 {
        return false;
    }
    // Bitrate (0xf is not allowed).
    if (header >> 12) & 0xf == 0xf {
        return false;
    }
    // Sample rate (0x3 is not allowed).
    if (header >> 10) & 0x3 == 0x3 {
        return false;
    }
    true
}

/// Returns true if the provided frame header word is synced.
#[inline(always)]
pub fn is_frame_header_word_synced(sync: u32) -> bool {
    (sync & 0xffe0_0000) == 0xffe0_0000
}

/// Finds the first byte-aligned frame sync word in `buf`.
///
/// Candidates with a reserved bit-rate or sample rate index are skipped. A candidate is only
/// reported once its first three bytes are available. Returns the offset of the sync word, or
/// `None` if none was found.
pub fn find_sync_word(buf: &[u8]) -> Option<usize> {
    buf.windows(3).position(|w| {
        w[0] == 0xff && (w[1] & 0xe0) == 0xe0 && (w[2] & 0xf0) != 0xf0 && (w[2] & 0x0c) != 0x0c
    })
}

/// Finds the length of a "free" format frame.
///
/// `buf` begins immediately after the side information of the current frame, and `header` holds
/// the first bytes of the current frame's header. The next frame header must match the sync word,
/// version, layer, CRC flag, bit-rate index, and sample rate of the current header.
///
/// Returns the number of main data bytes in the current frame, not counting the padding byte, or
/// `None` if no matching header was found.
pub fn find_free_sync(buf: &[u8], header: &[u8]) -> Option<usize> {
    let mut pos = 0;

    loop {
        let sync = pos + find_sync_word(buf.get(pos..)?)?;

        if buf[sync] == header[0]
            && buf[sync + 1] == header[1]
            && (buf[sync + 2] & 0xfc) == (header[2] & 0xfc)
        {
            // The padding byte, if any, is added back per-frame.
            return if (header[2] >> 1) & 0x1 == 1 { sync.checked_sub(1) } else { Some(sync) };
        }

        pos = sync + 3;
    }
}

/// Parses the frame header at the start of `buf`.
///
/// The fields of the header are at fixed positions, so the header is decoded directly from the
/// header word. If the frame is CRC protected, the CRC word is read from the two bytes following
/// the header word.
pub fn parse_frame_header(buf: &[u8]) -> Result<FrameHeader> {
    if buf.len() < MPEG_HEADER_LEN {
        return input_underflow_error();
    }

    let header = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]);

    // The MPEG audio header is structured as follows:
    //
    // 0b1111_1111 0b111v_vlly 0brrrr_hhpx 0bmmmm_coee
    // where:
    //     vv   = version, ll = layer      , y = crc
    //     rrrr = bitrate, hh = sample rate, p = padding , x  = private bit
    //     mmmm = mode   , c  = copyright  , o = original, ee = emphasis

    if !is_frame_header_word_synced(header) {
        return frame_header_error("mp3: missing frame sync word");
    }

    let version = match (header & 0x18_0000) >> 19 {
        0b00 => MpegVersion::Mpeg2p5,
        0b10 => MpegVersion::Mpeg2,
        0b11 => MpegVersion::Mpeg1,
        _ => return frame_header_error("mp3: invalid MPEG version"),
    };

    let layer = match (header & 0x6_0000) >> 17 {
        0b01 => MpegLayer::Layer3,
        0b10 => MpegLayer::Layer2,
        0b11 => MpegLayer::Layer1,
        _ => return frame_header_error("mp3: invalid MPEG layer"),
    };

    let bitrate_idx = ((header & 0xf000) >> 12) as usize;

    // Index 0 is a "free" bit-rate, where the frame length is inferred from the distance to the
    // next frame. Index 15 is invalid.
    if bitrate_idx == 0xf {
        return frame_header_error("mp3: invalid bit-rate");
    }

    let sample_rate_idx = ((header & 0xc00) >> 10) as usize;

    if sample_rate_idx == 0x3 {
        return frame_header_error("mp3: invalid sample rate");
    }

    let channel_mode = match ((header & 0xc0) >> 6, layer) {
        // Stereo, for layers 1, 2, and 3.
        (0b00, _) => ChannelMode::Stereo,
        // Dual mono, for layers 1, 2, and 3.
        (0b10, _) => ChannelMode::DualMono,
        // Mono, for layers 1, 2, and 3.
        (0b11, _) => ChannelMode::Mono,
        // Joint stereo mode for layer 3 supports a combination of Mid-Side and Intensity Stereo
        // depending on the mode extension bits.
        (_, MpegLayer::Layer3) => ChannelMode::JointStereo(Mode::Layer3 {
            mid_side: header & 0x20 != 0x0,
            intensity: header & 0x10 != 0x0,
        }),
        // Joint stereo mode for layers 1 and 2 only supports Intensity Stereo. The mode extension
        // bits indicate for which sub-bands intensity stereo coding is applied.
        (_, _) => {
            ChannelMode::JointStereo(Mode::Intensity { bound: (1 + ((header & 0x30) >> 4)) << 2 })
        }
    };

    let emphasis = match header & 0x3 {
        0b00 => Emphasis::None,
        0b01 => Emphasis::Fifty15,
        0b10 => Emphasis::Reserved,
        _ => Emphasis::CcitJ17,
    };

    let is_copyrighted = header & 0x8 != 0x0;
    let is_original = header & 0x4 != 0x0;
    let is_private = header & 0x100 != 0x0;
    let has_padding = header & 0x200 != 0x0;

    let crc = if header & 0x1_0000 == 0 {
        if buf.len() < MPEG_HEADER_LEN + 2 {
            return input_underflow_error();
        }
        Some(u16::from_be_bytes([buf[4], buf[5]]))
    }
    else {
        None
    };

    let mut frame = FrameHeader {
        version,
        layer,
        bitrate_idx,
        bitrate: bitrate(version, layer, bitrate_idx),
        sample_rate: sample_rate(version, sample_rate_idx),
        sample_rate_idx,
        channel_mode,
        emphasis,
        is_copyrighted,
        is_original,
        is_private,
        has_padding,
        crc,
        main_data_len: 0,
    };

    // The main data is whatever remains of the frame after the header, CRC, and side info.
    if !frame.is_free_format() {
        let slots = frame_slots(version, sample_rate_idx, bitrate_idx) + usize::from(has_padding);

        frame.main_data_len = slots.saturating_sub(frame.header_len() + frame.side_info_len());
    }

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    use fixedmp3_core::errors::Error;

    #[test]
    fn verify_parse_mpeg1_header() {
        // MPEG-1, layer 3, no CRC, 128 kbps, 44.1 kHz, stereo.
        let header = parse_frame_header(&[0xff, 0xfb, 0x90, 0x00]).unwrap();

        assert_eq!(header.version, MpegVersion::Mpeg1);
        assert_eq!(header.layer, MpegLayer::Layer3);
        assert_eq!(header.bitrate, 128_000);
        assert_eq!(header.sample_rate, 44_100);
        assert_eq!(header.channel_mode, ChannelMode::Stereo);
        assert_eq!(header.n_granules(), 2);
        assert_eq!(header.n_channels(), 2);
        assert_eq!(header.side_info_len(), 32);
        assert_eq!(header.header_len(), 4);
        assert_eq!(header.main_data_len, 417 - 32 - 4);
        assert_eq!(header.output_len(), 2304);
        assert!(header.crc.is_none());

        // Same, with padding, mono, and the private, copyright, and original bits set.
        let header = parse_frame_header(&[0xff, 0xfb, 0x93, 0xcc]).unwrap();

        assert_eq!(header.channel_mode, ChannelMode::Mono);
        assert!(header.has_padding);
        assert!(header.is_private);
        assert!(header.is_copyrighted);
        assert!(header.is_original);
        assert_eq!(header.main_data_len, 418 - 17 - 4);
        assert_eq!(header.output_len(), 1152);
    }

    #[test]
    fn verify_parse_mpeg2_headers() {
        // MPEG-2, layer 3, no CRC, 64 kbps, 22.05 kHz, joint stereo with mid-side.
        let header = parse_frame_header(&[0xff, 0xf3, 0x80, 0x60]).unwrap();

        assert_eq!(header.version, MpegVersion::Mpeg2);
        assert_eq!(header.bitrate, 64_000);
        assert_eq!(header.sample_rate, 22_050);
        assert!(header.is_mid_side_stereo());
        assert!(!header.is_intensity_stereo());
        assert_eq!(header.n_granules(), 1);
        assert_eq!(header.samples_per_granule(), 576);
        assert_eq!(header.main_data_len, 208 - 17 - 4);

        // MPEG-2.5, layer 3, CRC protected, 8 kbps, 8 kHz, mono.
        let header = parse_frame_header(&[0xff, 0xe2, 0x18, 0xc0, 0x12, 0x34]).unwrap();

        assert_eq!(header.version, MpegVersion::Mpeg2p5);
        assert_eq!(header.sample_rate, 8_000);
        assert_eq!(header.bitrate, 8_000);
        assert_eq!(header.crc, Some(0x1234));
        assert_eq!(header.header_len(), 6);
        assert_eq!(header.main_data_len, 72 - 9 - 6);
    }

    #[test]
    fn verify_mode_extension_ignored_unless_joint() {
        // Stereo with mode extension bits set.
        let header = parse_frame_header(&[0xff, 0xfb, 0x90, 0x30]).unwrap();

        assert_eq!(header.channel_mode, ChannelMode::Stereo);
        assert!(!header.is_mid_side_stereo());
        assert!(!header.is_intensity_stereo());
    }

    #[test]
    fn verify_reject_invalid_headers() {
        // No sync.
        assert!(matches!(
            parse_frame_header(&[0xff, 0x7b, 0x90, 0x00]),
            Err(Error::InvalidFrameHeader(_))
        ));
        // Reserved version.
        assert!(parse_frame_header(&[0xff, 0xeb, 0x90, 0x00]).is_err());
        // Reserved layer.
        assert!(parse_frame_header(&[0xff, 0xf9, 0x90, 0x00]).is_err());
        // Bit-rate index 15.
        assert!(parse_frame_header(&[0xff, 0xfb, 0xf0, 0x00]).is_err());
        // Sample rate index 3.
        assert!(parse_frame_header(&[0xff, 0xfb, 0x9c, 0x00]).is_err());
        // Too short.
        assert!(matches!(parse_frame_header(&[0xff, 0xfb]), Err(Error::InputUnderflow)));
        // CRC word missing.
        assert!(matches!(
            parse_frame_header(&[0xff, 0xfa, 0x90, 0x00, 0x00]),
            Err(Error::InputUnderflow)
        ));
    }

    #[test]
    fn verify_free_format_header() {
        let header = parse_frame_header(&[0xff, 0xfb, 0x00, 0x00]).unwrap();

        assert!(header.is_free_format());
        assert_eq!(header.bitrate, 0);
        assert_eq!(header.main_data_len, 0);
    }

    #[test]
    fn verify_check_header() {
        assert!(check_header(0xfffb_9000));
        // Reserved version.
        assert!(!check_header(0xffeb_9000));
        // Reserved layer.
        assert!(!check_header(0xfff9_9000));
        // Invalid bit-rate, then reserved sample rate.
        assert!(!check_header(0xfffb_f000));
        assert!(!check_header(0xfffb_9c00));
    }

    #[test]
    fn verify_find_sync_word() {
        assert_eq!(find_sync_word(&[0x00, 0xff, 0xfb, 0x90, 0x00]), Some(1));

        // Candidates with a reserved bit-rate or sample rate are skipped.
        let buf = [0xff, 0xfb, 0xf0, 0xff, 0xfb, 0x9c, 0xff, 0xfb, 0x90];
        assert_eq!(find_sync_word(&buf), Some(6));

        assert_eq!(find_sync_word(&[0x00, 0x12, 0xff]), None);
        assert_eq!(find_sync_word(&[]), None);
    }

    #[test]
    fn verify_find_free_sync() {
        let header = [0xff, 0xfb, 0x00, 0x00];

        let mut buf = vec![0u8; 100];
        // A sync word with a different sample rate does not match.
        buf[20..23].copy_from_slice(&[0xff, 0xfb, 0x04]);
        buf[60..63].copy_from_slice(&[0xff, 0xfb, 0x02]);

        assert_eq!(find_free_sync(&buf, &header), Some(60));

        // When the current frame is padded, the padding byte is not counted.
        assert_eq!(find_free_sync(&buf, &[0xff, 0xfb, 0x02, 0x00]), Some(59));

        assert_eq!(find_free_sync(&buf[..50], &header), None);
    }
}
