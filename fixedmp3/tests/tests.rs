// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fixedmp3::{DecoderOptions, Error, Mp3Decoder};

use rand::{Rng, SeedableRng};

/// MPEG-1, layer 3, no CRC, 128 kbps, 44.1 kHz, mono. 417 bytes per frame.
const HEADER_128K: [u8; 4] = [0xff, 0xfb, 0x90, 0xc0];
const FRAME_LEN_128K: usize = 417;

/// MPEG-1, layer 3, no CRC, 32 kbps, 44.1 kHz, mono. 104 bytes per frame.
const HEADER_32K: [u8; 4] = [0xff, 0xfb, 0x10, 0xc0];
const FRAME_LEN_32K: usize = 104;

/// MPEG-1, layer 3, no CRC, free format, 44.1 kHz, mono.
const HEADER_FREE: [u8; 4] = [0xff, 0xfb, 0x00, 0xc0];

const SIDE_INFO_LEN: usize = 17;

const SAMPLES_PER_FRAME: usize = 1152;

/// Packs fields MSB first.
#[derive(Default)]
struct BitWriter {
    buf: Vec<u8>,
    acc: u64,
    n_bits: u32,
}

impl BitWriter {
    fn put(&mut self, value: u32, width: u32) {
        self.acc = (self.acc << width) | u64::from(value & ((1u64 << width) - 1) as u32);
        self.n_bits += width;

        while self.n_bits >= 8 {
            self.buf.push((self.acc >> (self.n_bits - 8)) as u8);
            self.n_bits -= 8;
        }
    }

    fn into_bytes(mut self) -> Vec<u8> {
        if self.n_bits > 0 {
            self.buf.push((self.acc << (8 - self.n_bits)) as u8);
        }
        self.buf
    }
}

/// The side info of one granule of a mono, long block, MPEG-1 frame.
#[derive(Copy, Clone, Default)]
struct GranuleSideInfo {
    part2_3_length: u32,
    big_values: u32,
    global_gain: u32,
    table_select: [u32; 3],
    region0_count: u32,
    region1_count: u32,
}

impl GranuleSideInfo {
    /// One pair coded with table 1 as the codeword `010`, decoding to the samples (1, 0).
    fn tone() -> Self {
        GranuleSideInfo {
            part2_3_length: 3,
            big_values: 1,
            global_gain: 220,
            table_select: [1, 0, 0],
            region0_count: 7,
            region1_count: 0,
        }
    }
}

/// The main data of a frame with two `GranuleSideInfo::tone()` granules.
const TONE_MAIN_DATA: [u8; 1] = [0b0100_1000];

fn side_info(main_data_begin: u32, granules: [GranuleSideInfo; 2]) -> Vec<u8> {
    let mut bw = BitWriter::default();

    bw.put(main_data_begin, 9);
    // Private bits, then scfsi.
    bw.put(0, 5);
    bw.put(0, 4);

    for gr in granules.iter() {
        bw.put(gr.part2_3_length, 12);
        bw.put(gr.big_values, 9);
        bw.put(gr.global_gain, 8);
        // scalefac_compress, then no window switching.
        bw.put(0, 4);
        bw.put(0, 1);
        for &select in gr.table_select.iter() {
            bw.put(select, 5);
        }
        bw.put(gr.region0_count, 4);
        bw.put(gr.region1_count, 3);
        // preflag, scalefac_scale, count1table_select.
        bw.put(0, 3);
    }

    let buf = bw.into_bytes();
    assert_eq!(buf.len(), SIDE_INFO_LEN);
    buf
}

fn frame(header: [u8; 4], frame_len: usize, side_info: &[u8], main_data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(frame_len);
    buf.extend_from_slice(&header);
    buf.extend_from_slice(side_info);
    buf.extend_from_slice(main_data);
    buf.resize(frame_len, 0);
    buf
}

fn silent_frame() -> Vec<u8> {
    frame(HEADER_128K, FRAME_LEN_128K, &[], &[])
}

fn tone_frame() -> Vec<u8> {
    let si = side_info(0, [GranuleSideInfo::tone(); 2]);
    frame(HEADER_128K, FRAME_LEN_128K, &si, &TONE_MAIN_DATA)
}

/// Decodes each frame in turn, expecting success, and returns the concatenated output.
fn decode_all(decoder: &mut Mp3Decoder, frames: &[Vec<u8>]) -> Vec<i16> {
    let mut pcm = Vec::new();

    for frame in frames {
        let mut out = [0i16; SAMPLES_PER_FRAME];
        let mut bytes_left = frame.len();

        let n_samples = decoder.decode_frame(frame, &mut bytes_left, &mut out).unwrap();

        assert_eq!(bytes_left, 0);
        pcm.extend_from_slice(&out[..n_samples]);
    }

    pcm
}

#[test]
fn verify_silent_frames() {
    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();

    let frames = vec![silent_frame(); 3];

    let pcm = decode_all(&mut decoder, &frames);

    assert_eq!(pcm.len(), 3 * SAMPLES_PER_FRAME);
    assert!(pcm.iter().all(|&s| s == 0));

    let info = decoder.last_frame_info();
    assert_eq!(info.sample_rate, 44_100);
    assert_eq!(info.n_channels, 1);
    assert_eq!(info.output_samples, SAMPLES_PER_FRAME);
}

#[test]
fn verify_consecutive_frames_in_one_buffer() {
    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();

    let mut buf = silent_frame();
    buf.extend_from_slice(&tone_frame());

    let mut bytes_left = buf.len();
    let mut out = [0i16; SAMPLES_PER_FRAME];

    assert_eq!(decoder.decode_frame(&buf, &mut bytes_left, &mut out).unwrap(), SAMPLES_PER_FRAME);
    assert_eq!(bytes_left, FRAME_LEN_128K);

    let offset = buf.len() - bytes_left;
    assert_eq!(
        decoder.decode_frame(&buf[offset..], &mut bytes_left, &mut out).unwrap(),
        SAMPLES_PER_FRAME
    );
    assert_eq!(bytes_left, 0);
}

#[test]
fn verify_determinism() {
    let frames = vec![tone_frame(), tone_frame(), silent_frame()];

    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();
    let first = decode_all(&mut decoder, &frames);

    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();
    let second = decode_all(&mut decoder, &frames);

    assert_eq!(first, second);
    assert!(first.iter().any(|&s| s != 0));

    // After a reset, the decoder behaves as if newly instantiated.
    decoder.reset();
    let third = decode_all(&mut decoder, &frames);

    assert_eq!(first, third);
}

#[test]
fn verify_overlap_continuity() {
    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();
    let alone = decode_all(&mut decoder, &[tone_frame()]);

    decoder.reset();
    let both = decode_all(&mut decoder, &[tone_frame(), tone_frame()]);

    // The second frame carries the tail of the first.
    assert_eq!(both.len(), 2 * SAMPLES_PER_FRAME);
    assert_eq!(both[..SAMPLES_PER_FRAME], alone[..]);
    assert_ne!(both[SAMPLES_PER_FRAME..], alone[..]);
}

#[test]
fn verify_reservoir_spanning() {
    // The tone's main data lives in the final byte of the preceding frame.
    let mut spanned = silent_frame();
    spanned[FRAME_LEN_128K - 1] = TONE_MAIN_DATA[0];

    let si = side_info(1, [GranuleSideInfo::tone(); 2]);
    let referencing = frame(HEADER_128K, FRAME_LEN_128K, &si, &[]);

    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();
    let with_reservoir = decode_all(&mut decoder, &[spanned, referencing]);

    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();
    let without_reservoir = decode_all(&mut decoder, &[silent_frame(), tone_frame()]);

    assert_eq!(with_reservoir, without_reservoir);
    assert!(with_reservoir.iter().any(|&s| s != 0));
}

#[test]
fn verify_main_data_underflow() {
    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();

    // Each frame references the largest possible amount of data from previous frames, but only
    // carries 83 bytes of its own.
    let si = side_info(511, [GranuleSideInfo::default(); 2]);
    let frame = frame(HEADER_32K, FRAME_LEN_32K, &si, &[]);

    let mut out = [1i16; SAMPLES_PER_FRAME];

    // The first frames are skipped silently, and the output is untouched.
    for _ in 0..3 {
        let mut bytes_left = frame.len();
        assert_eq!(decoder.decode_frame(&frame, &mut bytes_left, &mut out).unwrap(), 0);
        assert_eq!(bytes_left, 0);
    }

    assert!(out.iter().all(|&s| s == 1));

    // Then, an error is returned until the reservoir holds enough data.
    for _ in 3..7 {
        let mut bytes_left = frame.len();
        assert_eq!(decoder.decode_frame_status(&frame, &mut bytes_left, &mut out), -2);
        assert_eq!(bytes_left, 0);
        assert!(out.iter().all(|&s| s == 0));
    }

    let mut bytes_left = frame.len();
    assert_eq!(
        decoder.decode_frame(&frame, &mut bytes_left, &mut out).unwrap(),
        SAMPLES_PER_FRAME
    );
}

#[test]
fn verify_main_data_underflow_limit() {
    let opts = DecoderOptions { max_underflow_frames: 1, ..Default::default() };
    let mut decoder = Mp3Decoder::try_new(opts).unwrap();

    let si = side_info(100, [GranuleSideInfo::default(); 2]);
    let frame = frame(HEADER_128K, FRAME_LEN_128K, &si, &[]);

    let mut out = [0i16; SAMPLES_PER_FRAME];
    let mut bytes_left = frame.len();

    match decoder.decode_frame(&frame, &mut bytes_left, &mut out) {
        Err(Error::MainDataUnderflow) => (),
        other => panic!("unexpected result {:?}", other),
    }

    // The frame's main data was retained, so the same frame now decodes.
    let mut bytes_left = frame.len();
    assert!(decoder.decode_frame(&frame, &mut bytes_left, &mut out).is_ok());
}

#[test]
fn verify_free_format() {
    const FREE_FRAME_LEN: usize = 300;

    let first = frame(HEADER_FREE, FREE_FRAME_LEN, &[], &[]);
    let second = frame(HEADER_FREE, FREE_FRAME_LEN, &[], &[]);

    let mut buf = first.clone();
    buf.extend_from_slice(&second);

    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();
    let mut out = [0i16; SAMPLES_PER_FRAME];

    // The length of the first frame is found from the position of the second.
    let mut bytes_left = buf.len();
    assert_eq!(decoder.decode_frame(&buf, &mut bytes_left, &mut out).unwrap(), SAMPLES_PER_FRAME);
    assert_eq!(bytes_left, FREE_FRAME_LEN);

    let info = decoder.last_frame_info();
    assert_eq!(info.bitrate, (FREE_FRAME_LEN * 44_100 * 8 / SAMPLES_PER_FRAME) as u32);

    // The length is reused for following frames, even without a following frame.
    let mut bytes_left = second.len();
    assert_eq!(
        decoder.decode_frame(&second, &mut bytes_left, &mut out).unwrap(),
        SAMPLES_PER_FRAME
    );
    assert_eq!(bytes_left, 0);

    assert_eq!(decoder.next_frame_info(&second).unwrap().bitrate, info.bitrate);
}

#[test]
fn verify_free_format_sync_not_found() {
    let frame = frame(HEADER_FREE, 300, &[], &[]);

    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();
    let mut out = [1i16; SAMPLES_PER_FRAME];
    let mut bytes_left = frame.len();

    assert_eq!(decoder.decode_frame_status(&frame, &mut bytes_left, &mut out), -3);
    assert_eq!(bytes_left, frame.len());
    assert!(out.iter().all(|&s| s == 0));
}

#[test]
fn verify_invalid_table_select_is_contained() {
    let bad = GranuleSideInfo {
        part2_3_length: 16,
        big_values: 1,
        table_select: [4, 0, 0],
        ..Default::default()
    };
    let si = side_info(0, [bad; 2]);
    let corrupt = frame(HEADER_128K, FRAME_LEN_128K, &si, &[0xff, 0xff]);

    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();
    let mut out = [1i16; SAMPLES_PER_FRAME];

    let mut bytes_left = corrupt.len();
    assert_eq!(decoder.decode_frame_status(&corrupt, &mut bytes_left, &mut out), -9);
    assert_eq!(bytes_left, 0);
    assert!(out.iter().all(|&s| s == 0));

    // The next frame decodes normally.
    let pcm = decode_all(&mut decoder, &[silent_frame()]);
    assert_eq!(pcm.len(), SAMPLES_PER_FRAME);
    assert!(pcm.iter().all(|&s| s == 0));
}

#[test]
fn verify_part2_3_length_exceeds_main_data() {
    // The frame claims more Huffman bits than the main data holds.
    let bad = GranuleSideInfo {
        part2_3_length: 4000,
        big_values: 1,
        table_select: [1, 0, 0],
        ..Default::default()
    };
    let si = side_info(0, [bad; 2]);
    let corrupt = frame(HEADER_128K, FRAME_LEN_128K, &si, &[]);

    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();
    let mut out = [0i16; SAMPLES_PER_FRAME];
    let mut bytes_left = corrupt.len();

    assert_eq!(decoder.decode_frame_status(&corrupt, &mut bytes_left, &mut out), -8);
}

#[test]
fn verify_input_underflow() {
    let frame = silent_frame();

    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();
    let mut out = [1i16; SAMPLES_PER_FRAME];

    // Enough for the side info, but not the whole frame.
    let mut bytes_left = 100;
    assert_eq!(decoder.decode_frame_status(&frame, &mut bytes_left, &mut out), -1);
    assert_eq!(bytes_left, 100);
    assert!(out.iter().all(|&s| s == 0));

    // Not enough for the side info.
    let mut bytes_left = 10;
    assert_eq!(decoder.decode_frame_status(&frame, &mut bytes_left, &mut out), -1);
    assert_eq!(bytes_left, 10);
}

#[test]
fn verify_self_contained_frames() {
    let opts = DecoderOptions { self_contained_frames: true, ..Default::default() };

    // The frame only holds as much main data as it needs.
    let si = side_info(0, [GranuleSideInfo::tone(); 2]);
    let short = frame(HEADER_128K, 4 + SIDE_INFO_LEN + 8, &si, &TONE_MAIN_DATA);

    let mut decoder = Mp3Decoder::try_new(opts).unwrap();
    let self_contained = decode_all(&mut decoder, &[short]);

    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();
    let normal = decode_all(&mut decoder, &[tone_frame()]);

    assert_eq!(self_contained, normal);
}

#[test]
fn verify_self_contained_frames_reject_reservoir() {
    let opts = DecoderOptions { self_contained_frames: true, ..Default::default() };
    let mut decoder = Mp3Decoder::try_new(opts).unwrap();

    let mut out = [1i16; SAMPLES_PER_FRAME];

    // Referencing a previous frame.
    let si = side_info(5, [GranuleSideInfo::default(); 2]);
    let referencing = frame(HEADER_128K, 50, &si, &[]);

    let mut bytes_left = referencing.len();
    assert_eq!(decoder.decode_frame_status(&referencing, &mut bytes_left, &mut out), -6);
    assert_eq!(bytes_left, referencing.len());
    assert!(out.iter().all(|&s| s == 0));

    // No main data at all.
    let empty = frame(HEADER_128K, 4 + SIDE_INFO_LEN, &side_info(0, Default::default()), &[]);

    let mut bytes_left = empty.len();
    assert_eq!(decoder.decode_frame_status(&empty, &mut bytes_left, &mut out), -6);
}

#[test]
fn verify_garbage_never_panics() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0x6d70_3321);

    let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();
    let mut out = [0i16; 2 * SAMPLES_PER_FRAME];

    // Valid headers of each version and channel mode, including joint stereo with every mode
    // extension, followed by random side info and main data.
    let headers: [[u8; 4]; 8] = [
        [0xff, 0xfb, 0x90, 0xc0],
        [0xff, 0xfb, 0x90, 0x00],
        [0xff, 0xfb, 0x90, 0x40],
        [0xff, 0xfb, 0x90, 0x70],
        [0xff, 0xf3, 0x90, 0x60],
        [0xff, 0xf3, 0x90, 0x50],
        [0xff, 0xe3, 0x90, 0x70],
        [0xff, 0xfa, 0x90, 0x30],
    ];

    for i in 0..2000 {
        let mut buf: Vec<u8> = (0..2048).map(|_| rng.random()).collect();

        if i % 4 != 0 {
            buf[..4].copy_from_slice(&headers[rng.random_range(0..headers.len())]);
        }

        let mut pos = 0;

        while pos < buf.len() {
            let mut bytes_left = buf.len() - pos;
            let before = bytes_left;

            let _ = decoder.decode_frame(&buf[pos..], &mut bytes_left, &mut out);

            assert!(bytes_left <= before);
            pos += (before - bytes_left).max(1);
        }

        if i % 64 == 0 {
            decoder.reset();
        }
    }
}
