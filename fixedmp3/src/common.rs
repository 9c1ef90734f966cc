// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

use fixedmp3_core::errors::{frame_header_error, Result};

use log::warn;

/// The maximum number of channels.
pub const MAX_CHANNELS: usize = 2;

/// The maximum number of granules per frame.
pub const MAX_GRANULES: usize = 2;

/// The number of polyphase sub-bands.
pub const NUM_SUBBANDS: usize = 32;

/// The number of samples per sub-band in a granule.
pub const BLOCK_SIZE: usize = 18;

/// The number of spectral samples per granule and channel.
pub const SAMPLES_PER_GRANULE: usize = NUM_SUBBANDS * BLOCK_SIZE;

/// The size of the main data buffer. This is large enough to hold the maximum bit reservoir
/// back-reference (511 bytes) plus the largest main data block of a 320 kbps frame at 32 kHz.
pub const MAIN_DATA_BUF_LEN: usize = 1940;

/// The scale factor band partition of a granule. `l[b]` is the index of the first spectral sample
/// of long band `b`, and `s[b]` the index of the first sample of short band `b` within one of the
/// three windows.
#[derive(Copy, Clone, Debug)]
pub struct ScaleFactorBands {
    pub l: [usize; 23],
    pub s: [usize; 14],
}

/// Scale factor band partitions indexed by `[version][sample rate index]`.
pub const SFB_BANDS: [[ScaleFactorBands; 3]; 3] = [
    [
        // 44.1 kHz, MPEG version 1, derived from ISO/IEC 11172-3 Table B.8
        ScaleFactorBands {
            l: [
                0, 4, 8, 12, 16, 20, 24, 30, 36, 44, 52, 62, 74, 90, 110, 134, 162, 196, 238, 288,
                342, 418, 576,
            ],
            s: [0, 4, 8, 12, 16, 22, 30, 40, 52, 66, 84, 106, 136, 192],
        },
        // 48 kHz
        ScaleFactorBands {
            l: [
                0, 4, 8, 12, 16, 20, 24, 30, 36, 42, 50, 60, 72, 88, 106, 128, 156, 190, 230, 276,
                330, 384, 576,
            ],
            s: [0, 4, 8, 12, 16, 22, 28, 38, 50, 64, 80, 100, 126, 192],
        },
        // 32 kHz
        ScaleFactorBands {
            l: [
                0, 4, 8, 12, 16, 20, 24, 30, 36, 44, 54, 66, 82, 102, 126, 156, 194, 240, 296, 364,
                448, 550, 576,
            ],
            s: [0, 4, 8, 12, 16, 22, 30, 42, 58, 78, 104, 138, 180, 192],
        },
    ],
    [
        // 22.050 kHz, MPEG version 2, derived from ISO/IEC 13818-3 Table B.2
        ScaleFactorBands {
            l: [
                0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 116, 140, 168, 200, 238, 284, 336,
                396, 464, 522, 576,
            ],
            s: [0, 4, 8, 12, 18, 24, 32, 42, 56, 74, 100, 132, 174, 192],
        },
        // 24 kHz
        ScaleFactorBands {
            l: [
                0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 114, 136, 162, 194, 232, 278, 332,
                394, 464, 540, 576,
            ],
            s: [0, 4, 8, 12, 18, 26, 36, 48, 62, 80, 104, 136, 180, 192],
        },
        // 16 kHz
        ScaleFactorBands {
            l: [
                0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 116, 140, 168, 200, 238, 284, 336,
                396, 464, 522, 576,
            ],
            s: [0, 4, 8, 12, 18, 26, 36, 48, 62, 80, 104, 134, 174, 192],
        },
    ],
    [
        // 11.025 kHz, MPEG version 2.5
        ScaleFactorBands {
            l: [
                0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 116, 140, 168, 200, 238, 284, 336,
                396, 464, 522, 576,
            ],
            s: [0, 4, 8, 12, 18, 26, 36, 48, 62, 80, 104, 134, 174, 192],
        },
        // 12 kHz
        ScaleFactorBands {
            l: [
                0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 116, 140, 168, 200, 238, 284, 336,
                396, 464, 522, 576,
            ],
            s: [0, 4, 8, 12, 18, 26, 36, 48, 62, 80, 104, 134, 174, 192],
        },
        // 8 kHz
        ScaleFactorBands {
            l: [
                0, 12, 24, 36, 48, 60, 72, 88, 108, 132, 160, 192, 232, 280, 336, 400, 476, 566,
                568, 570, 572, 574, 576,
            ],
            s: [0, 8, 16, 24, 36, 52, 72, 96, 124, 160, 162, 164, 166, 192],
        },
    ],
];

/// Bit-rates in kbps indexed by `[version][layer - 1][bitrate index]`. Index 0 is "free" format.
const BIT_RATES_KBPS: [[[u32; 15]; 3]; 3] = [
    // MPEG 1
    [
        [0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448],
        [0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384],
        [0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320],
    ],
    // MPEG 2
    [
        [0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256],
        [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160],
        [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160],
    ],
    // MPEG 2.5
    [
        [0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256],
        [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160],
        [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160],
    ],
];

/// Layer 3 frame lengths in bytes (slots), indexed by `[version][sample rate index][bitrate
/// index]`, excluding the padding slot. A slot count is `floor(samples * bitrate / 8 / rate)`.
const FRAME_SLOTS: [[[usize; 15]; 3]; 3] = [
    // MPEG 1: 44.1, 48, and 32 kHz
    [
        [0, 104, 130, 156, 182, 208, 261, 313, 365, 417, 522, 626, 731, 835, 1044],
        [0, 96, 120, 144, 168, 192, 240, 288, 336, 384, 480, 576, 672, 768, 960],
        [0, 144, 180, 216, 252, 288, 360, 432, 504, 576, 720, 864, 1008, 1152, 1440],
    ],
    // MPEG 2: 22.05, 24, and 16 kHz
    [
        [0, 26, 52, 78, 104, 130, 156, 182, 208, 261, 313, 365, 417, 470, 522],
        [0, 24, 48, 72, 96, 120, 144, 168, 192, 240, 288, 336, 384, 432, 480],
        [0, 36, 72, 108, 144, 180, 216, 252, 288, 360, 432, 504, 576, 648, 720],
    ],
    // MPEG 2.5: 11.025, 12, and 8 kHz
    [
        [0, 52, 104, 156, 208, 261, 313, 365, 417, 522, 626, 731, 835, 940, 1044],
        [0, 48, 96, 144, 192, 240, 288, 336, 384, 480, 576, 672, 768, 864, 960],
        [0, 72, 144, 216, 288, 360, 432, 504, 576, 720, 864, 1008, 1152, 1296, 1440],
    ],
];

/// Sample rates in Hz indexed by `[version][sample rate index]`.
const SAMPLE_RATES: [[u32; 3]; 3] =
    [[44_100, 48_000, 32_000], [22_050, 24_000, 16_000], [11_025, 12_000, 8_000]];

/// The number of samples per channel in one frame, indexed by `[version][layer - 1]`.
const SAMPLES_PER_FRAME: [[usize; 3]; 3] = [[384, 1152, 1152], [384, 1152, 576], [384, 1152, 576]];

/// The MPEG audio version.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MpegVersion {
    /// Version 1
    Mpeg1,
    /// Version 2
    Mpeg2,
    /// Version 2.5
    Mpeg2p5,
}

impl MpegVersion {
    /// Gets the row of this version in the version-indexed lookup tables.
    #[inline(always)]
    pub fn index(&self) -> usize {
        match self {
            MpegVersion::Mpeg1 => 0,
            MpegVersion::Mpeg2 => 1,
            MpegVersion::Mpeg2p5 => 2,
        }
    }
}

/// The MPEG audio layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MpegLayer {
    /// Layer 1
    Layer1,
    /// Layer 2
    Layer2,
    /// Layer 3
    Layer3,
}

impl MpegLayer {
    /// Gets the layer number (1, 2, or 3).
    #[inline(always)]
    pub fn number(&self) -> u32 {
        match self {
            MpegLayer::Layer1 => 1,
            MpegLayer::Layer2 => 2,
            MpegLayer::Layer3 => 3,
        }
    }
}

/// For Joint Stereo channel mode, the mode extension describes the features and parameters of the
/// stereo encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Joint Stereo in layer 3 may use both Mid-Side and Intensity encoding.
    Layer3 { mid_side: bool, intensity: bool },
    /// Joint Stereo in layers 1 and 2 may only use Intensity encoding on a set of bands. The range
    /// of bands using intensity encoding is bound..32.
    Intensity { bound: u32 },
}

/// The channel mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChannelMode {
    /// Stereo channels.
    Stereo,
    /// Joint Stereo encoded channels (decodes to Stereo).
    JointStereo(Mode),
    /// Dual mono audio channels.
    DualMono,
    /// Single mono audio channel.
    Mono,
}

impl ChannelMode {
    /// Gets the number of channels.
    #[inline(always)]
    pub fn count(&self) -> usize {
        match self {
            ChannelMode::Mono => 1,
            _ => 2,
        }
    }
}

/// The emphasis applied during encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Emphasis {
    /// No emphasis
    None,
    /// 50/15us
    Fifty15,
    /// Reserved
    Reserved,
    /// CCIT J.17
    CcitJ17,
}

/// A MPEG 1, 2, or 2.5 audio frame header.
#[derive(Clone, Debug)]
pub struct FrameHeader {
    pub version: MpegVersion,
    pub layer: MpegLayer,
    /// The bit-rate index. Index 0 signals a "free" format stream.
    pub bitrate_idx: usize,
    /// The bit-rate in bits per second, or 0 for a "free" format stream.
    pub bitrate: u32,
    pub sample_rate: u32,
    /// The sample rate index within the version, 0 to 2.
    pub sample_rate_idx: usize,
    pub channel_mode: ChannelMode,
    pub emphasis: Emphasis,
    pub is_copyrighted: bool,
    pub is_original: bool,
    pub is_private: bool,
    pub has_padding: bool,
    /// The CRC-16 word following the header, if the frame is protected.
    pub crc: Option<u16>,
    /// The number of main data bytes carried by the frame (excluding the header, CRC, and side
    /// info). Zero for a "free" format stream, where it must be inferred.
    pub main_data_len: usize,
}

impl FrameHeader {
    /// Returns true if this a MPEG1 frame, false otherwise.
    #[inline(always)]
    pub fn is_mpeg1(&self) -> bool {
        self.version == MpegVersion::Mpeg1
    }

    /// Returns true if the bit-rate of the frame must be inferred from the distance to the next
    /// frame.
    #[inline(always)]
    pub fn is_free_format(&self) -> bool {
        self.bitrate_idx == 0
    }

    /// Returns the number of granules in the frame.
    #[inline(always)]
    pub fn n_granules(&self) -> usize {
        match self.version {
            MpegVersion::Mpeg1 => 2,
            _ => 1,
        }
    }

    /// Returns the number of channels per granule.
    #[inline(always)]
    pub fn n_channels(&self) -> usize {
        self.channel_mode.count()
    }

    /// Returns the number of samples per channel in one frame.
    #[inline(always)]
    pub fn samples_per_frame(&self) -> usize {
        SAMPLES_PER_FRAME[self.version.index()][self.layer.number() as usize - 1]
    }

    /// Returns the number of samples per channel in one granule.
    #[inline(always)]
    pub fn samples_per_granule(&self) -> usize {
        self.samples_per_frame() / self.n_granules()
    }

    /// Returns the total number of interleaved PCM samples produced by decoding the frame.
    #[inline(always)]
    pub fn output_len(&self) -> usize {
        self.samples_per_frame() * self.n_channels()
    }

    /// Returns true if Intensity Stereo encoding is used, false otherwise.
    #[inline(always)]
    pub fn is_intensity_stereo(&self) -> bool {
        match self.channel_mode {
            ChannelMode::JointStereo(Mode::Intensity { .. }) => true,
            ChannelMode::JointStereo(Mode::Layer3 { intensity, .. }) => intensity,
            _ => false,
        }
    }

    /// Returns true if Mid-Side Stereo encoding is used, false otherwise.
    #[inline(always)]
    pub fn is_mid_side_stereo(&self) -> bool {
        match self.channel_mode {
            ChannelMode::JointStereo(Mode::Layer3 { mid_side, .. }) => mid_side,
            _ => false,
        }
    }

    /// Get the side information length.
    #[inline(always)]
    pub fn side_info_len(&self) -> usize {
        match (self.version, self.channel_mode) {
            (MpegVersion::Mpeg1, ChannelMode::Mono) => 17,
            (MpegVersion::Mpeg1, _) => 32,
            (_, ChannelMode::Mono) => 9,
            (_, _) => 17,
        }
    }

    /// Get the length of the header, including the CRC word if present.
    #[inline(always)]
    pub fn header_len(&self) -> usize {
        if self.crc.is_some() {
            6
        }
        else {
            4
        }
    }

    /// Gets the scale factor band partition for the frame's sample rate.
    #[inline(always)]
    pub fn sfb_bands(&self) -> &'static ScaleFactorBands {
        &SFB_BANDS[self.version.index()][self.sample_rate_idx]
    }
}

/// Looks up the bit-rate in bits per second.
pub fn bitrate(version: MpegVersion, layer: MpegLayer, bitrate_idx: usize) -> u32 {
    1000 * BIT_RATES_KBPS[version.index()][layer.number() as usize - 1][bitrate_idx]
}

/// Looks up the sample rate in Hz.
pub fn sample_rate(version: MpegVersion, sample_rate_idx: usize) -> u32 {
    SAMPLE_RATES[version.index()][sample_rate_idx]
}

/// Looks up the total frame length in bytes, excluding the padding slot.
pub fn frame_slots(version: MpegVersion, sample_rate_idx: usize, bitrate_idx: usize) -> usize {
    FRAME_SLOTS[version.index()][sample_rate_idx][bitrate_idx]
}

/// A channel of a stereo pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Channel {
    Left,
    Right,
}

impl Channel {
    /// Gets the first `n` channels in order.
    pub fn iter(n: usize) -> impl Iterator<Item = Channel> {
        [Channel::Left, Channel::Right].into_iter().take(n)
    }
}

/// A granule of a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Granule {
    First,
    Second,
}

impl Granule {
    /// Gets the first `n` granules in order.
    pub fn iter(n: usize) -> impl Iterator<Item = Granule> {
        [Granule::First, Granule::Second].into_iter().take(n)
    }

    /// Gets the position of the granule within the frame.
    #[inline(always)]
    pub fn index(&self) -> usize {
        match self {
            Granule::First => 0,
            Granule::Second => 1,
        }
    }
}

/// A fixed pair of values, one per channel, indexed by [`Channel`].
#[derive(Copy, Clone, Debug, Default)]
pub struct PerChannel<T>(pub [T; MAX_CHANNELS]);

impl<T> Index<Channel> for PerChannel<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, ch: Channel) -> &T {
        match ch {
            Channel::Left => &self.0[0],
            Channel::Right => &self.0[1],
        }
    }
}

impl<T> IndexMut<Channel> for PerChannel<T> {
    #[inline(always)]
    fn index_mut(&mut self, ch: Channel) -> &mut T {
        match ch {
            Channel::Left => &mut self.0[0],
            Channel::Right => &mut self.0[1],
        }
    }
}

/// A fixed pair of values, one per granule, indexed by [`Granule`].
#[derive(Copy, Clone, Debug, Default)]
pub struct PerGranule<T>(pub [T; MAX_GRANULES]);

impl<T> Index<Granule> for PerGranule<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, gr: Granule) -> &T {
        &self.0[gr.index()]
    }
}

impl<T> IndexMut<Granule> for PerGranule<T> {
    #[inline(always)]
    fn index_mut(&mut self, gr: Granule) -> &mut T {
        &mut self.0[gr.index()]
    }
}

/// `MainDataReservoir` implements the bit reservoir mechanism for main data. Since frames have a
/// deterministic length based on the bit-rate, low-complexity portions of the audio may not need
/// every byte allocated to the frame. The bit reservoir mechanism allows these unused portions of
/// frames to be used by future frames.
pub struct MainDataReservoir {
    buf: Box<[u8]>,
    len: usize,
}

impl MainDataReservoir {
    pub fn new() -> Self {
        MainDataReservoir { buf: vec![0u8; MAIN_DATA_BUF_LEN].into_boxed_slice(), len: 0 }
    }

    /// Appends the main data of a frame to the reservoir, retaining the `main_data_begin` bytes
    /// that precede it.
    ///
    /// Returns the number of referenced bytes that are missing from the reservoir. If this is
    /// non-zero, the frame cannot be decoded, but its main data is still retained for use by
    /// future frames.
    pub fn fill(&mut self, pkt_main_data: &[u8], main_data_begin: usize) -> Result<usize> {
        let main_data_len = pkt_main_data.len();

        if main_data_len > self.buf.len() {
            return frame_header_error("mp3: main data length exceeds reservoir");
        }

        if self.len >= main_data_begin {
            let main_data_end = main_data_begin + main_data_len;

            if main_data_end > self.buf.len() {
                return frame_header_error("mp3: main data length exceeds reservoir");
            }

            // Shift the re-used bytes as indicated by main_data_begin to the front of the
            // reservoir, then copy the new main data after them.
            self.buf.copy_within(self.len - main_data_begin..self.len, 0);
            self.buf[main_data_begin..main_data_end].copy_from_slice(pkt_main_data);
            self.len = main_data_end;

            Ok(0)
        }
        else {
            // Not enough data from previous frames. This is common when starting in the middle of
            // a stream. Append the new main data, discarding the oldest bytes if the reservoir is
            // full.
            let underflow = main_data_begin - self.len;

            let excess = (self.len + main_data_len).saturating_sub(self.buf.len());

            if excess > 0 {
                warn!("mp3: main data reservoir full, discarding {} bytes", excess);
                self.buf.copy_within(excess..self.len, 0);
                self.len -= excess;
            }

            self.buf[self.len..self.len + main_data_len].copy_from_slice(pkt_main_data);
            self.len += main_data_len;

            Ok(underflow)
        }
    }

    /// Gets all the bytes in the reservoir. After a successful `fill`, these begin with the main
    /// data of the current frame.
    pub fn bytes_ref(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}
