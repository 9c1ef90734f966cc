// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fixedmp3_core::errors::{main_data_underflow_error, scale_factors_error, Result};

use log::warn;

use crate::common::*;
use crate::decoder::DecoderOptions;
use crate::synthesis::{self, SynthesisState};

mod bitstream;
mod huffman;
mod huffman_tables;
mod hybrid_synthesis;
mod requantize;
mod stereo;

use hybrid_synthesis::{HybridOutput, HybridState};
use requantize::CriticalBandInfo;

/// The largest short scale factor band is 66 samples wide, and requantization reorders all three
/// windows of a band at once.
const REORDER_WORK_LEN: usize = 3 * 66;

/// The block type of a granule channel. Determines the window and transform used by the hybrid
/// filterbank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub(crate) enum BlockType {
    /// A normal long block.
    #[default]
    Long,
    /// A transitional long block preceding short blocks.
    Start,
    /// Three short blocks. May be mixed with long blocks in the lowest subbands.
    Short,
    /// A transitional long block following short blocks.
    End,
}

/// The side information of a single channel in a granule.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct GranuleChannel {
    /// Total number of bits used for scale factors (part2) and Huffman encoded data (part3).
    pub part2_3_length: u16,
    /// HALF the number of samples in the big_values partition (sum of all samples in
    /// `region[0..3]`).
    pub big_values: u16,
    /// Logarithmic quantization step size.
    pub global_gain: u8,
    /// Depending on the MPEG version, `scalefac_compress` determines how many bits are allocated
    /// per scale factor.
    ///
    /// - For MPEG1 bitstreams, `scalefac_compress` is a 4-bit index into a table of bit length
    ///   pairs.
    ///
    /// - For MPEG2/2.5 bitstreams, `scalefac_compress` is a 9-bit value that decodes into
    ///   `slen[0..4]` for the number of bits per scale factor, and depending on which range the
    ///   value falls into, for which bands.
    pub scalefac_compress: u16,
    /// Window switching is in use. The block type is transmitted explicitly.
    pub window_switching: bool,
    /// Indicates the block type (type of window) for the channel in the granule.
    pub block_type: BlockType,
    /// Short blocks are mixed with long blocks in the lowest subbands.
    pub mixed_block: bool,
    /// The Huffman table to use for decoding `region[0..3]` of big_values.
    pub table_select: [u8; 3],
    /// Gain factors for each short window. Each gain factor has a maximum value of 7 (3 bits).
    pub subblock_gain: [u8; 3],
    /// The number of scale factor bands in region0, minus one.
    pub region0_count: u8,
    /// The number of scale factor bands in region1, minus one.
    pub region1_count: u8,
    /// Indicates if the pre-emphasis amount for each scale factor band should be added on to each
    /// scale factor before requantization.
    pub preflag: bool,
    /// A 0.5x (false) or 1x (true) multiplier for scale factors.
    pub scalefac_scale: bool,
    /// Use Huffman Quads table A (0) or B (1), for decoding the count1 partition.
    pub count1table_select: u8,
}

/// The side information of a frame.
#[derive(Clone, Debug, Default)]
pub(crate) struct SideInfo {
    /// The byte offset into the bit reservoir indicating the location of the first bit of
    /// main_data. If 0, main_data begins after the side_info of this frame.
    pub main_data_begin: u16,
    pub private_bits: u8,
    /// Scale factor selector information, per channel. Bands that share scale factors for both
    /// granules are indicated by a true.
    ///
    /// Mapping of array indicies to bands [0..6, 6..11, 11..16, 16..21].
    pub scfsi: PerChannel<[bool; 4]>,
    pub granules: PerGranule<PerChannel<GranuleChannel>>,
}

/// The scale factors of a granule channel. Must be interpreted based on the block type.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct ScaleFactors {
    /// Long block scale factors.
    pub l: [u8; 23],
    /// Short block scale factors, per band and window.
    pub s: [[u8; 3]; 13],
}

/// The scale factor layout of the intensity stereo channel in MPEG2/2.5 frames.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct IntensityScaleFactorInfo {
    /// The intensity stereo scale, from the LSB of `scalefac_compress`.
    pub intensity_scale: u32,
    /// Bit lengths of the scale factors in each band group.
    pub slen: [u32; 4],
    /// The number of bands in each band group.
    pub nr: [usize; 4],
}

/// The Layer 3 decoder state. Everything but the reservoir is working storage or filter history
/// of the channels.
pub(crate) struct State {
    reservoir: MainDataReservoir,
    /// The number of consecutive frames that referenced missing reservoir bytes.
    underflow_frames: u32,
    scale_factors: PerGranule<PerChannel<ScaleFactors>>,
    is_info: IntensityScaleFactorInfo,
    samples: PerChannel<[i32; SAMPLES_PER_GRANULE]>,
    work: [i32; REORDER_WORK_LEN],
    non_zero_bound: [usize; MAX_CHANNELS],
    guard_bits: [i32; MAX_CHANNELS],
    cbi: [CriticalBandInfo; MAX_CHANNELS],
    hybrid: [HybridState; MAX_CHANNELS],
    hybrid_out: [HybridOutput; MAX_CHANNELS],
    hybrid_guard_bits: [i32; MAX_CHANNELS],
    synthesis: SynthesisState,
}

impl State {
    pub fn new() -> Self {
        State {
            reservoir: MainDataReservoir::new(),
            underflow_frames: 0,
            scale_factors: Default::default(),
            is_info: Default::default(),
            samples: PerChannel([[0; SAMPLES_PER_GRANULE]; MAX_CHANNELS]),
            work: [0; REORDER_WORK_LEN],
            non_zero_bound: [0; MAX_CHANNELS],
            guard_bits: [0; MAX_CHANNELS],
            cbi: Default::default(),
            hybrid: [HybridState::new(), HybridState::new()],
            hybrid_out: [[[0; NUM_SUBBANDS]; BLOCK_SIZE]; MAX_CHANNELS],
            hybrid_guard_bits: [0; MAX_CHANNELS],
            synthesis: SynthesisState::new(),
        }
    }

    /// Clears the reservoir and all filter history.
    pub fn reset(&mut self) {
        self.reservoir.clear();
        self.underflow_frames = 0;
        self.hybrid = [HybridState::new(), HybridState::new()];
        self.synthesis.reset();
    }

    /// Gets the number of bytes held by the bit reservoir.
    pub fn reservoir_len(&self) -> usize {
        self.reservoir.len()
    }
}

/// Reads the side_info of a Layer 3 frame. The buffer must begin immediately after the frame
/// header (and CRC, if present).
pub(crate) fn read_side_info(buf: &[u8], header: &FrameHeader) -> Result<SideInfo> {
    bitstream::read_side_info(buf, header)
}

/// Reads the scale factors and Huffman coded spectral samples of every channel in a granule.
fn read_main_data(
    header: &FrameHeader,
    gr: Granule,
    main_data: &[u8],
    pos: &mut usize,
    bit_offset: &mut u32,
    main_bits: &mut i64,
    side_info: &mut SideInfo,
    scale_factors: &mut PerGranule<PerChannel<ScaleFactors>>,
    is_info: &mut IntensityScaleFactorInfo,
    samples: &mut PerChannel<[i32; SAMPLES_PER_GRANULE]>,
    non_zero_bound: &mut [usize; MAX_CHANNELS],
) -> Result<()> {
    for (i, ch) in Channel::iter(header.n_channels()).enumerate() {
        // Read the scale factors (part2) and get the number of bits read.
        let part2_len = bitstream::read_scale_factors(
            main_data,
            pos,
            bit_offset,
            (*main_bits).max(0) as usize,
            header,
            gr,
            ch,
            side_info,
            scale_factors,
            is_info,
        ) as i64;

        // The Huffman code length (part3).
        let part3_len = i64::from(side_info.granules[gr][ch].part2_3_length) - part2_len;

        *main_bits -= part2_len;

        if *main_bits < part3_len {
            return scale_factors_error("mp3: part2_3_length exceeds main data");
        }

        // A negative part3 length is rejected by the Huffman decoder.
        non_zero_bound[i] = huffman::read_huffman_samples(
            main_data,
            pos,
            bit_offset,
            part3_len.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            header,
            &side_info.granules[gr][ch],
            &mut samples[ch],
        )?;

        *main_bits -= part3_len;
    }

    Ok(())
}

/// Decodes the main data of a Layer 3 frame into interleaved PCM.
///
/// `main_data` holds the main data bytes carried by the frame. Unless frames are self-contained,
/// they are appended to the bit reservoir and decoding starts `main_data_begin` bytes before them.
///
/// Returns the number of samples written to `out`. This is 0 if the frame references reservoir
/// bytes that were never received, but fewer than `max_underflow_frames` consecutive frames have
/// done so. `out` must hold at least `header.output_len()` samples.
pub(crate) fn decode_frame(
    header: &FrameHeader,
    side_info: &mut SideInfo,
    main_data: &[u8],
    opts: &DecoderOptions,
    state: &mut State,
    out: &mut [i16],
) -> Result<usize> {
    let main_data = if opts.self_contained_frames {
        main_data
    }
    else {
        let underflow =
            state.reservoir.fill(main_data, usize::from(side_info.main_data_begin))?;

        if underflow > 0 {
            state.underflow_frames = state.underflow_frames.saturating_add(1);

            warn!(
                "mp3: main data underflow, {} bytes missing ({} consecutive frames)",
                underflow, state.underflow_frames
            );

            if state.underflow_frames < opts.max_underflow_frames {
                return Ok(0);
            }

            return main_data_underflow_error();
        }

        state.underflow_frames = 0;

        state.reservoir.bytes_ref()
    };

    let n_channels = header.n_channels();
    let granule_len = header.samples_per_granule() * n_channels;

    let mut pos = 0;
    let mut bit_offset = 0;
    let mut main_bits = 8 * main_data.len() as i64;

    for gr in Granule::iter(header.n_granules()) {
        read_main_data(
            header,
            gr,
            main_data,
            &mut pos,
            &mut bit_offset,
            &mut main_bits,
            side_info,
            &mut state.scale_factors,
            &mut state.is_info,
            &mut state.samples,
            &mut state.non_zero_bound,
        )?;

        let granule = &side_info.granules[gr];

        // Requantize all non-zero (big_values and count1 partition) spectral samples.
        for (i, ch) in Channel::iter(n_channels).enumerate() {
            state.guard_bits[i] = requantize::requantize(
                header,
                &granule[ch],
                &state.scale_factors[gr][ch],
                &mut state.samples[ch],
                &mut state.work,
                &mut state.non_zero_bound[i],
                &mut state.cbi[i],
            );
        }

        // If there is a second channel, apply joint stereo processing if it is used.
        if n_channels == 2 {
            let [left, right] = &mut state.samples.0;

            stereo::process_stereo(
                header,
                stereo::StereoInput {
                    left,
                    right,
                    non_zero_bound: &mut state.non_zero_bound,
                    guard_bits: &mut state.guard_bits,
                    cbi: &state.cbi,
                },
                &state.scale_factors[gr][Channel::Right],
                &state.is_info,
            );
        }

        // Anti-aliasing, IMDCT, overlap-add, and frequency inversion.
        for (i, ch) in Channel::iter(n_channels).enumerate() {
            state.hybrid_guard_bits[i] = hybrid_synthesis::hybrid_synthesis(
                header,
                &granule[ch],
                &mut state.samples[ch],
                &mut state.non_zero_bound[i],
                state.guard_bits[i],
                &mut state.hybrid[i],
                &mut state.hybrid_out[i],
            );
        }

        // Perform polyphase synthesis and generate interleaved PCM samples.
        let start = gr.index() * granule_len;

        synthesis::synthesis(
            &mut state.synthesis,
            n_channels,
            &state.hybrid_out[..n_channels],
            &state.hybrid_guard_bits[..n_channels],
            &mut out[start..start + granule_len],
        );
    }

    Ok(header.n_granules() * granule_len)
}
