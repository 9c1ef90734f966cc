// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fixedmp3_core::errors::{frame_header_error, input_underflow_error, Error, Result};

use log::{debug, warn};

use super::{common::*, header, layer3};

/// `DecoderOptions` is a common set of options that all decoders use.
#[derive(Copy, Clone, Debug)]
pub struct DecoderOptions {
    /// Each input buffer holds exactly one frame whose main data follows its side info, as when
    /// frames are reassembled from a packetized transport. The bit reservoir is not used, and
    /// `main_data_begin` must be 0.
    pub self_contained_frames: bool,
    /// The number of consecutive frames that may reference missing bit reservoir bytes before
    /// decoding fails with `MainDataUnderflow`. Until then, such frames produce no samples.
    pub max_underflow_frames: u32,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions { self_contained_frames: false, max_underflow_frames: 4 }
    }
}

/// A description of a decoded, or yet to be decoded, frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInfo {
    /// The bit-rate in bits per second. For a "free" format stream, the bit-rate inferred from the
    /// frame length.
    pub bitrate: u32,
    pub sample_rate: u32,
    pub n_channels: usize,
    /// The bit depth of the PCM samples. Always 16.
    pub bits_per_sample: u32,
    pub layer: Option<MpegLayer>,
    pub version: Option<MpegVersion>,
    /// The total number of interleaved PCM samples produced by the frame.
    pub output_samples: usize,
}

impl FrameInfo {
    fn new(header: &FrameHeader, bitrate: u32, output_samples: usize) -> Self {
        FrameInfo {
            bitrate,
            sample_rate: header.sample_rate,
            n_channels: header.n_channels(),
            bits_per_sample: 16,
            layer: Some(header.layer),
            version: Some(header.version),
            output_samples,
        }
    }
}

/// Computes the bit-rate of a frame from its length in bytes, excluding the padding slot.
fn free_format_bitrate(header: &FrameHeader, frame_len: usize) -> u32 {
    let bits = 8 * frame_len as u64 * u64::from(header.sample_rate);
    (bits / header.samples_per_frame() as u64) as u32
}

/// MPEG1, MPEG2, and MPEG2.5 Layer 3 decoder.
pub struct Mp3Decoder {
    opts: DecoderOptions,
    state: Box<layer3::State>,
    /// The number of main data bytes in a "free" format frame, excluding the padding slot. Found
    /// once per stream.
    free_format_main_data_len: Option<usize>,
    last_frame_info: FrameInfo,
}

impl Mp3Decoder {
    /// Instantiates the decoder. All decoder state is allocated up front.
    pub fn try_new(opts: DecoderOptions) -> Result<Self> {
        Ok(Mp3Decoder {
            opts,
            state: Box::new(layer3::State::new()),
            free_format_main_data_len: None,
            last_frame_info: Default::default(),
        })
    }

    /// Prepares the decoder for use. The decoder state is allocated on construction, so this
    /// always succeeds and may be called any number of times.
    pub fn begin(&mut self) -> bool {
        true
    }

    /// Gets the options the decoder was instantiated with.
    pub fn options(&self) -> &DecoderOptions {
        &self.opts
    }

    /// Gets the number of main data bytes held in the bit reservoir.
    pub fn reservoir_len(&self) -> usize {
        self.state.reservoir_len()
    }

    /// Gets the description of the last frame that produced samples. All fields are zero, or
    /// `None`, until then.
    pub fn last_frame_info(&self) -> FrameInfo {
        self.last_frame_info
    }

    /// Describes the frame at the start of `buf` without decoding it. Fails unless the frame is a
    /// Layer 3 frame.
    pub fn next_frame_info(&self, buf: &[u8]) -> Result<FrameInfo> {
        let header = header::parse_frame_header(buf)?;

        if header.layer != MpegLayer::Layer3 {
            return frame_header_error("mp3: invalid mpeg audio layer");
        }

        let bitrate = match self.free_format_main_data_len {
            Some(len) if header.is_free_format() => {
                free_format_bitrate(&header, len + header.header_len() + header.side_info_len())
            }
            _ => header.bitrate,
        };

        Ok(FrameInfo::new(&header, bitrate, header.output_len()))
    }

    /// Fully resets the decoder. The bit reservoir and all filter history are cleared.
    pub fn reset(&mut self) {
        self.state.reset();
        self.free_format_main_data_len = None;
    }

    /// Decodes the frame at the start of `input` into interleaved PCM samples.
    ///
    /// At most `bytes_left` bytes of `input` are read. Once the length of the frame is known and
    /// the whole frame is present, the frame is consumed and `bytes_left` is reduced by its
    /// length, even if the frame then fails to decode. Otherwise `bytes_left` is unchanged.
    ///
    /// Returns the number of samples written to `out`. This may be 0 while the bit reservoir is
    /// being filled at the start of a stream. If the frame fails to decode after its header was
    /// parsed, the samples it would have produced are zeroed.
    pub fn decode_frame(
        &mut self,
        input: &[u8],
        bytes_left: &mut usize,
        out: &mut [i16],
    ) -> Result<usize> {
        let buf = &input[..(*bytes_left).min(input.len())];

        // The size of the output is unknown until the header is parsed.
        let header = header::parse_frame_header(buf)?;

        if header.layer != MpegLayer::Layer3 {
            return frame_header_error("mp3: invalid mpeg audio layer");
        }

        let output_len = header.output_len();

        if out.len() < output_len {
            return Err(Error::BufferTooSmall);
        }

        let out = &mut out[..output_len];
        let mut consumed = 0;

        let result = self.decode_inner(buf, &header, &mut consumed, out);

        *bytes_left -= consumed;

        match result {
            Ok(0) => Ok(0),
            Ok(n_samples) => {
                let bitrate = if header.is_free_format() {
                    free_format_bitrate(&header, consumed - usize::from(header.has_padding))
                }
                else {
                    header.bitrate
                };

                self.last_frame_info = FrameInfo::new(&header, bitrate, n_samples);

                Ok(n_samples)
            }
            Err(err) => {
                debug!("mp3: failed to decode frame: {}", err);
                out.fill(0);
                Err(err)
            }
        }
    }

    /// Decodes a frame like [`Mp3Decoder::decode_frame`], but returns a status code. The status
    /// code is 0 on success, or negative as given by [`Error::status_code`].
    pub fn decode_frame_status(
        &mut self,
        input: &[u8],
        bytes_left: &mut usize,
        out: &mut [i16],
    ) -> i32 {
        match self.decode_frame(input, bytes_left, out) {
            Ok(_) => 0,
            Err(err) => err.status_code(),
        }
    }

    fn decode_inner(
        &mut self,
        buf: &[u8],
        header: &FrameHeader,
        consumed: &mut usize,
        out: &mut [i16],
    ) -> Result<usize> {
        let side_info_start = header.header_len();
        let main_data_start = side_info_start + header.side_info_len();

        if buf.len() < main_data_start {
            return input_underflow_error();
        }

        let mut side_info = layer3::read_side_info(&buf[side_info_start..], header)?;

        let main_data_len = if self.opts.self_contained_frames {
            // The remainder of the buffer is the main data.
            let len = buf.len() - main_data_start;

            if side_info.main_data_begin != 0 || len == 0 {
                return frame_header_error("mp3: frame is not self-contained");
            }

            len
        }
        else if header.is_free_format() {
            let len = match self.free_format_main_data_len {
                Some(len) => len,
                None => {
                    let len = match header::find_free_sync(&buf[main_data_start..], &buf[..3]) {
                        Some(len) => len,
                        None => {
                            warn!("mp3: could not find the next frame of a free format stream");
                            return Err(Error::FreeBitrateSyncNotFound);
                        }
                    };

                    debug!(
                        "mp3: free format stream with a bit-rate of {} bps",
                        free_format_bitrate(header, main_data_start + len)
                    );

                    self.free_format_main_data_len = Some(len);
                    len
                }
            };

            len + usize::from(header.has_padding)
        }
        else {
            header.main_data_len
        };

        let frame_len = main_data_start + main_data_len;

        // Out of data, assume this is the last, truncated, frame.
        if buf.len() < frame_len {
            return input_underflow_error();
        }

        *consumed = frame_len;

        layer3::decode_frame(
            header,
            &mut side_info,
            &buf[main_data_start..frame_len],
            &self.opts,
            &mut self.state,
            out,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// MPEG-1, layer 3, no CRC, 128 kbps, 44.1 kHz, mono. The frame is 417 bytes long.
    const MONO_HEADER: [u8; 4] = [0xff, 0xfb, 0x90, 0xc0];

    const MONO_FRAME_LEN: usize = 417;

    /// A frame with empty side info and main data decodes to silence.
    fn silent_frame() -> Vec<u8> {
        let mut frame = vec![0; MONO_FRAME_LEN];
        frame[..4].copy_from_slice(&MONO_HEADER);
        frame
    }

    #[test]
    fn verify_default_options() {
        let opts = DecoderOptions::default();
        assert!(!opts.self_contained_frames);
        assert_eq!(opts.max_underflow_frames, 4);
    }

    #[test]
    fn verify_begin_is_idempotent() {
        let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();
        assert!(decoder.begin());
        assert!(decoder.begin());
        assert_eq!(decoder.last_frame_info(), FrameInfo::default());
    }

    #[test]
    fn verify_next_frame_info() {
        let decoder = Mp3Decoder::try_new(Default::default()).unwrap();

        let info = decoder.next_frame_info(&MONO_HEADER).unwrap();

        assert_eq!(info.bitrate, 128_000);
        assert_eq!(info.sample_rate, 44_100);
        assert_eq!(info.n_channels, 1);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.layer, Some(MpegLayer::Layer3));
        assert_eq!(info.version, Some(MpegVersion::Mpeg1));
        assert_eq!(info.output_samples, 1152);

        // Layer 2.
        assert!(decoder.next_frame_info(&[0xff, 0xfd, 0x90, 0xc0]).is_err());
    }

    #[test]
    fn verify_decode_silent_frame() {
        let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();

        let frame = silent_frame();
        let mut bytes_left = frame.len();
        let mut out = [1i16; 1152];

        assert_eq!(decoder.decode_frame(&frame, &mut bytes_left, &mut out).unwrap(), 1152);
        assert_eq!(bytes_left, 0);
        assert!(out.iter().all(|&s| s == 0));

        let info = decoder.last_frame_info();
        assert_eq!(info.bitrate, 128_000);
        assert_eq!(info.output_samples, 1152);
    }

    #[test]
    fn verify_header_errors_consume_nothing() {
        let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();

        let mut frame = silent_frame();
        frame[0] = 0;

        let mut bytes_left = frame.len();
        let mut out = [1i16; 1152];

        let err = decoder.decode_frame(&frame, &mut bytes_left, &mut out).unwrap_err();

        assert_eq!(err.status_code(), -6);
        assert_eq!(bytes_left, frame.len());
        // The output length is unknown, so nothing is cleared.
        assert!(out.iter().all(|&s| s == 1));
    }

    #[test]
    fn verify_output_buffer_too_small() {
        let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();

        let frame = silent_frame();
        let mut bytes_left = frame.len();
        let mut out = [1i16; 1151];

        assert_eq!(decoder.decode_frame_status(&frame, &mut bytes_left, &mut out), -4);
        assert_eq!(bytes_left, frame.len());
    }

    #[test]
    fn verify_truncated_frame() {
        let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();

        let frame = silent_frame();
        let mut bytes_left = frame.len() - 1;
        let mut out = [1i16; 1152];

        assert_eq!(decoder.decode_frame_status(&frame, &mut bytes_left, &mut out), -1);
        assert_eq!(bytes_left, frame.len() - 1);
        assert!(out.iter().all(|&s| s == 0));
        assert_eq!(decoder.last_frame_info(), FrameInfo::default());
    }

    #[test]
    fn verify_reset_clears_reservoir() {
        let mut decoder = Mp3Decoder::try_new(Default::default()).unwrap();

        let frame = silent_frame();
        let mut bytes_left = frame.len();
        let mut out = [0i16; 1152];

        decoder.decode_frame(&frame, &mut bytes_left, &mut out).unwrap();
        assert_eq!(decoder.reservoir_len(), MONO_FRAME_LEN - 4 - 17);

        decoder.reset();
        assert_eq!(decoder.reservoir_len(), 0);
    }
}
