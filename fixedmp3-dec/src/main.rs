// fixedmp3 Decode Tool
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fixedmp3::{check_header, find_sync_word, DecoderOptions, Error, FrameInfo, Mp3Decoder, Result};

use clap::{ArgAction, Parser};
use log::{info, warn, LevelFilter};

/// The number of bytes offered to the decoder per frame. Larger than any frame, including the
/// following frame header needed to size "free" format frames.
const WINDOW_LEN: usize = 16 * 1024;

/// The maximum number of interleaved samples in a frame.
const MAX_FRAME_SAMPLES: usize = 2 * 1152;

#[derive(Parser)]
#[command(name = "fixedmp3-dec", version, about = "Decode an MP3 file to WAV or raw PCM")]
struct Args {
    /// The input file path
    input: PathBuf,
    /// The output file path. Defaults to the input path with a wav or pcm extension
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Write raw interleaved 16-bit little-endian PCM instead of WAV
    #[arg(long)]
    raw: bool,
    /// Stop after this many frames
    #[arg(short = 'n', long)]
    frames: Option<u64>,
    /// Each frame carries all of its own main data
    #[arg(long)]
    self_contained: bool,
    /// Increase the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Writes decoded PCM as a WAV file, or as raw samples.
struct PcmWriter {
    writer: BufWriter<File>,
    raw: bool,
    n_samples: u64,
    sample_rate: u32,
    n_channels: u16,
}

impl PcmWriter {
    const WAV_HEADER_LEN: usize = 44;

    fn try_new(path: &Path, raw: bool) -> Result<Self> {
        let mut writer = BufWriter::new(File::create(path)?);

        // The WAV header is written once the length of the data is known.
        if !raw {
            writer.write_all(&[0; Self::WAV_HEADER_LEN])?;
        }

        Ok(PcmWriter { writer, raw, n_samples: 0, sample_rate: 0, n_channels: 0 })
    }

    fn write(&mut self, info: &FrameInfo, samples: &[i16]) -> Result<()> {
        if self.n_samples == 0 {
            self.sample_rate = info.sample_rate;
            self.n_channels = info.n_channels as u16;
        }
        else if info.sample_rate != self.sample_rate
            || info.n_channels != usize::from(self.n_channels)
        {
            warn!(
                "stream changed to {} Hz, {} channels mid-stream",
                info.sample_rate, info.n_channels
            );
        }

        for sample in samples {
            self.writer.write_all(&sample.to_le_bytes())?;
        }

        self.n_samples += samples.len() as u64;
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        if !self.raw {
            let data_len = (2 * self.n_samples).min(u64::from(u32::MAX) - 36) as u32;
            let block_align = 2 * self.n_channels;
            let byte_rate = self.sample_rate * u32::from(block_align);

            let mut header = Vec::with_capacity(Self::WAV_HEADER_LEN);
            header.extend_from_slice(b"RIFF");
            header.extend_from_slice(&(36 + data_len).to_le_bytes());
            header.extend_from_slice(b"WAVE");
            header.extend_from_slice(b"fmt ");
            header.extend_from_slice(&16u32.to_le_bytes());
            // PCM
            header.extend_from_slice(&1u16.to_le_bytes());
            header.extend_from_slice(&self.n_channels.to_le_bytes());
            header.extend_from_slice(&self.sample_rate.to_le_bytes());
            header.extend_from_slice(&byte_rate.to_le_bytes());
            header.extend_from_slice(&block_align.to_le_bytes());
            header.extend_from_slice(&16u16.to_le_bytes());
            header.extend_from_slice(b"data");
            header.extend_from_slice(&data_len.to_le_bytes());

            self.writer.seek(SeekFrom::Start(0))?;
            self.writer.write_all(&header)?;
        }

        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Default)]
struct DecodeResult {
    n_frames: u64,
    n_samples: u64,
    n_skipped_bytes: u64,
    /// The number of failed frames and the first error, per status code.
    errors: BTreeMap<i32, (u64, String)>,
    stream_info: Option<FrameInfo>,
}

/// Gets the length of the ID3v2 tag at the start of `buf`, or 0 if there is none.
fn id3v2_len(buf: &[u8]) -> usize {
    match buf {
        [b'I', b'D', b'3', _, _, flags, size @ ..] if size.len() >= 4 => {
            // The size is a 28-bit sync-safe integer, and excludes the header and footer.
            let size = size[..4].iter().fold(0usize, |acc, &b| (acc << 7) | usize::from(b & 0x7f));
            let footer = if flags & 0x10 != 0 { 10 } else { 0 };
            10 + size + footer
        }
        _ => 0,
    }
}

/// Finds the next plausible frame header in `buf`.
fn find_frame(buf: &[u8]) -> Option<usize> {
    let mut pos = 0;

    while let Some(offset) = find_sync_word(&buf[pos..]) {
        let start = pos + offset;
        let word = buf.get(start..start + 4)?;

        if check_header(u32::from_be_bytes([word[0], word[1], word[2], word[3]])) {
            return Some(start);
        }

        pos = start + 1;
    }

    None
}

fn run(args: &Args, output: &Path, res: &mut DecodeResult) -> Result<()> {
    let data = std::fs::read(&args.input)?;

    let opts = DecoderOptions { self_contained_frames: args.self_contained, ..Default::default() };

    let mut decoder = Mp3Decoder::try_new(opts)?;
    decoder.begin();

    let mut writer = PcmWriter::try_new(output, args.raw)?;
    let mut pcm = [0i16; MAX_FRAME_SAMPLES];

    let mut pos = id3v2_len(&data).min(data.len());

    if pos > 0 {
        info!("skipped {} byte ID3v2 tag", pos);
    }

    while args.frames.map_or(true, |max| res.n_frames < max) {
        let sync = match find_frame(&data[pos..]) {
            Some(sync) => sync,
            None => break,
        };

        if sync > 0 {
            info!("skipped {} bytes to sync at offset {}", sync, pos + sync);
            res.n_skipped_bytes += sync as u64;
        }

        pos += sync;

        let window = &data[pos..];
        let window_len = window.len().min(WINDOW_LEN);
        let mut bytes_left = window_len;

        let result = decoder.decode_frame(window, &mut bytes_left, &mut pcm);

        let consumed = window_len - bytes_left;

        match result {
            Ok(n_samples) => {
                if n_samples > 0 {
                    let info = decoder.last_frame_info();

                    if res.stream_info.is_none() {
                        res.stream_info = Some(info);
                    }

                    writer.write(&info, &pcm[..n_samples])?;
                    res.n_samples += n_samples as u64;
                }
            }
            // The last frame is truncated.
            Err(Error::InputUnderflow) if window_len == window.len() => {
                info!("stopped at truncated frame at offset {}", pos);
                break;
            }
            Err(err) => {
                let entry = res.errors.entry(err.status_code()).or_insert((0, err.to_string()));
                entry.0 += 1;

                // Output for failed frames is silence.
                if let Ok(info) = decoder.next_frame_info(window) {
                    if consumed > 0 && res.stream_info.is_some() {
                        writer.write(&info, &pcm[..info.output_samples])?;
                        res.n_samples += info.output_samples as u64;
                    }
                }
            }
        }

        res.n_frames += 1;

        // A frame that was not consumed is resynced past its sync word.
        pos += consumed.max(1);
    }

    writer.finish()
}

fn main() {
    let args = Args::parse();

    let mut builder = pretty_env_logger::formatted_builder();

    builder.filter_level(match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.init();

    let output = match &args.output {
        Some(path) => path.clone(),
        None => args.input.with_extension(if args.raw { "pcm" } else { "wav" }),
    };

    println!("Input Path:  {}", args.input.display());
    println!("Output Path: {}", output.display());
    println!();

    let mut res: DecodeResult = Default::default();

    if let Err(err) = run(&args, &output, &mut res) {
        eprintln!("Decode interrupted by error: {}", err);
        std::process::exit(2);
    }

    if let Some(info) = res.stream_info {
        let version = match info.version {
            Some(version) => format!("{:?}", version),
            None => "unknown".to_string(),
        };

        println!("Stream Info");
        println!("=================================================");
        println!();
        println!("  Version:          {}", version);
        println!("  Layer:            {}", info.layer.map_or(0, |layer| layer.number()));
        println!("  Sample Rate:      {} Hz", info.sample_rate);
        println!("  Channels:         {}", info.n_channels);
        println!("  Bit-rate:         {} bps", info.bitrate);
        println!("  Bits per Sample:  {}", info.bits_per_sample);
        println!();
    }

    println!("Decode Results");
    println!("=================================================");
    println!();
    println!("  Frames:           {:>12}", res.n_frames);
    println!("  Samples:          {:>12}", res.n_samples);
    println!("  Skipped Bytes:    {:>12}", res.n_skipped_bytes);
    println!();

    if !res.errors.is_empty() {
        println!("  Status   Frames   First Error");
        for (code, (count, desc)) in &res.errors {
            println!("  {:>6} {:>8}   {}", code, count, desc);
        }
        println!();
    }

    std::process::exit(if res.errors.is_empty() { 0 } else { 1 });
}
