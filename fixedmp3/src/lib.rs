// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A fixed-point MPEG1, MPEG2, and MPEG2.5 Layer 3 audio decoder.
//!
//! The decoder consumes one frame at a time from a caller supplied buffer and produces 16-bit
//! interleaved PCM. No floating-point arithmetic is used, and all state is allocated when the
//! decoder is instantiated.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]
// The following lints are allowed in all fixedmp3 crates. Please see the workspace Cargo.toml for
// their justification.
#![allow(clippy::comparison_chain)]
#![allow(clippy::identity_op)]
#![allow(clippy::manual_range_contains)]

// Shared modules.
mod common;
mod header;

// Decoder modules.
mod decoder;
mod synthesis;

// Layer-specific decoder support modules.
mod layer3;

pub use common::{ChannelMode, Emphasis, FrameHeader, Mode, MpegLayer, MpegVersion};
pub use decoder::{DecoderOptions, FrameInfo, Mp3Decoder};
pub use header::{check_header, find_sync_word, parse_frame_header, MPEG_HEADER_LEN};

pub use fixedmp3_core::errors::{Error, Result};
