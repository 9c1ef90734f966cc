// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `errors` module defines the common error type.

use std::error;
use std::fmt;
use std::io;
use std::result;

/// `Error` provides an enumeration of all possible errors reported by the decoder.
///
/// Every variant except `IoError` has a stable numeric status code, see [`Error::status_code`].
#[derive(Debug)]
pub enum Error {
    /// An IO error occured while reading or writing a stream. Only raised by collaborators that
    /// perform I/O, never by the frame decoder itself.
    IoError(std::io::Error),
    /// Not enough bytes were supplied for the frame declared by the header. The caller should
    /// supply more bytes and retry.
    InputUnderflow,
    /// The bit reservoir does not yet contain the bytes referenced by the frame.
    MainDataUnderflow,
    /// The size of a free-format frame could not be inferred because no following frame header
    /// was found.
    FreeBitrateSyncNotFound,
    /// The output buffer cannot hold the samples of the frame.
    BufferTooSmall,
    /// The frame header is not synchronized or contains a reserved value.
    InvalidFrameHeader(&'static str),
    /// The side information is malformed.
    InvalidSideInfo(&'static str),
    /// The scale factors could not be unpacked from the main data.
    InvalidScaleFactors(&'static str),
    /// The Huffman coded spectrum is malformed, or selects an invalid table.
    InvalidHuffmanCode(&'static str),
    /// Dequantization failed.
    InvalidDequantize(&'static str),
    /// The inverse MDCT failed due to a corrupt block type combination.
    InvalidImdct(&'static str),
    /// Polyphase synthesis failed.
    InvalidSubband(&'static str),
}

impl Error {
    /// Gets the numeric status code for the error.
    ///
    /// Success is represented by 0, and every error by a negative number. An `IoError` does not
    /// originate from the decoder and is reported as the input underflow code.
    pub fn status_code(&self) -> i32 {
        match *self {
            Error::IoError(_) => -1,
            Error::InputUnderflow => -1,
            Error::MainDataUnderflow => -2,
            Error::FreeBitrateSyncNotFound => -3,
            Error::BufferTooSmall => -4,
            Error::InvalidFrameHeader(_) => -6,
            Error::InvalidSideInfo(_) => -7,
            Error::InvalidScaleFactors(_) => -8,
            Error::InvalidHuffmanCode(_) => -9,
            Error::InvalidDequantize(_) => -10,
            Error::InvalidImdct(_) => -11,
            Error::InvalidSubband(_) => -12,
        }
    }

    /// Returns true if the error is structural. A structural error invalidates the current frame
    /// only. The output of the frame is silence and decoding may continue with the next frame.
    pub fn is_structural(&self) -> bool {
        matches!(
            *self,
            Error::InvalidSideInfo(_)
                | Error::InvalidScaleFactors(_)
                | Error::InvalidHuffmanCode(_)
                | Error::InvalidDequantize(_)
                | Error::InvalidImdct(_)
                | Error::InvalidSubband(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::IoError(ref err) => err.fmt(f),
            Error::InputUnderflow => write!(f, "not enough input for frame"),
            Error::MainDataUnderflow => write!(f, "bit reservoir underflow"),
            Error::FreeBitrateSyncNotFound => {
                write!(f, "could not find next frame of free format stream")
            }
            Error::BufferTooSmall => write!(f, "output buffer too small for frame"),
            Error::InvalidFrameHeader(msg) => write!(f, "invalid frame header: {}", msg),
            Error::InvalidSideInfo(msg) => write!(f, "invalid side info: {}", msg),
            Error::InvalidScaleFactors(msg) => write!(f, "invalid scale factors: {}", msg),
            Error::InvalidHuffmanCode(msg) => write!(f, "invalid huffman code: {}", msg),
            Error::InvalidDequantize(msg) => write!(f, "dequantization failed: {}", msg),
            Error::InvalidImdct(msg) => write!(f, "imdct failed: {}", msg),
            Error::InvalidSubband(msg) => write!(f, "subband synthesis failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IoError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Convenience function to create an invalid frame header error.
pub fn frame_header_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::InvalidFrameHeader(desc))
}

/// Convenience function to create an invalid side info error.
pub fn side_info_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::InvalidSideInfo(desc))
}

/// Convenience function to create an invalid scale factors error.
pub fn scale_factors_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::InvalidScaleFactors(desc))
}

/// Convenience function to create an invalid Huffman code error.
pub fn huffman_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::InvalidHuffmanCode(desc))
}

/// Convenience function to create an IMDCT error.
pub fn imdct_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::InvalidImdct(desc))
}

/// Convenience function to create an input underflow error.
pub fn input_underflow_error<T>() -> Result<T> {
    Err(Error::InputUnderflow)
}

/// Convenience function to create a main data underflow error.
pub fn main_data_underflow_error<T>() -> Result<T> {
    Err(Error::MainDataUnderflow)
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn verify_status_codes() {
        assert_eq!(Error::InputUnderflow.status_code(), -1);
        assert_eq!(Error::MainDataUnderflow.status_code(), -2);
        assert_eq!(Error::FreeBitrateSyncNotFound.status_code(), -3);
        assert_eq!(Error::BufferTooSmall.status_code(), -4);
        assert_eq!(Error::InvalidFrameHeader("").status_code(), -6);
        assert_eq!(Error::InvalidSideInfo("").status_code(), -7);
        assert_eq!(Error::InvalidScaleFactors("").status_code(), -8);
        assert_eq!(Error::InvalidHuffmanCode("").status_code(), -9);
        assert_eq!(Error::InvalidDequantize("").status_code(), -10);
        assert_eq!(Error::InvalidImdct("").status_code(), -11);
        assert_eq!(Error::InvalidSubband("").status_code(), -12);
    }

    #[test]
    fn verify_structural_errors() {
        assert!(Error::InvalidHuffmanCode("").is_structural());
        assert!(Error::InvalidSideInfo("").is_structural());
        assert!(!Error::InvalidFrameHeader("").is_structural());
        assert!(!Error::MainDataUnderflow.is_structural());
        assert!(!Error::InputUnderflow.is_structural());
    }
}
