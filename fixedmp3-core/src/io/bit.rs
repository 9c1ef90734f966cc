// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// A `FiniteBitStream` is a bit stream that has a known length in bits.
pub trait FiniteBitStream {
    /// Gets the number of bits left unread.
    fn bits_left(&self) -> u64;
}

/// `BitReaderLtr` reads bits from most-significant to least-significant from any `&[u8]`.
///
/// The reader keeps a 32-bit cache of the next bits in the buffer. Reading never fails. Once the
/// buffer is exhausted all further bits read as 0, and the overrun is still accounted for by
/// [`BitReaderLtr::bits_read`]. Callers detect misuse by comparing the number of bits read against
/// the number of bits they expected to consume.
#[derive(Copy, Clone)]
pub struct BitReaderLtr<'a> {
    buf: &'a [u8],
    pos: usize,
    cache: u32,
    n_cached: u32,
    n_overrun: u32,
}

impl<'a> BitReaderLtr<'a> {
    /// Instantiate a new `BitReaderLtr` with the given buffer.
    pub fn new(buf: &'a [u8]) -> Self {
        BitReaderLtr { buf, pos: 0, cache: 0, n_cached: 0, n_overrun: 0 }
    }

    /// Load the next 32 bits, or all remaining bits left-aligned if fewer than 4 bytes remain.
    fn fetch_bits(&mut self) {
        let rem = &self.buf[self.pos..];

        if rem.len() >= 4 {
            self.cache = u32::from_be_bytes([rem[0], rem[1], rem[2], rem[3]]);
            self.n_cached = 32;
            self.pos += 4;
        }
        else {
            let mut bytes = [0u8; 4];
            bytes[..rem.len()].copy_from_slice(rem);

            self.cache = u32::from_be_bytes(bytes);
            self.n_cached = 8 * rem.len() as u32;
            self.pos += rem.len();
        }
    }

    /// Reads up to 32 bits and returns them right-aligned.
    #[inline(always)]
    pub fn read_bits_leq32(&mut self, bit_width: u32) -> u32 {
        debug_assert!(bit_width <= u32::BITS);

        if bit_width == 0 {
            return 0;
        }

        // Shift through 64-bit to avoid panicing when bit_width == 32.
        let mut bits = (u64::from(self.cache) >> (32 - bit_width)) as u32;

        if bit_width <= self.n_cached {
            self.cache = (u64::from(self.cache) << bit_width) as u32;
            self.n_cached -= bit_width;
        }
        else {
            let n_low = bit_width - self.n_cached;

            self.fetch_bits();

            bits |= (u64::from(self.cache) >> (32 - n_low)) as u32;

            if n_low > self.n_cached {
                self.n_overrun += n_low - self.n_cached;
                self.n_cached = 0;
            }
            else {
                self.n_cached -= n_low;
            }

            self.cache = (u64::from(self.cache) << n_low) as u32;
        }

        bits
    }

    /// Returns the next bits without consuming them.
    #[inline(always)]
    pub fn peek_bits_leq32(&self, bit_width: u32) -> u32 {
        let mut probe = *self;
        probe.read_bits_leq32(bit_width)
    }

    /// Reads a single bit as a boolean value.
    #[inline(always)]
    pub fn read_bit(&mut self) -> bool {
        self.read_bits_leq32(1) == 1
    }

    /// Ignores the specified number of bits.
    pub fn ignore_bits(&mut self, mut num_bits: u32) {
        while num_bits > 0 {
            let n = num_bits.min(16);
            self.read_bits_leq32(n);
            num_bits -= n;
        }
    }

    /// Gets the total number of bits read since the reader was created, less `start_offset`.
    ///
    /// Bits read past the end of the buffer are included.
    pub fn bits_read(&self, start_offset: u32) -> i32 {
        (8 * self.pos as i64 - i64::from(self.n_cached) + i64::from(self.n_overrun)
            - i64::from(start_offset)) as i32
    }
}

impl<'a> FiniteBitStream for BitReaderLtr<'a> {
    fn bits_left(&self) -> u64 {
        (8 * (self.buf.len() - self.pos) as u64) + u64::from(self.n_cached)
    }
}

#[cfg(test)]
mod tests {
    use super::{BitReaderLtr, FiniteBitStream};

    use rand::{Rng, SeedableRng};

    #[test]
    fn verify_bitstreamltr_read_bit() {
        let mut bs = BitReaderLtr::new(&[0b1010_1010]);

        assert_eq!(bs.read_bit(), true);
        assert_eq!(bs.read_bit(), false);
        assert_eq!(bs.read_bit(), true);
        assert_eq!(bs.read_bit(), false);
        assert_eq!(bs.read_bit(), true);
        assert_eq!(bs.read_bit(), false);
        assert_eq!(bs.read_bit(), true);
        assert_eq!(bs.read_bit(), false);

        // Reading past the end yields zeros.
        assert_eq!(bs.read_bit(), false);
        assert_eq!(bs.bits_read(0), 9);
    }

    #[test]
    fn verify_bitstreamltr_read_bits_leq32() {
        let mut bs = BitReaderLtr::new(&[0b1010_0101, 0b0111_1110, 0b1101_0011]);

        assert_eq!(bs.read_bits_leq32(4), 0b0000_0000_0000_1010);
        assert_eq!(bs.read_bits_leq32(4), 0b0000_0000_0000_0101);
        assert_eq!(bs.read_bits_leq32(13), 0b0000_1111_1101_1010);
        assert_eq!(bs.read_bits_leq32(3), 0b0000_0000_0000_0011);

        // Lower limit test.
        let mut bs = BitReaderLtr::new(&[0xff, 0xff, 0xff, 0xff]);

        assert_eq!(bs.read_bits_leq32(0), 0);
        assert_eq!(bs.bits_read(0), 0);

        // Upper limit test.
        let mut bs = BitReaderLtr::new(&[0xff, 0xff, 0xff, 0xff, 0x01, 0x23, 0x45, 0x67]);

        assert_eq!(bs.read_bits_leq32(32), 0xffff_ffff);
        assert_eq!(bs.read_bits_leq32(32), 0x0123_4567);

        // Straddle a cache refill.
        let mut bs = BitReaderLtr::new(&[0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc]);

        assert_eq!(bs.read_bits_leq32(28), 0x123_4567);
        assert_eq!(bs.read_bits_leq32(12), 0x89a);
        assert_eq!(bs.read_bits_leq32(8), 0xbc);
        assert_eq!(bs.bits_read(0), 48);
    }

    #[test]
    fn verify_bitstreamltr_peek_bits_leq32() {
        let mut bs = BitReaderLtr::new(&[0xab, 0xcd, 0xef]);

        assert_eq!(bs.peek_bits_leq32(12), 0xabc);
        assert_eq!(bs.read_bits_leq32(4), 0xa);
        assert_eq!(bs.peek_bits_leq32(16), 0xbcde);
        assert_eq!(bs.bits_read(0), 4);
    }

    #[test]
    fn verify_bitstreamltr_ignore_bits() {
        let mut bs = BitReaderLtr::new(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x01]);

        bs.ignore_bits(40);
        assert_eq!(bs.read_bit(), true);

        bs.ignore_bits(14);
        assert_eq!(bs.read_bit(), true);

        assert_eq!(bs.bits_left(), 0);
        assert_eq!(bs.bits_read(0), 56);
    }

    #[test]
    fn verify_bitstreamltr_bits_read_with_offset() {
        let mut bs = BitReaderLtr::new(&[0x0f, 0xf0]);

        // Skip a 4-bit prefix that belongs to the previous reader.
        bs.read_bits_leq32(4);
        assert_eq!(bs.read_bits_leq32(8), 0xff);
        assert_eq!(bs.bits_read(4), 8);
    }

    #[test]
    fn verify_bitstreamltr_random_widths() {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(0x6d70_3321);

        let buf: Vec<u8> = (0..256).map(|_| rng.random()).collect();

        let mut bs = BitReaderLtr::new(&buf);
        let mut bit_pos = 0usize;

        while bit_pos + 32 <= 8 * buf.len() {
            let width = rng.random_range(0..=32u32);

            let mut expected = 0u64;
            for i in 0..width as usize {
                let bit = (buf[(bit_pos + i) >> 3] >> (7 - ((bit_pos + i) & 7))) & 1;
                expected = (expected << 1) | u64::from(bit);
            }

            assert_eq!(u64::from(bs.read_bits_leq32(width)), expected);

            bit_pos += width as usize;
            assert_eq!(bs.bits_read(0), bit_pos as i32);
        }
    }
}
