// fixedmp3
// Copyright (c) 2026 The fixedmp3 Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Huffman decoding of the spectral samples (part3) of a granule channel.
//!
//! Decoded samples are stored in sign-magnitude form: the magnitude in the low 31 bits and the
//! sign in bit 31.

use fixedmp3_core::errors::{huffman_error, Result};

use crate::common::*;

use super::huffman_tables::*;
use super::{BlockType, GranuleChannel};

/// A left-justified bit cache over the main data, refilled two bytes at a time.
///
/// Once fewer than 16 bits remain in the budget, the cache is drained: the remaining bits are
/// loaded, everything after them is masked to zero, and `pad_bits` zero bits are appended so that
/// every table lookup has enough bits. Consuming any of the padding means the budget overran.
struct CodeReader<'a> {
    buf: &'a [u8],
    pos: usize,
    cache: u32,
    cached_bits: i32,
    bits_left: i32,
    pad_bits: i32,
}

/// Keeps only the first `n` bits of a left-justified cache.
#[inline(always)]
fn keep_bits(cache: u32, n: i32) -> u32 {
    cache & ((i32::MIN >> (n - 1).clamp(0, 31)) as u32)
}

impl<'a> CodeReader<'a> {
    fn new(buf: &'a [u8], bit_offset: u32, bits_left: i32) -> Self {
        let mut reader =
            CodeReader { buf, pos: 0, cache: 0, cached_bits: 0, bits_left, pad_bits: 0 };

        // Load the partially consumed first byte.
        let cached_bits = ((8 - bit_offset) & 0x7) as i32;

        if cached_bits > 0 {
            reader.cache = reader.next_byte() << (32 - cached_bits);
            reader.cached_bits = cached_bits;
        }

        reader.bits_left -= cached_bits;
        reader
    }

    /// Gets the next byte. Bytes past the end of the main data read as 0.
    #[inline(always)]
    fn next_byte(&mut self) -> u32 {
        let byte = self.buf.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        u32::from(byte)
    }

    #[inline(always)]
    fn load_byte(&mut self, shift: i32) {
        let byte = self.next_byte();
        self.cache |= u32::try_from(shift).ok().and_then(|s| byte.checked_shl(s)).unwrap_or(0);
    }

    /// Tops up the cache. Returns false if the budget is exhausted.
    fn refill(&mut self, pad_bits: i32) -> bool {
        if self.bits_left >= 16 {
            self.load_byte(24 - self.cached_bits);
            self.load_byte(16 - self.cached_bits);
            self.cached_bits += 16;
            self.bits_left -= 16;
        }
        else {
            if self.cached_bits + self.bits_left <= 0 {
                return false;
            }

            if self.bits_left > 0 {
                self.load_byte(24 - self.cached_bits);
            }
            if self.bits_left > 8 {
                self.load_byte(16 - self.cached_bits);
            }

            self.cached_bits += self.bits_left;
            self.bits_left = 0;

            self.cache = keep_bits(self.cache, self.cached_bits);
            self.pad_bits = pad_bits;
            self.cached_bits += pad_bits;
        }
        true
    }

    #[inline(always)]
    fn peek(&self, n: u32) -> usize {
        if n == 0 {
            0
        }
        else {
            (self.cache >> (32 - n.min(32))) as usize
        }
    }

    #[inline(always)]
    fn consume(&mut self, n: i32) {
        self.cache = u32::try_from(n).ok().and_then(|n| self.cache.checked_shl(n)).unwrap_or(0);
        self.cached_bits -= n;
    }

    /// Attaches the next sign bit to a non-zero magnitude.
    #[inline(always)]
    fn read_sign(&mut self, mag: i32) -> i32 {
        if mag != 0 {
            let value = mag | (self.cache & 0x8000_0000) as i32;
            self.consume(1);
            value
        }
        else {
            0
        }
    }

    /// Reads `linbits` escape bits, ensuring at least `min_bits` are cached beforehand.
    fn read_linbits(&mut self, linbits: u32, min_bits: i32) -> Option<i32> {
        if self.cached_bits + self.bits_left < min_bits {
            return None;
        }

        while self.cached_bits < min_bits {
            self.load_byte(24 - self.cached_bits);
            self.cached_bits += 8;
            self.bits_left -= 8;
        }

        if self.bits_left < 0 {
            self.cached_bits += self.bits_left;
            self.bits_left = 0;
            self.cache = keep_bits(self.cache, self.cached_bits);
        }

        let ext = self.peek(linbits) as i32;
        self.consume(linbits as i32);
        Some(ext)
    }

    /// The number of budget bits left after the consumed bits, excluding padding.
    #[inline(always)]
    fn remaining(&self) -> i32 {
        self.bits_left + self.cached_bits - self.pad_bits
    }
}

/// Decodes `xy.len()` values (pairs of x and y) of the big_values partition using pair table
/// `table_select`.
///
/// Returns the number of bits consumed, or `None` if the budget ran out or the table is invalid.
fn read_pairs(
    xy: &mut [i32],
    table_select: u8,
    bits_left: i32,
    buf: &[u8],
    bit_offset: u32,
) -> Option<i32> {
    if xy.is_empty() {
        return Some(0);
    }

    if bits_left < 0 || xy.len() & 0x1 != 0 {
        return None;
    }

    let table = PAIR_TABLES.get(usize::from(table_select))?;

    match table.kind {
        PairTableKind::NoBits => {
            xy.fill(0);
            return Some(0);
        }
        PairTableKind::Invalid => return None,
        _ => (),
    }

    let start_bits = bits_left;
    let mut bs = CodeReader::new(buf, bit_offset, bits_left);

    let mut pairs = xy.chunks_exact_mut(2);

    match table.kind {
        PairTableKind::OneShot => {
            let base = table.offset + 1;
            let max_bits = u32::from(HUFFMAN_PAIR_TABLES[table.offset] & 0xf);

            let mut pair = pairs.next();

            while pair.is_some() {
                if !bs.refill(11) {
                    return None;
                }

                // The largest index is 9 bits, plus 2 sign bits.
                while bs.cached_bits >= 11 {
                    if pair.is_none() {
                        break;
                    }

                    let cw = *HUFFMAN_PAIR_TABLES.get(base + bs.peek(max_bits))?;

                    bs.consume(i32::from(cw >> 12));

                    let x = bs.read_sign(i32::from((cw >> 4) & 0xf));
                    let y = bs.read_sign(i32::from((cw >> 8) & 0xf));

                    if bs.cached_bits < bs.pad_bits {
                        return None;
                    }

                    if let Some(out) = pair.take() {
                        out[0] = x;
                        out[1] = y;
                    }

                    pair = pairs.next();
                }
            }

            Some(start_bits - bs.remaining())
        }
        PairTableKind::Loop | PairTableKind::LoopLinbits => {
            let has_linbits = table.kind == PairTableKind::LoopLinbits;
            let mut cur = table.offset;

            let mut pair = pairs.next();

            while pair.is_some() {
                if !bs.refill(11) {
                    return None;
                }

                while bs.cached_bits >= 11 {
                    if pair.is_none() {
                        break;
                    }

                    let max_bits = u32::from(*HUFFMAN_PAIR_TABLES.get(cur)? & 0xf);
                    let cw = *HUFFMAN_PAIR_TABLES.get(cur + bs.peek(max_bits) + 1)?;

                    let len = i32::from(cw >> 12);

                    // A zero length is a link to a sub-table.
                    if len == 0 {
                        bs.consume(max_bits as i32);
                        cur += usize::from(cw);
                        continue;
                    }

                    bs.consume(len);

                    let mut x = i32::from((cw >> 4) & 0xf);
                    let mut y = i32::from((cw >> 8) & 0xf);

                    if x == 15 && has_linbits {
                        let min_bits = table.linbits as i32 + 1 + i32::from(y != 0);
                        x += bs.read_linbits(table.linbits, min_bits)?;
                    }

                    let x = bs.read_sign(x);

                    if y == 15 && has_linbits {
                        let min_bits = table.linbits as i32 + 1;
                        y += bs.read_linbits(table.linbits, min_bits)?;
                    }

                    let y = bs.read_sign(y);

                    if bs.cached_bits < bs.pad_bits {
                        return None;
                    }

                    if let Some(out) = pair.take() {
                        out[0] = x;
                        out[1] = y;
                    }

                    pair = pairs.next();
                    cur = table.offset;
                }
            }

            Some(start_bits - bs.remaining())
        }
        _ => None,
    }
}

/// Decodes quadruples of the count1 partition into `vwxy` until the budget runs out.
///
/// Returns the number of values decoded.
fn read_quads(
    vwxy: &mut [i32],
    count1table_select: u8,
    bits_left: i32,
    buf: &[u8],
    bit_offset: u32,
) -> usize {
    if bits_left <= 0 {
        return 0;
    }

    let table_idx = usize::from(count1table_select & 0x1);
    let base = QUAD_TABLE_OFFSETS[table_idx];
    let max_bits = QUAD_TABLE_MAX_BITS[table_idx];

    let mut bs = CodeReader::new(buf, bit_offset, bits_left);

    let n_vals = vwxy.len();
    let mut i = 0;

    while i + 3 < n_vals {
        if !bs.refill(10) {
            return i;
        }

        // The largest index is 6 bits, plus 4 sign bits.
        while i + 3 < n_vals && bs.cached_bits >= 10 {
            let cw = HUFFMAN_QUAD_TABLES[base + bs.peek(max_bits)];

            bs.consume(i32::from(cw >> 4));

            let v = bs.read_sign(i32::from((cw >> 3) & 0x1));
            let w = bs.read_sign(i32::from((cw >> 2) & 0x1));
            let x = bs.read_sign(i32::from((cw >> 1) & 0x1));
            let y = bs.read_sign(i32::from(cw & 0x1));

            // Reaching into the padding means the partition is complete.
            if bs.cached_bits < bs.pad_bits {
                return i;
            }

            vwxy[i..i + 4].copy_from_slice(&[v, w, x, y]);
            i += 4;
        }
    }

    i
}

/// Reads the Huffman coded spectral samples of a granule channel from the main data, starting at
/// byte `pos` and bit `bit_offset`. Exactly `part3_bits` bits are consumed; stuffing bits after the
/// count1 partition are skipped.
///
/// Returns the number of samples that may be non-zero. All samples beyond it are zeroed.
pub(super) fn read_huffman_samples(
    main_data: &[u8],
    pos: &mut usize,
    bit_offset: &mut u32,
    part3_bits: i32,
    header: &FrameHeader,
    channel: &GranuleChannel,
    samples: &mut [i32; SAMPLES_PER_GRANULE],
) -> Result<usize> {
    if part3_bits < 0 {
        return huffman_error("mp3: negative part3 length");
    }

    let bands = header.sfb_bands();

    // Band boundaries past the end of the table saturate to the end of the granule.
    let long_band = |idx: usize| bands.l.get(idx).copied().unwrap_or(SAMPLES_PER_GRANULE);

    let region0_count = usize::from(channel.region0_count);
    let region1_count = usize::from(channel.region1_count);

    // Determine the start of region1 and region2 of the big_values partition.
    let (region1_start, region2_start) =
        if channel.window_switching && channel.block_type == BlockType::Short {
            let region1_start = if !channel.mixed_block {
                3 * bands.s[((region0_count + 1) / 3).min(13)]
            }
            else if header.is_mpeg1() {
                long_band(region0_count + 1)
            }
            else {
                bands.l[6] + 2 * (bands.s[4] - bands.s[3])
            };

            // Short blocks have no region2.
            (region1_start, SAMPLES_PER_GRANULE)
        }
        else {
            (long_band(region0_count + 1), long_band(region0_count + 1 + region1_count + 1))
        };

    let big_values_end = (2 * usize::from(channel.big_values)).min(SAMPLES_PER_GRANULE);

    let region_end = [
        0,
        region1_start.min(big_values_end),
        region2_start.min(big_values_end),
        big_values_end,
    ];

    let mut bits_left = part3_bits;

    for region in 0..3 {
        let (start, end) = (region_end[region], region_end[region + 1].max(region_end[region]));

        let buf = main_data.get(*pos..).unwrap_or(&[]);

        let bits_used = match read_pairs(
            &mut samples[start..end],
            channel.table_select[region],
            bits_left,
            buf,
            *bit_offset,
        ) {
            Some(bits_used) if (0..=bits_left).contains(&bits_used) => bits_used,
            _ => return huffman_error("mp3: big_values overran the part3 budget"),
        };

        let advance = bits_used as usize + *bit_offset as usize;
        *pos += advance >> 3;
        *bit_offset = (advance & 0x7) as u32;
        bits_left -= bits_used;
    }

    // Decode the count1 partition. The bound is rounded up to the last decoded quadruple.
    let buf = main_data.get(*pos..).unwrap_or(&[]);

    let n_quads = read_quads(
        &mut samples[big_values_end..],
        channel.count1table_select,
        bits_left,
        buf,
        *bit_offset,
    );

    let non_zero_bound = big_values_end + n_quads;

    samples[non_zero_bound..].fill(0);

    // Skip any bits remaining in the budget.
    let advance = bits_left as usize + *bit_offset as usize;
    *pos += advance >> 3;
    *bit_offset = (advance & 0x7) as u32;

    Ok(non_zero_bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::parse_frame_header;

    const NEG: i32 = i32::MIN;

    #[test]
    fn verify_read_pairs_one_shot() {
        // Table 1: (1,0) -, (0,0), (1,1) + -, (0,1) +.
        let buf = [0x70, 0x90];
        let mut xy = [0i32; 8];

        assert_eq!(read_pairs(&mut xy, 1, 13, &buf, 0), Some(13));
        assert_eq!(xy, [NEG | 1, 0, 0, 0, 1, NEG | 1, 0, 1]);
    }

    #[test]
    fn verify_read_pairs_with_bit_offset() {
        // The same codes shifted right by 3 bits.
        let buf = [0x0e, 0x12, 0x00];
        let mut xy = [0i32; 8];

        assert_eq!(read_pairs(&mut xy, 1, 13, &buf, 3), Some(13));
        assert_eq!(xy, [NEG | 1, 0, 0, 0, 1, NEG | 1, 0, 1]);
    }

    #[test]
    fn verify_read_pairs_overrun() {
        let buf = [0x70, 0x90];
        let mut xy = [0i32; 8];

        assert_eq!(read_pairs(&mut xy, 1, 10, &buf, 0), None);
    }

    #[test]
    fn verify_read_pairs_invalid_tables() {
        let buf = [0xff; 8];
        let mut xy = [0i32; 4];

        assert_eq!(read_pairs(&mut xy, 4, 64, &buf, 0), None);
        assert_eq!(read_pairs(&mut xy, 14, 64, &buf, 0), None);

        // An empty region never touches the table.
        assert_eq!(read_pairs(&mut xy[..0], 4, 64, &buf, 0), Some(0));

        // Table 0 codes nothing.
        let mut xy = [7i32; 4];
        assert_eq!(read_pairs(&mut xy, 0, 64, &buf, 0), Some(0));
        assert_eq!(xy, [0; 4]);
    }

    #[test]
    fn verify_read_huffman_samples_count1() {
        let header = parse_frame_header(&[0xff, 0xfb, 0x90, 0xc0]).unwrap();

        let channel = GranuleChannel { count1table_select: 1, ..Default::default() };

        // Table B: 1111 with signs - + - +, then 0000, then the budget is exhausted.
        let main_data = [0x0a, 0xf0];

        let mut samples = [5i32; SAMPLES_PER_GRANULE];
        let mut pos = 0;
        let mut bit_offset = 0;

        let bound = read_huffman_samples(
            &main_data,
            &mut pos,
            &mut bit_offset,
            12,
            &header,
            &channel,
            &mut samples,
        )
        .unwrap();

        assert_eq!(bound, 8);
        assert_eq!(samples[..8], [NEG | 1, 1, NEG | 1, 1, 0, 0, 0, 0]);
        assert!(samples[8..].iter().all(|&s| s == 0));
        assert_eq!((pos, bit_offset), (1, 4));
    }

    #[test]
    fn verify_read_huffman_samples_big_values() {
        let header = parse_frame_header(&[0xff, 0xfb, 0x90, 0xc0]).unwrap();

        // Four pairs in region0 coded with table 1, followed by an empty count1 partition.
        let channel = GranuleChannel {
            big_values: 4,
            table_select: [1, 1, 1],
            region0_count: 15,
            region1_count: 7,
            ..Default::default()
        };

        let main_data = [0x70, 0x90];

        let mut samples = [0i32; SAMPLES_PER_GRANULE];
        let mut pos = 0;
        let mut bit_offset = 0;

        let bound = read_huffman_samples(
            &main_data,
            &mut pos,
            &mut bit_offset,
            13,
            &header,
            &channel,
            &mut samples,
        )
        .unwrap();

        assert_eq!(bound, 8);
        assert_eq!(samples[..8], [NEG | 1, 0, 0, 0, 1, NEG | 1, 0, 1]);
        assert_eq!((pos, bit_offset), (1, 5));
    }

    #[test]
    fn verify_read_huffman_samples_errors() {
        let header = parse_frame_header(&[0xff, 0xfb, 0x90, 0xc0]).unwrap();

        let mut samples = [0i32; SAMPLES_PER_GRANULE];
        let mut pos = 0;
        let mut bit_offset = 0;

        // An invalid table in a non-empty region.
        let channel = GranuleChannel { big_values: 2, table_select: [14, 0, 0], ..Default::default() };

        let result = read_huffman_samples(
            &[0xff; 4],
            &mut pos,
            &mut bit_offset,
            32,
            &header,
            &channel,
            &mut samples,
        );
        assert!(result.is_err());

        // Not enough bits for the big_values partition.
        let channel = GranuleChannel { big_values: 100, table_select: [1, 1, 1], ..Default::default() };

        let result = read_huffman_samples(
            &[0x00; 4],
            &mut pos,
            &mut bit_offset,
            8,
            &header,
            &channel,
            &mut samples,
        );
        assert!(result.is_err());
    }
}
