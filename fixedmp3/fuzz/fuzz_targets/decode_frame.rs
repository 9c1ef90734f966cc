#![no_main]

use libfuzzer_sys::fuzz_target;

use fixedmp3::{DecoderOptions, Mp3Decoder};

fuzz_target!(|data: &[u8]| {
    // The first byte selects the decoder options, the rest is the stream.
    let Some((&mode, stream)) = data.split_first() else { return };

    let opts = DecoderOptions {
        self_contained_frames: mode & 0x1 != 0,
        max_underflow_frames: u32::from(mode >> 1),
    };

    let Ok(mut decoder) = Mp3Decoder::try_new(opts) else { return };

    let mut out = [0i16; 2 * 1152];
    let mut pos = 0;

    while pos < stream.len() {
        let mut bytes_left = stream.len() - pos;
        let before = bytes_left;

        let _ = decoder.decode_frame(&stream[pos..], &mut bytes_left, &mut out);

        pos += (before - bytes_left).max(1);
    }
});
