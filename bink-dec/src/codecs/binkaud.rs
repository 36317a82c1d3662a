//! Bink audio decoding.
//!
//! Audio packets carry frequency-domain coefficients: two raw floats,
//! per-band scalar quantizers, then run-length grouped quantized values.
//! Blocks are brought back to the time domain with an inverse real DFT
//! and joined by a linear crossfade over the stored overlap window.
use bink_core::codecs::*;
use bink_core::dsp::fft::{RDFT, RDFTBuilder};
use bink_core::io::bitreader::BitReader;

use super::binkauddata::*;

/// Track flag: coefficients are DCT coded. Not supported.
pub const AUDIO_FLAG_DCT: u16 = 1 << 12;
/// Track flag: the track carries two interleaved channels. Required.
pub const AUDIO_FLAG_STEREO: u16 = 1 << 13;

/// Decoder for one stereo RDFT-coded audio track.
#[derive(Debug)]
pub struct BinkAudioDecoder {
    frame_len:  usize,
    window_len: usize,
    block_len:  usize,
    num_bands:  usize,
    bands:      [usize; MAX_BANDS + 1],
    quants_tab: [f32; 96],
    coeffs:     Vec<f32>,
    block:      Vec<i16>,
    window:     Vec<i16>,
    samples:    Vec<i16>,
    rdft:       RDFT,
    scale:      f32,
    first_frm:  bool,
}

impl BinkAudioDecoder {
    /// Creates a decoder for a track with the given per-channel sample
    /// rate and container flags. DCT-coded and mono tracks are rejected.
    pub fn new(sample_rate: u32, flags: u16) -> DecoderResult<Self> {
        if (flags & AUDIO_FLAG_DCT) != 0 {
            return Err(DecoderError::NotImplemented);
        }
        if (flags & AUDIO_FLAG_STEREO) == 0 {
            return Err(DecoderError::NotImplemented);
        }
        let per_channel = if sample_rate >= 44100 {
                2048
            } else if sample_rate >= 22050 {
                1024
            } else {
                512
            };
        let frame_len = per_channel * 2;
        let window_len = frame_len >> 4;
        let block_len = frame_len - window_len;
        let mut num_bands = 0;
        let mut bands = [0; MAX_BANDS + 1];
        init_bands(sample_rate as usize, frame_len, &mut num_bands, &mut bands);
        Ok(Self {
            frame_len, window_len, block_len,
            num_bands, bands,
            quants_tab: get_quants_table(),
            coeffs:     vec![0.0; frame_len],
            block:      vec![0; frame_len],
            window:     vec![0; window_len],
            samples:    Vec::new(),
            rdft:       RDFTBuilder::new_rdft(frame_len >> 1, false, false),
            scale:      2.0 / (frame_len as f32).sqrt(),
            first_frm:  true,
        })
    }

    /// Interleaved samples decoded since the last [`clear_samples`].
    ///
    /// [`clear_samples`]: #method.clear_samples
    pub fn samples(&self) -> &[i16] { &self.samples }

    /// Discards the accumulated output samples.
    pub fn clear_samples(&mut self) { self.samples.clear(); }

    /// Decodes one audio packet (the bytes following its sample-count
    /// word) and appends up to `sample_count` interleaved samples.
    pub fn decode(&mut self, src: &[u8], sample_count: usize) -> DecoderResult<()> {
        let mut br = BitReader::new(src);
        let mut remaining = sample_count;
        while remaining > 0 {
            br.align();
            self.decode_block(&mut br)?;
            let emit = remaining.min(self.block_len);
            self.output_block(emit);
            remaining -= emit;
        }
        Ok(())
    }

    fn decode_block(&mut self, br: &mut BitReader) -> DecoderResult<()> {
        for el in self.coeffs.iter_mut() { *el = 0.0; }
        self.coeffs[0] = br.read_float29()?;
        self.coeffs[1] = br.read_float29()?;
        let mut quants: [f32; MAX_BANDS] = [0.0; MAX_BANDS];
        for q in quants.iter_mut().take(self.num_bands) {
            let idx                             = br.read(8)? as usize;
            *q = self.quants_tab[idx.min(self.quants_tab.len() - 1)];
        }
        let mut idx = 2;
        while idx < self.frame_len {
            let width = if br.read_bool()? {
                    let run                     = br.read(4)? as usize;
                    RUN_TAB[run] * 8
                } else {
                    8
                };
            let end = (idx + width).min(self.frame_len);
            let bits                            = br.read(4)? as u8;
            if bits != 0 {
                for i in idx..end {
                    let coeff                   = br.read(bits)?;
                    if coeff != 0 {
                        if br.read_bool()? {
                            self.coeffs[i] = -(coeff as f32);
                        } else {
                            self.coeffs[i] =  coeff as f32;
                        }
                    }
                }
            }
            idx = end;
        }
        // pairs within the same band share a quantizer
        let mut band_idx = 0;
        for i in 2..self.frame_len {
            let pair = i >> 1;
            while self.bands[band_idx] <= pair { band_idx += 1; }
            self.coeffs[i] *= quants[band_idx - 1];
        }
        Ok(())
    }

    fn output_block(&mut self, emit: usize) {
        self.rdft.process(&mut self.coeffs);
        for (dst, &c) in self.block.iter_mut().zip(self.coeffs.iter()) {
            *dst = (c * self.scale) as i16;
        }
        if self.first_frm {
            self.first_frm = false;
            self.samples.extend_from_slice(&self.block[..emit]);
        } else {
            let w = self.window_len as i32;
            for i in 0..emit {
                if i < self.window_len {
                    let v = (i32::from(self.block[i]) * (i as i32)
                           + i32::from(self.window[i]) * (w - (i as i32))) / w;
                    self.samples.push(v as i16);
                } else {
                    self.samples.push(self.block[i]);
                }
            }
        }
        self.window.copy_from_slice(&self.block[self.block_len..]);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct BitWriter {
        words: Vec<u32>,
        cur:   u32,
        bits:  u8,
    }

    impl BitWriter {
        fn new() -> Self { Self { words: Vec::new(), cur: 0, bits: 0 } }
        fn put(&mut self, val: u32, nbits: u8) {
            let mut val = u64::from(val) & ((1u64 << nbits) - 1);
            let mut nbits = nbits;
            while nbits > 0 {
                let take = (32 - self.bits).min(nbits);
                self.cur |= ((val & ((1u64 << take) - 1)) as u32) << self.bits;
                self.bits += take;
                val >>= take;
                nbits -= take;
                if self.bits == 32 {
                    self.words.push(self.cur);
                    self.cur = 0;
                    self.bits = 0;
                }
            }
        }
        fn align(&mut self) {
            if self.bits > 0 {
                self.words.push(self.cur);
                self.cur = 0;
                self.bits = 0;
            }
        }
        fn finish(mut self) -> Vec<u8> {
            self.align();
            let mut out = Vec::with_capacity(self.words.len() * 4);
            for w in self.words {
                out.extend_from_slice(&w.to_le_bytes());
            }
            out
        }
    }

    fn put_silent_block(bw: &mut BitWriter, dec: &BinkAudioDecoder) {
        bw.align();
        bw.put(0, 29);                  // first two coefficients, both zero
        bw.put(0, 29);
        for _ in 0..dec.num_bands {
            bw.put(0, 8);
        }
        let mut idx = 2;
        while idx < dec.frame_len {
            bw.put(0, 1);               // next run spans eight coefficients
            bw.put(0, 4);               // coded with zero bits: all zero
            idx += 8;
        }
    }

    #[test]
    fn rejects_unsupported_tracks() {
        assert_eq!(BinkAudioDecoder::new(44100, 0).unwrap_err(), DecoderError::NotImplemented);
        assert_eq!(BinkAudioDecoder::new(44100, AUDIO_FLAG_STEREO | AUDIO_FLAG_DCT).unwrap_err(),
                   DecoderError::NotImplemented);
    }

    #[test]
    fn frame_sizes_follow_sample_rate() {
        let dec = BinkAudioDecoder::new(44100, AUDIO_FLAG_STEREO).unwrap();
        assert_eq!(dec.frame_len, 4096);
        assert_eq!(dec.window_len, 256);
        let dec = BinkAudioDecoder::new(22050, AUDIO_FLAG_STEREO).unwrap();
        assert_eq!(dec.frame_len, 2048);
        let dec = BinkAudioDecoder::new(11025, AUDIO_FLAG_STEREO).unwrap();
        assert_eq!(dec.frame_len, 1024);
        assert_eq!(dec.block_len, 960);
    }

    #[test]
    fn band_edges_are_monotonic() {
        let dec = BinkAudioDecoder::new(44100, AUDIO_FLAG_STEREO).unwrap();
        assert_eq!(dec.bands[0], 1);
        assert_eq!(dec.bands[dec.num_bands], dec.frame_len / 2);
        for pair in dec.bands[..=dec.num_bands].windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn silent_packet_decodes_to_silence() {
        let mut dec = BinkAudioDecoder::new(11025, AUDIO_FLAG_STEREO).unwrap();
        let mut bw = BitWriter::new();
        put_silent_block(&mut bw, &dec);
        let data = bw.finish();
        dec.decode(&data, dec.block_len).unwrap();
        assert_eq!(dec.samples().len(), dec.block_len);
        assert!(dec.samples().iter().all(|&s| s == 0));

        // the second block crossfades against a silent window
        dec.clear_samples();
        let mut bw = BitWriter::new();
        put_silent_block(&mut bw, &dec);
        let data = bw.finish();
        dec.decode(&data, dec.block_len).unwrap();
        assert_eq!(dec.samples().len(), dec.block_len);
        assert!(dec.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn multiple_blocks_per_packet() {
        let mut dec = BinkAudioDecoder::new(11025, AUDIO_FLAG_STEREO).unwrap();
        let mut bw = BitWriter::new();
        put_silent_block(&mut bw, &dec);
        put_silent_block(&mut bw, &dec);
        let data = bw.finish();
        dec.decode(&data, dec.block_len * 2).unwrap();
        assert_eq!(dec.samples().len(), dec.block_len * 2);
    }

    #[test]
    fn sample_count_truncates_output() {
        let mut dec = BinkAudioDecoder::new(11025, AUDIO_FLAG_STEREO).unwrap();
        let mut bw = BitWriter::new();
        put_silent_block(&mut bw, &dec);
        let data = bw.finish();
        dec.decode(&data, 100).unwrap();
        assert_eq!(dec.samples().len(), 100);
    }
}
