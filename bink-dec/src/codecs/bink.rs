//! Frame-level decoding.
//!
//! A frame payload interleaves one packet per audio track followed by
//! one size-prefixed bitstream per colour plane. The driver routes each
//! sub-packet to its decoder and exposes the decoded planes and PCM.
use bink_core::codecs::*;
use bink_core::io::byteio::ByteReader;
use log::{debug, trace};

use super::binkaud::BinkAudioDecoder;
use super::binkvid::PlaneDecoder;
use crate::demuxers::bink::{BinkHeader, Validation};

/// A borrowed view of one decoded plane. `width` doubles as the
/// scanline stride.
pub struct Plane<'a> {
    pub data:   &'a [u8],
    pub width:  usize,
    pub height: usize,
}

fn view(pd: &PlaneDecoder) -> Plane {
    Plane { data: pd.plane(), width: pd.width(), height: pd.height() }
}

/// Decoder for whole Bink frames.
#[derive(Debug)]
pub struct BinkDecoder {
    validation: Validation,
    luma:       PlaneDecoder,
    chroma:     Option<[PlaneDecoder; 2]>,
    alpha:      Option<PlaneDecoder>,
    audio:      Vec<BinkAudioDecoder>,
    enabled:    Vec<bool>,
    frame_no:   usize,
}

impl BinkDecoder {
    /// Builds the plane and audio decoders described by a parsed header.
    pub fn new(hdr: &BinkHeader) -> DecoderResult<Self> {
        if hdr.grayscale && hdr.has_alpha {
            return Err(DecoderError::NotImplemented);
        }
        let luma = PlaneDecoder::new(hdr.width, hdr.height);
        let chroma = if hdr.grayscale {
                None
            } else {
                let cw = (hdr.width  + 1) >> 1;
                let ch = (hdr.height + 1) >> 1;
                Some([PlaneDecoder::new(cw, ch), PlaneDecoder::new(cw, ch)])
            };
        let alpha = if hdr.has_alpha {
                Some(PlaneDecoder::new(hdr.width, hdr.height))
            } else {
                None
            };
        let mut audio = Vec::with_capacity(hdr.tracks.len());
        for track in hdr.tracks.iter() {
            audio.push(BinkAudioDecoder::new(u32::from(track.sample_rate), track.flags)?);
        }
        let enabled = vec![true; audio.len()];
        Ok(Self {
            validation: hdr.validation,
            luma, chroma, alpha,
            audio, enabled,
            frame_no: 0,
        })
    }

    /// Number of audio tracks the decoder was built with.
    pub fn audio_track_count(&self) -> usize { self.audio.len() }

    /// Turns decoding of one audio track on or off. Disabled tracks are
    /// skipped over without decoding.
    pub fn enable_audio_track(&mut self, index: usize, enabled: bool) {
        if let Some(en) = self.enabled.get_mut(index) {
            *en = enabled;
        }
    }

    /// The luma plane of the last decoded frame.
    pub fn luma(&self) -> Plane { view(&self.luma) }
    /// The first subsampled chroma plane, absent for grayscale video.
    pub fn chroma_u(&self) -> Option<Plane> { self.chroma.as_ref().map(|c| view(&c[0])) }
    /// The second subsampled chroma plane, absent for grayscale video.
    pub fn chroma_v(&self) -> Option<Plane> { self.chroma.as_ref().map(|c| view(&c[1])) }
    /// The alpha plane, when the container carries one.
    pub fn alpha(&self) -> Option<Plane> { self.alpha.as_ref().map(view) }

    /// Interleaved samples a track produced for the last decoded frame.
    pub fn audio_samples(&self, track: usize) -> &[i16] {
        self.audio.get(track).map_or(&[], |dec| dec.samples())
    }

    /// Decodes one frame payload. The plane buffers and audio samples of
    /// the previous frame are overwritten.
    pub fn decode_frame(&mut self, frame: &[u8]) -> DecoderResult<()> {
        debug!("decoding frame {} ({} bytes)", self.frame_no, frame.len());
        for dec in self.audio.iter_mut() {
            dec.clear_samples();
        }
        let mut br = ByteReader::new(frame);
        for (i, dec) in self.audio.iter_mut().enumerate() {
            let packet_size                     = br.read_u32le()? as usize;
            if packet_size == 0 { continue; }
            validate!(packet_size >= 4);
            let sample_count                    = br.read_u32le()? as usize;
            let payload = br.read_slice(packet_size - 4)?;
            if sample_count > 0 && self.enabled[i] {
                trace!("audio track {}: {} samples from {} bytes", i, sample_count, payload.len());
                dec.decode(payload, sample_count)?;
            }
        }

        let mut pos = br.tell();
        if let Some(ref mut alpha) = self.alpha {
            pos = decode_one_plane(frame, pos, alpha, self.validation)?;
        }
        pos = decode_one_plane(frame, pos, &mut self.luma, self.validation)?;
        if let Some(ref mut chroma) = self.chroma {
            for pd in chroma.iter_mut() {
                pos = decode_one_plane(frame, pos, pd, self.validation)?;
            }
        }
        trace!("frame {} consumed {} of {} bytes", self.frame_no, pos, frame.len());
        self.frame_no += 1;
        Ok(())
    }
}

/// Decodes one size-prefixed plane sub-stream starting at `pos` and
/// returns the position of the next one: plane sub-streams end at a
/// 32-bit word boundary and follow each other directly.
fn decode_one_plane(frame: &[u8], pos: usize, pd: &mut PlaneDecoder,
                    validation: Validation) -> DecoderResult<usize> {
    let mut br = ByteReader::new(&frame[pos.min(frame.len())..]);
    let plane_size                              = br.read_u32le()? as usize;
    if validation != Validation::Minimal {
        validate!(plane_size >= 4 && plane_size - 4 <= br.left());
    }
    let used = pd.decode(&frame[pos + 4..])?;
    trace!("plane {}x{}: {} bytes", pd.width(), pd.height(), used);
    Ok(pos + 4 + used)
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
        fn finish(mut self) -> Vec<u8> {
            if self.bits > 0 {
                self.words.push(self.cur);
            }
            let mut out = Vec::with_capacity(self.words.len() * 4);
            for w in self.words {
                out.extend_from_slice(&w.to_le_bytes());
            }
            out
        }
    }

    fn push_u32(out: &mut Vec<u8>, val: u32) {
        out.extend_from_slice(&val.to_le_bytes());
    }

    /// An 8x8 plane of fill blocks with the given colour. Length fields
    /// for an 8-pixel-wide plane are ten bits, except the sub-block
    /// types which count half-width blocks.
    fn fill_plane_stream(color: u8) -> Vec<u8> {
        let mut bw = BitWriter::new();
        for _ in 0..23 {
            bw.put(0, 4);               // identity tree descriptors
        }
        bw.put(1, 10);                  // one block type
        bw.put(1, 1);
        bw.put(6, 4);                   // fill
        bw.put(0, 9);                   // sub-block types
        bw.put(1, 10);                  // one colour
        bw.put(1, 1);
        bw.put(u32::from(color >> 4), 4);
        bw.put(u32::from(color & 0xF), 4);
        bw.put(0, 10);                  // pattern
        bw.put(0, 10);                  // x motion
        bw.put(0, 10);                  // y motion
        bw.put(0, 10);                  // intra DC
        bw.put(0, 10);                  // inter DC
        bw.put(0, 10);                  // run lengths
        bw.finish()
    }

    fn make_gray_container(color: u8) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(b"BIK");
        data.push(b'g');
        push_u32(&mut data, 0);         // patched below
        push_u32(&mut data, 1);
        push_u32(&mut data, 0x100);
        push_u32(&mut data, 1);
        push_u32(&mut data, 8);
        push_u32(&mut data, 8);
        push_u32(&mut data, 30);
        push_u32(&mut data, 1);
        push_u32(&mut data, 1 << 17);   // grayscale
        push_u32(&mut data, 0);         // no audio
        let plane = fill_plane_stream(color);
        let frame_start = (data.len() + 8) as u32;
        push_u32(&mut data, frame_start | 1);
        push_u32(&mut data, frame_start + 4 + (plane.len() as u32));
        push_u32(&mut data, 4 + (plane.len() as u32));
        data.extend_from_slice(&plane);
        let total = data.len() as u32;
        data[4..8].copy_from_slice(&total.to_le_bytes());
        data
    }

    #[test]
    fn grayscale_frame_roundtrip() {
        let data = make_gray_container(0x55);
        let hdr = BinkHeader::parse(&data, Validation::Pedantic).unwrap();
        assert!(hdr.grayscale);
        let mut dec = BinkDecoder::new(&hdr).unwrap();
        assert!(dec.chroma_u().is_none());
        let frame = hdr.frame_slice(&data, 0).unwrap();
        dec.decode_frame(frame).unwrap();
        let luma = dec.luma();
        assert_eq!(luma.width, 8);
        assert_eq!(luma.height, 8);
        assert!(luma.data.iter().all(|&p| p == 0x55));
    }

    #[test]
    fn color_planes_follow_luma() {
        // a 8x8 colour video: luma plane plus two 8-rounded chroma planes
        let mut frame = Vec::new();
        for color in [0x40u8, 0x80, 0xC0] {
            let plane = fill_plane_stream(color);
            push_u32(&mut frame, 4 + (plane.len() as u32));
            frame.extend_from_slice(&plane);
        }
        let mut hdr_data = Vec::new();
        hdr_data.extend_from_slice(b"BIK");
        hdr_data.push(b'g');
        push_u32(&mut hdr_data, 0x1000);
        push_u32(&mut hdr_data, 1);
        push_u32(&mut hdr_data, 0x1000);
        push_u32(&mut hdr_data, 1);
        push_u32(&mut hdr_data, 8);
        push_u32(&mut hdr_data, 8);
        push_u32(&mut hdr_data, 30);
        push_u32(&mut hdr_data, 1);
        push_u32(&mut hdr_data, 0);
        push_u32(&mut hdr_data, 0);
        push_u32(&mut hdr_data, 52);
        push_u32(&mut hdr_data, 52 + (frame.len() as u32));
        let hdr = BinkHeader::parse(&hdr_data, Validation::Minimal).unwrap();
        let mut dec = BinkDecoder::new(&hdr).unwrap();
        dec.decode_frame(&frame).unwrap();
        assert!(dec.luma().data.iter().all(|&p| p == 0x40));
        assert!(dec.chroma_u().unwrap().data.iter().all(|&p| p == 0x80));
        assert!(dec.chroma_v().unwrap().data.iter().all(|&p| p == 0xC0));
    }

    #[test]
    fn empty_audio_packets_are_skipped() {
        // one audio track whose packet is empty this frame
        let mut hdr_data = Vec::new();
        hdr_data.extend_from_slice(b"BIK");
        hdr_data.push(b'h');
        push_u32(&mut hdr_data, 0x1000);
        push_u32(&mut hdr_data, 1);
        push_u32(&mut hdr_data, 0x1000);
        push_u32(&mut hdr_data, 1);
        push_u32(&mut hdr_data, 8);
        push_u32(&mut hdr_data, 8);
        push_u32(&mut hdr_data, 30);
        push_u32(&mut hdr_data, 1);
        push_u32(&mut hdr_data, 1 << 17);
        push_u32(&mut hdr_data, 1);
        // track headers: max packet hint, rate and flags, track id
        hdr_data.extend_from_slice(&0u16.to_le_bytes());
        hdr_data.extend_from_slice(&2u16.to_le_bytes());
        hdr_data.extend_from_slice(&44100u16.to_le_bytes());
        hdr_data.extend_from_slice(&(1u16 << 13).to_le_bytes());
        push_u32(&mut hdr_data, 7);

        let mut frame = Vec::new();
        push_u32(&mut frame, 0);        // no audio data this frame
        let plane = fill_plane_stream(0x10);
        push_u32(&mut frame, 4 + (plane.len() as u32));
        frame.extend_from_slice(&plane);

        let frame_start = (hdr_data.len() + 8) as u32;
        push_u32(&mut hdr_data, frame_start | 1);
        push_u32(&mut hdr_data, frame_start + (frame.len() as u32));
        let hdr = BinkHeader::parse(&hdr_data, Validation::Pedantic).unwrap();

        let mut dec = BinkDecoder::new(&hdr).unwrap();
        assert_eq!(dec.audio_track_count(), 1);
        dec.decode_frame(&frame).unwrap();
        assert!(dec.audio_samples(0).is_empty());
        assert!(dec.luma().data.iter().all(|&p| p == 0x10));
    }

    #[test]
    fn grayscale_with_alpha_is_rejected() {
        let mut data = make_gray_container(0);
        data[42] |= 0x10;               // alpha bit lives at bit 20
        let hdr = BinkHeader::parse(&data, Validation::Minimal).unwrap();
        assert!(hdr.has_alpha && hdr.grayscale);
        assert_eq!(BinkDecoder::new(&hdr).unwrap_err(), DecoderError::NotImplemented);
    }
}
