//! Decoder for the Bink version 1 container: per-frame video planes
//! and interleaved 16-bit PCM audio.
//!
//! The crate works on in-memory buffers only. Parse the container
//! header with [`BinkHeader::parse`], build a [`BinkDecoder`] from it
//! and feed it one frame payload at a time:
//!
//! ```no_run
//! use bink_dec::{BinkHeader, BinkDecoder, Validation};
//!
//! # fn run(data: &[u8]) -> Result<(), bink_dec::DecoderError> {
//! let hdr = BinkHeader::parse(data, Validation::Supported)?;
//! let mut dec = BinkDecoder::new(&hdr)?;
//! for frame_no in 0..hdr.frame_count {
//!     dec.decode_frame(hdr.frame_slice(data, frame_no)?)?;
//!     let luma = dec.luma();
//!     // present luma.data, the chroma planes and the audio samples
//! }
//! # Ok(())
//! # }
//! ```
#[allow(clippy::cast_lossless)]
#[allow(clippy::identity_op)]
#[allow(clippy::needless_range_loop)]
#[allow(clippy::too_many_arguments)]
#[allow(clippy::unreadable_literal)]
pub mod codecs;
#[allow(clippy::cast_lossless)]
pub mod demuxers;

pub use crate::codecs::bink::{BinkDecoder, Plane};
pub use crate::codecs::binkaud::BinkAudioDecoder;
pub use crate::codecs::binkvid::PlaneDecoder;
pub use crate::demuxers::bink::{AudioTrack, BinkHeader, ScalingMode, Validation};
pub use bink_core::codecs::{DecoderError, DecoderResult};
