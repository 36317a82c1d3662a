//! Core functionality shared by the Bink decoding crates: decoder error
//! types, bitstream and byte readers, and the real FFT used by the audio
//! path.
#[allow(clippy::identity_op)]
pub mod io;

#[allow(clippy::many_single_char_names)]
#[allow(clippy::excessive_precision)]
pub mod dsp;

pub mod codecs;
