//! DSP routines.
#[allow(clippy::erasing_op)]
pub mod fft;
