//! Decoder interface definitions.
use crate::io::bitreader::BitReaderError;
use crate::io::byteio::ByteIOError;

/// A list specifying general decoding errors.
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum DecoderError {
    /// Container header is malformed or carries an unknown signature.
    InvalidHeader,
    /// The stream uses a feature the decoder does not implement.
    NotImplemented,
    /// Provided input turned out to be incomplete.
    ShortData,
    /// Invalid input data was provided.
    InvalidData,
}

/// A specialised `Result` type for decoding operations.
pub type DecoderResult<T> = Result<T, DecoderError>;

impl std::fmt::Display for DecoderError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            DecoderError::InvalidHeader  => write!(f, "invalid header"),
            DecoderError::NotImplemented => write!(f, "unsupported feature"),
            DecoderError::ShortData      => write!(f, "unexpected end of stream"),
            DecoderError::InvalidData    => write!(f, "corrupt stream"),
        }
    }
}

impl std::error::Error for DecoderError {}

impl From<BitReaderError> for DecoderError {
    fn from(e: BitReaderError) -> Self {
        match e {
            BitReaderError::BitstreamEnd => DecoderError::ShortData,
            _ => DecoderError::InvalidData,
        }
    }
}

impl From<ByteIOError> for DecoderError {
    fn from(_: ByteIOError) -> Self { DecoderError::ShortData }
}
