//! Input readers for the byte-oriented container layer and the
//! word-oriented bitstreams inside it.
pub mod bitreader;
pub mod byteio;
