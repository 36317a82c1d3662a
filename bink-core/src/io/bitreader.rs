//! Bitstream reader for Bink sub-streams.
//!
//! Bink packs its bitstreams into little-endian 32-bit words and consumes
//! bits LSB-first within each word. The reader loads one word at a time;
//! bits of a partially consumed word are kept low-aligned in `cur`.
//!
//! # Examples
//!
//! ```
//! use bink_core::io::bitreader::BitReader;
//!
//! # use bink_core::io::bitreader::BitReaderResult;
//! # fn foo() -> BitReaderResult<u32> {
//! let bits: [u8; 4] = [ 42, 43, 44, 45 ];
//! let mut br = BitReader::new(&bits);
//! let value = br.read(17)?;
//! # Ok(value)
//! # }
//! ```

/// A list specifying general bitstream reading errors.
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum BitReaderError {
    /// The reader is at the end of the bitstream.
    BitstreamEnd,
    /// The requested amount of bits lies outside 1..=32.
    TooManyBitsRequested,
}

use self::BitReaderError::*;

/// A specialised `Result` type for bitstream operations.
pub type BitReaderResult<T> = Result<T, BitReaderError>;

/// Bitstream reader over 32-bit little-endian words.
#[derive(Debug,Clone)]
pub struct BitReader<'a> {
    src:  &'a [u8],
    pos:  usize,
    cur:  u32,
    bits: u8,
}

impl<'a> BitReader<'a> {
    /// Constructs a new bitstream reader over the given bytes.
    ///
    /// Any trailing bytes that do not form a whole 32-bit word are
    /// ignored; Bink sub-streams are word-padded by the container.
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0, cur: 0, bits: 0 }
    }

    /// Reports the number of bits consumed so far.
    pub fn tell(&self) -> usize {
        self.pos * 8 - (self.bits as usize)
    }

    /// Reports the amount of bits left until the end of the bitstream.
    pub fn left(&self) -> isize {
        (((self.src.len() & !3) * 8) as isize) - (self.tell() as isize)
    }

    fn next_word(&mut self) -> BitReaderResult<u32> {
        if self.pos + 4 > self.src.len() { return Err(BitstreamEnd); }
        let w = u32::from(self.src[self.pos])
              | (u32::from(self.src[self.pos + 1]) << 8)
              | (u32::from(self.src[self.pos + 2]) << 16)
              | (u32::from(self.src[self.pos + 3]) << 24);
        self.pos += 4;
        Ok(w)
    }

    /// Reads the specified amount of bits (1..=32) as an unsigned value.
    ///
    /// Bits are taken LSB-first from the current word; a read that spans
    /// a word boundary takes the remaining low bits first and the rest
    /// from the low end of the following word.
    #[inline(always)]
    pub fn read(&mut self, nbits: u8) -> BitReaderResult<u32> {
        if nbits < 1 || nbits > 32 { return Err(TooManyBitsRequested); }
        if nbits <= self.bits {
            let res = if nbits == 32 { self.cur } else { self.cur & ((1 << nbits) - 1) };
            self.cur = if nbits == 32 { 0 } else { self.cur >> nbits };
            self.bits -= nbits;
            Ok(res)
        } else {
            let need = nbits - self.bits;
            let lo   = self.cur;
            let have = self.bits;
            let w    = self.next_word()?;
            let hi   = if need == 32 { w } else { w & ((1 << need) - 1) };
            self.cur  = if need == 32 { 0 } else { w >> need };
            self.bits = 32 - need;
            Ok(lo | (hi << have))
        }
    }

    /// Reads a single bit as a boolean value.
    #[inline(always)]
    pub fn read_bool(&mut self) -> BitReaderResult<bool> {
        Ok(self.read(1)? == 1)
    }

    /// Retrieves the next bits without advancing.
    ///
    /// If the bitstream is shorter than the amount of bits requested the
    /// result is padded with zeroes.
    #[inline(always)]
    pub fn peek(&self, nbits: u8) -> u32 {
        let mut tmp = self.clone();
        match tmp.read(nbits) {
            Ok(val) => val,
            Err(_) => {
                let mut tmp = self.clone();
                let mut res = 0;
                for bit in 0..nbits {
                    match tmp.read(1) {
                        Ok(b)  => res |= b << bit,
                        Err(_) => break,
                    }
                }
                res
            }
        }
    }

    /// Skips the requested amount of bits.
    pub fn skip(&mut self, mut nbits: u32) -> BitReaderResult<()> {
        while nbits > 32 {
            self.read(32)?;
            nbits -= 32;
        }
        if nbits > 0 {
            self.read(nbits as u8)?;
        }
        Ok(())
    }

    /// Discards the rest of the current word so that the next read starts
    /// at a 32-bit word boundary. Does nothing when already aligned.
    pub fn align(&mut self) {
        self.cur  = 0;
        self.bits = 0;
    }

    /// Reads the 29-bit float encoding used by the audio bitstream:
    /// a 5-bit exponent biased by 22, a 23-bit mantissa and a sign bit.
    pub fn read_float29(&mut self) -> BitReaderResult<f32> {
        let exp                                 = self.read(5)? as i32;
        let mant                                = self.read(23)?;
        let sign                                = self.read(1)?;
        let val = (mant as f32) * ((exp - 22) as f32).exp2();
        if sign != 0 {
            Ok(-val)
        } else {
            Ok(val)
        }
    }
}
