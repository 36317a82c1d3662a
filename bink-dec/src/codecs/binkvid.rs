//! Bink version 1 video plane decoding.
//!
//! A plane is decoded block row by block row. Before each row every
//! symbol bundle refills itself from the bitstream, then the block type
//! bundle drives the dispatch over the 8x8 (or 16x16 scaled) block
//! decoders.
use bink_core::codecs::*;
use bink_core::io::bitreader::*;

use super::binkviddata::*;

const SKIP_BLOCK: u8 = 0;
const SCALED_BLOCK: u8 = 1;
const MOTION_BLOCK: u8 = 2;
const RUN_BLOCK: u8 = 3;
const RESIDUE_BLOCK: u8 = 4;
const INTRA_BLOCK: u8 = 5;
const FILL_BLOCK: u8 = 6;
const INTER_BLOCK: u8 = 7;
const PATTERN_BLOCK: u8 = 8;
const RAW_BLOCK: u8 = 9;

/// Flat nibble-tree lookup; each entry packs the code length in the high
/// nibble and the symbol index in the low nibble.
#[derive(Debug)]
struct VlcTable {
    lut:      Vec<u8>,
    max_bits: u8,
}

impl VlcTable {
    fn new(codes: &[u8; 16], lens: &[u8; 16], max_bits: u8) -> Self {
        let mut lut = vec![0; 1usize << max_bits];
        for sym in 0..16 {
            let len  = lens[sym];
            let step = 1usize << len;
            let mut val = codes[sym] as usize;
            while val < lut.len() {
                lut[val] = (len << 4) | (sym as u8);
                val += step;
            }
        }
        Self { lut, max_bits }
    }
    fn decode(&self, br: &mut BitReader) -> DecoderResult<usize> {
        let entry = self.lut[br.peek(self.max_bits) as usize];
        br.skip(u32::from(entry >> 4))?;
        Ok(usize::from(entry & 0xF))
    }
}

/// The sixteen static nibble trees in flat-lookup form.
#[derive(Debug)]
pub struct BinkTrees {
    tables: [VlcTable; 16],
}

impl Default for BinkTrees {
    fn default() -> Self {
        let mut idx = 0;
        let tables = [(); 16].map(|_| {
            let tbl = VlcTable::new(&BINK_TREE_CODES[idx], &BINK_TREE_LENS[idx], BINK_TREE_MAX_BITS[idx]);
            idx += 1;
            tbl
        });
        Self { tables }
    }
}

/// Per-bundle tree state: a static table id plus a symbol permutation
/// read from the bitstream at the start of every plane.
#[derive(Debug,Default,Clone,Copy)]
struct Tree {
    id:     usize,
    syms:   [u8; 16],
}

impl Tree {
    fn read_desc(&mut self, br: &mut BitReader) -> DecoderResult<()> {
        self.id                                 = br.read(4)? as usize;
        for (i, sym) in self.syms.iter_mut().enumerate() { *sym = i as u8; }
        if self.id == 0 { return Ok(()); }
        if br.read_bool()? {
            let count                           = br.read(3)? as usize;
            let mut present: [bool; 16] = [false; 16];
            for i in 0..count {
                let sym                         = br.read(4)? as u8;
                validate!(!present[sym as usize]);
                self.syms[i] = sym;
                present[sym as usize] = true;
            }
            let mut idx = count;
            for i in 0..16 {
                if present[i] { continue; }
                self.syms[idx] = i as u8;
                idx += 1;
            }
        } else {
            // merge-shuffled form: each pass interleaves adjacent symbol
            // groups, one selector bit per drawn element until a group
            // runs dry; source and destination swap between passes
            let depth                           = br.read(2)? as usize;
            let mut src: [u8; 16] = self.syms;
            let mut dst: [u8; 16] = [0; 16];
            for pass in 0..=depth {
                let half = 1 << pass;
                for group in 0..(16 >> (pass + 1)) {
                    let base = group * half * 2;
                    let mut taken_lo = 0;
                    let mut taken_hi = 0;
                    for out in dst[base..base + half * 2].iter_mut() {
                        let from_hi = if taken_lo == half {
                                true
                            } else if taken_hi == half {
                                false
                            } else {
                                br.read_bool()?
                            };
                        if from_hi {
                            *out = src[base + half + taken_hi];
                            taken_hi += 1;
                        } else {
                            *out = src[base + taken_lo];
                            taken_lo += 1;
                        }
                    }
                }
                std::mem::swap(&mut src, &mut dst);
            }
            self.syms = src;
        }
        Ok(())
    }
    fn read_sym(&self, br: &mut BitReader, trees: &BinkTrees) -> DecoderResult<u8> {
        let idx = trees.tables[self.id].decode(br)?;
        Ok(self.syms[idx])
    }
}

/// A typed symbol queue refilled once per block row. The queue rewinds on
/// every refill; a refill that reads a zero length parks `offset` past
/// `length` which marks the bundle permanently drained for the plane.
#[derive(Debug,Default)]
struct Bundle<T: Copy + Default> {
    tree:   Tree,
    data:   Vec<T>,
    offset: usize,
    length: usize,
    bits:   u8,
}

impl<T: Copy + Default> Bundle<T> {
    fn alloc(&mut self, bits: u8) {
        self.bits = bits;
        self.data = vec![T::default(); 1 << bits];
    }
    fn reset(&mut self) {
        self.offset = 0;
        self.length = 0;
    }
    fn read_desc(&mut self, br: &mut BitReader) -> DecoderResult<()> {
        self.reset();
        self.tree.read_desc(br)
    }
    fn read_len(&mut self, br: &mut BitReader) -> DecoderResult<usize> {
        if self.offset != self.length { return Ok(0); }
        let len                                 = br.read(self.bits)? as usize;
        self.offset = 0;
        self.length = len;
        if len == 0 {
            self.offset = self.length + 1;
        }
        Ok(len)
    }
    fn next(&mut self) -> DecoderResult<T> {
        validate!(self.offset < self.length);
        let val = self.data[self.offset];
        self.offset += 1;
        Ok(val)
    }
    fn next_run(&mut self, len: usize) -> DecoderResult<&[T]> {
        validate!(self.offset + len <= self.length);
        let ret = &self.data[self.offset..][..len];
        self.offset += len;
        Ok(ret)
    }
}

const RLE_RUNS: [usize; 4] = [ 4, 8, 12, 32 ];

impl Bundle<u8> {
    fn fill_rle(&mut self, br: &mut BitReader, trees: &BinkTrees) -> DecoderResult<()> {
        let len = self.read_len(br)?;
        if len == 0 { return Ok(()); }
        if br.read_bool()? {
            let val                             = br.read(4)? as u8;
            for el in self.data[..len].iter_mut() { *el = val; }
        } else {
            let mut pos = 0;
            let mut last = 0;
            while pos < len {
                let val = self.tree.read_sym(br, trees)?;
                if val < 12 {
                    self.data[pos] = val;
                    pos += 1;
                    last = val;
                } else {
                    let run = RLE_RUNS[(val - 12) as usize];
                    validate!(pos + run <= len);
                    for el in self.data[pos..][..run].iter_mut() { *el = last; }
                    pos += run;
                }
            }
        }
        Ok(())
    }
    fn fill_pairs(&mut self, br: &mut BitReader, trees: &BinkTrees) -> DecoderResult<()> {
        let len = self.read_len(br)?;
        if len == 0 { return Ok(()); }
        for i in 0..len {
            let lo = self.tree.read_sym(br, trees)?;
            let hi = self.tree.read_sym(br, trees)?;
            self.data[i] = lo | (hi << 4);
        }
        Ok(())
    }
    fn fill_simple(&mut self, br: &mut BitReader, trees: &BinkTrees) -> DecoderResult<()> {
        let len = self.read_len(br)?;
        if len == 0 { return Ok(()); }
        if br.read_bool()? {
            let val                             = br.read(4)? as u8;
            for el in self.data[..len].iter_mut() { *el = val; }
        } else {
            for i in 0..len {
                self.data[i] = self.tree.read_sym(br, trees)?;
            }
        }
        Ok(())
    }
}

impl Bundle<i8> {
    fn fill_simple(&mut self, br: &mut BitReader, trees: &BinkTrees) -> DecoderResult<()> {
        let len = self.read_len(br)?;
        if len == 0 { return Ok(()); }
        if br.read_bool()? {
            let mut val                         = br.read(4)? as i8;
            if val != 0 && br.read_bool()? { val = -val; }
            for el in self.data[..len].iter_mut() { *el = val; }
        } else {
            for i in 0..len {
                let mut val = self.tree.read_sym(br, trees)? as i8;
                if val != 0 && br.read_bool()? { val = -val; }
                self.data[i] = val;
            }
        }
        Ok(())
    }
}

const DC_START_BITS: u8 = 11;

impl Bundle<u16> {
    fn fill(&mut self, br: &mut BitReader, start_bits: u8) -> DecoderResult<()> {
        let len = self.read_len(br)?;
        if len == 0 { return Ok(()); }
        let mut val                             = br.read(start_bits)? as u16;
        self.data[0] = val;
        let mut pos = 1;
        while pos < len {
            let seg_len = (len - pos).min(8);
            let bits                            = br.read(4)? as u8;
            if bits != 0 {
                for _ in 0..seg_len {
                    let diff                    = br.read(bits)? as u16;
                    if diff != 0 && br.read_bool()? {
                        val = val.wrapping_sub(diff);
                    } else {
                        val = val.wrapping_add(diff);
                    }
                    self.data[pos] = val;
                    pos += 1;
                }
            } else {
                for _ in 0..seg_len {
                    self.data[pos] = val;
                    pos += 1;
                }
            }
        }
        Ok(())
    }
}

impl Bundle<i16> {
    fn fill(&mut self, br: &mut BitReader, start_bits: u8) -> DecoderResult<()> {
        let len = self.read_len(br)?;
        if len == 0 { return Ok(()); }
        let mut val                             = br.read(start_bits - 1)? as i16;
        if val != 0 && br.read_bool()? {
            val = -val;
        }
        self.data[0] = val;
        let mut pos = 1;
        while pos < len {
            let seg_len = (len - pos).min(8);
            let bits                            = br.read(4)? as u8;
            if bits != 0 {
                for _ in 0..seg_len {
                    let mut diff                = br.read(bits)? as i16;
                    if diff != 0 && br.read_bool()? {
                        diff = -diff;
                    }
                    val = val.wrapping_add(diff);
                    self.data[pos] = val;
                    pos += 1;
                }
            } else {
                for _ in 0..seg_len {
                    self.data[pos] = val;
                    pos += 1;
                }
            }
        }
        Ok(())
    }
}

/// The colour bundle pairs a low-nibble tree with sixteen high-nibble
/// trees; the previous high nibble selects the tree for the next one.
///
/// Streams coding colours as signed deltas are anticipated by the state
/// but not decodable; filling a bundle constructed signed fails.
#[derive(Debug,Default)]
struct ColorBundle {
    hi_trees: [Tree; 16],
    lo_tree:  Tree,
    last_hi:  usize,
    signed:   bool,
    data:     Vec<u8>,
    offset:   usize,
    length:   usize,
    bits:     u8,
}

impl ColorBundle {
    fn alloc(&mut self, bits: u8) {
        self.bits = bits;
        self.data = vec![0; 1 << bits];
    }
    fn read_desc(&mut self, br: &mut BitReader) -> DecoderResult<()> {
        self.offset = 0;
        self.length = 0;
        self.last_hi = 0;
        for tree in self.hi_trees.iter_mut() {
            tree.read_desc(br)?;
        }
        self.lo_tree.read_desc(br)
    }
    fn fill(&mut self, br: &mut BitReader, trees: &BinkTrees) -> DecoderResult<()> {
        if self.offset != self.length { return Ok(()); }
        if self.signed { return Err(DecoderError::NotImplemented); }
        let len                                 = br.read(self.bits)? as usize;
        self.offset = 0;
        self.length = len;
        if len == 0 {
            self.offset = self.length + 1;
            return Ok(());
        }
        let is_memset = br.read_bool()?;
        let count = if is_memset { 1 } else { len };
        for i in 0..count {
            let hi = self.hi_trees[self.last_hi].read_sym(br, trees)?;
            self.last_hi = hi as usize;
            let lo = self.lo_tree.read_sym(br, trees)?;
            self.data[i] = (hi << 4) | lo;
        }
        if is_memset {
            let val = self.data[0];
            for el in self.data[1..len].iter_mut() { *el = val; }
        }
        Ok(())
    }
    fn next(&mut self) -> DecoderResult<u8> {
        validate!(self.offset < self.length);
        let val = self.data[self.offset];
        self.offset += 1;
        Ok(val)
    }
    fn next_run(&mut self, len: usize) -> DecoderResult<&[u8]> {
        validate!(self.offset + len <= self.length);
        let ret = &self.data[self.offset..][..len];
        self.offset += len;
        Ok(ret)
    }
}

const A1: i32 =  2896;
const A2: i32 =  2217;
const A3: i32 =  3784;
const A4: i32 = -5352;

macro_rules! idct {
    ($src: expr, $sstep: expr, $dst: expr, $dstep: expr, $off: expr, $bias: expr, $shift: expr) => {
        let a0 = $src[$off + 0 * $sstep] + $src[$off + 4 * $sstep];
        let a1 = $src[$off + 0 * $sstep] - $src[$off + 4 * $sstep];
        let a2 = $src[$off + 2 * $sstep] + $src[$off + 6 * $sstep];
        let a3 = A1.wrapping_mul($src[$off + 2 * $sstep] - $src[$off + 6 * $sstep]) >> 11;
        let a4 = $src[$off + 5 * $sstep] + $src[$off + 3 * $sstep];
        let a5 = $src[$off + 5 * $sstep] - $src[$off + 3 * $sstep];
        let a6 = $src[$off + 1 * $sstep] + $src[$off + 7 * $sstep];
        let a7 = $src[$off + 1 * $sstep] - $src[$off + 7 * $sstep];
        let b0 = a4 + a6;
        let b1 = A3.wrapping_mul(a5 + a7) >> 11;
        let b2 = (A4.wrapping_mul(a5) >> 11) - b0 + b1;
        let b3 = (A1.wrapping_mul(a6 - a4) >> 11) - b2;
        let b4 = (A2.wrapping_mul(a7) >> 11) + b3 - b1;
        let c0 = a0 + a2;
        let c1 = a0 - a2;
        let c2 = a1 + (a3 - a2);
        let c3 = a1 - (a3 - a2);

        $dst[$off + 0 * $dstep] = (c0 + b0 + $bias) >> $shift;
        $dst[$off + 1 * $dstep] = (c2 + b2 + $bias) >> $shift;
        $dst[$off + 2 * $dstep] = (c3 + b3 + $bias) >> $shift;
        $dst[$off + 3 * $dstep] = (c1 - b4 + $bias) >> $shift;
        $dst[$off + 4 * $dstep] = (c1 + b4 + $bias) >> $shift;
        $dst[$off + 5 * $dstep] = (c3 - b3 + $bias) >> $shift;
        $dst[$off + 6 * $dstep] = (c2 - b2 + $bias) >> $shift;
        $dst[$off + 7 * $dstep] = (c0 - b0 + $bias) >> $shift;
    };
}

/// Two-pass fixed-point IDCT with the per-position dequantizers folded
/// into the column pass. A column whose seven non-DC inputs are all zero
/// short-circuits to the scaled DC value.
fn idct2d(coeffs: &[i32; 64], qmat: &[i32; 64], out: &mut [i32; 64]) {
    let mut deq: [i32; 64] = [0; 64];
    for i in 0..64 {
        deq[i] = coeffs[i].wrapping_mul(qmat[i]) >> 11;
    }
    let mut tmp: [i32; 64] = [0; 64];
    for i in 0..8 {
        let tail = deq[i +  8] | deq[i + 16] | deq[i + 24] | deq[i + 32]
                 | deq[i + 40] | deq[i + 48] | deq[i + 56];
        if tail == 0 {
            for j in 0..8 { tmp[i + j * 8] = deq[i]; }
        } else {
            idct!(deq, 8, tmp, 8, i, 0, 0);
        }
    }
    let mut row: [i32; 8] = [0; 8];
    for (i, srow) in tmp.chunks_exact(8).enumerate() {
        idct!(srow, 1, row, 1, 0, 0x7F, 8);
        out[i * 8..][..8].copy_from_slice(&row);
    }
}

fn idct_put(dst: &mut [u8], mut off: usize, stride: usize, coeffs: &[i32; 64], qmat: &[i32; 64]) {
    let mut block: [i32; 64] = [0; 64];
    idct2d(coeffs, qmat, &mut block);
    for src in block.chunks_exact(8) {
        for i in 0..8 {
            dst[off + i] = src[i].max(0).min(255) as u8;
        }
        off += stride;
    }
}

fn idct_add(dst: &mut [u8], mut off: usize, stride: usize, coeffs: &[i32; 64], qmat: &[i32; 64]) {
    let mut block: [i32; 64] = [0; 64];
    idct2d(coeffs, qmat, &mut block);
    for src in block.chunks_exact(8) {
        for i in 0..8 {
            let v = i32::from(dst[off + i]) + src[i];
            dst[off + i] = v.max(0).min(255) as u8;
        }
        off += stride;
    }
}

fn put_block(block: &[u8; 64], dst: &mut [u8], mut off: usize, stride: usize, scaled: bool) {
    if !scaled {
        for src in block.chunks_exact(8) {
            dst[off..][..8].copy_from_slice(src);
            off += stride;
        }
    } else {
        for src in block.chunks_exact(8) {
            for i in 0..8 {
                dst[off + i * 2 + 0] = src[i];
                dst[off + i * 2 + 1] = src[i];
            }
            off += stride;
            for i in 0..8 {
                dst[off + i * 2 + 0] = src[i];
                dst[off + i * 2 + 1] = src[i];
            }
            off += stride;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn copy_block(prev: &[u8], dst: &mut [u8], mut off: usize, stride: usize,
              width: usize, height: usize, bx: usize, by: usize,
              dx: i8, dy: i8) -> DecoderResult<()> {
    let xpos = ((bx * 8) as isize) + (dx as isize);
    let ypos = ((by * 8) as isize) + (dy as isize);
    validate!((xpos >= 0) && (xpos + 8 <= (width as isize)));
    validate!((ypos >= 0) && (ypos + 8 <= (height as isize)));
    let mut poff = (xpos as usize) + (ypos as usize) * stride;
    for _ in 0..8 {
        let (src, out) = (&prev[poff..][..8], &mut dst[off..][..8]);
        out.copy_from_slice(src);
        off += stride;
        poff += stride;
    }
    Ok(())
}

fn add_residue(block: &[i32; 64], dst: &mut [u8], mut off: usize, stride: usize) {
    for src in block.chunks_exact(8) {
        for i in 0..8 {
            let v = i32::from(dst[off + i]) + src[i];
            dst[off + i] = v.max(0).min(255) as u8;
        }
        off += stride;
    }
}

/// One kind of queued work while subdividing a block on a bit plane.
#[derive(Clone,Copy,PartialEq)]
enum SubdivOp {
    /// A 20-coefficient region. Opening it probes its four leading
    /// positions and leaves a `Fork` over the rest in the same slot.
    Region,
    /// Fans a region's remaining sixteen positions out into four
    /// quads (itself plus three freshly queued ones).
    Fork,
    /// A four-position group probed directly.
    Quad,
    /// A single position deferred from an earlier probe.
    Single,
    /// Slot already consumed; skipped without reading a gate bit.
    Done,
}

use self::SubdivOp::*;

#[derive(Clone,Copy)]
struct Op {
    pos:  usize,
    kind: SubdivOp,
}

/// Fixed arena for subdivision ops. Region work grows upward from the
/// middle while deferred singles grow downward, so twice the block size
/// bounds both ends.
struct OpQueue {
    ops:   [Op; 128],
    start: usize,
    end:   usize,
}

impl OpQueue {
    fn new(seed: &[(usize, SubdivOp)]) -> Self {
        let mut queue = Self {
            ops:   [Op { pos: 0, kind: Done }; 128],
            start: 64,
            end:   64,
        };
        for &(pos, kind) in seed {
            let slot = queue.end;
            queue.ops[slot] = Op { pos, kind };
            queue.end += 1;
        }
        queue
    }
    fn push(&mut self, pos: usize, kind: SubdivOp) {
        let slot = self.end;
        self.ops[slot] = Op { pos, kind };
        self.end += 1;
    }
    fn defer(&mut self, pos: usize) {
        self.start -= 1;
        self.ops[self.start] = Op { pos, kind: Single };
    }
}

/// Reads one coefficient on the plane whose magnitude bit is
/// `1 << (bit_count - 1)`, followed by its sign bit.
fn read_coeff(br: &mut BitReader, bit_count: u8) -> DecoderResult<i32> {
    let val = if bit_count == 1 {
            1
        } else {
            let low_bits = bit_count - 1;
            (1 << low_bits) | (br.read(low_bits)? as i32)
        };
    if br.read_bool()? {
        Ok(-val)
    } else {
        Ok(val)
    }
}

/// Reads the AC coefficients of a transform block by walking bit planes
/// of decreasing magnitude over a subdivision op queue, then returns the
/// 4-bit quantizer index trailing the coefficient data.
fn read_dct_coefficients(br: &mut BitReader, block: &mut [i32; 64]) -> DecoderResult<usize> {
    let mut queue = OpQueue::new(&[
        ( 4, Region), (24, Region), (44, Region),
        ( 1, Single), ( 2, Single), ( 3, Single),
    ]);

    let mut bit_count                           = br.read(4)? as u8;
    while bit_count > 0 {
        let mut cursor = queue.start;
        while cursor < queue.end {
            let op = queue.ops[cursor];
            if op.kind == Done || !br.read_bool()? {
                cursor += 1;
                continue;
            }
            match op.kind {
                Region => {
                        queue.ops[cursor] = Op { pos: op.pos + 4, kind: Fork };
                        for probe in op.pos..op.pos + 4 {
                            if br.read_bool()? {
                                queue.defer(probe);
                            } else {
                                block[BINK_SCAN[probe]] = read_coeff(br, bit_count)?;
                            }
                        }
                    },
                Fork => {
                        queue.ops[cursor].kind = Quad;
                        for quad in 1..4 {
                            queue.push(op.pos + quad * 4, Quad);
                        }
                    },
                Quad => {
                        queue.ops[cursor].kind = Done;
                        cursor += 1;
                        for probe in op.pos..op.pos + 4 {
                            if br.read_bool()? {
                                queue.defer(probe);
                            } else {
                                block[BINK_SCAN[probe]] = read_coeff(br, bit_count)?;
                            }
                        }
                    },
                Single => {
                        block[BINK_SCAN[op.pos]] = read_coeff(br, bit_count)?;
                        queue.ops[cursor].kind = Done;
                        cursor += 1;
                    },
                Done => unreachable!(),
            };
        }
        bit_count -= 1;
    }

    Ok(br.read(4)? as usize)
}

/// Residues placed so far: their block positions, so later planes can
/// refine them, and the remaining magnitude-bit budget.
struct ResidueSink<'a> {
    block:  &'a mut [i32; 64],
    placed: [usize; 64],
    count:  usize,
    budget: usize,
}

impl<'a> ResidueSink<'a> {
    fn new(block: &'a mut [i32; 64], budget: usize) -> Self {
        Self { block, placed: [0; 64], count: 0, budget }
    }
    /// Spends one magnitude bit; true once the budget is gone.
    fn spend(&mut self) -> bool {
        if self.budget == 0 {
            return true;
        }
        self.budget -= 1;
        false
    }
    /// Places a fresh residue of magnitude `mask`, sign from one bit.
    fn place(&mut self, br: &mut BitReader, idx: usize, mask: i32) -> DecoderResult<bool> {
        self.placed[self.count] = idx;
        self.count += 1;
        self.block[idx] = if br.read_bool()? { -mask } else { mask };
        Ok(self.spend())
    }
    /// Grows each already placed residue whose refinement bit is set by
    /// `mask` away from zero.
    fn refine(&mut self, br: &mut BitReader, mask: i32) -> DecoderResult<bool> {
        for i in 0..self.count {
            if !br.read_bool()? { continue; }
            let idx = self.placed[i];
            if self.block[idx] < 0 {
                self.block[idx] -= mask;
            } else {
                self.block[idx] += mask;
            }
            if self.spend() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Reads the sparse residue of a motion-compensated block. At most
/// `masks_count + 1` magnitude bits are emitted; once the budget runs
/// out the function returns at once and any queued ops are dropped.
fn read_residue(br: &mut BitReader, block: &mut [i32; 64], masks_count: usize) -> DecoderResult<()> {
    let mut queue = OpQueue::new(&[
        ( 4, Region), (24, Region), (44, Region), ( 0, Quad),
    ]);
    let mut sink = ResidueSink::new(block, masks_count);

    let plane_count                             = br.read(3)?;
    let mut mask = if plane_count == 0 { 0 } else { 1i32 << (plane_count - 1) };
    while mask > 0 {
        if sink.refine(br, mask)? {
            return Ok(());
        }
        let mut cursor = queue.start;
        while cursor < queue.end {
            let op = queue.ops[cursor];
            if op.kind == Done || !br.read_bool()? {
                cursor += 1;
                continue;
            }
            match op.kind {
                Region => {
                        queue.ops[cursor] = Op { pos: op.pos + 4, kind: Fork };
                        for probe in op.pos..op.pos + 4 {
                            if br.read_bool()? {
                                queue.defer(probe);
                            } else if sink.place(br, BINK_SCAN[probe], mask)? {
                                return Ok(());
                            }
                        }
                    },
                Fork => {
                        queue.ops[cursor].kind = Quad;
                        for quad in 1..4 {
                            queue.push(op.pos + quad * 4, Quad);
                        }
                    },
                Quad => {
                        queue.ops[cursor].kind = Done;
                        cursor += 1;
                        for probe in op.pos..op.pos + 4 {
                            if br.read_bool()? {
                                queue.defer(probe);
                            } else if sink.place(br, BINK_SCAN[probe], mask)? {
                                return Ok(());
                            }
                        }
                    },
                Single => {
                        if sink.place(br, BINK_SCAN[op.pos], mask)? {
                            return Ok(());
                        }
                        queue.ops[cursor].kind = Done;
                        cursor += 1;
                    },
                Done => unreachable!(),
            };
        }
        mask >>= 1;
    }

    Ok(())
}

fn calc_len(size: usize) -> u8 {
    (32 - ((size + 511) as u32).leading_zeros()) as u8
}

/// Decoder for one colour plane, double-buffered against the previous
/// frame. Chroma planes are constructed with the halved dimensions.
#[derive(Debug)]
pub struct PlaneDecoder {
    width:      usize,
    height:     usize,
    bufs:       [Vec<u8>; 2],
    cur_buf:    usize,
    trees:      BinkTrees,

    btype:      Bundle<u8>,
    sbtype:     Bundle<u8>,
    colors:     ColorBundle,
    pattern:    Bundle<u8>,
    xoff:       Bundle<i8>,
    yoff:       Bundle<i8>,
    intradc:    Bundle<u16>,
    interdc:    Bundle<i16>,
    run:        Bundle<u8>,
}

impl PlaneDecoder {
    pub fn new(width: usize, height: usize) -> Self {
        let width  = (width  + 7) & !7;
        let height = (height + 7) & !7;
        let bw = width >> 3;
        let mut pd = Self {
            width, height,
            bufs:       [vec![0; width * height], vec![0; width * height]],
            cur_buf:    0,
            trees:      BinkTrees::default(),
            btype:      Bundle::default(),
            sbtype:     Bundle::default(),
            colors:     ColorBundle::default(),
            pattern:    Bundle::default(),
            xoff:       Bundle::default(),
            yoff:       Bundle::default(),
            intradc:    Bundle::default(),
            interdc:    Bundle::default(),
            run:        Bundle::default(),
        };
        pd.btype.alloc(calc_len(bw));
        pd.sbtype.alloc(calc_len(width >> 4));
        pd.colors.alloc(calc_len(bw * 64));
        pd.pattern.alloc(calc_len(bw * 8));
        pd.xoff.alloc(calc_len(bw));
        pd.yoff.alloc(calc_len(bw));
        pd.intradc.alloc(calc_len(bw));
        pd.interdc.alloc(calc_len(bw));
        pd.run.alloc(calc_len(bw * 48));
        pd
    }

    /// Plane width rounded up to whole blocks; equals the scanline stride.
    pub fn width(&self) -> usize { self.width }
    /// Plane height rounded up to whole blocks.
    pub fn height(&self) -> usize { self.height }
    /// The most recently decoded plane.
    pub fn plane(&self) -> &[u8] { &self.bufs[self.cur_buf] }

    /// Decodes one plane sub-stream, swapping the double buffer first.
    /// Returns the number of bytes consumed up to the closing 32-bit
    /// word boundary.
    pub fn decode(&mut self, src: &[u8]) -> DecoderResult<usize> {
        self.cur_buf ^= 1;
        let mut bufs = std::mem::take(&mut self.bufs);
        let mut br = BitReader::new(src);
        let ret = {
            let (head, tail) = bufs.split_at_mut(1);
            let (dst, prev) = if self.cur_buf == 0 {
                (&mut head[0][..], &tail[0][..])
            } else {
                (&mut tail[0][..], &head[0][..])
            };
            self.decode_plane(&mut br, prev, dst)
        };
        self.bufs = bufs;
        ret?;
        br.align();
        Ok(br.tell() / 8)
    }

    fn read_bundle_descs(&mut self, br: &mut BitReader) -> DecoderResult<()> {
        self.btype.read_desc(br)?;
        self.sbtype.read_desc(br)?;
        self.colors.read_desc(br)?;
        self.pattern.read_desc(br)?;
        self.xoff.read_desc(br)?;
        self.yoff.read_desc(br)?;
        self.intradc.reset();
        self.interdc.reset();
        self.run.read_desc(br)?;
        Ok(())
    }

    fn refill_bundles(&mut self, br: &mut BitReader) -> DecoderResult<()> {
        self.btype.fill_rle(br, &self.trees)?;
        self.sbtype.fill_rle(br, &self.trees)?;
        self.colors.fill(br, &self.trees)?;
        self.pattern.fill_pairs(br, &self.trees)?;
        self.xoff.fill_simple(br, &self.trees)?;
        self.yoff.fill_simple(br, &self.trees)?;
        self.intradc.fill(br, DC_START_BITS)?;
        self.interdc.fill(br, DC_START_BITS)?;
        self.run.fill_simple(br, &self.trees)?;
        Ok(())
    }

    fn decode_plane(&mut self, br: &mut BitReader, prev: &[u8], dst: &mut [u8]) -> DecoderResult<()> {
        let bw = self.width >> 3;
        let bh = self.height >> 3;
        let stride = self.width;
        self.read_bundle_descs(br)?;
        let mut off = 0;
        for by in 0..bh {
            self.refill_bundles(br)?;
            let mut bx = 0;
            while bx < bw {
                let btype = self.btype.next()?;
                if btype == SCALED_BLOCK && (by & 1) == 1 {
                    // the even row above already emitted this block
                    bx += 2;
                    continue;
                }
                self.handle_block(br, bx, by, prev, dst, off + bx * 8, stride, btype, false)?;
                if btype == SCALED_BLOCK {
                    bx += 1;
                }
                bx += 1;
            }
            off += stride * 8;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn handle_block(&mut self, br: &mut BitReader, bx: usize, by: usize,
                    prev: &[u8], dst: &mut [u8], off: usize, stride: usize,
                    btype: u8, scaled: bool) -> DecoderResult<()> {
        let mut oblock: [u8; 64] = [0; 64];
        let mut coeffs: [i32; 64] = [0; 64];
        match btype {
            SKIP_BLOCK => {
                    validate!(!scaled);
                    copy_block(prev, dst, off, stride, self.width, self.height, bx, by, 0, 0)?;
                },
            SCALED_BLOCK => {
                    validate!(!scaled);
                    validate!(bx * 8 + 16 <= self.width && by * 8 + 16 <= self.height);
                    let sbtype = self.sbtype.next()?;
                    match sbtype {
                        RUN_BLOCK | INTRA_BLOCK | FILL_BLOCK | PATTERN_BLOCK | RAW_BLOCK => {},
                        _ => return Err(DecoderError::NotImplemented),
                    };
                    self.handle_block(br, bx, by, prev, dst, off, stride, sbtype, true)?;
                },
            MOTION_BLOCK => {
                    validate!(!scaled);
                    let dx = self.xoff.next()?;
                    let dy = self.yoff.next()?;
                    copy_block(prev, dst, off, stride, self.width, self.height, bx, by, dx, dy)?;
                },
            RUN_BLOCK => {
                    let scan = &BINK_PATTERNS[br.read(4)? as usize];
                    let mut idx = 0;
                    while idx < 63 {
                        let run = (self.run.next()? as usize) + 1;
                        validate!(idx + run <= 64);
                        if br.read_bool()? {
                            let val = self.colors.next()?;
                            for j in 0..run {
                                oblock[scan[idx + j] as usize] = val;
                            }
                            idx += run;
                        } else {
                            for _ in 0..run {
                                oblock[scan[idx] as usize] = self.colors.next()?;
                                idx += 1;
                            }
                        }
                    }
                    if idx == 63 {
                        oblock[scan[63] as usize] = self.colors.next()?;
                    }
                    put_block(&oblock, dst, off, stride, scaled);
                },
            RESIDUE_BLOCK => {
                    validate!(!scaled);
                    let dx = self.xoff.next()?;
                    let dy = self.yoff.next()?;
                    copy_block(prev, dst, off, stride, self.width, self.height, bx, by, dx, dy)?;
                    let nmasks                  = br.read(7)? as usize;
                    read_residue(br, &mut coeffs, nmasks)?;
                    add_residue(&coeffs, dst, off, stride);
                },
            INTRA_BLOCK => {
                    coeffs[0] = i32::from(self.intradc.next()?);
                    let q = read_dct_coefficients(br, &mut coeffs)?;
                    if !scaled {
                        idct_put(dst, off, stride, &coeffs, &BINK_INTRA_QUANT[q]);
                    } else {
                        idct_put(&mut oblock, 0, 8, &coeffs, &BINK_INTRA_QUANT[q]);
                        put_block(&oblock, dst, off, stride, scaled);
                    }
                },
            FILL_BLOCK => {
                    let fill = self.colors.next()?;
                    oblock = [fill; 64];
                    put_block(&oblock, dst, off, stride, scaled);
                },
            INTER_BLOCK => {
                    validate!(!scaled);
                    let dx = self.xoff.next()?;
                    let dy = self.yoff.next()?;
                    copy_block(prev, dst, off, stride, self.width, self.height, bx, by, dx, dy)?;
                    coeffs[0] = i32::from(self.interdc.next()?);
                    let q = read_dct_coefficients(br, &mut coeffs)?;
                    idct_add(dst, off, stride, &coeffs, &BINK_INTER_QUANT[q]);
                },
            PATTERN_BLOCK => {
                    let clr: [u8; 2] = [ self.colors.next()?, self.colors.next()? ];
                    for i in 0..8 {
                        let pattern = self.pattern.next()? as usize;
                        let lo = &BINK_PATTERN_LANES[pattern & 0xF];
                        let hi = &BINK_PATTERN_LANES[pattern >> 4];
                        for j in 0..4 {
                            oblock[i * 8 + j]     = clr[lo[j]];
                            oblock[i * 8 + 4 + j] = clr[hi[j]];
                        }
                    }
                    put_block(&oblock, dst, off, stride, scaled);
                },
            RAW_BLOCK => {
                    for i in 0..8 {
                        let src = self.colors.next_run(8)?;
                        oblock[i * 8..][..8].copy_from_slice(src);
                    }
                    put_block(&oblock, dst, off, stride, scaled);
                },
            _ => { return Err(DecoderError::NotImplemented); },
        };
        Ok(())
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

    fn put_identity_descs(bw: &mut BitWriter) {
        // btype, sbtype, 16 colour-high trees, colour-low, pattern,
        // xoff, yoff, run -- all table 0 with the identity permutation
        for _ in 0..23 {
            bw.put(0, 4);
        }
    }

    #[test]
    fn static_trees_roundtrip() {
        let trees = BinkTrees::default();
        for t in 0..16 {
            for sym in 0..16 {
                let mut bw = BitWriter::new();
                bw.put(u32::from(BINK_TREE_CODES[t][sym]), BINK_TREE_LENS[t][sym]);
                let data = bw.finish();
                let mut br = BitReader::new(&data);
                assert_eq!(trees.tables[t].decode(&mut br).unwrap(), sym);
            }
        }
    }

    #[test]
    fn tree_id0_is_identity() {
        let trees = BinkTrees::default();
        let mut bw = BitWriter::new();
        bw.put(0, 4);                   // tree id 0
        for v in [0x3u32, 0xC, 0x7, 0x0] {
            bw.put(v, 4);
        }
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        let mut tree = Tree::default();
        tree.read_desc(&mut br).unwrap();
        assert_eq!(tree.syms, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        for v in [0x3u8, 0xC, 0x7, 0x0] {
            assert_eq!(tree.read_sym(&mut br, &trees).unwrap(), v);
        }
    }

    #[test]
    fn tree_symbol_lists_are_permutations() {
        // explicit symbol list: first three given, the rest ascending
        let mut bw = BitWriter::new();
        bw.put(2, 4);                   // tree id
        bw.put(1, 1);                   // first-given form
        bw.put(3, 3);                   // three symbols follow
        bw.put(7, 4);
        bw.put(2, 4);
        bw.put(9, 4);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        let mut tree = Tree::default();
        tree.read_desc(&mut br).unwrap();
        assert_eq!(&tree.syms[..6], &[7, 2, 9, 0, 1, 3]);
        let mut sorted = tree.syms;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);

        // merge-shuffled form stays a permutation for any gate bits
        let mut bw = BitWriter::new();
        bw.put(5, 4);                   // tree id
        bw.put(0, 1);                   // shuffle form
        bw.put(3, 2);                   // four merge passes
        for i in 0..96 {
            bw.put((i & 1) as u32, 1);
        }
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        let mut tree = Tree::default();
        tree.read_desc(&mut br).unwrap();
        let mut sorted = tree.syms;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn bundle_rle_memset() {
        let trees = BinkTrees::default();
        let mut bundle: Bundle<u8> = Bundle::default();
        bundle.alloc(10);
        let mut bw = BitWriter::new();
        bw.put(5, 10);                  // five values
        bw.put(1, 1);                   // memset form
        bw.put(0xA, 4);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        bundle.fill_rle(&mut br, &trees).unwrap();
        for _ in 0..5 {
            assert_eq!(bundle.next().unwrap(), 0xA);
        }
        assert!(bundle.next().is_err());
    }

    #[test]
    fn bundle_rle_runs() {
        let trees = BinkTrees::default();
        let mut bundle: Bundle<u8> = Bundle::default();
        bundle.alloc(10);
        let mut bw = BitWriter::new();
        bw.put(8, 10);                  // eight values
        bw.put(0, 1);
        // id-0 tree symbols: 3, then a copy-4 run, then 5, 0, 0
        for v in [3u32, 12, 5, 0, 0] {
            bw.put(v, 4);
        }
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        bundle.fill_rle(&mut br, &trees).unwrap();
        assert_eq!(&bundle.data[..8], &[3, 3, 3, 3, 3, 5, 0, 0]);
    }

    #[test]
    fn bundle_refill_is_noop_until_drained() {
        let trees = BinkTrees::default();
        let mut bundle: Bundle<u8> = Bundle::default();
        bundle.alloc(10);
        let mut bw = BitWriter::new();
        bw.put(2, 10);
        bw.put(1, 1);
        bw.put(0x7, 4);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        bundle.fill_rle(&mut br, &trees).unwrap();
        assert_eq!(bundle.next().unwrap(), 7);
        // one value still queued: a refill must not touch the stream
        let empty: [u8; 0] = [];
        let mut br = BitReader::new(&empty);
        bundle.fill_rle(&mut br, &trees).unwrap();
        assert_eq!(bundle.next().unwrap(), 7);
    }

    #[test]
    fn bundle_drained_for_the_plane() {
        let trees = BinkTrees::default();
        let mut bundle: Bundle<u8> = Bundle::default();
        bundle.alloc(10);
        let mut bw = BitWriter::new();
        bw.put(0, 10);                  // no more values for this plane
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        bundle.fill_rle(&mut br, &trees).unwrap();
        assert!(bundle.next().is_err());
        // later refills must not read a new length either
        let empty: [u8; 0] = [];
        let mut br = BitReader::new(&empty);
        bundle.fill_rle(&mut br, &trees).unwrap();
        assert!(bundle.next().is_err());
    }

    #[test]
    fn dc_bundle_differential() {
        let mut bundle: Bundle<u16> = Bundle::default();
        bundle.alloc(10);
        let mut bw = BitWriter::new();
        bw.put(3, 10);                  // three values
        bw.put(100, 11);                // start value
        bw.put(4, 4);                   // diffs coded in four bits
        bw.put(5, 4);
        bw.put(0, 1);                   // +5
        bw.put(5, 4);
        bw.put(1, 1);                   // -5
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        bundle.fill(&mut br, DC_START_BITS).unwrap();
        assert_eq!(bundle.next().unwrap(), 100);
        assert_eq!(bundle.next().unwrap(), 105);
        assert_eq!(bundle.next().unwrap(), 100);
    }

    #[test]
    fn residue_mask_count_exhaustion() {
        let mut bw = BitWriter::new();
        bw.put(3, 3);                   // three bit planes, mask starts at 4
        bw.put(1, 1);                   // expand the op at base 4
        bw.put(0, 1);                   // probe 0 emits a coefficient
        bw.put(0, 1);                   // positive sign
        // further bits would defer the other probes but must never be read
        bw.put(1, 1);
        bw.put(1, 1);
        bw.put(1, 1);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        let mut block = [0i32; 64];
        read_residue(&mut br, &mut block, 0).unwrap();
        assert_eq!(block[BINK_SCAN[4]], 4);
        assert_eq!(block.iter().filter(|&&v| v != 0).count(), 1);
    }

    #[test]
    fn fill_blocks_then_skip_blocks() {
        let mut pd = PlaneDecoder::new(16, 8);

        let mut bw = BitWriter::new();
        put_identity_descs(&mut bw);
        bw.put(2, pd.btype.bits);       // two fill blocks
        bw.put(1, 1);
        bw.put(FILL_BLOCK as u32, 4);
        bw.put(0, pd.sbtype.bits);
        bw.put(2, pd.colors.bits);      // one colour per block
        bw.put(1, 1);                   // memset form
        bw.put(0xA, 4);                 // high nibble
        bw.put(0xB, 4);                 // low nibble
        bw.put(0, pd.pattern.bits);
        bw.put(0, pd.xoff.bits);
        bw.put(0, pd.yoff.bits);
        bw.put(0, pd.intradc.bits);
        bw.put(0, pd.interdc.bits);
        bw.put(0, pd.run.bits);
        let data = bw.finish();
        let used = pd.decode(&data).unwrap();
        assert_eq!(used, data.len());
        assert!(pd.plane().iter().all(|&p| p == 0xAB));

        let mut bw = BitWriter::new();
        put_identity_descs(&mut bw);
        bw.put(2, pd.btype.bits);       // two skip blocks
        bw.put(1, 1);
        bw.put(SKIP_BLOCK as u32, 4);
        bw.put(0, pd.sbtype.bits);
        bw.put(0, pd.colors.bits);
        bw.put(0, pd.pattern.bits);
        bw.put(0, pd.xoff.bits);
        bw.put(0, pd.yoff.bits);
        bw.put(0, pd.intradc.bits);
        bw.put(0, pd.interdc.bits);
        bw.put(0, pd.run.bits);
        let data = bw.finish();
        let used = pd.decode(&data).unwrap();
        assert_eq!(used, data.len());
        assert!(pd.plane().iter().all(|&p| p == 0xAB));
    }

    #[test]
    fn pattern_block_rows() {
        let mut pd = PlaneDecoder::new(8, 8);

        let mut bw = BitWriter::new();
        put_identity_descs(&mut bw);
        bw.put(1, pd.btype.bits);
        bw.put(1, 1);
        bw.put(PATTERN_BLOCK as u32, 4);
        bw.put(0, pd.sbtype.bits);
        bw.put(2, pd.colors.bits);      // 0x11 then 0x22
        bw.put(0, 1);
        bw.put(0x1, 4);
        bw.put(0x1, 4);
        bw.put(0x2, 4);
        bw.put(0x2, 4);
        bw.put(8, pd.pattern.bits);     // eight rows of pattern 0x0F
        for _ in 0..8 {
            bw.put(0xF, 4);             // low nibble
            bw.put(0x0, 4);             // high nibble
        }
        bw.put(0, pd.xoff.bits);
        bw.put(0, pd.yoff.bits);
        bw.put(0, pd.intradc.bits);
        bw.put(0, pd.interdc.bits);
        bw.put(0, pd.run.bits);
        let data = bw.finish();
        pd.decode(&data).unwrap();
        for row in pd.plane().chunks_exact(8) {
            assert_eq!(row, &[0x11, 0x11, 0x11, 0x11, 0x22, 0x22, 0x22, 0x22]);
        }
    }

    #[test]
    fn intra_block_dc_only() {
        let mut pd = PlaneDecoder::new(8, 8);

        let mut bw = BitWriter::new();
        put_identity_descs(&mut bw);
        bw.put(1, pd.btype.bits);
        bw.put(1, 1);
        bw.put(INTRA_BLOCK as u32, 4);
        bw.put(0, pd.sbtype.bits);
        bw.put(0, pd.colors.bits);
        bw.put(0, pd.pattern.bits);
        bw.put(0, pd.xoff.bits);
        bw.put(0, pd.yoff.bits);
        bw.put(1, pd.intradc.bits);
        bw.put(2000, 11);               // DC value
        bw.put(0, pd.interdc.bits);
        bw.put(0, pd.run.bits);
        // block payload: no AC planes, quantizer index 8
        bw.put(0, 4);
        bw.put(8, 4);
        let data = bw.finish();
        pd.decode(&data).unwrap();
        // (2000 * 2048) >> 11 = 2000 through both passes, (2000 + 127) >> 8 = 8
        assert!(pd.plane().iter().all(|&p| p == 8));
    }

    #[test]
    fn raw_block_copies_colors() {
        let mut pd = PlaneDecoder::new(8, 8);

        let mut bw = BitWriter::new();
        put_identity_descs(&mut bw);
        bw.put(1, pd.btype.bits);
        bw.put(1, 1);
        bw.put(RAW_BLOCK as u32, 4);
        bw.put(0, pd.sbtype.bits);
        bw.put(64, pd.colors.bits);
        bw.put(0, 1);
        for i in 0..64u32 {
            bw.put(i >> 4, 4);          // high nibble
            bw.put(i & 0xF, 4);         // low nibble
        }
        bw.put(0, pd.pattern.bits);
        bw.put(0, pd.xoff.bits);
        bw.put(0, pd.yoff.bits);
        bw.put(0, pd.intradc.bits);
        bw.put(0, pd.interdc.bits);
        bw.put(0, pd.run.bits);
        let data = bw.finish();
        pd.decode(&data).unwrap();
        for (i, &p) in pd.plane().iter().enumerate() {
            assert_eq!(p as usize, i);
        }
    }

    #[test]
    fn unknown_block_type_is_rejected() {
        let mut pd = PlaneDecoder::new(8, 8);

        let mut bw = BitWriter::new();
        put_identity_descs(&mut bw);
        bw.put(1, pd.btype.bits);
        bw.put(1, 1);
        bw.put(12, 4);                  // not a block type
        bw.put(0, pd.sbtype.bits);
        bw.put(0, pd.colors.bits);
        bw.put(0, pd.pattern.bits);
        bw.put(0, pd.xoff.bits);
        bw.put(0, pd.yoff.bits);
        bw.put(0, pd.intradc.bits);
        bw.put(0, pd.interdc.bits);
        bw.put(0, pd.run.bits);
        let data = bw.finish();
        assert_eq!(pd.decode(&data), Err(DecoderError::NotImplemented));
    }
}
