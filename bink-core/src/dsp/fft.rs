//! FFT and RDFT implementation.
//!
//! Only power-of-two transform sizes are provided since every Bink audio
//! block length is a power of two.
use std::f32::consts;
use std::ops::{Not, Neg, Add, AddAssign, Sub, SubAssign, Mul, MulAssign};

/// Complex number.
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Complex {
    /// Real part of the number.
    pub re: f32,
    /// Imaginary part of the number.
    pub im: f32,
}

impl Complex {
    /// Calculates `exp(i * val)`.
    pub fn exp(val: f32) -> Self {
        Complex { re: val.cos(), im: val.sin() }
    }
    /// Returns `-Im + i * Re`.
    pub fn rotate(self) -> Self {
        Complex { re: -self.im, im: self.re }
    }
    /// Multiplies the complex number by a scalar.
    pub fn scale(self, scale: f32) -> Self {
        Complex { re: self.re * scale, im: self.im * scale }
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Self::Output {
        Complex { re: -self.re, im: -self.im }
    }
}

impl Not for Complex {
    type Output = Complex;
    fn not(self) -> Self::Output {
        Complex { re: self.re, im: -self.im }
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, other: Self) -> Self::Output {
        Complex { re: self.re + other.re, im: self.im + other.im }
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        self.re += other.re;
        self.im += other.im;
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, other: Self) -> Self::Output {
        Complex { re: self.re - other.re, im: self.im - other.im }
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, other: Self) {
        self.re -= other.re;
        self.im -= other.im;
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, other: Self) -> Self::Output {
        Complex { re: self.re * other.re - self.im * other.im,
                  im: self.im * other.re + self.re * other.im }
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, other: Self) {
        let re = self.re * other.re - self.im * other.im;
        let im = self.im * other.re + self.re * other.im;
        self.re = re;
        self.im = im;
    }
}

/// Complex number with zero value.
pub const CMPLX_ZERO: Complex = Complex { re: 0.0, im: 0.0 };

/// Calculates a forward or inverse Fourier transform the slow way.
/// Intended as a reference for testing the fast paths.
pub fn generic_dft(data: &mut [Complex], forward: bool) {
    let mut tmp = vec![CMPLX_ZERO; data.len()];
    let base = if forward { -consts::PI * 2.0 / (data.len() as f32) }
               else       {  consts::PI * 2.0 / (data.len() as f32) };
    for (k, out) in tmp.iter_mut().enumerate() {
        let mut sum = CMPLX_ZERO;
        for (n, el) in data.iter().enumerate() {
            let w = Complex::exp(base * ((n * k) as f32));
            sum += *el * w;
        }
        *out = sum;
    }
    data.copy_from_slice(&tmp);
}

/// Split-radix FFT working context.
#[derive(Debug)]
pub struct FFT {
    table:  Vec<Complex>,
    swaps:  Vec<usize>,
    bits:   u8,
}

impl FFT {
    fn fft(&self, bits: u8, data: &mut [Complex]) {
        if bits == 0 { return; }
        if bits == 1 {
            let sum01 = data[0] + data[1];
            let dif01 = data[0] - data[1];
            data[0] = sum01;
            data[1] = dif01;
            return;
        }
        if bits == 2 {
            let sum01 = data[0] + data[2];
            let dif01 = data[0] - data[2];
            let sum23 = data[1] + data[3];
            let dif23 = data[1] - data[3];
            data[0] = sum01 + sum23;
            data[1] = dif01 - dif23.rotate();
            data[2] = sum01 - sum23;
            data[3] = dif01 + dif23.rotate();
            return;
        }
        let qsize = (1 << (bits - 2)) as usize;
        let hsize = (1 << (bits - 1)) as usize;
        let q3size = qsize + hsize;

        self.fft(bits - 1, &mut data[0     ..hsize]);
        self.fft(bits - 2, &mut data[hsize ..q3size]);
        self.fft(bits - 2, &mut data[q3size..]);
        let off = hsize;
        {
            let t3 =  data[hsize] + data[q3size];
            let t4 = (data[hsize] - data[q3size]).rotate();
            let e1 = data[0];
            let e2 = data[qsize];
            data[0]      = e1 + t3;
            data[qsize]  = e2 - t4;
            data[hsize]  = e1 - t3;
            data[q3size] = e2 + t4;
        }
        for k in 1..qsize {
            let t1 = self.table[off + k * 2 + 0] * data[k + hsize];
            let t2 = self.table[off + k * 2 + 1] * data[k + q3size];
            let t3 =  t1 + t2;
            let t4 = (t1 - t2).rotate();
            let e1 = data[k];
            let e2 = data[k + qsize];
            data[k]             = e1 + t3;
            data[k + qsize]     = e2 - t4;
            data[k + hsize]     = e1 - t3;
            data[k + qsize * 3] = e2 + t4;
        }
    }
    fn ifft(&self, bits: u8, data: &mut [Complex]) {
        if bits == 0 { return; }
        if bits == 1 {
            let sum01 = data[0] + data[1];
            let dif01 = data[0] - data[1];
            data[0] = sum01;
            data[1] = dif01;
            return;
        }
        if bits == 2 {
            let sum01 = data[0] + data[2];
            let dif01 = data[0] - data[2];
            let sum23 = data[1] + data[3];
            let dif23 = data[1] - data[3];
            data[0] = sum01 + sum23;
            data[1] = dif01 + dif23.rotate();
            data[2] = sum01 - sum23;
            data[3] = dif01 - dif23.rotate();
            return;
        }
        let qsize = (1 << (bits - 2)) as usize;
        let hsize = (1 << (bits - 1)) as usize;
        let q3size = qsize + hsize;

        self.ifft(bits - 1, &mut data[0     ..hsize]);
        self.ifft(bits - 2, &mut data[hsize ..q3size]);
        self.ifft(bits - 2, &mut data[q3size..]);
        let off = hsize;
        {
            let t3 =  data[hsize] + data[q3size];
            let t4 = (data[hsize] - data[q3size]).rotate();
            let e1 = data[0];
            let e2 = data[qsize];
            data[0]      = e1 + t3;
            data[qsize]  = e2 + t4;
            data[hsize]  = e1 - t3;
            data[q3size] = e2 - t4;
        }
        for k in 1..qsize {
            let t1 = !self.table[off + k * 2 + 0] * data[k + hsize];
            let t2 = !self.table[off + k * 2 + 1] * data[k + q3size];
            let t3 =  t1 + t2;
            let t4 = (t1 - t2).rotate();
            let e1 = data[k];
            let e2 = data[k + qsize];
            data[k]             = e1 + t3;
            data[k + qsize]     = e2 + t4;
            data[k + hsize]     = e1 - t3;
            data[k + qsize * 3] = e2 - t4;
        }
    }
    /// Performs an inplace FFT.
    pub fn do_fft_inplace(&self, data: &mut [Complex]) {
        for (idx, &nidx) in self.swaps.iter().enumerate() {
            if idx != nidx {
                data.swap(nidx, idx);
            }
        }
        self.fft(self.bits, data);
    }
    /// Performs an inplace inverse FFT.
    pub fn do_ifft_inplace(&self, data: &mut [Complex]) {
        for (idx, &nidx) in self.swaps.iter().enumerate() {
            if idx != nidx {
                data.swap(nidx, idx);
            }
        }
        self.ifft(self.bits, data);
    }
}

fn gen_sr_perms(swaps: &mut [usize], size: usize) {
    if size <= 4 { return; }
    let mut evec:  Vec<usize> = Vec::with_capacity(size / 2);
    let mut ovec1: Vec<usize> = Vec::with_capacity(size / 4);
    let mut ovec2: Vec<usize> = Vec::with_capacity(size / 4);
    for k in 0..size / 4 {
        evec.push (swaps[k * 4 + 0]);
        ovec1.push(swaps[k * 4 + 1]);
        evec.push (swaps[k * 4 + 2]);
        ovec2.push(swaps[k * 4 + 3]);
    }
    for k in 0..size / 2 { swaps[k]                = evec[k]; }
    for k in 0..size / 4 { swaps[k +     size / 2] = ovec1[k]; }
    for k in 0..size / 4 { swaps[k + 3 * size / 4] = ovec2[k]; }
    gen_sr_perms(&mut swaps[0..size / 2],            size / 2);
    gen_sr_perms(&mut swaps[size / 2..3 * size / 4], size / 4);
    gen_sr_perms(&mut swaps[3 * size / 4..],         size / 4);
}

fn gen_swaps_for_perm(swaps: &mut Vec<usize>, perms: &[usize]) {
    let mut idx_arr: Vec<usize> = Vec::with_capacity(perms.len());
    for i in 0..perms.len() { idx_arr.push(i); }
    let mut run_size = 0;
    let mut run_pos  = 0;
    for idx in 0..perms.len() {
        if perms[idx] == idx_arr[idx] {
            if run_size == 0 { run_pos = idx; }
            run_size += 1;
        } else {
            for i in 0..run_size {
                swaps.push(run_pos + i);
            }
            run_size = 0;
            let mut spos = idx + 1;
            while idx_arr[spos] != perms[idx] { spos += 1; }
            idx_arr[spos] = idx_arr[idx];
            idx_arr[idx]  = perms[idx];
            swaps.push(spos);
        }
    }
}

/// [`FFT`] context creator.
///
/// [`FFT`]: ./struct.FFT.html
pub struct FFTBuilder {
}

impl FFTBuilder {
    /// Constructs a new `FFT` context for a power-of-two size.
    pub fn new_fft(size: usize) -> FFT {
        assert!(size.is_power_of_two() && size >= 2);
        let bits = size.trailing_zeros() as u8;
        let mut table = Vec::with_capacity(size);
        for _ in 0..4 { table.push(CMPLX_ZERO); }
        for b in 3..=bits {
            let qsize = (1 << (b - 2)) as usize;
            let base = -consts::PI / ((qsize * 2) as f32);
            for k in 0..qsize {
                table.push(Complex::exp(base * ((k * 1) as f32)));
                table.push(Complex::exp(base * ((k * 3) as f32)));
            }
        }
        let mut perms: Vec<usize> = (0..size).collect();
        gen_sr_perms(&mut perms, size);
        let mut swaps: Vec<usize> = Vec::with_capacity(size);
        gen_swaps_for_perm(&mut swaps, &perms);
        FFT { table, swaps, bits }
    }
}

fn crossadd(a: Complex, b: Complex) -> Complex {
    Complex { re: a.re + b.re, im: a.im - b.im }
}

/// RDFT working context.
///
/// The forward transform packs the purely real DC and Nyquist spectral
/// values into the first complex slot as `re = R[0] + R[N/2]`,
/// `im = R[0] - R[N/2]`; the inverse transform accepts the same layout
/// and returns the time samples scaled by `N/2` (the caller divides).
#[derive(Debug)]
pub struct RDFT {
    table:   Vec<Complex>,
    fft:     FFT,
    size:    usize,
    fwd:     bool,
    fwd_fft: bool,
    scratch: Vec<Complex>,
}

impl RDFT {
    /// Calculates an inplace RDFT over pairs of floats.
    pub fn do_rdft_inplace(&mut self, buf: &mut [Complex]) {
        if !self.fwd {
            for n in 0..self.size / 2 {
                let in0 = buf[n + 1];
                let in1 = buf[self.size - n - 1];

                let t0 = crossadd(in0, in1);
                let t1 = Complex { re: in1.im + in0.im, im: in1.re - in0.re };
                let tab = self.table[n];
                let t2 = Complex { re: t1.im * tab.im + t1.re * tab.re, im: t1.im * tab.re - t1.re * tab.im };

                buf[n + 1] = Complex { re: t0.im - t2.im, im: t0.re - t2.re };
                buf[self.size - n - 1] = (t0 + t2).rotate();
            }
            let a = buf[0].re;
            let b = buf[0].im;
            buf[0].re = a - b;
            buf[0].im = a + b;
        }
        if self.fwd_fft {
            self.fft.do_fft_inplace(buf);
        } else {
            self.fft.do_ifft_inplace(buf);
        }
        if self.fwd {
            for n in 0..self.size / 2 {
                let in0 = buf[n + 1];
                let in1 = buf[self.size - n - 1];

                let t0 = crossadd(in0, in1).scale(0.5);
                let t1 = Complex { re: in0.im + in1.im, im: in0.re - in1.re };
                let t2 = t1 * self.table[n];

                buf[n + 1] = crossadd(t0, t2);
                buf[self.size - n - 1] = Complex { re: t0.re - t2.re, im: -(t0.im + t2.im) };
            }
            let a = buf[0].re;
            let b = buf[0].im;
            buf[0].re = a + b;
            buf[0].im = a - b;
        } else {
            for el in buf.iter_mut() {
                *el = Complex { re: el.im, im: el.re };
            }
        }
    }

    /// Transforms `2 * size` floats in place, viewing adjacent pairs as
    /// complex values.
    pub fn process(&mut self, buf: &mut [f32]) {
        debug_assert_eq!(buf.len(), self.size * 2);
        self.scratch.clear();
        for pair in buf.chunks_exact(2) {
            self.scratch.push(Complex { re: pair[0], im: pair[1] });
        }
        let mut scratch = std::mem::take(&mut self.scratch);
        self.do_rdft_inplace(&mut scratch);
        for (pair, el) in buf.chunks_exact_mut(2).zip(scratch.iter()) {
            pair[0] = el.re;
            pair[1] = el.im;
        }
        self.scratch = scratch;
    }
}

/// [`RDFT`] context creator.
///
/// [`RDFT`]: ./struct.RDFT.html
pub struct RDFTBuilder {
}

impl RDFTBuilder {
    /// Constructs a new `RDFT` context over `size` complex values.
    ///
    /// `forward_fft` selects which complex transform direction backs the
    /// real transform; the inverse real transform of the audio path uses
    /// `(forward = false, forward_fft = false)`.
    pub fn new_rdft(size: usize, forward: bool, forward_fft: bool) -> RDFT {
        let mut table: Vec<Complex> = Vec::with_capacity(size / 2);
        let (base, scale) = if forward { (consts::PI / (size as f32), 0.5) } else { (-consts::PI / (size as f32), 1.0) };
        for i in 0..size / 2 {
            table.push(Complex::exp(base * ((i + 1) as f32)).scale(scale));
        }
        let fft = FFTBuilder::new_fft(size);
        let scratch = Vec::with_capacity(size);
        RDFT { table, fft, size, fwd: forward, fwd_fft: forward_fft, scratch }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lcg_fill(data: &mut [Complex], mut seed: u32) {
        for el in data.iter_mut() {
            seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
            el.re = ((seed >> 16) as i16 as f32) / 256.0;
            seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
            el.im = ((seed >> 16) as i16 as f32) / 256.0;
        }
    }

    fn test_fft(size: usize) {
        let mut fin  = vec![CMPLX_ZERO; size];
        let mut fout = vec![CMPLX_ZERO; size];
        lcg_fill(&mut fin, 42);
        fout.copy_from_slice(&fin);
        let fft = FFTBuilder::new_fft(size);
        fft.do_fft_inplace(&mut fout);
        let mut reference = fin.clone();
        generic_dft(&mut reference, true);
        for (a, b) in fout.iter().zip(reference.iter()) {
            assert!((a.re - b.re).abs() < 1.0);
            assert!((a.im - b.im).abs() < 1.0);
        }
        fft.do_ifft_inplace(&mut fout);
        let sc = 1.0 / (size as f32);
        for (a, b) in fout.iter().zip(fin.iter()) {
            assert!((a.re * sc - b.re).abs() < 1.0);
            assert!((a.im * sc - b.im).abs() < 1.0);
        }
    }

    #[test]
    fn test_ffts() {
        test_fft(4);
        test_fft(16);
        test_fft(256);
        test_fft(1024);
    }

    #[test]
    fn test_rdft_roundtrip() {
        let mut fin:  [Complex; 128] = [CMPLX_ZERO; 128];
        let mut fout: [Complex; 128] = [CMPLX_ZERO; 128];
        lcg_fill(&mut fin, 42);
        fout.copy_from_slice(&fin);
        let mut rdft = RDFTBuilder::new_rdft(fin.len(), true, true);
        rdft.do_rdft_inplace(&mut fout);
        let mut irdft = RDFTBuilder::new_rdft(fin.len(), false, true);
        irdft.do_rdft_inplace(&mut fout);

        for (out, inp) in fout.iter().zip(fin.iter()) {
            let tst = out.scale(0.5 / (fout.len() as f32));
            assert!((tst.re - inp.re).abs() < 1.0);
            assert!((tst.im - inp.im).abs() < 1.0);
        }
    }

    #[test]
    fn test_rdft_f32() {
        let mut buf = [0.0f32; 256];
        let mut seed = 7u32;
        for el in buf.iter_mut() {
            seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
            *el = ((seed >> 16) as i16 as f32) / 256.0;
        }
        let orig = buf;
        let mut rdft = RDFTBuilder::new_rdft(buf.len() / 2, true, true);
        rdft.process(&mut buf);
        let mut irdft = RDFTBuilder::new_rdft(buf.len() / 2, false, true);
        irdft.process(&mut buf);
        let sc = 0.5 / ((buf.len() / 2) as f32);
        for (out, inp) in buf.iter().zip(orig.iter()) {
            assert!((out * sc - inp).abs() < 1.0);
        }
    }
}
