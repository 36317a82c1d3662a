use std::f32::consts;

pub const MAX_BANDS: usize = 25;

const CRITICAL_FREQS: [usize; MAX_BANDS] = [
      100,   200,  300,  400,  510,  630,   770,   920,
     1080,  1270, 1480, 1720, 2000, 2320,  2700,  3150,
     3700,  4400, 5300, 6400, 7700, 9500, 12000, 15500,
    24500
];

pub const RUN_TAB: [usize; 16] = [ 2, 3, 4, 5, 6, 8, 9, 10, 11, 12, 13, 14, 15, 16, 32, 64 ];

/// Computes the quantizer band edges in complex-pair units: the critical
/// band frequencies clipped to half the sampling rate, mapped onto pair
/// indices and closed with the pair count itself.
pub fn init_bands(srate: usize, len: usize, num_bands: &mut usize, bands: &mut [usize; MAX_BANDS + 1]) {
    let half_rate = srate >> 1;
    let pairs = len >> 1;
    *num_bands = 1;
    while *num_bands < CRITICAL_FREQS.len() && CRITICAL_FREQS[*num_bands - 1] < half_rate {
        *num_bands += 1;
    }
    bands[0] = 1;
    for i in 1..*num_bands {
        bands[i] = (CRITICAL_FREQS[i - 1] * pairs / half_rate).min(pairs);
    }
    bands[*num_bands] = pairs;
}

pub fn get_quants_table() -> [f32; 96] {
    let mut quants: [f32; 96] = [0.0; 96];
    for (i, q) in quants.iter_mut().enumerate() {
        *q = ((i as f32) * 0.066399999 / consts::LOG10_E).exp();
    }
    quants
}
