//! Constant tables for the Bink video bitstream.
//!
//! The sixteen nibble trees are stored as code/length pairs (codes are
//! given LSB-first, the way the bitstream serialises them) and expanded
//! into flat lookup tables at decoder construction time. Table 0 is the
//! plain fixed-length 4-bit code.

/// Peek width of each static nibble tree.
pub const BINK_TREE_MAX_BITS: [u8; 16] = [ 4, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 7, 7, 7 ];

pub const BINK_TREE_CODES: [[u8; 16]; 16] = [
    [ 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F ],
    [ 0x00, 0x01, 0x09, 0x19, 0x05, 0x15, 0x0D, 0x1D, 0x03, 0x13, 0x0B, 0x1B, 0x07, 0x17, 0x0F, 0x1F ],
    [ 0x00, 0x02, 0x01, 0x09, 0x05, 0x15, 0x0D, 0x1D, 0x03, 0x13, 0x0B, 0x1B, 0x07, 0x17, 0x0F, 0x1F ],
    [ 0x00, 0x02, 0x06, 0x01, 0x05, 0x15, 0x0D, 0x1D, 0x03, 0x13, 0x0B, 0x1B, 0x07, 0x17, 0x0F, 0x1F ],
    [ 0x00, 0x02, 0x06, 0x01, 0x09, 0x05, 0x0D, 0x1D, 0x03, 0x13, 0x0B, 0x1B, 0x07, 0x17, 0x0F, 0x1F ],
    [ 0x00, 0x04, 0x02, 0x06, 0x01, 0x09, 0x05, 0x0D, 0x03, 0x13, 0x0B, 0x1B, 0x07, 0x17, 0x0F, 0x1F ],
    [ 0x00, 0x04, 0x02, 0x06, 0x01, 0x05, 0x0D, 0x1D, 0x03, 0x13, 0x0B, 0x1B, 0x07, 0x17, 0x0F, 0x1F ],
    [ 0x00, 0x01, 0x03, 0x13, 0x0B, 0x2B, 0x1B, 0x3B, 0x07, 0x27, 0x17, 0x37, 0x0F, 0x2F, 0x1F, 0x3F ],
    [ 0x00, 0x02, 0x01, 0x05, 0x03, 0x0B, 0x1B, 0x3B, 0x07, 0x27, 0x17, 0x37, 0x0F, 0x2F, 0x1F, 0x3F ],
    [ 0x00, 0x01, 0x05, 0x03, 0x0B, 0x2B, 0x1B, 0x3B, 0x07, 0x27, 0x17, 0x37, 0x0F, 0x2F, 0x1F, 0x3F ],
    [ 0x00, 0x02, 0x06, 0x01, 0x05, 0x03, 0x0B, 0x1B, 0x07, 0x27, 0x17, 0x37, 0x0F, 0x2F, 0x1F, 0x3F ],
    [ 0x00, 0x02, 0x01, 0x03, 0x0B, 0x2B, 0x1B, 0x3B, 0x07, 0x27, 0x17, 0x37, 0x0F, 0x2F, 0x1F, 0x3F ],
    [ 0x00, 0x02, 0x01, 0x05, 0x0D, 0x03, 0x0B, 0x1B, 0x07, 0x27, 0x17, 0x37, 0x0F, 0x2F, 0x1F, 0x3F ],
    [ 0x00, 0x01, 0x03, 0x07, 0x17, 0x57, 0x37, 0x77, 0x0F, 0x4F, 0x2F, 0x6F, 0x1F, 0x5F, 0x3F, 0x7F ],
    [ 0x00, 0x01, 0x05, 0x03, 0x07, 0x17, 0x37, 0x77, 0x0F, 0x4F, 0x2F, 0x6F, 0x1F, 0x5F, 0x3F, 0x7F ],
    [ 0x00, 0x02, 0x01, 0x05, 0x03, 0x0B, 0x07, 0x17, 0x37, 0x0F, 0x2F, 0x6F, 0x1F, 0x5F, 0x3F, 0x7F ],
];

pub const BINK_TREE_LENS: [[u8; 16]; 16] = [
    [ 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4 ],
    [ 1, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5 ],
    [ 2, 2, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5 ],
    [ 2, 3, 3, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5 ],
    [ 2, 3, 3, 4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5 ],
    [ 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5 ],
    [ 3, 3, 3, 3, 3, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5 ],
    [ 1, 2, 5, 5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6 ],
    [ 2, 2, 3, 3, 4, 5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6 ],
    [ 1, 3, 3, 4, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6 ],
    [ 2, 3, 3, 3, 3, 4, 5, 5, 6, 6, 6, 6, 6, 6, 6, 6 ],
    [ 2, 2, 2, 4, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6 ],
    [ 2, 2, 3, 4, 4, 4, 5, 5, 6, 6, 6, 6, 6, 6, 6, 6 ],
    [ 1, 2, 3, 5, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7 ],
    [ 1, 3, 3, 3, 5, 6, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7 ],
    [ 2, 2, 3, 3, 4, 4, 5, 6, 6, 6, 7, 7, 7, 7, 7, 7 ],
];

/// Maps coefficient storage order to positions inside the 8x8 block.
pub const BINK_SCAN: [usize; 64] = [
     0,  1,  8,  9,  2,  3, 10, 11,
     4,  5, 12, 13,  6,  7, 14, 15,
    20, 21, 28, 29, 22, 23, 30, 31,
    16, 17, 24, 25, 32, 33, 40, 41,
    34, 35, 42, 43, 48, 49, 56, 57,
    50, 51, 58, 59, 18, 19, 26, 27,
    36, 37, 44, 45, 38, 39, 46, 47,
    52, 53, 60, 61, 54, 55, 62, 63,
];

/// Traversal orders a run block can choose from with its 4-bit selector.
pub const BINK_PATTERNS: [[u8; 64]; 16] = [
    [
         0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15,
        16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
        32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47,
        48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63,
    ],
    [
         0,  1,  2,  3,  4,  5,  6,  7, 15, 14, 13, 12, 11, 10,  9,  8,
        16, 17, 18, 19, 20, 21, 22, 23, 31, 30, 29, 28, 27, 26, 25, 24,
        32, 33, 34, 35, 36, 37, 38, 39, 47, 46, 45, 44, 43, 42, 41, 40,
        48, 49, 50, 51, 52, 53, 54, 55, 63, 62, 61, 60, 59, 58, 57, 56,
    ],
    [
         0,  8, 16, 24, 32, 40, 48, 56,  1,  9, 17, 25, 33, 41, 49, 57,
         2, 10, 18, 26, 34, 42, 50, 58,  3, 11, 19, 27, 35, 43, 51, 59,
         4, 12, 20, 28, 36, 44, 52, 60,  5, 13, 21, 29, 37, 45, 53, 61,
         6, 14, 22, 30, 38, 46, 54, 62,  7, 15, 23, 31, 39, 47, 55, 63,
    ],
    [
         0,  8, 16, 24, 32, 40, 48, 56, 57, 49, 41, 33, 25, 17,  9,  1,
         2, 10, 18, 26, 34, 42, 50, 58, 59, 51, 43, 35, 27, 19, 11,  3,
         4, 12, 20, 28, 36, 44, 52, 60, 61, 53, 45, 37, 29, 21, 13,  5,
         6, 14, 22, 30, 38, 46, 54, 62, 63, 55, 47, 39, 31, 23, 15,  7,
    ],
    [
         0,  1,  2,  3,  4,  5,  6,  7, 15, 23, 31, 39, 47, 55, 63, 62,
        61, 60, 59, 58, 57, 56, 48, 40, 32, 24, 16,  8,  9, 10, 11, 12,
        13, 14, 22, 30, 38, 46, 54, 53, 52, 51, 50, 49, 41, 33, 25, 17,
        18, 19, 20, 21, 29, 37, 45, 44, 43, 42, 34, 26, 27, 28, 36, 35,
    ],
    [
         0,  8, 16, 24, 32, 40, 48, 56, 57, 58, 59, 60, 61, 62, 63, 55,
        47, 39, 31, 23, 15,  7,  6,  5,  4,  3,  2,  1,  9, 17, 25, 33,
        41, 49, 50, 51, 52, 53, 54, 46, 38, 30, 22, 14, 13, 12, 11, 10,
        18, 26, 34, 42, 43, 44, 45, 37, 29, 21, 20, 19, 27, 35, 36, 28,
    ],
    [
        35, 36, 28, 27, 26, 34, 42, 43, 44, 45, 37, 29, 21, 20, 19, 18,
        17, 25, 33, 41, 49, 50, 51, 52, 53, 54, 46, 38, 30, 22, 14, 13,
        12, 11, 10,  9,  8, 16, 24, 32, 40, 48, 56, 57, 58, 59, 60, 61,
        62, 63, 55, 47, 39, 31, 23, 15,  7,  6,  5,  4,  3,  2,  1,  0,
    ],
    [
         0,  8,  1,  2,  9, 16, 24, 17, 10,  3,  4, 11, 18, 25, 32, 40,
        33, 26, 19, 12,  5,  6, 13, 20, 27, 34, 41, 48, 56, 49, 42, 35,
        28, 21, 14,  7, 15, 22, 29, 36, 43, 50, 57, 58, 51, 44, 37, 30,
        23, 31, 38, 45, 52, 59, 60, 53, 46, 39, 47, 54, 61, 62, 55, 63,
    ],
    [
         7, 15,  6,  5, 14, 23, 31, 22, 13,  4,  3, 12, 21, 30, 39, 47,
        38, 29, 20, 11,  2,  1, 10, 19, 28, 37, 46, 55, 63, 54, 45, 36,
        27, 18,  9,  0,  8, 17, 26, 35, 44, 53, 62, 61, 52, 43, 34, 25,
        16, 24, 33, 42, 51, 60, 59, 50, 41, 32, 40, 49, 58, 57, 48, 56,
    ],
    [
        63, 62, 61, 60, 59, 58, 57, 56, 55, 54, 53, 52, 51, 50, 49, 48,
        47, 46, 45, 44, 43, 42, 41, 40, 39, 38, 37, 36, 35, 34, 33, 32,
        31, 30, 29, 28, 27, 26, 25, 24, 23, 22, 21, 20, 19, 18, 17, 16,
        15, 14, 13, 12, 11, 10,  9,  8,  7,  6,  5,  4,  3,  2,  1,  0,
    ],
    [
         0,  1,  8,  9,  2,  3, 10, 11,  4,  5, 12, 13,  6,  7, 14, 15,
        16, 17, 24, 25, 18, 19, 26, 27, 20, 21, 28, 29, 22, 23, 30, 31,
        32, 33, 40, 41, 34, 35, 42, 43, 36, 37, 44, 45, 38, 39, 46, 47,
        48, 49, 56, 57, 50, 51, 58, 59, 52, 53, 60, 61, 54, 55, 62, 63,
    ],
    [
         0,  1,  2,  3,  8,  9, 10, 11, 16, 17, 18, 19, 24, 25, 26, 27,
         4,  5,  6,  7, 12, 13, 14, 15, 20, 21, 22, 23, 28, 29, 30, 31,
        32, 33, 34, 35, 40, 41, 42, 43, 48, 49, 50, 51, 56, 57, 58, 59,
        36, 37, 38, 39, 44, 45, 46, 47, 52, 53, 54, 55, 60, 61, 62, 63,
    ],
    [
         0,  1,  8,  9,  2,  3, 10, 11, 16, 17, 24, 25, 18, 19, 26, 27,
         4,  5, 12, 13,  6,  7, 14, 15, 20, 21, 28, 29, 22, 23, 30, 31,
        32, 33, 40, 41, 34, 35, 42, 43, 48, 49, 56, 57, 50, 51, 58, 59,
        36, 37, 44, 45, 38, 39, 46, 47, 52, 53, 60, 61, 54, 55, 62, 63,
    ],
    [
         0,  8,  9,  1,  2,  3, 11, 10, 18, 19, 27, 26, 25, 17, 16, 24,
        32, 33, 41, 40, 48, 56, 57, 49, 50, 58, 59, 51, 43, 42, 34, 35,
        36, 37, 45, 44, 52, 60, 61, 53, 54, 62, 63, 55, 47, 46, 38, 39,
        31, 23, 22, 30, 29, 28, 20, 21, 13, 12,  4,  5,  6, 14, 15,  7,
    ],
    [
         0,  7,  1,  6,  2,  5,  3,  4,  8, 15,  9, 14, 10, 13, 11, 12,
        16, 23, 17, 22, 18, 21, 19, 20, 24, 31, 25, 30, 26, 29, 27, 28,
        32, 39, 33, 38, 34, 37, 35, 36, 40, 47, 41, 46, 42, 45, 43, 44,
        48, 55, 49, 54, 50, 53, 51, 52, 56, 63, 57, 62, 58, 61, 59, 60,
    ],
    [
        63, 55, 47, 39, 31, 23, 15,  7, 62, 54, 46, 38, 30, 22, 14,  6,
        61, 53, 45, 37, 29, 21, 13,  5, 60, 52, 44, 36, 28, 20, 12,  4,
        59, 51, 43, 35, 27, 19, 11,  3, 58, 50, 42, 34, 26, 18, 10,  2,
        57, 49, 41, 33, 25, 17,  9,  1, 56, 48, 40, 32, 24, 16,  8,  0,
    ],
];

/// Colour selectors for one nibble of a pattern-block row; a set bit
/// picks the first of the two block colours.
pub const BINK_PATTERN_LANES: [[usize; 4]; 16] = [
    [ 1, 1, 1, 1 ],
    [ 0, 1, 1, 1 ],
    [ 1, 0, 1, 1 ],
    [ 0, 0, 1, 1 ],
    [ 1, 1, 0, 1 ],
    [ 0, 1, 0, 1 ],
    [ 1, 0, 0, 1 ],
    [ 0, 0, 0, 1 ],
    [ 1, 1, 1, 0 ],
    [ 0, 1, 1, 0 ],
    [ 1, 0, 1, 0 ],
    [ 0, 0, 1, 0 ],
    [ 1, 1, 0, 0 ],
    [ 0, 1, 0, 0 ],
    [ 1, 0, 0, 0 ],
    [ 0, 0, 0, 0 ],
];

/// Per-position dequantizers for intra blocks, one matrix per 4-bit
/// quantizer index. Applied as `(coeff * quant) >> 11` by the IDCT.
pub const BINK_INTRA_QUANT: [[i32; 64]; 16] = [
    [
           128,    128,    128,    152,    176,    208,    240,    272,
           128,    128,    144,    168,    192,    224,    256,    288,
           128,    144,    160,    184,    208,    240,    272,    304,
           152,    168,    184,    208,    240,    272,    304,    336,
           176,    192,    208,    240,    272,    304,    336,    368,
           208,    224,    240,    272,    304,    336,    368,    400,
           240,    256,    272,    304,    336,    368,    400,    432,
           272,    288,    304,    336,    368,    400,    432,    464,
    ],
    [
           181,    181,    181,    214,    248,    294,    339,    384,
           181,    181,    203,    237,    271,    316,    362,    407,
           181,    203,    226,    260,    294,    339,    384,    429,
           214,    237,    260,    294,    339,    384,    429,    475,
           248,    271,    294,    339,    384,    429,    475,    520,
           294,    316,    339,    384,    429,    475,    520,    565,
           339,    362,    384,    429,    475,    520,    565,    610,
           384,    407,    429,    475,    520,    565,    610,    656,
    ],
    [
           256,    256,    256,    304,    352,    416,    480,    544,
           256,    256,    288,    336,    384,    448,    512,    576,
           256,    288,    320,    368,    416,    480,    544,    608,
           304,    336,    368,    416,    480,    544,    608,    672,
           352,    384,    416,    480,    544,    608,    672,    736,
           416,    448,    480,    544,    608,    672,    736,    800,
           480,    512,    544,    608,    672,    736,    800,    864,
           544,    576,    608,    672,    736,    800,    864,    928,
    ],
    [
           362,    362,    362,    429,    497,    588,    678,    769,
           362,    362,    407,    475,    543,    633,    724,    814,
           362,    407,    452,    520,    588,    678,    769,    859,
           429,    475,    520,    588,    678,    769,    859,    950,
           497,    543,    588,    678,    769,    859,    950,   1040,
           588,    633,    678,    769,    859,    950,   1040,   1131,
           678,    724,    769,    859,    950,   1040,   1131,   1221,
           769,    814,    859,    950,   1040,   1131,   1221,   1312,
    ],
    [
           512,    512,    512,    608,    704,    832,    960,   1088,
           512,    512,    576,    672,    768,    896,   1024,   1152,
           512,    576,    640,    736,    832,    960,   1088,   1216,
           608,    672,    736,    832,    960,   1088,   1216,   1344,
           704,    768,    832,    960,   1088,   1216,   1344,   1472,
           832,    896,    960,   1088,   1216,   1344,   1472,   1600,
           960,   1024,   1088,   1216,   1344,   1472,   1600,   1728,
          1088,   1152,   1216,   1344,   1472,   1600,   1728,   1856,
    ],
    [
           724,    724,    724,    859,    995,   1176,   1357,   1538,
           724,    724,    814,    950,   1086,   1267,   1448,   1629,
           724,    814,    905,   1040,   1176,   1357,   1538,   1719,
           859,    950,   1040,   1176,   1357,   1538,   1719,   1900,
           995,   1086,   1176,   1357,   1538,   1719,   1900,   2081,
          1176,   1267,   1357,   1538,   1719,   1900,   2081,   2262,
          1357,   1448,   1538,   1719,   1900,   2081,   2262,   2443,
          1538,   1629,   1719,   1900,   2081,   2262,   2443,   2624,
    ],
    [
          1024,   1024,   1024,   1216,   1408,   1664,   1920,   2176,
          1024,   1024,   1152,   1344,   1536,   1792,   2048,   2304,
          1024,   1152,   1280,   1472,   1664,   1920,   2176,   2432,
          1216,   1344,   1472,   1664,   1920,   2176,   2432,   2688,
          1408,   1536,   1664,   1920,   2176,   2432,   2688,   2944,
          1664,   1792,   1920,   2176,   2432,   2688,   2944,   3200,
          1920,   2048,   2176,   2432,   2688,   2944,   3200,   3456,
          2176,   2304,   2432,   2688,   2944,   3200,   3456,   3712,
    ],
    [
          1448,   1448,   1448,   1719,   1991,   2353,   2715,   3077,
          1448,   1448,   1629,   1900,   2172,   2534,   2896,   3258,
          1448,   1629,   1810,   2081,   2353,   2715,   3077,   3439,
          1719,   1900,   2081,   2353,   2715,   3077,   3439,   3801,
          1991,   2172,   2353,   2715,   3077,   3439,   3801,   4163,
          2353,   2534,   2715,   3077,   3439,   3801,   4163,   4525,
          2715,   2896,   3077,   3439,   3801,   4163,   4525,   4887,
          3077,   3258,   3439,   3801,   4163,   4525,   4887,   5249,
    ],
    [
          2048,   2048,   2048,   2432,   2816,   3328,   3840,   4352,
          2048,   2048,   2304,   2688,   3072,   3584,   4096,   4608,
          2048,   2304,   2560,   2944,   3328,   3840,   4352,   4864,
          2432,   2688,   2944,   3328,   3840,   4352,   4864,   5376,
          2816,   3072,   3328,   3840,   4352,   4864,   5376,   5888,
          3328,   3584,   3840,   4352,   4864,   5376,   5888,   6400,
          3840,   4096,   4352,   4864,   5376,   5888,   6400,   6912,
          4352,   4608,   4864,   5376,   5888,   6400,   6912,   7424,
    ],
    [
          2896,   2896,   2896,   3439,   3982,   4706,   5430,   6154,
          2896,   2896,   3258,   3801,   4344,   5068,   5792,   6516,
          2896,   3258,   3620,   4163,   4706,   5430,   6154,   6878,
          3439,   3801,   4163,   4706,   5430,   6154,   6878,   7602,
          3982,   4344,   4706,   5430,   6154,   6878,   7602,   8326,
          4706,   5068,   5430,   6154,   6878,   7602,   8326,   9050,
          5430,   5792,   6154,   6878,   7602,   8326,   9050,   9774,
          6154,   6516,   6878,   7602,   8326,   9050,   9774,  10498,
    ],
    [
          4096,   4096,   4096,   4864,   5632,   6656,   7680,   8704,
          4096,   4096,   4608,   5376,   6144,   7168,   8192,   9216,
          4096,   4608,   5120,   5888,   6656,   7680,   8704,   9728,
          4864,   5376,   5888,   6656,   7680,   8704,   9728,  10752,
          5632,   6144,   6656,   7680,   8704,   9728,  10752,  11776,
          6656,   7168,   7680,   8704,   9728,  10752,  11776,  12800,
          7680,   8192,   8704,   9728,  10752,  11776,  12800,  13824,
          8704,   9216,   9728,  10752,  11776,  12800,  13824,  14848,
    ],
    [
          5793,   5793,   5793,   6879,   7965,   9413,  10861,  12310,
          5793,   5793,   6517,   7603,   8689,  10137,  11586,  13034,
          5793,   6517,   7241,   8327,   9413,  10861,  12310,  13758,
          6879,   7603,   8327,   9413,  10861,  12310,  13758,  15206,
          7965,   8689,   9413,  10861,  12310,  13758,  15206,  16654,
          9413,  10137,  10861,  12310,  13758,  15206,  16654,  18103,
         10861,  11586,  12310,  13758,  15206,  16654,  18103,  19551,
         12310,  13034,  13758,  15206,  16654,  18103,  19551,  20999,
    ],
    [
          8192,   8192,   8192,   9728,  11264,  13312,  15360,  17408,
          8192,   8192,   9216,  10752,  12288,  14336,  16384,  18432,
          8192,   9216,  10240,  11776,  13312,  15360,  17408,  19456,
          9728,  10752,  11776,  13312,  15360,  17408,  19456,  21504,
         11264,  12288,  13312,  15360,  17408,  19456,  21504,  23552,
         13312,  14336,  15360,  17408,  19456,  21504,  23552,  25600,
         15360,  16384,  17408,  19456,  21504,  23552,  25600,  27648,
         17408,  18432,  19456,  21504,  23552,  25600,  27648,  29696,
    ],
    [
         11585,  11585,  11585,  13757,  15929,  18825,  21721,  24618,
         11585,  11585,  13033,  15205,  17377,  20273,  23170,  26066,
         11585,  13033,  14481,  16653,  18825,  21721,  24618,  27514,
         13757,  15205,  16653,  18825,  21721,  24618,  27514,  30410,
         15929,  17377,  18825,  21721,  24618,  27514,  30410,  33306,
         18825,  20273,  21721,  24618,  27514,  30410,  33306,  36203,
         21721,  23170,  24618,  27514,  30410,  33306,  36203,  39099,
         24618,  26066,  27514,  30410,  33306,  36203,  39099,  41995,
    ],
    [
         16384,  16384,  16384,  19456,  22528,  26624,  30720,  34816,
         16384,  16384,  18432,  21504,  24576,  28672,  32768,  36864,
         16384,  18432,  20480,  23552,  26624,  30720,  34816,  38912,
         19456,  21504,  23552,  26624,  30720,  34816,  38912,  43008,
         22528,  24576,  26624,  30720,  34816,  38912,  43008,  47104,
         26624,  28672,  30720,  34816,  38912,  43008,  47104,  51200,
         30720,  32768,  34816,  38912,  43008,  47104,  51200,  55296,
         34816,  36864,  38912,  43008,  47104,  51200,  55296,  59392,
    ],
    [
         23170,  23170,  23170,  27514,  31858,  37651,  43443,  49236,
         23170,  23170,  26066,  30410,  34755,  40547,  46340,  52132,
         23170,  26066,  28962,  33306,  37651,  43443,  49236,  55028,
         27514,  30410,  33306,  37651,  43443,  49236,  55028,  60821,
         31858,  34755,  37651,  43443,  49236,  55028,  60821,  66613,
         37651,  40547,  43443,  49236,  55028,  60821,  66613,  72406,
         43443,  46340,  49236,  55028,  60821,  66613,  72406,  78198,
         49236,  52132,  55028,  60821,  66613,  72406,  78198,  83991,
    ],
];

/// Per-position dequantizers for inter and residue-coded blocks.
pub const BINK_INTER_QUANT: [[i32; 64]; 16] = [
    [
           128,    136,    144,    152,    160,    168,    176,    184,
           136,    144,    152,    160,    168,    176,    184,    192,
           144,    152,    160,    168,    176,    184,    192,    200,
           152,    160,    168,    176,    184,    192,    200,    208,
           160,    168,    176,    184,    192,    200,    208,    216,
           168,    176,    184,    192,    200,    208,    216,    224,
           176,    184,    192,    200,    208,    216,    224,    232,
           184,    192,    200,    208,    216,    224,    232,    240,
    ],
    [
           181,    192,    203,    214,    226,    237,    248,    260,
           192,    203,    214,    226,    237,    248,    260,    271,
           203,    214,    226,    237,    248,    260,    271,    282,
           214,    226,    237,    248,    260,    271,    282,    294,
           226,    237,    248,    260,    271,    282,    294,    305,
           237,    248,    260,    271,    282,    294,    305,    316,
           248,    260,    271,    282,    294,    305,    316,    328,
           260,    271,    282,    294,    305,    316,    328,    339,
    ],
    [
           256,    272,    288,    304,    320,    336,    352,    368,
           272,    288,    304,    320,    336,    352,    368,    384,
           288,    304,    320,    336,    352,    368,    384,    400,
           304,    320,    336,    352,    368,    384,    400,    416,
           320,    336,    352,    368,    384,    400,    416,    432,
           336,    352,    368,    384,    400,    416,    432,    448,
           352,    368,    384,    400,    416,    432,    448,    464,
           368,    384,    400,    416,    432,    448,    464,    480,
    ],
    [
           362,    384,    407,    429,    452,    475,    497,    520,
           384,    407,    429,    452,    475,    497,    520,    543,
           407,    429,    452,    475,    497,    520,    543,    565,
           429,    452,    475,    497,    520,    543,    565,    588,
           452,    475,    497,    520,    543,    565,    588,    610,
           475,    497,    520,    543,    565,    588,    610,    633,
           497,    520,    543,    565,    588,    610,    633,    656,
           520,    543,    565,    588,    610,    633,    656,    678,
    ],
    [
           512,    544,    576,    608,    640,    672,    704,    736,
           544,    576,    608,    640,    672,    704,    736,    768,
           576,    608,    640,    672,    704,    736,    768,    800,
           608,    640,    672,    704,    736,    768,    800,    832,
           640,    672,    704,    736,    768,    800,    832,    864,
           672,    704,    736,    768,    800,    832,    864,    896,
           704,    736,    768,    800,    832,    864,    896,    928,
           736,    768,    800,    832,    864,    896,    928,    960,
    ],
    [
           724,    769,    814,    859,    905,    950,    995,   1040,
           769,    814,    859,    905,    950,    995,   1040,   1086,
           814,    859,    905,    950,    995,   1040,   1086,   1131,
           859,    905,    950,    995,   1040,   1086,   1131,   1176,
           905,    950,    995,   1040,   1086,   1131,   1176,   1221,
           950,    995,   1040,   1086,   1131,   1176,   1221,   1267,
           995,   1040,   1086,   1131,   1176,   1221,   1267,   1312,
          1040,   1086,   1131,   1176,   1221,   1267,   1312,   1357,
    ],
    [
          1024,   1088,   1152,   1216,   1280,   1344,   1408,   1472,
          1088,   1152,   1216,   1280,   1344,   1408,   1472,   1536,
          1152,   1216,   1280,   1344,   1408,   1472,   1536,   1600,
          1216,   1280,   1344,   1408,   1472,   1536,   1600,   1664,
          1280,   1344,   1408,   1472,   1536,   1600,   1664,   1728,
          1344,   1408,   1472,   1536,   1600,   1664,   1728,   1792,
          1408,   1472,   1536,   1600,   1664,   1728,   1792,   1856,
          1472,   1536,   1600,   1664,   1728,   1792,   1856,   1920,
    ],
    [
          1448,   1538,   1629,   1719,   1810,   1900,   1991,   2081,
          1538,   1629,   1719,   1810,   1900,   1991,   2081,   2172,
          1629,   1719,   1810,   1900,   1991,   2081,   2172,   2262,
          1719,   1810,   1900,   1991,   2081,   2172,   2262,   2353,
          1810,   1900,   1991,   2081,   2172,   2262,   2353,   2443,
          1900,   1991,   2081,   2172,   2262,   2353,   2443,   2534,
          1991,   2081,   2172,   2262,   2353,   2443,   2534,   2624,
          2081,   2172,   2262,   2353,   2443,   2534,   2624,   2715,
    ],
    [
          2048,   2176,   2304,   2432,   2560,   2688,   2816,   2944,
          2176,   2304,   2432,   2560,   2688,   2816,   2944,   3072,
          2304,   2432,   2560,   2688,   2816,   2944,   3072,   3200,
          2432,   2560,   2688,   2816,   2944,   3072,   3200,   3328,
          2560,   2688,   2816,   2944,   3072,   3200,   3328,   3456,
          2688,   2816,   2944,   3072,   3200,   3328,   3456,   3584,
          2816,   2944,   3072,   3200,   3328,   3456,   3584,   3712,
          2944,   3072,   3200,   3328,   3456,   3584,   3712,   3840,
    ],
    [
          2896,   3077,   3258,   3439,   3620,   3801,   3982,   4163,
          3077,   3258,   3439,   3620,   3801,   3982,   4163,   4344,
          3258,   3439,   3620,   3801,   3982,   4163,   4344,   4525,
          3439,   3620,   3801,   3982,   4163,   4344,   4525,   4706,
          3620,   3801,   3982,   4163,   4344,   4525,   4706,   4887,
          3801,   3982,   4163,   4344,   4525,   4706,   4887,   5068,
          3982,   4163,   4344,   4525,   4706,   4887,   5068,   5249,
          4163,   4344,   4525,   4706,   4887,   5068,   5249,   5430,
    ],
    [
          4096,   4352,   4608,   4864,   5120,   5376,   5632,   5888,
          4352,   4608,   4864,   5120,   5376,   5632,   5888,   6144,
          4608,   4864,   5120,   5376,   5632,   5888,   6144,   6400,
          4864,   5120,   5376,   5632,   5888,   6144,   6400,   6656,
          5120,   5376,   5632,   5888,   6144,   6400,   6656,   6912,
          5376,   5632,   5888,   6144,   6400,   6656,   6912,   7168,
          5632,   5888,   6144,   6400,   6656,   6912,   7168,   7424,
          5888,   6144,   6400,   6656,   6912,   7168,   7424,   7680,
    ],
    [
          5793,   6155,   6517,   6879,   7241,   7603,   7965,   8327,
          6155,   6517,   6879,   7241,   7603,   7965,   8327,   8689,
          6517,   6879,   7241,   7603,   7965,   8327,   8689,   9051,
          6879,   7241,   7603,   7965,   8327,   8689,   9051,   9413,
          7241,   7603,   7965,   8327,   8689,   9051,   9413,   9775,
          7603,   7965,   8327,   8689,   9051,   9413,   9775,  10137,
          7965,   8327,   8689,   9051,   9413,   9775,  10137,  10499,
          8327,   8689,   9051,   9413,   9775,  10137,  10499,  10861,
    ],
    [
          8192,   8704,   9216,   9728,  10240,  10752,  11264,  11776,
          8704,   9216,   9728,  10240,  10752,  11264,  11776,  12288,
          9216,   9728,  10240,  10752,  11264,  11776,  12288,  12800,
          9728,  10240,  10752,  11264,  11776,  12288,  12800,  13312,
         10240,  10752,  11264,  11776,  12288,  12800,  13312,  13824,
         10752,  11264,  11776,  12288,  12800,  13312,  13824,  14336,
         11264,  11776,  12288,  12800,  13312,  13824,  14336,  14848,
         11776,  12288,  12800,  13312,  13824,  14336,  14848,  15360,
    ],
    [
         11585,  12309,  13033,  13757,  14481,  15205,  15929,  16653,
         12309,  13033,  13757,  14481,  15205,  15929,  16653,  17377,
         13033,  13757,  14481,  15205,  15929,  16653,  17377,  18101,
         13757,  14481,  15205,  15929,  16653,  17377,  18101,  18825,
         14481,  15205,  15929,  16653,  17377,  18101,  18825,  19549,
         15205,  15929,  16653,  17377,  18101,  18825,  19549,  20273,
         15929,  16653,  17377,  18101,  18825,  19549,  20273,  20997,
         16653,  17377,  18101,  18825,  19549,  20273,  20997,  21721,
    ],
    [
         16384,  17408,  18432,  19456,  20480,  21504,  22528,  23552,
         17408,  18432,  19456,  20480,  21504,  22528,  23552,  24576,
         18432,  19456,  20480,  21504,  22528,  23552,  24576,  25600,
         19456,  20480,  21504,  22528,  23552,  24576,  25600,  26624,
         20480,  21504,  22528,  23552,  24576,  25600,  26624,  27648,
         21504,  22528,  23552,  24576,  25600,  26624,  27648,  28672,
         22528,  23552,  24576,  25600,  26624,  27648,  28672,  29696,
         23552,  24576,  25600,  26624,  27648,  28672,  29696,  30720,
    ],
    [
         23170,  24618,  26066,  27514,  28962,  30410,  31858,  33306,
         24618,  26066,  27514,  28962,  30410,  31858,  33306,  34755,
         26066,  27514,  28962,  30410,  31858,  33306,  34755,  36203,
         27514,  28962,  30410,  31858,  33306,  34755,  36203,  37651,
         28962,  30410,  31858,  33306,  34755,  36203,  37651,  39099,
         30410,  31858,  33306,  34755,  36203,  37651,  39099,  40547,
         31858,  33306,  34755,  36203,  37651,  39099,  40547,  41995,
         33306,  34755,  36203,  37651,  39099,  40547,  41995,  43443,
    ],
];
