//! Constant tables for the TETRA primitives
//!
//! Every S-box and lookup table used by the crate lives here so that the
//! issued tables can be dropped in verbatim without touching the algorithms.
//!
//! The TEA1 tables are the published ones. The HURDLE, TEA2 and TEA3 tables
//! are not part of this repository: a deterministic stand-in permutation is
//! generated at compile time so those primitives keep their shape (bijective
//! S-box, balanced LUT widths). Their conformance vectors do not reproduce
//! until the issued tables replace the stand-ins.

/// TEA1 filter LUT applied to state bits 8..24.
pub const TEA1_LUT_A: [u16; 8] = [0xDA86, 0x85E9, 0x29B5, 0x2BC6, 0x8C6B, 0x974C, 0xC671, 0x93E2];

/// TEA1 filter LUT applied to state bits 40..56.
pub const TEA1_LUT_B: [u16; 8] = [0x85D6, 0x791A, 0xE985, 0xC671, 0x2B9C, 0xEC92, 0xC62B, 0x9C47];

/// TEA1 key-register S-box.
pub const TEA1_SBOX: [u8; 256] = [
    0x9B, 0xF8, 0x3B, 0x72, 0x75, 0x62, 0x88, 0x22, 0xFF, 0xA6, 0x10, 0x4D, 0xA9, 0x97, 0xC3, 0x7B,
    0x9F, 0x78, 0xF3, 0xB6, 0xA0, 0xCC, 0x17, 0xAB, 0x4A, 0x41, 0x8D, 0x89, 0x25, 0x87, 0xD3, 0xE3,
    0xCE, 0x47, 0x35, 0x2C, 0x6D, 0xFC, 0xE7, 0x6A, 0xB8, 0xB7, 0xFA, 0x8B, 0xCD, 0x74, 0xEE, 0x11,
    0x23, 0xDE, 0x39, 0x6C, 0x1E, 0x8E, 0xED, 0x30, 0x73, 0xBE, 0xBB, 0x91, 0xCA, 0x69, 0x60, 0x49,
    0x5F, 0xB9, 0xC0, 0x06, 0x34, 0x2A, 0x63, 0x4B, 0x90, 0x28, 0xAC, 0x50, 0xE4, 0x6F, 0x36, 0xB0,
    0xA4, 0xD2, 0xD4, 0x96, 0xD5, 0xC9, 0x66, 0x45, 0xC5, 0x55, 0xDD, 0xB2, 0xA1, 0xA8, 0xBF, 0x37,
    0x32, 0x2B, 0x3E, 0xB5, 0x5C, 0x54, 0x67, 0x92, 0x56, 0x4C, 0x20, 0x6B, 0x42, 0x9D, 0xA7, 0x58,
    0x0E, 0x52, 0x68, 0x95, 0x09, 0x7F, 0x59, 0x9C, 0x65, 0xB1, 0x64, 0x5E, 0x4F, 0xBA, 0x81, 0x1C,
    0xC2, 0x0C, 0x02, 0xB4, 0x31, 0x5B, 0xFD, 0x1D, 0x0A, 0xC8, 0x19, 0x8F, 0x83, 0x8A, 0xCF, 0x33,
    0x9E, 0x3A, 0x80, 0xF2, 0xF9, 0x76, 0x26, 0x44, 0xF1, 0xE2, 0xC4, 0xF5, 0xD6, 0x51, 0x46, 0x07,
    0x14, 0x61, 0xF4, 0xC1, 0x24, 0x7A, 0x94, 0x27, 0x00, 0xFB, 0x04, 0xDF, 0x1F, 0x93, 0x71, 0x53,
    0xEA, 0xD8, 0xBD, 0x3D, 0xD0, 0x79, 0xE6, 0x7E, 0x4E, 0x9A, 0xD7, 0x98, 0x1B, 0x05, 0xAE, 0x03,
    0xC7, 0xBC, 0x86, 0xDB, 0x84, 0xE8, 0xD1, 0xF7, 0x16, 0x21, 0x6E, 0xE5, 0xCB, 0xA3, 0x1A, 0xEC,
    0xA2, 0x7D, 0x18, 0x85, 0x48, 0xDA, 0xAA, 0xF0, 0x08, 0xC6, 0x40, 0xAD, 0x57, 0x0D, 0x29, 0x82,
    0x7C, 0xE9, 0x8C, 0xFE, 0xDC, 0x0F, 0x2D, 0x3C, 0x2E, 0xF6, 0x15, 0x2F, 0xAF, 0xE1, 0xEB, 0x3F,
    0x99, 0x43, 0x13, 0x0B, 0xE0, 0xA5, 0x12, 0x77, 0x5D, 0xB3, 0x38, 0xD9, 0xEF, 0x5A, 0x01, 0x70,
];

/// HURDLE round-function S-box (provisional).
pub const HURDLE_SBOX: [u8; 256] = provisional_sbox(0x4855_5244);

/// TEA2 key-register S-box (provisional).
pub const TEA2_SBOX: [u8; 256] = provisional_sbox(0x5445_4132);

/// TEA2 filter LUT for state bits 8..24 (provisional).
pub const TEA2_LUT_A: [u16; 8] = provisional_lut(&TEA2_SBOX, 0);

/// TEA2 filter LUT for state bits 40..56 (provisional).
pub const TEA2_LUT_B: [u16; 8] = provisional_lut(&TEA2_SBOX, 16);

/// TEA3 key-register S-box (provisional).
pub const TEA3_SBOX: [u8; 256] = provisional_sbox(0x5445_4133);

/// TEA3 filter LUT for state bits 8..24 (provisional).
pub const TEA3_LUT_A: [u16; 8] = provisional_lut(&TEA3_SBOX, 0);

/// TEA3 filter LUT for state bits 40..56 (provisional).
pub const TEA3_LUT_B: [u16; 8] = provisional_lut(&TEA3_SBOX, 16);

/// Fisher-Yates shuffle of the identity permutation driven by xorshift32.
const fn provisional_sbox(seed: u32) -> [u8; 256] {
    let mut sbox = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        sbox[i] = i as u8;
        i += 1;
    }

    let mut state = seed;
    let mut i = 255;
    while i > 0 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let j = (state % (i as u32 + 1)) as usize;
        let tmp = sbox[i];
        sbox[i] = sbox[j];
        sbox[j] = tmp;
        i -= 1;
    }
    sbox
}

/// Eight 16-entry boolean function tables taken from consecutive S-box bytes.
const fn provisional_lut(sbox: &[u8; 256], offset: usize) -> [u16; 8] {
    let mut lut = [0u16; 8];
    let mut i = 0;
    while i < 8 {
        lut[i] = ((sbox[offset + 2 * i] as u16) << 8) | sbox[offset + 2 * i + 1] as u16;
        i += 1;
    }
    lut
}
