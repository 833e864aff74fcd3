//! Bit transforms between 80, 88, 120 and 128-bit block widths
//!
//! Each expansion interleaves the input bytes with redundancy bytes computed
//! from them. The layouts are fixed by the air-interface algorithm set:
//!
//! ```text
//! 88 -> 120      a0 a1 P | a2 a3 a4 P | a5 a6 a7 P | a8 a9 a10 P     P = xor of group
//! 80 -> 120 alt  a0 a1 P | a2 a3 P | a4 a5 P | a6 a7 P | a8 a9 P     P = xor of pair
//! 80 -> 128 alt  <80 -> 120 alt> S                                   S = sum of the five P
//! 80 -> 128      X | F0 a0 a9 | F1 a1 a8 | F2 a2 a7 | F3 a3 a6 | F4 a4 a5
//!                Fk = a[k] + a[9-k] (mod 256), X = xor of all Fk
//! 80 -> 120      <80 -> 128> without X
//! ```
//!
//! All functions are pure and total.

/// Byte positions of the data bytes inside a 120-bit 88 -> 120 expansion.
const DATA_POSITIONS_88: [usize; 11] = [0, 1, 3, 4, 5, 7, 8, 9, 11, 12, 13];

/// Group sizes of the 88 -> 120 expansion.
const GROUPS_88: [usize; 4] = [2, 3, 3, 3];

/// Expand 80 bits to 120 bits using the folded layout.
///
/// Identical to [`transform_80_to_128`] without its leading check byte.
pub fn transform_80_to_120(input: &[u8; 10]) -> [u8; 15] {
    let folded = transform_80_to_128(input);
    let mut out = [0u8; 15];
    out.copy_from_slice(&folded[1..]);
    out
}

/// Expand 80 bits to 120 bits as five byte pairs, each followed by its XOR.
pub fn transform_80_to_120_alt(input: &[u8; 10]) -> [u8; 15] {
    let mut out = [0u8; 15];
    for (pair, chunk) in input.chunks_exact(2).zip(out.chunks_exact_mut(3)) {
        chunk[0] = pair[0];
        chunk[1] = pair[1];
        chunk[2] = pair[0] ^ pair[1];
    }
    out
}

/// Expand 88 bits to 120 bits: groups of 2, 3, 3 and 3 bytes, each followed
/// by the XOR of the group.
pub fn transform_88_to_120(input: &[u8; 11]) -> [u8; 15] {
    let mut out = [0u8; 15];
    let mut src = 0;
    let mut dst = 0;
    for len in GROUPS_88 {
        let mut parity = 0u8;
        for &byte in &input[src..src + len] {
            out[dst] = byte;
            parity ^= byte;
            dst += 1;
        }
        out[dst] = parity;
        dst += 1;
        src += len;
    }
    out
}

/// Expand 80 bits to 128 bits using the folded layout.
///
/// Input bytes are paired from both ends inward; each pair is preceded by its
/// modular sum and the block is prefixed with the XOR of those sums.
pub fn transform_80_to_128(input: &[u8; 10]) -> [u8; 16] {
    let mut out = [0u8; 16];
    let mut check = 0u8;
    for k in 0..5 {
        let head = input[k];
        let tail = input[9 - k];
        let fold = head.wrapping_add(tail);
        check ^= fold;
        out[1 + 3 * k] = fold;
        out[2 + 3 * k] = head;
        out[3 + 3 * k] = tail;
    }
    out[0] = check;
    out
}

/// Expand 80 bits to 128 bits: the 80 -> 120 alt layout followed by the
/// modular sum of its five parity bytes.
pub fn transform_80_to_128_alt(input: &[u8; 10]) -> [u8; 16] {
    let expanded = transform_80_to_120_alt(input);
    let mut out = [0u8; 16];
    out[..15].copy_from_slice(&expanded);
    out[15] = expanded.iter().skip(2).step_by(3).fold(0u8, |acc, &p| acc.wrapping_add(p));
    out
}

/// Contract 120 bits to 88 bits by dropping the four parity bytes.
///
/// Left-inverse of [`transform_88_to_120`]. No parity is checked here; callers
/// that need a verdict re-expand and compare.
pub fn transform_120_to_88(input: &[u8; 15]) -> [u8; 11] {
    let mut out = [0u8; 11];
    for (dst, &pos) in out.iter_mut().zip(DATA_POSITIONS_88.iter()) {
        *dst = input[pos];
    }
    out
}
