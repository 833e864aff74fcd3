//! TB4-TB7 key combinators
//!
//! Small fixed-arity functions used around the TAA1 family:
//!
//! - TB4 combines the two DCK halves produced by mutual authentication.
//! - TB5 turns a cipher key into the ECK bound to a cell (carrier number,
//!   location area, colour code).
//! - TB6 turns a static cipher key into an ESCK bound to a carrier and SSI.
//! - TB7 frames a 96-bit value with one parity byte per 3-byte group.
//!
//! TB5 and TB6 are linear: the key is XORed with an 80-bit modifier built by
//! concatenating the identity fields MSB first.

/// Combine two 80-bit values byte-wise (DCK = TB4(DCK1, DCK2)).
///
/// Equal inputs produce the all-zero value.
pub fn tb4(a: &[u8; 10], b: &[u8; 10]) -> [u8; 10] {
    let mut out = [0u8; 10];
    for (dst, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        *dst = x ^ y;
    }
    out
}

/// Derive the ECK from a cipher key, carrier number, location area and
/// colour code.
///
/// The modifier is `LA(14) || (CN(12) || CC(6)) x 3 || CN(12)`, using the low
/// 14 bits of LA, 12 bits of CN and 6 bits of CC.
pub fn tb5(cn: &[u8; 2], la: &[u8; 2], cc: &[u8; 1], ck: &[u8; 10]) -> [u8; 10] {
    let cn = u32::from(u16::from_be_bytes(*cn));
    let la = u32::from(u16::from_be_bytes(*la));
    let cc = u32::from(cc[0]);
    let modifier = pack(&[
        (la, 14),
        (cn, 12),
        (cc, 6),
        (cn, 12),
        (cc, 6),
        (cn, 12),
        (cc, 6),
        (cn, 12),
    ]);
    tb4(ck, &modifier)
}

/// Derive the ESCK from a static cipher key, carrier number and SSI.
///
/// The modifier is `CN(12) || SSI(24) || CN(12) || SSI(24) || SSI(8)`, the
/// final field being the low byte of the SSI.
pub fn tb6(sck: &[u8; 10], cn: &[u8; 2], ssi: &[u8; 3]) -> [u8; 10] {
    let cn = u32::from(u16::from_be_bytes(*cn));
    let ssi = u32::from_be_bytes([0, ssi[0], ssi[1], ssi[2]]);
    let modifier = pack(&[(cn, 12), (ssi, 24), (cn, 12), (ssi, 24), (ssi, 8)]);
    tb4(sck, &modifier)
}

/// Expand 96 bits to 128 bits: four 3-byte groups, each followed by the XOR
/// of the group.
pub fn tb7(input: &[u8; 12]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (group, chunk) in input.chunks_exact(3).zip(out.chunks_exact_mut(4)) {
        chunk[..3].copy_from_slice(group);
        chunk[3] = group[0] ^ group[1] ^ group[2];
    }
    out
}

/// Concatenate `(value, width)` fields MSB first into an 80-bit block.
///
/// Each value is truncated to its width. Widths must sum to 80.
fn pack(fields: &[(u32, u32)]) -> [u8; 10] {
    let mut acc = 0u128;
    for &(value, width) in fields {
        acc = (acc << width) | u128::from(value & ((1u32 << width) - 1));
    }
    let wide = acc.to_be_bytes();
    let mut out = [0u8; 10];
    out.copy_from_slice(&wide[6..]);
    out
}
