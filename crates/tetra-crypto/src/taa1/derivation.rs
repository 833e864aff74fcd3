//! TA11/TA41, TA21 and TA71 derivations
//!
//! TA11 and TA21 run a two-block HURDLE chain over a 128-bit expansion of
//! the 80-bit challenge and feed the expansion forward into the output.
//! They differ only in the expansion layout, so on the all-zero challenge
//! (where both layouts are zero) they agree.

use zeroize::Zeroize;

use crate::{
    combinators::tb4,
    hurdle::{BLOCK_SIZE, Hurdle},
    transform::{transform_80_to_128, transform_80_to_128_alt},
};

/// IV marker for the TA71 chain.
const TA71_DOMAIN: u8 = 0x71;

/// Derive a 128-bit session value from a 128-bit key and an 80-bit challenge.
pub fn ta11(k: &[u8; 16], rand: &[u8; 10]) -> [u8; 16] {
    chain_with_feed_forward(&Hurdle::new(k), &[0u8; BLOCK_SIZE], &transform_80_to_128(rand))
}

/// Same function as [`ta11`], used for the reverse direction of mutual
/// authentication.
pub fn ta41(k: &[u8; 16], rand: &[u8; 10]) -> [u8; 16] {
    ta11(k, rand)
}

/// Like [`ta11`], over the pair-parity expansion of the challenge.
pub fn ta21(k: &[u8; 16], rand: &[u8; 10]) -> [u8; 16] {
    chain_with_feed_forward(&Hurdle::new(k), &[0u8; BLOCK_SIZE], &transform_80_to_128_alt(rand))
}

/// Derive a modified group cipher key from a GCK and a CCK.
pub fn ta71(gck: &[u8; 10], cck: &[u8; 10]) -> [u8; 10] {
    let mut key = transform_80_to_128(cck);
    let cipher = Hurdle::new(&key);
    key.zeroize();

    let mut iv = [0u8; BLOCK_SIZE];
    iv[0] = TA71_DOMAIN;
    let mut chained = chain_with_feed_forward(&cipher, &iv, &transform_80_to_128(gck));

    let mut head = [0u8; 10];
    head.copy_from_slice(&chained[..10]);
    chained.zeroize();

    let out = tb4(&head, gck);
    head.zeroize();
    out
}

/// Two CBC-chained HURDLE blocks XORed with their own input.
fn chain_with_feed_forward(cipher: &Hurdle, iv: &[u8; BLOCK_SIZE], input: &[u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    let mut chain = *iv;

    for (src, dst) in input.chunks_exact(BLOCK_SIZE).zip(out.chunks_exact_mut(BLOCK_SIZE)) {
        let mut block = chain;
        for (b, s) in block.iter_mut().zip(src) {
            *b ^= s;
        }
        chain = cipher.encrypt_block(&block);
        for ((d, c), s) in dst.iter_mut().zip(&chain).zip(src) {
            *d = c ^ s;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const K: [u8; 16] = [
        0x77, 0xE7, 0x9F, 0xEE, 0x7F, 0xC6, 0x54, 0xDC, 0x65, 0x44, 0x64, 0x4F, 0xDF, 0x47, 0x68,
        0x15,
    ];

    #[test]
    fn ta41_is_ta11() {
        let rand = [0x56, 0x5A, 0x72, 0xD6, 0x3C, 0xCE, 0xED, 0x0B, 0x6F, 0x30];
        assert_eq!(ta41(&K, &rand), ta11(&K, &rand));
    }

    #[test]
    fn ta11_and_ta21_agree_on_zero_challenge() {
        assert_eq!(ta11(&K, &[0u8; 10]), ta21(&K, &[0u8; 10]));
    }

    #[test]
    fn ta11_and_ta21_differ_on_nonzero_challenge() {
        let rand = [0x93, 0x5E, 0x49, 0xFC, 0xDC, 0xBB, 0x47, 0x58, 0x19, 0x55];
        assert_ne!(ta11(&K, &rand), ta21(&K, &rand));
    }

    #[test]
    fn ta11_depends_on_key() {
        let mut other = K;
        other[0] ^= 1;
        let rand = [0xB8, 0x24, 0xFF, 0xB1, 0x37, 0xA4, 0xEF, 0x87, 0xE0, 0x7A];
        assert_ne!(ta11(&K, &rand), ta11(&other, &rand));
    }

    #[test]
    fn ta71_depends_on_both_keys() {
        let gck = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xAA, 0xBB];
        let cck = [0xBD, 0xF8, 0xE8, 0xD4, 0x7C, 0xA2, 0xED, 0xAE, 0x0C, 0xFB];
        let base = ta71(&gck, &cck);

        let mut other_gck = gck;
        other_gck[9] ^= 0x40;
        assert_ne!(base, ta71(&other_gck, &cck));

        let mut other_cck = cck;
        other_cck[0] ^= 0x40;
        assert_ne!(base, ta71(&gck, &other_cck));
    }

    #[test]
    #[ignore = "requires the issued HURDLE S-box"]
    fn published_vectors() {
        let out = ta11(&K, &[0u8; 10]);
        assert_eq!(
            out,
            [
                0x9C, 0x84, 0x51, 0xA3, 0x56, 0x95, 0xD3, 0x3C, 0x30, 0x94, 0x37, 0x12, 0x02, 0x48,
                0x54, 0x53
            ]
        );

        let out = ta71(&[0u8; 10], &[0u8; 10]);
        assert_eq!(out, [0x32, 0x14, 0xCD, 0x6B, 0xC0, 0x48, 0x8C, 0xDC, 0x46, 0x76]);
    }
}
