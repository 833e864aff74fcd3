//! TEA3 keystream generator
//!
//! Full 80-bit key register like TEA2, but the feedback byte passes through
//! the S-box twice and a key-register byte is folded into every state update.

use zeroize::Zeroize;

use super::{KeystreamGenerator, drive, expand_iv, filter_byte};
use crate::tables::{TEA3_LUT_A, TEA3_LUT_B, TEA3_SBOX};

const IV_CONSTANT: u32 = 0xC43A_7D09;
const WARMUP_ROUNDS: usize = 57;

/// TEA3 generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tea3;

impl KeystreamGenerator for Tea3 {
    fn name(&self) -> &'static str {
        "TEA3"
    }

    fn fill(&self, iv: u32, key: &[u8; 10], out: &mut [u8]) {
        let mut core = Core { state: expand_iv(iv, IV_CONSTANT), key_register: *key };
        drive(out, WARMUP_ROUNDS, || core.round());
    }
}

/// TEA3 keystream for `iv` under `key`.
pub fn tea3(iv: u32, key: &[u8; 10], len: usize) -> Vec<u8> {
    Tea3.keystream(iv, key, len)
}

struct Core {
    state: u64,
    key_register: [u8; 10],
}

impl Core {
    fn round(&mut self) -> u8 {
        let kr = &mut self.key_register;
        let inner = TEA3_SBOX[(kr[9] ^ kr[4]) as usize];
        let sbox_out = TEA3_SBOX[(inner ^ kr[6]) as usize];
        let key_byte = kr[0];
        kr.rotate_left(1);
        kr[9] = sbox_out ^ key_byte;

        let q = self.state;
        let mix = filter_byte((q >> 8) as u16, &TEA3_LUT_A);
        let derived = filter_byte((q >> 40) as u16, &TEA3_LUT_B);

        let fresh = derived ^ (q >> 56) as u8 ^ (q >> 32) as u8 ^ sbox_out ^ key_byte;
        self.state = ((q << 8) ^ (u64::from(mix) << 24)) | u64::from(fresh);
        (self.state >> 56) as u8
    }
}

impl Drop for Core {
    fn drop(&mut self) {
        self.state.zeroize();
        self.key_register.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let key = [0xA7, 0x98, 0x39, 0xE4, 0xBA, 0x88, 0xEE, 0x54, 0xA0, 0x29];
        assert_eq!(tea3(0x0123_4567, &key, 32), tea3(0x0123_4567, &key, 32));
    }

    #[test]
    fn iv_diversifies_keystream() {
        let key = [0u8; 10];
        assert_ne!(tea3(0x1111_1111, &key, 10), tea3(0x0123_4567, &key, 10));
    }

    #[test]
    fn key_diversifies_keystream() {
        let key = [0xA7, 0x98, 0x39, 0xE4, 0xBA, 0x88, 0xEE, 0x54, 0xA0, 0x29];
        assert_ne!(tea3(0x0123_4567, &[0u8; 10], 10), tea3(0x0123_4567, &key, 10));
    }

    #[test]
    fn differs_from_tea2() {
        let key = [0x42; 10];
        assert_ne!(tea3(0x1111_1111, &key, 10), super::super::tea2(0x1111_1111, &key, 10));
    }

    #[test]
    #[ignore = "requires the issued TEA3 tables"]
    fn published_vectors() {
        let out = tea3(0x1111_1111, &[0u8; 10], 10);
        assert_eq!(out, [0x06, 0xA6, 0x58, 0x8C, 0x5D, 0x9A, 0x99, 0x6D, 0xD2, 0x5E]);

        let key = [0xA7, 0x98, 0x39, 0xE4, 0xBA, 0x88, 0xEE, 0x54, 0xA0, 0x29];
        let out = tea3(0x0123_4567, &key, 10);
        assert_eq!(out, [0x02, 0x49, 0x1E, 0xF5, 0x57, 0xC5, 0x1C, 0x17, 0x73, 0x0C]);
    }
}
