//! TEA2 keystream generator
//!
//! Unlike TEA1 the full 80-bit key stays live in a byte-rotating key
//! register; each round derives its feedback byte from two register taps.

use zeroize::Zeroize;

use super::{KeystreamGenerator, drive, expand_iv, filter_byte, reorder_state_byte};
use crate::tables::{TEA2_LUT_A, TEA2_LUT_B, TEA2_SBOX};

const IV_CONSTANT: u32 = 0x5A6E_136F;
const WARMUP_ROUNDS: usize = 51;

/// TEA2 generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tea2;

impl KeystreamGenerator for Tea2 {
    fn name(&self) -> &'static str {
        "TEA2"
    }

    fn fill(&self, iv: u32, key: &[u8; 10], out: &mut [u8]) {
        let mut core = Core { state: expand_iv(iv, IV_CONSTANT), key_register: *key };
        drive(out, WARMUP_ROUNDS, || core.round());
    }
}

/// TEA2 keystream for `iv` under `key`.
pub fn tea2(iv: u32, key: &[u8; 10], len: usize) -> Vec<u8> {
    Tea2.keystream(iv, key, len)
}

struct Core {
    state: u64,
    key_register: [u8; 10],
}

impl Core {
    fn round(&mut self) -> u8 {
        let kr = &mut self.key_register;
        let sbox_out = TEA2_SBOX[(kr[7] ^ kr[2]) as usize];
        let feedback = sbox_out ^ kr[0];
        kr.rotate_left(1);
        kr[9] = feedback;

        let q = self.state;
        let mix = filter_byte((q >> 16) as u16, &TEA2_LUT_A);
        let derived = filter_byte((q >> 48) as u16, &TEA2_LUT_B);
        let reordered = reorder_state_byte((q >> 24) as u8);

        let fresh = derived ^ (q >> 56) as u8 ^ reordered ^ sbox_out;
        self.state = ((q << 8) ^ (u64::from(mix) << 40)) | u64::from(fresh);
        (self.state >> 56) as u8
    }
}

impl Drop for Core {
    fn drop(&mut self) {
        self.state.zeroize();
        self.key_register.zeroize();
    }
}
