//! TEA1 keystream generator
//!
//! The 80-bit key is compressed through the S-box into a 32-bit key register
//! before any keystream is produced. Everything after that point depends only
//! on the register, which is what makes [`search_key_register`] feasible.

use std::ops::RangeInclusive;

use zeroize::Zeroize;

use super::{KeystreamGenerator, OUTPUT_SPACING, drive, expand_iv, filter_byte, reorder_state_byte};
use crate::tables::{TEA1_LUT_A, TEA1_LUT_B, TEA1_SBOX};

/// IV whitening constant.
const IV_CONSTANT: u32 = 0x9672_4FA1;

/// Rounds before the first output byte.
const WARMUP_ROUNDS: usize = 54;

/// TEA1 generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tea1;

impl KeystreamGenerator for Tea1 {
    fn name(&self) -> &'static str {
        "TEA1"
    }

    fn fill(&self, iv: u32, key: &[u8; 10], out: &mut [u8]) {
        let register = Tea1KeyRegister::from_key(key);
        tea1_fill_with_register(iv, &register, out);
    }
}

/// The 32-bit register an 80-bit TEA1 key reduces to.
///
/// Two keys with the same register produce identical keystream.
#[derive(Clone, PartialEq, Eq)]
pub struct Tea1KeyRegister(u32);

impl Tea1KeyRegister {
    /// Compress an 80-bit key into the key register.
    pub fn from_key(key: &[u8; 10]) -> Self {
        let register = key.iter().fold(0u32, |acc, &byte| {
            let index = ((acc >> 24) ^ u32::from(byte) ^ acc) & 0xFF;
            (acc << 8) | u32::from(TEA1_SBOX[index as usize])
        });
        Self(register)
    }

    /// Use a raw register value, e.g. one recovered by search.
    pub fn from_value(value: u32) -> Self {
        Self(value)
    }

    /// Raw register value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Drop for Tea1KeyRegister {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// TEA1 keystream for `iv` under `key`.
pub fn tea1(iv: u32, key: &[u8; 10], len: usize) -> Vec<u8> {
    Tea1.keystream(iv, key, len)
}

/// Fill `out` with TEA1 keystream starting from an already reduced key.
pub fn tea1_fill_with_register(iv: u32, register: &Tea1KeyRegister, out: &mut [u8]) {
    let mut core = Core::new(iv, register);
    drive(out, WARMUP_ROUNDS, || core.round());
}

/// Exhaustively search `range` for a key register that reproduces `known`.
///
/// Returns the first matching register. Candidates are rejected as soon as
/// one byte differs, so the cost is dominated by the warm-up rounds. An empty
/// `known` carries no evidence and returns `None`.
pub fn search_key_register(iv: u32, known: &[u8], mut range: RangeInclusive<u32>) -> Option<u32> {
    if known.is_empty() {
        return None;
    }

    let state = expand_iv(iv, IV_CONSTANT);
    range.find(|&candidate| {
        let mut core = Core { state, key_register: candidate };
        let mut rounds = WARMUP_ROUNDS;
        known.iter().all(|&expected| {
            let mut top = 0;
            for _ in 0..rounds {
                top = core.round();
            }
            rounds = OUTPUT_SPACING;
            top == expected
        })
    })
}

/// Running generator state.
struct Core {
    state: u64,
    key_register: u32,
}

impl Core {
    fn new(iv: u32, register: &Tea1KeyRegister) -> Self {
        Self { state: expand_iv(iv, IV_CONSTANT), key_register: register.0 }
    }

    /// Clock once and return the top state byte.
    fn round(&mut self) -> u8 {
        let kr = self.key_register;
        let sbox_out = TEA1_SBOX[(((kr >> 24) ^ kr) & 0xFF) as usize];
        self.key_register = (kr << 8) | u32::from(sbox_out);

        let q = self.state;
        let mix = filter_byte((q >> 8) as u16, &TEA1_LUT_A);
        let derived = filter_byte((q >> 40) as u16, &TEA1_LUT_B);
        let reordered = reorder_state_byte((q >> 32) as u8);

        let fresh = derived ^ (q >> 56) as u8 ^ reordered ^ sbox_out;
        self.state = ((q << 8) ^ (u64::from(mix) << 32)) | u64::from(fresh);
        (self.state >> 56) as u8
    }
}

impl Drop for Core {
    fn drop(&mut self) {
        self.state.zeroize();
        self.key_register.zeroize();
    }
}
