//! HURDLE block cipher
//!
//! 64-bit block, 128-bit key, 16-round balanced Feistel network on two 32-bit
//! halves. The key schedule yields sixteen 32-bit round keys; decryption runs
//! the same network with the schedule reversed.
//!
//! Also provides CBC with ciphertext stealing, the mode the TAA1 sealing
//! functions run HURDLE in for their 15-byte payloads.
//!
//! # Security Properties
//!
//! - The context owns its round keys and zeroizes them on drop
//! - No reference to the caller's key bytes is retained
//! - Encryption and decryption take `&self`, so one context can be shared
//!   across threads

use zeroize::Zeroize;

use crate::{error::CryptoError, tables::HURDLE_SBOX};

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Number of Feistel rounds.
pub const ROUNDS: usize = 16;

/// Bit rotation applied to the key register between round keys.
const SCHEDULE_ROTATION: u32 = 37;

/// Direction of a block operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

/// A keyed HURDLE context.
///
/// Contexts are independent values: creating one never affects another.
#[derive(Clone)]
pub struct Hurdle {
    round_keys: [u32; ROUNDS],
}

impl Hurdle {
    /// Run the key schedule for a 128-bit key.
    pub fn new(key: &[u8; 16]) -> Self {
        let mut register = u128::from_be_bytes(*key);
        let mut round_keys = [0u32; ROUNDS];

        for (round, slot) in round_keys.iter_mut().enumerate() {
            *slot = (register >> 96) as u32;

            register = register.rotate_left(SCHEDULE_ROTATION);
            let top = (register >> 120) as u8;
            let substituted = HURDLE_SBOX[top as usize] ^ round as u8;
            register = (register & !(0xFF_u128 << 120)) | (u128::from(substituted) << 120);
        }

        register.zeroize();
        Self { round_keys }
    }

    /// Encrypt or decrypt a single block.
    pub fn crypt_block(&self, block: &[u8; BLOCK_SIZE], direction: Direction) -> [u8; BLOCK_SIZE] {
        let word = u64::from_be_bytes(*block);
        let mut left = (word >> 32) as u32;
        let mut right = word as u32;

        match direction {
            Direction::Encrypt => {
                for &round_key in &self.round_keys {
                    (left, right) = (right, left ^ round_function(right, round_key));
                }
            },
            Direction::Decrypt => {
                for &round_key in self.round_keys.iter().rev() {
                    (left, right) = (right, left ^ round_function(right, round_key));
                }
            },
        }

        // Final swap undoes the last exchange so both directions share the network
        ((u64::from(right) << 32) | u64::from(left)).to_be_bytes()
    }

    /// Encrypt a single block.
    pub fn encrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        self.crypt_block(block, Direction::Encrypt)
    }

    /// Decrypt a single block.
    pub fn decrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        self.crypt_block(block, Direction::Decrypt)
    }

    /// Encrypt `buf` in place using CBC with ciphertext stealing.
    ///
    /// The output has the same length as the input. When the length is not a
    /// multiple of the block size, the truncated penultimate ciphertext block
    /// is emitted before the final full block.
    ///
    /// # Errors
    ///
    /// - `CryptoError::InvalidLength` if `buf` is shorter than one block
    pub fn cbc_cts_encrypt(&self, iv: &[u8; BLOCK_SIZE], buf: &mut [u8]) -> Result<(), CryptoError> {
        check_cts_length(buf)?;

        let full = buf.len() / BLOCK_SIZE;
        let rem = buf.len() % BLOCK_SIZE;

        let mut chain = *iv;
        for block in buf[..full * BLOCK_SIZE].chunks_exact_mut(BLOCK_SIZE) {
            xor_in_place(&mut chain, block);
            chain = self.encrypt_block(&chain);
            block.copy_from_slice(&chain);
        }

        if rem == 0 {
            return Ok(());
        }

        // The partial plaintext is zero-padded, chained onto the last full
        // ciphertext block, and its ciphertext overwrites everything after
        // the first `rem` bytes of that block.
        let tail_start = full * BLOCK_SIZE;
        let mut last = chain;
        xor_in_place(&mut last, &buf[tail_start..]);
        let last = self.encrypt_block(&last);

        let stolen_start = tail_start - BLOCK_SIZE;
        buf[stolen_start + rem..].copy_from_slice(&last);
        Ok(())
    }

    /// Decrypt `buf` in place; inverse of [`Self::cbc_cts_encrypt`].
    ///
    /// # Errors
    ///
    /// - `CryptoError::InvalidLength` if `buf` is shorter than one block
    pub fn cbc_cts_decrypt(&self, iv: &[u8; BLOCK_SIZE], buf: &mut [u8]) -> Result<(), CryptoError> {
        check_cts_length(buf)?;

        let full = buf.len() / BLOCK_SIZE;
        let rem = buf.len() % BLOCK_SIZE;
        let plain_cbc_blocks = if rem == 0 { full } else { full - 1 };

        let mut chain = *iv;
        for block in buf[..plain_cbc_blocks * BLOCK_SIZE].chunks_exact_mut(BLOCK_SIZE) {
            let mut cipher = [0u8; BLOCK_SIZE];
            cipher.copy_from_slice(block);

            let mut plain = self.decrypt_block(&cipher);
            xor_in_place(&mut plain, &chain);
            block.copy_from_slice(&plain);
            chain = cipher;
        }

        if rem == 0 {
            return Ok(());
        }

        let stolen_start = plain_cbc_blocks * BLOCK_SIZE;
        let mut last_cipher = [0u8; BLOCK_SIZE];
        last_cipher.copy_from_slice(&buf[stolen_start + rem..]);
        let padded = self.decrypt_block(&last_cipher);

        // Padding bytes were zero, so the tail of `padded` is the stolen tail
        // of the penultimate ciphertext block.
        let mut stolen = [0u8; BLOCK_SIZE];
        stolen[..rem].copy_from_slice(&buf[stolen_start..stolen_start + rem]);
        stolen[rem..].copy_from_slice(&padded[rem..]);

        let mut penultimate = self.decrypt_block(&stolen);
        xor_in_place(&mut penultimate, &chain);

        buf[stolen_start..stolen_start + BLOCK_SIZE].copy_from_slice(&penultimate);
        for (i, byte) in buf[stolen_start + BLOCK_SIZE..].iter_mut().enumerate() {
            *byte = padded[i] ^ stolen[i];
        }
        Ok(())
    }
}

impl Drop for Hurdle {
    fn drop(&mut self) {
        self.round_keys.zeroize();
    }
}

/// Feistel round function: keyed byte substitution followed by a linear mix.
fn round_function(half: u32, round_key: u32) -> u32 {
    let keyed = (half ^ round_key).to_be_bytes();
    let substituted = u32::from_be_bytes(keyed.map(|b| HURDLE_SBOX[b as usize]));
    substituted ^ substituted.rotate_left(9) ^ substituted.rotate_left(19)
}

fn check_cts_length(buf: &[u8]) -> Result<(), CryptoError> {
    if buf.len() < BLOCK_SIZE {
        return Err(CryptoError::InvalidLength { expected: BLOCK_SIZE, actual: buf.len() });
    }
    Ok(())
}

fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}
