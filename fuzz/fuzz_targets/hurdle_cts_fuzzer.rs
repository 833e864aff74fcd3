//! Fuzz target for HURDLE and its ciphertext-stealing mode
//!
//! # Invariants
//!
//! - Block decryption inverts block encryption
//! - CTS preserves length and round-trips for every buffer of 8 bytes or more
//! - Buffers shorter than one block are rejected without panicking

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tetra_crypto::{CryptoError, Hurdle};

#[derive(Debug, Arbitrary)]
struct CtsInput {
    key: [u8; 16],
    iv: [u8; 8],
    block: [u8; 8],
    message: Vec<u8>,
}

fuzz_target!(|input: CtsInput| {
    let cipher = Hurdle::new(&input.key);
    assert_eq!(cipher.decrypt_block(&cipher.encrypt_block(&input.block)), input.block);

    let mut buf = input.message.clone();
    match cipher.cbc_cts_encrypt(&input.iv, &mut buf) {
        Ok(()) => {
            assert_eq!(buf.len(), input.message.len());
            assert!(cipher.cbc_cts_decrypt(&input.iv, &mut buf).is_ok());
            assert_eq!(buf, input.message);
        },
        Err(err) => {
            assert!(input.message.len() < 8);
            assert!(matches!(err, CryptoError::InvalidLength { expected: 8, .. }));
        },
    }
});
