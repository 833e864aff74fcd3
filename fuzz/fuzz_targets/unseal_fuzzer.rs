//! Fuzz target for the TAA1 unseal operations
//!
//! Feeds attacker-controlled sealed payloads, keys and version numbers to
//! every unseal operation.
//!
//! # Invariants
//!
//! - Unsealing never panics, whatever the input
//! - Sealing then unsealing with the same key and context is accepted
//! - A sealed payload with any byte flipped never unseals to the sealed payload

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tetra_crypto::{ta31, ta32, ta51, ta52, ta81, ta82, ta91, ta92};

#[derive(Debug, Arbitrary)]
struct UnsealInput {
    sealed: [u8; 15],
    k: [u8; 16],
    dck: [u8; 10],
    context: [u8; 2],
    payload: [u8; 12],
    key_index: u8,
    flip_position: u8,
    flip_mask: u8,
}

fuzz_target!(|input: UnsealInput| {
    // Arbitrary sealed payloads only produce a verdict
    let _ = ta32(&input.sealed, &input.context, &input.dck).is_mismatch();
    let _ = ta52(&input.sealed, &input.k, &input.context).is_mismatch();
    let _ = ta82(&input.sealed, &input.context, &input.k).is_mismatch();
    let _ = ta92(&input.sealed, &input.context, &input.k).is_mismatch();

    let mut key = [0u8; 10];
    key.copy_from_slice(&input.payload[..10]);
    let gck_n = [input.payload[10], input.payload[11]];

    let sealed_cck = ta31(&key, &input.context, &input.dck);
    assert_eq!(ta32(&sealed_cck, &input.context, &input.dck).accept(), Ok(key));

    let sealed_key = ta51(&key, &input.context, &input.k, input.key_index);
    assert_eq!(
        ta52(&sealed_key, &input.k, &input.context).verify(input.key_index).accept(),
        Ok((key, input.key_index))
    );

    let sealed_gck = ta81(&key, &input.context, &gck_n, &input.k);
    assert_eq!(
        ta82(&sealed_gck, &input.context, &input.k).verify(&gck_n).accept(),
        Ok((key, gck_n))
    );

    let mut sealed_gsko = ta91(&input.payload, &input.context, &input.k);
    assert_eq!(ta92(&sealed_gsko, &input.context, &input.k).accept(), Ok(input.payload));

    if input.flip_mask != 0 {
        sealed_gsko[usize::from(input.flip_position) % 15] ^= input.flip_mask;
        assert_ne!(ta92(&sealed_gsko, &input.context, &input.k).accept(), Ok(input.payload));
    }
});
