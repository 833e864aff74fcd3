//! Shared sealing engine and payload framing

use zeroize::Zeroize;

use crate::{
    combinators::tb7,
    hurdle::{BLOCK_SIZE, Hurdle},
    transform::{transform_80_to_120_alt, transform_88_to_120, transform_120_to_88},
};

/// Width of every sealed payload.
pub(super) const SEALED_LEN: usize = 15;

/// Data positions of an 80-bit payload inside the pair-parity framing.
const DATA_POSITIONS_80: [usize; 10] = [0, 1, 3, 4, 6, 7, 9, 10, 12, 13];

/// Data positions of a 96-bit payload inside the truncated TB7 framing.
const DATA_POSITIONS_96: [usize; 12] = [0, 1, 2, 4, 5, 6, 8, 9, 10, 12, 13, 14];

// Algorithm identifiers mixed into the sealing IV
pub(super) const DOMAIN_TA31: u8 = 0x31;
pub(super) const DOMAIN_TA51: u8 = 0x51;
pub(super) const DOMAIN_TA81: u8 = 0x81;

/// HURDLE keyed for one seal/unseal algorithm and context.
pub(super) struct Sealer {
    cipher: Hurdle,
    iv: [u8; BLOCK_SIZE],
}

impl Sealer {
    /// Bind a sealing key to an algorithm domain and its two context bytes.
    pub(super) fn new(key: &[u8; 16], domain: u8, context: &[u8; 2]) -> Self {
        let cipher = Hurdle::new(key);
        let iv = cipher.encrypt_block(&[domain, context[0], context[1], 0, 0, 0, 0, domain]);
        Self { cipher, iv }
    }

    pub(super) fn seal(&self, framed: &[u8; SEALED_LEN]) -> [u8; SEALED_LEN] {
        let mut buf = *framed;
        let Ok(()) = self.cipher.cbc_cts_encrypt(&self.iv, &mut buf) else {
            unreachable!("sealed payloads are longer than one block");
        };
        buf
    }

    pub(super) fn unseal(&self, sealed: &[u8; SEALED_LEN]) -> [u8; SEALED_LEN] {
        let mut buf = *sealed;
        let Ok(()) = self.cipher.cbc_cts_decrypt(&self.iv, &mut buf) else {
            unreachable!("sealed payloads are longer than one block");
        };
        buf
    }
}

impl Drop for Sealer {
    fn drop(&mut self) {
        self.iv.zeroize();
    }
}

pub(super) fn frame_80(payload: &[u8; 10]) -> [u8; SEALED_LEN] {
    transform_80_to_120_alt(payload)
}

/// Strip the pair-parity framing and report whether the redundancy held.
pub(super) fn deframe_80(framed: &[u8; SEALED_LEN]) -> ([u8; 10], bool) {
    let payload = gather(framed, DATA_POSITIONS_80);
    let intact = frame_80(&payload) == *framed;
    (payload, intact)
}

pub(super) fn frame_88(payload: &[u8; 11]) -> [u8; SEALED_LEN] {
    transform_88_to_120(payload)
}

pub(super) fn deframe_88(framed: &[u8; SEALED_LEN]) -> ([u8; 11], bool) {
    let payload = transform_120_to_88(framed);
    let intact = frame_88(&payload) == *framed;
    (payload, intact)
}

/// TB7 framing without its final parity byte.
pub(super) fn frame_96(payload: &[u8; 12]) -> [u8; SEALED_LEN] {
    let expanded = tb7(payload);
    let mut out = [0u8; SEALED_LEN];
    out.copy_from_slice(&expanded[..SEALED_LEN]);
    out
}

pub(super) fn deframe_96(framed: &[u8; SEALED_LEN]) -> ([u8; 12], bool) {
    let payload = gather(framed, DATA_POSITIONS_96);
    let intact = frame_96(&payload) == *framed;
    (payload, intact)
}

fn gather<const N: usize>(framed: &[u8; SEALED_LEN], positions: [usize; N]) -> [u8; N] {
    positions.map(|pos| framed[pos])
}
