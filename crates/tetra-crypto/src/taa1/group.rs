//! TA81/TA82 and TA91/TA92: sealing group keys
//!
//! Both pairs seal a 96-bit payload under the same IV: TA81 seals a GCK
//! followed by its 16-bit key number, TA91 seals a GSKO. The first sealed
//! block depends only on the leading payload bytes, so a GCK and a GSKO that
//! share a prefix share the first seven sealed bytes.

use zeroize::Zeroize;

use super::{
    Unsealed,
    seal::{DOMAIN_TA81, SEALED_LEN, Sealer, deframe_96, frame_96},
};
use crate::error::CryptoError;

/// Result of [`ta82`]: the recovered GCK, its key number and the verdict.
pub struct UnsealedGroupKey {
    key: Unsealed<[u8; 10]>,
    key_number: [u8; 2],
}

impl UnsealedGroupKey {
    /// Recovered GCK, whatever the verdict.
    pub fn key(&self) -> &[u8; 10] {
        self.key.payload()
    }

    /// GCK number recovered from the sealed payload.
    pub fn key_number(&self) -> [u8; 2] {
        self.key_number
    }

    /// True if the payload failed its redundancy check or a verification.
    pub fn is_mismatch(&self) -> bool {
        self.key.is_mismatch()
    }

    /// Fold a key-number expectation into the verdict.
    #[must_use]
    pub fn verify(mut self, expected_number: &[u8; 2]) -> Self {
        if self.key_number != *expected_number {
            self.key.reject();
        }
        self
    }

    /// Convert the verdict into a `Result` carrying key and key number.
    ///
    /// # Errors
    ///
    /// - `CryptoError::Mismatch` if the payload failed its redundancy check
    ///   or a verification
    pub fn accept(self) -> Result<([u8; 10], [u8; 2]), CryptoError> {
        let key_number = self.key_number;
        self.key.accept().map(|key| (key, key_number))
    }
}

/// Seal a GCK and its key number under `k`, bound to the version number.
pub fn ta81(gck: &[u8; 10], vn: &[u8; 2], gck_n: &[u8; 2], k: &[u8; 16]) -> [u8; SEALED_LEN] {
    let mut joined = [0u8; 12];
    joined[..10].copy_from_slice(gck);
    joined[10..].copy_from_slice(gck_n);

    let sealed = seal_96(&joined, vn, k);
    joined.zeroize();
    sealed
}

/// Unseal a GCK sealed by [`ta81`].
pub fn ta82(sealed: &[u8; SEALED_LEN], vn: &[u8; 2], k: &[u8; 16]) -> UnsealedGroupKey {
    let (mut joined, intact) = unseal_96(sealed, vn, k);

    let mut key = [0u8; 10];
    key.copy_from_slice(&joined[..10]);
    let key_number = [joined[10], joined[11]];
    joined.zeroize();

    UnsealedGroupKey { key: Unsealed::new("TA82", key, !intact), key_number }
}

/// Seal a GSKO under `k`, bound to the version number.
pub fn ta91(gsko: &[u8; 12], vn: &[u8; 2], k: &[u8; 16]) -> [u8; SEALED_LEN] {
    seal_96(gsko, vn, k)
}

/// Unseal a GSKO sealed by [`ta91`].
pub fn ta92(sealed: &[u8; SEALED_LEN], vn: &[u8; 2], k: &[u8; 16]) -> Unsealed<[u8; 12]> {
    let (gsko, intact) = unseal_96(sealed, vn, k);
    Unsealed::new("TA92", gsko, !intact)
}

fn seal_96(payload: &[u8; 12], vn: &[u8; 2], k: &[u8; 16]) -> [u8; SEALED_LEN] {
    let mut framed = frame_96(payload);
    let sealed = Sealer::new(k, DOMAIN_TA81, vn).seal(&framed);
    framed.zeroize();
    sealed
}

fn unseal_96(sealed: &[u8; SEALED_LEN], vn: &[u8; 2], k: &[u8; 16]) -> ([u8; 12], bool) {
    let mut framed = Sealer::new(k, DOMAIN_TA81, vn).unseal(sealed);
    let recovered = deframe_96(&framed);
    framed.zeroize();
    recovered
}
