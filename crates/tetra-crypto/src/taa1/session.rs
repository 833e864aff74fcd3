//! TA51/TA52: sealing an 80-bit key together with its key index

use zeroize::Zeroize;

use super::{
    Unsealed,
    seal::{DOMAIN_TA51, SEALED_LEN, Sealer, deframe_88, frame_88},
};
use crate::error::CryptoError;

/// Result of [`ta52`]: the recovered key, its key index and the verdict.
pub struct UnsealedSessionKey {
    key: Unsealed<[u8; 10]>,
    key_index: u8,
}

impl UnsealedSessionKey {
    /// Recovered key, whatever the verdict.
    pub fn key(&self) -> &[u8; 10] {
        self.key.payload()
    }

    /// Key index recovered from the sealed payload.
    pub fn key_index(&self) -> u8 {
        self.key_index
    }

    /// True if the payload failed its redundancy check or a verification.
    pub fn is_mismatch(&self) -> bool {
        self.key.is_mismatch()
    }

    /// Fold a key-index expectation into the verdict.
    #[must_use]
    pub fn verify(mut self, expected_index: u8) -> Self {
        if self.key_index != expected_index {
            self.key.reject();
        }
        self
    }

    /// Convert the verdict into a `Result` carrying key and index.
    ///
    /// # Errors
    ///
    /// - `CryptoError::Mismatch` if the payload failed its redundancy check
    ///   or a verification
    pub fn accept(self) -> Result<([u8; 10], u8), CryptoError> {
        let key_index = self.key_index;
        self.key.accept().map(|key| (key, key_index))
    }
}

/// Seal an 80-bit key and its key index under `k`, bound to the version
/// number `vn`.
pub fn ta51(payload: &[u8; 10], vn: &[u8; 2], k: &[u8; 16], key_index: u8) -> [u8; SEALED_LEN] {
    let mut joined = [0u8; 11];
    joined[..10].copy_from_slice(payload);
    joined[10] = key_index;

    let mut framed = frame_88(&joined);
    let sealed = Sealer::new(k, DOMAIN_TA51, vn).seal(&framed);
    joined.zeroize();
    framed.zeroize();
    sealed
}

/// Unseal a key sealed by [`ta51`].
pub fn ta52(sealed: &[u8; SEALED_LEN], k: &[u8; 16], vn: &[u8; 2]) -> UnsealedSessionKey {
    let mut framed = Sealer::new(k, DOMAIN_TA51, vn).unseal(sealed);
    let (mut joined, intact) = deframe_88(&framed);
    framed.zeroize();

    let mut key = [0u8; 10];
    key.copy_from_slice(&joined[..10]);
    let key_index = joined[10];
    joined.zeroize();

    UnsealedSessionKey { key: Unsealed::new("TA52", key, !intact), key_index }
}
