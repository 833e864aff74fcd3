//! TAA1 authentication and key-management family
//!
//! Two kinds of function live here:
//!
//! - **Derivations** (TA11/TA41, TA21, TA71): one-way functions of a key and
//!   a challenge or second key.
//! - **Seal/unseal pairs** (TA31/32, TA51/52, TA81/82, TA91/92): the payload
//!   is framed to 120 bits with redundancy, then encrypted with HURDLE in CBC
//!   ciphertext-stealing mode under an IV bound to the algorithm and its
//!   context fields. Unsealing decrypts, re-derives the redundancy from the
//!   recovered payload and reports any difference as a mismatch.
//!
//! # Security Properties
//!
//! - A mismatch is a verdict, not an error: the recovered bytes are still
//!   returned and callers decide. [`Unsealed::accept`] turns the verdict into
//!   a `Result` for callers that want to propagate it with `?`
//! - Unsealed key material is zeroized when the result is dropped
//! - Every function is stateless and may run concurrently

mod cck;
mod derivation;
mod group;
mod seal;
mod session;

pub use cck::{ta31, ta32};
pub use derivation::{ta11, ta21, ta41, ta71};
pub use group::{UnsealedGroupKey, ta81, ta82, ta91, ta92};
pub use session::{UnsealedSessionKey, ta51, ta52};
use zeroize::Zeroize;

use crate::error::CryptoError;

/// Result of an unseal operation.
///
/// Holds the recovered payload together with the mismatch verdict.
pub struct Unsealed<P: Copy + Zeroize> {
    payload: P,
    mismatch: bool,
    algorithm: &'static str,
}

impl<P: Copy + Zeroize> Unsealed<P> {
    pub(crate) fn new(algorithm: &'static str, payload: P, mismatch: bool) -> Self {
        Self { payload, mismatch, algorithm }
    }

    /// Recovered payload, whatever the verdict.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// True if the payload failed its redundancy check.
    pub fn is_mismatch(&self) -> bool {
        self.mismatch
    }

    /// Name of the unseal algorithm that produced this result.
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Convert the verdict into a `Result`.
    ///
    /// # Errors
    ///
    /// - `CryptoError::Mismatch` if the payload failed its redundancy check
    pub fn accept(self) -> Result<P, CryptoError> {
        if self.mismatch {
            return Err(CryptoError::Mismatch { algorithm: self.algorithm });
        }
        Ok(self.payload)
    }

    /// Force the verdict to mismatch.
    pub(crate) fn reject(&mut self) {
        self.mismatch = true;
    }
}

impl<P: Copy + Zeroize> Drop for Unsealed<P> {
    fn drop(&mut self) {
        self.payload.zeroize();
    }
}
