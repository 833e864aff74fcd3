//! TETRA Air-Interface Cryptographic Primitives
//!
//! Fixed-function building blocks of the TETRA air interface. Pure
//! functions over fixed-width byte arrays with deterministic outputs; no I/O,
//! no global state, no logging.
//!
//! # Layering
//!
//! ```text
//! transform   combinators   hurdle          leaves
//!     │            │          │
//!     └────────────┼──────────┘
//!                  ▼
//!                taa1          TA11/21/41/71 derivations, TA31..TA92 seal/unseal
//!
//! tea                          TEA1/TEA2/TEA3 keystream, frame-number IVs
//! tables                       every S-box and LUT
//! ```
//!
//! # Keystream
//!
//! Frame numbers pack into a 32-bit IV; the IV and an 80-bit key select a
//! keystream of any length:
//!
//! ```text
//! FrameNumbers ──to_iv()──▶ u32 IV ──┐
//!                                    ├──▶ tea1/tea2/tea3 ──▶ keystream
//!                 80-bit key ────────┘
//! ```
//!
//! # Key Management
//!
//! ```text
//! K ──TA11/TA21──▶ session values        DCK1, DCK2 ──TB4──▶ DCK
//! CK ──TB5(cell)──▶ ECK                  SCK ──TB6(carrier, SSI)──▶ ESCK
//! GCK, CCK ──TA71──▶ MGCK
//! payload ──frame──▶ 120 bits ──HURDLE CBC-CTS──▶ sealed (15 bytes)
//! ```
//!
//! # Security
//!
//! Integrity:
//! - Sealed payloads carry redundancy; unsealing re-derives it and reports a
//!   mismatch verdict instead of failing
//! - The verdict never triggers logging or side effects here
//!
//! Key Hygiene:
//! - HURDLE contexts, keystream registers and unsealed payloads are zeroized
//!   on drop
//! - No primitive retains a reference to caller key material
//!
//! Table Provenance:
//! - TEA1 runs on the published tables and reproduces its vectors
//! - HURDLE, TEA2 and TEA3 (and TAA1 through HURDLE) run on stand-in tables
//!   in [`tables`] and do not reproduce theirs

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod combinators;
pub mod error;
pub mod hurdle;
pub mod tables;
pub mod taa1;
pub mod tea;
pub mod transform;

pub use combinators::{tb4, tb5, tb6, tb7};
pub use error::{CryptoError, fixed};
pub use hurdle::{Direction, Hurdle};
pub use taa1::{
    Unsealed, UnsealedGroupKey, UnsealedSessionKey, ta11, ta21, ta31, ta32, ta41, ta51, ta52,
    ta71, ta81, ta82, ta91, ta92,
};
pub use tea::{
    FrameNumbers, KeystreamGenerator, LinkDirection, Tea1, Tea1KeyRegister, Tea2, Tea3,
    TeaAlgorithm, search_key_register, tea1, tea1_fill_with_register, tea2, tea3,
};
pub use transform::{
    transform_80_to_120, transform_80_to_120_alt, transform_80_to_128, transform_80_to_128_alt,
    transform_88_to_120, transform_120_to_88,
};

/// 80-bit key material.
pub type Key80 = [u8; 10];

/// 128-bit key material.
pub type Key128 = [u8; 16];
