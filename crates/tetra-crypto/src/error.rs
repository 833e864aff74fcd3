//! Error types for the primitive layer

use thiserror::Error;

/// Errors from the TETRA primitive layer.
///
/// The primitives themselves are total over their fixed-width inputs; these
/// errors only arise at the edges where callers hand in slices or packed
/// fields, and when an unseal verdict is converted into a `Result`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// A buffer did not have the width required by the primitive
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required width in bytes
        expected: usize,
        /// Width that was supplied
        actual: usize,
    },

    /// A frame-number field was outside its air-interface range
    #[error("{field} out of range: {value} not in {min}..={max}")]
    FieldOutOfRange {
        /// Name of the field
        field: &'static str,
        /// Supplied value
        value: u32,
        /// Smallest allowed value
        min: u32,
        /// Largest allowed value
        max: u32,
    },

    /// An unseal operation reported a mismatch
    #[error("{algorithm}: sealed payload does not match key or context")]
    Mismatch {
        /// The unseal algorithm that rejected the payload
        algorithm: &'static str,
    },
}

impl CryptoError {
    /// Returns true if the error is a security verdict rather than a caller
    /// mistake.
    ///
    /// Key material that produced a mismatch must be discarded. Length and
    /// range errors indicate a bug in the caller.
    pub fn is_integrity_failure(&self) -> bool {
        match self {
            Self::Mismatch { .. } => true,
            Self::InvalidLength { .. } | Self::FieldOutOfRange { .. } => false,
        }
    }
}

/// Copy a slice into a fixed-width array.
///
/// This is the only way the primitive layer accepts variable-length input;
/// every primitive signature takes `[u8; N]`.
pub fn fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N], CryptoError> {
    bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidLength { expected: N, actual: bytes.len() })
}
