//! Harness error types.

use tetra_crypto::CryptoError;
use thiserror::Error;

/// Errors from loading vectors, parsing CLI input or selecting suites.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A hex fixture or argument failed to decode
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Decoded input had the wrong width or a field was out of range
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// `--suite` named no registered suite
    #[error("unknown suite: {0}")]
    UnknownSuite(String),
}

/// Decode a hex string into a fixed-width array.
///
/// # Errors
///
/// - `HarnessError::Hex` if the string is not valid hex
/// - `HarnessError::Crypto` if it decodes to the wrong number of bytes
pub fn hex_array<const N: usize>(input: &str) -> Result<[u8; N], HarnessError> {
    let decoded = hex::decode(input)?;
    Ok(tetra_crypto::fixed(&decoded)?)
}
