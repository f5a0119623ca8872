// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// Key size is not one of the sizes this envelope format supports.
    #[error("key size must be one of 128, 192 or 256 bits, got {0}")]
    InvalidKeySize(u32),

    /// Algorithm tag did not match any known engine.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Blob is not valid base64, or decodes to fewer bytes than salt + IV.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(&'static str),

    /// Wrong passphrase, corrupted ciphertext, or invalid padding.
    ///
    /// Deliberately carries no detail about which check failed.
    #[error("decryption failed")]
    DecryptionFailed,

    /// The key-stretching primitive rejected its inputs.
    #[error("key derivation failed")]
    KeyDerivationFailed,

    /// Caller-supplied byte input has the wrong length for the configured
    /// parameters.
    #[error("{field} must be {expected} bytes, got {actual}")]
    InvalidInputLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}
