// src/envelope.rs
//! The wire blob: `salt ‖ iv ‖ ciphertext`, base64-encoded
//!
//! No length prefixes and no version tag are embedded — field offsets
//! are recovered purely from [`EnvelopeParameters`], so the key size
//! used to encrypt must be known to decrypt. That coupling is part of
//! the format.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::EnvelopeError;
use crate::params::EnvelopeParameters;

pub type Result<T> = std::result::Result<T, EnvelopeError>;

/// A blob split back into its three fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeParts {
    pub salt: Vec<u8>,
    pub iv: Vec<u8>,
    /// May be empty; padding guarantees real ciphertext is at least one
    /// block, but an empty tail is not the codec's error to raise.
    pub ciphertext: Vec<u8>,
}

/// Concatenate the three fields in wire order and base64-encode.
pub fn pack(salt: &[u8], iv: &[u8], ciphertext: &[u8]) -> String {
    let mut raw = Vec::with_capacity(salt.len() + iv.len() + ciphertext.len());
    raw.extend_from_slice(salt);
    raw.extend_from_slice(iv);
    raw.extend_from_slice(ciphertext);
    STANDARD.encode(raw)
}

/// Base64-decode `blob` and slice it at the fixed offsets dictated by
/// `params`.
pub fn unpack(blob: &str, params: &EnvelopeParameters) -> Result<EnvelopeParts> {
    let raw = STANDARD
        .decode(blob)
        .map_err(|_| EnvelopeError::MalformedEnvelope("not valid base64"))?;

    let salt_len = params.salt_len();
    let header_len = salt_len + params.iv_len();
    if raw.len() < header_len {
        return Err(EnvelopeError::MalformedEnvelope(
            "decoded blob shorter than salt + IV",
        ));
    }

    Ok(EnvelopeParts {
        salt: raw[..salt_len].to_vec(),
        iv: raw[salt_len..header_len].to_vec(),
        ciphertext: raw[header_len..].to_vec(),
    })
}

/// The salt field alone — enough to re-derive the key for a blob.
pub fn extract_salt(blob: &str, params: &EnvelopeParameters) -> Result<Vec<u8>> {
    Ok(unpack(blob, params)?.salt)
}

/// The IV field alone.
pub fn extract_iv(blob: &str, params: &EnvelopeParameters) -> Result<Vec<u8>> {
    Ok(unpack(blob, params)?.iv)
}
