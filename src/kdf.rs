// src/kdf.rs
//! Passphrase stretching via PBKDF2-HMAC-SHA1
//!
//! SHA-1 as the PRF keeps derived keys byte-compatible with envelopes
//! produced by `Rfc2898DeriveBytes`-based implementations. Derivation is
//! deterministic by construction: decryption re-derives the exact key
//! from the salt recovered out of the blob.

use std::num::NonZeroU32;

use hmac::Hmac;
use sha1::Sha1;

use crate::aliases::DerivedKey;
use crate::error::EnvelopeError;

pub type Result<T> = std::result::Result<T, EnvelopeError>;

/// Stretch `passphrase` + `salt` into `output_len` bytes of key material.
///
/// Every call re-derives from scratch; the CPU cost is the point. The
/// result zeroizes on drop.
pub fn derive(
    passphrase: &str,
    salt: &[u8],
    iterations: NonZeroU32,
    output_len: usize,
) -> Result<DerivedKey> {
    let mut key = vec![0u8; output_len];
    pbkdf2::pbkdf2::<Hmac<Sha1>>(passphrase.as_bytes(), salt, iterations.get(), &mut key)
        .map_err(|_| EnvelopeError::KeyDerivationFailed)?;
    Ok(DerivedKey::new(key))
}
