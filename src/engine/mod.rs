// src/engine/mod.rs
//! The `CipherEngine` contract and its two implementations
//!
//! Engines are stateless beyond their immutable [`EnvelopeParameters`],
//! so one instance can be shared freely across threads.

mod legacy;
mod standard;

pub use legacy::RijndaelEngine;
pub use standard::AesEngine;

use rand::RngCore;

use crate::envelope;
use crate::error::EnvelopeError;
use crate::params::EnvelopeParameters;

pub type Result<T> = std::result::Result<T, EnvelopeError>;

/// Password-based encryption to and from base64 envelopes.
///
/// Both implementations produce the same `salt ‖ iv ‖ ciphertext`
/// layout; they are *not* guaranteed interchangeable, because the
/// underlying transforms may differ even when the envelope shape does
/// not. Decrypt with the variant (and key size) that encrypted.
pub trait CipherEngine: std::fmt::Debug + Send + Sync {
    /// The immutable configuration this engine was built with.
    fn parameters(&self) -> &EnvelopeParameters;

    /// Encrypt with caller-supplied salt and IV.
    ///
    /// Deterministic: feeding back the salt and IV extracted from an
    /// existing envelope reproduces that envelope byte for byte, which
    /// lets callers verify an encryption without decrypting.
    fn encrypt_with(
        &self,
        plaintext: &str,
        passphrase: &str,
        salt: &[u8],
        iv: &[u8],
    ) -> Result<String>;

    /// Recover the plaintext from an envelope produced with the same
    /// parameters and passphrase.
    fn decrypt(&self, envelope: &str, passphrase: &str) -> Result<String>;

    /// Encrypt with a fresh random salt and IV.
    fn encrypt(&self, plaintext: &str, passphrase: &str) -> Result<String> {
        let salt = random_bytes(self.parameters().salt_len());
        let iv = random_bytes(self.parameters().iv_len());
        self.encrypt_with(plaintext, passphrase, &salt, &iv)
    }

    /// The salt field of an envelope, sliced per this engine's key size.
    fn salt_bytes(&self, envelope: &str) -> Result<Vec<u8>> {
        envelope::extract_salt(envelope, self.parameters())
    }

    /// The IV field of an envelope.
    fn iv_bytes(&self, envelope: &str) -> Result<Vec<u8>> {
        envelope::extract_iv(envelope, self.parameters())
    }
}

/// Fill a fresh buffer from the thread-local CSPRNG.
fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

/// Salt and IV lengths are fixed by the parameters; anything else would
/// produce a blob that unpacks at the wrong offsets.
fn check_len(field: &'static str, expected: usize, input: &[u8]) -> Result<()> {
    if input.len() == expected {
        Ok(())
    } else {
        Err(EnvelopeError::InvalidInputLength {
            field,
            expected,
            actual: input.len(),
        })
    }
}
