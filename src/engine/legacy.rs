// src/engine/legacy.rs
//! Legacy Rijndael engine — key width inferred from the key material
//!
//! The original Rijndael transform never had a key size configured on
//! it; it took whatever width the derived key bytes implied. At the
//! fixed 128-bit block size that is the AES cipher, so this engine
//! shares the CBC primitives and differs only in how the width is
//! selected. Envelopes it produces are not promised to stay compatible
//! with the standard engine's.

use super::{check_len, CipherEngine, Result};
use crate::aliases::RevealSecret;
use crate::cipher::CbcCipher;
use crate::envelope;
use crate::error::EnvelopeError;
use crate::kdf;
use crate::params::EnvelopeParameters;

/// Engine mirroring the legacy Rijndael construction.
#[derive(Debug, Clone, Default)]
pub struct RijndaelEngine {
    params: EnvelopeParameters,
}

impl RijndaelEngine {
    pub fn new(params: EnvelopeParameters) -> Self {
        Self { params }
    }

    /// Default modes and iteration count with an explicit key size.
    pub fn with_key_size(key_size_bits: u32) -> Result<Self> {
        Ok(Self::new(EnvelopeParameters::with_key_size(key_size_bits)?))
    }
}

impl CipherEngine for RijndaelEngine {
    fn parameters(&self) -> &EnvelopeParameters {
        &self.params
    }

    fn encrypt_with(
        &self,
        plaintext: &str,
        passphrase: &str,
        salt: &[u8],
        iv: &[u8],
    ) -> Result<String> {
        check_len("salt", self.params.salt_len(), salt)?;
        check_len("iv", self.params.iv_len(), iv)?;

        let key = kdf::derive(
            passphrase,
            salt,
            self.params.derivation_iterations(),
            self.params.salt_len(),
        )?;

        // Width comes from the key bytes, not from the configuration.
        let cipher = CbcCipher::for_key_len(key.expose_secret().len())?;
        let ciphertext = cipher.encrypt(key.expose_secret(), iv, plaintext.as_bytes())?;
        Ok(envelope::pack(salt, iv, &ciphertext))
    }

    fn decrypt(&self, blob: &str, passphrase: &str) -> Result<String> {
        let parts = envelope::unpack(blob, &self.params)?;

        let key = kdf::derive(
            passphrase,
            &parts.salt,
            self.params.derivation_iterations(),
            self.params.salt_len(),
        )?;

        let cipher = CbcCipher::for_key_len(key.expose_secret().len())?;
        let plaintext = cipher.decrypt(key.expose_secret(), &parts.iv, &parts.ciphertext)?;
        String::from_utf8(plaintext).map_err(|_| EnvelopeError::DecryptionFailed)
    }
}
