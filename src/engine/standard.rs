// src/engine/standard.rs
//! Standard AES engine — key width taken from the configured parameters

use super::{check_len, CipherEngine, Result};
use crate::aliases::RevealSecret;
use crate::cipher::CbcCipher;
use crate::envelope;
use crate::error::EnvelopeError;
use crate::kdf;
use crate::params::EnvelopeParameters;

/// Engine backed by AES with an explicitly configured key size.
#[derive(Debug, Clone, Default)]
pub struct AesEngine {
    params: EnvelopeParameters,
}

impl AesEngine {
    pub fn new(params: EnvelopeParameters) -> Self {
        Self { params }
    }

    /// Default modes and iteration count with an explicit key size.
    pub fn with_key_size(key_size_bits: u32) -> Result<Self> {
        Ok(Self::new(EnvelopeParameters::with_key_size(key_size_bits)?))
    }
}

impl CipherEngine for AesEngine {
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

        // Key length tracks the salt length, as the original format does.
        let key = kdf::derive(
            passphrase,
            salt,
            self.params.derivation_iterations(),
            self.params.salt_len(),
        )?;

        let cipher = CbcCipher::for_key_size(self.params.key_size_bits())?;
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

        let cipher = CbcCipher::for_key_size(self.params.key_size_bits())?;
        let plaintext = cipher.decrypt(key.expose_secret(), &parts.iv, &parts.ciphertext)?;
        String::from_utf8(plaintext).map_err(|_| EnvelopeError::DecryptionFailed)
    }
}
