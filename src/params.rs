// src/params.rs
//! Envelope parameters — cipher mode, padding, key size, KDF cost
//!
//! The parameters are the *only* context needed to split a blob back
//! into salt, IV and ciphertext: the wire format carries no lengths, so
//! decryption must run with the same key size used for encryption.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::consts::{ALLOWED_KEY_SIZES, BLOCK_SIZE_BITS, DEFAULT_DERIVATION_ITERATIONS, MIN_KEY_SIZE_BITS};
use crate::error::EnvelopeError;

/// Block-chaining mode used by the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CipherMode {
    #[default]
    Cbc,
}

/// Block-padding scheme used by the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PaddingMode {
    #[default]
    Pkcs7,
}

/// Reject key sizes outside the supported set.
///
/// Sizes like 160 or 224 are valid for some ciphers but not offered
/// here; they fail the same way 0 does.
pub fn validate_key_size(key_size_bits: u32) -> Result<(), EnvelopeError> {
    if ALLOWED_KEY_SIZES.contains(&key_size_bits) {
        Ok(())
    } else {
        Err(EnvelopeError::InvalidKeySize(key_size_bits))
    }
}

/// Immutable configuration shared by every engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeParameters {
    cipher_mode: CipherMode,
    padding_mode: PaddingMode,
    key_size_bits: u32,
    derivation_iterations: NonZeroU32,
}

impl EnvelopeParameters {
    /// Build fully explicit parameters.
    ///
    /// Fails with [`EnvelopeError::InvalidKeySize`] before anything else
    /// can go wrong; no engine is ever constructed around a bad key size.
    pub fn new(
        cipher_mode: CipherMode,
        padding_mode: PaddingMode,
        key_size_bits: u32,
        derivation_iterations: NonZeroU32,
    ) -> Result<Self, EnvelopeError> {
        validate_key_size(key_size_bits)?;
        Ok(Self {
            cipher_mode,
            padding_mode,
            key_size_bits,
            derivation_iterations,
        })
    }

    /// Default modes and iteration count with an explicit key size
    pub fn with_key_size(key_size_bits: u32) -> Result<Self, EnvelopeError> {
        Self::new(
            CipherMode::default(),
            PaddingMode::default(),
            key_size_bits,
            DEFAULT_DERIVATION_ITERATIONS,
        )
    }

    pub fn cipher_mode(&self) -> CipherMode {
        self.cipher_mode
    }

    pub fn padding_mode(&self) -> PaddingMode {
        self.padding_mode
    }

    pub fn key_size_bits(&self) -> u32 {
        self.key_size_bits
    }

    pub fn derivation_iterations(&self) -> NonZeroU32 {
        self.derivation_iterations
    }

    /// Salt length in bytes — recomputed, never stored, so it cannot
    /// drift from the key size
    pub fn salt_len(&self) -> usize {
        self.key_size_bits as usize / 8
    }

    /// IV length in bytes — one cipher block, independent of key size
    pub fn iv_len(&self) -> usize {
        BLOCK_SIZE_BITS as usize / 8
    }
}

impl Default for EnvelopeParameters {
    fn default() -> Self {
        Self {
            cipher_mode: CipherMode::default(),
            padding_mode: PaddingMode::default(),
            key_size_bits: MIN_KEY_SIZE_BITS,
            derivation_iterations: DEFAULT_DERIVATION_ITERATIONS,
        }
    }
}
