// src/cipher.rs
//! CBC/PKCS7 transform dispatch over the three AES key widths
//!
//! Both engines funnel into this module; they differ only in how a
//! width is chosen (configured key size vs. key-material length).

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};

use crate::error::EnvelopeError;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

pub(crate) type Result<T> = std::result::Result<T, EnvelopeError>;

/// One of the supported block-cipher instantiations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CbcCipher {
    Aes128,
    Aes192,
    Aes256,
}

impl CbcCipher {
    /// Select the cipher from a configured key size, the way the
    /// standard engine is told its width up front.
    pub fn for_key_size(key_size_bits: u32) -> Result<Self> {
        match key_size_bits {
            128 => Ok(CbcCipher::Aes128),
            192 => Ok(CbcCipher::Aes192),
            256 => Ok(CbcCipher::Aes256),
            other => Err(EnvelopeError::InvalidKeySize(other)),
        }
    }

    /// Select the cipher from the key material itself, the way the
    /// legacy engine infers its width.
    pub fn for_key_len(key_len: usize) -> Result<Self> {
        match key_len {
            16 => Ok(CbcCipher::Aes128),
            24 => Ok(CbcCipher::Aes192),
            32 => Ok(CbcCipher::Aes256),
            other => Err(EnvelopeError::InvalidKeySize(other as u32 * 8)),
        }
    }

    pub fn key_len(&self) -> usize {
        match self {
            CbcCipher::Aes128 => 16,
            CbcCipher::Aes192 => 24,
            CbcCipher::Aes256 => 32,
        }
    }

    /// Encrypt and PKCS7-pad `plaintext` under `key`/`iv`.
    pub fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        self.check_key_material(key, iv)?;
        let out = match self {
            CbcCipher::Aes128 => Aes128CbcEnc::new_from_slices(key, iv)
                .map_err(|_| EnvelopeError::DecryptionFailed)?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            CbcCipher::Aes192 => Aes192CbcEnc::new_from_slices(key, iv)
                .map_err(|_| EnvelopeError::DecryptionFailed)?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            CbcCipher::Aes256 => Aes256CbcEnc::new_from_slices(key, iv)
                .map_err(|_| EnvelopeError::DecryptionFailed)?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        };
        Ok(out)
    }

    /// Decrypt `ciphertext` and strip PKCS7 padding, returning only the
    /// bytes the unpadding step reports as real plaintext.
    pub fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.check_key_material(key, iv)?;
        match self {
            CbcCipher::Aes128 => Aes128CbcDec::new_from_slices(key, iv)
                .map_err(|_| EnvelopeError::DecryptionFailed)?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
            CbcCipher::Aes192 => Aes192CbcDec::new_from_slices(key, iv)
                .map_err(|_| EnvelopeError::DecryptionFailed)?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
            CbcCipher::Aes256 => Aes256CbcDec::new_from_slices(key, iv)
                .map_err(|_| EnvelopeError::DecryptionFailed)?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        }
        .map_err(|_| EnvelopeError::DecryptionFailed)
    }

    fn check_key_material(&self, key: &[u8], iv: &[u8]) -> Result<()> {
        if key.len() != self.key_len() {
            return Err(EnvelopeError::InvalidInputLength {
                field: "key",
                expected: self.key_len(),
                actual: key.len(),
            });
        }
        if iv.len() != 16 {
            return Err(EnvelopeError::InvalidInputLength {
                field: "iv",
                expected: 16,
                actual: iv.len(),
            });
        }
        Ok(())
    }
}
