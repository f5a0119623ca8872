// src/lib.rs
//! crypto-envelope — password-based AES-CBC encryption envelopes
//!
//! Features:
//! - One base64 blob carries `salt ‖ iv ‖ ciphertext`, nothing else
//! - PBKDF2-HMAC-SHA1 passphrase stretching (Rfc2898-compatible)
//! - Standard AES and legacy Rijndael engines behind one trait
//! - Key sizes 128/192/256; block size fixed at 128 bits
//!
//! The blob embeds no lengths or version tag: decryption must run with
//! the same [`EnvelopeParameters`] (key size above all) that encryption
//! used. Ciphertexts are unauthenticated CBC — there is no MAC, so
//! tampering surfaces only as a padding failure at decrypt time.

pub mod aliases;
pub mod algo;
pub mod consts;
pub mod engine;
pub mod envelope;
pub mod factory;
pub mod kdf;
pub mod params;

pub(crate) mod cipher;

pub mod error;

// Re-export everything users need at the crate root
pub use algo::Algorithm;
pub use engine::{AesEngine, CipherEngine, RijndaelEngine};
pub use error::EnvelopeError;
pub use factory::{create, create_by_name};
pub use params::{validate_key_size, CipherMode, EnvelopeParameters, PaddingMode};
