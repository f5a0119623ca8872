// src/consts.rs
//! Shared constants — security parameters and defaults

use std::num::NonZeroU32;

/// Key sizes (in bits) the envelope format supports
pub const ALLOWED_KEY_SIZES: [u32; 3] = [128, 192, 256];

/// Smallest supported key size in bits
pub const MIN_KEY_SIZE_BITS: u32 = 128;

/// Largest supported key size in bits
pub const MAX_KEY_SIZE_BITS: u32 = 256;

/// Fixed cipher block size in bits — the IV is always one block
pub const BLOCK_SIZE_BITS: u32 = 128;

/// Default PBKDF2 iteration count for passphrase stretching
// Matches the iteration count used by existing envelopes; raising it
// breaks nothing going forward but new blobs cost more to derive.
pub const DEFAULT_DERIVATION_ITERATIONS: NonZeroU32 = match NonZeroU32::new(10_000) {
    Some(n) => n,
    None => unreachable!(),
};
