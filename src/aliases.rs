// src/aliases.rs
//! Secret-wrapping aliases built on secure-gate
//!
//! Key material derived from a passphrase only ever lives inside these
//! types, so it is zeroized when the owning operation finishes.

pub use secure_gate::{dynamic_alias, RevealSecret};

// Variable-length because the derived key tracks the configured key
// size (16, 24 or 32 bytes).
dynamic_alias!(pub DerivedKey, Vec<u8>);
