// src/algo.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EnvelopeError;

/// Which block-cipher engine drives the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum Algorithm {
    /// Standard AES — key size configured on the transform
    #[default]
    Aes,
    /// Legacy Rijndael — key size inferred from the key material
    Rijndael,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Aes => f.write_str("Aes"),
            Algorithm::Rijndael => f.write_str("Rijndael"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Aes" | "aes" => Ok(Algorithm::Aes),
            "Rijndael" | "rijndael" => Ok(Algorithm::Rijndael),
            other => Err(EnvelopeError::UnsupportedAlgorithm(other.to_owned())),
        }
    }
}
