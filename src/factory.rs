// src/factory.rs
//! Engine construction by algorithm tag
//!
//! A closed enum dispatch replaces the original's instantiate-by-name
//! indirection; unknown string tags fail at the `Algorithm` parse step.

use crate::algo::Algorithm;
use crate::engine::{AesEngine, CipherEngine, RijndaelEngine};
use crate::error::EnvelopeError;
use crate::params::EnvelopeParameters;

/// Build the engine variant for `algorithm` around `params`.
pub fn create(algorithm: Algorithm, params: EnvelopeParameters) -> Box<dyn CipherEngine> {
    match algorithm {
        Algorithm::Aes => Box::new(AesEngine::new(params)),
        Algorithm::Rijndael => Box::new(RijndaelEngine::new(params)),
    }
}

/// Build an engine from a string tag, for callers that carry the
/// algorithm name in configuration.
pub fn create_by_name(
    name: &str,
    params: EnvelopeParameters,
) -> Result<Box<dyn CipherEngine>, EnvelopeError> {
    Ok(create(name.parse()?, params))
}
