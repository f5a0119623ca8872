// tests/factory_tests.rs
use std::num::NonZeroU32;

use crypto_envelope::{
    create, create_by_name, Algorithm, AesEngine, CipherEngine, CipherMode, EnvelopeError,
    EnvelopeParameters, PaddingMode,
};

const PASSPHRASE: &str = "factory floor";

#[test]
fn test_create_builds_working_engines_for_both_tags() {
    for algorithm in [Algorithm::Aes, Algorithm::Rijndael] {
        let engine = create(algorithm, EnvelopeParameters::default());
        let envelope = engine.encrypt("hello", PASSPHRASE).unwrap();
        assert_eq!(engine.decrypt(&envelope, PASSPHRASE).unwrap(), "hello");
    }
}

#[test]
fn test_create_by_name_accepts_known_tags() {
    for name in ["Aes", "aes", "Rijndael", "rijndael"] {
        assert!(create_by_name(name, EnvelopeParameters::default()).is_ok());
    }
}

#[test]
fn test_create_by_name_rejects_unknown_tags() {
    let err = create_by_name("TripleDes", EnvelopeParameters::default()).unwrap_err();
    match err {
        EnvelopeError::UnsupportedAlgorithm(name) => assert_eq!(name, "TripleDes"),
        other => panic!("expected UnsupportedAlgorithm, got {other:?}"),
    }
}

#[test]
fn test_invalid_key_size_fails_before_any_engine_exists() {
    for bits in [0u32, 1, 160, 224, 512] {
        let err = EnvelopeParameters::with_key_size(bits).unwrap_err();
        assert!(matches!(err, EnvelopeError::InvalidKeySize(got) if got == bits));

        let err = AesEngine::with_key_size(bits).unwrap_err();
        assert!(matches!(err, EnvelopeError::InvalidKeySize(_)));
    }
}

#[test]
fn test_explicit_parameter_construction() {
    let params = EnvelopeParameters::new(
        CipherMode::Cbc,
        PaddingMode::Pkcs7,
        192,
        NonZeroU32::new(25_000).unwrap(),
    )
    .unwrap();

    assert_eq!(params.key_size_bits(), 192);
    assert_eq!(params.salt_len(), 24);
    assert_eq!(params.derivation_iterations().get(), 25_000);

    let engine = create(Algorithm::Aes, params);
    let envelope = engine.encrypt("explicit", PASSPHRASE).unwrap();
    assert_eq!(engine.decrypt(&envelope, PASSPHRASE).unwrap(), "explicit");
}

#[test]
fn test_iteration_count_is_part_of_the_key() {
    // Same passphrase, different stretch count: the derived keys differ,
    // so a blob written at one cost cannot be read at another.
    let low = EnvelopeParameters::new(
        CipherMode::Cbc,
        PaddingMode::Pkcs7,
        128,
        NonZeroU32::new(1_000).unwrap(),
    )
    .unwrap();
    let high = EnvelopeParameters::new(
        CipherMode::Cbc,
        PaddingMode::Pkcs7,
        128,
        NonZeroU32::new(2_000).unwrap(),
    )
    .unwrap();

    let writer = create(Algorithm::Aes, low);
    let reader = create(Algorithm::Aes, high);

    let envelope = writer.encrypt("stretch", PASSPHRASE).unwrap();
    assert!(matches!(
        reader.decrypt(&envelope, PASSPHRASE),
        Err(EnvelopeError::DecryptionFailed)
    ));
}

#[test]
fn test_algorithm_tag_serializes_for_config_files() {
    assert_eq!(serde_json::to_string(&Algorithm::Rijndael).unwrap(), "\"Rijndael\"");
    let parsed: Algorithm = serde_json::from_str("\"Aes\"").unwrap();
    assert_eq!(parsed, Algorithm::Aes);
    assert_eq!(Algorithm::default(), Algorithm::Aes);
}
