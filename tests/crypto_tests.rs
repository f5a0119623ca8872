// tests/crypto_tests.rs
use crypto_envelope::{AesEngine, CipherEngine, EnvelopeError, RijndaelEngine};

const PASSPHRASE: &str = "2stu017@aRuLseng$12ind";

#[test]
fn test_aes_roundtrip_across_key_sizes() {
    for bits in [128u32, 192, 256] {
        let engine = AesEngine::with_key_size(bits).unwrap();
        let envelope = engine.encrypt("Attack at dawn!", PASSPHRASE).unwrap();
        let decrypted = engine.decrypt(&envelope, PASSPHRASE).unwrap();
        assert_eq!(decrypted, "Attack at dawn!", "key size {bits}");
    }
}

#[test]
fn test_rijndael_roundtrip() {
    let engine = RijndaelEngine::default();
    let envelope = engine.encrypt("Attack at dawn!", PASSPHRASE).unwrap();
    assert_eq!(engine.decrypt(&envelope, PASSPHRASE).unwrap(), "Attack at dawn!");
}

#[test]
fn test_empty_plaintext_roundtrip() {
    let engine = AesEngine::default();
    let envelope = engine.encrypt("", PASSPHRASE).unwrap();
    assert_eq!(engine.decrypt(&envelope, PASSPHRASE).unwrap(), "");
}

#[test]
fn test_multibyte_plaintext_roundtrip() {
    let engine = AesEngine::default();
    let plaintext = "naïve — приве́т — 暗号 🔐";
    let envelope = engine.encrypt(plaintext, PASSPHRASE).unwrap();
    assert_eq!(engine.decrypt(&envelope, PASSPHRASE).unwrap(), plaintext);
}

#[test]
fn test_reencrypting_with_extracted_salt_and_iv_reproduces_blob() {
    for engine in engines() {
        let envelope = engine.encrypt("CryptoTesting", PASSPHRASE).unwrap();
        let salt = engine.salt_bytes(&envelope).unwrap();
        let iv = engine.iv_bytes(&envelope).unwrap();

        let again = engine
            .encrypt_with("CryptoTesting", PASSPHRASE, &salt, &iv)
            .unwrap();
        assert_eq!(envelope, again);
    }
}

#[test]
fn test_fresh_salt_and_iv_per_encryption() {
    let engine = AesEngine::default();
    let first = engine.encrypt("same input", PASSPHRASE).unwrap();
    let second = engine.encrypt("same input", PASSPHRASE).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_salt_and_iv_lengths_follow_parameters() {
    for bits in [128u32, 192, 256] {
        let engine = AesEngine::with_key_size(bits).unwrap();
        let envelope = engine.encrypt("lengths", PASSPHRASE).unwrap();

        assert_eq!(engine.salt_bytes(&envelope).unwrap().len(), bits as usize / 8);
        // IV is one block regardless of key size
        assert_eq!(engine.iv_bytes(&envelope).unwrap().len(), 16);
    }
}

#[test]
fn test_decrypt_fails_with_wrong_passphrase() {
    for engine in engines() {
        let envelope = engine.encrypt("secret", PASSPHRASE).unwrap();
        let wrong = engine.decrypt(&envelope, "not-the-passphrase");
        assert!(matches!(wrong, Err(EnvelopeError::DecryptionFailed)));
    }
}

#[test]
fn test_encrypt_with_rejects_wrong_salt_length() {
    let engine = AesEngine::default();
    let err = engine
        .encrypt_with("x", PASSPHRASE, &[0u8; 8], &[0u8; 16])
        .unwrap_err();
    assert!(matches!(err, EnvelopeError::InvalidInputLength { field: "salt", .. }));
}

#[test]
fn test_encrypt_with_rejects_wrong_iv_length() {
    let engine = RijndaelEngine::default();
    let err = engine
        .encrypt_with("x", PASSPHRASE, &[0u8; 16], &[0u8; 12])
        .unwrap_err();
    assert!(matches!(err, EnvelopeError::InvalidInputLength { field: "iv", .. }));
}

fn engines() -> Vec<Box<dyn CipherEngine>> {
    vec![
        Box::new(AesEngine::default()),
        Box::new(RijndaelEngine::default()),
    ]
}
