//! Integration tests using the known-answer vectors in `tests/vectors/`.

// Test code legitimately uses panic patterns for test failure reporting
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

mod vectors;

use std::path::PathBuf;

use sshkem::{parse_stanzas, FileKey, Fingerprint, Identity, KeyAlgorithm, SshKemError, Stanza};
use vectors::*;

/// Get the path to the test vectors directory.
fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/vectors")
}

/// Decodes the hex secret scalar or seed of an unwrap vector.
#[cfg(any(feature = "ed25519", feature = "ecdsa"))]
fn secret_bytes(test: &UnwrapTestVector) -> Vec<u8> {
    hex_decode(test.secret_key.as_ref().expect("secret key required")).expect("valid hex")
}

/// Builds the identity described by an unwrap vector, or `None` when its key
/// family is compiled out.
///
/// # Panics
///
/// Panics if the vector names an algorithm this crate does not know.
fn identity_for(test: &UnwrapTestVector) -> Option<Identity> {
    let algorithm: KeyAlgorithm = test
        .algorithm
        .parse()
        .unwrap_or_else(|e| panic!("Test '{}' has unknown algorithm: {e}", test.name));

    match algorithm {
        #[cfg(feature = "rsa")]
        KeyAlgorithm::Rsa => {
            let components = test.rsa_key.as_ref().expect("rsa key required");
            let int = |hex: &str| rsa::BigUint::parse_bytes(hex.as_bytes(), 16).expect("valid hex");
            let key = rsa::RsaPrivateKey::from_components(
                int(&components.n),
                int(&components.e),
                int(&components.d),
                vec![int(&components.p), int(&components.q)],
            )
            .expect("valid rsa key");
            Some(Identity::rsa(key).expect("supported rsa key"))
        }
        #[cfg(feature = "ed25519")]
        KeyAlgorithm::Ed25519 => {
            let seed: [u8; 32] = secret_bytes(test).try_into().expect("32-byte seed");
            let key = ed25519_dalek::SigningKey::from_bytes(&seed);
            Some(Identity::ed25519(key).expect("supported ed25519 key"))
        }
        #[cfg(feature = "ecdsa")]
        KeyAlgorithm::EcdsaP256 => {
            let key = p256::SecretKey::from_slice(&secret_bytes(test)).expect("valid scalar");
            Some(Identity::ecdsa(key).expect("supported ecdsa key"))
        }
        #[cfg(feature = "ecdsa")]
        KeyAlgorithm::EcdsaP384 => {
            let key = p384::SecretKey::from_slice(&secret_bytes(test)).expect("valid scalar");
            Some(Identity::ecdsa(key).expect("supported ecdsa key"))
        }
        #[cfg(feature = "ecdsa")]
        KeyAlgorithm::EcdsaP521 => {
            let key = p521::SecretKey::from_slice(&secret_bytes(test)).expect("valid scalar");
            Some(Identity::ecdsa(key).expect("supported ecdsa key"))
        }
        // Family compiled out
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

// =============================================================================
// Fingerprints
// =============================================================================

#[test]
fn test_fingerprint_vectors() {
    let path = vectors_dir().join("fingerprint.json");
    let suite: TestVectorSuite<FingerprintTestVector> =
        load_vectors(path.to_str().expect("valid path"));

    for test in suite.tests {
        let algorithm: KeyAlgorithm = test
            .algorithm
            .parse()
            .unwrap_or_else(|e| panic!("Test '{}' has unknown algorithm: {e}", test.name));
        let blob = hex_decode(&test.ssh_public_key).expect("valid hex");
        let fingerprint = Fingerprint::of(&blob);

        // The blob starts with the algorithm name as an SSH string
        let name = algorithm.label().as_bytes();
        assert_eq!(&blob[4..4 + name.len()], name, "Test '{}'", test.name);

        assert_eq!(
            fingerprint.to_string(),
            test.fingerprint,
            "Test '{}' fingerprint mismatch",
            test.name
        );
        assert!(fingerprint.matches(&test.fingerprint), "Test '{}'", test.name);
    }
}

#[test]
fn test_identity_public_key_encoding() {
    let fingerprints: TestVectorSuite<FingerprintTestVector> = load_vectors(
        vectors_dir()
            .join("fingerprint.json")
            .to_str()
            .expect("valid path"),
    );
    let unwraps: TestVectorSuite<UnwrapTestVector> = load_vectors(
        vectors_dir()
            .join("unwrap.json")
            .to_str()
            .expect("valid path"),
    );

    for test in unwraps.tests.iter().filter(|t| !t.expect_fail) {
        let Some(identity) = identity_for(test) else {
            continue;
        };
        let expected = fingerprints
            .tests
            .iter()
            .find(|f| f.algorithm == test.algorithm)
            .expect("fingerprint vector for every algorithm");

        let recipient = identity.recipient();
        assert_eq!(
            hex::encode(recipient.ssh_public_key()),
            expected.ssh_public_key,
            "Test '{}' public key encoding mismatch",
            test.name
        );
        assert_eq!(recipient.fingerprint().to_string(), expected.fingerprint);
        assert_eq!(recipient.algorithm().label(), test.algorithm);
    }
}

// =============================================================================
// Unwrap
// =============================================================================

#[test]
#[should_panic(expected = "unknown algorithm")]
fn test_unwrap_vector_with_unknown_algorithm_is_rejected() {
    let test = UnwrapTestVector {
        name: "misspelled".to_string(),
        expect_fail: false,
        error: None,
        algorithm: "ssh-ed25519x".to_string(),
        secret_key: None,
        rsa_key: None,
        file_key: None,
        stanza: String::new(),
    };
    let _ = identity_for(&test);
}

#[test]
fn test_unwrap_vectors() {
    let path = vectors_dir().join("unwrap.json");
    let suite: TestVectorSuite<UnwrapTestVector> = load_vectors(path.to_str().expect("valid path"));

    for test in suite.tests {
        let Some(identity) = identity_for(&test) else {
            continue;
        };
        let stanzas = parse_stanzas(&test.stanza)
            .unwrap_or_else(|e| panic!("Test '{}' stanza should parse: {e}", test.name));
        let result = identity.unwrap(&stanzas);

        if test.expect_fail {
            match test.error.as_deref() {
                Some("decryption") => assert!(
                    matches!(result, Err(SshKemError::DecryptionError)),
                    "Test '{}' expected DecryptionError, got {result:?}",
                    test.name
                ),
                Some("no-match") => assert!(
                    matches!(result, Err(SshKemError::NoMatch)),
                    "Test '{}' expected NoMatch, got {result:?}",
                    test.name
                ),
                other => panic!("Test '{}' has unknown error class {other:?}", test.name),
            }
        } else {
            let expected = hex_decode(test.file_key.as_ref().expect("file key required"))
                .expect("valid hex");
            let expected = FileKey::try_from(expected.as_slice()).expect("16-byte file key");
            let file_key = result.unwrap_or_else(|e| panic!("Test '{}' failed: {e}", test.name));
            assert_eq!(file_key, expected, "Test '{}' file key mismatch", test.name);
        }
    }
}

// =============================================================================
// Stanza text encoding
// =============================================================================

#[test]
fn test_stanza_vectors() {
    let path = vectors_dir().join("stanza.json");
    let suite: TestVectorSuite<StanzaTestVector> = load_vectors(path.to_str().expect("valid path"));

    for test in suite.tests {
        if test.expect_fail {
            assert!(
                parse_stanzas(&test.text).is_err(),
                "Test '{}' should have failed but succeeded",
                test.name
            );
            continue;
        }

        let label = test.label.as_ref().expect("label required for success test");
        let args = test.args.as_ref().expect("args required for success test");
        let body = hex_decode(test.body.as_ref().expect("body required")).expect("valid hex");

        // Serialization
        let stanza = Stanza::new(label.as_str(), args, body).expect("valid stanza");
        assert_eq!(stanza.to_string(), test.text, "Test '{}' serialization", test.name);

        // Parsing
        let parsed = Stanza::try_from(test.text.as_str())
            .unwrap_or_else(|e| panic!("Test '{}' failed to parse: {e}", test.name));
        assert_eq!(parsed, stanza, "Test '{}' parse mismatch", test.name);
    }
}

#[test]
fn test_stanza_vectors_concatenated() {
    let path = vectors_dir().join("stanza.json");
    let suite: TestVectorSuite<StanzaTestVector> = load_vectors(path.to_str().expect("valid path"));

    let valid: Vec<_> = suite.tests.iter().filter(|t| !t.expect_fail).collect();
    let text: String = valid.iter().map(|t| t.text.as_str()).collect();

    let parsed = parse_stanzas(&text).expect("concatenation should parse");
    assert_eq!(parsed.len(), valid.len());
    for (stanza, test) in parsed.iter().zip(valid) {
        assert_eq!(stanza.to_string(), test.text, "Test '{}'", test.name);
    }
}
