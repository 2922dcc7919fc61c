//! Test vector types for known-answer tests.
//!
//! The JSON suites under `tests/vectors/` were produced with an independent
//! implementation and cross-checked against OpenSSH public key encodings.

// Many fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

// =============================================================================
// Fingerprints
// =============================================================================

/// Test vector for public key fingerprints.
#[derive(Debug, Deserialize)]
pub struct FingerprintTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    /// SSH algorithm name
    pub algorithm: String,
    /// Hex-encoded SSH wire public key
    #[serde(rename = "ssh-public-key")]
    pub ssh_public_key: String,
    /// Expected fingerprint text
    pub fingerprint: String,
}

// =============================================================================
// Unwrap
// =============================================================================

/// RSA private key components, hex-encoded big-endian.
#[derive(Debug, Deserialize)]
pub struct RsaKeyVector {
    pub n: String,
    pub e: String,
    pub d: String,
    pub p: String,
    pub q: String,
}

/// Test vector for unwrapping a stanza with a fixed private key.
#[derive(Debug, Deserialize)]
pub struct UnwrapTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    /// Expected error class for fail tests (`decryption` or `no-match`)
    #[serde(default)]
    pub error: Option<String>,
    /// SSH algorithm name
    pub algorithm: String,
    /// Hex-encoded Ed25519 seed or ECDSA scalar (absent for RSA)
    #[serde(rename = "secret-key", default)]
    pub secret_key: Option<String>,
    /// RSA private key (null for non-RSA)
    #[serde(rename = "rsa-key")]
    pub rsa_key: Option<RsaKeyVector>,
    /// Hex-encoded expected file key (null for fail tests)
    #[serde(rename = "file-key")]
    pub file_key: Option<String>,
    /// Stanza text form
    pub stanza: String,
}

// =============================================================================
// Stanza text encoding
// =============================================================================

/// Test vector for the stanza text encoding.
#[derive(Debug, Deserialize)]
pub struct StanzaTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    /// Stanza label (null for fail tests)
    pub label: Option<String>,
    /// Stanza arguments (null for fail tests)
    pub args: Option<Vec<String>>,
    /// Hex-encoded body (null for fail tests)
    pub body: Option<String>,
    /// Text form
    pub text: String,
}

// =============================================================================
// Helper functions
// =============================================================================

/// Decode hex string to bytes.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
