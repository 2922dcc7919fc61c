//! Error types for wrap and unwrap operations.
//!
//! This module provides a unified error type for the crate. Messages for
//! security-sensitive failures are intentionally vague so they do not help an
//! attacker distinguish which step of decryption went wrong.

use thiserror::Error;

/// Errors that can occur when wrapping or unwrapping file keys.
#[derive(Debug, Error)]
pub enum SshKemError {
    /// The key algorithm, curve or size is not supported.
    #[error("Unsupported SSH key type: {0}")]
    UnsupportedKeyType(String),

    /// Wrapping the file key failed.
    #[error("Encryption failed")]
    EncryptionError,

    /// None of the supplied stanzas is addressed to this identity.
    #[error("No stanza matches this identity")]
    NoMatch,

    /// A stanza addressed to this identity failed to decrypt.
    /// Intentionally vague for security.
    #[error("Decryption failed")]
    DecryptionError,

    /// The operating system random number generator failed.
    #[error("Secure randomness unavailable")]
    RandomnessUnavailable,

    /// A stanza is malformed.
    #[error("Invalid stanza: {0}")]
    InvalidStanza(&'static str),

    /// Base64 decoding error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}

/// Result type alias for wrap and unwrap operations.
pub type SshKemResult<T> = Result<T, SshKemError>;
