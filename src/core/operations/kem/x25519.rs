//! X25519-based file-key wrapping for Ed25519 keys.
//!
//! This module implements the `ssh-ed25519` stanza using:
//! - the birational map from Edwards25519 to Curve25519 for the static key
//! - ephemeral-static X25519 for key agreement
//! - HKDF-SHA256 for wrap-key derivation
//! - ChaCha20-Poly1305 for encryption

use ed25519_dalek::{SigningKey, VerifyingKey};
use x25519_dalek::{PublicKey, StaticSecret};

use crate::core::error::{SshKemError, SshKemResult};
use crate::core::operations::kdf::{derive_wrap_key, open_file_key, seal_file_key};
use crate::core::operations::rng::LatchedRng;
use crate::core::types::FileKey;

/// Size of the ephemeral public key (X25519).
pub const EPHEMERAL_PK_SIZE: usize = 32;

/// Output type for wrap operation: (ephemeral_pk, body).
pub(crate) type WrapOutput = ([u8; EPHEMERAL_PK_SIZE], Vec<u8>);

/// Converts an Ed25519 verifying key into its X25519 public key.
#[must_use]
pub fn montgomery_public(recipient: &VerifyingKey) -> [u8; 32] {
    recipient.to_montgomery().to_bytes()
}

/// Wraps a file key with a recipient's Ed25519 public key.
///
/// # Returns
///
/// A tuple of (ephemeral_public_key, ciphertext || tag).
pub fn wrap_x25519(
    file_key: &FileKey,
    recipient: &VerifyingKey,
    domain: &str,
) -> SshKemResult<WrapOutput> {
    let recipient_pk = montgomery_public(recipient);

    // Generate ephemeral keypair; the secret is filled in place and zeroized
    // on drop
    let mut rng = LatchedRng::new();
    let ephemeral_secret = StaticSecret::random_from_rng(&mut rng);
    rng.finish()?;
    let ephemeral_pk = PublicKey::from(&ephemeral_secret).to_bytes();

    // Compute shared secret via ECDH
    let shared_secret = ephemeral_secret.diffie_hellman(&PublicKey::from(recipient_pk));
    if !shared_secret.was_contributory() {
        return Err(SshKemError::EncryptionError);
    }

    let wrap_key = derive_wrap_key(shared_secret.as_bytes(), &ephemeral_pk, &recipient_pk, domain)
        .ok_or(SshKemError::EncryptionError)?;
    let body = seal_file_key(&wrap_key, file_key)?;

    Ok((ephemeral_pk, body))
}

/// Unwraps a file key with the recipient's Ed25519 signing key.
///
/// # Arguments
///
/// * `ephemeral_pk` - The ephemeral public key carried by the stanza
/// * `body` - The wrapped file key and tag
/// * `recipient` - The recipient's Ed25519 signing key (converted to X25519)
/// * `domain` - The domain-separation string
pub fn unwrap_x25519(
    ephemeral_pk: &[u8; EPHEMERAL_PK_SIZE],
    body: &[u8],
    recipient: &SigningKey,
    domain: &str,
) -> SshKemResult<FileKey> {
    // The unclamped scalar bytes are exactly what X25519 expects; clamping
    // happens inside the Diffie-Hellman operation.
    let static_secret = StaticSecret::from(recipient.to_scalar_bytes());
    let recipient_pk = PublicKey::from(&static_secret).to_bytes();

    let shared_secret = static_secret.diffie_hellman(&PublicKey::from(*ephemeral_pk));
    if !shared_secret.was_contributory() {
        return Err(SshKemError::DecryptionError);
    }

    let wrap_key = derive_wrap_key(shared_secret.as_bytes(), ephemeral_pk, &recipient_pk, domain)
        .ok_or(SshKemError::DecryptionError)?;
    open_file_key(&wrap_key, body)
}
