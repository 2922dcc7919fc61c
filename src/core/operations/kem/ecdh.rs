//! NIST-curve ECDH file-key wrapping for ECDSA keys.
//!
//! This module implements the `ecdsa-sha2-nistp{256,384,521}` stanzas using:
//! - ephemeral-static ECDH on the key's own curve
//! - HKDF-SHA256 for wrap-key derivation
//! - ChaCha20-Poly1305 for encryption
//!
//! Points are carried as compressed SEC1 encodings. The functions are generic
//! over the curve; the stanza label keeps the curves apart.

use elliptic_curve::ecdh::diffie_hellman;
use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, PublicKey, SecretKey};
use zeroize::Zeroize;

use crate::core::error::{SshKemError, SshKemResult};
use crate::core::operations::kdf::{derive_wrap_key, open_file_key, seal_file_key};
use crate::core::operations::rng::fill_random;
use crate::core::types::{EcdsaPublicKey, EcdsaSecretKey, FileKey};

/// Upper bound on rejection-sampling rounds for an ephemeral scalar.
const MAX_SCALAR_ATTEMPTS: usize = 64;

/// Output type for wrap operation: (compressed ephemeral_pk, body).
pub(crate) type WrapOutput = (Vec<u8>, Vec<u8>);

/// Draws a uniformly random secret scalar by rejection sampling.
///
/// `top_byte_mask` clears the unused high bits of curves whose order is not
/// byte aligned (P-521).
fn random_secret_key<C>(top_byte_mask: u8) -> SshKemResult<SecretKey<C>>
where
    C: CurveArithmetic,
{
    let mut bytes = FieldBytes::<C>::default();
    for _ in 0..MAX_SCALAR_ATTEMPTS {
        fill_random(&mut bytes)?;
        bytes[0] &= top_byte_mask;
        if let Ok(secret) = SecretKey::<C>::from_bytes(&bytes) {
            bytes.as_mut_slice().zeroize();
            return Ok(secret);
        }
    }
    bytes.as_mut_slice().zeroize();
    Err(SshKemError::RandomnessUnavailable)
}

fn wrap_on_curve<C>(
    file_key: &FileKey,
    recipient: &PublicKey<C>,
    domain: &str,
    top_byte_mask: u8,
) -> SshKemResult<WrapOutput>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let recipient_pk = recipient.to_encoded_point(true);

    // Generate ephemeral keypair
    let ephemeral_secret = random_secret_key::<C>(top_byte_mask)?;
    let ephemeral_pk = ephemeral_secret.public_key().to_encoded_point(true);

    // Compute shared secret via ECDH
    let shared_secret = diffie_hellman(ephemeral_secret.to_nonzero_scalar(), recipient.as_affine());
    drop(ephemeral_secret);

    let wrap_key = derive_wrap_key(
        shared_secret.raw_secret_bytes(),
        ephemeral_pk.as_bytes(),
        recipient_pk.as_bytes(),
        domain,
    )
    .ok_or(SshKemError::EncryptionError)?;
    let body = seal_file_key(&wrap_key, file_key)?;

    Ok((ephemeral_pk.as_bytes().to_vec(), body))
}

fn unwrap_on_curve<C>(
    ephemeral_pk: &[u8],
    body: &[u8],
    recipient: &SecretKey<C>,
    domain: &str,
) -> SshKemResult<FileKey>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let recipient_pk = recipient.public_key().to_encoded_point(true);

    // Only the compressed form is ever produced; reject everything else so
    // each ephemeral key has a single valid encoding.
    let expected_len = recipient_pk.as_bytes().len();
    if ephemeral_pk.len() != expected_len {
        return Err(SshKemError::DecryptionError);
    }
    let ephemeral_public =
        PublicKey::<C>::from_sec1_bytes(ephemeral_pk).map_err(|_| SshKemError::DecryptionError)?;

    let shared_secret = diffie_hellman(recipient.to_nonzero_scalar(), ephemeral_public.as_affine());

    let wrap_key = derive_wrap_key(
        shared_secret.raw_secret_bytes(),
        ephemeral_pk,
        recipient_pk.as_bytes(),
        domain,
    )
    .ok_or(SshKemError::DecryptionError)?;
    open_file_key(&wrap_key, body)
}

/// Wraps a file key with a recipient's ECDSA public key.
///
/// # Returns
///
/// A tuple of (compressed ephemeral public key, ciphertext || tag).
pub fn wrap_ecdh(
    file_key: &FileKey,
    recipient: &EcdsaPublicKey,
    domain: &str,
) -> SshKemResult<WrapOutput> {
    match recipient {
        EcdsaPublicKey::P256(key) => wrap_on_curve(file_key, key, domain, 0xff),
        EcdsaPublicKey::P384(key) => wrap_on_curve(file_key, key, domain, 0xff),
        EcdsaPublicKey::P521(key) => wrap_on_curve(file_key, key, domain, 0x01),
    }
}

/// Unwraps a file key with the recipient's ECDSA secret key.
pub fn unwrap_ecdh(
    ephemeral_pk: &[u8],
    body: &[u8],
    recipient: &EcdsaSecretKey,
    domain: &str,
) -> SshKemResult<FileKey> {
    match recipient {
        EcdsaSecretKey::P256(key) => unwrap_on_curve(ephemeral_pk, body, key, domain),
        EcdsaSecretKey::P384(key) => unwrap_on_curve(ephemeral_pk, body, key, domain),
        EcdsaSecretKey::P521(key) => unwrap_on_curve(ephemeral_pk, body, key, domain),
    }
}
