//! RSA-OAEP file-key wrapping.
//!
//! This module implements the `ssh-rsa` stanza using:
//! - RSA-OAEP with SHA-256 (hash and MGF1)
//! - the domain-separation string as the OAEP label
//!
//! No ephemeral key is involved: OAEP's internal randomness already makes
//! every ciphertext unique.
//!
//! # Security Warning
//!
//! **The `rsa` crate is vulnerable to [RUSTSEC-2023-0071] (Marvin Attack).**
//! [`unwrap_rsa`] uses blinded decryption, which does not close the timing
//! side channel. Use Ed25519 or ECDSA keys where possible.
//!
//! [RUSTSEC-2023-0071]: https://rustsec.org/advisories/RUSTSEC-2023-0071

use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::core::error::{SshKemError, SshKemResult};
use crate::core::operations::rng::LatchedRng;
use crate::core::types::FileKey;

/// Smallest accepted modulus size in bits.
pub const MIN_RSA_MODULUS_BITS: usize = 2048;

/// Rejects moduli that are too small to wrap file keys safely.
pub(crate) fn check_modulus(key: &RsaPublicKey) -> SshKemResult<()> {
    let bits = key.n().bits();
    if bits < MIN_RSA_MODULUS_BITS {
        return Err(SshKemError::UnsupportedKeyType(format!(
            "ssh-rsa key of {bits} bits, at least {MIN_RSA_MODULUS_BITS} required"
        )));
    }
    Ok(())
}

/// Wraps a file key with a recipient's RSA public key.
///
/// # Returns
///
/// The OAEP ciphertext, exactly one modulus long.
pub fn wrap_rsa(file_key: &FileKey, recipient: &RsaPublicKey, domain: &str) -> SshKemResult<Vec<u8>> {
    let padding = Oaep::new_with_label::<Sha256, _>(domain);
    let mut rng = LatchedRng::new();

    let result = recipient.encrypt(&mut rng, padding, file_key.as_bytes());

    // A ciphertext produced with missing randomness is never released.
    rng.finish()?;
    result.map_err(|_| SshKemError::EncryptionError)
}

/// Unwraps a file key with the recipient's RSA private key.
///
/// Decryption is blinded, which does not remove the RUSTSEC-2023-0071 timing
/// side channel (see the module docs).
pub fn unwrap_rsa(body: &[u8], recipient: &RsaPrivateKey, domain: &str) -> SshKemResult<FileKey> {
    if body.len() != recipient.size() {
        return Err(SshKemError::DecryptionError);
    }

    let padding = Oaep::new_with_label::<Sha256, _>(domain);
    let mut rng = LatchedRng::new();

    let result = recipient.decrypt_blinded(&mut rng, padding, body);

    rng.finish()?;
    let plaintext = Zeroizing::new(result.map_err(|_| SshKemError::DecryptionError)?);
    FileKey::try_from(plaintext.as_slice())
}
