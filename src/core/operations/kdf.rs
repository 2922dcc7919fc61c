//! Wrap-key derivation and file-key encryption shared by the ECDH paths.
//!
//! - HKDF-SHA256 with `salt = ephemeral_pk || static_pk` and the
//!   domain-separation string as `info`
//! - ChaCha20-Poly1305 with an all-zero nonce (every wrap key is fresh)

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::core::error::{SshKemError, SshKemResult};
use crate::core::types::{FileKey, FILE_KEY_SIZE};

/// Size of the derived wrap key.
pub const WRAP_KEY_SIZE: usize = 32;

/// Size of the Poly1305 tag appended to the wrapped file key.
pub const TAG_SIZE: usize = 16;

/// Size of an ECDH stanza body: wrapped file key plus tag.
pub const WRAPPED_KEY_SIZE: usize = FILE_KEY_SIZE + TAG_SIZE;

/// Derives the wrap key from an ECDH shared secret.
pub(crate) fn derive_wrap_key(
    shared_secret: &[u8],
    ephemeral_pk: &[u8],
    static_pk: &[u8],
    domain: &str,
) -> Option<Zeroizing<[u8; WRAP_KEY_SIZE]>> {
    let mut salt = Vec::with_capacity(ephemeral_pk.len() + static_pk.len());
    salt.extend_from_slice(ephemeral_pk);
    salt.extend_from_slice(static_pk);

    let hkdf = Hkdf::<Sha256>::new(Some(&salt), shared_secret);
    let mut wrap_key = Zeroizing::new([0u8; WRAP_KEY_SIZE]);
    hkdf.expand(domain.as_bytes(), &mut wrap_key[..]).ok()?;
    Some(wrap_key)
}

/// Encrypts the file key under a fresh wrap key.
pub(crate) fn seal_file_key(
    wrap_key: &[u8; WRAP_KEY_SIZE],
    file_key: &FileKey,
) -> SshKemResult<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(wrap_key));
    cipher
        .encrypt(&Nonce::default(), file_key.as_bytes().as_slice())
        .map_err(|_| SshKemError::EncryptionError)
}

/// Decrypts and authenticates a wrapped file key.
pub(crate) fn open_file_key(
    wrap_key: &[u8; WRAP_KEY_SIZE],
    body: &[u8],
) -> SshKemResult<FileKey> {
    if body.len() != WRAPPED_KEY_SIZE {
        return Err(SshKemError::DecryptionError);
    }

    let cipher = ChaCha20Poly1305::new(Key::from_slice(wrap_key));
    let plaintext = Zeroizing::new(
        cipher
            .decrypt(&Nonce::default(), body)
            .map_err(|_| SshKemError::DecryptionError)?,
    );
    FileKey::try_from(plaintext.as_slice()).map_err(|_| SshKemError::DecryptionError)
}
