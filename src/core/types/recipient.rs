//! `Recipient` - the public half that wraps file keys into stanzas.

#[cfg(any(feature = "ed25519", feature = "ecdsa"))]
use base64::prelude::*;

use crate::core::algorithm::KeyAlgorithm;
use crate::core::error::{SshKemError, SshKemResult};
use crate::core::operations::fingerprint::Fingerprint;
use crate::core::stanza::Stanza;
use crate::core::types::{FileKey, PublicKeyMaterial};

#[cfg(feature = "ecdsa")]
use crate::core::types::EcdsaPublicKey;

/// An SSH public key ready to wrap file keys.
///
/// Recipients are immutable and may be shared across threads. The SSH wire
/// encoding and the fingerprint are computed once at construction.
///
/// # Example
///
/// ```rust
/// use ed25519_dalek::SigningKey;
/// use sshkem::{FileKey, Identity, Recipient};
///
/// let signing_key = SigningKey::from_bytes(&[0x01; 32]);
/// let recipient = Recipient::ed25519(&signing_key.verifying_key())?;
/// let identity = Identity::ed25519(signing_key)?;
///
/// let file_key = FileKey::generate()?;
/// let stanzas = recipient.wrap(&file_key)?;
/// assert_eq!(stanzas[0].label(), "ssh-ed25519");
///
/// assert_eq!(identity.unwrap(&stanzas)?, file_key);
/// # Ok::<(), sshkem::SshKemError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    key: PublicKeyMaterial,
    ssh_public_key: Vec<u8>,
    fingerprint: Fingerprint,
}

impl Recipient {
    /// Creates a recipient from an RSA public key.
    ///
    /// # Errors
    ///
    /// Returns `SshKemError::UnsupportedKeyType` for moduli under 2048 bits.
    #[cfg(feature = "rsa")]
    pub fn rsa(key: &rsa::RsaPublicKey) -> SshKemResult<Self> {
        Self::try_from(PublicKeyMaterial::Rsa(key.clone()))
    }

    /// Creates a recipient from an Ed25519 public key.
    ///
    /// # Errors
    ///
    /// Returns `SshKemError::UnsupportedKeyType` for weak (small-order) keys.
    #[cfg(feature = "ed25519")]
    pub fn ed25519(key: &ed25519_dalek::VerifyingKey) -> SshKemResult<Self> {
        Self::try_from(PublicKeyMaterial::Ed25519(*key))
    }

    /// Creates a recipient from an ECDSA public key on P-256, P-384 or P-521.
    ///
    /// # Errors
    ///
    /// Never fails for the supported curves; the `Result` keeps the
    /// constructors uniform.
    #[cfg(feature = "ecdsa")]
    pub fn ecdsa(key: impl Into<EcdsaPublicKey>) -> SshKemResult<Self> {
        Self::try_from(PublicKeyMaterial::Ecdsa(key.into()))
    }

    /// Returns the algorithm tag, which is also the stanza label.
    #[must_use]
    pub fn algorithm(&self) -> KeyAlgorithm {
        self.key.algorithm()
    }

    /// Returns the fingerprint carried as the first stanza argument.
    #[must_use]
    pub const fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Returns the typed public key.
    #[must_use]
    pub const fn public_key(&self) -> &PublicKeyMaterial {
        &self.key
    }

    /// Returns the SSH wire encoding of the public key.
    #[must_use]
    pub fn ssh_public_key(&self) -> &[u8] {
        &self.ssh_public_key
    }

    /// Returns the domain-separation string bound into every derivation.
    pub(crate) fn domain(&self) -> String {
        self.algorithm().domain(&self.fingerprint.to_string())
    }

    /// Wraps a file key into stanzas addressed to this recipient.
    ///
    /// Produces exactly one stanza:
    ///
    /// - `ssh-rsa {fingerprint}` with the OAEP ciphertext as body
    /// - `{label} {fingerprint} {ephemeral_pk}` with the AEAD ciphertext as
    ///   body for Ed25519 and ECDSA keys
    ///
    /// # Errors
    ///
    /// Returns `SshKemError::RandomnessUnavailable` if the CSPRNG fails and
    /// `SshKemError::EncryptionError` for any other encryption failure.
    pub fn wrap(&self, file_key: &FileKey) -> SshKemResult<Vec<Stanza>> {
        let label = self.algorithm().label();
        let fingerprint = self.fingerprint.to_string();
        let domain = self.domain();

        let stanza = match &self.key {
            #[cfg(feature = "rsa")]
            PublicKeyMaterial::Rsa(key) => {
                let body = crate::core::operations::kem::wrap_rsa(file_key, key, &domain)?;
                Stanza::new(label, [fingerprint], body)
            }
            #[cfg(feature = "ed25519")]
            PublicKeyMaterial::Ed25519(key) => {
                let (ephemeral_pk, body) =
                    crate::core::operations::kem::wrap_x25519(file_key, key, &domain)?;
                let ephemeral_pk = BASE64_STANDARD_NO_PAD.encode(ephemeral_pk);
                Stanza::new(label, [fingerprint, ephemeral_pk], body)
            }
            #[cfg(feature = "ecdsa")]
            PublicKeyMaterial::Ecdsa(key) => {
                let (ephemeral_pk, body) =
                    crate::core::operations::kem::wrap_ecdh(file_key, key, &domain)?;
                let ephemeral_pk = BASE64_STANDARD_NO_PAD.encode(ephemeral_pk);
                Stanza::new(label, [fingerprint, ephemeral_pk], body)
            }
        }
        .map_err(|_| SshKemError::EncryptionError)?;

        tracing::debug!(
            label,
            fingerprint = %self.fingerprint,
            body_len = stanza.body().len(),
            "wrapped file key"
        );
        Ok(vec![stanza])
    }
}

// =============================================================================
// TryFrom (validated construction)
// =============================================================================

impl TryFrom<PublicKeyMaterial> for Recipient {
    type Error = SshKemError;

    fn try_from(key: PublicKeyMaterial) -> Result<Self, Self::Error> {
        match &key {
            #[cfg(feature = "rsa")]
            PublicKeyMaterial::Rsa(rsa_key) => crate::core::operations::kem::check_modulus(rsa_key)?,
            #[cfg(feature = "ed25519")]
            PublicKeyMaterial::Ed25519(ed_key) => {
                if ed_key.is_weak() {
                    return Err(SshKemError::UnsupportedKeyType(
                        "small-order ssh-ed25519 key".to_string(),
                    ));
                }
            }
            #[cfg(feature = "ecdsa")]
            PublicKeyMaterial::Ecdsa(_) => {}
        }

        let ssh_public_key = key.to_ssh_wire();
        let fingerprint = Fingerprint::of(&ssh_public_key);
        Ok(Self {
            key,
            ssh_public_key,
            fingerprint,
        })
    }
}
