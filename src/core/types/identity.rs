//! `Identity` - the private half that unwraps stanzas.

use core::fmt::{self, Debug};

use crate::core::error::{SshKemError, SshKemResult};
use crate::core::stanza::Stanza;
use crate::core::types::{FileKey, PrivateKeyMaterial, Recipient};

#[cfg(any(feature = "ed25519", feature = "ecdsa"))]
use base64::prelude::*;

#[cfg(feature = "ecdsa")]
use crate::core::types::EcdsaSecretKey;

/// An SSH private key ready to unwrap stanzas.
///
/// An identity always carries the [`Recipient`] derived from its own public
/// key, so the stanza label and fingerprint it answers to are exactly those
/// the recipient writes.
///
/// # Unwrap policy
///
/// Stanzas are scanned in order. A stanza is *addressed* to the identity when
/// its label, argument count and fingerprint match. The first addressed
/// stanza that decrypts wins. If none is addressed the result is
/// [`SshKemError::NoMatch`]; if some were addressed but none decrypted it is
/// [`SshKemError::DecryptionError`].
#[derive(Clone)]
pub struct Identity {
    key: PrivateKeyMaterial,
    recipient: Recipient,
}

impl Identity {
    /// Creates an identity from an RSA private key.
    ///
    /// # Errors
    ///
    /// Returns `SshKemError::UnsupportedKeyType` for moduli under 2048 bits.
    #[cfg(feature = "rsa")]
    pub fn rsa(key: rsa::RsaPrivateKey) -> SshKemResult<Self> {
        Self::try_from(PrivateKeyMaterial::Rsa(key))
    }

    /// Creates an identity from an Ed25519 signing key.
    ///
    /// # Errors
    ///
    /// Returns `SshKemError::UnsupportedKeyType` for weak public keys.
    #[cfg(feature = "ed25519")]
    pub fn ed25519(key: ed25519_dalek::SigningKey) -> SshKemResult<Self> {
        Self::try_from(PrivateKeyMaterial::Ed25519(key))
    }

    /// Creates an identity from an ECDSA secret key on P-256, P-384 or P-521.
    ///
    /// # Errors
    ///
    /// Never fails for the supported curves; the `Result` keeps the
    /// constructors uniform.
    #[cfg(feature = "ecdsa")]
    pub fn ecdsa(key: impl Into<EcdsaSecretKey>) -> SshKemResult<Self> {
        Self::try_from(PrivateKeyMaterial::Ecdsa(key.into()))
    }

    /// Returns the recipient for this identity's public key.
    #[must_use]
    pub const fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// Unwraps the file key from the first stanza addressed to this identity.
    ///
    /// # Errors
    ///
    /// - `SshKemError::NoMatch` if no stanza is addressed to this identity
    /// - `SshKemError::DecryptionError` if addressed stanzas failed to decrypt
    /// - `SshKemError::RandomnessUnavailable` if RSA blinding could not draw
    ///   randomness
    pub fn unwrap(&self, stanzas: &[Stanza]) -> SshKemResult<FileKey> {
        let label = self.recipient.algorithm().label();
        let arity = self.arity();
        let domain = self.recipient.domain();

        let mut addressed = 0usize;
        for (index, stanza) in stanzas.iter().enumerate() {
            let targeted = stanza
                .addressed(label, arity)
                .is_some_and(|fingerprint| self.recipient.fingerprint().matches(fingerprint));
            if !targeted {
                tracing::trace!(index, stanza_label = stanza.label(), "stanza not addressed to identity");
                continue;
            }

            addressed += 1;
            match self.unwrap_addressed(stanza, &domain) {
                Ok(file_key) => {
                    tracing::debug!(index, label, fingerprint = %self.recipient.fingerprint(), "unwrapped file key");
                    return Ok(file_key);
                }
                // Keep scanning: a later stanza may still open.
                Err(SshKemError::DecryptionError) => {}
                Err(err) => return Err(err),
            }
        }

        if addressed == 0 {
            Err(SshKemError::NoMatch)
        } else {
            Err(SshKemError::DecryptionError)
        }
    }

    /// Number of arguments in stanzas of this identity's family.
    fn arity(&self) -> usize {
        match &self.key {
            #[cfg(feature = "rsa")]
            PrivateKeyMaterial::Rsa(_) => 1,
            #[cfg(feature = "ed25519")]
            PrivateKeyMaterial::Ed25519(_) => 2,
            #[cfg(feature = "ecdsa")]
            PrivateKeyMaterial::Ecdsa(_) => 2,
        }
    }

    /// Decrypts a stanza already known to be addressed to this identity.
    fn unwrap_addressed(&self, stanza: &Stanza, domain: &str) -> SshKemResult<FileKey> {
        match &self.key {
            #[cfg(feature = "rsa")]
            PrivateKeyMaterial::Rsa(key) => {
                crate::core::operations::kem::unwrap_rsa(stanza.body(), key, domain)
            }
            #[cfg(feature = "ed25519")]
            PrivateKeyMaterial::Ed25519(key) => {
                use crate::core::operations::kem::EPHEMERAL_PK_SIZE;

                let mut ephemeral_pk = [0u8; EPHEMERAL_PK_SIZE];
                let decoded = decode_ephemeral(&stanza.args()[1], &mut ephemeral_pk)?;
                if decoded != EPHEMERAL_PK_SIZE {
                    return Err(SshKemError::DecryptionError);
                }
                crate::core::operations::kem::unwrap_x25519(&ephemeral_pk, stanza.body(), key, domain)
            }
            #[cfg(feature = "ecdsa")]
            PrivateKeyMaterial::Ecdsa(key) => {
                // Large enough for a compressed P-521 point.
                let mut ephemeral_pk = [0u8; 67];
                let decoded = decode_ephemeral(&stanza.args()[1], &mut ephemeral_pk)?;
                crate::core::operations::kem::unwrap_ecdh(
                    &ephemeral_pk[..decoded],
                    stanza.body(),
                    key,
                    domain,
                )
            }
        }
    }
}

/// Decodes a base64 ephemeral public key argument into `out`.
#[cfg(any(feature = "ed25519", feature = "ecdsa"))]
fn decode_ephemeral(encoded: &str, out: &mut [u8]) -> SshKemResult<usize> {
    BASE64_STANDARD_NO_PAD
        .decode_slice(encoded, out)
        .map_err(|_| SshKemError::DecryptionError)
}

// =============================================================================
// TryFrom (validated construction)
// =============================================================================

impl TryFrom<PrivateKeyMaterial> for Identity {
    type Error = SshKemError;

    fn try_from(key: PrivateKeyMaterial) -> Result<Self, Self::Error> {
        let recipient = Recipient::try_from(key.public_key())?;
        Ok(Self { key, recipient })
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("algorithm", &self.recipient.algorithm().label())
            .field("fingerprint", self.recipient.fingerprint())
            .field("key", &"[REDACTED]")
            .finish()
    }
}
