//! Typed SSH key material.
//!
//! Keys arrive already parsed, as RustCrypto / dalek types. This module groups
//! them into closed enums and knows how to marshal the public half into the
//! SSH wire format that fingerprints are computed over.

use core::fmt::{self, Debug};

use crate::core::algorithm::KeyAlgorithm;
#[cfg(feature = "ecdsa")]
use crate::core::error::{SshKemError, SshKemResult};
use crate::core::ssh::put_string;

#[cfg(feature = "ecdsa")]
use elliptic_curve::sec1::ToEncodedPoint;

// =============================================================================
// ECDSA keys
// =============================================================================

/// An ECDSA public key over one of the supported NIST curves.
#[cfg(feature = "ecdsa")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EcdsaPublicKey {
    /// NIST P-256.
    P256(p256::PublicKey),
    /// NIST P-384.
    P384(p384::PublicKey),
    /// NIST P-521.
    P521(p521::PublicKey),
}

#[cfg(feature = "ecdsa")]
impl EcdsaPublicKey {
    /// Parses a SEC1-encoded point for the curve named by an SSH algorithm.
    ///
    /// # Errors
    ///
    /// Returns `SshKemError::UnsupportedKeyType` if `algorithm` is not an
    /// ECDSA algorithm or the point is not valid on that curve.
    pub fn from_sec1_bytes(algorithm: KeyAlgorithm, point: &[u8]) -> SshKemResult<Self> {
        let invalid = || SshKemError::UnsupportedKeyType(format!("invalid {algorithm} point"));
        match algorithm {
            KeyAlgorithm::EcdsaP256 => p256::PublicKey::from_sec1_bytes(point)
                .map(Self::P256)
                .map_err(|_| invalid()),
            KeyAlgorithm::EcdsaP384 => p384::PublicKey::from_sec1_bytes(point)
                .map(Self::P384)
                .map_err(|_| invalid()),
            KeyAlgorithm::EcdsaP521 => p521::PublicKey::from_sec1_bytes(point)
                .map(Self::P521)
                .map_err(|_| invalid()),
            KeyAlgorithm::Rsa | KeyAlgorithm::Ed25519 => {
                Err(SshKemError::UnsupportedKeyType(algorithm.to_string()))
            }
        }
    }

    /// Returns the algorithm tag for this curve.
    #[must_use]
    pub const fn algorithm(&self) -> KeyAlgorithm {
        match self {
            Self::P256(_) => KeyAlgorithm::EcdsaP256,
            Self::P384(_) => KeyAlgorithm::EcdsaP384,
            Self::P521(_) => KeyAlgorithm::EcdsaP521,
        }
    }

    /// Returns the SEC1 encoding of the point.
    #[must_use]
    pub fn to_sec1_bytes(&self, compress: bool) -> Vec<u8> {
        match self {
            Self::P256(key) => key.to_encoded_point(compress).as_bytes().to_vec(),
            Self::P384(key) => key.to_encoded_point(compress).as_bytes().to_vec(),
            Self::P521(key) => key.to_encoded_point(compress).as_bytes().to_vec(),
        }
    }
}

#[cfg(feature = "ecdsa")]
impl From<p256::PublicKey> for EcdsaPublicKey {
    fn from(key: p256::PublicKey) -> Self {
        Self::P256(key)
    }
}

#[cfg(feature = "ecdsa")]
impl From<p384::PublicKey> for EcdsaPublicKey {
    fn from(key: p384::PublicKey) -> Self {
        Self::P384(key)
    }
}

#[cfg(feature = "ecdsa")]
impl From<p521::PublicKey> for EcdsaPublicKey {
    fn from(key: p521::PublicKey) -> Self {
        Self::P521(key)
    }
}

/// An ECDSA secret key over one of the supported NIST curves.
///
/// The inner keys zeroize themselves on drop.
#[cfg(feature = "ecdsa")]
#[derive(Clone)]
pub enum EcdsaSecretKey {
    /// NIST P-256.
    P256(p256::SecretKey),
    /// NIST P-384.
    P384(p384::SecretKey),
    /// NIST P-521.
    P521(p521::SecretKey),
}

#[cfg(feature = "ecdsa")]
impl EcdsaSecretKey {
    /// Returns the matching public key.
    #[must_use]
    pub fn public_key(&self) -> EcdsaPublicKey {
        match self {
            Self::P256(key) => EcdsaPublicKey::P256(key.public_key()),
            Self::P384(key) => EcdsaPublicKey::P384(key.public_key()),
            Self::P521(key) => EcdsaPublicKey::P521(key.public_key()),
        }
    }
}

#[cfg(feature = "ecdsa")]
impl From<p256::SecretKey> for EcdsaSecretKey {
    fn from(key: p256::SecretKey) -> Self {
        Self::P256(key)
    }
}

#[cfg(feature = "ecdsa")]
impl From<p384::SecretKey> for EcdsaSecretKey {
    fn from(key: p384::SecretKey) -> Self {
        Self::P384(key)
    }
}

#[cfg(feature = "ecdsa")]
impl From<p521::SecretKey> for EcdsaSecretKey {
    fn from(key: p521::SecretKey) -> Self {
        Self::P521(key)
    }
}

#[cfg(feature = "ecdsa")]
impl Debug for EcdsaSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdsaSecretKey")
            .field("algorithm", &self.public_key().algorithm().label())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// Public key material
// =============================================================================

/// A public key of any supported family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyMaterial {
    /// RSA public key.
    #[cfg(feature = "rsa")]
    Rsa(rsa::RsaPublicKey),
    /// Ed25519 verifying key.
    #[cfg(feature = "ed25519")]
    Ed25519(ed25519_dalek::VerifyingKey),
    /// ECDSA public key.
    #[cfg(feature = "ecdsa")]
    Ecdsa(EcdsaPublicKey),
}

impl PublicKeyMaterial {
    /// Returns the algorithm tag.
    #[must_use]
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            #[cfg(feature = "rsa")]
            Self::Rsa(_) => KeyAlgorithm::Rsa,
            #[cfg(feature = "ed25519")]
            Self::Ed25519(_) => KeyAlgorithm::Ed25519,
            #[cfg(feature = "ecdsa")]
            Self::Ecdsa(key) => key.algorithm(),
        }
    }

    /// Marshals the key into the SSH wire format.
    ///
    /// - RSA: `string "ssh-rsa" || mpint e || mpint n`
    /// - Ed25519: `string "ssh-ed25519" || string key`
    /// - ECDSA: `string name || string curve || string uncompressed_point`
    #[must_use]
    pub fn to_ssh_wire(&self) -> Vec<u8> {
        let mut blob = Vec::new();
        put_string(&mut blob, self.algorithm().label().as_bytes());

        match self {
            #[cfg(feature = "rsa")]
            Self::Rsa(key) => {
                use rsa::traits::PublicKeyParts;

                crate::core::ssh::put_mpint(&mut blob, &key.e().to_bytes_be());
                crate::core::ssh::put_mpint(&mut blob, &key.n().to_bytes_be());
            }
            #[cfg(feature = "ed25519")]
            Self::Ed25519(key) => put_string(&mut blob, key.as_bytes()),
            #[cfg(feature = "ecdsa")]
            Self::Ecdsa(key) => {
                let curve = key.algorithm().curve_identifier().unwrap_or_default();
                put_string(&mut blob, curve.as_bytes());
                put_string(&mut blob, &key.to_sec1_bytes(false));
            }
        }

        blob
    }
}

#[cfg(feature = "rsa")]
impl From<rsa::RsaPublicKey> for PublicKeyMaterial {
    fn from(key: rsa::RsaPublicKey) -> Self {
        Self::Rsa(key)
    }
}

#[cfg(feature = "ed25519")]
impl From<ed25519_dalek::VerifyingKey> for PublicKeyMaterial {
    fn from(key: ed25519_dalek::VerifyingKey) -> Self {
        Self::Ed25519(key)
    }
}

#[cfg(feature = "ecdsa")]
impl From<EcdsaPublicKey> for PublicKeyMaterial {
    fn from(key: EcdsaPublicKey) -> Self {
        Self::Ecdsa(key)
    }
}

// =============================================================================
// Private key material
// =============================================================================

/// A private key of any supported family.
#[derive(Clone)]
pub enum PrivateKeyMaterial {
    /// RSA private key.
    #[cfg(feature = "rsa")]
    Rsa(rsa::RsaPrivateKey),
    /// Ed25519 signing key.
    #[cfg(feature = "ed25519")]
    Ed25519(ed25519_dalek::SigningKey),
    /// ECDSA secret key.
    #[cfg(feature = "ecdsa")]
    Ecdsa(EcdsaSecretKey),
}

impl PrivateKeyMaterial {
    /// Returns the matching public key.
    #[must_use]
    pub fn public_key(&self) -> PublicKeyMaterial {
        match self {
            #[cfg(feature = "rsa")]
            Self::Rsa(key) => PublicKeyMaterial::Rsa(key.to_public_key()),
            #[cfg(feature = "ed25519")]
            Self::Ed25519(key) => PublicKeyMaterial::Ed25519(key.verifying_key()),
            #[cfg(feature = "ecdsa")]
            Self::Ecdsa(key) => PublicKeyMaterial::Ecdsa(key.public_key()),
        }
    }
}

#[cfg(feature = "rsa")]
impl From<rsa::RsaPrivateKey> for PrivateKeyMaterial {
    fn from(key: rsa::RsaPrivateKey) -> Self {
        Self::Rsa(key)
    }
}

#[cfg(feature = "ed25519")]
impl From<ed25519_dalek::SigningKey> for PrivateKeyMaterial {
    fn from(key: ed25519_dalek::SigningKey) -> Self {
        Self::Ed25519(key)
    }
}

#[cfg(feature = "ecdsa")]
impl From<EcdsaSecretKey> for PrivateKeyMaterial {
    fn from(key: EcdsaSecretKey) -> Self {
        Self::Ecdsa(key)
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for PrivateKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeyMaterial")
            .field("algorithm", &self.public_key().algorithm().label())
            .field("key", &"[REDACTED]")
            .finish()
    }
}
