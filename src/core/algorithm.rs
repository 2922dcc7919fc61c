//! SSH key algorithm tags.
//!
//! Every supported key family maps to exactly one SSH algorithm name. The
//! name doubles as the stanza label, so stanzas produced for one family (or
//! one curve) are never attempted by an identity of another.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::core::error::SshKemError;

/// Prefix of every domain-separation string.
pub const DOMAIN_PREFIX: &str = "sshkem.v1/";

/// The closed set of SSH key algorithms that can wrap file keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    /// RSA with OAEP-SHA256.
    Rsa,
    /// Ed25519 converted to X25519.
    Ed25519,
    /// ECDSA key over NIST P-256 used for ECDH.
    EcdsaP256,
    /// ECDSA key over NIST P-384 used for ECDH.
    EcdsaP384,
    /// ECDSA key over NIST P-521 used for ECDH.
    EcdsaP521,
}

impl KeyAlgorithm {
    /// All algorithms, in a stable order.
    pub const ALL: [Self; 5] = [
        Self::Rsa,
        Self::Ed25519,
        Self::EcdsaP256,
        Self::EcdsaP384,
        Self::EcdsaP521,
    ];

    /// The SSH algorithm name, used as the stanza label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rsa => "ssh-rsa",
            Self::Ed25519 => "ssh-ed25519",
            Self::EcdsaP256 => "ecdsa-sha2-nistp256",
            Self::EcdsaP384 => "ecdsa-sha2-nistp384",
            Self::EcdsaP521 => "ecdsa-sha2-nistp521",
        }
    }

    /// The SSH curve identifier for ECDSA keys (e.g. "nistp256").
    #[must_use]
    pub const fn curve_identifier(self) -> Option<&'static str> {
        match self {
            Self::EcdsaP256 => Some("nistp256"),
            Self::EcdsaP384 => Some("nistp384"),
            Self::EcdsaP521 => Some("nistp521"),
            Self::Rsa | Self::Ed25519 => None,
        }
    }

    /// Builds the domain-separation string bound into every derivation.
    ///
    /// Format: `sshkem.v1/{label} {fingerprint}`
    #[must_use]
    pub fn domain(self, fingerprint: &str) -> String {
        format!("{DOMAIN_PREFIX}{} {fingerprint}", self.label())
    }
}

impl Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for KeyAlgorithm {
    type Err = SshKemError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.label() == name)
            .ok_or_else(|| SshKemError::UnsupportedKeyType(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(KeyAlgorithm::Rsa.label(), "ssh-rsa");
        assert_eq!(KeyAlgorithm::Ed25519.label(), "ssh-ed25519");
        assert_eq!(KeyAlgorithm::EcdsaP256.label(), "ecdsa-sha2-nistp256");
        assert_eq!(KeyAlgorithm::EcdsaP384.label(), "ecdsa-sha2-nistp384");
        assert_eq!(KeyAlgorithm::EcdsaP521.label(), "ecdsa-sha2-nistp521");
    }

    #[test]
    fn test_labels_are_distinct_and_whitespace_free() {
        for (i, a) in KeyAlgorithm::ALL.iter().enumerate() {
            assert!(!a.label().contains(char::is_whitespace));
            for b in &KeyAlgorithm::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_parse_roundtrip() -> Result<(), SshKemError> {
        for algorithm in KeyAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<KeyAlgorithm>()?, algorithm);
        }
        Ok(())
    }

    #[test]
    fn test_parse_unsupported() {
        let result = "ssh-dss".parse::<KeyAlgorithm>();
        assert!(matches!(result, Err(SshKemError::UnsupportedKeyType(name)) if name == "ssh-dss"));
    }

    #[test]
    fn test_curve_identifier() {
        assert_eq!(KeyAlgorithm::EcdsaP384.curve_identifier(), Some("nistp384"));
        assert_eq!(KeyAlgorithm::Rsa.curve_identifier(), None);
    }

    #[test]
    fn test_domain() {
        assert_eq!(
            KeyAlgorithm::Ed25519.domain("bbXpuA"),
            "sshkem.v1/ssh-ed25519 bbXpuA"
        );
    }
}
