//! Public key fingerprints.
//!
//! A fingerprint is the first [`FINGERPRINT_SIZE`] bytes of SHA-256 over the
//! SSH wire encoding of a public key. It routes stanzas to the identity that
//! can open them and is bound into every key derivation. It is not a security
//! boundary on its own: guessing one does not help decrypt anything.

use core::fmt::{self, Debug, Display};

use base64::prelude::*;
use sha2::{Digest, Sha256};

/// Fingerprint size in bytes.
pub const FINGERPRINT_SIZE: usize = 4;

/// A short, stable tag derived from a marshalled SSH public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_SIZE]);

impl Fingerprint {
    /// Computes the fingerprint of an SSH wire-format public key blob.
    #[must_use]
    pub fn of(ssh_public_key: &[u8]) -> Self {
        let digest = Sha256::digest(ssh_public_key);
        let mut tag = [0u8; FINGERPRINT_SIZE];
        tag.copy_from_slice(&digest[..FINGERPRINT_SIZE]);
        Self(tag)
    }

    /// Returns the raw fingerprint bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FINGERPRINT_SIZE] {
        &self.0
    }

    /// Returns true if `text` is this fingerprint's text form.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        let mut decoded = [0u8; FINGERPRINT_SIZE];
        matches!(
            BASE64_STANDARD_NO_PAD.decode_slice(text, &mut decoded),
            Ok(FINGERPRINT_SIZE)
        ) && decoded == self.0
    }
}

/// Text form: standard base64 without padding.
impl Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BASE64_STANDARD_NO_PAD.encode(self.0))
    }
}

impl Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fingerprint").field(&self.to_string()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_deterministic() {
        let blob = b"\x00\x00\x00\x0bssh-ed25519\x00\x00\x00\x20abcdefghijklmnopqrstuvwxyz012345";
        assert_eq!(Fingerprint::of(blob), Fingerprint::of(&blob.to_vec()));
    }

    #[test]
    fn test_fingerprint_differs() {
        assert_ne!(Fingerprint::of(b"key one"), Fingerprint::of(b"key two"));
    }

    #[test]
    fn test_fingerprint_text_form() {
        // SHA-256("") = e3b0c442...
        let fp = Fingerprint::of(b"");
        assert_eq!(fp.as_bytes(), &[0xe3, 0xb0, 0xc4, 0x42]);
        assert_eq!(fp.to_string(), "47DEQg");
        assert_eq!(fp.to_string().len(), 6);
    }

    #[test]
    fn test_matches() {
        let fp = Fingerprint::of(b"");
        assert!(fp.matches("47DEQg"));
        assert!(!fp.matches("47DEQh"));
        assert!(!fp.matches("47DEQg=="));
        assert!(!fp.matches("47DE"));
        assert!(!fp.matches(""));
    }

    #[test]
    fn test_debug_shows_text_form() {
        let fp = Fingerprint::of(b"");
        assert_eq!(format!("{fp:?}"), "Fingerprint(\"47DEQg\")");
    }
}
