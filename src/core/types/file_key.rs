//! `FileKey` - the symmetric secret that recipients wrap.

use core::fmt::{self, Debug};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::error::{SshKemError, SshKemResult};
use crate::core::operations::rng::fill_random;

/// File key size in bytes.
pub const FILE_KEY_SIZE: usize = 16;

/// An opaque 16-byte file key.
///
/// # Security
///
/// - Zeroized on drop
/// - Debug output is redacted
/// - Equality is constant-time
///
/// # Example
///
/// ```rust
/// use sshkem::FileKey;
///
/// let file_key = FileKey::generate()?;
/// assert_eq!(file_key.as_bytes().len(), 16);
/// assert!(format!("{file_key:?}").contains("[REDACTED]"));
/// # Ok::<(), sshkem::SshKemError>(())
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FileKey([u8; FILE_KEY_SIZE]);

impl FileKey {
    /// Generates a random file key from the operating system CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns `SshKemError::RandomnessUnavailable` if the CSPRNG fails.
    pub fn generate() -> SshKemResult<Self> {
        let mut key = Self([0u8; FILE_KEY_SIZE]);
        fill_random(&mut key.0)?;
        Ok(key)
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FILE_KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; FILE_KEY_SIZE]> for FileKey {
    fn from(key: [u8; FILE_KEY_SIZE]) -> Self {
        Self(key)
    }
}

impl TryFrom<&[u8]> for FileKey {
    type Error = SshKemError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let key: [u8; FILE_KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| SshKemError::DecryptionError)?;
        Ok(Self(key))
    }
}

impl AsRef<[u8]> for FileKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for FileKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for FileKey {}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: [u8; FILE_KEY_SIZE] = [
        0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7a, 0x7b, 0x7c, 0x7d, 0x7e,
        0x7f,
    ];

    #[test]
    fn test_from_bytes() {
        let key = FileKey::from(TEST_KEY);
        assert_eq!(key.as_bytes(), &TEST_KEY);
    }

    #[test]
    fn test_try_from_slice() -> SshKemResult<()> {
        let key = FileKey::try_from(&TEST_KEY[..])?;
        assert_eq!(key.as_bytes(), &TEST_KEY);
        Ok(())
    }

    #[test]
    fn test_try_from_wrong_length() {
        let result = FileKey::try_from(&TEST_KEY[..15]);
        assert!(matches!(result, Err(SshKemError::DecryptionError)));

        let result = FileKey::try_from(&[0u8; 32][..]);
        assert!(matches!(result, Err(SshKemError::DecryptionError)));
    }

    #[test]
    fn test_generate_is_random() -> SshKemResult<()> {
        let a = FileKey::generate()?;
        let b = FileKey::generate()?;
        assert_ne!(a, b);
        Ok(())
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = FileKey::from(TEST_KEY);
        let debug_str = format!("{key:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("70"));
    }

    #[test]
    fn test_equality() {
        let a = FileKey::from(TEST_KEY);
        let b = FileKey::from(TEST_KEY);
        assert_eq!(a, b);

        let c = FileKey::from([0u8; FILE_KEY_SIZE]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_as_ref_slice() {
        let key = FileKey::from(TEST_KEY);
        let slice: &[u8] = key.as_ref();
        assert_eq!(slice, &TEST_KEY);
    }
}
