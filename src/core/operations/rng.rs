//! Access to the operating system CSPRNG.
//!
//! Every failure to obtain randomness surfaces as
//! [`SshKemError::RandomnessUnavailable`]; nothing here retries silently.

use rand_core::{OsRng, TryRngCore};

use crate::core::error::{SshKemError, SshKemResult};

/// Fills `dest` with bytes from the operating system CSPRNG.
pub(crate) fn fill_random(dest: &mut [u8]) -> SshKemResult<()> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|_| SshKemError::RandomnessUnavailable)
}

/// A `rand_core` 0.6 RNG over the operating system CSPRNG that latches
/// failures.
///
/// `rsa` and `x25519-dalek` draw randomness through the infallible
/// `fill_bytes`. A failed draw leaves zeroes behind and marks the generator
/// as poisoned; callers must check [`LatchedRng::finish`] and discard the
/// output of any operation that ran on a poisoned generator.
#[cfg(any(feature = "rsa", feature = "ed25519"))]
#[derive(Debug, Default)]
pub(crate) struct LatchedRng {
    failed: bool,
}

#[cfg(any(feature = "rsa", feature = "ed25519"))]
impl LatchedRng {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns an error if any draw failed.
    pub(crate) fn finish(self) -> SshKemResult<()> {
        if self.failed {
            Err(SshKemError::RandomnessUnavailable)
        } else {
            Ok(())
        }
    }
}

#[cfg(any(feature = "rsa", feature = "ed25519"))]
impl rand_core_06::RngCore for LatchedRng {
    fn next_u32(&mut self) -> u32 {
        rand_core_06::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core_06::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if self.try_fill_bytes(dest).is_err() {
            dest.fill(0);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core_06::Error> {
        OsRng.try_fill_bytes(dest).map_err(|err| {
            self.failed = true;
            rand_core_06::Error::new(err)
        })
    }
}

#[cfg(any(feature = "rsa", feature = "ed25519"))]
impl rand_core_06::CryptoRng for LatchedRng {}
