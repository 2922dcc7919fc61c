//! Cryptographic operations.
//!
//! - [`fingerprint`] - Public key fingerprints
//! - `kdf` - Wrap-key derivation and file-key encryption (ECDH families)
//! - [`kem`] - Per-family wrap/unwrap
//! - `rng` - Operating system randomness

pub mod fingerprint;
#[cfg(any(feature = "ed25519", feature = "ecdsa"))]
pub mod kdf;
pub mod kem;
pub(crate) mod rng;
