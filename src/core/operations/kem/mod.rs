//! Key encapsulation for file keys.
//!
//! One submodule per SSH key family:
//!
//! - `oaep` - RSA-OAEP-SHA256 (`ssh-rsa`)
//! - `x25519` - Ed25519 converted to X25519, ephemeral-static ECDH (`ssh-ed25519`)
//! - `ecdh` - NIST-curve ephemeral-static ECDH (`ecdsa-sha2-nistp*`)
//!
//! Every path binds the domain-separation string
//! `sshkem.v1/{label} {fingerprint}` so that ciphertexts are only ever
//! accepted under the exact key and label they were produced for.

#[cfg(feature = "ecdsa")]
mod ecdh;
#[cfg(feature = "rsa")]
mod oaep;
#[cfg(feature = "ed25519")]
mod x25519;

#[cfg(feature = "ecdsa")]
pub use ecdh::{unwrap_ecdh, wrap_ecdh};
#[cfg(feature = "rsa")]
pub use oaep::{unwrap_rsa, wrap_rsa, MIN_RSA_MODULUS_BITS};
#[cfg(feature = "rsa")]
pub(crate) use oaep::check_modulus;
#[cfg(feature = "ed25519")]
pub use x25519::{montgomery_public, unwrap_x25519, wrap_x25519, EPHEMERAL_PK_SIZE};
